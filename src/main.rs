use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use isbn_codec::config::{Config, OutputFormat};
use isbn_codec::services::{self, ConvertRequest, Direction};

#[derive(Parser)]
#[command(name = "isbn-codec", version, about = "Validate and convert ISBN-10 / ISBN-13")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Print the sentinel (all 9s) instead of failing on invalid input
    #[arg(long, global = true)]
    sentinel: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert an ISBN-10 to ISBN-13
    To13 { isbn: String },
    /// Convert a 978 ISBN-13 to ISBN-10
    To10 { isbn: String },
    /// Check an ISBN of either format
    Check { isbn: String },
    /// Convert the built-in sample ISBNs both ways
    Demo,
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let mut config = Config::from_env();

    // Initialize tracing (stderr, so stdout only carries results)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    for warning in &config.warnings {
        tracing::warn!("{}", warning);
    }

    let cli = Cli::parse();
    if cli.json {
        config.output = OutputFormat::Json;
    }
    if cli.sentinel {
        config.sentinel = true;
    }

    match run(cli.command, &config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, config: &Config) -> Result<ExitCode> {
    match command {
        Command::To13 { isbn } => convert(Direction::TenToThirteen, isbn, config),
        Command::To10 { isbn } => convert(Direction::ThirteenToTen, isbn, config),
        Command::Check { isbn } => {
            let report = services::check_isbn(&isbn);
            match config.output {
                OutputFormat::Json => print_json(&report)?,
                OutputFormat::Text => match (&report.error, &report.counterpart) {
                    (None, Some(counterpart)) => {
                        let format = report
                            .format
                            .map(|f| f.to_string())
                            .unwrap_or_default();
                        println!("valid {} ({})", format, counterpart);
                    }
                    (Some(e), _) => println!("invalid ({}): {}", e.reason(), e),
                    (None, None) => println!("invalid"),
                },
            }
            Ok(if report.valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Demo => {
            let lines = services::run_demo();
            match config.output {
                OutputFormat::Json => print_json(&lines)?,
                OutputFormat::Text => {
                    for line in &lines {
                        let status = if line.passed { "ok" } else { "FAILED" };
                        println!("{} <-> {}  {}", line.isbn10, line.isbn13, status);
                    }
                }
            }
            Ok(if lines.iter().all(|line| line.passed) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}

fn convert(direction: Direction, input: String, config: &Config) -> Result<ExitCode> {
    let request = ConvertRequest {
        direction,
        input,
        sentinel: config.sentinel,
    };
    let outcome = services::convert(&request);

    if config.output == OutputFormat::Json {
        print_json(&outcome)?;
        return Ok(if outcome.valid {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    // Sentinel output is still a failed conversion
    match (outcome.output, outcome.error) {
        (Some(output), error) => {
            println!("{}", output);
            Ok(if error.is_none() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        (None, Some(e)) => {
            Err(e).with_context(|| format!("Cannot convert '{}'", request.input))
        }
        (None, None) => bail!("Cannot convert '{}'", request.input),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
