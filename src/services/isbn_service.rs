//! ISBN Service - Conversion and checking behind the command line
//!
//! Wraps the pure codec with the output policy (typed error or sentinel)
//! and logs what it does. Results are serializable for JSON output.

use serde::{Deserialize, Serialize};

use crate::domain::IsbnError;
use crate::models::{Isbn, IsbnFormat};
use crate::modules::codec::{self, SENTINEL_ISBN10, SENTINEL_ISBN13};

/// ISBN-10 / ISBN-13 pairs used by the demo and the test suite
pub const KNOWN_VECTORS: [(&str, &str); 9] = [
    ("0306406152", "9780306406157"),
    ("0679406417", "9780679406419"),
    ("048665088X", "9780486650883"),
    ("0140449132", "9780140449136"),
    ("0198526636", "9780198526636"),
    ("080442957X", "9780804429573"),
    ("0812979656", "9780812979657"),
    ("067978327X", "9780679783275"),
    ("0385472579", "9780385472579"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "10_to_13")]
    TenToThirteen,
    #[serde(rename = "13_to_10")]
    ThirteenToTen,
}

impl Direction {
    pub fn sentinel(self) -> &'static str {
        match self {
            Direction::TenToThirteen => SENTINEL_ISBN13,
            Direction::ThirteenToTen => SENTINEL_ISBN10,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConvertRequest {
    pub direction: Direction,
    pub input: String,
    /// Report failure through the sentinel value instead of `output: None`
    #[serde(default)]
    pub sentinel: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionOutcome {
    pub direction: Direction,
    pub input: String,
    /// Converted value, or the sentinel when requested
    pub output: Option<String>,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<IsbnError>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IsbnReport {
    pub input: String,
    pub format: Option<IsbnFormat>,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<IsbnError>,
    /// The same book in the other format, when valid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counterpart: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoLine {
    pub isbn10: String,
    pub isbn13: String,
    pub to13: String,
    pub to10: String,
    pub passed: bool,
}

/// Convert one identifier according to the request's direction and policy.
pub fn convert(request: &ConvertRequest) -> ConversionOutcome {
    let result = match request.direction {
        Direction::TenToThirteen => codec::convert_10_to_13(&request.input),
        Direction::ThirteenToTen => codec::convert_13_to_10(&request.input),
    };

    match result {
        Ok(output) => {
            tracing::debug!("Converted {} -> {}", request.input, output);
            ConversionOutcome {
                direction: request.direction,
                input: request.input.clone(),
                output: Some(output),
                valid: true,
                error: None,
            }
        }
        Err(e) => {
            tracing::warn!("Rejected '{}': {}", request.input, e);
            ConversionOutcome {
                direction: request.direction,
                input: request.input.clone(),
                output: request
                    .sentinel
                    .then(|| request.direction.sentinel().to_string()),
                valid: false,
                error: Some(e),
            }
        }
    }
}

/// Check an identifier of either format, detected by length.
pub fn check_isbn(input: &str) -> IsbnReport {
    let format = codec::detect_format(input).ok();

    match Isbn::parse(input) {
        Ok(isbn) => {
            let counterpart = match &isbn {
                Isbn::Ten(isbn10) => isbn10.to_isbn13().to_string(),
                Isbn::Thirteen(isbn13) => isbn13.to_isbn10().to_string(),
            };
            tracing::debug!("{} is a valid {}", input, isbn.format());
            IsbnReport {
                input: input.to_string(),
                format: Some(isbn.format()),
                valid: true,
                error: None,
                counterpart: Some(counterpart),
            }
        }
        Err(e) => {
            tracing::debug!("{} is not a valid ISBN: {}", input, e);
            IsbnReport {
                input: input.to_string(),
                format,
                valid: false,
                error: Some(e),
                counterpart: None,
            }
        }
    }
}

/// Convert every known pair in both directions and compare.
pub fn run_demo() -> Vec<DemoLine> {
    KNOWN_VECTORS
        .iter()
        .map(|(isbn10, isbn13)| {
            let to13 = codec::convert_10_to_13_or_sentinel(isbn10);
            let to10 = codec::convert_13_to_10_or_sentinel(isbn13);
            let passed = to13 == *isbn13 && to10 == *isbn10;
            if !passed {
                tracing::error!("Known pair {} / {} did not round-trip", isbn10, isbn13);
            }
            DemoLine {
                isbn10: isbn10.to_string(),
                isbn13: isbn13.to_string(),
                to13,
                to10,
                passed,
            }
        })
        .collect()
}
