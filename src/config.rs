use std::env;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub output: OutputFormat,
    /// Print the sentinel value instead of failing on invalid input
    pub sentinel: bool,
    pub log_filter: String,
    /// Problems found while loading, logged once tracing is up
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputFormat::Text,
            sentinel: false,
            log_filter: "isbn_codec=info".to_string(),
            warnings: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let mut warnings = Vec::new();

        let output = match lookup("ISBN_OUTPUT") {
            Some(value) => OutputFormat::parse(&value).unwrap_or_else(|| {
                warnings.push(format!(
                    "Unknown ISBN_OUTPUT '{}', falling back to text",
                    value
                ));
                OutputFormat::Text
            }),
            None => defaults.output,
        };

        Self {
            output,
            sentinel: lookup("ISBN_SENTINEL")
                .map(|v| matches!(v.trim(), "1" | "true" | "TRUE" | "yes"))
                .unwrap_or(defaults.sentinel),
            log_filter: lookup("ISBN_LOG")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.log_filter),
            warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config.output, OutputFormat::Text);
        assert!(!config.sentinel);
        assert_eq!(config.log_filter, "isbn_codec=info");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("ISBN_OUTPUT", "JSON"),
            ("ISBN_SENTINEL", "1"),
            ("ISBN_LOG", "isbn_codec=debug"),
        ]));
        assert_eq!(config.output, OutputFormat::Json);
        assert!(config.sentinel);
        assert_eq!(config.log_filter, "isbn_codec=debug");
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn test_unknown_output_falls_back_to_text() {
        let config = Config::from_lookup(lookup_from(&[
            ("ISBN_OUTPUT", "yaml"),
            ("ISBN_SENTINEL", "nope"),
            ("ISBN_LOG", "  "),
        ]));
        assert_eq!(config.output, OutputFormat::Text);
        assert!(!config.sentinel);
        assert_eq!(config.log_filter, "isbn_codec=info");
        assert_eq!(
            config.warnings,
            vec!["Unknown ISBN_OUTPUT 'yaml', falling back to text".to_string()]
        );
    }
}
