/// Output format enumeration for report documents
///
/// Both the CLI and the renderer factory need this, so it lives in the
/// application layer rather than in either adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// Styled HTML report (default)
    Html,
    /// Machine-readable report data
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" | "htm" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'html' or 'json'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_output_format_from_str_html() {
        assert_eq!(OutputFormat::from_str("html").unwrap(), OutputFormat::Html);
        assert_eq!(OutputFormat::from_str("HTML").unwrap(), OutputFormat::Html);
        assert_eq!(OutputFormat::from_str("htm").unwrap(), OutputFormat::Html);
    }

    #[test]
    fn test_output_format_from_str_json() {
        assert_eq!(OutputFormat::from_str("Json").unwrap(), OutputFormat::Json);
    }

    #[test]
    fn test_output_format_from_str_invalid() {
        let error = OutputFormat::from_str("xlsx").unwrap_err();
        assert!(error.contains("Invalid format"));
        assert!(error.contains("xlsx"));
        assert!(error.contains("html"));
    }

    #[test]
    fn test_output_format_display_round_trip() {
        for format in [OutputFormat::Html, OutputFormat::Json] {
            assert_eq!(OutputFormat::from_str(&format.to_string()).unwrap(), format);
        }
    }
}
