//! Presentation-level configuration
//!
//! Resolved output settings: CLI flags over config file over defaults.

use crate::cli::commands::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Full,
            color: true,
        }
    }
}

impl OutputConfig {
    pub fn new(format: OutputFormat, color: bool) -> Self {
        Self { format, color }
    }

    /// Apply command-line overrides
    pub fn with_overrides(mut self, format: Option<OutputFormat>, no_color: bool) -> Self {
        if let Some(format) = format {
            self.format = format;
        }
        if no_color {
            self.color = false;
        }
        self
    }

    /// JSON output is never colored
    pub fn use_color(&self) -> bool {
        self.color && self.format != OutputFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_config() {
        let config = OutputConfig::new(OutputFormat::Json, true)
            .with_overrides(Some(OutputFormat::Full), false);
        assert_eq!(config.format, OutputFormat::Full);
        assert!(config.use_color());
    }

    #[test]
    fn test_no_color_and_json_disable_color() {
        let config = OutputConfig::default().with_overrides(None, true);
        assert_eq!(config.format, OutputFormat::Full);
        assert!(!config.use_color());

        let config = OutputConfig::new(OutputFormat::Json, true);
        assert!(!config.use_color());
    }
}
