use std::path::PathBuf;

use serde::Deserialize;

use crate::{Error, analysis::ReportFormat};

/// Configuration of a single analysis run
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Tab-separated network description
    pub input: PathBuf,
    /// Report destination, standard output when absent
    #[serde(default)]
    pub output: Option<PathBuf>,
    /// Overrides the start location declared in the input
    #[serde(default)]
    pub start: Option<String>,
    /// Overrides the finish location declared in the input
    #[serde(default)]
    pub finish: Option<String>,
    #[serde(default)]
    pub format: ReportFormat,
}

impl AnalysisConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            start: None,
            finish: None,
            format: ReportFormat::default(),
        }
    }

    /// # Errors
    ///
    /// Returns an error if the input file does not exist or a location
    /// override is blank.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.input.is_file() {
            return Err(Error::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Input file not found: {}", self.input.display()),
            )));
        }

        for (name, value) in [("start", &self.start), ("finish", &self.finish)] {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                return Err(Error::InvalidData(format!(
                    "The {name} location override must not be empty"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_is_rejected() {
        let config = AnalysisConfig::new("/definitely/not/here.tsv");
        assert!(matches!(config.validate(), Err(Error::IoError(_))));
    }

    #[test]
    fn blank_override_is_rejected() {
        let mut config = AnalysisConfig::new(concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml"));
        config.start = Some("  ".to_owned());
        assert!(matches!(config.validate(), Err(Error::InvalidData(_))));
    }
}
