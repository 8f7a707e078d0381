//! Rendering of a [`MapAnalysis`] as a text report or JSON document

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::MapAnalysis;
use crate::{Error, Route};

/// Output format of the analysis report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(Error::InvalidData(format!(
                "Unknown report format '{other}', expected 'text' or 'json'"
            ))),
        }
    }
}

impl MapAnalysis<'_> {
    /// # Errors
    ///
    /// Returns [`Error::JsonError`] if JSON serialization fails.
    pub fn render(&self, format: ReportFormat) -> Result<String, Error> {
        match format {
            ReportFormat::Text => Ok(self.to_string()),
            ReportFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

fn write_roads(f: &mut fmt::Formatter<'_>, route: &Route<'_>) -> fmt::Result {
    for road in route.roads() {
        writeln!(f, "{road}")?;
    }
    Ok(())
}

/// Two decimals, rounding half up on the shortest decimal form of the
/// ratio (`0.125` gives `0.13`). Undefined ratios are reported as zero.
fn format_ratio(ratio: Option<f64>) -> String {
    // Ratios are never negative
    let decimal = ratio.unwrap_or(0.0).max(0.0).to_string();
    let (whole, fraction) = decimal.split_once('.').unwrap_or((decimal.as_str(), ""));

    let kept = fraction.bytes().chain(*b"00").take(2);
    let mut hundredths = whole
        .bytes()
        .chain(kept)
        .fold(0u128, |acc, digit| acc * 10 + u128::from(digit - b'0'));
    if fraction.as_bytes().get(2).is_some_and(|&digit| digit >= b'5') {
        hundredths += 1;
    }

    format!("{}.{:02}", hundredths / 100, hundredths % 100)
}

impl fmt::Display for MapAnalysis<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Fastest Route from {} to {} ({} KM):",
            self.start,
            self.finish,
            self.fastest_route.length()
        )?;
        write_roads(f, &self.fastest_route)?;

        writeln!(f, "Roads of Barely Connected Map is:")?;
        for road in &self.barely_connected_map {
            writeln!(f, "{road}")?;
        }

        writeln!(
            f,
            "Fastest Route from {} to {} on Barely Connected Map ({} KM):",
            self.start,
            self.finish,
            self.barely_connected_route.length()
        )?;
        write_roads(f, &self.barely_connected_route)?;

        writeln!(f, "Analysis:")?;
        writeln!(
            f,
            "Ratio of Construction Material Usage Between Barely Connected and Original Map: {}",
            format_ratio(self.material_ratio)
        )?;
        write!(
            f,
            "Ratio of Fastest Route Between Barely Connected and Original Map: {}",
            format_ratio(self.route_ratio)
        )
    }
}
