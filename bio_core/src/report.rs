//! # Result Reports
//!
//! Assembles one calculator run's inputs and outputs into an ordered
//! name/value table and serializes it as two-column CSV for download.
//!
//! ## Format
//!
//! - Header row `Name,Value`, then one row per entry in insertion order
//! - Floating-point values are formatted to 4 decimal places
//! - Integer and text values are emitted as-is
//!
//! Serialization is deterministic: the same report always produces
//! byte-identical text.
//!
//! ## Example
//!
//! ```rust
//! use bio_core::report::ResultReport;
//!
//! let mut report = ResultReport::new();
//! report.push_int("Input: Number of Wells", 25);
//! report.push_float("Result: Total Volume Needed (uL)", 625.0);
//!
//! let csv = report.to_csv().unwrap();
//! assert_eq!(
//!     csv,
//!     "Name,Value\nInput: Number of Wells,25\nResult: Total Volume Needed (uL),625.0000\n"
//! );
//! ```

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// MIME type for exported reports
pub const CSV_MIME_TYPE: &str = "text/csv";

/// A single value in a result report.
///
/// The variant controls export formatting: only `Float` entries are
/// rendered with 4 decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ReportValue {
    /// Floating-point value, exported with 4 fractional digits
    Float(f64),
    /// Integer value, exported without decimals
    Int(i64),
    /// Free text, exported verbatim
    Text(String),
}

impl fmt::Display for ReportValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportValue::Float(v) => write!(f, "{:.4}", v),
            ReportValue::Int(v) => write!(f, "{}", v),
            ReportValue::Text(v) => write!(f, "{}", v),
        }
    }
}

impl From<f64> for ReportValue {
    fn from(v: f64) -> Self {
        ReportValue::Float(v)
    }
}

impl From<i64> for ReportValue {
    fn from(v: i64) -> Self {
        ReportValue::Int(v)
    }
}

impl From<&str> for ReportValue {
    fn from(v: &str) -> Self {
        ReportValue::Text(v.to_string())
    }
}

/// Ordered name/value table for one calculator run.
///
/// Labels are kept unique by the per-mode assembly functions; the report
/// itself only guarantees that insertion order is preserved, which keeps
/// the export ordering stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultReport {
    entries: Vec<(String, ReportValue)>,
}

impl ResultReport {
    /// Create an empty report
    pub fn new() -> Self {
        ResultReport::default()
    }

    /// Append an entry
    pub fn push(&mut self, label: impl Into<String>, value: impl Into<ReportValue>) {
        self.entries.push((label.into(), value.into()));
    }

    /// Append a floating-point entry
    pub fn push_float(&mut self, label: impl Into<String>, value: f64) {
        self.push(label, ReportValue::Float(value));
    }

    /// Append an integer entry
    pub fn push_int(&mut self, label: impl Into<String>, value: i64) {
        self.push(label, ReportValue::Int(value));
    }

    /// Append a text entry
    pub fn push_text(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.push(label, ReportValue::Text(value.into()));
    }

    /// Number of entries in the report
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the report has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &(String, ReportValue)> {
        self.entries.iter()
    }

    /// Serialize the report as two-column CSV text.
    ///
    /// Header row `Name,Value`, then one row per entry in insertion order.
    pub fn to_csv(&self) -> CalcResult<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        writer
            .write_record(["Name", "Value"])
            .map_err(|e| CalcError::serialization(e.to_string()))?;

        for (label, value) in &self.entries {
            let rendered = value.to_string();
            writer
                .write_record([label.as_str(), rendered.as_str()])
                .map_err(|e| CalcError::serialization(e.to_string()))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| CalcError::serialization(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| CalcError::serialization(e.to_string()))
    }

    /// Write the CSV document to a file.
    ///
    /// This is the native stand-in for the browser download: the caller
    /// picks the filename (see `CalculatorMode::export_filename`).
    pub fn write_csv(&self, path: &Path) -> CalcResult<()> {
        let csv = self.to_csv()?;
        fs::write(path, csv)
            .map_err(|e| CalcError::file_error("write", path.display().to_string(), e.to_string()))?;
        log::info!("results exported: {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> ResultReport {
        let mut report = ResultReport::new();
        report.push_int("Input: Number of Wells", 25);
        report.push_float("Input: Volume per Well (uL)", 25.0);
        report.push_float("Input: Dilution Factor", 5.0);
        report.push_float("Result: Total Volume Needed (uL)", 625.0);
        report.push_float("Result: Volume of Stock (uL)", 125.0);
        report.push_float("Result: Volume of Diluant (uL)", 500.0);
        report
    }

    #[test]
    fn test_float_formatting() {
        assert_eq!(ReportValue::Float(7.51043).to_string(), "7.5104");
        assert_eq!(ReportValue::Float(625.0).to_string(), "625.0000");
        assert_eq!(ReportValue::Float(0.0).to_string(), "0.0000");
    }

    #[test]
    fn test_non_float_emitted_as_is() {
        assert_eq!(ReportValue::Int(750000).to_string(), "750000");
        assert_eq!(ReportValue::Text("n/a".to_string()).to_string(), "n/a");
    }

    #[test]
    fn test_csv_layout() {
        let csv = sample_report().to_csv().unwrap();
        let expected = "Name,Value\n\
                        Input: Number of Wells,25\n\
                        Input: Volume per Well (uL),25.0000\n\
                        Input: Dilution Factor,5.0000\n\
                        Result: Total Volume Needed (uL),625.0000\n\
                        Result: Volume of Stock (uL),125.0000\n\
                        Result: Volume of Diluant (uL),500.0000\n";
        assert_eq!(csv, expected);
    }

    #[test]
    fn test_export_idempotence() {
        let report = sample_report();
        let first = report.to_csv().unwrap();
        let second = report.to_csv().unwrap();
        assert_eq!(first, second);

        // A freshly built report from the same inputs matches too
        let rebuilt = sample_report().to_csv().unwrap();
        assert_eq!(first, rebuilt);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let report = sample_report();
        let labels: Vec<_> = report.iter().map(|(label, _)| label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Input: Number of Wells",
                "Input: Volume per Well (uL)",
                "Input: Dilution Factor",
                "Result: Total Volume Needed (uL)",
                "Result: Volume of Stock (uL)",
                "Result: Volume of Diluant (uL)",
            ]
        );
    }

    #[test]
    fn test_serialization_roundtrip() {
        let report = sample_report();
        let json = serde_json::to_string(&report).unwrap();
        let roundtrip: ResultReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, roundtrip);
    }

    #[test]
    fn test_write_csv() {
        let dir = std::env::temp_dir().join("bio_core_report_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("stock_volume_results.csv");

        let report = sample_report();
        report.write_csv(&path).unwrap();
        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert_eq!(on_disk, report.to_csv().unwrap());
    }
}
