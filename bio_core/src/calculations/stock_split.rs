//! # Stock / Diluant Split
//!
//! Splits a plate's total volume into stock solution and diluant for a
//! known dilution factor.
//!
//! ## Example
//!
//! ```rust
//! use bio_core::calculations::stock_split::{calculate, StockSplitInput};
//!
//! let input = StockSplitInput {
//!     num_wells: 25,
//!     volume_per_well_ul: 25.0,
//!     dilution_factor: 5.0,
//! };
//!
//! let result = calculate(&input);
//! assert_eq!(result.stock_volume_ul, 125.0);
//! assert_eq!(result.diluant_volume_ul, 500.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::total_volume;
use crate::report::ResultReport;

/// Input parameters for a stock/diluant split.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockSplitInput {
    /// Number of wells to fill
    pub num_wells: u32,

    /// Fill volume per well (µL)
    pub volume_per_well_ul: f64,

    /// Dilution factor (parts total per part stock)
    pub dilution_factor: f64,
}

impl Default for StockSplitInput {
    fn default() -> Self {
        StockSplitInput {
            num_wells: 25,
            volume_per_well_ul: 25.0,
            dilution_factor: 5.0,
        }
    }
}

/// Results from a stock/diluant split.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockSplitResult {
    /// Total volume to prepare (µL)
    pub total_volume_ul: f64,

    /// Stock solution portion (µL)
    pub stock_volume_ul: f64,

    /// Diluant portion (µL)
    pub diluant_volume_ul: f64,
}

/// Run the stock/diluant split.
///
/// Pure and total: a non-positive dilution factor degrades both portions
/// to 0 instead of failing.
pub fn calculate(input: &StockSplitInput) -> StockSplitResult {
    let total_volume_ul = total_volume(f64::from(input.num_wells), input.volume_per_well_ul);

    let (stock_volume_ul, diluant_volume_ul) = if input.dilution_factor > 0.0 {
        let stock = total_volume_ul / input.dilution_factor;
        (stock, total_volume_ul - stock)
    } else {
        (0.0, 0.0)
    };

    StockSplitResult {
        total_volume_ul,
        stock_volume_ul,
        diluant_volume_ul,
    }
}

/// Assemble the export table for a stock/diluant split.
pub fn build_report(input: &StockSplitInput, result: &StockSplitResult) -> ResultReport {
    let mut report = ResultReport::new();
    report.push_int("Input: Number of Wells", i64::from(input.num_wells));
    report.push_float("Input: Volume per Well (uL)", input.volume_per_well_ul);
    report.push_float("Input: Dilution Factor", input.dilution_factor);
    report.push_float("Result: Total Volume Needed (uL)", result.total_volume_ul);
    report.push_float("Result: Volume of Stock (uL)", result.stock_volume_ul);
    report.push_float("Result: Volume of Diluant (uL)", result.diluant_volume_ul);
    report
}
