//! # Laboratory Calculations
//!
//! This module contains the three calculators. Each calculation follows the
//! pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(&input) -> *Result` - Pure calculation function
//! - `build_report(&input, &result) -> ResultReport` - Export table assembly
//!
//! The calculate functions are total: a zero or non-positive divisor never
//! raises, it degrades that value and everything downstream of it to 0. This
//! keeps the engine safe to call on every keystroke of a half-edited form.
//!
//! ## Available Calculations
//!
//! - [`cell_seeding`] - Cell suspension volumes for plating
//! - [`drug_dilution`] - Drug/media mix from an intermediate concentration
//! - [`stock_split`] - Stock vs diluant split for a dilution factor

pub mod cell_seeding;
pub mod drug_dilution;
pub mod stock_split;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use cell_seeding::{CellSeedingInput, CellSeedingResult};
pub use drug_dilution::{DrugDilutionInput, DrugDilutionResult};
pub use stock_split::{StockSplitInput, StockSplitResult};

/// Total liquid volume across a plate: wells times volume per well.
///
/// Unit-agnostic: the result carries whatever volume unit `volume_per_well`
/// is in. Zero wells or a zero fill volume gives zero.
pub fn total_volume(num_wells: f64, volume_per_well: f64) -> f64 {
    num_wells * volume_per_well
}

/// The three exportable calculator modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalculatorMode {
    /// Cell suspension volumes for plating
    CellSeeding,
    /// Drug/media mix volumes
    DrugDilution,
    /// Stock vs diluant split
    StockSplit,
}

impl CalculatorMode {
    /// Human-readable mode title
    pub fn title(&self) -> &'static str {
        match self {
            CalculatorMode::CellSeeding => "Cell Count & Volume Calculator",
            CalculatorMode::DrugDilution => "Drug Dilution Calculator",
            CalculatorMode::StockSplit => "Stock vs Diluant Volume",
        }
    }

    /// Fixed filename for this mode's CSV download
    pub fn export_filename(&self) -> &'static str {
        match self {
            CalculatorMode::CellSeeding => "cell_count_results.csv",
            CalculatorMode::DrugDilution => "drug_dilution_results.csv",
            CalculatorMode::StockSplit => "stock_volume_results.csv",
        }
    }
}
