//! # Cell Seeding Calculation
//!
//! Computes the cell suspension volumes needed to plate a given number of
//! wells at a target density.
//!
//! ## Assumptions
//!
//! - The stock suspension is homogeneous (cells/mL holds across the tube)
//! - Wells are filled to a uniform volume
//! - A zero stock density degrades the stock volume to 0 rather than failing
//!
//! ## Example
//!
//! ```rust
//! use bio_core::calculations::cell_seeding::{calculate, CellSeedingInput};
//!
//! let input = CellSeedingInput {
//!     initial_cells_per_ml: 1.03e6,
//!     initial_volume_ml: 16.0,
//!     cells_per_well: 25000,
//!     num_wells: 30,
//!     volume_per_well_ul: 50.0,
//! };
//!
//! let result = calculate(&input);
//! assert_eq!(result.cells_needed, 750000);
//! assert!((result.stock_volume_ml - 0.7282).abs() < 1e-4);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::total_volume;
use crate::report::ResultReport;
use crate::units::{MicroLiters, MilliLiters};

/// Input parameters for a cell seeding run.
///
/// ## JSON Example
///
/// ```json
/// {
///   "initial_cells_per_ml": 1030000.0,
///   "initial_volume_ml": 16.0,
///   "cells_per_well": 25000,
///   "num_wells": 30,
///   "volume_per_well_ul": 50.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellSeedingInput {
    /// Measured density of the stock suspension (cells/mL)
    pub initial_cells_per_ml: f64,

    /// Volume of stock suspension on hand (mL)
    pub initial_volume_ml: f64,

    /// Target number of cells per well
    pub cells_per_well: u32,

    /// Number of wells to plate
    pub num_wells: u32,

    /// Fill volume per well (µL)
    pub volume_per_well_ul: f64,
}

impl Default for CellSeedingInput {
    fn default() -> Self {
        CellSeedingInput {
            initial_cells_per_ml: 1.03e6,
            initial_volume_ml: 16.0,
            cells_per_well: 25000,
            num_wells: 30,
            volume_per_well_ul: 50.0,
        }
    }
}

/// Total number of cells available in a suspension: density times volume.
pub fn total_cells(cells_per_ml: f64, volume_ml: f64) -> f64 {
    cells_per_ml * volume_ml
}

/// Number of cells needed for the plate: per-well target times well count.
pub fn cells_needed(cells_per_well: u32, num_wells: u32) -> u64 {
    u64::from(cells_per_well) * u64::from(num_wells)
}

/// Volume of stock suspension (mL) that contains the cells the plate needs.
///
/// Returns 0 when the stock density is zero.
pub fn stock_volume_needed(initial_cells_per_ml: f64, cells_per_well: u32, num_wells: u32) -> f64 {
    if initial_cells_per_ml == 0.0 {
        return 0.0;
    }
    cells_needed(cells_per_well, num_wells) as f64 / initial_cells_per_ml
}

/// Resuspension target volume (µL): wells times fill volume.
///
/// Same arithmetic as [`total_volume`], kept separate because it sizes the
/// volume the cell pellet is resuspended in, not the plate total.
pub fn resuspension_volume(num_wells: f64, volume_per_well_ul: f64) -> f64 {
    num_wells * volume_per_well_ul
}

/// Results from a cell seeding calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "total_cells": 16480000.0,
///   "cells_needed": 750000,
///   "stock_volume_ml": 0.7282,
///   "stock_volume_ul": 728.15,
///   "total_volume_ml": 1.5,
///   "resuspension_volume_ul": 1500.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellSeedingResult {
    /// Cells available in the stock suspension
    pub total_cells: f64,

    /// Cells the plate needs
    pub cells_needed: u64,

    /// Stock volume holding the needed cells (mL)
    pub stock_volume_ml: f64,

    /// Stock volume holding the needed cells (µL)
    pub stock_volume_ul: f64,

    /// Total liquid volume across all wells (mL)
    pub total_volume_ml: f64,

    /// Resuspension target volume (µL)
    pub resuspension_volume_ul: f64,
}

/// Run the cell seeding calculation.
///
/// Pure and total: no input combination errors or panics. A zero stock
/// density short-circuits the stock volume to 0.
pub fn calculate(input: &CellSeedingInput) -> CellSeedingResult {
    let volume_per_well_ml: MilliLiters = MicroLiters(input.volume_per_well_ul).into();

    let total_cells = total_cells(input.initial_cells_per_ml, input.initial_volume_ml);
    let cells_needed = cells_needed(input.cells_per_well, input.num_wells);
    let stock_volume_ml =
        stock_volume_needed(input.initial_cells_per_ml, input.cells_per_well, input.num_wells);
    let stock_volume_ul: MicroLiters = MilliLiters(stock_volume_ml).into();

    CellSeedingResult {
        total_cells,
        cells_needed,
        stock_volume_ml,
        stock_volume_ul: stock_volume_ul.0,
        total_volume_ml: total_volume(f64::from(input.num_wells), volume_per_well_ml.0),
        resuspension_volume_ul: resuspension_volume(
            f64::from(input.num_wells),
            input.volume_per_well_ul,
        ),
    }
}

/// Assemble the export table for a cell seeding run.
pub fn build_report(input: &CellSeedingInput, result: &CellSeedingResult) -> ResultReport {
    let mut report = ResultReport::new();
    report.push_float("Input: Initial Cells per mL", input.initial_cells_per_ml);
    report.push_float("Input: Initial Volume (mL)", input.initial_volume_ml);
    report.push_int("Input: Target Cells per Well", i64::from(input.cells_per_well));
    report.push_int("Input: Number of Wells", i64::from(input.num_wells));
    report.push_float("Input: Volume per Well (uL)", input.volume_per_well_ul);
    report.push_float("Result: Total Cells Available", result.total_cells);
    report.push_int("Result: Cells Needed", result.cells_needed as i64);
    report.push_float("Result: Stock Volume Needed (mL)", result.stock_volume_ml);
    report.push_float("Result: Stock Volume Needed (uL)", result.stock_volume_ul);
    report
}
