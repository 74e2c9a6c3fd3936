//! # Drug Dilution Calculation
//!
//! Computes the drug stock / media mix that dilutes a drug from its stock
//! concentration down to the intermediate concentration a plate needs.
//!
//! The pipeline has three guarded stages:
//!
//! 1. total volume required = wells * fill volume
//! 2. intermediate concentration = final concentration * multiply factor
//! 3. dilution factor = stock concentration / intermediate concentration,
//!    then drug volume = total / factor and media volume = total - drug
//!
//! A non-positive result at any stage short-circuits every downstream value
//! to 0. The engine never raises and never emits infinity or NaN from these
//! guards, so it is safe to run against a half-edited form.
//!
//! ## Example
//!
//! ```rust
//! use bio_core::calculations::drug_dilution::{calculate, DrugDilutionInput};
//!
//! let input = DrugDilutionInput {
//!     initial_conc_nm: 47933.33,
//!     final_conc_nm: 400.0,
//!     multiply_factor: 1.0,
//!     num_wells: 18,
//!     volume_per_well_ul: 50.0,
//! };
//!
//! let result = calculate(&input);
//! assert!((result.dilution_factor - 119.833).abs() < 1e-3);
//! assert!((result.drug_volume_ul - 7.5104).abs() < 1e-4);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::total_volume;
use crate::report::ResultReport;

/// Input parameters for a drug dilution run.
///
/// ## JSON Example
///
/// ```json
/// {
///   "initial_conc_nm": 47933.33,
///   "final_conc_nm": 400.0,
///   "multiply_factor": 1.0,
///   "num_wells": 18,
///   "volume_per_well_ul": 50.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrugDilutionInput {
    /// Drug stock concentration (nM)
    pub initial_conc_nm: f64,

    /// Concentration each well should end up at (nM)
    pub final_conc_nm: f64,

    /// Multiplier applied to the final concentration to get the
    /// intermediate working concentration
    pub multiply_factor: f64,

    /// Number of wells to dose
    pub num_wells: u32,

    /// Fill volume per well (µL)
    pub volume_per_well_ul: f64,
}

impl Default for DrugDilutionInput {
    fn default() -> Self {
        DrugDilutionInput {
            initial_conc_nm: 47933.33,
            final_conc_nm: 400.0,
            multiply_factor: 1.0,
            num_wells: 18,
            volume_per_well_ul: 50.0,
        }
    }
}

/// Intermediate working concentration: final concentration times the
/// multiply factor.
pub fn intermediate_concentration(final_conc_nm: f64, multiply_factor: f64) -> f64 {
    final_conc_nm * multiply_factor
}

/// Dilution factor from stock down to the intermediate concentration.
///
/// Returns 0 when the intermediate concentration is not positive.
pub fn dilution_factor(initial_conc_nm: f64, intermediate_conc_nm: f64) -> f64 {
    if intermediate_conc_nm <= 0.0 {
        return 0.0;
    }
    initial_conc_nm / intermediate_conc_nm
}

/// Results from a drug dilution calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrugDilutionResult {
    /// Total working volume to prepare (µL)
    pub volume_required_ul: f64,

    /// Intermediate working concentration (nM)
    pub intermediate_conc_nm: f64,

    /// How many parts total per part drug stock
    pub dilution_factor: f64,

    /// Volume of drug stock to pipette (µL)
    pub drug_volume_ul: f64,

    /// Volume of media to make up the rest (µL)
    pub media_volume_ul: f64,
}

/// Run the drug dilution calculation.
///
/// Pure and total: no input combination errors or panics. Guard behavior is
/// described in the module docs.
pub fn calculate(input: &DrugDilutionInput) -> DrugDilutionResult {
    let volume_required_ul = total_volume(f64::from(input.num_wells), input.volume_per_well_ul);
    let intermediate_conc_nm =
        intermediate_concentration(input.final_conc_nm, input.multiply_factor);
    let dilution_factor = dilution_factor(input.initial_conc_nm, intermediate_conc_nm);

    let (drug_volume_ul, media_volume_ul) = if dilution_factor > 0.0 {
        let drug = volume_required_ul / dilution_factor;
        (drug, volume_required_ul - drug)
    } else {
        (0.0, 0.0)
    };

    DrugDilutionResult {
        volume_required_ul,
        intermediate_conc_nm,
        dilution_factor,
        drug_volume_ul,
        media_volume_ul,
    }
}

/// Assemble the export table for a drug dilution run.
pub fn build_report(input: &DrugDilutionInput, result: &DrugDilutionResult) -> ResultReport {
    let mut report = ResultReport::new();
    report.push_float("Input: Initial Conc (nM)", input.initial_conc_nm);
    report.push_float("Input: Final Conc (nM)", input.final_conc_nm);
    report.push_float("Input: Multiply Factor", input.multiply_factor);
    report.push_int("Input: Number of Wells", i64::from(input.num_wells));
    report.push_float("Input: Volume per Well (uL)", input.volume_per_well_ul);
    report.push_float("Result: Total Volume Required (uL)", result.volume_required_ul);
    report.push_float("Result: Intermediate Conc (nM)", result.intermediate_conc_nm);
    report.push_float("Result: Dilution Factor", result.dilution_factor);
    report.push_float("Result: Volume of Drug Stock (uL)", result.drug_volume_ul);
    report.push_float("Result: Volume of Media (uL)", result.media_volume_ul);
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bench_input() -> DrugDilutionInput {
        DrugDilutionInput {
            initial_conc_nm: 47933.33,
            final_conc_nm: 400.0,
            multiply_factor: 1.0,
            num_wells: 18,
            volume_per_well_ul: 50.0,
        }
    }

    #[test]
    fn test_nominal_protocol() {
        let result = calculate(&bench_input());

        assert!((result.volume_required_ul - 900.0).abs() < 1e-12);
        assert!((result.intermediate_conc_nm - 400.0).abs() < 1e-12);
        // 47933.33 / 400 = 119.8333...
        assert!((result.dilution_factor - 119.833).abs() < 1e-3);
        // 900 / 119.8333 = 7.51043...
        assert!((result.drug_volume_ul - 7.5104).abs() < 1e-4);
        assert!((result.media_volume_ul - 892.4896).abs() < 1e-4);
        // Mix volumes always add back up to the total
        assert!(
            (result.drug_volume_ul + result.media_volume_ul - result.volume_required_ul).abs()
                < 1e-9
        );
    }

    #[test]
    fn test_zero_final_concentration_short_circuits() {
        let mut input = bench_input();
        input.final_conc_nm = 0.0;
        let result = calculate(&input);

        assert_eq!(result.intermediate_conc_nm, 0.0);
        assert_eq!(result.dilution_factor, 0.0);
        assert_eq!(result.drug_volume_ul, 0.0);
        assert_eq!(result.media_volume_ul, 0.0);
        // Stage 1 is upstream of the guard and still computed
        assert!((result.volume_required_ul - 900.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_multiply_factor_short_circuits() {
        let mut input = bench_input();
        input.multiply_factor = 0.0;
        let result = calculate(&input);
        assert_eq!(result.dilution_factor, 0.0);
        assert_eq!(result.drug_volume_ul, 0.0);
        assert_eq!(result.media_volume_ul, 0.0);
    }

    #[test]
    fn test_negative_stock_concentration_yields_zero_volumes() {
        let mut input = bench_input();
        input.initial_conc_nm = -100.0;
        let result = calculate(&input);

        // The factor itself reflects the inputs, but no volumes come out of it
        assert!(result.dilution_factor < 0.0);
        assert_eq!(result.drug_volume_ul, 0.0);
        assert_eq!(result.media_volume_ul, 0.0);
    }

    #[test]
    fn test_no_nan_or_infinity() {
        let degenerate = [
            DrugDilutionInput {
                initial_conc_nm: 0.0,
                final_conc_nm: 0.0,
                multiply_factor: 0.0,
                num_wells: 0,
                volume_per_well_ul: 0.0,
            },
            DrugDilutionInput {
                initial_conc_nm: 1.0,
                final_conc_nm: -400.0,
                multiply_factor: 1.0,
                num_wells: 18,
                volume_per_well_ul: 50.0,
            },
        ];
        for input in &degenerate {
            let result = calculate(input);
            assert!(result.dilution_factor.is_finite());
            assert!(result.drug_volume_ul.is_finite());
            assert!(result.media_volume_ul.is_finite());
        }
    }

    #[test]
    fn test_report_labels() {
        let input = bench_input();
        let result = calculate(&input);
        let report = build_report(&input, &result);

        let labels: Vec<_> = report.iter().map(|(label, _)| label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Input: Initial Conc (nM)",
                "Input: Final Conc (nM)",
                "Input: Multiply Factor",
                "Input: Number of Wells",
                "Input: Volume per Well (uL)",
                "Result: Total Volume Required (uL)",
                "Result: Intermediate Conc (nM)",
                "Result: Dilution Factor",
                "Result: Volume of Drug Stock (uL)",
                "Result: Volume of Media (uL)",
            ]
        );
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = bench_input();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: DrugDilutionInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.num_wells, roundtrip.num_wells);

        let result = calculate(&input);
        let json = serde_json::to_string_pretty(&result).unwrap();
        let roundtrip: DrugDilutionResult = serde_json::from_str(&json).unwrap();
        assert!((result.dilution_factor - roundtrip.dilution_factor).abs() < 1e-12);
    }
}
