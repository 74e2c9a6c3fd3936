//! # BioCalc CLI Application
//!
//! Terminal front-end for the bio_core calculators. One run per invocation:
//! pick a mode, accept the prompted inputs (enter keeps the default), read
//! the results, and find the mode's CSV report next to the binary.

use std::io::{self, BufRead, Write};
use std::path::Path;

use bio_core::calculations::{cell_seeding, drug_dilution, stock_split, CalculatorMode};
use bio_core::units::{KiloDaltons, MicroLiters, MilliLiters, MilliMolar, NanoMolar};
use bio_core::ResultReport;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_u32(prompt: &str, default: u32) -> u32 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn main() {
    env_logger::init();

    println!("BioCalc CLI - Lab Experiment Calculator");
    println!("=======================================");
    println!();
    println!("Select calculator mode:");
    println!("  1) Cell Count & Volume Calculator");
    println!("  2) Drug Dilution Calculator");
    println!("  3) Stock vs Diluant Volume");
    println!("  4) Unit Converters");
    println!();

    let choice = prompt_u32("Mode [1]: ", 1);
    println!();

    match choice {
        2 => run_drug_dilution(),
        3 => run_stock_split(),
        4 => run_unit_converters(),
        _ => run_cell_seeding(),
    }
}

/// Pick mL or µL for display; small volumes read better in µL.
fn format_volume(ml: MilliLiters) -> String {
    if ml.0 >= 1.0 {
        format!("{:.2} mL", ml.0)
    } else {
        format!("{:.2} µL", MicroLiters::from(ml).0)
    }
}

fn export_report(report: &ResultReport, mode: CalculatorMode) {
    let path = Path::new(mode.export_filename());
    match report.write_csv(path) {
        Ok(()) => println!("Results saved to {}", path.display()),
        Err(e) => {
            log::error!("export failed: {}", e);
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}

fn print_json<T: serde::Serialize>(result: &T) {
    println!();
    println!("JSON Output (for LLM/API use):");
    if let Ok(json) = serde_json::to_string_pretty(result) {
        println!("{}", json);
    }
}

fn run_cell_seeding() {
    log::info!("mode: cell seeding");
    let defaults = cell_seeding::CellSeedingInput::default();

    println!("Stock inputs:");
    let initial_cells_per_ml = prompt_f64(
        "  Initial cells per mL [1.03e6]: ",
        defaults.initial_cells_per_ml,
    );
    let initial_volume_ml =
        prompt_f64("  Initial volume of cells (mL) [16.0]: ", defaults.initial_volume_ml);

    println!("Plate inputs:");
    let cells_per_well = prompt_u32("  Target cells per well [25000]: ", defaults.cells_per_well);
    let num_wells = prompt_u32("  Number of wells [30]: ", defaults.num_wells);
    let volume_per_well_ul =
        prompt_f64("  Volume per well (µL) [50.0]: ", defaults.volume_per_well_ul);

    let input = cell_seeding::CellSeedingInput {
        initial_cells_per_ml,
        initial_volume_ml,
        cells_per_well,
        num_wells,
        volume_per_well_ul,
    };
    let result = cell_seeding::calculate(&input);

    println!();
    println!("═══════════════════════════════════════");
    println!("  CELL COUNT & VOLUME RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("  Total cells available: {:.2e}", result.total_cells);
    println!("  Cells needed:          {:.2e}", result.cells_needed as f64);
    println!(
        "  Stock volume needed:   {}",
        format_volume(MilliLiters(result.stock_volume_ml))
    );
    println!(
        "  Resuspension volume:   {}",
        format_volume(MicroLiters(result.resuspension_volume_ul).into())
    );
    println!();

    export_report(
        &cell_seeding::build_report(&input, &result),
        CalculatorMode::CellSeeding,
    );
    print_json(&result);
}

fn run_drug_dilution() {
    log::info!("mode: drug dilution");
    let defaults = drug_dilution::DrugDilutionInput::default();

    let initial_conc_nm =
        prompt_f64("Initial concentration (nM) [47933.33]: ", defaults.initial_conc_nm);
    let final_conc_nm = prompt_f64("Final concentration (nM) [400.0]: ", defaults.final_conc_nm);
    let multiply_factor = prompt_f64("Multiply factor [1.0]: ", defaults.multiply_factor);
    let num_wells = prompt_u32("Number of wells [18]: ", defaults.num_wells);
    let volume_per_well_ul =
        prompt_f64("Volume per well (µL) [50.0]: ", defaults.volume_per_well_ul);

    let input = drug_dilution::DrugDilutionInput {
        initial_conc_nm,
        final_conc_nm,
        multiply_factor,
        num_wells,
        volume_per_well_ul,
    };
    let result = drug_dilution::calculate(&input);

    println!();
    println!("═══════════════════════════════════════");
    println!("  PREPARATION PROTOCOL");
    println!("═══════════════════════════════════════");
    println!();
    println!("  Total volume required: {:.1} µL", result.volume_required_ul);
    println!("  Dilution factor:       {:.2}X", result.dilution_factor);
    println!("  Intermediate conc:     {:.1} nM", result.intermediate_conc_nm);
    println!();
    println!("  Mix:");
    println!("    {:.2} µL of Drug (Stock)", result.drug_volume_ul);
    println!("    {:.2} µL of Media", result.media_volume_ul);
    println!();

    export_report(
        &drug_dilution::build_report(&input, &result),
        CalculatorMode::DrugDilution,
    );
    print_json(&result);
}

fn run_stock_split() {
    log::info!("mode: stock split");
    let defaults = stock_split::StockSplitInput::default();

    let num_wells = prompt_u32("Number of wells [25]: ", defaults.num_wells);
    let volume_per_well_ul =
        prompt_f64("Volume per well (µL) [25.0]: ", defaults.volume_per_well_ul);
    let dilution_factor = prompt_f64("Dilution factor [5.0]: ", defaults.dilution_factor);

    let input = stock_split::StockSplitInput {
        num_wells,
        volume_per_well_ul,
        dilution_factor,
    };
    let result = stock_split::calculate(&input);

    println!();
    println!("═══════════════════════════════════════");
    println!("  STOCK vs DILUANT VOLUME");
    println!("═══════════════════════════════════════");
    println!();
    println!("  Total volume needed: {:.1} µL", result.total_volume_ul);
    println!();
    println!("  Component         Volume (µL)");
    println!("  Stock Solution    {:.2}", result.stock_volume_ul);
    println!("  Diluant           {:.2}", result.diluant_volume_ul);
    println!("  Total             {:.2}", result.total_volume_ul);
    println!();

    export_report(
        &stock_split::build_report(&input, &result),
        CalculatorMode::StockSplit,
    );
    print_json(&result);
}

fn run_unit_converters() {
    log::info!("mode: unit converters");

    println!("Concentration: mM ↔ nM");
    let value = prompt_f64("  Value [1.0]: ", 1.0);
    println!("  {} mM = {:.2} nM", value, NanoMolar::from(MilliMolar(value)).0);
    println!("  {} nM = {:.6} mM", value, MilliMolar::from(NanoMolar(value)).0);
    println!();

    println!("Mass/Molarity: nM ↔ µg/mL");
    let conc_nm = prompt_f64("  Concentration (nM) [100.0]: ", 100.0);
    let molecular_weight = prompt_f64("  Molecular weight (kDa) [150.0]: ", 150.0);
    println!(
        "  Result: {:.4} µg/mL",
        NanoMolar(conc_nm)
            .to_ug_per_ml(KiloDaltons(molecular_weight))
            .0
    );
}
