//! # Beam Analysis CLI
//!
//! Terminal front end for the singularity-function engine. Prompts for the
//! beam parameters, runs a simply supported beam with a central point load,
//! and prints the equations, extremes, and the JSON report.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use beam_core::beam::{Beam, Plane};
use beam_core::section::CrossSection;
use beam_core::singularity::BcKind;

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

fn main() -> ExitCode {
    println!("Beam Analysis - Macaulay Singularity-Function Method");
    println!("====================================================");
    println!();

    let length = prompt_f64("Enter beam length (m) [1.0]: ", 1.0);
    let e = prompt_f64("Enter elastic modulus (Pa) [207e9]: ", 207e9);
    let radius = prompt_f64("Enter circular section radius (m) [0.05]: ", 0.05);
    let p = prompt_f64("Enter central point load (N) [20.0]: ", 20.0);

    println!();
    println!("Analyzing simply supported beam, central load {} N...", p);
    println!();

    let section = CrossSection::circular(radius);

    let result = Beam::with_section(length, e, &section).and_then(|mut beam| {
        // Support reactions and the applied load, all in the XY plane
        beam.add_point_load(0.0, p / 2.0, Plane::Xy)?;
        beam.add_point_load(length / 2.0, -p, Plane::Xy)?;
        beam.add_point_load(length, p / 2.0, Plane::Xy)?;

        // Pinned left end, zero slope at midspan by symmetry
        beam.add_boundary_condition(0.0, BcKind::Deflection, 0.0, Plane::Xy)?;
        beam.add_boundary_condition(length / 2.0, BcKind::Angle, 0.0, Plane::Xy)?;

        beam.run_analysis(101)
    });

    match result {
        Ok(report) => {
            println!("═══════════════════════════════════════");
            println!("  BEAM ANALYSIS RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            println!("  Length:   {:.3} m", length);
            println!("  E:        {:.3e} Pa", e);
            println!("  Section:  {} (r = {} m)", section, radius);
            println!("  I:        {:.4e} m^4", section.moment_of_inertia());

            for plane in &report.planes {
                println!();
                println!("Plane {}:", plane.plane);
                for series in &plane.series {
                    println!();
                    println!("  {}:", series.kind);
                    println!("    {}(x) = {}", series.kind.display_name(), series.equation);
                    println!("    max {}", series.extreme);
                }
            }

            println!();
            println!("JSON Output (for plotting/reporting tools):");
            if let Ok(json) = serde_json::to_string_pretty(&report) {
                println!("{}", json);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}
