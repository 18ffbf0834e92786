// src/main.rs

use inventory_sim::io::reporting;
use inventory_sim::{run_simulation, SimulationConfig, SIM_DAYS};
use std::env;
use std::process;

fn main() {
    println!("=== Periodic-Review Inventory Simulation ===");

    // Optional first argument: RNG seed for a reproducible trajectory.
    let seed = match env::args().nth(1) {
        Some(arg) => match arg.parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                eprintln!("Invalid seed '{}': expected an unsigned integer", arg);
                process::exit(1);
            }
        },
        None => None,
    };

    let config = SimulationConfig::default();

    println!("Running simulation for {} days...", SIM_DAYS);
    let output = match run_simulation(SIM_DAYS, config, seed) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Simulation failed: {}", e);
            process::exit(1);
        }
    };

    let output_file = reporting::timestamped_filename("inventory_results");
    match reporting::write_daily_log(&output_file, &output.daily_records) {
        Ok(_) => {}
        Err(e) => eprintln!("Error writing CSV: {}", e),
    }

    reporting::print_summary(&output.summary);
    println!("Results saved to file: {}", output_file);
}
