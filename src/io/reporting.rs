// src/io/reporting.rs

use crate::model::DailyRecord;
use crate::simulation::stats::RunSummary;
use chrono::Local;
use std::error::Error;
use std::path::Path;

/// Build an output filename carrying the wall-clock time of the run,
/// e.g. `inventory_results_20260807_142301.csv`.
pub fn timestamped_filename(prefix: &str) -> String {
    format!("{}_{}.csv", prefix, Local::now().format("%Y%m%d_%H%M%S"))
}

/// Writes the daily simulation log to a CSV file.
///
/// # Arguments
/// * `file_path` - The path to save the file (e.g., "inventory_results.csv").
/// * `data` - The per-day records from the completed run.
pub fn write_daily_log(file_path: &str, data: &[DailyRecord]) -> Result<(), Box<dyn Error>> {
    let path = Path::new(file_path);

    let mut wtr = csv::Writer::from_path(path)?;

    // Serialize and write each record; the header row comes from the
    // record's field renames.
    for record in data {
        wtr.serialize(record)?;
    }

    // Flush the buffer to ensure all data is written
    wtr.flush()?;

    println!(
        "Successfully exported {} rows to '{}'",
        data.len(),
        file_path
    );
    Ok(())
}

/// Print the run summary block to the console.
pub fn print_summary(summary: &RunSummary) {
    println!("\nSimulation Results:");
    println!(
        "Average Ending Stock: {:.2} units",
        summary.average_ending_stock
    );
    println!("Total of Ending Stock: {} units", summary.total_ending_stock);
    println!("Number of Shortage Days: {} days", summary.shortage_days);
    println!("Number of Orders: {}", summary.orders_placed);
}
