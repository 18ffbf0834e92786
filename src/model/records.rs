// src/model/records.rs

use serde::Serialize;

/// One row of the simulation log, produced per simulated day and never
/// mutated afterwards. Field renames give the CSV its column headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyRecord {
    #[serde(rename = "Day")]
    pub day: u64,
    #[serde(rename = "Beginning Stock")]
    pub beginning_stock: u32,
    #[serde(rename = "Demand")]
    pub demand: u32,
    #[serde(rename = "Shortage")]
    pub shortage: u32,
    #[serde(rename = "Ending Stock")]
    pub ending_stock: u32,
}

/// A reorder as it was placed. Used for the order count, not matched back
/// to the fulfillment that eventually clears it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRecord {
    pub day_placed: u64,
    pub quantity: u32,
    pub lead_time: u32,
}
