// src/simulation/stats.rs

use crate::model::{DailyRecord, OrderRecord};

/// Run-level aggregates over the completed simulation log.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub average_ending_stock: f64,
    pub total_ending_stock: u64,
    pub total_shortage_units: u64,
    pub shortage_days: u32,
    pub orders_placed: u32,
}

/// Pure aggregation over the record sequences. The logs are the single
/// source of truth; nothing here reads live simulation state.
pub fn summarize(daily: &[DailyRecord], orders: &[OrderRecord]) -> RunSummary {
    let total_ending_stock: u64 = daily.iter().map(|r| u64::from(r.ending_stock)).sum();
    let total_shortage_units: u64 = daily.iter().map(|r| u64::from(r.shortage)).sum();
    let shortage_days = daily.iter().filter(|r| r.shortage > 0).count() as u32;
    let average_ending_stock = if daily.is_empty() {
        0.0
    } else {
        total_ending_stock as f64 / daily.len() as f64
    };

    RunSummary {
        average_ending_stock,
        total_ending_stock,
        total_shortage_units,
        shortage_days,
        orders_placed: orders.len() as u32,
    }
}
