// src/sampling/tables.rs

use super::distribution::{Band, DistributionTable, Outcome};

/// Daily demand in units (Table 19-2).
pub fn demand_table() -> DistributionTable {
    DistributionTable::new(vec![
        Band::new(1, 10, Outcome::Fixed(0)),
        Band::new(11, 35, Outcome::Fixed(1)),
        Band::new(36, 70, Outcome::Fixed(2)),
        Band::new(71, 91, Outcome::Fixed(3)),
        Band::new(92, 100, Outcome::Fixed(4)),
    ])
}

/// Replenishment lead time in days (Table 20-2).
pub fn lead_time_table() -> DistributionTable {
    DistributionTable::new(vec![
        Band::new(1, 60, Outcome::Uniform { low: 1, high: 6 }),
        Band::new(61, 90, Outcome::Uniform { low: 7, high: 9 }),
        Band::new(91, 100, Outcome::Fixed(10)),
    ])
}
