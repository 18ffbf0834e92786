// src/simulation/config.rs

use crate::error::SimulationError;
use crate::sampling::{tables, DistributionTable};

/// Default simulation horizon in days.
pub const SIM_DAYS: u64 = 507;

#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub initial_stock: u32,
    pub max_capacity: u32,
    pub reorder_level: u32,
    pub order_quantity: u32,
    /// The warm-start order already in transit when the run begins.
    pub bootstrap_quantity: u32,
    pub bootstrap_lead_time: u32,
    pub demand_table: DistributionTable,
    pub lead_time_table: DistributionTable,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            initial_stock: 3,
            max_capacity: 110,
            reorder_level: 50,
            order_quantity: 100,
            bootstrap_quantity: 1,
            bootstrap_lead_time: 2,
            demand_table: tables::demand_table(),
            lead_time_table: tables::lead_time_table(),
        }
    }
}

impl SimulationConfig {
    /// Reject configurations the run could not execute sensibly. Checked
    /// once, before the first event fires.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.reorder_level >= self.max_capacity {
            return Err(SimulationError::InvalidConfiguration(format!(
                "reorder level {} must be below max capacity {}",
                self.reorder_level, self.max_capacity
            )));
        }
        if self.order_quantity == 0 {
            return Err(SimulationError::InvalidConfiguration(
                "order quantity must be positive".into(),
            ));
        }
        if self.bootstrap_lead_time == 0 {
            return Err(SimulationError::InvalidConfiguration(
                "bootstrap lead time must be positive".into(),
            ));
        }
        self.demand_table.validate()?;
        self.lead_time_table.validate()?;
        Ok(())
    }
}
