// src/simulation/mod.rs

pub mod config;
pub mod engine;
pub mod scheduler;
pub mod stats;

pub use config::{SimulationConfig, SIM_DAYS};
pub use engine::{run_simulation, InventoryProcess, SimContext, SimulationOutput};
pub use scheduler::{Day, Process, Scheduler};
pub use stats::RunSummary;
