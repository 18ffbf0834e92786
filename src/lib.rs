// src/lib.rs

//! Single-item periodic-review inventory simulation.
//!
//! A discrete-event scheduler advances a day-granular clock and interleaves
//! two cooperating process kinds: a recurring daily review that serves demand
//! and decides reorders, and one-shot replenishments that sleep out a sampled
//! lead time before delivering. Demand and lead time come from banded lookup
//! tables driven by a seedable RNG, so a given seed reproduces the exact
//! day-by-day trajectory.

pub mod error;
pub mod io;
pub mod model;
pub mod sampling;
pub mod simulation;

pub use error::SimulationError;
pub use model::{DailyRecord, InventoryState, OrderRecord};
pub use sampling::{Band, DistributionTable, Outcome};
pub use simulation::{run_simulation, RunSummary, SimulationConfig, SimulationOutput, SIM_DAYS};
