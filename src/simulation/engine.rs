// src/simulation/engine.rs

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::SimulationError;
use crate::model::{DailyRecord, InventoryState, OrderRecord};
use crate::simulation::config::SimulationConfig;
use crate::simulation::scheduler::{Process, Scheduler};
use crate::simulation::stats::{self, RunSummary};

/// Everything a single run mutates, owned by the scheduler for the duration
/// of that run. Independent runs build independent contexts, so Monte Carlo
/// replications never share state.
pub struct SimContext {
    pub config: SimulationConfig,
    pub inventory: InventoryState,
    pub rng: StdRng,
    pub daily_log: Vec<DailyRecord>,
    pub order_log: Vec<OrderRecord>,
}

/// The two cooperating process kinds of the run.
///
/// `DailyReview` recurs once per day and reschedules itself; `Replenishment`
/// is spawned per order, sleeps out its lead time, delivers, and terminates.
pub enum InventoryProcess {
    DailyReview,
    Replenishment { quantity: u32 },
}

impl Process<SimContext> for InventoryProcess {
    fn resume(self, sim: &mut Scheduler<SimContext, Self>) -> Result<(), SimulationError> {
        match self {
            InventoryProcess::DailyReview => daily_review(sim),
            InventoryProcess::Replenishment { quantity } => {
                let ctx = sim.state_mut();
                let max_capacity = ctx.config.max_capacity;
                ctx.inventory.receive(quantity, max_capacity);
                ctx.inventory.on_order_pending = false;
                Ok(())
            }
        }
    }
}

/// One review cycle. Day labels are 1-based while the clock starts at 0.
fn daily_review(sim: &mut Scheduler<SimContext, InventoryProcess>) -> Result<(), SimulationError> {
    let day = sim.now() + 1;

    let ctx = sim.state_mut();
    let beginning_stock = ctx.inventory.current_stock;
    let demand = ctx.config.demand_table.sample(&mut ctx.rng)?;
    let shortage = ctx.inventory.satisfy_demand(demand);

    if ctx.inventory.needs_reorder(ctx.config.reorder_level) {
        let quantity = ctx.config.order_quantity;
        let lead_time = ctx.config.lead_time_table.sample(&mut ctx.rng)?;
        ctx.inventory.on_order_pending = true;
        ctx.order_log.push(OrderRecord {
            day_placed: day,
            quantity,
            lead_time,
        });
        sim.schedule_after(
            InventoryProcess::Replenishment { quantity },
            u64::from(lead_time),
        )?;
    }

    let ctx = sim.state_mut();
    ctx.daily_log.push(DailyRecord {
        day,
        beginning_stock,
        demand,
        shortage,
        ending_stock: ctx.inventory.current_stock,
    });

    sim.schedule_after(InventoryProcess::DailyReview, 1)
}

/// The records and summary a completed run hands to the reporting layer.
pub struct SimulationOutput {
    pub daily_records: Vec<DailyRecord>,
    pub order_records: Vec<OrderRecord>,
    pub summary: RunSummary,
}

/// Run the simulation for `days` simulated days.
///
/// Passing a seed makes the trajectory fully reproducible; `None` seeds from
/// the OS.
pub fn run_simulation(
    days: u64,
    config: SimulationConfig,
    seed: Option<u64>,
) -> Result<SimulationOutput, SimulationError> {
    config.validate()?;

    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let bootstrap_quantity = config.bootstrap_quantity;
    let bootstrap_lead_time = u64::from(config.bootstrap_lead_time);

    let context = SimContext {
        inventory: InventoryState::new(config.initial_stock),
        rng,
        daily_log: Vec::new(),
        order_log: Vec::new(),
        config,
    };
    let mut sim = Scheduler::new(context);

    // Warm start: one order is already in transit. It does not set the
    // pending flag, so day 1 may still place a real order.
    sim.schedule_after(
        InventoryProcess::Replenishment {
            quantity: bootstrap_quantity,
        },
        bootstrap_lead_time,
    )?;
    sim.spawn(InventoryProcess::DailyReview);
    sim.run(days)?;

    let context = sim.into_state();
    let summary = stats::summarize(&context.daily_log, &context.order_log);
    Ok(SimulationOutput {
        daily_records: context.daily_log,
        order_records: context.order_log,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_record_per_simulated_day() {
        let output = run_simulation(30, SimulationConfig::default(), Some(1)).unwrap();
        assert_eq!(output.daily_records.len(), 30);
        assert_eq!(output.daily_records.first().unwrap().day, 1);
        assert_eq!(output.daily_records.last().unwrap().day, 30);
    }

    #[test]
    fn order_count_matches_order_log() {
        let output = run_simulation(100, SimulationConfig::default(), Some(2)).unwrap();
        assert_eq!(
            output.summary.orders_placed as usize,
            output.order_records.len()
        );
    }
}
