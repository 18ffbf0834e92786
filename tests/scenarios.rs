//! Scenario tests driving the simulation with single-band tables, which pin
//! every draw to a known outcome.

use inventory_sim::{run_simulation, Band, DistributionTable, Outcome, SimulationConfig};

fn fixed_table(value: u32) -> DistributionTable {
    DistributionTable::new(vec![Band::new(1, 100, Outcome::Fixed(value))])
}

#[test]
fn starving_demand_registers_a_day_one_shortage() {
    // Demand pinned to 4 against 3 initial units.
    let config = SimulationConfig {
        demand_table: fixed_table(4),
        lead_time_table: fixed_table(10),
        ..SimulationConfig::default()
    };
    let output = run_simulation(5, config, Some(0)).unwrap();

    let day1 = &output.daily_records[0];
    assert_eq!(day1.beginning_stock, 3);
    assert_eq!(day1.demand, 4);
    assert_eq!(day1.shortage, 1);
    assert_eq!(day1.ending_stock, 0);

    // Empty stock is at the reorder level, so day 1 places an order.
    assert_eq!(output.order_records[0].day_placed, 1);
    assert_eq!(output.order_records[0].quantity, 100);
}

#[test]
fn pending_order_suppresses_further_reorders() {
    // Push the warm-start order past the horizon so only the day-1 order's
    // own lifecycle is in play.
    let config = SimulationConfig {
        demand_table: fixed_table(4),
        lead_time_table: fixed_table(10),
        bootstrap_lead_time: 100,
        ..SimulationConfig::default()
    };
    let output = run_simulation(23, config, Some(0)).unwrap();

    // Day 1 places the only order of the starved stretch; days 2..=10 run
    // dry at the reorder level but must not place a second one.
    let in_flight_orders: Vec<_> = output
        .order_records
        .iter()
        .filter(|o| o.day_placed <= 10)
        .collect();
    assert_eq!(in_flight_orders.len(), 1);
    assert_eq!(in_flight_orders[0].day_placed, 1);

    for day in 2..=10 {
        let record = &output.daily_records[day - 1];
        assert_eq!(record.beginning_stock, 0);
        assert_eq!(record.shortage, 4);
    }

    // The order placed on day 1 with lead time 10 lands before day 11's
    // review, clearing the gate.
    assert_eq!(output.daily_records[10].beginning_stock, 100);

    // Stock then drains by 4 a day and crosses the reorder level on day 23.
    assert_eq!(output.order_records.len(), 2);
    assert_eq!(output.order_records[1].day_placed, 23);
}

#[test]
fn warm_start_unit_arrives_two_days_in() {
    // No demand and a zero reorder level isolate the warm-start order.
    let config = SimulationConfig {
        demand_table: fixed_table(0),
        reorder_level: 0,
        ..SimulationConfig::default()
    };
    let output = run_simulation(5, config, Some(0)).unwrap();

    let beginnings: Vec<u32> = output
        .daily_records
        .iter()
        .map(|r| r.beginning_stock)
        .collect();
    assert_eq!(beginnings, vec![3, 3, 4, 4, 4]);
    assert!(output.order_records.is_empty());
}

#[test]
fn lead_time_one_arrival_lands_before_the_next_review() {
    // Day 1: 20 units, no demand, at or below the reorder level -> order 100
    // with lead time 1. The arrival must show in day 2's beginning stock,
    // clamped at capacity.
    let config = SimulationConfig {
        initial_stock: 20,
        reorder_level: 50,
        demand_table: fixed_table(0),
        lead_time_table: fixed_table(1),
        ..SimulationConfig::default()
    };
    let output = run_simulation(3, config, Some(0)).unwrap();

    assert_eq!(output.daily_records[0].ending_stock, 20);
    assert_eq!(output.order_records[0].day_placed, 1);
    assert_eq!(output.order_records[0].lead_time, 1);

    // 20 + 100 clamps at the 110 capacity; the excess is discarded.
    assert_eq!(output.daily_records[1].beginning_stock, 110);
}

#[test]
fn capacity_clamp_discards_excess_units() {
    let config = SimulationConfig {
        initial_stock: 50,
        demand_table: fixed_table(0),
        lead_time_table: fixed_table(1),
        ..SimulationConfig::default()
    };
    let output = run_simulation(4, config, Some(0)).unwrap();

    // Day 1 orders (50 <= 50); 50 + 100 -> 110, never beyond.
    assert_eq!(output.daily_records[1].beginning_stock, 110);
    for record in &output.daily_records {
        assert!(record.ending_stock <= 110);
        assert!(record.beginning_stock <= 110);
    }
}

#[test]
fn invalid_configuration_is_rejected_up_front() {
    let config = SimulationConfig {
        reorder_level: 200,
        ..SimulationConfig::default()
    };
    assert!(run_simulation(10, config, Some(0)).is_err());

    let config = SimulationConfig {
        demand_table: DistributionTable::new(vec![Band::new(1, 50, Outcome::Fixed(0))]),
        ..SimulationConfig::default()
    };
    assert!(run_simulation(10, config, Some(0)).is_err());
}
