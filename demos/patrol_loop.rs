//! A small robot control loop: idle until armed, patrol until the
//! battery runs low, then dock.
//!
//! Run with: `cargo run --example patrol_loop`

use regime::builder::{state, MachineBuilder};
use regime::BuildError;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;

fn main() -> Result<(), BuildError> {
    let armed = Arc::new(AtomicBool::new(false));
    let battery = Arc::new(AtomicU32::new(100));

    let armed_for_patrol = Arc::clone(&armed);
    let battery_for_patrol = Arc::clone(&battery);
    let battery_drain = Arc::clone(&battery);
    let battery_for_dock = Arc::clone(&battery);

    let mut machine = MachineBuilder::new()
        .state(state("idle").action(|| true))?
        .state(
            state("patrol")
                .action(move || {
                    let left = battery_drain.fetch_sub(30, Ordering::Relaxed) - 30;
                    println!("  patrolling, battery at {left}%");
                    true
                })
                .predicate(move |active: &str| {
                    active == "idle"
                        && armed_for_patrol.load(Ordering::Relaxed)
                        && battery_for_patrol.load(Ordering::Relaxed) > 30
                }),
        )?
        .state(
            state("dock")
                .action(|| {
                    println!("  docked, charging");
                    true
                })
                .predicate(move |active: &str| {
                    active == "patrol" && battery_for_dock.load(Ordering::Relaxed) <= 30
                }),
        )?
        .initial("idle")
        .build()?;

    for tick in 0..6 {
        if tick == 2 {
            println!("-- arming robot --");
            armed.store(true, Ordering::Relaxed);
        }
        let ok = machine.run_with_transition(true);
        println!(
            "tick {tick}: active={} step_ok={ok}",
            machine.active_state_name()
        );
    }

    println!("visited: {:?}", machine.history().path());
    Ok(())
}
