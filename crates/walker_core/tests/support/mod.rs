//! Shared setup for integration tests.

use bevy_ecs::prelude::{Schedule, World};

use walker_core::runner::{initialize_simulation, run_next_event, simulation_schedule};

/// Builds the schedule and processes the SimulationStarted event so the tick
/// source is armed; every following `run_next_event` processes one tick.
#[allow(dead_code)]
pub fn start_simulation(world: &mut World) -> Schedule {
    let mut schedule = simulation_schedule();
    initialize_simulation(world);
    assert!(
        run_next_event(world, &mut schedule),
        "SimulationStarted should be queued"
    );
    schedule
}
