//! Reacts to `SimulationStarted` and arms the first repeating tick source.

use bevy_ecs::prelude::{Res, ResMut};

use crate::clock::{CurrentEvent, EventKind, SimulationClock};

pub fn simulation_started_system(mut clock: ResMut<SimulationClock>, event: Res<CurrentEvent>) {
    if event.0.kind != EventKind::SimulationStarted {
        return;
    }

    // A restart may already have armed a source; never stack a second one.
    if clock.active_tick_source().is_none() {
        clock.arm_tick_source();
    }
}
