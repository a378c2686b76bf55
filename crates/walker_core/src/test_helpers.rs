//! Test helpers for common world setup.

use bevy_ecs::prelude::{Entity, World};

use crate::canvas::CanvasSize;
use crate::ecs::{Position, Velocity, Walker};
use crate::palette;
use crate::scenario::{build_scenario, ScenarioParams};

/// Canvas used across tests: square and small enough that walls are reached
/// within a few ticks.
pub const TEST_CANVAS: CanvasSize = CanvasSize {
    width: 200.0,
    height: 200.0,
};

/// Builds a world with the default config, the test canvas and a fixed seed.
pub fn create_test_world() -> World {
    let mut world = World::new();
    build_scenario(
        &mut world,
        ScenarioParams::default()
            .with_canvas(TEST_CANVAS)
            .with_seed(42),
    );
    world
}

/// Spawns an extra walker with an explicit position and velocity; speed is
/// derived from the velocity so the two stay consistent.
pub fn spawn_walker_at(
    world: &mut World,
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    line_width: f64,
) -> Entity {
    world
        .spawn((
            Walker {
                angle_rad: vy.atan2(vx),
                color: palette::color_for(0),
                speed: (vx * vx + vy * vy).sqrt(),
                line_width,
                halted: false,
            },
            Position { x, y },
            Velocity { x: vx, y: vy },
        ))
        .id()
}
