//! Scenario setup: spawn walkers at the canvas center and restart the run.

use bevy_ecs::prelude::{Entity, Resource, With, World};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::canvas::{CanvasSize, TrailBuffer};
use crate::clock::SimulationClock;
use crate::config::SimulationConfig;
use crate::ecs::{Position, Velocity, Walker};
use crate::palette;

pub const DEFAULT_CANVAS_WIDTH: f64 = 800.0;
pub const DEFAULT_CANVAS_HEIGHT: f64 = 600.0;

/// RNG for walker headings. Seeded for reproducible runs, entropy otherwise;
/// restart keeps drawing from the same stream.
#[derive(Debug, Resource)]
pub struct WalkerRng(pub StdRng);

/// Parameters for building a scenario.
#[derive(Debug, Clone)]
pub struct ScenarioParams {
    pub config: SimulationConfig,
    pub canvas: CanvasSize,
    /// Random seed for reproducibility (optional; if None, uses entropy).
    pub seed: Option<u64>,
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            config: SimulationConfig::default(),
            canvas: CanvasSize {
                width: DEFAULT_CANVAS_WIDTH,
                height: DEFAULT_CANVAS_HEIGHT,
            },
            seed: None,
        }
    }
}

impl ScenarioParams {
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_canvas(mut self, canvas: CanvasSize) -> Self {
        self.canvas = canvas;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Populates `world` with clock, config, canvas, trail buffer and
/// `walker_count` walkers at the canvas center. Caller must have already
/// created `world`; call [crate::runner::initialize_simulation] afterwards to
/// start the tick flow.
pub fn build_scenario(world: &mut World, params: ScenarioParams) {
    world.insert_resource(SimulationClock::default());
    world.insert_resource(TrailBuffer::default());
    world.insert_resource(params.canvas);
    world.insert_resource(params.config);

    let mut rng: StdRng = match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    spawn_walkers(world, &mut rng, params.config, params.canvas);
    world.insert_resource(WalkerRng(rng));
}

/// Clears the trail, replaces all walkers from the current configuration and
/// arms a fresh tick source. Arming retires the previous source, so a stale
/// tick cannot keep driving the new walkers.
pub fn restart(world: &mut World) {
    world.resource_mut::<TrailBuffer>().clear();

    let stale: Vec<Entity> = world
        .query_filtered::<Entity, With<Walker>>()
        .iter(world)
        .collect();
    for entity in stale {
        world.despawn(entity);
    }

    let config = *world.resource::<SimulationConfig>();
    let canvas = *world.resource::<CanvasSize>();
    let mut rng = world
        .remove_resource::<WalkerRng>()
        .map(|rng| rng.0)
        .unwrap_or_else(StdRng::from_entropy);
    spawn_walkers(world, &mut rng, config, canvas);
    world.insert_resource(WalkerRng(rng));

    world.resource_mut::<SimulationClock>().arm_tick_source();
}

fn spawn_walkers(world: &mut World, rng: &mut StdRng, config: SimulationConfig, canvas: CanvasSize) {
    let (center_x, center_y) = canvas.center();
    for index in 0..config.walker_count() {
        let angle_deg: f64 = rng.gen_range(0.0..360.0);
        let angle_rad = angle_deg.to_radians();
        world.spawn((
            Walker {
                angle_rad,
                color: palette::color_for(index),
                speed: config.speed(),
                line_width: config.line_width(),
                halted: false,
            },
            Position {
                x: center_x,
                y: center_y,
            },
            Velocity {
                x: config.speed() * angle_rad.cos(),
                y: config.speed() * angle_rad.sin(),
            },
        ));
    }
}
