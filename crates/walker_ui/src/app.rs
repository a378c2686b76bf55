//! Application state bridging the simulation world and the egui panels.

use std::time::Instant;

use bevy_ecs::prelude::{Schedule, World};

use walker_core::canvas::CanvasSize;
use walker_core::clock::SimulationClock;
use walker_core::config::SimulationConfig;
use walker_core::ecs::Walker;
use walker_core::runner::{initialize_simulation, run_next_event, simulation_schedule};
use walker_core::scenario::{build_scenario, restart, ScenarioParams};

use crate::ui::constants::{CANVAS_HEIGHT, CANVAS_WIDTH};

const SETTINGS_FILE: &str = "walker-settings.json";

pub struct WalkerApp {
    pub world: World,
    pub schedule: Schedule,
    pub running: bool,
    pub steps_executed: usize,
    pub last_frame_instant: Option<Instant>,
    // Panel-side copies of the config; pushed into the world every frame.
    pub speed: f64,
    pub line_width: f64,
    pub walker_count: usize,
    pub direction_limit: u32,
}

impl WalkerApp {
    pub fn new() -> Self {
        let mut world = World::new();
        let params = ScenarioParams::default().with_canvas(CanvasSize {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
        });
        build_scenario(&mut world, params);
        initialize_simulation(&mut world);

        let config = *world.resource::<SimulationConfig>();
        Self {
            world,
            schedule: simulation_schedule(),
            running: true,
            steps_executed: 0,
            last_frame_instant: None,
            speed: config.speed(),
            line_width: config.line_width(),
            walker_count: config.walker_count(),
            direction_limit: config.direction_limit(),
        }
    }

    /// Pushes the panel values into the shared config. The direction limit
    /// takes effect on the next tick; the rest on the next restart.
    pub fn apply_settings(&mut self) {
        let mut config = self.world.resource_mut::<SimulationConfig>();
        config.set_speed(self.speed);
        config.set_line_width(self.line_width);
        config.set_walker_count(self.walker_count);
        config.set_direction_limit(self.direction_limit);
    }

    pub fn restart(&mut self) {
        self.apply_settings();
        restart(&mut self.world);
        self.last_frame_instant = None;
        let config = self.world.resource::<SimulationConfig>();
        log::info!(
            "restart: {} walkers, speed {}, line width {}, direction limit {}",
            config.walker_count(),
            config.speed(),
            config.line_width(),
            config.direction_limit()
        );
    }

    pub fn run_steps(&mut self, count: usize) {
        for _ in 0..count {
            if !run_next_event(&mut self.world, &mut self.schedule) {
                break;
            }
            self.steps_executed += 1;
        }
    }

    /// Processes every event due within `budget_ms` of simulation time.
    pub fn advance_by_budget(&mut self, budget_ms: u64) {
        let target = self.world.resource::<SimulationClock>().now() + budget_ms;
        loop {
            match self.world.resource::<SimulationClock>().next_event_time() {
                Some(timestamp) if timestamp <= target => {
                    run_next_event(&mut self.world, &mut self.schedule);
                    self.steps_executed += 1;
                }
                _ => break,
            }
        }
    }

    pub fn sim_time_ms(&self) -> u64 {
        self.world.resource::<SimulationClock>().now()
    }

    pub fn walker_counts(&mut self) -> (usize, usize) {
        let mut total = 0;
        let mut halted = 0;
        let mut query = self.world.query::<&Walker>();
        for walker in query.iter(&self.world) {
            total += 1;
            if walker.halted {
                halted += 1;
            }
        }
        (total, halted)
    }

    pub fn save_settings(&mut self) {
        self.apply_settings();
        let config = *self.world.resource::<SimulationConfig>();
        match serde_json::to_string_pretty(&config) {
            Ok(json) => match std::fs::write(SETTINGS_FILE, json) {
                Ok(()) => log::info!("settings saved to {SETTINGS_FILE}"),
                Err(err) => log::warn!("failed to write {SETTINGS_FILE}: {err}"),
            },
            Err(err) => log::warn!("failed to serialize settings: {err}"),
        }
    }

    pub fn load_settings(&mut self) {
        let json = match std::fs::read_to_string(SETTINGS_FILE) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("failed to read {SETTINGS_FILE}: {err}");
                return;
            }
        };
        let config: SimulationConfig = match serde_json::from_str(&json) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("invalid settings file {SETTINGS_FILE}: {err}");
                return;
            }
        };
        if let Err(err) = config.validate() {
            log::warn!("rejecting settings file {SETTINGS_FILE}: {err}");
            return;
        }
        self.speed = config.speed();
        self.line_width = config.line_width();
        self.walker_count = config.walker_count();
        self.direction_limit = config.direction_limit();
        self.world.insert_resource(config);
        log::info!("settings loaded from {SETTINGS_FILE}");
    }
}

impl Default for WalkerApp {
    fn default() -> Self {
        Self::new()
    }
}
