//! User-tunable simulation parameters.
//!
//! Bounded the same way the settings panel bounds them; the setters clamp so
//! the record can never leave its documented ranges. A zero direction limit
//! is rejected here instead of surfacing later as an empty direction set.

use std::error::Error;
use std::fmt;
use std::ops::RangeInclusive;

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

pub const SPEED_RANGE: RangeInclusive<f64> = 1.0..=10.0;
pub const LINE_WIDTH_RANGE: RangeInclusive<f64> = 1.0..=10.0;
pub const WALKER_COUNT_RANGE: RangeInclusive<usize> = 1..=50;
pub const DIRECTION_LIMIT_RANGE: RangeInclusive<u32> = 3..=360;

/// Shared record of user-tunable parameters. The settings panel mutates it
/// through the setters; the simulation reads it every tick. Speed, line width
/// and walker count only take effect at the next restart; the direction limit
/// applies live.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Resource)]
pub struct SimulationConfig {
    speed: f64,
    line_width: f64,
    walker_count: usize,
    direction_limit: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            speed: 5.0,
            line_width: 1.0,
            walker_count: 5,
            direction_limit: 4,
        }
    }
}

impl SimulationConfig {
    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    pub fn walker_count(&self) -> usize {
        self.walker_count
    }

    pub fn direction_limit(&self) -> u32 {
        self.direction_limit
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed.clamp(*SPEED_RANGE.start(), *SPEED_RANGE.end());
    }

    pub fn set_line_width(&mut self, line_width: f64) {
        self.line_width = line_width.clamp(*LINE_WIDTH_RANGE.start(), *LINE_WIDTH_RANGE.end());
    }

    pub fn set_walker_count(&mut self, walker_count: usize) {
        self.walker_count =
            walker_count.clamp(*WALKER_COUNT_RANGE.start(), *WALKER_COUNT_RANGE.end());
    }

    pub fn set_direction_limit(&mut self, direction_limit: u32) {
        self.direction_limit =
            direction_limit.clamp(*DIRECTION_LIMIT_RANGE.start(), *DIRECTION_LIMIT_RANGE.end());
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.set_speed(speed);
        self
    }

    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.set_line_width(line_width);
        self
    }

    pub fn with_walker_count(mut self, walker_count: usize) -> Self {
        self.set_walker_count(walker_count);
        self
    }

    pub fn with_direction_limit(mut self, direction_limit: u32) -> Self {
        self.set_direction_limit(direction_limit);
        self
    }

    /// Range check for configs that bypassed the setters, e.g. ones
    /// deserialized from a settings file.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.direction_limit == 0 {
            return Err(ConfigError::ZeroDirectionLimit);
        }
        if self.walker_count == 0 {
            return Err(ConfigError::ZeroWalkerCount);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    ZeroDirectionLimit,
    ZeroWalkerCount,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroDirectionLimit => write!(f, "direction limit must be positive"),
            ConfigError::ZeroWalkerCount => write!(f, "walker count must be positive"),
        }
    }
}

impl Error for ConfigError {}
