use bevy_ecs::prelude::Component;

use crate::palette::Color;

/// Canvas position in pixels; origin is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Per-tick displacement in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// One random walker. Speed, line width and color are cached at spawn time;
/// later configuration edits only reach walkers spawned after the next
/// restart. The halt flag is one-way: once set, the walker is never stepped
/// or drawn again.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct Walker {
    /// Current heading in radians.
    pub angle_rad: f64,
    pub color: Color,
    pub speed: f64,
    pub line_width: f64,
    pub halted: bool,
}
