//! Walker stepping: the per-tick boundary-check/draw/move pass.
//!
//! Order per walker: boundary check first (a halt suppresses the draw and
//! move for that tick), then a segment from the pre-update position along the
//! old velocity, then the advance and a fresh random heading snapped to the
//! tick's direction set.

use bevy_ecs::prelude::{Query, Res, ResMut};
use rand::Rng;

use crate::canvas::{CanvasSize, Segment, TrailBuffer};
use crate::clock::{CurrentEvent, EventKind, SimulationClock};
use crate::config::SimulationConfig;
use crate::direction::DirectionSet;
use crate::ecs::{Position, Velocity, Walker};
use crate::scenario::WalkerRng;

/// True when `position` lies within `line_width` of any canvas edge.
pub fn touches_boundary(canvas: CanvasSize, position: Position, line_width: f64) -> bool {
    position.x >= canvas.width - line_width
        || position.x <= line_width
        || position.y >= canvas.height - line_width
        || position.y <= line_width
}

pub fn walker_step_system(
    mut clock: ResMut<SimulationClock>,
    event: Res<CurrentEvent>,
    config: Res<SimulationConfig>,
    canvas: Res<CanvasSize>,
    mut rng: ResMut<WalkerRng>,
    mut trail: ResMut<TrailBuffer>,
    mut walkers: Query<(&mut Walker, &mut Position, &mut Velocity)>,
) {
    if event.0.kind != EventKind::Tick {
        return;
    }

    // Ticks from a retired source are dropped and never rescheduled; this is
    // the cancellation path restart relies on.
    let Some(source) = event.0.source else {
        return;
    };
    if !clock.is_active_source(source) {
        return;
    }

    // Rebuilt from the live configuration, so direction-limit edits apply on
    // the next tick while each walker keeps its spawn-time parameters.
    let directions = match DirectionSet::generate(config.direction_limit()) {
        Ok(set) => set,
        Err(_) => {
            // Setters keep the limit positive, but a config loaded from
            // outside may not. Keep ticking so a live edit can recover.
            clock.schedule_next_tick(source);
            return;
        }
    };

    for (mut walker, mut position, mut velocity) in walkers.iter_mut() {
        if walker.halted {
            continue;
        }

        if touches_boundary(*canvas, *position, walker.line_width) {
            walker.halted = true;
            *velocity = Velocity { x: 0.0, y: 0.0 };
            continue;
        }

        trail.push(Segment {
            from: (position.x, position.y),
            to: (position.x + velocity.x, position.y + velocity.y),
            color: walker.color,
            width: walker.line_width,
        });

        // Advance along the old velocity, then pick the next heading.
        position.x += velocity.x;
        position.y += velocity.y;

        let goal = rng.0.gen_range(0.0..360.0);
        let angle_rad = directions.nearest(goal).to_radians();
        walker.angle_rad = angle_rad;
        velocity.x = walker.speed * angle_rad.cos();
        velocity.y = walker.speed * angle_rad.sin();
    }

    clock.schedule_next_tick(source);
}
