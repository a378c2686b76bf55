//! Canvas-facing types: dimensions and the retained trail.

use bevy_ecs::prelude::Resource;

use crate::palette::Color;

/// Canvas pixel dimensions. Supplied by the host at startup and read once;
/// the simulation never resizes it.
#[derive(Debug, Clone, Copy, PartialEq, Resource)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }
}

/// One drawn trail segment, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub color: Color,
    pub width: f64,
}

/// Every segment drawn since the last restart. The UI replays this each
/// frame; restart clears it, which is the simulation's "clear canvas"
/// operation.
#[derive(Debug, Default, Resource)]
pub struct TrailBuffer {
    segments: Vec<Segment>,
}

impl TrailBuffer {
    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
