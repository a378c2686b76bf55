//! Direction quantizer: the finite set of headings a walker may snap to.

use std::error::Error;
use std::fmt;

/// A direction set cannot be built from a zero limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZeroDirectionLimit;

impl fmt::Display for ZeroDirectionLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "direction limit must be at least 1")
    }
}

impl Error for ZeroDirectionLimit {}

/// Evenly spaced headings over [0, 360] inclusive, in degrees. Both endpoints
/// are present so a walker near a wall is as likely to turn back as to carry
/// on.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionSet {
    angles: Vec<f64>,
}

impl DirectionSet {
    /// Builds the `limit + 1` angles `i * (360 / limit)` for `i in 0..=limit`.
    pub fn generate(limit: u32) -> Result<Self, ZeroDirectionLimit> {
        if limit == 0 {
            return Err(ZeroDirectionLimit);
        }
        let step = 360.0 / f64::from(limit);
        let angles = (0..=limit).map(|i| f64::from(i) * step).collect();
        Ok(Self { angles })
    }

    pub fn angles(&self) -> &[f64] {
        &self.angles
    }

    /// The member closest to `goal` in absolute difference. Ties keep the
    /// first minimizer under a left-to-right scan.
    pub fn nearest(&self, goal: f64) -> f64 {
        // Non-empty by construction.
        let mut best = self.angles[0];
        for &angle in &self.angles[1..] {
            if (angle - goal).abs() < (best - goal).abs() {
                best = angle;
            }
        }
        best
    }
}

/// Guarded form of [DirectionSet::nearest] over a raw slice; `None` when
/// `directions` is empty.
pub fn nearest_direction(goal: f64, directions: &[f64]) -> Option<f64> {
    let mut iter = directions.iter().copied();
    let mut best = iter.next()?;
    for angle in iter {
        if (angle - goal).abs() < (best - goal).abs() {
            best = angle;
        }
    }
    Some(best)
}
