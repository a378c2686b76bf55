//! Fixed walker color palette.
//!
//! Fifty distinct colors; walker `i` takes entry `i`, wrapping past the end.
//! The palette is as large as the maximum walker count, so wrapping only
//! matters for callers spawning outside the configured range.

use serde::{Deserialize, Serialize};

/// RGB color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const PALETTE: [Color; 50] = [
    Color::rgb(255, 102, 51),
    Color::rgb(255, 179, 153),
    Color::rgb(255, 51, 255),
    Color::rgb(255, 255, 153),
    Color::rgb(0, 179, 230),
    Color::rgb(230, 179, 51),
    Color::rgb(51, 102, 230),
    Color::rgb(153, 153, 102),
    Color::rgb(153, 255, 153),
    Color::rgb(179, 77, 77),
    Color::rgb(128, 179, 0),
    Color::rgb(128, 153, 0),
    Color::rgb(230, 179, 179),
    Color::rgb(102, 128, 179),
    Color::rgb(102, 153, 26),
    Color::rgb(255, 153, 230),
    Color::rgb(204, 255, 26),
    Color::rgb(255, 26, 102),
    Color::rgb(230, 51, 26),
    Color::rgb(51, 255, 204),
    Color::rgb(102, 153, 77),
    Color::rgb(179, 102, 204),
    Color::rgb(77, 128, 0),
    Color::rgb(179, 51, 0),
    Color::rgb(204, 128, 204),
    Color::rgb(102, 102, 77),
    Color::rgb(153, 26, 255),
    Color::rgb(230, 102, 255),
    Color::rgb(77, 179, 255),
    Color::rgb(26, 179, 153),
    Color::rgb(230, 102, 179),
    Color::rgb(51, 153, 26),
    Color::rgb(204, 153, 153),
    Color::rgb(179, 179, 26),
    Color::rgb(0, 230, 128),
    Color::rgb(77, 128, 102),
    Color::rgb(128, 153, 128),
    Color::rgb(230, 255, 128),
    Color::rgb(26, 255, 51),
    Color::rgb(153, 153, 51),
    Color::rgb(255, 51, 128),
    Color::rgb(204, 204, 0),
    Color::rgb(102, 230, 77),
    Color::rgb(77, 128, 204),
    Color::rgb(153, 0, 179),
    Color::rgb(230, 77, 102),
    Color::rgb(77, 179, 128),
    Color::rgb(255, 77, 77),
    Color::rgb(153, 230, 230),
    Color::rgb(102, 102, 255),
];

/// Color for the walker at `index`, wrapping past the palette end.
pub fn color_for(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}
