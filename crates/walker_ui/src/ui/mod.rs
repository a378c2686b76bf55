//! UI modules for the walker visualization.

pub mod app_shell;
pub mod canvas;
pub mod constants;
pub mod controls;
