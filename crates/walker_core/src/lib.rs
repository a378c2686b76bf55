pub mod canvas;
pub mod clock;
pub mod config;
pub mod direction;
pub mod ecs;
pub mod palette;
pub mod runner;
pub mod scenario;
pub mod systems;

#[cfg(feature = "test-helpers")]
pub mod test_helpers;
