pub mod simulation_started;
pub mod walker_step;
