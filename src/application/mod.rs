mod simulation;

pub use simulation::{MAX_SPEED, MIN_SPEED, Simulation};
