pub mod game;
pub mod render;
pub mod rng;
pub mod simulation;
