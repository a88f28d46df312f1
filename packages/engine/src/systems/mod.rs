//! Simulation systems: bodies, the physics world, spawning and pointer forces

pub mod rigid_body;
pub mod rigid_body_system;
pub mod spawner;
pub mod force_field;
