//! PhysicsWorld - small impulse solver for the backdrop's circles
//!
//! Behavior:
//! - Semi-implicit Euler integration with gravity and per-body air drag.
//! - Iterative contact resolution: circle/circle and circle/static rectangle.
//! - Restitution (max of the pair), Coulomb friction (min of the pair) and
//!   positional correction so resting piles don't sink.
//! - Boundaries are kept apart from bodies and are never integrated.

mod collision;
mod integrate;
mod settings;
mod system;

pub use settings::{BoundaryMaterial, SolverSettings};
pub use system::PhysicsWorld;
