//! RigidBody - solid circles and static walls
//!
//! Bodies are plain circles positioned by their centre of mass. Boundaries are
//! static axis-aligned rectangles that only take part in collision response.

mod vec2;
mod body;
mod boundary;

pub use vec2::Vec2;
pub use body::{Body, BodyDesc, BodyId};
pub use boundary::{Boundary, BoundaryShape};
