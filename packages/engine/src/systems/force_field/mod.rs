//! Force Field - turns pointer motion into local pushes on nearby bodies
//!
//! Per frame, with pointer displacement `d` and speed `|d|`, a body at
//! distance `r < radius` gets
//!
//! ```text
//! falloff = 1 - r / radius
//! impulse = d * drag_along + dir * falloff * (|d| * speed_scale + base_nudge)
//! ```
//!
//! where `dir` points from the pointer to the body. A fast sweep flings and
//! carries bodies; a resting pointer only nudges them.

mod pointer;

pub use pointer::PointerState;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::domain::config::ForceFieldConfig;
use crate::rigid_body::{Body, BodyId, Vec2};
use crate::rigid_body_system::PhysicsWorld;

#[derive(Clone, Debug)]
pub struct ForceField {
    config: ForceFieldConfig,
}

impl ForceField {
    pub fn new(config: ForceFieldConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ForceFieldConfig {
        &self.config
    }

    /// Linear falloff: 1 at the pointer, 0 at (and beyond) the radius
    #[inline]
    pub fn falloff(&self, distance: f32) -> f32 {
        if distance >= self.config.radius {
            0.0
        } else {
            1.0 - distance / self.config.radius
        }
    }

    /// Impulse for a body at `body_pos`, or `None` if it is out of reach
    pub fn impulse_for(&self, pointer: Vec2, displacement: Vec2, body_pos: Vec2) -> Option<Vec2> {
        let offset = body_pos - pointer;
        let distance = offset.length();
        let falloff = self.falloff(distance);
        if falloff <= 0.0 {
            return None;
        }

        let speed = displacement.length();
        let magnitude = falloff * (speed * self.config.speed_scale + self.config.base_nudge);
        // At distance 0 the offset is zero too, so the push vanishes instead of going NaN.
        let direction = offset * (1.0 / distance.max(self.config.epsilon));

        Some(displacement * self.config.drag_along + direction * magnitude)
    }

    /// Impulses for every body in reach of the pointer
    pub fn compute(&self, pointer: &PointerState, bodies: &[Body]) -> Vec<(BodyId, Vec2)> {
        let Some(at) = pointer.current() else {
            return Vec::new();
        };
        let displacement = pointer.displacement();

        #[cfg(feature = "parallel")]
        {
            bodies
                .par_iter()
                .filter_map(|b| self.impulse_for(at, displacement, b.pos).map(|j| (b.id, j)))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            bodies
                .iter()
                .filter_map(|b| self.impulse_for(at, displacement, b.pos).map(|j| (b.id, j)))
                .collect()
        }
    }

    /// Push bodies for this frame, then advance the pointer.
    ///
    /// Returns the number of bodies affected.
    pub fn apply(&self, pointer: &mut PointerState, world: &mut PhysicsWorld) -> u32 {
        let impulses = self.compute(pointer, world.bodies());
        let mut affected = 0;
        for (id, impulse) in impulses {
            if world.apply_impulse(id, impulse) {
                affected += 1;
            }
        }
        pointer.advance();
        affected
    }
}
