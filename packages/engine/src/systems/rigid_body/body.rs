use crate::domain::skins::SkinId;

use super::vec2::Vec2;

/// Unique ID of a body inside one physics world (boundaries share the sequence)
pub type BodyId = u32;

/// Material and shape of a body about to be added to the world
#[derive(Clone, Copy, Debug)]
pub struct BodyDesc {
    pub pos: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    /// Mass per square pixel
    pub density: f32,
    /// Bounciness (0.0 = no bounce, 1.0 = full elastic)
    pub restitution: f32,
    /// Coulomb friction coefficient on contact
    pub friction: f32,
    /// Fraction of velocity lost per 60 Hz frame
    pub air_drag: f32,
    pub skin: SkinId,
}

/// Dynamic circular body - moves as a single unit
#[derive(Clone, Debug)]
pub struct Body {
    // === Physics State ===
    /// World position (center of mass)
    pub pos: Vec2,
    /// Velocity vector (pixels per second)
    pub velocity: Vec2,
    /// Rotation angle (radians)
    pub angle: f32,
    /// Angular velocity (radians per second)
    pub angular_vel: f32,
    pub id: BodyId,

    // === Shape & mass ===
    pub radius: f32,
    pub mass: f32,
    pub inv_mass: f32,
    /// Inverse moment of inertia (solid disc: I = ½ m r²)
    pub inv_inertia: f32,

    // === Material properties ===
    pub restitution: f32,
    pub friction: f32,
    pub air_drag: f32,

    /// Impulses accumulated since the last step
    pub pending_impulse: Vec2,

    pub skin: SkinId,
}

impl Body {
    /// Create a circular body from a description
    pub fn new_circle(desc: &BodyDesc, id: BodyId) -> Self {
        let radius = desc.radius.max(1.0);
        let area = std::f32::consts::PI * radius * radius;
        let mass = (area * desc.density).max(f32::EPSILON);
        let inertia = 0.5 * mass * radius * radius;

        Self {
            pos: desc.pos,
            velocity: desc.velocity,
            angle: 0.0,
            angular_vel: 0.0,
            id,
            radius,
            mass,
            inv_mass: 1.0 / mass,
            inv_inertia: 1.0 / inertia,
            restitution: desc.restitution.clamp(0.0, 1.0),
            friction: desc.friction.max(0.0),
            air_drag: desc.air_drag.clamp(0.0, 1.0),
            pending_impulse: Vec2::zero(),
            skin: desc.skin,
        }
    }

    /// Visual size in pixels (diameter)
    #[inline]
    pub fn size(&self) -> f32 {
        self.radius * 2.0
    }

    /// Accumulate an impulse, resolved on the next step
    pub fn apply_impulse(&mut self, impulse: Vec2) {
        self.pending_impulse += impulse;
    }

    /// Fold accumulated impulses into velocity
    pub(crate) fn flush_impulse(&mut self) {
        self.velocity += self.pending_impulse * self.inv_mass;
        self.pending_impulse = Vec2::zero();
    }

    /// Velocity of the surface point at `offset` from the centre
    #[inline]
    pub fn velocity_at(&self, offset: Vec2) -> Vec2 {
        self.velocity + offset.spin(self.angular_vel)
    }
}
