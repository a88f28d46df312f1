#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::rigid_body::{Body, BodyDesc, BodyId, Boundary, BoundaryShape, Vec2};

use super::collision::{boundary_circle, circle_circle, resolve_boundary, resolve_pair};
use super::integrate::integrate_body;
use super::settings::{BoundaryMaterial, SolverSettings};

/// Owns gravity, stepping and the body/boundary collections
#[derive(Debug)]
pub struct PhysicsWorld {
    bodies: Vec<Body>,
    boundaries: Vec<Boundary>,
    gravity_y: f32,
    settings: SolverSettings,
    next_id: BodyId,
    contacts_last_step: u32,
}

impl PhysicsWorld {
    /// Empty world with downward acceleration `gravity_y` (px/s²)
    pub fn new(gravity_y: f32) -> Self {
        Self::with_settings(gravity_y, SolverSettings::default())
    }

    pub fn with_settings(gravity_y: f32, settings: SolverSettings) -> Self {
        Self {
            bodies: Vec::new(),
            boundaries: Vec::with_capacity(3),
            gravity_y,
            settings,
            next_id: 1,
            contacts_last_step: 0,
        }
    }

    fn allocate_id(&mut self) -> BodyId {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1).max(1);
        id
    }

    /// Insert a static, infinite-mass boundary centred at `center`
    pub fn add_boundary(&mut self, shape: BoundaryShape, center: Vec2, size: Vec2, material: BoundaryMaterial) -> BodyId {
        let id = self.allocate_id();
        let boundary = match shape {
            BoundaryShape::Rectangle => {
                Boundary::new_rect(id, center, size, material.restitution, material.friction)
            }
        };
        self.boundaries.push(boundary);
        id
    }

    /// Insert a dynamic circle
    pub fn add_body(&mut self, desc: &BodyDesc) -> BodyId {
        let id = self.allocate_id();
        self.bodies.push(Body::new_circle(desc, id));
        id
    }

    /// Accumulate an impulse on a body; resolved on the next `step`.
    ///
    /// Returns `false` if no dynamic body has this ID (boundaries included).
    pub fn apply_impulse(&mut self, id: BodyId, impulse: Vec2) -> bool {
        if !impulse.is_finite() {
            return false;
        }
        match self.bodies.iter_mut().find(|b| b.id == id) {
            Some(body) => {
                body.apply_impulse(impulse);
                true
            }
            None => false,
        }
    }

    /// Remove every dynamic body matching `predicate`. Boundaries are never touched.
    pub fn remove_bodies<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&Body) -> bool,
    {
        let before = self.bodies.len();
        self.bodies.retain(|b| !predicate(b));
        if self.bodies.is_empty() {
            // Restart numbering right after the boundaries so ids stay small
            self.next_id = self.boundaries.iter().map(|w| w.id).max().unwrap_or(0) + 1;
        }
        before - self.bodies.len()
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// `dt` is clamped to `max_dt_ms`; there is no fixed-step catch-up.
    pub fn step(&mut self, dt: f32) {
        self.contacts_last_step = 0;
        if self.bodies.is_empty() || !(dt > 0.0) {
            return;
        }

        let dt = dt.min(self.settings.max_dt_ms / 1000.0);
        let gravity_y = self.gravity_y;
        let max_speed = self.settings.max_speed;

        #[cfg(feature = "parallel")]
        {
            self.bodies
                .par_iter_mut()
                .for_each(|body| integrate_body(body, gravity_y, dt, max_speed));
        }
        #[cfg(not(feature = "parallel"))]
        {
            for body in self.bodies.iter_mut() {
                integrate_body(body, gravity_y, dt, max_speed);
            }
        }

        for _ in 0..self.settings.iterations.max(1) {
            self.contacts_last_step += self.solve_contacts();
        }
    }

    /// One pass over all body-body and body-boundary pairs
    fn solve_contacts(&mut self) -> u32 {
        let settings = self.settings;
        let mut contacts = 0;
        let n = self.bodies.len();

        for j in 1..n {
            let (left, right) = self.bodies.split_at_mut(j);
            let b = &mut right[0];
            for a in left.iter_mut() {
                if let Some(contact) = circle_circle(a, b) {
                    resolve_pair(a, b, &contact, &settings);
                    contacts += 1;
                }
            }
        }

        for body in self.bodies.iter_mut() {
            for wall in self.boundaries.iter() {
                if let Some(contact) = boundary_circle(wall, body) {
                    resolve_boundary(wall, body, &contact, &settings);
                    contacts += 1;
                }
            }
        }

        contacts
    }

    /// Release all bodies and boundaries. Consumes the world.
    pub fn destroy(mut self) {
        log::debug!(
            "physics world destroyed ({} bodies, {} boundaries)",
            self.bodies.len(),
            self.boundaries.len()
        );
        self.bodies.clear();
        self.boundaries.clear();
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn boundaries(&self) -> &[Boundary] {
        &self.boundaries
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn boundary_count(&self) -> usize {
        self.boundaries.len()
    }

    /// Contacts resolved during the last step (summed over passes)
    pub fn contacts_last_step(&self) -> u32 {
        self.contacts_last_step
    }

    pub fn gravity_y(&self) -> f32 {
        self.gravity_y
    }

    pub fn set_gravity(&mut self, gravity_y: f32) {
        self.gravity_y = gravity_y;
    }

    pub fn settings(&self) -> &SolverSettings {
        &self.settings
    }
}
