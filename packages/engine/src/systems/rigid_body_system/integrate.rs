use crate::rigid_body::{Body, Vec2};

/// Drag coefficients are expressed per frame at this rate
const DRAG_REFERENCE_HZ: f32 = 60.0;

/// Velocities below this (px/s) are snapped to zero to stop float creep
const SLEEP_EPSILON: f32 = 0.01;

/// Advance one body: pending impulses, gravity, air drag, speed clamp, then position.
#[inline]
pub(super) fn integrate_body(body: &mut Body, gravity_y: f32, dt: f32, max_speed: f32) {
    body.flush_impulse();

    body.velocity.y += gravity_y * dt;

    let keep = (1.0 - body.air_drag).powf(dt * DRAG_REFERENCE_HZ);
    body.velocity = body.velocity * keep;
    body.angular_vel *= keep;

    body.velocity = body.velocity.clamp_length(max_speed);

    if body.velocity.x.abs() < SLEEP_EPSILON {
        body.velocity.x = 0.0;
    }
    if body.velocity.y.abs() < SLEEP_EPSILON {
        body.velocity.y = 0.0;
    }

    body.pos += body.velocity * dt;
    body.angle = (body.angle + body.angular_vel * dt).rem_euclid(std::f32::consts::TAU);

    // A NaN would poison every contact it touches; park the body instead.
    if !body.pos.is_finite() || !body.velocity.is_finite() {
        body.velocity = Vec2::zero();
        body.angular_vel = 0.0;
        if !body.pos.is_finite() {
            body.pos = Vec2::zero();
        }
    }
}
