use crate::rigid_body::{Body, Boundary, Vec2};

use super::settings::SolverSettings;

/// Narrow-phase result. `normal` points from the first shape to the second.
#[derive(Clone, Copy, Debug)]
pub(super) struct Contact {
    pub normal: Vec2,
    pub penetration: f32,
}

/// Circle vs circle overlap test
pub(super) fn circle_circle(a: &Body, b: &Body) -> Option<Contact> {
    let d = b.pos - a.pos;
    let reach = a.radius + b.radius;
    let dist2 = d.length_squared();
    if dist2 >= reach * reach {
        return None;
    }

    let dist = dist2.sqrt();
    // Coincident centres: separate vertically.
    let normal = if dist > 1e-4 { d * (1.0 / dist) } else { Vec2::new(0.0, 1.0) };

    Some(Contact { normal, penetration: reach - dist })
}

/// Static rectangle vs circle. Normal points from the wall into the body.
pub(super) fn boundary_circle(wall: &Boundary, body: &Body) -> Option<Contact> {
    let c = body.pos;

    if wall.contains(c) {
        // Centre is inside the wall: push out along the shallowest axis.
        let d = c - wall.center;
        let overlap_x = wall.half_extents.x - d.x.abs();
        let overlap_y = wall.half_extents.y - d.y.abs();
        let (normal, depth) = if overlap_x < overlap_y {
            (Vec2::new(if d.x < 0.0 { -1.0 } else { 1.0 }, 0.0), overlap_x)
        } else {
            (Vec2::new(0.0, if d.y < 0.0 { -1.0 } else { 1.0 }), overlap_y)
        };
        return Some(Contact { normal, penetration: depth + body.radius });
    }

    let diff = c - wall.closest_point(c);
    let dist2 = diff.length_squared();
    if dist2 >= body.radius * body.radius {
        return None;
    }

    let dist = dist2.sqrt();
    Some(Contact {
        normal: diff * (1.0 / dist.max(1e-4)),
        penetration: body.radius - dist,
    })
}

/// Velocity/mass view of one side of a contact
#[derive(Clone, Copy)]
struct Side {
    pos: Vec2,
    velocity: Vec2,
    angular_vel: f32,
    inv_mass: f32,
    inv_inertia: f32,
    /// Contact point relative to the centre
    offset: Vec2,
}

impl Side {
    fn of(body: &Body, offset: Vec2) -> Self {
        Self {
            pos: body.pos,
            velocity: body.velocity,
            angular_vel: body.angular_vel,
            inv_mass: body.inv_mass,
            inv_inertia: body.inv_inertia,
            offset,
        }
    }

    fn fixed() -> Self {
        Self {
            pos: Vec2::zero(),
            velocity: Vec2::zero(),
            angular_vel: 0.0,
            inv_mass: 0.0,
            inv_inertia: 0.0,
            offset: Vec2::zero(),
        }
    }

    #[inline]
    fn point_velocity(&self) -> Vec2 {
        self.velocity + self.offset.spin(self.angular_vel)
    }

    fn apply(&mut self, impulse: Vec2) {
        self.velocity += impulse * self.inv_mass;
        self.angular_vel += self.offset.cross(impulse) * self.inv_inertia;
    }

    fn write_back(&self, body: &mut Body) {
        body.pos = self.pos;
        body.velocity = self.velocity;
        body.angular_vel = self.angular_vel;
    }
}

/// Resolve a body-body contact in place
pub(super) fn resolve_pair(a: &mut Body, b: &mut Body, contact: &Contact, settings: &SolverSettings) {
    let mut sa = Side::of(a, contact.normal * a.radius);
    let mut sb = Side::of(b, -contact.normal * b.radius);
    // Bounciest and least grippy material wins.
    let restitution = a.restitution.max(b.restitution);
    let friction = a.friction.min(b.friction);

    solve(&mut sa, &mut sb, contact, restitution, friction, settings);

    sa.write_back(a);
    sb.write_back(b);
}

/// Resolve a wall-body contact in place. The wall never moves.
pub(super) fn resolve_boundary(wall: &Boundary, body: &mut Body, contact: &Contact, settings: &SolverSettings) {
    let mut sa = Side::fixed();
    let mut sb = Side::of(body, -contact.normal * body.radius);
    let restitution = wall.restitution.max(body.restitution);
    let friction = wall.friction.min(body.friction);

    solve(&mut sa, &mut sb, contact, restitution, friction, settings);

    sb.write_back(body);
}

fn solve(a: &mut Side, b: &mut Side, contact: &Contact, restitution: f32, friction: f32, settings: &SolverSettings) {
    let n = contact.normal;
    let inv_mass_sum = a.inv_mass + b.inv_mass;
    if inv_mass_sum <= 0.0 {
        return;
    }

    // Positional correction (Baumgarte-style, with slop)
    let depth = (contact.penetration - settings.slop).max(0.0);
    let correction = n * (depth / inv_mass_sum * settings.correction);
    a.pos -= correction * a.inv_mass;
    b.pos += correction * b.inv_mass;

    let rv = b.point_velocity() - a.point_velocity();
    let vn = rv.dot(n);
    if vn > 0.0 {
        return;
    }

    // Slow impacts don't bounce; keeps the pile from buzzing.
    let e = if -vn < settings.resting_speed { 0.0 } else { restitution };
    let j = -(1.0 + e) * vn / inv_mass_sum;
    let normal_impulse = n * j;
    a.apply(-normal_impulse);
    b.apply(normal_impulse);

    // Coulomb friction along the contact tangent
    let rv = b.point_velocity() - a.point_velocity();
    let tangent = (rv - n * rv.dot(n)).normalize();
    if tangent.length_squared() == 0.0 {
        return;
    }

    let vt = rv.dot(tangent);
    let ra_t = a.offset.cross(tangent);
    let rb_t = b.offset.cross(tangent);
    let denom = inv_mass_sum + ra_t * ra_t * a.inv_inertia + rb_t * rb_t * b.inv_inertia;
    if denom <= 0.0 {
        return;
    }

    let max_friction = friction * j;
    let jt = (-vt / denom).clamp(-max_friction, max_friction);
    let friction_impulse = tangent * jt;
    a.apply(-friction_impulse);
    b.apply(friction_impulse);
}
