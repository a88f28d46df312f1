use super::body::BodyId;
use super::vec2::Vec2;

/// Shapes a static boundary can take
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryShape {
    /// Axis-aligned rectangle, positioned by its centre
    Rectangle,
}

/// Static, infinite-mass body. Never integrated, never receives impulses.
#[derive(Clone, Debug)]
pub struct Boundary {
    pub id: BodyId,
    pub shape: BoundaryShape,
    pub center: Vec2,
    pub half_extents: Vec2,
    pub restitution: f32,
    pub friction: f32,
}

impl Boundary {
    pub fn new_rect(id: BodyId, center: Vec2, size: Vec2, restitution: f32, friction: f32) -> Self {
        Self {
            id,
            shape: BoundaryShape::Rectangle,
            center,
            half_extents: Vec2::new(size.x.abs() * 0.5, size.y.abs() * 0.5),
            restitution: restitution.clamp(0.0, 1.0),
            friction: friction.max(0.0),
        }
    }

    /// Closest point on (or inside) the rectangle to `p`
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        let min = self.center - self.half_extents;
        let max = self.center + self.half_extents;
        Vec2::new(p.x.clamp(min.x, max.x), p.y.clamp(min.y, max.y))
    }

    pub fn contains(&self, p: Vec2) -> bool {
        let d = p - self.center;
        d.x.abs() <= self.half_extents.x && d.y.abs() <= self.half_extents.y
    }
}
