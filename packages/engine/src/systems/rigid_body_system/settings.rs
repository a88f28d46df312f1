use serde::{Deserialize, Serialize};

/// Contact solver and integrator tuning
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// Contact passes per step
    pub iterations: u32,
    /// Penetration (px) tolerated before positional correction kicks in
    pub slop: f32,
    /// Fraction of remaining penetration removed per pass
    pub correction: f32,
    /// Impact speed (px/s) below which restitution is ignored
    pub resting_speed: f32,
    /// Speed cap (px/s); keeps fast flings from tunnelling through walls
    pub max_speed: f32,
    /// Largest dt (ms) a single step will integrate
    pub max_dt_ms: f32,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            iterations: 4,
            slop: 0.5,
            correction: 0.8,
            resting_speed: 20.0,
            max_speed: 1800.0,
            max_dt_ms: 50.0,
        }
    }
}

/// Surface response of a static boundary
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundaryMaterial {
    pub restitution: f32,
    pub friction: f32,
}

impl Default for BoundaryMaterial {
    fn default() -> Self {
        Self {
            restitution: 0.3,
            friction: 0.2,
        }
    }
}
