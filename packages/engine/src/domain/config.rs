//! Backdrop configuration
//!
//! Everything the simulation needs is passed in here; nothing is hard-coded in
//! the core. Missing JSON fields fall back to the values the "Trusted Brands"
//! section ships with.

use serde::{Deserialize, Serialize};

use crate::domain::skins::ColorTheme;
use crate::error::BackdropError;
use crate::rigid_body_system::{BoundaryMaterial, SolverSettings};

/// Top-level configuration for one mounted backdrop
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackdropConfig {
    /// Container width in px, read once at mount
    pub width: f32,
    /// Container height in px, read once at mount
    pub height: f32,
    /// Downward acceleration (px/s²)
    pub gravity_y: f32,
    /// Thickness of the ground and side walls (px)
    pub wall_thickness: f32,
    pub walls: BoundaryMaterial,
    pub solver: SolverSettings,
    pub spawn: SpawnConfig,
    pub force_field: ForceFieldConfig,
    pub visibility: VisibilityConfig,
    /// Seed for spawn randomness. `None` picks one at mount.
    pub seed: Option<u64>,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 640.0,
            gravity_y: 900.0,
            wall_thickness: 100.0,
            walls: BoundaryMaterial::default(),
            solver: SolverSettings::default(),
            spawn: SpawnConfig::default(),
            force_field: ForceFieldConfig::default(),
            visibility: VisibilityConfig::default(),
            seed: None,
        }
    }
}

/// Spawn tuning. Batch size and target are fixed when spawning starts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    pub target_count: u32,
    pub batch_size: u32,
    pub interval_ms: f64,
    /// Body radius range (px), inclusive
    pub size_range: [f32; 2],
    /// Horizontal spawn span starting at x=0. Defaults to the container width.
    pub spawn_region_width: Option<f32>,
    /// Distance above the container top to drop from (px)
    pub drop_height: [f32; 2],
    /// Initial downward speed range (px/s)
    pub fall_speed: [f32; 2],
    /// Max initial sideways speed either way (px/s)
    pub lateral_speed: f32,
    pub restitution: f32,
    pub friction: f32,
    /// Fraction of velocity lost per 60 Hz frame
    pub air_drag: f32,
    /// Mass per square pixel
    pub density: f32,
    /// Logo image paths, assigned round-robin in spawn order
    pub skins: Vec<String>,
    pub themes: Vec<ColorTheme>,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            target_count: 50,
            batch_size: 8,
            interval_ms: 50.0,
            size_range: [35.0, 50.0],
            spawn_region_width: None,
            drop_height: [60.0, 300.0],
            fall_speed: [60.0, 180.0],
            lateral_speed: 20.0,
            restitution: 0.2,
            friction: 0.1,
            air_drag: 0.04,
            density: 0.001,
            skins: vec![
                "/brand-img/ing1.png".to_string(),
                "/brand-img/img2.png".to_string(),
                "/brand-img/img3.png".to_string(),
                "/brand-img/img4.png".to_string(),
                "/brand-img/img5.png".to_string(),
            ],
            themes: vec![ColorTheme::default()],
        }
    }
}

/// Pointer interaction constants
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForceFieldConfig {
    /// Only bodies closer than this (px) react
    pub radius: f32,
    /// Impulse per px of pointer movement this frame (k1)
    pub speed_scale: f32,
    /// Constant outward nudge, felt even by a still pointer (k2)
    pub base_nudge: f32,
    /// Share of raw pointer displacement carried into nearby bodies
    pub drag_along: f32,
    /// Distance floor used when normalising the push direction
    pub epsilon: f32,
}

impl Default for ForceFieldConfig {
    fn default() -> Self {
        Self {
            radius: 100.0,
            speed_scale: 33.3,
            base_nudge: 83.3,
            drag_along: 50.0,
            epsilon: 1e-4,
        }
    }
}

/// When the section counts as "in view"
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisibilityConfig {
    /// Enter once the element top crosses this fraction of viewport height
    pub entry_fraction: f32,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self { entry_fraction: 0.9 }
    }
}

impl VisibilityConfig {
    /// `IntersectionObserver` root margin that shrinks the viewport bottom
    /// so intersection starts when the element top reaches `entry_fraction`.
    pub fn root_margin(&self) -> String {
        let shrink = ((1.0 - self.entry_fraction.clamp(0.0, 1.0)) * 100.0).round();
        format!("0px 0px -{}% 0px", shrink as u32)
    }
}

/// Shortest spawn interval accepted (ms)
pub const MIN_INTERVAL_MS: f64 = 1.0;

/// `[min, max]` sampled uniformly at spawn time: both ends and the width must be finite
fn check_range(name: &str, range: [f32; 2]) -> Result<(), BackdropError> {
    let [lo, hi] = range;
    if !(lo.is_finite() && hi.is_finite() && lo <= hi && (hi - lo).is_finite()) {
        return Err(BackdropError::InvalidConfig(format!(
            "{name} must be a finite [min, max] range, got [{lo}, {hi}]"
        )));
    }
    Ok(())
}

impl BackdropConfig {
    pub fn from_json(json: &str) -> Result<Self, BackdropError> {
        let config: BackdropConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Same config for a container of a different size
    pub fn with_size(&self, width: f32, height: f32) -> Self {
        Self { width, height, ..self.clone() }
    }

    pub fn spawn_region_width(&self) -> f32 {
        self.spawn.spawn_region_width.unwrap_or(self.width).max(0.0)
    }

    pub fn validate(&self) -> Result<(), BackdropError> {
        fn invalid(msg: impl Into<String>) -> Result<(), BackdropError> {
            Err(BackdropError::InvalidConfig(msg.into()))
        }

        if !(self.width.is_finite() && self.width > 0.0 && self.height.is_finite() && self.height > 0.0) {
            return invalid(format!("container size must be positive, got {}x{}", self.width, self.height));
        }
        if !(self.wall_thickness > 0.0 && self.wall_thickness.is_finite()) {
            return invalid("wall_thickness must be positive and finite");
        }
        if !self.gravity_y.is_finite() {
            return invalid("gravity_y must be finite");
        }
        if self.solver.iterations == 0 {
            return invalid("solver.iterations must be at least 1");
        }
        if !(self.solver.max_speed > 0.0 && self.solver.max_dt_ms > 0.0)
            || !(self.solver.max_speed.is_finite() && self.solver.max_dt_ms.is_finite())
        {
            return invalid("solver.max_speed and solver.max_dt_ms must be positive and finite");
        }

        let spawn = &self.spawn;
        if spawn.batch_size == 0 {
            return invalid("spawn.batch_size must be at least 1");
        }
        if !(spawn.interval_ms >= MIN_INTERVAL_MS && spawn.interval_ms.is_finite()) {
            return invalid(format!(
                "spawn.interval_ms must be a finite value >= {MIN_INTERVAL_MS}, got {}",
                spawn.interval_ms
            ));
        }
        let [min_r, max_r] = spawn.size_range;
        if !(min_r > 0.0 && min_r <= max_r) {
            return invalid(format!("spawn.size_range must satisfy 0 < min <= max, got [{min_r}, {max_r}]"));
        }
        check_range("spawn.size_range", spawn.size_range)?;
        check_range("spawn.drop_height", spawn.drop_height)?;
        check_range("spawn.fall_speed", spawn.fall_speed)?;
        check_range("spawn.lateral_speed", [-spawn.lateral_speed, spawn.lateral_speed])?;
        if !(spawn.density > 0.0 && spawn.density.is_finite()) {
            return invalid("spawn.density must be positive and finite");
        }
        if ![spawn.restitution, spawn.friction, spawn.air_drag].iter().all(|v| v.is_finite()) {
            return invalid("spawn.restitution, spawn.friction and spawn.air_drag must be finite");
        }
        if let Some(w) = spawn.spawn_region_width {
            if !(w.is_finite() && w >= 0.0) {
                return invalid("spawn.spawn_region_width must be >= 0");
            }
        }
        if spawn.skins.is_empty() {
            return invalid("spawn.skins must list at least one image");
        }

        let ff = &self.force_field;
        if !(ff.radius > 0.0 && ff.epsilon > 0.0) {
            return invalid("force_field.radius and force_field.epsilon must be positive");
        }
        if ![ff.radius, ff.speed_scale, ff.base_nudge, ff.drag_along, ff.epsilon].iter().all(|v| v.is_finite()) {
            return invalid("force_field constants must be finite");
        }

        let entry = self.visibility.entry_fraction;
        if !(entry > 0.0 && entry <= 1.0) {
            return invalid(format!("visibility.entry_fraction must be in (0, 1], got {entry}"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        BackdropConfig::default().validate().unwrap();
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config = BackdropConfig::from_json(r#"{"width": 800, "height": 400, "spawn": {"target_count": 12}}"#).unwrap();
        assert_eq!(config.width, 800.0);
        assert_eq!(config.spawn.target_count, 12);
        assert_eq!(config.spawn.batch_size, 8);
        assert_eq!(config.force_field.radius, 100.0);
        assert_eq!(config.spawn_region_width(), 800.0);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            BackdropConfig::from_json("{ width: "),
            Err(BackdropError::ConfigParse(_))
        ));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let cases = [
            r#"{"spawn": {"batch_size": 0}}"#,
            r#"{"spawn": {"interval_ms": 0}}"#,
            r#"{"spawn": {"interval_ms": 1e-12}}"#,
            r#"{"spawn": {"drop_height": [0, 1e39]}}"#,
            r#"{"spawn": {"fall_speed": [-3e38, 3e38]}}"#,
            r#"{"spawn": {"lateral_speed": 1e39}}"#,
            r#"{"spawn": {"lateral_speed": 3e38}}"#,
            r#"{"spawn": {"size_range": [10, 1e39]}}"#,
            r#"{"spawn": {"density": 1e39}}"#,
            r#"{"force_field": {"speed_scale": 1e39}}"#,
            r#"{"spawn": {"size_range": [50, 10]}}"#,
            r#"{"spawn": {"skins": []}}"#,
            r#"{"width": 0}"#,
            r#"{"visibility": {"entry_fraction": 1.5}}"#,
            r#"{"solver": {"iterations": 0}}"#,
        ];
        for json in cases {
            assert!(
                matches!(BackdropConfig::from_json(json), Err(BackdropError::InvalidConfig(_))),
                "accepted {json}"
            );
        }
    }

    #[test]
    fn root_margin_matches_entry_fraction() {
        assert_eq!(VisibilityConfig { entry_fraction: 0.9 }.root_margin(), "0px 0px -10% 0px");
        assert_eq!(VisibilityConfig { entry_fraction: 1.0 }.root_margin(), "0px 0px -0% 0px");
    }

    #[test]
    fn config_survives_json_round_trip() {
        let mut config = BackdropConfig::default();
        config.seed = Some(7);
        config.spawn.spawn_region_width = Some(300.0);
        let back = BackdropConfig::from_json(&config.to_json()).unwrap();
        assert_eq!(back, config);
    }
}
