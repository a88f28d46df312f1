//! Spawner - pours a capped number of bodies into the world in timed batches
//!
//! Batches are released from the frame loop via `poll`, never from a timer
//! callback, so spawning can't race the physics step.

mod timer;

pub use timer::IntervalTimer;

use crate::core::random::{sample_range, spawn_rng};
use crate::domain::config::SpawnConfig;
use crate::domain::skins::SkinPalette;
use crate::rigid_body::{BodyDesc, Vec2};
use crate::rigid_body_system::PhysicsWorld;

/// Spawn parameters frozen at start time
#[derive(Clone, Debug, PartialEq)]
pub struct SpawnPlan {
    pub target_count: u32,
    pub batch_size: u32,
    pub interval_ms: f64,
    pub region_width: f32,
    pub size_range: [f32; 2],
    pub drop_height: [f32; 2],
    pub fall_speed: [f32; 2],
    pub lateral_speed: f32,
    pub restitution: f32,
    pub friction: f32,
    pub air_drag: f32,
    pub density: f32,
}

impl SpawnPlan {
    pub fn from_config(config: &SpawnConfig, region_width: f32) -> Self {
        Self {
            target_count: config.target_count,
            batch_size: config.batch_size.max(1),
            interval_ms: config.interval_ms,
            region_width: region_width.max(0.0),
            size_range: config.size_range,
            drop_height: config.drop_height,
            fall_speed: config.fall_speed,
            lateral_speed: config.lateral_speed.abs(),
            restitution: config.restitution,
            friction: config.friction,
            air_drag: config.air_drag,
            density: config.density,
        }
    }

    /// Number of batches needed to reach the target
    pub fn batch_count(&self) -> u32 {
        self.target_count.div_ceil(self.batch_size)
    }

    /// Body for the `index`-th (0-based) spawn. Pure in `(seed, index)`.
    pub fn body_desc(&self, seed: u64, index: u32, palette: &SkinPalette) -> BodyDesc {
        let mut rng = spawn_rng(seed, index);

        let radius = sample_range(&mut rng, self.size_range);
        let x = sample_range(&mut rng, [0.0, self.region_width]);
        let y = -sample_range(&mut rng, self.drop_height);
        let vy = sample_range(&mut rng, self.fall_speed);
        let vx = sample_range(&mut rng, [-self.lateral_speed, self.lateral_speed]);

        BodyDesc {
            pos: Vec2::new(x, y),
            velocity: Vec2::new(vx, vy),
            radius,
            density: self.density,
            restitution: self.restitution,
            friction: self.friction,
            air_drag: self.air_drag,
            skin: palette.skin_for_spawn(index),
        }
    }
}

/// Timed, capped, idempotent body spawner
#[derive(Clone, Debug)]
pub struct Spawner {
    seed: u64,
    plan: Option<SpawnPlan>,
    timer: IntervalTimer,
    spawned: u32,
    batches: u32,
}

impl Spawner {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            plan: None,
            timer: IntervalTimer::new(1.0),
            spawned: 0,
            batches: 0,
        }
    }

    /// Begin a spawn sequence. No-op (returns `false`) if one was already
    /// started and not cancelled since.
    pub fn start(&mut self, plan: SpawnPlan) -> bool {
        if self.plan.is_some() {
            return false;
        }

        log::debug!(
            "spawning {} bodies, {} per {}ms batch",
            plan.target_count,
            plan.batch_size,
            plan.interval_ms
        );

        self.timer = IntervalTimer::new(plan.interval_ms);
        if plan.target_count > 0 {
            self.timer.start();
        }
        self.spawned = 0;
        self.batches = 0;
        self.plan = Some(plan);
        true
    }

    /// Release every batch that has come due. Returns bodies added.
    pub fn poll(&mut self, world: &mut PhysicsWorld, palette: &SkinPalette, now_ms: f64) -> u32 {
        let Some(plan) = self.plan.as_ref() else {
            return 0;
        };

        let batches_left = plan.target_count.saturating_sub(self.spawned).div_ceil(plan.batch_size);
        let due = self.timer.poll(now_ms, batches_left);
        let mut added = 0;

        for _ in 0..due {
            let remaining = plan.target_count.saturating_sub(self.spawned);
            let count = remaining.min(plan.batch_size);
            if count == 0 {
                break;
            }

            for _ in 0..count {
                let desc = plan.body_desc(self.seed, self.spawned, palette);
                world.add_body(&desc);
                self.spawned += 1;
            }
            self.batches += 1;
            added += count;
        }

        if self.timer.is_running() && self.spawned >= plan.target_count {
            self.timer.cancel();
            log::debug!("spawn complete: {} bodies in {} batches", self.spawned, self.batches);
        }

        added
    }

    /// Stop the timer and forget the sequence so the next `start` runs again
    pub fn cancel(&mut self) {
        if self.timer.is_running() {
            log::debug!("spawn cancelled after {} bodies", self.spawned);
        }
        self.timer.cancel();
        self.plan = None;
        self.spawned = 0;
        self.batches = 0;
    }

    /// A sequence was started and not cancelled (it may have finished)
    pub fn is_started(&self) -> bool {
        self.plan.is_some()
    }

    /// The batch timer is live
    pub fn is_spawning(&self) -> bool {
        self.timer.is_running()
    }

    pub fn is_complete(&self) -> bool {
        self.plan.as_ref().is_some_and(|p| self.spawned >= p.target_count)
    }

    pub fn spawned_count(&self) -> u32 {
        self.spawned
    }

    pub fn batches_fired(&self) -> u32 {
        self.batches
    }

    pub fn plan(&self) -> Option<&SpawnPlan> {
        self.plan.as_ref()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> SkinPalette {
        let images: Vec<String> = (1..=5).map(|i| format!("/brand-img/img{i}.png")).collect();
        SkinPalette::build(&images, &[]).unwrap()
    }

    fn plan(target: u32, batch: u32, interval: f64) -> SpawnPlan {
        let config = SpawnConfig {
            target_count: target,
            batch_size: batch,
            interval_ms: interval,
            ..SpawnConfig::default()
        };
        SpawnPlan::from_config(&config, 640.0)
    }

    #[test]
    fn fifty_by_eight_takes_seven_batches_over_300ms() {
        let mut world = PhysicsWorld::new(0.0);
        let palette = palette();
        let mut spawner = Spawner::new(1);
        assert!(spawner.start(plan(50, 8, 50.0)));

        let mut per_tick = Vec::new();
        let mut t = 0.0;
        while t <= 400.0 {
            per_tick.push((t, spawner.poll(&mut world, &palette, t)));
            t += 50.0;
        }

        let fired: Vec<(f64, u32)> = per_tick.into_iter().filter(|&(_, n)| n > 0).collect();
        assert_eq!(fired.len(), 7);
        assert_eq!(fired.last(), Some(&(300.0, 2)));
        assert_eq!(spawner.batches_fired(), 7);
        assert_eq!(spawner.spawned_count(), 50);
        assert_eq!(world.body_count(), 50);
        assert!(!spawner.is_spawning());
        assert!(spawner.is_complete());
    }

    #[test]
    fn never_exceeds_target_however_long_it_runs() {
        let mut world = PhysicsWorld::new(0.0);
        let palette = palette();
        let mut spawner = Spawner::new(3);
        spawner.start(plan(20, 6, 10.0));

        for frame in 0..1000 {
            spawner.poll(&mut world, &palette, frame as f64 * 16.7);
            assert!(spawner.spawned_count() <= 20);
        }
        assert_eq!(world.body_count(), 20);
    }

    #[test]
    fn second_start_is_a_noop_until_cancelled() {
        let mut world = PhysicsWorld::new(0.0);
        let palette = palette();
        let mut spawner = Spawner::new(3);
        assert!(spawner.start(plan(10, 5, 50.0)));
        spawner.poll(&mut world, &palette, 0.0);
        assert!(!spawner.start(plan(10, 5, 50.0)));
        assert_eq!(spawner.spawned_count(), 5);

        spawner.cancel();
        assert_eq!(spawner.spawned_count(), 0);
        assert!(spawner.start(plan(10, 5, 50.0)));
    }

    #[test]
    fn cancel_mid_pour_stops_further_batches() {
        let mut world = PhysicsWorld::new(0.0);
        let palette = palette();
        let mut spawner = Spawner::new(3);
        spawner.start(plan(50, 8, 50.0));
        spawner.poll(&mut world, &palette, 0.0);
        spawner.poll(&mut world, &palette, 50.0);
        spawner.cancel();

        assert_eq!(spawner.poll(&mut world, &palette, 1000.0), 0);
        assert_eq!(world.body_count(), 16);
    }

    #[test]
    fn spawned_bodies_respect_region_and_size() {
        let palette = palette();
        let p = plan(200, 8, 50.0);
        for i in 0..200 {
            let d = p.body_desc(11, i, &palette);
            assert!(d.pos.x >= 0.0 && d.pos.x <= 640.0);
            assert!(d.radius >= 35.0 && d.radius <= 50.0);
            assert!(d.pos.y <= 0.0);
            assert!(d.velocity.y >= 0.0);
        }
    }

    #[test]
    fn skins_follow_spawn_order() {
        let palette = palette();
        let p = plan(50, 8, 50.0);
        for n in 1..=50u32 {
            assert_eq!(p.body_desc(5, n - 1, &palette).skin as u32, (n - 1) % 5);
        }
    }

    #[test]
    fn zero_target_completes_without_spawning() {
        let mut world = PhysicsWorld::new(0.0);
        let mut spawner = Spawner::new(1);
        assert!(spawner.start(plan(0, 8, 50.0)));
        assert_eq!(spawner.poll(&mut world, &palette(), 0.0), 0);
        assert!(spawner.is_complete());
        assert!(!spawner.is_spawning());
    }

    #[test]
    fn tiny_interval_late_frame_spawns_only_the_target() {
        let mut world = PhysicsWorld::new(0.0);
        let palette = palette();
        let mut spawner = Spawner::new(1);
        spawner.start(plan(50, 8, 1e-12));

        assert_eq!(spawner.poll(&mut world, &palette, 1.0e6), 8);
        assert_eq!(spawner.poll(&mut world, &palette, 1.0e6 + 16.0), 42);
        assert_eq!(spawner.batches_fired(), 7);
        assert!(!spawner.is_spawning());
    }
}
