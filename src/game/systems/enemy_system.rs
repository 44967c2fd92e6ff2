//! Enemy lifecycle management system.
//!
//! Owns the collection of live enemies and their spawn gate, providing
//! spawn / update / remove / iterate operations with zero GPU coupling.
//! Enemies tumble in from a fixed volume below the arena with randomized
//! pose and orientation.

use glam::{Mat4, Vec3};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Enemy collider radius (world units).
pub const ENEMY_RADIUS: f32 = 1.5;
/// Seconds between timed enemy spawns.
pub const ENEMY_SPAWN_INTERVAL: f32 = 0.2;

/// A live enemy: position plus a fixed tumble orientation.
#[derive(Debug, Clone, Copy)]
pub struct Enemy {
    /// World-space position
    pub position: Vec3,
    /// Rotation angle around `axis` (radians)
    pub angle: f32,
    /// Rotation axis (unit length)
    pub axis: Vec3,
}

impl Enemy {
    /// World transform for rendering: translate, then rotate about the axis.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position) * Mat4::from_axis_angle(self.axis, self.angle)
    }
}

/// Manages the full lifecycle of enemies.
///
/// Encapsulates the timed spawn gate and attribute randomization so that
/// callers only feed it delta time and collision results. The RNG is
/// seeded explicitly, so a fixed seed reproduces an exact spawn sequence.
pub struct EnemySystem {
    enemies: Vec<Enemy>,
    spawn_timer: f32,
    rng: ChaCha8Rng,
}

impl EnemySystem {
    /// Create a new system with the given RNG seed.
    pub fn new(seed: u64) -> Self {
        Self {
            enemies: Vec::new(),
            spawn_timer: 0.0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Advance the timed spawn gate.
    ///
    /// Spawns at most one enemy per call: when the accumulated time
    /// reaches [`ENEMY_SPAWN_INTERVAL`] the timer resets to zero and one
    /// enemy is created. Returns `true` if a spawn happened.
    pub fn update(&mut self, delta: f32) -> bool {
        self.spawn_timer += delta;
        if self.spawn_timer >= ENEMY_SPAWN_INTERVAL {
            self.spawn_timer = 0.0;
            self.spawn();
            return true;
        }
        false
    }

    /// Spawn one enemy immediately, bypassing the timed gate.
    pub fn spawn(&mut self) {
        let enemy = self.random_enemy();
        self.enemies.push(enemy);
    }

    /// Spawn a pre-built enemy (e.g. for scripted setups).
    pub fn push(&mut self, enemy: Enemy) {
        self.enemies.push(enemy);
    }

    /// Roll a fresh enemy with uniformly distributed attributes.
    ///
    /// Positions are quantized draws: x and y in 1/50 steps over
    /// [-10, 10) and [-20, 0), z an integer in [-5, 5). The angle covers
    /// [0, pi) in 1/360 steps. Axis components are drawn independently
    /// from [0, 10) and the axis is normalized; a degenerate all-zero
    /// draw falls back to +Y.
    fn random_enemy(&mut self) -> Enemy {
        let position = Vec3::new(
            self.rng.gen_range(0..1000) as f32 / 50.0 - 10.0,
            self.rng.gen_range(0..1000) as f32 / 50.0 - 20.0,
            self.rng.gen_range(0..10) as f32 - 5.0,
        );
        let angle = self.rng.gen_range(0..360) as f32 / 360.0 * std::f32::consts::PI;
        let raw_axis = Vec3::new(
            self.rng.gen_range(0..1000) as f32 / 100.0,
            self.rng.gen_range(0..1000) as f32 / 100.0,
            self.rng.gen_range(0..1000) as f32 / 100.0,
        );
        let axis = raw_axis.try_normalize().unwrap_or(Vec3::Y);

        Enemy {
            position,
            angle,
            axis,
        }
    }

    /// Index of the first live enemy (in spawn order) whose collider
    /// touches the given sphere, boundary-inclusive.
    pub fn first_hit(&self, center: Vec3, radius: f32) -> Option<usize> {
        self.enemies
            .iter()
            .position(|enemy| crate::physics::sphere_contact(center, radius, enemy.position, ENEMY_RADIUS))
    }

    /// Remove an enemy by index, preserving the order of the rest.
    pub fn remove(&mut self, index: usize) -> Enemy {
        self.enemies.remove(index)
    }

    /// Number of live enemies.
    pub fn count(&self) -> usize {
        self.enemies.len()
    }

    /// Iterate over live enemies in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter()
    }

    /// Remove all enemies.
    pub fn clear(&mut self) {
        self.enemies.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timed_gate_spawns_every_interval() {
        let mut system = EnemySystem::new(1);
        let mut spawns = 0;
        // 20 frames of 50 ms = 1 s of accumulated time.
        for _ in 0..20 {
            if system.update(0.05) {
                spawns += 1;
            }
        }
        assert_eq!(spawns, 5);
        assert_eq!(system.count(), 5);
    }

    #[test]
    fn test_at_most_one_spawn_per_call() {
        let mut system = EnemySystem::new(1);
        // A long stall still yields a single spawn; the overshoot is dropped.
        assert!(system.update(3.0));
        assert_eq!(system.count(), 1);
        assert!(!system.update(0.1));
    }

    #[test]
    fn test_no_spawn_before_interval() {
        let mut system = EnemySystem::new(1);
        assert!(!system.update(0.19));
        assert_eq!(system.count(), 0);
        assert!(system.update(0.01));
    }

    #[test]
    fn test_immediate_spawn_bypasses_gate() {
        let mut system = EnemySystem::new(1);
        system.spawn();
        system.spawn();
        assert_eq!(system.count(), 2);
        // The timed gate is unaffected.
        assert!(!system.update(0.1));
    }

    #[test]
    fn test_attribute_bounds() {
        let mut system = EnemySystem::new(7);
        for _ in 0..200 {
            system.spawn();
        }
        for enemy in system.iter() {
            assert!(enemy.position.x >= -10.0 && enemy.position.x < 10.0);
            assert!(enemy.position.y >= -20.0 && enemy.position.y < 0.0);
            assert!(enemy.position.z >= -5.0 && enemy.position.z < 5.0);
            // z is drawn on integer steps.
            assert_eq!(enemy.position.z, enemy.position.z.round());
            assert!(enemy.angle >= 0.0 && enemy.angle < std::f32::consts::PI);
            assert!((enemy.axis.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = EnemySystem::new(99);
        let mut b = EnemySystem::new(99);
        for _ in 0..10 {
            a.spawn();
            b.spawn();
        }
        for (ea, eb) in a.iter().zip(b.iter()) {
            assert_eq!(ea.position, eb.position);
            assert_eq!(ea.angle, eb.angle);
            assert_eq!(ea.axis, eb.axis);
        }
    }

    #[test]
    fn test_first_hit_scans_in_spawn_order() {
        let mut system = EnemySystem::new(1);
        system.spawn();
        system.spawn();
        // A huge probe radius puts every enemy in range; the first wins.
        let positions: Vec<Vec3> = system.iter().map(|e| e.position).collect();
        assert_eq!(positions.len(), 2);
        let hit = system.first_hit(positions[0], 100.0);
        assert_eq!(hit, Some(0));
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut system = EnemySystem::new(3);
        for _ in 0..3 {
            system.spawn();
        }
        let remaining: Vec<Vec3> = system.iter().map(|e| e.position).skip(1).collect();
        system.remove(0);
        let after: Vec<Vec3> = system.iter().map(|e| e.position).collect();
        assert_eq!(remaining, after);
    }

    #[test]
    fn test_model_matrix_translates_then_rotates() {
        let enemy = Enemy {
            position: Vec3::new(1.0, 2.0, 3.0),
            angle: std::f32::consts::FRAC_PI_2,
            axis: Vec3::Y,
        };
        let m = enemy.model_matrix();
        // The local origin lands on the enemy position.
        let origin = m.transform_point3(Vec3::ZERO);
        assert!((origin - enemy.position).length() < 1e-5);
        // A local +X offset rotates about Y before translating.
        let p = m.transform_point3(Vec3::X);
        assert!((p - (enemy.position + Vec3::new(0.0, 0.0, -1.0))).length() < 1e-5);
    }
}
