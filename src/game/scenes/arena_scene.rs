//! ArenaScene — high-level composition of the game systems.
//!
//! Owns the enemy and fireball systems. Its [`update`](ArenaScene::update)
//! method is the single entry point for the per-frame game logic: spawn
//! gates first, then projectile advance and collision resolution. **No
//! wgpu imports** — this module is GPU-agnostic; the renderer reads the
//! per-entity instance transforms it exposes.

use glam::Vec3;

use crate::game::systems::fireball_system::FIREBALL_RADIUS;
use crate::game::systems::{EnemySystem, FireballSystem, Impact};
use crate::render::MeshInstance;

/// Stone-gray tint for enemy cubes.
const ENEMY_COLOR: [f32; 4] = [0.55, 0.5, 0.48, 1.0];
/// Emissive lava-orange tint for fireballs (components above 1.0 glow).
const FIREBALL_COLOR: [f32; 4] = [2.4, 0.85, 0.22, 1.0];

/// Complete game scene composing the spawn, projectile, and collision
/// logic.
///
/// Call [`update`](ArenaScene::update) each frame with the delta time,
/// the fire input, and the camera pose; read the instance lists for
/// rendering afterwards.
pub struct ArenaScene {
    pub enemies: EnemySystem,
    pub fireballs: FireballSystem,
    impacts: Vec<Impact>,
}

impl ArenaScene {
    /// Create a scene with empty entity collections.
    pub fn new(seed: u64) -> Self {
        Self {
            enemies: EnemySystem::new(seed),
            fireballs: FireballSystem::new(),
            impacts: Vec::new(),
        }
    }

    /// Run one simulation tick.
    ///
    /// Order: enemy spawn gates, fireball spawn gate, projectile advance +
    /// collision resolution. `camera_position` and `camera_forward` are
    /// snapshotted for any fireball spawned this tick.
    pub fn update(
        &mut self,
        delta: f32,
        fire_held: bool,
        camera_position: Vec3,
        camera_forward: Vec3,
    ) {
        // 1. Timed enemy spawning.
        self.enemies.update(delta);

        // 2. Holding fire also feeds the horde, one extra enemy per frame.
        if fire_held {
            self.enemies.spawn();
        }

        // 3. Fireball spawn gate; shots appear just in front of the camera.
        let muzzle = camera_position + camera_forward * (FIREBALL_RADIUS * 2.0);
        self.fireballs
            .update_trigger(delta, fire_held, muzzle, camera_forward);

        // 4. Advance projectiles and resolve enemy contacts.
        let impacts = self.fireballs.advance_and_collide(&mut self.enemies);
        self.impacts.extend(impacts);
    }

    /// Drain the impacts resolved since the last call (for logging/VFX).
    pub fn drain_impacts(&mut self) -> Vec<Impact> {
        std::mem::take(&mut self.impacts)
    }

    /// Per-enemy instance transforms: translate, then rotate about the axis.
    pub fn enemy_instances(&self) -> Vec<MeshInstance> {
        self.enemies
            .iter()
            .map(|enemy| MeshInstance::new(enemy.model_matrix(), ENEMY_COLOR))
            .collect()
    }

    /// Per-fireball instance transforms: translation only.
    pub fn fireball_instances(&self) -> Vec<MeshInstance> {
        self.fireballs
            .iter()
            .map(|fireball| MeshInstance::new(fireball.model_matrix(), FIREBALL_COLOR))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fire_spawns_enemy_every_frame() {
        let mut scene = ArenaScene::new(42);
        // Short frames so the timed gate stays closed; camera high up so
        // the fireballs stay clear of the spawn volume.
        for _ in 0..5 {
            scene.update(0.01, true, Vec3::new(0.0, 50.0, 0.0), Vec3::Z);
        }
        // One enemy per frame from the fire path, none from the timer.
        assert_eq!(scene.enemies.count(), 5);
    }

    #[test]
    fn test_timed_and_fire_paths_are_independent() {
        let mut scene = ArenaScene::new(42);
        // One 0.2 s frame with fire held: both paths spawn.
        scene.update(0.2, true, Vec3::new(0.0, 50.0, 0.0), Vec3::Z);
        assert_eq!(scene.enemies.count(), 2);
    }

    #[test]
    fn test_fireball_spawns_in_front_of_camera() {
        let mut scene = ArenaScene::new(42);
        let position = Vec3::new(1.0, 2.0, 3.0);
        let forward = Vec3::new(0.0, 0.0, 1.0);
        scene.update(0.01, true, position, forward);

        let fireball = scene.fireballs.iter().next().unwrap();
        // One collision step has already run this tick.
        let expected = position + forward * 1.0 + forward * 0.05;
        assert!((fireball.position - expected).length() < 1e-5);
        assert_eq!(fireball.direction, forward);
    }

    #[test]
    fn test_idle_scene_spawns_on_timer_only() {
        let mut scene = ArenaScene::new(42);
        for _ in 0..10 {
            scene.update(0.1, false, Vec3::ZERO, Vec3::Z);
        }
        // 1 s of accumulated time at one spawn per 0.2 s.
        assert_eq!(scene.enemies.count(), 5);
        assert_eq!(scene.fireballs.count(), 0);
    }

    #[test]
    fn test_instances_match_entity_counts() {
        let mut scene = ArenaScene::new(42);
        scene.update(0.2, true, Vec3::new(0.0, 50.0, 0.0), Vec3::Z);
        assert_eq!(scene.enemy_instances().len(), scene.enemies.count());
        assert_eq!(scene.fireball_instances().len(), scene.fireballs.count());
    }

    #[test]
    fn test_drain_impacts_empties_queue() {
        let mut scene = ArenaScene::new(42);
        scene.update(0.01, true, Vec3::new(0.0, 50.0, 0.0), Vec3::Z);
        let _ = scene.drain_impacts();
        assert!(scene.drain_impacts().is_empty());
    }
}
