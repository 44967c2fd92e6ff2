//! Fireball lifecycle management system.
//!
//! Owns the collection of live fireballs, their fire cooldown, the
//! population cap, and the per-tick advance + enemy collision pass.
//! Zero GPU coupling.

use glam::{Mat4, Vec3};

use crate::game::systems::enemy_system::{Enemy, EnemySystem};

/// Fireball collider radius (world units).
pub const FIREBALL_RADIUS: f32 = 0.5;
/// Minimum seconds between shots while the fire input is held.
pub const FIREBALL_COOLDOWN: f32 = 1.0;
/// Distance a fireball travels per simulation tick. Deliberately not
/// delta-time scaled: one tick moves one fixed step.
pub const FIREBALL_SPEED: f32 = 0.05;
/// Maximum number of simultaneously live fireballs.
pub const MAX_FIREBALLS: usize = 10;

/// A live fireball. Direction is fixed at spawn; only position advances.
#[derive(Debug, Clone, Copy)]
pub struct Fireball {
    /// World-space position
    pub position: Vec3,
    /// Flight direction, snapshotted from the camera at spawn
    pub direction: Vec3,
}

impl Fireball {
    /// World transform for rendering: translation only.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
    }
}

/// A fireball-enemy contact resolved this tick.
#[derive(Debug, Clone, Copy)]
pub struct Impact {
    /// Position of the destroyed enemy
    pub position: Vec3,
}

/// Manages the full lifecycle of fireballs.
///
/// Spawning runs on a cooldown gate that starts expired, so the first
/// frame with fire held shoots immediately. The live list is capped at
/// [`MAX_FIREBALLS`]; overflow evicts the oldest shot first.
pub struct FireballSystem {
    fireballs: Vec<Fireball>,
    since_last_shot: f32,
}

impl Default for FireballSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FireballSystem {
    /// Create a new system with the cooldown already expired.
    pub fn new() -> Self {
        Self {
            fireballs: Vec::new(),
            since_last_shot: FIREBALL_COOLDOWN,
        }
    }

    /// Advance the cooldown and spawn one fireball if fire is held and
    /// the cooldown has elapsed.
    ///
    /// The cooldown clock runs every frame whether or not fire is held,
    /// so tapping the key again after a pause still respects the spacing
    /// from the previous shot. Returns `true` if a fireball spawned.
    ///
    /// `position` is where the shot appears (just in front of the
    /// camera); `direction` is the camera facing, captured by value.
    pub fn update_trigger(
        &mut self,
        delta: f32,
        fire_held: bool,
        position: Vec3,
        direction: Vec3,
    ) -> bool {
        self.since_last_shot = (self.since_last_shot + delta).min(FIREBALL_COOLDOWN);

        if fire_held && self.since_last_shot >= FIREBALL_COOLDOWN {
            self.since_last_shot = 0.0;
            self.fireballs.push(Fireball {
                position,
                direction,
            });
            // Oldest-first eviction keeps the population at the cap.
            while self.fireballs.len() > MAX_FIREBALLS {
                self.fireballs.remove(0);
            }
            return true;
        }
        false
    }

    /// Advance every live fireball one tick and resolve enemy contacts.
    ///
    /// Fireballs are visited in spawn order. Each one first steps
    /// [`FIREBALL_SPEED`] along its direction, then scans the enemies in
    /// spawn order; on the first contact (boundary-inclusive) both the
    /// fireball and that enemy are removed immediately and the scan moves
    /// on to the next fireball. Index-based erase-and-continue: a removal
    /// does not advance the loop index, so no survivor is skipped.
    pub fn advance_and_collide(&mut self, enemies: &mut EnemySystem) -> Vec<Impact> {
        let mut impacts = Vec::new();

        let mut i = 0;
        while i < self.fireballs.len() {
            let position = {
                let fireball = &mut self.fireballs[i];
                fireball.position += fireball.direction * FIREBALL_SPEED;
                fireball.position
            };

            match enemies.first_hit(position, FIREBALL_RADIUS) {
                Some(enemy_index) => {
                    let enemy: Enemy = enemies.remove(enemy_index);
                    self.fireballs.remove(i);
                    impacts.push(Impact {
                        position: enemy.position,
                    });
                }
                None => i += 1,
            }
        }

        impacts
    }

    /// Number of currently live fireballs.
    pub fn count(&self) -> usize {
        self.fireballs.len()
    }

    /// Iterate over live fireballs in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = &Fireball> {
        self.fireballs.iter()
    }

    /// Remove all fireballs.
    pub fn clear(&mut self) {
        self.fireballs.clear();
    }
}
