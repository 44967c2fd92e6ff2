//! Game Systems Module
//!
//! Per-entity-class systems: each owns its live collection and exposes
//! spawn / update / iterate operations to the scene.

pub mod enemy_system;
pub mod fireball_system;

pub use enemy_system::{ENEMY_RADIUS, ENEMY_SPAWN_INTERVAL, Enemy, EnemySystem};
pub use fireball_system::{
    FIREBALL_COOLDOWN, FIREBALL_RADIUS, FIREBALL_SPEED, Fireball, FireballSystem, Impact,
    MAX_FIREBALLS,
};
