//! Game Module
//!
//! Contains game-specific logic that builds on top of the engine:
//! entity types, spawn/projectile systems, and the arena scene that
//! orchestrates them once per frame.

pub mod scenes;
pub mod systems;
pub mod types;

// Re-exports from game modules
pub use scenes::ArenaScene;
pub use systems::enemy_system::{ENEMY_RADIUS, ENEMY_SPAWN_INTERVAL, Enemy, EnemySystem};
pub use systems::fireball_system::{
    FIREBALL_COOLDOWN, FIREBALL_RADIUS, FIREBALL_SPEED, Fireball, FireballSystem, Impact,
    MAX_FIREBALLS,
};
pub use types::{Mesh, Vertex, generate_box, generate_sphere};
