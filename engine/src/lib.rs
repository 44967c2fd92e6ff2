//! Shooter Engine Library
//!
//! A small first-person shooter engine: fly camera, windowing-agnostic
//! input state, sphere collision primitives, and a wgpu instanced-mesh
//! renderer. Game logic (spawners, projectiles, scene orchestration)
//! lives in the `game` module and builds on these pieces.
//!
//! # Modules
//!
//! - [`camera`] - Free-flying FPS camera (look, movement, matrices)
//! - [`input`] - Platform-agnostic keyboard and pointer-look state
//! - [`physics`] - Sphere-sphere collision primitives
//! - [`render`] - wgpu context, instanced mesh pipeline, shader
//! - [`logging`] - Tracing subscriber setup
//!
//! # Example
//!
//! ```ignore
//! use shooter_engine::camera::FlyCamera;
//! use shooter_engine::input::InputState;
//! use shooter_engine::game::ArenaScene;
//!
//! let mut camera = FlyCamera::new();
//! let mut input = InputState::new();
//! let mut scene = ArenaScene::new(42);
//!
//! // Each frame:
//! let (dx, dy) = input.consume_look();
//! camera.apply_look(dx, dy);
//! camera.apply_movement(&input.movement, delta);
//! scene.update(delta, input.fire, camera.position, camera.forward());
//! ```

pub mod camera;
pub mod input;
pub mod logging;
pub mod physics;
pub mod render;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export commonly used types
pub use camera::FlyCamera;
pub use input::{InputState, KeyCode, MovementKeys};
pub use render::{GpuContext, GpuContextConfig, MeshBuffer, MeshInstance, Uniforms};
