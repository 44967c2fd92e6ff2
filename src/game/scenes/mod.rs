//! Game Scenes Module

pub mod arena_scene;

pub use arena_scene::ArenaScene;
