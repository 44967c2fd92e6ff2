//! Camera Module
//!
//! Free-flying first-person camera used by the arena binary.

pub mod fly_controller;

pub use fly_controller::FlyCamera;
