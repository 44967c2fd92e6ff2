//! Physics Module
//!
//! Collision primitives for the custom physics system.

pub mod sphere;

pub use sphere::{sphere_contact, sphere_distance};
