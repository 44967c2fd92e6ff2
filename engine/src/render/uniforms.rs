//! GPU Uniform Buffers
//!
//! Data structures for GPU uniform buffers in the arena render pipeline.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use static_assertions::assert_eq_size;

/// Main uniforms for the arena shader
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct Uniforms {
    pub view_proj: [[f32; 4]; 4],
    pub camera_pos: [f32; 4],
    pub sun_dir: [f32; 3],
    pub ambient: f32,
    pub resolution: [f32; 2],
    pub time: f32,
    pub _padding: f32,
}

// WGSL struct layout: mat4 (64) + vec4 (16) + vec3+f32 (16) + vec2+f32+f32 (16)
assert_eq_size!(Uniforms, [u8; 112]);

impl Default for Uniforms {
    fn default() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            camera_pos: [0.0, 0.0, 0.0, 0.0],
            sun_dir: [0.45, 0.8, 0.35],
            ambient: 0.25,
            resolution: [1024.0, 768.0],
            time: 0.0,
            _padding: 0.0,
        }
    }
}

impl Uniforms {
    /// Update the combined view-projection matrix and camera position.
    pub fn set_camera(&mut self, view_proj: Mat4, camera_pos: glam::Vec3) {
        self.view_proj = view_proj.to_cols_array_2d();
        self.camera_pos = [camera_pos.x, camera_pos.y, camera_pos.z, 1.0];
    }

    /// Update the surface resolution.
    pub fn set_resolution(&mut self, width: u32, height: u32) {
        self.resolution = [width as f32, height as f32];
    }

    /// Update elapsed time (seconds since start).
    pub fn set_time(&mut self, time: f32) {
        self.time = time;
    }
}
