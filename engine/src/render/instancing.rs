//! GPU Instance Buffer System for Entity Rendering
//!
//! This module provides GPU-compatible instance data structures for
//! rendering the live entities with instanced draws: one mesh per entity
//! class, one [`MeshInstance`] per live entity.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use static_assertions::assert_eq_size;
use wgpu::util::DeviceExt;

/// Maximum number of instances per entity class the buffers are sized for.
pub const MAX_MESH_INSTANCES: usize = 1024;

/// Total buffer size in bytes (1024 * 80 = 80 KB)
pub const INSTANCE_BUFFER_SIZE: usize = MAX_MESH_INSTANCES * std::mem::size_of::<MeshInstance>();

/// GPU instance data for a single entity.
///
/// Layout (80 bytes total, 16-byte aligned for GPU compatibility):
/// - model: mat4x4<f32> (64 bytes) - World transform
/// - color: vec4<f32>   (16 bytes) - Tint, may exceed 1.0 for glow
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct MeshInstance {
    /// World transform (column-major, matches WGSL mat4x4)
    pub model: [[f32; 4]; 4],
    /// RGBA tint; components above 1.0 read as emissive in the shader
    pub color: [f32; 4],
}

assert_eq_size!(MeshInstance, [u8; 80]);

impl Default for MeshInstance {
    fn default() -> Self {
        Self {
            model: Mat4::IDENTITY.to_cols_array_2d(),
            color: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

impl MeshInstance {
    /// Create an instance from a world transform and a tint color.
    pub fn new(model: Mat4, color: [f32; 4]) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color,
        }
    }
}

/// Create an empty instance buffer sized for [`MAX_MESH_INSTANCES`].
pub fn create_instance_buffer(device: &wgpu::Device, label: &str) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: INSTANCE_BUFFER_SIZE as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

/// Create an instance buffer initialized with the given instances.
pub fn create_instance_buffer_init(
    device: &wgpu::Device,
    label: &str,
    instances: &[MeshInstance],
) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(instances),
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
    })
}

/// Upload instances to the front of an existing buffer.
///
/// Anything past [`MAX_MESH_INSTANCES`] is dropped; the caller draws
/// `instances.len().min(MAX_MESH_INSTANCES)` instances.
pub fn update_instance_buffer(
    queue: &wgpu::Queue,
    buffer: &wgpu::Buffer,
    instances: &[MeshInstance],
) {
    let count = instances.len().min(MAX_MESH_INSTANCES);
    queue.write_buffer(buffer, 0, bytemuck::cast_slice(&instances[..count]));
}

/// Vertex buffer layout for per-instance data.
///
/// The model matrix occupies four consecutive vec4 attribute slots
/// (locations 3-6), the color one more (location 7); locations 0-2 carry
/// the per-vertex position/normal/color.
pub fn instance_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
    const ATTRIBUTES: [wgpu::VertexAttribute; 5] = [
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x4,
            offset: 0,
            shader_location: 3,
        },
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x4,
            offset: 16,
            shader_location: 4,
        },
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x4,
            offset: 32,
            shader_location: 5,
        },
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x4,
            offset: 48,
            shader_location: 6,
        },
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x4,
            offset: 64,
            shader_location: 7,
        },
    ];

    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<MeshInstance>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &ATTRIBUTES,
    }
}
