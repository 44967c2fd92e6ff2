//! Render Module
//!
//! wgpu-based rendering infrastructure: GPU context, instanced mesh
//! pipeline, shader source, and the uniform/instance buffer types.

pub mod gpu_context;
pub mod instancing;
pub mod mesh_pipeline;
pub mod shader;
pub mod uniforms;

pub use gpu_context::{GpuContext, GpuContextConfig};
pub use instancing::{
    INSTANCE_BUFFER_SIZE, MAX_MESH_INSTANCES, MeshInstance, create_instance_buffer,
    create_instance_buffer_init, instance_buffer_layout, update_instance_buffer,
};
pub use mesh_pipeline::{MeshBuffer, MeshPipeline};
pub use shader::SHADER_SOURCE;
pub use uniforms::Uniforms;
