//! Shooter - First-Person Fireball Arena
//!
//! Run with: `cargo run --bin shooter`
//!
//! Controls:
//! - WASD / Arrow keys: Fly (camera-relative)
//! - Mouse: Look around (FPS style, cursor locked)
//! - Space: Fire (also summons extra stones while held)
//! - ESC: Exit
//!
//! Stones tumble in continuously; fireballs destroy the first stone they
//! touch. At most ten fireballs are alive at once, oldest evicted first.

use std::sync::Arc;
use std::time::Instant;

use glam::Vec3;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, DeviceId, ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{CursorGrabMode, Window, WindowAttributes, WindowId};

use shooter_engine::camera::FlyCamera;
use shooter_engine::game::{ArenaScene, ENEMY_RADIUS, FIREBALL_RADIUS, generate_box, generate_sphere};
use shooter_engine::input::{InputState, KeyCode};
use shooter_engine::render::{
    GpuContext, GpuContextConfig, MeshBuffer, MeshPipeline, Uniforms, create_instance_buffer,
    update_instance_buffer, MAX_MESH_INSTANCES,
};
use shooter_engine::logging;

/// Background clear color (dark blue).
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.0,
    b: 0.4,
    a: 1.0,
};

/// GPU-side resources owned by the app once the window exists.
struct GpuResources {
    context: GpuContext,
    pipeline: MeshPipeline,
    enemy_mesh: MeshBuffer,
    fireball_mesh: MeshBuffer,
    enemy_instance_buffer: wgpu::Buffer,
    fireball_instance_buffer: wgpu::Buffer,
}

struct ShooterApp {
    window: Option<Arc<Window>>,
    gpu: Option<GpuResources>,

    camera: FlyCamera,
    input: InputState,
    scene: ArenaScene,
    uniforms: Uniforms,

    start_time: Instant,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
    last_fps_update: Instant,
}

impl ShooterApp {
    fn new(seed: u64) -> Self {
        let now = Instant::now();
        Self {
            window: None,
            gpu: None,
            camera: FlyCamera::new(),
            input: InputState::new(),
            scene: ArenaScene::new(seed),
            uniforms: Uniforms::default(),
            start_time: now,
            last_frame: now,
            frame_count: 0,
            fps: 0.0,
            last_fps_update: now,
        }
    }

    /// Build all GPU resources for the freshly created window.
    fn initialize(&mut self, window: Arc<Window>) {
        let context = GpuContext::new(Arc::clone(&window), GpuContextConfig::default());
        let pipeline = MeshPipeline::new(&context.device, context.format());

        // One mesh per entity class, drawn instanced with per-entity
        // transforms; vertex color is white so the instance tint decides.
        let white = [1.0, 1.0, 1.0, 1.0];
        let cube = generate_box(Vec3::ZERO, Vec3::splat(ENEMY_RADIUS), white);
        let sphere = generate_sphere(Vec3::ZERO, FIREBALL_RADIUS, white, 16);

        let enemy_mesh = MeshPipeline::create_mesh_buffer(
            &context.device,
            "Enemy Mesh",
            &cube.vertices,
            &cube.indices,
        );
        let fireball_mesh = MeshPipeline::create_mesh_buffer(
            &context.device,
            "Fireball Mesh",
            &sphere.vertices,
            &sphere.indices,
        );

        let enemy_instance_buffer = create_instance_buffer(&context.device, "Enemy Instances");
        let fireball_instance_buffer =
            create_instance_buffer(&context.device, "Fireball Instances");

        let (width, height) = context.dimensions();
        self.uniforms.set_resolution(width, height);

        self.gpu = Some(GpuResources {
            context,
            pipeline,
            enemy_mesh,
            fireball_mesh,
            enemy_instance_buffer,
            fireball_instance_buffer,
        });
        self.window = Some(window);
    }

    fn handle_key(&mut self, key: winit::keyboard::KeyCode, pressed: bool) {
        self.input.handle_key(translate_key(key), pressed);
    }

    /// One simulation tick: camera from input, then the scene.
    fn update(&mut self, delta: f32) {
        let (dx, dy) = self.input.consume_look();
        self.camera.apply_look(dx, dy);
        self.camera.apply_movement(&self.input.movement, delta);

        self.scene.update(
            delta,
            self.input.fire,
            self.camera.position,
            self.camera.forward(),
        );

        for impact in self.scene.drain_impacts() {
            tracing::debug!(x = impact.position.x, y = impact.position.y, z = impact.position.z, "stone destroyed");
        }
    }

    fn render(&mut self) {
        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };

        let enemy_instances = self.scene.enemy_instances();
        let fireball_instances = self.scene.fireball_instances();
        update_instance_buffer(&gpu.context.queue, &gpu.enemy_instance_buffer, &enemy_instances);
        update_instance_buffer(
            &gpu.context.queue,
            &gpu.fireball_instance_buffer,
            &fireball_instances,
        );

        let view_proj = self.camera.projection_matrix() * self.camera.view_matrix();
        self.uniforms.set_camera(view_proj, self.camera.position);
        self.uniforms
            .set_time(self.start_time.elapsed().as_secs_f32());
        gpu.pipeline.upload_uniforms(&gpu.context.queue, &self.uniforms);

        let output = match gpu.context.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (width, height) = gpu.context.dimensions();
                gpu.context.resize(width, height);
                return;
            }
            Err(err) => {
                tracing::warn!(?err, "dropped frame");
                return;
            }
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = gpu
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Arena Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &gpu.context.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_pipeline(&gpu.pipeline.pipeline);
            render_pass.set_bind_group(0, &gpu.pipeline.bind_group, &[]);

            let enemy_count = enemy_instances.len().min(MAX_MESH_INSTANCES) as u32;
            if enemy_count > 0 {
                render_pass.set_vertex_buffer(0, gpu.enemy_mesh.vertex_buffer.slice(..));
                render_pass.set_vertex_buffer(1, gpu.enemy_instance_buffer.slice(..));
                render_pass.set_index_buffer(
                    gpu.enemy_mesh.index_buffer.slice(..),
                    wgpu::IndexFormat::Uint32,
                );
                render_pass.draw_indexed(0..gpu.enemy_mesh.index_count, 0, 0..enemy_count);
            }

            let fireball_count = fireball_instances.len().min(MAX_MESH_INSTANCES) as u32;
            if fireball_count > 0 {
                render_pass.set_vertex_buffer(0, gpu.fireball_mesh.vertex_buffer.slice(..));
                render_pass.set_vertex_buffer(1, gpu.fireball_instance_buffer.slice(..));
                render_pass.set_index_buffer(
                    gpu.fireball_mesh.index_buffer.slice(..),
                    wgpu::IndexFormat::Uint32,
                );
                render_pass.draw_indexed(0..gpu.fireball_mesh.index_count, 0, 0..fireball_count);
            }
        }

        gpu.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }
}

/// Map winit key codes onto the engine's generic key codes.
fn translate_key(key: winit::keyboard::KeyCode) -> KeyCode {
    use winit::keyboard::KeyCode as WinitKey;
    match key {
        WinitKey::KeyW => KeyCode::W,
        WinitKey::KeyA => KeyCode::A,
        WinitKey::KeyS => KeyCode::S,
        WinitKey::KeyD => KeyCode::D,
        WinitKey::ArrowUp => KeyCode::ArrowUp,
        WinitKey::ArrowDown => KeyCode::ArrowDown,
        WinitKey::ArrowLeft => KeyCode::ArrowLeft,
        WinitKey::ArrowRight => KeyCode::ArrowRight,
        WinitKey::Space => KeyCode::Space,
        WinitKey::Escape => KeyCode::Escape,
        _ => KeyCode::Unknown,
    }
}

impl ApplicationHandler for ShooterApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attrs = WindowAttributes::default()
                .with_title("Shooter")
                .with_inner_size(PhysicalSize::new(1024, 768));
            let window = Arc::new(event_loop.create_window(attrs).expect("create window"));

            // Relative-look emulation: lock and hide the cursor.
            if window.set_cursor_grab(CursorGrabMode::Locked).is_err() {
                let _ = window.set_cursor_grab(CursorGrabMode::Confined);
            }
            window.set_cursor_visible(false);

            self.initialize(window);
            tracing::info!("entering arena - WASD/arrows fly, mouse looks, space fires, ESC quits");
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    self.handle_key(key, event.state == ElementState::Pressed);
                }
                if self.input.quit_requested {
                    event_loop.exit();
                }
            }
            WindowEvent::Focused(false) => self.input.clear(),
            WindowEvent::Resized(new_size) => {
                if let Some(gpu) = self.gpu.as_mut() {
                    gpu.context.resize(new_size.width, new_size.height);
                    self.uniforms.set_resolution(new_size.width, new_size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let delta = now.duration_since(self.last_frame).as_secs_f32();
                self.last_frame = now;

                self.frame_count += 1;
                let since_update = now.duration_since(self.last_fps_update).as_secs_f32();
                if since_update >= 1.0 {
                    self.fps = self.frame_count as f32 / since_update;
                    self.frame_count = 0;
                    self.last_fps_update = now;

                    if let Some(window) = &self.window {
                        window.set_title(&format!(
                            "Shooter | FPS: {:.0} | Stones: {} | Fireballs: {}",
                            self.fps,
                            self.scene.enemies.count(),
                            self.scene.fireballs.count(),
                        ));
                    }
                }

                self.update(delta);
                self.render();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn device_event(&mut self, _: &ActiveEventLoop, _: DeviceId, event: DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.input.accumulate_look(delta.0 as f32, delta.1 as f32);
        }
    }
}

fn main() {
    logging::init();

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let event_loop = EventLoop::new().expect("create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = ShooterApp::new(seed);
    event_loop.run_app(&mut app).expect("run event loop");
}
