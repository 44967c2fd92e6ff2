//! Fly Camera Controller Module
//!
//! A free-flying first-person camera: pointer deltas rotate it, held
//! movement keys translate it along its facing and side vectors. This is
//! window-system agnostic - it only manages camera state and derives the
//! view/projection matrices once per frame.
//!
//! Orientation convention: yaw 0 / pitch 0 looks toward +Z, yaw grows
//! counter-clockwise. Pointer deltas are subtracted, so moving the pointer
//! right turns the view toward -yaw. Pitch is unrestricted.

use glam::{Mat4, Vec3};

/// Movement speed in world units per second.
pub const MOVE_SPEED: f32 = 5.0;
/// Look sensitivity in radians per pixel of pointer delta.
pub const MOUSE_SPEED: f32 = 0.05;
/// Vertical field of view in radians.
pub const FIELD_OF_VIEW: f32 = std::f32::consts::PI / 4.0;
/// Projection aspect ratio, fixed regardless of window size.
pub const ASPECT_RATIO: f32 = 4.0 / 3.0;
/// Near clip plane distance.
pub const Z_NEAR: f32 = 0.1;
/// Far clip plane distance.
pub const Z_FAR: f32 = 100.0;

/// Free-flying FPS camera.
///
/// Input handling is done externally; per frame the caller feeds the
/// accumulated pointer delta to [`apply_look`](FlyCamera::apply_look) and
/// the held movement keys to [`apply_movement`](FlyCamera::apply_movement),
/// then reads the matrices.
#[derive(Clone, Debug)]
pub struct FlyCamera {
    /// Camera position in world space
    pub position: Vec3,
    /// Horizontal angle (radians) - unrestricted, wraps around
    pub yaw: f32,
    /// Vertical angle (radians) - unrestricted
    pub pitch: f32,
    /// Movement speed in units per second
    pub move_speed: f32,
    /// Look sensitivity in radians per pixel
    pub mouse_speed: f32,
    /// Vertical field of view in radians
    pub fov: f32,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self {
            // Start below and outside the spawn volume, looking back at it.
            position: Vec3::new(-11.0, -11.0, -11.0),
            yaw: 0.625_f32.asin(),
            pitch: 0.6_f32.asin(),
            move_speed: MOVE_SPEED,
            mouse_speed: MOUSE_SPEED,
            fov: FIELD_OF_VIEW,
        }
    }
}

impl FlyCamera {
    /// Create a camera at the default start pose.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a camera at a custom position.
    pub fn with_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// The direction the camera is looking, from spherical coordinates.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.pitch.cos() * self.yaw.sin(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.cos(),
        )
    }

    /// Horizontal side vector (strafe axis), independent of pitch.
    #[inline]
    pub fn side(&self) -> Vec3 {
        let a = self.yaw - std::f32::consts::FRAC_PI_2;
        Vec3::new(a.sin(), 0.0, a.cos())
    }

    /// Up vector completing the camera basis.
    #[inline]
    pub fn up(&self) -> Vec3 {
        self.side().cross(self.forward())
    }

    /// Apply an accumulated pointer delta (in pixels) to the orientation.
    ///
    /// Deltas are relative pointer motion since the previous frame; a
    /// freshly created accumulator holds zero, so the first frame never
    /// applies a stale offset.
    pub fn apply_look(&mut self, dx: f32, dy: f32) {
        self.yaw -= self.mouse_speed * dx;
        self.pitch -= self.mouse_speed * dy;
    }

    /// Translate along the facing and side vectors for the held keys.
    pub fn apply_movement(&mut self, keys: &crate::input::MovementKeys, delta: f32) {
        let step = delta * self.move_speed;
        let forward = self.forward();
        let side = self.side();

        if keys.forward {
            self.position += forward * step;
        }
        if keys.backward {
            self.position -= forward * step;
        }
        if keys.right {
            self.position += side * step;
        }
        if keys.left {
            self.position -= side * step;
        }
    }

    /// View matrix looking from the camera position along its facing.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward(), self.up())
    }

    /// Perspective projection with a fixed 4:3 aspect.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, ASPECT_RATIO, Z_NEAR, Z_FAR)
    }
}
