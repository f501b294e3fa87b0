use glam::{Mat4, Vec3};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

/// Hard bound on pitch, strictly inside the open interval `(-PI/2, PI/2)`
/// so the look-at point never collapses onto the up axis.
pub const PITCH_LIMIT: f32 = FRAC_PI_2 - 0.01;

/// Free camera with position, yaw, pitch, and projection parameters.
///
/// Mutated directly by the input controller on the UI thread; transforms are
/// recomputed each frame from the current state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreeCamera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub move_speed: f32,
    pub turn_speed: f32,
}

impl Default for FreeCamera {
    fn default() -> Self {
        Self {
            position: Vec3::new(5.0, 2.5, -5.5),
            yaw: 0.0,
            pitch: 0.0,
            fov: FRAC_PI_4,
            aspect: 16.0 / 9.0,
            near: 1.0,
            far: 100.0,
            move_speed: 0.2,
            turn_speed: 0.02,
        }
    }
}

impl FreeCamera {
    /// The point the camera looks toward, one unit ahead of `position`
    /// along the current yaw/pitch orientation.
    pub fn look_at_point(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() + self.position.x + self.pitch.sin() * self.yaw.sin(),
            self.pitch.sin() + self.position.y,
            self.yaw.cos() + self.position.z + self.pitch.sin() * self.yaw.cos(),
        )
    }

    /// Translate along the yaw-forward direction on the XZ plane.
    /// Negative `steps` moves backward.
    pub fn advance(&mut self, steps: f32) {
        let d = steps * self.move_speed;
        self.position.x += d * self.yaw.sin();
        self.position.z += d * self.yaw.cos();
    }

    /// Translate along the lateral direction (yaw + PI/2) on the XZ plane.
    /// Negative `steps` moves left.
    pub fn strafe(&mut self, steps: f32) {
        let lateral = self.yaw + FRAC_PI_2;
        let d = steps * self.move_speed;
        self.position.x += d * lateral.sin();
        self.position.z += d * lateral.cos();
    }

    /// Translate vertically by `amount` world units.
    pub fn elevate(&mut self, amount: f32) {
        self.position.y += amount;
    }

    /// Rotate horizontally by `steps` turn increments. Yaw accumulates
    /// without wrapping.
    pub fn turn(&mut self, steps: f32) {
        self.yaw += steps * self.turn_speed;
    }

    /// Rotate vertically by `steps` turn increments, clamped to
    /// `PITCH_LIMIT`.
    pub fn tilt(&mut self, steps: f32) {
        self.set_pitch(self.pitch + steps * self.turn_speed);
    }

    /// Set yaw and pitch absolutely; pitch is clamped. Used by mouse-drag
    /// rotation, which recomputes orientation from a baseline every update.
    pub fn set_orientation(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.set_pitch(pitch);
    }

    fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.look_at_point(), Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn look_at_is_one_unit_ahead_at_rest() {
        let cam = FreeCamera::default();
        let target = cam.look_at_point();
        assert_eq!(target, cam.position + Vec3::Z);
    }

    #[test]
    fn look_at_follows_yaw() {
        let cam = FreeCamera {
            yaw: FRAC_PI_2,
            ..FreeCamera::default()
        };
        let target = cam.look_at_point();
        assert!((target.x - (cam.position.x + 1.0)).abs() < 1e-6);
        assert!((target.z - cam.position.z).abs() < 1e-6);
    }

    #[test]
    fn look_at_rises_with_pitch() {
        let mut cam = FreeCamera::default();
        cam.tilt(10.0);
        let target = cam.look_at_point();
        assert!(target.y > cam.position.y);
    }

    #[test]
    fn advance_moves_along_yaw_forward() {
        let mut cam = FreeCamera::default();
        let start = cam.position;
        cam.advance(1.0);
        assert!((cam.position.z - (start.z + cam.move_speed)).abs() < 1e-6);
        assert_eq!(cam.position.x, start.x);
        assert_eq!(cam.position.y, start.y);
    }

    #[test]
    fn strafe_is_perpendicular_to_forward() {
        let mut cam = FreeCamera::default();
        let start = cam.position;
        cam.strafe(1.0);
        assert!((cam.position.x - (start.x + cam.move_speed)).abs() < 1e-6);
        assert!((cam.position.z - start.z).abs() < 1e-6);
    }

    #[test]
    fn pitch_does_not_affect_planar_movement() {
        let mut cam = FreeCamera::default();
        cam.tilt(20.0);
        let start = cam.position;
        cam.advance(1.0);
        assert_eq!(cam.position.y, start.y);
    }

    #[test]
    fn yaw_accumulates_without_wrapping() {
        let mut cam = FreeCamera::default();
        for _ in 0..500 {
            cam.turn(1.0);
        }
        assert!((cam.yaw - 500.0 * cam.turn_speed).abs() < 1e-3);
    }

    #[test]
    fn pitch_never_leaves_open_interval() {
        let mut cam = FreeCamera::default();
        for _ in 0..10_000 {
            cam.tilt(1.0);
        }
        assert!(cam.pitch < FRAC_PI_2);
        cam.set_orientation(0.0, -1.0e9);
        assert!(cam.pitch > -FRAC_PI_2);
    }

    #[test]
    fn view_projection_is_finite() {
        let cam = FreeCamera::default();
        let vp = cam.view_projection();
        assert!(vp.to_cols_array().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn projection_uses_configured_frustum() {
        let cam = FreeCamera::default();
        assert_eq!(cam.fov, FRAC_PI_4);
        assert_eq!(cam.near, 1.0);
        assert_eq!(cam.far, 100.0);
    }
}
