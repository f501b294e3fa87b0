use crate::Command;
use gridscape_camera::FreeCamera;
use gridscape_common::RenderSettings;

/// World units of vertical travel per mouse-wheel delta unit.
pub const WHEEL_STEP: f32 = 0.001;

/// Vertical drag rotation is damped by this factor relative to horizontal.
pub const DRAG_TILT_DIVISOR: f32 = 4.0;

/// Orientation snapshot taken when a middle-button drag starts, offset by
/// the cursor position so the first motion event causes no jump.
#[derive(Debug, Clone, Copy)]
struct DragBaseline {
    yaw: f32,
    pitch: f32,
}

/// Consumes [`Command`]s and applies them to the camera and render
/// settings. Holds only the active drag baseline between calls.
#[derive(Debug, Default)]
pub struct CameraController {
    drag: Option<DragBaseline>,
}

impl CameraController {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a middle-button drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Apply one command. Movement and rotation mutate `camera`; menu
    /// commands mutate `settings`.
    pub fn apply(
        &mut self,
        cmd: Command,
        camera: &mut FreeCamera,
        settings: &mut RenderSettings,
    ) {
        match cmd {
            Command::Advance => camera.advance(1.0),
            Command::Retreat => camera.advance(-1.0),
            Command::StrafeRight => camera.strafe(1.0),
            Command::StrafeLeft => camera.strafe(-1.0),
            Command::TurnRight => camera.turn(1.0),
            Command::TurnLeft => camera.turn(-1.0),
            Command::TiltUp => camera.tilt(1.0),
            Command::TiltDown => camera.tilt(-1.0),
            Command::Elevate(delta) => camera.elevate(-delta * WHEEL_STEP),
            Command::DragBegin { x, y } => {
                self.drag = Some(DragBaseline {
                    yaw: camera.yaw - x * camera.turn_speed,
                    pitch: camera.pitch + y * camera.turn_speed / DRAG_TILT_DIVISOR,
                });
            }
            Command::DragMove { x, y } => {
                if let Some(base) = self.drag {
                    camera.set_orientation(
                        base.yaw + x * camera.turn_speed,
                        base.pitch - y * camera.turn_speed / DRAG_TILT_DIVISOR,
                    );
                }
            }
            Command::DragEnd => {
                self.drag = None;
            }
            Command::SetFillMode(mode) => {
                tracing::debug!(?mode, "fill mode changed");
                settings.fill_mode = mode;
            }
            Command::SetBackground(color) => {
                tracing::debug!(?color, "background color changed");
                settings.background = color;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridscape_common::{FillMode, Rgba};
    use std::f32::consts::FRAC_PI_2;

    fn rig() -> (CameraController, FreeCamera, RenderSettings) {
        (
            CameraController::new(),
            FreeCamera::default(),
            RenderSettings::default(),
        )
    }

    #[test]
    fn hundred_left_turns_reach_minus_two() {
        let (mut ctl, mut cam, mut settings) = rig();
        for _ in 0..100 {
            ctl.apply(Command::TurnLeft, &mut cam, &mut settings);
        }
        assert!((cam.yaw + 2.0).abs() < 1e-4);
    }

    #[test]
    fn turn_right_matches_closed_form() {
        let (mut ctl, mut cam, mut settings) = rig();
        for _ in 0..7 {
            ctl.apply(Command::TurnRight, &mut cam, &mut settings);
        }
        assert!((cam.yaw - 7.0 * cam.turn_speed).abs() < 1e-6);
    }

    #[test]
    fn tilt_spam_respects_pitch_interval() {
        let (mut ctl, mut cam, mut settings) = rig();
        for _ in 0..10_000 {
            ctl.apply(Command::TiltUp, &mut cam, &mut settings);
        }
        assert!(cam.pitch < FRAC_PI_2);
        for _ in 0..20_000 {
            ctl.apply(Command::TiltDown, &mut cam, &mut settings);
        }
        assert!(cam.pitch > -FRAC_PI_2);
    }

    #[test]
    fn advance_and_retreat_cancel_out() {
        let (mut ctl, mut cam, mut settings) = rig();
        let start = cam.position;
        ctl.apply(Command::Advance, &mut cam, &mut settings);
        ctl.apply(Command::Retreat, &mut cam, &mut settings);
        assert!((cam.position - start).length() < 1e-6);
    }

    #[test]
    fn wheel_delta_scales_vertical_travel() {
        let (mut ctl, mut cam, mut settings) = rig();
        let y0 = cam.position.y;
        // one notch up lowers the camera by 120 * WHEEL_STEP
        ctl.apply(Command::Elevate(120.0), &mut cam, &mut settings);
        assert!((cam.position.y - (y0 - 0.12)).abs() < 1e-6);
    }

    #[test]
    fn drag_move_at_press_position_causes_no_jump() {
        let (mut ctl, mut cam, mut settings) = rig();
        cam.yaw = 0.3;
        cam.pitch = 0.1;
        ctl.apply(Command::DragBegin { x: 120.0, y: 80.0 }, &mut cam, &mut settings);
        ctl.apply(Command::DragMove { x: 120.0, y: 80.0 }, &mut cam, &mut settings);
        assert!((cam.yaw - 0.3).abs() < 1e-5);
        assert!((cam.pitch - 0.1).abs() < 1e-5);
    }

    #[test]
    fn drag_rotates_relative_to_baseline() {
        let (mut ctl, mut cam, mut settings) = rig();
        ctl.apply(Command::DragBegin { x: 0.0, y: 0.0 }, &mut cam, &mut settings);
        ctl.apply(Command::DragMove { x: 50.0, y: 0.0 }, &mut cam, &mut settings);
        assert!((cam.yaw - 50.0 * cam.turn_speed).abs() < 1e-5);

        ctl.apply(Command::DragMove { x: 0.0, y: 40.0 }, &mut cam, &mut settings);
        let expected_pitch = -40.0 * cam.turn_speed / DRAG_TILT_DIVISOR;
        assert!((cam.pitch - expected_pitch).abs() < 1e-5);
    }

    #[test]
    fn extreme_drag_deltas_keep_pitch_clamped() {
        let (mut ctl, mut cam, mut settings) = rig();
        ctl.apply(Command::DragBegin { x: 0.0, y: 0.0 }, &mut cam, &mut settings);
        ctl.apply(
            Command::DragMove { x: 0.0, y: -1.0e9 },
            &mut cam,
            &mut settings,
        );
        assert!(cam.pitch < FRAC_PI_2);
        ctl.apply(
            Command::DragMove { x: 0.0, y: 1.0e9 },
            &mut cam,
            &mut settings,
        );
        assert!(cam.pitch > -FRAC_PI_2);
    }

    #[test]
    fn drag_move_without_begin_is_ignored() {
        let (mut ctl, mut cam, mut settings) = rig();
        let (yaw, pitch) = (cam.yaw, cam.pitch);
        ctl.apply(Command::DragMove { x: 500.0, y: 500.0 }, &mut cam, &mut settings);
        assert_eq!(cam.yaw, yaw);
        assert_eq!(cam.pitch, pitch);
    }

    #[test]
    fn drag_end_stops_tracking() {
        let (mut ctl, mut cam, mut settings) = rig();
        ctl.apply(Command::DragBegin { x: 0.0, y: 0.0 }, &mut cam, &mut settings);
        assert!(ctl.is_dragging());
        ctl.apply(Command::DragEnd, &mut cam, &mut settings);
        assert!(!ctl.is_dragging());

        let yaw = cam.yaw;
        ctl.apply(Command::DragMove { x: 99.0, y: 0.0 }, &mut cam, &mut settings);
        assert_eq!(cam.yaw, yaw);
    }

    #[test]
    fn menu_commands_write_through_to_settings() {
        let (mut ctl, mut cam, mut settings) = rig();
        ctl.apply(
            Command::SetFillMode(FillMode::Wireframe),
            &mut cam,
            &mut settings,
        );
        assert_eq!(settings.fill_mode, FillMode::Wireframe);

        let teal = Rgba::new(0.0, 0.5, 0.5, 1.0);
        ctl.apply(Command::SetBackground(teal), &mut cam, &mut settings);
        assert_eq!(settings.background, teal);
    }
}
