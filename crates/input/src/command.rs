use gridscape_common::{FillMode, Rgba};

/// A discrete input event, produced by the windowing shell or the menu and
/// consumed by [`CameraController::apply`](crate::CameraController::apply).
///
/// Decouples camera/settings mutation from any UI toolkit, so the whole
/// input surface is testable without an event loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Move forward along the yaw-forward direction (W).
    Advance,
    /// Move backward (S).
    Retreat,
    /// Move left along the lateral direction (A).
    StrafeLeft,
    /// Move right (D).
    StrafeRight,
    /// Decrease yaw by one turn step (Q).
    TurnLeft,
    /// Increase yaw by one turn step (E).
    TurnRight,
    /// Increase pitch by one turn step (Up), clamped.
    TiltUp,
    /// Decrease pitch by one turn step (Down), clamped.
    TiltDown,
    /// Vertical translation from a mouse-wheel delta (host units; a full
    /// notch is 120).
    Elevate(f32),
    /// Middle button pressed at the given cursor position; snapshots the
    /// rotation baseline.
    DragBegin { x: f32, y: f32 },
    /// Cursor moved while the middle button is held.
    DragMove { x: f32, y: f32 },
    /// Middle button released.
    DragEnd,
    /// Select the rasterization style from the menu.
    SetFillMode(FillMode),
    /// Apply a background color chosen in the picker dialog.
    SetBackground(Rgba),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_compare_by_value() {
        assert_eq!(Command::Advance, Command::Advance);
        assert_ne!(
            Command::SetFillMode(FillMode::Point),
            Command::SetFillMode(FillMode::Wireframe)
        );
    }

    #[test]
    fn drag_commands_carry_cursor_position() {
        let cmd = Command::DragBegin { x: 12.0, y: 34.0 };
        assert!(matches!(cmd, Command::DragBegin { x, y } if x == 12.0 && y == 34.0));
    }
}
