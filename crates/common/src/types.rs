/// Rasterization style for the grid pipeline.
///
/// `Solid` is supported by the render backend but the menu surface only
/// exposes `Point` and `Wireframe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FillMode {
    #[default]
    Point,
    Wireframe,
    Solid,
}

/// Linear RGBA color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Rgba::BLACK
    }
}

/// Presentation settings toggled from the menu.
///
/// Passed by reference into the render path each frame; never a process-wide
/// singleton.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RenderSettings {
    pub fill_mode: FillMode,
    pub background: Rgba,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_match_startup_state() {
        let settings = RenderSettings::default();
        assert_eq!(settings.fill_mode, FillMode::Point);
        assert_eq!(settings.background, Rgba::BLACK);
    }

    #[test]
    fn rgba_to_array_preserves_channel_order() {
        let c = Rgba::new(0.1, 0.2, 0.3, 1.0);
        assert_eq!(c.to_array(), [0.1, 0.2, 0.3, 1.0]);
    }

    #[test]
    fn white_is_opaque() {
        assert_eq!(Rgba::WHITE.a, 1.0);
    }
}
