use terra_core::{Color, Vec2};
use web_time::Duration;

/// Motion defaults shared across transitions and shadow decorators.
///
/// Passed by reference into the constructors that want defaults; there is no
/// process-wide theme. Values mirror the stock Terra skins (250ms slides at
/// 30fps, 150ms popup fades, black shadows at 33% offset by 3px).
#[derive(Clone, Debug)]
pub struct MotionTheme {
    pub shadow_color: Color,
    pub shadow_opacity: f32,
    pub shadow_offset: Vec2,
    pub shadow_radius: f32,
    pub slide_duration: Duration,
    pub slide_rate: u32,
    pub fade_duration: Duration,
    pub fade_rate: u32,
}

impl Default for MotionTheme {
    fn default() -> Self {
        Self {
            shadow_color: Color::BLACK,
            shadow_opacity: 0.33,
            shadow_offset: Vec2::new(3.0, 3.0),
            shadow_radius: 3.0,
            slide_duration: Duration::from_millis(250),
            slide_rate: 30,
            fade_duration: Duration::from_millis(150),
            fade_rate: 30,
        }
    }
}
