use terra_core::{Color, Decorator, Rect, Scene, SceneNode, Vec2};

use crate::theme::MotionTheme;

/// Paints an offset, semi-transparent fill behind the decorated component.
///
/// The shadow extends past the component's nominal bounds, so
/// `decorated_bounds` grows the rect by the shadow offset; callers that
/// repaint only the nominal bounds will leave shadow residue behind.
pub struct DropShadowDecorator {
    color: Color,
    opacity: f32,
    offset: Vec2,
    radius: f32,
}

impl DropShadowDecorator {
    pub fn new(theme: &MotionTheme) -> Self {
        Self {
            color: theme.shadow_color,
            opacity: theme.shadow_opacity,
            offset: theme.shadow_offset,
            radius: theme.shadow_radius,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Clamped to [0, 1]; takes effect on the next paint.
    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }
}

impl Decorator for DropShadowDecorator {
    fn begin(&self, scene: &mut Scene, bounds: Rect) {
        let alpha = self.color.alpha_f32() * self.opacity;
        scene.push(SceneNode::Rect {
            rect: bounds.translated(self.offset),
            color: self.color.with_alpha((alpha * 255.0) as u8),
            radius: self.radius,
        });
    }

    fn end(&self, _scene: &mut Scene) {}

    fn decorated_bounds(&self, bounds: Rect) -> Rect {
        bounds.expanded(self.offset)
    }
}
