use terra_core::{Decorator, Rect, Scene, SceneNode};

/// Multiplies the opacity of everything the decorated component paints.
pub struct FadeDecorator {
    opacity: f32,
}

impl FadeDecorator {
    pub fn new() -> Self {
        Self { opacity: 1.0 }
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Clamped to [0, 1]; takes effect on the next paint.
    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }
}

impl Default for FadeDecorator {
    fn default() -> Self {
        Self::new()
    }
}

impl Decorator for FadeDecorator {
    fn begin(&self, scene: &mut Scene, _bounds: Rect) {
        scene.push(SceneNode::PushAlpha(self.opacity));
    }

    fn end(&self, scene: &mut Scene) {
        scene.push(SceneNode::PopAlpha);
    }
}
