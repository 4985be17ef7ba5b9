use terra_core::{Decorator, Rect, Scene, SceneNode, Transform, Vec2};

/// Scales the decorated component's painted output about its origin.
pub struct ScaleDecorator {
    scale: Vec2,
}

impl ScaleDecorator {
    pub fn new() -> Self {
        Self {
            scale: Vec2::new(1.0, 1.0),
        }
    }

    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: Vec2) {
        self.scale = scale;
    }

    pub fn set_uniform(&mut self, s: f32) {
        self.scale = Vec2::new(s, s);
    }
}

impl Default for ScaleDecorator {
    fn default() -> Self {
        Self::new()
    }
}

impl Decorator for ScaleDecorator {
    fn begin(&self, scene: &mut Scene, _bounds: Rect) {
        scene.push(SceneNode::PushTransform(Transform::scale(
            self.scale.x,
            self.scale.y,
        )));
    }

    fn end(&self, scene: &mut Scene) {
        scene.push(SceneNode::PopTransform);
    }

    fn decorated_bounds(&self, bounds: Rect) -> Rect {
        Transform::scale(self.scale.x, self.scale.y).apply_to_rect(bounds)
    }
}
