use terra_core::{Decorator, Rect, Scene, SceneNode, Transform, Vec2};

/// Shifts the decorated component's painted output by a pixel offset.
pub struct TranslationDecorator {
    offset: Vec2,
}

impl TranslationDecorator {
    pub fn new() -> Self {
        Self { offset: Vec2::ZERO }
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }
}

impl Default for TranslationDecorator {
    fn default() -> Self {
        Self::new()
    }
}

impl Decorator for TranslationDecorator {
    fn begin(&self, scene: &mut Scene, _bounds: Rect) {
        scene.push(SceneNode::PushTransform(Transform::translate(
            self.offset.x,
            self.offset.y,
        )));
    }

    fn end(&self, scene: &mut Scene) {
        scene.push(SceneNode::PopTransform);
    }

    fn decorated_bounds(&self, bounds: Rect) -> Rect {
        bounds.translated(self.offset)
    }
}
