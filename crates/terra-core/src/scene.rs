use crate::{Color, Rect, Transform};

/// Recorded paint output for one frame.
///
/// Terra has no retained scene graph: a component's painter and the
/// decorators wrapped around it emit ops into a flat list, and whatever
/// consumes the scene (a renderer, the devtools dump, a test) replays it.
/// Push/Pop ops are strictly paired; every `begin` a decorator emits must be
/// balanced by its `end`.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub nodes: Vec<SceneNode>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneNode {
    Rect {
        rect: Rect,
        color: Color,
        radius: f32,
    },
    /// Multiply the alpha of everything up to the matching `PopAlpha`.
    PushAlpha(f32),
    PopAlpha,
    PushTransform(Transform),
    PopTransform,
    PushClip {
        rect: Rect,
    },
    PopClip,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: SceneNode) {
        self.nodes.push(node);
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Effective alpha at the end of the recorded ops, the product of all
    /// unbalanced `PushAlpha` values. 1.0 for a balanced scene.
    pub fn open_alpha(&self) -> f32 {
        let mut stack: Vec<f32> = Vec::new();
        for node in &self.nodes {
            match node {
                SceneNode::PushAlpha(a) => stack.push(*a),
                SceneNode::PopAlpha => {
                    stack.pop();
                }
                _ => {}
            }
        }
        stack.iter().product()
    }
}
