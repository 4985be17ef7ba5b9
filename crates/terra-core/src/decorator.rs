use std::cell::RefCell;
use std::rc::Rc;

use crate::{Rect, Scene};

/// A composable paint transform applied around a component's own painter.
///
/// Decorators are stacked on a component (outermost first); at paint time
/// each one emits its opening scene ops, the component paints, and the ops
/// are closed in reverse order. A decorator never triggers a redraw itself:
/// parameter setters on concrete decorators take effect on the next paint.
pub trait Decorator {
    /// Emit scene ops before the decorated content paints.
    fn begin(&self, scene: &mut Scene, bounds: Rect);

    /// Close whatever [`Decorator::begin`] opened.
    fn end(&self, scene: &mut Scene);

    /// The region this decorator can paint, given the component's nominal
    /// bounds. Override when painting outside them (e.g. a drop shadow).
    fn decorated_bounds(&self, bounds: Rect) -> Rect {
        bounds
    }
}

pub type SharedDecorator = Rc<RefCell<dyn Decorator>>;

/// Pointer identity for shared decorators. Compares allocation addresses as
/// thin pointers so trait-object vtable addresses never affect the result.
pub fn same_decorator(a: &SharedDecorator, b: &SharedDecorator) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}
