mod drop_shadow;
mod fade;
mod scale;
mod translation;

pub use drop_shadow::DropShadowDecorator;
pub use fade::FadeDecorator;
pub use scale::ScaleDecorator;
pub use translation::TranslationDecorator;

use std::cell::RefCell;
use std::rc::Rc;

use terra_core::{Decorator, SharedDecorator};

/// Wrap a concrete decorator for attachment to a component stack, keeping a
/// typed handle for driving its parameters.
pub fn share<D: Decorator + 'static>(decorator: D) -> (Rc<RefCell<D>>, SharedDecorator) {
    let typed = Rc::new(RefCell::new(decorator));
    let erased: SharedDecorator = typed.clone();
    (typed, erased)
}
