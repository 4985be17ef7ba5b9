use std::cell::RefCell;
use std::rc::Rc;

use terra_core::{Component, Scheduler, SharedDecorator, Vec2};
use web_time::Duration;

use crate::decorator::{TranslationDecorator, share};
use crate::easing::Easing;
use crate::error::MotionError;
use crate::transition::{End, Transition};

/// Slides a component from `begin` to `end` with quadratic easing.
///
/// `reverse` selects the curve, not the direction: a forward slide
/// decelerates into its destination (ease-out) while a reversed one
/// accelerates away from it (ease-in), the pairing the sheet open/close
/// transitions want. Both axes use the same curve.
///
/// The current offsets are exposed through [`SlideTransition::x`] /
/// [`SlideTransition::y`] so a caller stopping a slide midway can hand its
/// progress to the opposite transition.
pub struct SlideTransition {
    transition: Transition,
    decorator: Rc<RefCell<TranslationDecorator>>,
    target: Component,
}

impl SlideTransition {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        scheduler: &Scheduler,
        target: &Component,
        begin: Vec2,
        end: Vec2,
        reverse: bool,
        duration: Duration,
        rate: u32,
    ) -> Result<Self, MotionError> {
        let (decorator, erased) = share(TranslationDecorator::new());
        let easing = Easing::Quadratic;

        let transition = Transition::new(scheduler, duration, rate)?
            .on_attach({
                let target = target.clone();
                let erased: SharedDecorator = erased.clone();
                move || target.add_decorator(erased.clone())
            })
            .on_detach({
                let target = target.clone();
                let erased: SharedDecorator = erased.clone();
                move || {
                    target.remove_decorator(&erased);
                }
            })
            .on_update({
                let target = target.clone();
                let decorator = decorator.clone();
                move |percent| {
                    // Ease over the normalized timeline; percent already
                    // carries the elapsed/duration ratio.
                    let ease = |from: f32, to: f32| {
                        if reverse {
                            easing.ease_in(percent, from, to - from, 1.0)
                        } else {
                            easing.ease_out(percent, from, to - from, 1.0)
                        }
                    };
                    let offset = Vec2::new(ease(begin.x, end.x), ease(begin.y, end.y));
                    decorator.borrow_mut().set_offset(offset);
                    target.repaint();
                }
            });

        Ok(Self {
            transition,
            decorator,
            target: target.clone(),
        })
    }

    pub fn start(&self) -> Result<(), MotionError> {
        self.transition.start()
    }

    pub fn start_with(&self, on_end: impl FnOnce(End) + 'static) -> Result<(), MotionError> {
        self.transition.start_with(on_end)
    }

    pub fn stop(&self) {
        self.transition.stop();
    }

    pub fn is_running(&self) -> bool {
        self.transition.is_running()
    }

    pub fn percent_complete(&self) -> f32 {
        self.transition.percent_complete()
    }

    pub fn elapsed(&self) -> Duration {
        self.transition.elapsed()
    }

    /// Current x offset.
    pub fn x(&self) -> f32 {
        self.decorator.borrow().offset().x
    }

    /// Current y offset.
    pub fn y(&self) -> f32 {
        self.decorator.borrow().offset().y
    }

    pub fn target(&self) -> &Component {
        &self.target
    }
}
