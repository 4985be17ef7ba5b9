use std::cell::RefCell;
use std::rc::Rc;

use terra_core::{Component, Scheduler, SharedDecorator};
use web_time::Duration;

use crate::decorator::{FadeDecorator, share};
use crate::error::MotionError;
use crate::transition::{End, Transition};

/// Fades a component out (or in, with `reverse`) over a fixed duration.
///
/// Owns a [`FadeDecorator`]; `start` pushes it onto the target's decorator
/// stack and each tick drives its opacity from the timeline, requesting a
/// repaint. On completion or stop the decorator is removed, leaving the
/// stack exactly as it was — unless the clear-on-end policy is disabled, in
/// which case the final opacity stays applied for the caller to clean up.
pub struct FadeTransition {
    transition: Transition,
    decorator: Rc<RefCell<FadeDecorator>>,
    target: Component,
}

impl FadeTransition {
    pub fn new(
        scheduler: &Scheduler,
        target: &Component,
        duration: Duration,
        rate: u32,
    ) -> Result<Self, MotionError> {
        Self::with_options(scheduler, target, duration, rate, false, true)
    }

    /// `reverse` fades in (opacity = percent) instead of out;
    /// `clear_on_end` controls whether the decorator is removed when the
    /// transition leaves the running state.
    pub fn with_options(
        scheduler: &Scheduler,
        target: &Component,
        duration: Duration,
        rate: u32,
        reverse: bool,
        clear_on_end: bool,
    ) -> Result<Self, MotionError> {
        let (decorator, erased) = share(FadeDecorator::new());

        let transition = Transition::new(scheduler, duration, rate)?
            .on_attach({
                let target = target.clone();
                let erased: SharedDecorator = erased.clone();
                // Membership is checked against the live stack, not a cached
                // flag: with clear-on-end disabled the caller may remove the
                // leftover decorator before restarting.
                move || {
                    if !target.has_decorator(&erased) {
                        target.add_decorator(erased.clone());
                    }
                }
            })
            .on_detach({
                let target = target.clone();
                let erased: SharedDecorator = erased.clone();
                move || {
                    if clear_on_end {
                        target.remove_decorator(&erased);
                    }
                }
            })
            .on_update({
                let target = target.clone();
                let decorator = decorator.clone();
                move |percent| {
                    let opacity = if reverse { percent } else { 1.0 - percent };
                    decorator.borrow_mut().set_opacity(opacity);
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

    /// Current decorator opacity.
    pub fn opacity(&self) -> f32 {
        self.decorator.borrow().opacity()
    }

    pub fn target(&self) -> &Component {
        &self.target
    }
}
