use std::cell::RefCell;
use std::rc::Rc;

use terra_core::{Component, Scheduler, SharedDecorator};
use web_time::Duration;

use crate::decorator::{DropShadowDecorator, FadeDecorator, share};
use crate::error::MotionError;
use crate::transition::{End, Transition};

/// Fades a window out together with its drop shadow.
///
/// One timeline drives two decorators: the owned fade decorator (attached
/// for the transition's lifetime, like [`crate::FadeTransition`]) and an
/// externally supplied shadow decorator that is already on the window's
/// stack and stays there. Because the shadow paints outside the window's
/// own bounds, each tick also asks the parent container to repaint the
/// window's full decorated region.
pub struct FadeWindowTransition {
    transition: Transition,
    fade: Rc<RefCell<FadeDecorator>>,
    target: Component,
}

impl FadeWindowTransition {
    pub fn new(
        scheduler: &Scheduler,
        target: &Component,
        duration: Duration,
        rate: u32,
        shadow: Rc<RefCell<DropShadowDecorator>>,
    ) -> Result<Self, MotionError> {
        let (fade, erased) = share(FadeDecorator::new());

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
                let fade = fade.clone();
                let shadow = shadow.clone();
                move |percent| {
                    let opacity = 1.0 - percent;
                    fade.borrow_mut().set_opacity(opacity);
                    shadow.borrow_mut().set_opacity(opacity);
                    target.repaint();
                    if let Some(parent) = target.parent() {
                        parent.repaint_region(target.decorated_bounds());
                    }
                }
            });

        Ok(Self {
            transition,
            fade,
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

    pub fn opacity(&self) -> f32 {
        self.fade.borrow().opacity()
    }

    pub fn target(&self) -> &Component {
        &self.target
    }
}
