use std::cell::RefCell;
use std::rc::Rc;

use terra_core::{Scheduler, TimerHandle};
use web_time::{Duration, Instant};

use crate::error::MotionError;

/// How a transition left the running state, passed to the end callback so
/// callers can tell natural completion from cancellation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum End {
    /// Elapsed time reached the duration.
    Completed,
    /// [`Transition::stop`] was called before the duration elapsed.
    Stopped,
}

type EndCallback = Box<dyn FnOnce(End)>;

struct State {
    duration: Duration,
    interval: Duration,
    rate: u32,
    repeat: bool,
    start_time: Option<Instant>,
    elapsed: Duration,
    timer: Option<TimerHandle>,
    on_end: Option<EndCallback>,
}

impl State {
    fn percent(&self) -> f32 {
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

#[derive(Clone)]
struct Hooks {
    update: Rc<dyn Fn(f32)>,
    attach: Rc<dyn Fn()>,
    detach: Rc<dyn Fn()>,
}

/// A timed transition: runs percent-complete from 0 to 1 over a fixed
/// duration at a fixed tick rate, invoking an update hook each tick.
///
/// The engine is a two-state machine, idle → running → idle. `start`
/// schedules a recurring tick on the supplied scheduler; each tick advances
/// elapsed time by the actual clock delta since start (ticks may be late),
/// clamped to the duration. Reaching the duration cancels the schedule, runs
/// the detach hook, and fires the end callback with [`End::Completed`];
/// `stop` does the same synchronously with [`End::Stopped`]. A stopped
/// transition can be started again from zero.
///
/// The attach hook runs right before the tick is scheduled and the detach
/// hook on every running→idle edge, so a transition is always either fully
/// attached (decorator present, timer scheduled) or fully detached. Concrete
/// transitions use these to bracket decorator-stack membership.
pub struct Transition {
    scheduler: Scheduler,
    state: Rc<RefCell<State>>,
    hooks: Hooks,
}

impl Transition {
    /// `rate` is in ticks per second. Zero duration or rate is an
    /// invalid-argument error.
    pub fn new(scheduler: &Scheduler, duration: Duration, rate: u32) -> Result<Self, MotionError> {
        if duration.is_zero() {
            return Err(MotionError::ZeroDuration);
        }
        if rate == 0 {
            return Err(MotionError::ZeroRate);
        }

        Ok(Self {
            scheduler: scheduler.clone(),
            state: Rc::new(RefCell::new(State {
                duration,
                interval: Duration::from_secs_f64(1.0 / rate as f64),
                rate,
                repeat: false,
                start_time: None,
                elapsed: Duration::ZERO,
                timer: None,
                on_end: None,
            })),
            hooks: Hooks {
                update: Rc::new(|_| {}),
                attach: Rc::new(|| {}),
                detach: Rc::new(|| {}),
            },
        })
    }

    /// Roll the timeline over at the end of each period instead of
    /// completing. A repeating transition only ever ends via [`Transition::stop`].
    pub fn repeating(self) -> Self {
        self.state.borrow_mut().repeat = true;
        self
    }

    /// Per-tick hook, called with percent-complete (eased values are the
    /// hook's own business).
    pub fn on_update(mut self, f: impl Fn(f32) + 'static) -> Self {
        self.hooks.update = Rc::new(f);
        self
    }

    pub fn on_attach(mut self, f: impl Fn() + 'static) -> Self {
        self.hooks.attach = Rc::new(f);
        self
    }

    pub fn on_detach(mut self, f: impl Fn() + 'static) -> Self {
        self.hooks.detach = Rc::new(f);
        self
    }

    // --- queries ---------------------------------------------------------

    pub fn duration(&self) -> Duration {
        self.state.borrow().duration
    }

    pub fn rate(&self) -> u32 {
        self.state.borrow().rate
    }

    /// Milliseconds-scale gap between ticks (1s / rate).
    pub fn interval(&self) -> Duration {
        self.state.borrow().interval
    }

    pub fn is_running(&self) -> bool {
        self.state.borrow().timer.is_some()
    }

    /// Elapsed running time, clamped to the duration. Retains its final
    /// value after the transition ends; zero before the first start.
    pub fn elapsed(&self) -> Duration {
        self.state.borrow().elapsed
    }

    /// Elapsed over duration, in [0, 1]. Monotonically non-decreasing while
    /// a non-repeating transition runs.
    pub fn percent_complete(&self) -> f32 {
        self.state.borrow().percent()
    }

    // --- lifecycle -------------------------------------------------------

    /// Start without an end callback.
    pub fn start(&self) -> Result<(), MotionError> {
        self.start_inner(None)
    }

    /// Start, registering `on_end` in the single callback slot. The callback
    /// fires exactly once, on completion or on [`Transition::stop`].
    pub fn start_with(&self, on_end: impl FnOnce(End) + 'static) -> Result<(), MotionError> {
        self.start_inner(Some(Box::new(on_end)))
    }

    fn start_inner(&self, on_end: Option<EndCallback>) -> Result<(), MotionError> {
        let interval = {
            let mut state = self.state.borrow_mut();
            if state.timer.is_some() {
                return Err(MotionError::AlreadyRunning);
            }
            state.on_end = on_end;
            state.start_time = Some(self.scheduler.now());
            state.elapsed = Duration::ZERO;
            state.interval
        };

        (self.hooks.attach)();

        let tick = {
            let state = self.state.clone();
            let hooks = self.hooks.clone();
            let scheduler = self.scheduler.clone();
            move || Self::tick(&scheduler, &state, &hooks)
        };
        match self.scheduler.schedule_repeating(interval, tick) {
            Ok(timer) => {
                self.state.borrow_mut().timer = Some(timer);
            }
            Err(e) => {
                // Leave no residue: undo the attach and the registration.
                (self.hooks.detach)();
                let mut state = self.state.borrow_mut();
                state.start_time = None;
                state.on_end = None;
                return Err(e.into());
            }
        }

        log::debug!(
            "transition started: duration {:?}, interval {:?}",
            self.duration(),
            self.interval()
        );

        // Establish the initial visual state before the first timer fire.
        (self.hooks.update)(0.0);
        Ok(())
    }

    /// Stop a running transition: unschedule synchronously (no tick fires
    /// after this returns), run the detach hook, and fire the end callback
    /// with [`End::Stopped`]. No-op on an idle transition.
    pub fn stop(&self) {
        Self::finish(&self.state, &self.hooks, End::Stopped);
    }

    fn tick(scheduler: &Scheduler, state: &Rc<RefCell<State>>, hooks: &Hooks) {
        let (percent, finished) = {
            let mut st = state.borrow_mut();
            let Some(start) = st.start_time else {
                log::warn!("transition tick fired while idle");
                return;
            };

            let since_start = scheduler.now().saturating_duration_since(start);
            if since_start >= st.duration {
                if st.repeat {
                    let remainder = Duration::from_nanos(
                        (since_start.as_nanos() % st.duration.as_nanos()) as u64,
                    );
                    st.start_time = Some(scheduler.now() - remainder);
                    st.elapsed = remainder;
                    (st.percent(), false)
                } else {
                    st.elapsed = st.duration;
                    (1.0, true)
                }
            } else {
                st.elapsed = since_start;
                (st.percent(), false)
            }
        };

        (hooks.update)(percent);

        if finished {
            Self::finish(state, hooks, End::Completed);
        }
    }

    fn finish(state: &Rc<RefCell<State>>, hooks: &Hooks, how: End) {
        let (timer, on_end) = {
            let mut st = state.borrow_mut();
            match st.timer.take() {
                Some(timer) => {
                    st.start_time = None;
                    (timer, st.on_end.take())
                }
                // Already idle.
                None => return,
            }
        };

        timer.cancel();
        (hooks.detach)();
        log::debug!("transition ended: {how:?}");
        if let Some(on_end) = on_end {
            on_end(how);
        }
    }
}
