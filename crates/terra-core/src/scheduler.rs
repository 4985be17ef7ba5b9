use std::cell::RefCell;
use std::rc::{Rc, Weak};

use slotmap::{SlotMap, new_key_type};
use web_time::{Duration, Instant};

use crate::clock::{Clock, SystemClock};
use crate::error::CoreError;

new_key_type! {
    struct TimerKey;
}

struct Timer {
    interval: Duration,
    due: Instant,
    seq: u64,
    callback: Rc<dyn Fn()>,
}

#[derive(Default)]
struct SchedulerInner {
    timers: SlotMap<TimerKey, Timer>,
    next_seq: u64,
}

/// Cooperative recurring-callback scheduler.
///
/// All timers run on the thread that pumps the scheduler; a callback runs to
/// completion before the next one fires, and callbacks are free to schedule
/// or cancel timers (including their own). Cancellation is synchronous: once
/// [`TimerHandle::cancel`] returns, the callback will not be invoked again,
/// even later in the same pump.
///
/// The host loop decides when to call [`Scheduler::pump`]; typically once per
/// frame, or after sleeping until [`Scheduler::next_due`].
#[derive(Clone)]
pub struct Scheduler {
    clock: Rc<dyn Clock>,
    inner: Rc<RefCell<SchedulerInner>>,
}

impl Scheduler {
    pub fn new(clock: Rc<dyn Clock>) -> Self {
        Self {
            clock,
            inner: Rc::new(RefCell::new(SchedulerInner::default())),
        }
    }

    /// Scheduler backed by the wall clock.
    pub fn system() -> Self {
        Self::new(Rc::new(SystemClock))
    }

    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    /// Register `callback` to fire every `interval`, first fire one interval
    /// from now. The timer runs until its handle is cancelled.
    pub fn schedule_repeating(
        &self,
        interval: Duration,
        callback: impl Fn() + 'static,
    ) -> Result<TimerHandle, CoreError> {
        if interval.is_zero() {
            return Err(CoreError::InvalidInterval);
        }

        let mut inner = self.inner.borrow_mut();
        let seq = inner.next_seq;
        inner.next_seq += 1;
        let key = inner.timers.insert(Timer {
            interval,
            due: self.clock.now() + interval,
            seq,
            callback: Rc::new(callback),
        });

        Ok(TimerHandle {
            key,
            inner: Rc::downgrade(&self.inner),
        })
    }

    /// Fire every timer that is due, oldest registration first.
    ///
    /// Timers registered during the pump wait for the next one. A timer that
    /// fell more than one interval behind fires once and is rescheduled for
    /// the future rather than replaying missed intervals.
    pub fn pump(&self) {
        let now = self.clock.now();

        let mut due: Vec<(u64, TimerKey)> = self
            .inner
            .borrow()
            .timers
            .iter()
            .filter(|(_, t)| t.due <= now)
            .map(|(k, t)| (t.seq, k))
            .collect();
        due.sort_unstable();

        for (_, key) in due {
            // An earlier callback in this batch may have cancelled this one.
            let callback = {
                let mut inner = self.inner.borrow_mut();
                match inner.timers.get_mut(key) {
                    Some(timer) => {
                        while timer.due <= now {
                            timer.due += timer.interval;
                        }
                        Some(timer.callback.clone())
                    }
                    None => None,
                }
            };

            if let Some(callback) = callback {
                callback();
            }
        }
    }

    pub fn has_timers(&self) -> bool {
        !self.inner.borrow().timers.is_empty()
    }

    /// Earliest deadline among registered timers, if any.
    pub fn next_due(&self) -> Option<Instant> {
        self.inner.borrow().timers.values().map(|t| t.due).min()
    }
}

/// Handle to a scheduled timer. Dropping the handle does not cancel the
/// timer; call [`TimerHandle::cancel`].
pub struct TimerHandle {
    key: TimerKey,
    inner: Weak<RefCell<SchedulerInner>>,
}

impl TimerHandle {
    /// Unschedule the timer. No-op if already cancelled or if the scheduler
    /// is gone.
    pub fn cancel(&self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.borrow_mut().timers.remove(self.key);
        } else {
            log::warn!("cancel on a timer whose scheduler was dropped");
        }
    }
}
