//! # Timed Transitions and Visual Decorators
//!
//! terra-effects animates components by pairing a small timed engine with
//! paint decorators from terra-core's model:
//!
//! - `Transition` — runs percent-complete from 0 to 1 over a duration at a
//!   tick rate, with attach/detach hooks bracketing decorator membership.
//! - `FadeDecorator` / `TranslationDecorator` / `DropShadowDecorator` /
//!   `ScaleDecorator` — the paint transforms transitions drive.
//! - `FadeTransition`, `SlideTransition`, `FadeWindowTransition` — the
//!   stock Terra effects built on the two.
//!
//! ## Running a fade
//!
//! ```rust
//! use std::rc::Rc;
//! use terra_core::*;
//! use terra_effects::*;
//! use web_time::Duration;
//!
//! let clock = Rc::new(TestClock::new());
//! let scheduler = Scheduler::new(clock.clone());
//! let button = Component::new(Rect::new(0.0, 0.0, 80.0, 24.0));
//!
//! let fade = FadeTransition::new(
//!     &scheduler,
//!     &button,
//!     Duration::from_millis(200),
//!     30,
//! ).unwrap();
//!
//! fade.start_with(|how| log::debug!("fade ended: {how:?}")).unwrap();
//! assert_eq!(button.decorator_count(), 1);
//!
//! // The host loop pumps the scheduler; here the test clock stands in.
//! clock.advance(Duration::from_millis(200));
//! scheduler.pump();
//!
//! assert_eq!(fade.percent_complete(), 1.0);
//! assert_eq!(button.decorator_count(), 0); // stack restored
//! ```
//!
//! Transitions are restartable: once idle (completed or stopped), `start`
//! runs the timeline again from zero. Starting a running transition is an
//! error, and `stop` on an idle one is a no-op.

pub mod decorator;
pub mod easing;
pub mod error;
pub mod fade;
pub mod fade_window;
pub mod prelude;
pub mod slide;
pub mod theme;
pub mod transition;

pub use decorator::*;
pub use easing::*;
pub use error::*;
pub use fade::*;
pub use fade_window::*;
pub use prelude::*;
pub use slide::*;
pub use theme::*;
pub use transition::*;
