//! # Components, Decorators, and the Scheduler
//!
//! terra-core is the host-model layer the Terra effect crates build on. It
//! deliberately owns no widgets and no renderer; it models just what a timed
//! visual effect needs from a toolkit:
//!
//! - `Component` — cloneable handle with bounds, a parent link, an ordered
//!   decorator stack, and fire-and-forget repaint requests.
//! - `Decorator` — a paint transform wrapped around a component's painter,
//!   recorded into a flat `Scene` op list.
//! - `Scheduler` — cooperative recurring timers behind a pluggable `Clock`.
//!
//! ## Decorator stacks
//!
//! Decorators stack outermost-first and are attached and removed by exact
//! instance, preserving the order of everything else:
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use terra_core::*;
//!
//! struct Dim;
//! impl Decorator for Dim {
//!     fn begin(&self, scene: &mut Scene, _bounds: Rect) {
//!         scene.push(SceneNode::PushAlpha(0.5));
//!     }
//!     fn end(&self, scene: &mut Scene) {
//!         scene.push(SceneNode::PopAlpha);
//!     }
//! }
//!
//! let c = Component::new(Rect::new(0.0, 0.0, 100.0, 40.0));
//! let dim: SharedDecorator = Rc::new(RefCell::new(Dim));
//! c.add_decorator(dim.clone());
//! assert_eq!(c.decorator_count(), 1);
//! c.remove_decorator(&dim);
//! assert_eq!(c.decorator_count(), 0);
//! ```
//!
//! ## Scheduling
//!
//! The scheduler never spawns threads and never blocks. The host loop pumps
//! it; tests drive it through a `TestClock`:
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use terra_core::*;
//! use web_time::Duration;
//!
//! let clock = Rc::new(TestClock::new());
//! let scheduler = Scheduler::new(clock.clone());
//!
//! let fired = Rc::new(Cell::new(0));
//! let handle = scheduler
//!     .schedule_repeating(Duration::from_millis(10), {
//!         let fired = fired.clone();
//!         move || fired.set(fired.get() + 1)
//!     })
//!     .unwrap();
//!
//! clock.advance(Duration::from_millis(10));
//! scheduler.pump();
//! assert_eq!(fired.get(), 1);
//!
//! handle.cancel(); // synchronous: no fire after this returns
//! clock.advance(Duration::from_millis(50));
//! scheduler.pump();
//! assert_eq!(fired.get(), 1);
//! ```

pub mod clock;
pub mod color;
pub mod component;
pub mod decorator;
pub mod error;
pub mod events;
pub mod geometry;
pub mod prelude;
pub mod scene;
pub mod scheduler;
pub mod tests;

pub use clock::*;
pub use color::*;
pub use component::*;
pub use decorator::*;
pub use error::*;
pub use events::*;
pub use geometry::*;
pub use prelude::*;
pub use scene::*;
pub use scheduler::*;
