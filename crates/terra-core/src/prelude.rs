pub use crate::clock::{Clock, SystemClock, TestClock};
pub use crate::component::{Component, ComponentEvent, Painter};
pub use crate::decorator::{Decorator, SharedDecorator, same_decorator};
pub use crate::error::CoreError;
pub use crate::events::{SubId, Subscribers};
pub use crate::geometry::{Rect, Size, Transform, Vec2};
pub use crate::scene::{Scene, SceneNode};
pub use crate::scheduler::{Scheduler, TimerHandle};
