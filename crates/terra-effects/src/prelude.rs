pub use crate::decorator::{
    DropShadowDecorator, FadeDecorator, ScaleDecorator, TranslationDecorator, share,
};
pub use crate::easing::Easing;
pub use crate::error::MotionError;
pub use crate::fade::FadeTransition;
pub use crate::fade_window::FadeWindowTransition;
pub use crate::slide::SlideTransition;
pub use crate::theme::MotionTheme;
pub use crate::transition::{End, Transition};
