//! Reusable TUI widgets.

pub mod form;
pub mod notice;
pub mod status_bar;

pub use form::{Form, FormField, draw_form};
pub use notice::{NoticeKind, draw_notice};
pub use status_bar::{StatusBarContext, draw_status_bar};
