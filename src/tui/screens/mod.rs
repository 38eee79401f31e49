//! TUI screen implementations.

pub mod booking_form;
pub mod help;

pub use booking_form::{BookingFormState, draw_booking_form};
pub use help::{HelpState, draw_help};
