#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Front-desk advance payment intake form.
//!
//! Guest and payment details are entered into a [`model::BookingDraft`] in
//! the terminal UI and handed to one [`submit::Strategy`]: a PDF receipt
//! written locally, or a JSON POST to the booking API.

pub mod config;
pub mod logging;
pub mod model;
pub mod receipt;
pub mod submit;
pub mod tui;
