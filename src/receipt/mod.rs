//! Printable PDF receipts for confirmed bookings.
//!
//! [`Receipt`] is the pure layout (letterhead, title, two-column table);
//! [`ReceiptExporter`] renders it with [`genpdf`] to a fixed filename.

mod error;
mod layout;
mod pdf;

pub use error::ReceiptError;
pub use layout::{
    CURRENCY_PREFIX, LETTERHEAD, Letterhead, RECEIPT_FILENAME, RECEIPT_TITLE, Receipt,
    TABLE_HEADER,
};
pub use pdf::{ReceiptExporter, render_pdf};
