mod choice;
mod country;
mod draft;
mod options;
mod validation;

pub use choice::{Choice, cycle};
pub use country::Country;
pub use draft::{BookingDraft, Field, FieldKind};
pub use options::{BookingVia, PaymentMethod, RoomType};
pub use validation::{ValidationError, validate_amount, validate_date, validate_draft};
