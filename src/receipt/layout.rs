use crate::model::BookingDraft;

/// Fixed filename the receipt is saved under.
pub const RECEIPT_FILENAME: &str = "booking-confirmation.pdf";

/// Currency literal prefixed to the amount paid.
pub const CURRENCY_PREFIX: &str = "Rs. ";

/// Title line printed under the letterhead.
pub const RECEIPT_TITLE: &str = "Payment receipt for Advance Booking";

/// Column headings of the receipt table.
pub const TABLE_HEADER: [&str; 2] = ["Field", "Value"];

/// Business details printed at the top of every receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Letterhead {
    pub name: &'static str,
    pub address: &'static [&'static str],
    pub phone: &'static str,
}

/// The hotel's letterhead. Not derived from the draft.
pub const LETTERHEAD: Letterhead = Letterhead {
    name: "Sampath Residency",
    address: &[
        "201 Pattali Street, Idumban Kovil Itteri Rd,",
        "Opp. Eswarapatta Kovil, South Anna Nagar,",
        "Palani, Tamil Nadu 624601",
    ],
    phone: "Phone: +91 98945 74934",
};

/// A print-ready receipt: letterhead, title, and a two-column table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub letterhead: Letterhead,
    pub title: &'static str,
    pub rows: Vec<[String; 2]>,
}

impl Receipt {
    /// Lays out `draft` as a receipt.
    ///
    /// Rows follow receipt order (which differs from form order) and the
    /// amount is prefixed with [`CURRENCY_PREFIX`]. Values are printed as
    /// entered; nothing is validated here.
    pub fn from_draft(draft: &BookingDraft) -> Self {
        let rows = [
            ("Customer Name", draft.customer_name.clone()),
            ("Phone Number", draft.phone_number.clone()),
            ("Country", draft.country.clone()),
            ("Booking Via", draft.booking_via.clone()),
            ("Room Type", draft.room_type.clone()),
            ("Check-in Date", draft.check_in_date.clone()),
            ("Check-out Date", draft.check_out_date.clone()),
            (
                "Amount Paid",
                format!("{CURRENCY_PREFIX}{}", draft.amount_paid),
            ),
            ("Payment Method", draft.payment_method.clone()),
            ("Transaction ID", draft.transaction_id.clone()),
        ]
        .into_iter()
        .map(|(label, value)| [label.to_string(), value])
        .collect();

        Self {
            letterhead: LETTERHEAD,
            title: RECEIPT_TITLE,
            rows,
        }
    }
}
