use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::choice::Choice;
use super::country::Country;
use super::validation::ValidationError;

/// How a field is edited on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text.
    Text,
    /// One of a closed set of options.
    Select,
    /// A calendar date, `YYYY-MM-DD`.
    Date,
    /// A numeric amount.
    Amount,
}

/// One of the ten fields of a [`BookingDraft`], in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    CustomerName,
    Country,
    PhoneNumber,
    BookingVia,
    RoomType,
    CheckInDate,
    CheckOutDate,
    AmountPaid,
    PaymentMethod,
    TransactionId,
}

static ALL_FIELDS: &[Field] = &[
    Field::CustomerName,
    Field::Country,
    Field::PhoneNumber,
    Field::BookingVia,
    Field::RoomType,
    Field::CheckInDate,
    Field::CheckOutDate,
    Field::AmountPaid,
    Field::PaymentMethod,
    Field::TransactionId,
];

impl Field {
    /// Returns all fields in form order.
    pub fn all() -> &'static [Field] {
        ALL_FIELDS
    }

    /// Returns the name used for this field in the JSON payload.
    pub fn json_name(&self) -> &'static str {
        match self {
            Field::CustomerName => "customerName",
            Field::Country => "country",
            Field::PhoneNumber => "phoneNumber",
            Field::BookingVia => "bookingVia",
            Field::RoomType => "roomType",
            Field::CheckInDate => "checkInDate",
            Field::CheckOutDate => "checkOutDate",
            Field::AmountPaid => "amountPaid",
            Field::PaymentMethod => "paymentMethod",
            Field::TransactionId => "transactionId",
        }
    }

    /// Returns the label shown next to the input on the form.
    pub fn label(&self) -> &'static str {
        match self {
            Field::CustomerName => "Customer Name",
            Field::Country => "Country",
            Field::PhoneNumber => "WhatsApp Number",
            Field::BookingVia => "Booking Via",
            Field::RoomType => "Room Type",
            Field::CheckInDate => "Check-in Date",
            Field::CheckOutDate => "Check-out Date",
            Field::AmountPaid => "Amount Paid",
            Field::PaymentMethod => "Payment Method",
            Field::TransactionId => "Transaction ID",
        }
    }

    /// Returns how this field is edited.
    pub fn kind(&self) -> FieldKind {
        match self {
            Field::Country | Field::BookingVia | Field::RoomType | Field::PaymentMethod => {
                FieldKind::Select
            }
            Field::CheckInDate | Field::CheckOutDate => FieldKind::Date,
            Field::AmountPaid => FieldKind::Amount,
            Field::CustomerName | Field::PhoneNumber | Field::TransactionId => FieldKind::Text,
        }
    }
}

impl FromStr for Field {
    type Err = ValidationError;

    /// Parses a JSON field name such as `customerName`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_FIELDS
            .iter()
            .copied()
            .find(|f| f.json_name() == s)
            .ok_or_else(|| ValidationError::UnknownField(s.to_string()))
    }
}

#[mutants::skip]
impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.json_name())
    }
}

/// The in-progress booking held by the form.
///
/// Every field is stored as the text the operator entered or selected;
/// select fields hold an option label, or `""` until one is chosen. The
/// serialized form is the JSON payload sent to the booking endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    pub customer_name: String,
    pub phone_number: String,
    pub country: String,
    pub booking_via: String,
    pub room_type: String,
    pub check_in_date: String,
    pub check_out_date: String,
    pub amount_paid: String,
    pub payment_method: String,
    pub transaction_id: String,
}

impl Default for BookingDraft {
    /// An empty draft for India with its dialing code pre-filled.
    fn default() -> Self {
        let country = Country::default();
        Self {
            customer_name: String::new(),
            phone_number: country.dialing_code().to_string(),
            country: country.name().to_string(),
            booking_via: String::new(),
            room_type: String::new(),
            check_in_date: String::new(),
            check_out_date: String::new(),
            amount_paid: String::new(),
            payment_method: String::new(),
            transaction_id: String::new(),
        }
    }
}

impl BookingDraft {
    /// Returns the current value of `field`.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::CustomerName => &self.customer_name,
            Field::Country => &self.country,
            Field::PhoneNumber => &self.phone_number,
            Field::BookingVia => &self.booking_via,
            Field::RoomType => &self.room_type,
            Field::CheckInDate => &self.check_in_date,
            Field::CheckOutDate => &self.check_out_date,
            Field::AmountPaid => &self.amount_paid,
            Field::PaymentMethod => &self.payment_method,
            Field::TransactionId => &self.transaction_id,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::CustomerName => &mut self.customer_name,
            Field::Country => &mut self.country,
            Field::PhoneNumber => &mut self.phone_number,
            Field::BookingVia => &mut self.booking_via,
            Field::RoomType => &mut self.room_type,
            Field::CheckInDate => &mut self.check_in_date,
            Field::CheckOutDate => &mut self.check_out_date,
            Field::AmountPaid => &mut self.amount_paid,
            Field::PaymentMethod => &mut self.payment_method,
            Field::TransactionId => &mut self.transaction_id,
        }
    }

    /// Replaces the value of `field`, leaving every other field untouched.
    ///
    /// This does not cascade: setting [`Field::Country`] here leaves the phone
    /// number alone. Use [`set_country`](Self::set_country) for that.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        *self.slot(field) = value.into();
    }

    /// Appends a character to `field`.
    pub fn push_char(&mut self, field: Field, ch: char) {
        self.slot(field).push(ch);
    }

    /// Removes the last character of `field`, if any.
    pub fn pop_char(&mut self, field: Field) {
        self.slot(field).pop();
    }

    /// Selects a country and overwrites the phone number with its dialing code.
    ///
    /// Any digits already typed into the phone number are discarded. An
    /// unknown country name clears the phone number.
    pub fn set_country(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.phone_number = Country::from_label(&name)
            .map(|c| c.dialing_code().to_string())
            .unwrap_or_default();
        self.country = name;
    }

    /// Restores the defaults of a freshly opened form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns the fields that are still empty, in form order.
    ///
    /// Every field is required.
    pub fn missing_required(&self) -> Vec<Field> {
        ALL_FIELDS
            .iter()
            .copied()
            .filter(|f| self.get(*f).is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::{Arbitrary, Gen};
    use quickcheck_macros::quickcheck;

    use super::*;

    impl Arbitrary for Field {
        fn arbitrary(g: &mut Gen) -> Self {
            *g.choose(ALL_FIELDS).expect("non-empty field list")
        }
    }

    impl Arbitrary for Country {
        fn arbitrary(g: &mut Gen) -> Self {
            *g.choose(Country::all()).expect("non-empty country list")
        }
    }

    mod defaults {
        use super::*;

        #[test]
        fn india_with_dialing_code() {
            let draft = BookingDraft::default();
            assert_eq!(draft.country, "India");
            assert_eq!(draft.phone_number, "+91");
        }

        #[test]
        fn everything_else_empty() {
            let draft = BookingDraft::default();
            for field in Field::all() {
                if matches!(field, Field::Country | Field::PhoneNumber) {
                    continue;
                }
                assert_eq!(draft.get(*field), "", "{field:?} should start empty");
            }
        }
    }

    mod set_field {
        use super::*;

        #[test]
        fn replaces_value() {
            let mut draft = BookingDraft::default();
            draft.set_field(Field::CustomerName, "Jane Doe");
            assert_eq!(draft.customer_name, "Jane Doe");
            draft.set_field(Field::CustomerName, "John");
            assert_eq!(draft.customer_name, "John");
        }

        #[test]
        fn country_does_not_cascade() {
            let mut draft = BookingDraft::default();
            draft.set_field(Field::Country, "Japan");
            assert_eq!(draft.country, "Japan");
            assert_eq!(draft.phone_number, "+91");
        }

        #[quickcheck]
        fn only_target_field_changes(field: Field, value: String) -> bool {
            let before = BookingDraft::default();
            let mut after = before.clone();
            after.set_field(field, value.clone());
            Field::all().iter().all(|f| {
                if *f == field {
                    after.get(*f) == value
                } else {
                    after.get(*f) == before.get(*f)
                }
            })
        }
    }

    mod set_country {
        use super::*;

        #[test]
        fn japan_sets_plus_81() {
            let mut draft = BookingDraft::default();
            draft.set_country("Japan");
            assert_eq!(draft.country, "Japan");
            assert_eq!(draft.phone_number, "+81");
        }

        #[test]
        fn overwrites_typed_number() {
            let mut draft = BookingDraft::default();
            draft.set_field(Field::PhoneNumber, "+91 98945 74934");
            draft.set_country("Germany");
            assert_eq!(draft.phone_number, "+49");
        }

        #[test]
        fn unknown_country_clears_phone() {
            let mut draft = BookingDraft::default();
            draft.set_country("Atlantis");
            assert_eq!(draft.country, "Atlantis");
            assert_eq!(draft.phone_number, "");
        }

        #[quickcheck]
        fn every_country_sets_its_code(country: Country) -> bool {
            let mut draft = BookingDraft::default();
            draft.set_country(country.name());
            draft.phone_number == country.dialing_code() && draft.country == country.name()
        }

        #[quickcheck]
        fn touches_only_country_and_phone(country: Country, name: String) -> bool {
            let mut before = BookingDraft::default();
            before.set_field(Field::CustomerName, name);
            let mut after = before.clone();
            after.set_country(country.name());
            Field::all()
                .iter()
                .filter(|f| !matches!(f, Field::Country | Field::PhoneNumber))
                .all(|f| after.get(*f) == before.get(*f))
        }
    }

    mod editing {
        use super::*;

        #[test]
        fn push_and_pop_char() {
            let mut draft = BookingDraft::default();
            draft.push_char(Field::PhoneNumber, '9');
            draft.push_char(Field::PhoneNumber, '8');
            assert_eq!(draft.phone_number, "+9198");
            draft.pop_char(Field::PhoneNumber);
            assert_eq!(draft.phone_number, "+919");
        }

        #[test]
        fn pop_char_on_empty_is_noop() {
            let mut draft = BookingDraft::default();
            draft.pop_char(Field::TransactionId);
            assert_eq!(draft.transaction_id, "");
        }

        #[test]
        fn reset_restores_defaults() {
            let mut draft = BookingDraft::default();
            draft.set_field(Field::CustomerName, "Jane Doe");
            draft.set_country("Brazil");
            draft.reset();
            assert_eq!(draft, BookingDraft::default());
        }
    }

    mod missing_required {
        use super::*;

        #[test]
        fn default_draft_misses_all_but_country_and_phone() {
            let missing = BookingDraft::default().missing_required();
            assert_eq!(missing.len(), 8);
            assert!(!missing.contains(&Field::Country));
            assert!(!missing.contains(&Field::PhoneNumber));
            assert_eq!(missing.first(), Some(&Field::CustomerName));
        }

        #[test]
        fn cleared_phone_is_reported() {
            let mut draft = BookingDraft::default();
            draft.set_field(Field::PhoneNumber, "");
            assert!(draft.missing_required().contains(&Field::PhoneNumber));
        }
    }

    mod field {
        use super::*;

        #[test]
        fn parses_json_names() {
            for field in Field::all() {
                assert_eq!(field.json_name().parse::<Field>(), Ok(*field));
            }
        }

        #[test]
        fn unknown_name_is_rejected() {
            assert_eq!(
                "guestName".parse::<Field>(),
                Err(ValidationError::UnknownField("guestName".into()))
            );
        }

        #[test]
        fn kinds() {
            assert_eq!(Field::Country.kind(), FieldKind::Select);
            assert_eq!(Field::PaymentMethod.kind(), FieldKind::Select);
            assert_eq!(Field::CheckOutDate.kind(), FieldKind::Date);
            assert_eq!(Field::AmountPaid.kind(), FieldKind::Amount);
            assert_eq!(Field::TransactionId.kind(), FieldKind::Text);
        }
    }

    mod serialization {
        use super::*;

        #[test]
        fn uses_camel_case_names() {
            let mut draft = BookingDraft::default();
            draft.set_field(Field::CustomerName, "Jane Doe");
            let json = serde_json::to_value(&draft).unwrap();
            let object = json.as_object().unwrap();
            assert_eq!(object.len(), 10);
            for field in Field::all() {
                assert_eq!(
                    object[field.json_name()].as_str(),
                    Some(draft.get(*field)),
                    "{field:?} missing from payload"
                );
            }
        }
    }
}
