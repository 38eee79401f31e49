//! Closed option sets for the select-style booking fields.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::choice::Choice;

/// Category of room being booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    Single,
    Double,
    Suite,
    Deluxe,
    Family,
}

static ALL_ROOM_TYPES: &[RoomType] = &[
    RoomType::Single,
    RoomType::Double,
    RoomType::Suite,
    RoomType::Deluxe,
    RoomType::Family,
];

impl Choice for RoomType {
    fn all() -> &'static [Self] {
        ALL_ROOM_TYPES
    }

    fn label(self) -> &'static str {
        match self {
            RoomType::Single => "Single Room",
            RoomType::Double => "Double Room",
            RoomType::Suite => "Suite",
            RoomType::Deluxe => "Deluxe Room",
            RoomType::Family => "Family Room",
        }
    }
}

/// How the advance payment was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    Upi,
    NetBanking,
    Cash,
    PayPal,
}

static ALL_PAYMENT_METHODS: &[PaymentMethod] = &[
    PaymentMethod::CreditCard,
    PaymentMethod::DebitCard,
    PaymentMethod::Upi,
    PaymentMethod::NetBanking,
    PaymentMethod::Cash,
    PaymentMethod::PayPal,
];

impl Choice for PaymentMethod {
    fn all() -> &'static [Self] {
        ALL_PAYMENT_METHODS
    }

    fn label(self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::DebitCard => "Debit Card",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::NetBanking => "Net Banking",
            PaymentMethod::Cash => "Cash",
            PaymentMethod::PayPal => "PayPal",
        }
    }
}

/// Channel the booking came in through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingVia {
    Direct,
    Phone,
    BookingCom,
    Agoda,
}

static ALL_BOOKING_VIA: &[BookingVia] = &[
    BookingVia::Direct,
    BookingVia::Phone,
    BookingVia::BookingCom,
    BookingVia::Agoda,
];

impl Choice for BookingVia {
    fn all() -> &'static [Self] {
        ALL_BOOKING_VIA
    }

    fn label(self) -> &'static str {
        match self {
            BookingVia::Direct => "Direct",
            BookingVia::Phone => "Phone",
            BookingVia::BookingCom => "Booking.com",
            BookingVia::Agoda => "Agoda",
        }
    }
}

#[mutants::skip]
impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[mutants::skip]
impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[mutants::skip]
impl fmt::Display for BookingVia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
