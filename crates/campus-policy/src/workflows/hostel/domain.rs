use std::fmt;

use serde::{Deserialize, Serialize};

/// Room category requested for a hostel booking. Unrecognised tags map to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", from = "String")]
pub enum RoomType {
    Single,
    Double,
    Triple,
    Deluxe,
    Unknown,
}

impl RoomType {
    pub const fn label(self) -> &'static str {
        match self {
            RoomType::Single => "SINGLE",
            RoomType::Double => "DOUBLE",
            RoomType::Triple => "TRIPLE",
            RoomType::Deluxe => "DELUXE",
            RoomType::Unknown => "UNKNOWN",
        }
    }

    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "SINGLE" => RoomType::Single,
            "DOUBLE" => RoomType::Double,
            "TRIPLE" => RoomType::Triple,
            "DELUXE" => RoomType::Deluxe,
            _ => RoomType::Unknown,
        }
    }
}

impl From<String> for RoomType {
    fn from(raw: String) -> Self {
        RoomType::parse(&raw)
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Optional monthly service attached to a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", from = "String")]
pub enum AddOn {
    Mess,
    Laundry,
    Gym,
    Unknown,
}

impl AddOn {
    pub const fn label(self) -> &'static str {
        match self {
            AddOn::Mess => "MESS",
            AddOn::Laundry => "LAUNDRY",
            AddOn::Gym => "GYM",
            AddOn::Unknown => "UNKNOWN",
        }
    }

    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "MESS" => AddOn::Mess,
            "LAUNDRY" => AddOn::Laundry,
            "GYM" => AddOn::Gym,
            _ => AddOn::Unknown,
        }
    }
}

impl From<String> for AddOn {
    fn from(raw: String) -> Self {
        AddOn::parse(&raw)
    }
}

impl fmt::Display for AddOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Room selection plus any add-ons, in the order the resident listed them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub room_type: RoomType,
    #[serde(default)]
    pub add_ons: Vec<AddOn>,
}

/// Identifier wrapper for confirmed bookings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingId(pub String);
