// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Room catalog types.

use crate::error::DomainError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

/// A room's number, the sole key of the room catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomNumber(u32);

impl RoomNumber {
    /// Creates a room number.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Room category, each with a fixed base nightly price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    Single,
    Double,
    Deluxe,
    Suite,
    Presidential,
}

impl RoomType {
    /// Converts this room type to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::Double => "Double",
            Self::Deluxe => "Deluxe",
            Self::Suite => "Suite",
            Self::Presidential => "Presidential",
        }
    }

    /// Returns the nightly base price for this room type.
    #[must_use]
    pub fn base_price(&self) -> Decimal {
        let amount: i64 = match self {
            Self::Single => 1500,
            Self::Double => 2500,
            Self::Deluxe => 4000,
            Self::Suite => 7000,
            Self::Presidential => 12000,
        };
        Decimal::from(amount)
    }
}

impl FromStr for RoomType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Single" => Ok(Self::Single),
            "Double" => Ok(Self::Double),
            "Deluxe" => Ok(Self::Deluxe),
            "Suite" => Ok(Self::Suite),
            "Presidential" => Ok(Self::Presidential),
            _ => Err(DomainError::InvalidRoomType(s.to_string())),
        }
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Housekeeping status of a room.
///
/// This is independent of bookings: a room may be `Available` here and
/// still be booked for a future stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RoomStatus {
    #[default]
    Available,
    Occupied,
    Maintenance,
    Cleaning,
    OutOfOrder,
}

impl RoomStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Occupied => "Occupied",
            Self::Maintenance => "Maintenance",
            Self::Cleaning => "Cleaning",
            Self::OutOfOrder => "OutOfOrder",
        }
    }
}

impl FromStr for RoomStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Available" => Ok(Self::Available),
            "Occupied" => Ok(Self::Occupied),
            "Maintenance" => Ok(Self::Maintenance),
            "Cleaning" => Ok(Self::Cleaning),
            "OutOfOrder" => Ok(Self::OutOfOrder),
            _ => Err(DomainError::InvalidRoomStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// In-room amenity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Amenity {
    #[serde(rename = "AC")]
    Ac,
    WiFi,
    #[serde(rename = "TV")]
    Tv,
}

impl Amenity {
    /// Converts this amenity to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ac => "AC",
            Self::WiFi => "WiFi",
            Self::Tv => "TV",
        }
    }

    /// Parses a comma separated amenity list such as `"AC, WiFi"`.
    ///
    /// Blank input yields the empty set; repeated entries collapse.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAmenity` for any unknown entry.
    pub fn parse_list(list: &str) -> Result<BTreeSet<Self>, DomainError> {
        list.split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(Self::from_str)
            .collect()
    }

    /// Joins a set of amenities into the comma separated form.
    #[must_use]
    pub fn join(amenities: &BTreeSet<Self>) -> String {
        amenities
            .iter()
            .map(Self::as_str)
            .collect::<Vec<&str>>()
            .join(",")
    }
}

impl FromStr for Amenity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AC" => Ok(Self::Ac),
            "WiFi" | "WIFI" => Ok(Self::WiFi),
            "TV" => Ok(Self::Tv),
            _ => Err(DomainError::InvalidAmenity(s.to_string())),
        }
    }
}

impl std::fmt::Display for Amenity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A room in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// The room number. Immutable once registered.
    pub room_number: RoomNumber,
    pub room_type: RoomType,
    pub status: RoomStatus,
    pub floor: i32,
    pub amenities: BTreeSet<Amenity>,
    /// Nightly price. Starts at the type's base price.
    pub price: Decimal,
}

impl Room {
    /// Creates an available room priced at its type's base price, with no amenities.
    #[must_use]
    pub fn new(room_number: RoomNumber, room_type: RoomType, floor: i32) -> Self {
        Self {
            room_number,
            room_type,
            status: RoomStatus::Available,
            floor,
            amenities: BTreeSet::new(),
            price: room_type.base_price(),
        }
    }

    /// Replaces the nightly price.
    #[must_use]
    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = price;
        self
    }

    /// Replaces the housekeeping status.
    #[must_use]
    pub fn with_status(mut self, status: RoomStatus) -> Self {
        self.status = status;
        self
    }

    /// Replaces the amenity set.
    #[must_use]
    pub fn with_amenities<I: IntoIterator<Item = Amenity>>(mut self, amenities: I) -> Self {
        self.amenities = amenities.into_iter().collect();
        self
    }
}

impl std::fmt::Display for Room {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Room {} ({})", self.room_number, self.room_type)
    }
}
