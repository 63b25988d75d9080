//! Room type records
//!
//! A room type is a property-configuration record: it carries the base
//! nightly rate the pricing engine discounts and taxes. Records are treated
//! as immutable for the duration of any one pricing calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::RoomTypeId;

/// A bookable category of room (e.g. "Deluxe King", "Standard Twin")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomType {
    /// Unique identifier for the room type
    pub id: RoomTypeId,
    /// Display name shown on rate screens
    pub name: String,
    /// Short code used on room boards and reports (e.g. "DLX")
    pub short_code: String,
    /// Base nightly rate in major currency units, before any discount
    pub base_rate: Decimal,
    /// Maximum number of guests
    pub capacity: u32,
    /// Nightly surcharge for an extra bed
    pub extra_bed_rate: Decimal,
    /// Amenity tags (unordered)
    pub amenities: Vec<String>,
    /// Whether the room type is currently sellable
    pub is_active: bool,
}

impl RoomType {
    /// Create a new active room type with no amenities and no extra-bed rate
    pub fn new(
        name: impl Into<String>,
        short_code: impl Into<String>,
        base_rate: Decimal,
        capacity: u32,
    ) -> Self {
        Self {
            id: RoomTypeId::new(),
            name: name.into(),
            short_code: short_code.into(),
            base_rate,
            capacity,
            extra_bed_rate: Decimal::ZERO,
            amenities: Vec::new(),
            is_active: true,
        }
    }

    /// Set the extra-bed surcharge
    pub fn with_extra_bed_rate(mut self, rate: Decimal) -> Self {
        self.extra_bed_rate = rate;
        self
    }

    /// Add amenity tags
    pub fn with_amenities(mut self, amenities: Vec<String>) -> Self {
        self.amenities = amenities;
        self
    }

    /// Check whether the room type carries a given amenity tag
    pub fn has_amenity(&self, tag: &str) -> bool {
        self.amenities.iter().any(|a| a == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_room_type_creation() {
        let room = RoomType::new("Deluxe King", "DLX", dec!(2000), 2);

        assert_eq!(room.name, "Deluxe King");
        assert_eq!(room.short_code, "DLX");
        assert_eq!(room.base_rate, dec!(2000));
        assert_eq!(room.capacity, 2);
        assert_eq!(room.extra_bed_rate, Decimal::ZERO);
        assert!(room.is_active);
        assert!(room.amenities.is_empty());
    }

    #[test]
    fn test_room_type_builders() {
        let room = RoomType::new("Suite", "STE", dec!(5000), 4)
            .with_extra_bed_rate(dec!(750))
            .with_amenities(vec!["wifi".to_string(), "minibar".to_string()]);

        assert_eq!(room.extra_bed_rate, dec!(750));
        assert!(room.has_amenity("wifi"));
        assert!(room.has_amenity("minibar"));
        assert!(!room.has_amenity("pool"));
    }

    #[test]
    fn test_room_type_serialization() {
        let room = RoomType::new("Standard Twin", "STD", dec!(1500), 2);
        let json = serde_json::to_string(&room).unwrap();
        let back: RoomType = serde_json::from_str(&json).unwrap();
        assert_eq!(room, back);
    }
}
