//! Unique identifier types for the PMS core
//!
//! This module contains UUID-based identifier types for staff users, room
//! types, rate plans, and shift-log entries used throughout the system.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a staff user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Create a new random user ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "USR_{}", self.0.simple())
    }
}

impl Serialize for UserId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("USR_{}", self.0.simple()))
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_prefixed(&s, "USR_").map(UserId).map_err(serde::de::Error::custom)
    }
}

/// Unique identifier for a room type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomTypeId(pub Uuid);

impl RoomTypeId {
    /// Create a new random room-type ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RoomTypeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RoomTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RTY_{}", self.0.simple())
    }
}

impl Serialize for RoomTypeId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("RTY_{}", self.0.simple()))
    }
}

impl<'de> Deserialize<'de> for RoomTypeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_prefixed(&s, "RTY_").map(RoomTypeId).map_err(serde::de::Error::custom)
    }
}

/// Unique identifier for a rate plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RatePlanId(pub Uuid);

impl RatePlanId {
    /// Create a new random rate-plan ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RatePlanId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RatePlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RPL_{}", self.0.simple())
    }
}

impl Serialize for RatePlanId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("RPL_{}", self.0.simple()))
    }
}

impl<'de> Deserialize<'de> for RatePlanId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_prefixed(&s, "RPL_").map(RatePlanId).map_err(serde::de::Error::custom)
    }
}

/// Unique identifier for a shift-log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShiftLogId(pub Uuid);

impl ShiftLogId {
    /// Create a new random shift-log ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ShiftLogId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ShiftLogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SLG_{}", self.0.simple())
    }
}

impl Serialize for ShiftLogId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("SLG_{}", self.0.simple()))
    }
}

impl<'de> Deserialize<'de> for ShiftLogId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_prefixed(&s, "SLG_").map(ShiftLogId).map_err(serde::de::Error::custom)
    }
}

/// Parse a prefixed identifier, falling back to a raw UUID for records
/// written before prefixes were introduced.
fn parse_prefixed(s: &str, prefix: &str) -> Result<Uuid, uuid::Error> {
    match s.strip_prefix(prefix) {
        Some(rest) => Uuid::parse_str(rest),
        None => Uuid::parse_str(s),
    }
}
