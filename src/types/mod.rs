//! Core types, identifiers, and configuration

pub mod config;
pub mod enums;
pub mod identifiers;

pub use config::{CliArgs, ConfigFile, PropertyConfig};
pub use enums::{LoginStatus, OutputFormat, Role, Shift};
pub use identifiers::{RatePlanId, RoomTypeId, ShiftLogId, UserId};
