//! Hotel PMS Core
//!
//! The deterministic core of a hotel property-management system: reservation
//! pricing and staff access control, implemented as pure computation over
//! in-memory records with no I/O of its own.
//!
//! # Overview
//!
//! Two cooperating components:
//!
//! - **Pricing engine** ([`pricing`]): given a room type, a rate plan, and a
//!   date range, computes nights, the discounted nightly rate, and a stack
//!   of tax charges (service charge, combined CGST+SGST, luxury tax) into a
//!   final total and average nightly rate.
//! - **Access control model** ([`access`]): a fixed role catalog, a staff
//!   directory carrying denormalized permission snapshots kept consistent by
//!   cascade-on-write, and a bounded shift-login log.
//!
//! The two compose only at the caller: the pricing engine has no dependency
//! on access control.
//!
//! ## Quick start
//!
//! ```rust
//! use hotel_pms_core::access::{AccessDirectory, Permission};
//! use hotel_pms_core::pricing::{compute_breakdown, RatePlan, RoomType, TaxConfig};
//! use hotel_pms_core::types::Role;
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//!
//! // Price a two-night stay
//! let room = RoomType::new("Deluxe King", "DLX", dec!(2000), 2);
//! let plan = RatePlan::new("Corporate", dec!(10));
//! let check_in = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let check_out = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
//! let breakdown = compute_breakdown(&room, &plan, check_in, check_out, &TaxConfig::default());
//! assert_eq!(breakdown.nights, 2);
//!
//! // Manage the staff permission matrix
//! let mut directory = AccessDirectory::new();
//! let user = directory.create_user(
//!     "Asha", "asha@example.com", "asha", Role::FrontDesk, "HTL001", None,
//! );
//! assert!(user.permissions.contains(Permission::CheckIn));
//! ```
//!
//! ## Module organization
//!
//! - [`types`]: identifiers, enums, and property configuration
//! - [`pricing`]: room types, rate plans, taxes, and breakdown computation
//! - [`access`]: roles, users, the permission cascade, and the shift log
//! - [`error`]: boundary error types
//! - [`logging`]: tracing subscriber setup for the CLI

#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

pub mod access;
pub mod error;
pub mod logging;
pub mod pricing;
pub mod types;

pub use access::{
    AccessDirectory, Permission, PermissionSet, RoleDefinition, ShiftLogEntry, StaffUser,
    SHIFT_LOG_CAPACITY,
};
pub use error::{PmsError, PmsResult};
pub use logging::LoggingConfig;
pub use pricing::{
    compute_breakdown, night_count, validate_stay_dates, PricingCatalog, PricingResult, RatePlan,
    RoomType, TaxConfig,
};
pub use types::{
    CliArgs, LoginStatus, PropertyConfig, RatePlanId, Role, RoomTypeId, Shift, ShiftLogId, UserId,
};
