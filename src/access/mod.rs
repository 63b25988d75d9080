//! Access control model
//!
//! A fixed role catalog, a user directory carrying denormalized permission
//! snapshots, and a bounded shift-login log, all owned by
//! [`AccessDirectory`].

pub mod directory;
pub mod permission;
pub mod role;
pub mod shift_log;
pub mod user;

pub use directory::AccessDirectory;
pub use permission::{Permission, PermissionSet};
pub use role::{default_catalog, RoleDefinition};
pub use shift_log::{ShiftLog, ShiftLogEntry, SHIFT_LOG_CAPACITY};
pub use user::StaffUser;
