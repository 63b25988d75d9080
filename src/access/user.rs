//! Staff user records
//!
//! A user carries a denormalized snapshot of its role's permission set,
//! taken at the time of the last sync. Snapshots are only written through
//! [`AccessDirectory`] operations so the cascade invariant cannot be
//! bypassed.
//!
//! [`AccessDirectory`]: crate::access::AccessDirectory

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::access::{Permission, PermissionSet};
use crate::types::{Role, Shift, UserId};

/// A staff member in the property directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffUser {
    /// Unique identifier
    pub id: UserId,
    /// Login email address
    pub email: String,
    /// Short login name
    pub username: String,
    /// Display name shown in the directory
    pub name: String,
    /// Assigned role
    pub role: Role,
    /// Denormalized snapshot of the role's permissions at last sync
    pub permissions: PermissionSet,
    /// Code of the property the user works at
    pub hotel_code: String,
    /// Shift the user is currently working, if any
    pub current_shift: Option<Shift>,
    /// Timestamp of the most recent login
    pub last_login: Option<DateTime<Utc>>,
}

impl StaffUser {
    /// Create a user with the given role and permission snapshot
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        username: impl Into<String>,
        role: Role,
        permissions: PermissionSet,
        hotel_code: impl Into<String>,
    ) -> Self {
        Self {
            id: UserId::new(),
            email: email.into(),
            username: username.into(),
            name: name.into(),
            role,
            permissions,
            hotel_code: hotel_code.into(),
            current_shift: None,
            last_login: None,
        }
    }

    /// Check whether the user currently holds a permission
    pub fn can(&self, permission: Permission) -> bool {
        self.permissions.contains(permission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let permissions =
            PermissionSet::with_permissions([Permission::CheckIn, Permission::CheckOut]);
        let user = StaffUser::new(
            "Priya Sharma",
            "priya@example.com",
            "priya",
            Role::FrontDesk,
            permissions,
            "HTL001",
        );

        assert_eq!(user.role, Role::FrontDesk);
        assert_eq!(user.hotel_code, "HTL001");
        assert!(user.current_shift.is_none());
        assert!(user.last_login.is_none());
        assert!(user.can(Permission::CheckIn));
        assert!(!user.can(Permission::ManageUsers));
    }

    #[test]
    fn test_user_serialization() {
        let user = StaffUser::new(
            "Arun Verma",
            "arun@example.com",
            "arun",
            Role::Housekeeping,
            PermissionSet::with_permissions([Permission::ManageHousekeeping]),
            "HTL001",
        );
        let json = serde_json::to_string(&user).unwrap();
        let back: StaffUser = serde_json::from_str(&json).unwrap();
        assert_eq!(user, back);
    }
}
