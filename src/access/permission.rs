//! Permission catalog and permission-set management
//!
//! Permissions are capability tags drawn from a fixed catalog. A
//! [`PermissionSet`] is an insertion-ordered collection with set semantics:
//! adding is idempotent and equality ignores ordering.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Capability tags granted to staff roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// View the operational dashboard
    ViewDashboard,
    /// Create, modify, and cancel reservations
    ManageReservations,
    /// Check guests in
    CheckIn,
    /// Check guests out
    CheckOut,
    /// Post charges and settle folios
    ManageBilling,
    /// Update room cleaning status and assignments
    ManageHousekeeping,
    /// Operate point-of-sale outlets
    ManagePos,
    /// Edit room types, rate plans, and tax configuration
    ManageRates,
    /// Create staff accounts and edit the permission matrix
    ManageUsers,
    /// View occupancy and revenue reports
    ViewReports,
    /// Run the nightly audit
    RunNightAudit,
    /// Edit property-level settings
    ManageSettings,
}

impl Permission {
    /// Every permission in the catalog
    pub const ALL: [Permission; 12] = [
        Permission::ViewDashboard,
        Permission::ManageReservations,
        Permission::CheckIn,
        Permission::CheckOut,
        Permission::ManageBilling,
        Permission::ManageHousekeeping,
        Permission::ManagePos,
        Permission::ManageRates,
        Permission::ManageUsers,
        Permission::ViewReports,
        Permission::RunNightAudit,
        Permission::ManageSettings,
    ];

    /// Stable string tag used in persisted records
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ViewDashboard => "view_dashboard",
            Permission::ManageReservations => "manage_reservations",
            Permission::CheckIn => "check_in",
            Permission::CheckOut => "check_out",
            Permission::ManageBilling => "manage_billing",
            Permission::ManageHousekeeping => "manage_housekeeping",
            Permission::ManagePos => "manage_pos",
            Permission::ManageRates => "manage_rates",
            Permission::ManageUsers => "manage_users",
            Permission::ViewReports => "view_reports",
            Permission::RunNightAudit => "run_night_audit",
            Permission::ManageSettings => "manage_settings",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Permission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .iter()
            .find(|p| p.as_str() == s)
            .copied()
            .ok_or_else(|| format!("Unknown permission: {}", s))
    }
}

/// Set of permissions carried by a role definition or a staff user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionSet {
    /// Permissions granted, in insertion order, without duplicates
    pub permissions: Vec<Permission>,
}

impl PermissionSet {
    /// Create an empty permission set
    pub fn new() -> Self {
        Self { permissions: Vec::new() }
    }

    /// Create a permission set with the given permissions, deduplicated
    pub fn with_permissions(permissions: impl IntoIterator<Item = Permission>) -> Self {
        let mut set = Self::new();
        for permission in permissions {
            set.grant(permission);
        }
        set
    }

    /// Grant a permission; granting an already-held permission is a no-op
    pub fn grant(&mut self, permission: Permission) {
        if !self.permissions.contains(&permission) {
            self.permissions.push(permission);
        }
    }

    /// Revoke a permission if held
    pub fn revoke(&mut self, permission: Permission) {
        self.permissions.retain(|p| *p != permission);
    }

    /// Flip membership: grant if absent, revoke if present
    pub fn toggle(&mut self, permission: Permission) {
        if self.permissions.contains(&permission) {
            self.revoke(permission);
        } else {
            self.permissions.push(permission);
        }
    }

    /// Check whether a permission is held
    pub fn contains(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }

    /// Order-insensitive set equality
    pub fn same_as(&self, other: &PermissionSet) -> bool {
        self.permissions.len() == other.permissions.len()
            && self.permissions.iter().all(|p| other.permissions.contains(p))
    }

    /// Iterate over held permissions in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Permission> {
        self.permissions.iter()
    }

    /// Check if no permissions are held
    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }

    /// Number of permissions held
    pub fn len(&self) -> usize {
        self.permissions.len()
    }
}

impl Default for PermissionSet {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for PermissionSet {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<T: IntoIterator<Item = Permission>>(iter: T) -> Self {
        Self::with_permissions(iter)
    }
}
