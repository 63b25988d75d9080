//! Role definitions and the default catalog
//!
//! Role definitions are the single source of truth for what a permission
//! grant means. User records carry denormalized snapshots of these sets;
//! the [`AccessDirectory`] keeps the snapshots consistent.
//!
//! [`AccessDirectory`]: crate::access::AccessDirectory

use serde::{Deserialize, Serialize};

use crate::access::{Permission, PermissionSet};
use crate::types::Role;

/// Authoritative definition of one role in the closed catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleDefinition {
    /// The role this definition describes
    pub role: Role,
    /// Display name shown in the permission matrix
    pub display_name: String,
    /// Short description of the role's responsibilities
    pub description: String,
    /// Permissions currently granted to the role
    pub permissions: PermissionSet,
}

impl RoleDefinition {
    /// Create a role definition
    pub fn new(
        role: Role,
        display_name: impl Into<String>,
        description: impl Into<String>,
        permissions: impl IntoIterator<Item = Permission>,
    ) -> Self {
        Self {
            role,
            display_name: display_name.into(),
            description: description.into(),
            permissions: PermissionSet::with_permissions(permissions),
        }
    }
}

/// Default permission matrix for the five-role catalog
///
/// Admin holds every permission; the guest role holds none.
pub fn default_catalog() -> Vec<RoleDefinition> {
    vec![
        RoleDefinition::new(
            Role::Admin,
            "Administrator",
            "Full control over the property and its staff",
            Permission::ALL,
        ),
        RoleDefinition::new(
            Role::Manager,
            "Manager",
            "Operational oversight, reporting, and billing",
            [
                Permission::ViewDashboard,
                Permission::ManageReservations,
                Permission::CheckIn,
                Permission::CheckOut,
                Permission::ManageBilling,
                Permission::ManagePos,
                Permission::ManageRates,
                Permission::ViewReports,
                Permission::RunNightAudit,
            ],
        ),
        RoleDefinition::new(
            Role::FrontDesk,
            "Front Desk",
            "Reception: reservations, arrivals, and departures",
            [
                Permission::ViewDashboard,
                Permission::ManageReservations,
                Permission::CheckIn,
                Permission::CheckOut,
                Permission::ManageBilling,
            ],
        ),
        RoleDefinition::new(
            Role::Housekeeping,
            "Housekeeping",
            "Room status and cleaning assignments",
            [Permission::ViewDashboard, Permission::ManageHousekeeping],
        ),
        RoleDefinition::new(Role::Guest, "Guest", "Self-service guest account", []),
    ]
}
