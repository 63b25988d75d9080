//! Access directory: role catalog, user directory, and shift log
//!
//! The directory is the only code path allowed to mutate role definitions
//! or user permission snapshots, so the consistency invariant holds by
//! construction: after any role mutation returns, every user of that role
//! carries exactly the role's current permission set.
//!
//! All operations are synchronous in-memory read-modify-write steps. In a
//! multi-threaded host the whole directory must sit behind one exclusion
//! boundary, since a partially applied cascade must never be observable.

use tracing::{debug, info, warn};

use crate::access::role::default_catalog;
use crate::access::{
    Permission, PermissionSet, RoleDefinition, ShiftLog, ShiftLogEntry, StaffUser,
};
use crate::types::{Role, Shift, ShiftLogId, UserId};

/// Owning context for roles, users, and the shift log
///
/// Constructed explicitly (once per process, or per test) rather than held
/// as ambient global state; [`reset`](AccessDirectory::reset) restores the
/// seeded catalog and empties the collections.
#[derive(Debug, Clone)]
pub struct AccessDirectory {
    roles: Vec<RoleDefinition>,
    users: Vec<StaffUser>,
    shift_log: ShiftLog,
}

impl Default for AccessDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl AccessDirectory {
    /// Create a directory seeded with the default role catalog
    pub fn new() -> Self {
        Self { roles: default_catalog(), users: Vec::new(), shift_log: ShiftLog::new() }
    }

    /// Create a directory with a custom role catalog (used by tests and
    /// property-specific deployments)
    pub fn with_catalog(roles: Vec<RoleDefinition>) -> Self {
        Self { roles, users: Vec::new(), shift_log: ShiftLog::new() }
    }

    /// Restore the default catalog and drop all users and log entries
    pub fn reset(&mut self) {
        self.roles = default_catalog();
        self.users.clear();
        self.shift_log.clear();
        info!("access directory reset");
    }

    /// Role definitions, one per catalog role
    pub fn roles(&self) -> &[RoleDefinition] {
        &self.roles
    }

    /// Users, most recently created first
    pub fn users(&self) -> &[StaffUser] {
        &self.users
    }

    /// Shift-login log, newest first
    pub fn shift_log(&self) -> &[ShiftLogEntry] {
        self.shift_log.entries()
    }

    /// Look up the authoritative definition for a role
    pub fn role_definition(&self, role: Role) -> Option<&RoleDefinition> {
        self.roles.iter().find(|d| d.role == role)
    }

    /// Look up a user by id
    pub fn user(&self, user_id: UserId) -> Option<&StaffUser> {
        self.users.iter().find(|u| u.id == user_id)
    }

    /// Look up a user by username
    pub fn user_by_username(&self, username: &str) -> Option<&StaffUser> {
        self.users.iter().find(|u| u.username == username)
    }

    /// Create a user, snapshotting the role's current permissions
    ///
    /// A role with no catalog definition grants zero capabilities rather
    /// than failing the creation flow. The new user is prepended so the
    /// directory reads most-recently-created first.
    pub fn create_user(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        username: impl Into<String>,
        role: Role,
        hotel_code: impl Into<String>,
        shift: Option<Shift>,
    ) -> StaffUser {
        let permissions = match self.role_definition(role) {
            Some(definition) => definition.permissions.clone(),
            None => {
                warn!(%role, "no catalog definition for role, granting no permissions");
                PermissionSet::new()
            }
        };

        let mut user = StaffUser::new(name, email, username, role, permissions, hotel_code);
        user.current_shift = shift;

        info!(user_id = %user.id, %role, "created user");
        self.users.insert(0, user.clone());
        user
    }

    /// Reassign a user's role, overwriting role and permission snapshot
    /// together
    ///
    /// Returns the new permission set so callers can propagate it to a
    /// session store without re-querying; `None` if the user id is unknown.
    /// Reassigning the current role is idempotent.
    pub fn assign_role(&mut self, user_id: UserId, new_role: Role) -> Option<PermissionSet> {
        let permissions = self
            .role_definition(new_role)
            .map(|d| d.permissions.clone())
            .unwrap_or_default();

        let user = match self.users.iter_mut().find(|u| u.id == user_id) {
            Some(user) => user,
            None => {
                warn!(%user_id, "assign_role: unknown user");
                return None;
            }
        };

        user.role = new_role;
        user.permissions = permissions.clone();
        info!(%user_id, role = %new_role, "assigned role");
        Some(permissions)
    }

    /// Flip one permission on a role, then cascade to every user of that
    /// role
    ///
    /// Returns the role's updated permission set.
    pub fn toggle_role_permission(&mut self, role: Role, permission: Permission) -> PermissionSet {
        let updated = match self.roles.iter_mut().find(|d| d.role == role) {
            Some(definition) => {
                definition.permissions.toggle(permission);
                definition.permissions.clone()
            }
            None => {
                warn!(%role, "toggle_role_permission: role not in catalog");
                return PermissionSet::new();
            }
        };

        self.cascade(role, &updated);
        info!(%role, %permission, granted = updated.contains(permission), "toggled role permission");
        updated
    }

    /// Replace a role's permission set wholesale, with the same cascade
    /// contract as the single-flag toggle
    pub fn set_role_permissions(&mut self, role: Role, permissions: PermissionSet) {
        match self.roles.iter_mut().find(|d| d.role == role) {
            Some(definition) => definition.permissions = permissions.clone(),
            None => {
                warn!(%role, "set_role_permissions: role not in catalog");
                return;
            }
        }

        self.cascade(role, &permissions);
        info!(%role, count = permissions.len(), "replaced role permissions");
    }

    /// Upsert a user record from an external source (auth/session layer)
    ///
    /// Matches by id first, then by username. The provided permissions are
    /// trusted verbatim; this operation deliberately does not re-derive
    /// them from the catalog. On a match, role, permissions, last login,
    /// and current shift are overwritten; name, email, and hotel code of
    /// the existing entry are preserved.
    pub fn sync_user_account(&mut self, incoming: StaffUser) {
        let position = self
            .users
            .iter()
            .position(|u| u.id == incoming.id)
            .or_else(|| self.users.iter().position(|u| u.username == incoming.username));

        match position {
            Some(index) => {
                let user = &mut self.users[index];
                user.role = incoming.role;
                user.permissions = incoming.permissions;
                user.last_login = incoming.last_login;
                user.current_shift = incoming.current_shift;
                debug!(user_id = %user.id, "synced existing user account");
            }
            None => {
                debug!(user_id = %incoming.id, "sync inserted new user account");
                self.users.insert(0, incoming);
            }
        }
    }

    /// Record a shift login
    ///
    /// Best-effort bookkeeping: always succeeds, assigns a fresh id, and
    /// keeps only the most recent entries.
    pub fn record_shift_log(&mut self, entry: ShiftLogEntry) -> ShiftLogId {
        let id = self.shift_log.record(entry);
        debug!(entry_id = %id, "recorded shift login");
        id
    }

    /// Overwrite the snapshot of every user holding `role`
    fn cascade(&mut self, role: Role, permissions: &PermissionSet) {
        let mut touched = 0usize;
        for user in self.users.iter_mut().filter(|u| u.role == role) {
            user.permissions = permissions.clone();
            touched += 1;
        }
        debug!(%role, touched, "cascaded role permissions");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::Permission;

    fn directory_with_users() -> (AccessDirectory, UserId, UserId) {
        let mut dir = AccessDirectory::new();
        let a = dir
            .create_user("Asha", "asha@example.com", "asha", Role::FrontDesk, "HTL001", None)
            .id;
        let b = dir
            .create_user("Ravi", "ravi@example.com", "ravi", Role::Manager, "HTL001", None)
            .id;
        (dir, a, b)
    }

    #[test]
    fn test_create_user_snapshots_role_permissions() {
        let mut dir = AccessDirectory::new();
        let user = dir.create_user(
            "Asha",
            "asha@example.com",
            "asha",
            Role::FrontDesk,
            "HTL001",
            Some(Shift::Morning),
        );

        let expected = dir.role_definition(Role::FrontDesk).unwrap().permissions.clone();
        assert_eq!(user.permissions, expected);
        assert_eq!(user.current_shift, Some(Shift::Morning));
    }

    #[test]
    fn test_create_user_prepends() {
        let (dir, _a, b) = directory_with_users();
        // Most recently created first
        assert_eq!(dir.users()[0].id, b);
        assert_eq!(dir.users().len(), 2);
    }

    #[test]
    fn test_create_user_unknown_role_grants_nothing() {
        // A catalog missing the guest definition stands in for an unknown role
        let catalog =
            default_catalog().into_iter().filter(|d| d.role != Role::Guest).collect();
        let mut dir = AccessDirectory::with_catalog(catalog);

        let user =
            dir.create_user("Walk In", "g@example.com", "walkin", Role::Guest, "HTL001", None);
        assert!(user.permissions.is_empty());
    }

    #[test]
    fn test_assign_role_swaps_role_and_snapshot_together() {
        let (mut dir, front_desk_user, _) = directory_with_users();

        let returned = dir.assign_role(front_desk_user, Role::Manager).unwrap();
        let manager_set = dir.role_definition(Role::Manager).unwrap().permissions.clone();
        assert_eq!(returned, manager_set);

        let user = dir.user(front_desk_user).unwrap();
        assert_eq!(user.role, Role::Manager);
        assert_eq!(user.permissions, manager_set);
    }

    #[test]
    fn test_assign_role_is_idempotent() {
        let (mut dir, user_id, _) = directory_with_users();
        let first = dir.assign_role(user_id, Role::FrontDesk).unwrap();
        let second = dir.assign_role(user_id, Role::FrontDesk).unwrap();
        assert_eq!(first, second);
        assert_eq!(dir.user(user_id).unwrap().permissions, first);
    }

    #[test]
    fn test_assign_role_unknown_user() {
        let mut dir = AccessDirectory::new();
        assert!(dir.assign_role(UserId::new(), Role::Manager).is_none());
    }

    #[test]
    fn test_toggle_cascades_to_role_holders() {
        let (mut dir, front_desk_user, manager_user) = directory_with_users();

        let updated = dir.toggle_role_permission(Role::FrontDesk, Permission::ManagePos);
        assert!(updated.contains(Permission::ManagePos));

        // Front-desk user mirrors the updated set; the manager is untouched
        let fd = dir.user(front_desk_user).unwrap();
        assert_eq!(fd.permissions, updated);
        let mgr = dir.user(manager_user).unwrap();
        assert_eq!(mgr.permissions, dir.role_definition(Role::Manager).unwrap().permissions);
    }

    #[test]
    fn test_toggle_twice_restores_original_set() {
        let (mut dir, _, manager_user) = directory_with_users();
        let original = dir.role_definition(Role::Manager).unwrap().permissions.clone();
        assert!(original.contains(Permission::ManagePos));

        let removed = dir.toggle_role_permission(Role::Manager, Permission::ManagePos);
        assert!(!removed.contains(Permission::ManagePos));
        assert_eq!(dir.user(manager_user).unwrap().permissions, removed);

        let restored = dir.toggle_role_permission(Role::Manager, Permission::ManagePos);
        assert_eq!(restored, original);
        assert_eq!(dir.user(manager_user).unwrap().permissions, original);
    }

    #[test]
    fn test_set_role_permissions_cascades() {
        let (mut dir, front_desk_user, _) = directory_with_users();
        let replacement =
            PermissionSet::with_permissions([Permission::ViewDashboard, Permission::CheckIn]);

        dir.set_role_permissions(Role::FrontDesk, replacement.clone());

        assert_eq!(dir.role_definition(Role::FrontDesk).unwrap().permissions, replacement);
        assert_eq!(dir.user(front_desk_user).unwrap().permissions, replacement);
    }

    #[test]
    fn test_role_mutation_invariant_holds_for_all_users() {
        let mut dir = AccessDirectory::new();
        for i in 0..5 {
            dir.create_user(
                format!("FD {}", i),
                format!("fd{}@example.com", i),
                format!("fd{}", i),
                Role::FrontDesk,
                "HTL001",
                None,
            );
        }

        dir.toggle_role_permission(Role::FrontDesk, Permission::ViewReports);
        let role_set = dir.role_definition(Role::FrontDesk).unwrap().permissions.clone();
        for user in dir.users().iter().filter(|u| u.role == Role::FrontDesk) {
            assert_eq!(user.permissions, role_set);
        }
    }

    #[test]
    fn test_sync_matches_by_id() {
        let (mut dir, user_id, _) = directory_with_users();

        let mut incoming = dir.user(user_id).unwrap().clone();
        incoming.role = Role::Manager;
        incoming.permissions = PermissionSet::with_permissions([Permission::ViewDashboard]);
        incoming.current_shift = Some(Shift::Night);
        incoming.name = "Renamed Elsewhere".to_string();

        dir.sync_user_account(incoming);

        let user = dir.user(user_id).unwrap();
        assert_eq!(user.role, Role::Manager);
        // Trusted verbatim, not re-derived from the manager definition
        assert_eq!(
            user.permissions,
            PermissionSet::with_permissions([Permission::ViewDashboard])
        );
        assert_eq!(user.current_shift, Some(Shift::Night));
        // Existing identity fields preserved
        assert_eq!(user.name, "Asha");
        assert_eq!(dir.users().len(), 2);
    }

    #[test]
    fn test_sync_falls_back_to_username() {
        let (mut dir, user_id, _) = directory_with_users();

        let mut incoming = dir.user(user_id).unwrap().clone();
        incoming.id = UserId::new(); // different id, same username
        incoming.role = Role::Housekeeping;

        dir.sync_user_account(incoming);

        assert_eq!(dir.users().len(), 2);
        assert_eq!(dir.user_by_username("asha").unwrap().role, Role::Housekeeping);
    }

    #[test]
    fn test_sync_inserts_when_no_match() {
        let (mut dir, _, _) = directory_with_users();

        let incoming = StaffUser::new(
            "New Hire",
            "new@example.com",
            "newhire",
            Role::Housekeeping,
            PermissionSet::new(),
            "HTL001",
        );
        dir.sync_user_account(incoming);

        assert_eq!(dir.users().len(), 3);
        assert_eq!(dir.users()[0].username, "newhire");
    }

    #[test]
    fn test_reset_restores_seed_state() {
        let (mut dir, _, _) = directory_with_users();
        dir.toggle_role_permission(Role::Guest, Permission::ViewDashboard);
        dir.record_shift_log(ShiftLogEntry::login(
            UserId::new(),
            "x",
            Role::FrontDesk,
            Shift::Morning,
        ));

        dir.reset();

        assert!(dir.users().is_empty());
        assert!(dir.shift_log().is_empty());
        assert!(dir.role_definition(Role::Guest).unwrap().permissions.is_empty());
    }
}
