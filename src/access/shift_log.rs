//! Bounded shift-login log
//!
//! An append-only, newest-first record of shift logins, capped at the most
//! recent [`SHIFT_LOG_CAPACITY`] entries. Recording is best-effort
//! bookkeeping: it must never fail or block the login it describes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{LoginStatus, Role, Shift, ShiftLogId, UserId};

/// Maximum number of entries retained; the oldest are evicted first
pub const SHIFT_LOG_CAPACITY: usize = 50;

/// One shift-login record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftLogEntry {
    /// Unique identifier, assigned when the entry is recorded
    pub id: ShiftLogId,
    /// The user who logged in
    pub user_id: UserId,
    /// Denormalized user display name at login time
    pub user_name: String,
    /// Denormalized role at login time
    pub role: Role,
    /// Shift the login opened
    pub shift: Shift,
    /// Login timestamp
    pub login_at: DateTime<Utc>,
    /// Logout timestamp, once the shift session closed
    pub logout_at: Option<DateTime<Utc>>,
    /// Whether the login succeeded
    pub status: LoginStatus,
    /// Device the login came from, if known
    pub device: Option<String>,
    /// Physical location of the login, if known
    pub location: Option<String>,
}

impl ShiftLogEntry {
    /// Create an entry for a successful login happening now
    pub fn login(user_id: UserId, user_name: impl Into<String>, role: Role, shift: Shift) -> Self {
        Self {
            id: ShiftLogId::new(),
            user_id,
            user_name: user_name.into(),
            role,
            shift,
            login_at: Utc::now(),
            logout_at: None,
            status: LoginStatus::Success,
            device: None,
            location: None,
        }
    }

    /// Mark the entry as a failed login attempt
    pub fn failed(mut self) -> Self {
        self.status = LoginStatus::Failed;
        self
    }

    /// Attach the originating device
    pub fn with_device(mut self, device: impl Into<String>) -> Self {
        self.device = Some(device.into());
        self
    }

    /// Attach the login location
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// Newest-first bounded login log
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShiftLog {
    entries: Vec<ShiftLogEntry>,
}

impl ShiftLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an entry at the front, assigning a fresh identifier, then
    /// truncate to capacity
    pub fn record(&mut self, mut entry: ShiftLogEntry) -> ShiftLogId {
        entry.id = ShiftLogId::new();
        let id = entry.id;
        self.entries.insert(0, entry);
        self.entries.truncate(SHIFT_LOG_CAPACITY);
        id
    }

    /// Entries, newest first
    pub fn entries(&self) -> &[ShiftLogEntry] {
        &self.entries
    }

    /// Number of retained entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the log is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
