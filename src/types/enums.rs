//! Enumeration types for the PMS core
//!
//! This module contains the closed role catalog identifiers, staff shift
//! names, shift-login outcomes, and output formats used by the CLI.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Staff roles recognized by the property
///
/// The role set is closed: identifiers are never added or removed at
/// runtime. Each role has exactly one [`RoleDefinition`] in the catalog.
///
/// [`RoleDefinition`]: crate::access::RoleDefinition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    /// Full administrative control over the property
    Admin,
    /// Day-to-day operational management
    Manager,
    /// Reception desk staff
    FrontDesk,
    /// Room cleaning and maintenance staff
    Housekeeping,
    /// Guest-facing self-service account
    Guest,
}

impl Role {
    /// All roles in the closed catalog
    pub const ALL: [Role; 5] =
        [Role::Admin, Role::Manager, Role::FrontDesk, Role::Housekeeping, Role::Guest];

    /// Stable string tag used in persisted records
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::FrontDesk => "front-desk",
            Role::Housekeeping => "housekeeping",
            Role::Guest => "guest",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "manager" => Ok(Role::Manager),
            "front-desk" | "front_desk" | "frontdesk" => Ok(Role::FrontDesk),
            "housekeeping" => Ok(Role::Housekeeping),
            "guest" => Ok(Role::Guest),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

/// Working shifts for front-of-house staff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shift {
    /// Morning shift (opening through early afternoon)
    Morning,
    /// Evening shift (afternoon through late evening)
    Evening,
    /// Night shift (covers the night-audit window)
    Night,
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shift::Morning => write!(f, "Morning"),
            Shift::Evening => write!(f, "Evening"),
            Shift::Night => write!(f, "Night"),
        }
    }
}

impl FromStr for Shift {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "morning" => Ok(Shift::Morning),
            "evening" => Ok(Shift::Evening),
            "night" => Ok(Shift::Night),
            _ => Err(format!("Unknown shift: {}", s)),
        }
    }
}

/// Outcome of a shift-login attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginStatus {
    /// Login completed and a shift session was opened
    Success,
    /// Credentials or device checks failed
    Failed,
}

impl fmt::Display for LoginStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginStatus::Success => write!(f, "success"),
            LoginStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Output formats supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable line items
    Text,
    /// Machine-readable JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in Role::ALL {
            let parsed: Role = role.as_str().parse().unwrap();
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn test_role_from_str_variants() {
        assert_eq!("front-desk".parse::<Role>().unwrap(), Role::FrontDesk);
        assert_eq!("front_desk".parse::<Role>().unwrap(), Role::FrontDesk);
        assert_eq!("FrontDesk".parse::<Role>().unwrap(), Role::FrontDesk);
        assert!("concierge".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_serde_tags() {
        let json = serde_json::to_string(&Role::FrontDesk).unwrap();
        assert_eq!(json, "\"front-desk\"");
        let back: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Role::FrontDesk);
    }

    #[test]
    fn test_shift_parsing() {
        assert_eq!("night".parse::<Shift>().unwrap(), Shift::Night);
        assert_eq!("Morning".parse::<Shift>().unwrap(), Shift::Morning);
        assert!("graveyard".parse::<Shift>().is_err());
    }

    #[test]
    fn test_login_status_display() {
        assert_eq!(format!("{}", LoginStatus::Success), "success");
        assert_eq!(format!("{}", LoginStatus::Failed), "failed");
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
