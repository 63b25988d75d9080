//! Property configuration
//!
//! This module contains the property configuration (room types, rate plans,
//! taxes) the pricing engine consumes, plus CLI argument parsing and the
//! file/CLI precedence rules: command-line arguments override file
//! settings, which override the built-in sample property.

use chrono::NaiveDate;
use clap::Parser;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{PmsError, PmsResult};
use crate::pricing::{RatePlan, RoomType, TaxConfig};

/// Command line arguments
#[derive(Debug, Clone, Parser)]
#[command(
    name = "hotel-pms",
    version,
    about = "Hotel PMS core - prices stays and manages the staff permission matrix",
    long_about = "Computes reservation price breakdowns (rate-plan discounting and \
multi-tax stacking) against a property configuration, and can print the seeded \
staff directory with its role permission matrix.

EXAMPLES:
    # Quote a stay against the built-in sample property
    hotel-pms --room-type DLX --rate-plan Corporate --check-in 2024-01-01 --check-out 2024-01-03

    # Use a property configuration file
    hotel-pms --config property.json --room-type STD --check-in 2024-03-10 --check-out 2024-03-12

    # Generate a configuration template
    hotel-pms --print-config > property.json

    # Validate a configuration without quoting
    hotel-pms --config property.json --dry-run"
)]
pub struct CliArgs {
    /// Property configuration file path (JSON format)
    #[arg(short, long, help = "Property configuration file (JSON)")]
    pub config: Option<String>,

    /// Room type short code to quote (e.g. DLX)
    #[arg(long, help = "Room type short code to quote")]
    pub room_type: Option<String>,

    /// Rate plan name to quote (e.g. Corporate)
    #[arg(long, help = "Rate plan name to quote")]
    pub rate_plan: Option<String>,

    /// Check-in date (YYYY-MM-DD)
    #[arg(long, help = "Check-in date (YYYY-MM-DD)")]
    pub check_in: Option<NaiveDate>,

    /// Check-out date (YYYY-MM-DD)
    #[arg(long, help = "Check-out date (YYYY-MM-DD)")]
    pub check_out: Option<NaiveDate>,

    /// Output format: text or json
    #[arg(long, default_value = "text", help = "Output format (text|json)")]
    pub output: String,

    /// Print the staff directory and permission matrix instead of a quote
    #[arg(long, help = "Print the seeded staff directory and permission matrix")]
    pub show_directory: bool,

    /// Print the default configuration as JSON and exit
    #[arg(long, help = "Print default configuration as JSON and exit")]
    pub print_config: bool,

    /// Validate configuration and exit without quoting
    #[arg(long, help = "Validate configuration and exit")]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose (info-level) logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, help = "Enable debug-level logging")]
    pub debug: bool,
}

/// Raw configuration file contents; every section is optional and merged
/// over the built-in sample property
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Property display name
    pub property_name: Option<String>,
    /// Property code used on staff records
    pub hotel_code: Option<String>,
    /// ISO currency code for display purposes
    pub currency: Option<String>,
    /// Room types offered
    pub room_types: Option<Vec<RoomType>>,
    /// Rate plans offered
    pub rate_plans: Option<Vec<RatePlan>>,
    /// Tax configuration
    pub tax: Option<TaxConfig>,
}

/// Resolved property configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyConfig {
    /// Property display name
    pub property_name: String,
    /// Property code used on staff records
    pub hotel_code: String,
    /// ISO currency code for display purposes
    pub currency: String,
    /// Room types offered
    pub room_types: Vec<RoomType>,
    /// Rate plans offered
    pub rate_plans: Vec<RatePlan>,
    /// Tax configuration
    pub tax: TaxConfig,
}

impl Default for PropertyConfig {
    fn default() -> Self {
        Self {
            property_name: "Sample Hotel".to_string(),
            hotel_code: "HTL001".to_string(),
            currency: "INR".to_string(),
            room_types: vec![
                RoomType::new("Standard Twin", "STD", dec!(1500), 2),
                RoomType::new("Deluxe King", "DLX", dec!(2000), 2),
                RoomType::new("Suite", "STE", dec!(5000), 4).with_extra_bed_rate(dec!(750)),
            ],
            rate_plans: vec![
                RatePlan::new("Rack", dec!(0)),
                RatePlan::new("Corporate", dec!(10)),
                RatePlan::new("Early Bird", dec!(15)),
            ],
            tax: TaxConfig::default(),
        }
    }
}

impl PropertyConfig {
    /// Build configuration from parsed CLI arguments, loading the file the
    /// arguments point at when present
    pub fn from_cli_args(args: &CliArgs) -> PmsResult<Self> {
        match &args.config {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a JSON file, merging with defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> PmsResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(PmsError::FileNotFound(path.display().to_string()));
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let content = fs::read_to_string(path)?;
                let file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(file))
            }
            Some(ext) => Err(PmsError::UnsupportedFormat(ext.to_string())),
            None => Err(PmsError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Merge a parsed config file over the defaults
    fn from_config_file(file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            property_name: file.property_name.unwrap_or(defaults.property_name),
            hotel_code: file.hotel_code.unwrap_or(defaults.hotel_code),
            currency: file.currency.unwrap_or(defaults.currency),
            room_types: file.room_types.unwrap_or(defaults.room_types),
            rate_plans: file.rate_plans.unwrap_or(defaults.rate_plans),
            tax: file.tax.unwrap_or(defaults.tax),
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> PmsResult<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Render configuration as pretty-printed JSON
    pub fn print_json(&self) -> PmsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration
    pub fn validate(&self) -> PmsResult<()> {
        if self.hotel_code.trim().is_empty() {
            return Err(PmsError::configuration("hotel_code must not be empty"));
        }
        if self.room_types.is_empty() {
            return Err(PmsError::configuration("at least one room type is required"));
        }

        for room in &self.room_types {
            if room.base_rate.is_sign_negative() {
                return Err(PmsError::configuration(format!(
                    "room type '{}' has a negative base rate",
                    room.name
                )));
            }
        }

        // Short codes are the CLI lookup key, so duplicates would be ambiguous
        for (i, room) in self.room_types.iter().enumerate() {
            if self.room_types[..i]
                .iter()
                .any(|other| other.short_code.eq_ignore_ascii_case(&room.short_code))
            {
                return Err(PmsError::configuration(format!(
                    "duplicate room type short code '{}'",
                    room.short_code
                )));
            }
        }

        for plan in &self.rate_plans {
            plan.validate()?;
        }

        self.tax.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = PropertyConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.room_types.len(), 3);
        assert_eq!(config.rate_plans.len(), 3);
    }

    #[test]
    fn test_config_file_merges_over_defaults() {
        let file = ConfigFile {
            property_name: Some("Seaside Resort".to_string()),
            ..ConfigFile::default()
        };
        let config = PropertyConfig::from_config_file(file);

        assert_eq!(config.property_name, "Seaside Resort");
        // Untouched sections fall back to the sample property
        assert_eq!(config.hotel_code, "HTL001");
        assert_eq!(config.room_types.len(), 3);
    }

    #[test]
    fn test_from_file_round_trip() {
        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        let json = r#"{ "hotel_code": "HTL042", "currency": "USD" }"#;
        file.write_all(json.as_bytes()).unwrap();

        let config = PropertyConfig::from_file(file.path()).unwrap();
        assert_eq!(config.hotel_code, "HTL042");
        assert_eq!(config.currency, "USD");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file_missing() {
        let err = PropertyConfig::from_file("/nonexistent/property.json").unwrap_err();
        assert!(matches!(err, PmsError::FileNotFound(_)));
    }

    #[test]
    fn test_from_file_unsupported_extension() {
        let file = NamedTempFile::with_suffix(".yaml").unwrap();
        let err = PropertyConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, PmsError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_validation_rejects_duplicate_short_codes() {
        let mut config = PropertyConfig::default();
        config.room_types.push(RoomType::new("Another Deluxe", "dlx", Decimal::from(900), 2));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_empty_hotel_code() {
        let config = PropertyConfig { hotel_code: "  ".to_string(), ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_discount() {
        let mut config = PropertyConfig::default();
        config.rate_plans.push(RatePlan::new("Broken", Decimal::from(150)));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_print_json_parses_back() {
        let config = PropertyConfig::default();
        let json = config.print_json().unwrap();
        let back: PropertyConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.hotel_code, config.hotel_code);
        assert_eq!(back.room_types.len(), config.room_types.len());
    }
}
