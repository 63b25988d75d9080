//! Integration tests for CLI argument parsing and configuration loading

use clap::Parser;
use hotel_pms_core::types::{CliArgs, PropertyConfig};
use hotel_pms_core::PmsError;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_default_args() {
    let args = CliArgs::try_parse_from(["hotel-pms"]).unwrap();
    assert!(args.config.is_none());
    assert!(args.room_type.is_none());
    assert!(args.check_in.is_none());
    assert_eq!(args.output, "text");
    assert!(!args.dry_run);
    assert!(!args.show_directory);
}

#[test]
fn test_quote_args() {
    let args = CliArgs::try_parse_from([
        "hotel-pms",
        "--room-type",
        "DLX",
        "--rate-plan",
        "Corporate",
        "--check-in",
        "2024-01-01",
        "--check-out",
        "2024-01-03",
        "--output",
        "json",
    ])
    .unwrap();

    assert_eq!(args.room_type.as_deref(), Some("DLX"));
    assert_eq!(args.rate_plan.as_deref(), Some("Corporate"));
    assert_eq!(args.check_in.unwrap().to_string(), "2024-01-01");
    assert_eq!(args.check_out.unwrap().to_string(), "2024-01-03");
    assert_eq!(args.output, "json");
}

#[test]
fn test_malformed_date_is_rejected_at_parse_time() {
    let result = CliArgs::try_parse_from(["hotel-pms", "--check-in", "01/01/2024"]);
    assert!(result.is_err());
}

#[test]
fn test_config_file_feeds_quote_inputs() {
    let mut file = NamedTempFile::with_suffix(".json").unwrap();
    let json = r#"{
        "property_name": "Hilltop Lodge",
        "hotel_code": "HTL777",
        "room_types": [
            {
                "id": "RTY_0a4b54f0c0de4f119a2fb32cb4a7a9b1",
                "name": "Cabin",
                "short_code": "CAB",
                "base_rate": "3200",
                "capacity": 3,
                "extra_bed_rate": "0",
                "amenities": ["fireplace"],
                "is_active": true
            }
        ]
    }"#;
    file.write_all(json.as_bytes()).unwrap();

    let args =
        CliArgs::try_parse_from(["hotel-pms", "--config", file.path().to_str().unwrap()])
            .unwrap();
    let config = PropertyConfig::from_cli_args(&args).unwrap();

    assert_eq!(config.property_name, "Hilltop Lodge");
    assert_eq!(config.hotel_code, "HTL777");
    assert_eq!(config.room_types.len(), 1);
    assert_eq!(config.room_types[0].short_code, "CAB");
    // Sections absent from the file come from the defaults
    assert_eq!(config.rate_plans.len(), 3);
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_config_file_errors() {
    let args =
        CliArgs::try_parse_from(["hotel-pms", "--config", "/does/not/exist.json"]).unwrap();
    let err = PropertyConfig::from_cli_args(&args).unwrap_err();
    assert!(matches!(err, PmsError::FileNotFound(_)));
}

#[test]
fn test_save_and_reload_config() {
    let file = NamedTempFile::with_suffix(".json").unwrap();
    let config = PropertyConfig::default();
    config.save_to_file(file.path()).unwrap();

    let reloaded = PropertyConfig::from_file(file.path()).unwrap();
    assert_eq!(reloaded.property_name, config.property_name);
    assert_eq!(reloaded.room_types.len(), config.room_types.len());
    assert_eq!(reloaded.tax, config.tax);
}
