// Hotel PMS core - CLI entry point
//
// Quote a stay against a property configuration:
//
// ```console
// $ hotel-pms --room-type DLX --rate-plan Corporate \
//       --check-in 2024-01-01 --check-out 2024-01-03
// ```
//
// Or inspect the staff permission matrix:
//
// ```console
// $ hotel-pms --show-directory
// ```

use clap::Parser;
use std::process;
use std::str::FromStr;
use tracing::{error, info};

use hotel_pms_core::logging::LoggingConfig;
use hotel_pms_core::pricing::{compute_breakdown, validate_stay_dates, PricingResult};
use hotel_pms_core::types::{CliArgs, OutputFormat, PropertyConfig, Role, Shift};
use hotel_pms_core::{AccessDirectory, ShiftLogEntry};

fn main() {
    let args = CliArgs::parse();

    // Special flags that don't need full initialization
    if args.print_config {
        match PropertyConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    let logging_result = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        LoggingConfig::new().init()
    };

    let _log_guard = match logging_result {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };

    let config = match PropertyConfig::from_cli_args(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    info!(property = %config.property_name, "configuration loaded and validated");

    if args.dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!(
            "Property '{}' ({}): {} room types, {} rate plans.",
            config.property_name,
            config.hotel_code,
            config.room_types.len(),
            config.rate_plans.len()
        );
        return;
    }

    let format = match OutputFormat::from_str(&args.output) {
        Ok(format) => format,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    if args.show_directory {
        print_directory(&config, format);
        return;
    }

    if let Err(e) = run_quote(&args, &config, format) {
        error!("{}", e);
        process::exit(1);
    }
}

/// Resolve the requested room type and rate plan and print the breakdown
fn run_quote(args: &CliArgs, config: &PropertyConfig, format: OutputFormat) -> Result<(), String> {
    let (check_in, check_out) = match (args.check_in, args.check_out) {
        (Some(check_in), Some(check_out)) => (check_in, check_out),
        _ => return Err("both --check-in and --check-out are required for a quote".to_string()),
    };

    // Reversed ranges are rejected here at the boundary; the engine itself
    // would price them via the absolute date difference.
    validate_stay_dates(check_in, check_out)?;

    let room_type = match &args.room_type {
        Some(code) => config
            .room_types
            .iter()
            .find(|r| r.short_code.eq_ignore_ascii_case(code))
            .ok_or_else(|| format!("room type '{}' not found", code))?,
        None => config.room_types.first().ok_or("no room types configured")?,
    };

    let rate_plan = match &args.rate_plan {
        Some(name) => config
            .rate_plans
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| format!("rate plan '{}' not found", name))?,
        None => config.rate_plans.first().ok_or("no rate plans configured")?,
    };

    let breakdown = compute_breakdown(room_type, rate_plan, check_in, check_out, &config.tax);

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&breakdown)
                .map_err(|e| format!("failed to serialize breakdown: {}", e))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            print_breakdown(config, &room_type.name, &rate_plan.name, &breakdown);
        }
    }

    Ok(())
}

fn print_breakdown(
    config: &PropertyConfig,
    room_name: &str,
    plan_name: &str,
    breakdown: &PricingResult,
) {
    let cur = &config.currency;
    println!("{} - {} ({} plan)", config.property_name, room_name, plan_name);
    println!("{:-<52}", "");
    println!("{:<38} {:>12}", format!("Rate per night ({} nights)", breakdown.nights),
        format!("{} {}", cur, breakdown.rate_per_night));
    println!("{:<38} {:>12}", "Subtotal", format!("{} {}", cur, breakdown.subtotal));
    println!("{:<38} {:>12}", "Service charge", format!("{} {}", cur, breakdown.service_charge));
    println!("{:<38} {:>12}", "GST (CGST + SGST)", format!("{} {}", cur, breakdown.gst_amount));
    println!("{:<38} {:>12}", "Luxury tax", format!("{} {}", cur, breakdown.luxury_tax));
    println!("{:<38} {:>12}", "Total tax", format!("{} {}", cur, breakdown.total_tax));
    println!("{:-<52}", "");
    println!("{:<38} {:>12}", "Total", format!("{} {}", cur, breakdown.total_amount));
    println!("{:<38} {:>12}", "Average per night",
        format!("{} {}", cur, breakdown.average_per_night));
}

/// Seed a demo staff directory and print the permission matrix
fn print_directory(config: &PropertyConfig, format: OutputFormat) {
    let mut directory = AccessDirectory::new();
    let manager = directory.create_user(
        "Priya Sharma",
        "priya@example.com",
        "priya",
        Role::Manager,
        &config.hotel_code,
        Some(Shift::Morning),
    );
    directory.create_user(
        "Arun Verma",
        "arun@example.com",
        "arun",
        Role::FrontDesk,
        &config.hotel_code,
        Some(Shift::Evening),
    );
    directory.create_user(
        "Meena Patel",
        "meena@example.com",
        "meena",
        Role::Housekeeping,
        &config.hotel_code,
        None,
    );
    directory.record_shift_log(ShiftLogEntry::login(
        manager.id,
        manager.name.clone(),
        manager.role,
        Shift::Morning,
    ));

    if format == OutputFormat::Json {
        match serde_json::to_string_pretty(directory.users()) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("failed to serialize directory: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    println!("Role permission matrix for {}:", config.property_name);
    for definition in directory.roles() {
        let tags: Vec<&str> = definition.permissions.iter().map(|p| p.as_str()).collect();
        println!("  {:<14} {}", definition.display_name, tags.join(", "));
    }

    println!();
    println!("Staff directory:");
    for user in directory.users() {
        let shift = user
            .current_shift
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:<14} {:<24} {:<14} shift: {}",
            user.name, user.email, user.role, shift
        );
    }

    println!();
    println!("Recent shift logins ({}):", directory.shift_log().len());
    for entry in directory.shift_log() {
        println!(
            "  {} {} [{}] {} at {}",
            entry.user_name, entry.role, entry.shift, entry.status, entry.login_at
        );
    }
}
