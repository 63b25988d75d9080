//! Per-property tax configuration
//!
//! Each property carries one [`TaxConfig`] with independent toggles and
//! percentages for the service charge, combined GST (CGST + SGST), and
//! luxury tax. Percentages are plain 0-100 numbers, never 0-1 fractions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Tax and service-charge configuration for a property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxConfig {
    /// Whether a service charge is levied on the subtotal
    pub service_charge_enabled: bool,
    /// Service charge as a 0-100 percentage of the subtotal
    pub service_charge_percentage: Decimal,
    /// Whether GST applies
    pub gst_enabled: bool,
    /// Central GST component, 0-100 percentage
    pub cgst_percentage: Decimal,
    /// State GST component, 0-100 percentage
    pub sgst_percentage: Decimal,
    /// Whether luxury tax applies
    pub luxury_tax_enabled: bool,
    /// Luxury tax as a 0-100 percentage of the subtotal
    pub luxury_tax_percentage: Decimal,
}

impl Default for TaxConfig {
    fn default() -> Self {
        Self {
            service_charge_enabled: true,
            service_charge_percentage: Decimal::from(10),
            gst_enabled: true,
            cgst_percentage: Decimal::from(6),
            sgst_percentage: Decimal::from(6),
            luxury_tax_enabled: false,
            luxury_tax_percentage: Decimal::ZERO,
        }
    }
}

impl TaxConfig {
    /// A configuration with every tax disabled
    pub fn none() -> Self {
        Self {
            service_charge_enabled: false,
            service_charge_percentage: Decimal::ZERO,
            gst_enabled: false,
            cgst_percentage: Decimal::ZERO,
            sgst_percentage: Decimal::ZERO,
            luxury_tax_enabled: false,
            luxury_tax_percentage: Decimal::ZERO,
        }
    }

    /// Combined GST rate (CGST + SGST) as a 0-100 percentage
    pub fn gst_percentage(&self) -> Decimal {
        self.cgst_percentage + self.sgst_percentage
    }

    /// Validate that all percentages fall in the 0-100 range
    pub fn validate(&self) -> Result<(), String> {
        validate_percentage("service_charge_percentage", self.service_charge_percentage)?;
        validate_percentage("cgst_percentage", self.cgst_percentage)?;
        validate_percentage("sgst_percentage", self.sgst_percentage)?;
        validate_percentage("luxury_tax_percentage", self.luxury_tax_percentage)?;
        Ok(())
    }
}

fn validate_percentage(field: &str, value: Decimal) -> Result<(), String> {
    if value < Decimal::ZERO || value > Decimal::from(100) {
        return Err(format!("{} must be between 0 and 100, got {}", field, value));
    }
    Ok(())
}
