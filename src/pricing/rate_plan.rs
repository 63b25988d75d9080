//! Rate plan records
//!
//! A rate plan is a named discount policy applied against a room type's base
//! rate. Discounts are percentages in the 0-100 range; a plan never turns a
//! base rate negative.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::RatePlanId;

/// A named discount policy (e.g. "Corporate", "Early Bird")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatePlan {
    /// Unique identifier for the rate plan
    pub id: RatePlanId,
    /// Display name shown on booking screens
    pub name: String,
    /// Discount applied to the base rate, as a 0-100 percentage
    pub discount_percentage: Decimal,
    /// Whether the plan is currently offered
    pub is_active: bool,
}

impl RatePlan {
    /// Create a new active rate plan
    pub fn new(name: impl Into<String>, discount_percentage: Decimal) -> Self {
        Self { id: RatePlanId::new(), name: name.into(), discount_percentage, is_active: true }
    }

    /// Validate that the discount stays in the 0-100 range
    pub fn validate(&self) -> Result<(), String> {
        if self.discount_percentage < Decimal::ZERO
            || self.discount_percentage > Decimal::from(100)
        {
            return Err(format!(
                "Rate plan '{}' has discount {} outside 0-100",
                self.name, self.discount_percentage
            ));
        }
        Ok(())
    }
}
