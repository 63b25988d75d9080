//! Reservation price breakdown computation
//!
//! The engine is a pure function of four inputs: a room type, a rate plan, a
//! tax configuration, and a check-in/check-out date pair. The charge order
//! is significant: the service charge is computed on the subtotal, GST on
//! the subtotal plus the service charge (deliberate tax-on-tax per Indian
//! hospitality billing convention), and luxury tax on the subtotal alone.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::pricing::{RatePlan, RoomType, TaxConfig};
use crate::types::{RatePlanId, RoomTypeId};

/// A computed price breakdown for one stay
///
/// Derived data: never mutated in place. Any input change produces a fresh
/// result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    /// Number of nights charged
    pub nights: u32,
    /// Discounted nightly rate
    pub rate_per_night: Decimal,
    /// Rate per night times nights, before taxes
    pub subtotal: Decimal,
    /// Service charge on the subtotal
    pub service_charge: Decimal,
    /// Combined CGST + SGST, computed on subtotal plus service charge
    pub gst_amount: Decimal,
    /// Luxury tax on the subtotal alone
    pub luxury_tax: Decimal,
    /// Sum of all taxes and charges
    pub total_tax: Decimal,
    /// Subtotal plus total tax
    pub total_amount: Decimal,
    /// Total amount per night, rounded to whole currency units; reports the
    /// total verbatim when the stay resolves to zero nights
    pub average_per_night: Decimal,
}

/// Number of nights between two dates
///
/// Uses the absolute difference, so a reversed check-in/check-out pair
/// produces a positive night count rather than failing. Callers that want
/// to reject reversed ranges should run [`validate_stay_dates`] first; the
/// engine itself keeps the absolute-value behavior for compatibility with
/// existing reservation records.
pub fn night_count(check_in: NaiveDate, check_out: NaiveDate) -> u32 {
    check_out.signed_duration_since(check_in).num_days().unsigned_abs() as u32
}

/// Reject stays whose check-out is not strictly after check-in
///
/// Upstream validation only: [`compute_breakdown`] never applies this.
pub fn validate_stay_dates(check_in: NaiveDate, check_out: NaiveDate) -> Result<(), String> {
    if check_out <= check_in {
        return Err(format!(
            "check-out {} must be after check-in {}",
            check_out, check_in
        ));
    }
    Ok(())
}

/// Compute the full price breakdown for a stay
///
/// Pure function: identical inputs always yield an identical result. Charge
/// order follows the property billing convention documented at module level.
pub fn compute_breakdown(
    room_type: &RoomType,
    rate_plan: &RatePlan,
    check_in: NaiveDate,
    check_out: NaiveDate,
    tax: &TaxConfig,
) -> PricingResult {
    let nights = night_count(check_in, check_out);
    let nights_dec = Decimal::from(nights);
    let hundred = Decimal::from(100);

    let discount = room_type.base_rate * rate_plan.discount_percentage / hundred;
    let rate_per_night = room_type.base_rate - discount;
    let subtotal = rate_per_night * nights_dec;

    let service_charge = if tax.service_charge_enabled {
        subtotal * tax.service_charge_percentage / hundred
    } else {
        Decimal::ZERO
    };

    // GST base includes the service charge; luxury tax base does not.
    let gst_amount = if tax.gst_enabled {
        (subtotal + service_charge) * tax.gst_percentage() / hundred
    } else {
        Decimal::ZERO
    };

    let luxury_tax = if tax.luxury_tax_enabled {
        subtotal * tax.luxury_tax_percentage / hundred
    } else {
        Decimal::ZERO
    };

    let total_tax = service_charge + gst_amount + luxury_tax;
    let total_amount = subtotal + total_tax;

    let average_per_night = if nights == 0 {
        total_amount
    } else {
        (total_amount / nights_dec).round()
    };

    debug!(
        room_type = %room_type.short_code,
        rate_plan = %rate_plan.name,
        nights,
        %total_amount,
        "computed price breakdown"
    );

    PricingResult {
        nights,
        rate_per_night,
        subtotal,
        service_charge,
        gst_amount,
        luxury_tax,
        total_tax,
        total_amount,
        average_per_night,
    }
}

/// Resolves room-type and rate-plan identifiers for quoting
///
/// An unresolvable identifier is not an error: it signals "cannot price
/// yet", and [`PricingCatalog::quote`] returns `None` so callers can render
/// an empty state without error plumbing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PricingCatalog {
    /// Room types configured for the property
    pub room_types: Vec<RoomType>,
    /// Rate plans configured for the property
    pub rate_plans: Vec<RatePlan>,
}

impl PricingCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog from configured records
    pub fn with_records(room_types: Vec<RoomType>, rate_plans: Vec<RatePlan>) -> Self {
        Self { room_types, rate_plans }
    }

    /// Look up a room type by id
    pub fn room_type(&self, id: RoomTypeId) -> Option<&RoomType> {
        self.room_types.iter().find(|r| r.id == id)
    }

    /// Look up a rate plan by id
    pub fn rate_plan(&self, id: RatePlanId) -> Option<&RatePlan> {
        self.rate_plans.iter().find(|p| p.id == id)
    }

    /// Look up a room type by its short code, case-insensitively
    pub fn room_type_by_code(&self, code: &str) -> Option<&RoomType> {
        self.room_types.iter().find(|r| r.short_code.eq_ignore_ascii_case(code))
    }

    /// Look up a rate plan by name, case-insensitively
    pub fn rate_plan_by_name(&self, name: &str) -> Option<&RatePlan> {
        self.rate_plans.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Room types currently offered for sale
    pub fn active_room_types(&self) -> impl Iterator<Item = &RoomType> {
        self.room_types.iter().filter(|r| r.is_active)
    }

    /// Quote a stay, resolving both identifiers first
    ///
    /// Returns `None` when either identifier cannot be resolved.
    pub fn quote(
        &self,
        room_type_id: RoomTypeId,
        rate_plan_id: RatePlanId,
        check_in: NaiveDate,
        check_out: NaiveDate,
        tax: &TaxConfig,
    ) -> Option<PricingResult> {
        let room_type = self.room_type(room_type_id)?;
        let rate_plan = self.rate_plan(rate_plan_id)?;
        Some(compute_breakdown(room_type, rate_plan, check_in, check_out, tax))
    }
}
