//! Reservation pricing engine
//!
//! Pure computation over property-configuration records: rate-plan
//! discounting, night-count arithmetic, and multi-tax stacking.

pub mod breakdown;
pub mod rate_plan;
pub mod room_type;
pub mod tax;

pub use breakdown::{
    compute_breakdown, night_count, validate_stay_dates, PricingCatalog, PricingResult,
};
pub use rate_plan::RatePlan;
pub use room_type::RoomType;
pub use tax::TaxConfig;
