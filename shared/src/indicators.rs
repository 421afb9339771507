//! Risk indicators derived from stock records
//!
//! Pure functions mapping forecast and classification fields to color bands
//! and progress fractions. Callers feed them the merged display fields.

use serde::{Deserialize, Serialize};

use crate::models::{Criticality, Product};
use crate::types::ColorBand;

/// Days past the lead time before a product is considered safe
pub const SAFETY_MARGIN_DAYS: f64 = 5.0;

/// Color for a criticality label
pub fn criticality_color(criticality: &Criticality) -> ColorBand {
    match criticality {
        Criticality::High => ColorBand::Error,
        Criticality::Medium => ColorBand::Warning,
        Criticality::Low => ColorBand::Success,
        Criticality::Other(_) => ColorBand::Neutral,
    }
}

/// Stockout risk band relative to the supplier lead time
///
/// Below the lead time is an error; within the safety margin past it is a
/// warning; from `lead_time + SAFETY_MARGIN_DAYS` onwards is safe.
pub fn days_remaining_color(days_remaining: f64, lead_time: u32) -> ColorBand {
    let lead_time = f64::from(lead_time);
    if days_remaining < lead_time {
        ColorBand::Error
    } else if days_remaining < lead_time + SAFETY_MARGIN_DAYS {
        ColorBand::Warning
    } else {
        ColorBand::Success
    }
}

/// Progress towards the safe horizon, in percent, capped at 100.
///
/// Not clamped below: a negative `days_remaining` gives a negative value.
pub fn stockout_progress_fraction(days_remaining: f64, lead_time: u32) -> f64 {
    let horizon = f64::from(lead_time) + SAFETY_MARGIN_DAYS;
    (days_remaining / horizon * 100.0).min(100.0)
}

/// All indicators for one displayed row
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RiskIndicators {
    pub days_band: ColorBand,
    pub stockout_progress: f64,
    pub criticality_band: ColorBand,
}

impl RiskIndicators {
    /// Indicators for the fields a row is displaying
    pub fn for_display(display: &Product) -> Self {
        Self {
            days_band: days_remaining_color(display.days_remaining, display.lead_time),
            stockout_progress: stockout_progress_fraction(
                display.days_remaining,
                display.lead_time,
            ),
            criticality_band: criticality_color(&display.criticality),
        }
    }
}
