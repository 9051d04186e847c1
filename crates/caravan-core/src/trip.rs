//! Trip request domain model.
//!
//! A trip request captures the three values collected from the user at
//! startup. It is created once per process invocation and never mutated.

use serde::Serialize;

use crate::error::{CaravanError, Result};

/// The user's travel planning request.
///
/// Serializes with its field names (`preference`, `budget`, `duration`) so it
/// can be passed directly as the context for task prompt templates.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TripRequest {
    /// Destination preference, e.g. a city name
    pub preference: String,
    /// Total trip budget in INR
    pub budget: f64,
    /// Trip duration in days
    pub duration: i64,
}

impl TripRequest {
    /// Creates a validated trip request.
    ///
    /// Budget and duration must both be positive; anything else is rejected
    /// as invalid input before any agent work begins.
    pub fn new(preference: impl Into<String>, budget: f64, duration: i64) -> Result<Self> {
        let preference = preference.into();
        if preference.trim().is_empty() {
            return Err(CaravanError::invalid_input(
                "destination preference must not be empty",
            ));
        }
        if !budget.is_finite() || budget <= 0.0 {
            return Err(CaravanError::invalid_input(
                "budget must be a positive amount",
            ));
        }
        if duration <= 0 {
            return Err(CaravanError::invalid_input(
                "trip duration must be a positive number of days",
            ));
        }
        Ok(Self {
            preference,
            budget,
            duration,
        })
    }
}
