//! Daily budget breakdown across fixed spending categories.
//!
//! The split is a fixed policy: 30% travel, 40% accommodation, 30% activities
//! of the daily budget (total budget divided by trip duration). Amounts are
//! reported in INR with two decimal places.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::Result;
use crate::tool::{Tool, ToolContext, ToolName};

/// Share of the daily budget reserved for travel.
pub const TRAVEL_SHARE: f64 = 0.30;
/// Share of the daily budget reserved for accommodation.
pub const ACCOMMODATION_SHARE: f64 = 0.40;
/// Share of the daily budget reserved for activities.
pub const ACTIVITIES_SHARE: f64 = 0.30;

/// Per-day spending suggestion in INR.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetBreakdown {
    pub daily: f64,
    pub travel: f64,
    pub accommodation: f64,
    pub activities: f64,
}

impl BudgetBreakdown {
    /// Splits the daily budget across the fixed categories.
    ///
    /// Returns `None` when the duration is not positive, so no division
    /// happens on degenerate input.
    ///
    /// # Examples
    ///
    /// ```
    /// use caravan_core::tools::BudgetBreakdown;
    ///
    /// let breakdown = BudgetBreakdown::compute(30000.0, 3).unwrap();
    /// assert_eq!(breakdown.accommodation, 4000.0);
    /// ```
    pub fn compute(total_budget: f64, duration: i64) -> Option<Self> {
        if duration <= 0 {
            return None;
        }
        let daily = total_budget / duration as f64;
        Some(Self {
            daily,
            travel: daily * TRAVEL_SHARE,
            accommodation: daily * ACCOMMODATION_SHARE,
            activities: daily * ACTIVITIES_SHARE,
        })
    }

    /// Renders the suggestion in the fixed report shape.
    pub fn render(&self) -> String {
        format!(
            "Suggested daily spending (in INR):\n- Travel: ₹{:.2}\n- Accommodation: ₹{:.2}\n- Activities: ₹{:.2}",
            self.travel, self.accommodation, self.activities
        )
    }
}

/// Splits the trip budget into daily category amounts.
///
/// Degenerate durations produce an in-band error message rather than a
/// failure: the message becomes the tool's output and flows into the agent
/// prompt like any other result.
pub struct BudgetCalculator;

#[async_trait]
impl Tool for BudgetCalculator {
    fn name(&self) -> ToolName {
        ToolName::BudgetCalculator
    }

    fn description(&self) -> &str {
        "Calculate daily spending limits based on total budget and trip duration in INR."
    }

    async fn run(&self, ctx: &ToolContext) -> Result<String> {
        let output = match BudgetBreakdown::compute(ctx.request.budget, ctx.request.duration) {
            Some(breakdown) => breakdown.render(),
            None => "Error: Trip duration must be positive.".to_string(),
        };
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trip::TripRequest;

    #[test]
    fn splits_daily_budget_by_fixed_shares() {
        let breakdown = BudgetBreakdown::compute(30000.0, 3).unwrap();
        assert_eq!(breakdown.daily, 10000.0);
        assert_eq!(breakdown.travel, 3000.0);
        assert_eq!(breakdown.accommodation, 4000.0);
        assert_eq!(breakdown.activities, 3000.0);
    }

    #[test]
    fn shares_cover_the_whole_daily_budget() {
        let breakdown = BudgetBreakdown::compute(7777.0, 6).unwrap();
        let total = breakdown.travel + breakdown.accommodation + breakdown.activities;
        assert!((total - breakdown.daily).abs() < 1e-9);
        assert!((breakdown.travel - breakdown.daily * 0.30).abs() < 1e-9);
        assert!((breakdown.accommodation - breakdown.daily * 0.40).abs() < 1e-9);
    }

    #[test]
    fn compute_is_idempotent() {
        let first = BudgetBreakdown::compute(30000.0, 3).unwrap();
        let second = BudgetBreakdown::compute(30000.0, 3).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn zero_and_negative_durations_produce_no_breakdown() {
        assert!(BudgetBreakdown::compute(5000.0, 0).is_none());
        assert!(BudgetBreakdown::compute(30000.0, -3).is_none());
    }

    #[test]
    fn renders_amounts_with_two_decimals() {
        let breakdown = BudgetBreakdown::compute(30000.0, 3).unwrap();
        assert_eq!(
            breakdown.render(),
            "Suggested daily spending (in INR):\n- Travel: ₹3000.00\n- Accommodation: ₹4000.00\n- Activities: ₹3000.00"
        );
    }

    #[tokio::test]
    async fn tool_reports_breakdown_for_valid_request() {
        let request = TripRequest::new("beaches", 30000.0, 3).unwrap();
        let ctx = ToolContext {
            query: "analyze budget".to_string(),
            request,
        };

        let output = BudgetCalculator.run(&ctx).await.unwrap();
        assert!(output.starts_with("Suggested daily spending (in INR):"));
        assert!(output.contains("₹4000.00"));
    }

    #[tokio::test]
    async fn tool_reports_in_band_error_for_degenerate_duration() {
        // Bypasses request validation to exercise the tool's own guard.
        let request = TripRequest {
            preference: "beaches".to_string(),
            budget: 5000.0,
            duration: 0,
        };
        let ctx = ToolContext {
            query: "analyze budget".to_string(),
            request,
        };

        let output = BudgetCalculator.run(&ctx).await.unwrap();
        assert_eq!(output, "Error: Trip duration must be positive.");
    }
}
