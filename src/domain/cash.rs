// Cash health calculations
use super::metrics::Status;

/// Sentinel runway when the company is not burning cash.
pub const UNBOUNDED_RUNWAY_MONTHS: f64 = 99.0;

/// Months of operating cash remaining at the current burn rate, rounded to
/// one decimal place. A burn rate of zero or less means cash is not
/// shrinking, which reports the unbounded sentinel.
pub fn calculate_runway(cash_balance: f64, monthly_burn_rate: f64) -> f64 {
    if monthly_burn_rate <= 0.0 {
        return UNBOUNDED_RUNWAY_MONTHS;
    }
    ((cash_balance / monthly_burn_rate) * 10.0).round() / 10.0
}

/// Map runway months to the three-level tile status. Both boundaries (3 and
/// 6 months) are amber.
pub fn cash_health_status(runway_months: f64) -> Status {
    if runway_months > 6.0 {
        Status::Green
    } else if runway_months >= 3.0 {
        Status::Amber
    } else {
        Status::Red
    }
}
