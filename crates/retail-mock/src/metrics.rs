//! Derived percentages. A zero denominator always yields `0.0`, never NaN or infinity.

pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    numerator / denominator
}

pub fn percentage(part: f64, whole: f64) -> f64 {
    ratio(part, whole) * 100.0
}

/// Percent change from `previous` to `current`.
pub fn growth_rate(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    (current - previous) / previous * 100.0
}

pub fn growth_rate_u64(current: u64, previous: u64) -> f64 {
    growth_rate(current as f64, previous as f64)
}

/// Share of returning customers among all customers seen.
pub fn retention_rate(new_customers: u64, returning_customers: u64) -> f64 {
    percentage(
        returning_customers as f64,
        (new_customers + returning_customers) as f64,
    )
}
