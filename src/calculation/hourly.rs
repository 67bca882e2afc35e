//! Hourly pay calculation with weekly overtime.
//!
//! ## Rate Structure
//!
//! - Up to and including the standard week (40 hours): rate × hours.
//! - Past the standard week: rate × 40 for the ordinary hours, plus
//!   rate × 1.5 for every hour beyond 40.
//!
//! Exactly 40 hours is paid entirely at the ordinary rate.

use rust_decimal::Decimal;
use tracing::trace;

use crate::config::PayRules;
use crate::models::{Hourly, HourlyPay};

/// Hours in a standard week. Hours beyond this are overtime.
pub const STANDARD_WEEK_HOURS: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// Multiplier applied to the hourly rate for overtime hours (150%).
pub const OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Calculates pay for an hourly employee.
///
/// # Arguments
///
/// * `hourly` - The employee's rate and hours worked
/// * `rules` - The standard week length and overtime multiplier
///
/// # Returns
///
/// An [`HourlyPay`] with the ordinary and overtime parts. When the hours
/// worked do not exceed the standard week, `overtime_hours` and
/// `overtime_pay` are zero and `total` is exactly rate × hours.
///
/// # Panics
///
/// Panics if a product or sum overflows [`Decimal`], as plain `Decimal`
/// arithmetic does.
///
/// # Examples
///
/// ## 45 hours (5 hours overtime)
///
/// ```
/// use payroll_engine::calculation::calculate_hourly_pay;
/// use payroll_engine::config::PayRules;
/// use payroll_engine::models::Hourly;
/// use rust_decimal::Decimal;
///
/// let pay = calculate_hourly_pay(
///     &Hourly { hourly_rate: Decimal::from(100), hours_worked: Decimal::from(45) },
///     &PayRules::default(),
/// );
///
/// assert_eq!(pay.regular_pay, Decimal::from(4000));
/// assert_eq!(pay.overtime_pay, Decimal::from(750));
/// assert_eq!(pay.total, Decimal::from(4750));
/// ```
pub fn calculate_hourly_pay(hourly: &Hourly, rules: &PayRules) -> HourlyPay {
    let rate = hourly.hourly_rate;
    let hours = hourly.hours_worked;

    if hours <= rules.standard_week_hours {
        let total = rate * hours;
        trace!(rate = %rate, hours = %hours, total = %total, "No overtime");

        HourlyPay {
            hourly_rate: rate,
            hours_worked: hours,
            regular_hours: hours,
            overtime_hours: Decimal::ZERO,
            regular_pay: total,
            overtime_pay: Decimal::ZERO,
            total,
        }
    } else {
        let overtime_hours = hours - rules.standard_week_hours;
        let regular_pay = rate * rules.standard_week_hours;
        let overtime_pay = rate * rules.overtime_multiplier * overtime_hours;
        let total = regular_pay + overtime_pay;
        trace!(
            rate = %rate,
            hours = %hours,
            overtime_hours = %overtime_hours,
            total = %total,
            "Overtime applied"
        );

        HourlyPay {
            hourly_rate: rate,
            hours_worked: hours,
            regular_hours: rules.standard_week_hours,
            overtime_hours,
            regular_pay,
            overtime_pay,
            total,
        }
    }
}
