//! Calculation logic for the payroll engine.
//!
//! One function per compensation rule, plus [`calculate_pay`] which
//! dispatches on the employee's [`Compensation`] variant.

mod base_plus_commission;
mod commission;
mod hourly;
mod salaried;

pub use base_plus_commission::{BASE_SALARY_BONUS_RATE, calculate_base_plus_commission_pay};
pub use commission::calculate_commission_pay;
pub use hourly::{OVERTIME_MULTIPLIER, STANDARD_WEEK_HOURS, calculate_hourly_pay};
pub use salaried::calculate_salaried_pay;

use crate::config::PayRules;
use crate::models::{Compensation, PayBreakdown};

/// Applies the pay rule matching the compensation variant.
///
/// # Panics
///
/// Panics if the rule's arithmetic overflows `Decimal`; see the individual
/// `calculate_*_pay` functions.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_pay;
/// use payroll_engine::config::PayRules;
/// use payroll_engine::models::{Compensation, Salaried};
/// use rust_decimal::Decimal;
///
/// let breakdown = calculate_pay(
///     &Compensation::Salaried(Salaried { weekly_salary: Decimal::from(1000) }),
///     &PayRules::default(),
/// );
/// assert_eq!(breakdown.total(), Decimal::from(1000));
/// ```
pub fn calculate_pay(compensation: &Compensation, rules: &PayRules) -> PayBreakdown {
    match compensation {
        Compensation::Salaried(salaried) => {
            PayBreakdown::Salaried(calculate_salaried_pay(salaried))
        }
        Compensation::Hourly(hourly) => PayBreakdown::Hourly(calculate_hourly_pay(hourly, rules)),
        Compensation::Commission(commission) => {
            PayBreakdown::Commission(calculate_commission_pay(commission))
        }
        Compensation::BasePlusCommission(employee) => PayBreakdown::BasePlusCommission(
            calculate_base_plus_commission_pay(employee, rules),
        ),
    }
}
