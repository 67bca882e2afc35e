//! Salaried-plus-commission pay calculation.
//!
//! Pay is the commission-only amount on the same sales and rate, plus the
//! base salary, plus a bonus of 10% of the base salary.

use rust_decimal::Decimal;

use crate::config::PayRules;
use crate::models::{BasePlusCommission, BasePlusCommissionPay};

use super::calculate_commission_pay;

/// Fraction of the base salary paid as a bonus (10%).
pub const BASE_SALARY_BONUS_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Calculates pay for a salaried-plus-commission employee.
///
/// The commission part is delegated to [`calculate_commission_pay`].
///
/// # Panics
///
/// Panics if the commission, bonus or total overflows [`Decimal`].
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_base_plus_commission_pay;
/// use payroll_engine::config::PayRules;
/// use payroll_engine::models::{BasePlusCommission, Commission};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let pay = calculate_base_plus_commission_pay(
///     &BasePlusCommission {
///         commission: Commission {
///             gross_sales: Decimal::from(15000),
///             commission_rate: Decimal::from_str("0.04").unwrap(),
///         },
///         base_salary: Decimal::from(800),
///     },
///     &PayRules::default(),
/// );
///
/// assert_eq!(pay.commission.total, Decimal::from(600));
/// assert_eq!(pay.bonus, Decimal::from(80));
/// assert_eq!(pay.total, Decimal::from(1480));
/// ```
pub fn calculate_base_plus_commission_pay(
    employee: &BasePlusCommission,
    rules: &PayRules,
) -> BasePlusCommissionPay {
    let commission = calculate_commission_pay(&employee.commission);
    let bonus = employee.base_salary * rules.base_salary_bonus_rate;
    let total = commission.total + employee.base_salary + bonus;

    BasePlusCommissionPay {
        base_salary: employee.base_salary,
        bonus,
        commission,
        total,
    }
}
