//! Salaried pay calculation.

use crate::models::{Salaried, SalariedPay};

/// Calculates pay for a salaried employee: the weekly salary, unchanged.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_salaried_pay;
/// use payroll_engine::models::Salaried;
/// use rust_decimal::Decimal;
///
/// let pay = calculate_salaried_pay(&Salaried { weekly_salary: Decimal::from(1000) });
/// assert_eq!(pay.weekly_salary, Decimal::from(1000));
/// ```
pub fn calculate_salaried_pay(salaried: &Salaried) -> SalariedPay {
    SalariedPay {
        weekly_salary: salaried.weekly_salary,
    }
}
