//! Structured pay results.
//!
//! A [`PayBreakdown`] keeps every intermediate amount of a pay rule so the
//! report can explain the total without recomputing it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Pay for a salaried employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalariedPay {
    /// The weekly salary, which is also the total.
    pub weekly_salary: Decimal,
}

/// Pay for an hourly employee, split into ordinary and overtime parts.
///
/// # Example
///
/// ```
/// use payroll_engine::models::HourlyPay;
/// use rust_decimal::Decimal;
///
/// let pay = HourlyPay {
///     hourly_rate: Decimal::from(100),
///     hours_worked: Decimal::from(45),
///     regular_hours: Decimal::from(40),
///     overtime_hours: Decimal::from(5),
///     regular_pay: Decimal::from(4000),
///     overtime_pay: Decimal::from(750),
///     total: Decimal::from(4750),
/// };
/// assert!(pay.has_overtime());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyPay {
    /// The rate paid per ordinary hour.
    pub hourly_rate: Decimal,
    /// All hours worked this week.
    pub hours_worked: Decimal,
    /// Hours paid at the ordinary rate.
    pub regular_hours: Decimal,
    /// Hours paid at the overtime rate. Zero unless the week went past the threshold.
    pub overtime_hours: Decimal,
    /// Amount for the ordinary hours.
    pub regular_pay: Decimal,
    /// Amount for the overtime hours.
    pub overtime_pay: Decimal,
    /// Total owed.
    pub total: Decimal,
}

impl HourlyPay {
    /// Returns true if any hours were paid at the overtime rate.
    pub fn has_overtime(&self) -> bool {
        self.overtime_hours > Decimal::ZERO
    }
}

/// Pay for a commission-only employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionPay {
    /// The gross sales the commission was computed on.
    pub gross_sales: Decimal,
    /// The commission fraction applied.
    pub commission_rate: Decimal,
    /// Total owed (sales times rate).
    pub total: Decimal,
}

/// Pay for a salaried-plus-commission employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasePlusCommissionPay {
    /// The weekly base salary.
    pub base_salary: Decimal,
    /// The bonus paid on top of the base salary.
    pub bonus: Decimal,
    /// The commission part, computed exactly as for a commission-only employee.
    pub commission: CommissionPay,
    /// Total owed (commission + base + bonus).
    pub total: Decimal,
}

/// The result of applying an employee's pay rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PayBreakdown {
    /// Fixed weekly salary.
    Salaried(SalariedPay),
    /// Hourly wage with overtime.
    Hourly(HourlyPay),
    /// Commission only.
    Commission(CommissionPay),
    /// Base salary, bonus and commission.
    BasePlusCommission(BasePlusCommissionPay),
}

impl PayBreakdown {
    /// Returns the total amount owed.
    pub fn total(&self) -> Decimal {
        match self {
            PayBreakdown::Salaried(pay) => pay.weekly_salary,
            PayBreakdown::Hourly(pay) => pay.total,
            PayBreakdown::Commission(pay) => pay.total,
            PayBreakdown::BasePlusCommission(pay) => pay.total,
        }
    }
}
