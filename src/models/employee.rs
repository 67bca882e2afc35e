//! Employee model and compensation variants.
//!
//! An [`Employee`] carries identifying fields shared by every worker and a
//! [`Compensation`] variant holding the attributes its pay rule needs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::calculate_pay;
use crate::config::{PayRules, PayrollConfig};
use crate::report::describe_pay;

use super::PayBreakdown;

/// Fixed weekly salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Salaried {
    /// The salary paid every week regardless of hours.
    pub weekly_salary: Decimal,
}

/// Hourly wage with overtime past the standard week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hourly {
    /// The rate paid per ordinary hour.
    pub hourly_rate: Decimal,
    /// The hours worked this week.
    pub hours_worked: Decimal,
}

/// Commission on gross sales, with no base salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commission {
    /// The gross sales made this week.
    pub gross_sales: Decimal,
    /// The commission as a fraction of sales (0.05 is 5%).
    pub commission_rate: Decimal,
}

/// Base salary plus a bonus on that base, plus commission on sales.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasePlusCommission {
    /// The sales and rate the commission part is computed from.
    pub commission: Commission,
    /// The weekly base salary.
    pub base_salary: Decimal,
}

/// The compensation rule an employee is paid under.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Compensation, Salaried};
/// use rust_decimal::Decimal;
///
/// let compensation = Compensation::Salaried(Salaried {
///     weekly_salary: Decimal::from(1000),
/// });
/// assert_eq!(compensation.kind(), "salaried");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Compensation {
    /// Fixed weekly salary.
    Salaried(Salaried),
    /// Hourly wage with overtime.
    Hourly(Hourly),
    /// Commission only.
    Commission(Commission),
    /// Base salary, bonus and commission.
    BasePlusCommission(BasePlusCommission),
}

impl Compensation {
    /// Returns the snake_case name of the variant, as used in serialized form.
    pub fn kind(&self) -> &'static str {
        match self {
            Compensation::Salaried(_) => "salaried",
            Compensation::Hourly(_) => "hourly",
            Compensation::Commission(_) => "commission",
            Compensation::BasePlusCommission(_) => "base_plus_commission",
        }
    }
}

/// An employee on the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// First name. May be empty.
    #[serde(default)]
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Social security number, the key the roster looks employees up by.
    pub nss: String,
    /// How this employee is paid.
    pub compensation: Compensation,
}

impl Employee {
    /// Creates an employee from its parts.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        nss: impl Into<String>,
        compensation: Compensation,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            nss: nss.into(),
            compensation,
        }
    }

    /// Creates a salaried employee.
    pub fn salaried(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        nss: impl Into<String>,
        weekly_salary: Decimal,
    ) -> Self {
        Self::new(
            first_name,
            last_name,
            nss,
            Compensation::Salaried(Salaried { weekly_salary }),
        )
    }

    /// Creates an hourly employee.
    pub fn hourly(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        nss: impl Into<String>,
        hourly_rate: Decimal,
        hours_worked: Decimal,
    ) -> Self {
        Self::new(
            first_name,
            last_name,
            nss,
            Compensation::Hourly(Hourly {
                hourly_rate,
                hours_worked,
            }),
        )
    }

    /// Creates a commission-only employee.
    pub fn commission(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        nss: impl Into<String>,
        gross_sales: Decimal,
        commission_rate: Decimal,
    ) -> Self {
        Self::new(
            first_name,
            last_name,
            nss,
            Compensation::Commission(Commission {
                gross_sales,
                commission_rate,
            }),
        )
    }

    /// Creates a salaried-plus-commission employee.
    pub fn base_plus_commission(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        nss: impl Into<String>,
        gross_sales: Decimal,
        commission_rate: Decimal,
        base_salary: Decimal,
    ) -> Self {
        Self::new(
            first_name,
            last_name,
            nss,
            Compensation::BasePlusCommission(BasePlusCommission {
                commission: Commission {
                    gross_sales,
                    commission_rate,
                },
                base_salary,
            }),
        )
    }

    /// Returns the first and last name joined by a single space.
    ///
    /// An empty first name still leaves the separating space in place.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Computes the pay breakdown for this week under the given rules.
    ///
    /// # Panics
    ///
    /// Panics if the pay rule's arithmetic overflows [`Decimal`].
    pub fn pay_breakdown(&self, rules: &PayRules) -> PayBreakdown {
        calculate_pay(&self.compensation, rules)
    }

    /// Computes the amount owed for this week under the given rules.
    ///
    /// # Panics
    ///
    /// Panics if the pay rule's arithmetic overflows [`Decimal`].
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::config::PayRules;
    /// use payroll_engine::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee::hourly("", "López", "456", Decimal::from(100), Decimal::from(45));
    /// assert_eq!(employee.compute_pay(&PayRules::default()), Decimal::from(4750));
    /// ```
    pub fn compute_pay(&self, rules: &PayRules) -> Decimal {
        self.pay_breakdown(rules).total()
    }

    /// Explains in one line how this week's pay was derived.
    ///
    /// # Panics
    ///
    /// Panics if the pay rule's arithmetic overflows [`Decimal`].
    pub fn describe_pay(&self, config: &PayrollConfig) -> String {
        describe_pay(&self.pay_breakdown(&config.rules), &config.format)
    }
}
