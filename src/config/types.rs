//! Configuration types for pay calculation and report rendering.
//!
//! These are deserialized from YAML. Every field has a default, so a file
//! only needs to name the values it changes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{BASE_SALARY_BONUS_RATE, OVERTIME_MULTIPLIER, STANDARD_WEEK_HOURS};

/// The constants the pay rules are parameterised by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayRules {
    /// Hours per week paid at the ordinary rate. Hours past this are overtime.
    pub standard_week_hours: Decimal,
    /// Multiplier applied to the hourly rate for overtime hours.
    pub overtime_multiplier: Decimal,
    /// Fraction of the base salary paid as a bonus to salaried-plus-commission employees.
    pub base_salary_bonus_rate: Decimal,
}

impl Default for PayRules {
    fn default() -> Self {
        Self {
            standard_week_hours: STANDARD_WEEK_HOURS,
            overtime_multiplier: OVERTIME_MULTIPLIER,
            base_salary_bonus_rate: BASE_SALARY_BONUS_RATE,
        }
    }
}

/// How amounts, rates and hours are rendered in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Symbol placed before currency amounts.
    pub currency_symbol: String,
    /// Separator between groups of three integer digits. Empty disables grouping.
    pub thousands_separator: String,
    /// Separator between the integer and fractional parts.
    pub decimal_separator: String,
    /// Fractional digits shown for currency amounts.
    pub currency_decimal_places: u32,
    /// Fractional digits shown for percentages.
    pub percent_decimal_places: u32,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            thousands_separator: String::new(),
            decimal_separator: ".".to_string(),
            currency_decimal_places: 2,
            percent_decimal_places: 2,
        }
    }
}

/// The complete payroll configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayrollConfig {
    /// Pay rule constants.
    pub rules: PayRules,
    /// Report rendering options.
    pub format: FormatConfig,
}
