//! One-line explanations of how each pay amount was derived.

use crate::config::FormatConfig;
use crate::models::{BasePlusCommissionPay, CommissionPay, HourlyPay, PayBreakdown};

use super::format::{format_currency, format_hours, format_percent};

/// Describes a pay breakdown in one line.
///
/// | Variant | Line |
/// |---|---|
/// | Salaried | `Pago fijo semanal: $1000.00` |
/// | Hourly, no overtime | `37.5 horas a $20.00/hora = $750.00` |
/// | Hourly, overtime | `40h normales + 5h extra = $4750.00` |
/// | Commission | `Comisión de 5.00% sobre $20000.00 = $1000.00` |
/// | Base plus commission | `Base: $800.00 + Bono: $80.00 + Comisión: $600.00 = $1480.00` |
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_pay;
/// use payroll_engine::config::{FormatConfig, PayRules};
/// use payroll_engine::models::{Compensation, Salaried};
/// use payroll_engine::report::describe_pay;
/// use rust_decimal::Decimal;
///
/// let breakdown = calculate_pay(
///     &Compensation::Salaried(Salaried { weekly_salary: Decimal::from(1000) }),
///     &PayRules::default(),
/// );
/// assert_eq!(
///     describe_pay(&breakdown, &FormatConfig::default()),
///     "Pago fijo semanal: $1000.00"
/// );
/// ```
pub fn describe_pay(breakdown: &PayBreakdown, format: &FormatConfig) -> String {
    match breakdown {
        PayBreakdown::Salaried(pay) => format!(
            "Pago fijo semanal: {}",
            format_currency(pay.weekly_salary, format)
        ),
        PayBreakdown::Hourly(pay) => describe_hourly(pay, format),
        PayBreakdown::Commission(pay) => describe_commission(pay, format),
        PayBreakdown::BasePlusCommission(pay) => describe_base_plus_commission(pay, format),
    }
}

fn describe_hourly(pay: &HourlyPay, format: &FormatConfig) -> String {
    if pay.has_overtime() {
        format!(
            "{}h normales + {}h extra = {}",
            format_hours(pay.regular_hours, format),
            format_hours(pay.overtime_hours, format),
            format_currency(pay.total, format)
        )
    } else {
        format!(
            "{} horas a {}/hora = {}",
            format_hours(pay.hours_worked, format),
            format_currency(pay.hourly_rate, format),
            format_currency(pay.total, format)
        )
    }
}

fn describe_commission(pay: &CommissionPay, format: &FormatConfig) -> String {
    format!(
        "Comisión de {} sobre {} = {}",
        format_percent(pay.commission_rate, format),
        format_currency(pay.gross_sales, format),
        format_currency(pay.total, format)
    )
}

fn describe_base_plus_commission(pay: &BasePlusCommissionPay, format: &FormatConfig) -> String {
    format!(
        "Base: {} + Bono: {} + Comisión: {} = {}",
        format_currency(pay.base_salary, format),
        format_currency(pay.bonus, format),
        format_currency(pay.commission.total, format),
        format_currency(pay.total, format)
    )
}
