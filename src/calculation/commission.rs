//! Commission-only pay calculation.

use crate::models::{Commission, CommissionPay};

/// Calculates commission pay: gross sales × commission rate.
///
/// This is also the commission part of a salaried-plus-commission
/// employee's pay.
///
/// # Panics
///
/// Panics if sales × rate overflows [`Decimal`](rust_decimal::Decimal).
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_commission_pay;
/// use payroll_engine::models::Commission;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let pay = calculate_commission_pay(&Commission {
///     gross_sales: Decimal::from(20000),
///     commission_rate: Decimal::from_str("0.05").unwrap(),
/// });
/// assert_eq!(pay.total, Decimal::from(1000));
/// ```
pub fn calculate_commission_pay(commission: &Commission) -> CommissionPay {
    CommissionPay {
        gross_sales: commission.gross_sales,
        commission_rate: commission.commission_rate,
        total: commission.gross_sales * commission.commission_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_five_percent_of_20000() {
        let pay = calculate_commission_pay(&Commission {
            gross_sales: dec("20000"),
            commission_rate: dec("0.05"),
        });
        assert_eq!(pay.total, dec("1000.00"));
        assert_eq!(pay.gross_sales, dec("20000"));
        assert_eq!(pay.commission_rate, dec("0.05"));
    }

    #[test]
    fn test_zero_sales_pays_nothing() {
        let pay = calculate_commission_pay(&Commission {
            gross_sales: Decimal::ZERO,
            commission_rate: dec("0.05"),
        });
        assert_eq!(pay.total, Decimal::ZERO);
    }

    #[test]
    fn test_rate_is_exact_decimal() {
        // 0.1 × 3 has no binary rounding error
        let pay = calculate_commission_pay(&Commission {
            gross_sales: dec("0.30"),
            commission_rate: dec("0.1"),
        });
        assert_eq!(pay.total, dec("0.03"));
    }

    #[test]
    #[should_panic(expected = "overflowed")]
    fn test_overflowing_sales_panics() {
        calculate_commission_pay(&Commission {
            gross_sales: Decimal::MAX,
            commission_rate: dec("2"),
        });
    }
}
