//! Core data models for the payroll engine.
//!
//! This module contains the employee records and the structured pay results
//! computed from them.

mod employee;
mod pay_breakdown;

pub use employee::{BasePlusCommission, Commission, Compensation, Employee, Hourly, Salaried};
pub use pay_breakdown::{
    BasePlusCommissionPay, CommissionPay, HourlyPay, PayBreakdown, SalariedPay,
};
