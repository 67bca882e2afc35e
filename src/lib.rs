//! Weekly Payroll Engine
//!
//! This crate computes weekly pay for a roster of employees under four
//! compensation rules (salaried, hourly with overtime, commission-only and
//! salaried-plus-commission) and renders a per-employee pay report.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod roster;
pub mod sample;
