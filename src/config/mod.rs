//! Configuration for the payroll engine.
//!
//! Pay rule constants and report formatting options, with defaults matching
//! the standard weekly rules, optionally loaded from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll.yaml").unwrap();
//! println!("Currency symbol: {}", config.format().currency_symbol);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{FormatConfig, PayRules, PayrollConfig};
