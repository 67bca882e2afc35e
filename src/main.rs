use tracing_subscriber::EnvFilter;

use payroll_engine::config::PayrollConfig;
use payroll_engine::error::PayrollResult;
use payroll_engine::report::WeeklyReport;
use payroll_engine::sample::sample_roster;

fn main() -> PayrollResult<()> {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let roster = sample_roster();
    let config = PayrollConfig::default();

    WeeklyReport::new(&roster, &config).print()
}
