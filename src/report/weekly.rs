//! Weekly payroll report generation.
//!
//! The report is a header line followed by one block per employee, in roster
//! order:
//!
//! ```text
//! --- Reporte Semanal de Nómina ---
//! Empleado: Ana Pérez | NSS: 123
//! Pago fijo semanal: $1000.00
//! -----------------------------
//! ```

use std::fmt;
use std::io::{self, Write};

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::PayrollConfig;
use crate::error::PayrollResult;
use crate::models::{Employee, PayBreakdown};
use crate::roster::Roster;

use super::describe_pay;

/// The first line of every report.
pub const REPORT_HEADER: &str = "--- Reporte Semanal de Nómina ---";

/// The line closing each employee block.
pub const BLOCK_SEPARATOR: &str = "-----------------------------";

/// One employee's line in the report, as data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// The employee's social security number.
    pub nss: String,
    /// The amount owed this week.
    pub pay: Decimal,
    /// How the amount was derived, in one line.
    pub description: String,
    /// The structured computation behind `pay`.
    pub breakdown: PayBreakdown,
}

impl ReportEntry {
    fn from_employee(employee: &Employee, config: &PayrollConfig) -> Self {
        let breakdown = employee.pay_breakdown(&config.rules);
        let description = describe_pay(&breakdown, &config.format);

        Self {
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            nss: employee.nss.clone(),
            pay: breakdown.total(),
            description,
            breakdown,
        }
    }
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Empleado: {} {} | NSS: {}",
            self.first_name, self.last_name, self.nss
        )?;
        writeln!(f, "{}", self.description)?;
        writeln!(f, "{}", BLOCK_SEPARATOR)
    }
}

/// A read-only view that renders the weekly report for a roster.
///
/// # Example
///
/// ```
/// use payroll_engine::config::PayrollConfig;
/// use payroll_engine::models::Employee;
/// use payroll_engine::report::WeeklyReport;
/// use payroll_engine::roster::Roster;
/// use rust_decimal::Decimal;
///
/// let mut roster = Roster::new();
/// roster.add(Employee::salaried("Ana", "Pérez", "123", Decimal::from(1000)));
///
/// let config = PayrollConfig::default();
/// let report = WeeklyReport::new(&roster, &config);
/// assert_eq!(
///     report.render(),
///     "--- Reporte Semanal de Nómina ---\n\
///      Empleado: Ana Pérez | NSS: 123\n\
///      Pago fijo semanal: $1000.00\n\
///      -----------------------------\n"
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WeeklyReport<'a> {
    roster: &'a Roster,
    config: &'a PayrollConfig,
}

impl<'a> WeeklyReport<'a> {
    /// Creates a report over `roster` using `config` for rules and formatting.
    pub fn new(roster: &'a Roster, config: &'a PayrollConfig) -> Self {
        Self { roster, config }
    }

    /// Computes one entry per employee, in roster order.
    pub fn entries(&self) -> Vec<ReportEntry> {
        self.roster
            .iter()
            .map(|employee| {
                let entry = ReportEntry::from_employee(employee, self.config);
                debug!(nss = %entry.nss, pay = %entry.pay, "Computed weekly pay");
                entry
            })
            .collect()
    }

    /// Sums the pay of every employee on the roster.
    pub fn total_pay(&self) -> Decimal {
        self.roster
            .iter()
            .map(|employee| employee.compute_pay(&self.config.rules))
            .sum()
    }

    /// Writes the report to `out`.
    ///
    /// # Panics
    ///
    /// Panics if an employee's pay overflows [`Decimal`].
    pub fn write_to<W: Write>(&self, out: &mut W) -> PayrollResult<()> {
        let entries = self.entries();

        writeln!(out, "{}", REPORT_HEADER)?;
        for entry in &entries {
            write!(out, "{}", entry)?;
        }
        out.flush()?;

        log_generated(&entries);
        Ok(())
    }

    /// Writes the report to standard output.
    pub fn print(&self) -> PayrollResult<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_to(&mut handle)
    }

    /// Renders the report to a string.
    ///
    /// Produces the same text as [`write_to`](Self::write_to) and logs the
    /// same summary. Formatting through `Display` does not log.
    ///
    /// # Panics
    ///
    /// Panics if an employee's pay overflows [`Decimal`].
    pub fn render(&self) -> String {
        let entries = self.entries();

        let mut rendered = format!("{}\n", REPORT_HEADER);
        for entry in &entries {
            rendered.push_str(&entry.to_string());
        }

        log_generated(&entries);
        rendered
    }
}

fn log_generated(entries: &[ReportEntry]) {
    let total: Decimal = entries.iter().map(|entry| entry.pay).sum();
    info!(
        employees = entries.len(),
        total_pay = %total,
        "Weekly payroll report generated"
    );
}

impl fmt::Display for WeeklyReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", REPORT_HEADER)?;
        for entry in self.entries() {
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn two_employee_roster() -> Roster {
        let mut roster = Roster::new();
        roster.add(Employee::salaried("Ana", "Pérez", "123", dec("1000")));
        roster.add(Employee::hourly("", "López", "456", dec("100"), dec("45")));
        roster
    }

    #[test]
    fn test_empty_roster_renders_header_only() {
        let roster = Roster::new();
        let config = PayrollConfig::default();
        let report = WeeklyReport::new(&roster, &config);

        assert_eq!(report.render(), format!("{}\n", REPORT_HEADER));
        assert!(report.entries().is_empty());
        assert_eq!(report.total_pay(), Decimal::ZERO);
    }

    #[test]
    fn test_blocks_follow_roster_order() {
        let roster = two_employee_roster();
        let config = PayrollConfig::default();
        let rendered = WeeklyReport::new(&roster, &config).render();

        let expected = "\
--- Reporte Semanal de Nómina ---
Empleado: Ana Pérez | NSS: 123
Pago fijo semanal: $1000.00
-----------------------------
Empleado:  López | NSS: 456
40h normales + 5h extra = $4750.00
-----------------------------
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_write_to_matches_render() {
        let roster = two_employee_roster();
        let config = PayrollConfig::default();
        let report = WeeklyReport::new(&roster, &config);

        let mut buffer = Vec::new();
        report.write_to(&mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), report.render());
    }

    #[test]
    fn test_display_matches_render() {
        let roster = two_employee_roster();
        let config = PayrollConfig::default();
        let report = WeeklyReport::new(&roster, &config);

        assert_eq!(report.to_string(), report.render());
    }

    #[test]
    fn test_render_logs_report_summary() {
        use std::sync::{Arc, Mutex};

        #[derive(Clone, Default)]
        struct Captured(Arc<Mutex<Vec<u8>>>);
        impl Write for Captured {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let roster = two_employee_roster();
        let config = PayrollConfig::default();
        tracing::subscriber::with_default(subscriber, || {
            WeeklyReport::new(&roster, &config).render();
        });

        let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("Weekly payroll report generated"));
        assert!(logs.contains("employees=2"));
        assert!(logs.contains("total_pay=5750"));
    }

    #[test]
    fn test_write_to_failing_sink_returns_error() {
        struct Closed;
        impl Write for Closed {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let roster = two_employee_roster();
        let config = PayrollConfig::default();
        let result = WeeklyReport::new(&roster, &config).write_to(&mut Closed);
        assert!(matches!(
            result,
            Err(crate::error::PayrollError::ReportWrite(_))
        ));
    }

    #[test]
    fn test_entries_carry_pay_and_description() {
        let roster = two_employee_roster();
        let config = PayrollConfig::default();
        let entries = WeeklyReport::new(&roster, &config).entries();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].nss, "123");
        assert_eq!(entries[0].pay, dec("1000"));
        assert_eq!(entries[1].nss, "456");
        assert_eq!(entries[1].pay, dec("4750"));
        assert_eq!(entries[1].description, "40h normales + 5h extra = $4750.00");
    }

    #[test]
    fn test_total_pay_sums_all_employees() {
        let roster = two_employee_roster();
        let config = PayrollConfig::default();
        assert_eq!(WeeklyReport::new(&roster, &config).total_pay(), dec("5750"));
    }

    #[test]
    fn test_entry_serializes_to_json() {
        let roster = two_employee_roster();
        let config = PayrollConfig::default();
        let entries = WeeklyReport::new(&roster, &config).entries();

        let json = serde_json::to_value(&entries[1]).unwrap();
        assert_eq!(json["nss"], "456");
        assert_eq!(json["first_name"], "");
        assert_eq!(json["breakdown"]["type"], "hourly");
        assert_eq!(json["breakdown"]["overtime_hours"], "5");
    }
}
