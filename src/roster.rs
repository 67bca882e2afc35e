//! The roster: an insertion-ordered list of employees.
//!
//! Employees are looked up by social security number. Numbers are expected
//! to be unique but this is not checked; lookups return the first match in
//! insertion order.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Compensation, Employee};

/// A single field change applied to an employee by [`Roster::update_by_identifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeUpdate {
    /// Replace the first name.
    FirstName(String),
    /// Replace the last name.
    LastName(String),
    /// Replace the social security number.
    Nss(String),
    /// Set the weekly salary of a salaried employee.
    WeeklySalary(Decimal),
    /// Set the hourly rate of an hourly employee.
    HourlyRate(Decimal),
    /// Set the hours worked by an hourly employee.
    HoursWorked(Decimal),
    /// Set the gross sales of a commission or base-plus-commission employee.
    GrossSales(Decimal),
    /// Set the commission rate of a commission or base-plus-commission employee.
    CommissionRate(Decimal),
    /// Set the base salary of a base-plus-commission employee.
    BaseSalary(Decimal),
}

/// What [`Roster::update_by_identifier`] did.
///
/// Neither `NotFound` nor `NotApplicable` is an error; callers are free to
/// ignore the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The employee was found and the field changed.
    Applied,
    /// No employee has the given social security number. Nothing changed.
    NotFound,
    /// The employee's compensation has no such field. Nothing changed.
    NotApplicable,
}

/// Insertion-ordered collection of employees.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an employee. Always succeeds; duplicates are kept.
    pub fn add(&mut self, employee: Employee) {
        debug!(
            nss = %employee.nss,
            compensation = employee.compensation.kind(),
            "Employee added to roster"
        );
        self.employees.push(employee);
    }

    /// Applies `update` to the first employee whose social security number
    /// equals `nss`.
    ///
    /// If no employee matches, or the update names a field the employee's
    /// compensation does not have, the roster is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::Employee;
    /// use payroll_engine::roster::{EmployeeUpdate, Roster, UpdateOutcome};
    /// use rust_decimal::Decimal;
    ///
    /// let mut roster = Roster::new();
    /// roster.add(Employee::hourly("", "López", "456", Decimal::from(100), Decimal::from(45)));
    ///
    /// let outcome = roster.update_by_identifier("456", EmployeeUpdate::HoursWorked(Decimal::from(38)));
    /// assert_eq!(outcome, UpdateOutcome::Applied);
    ///
    /// let outcome = roster.update_by_identifier("999", EmployeeUpdate::HoursWorked(Decimal::from(10)));
    /// assert_eq!(outcome, UpdateOutcome::NotFound);
    /// ```
    pub fn update_by_identifier(&mut self, nss: &str, update: EmployeeUpdate) -> UpdateOutcome {
        let Some(employee) = self.find_by_identifier_mut(nss) else {
            debug!(nss = %nss, "No employee with this identifier, update skipped");
            return UpdateOutcome::NotFound;
        };

        let outcome = apply_update(employee, update);
        debug!(nss = %nss, outcome = ?outcome, "Employee update processed");
        outcome
    }

    /// Returns the first employee with the given social security number.
    pub fn find_by_identifier(&self, nss: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.nss == nss)
    }

    /// Returns mutable access to the first employee with the given social
    /// security number, for edits [`EmployeeUpdate`] does not cover.
    pub fn find_by_identifier_mut(&mut self, nss: &str) -> Option<&mut Employee> {
        self.employees.iter_mut().find(|e| e.nss == nss)
    }

    /// Iterates employees in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Employee> {
        self.employees.iter()
    }

    /// Returns the number of employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the roster has no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Employee;
    type IntoIter = std::slice::Iter<'a, Employee>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Employee> for Roster {
    fn from_iter<I: IntoIterator<Item = Employee>>(iter: I) -> Self {
        let mut roster = Roster::new();
        for employee in iter {
            roster.add(employee);
        }
        roster
    }
}

fn apply_update(employee: &mut Employee, update: EmployeeUpdate) -> UpdateOutcome {
    match (update, &mut employee.compensation) {
        (EmployeeUpdate::FirstName(name), _) => employee.first_name = name,
        (EmployeeUpdate::LastName(name), _) => employee.last_name = name,
        (EmployeeUpdate::Nss(nss), _) => employee.nss = nss,
        (EmployeeUpdate::WeeklySalary(value), Compensation::Salaried(s)) => s.weekly_salary = value,
        (EmployeeUpdate::HourlyRate(value), Compensation::Hourly(h)) => h.hourly_rate = value,
        (EmployeeUpdate::HoursWorked(value), Compensation::Hourly(h)) => h.hours_worked = value,
        (EmployeeUpdate::GrossSales(value), Compensation::Commission(c)) => c.gross_sales = value,
        (EmployeeUpdate::GrossSales(value), Compensation::BasePlusCommission(b)) => {
            b.commission.gross_sales = value
        }
        (EmployeeUpdate::CommissionRate(value), Compensation::Commission(c)) => {
            c.commission_rate = value
        }
        (EmployeeUpdate::CommissionRate(value), Compensation::BasePlusCommission(b)) => {
            b.commission.commission_rate = value
        }
        (EmployeeUpdate::BaseSalary(value), Compensation::BasePlusCommission(b)) => {
            b.base_salary = value
        }
        _ => return UpdateOutcome::NotApplicable,
    }
    UpdateOutcome::Applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PayRules;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample() -> Roster {
        let mut roster = Roster::new();
        roster.add(Employee::salaried("Ana", "Pérez", "123", dec("1000")));
        roster.add(Employee::hourly("", "López", "456", dec("100"), dec("45")));
        roster.add(Employee::commission("Carlos", "Ramírez", "789", dec("20000"), dec("0.05")));
        roster.add(Employee::base_plus_commission(
            "Luis",
            "Fernández",
            "321",
            dec("15000"),
            dec("0.04"),
            dec("800"),
        ));
        roster
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let roster = sample();
        let ids: Vec<&str> = roster.iter().map(|e| e.nss.as_str()).collect();
        assert_eq!(ids, vec!["123", "456", "789", "321"]);
        assert_eq!(roster.len(), 4);
        assert!(!roster.is_empty());
    }

    #[test]
    fn test_add_allows_duplicate_identifiers() {
        let mut roster = Roster::new();
        roster.add(Employee::salaried("Ana", "Pérez", "123", dec("1000")));
        roster.add(Employee::salaried("Otra", "Persona", "123", dec("500")));

        assert_eq!(roster.len(), 2);
        assert_eq!(roster.find_by_identifier("123").unwrap().first_name, "Ana");
    }

    #[test]
    fn test_update_changes_only_first_match() {
        let mut roster = Roster::new();
        roster.add(Employee::salaried("Ana", "Pérez", "123", dec("1000")));
        roster.add(Employee::salaried("Otra", "Persona", "123", dec("500")));

        let outcome = roster.update_by_identifier("123", EmployeeUpdate::WeeklySalary(dec("1200")));

        assert_eq!(outcome, UpdateOutcome::Applied);
        let pays: Vec<Decimal> = roster
            .iter()
            .map(|e| e.compute_pay(&PayRules::default()))
            .collect();
        assert_eq!(pays, vec![dec("1200"), dec("500")]);
    }

    #[test]
    fn test_update_missing_identifier_is_noop() {
        let mut roster = sample();
        let before = roster.clone();

        let outcome = roster.update_by_identifier("000", EmployeeUpdate::LastName("X".into()));

        assert_eq!(outcome, UpdateOutcome::NotFound);
        assert_eq!(roster, before);
    }

    #[test]
    fn test_update_field_missing_from_variant_is_noop() {
        let mut roster = sample();
        let before = roster.clone();

        let outcome = roster.update_by_identifier("123", EmployeeUpdate::HoursWorked(dec("50")));

        assert_eq!(outcome, UpdateOutcome::NotApplicable);
        assert_eq!(roster, before);
    }

    #[test]
    fn test_update_hours_changes_pay() {
        let mut roster = sample();
        roster.update_by_identifier("456", EmployeeUpdate::HoursWorked(dec("40")));

        let employee = roster.find_by_identifier("456").unwrap();
        assert_eq!(employee.compute_pay(&PayRules::default()), dec("4000"));
    }

    #[test]
    fn test_update_shared_commission_fields_on_base_plus_commission() {
        let mut roster = sample();
        roster.update_by_identifier("321", EmployeeUpdate::GrossSales(dec("10000")));
        roster.update_by_identifier("321", EmployeeUpdate::CommissionRate(dec("0.05")));
        roster.update_by_identifier("321", EmployeeUpdate::BaseSalary(dec("1000")));

        let employee = roster.find_by_identifier("321").unwrap();
        // 500 commission + 1000 base + 100 bonus
        assert_eq!(employee.compute_pay(&PayRules::default()), dec("1600"));
    }

    #[test]
    fn test_update_names_and_identifier() {
        let mut roster = sample();
        roster.update_by_identifier("456", EmployeeUpdate::FirstName("Jorge".into()));
        roster.update_by_identifier("456", EmployeeUpdate::Nss("654".into()));

        assert!(roster.find_by_identifier("456").is_none());
        let employee = roster.find_by_identifier("654").unwrap();
        assert_eq!(employee.display_name(), "Jorge López");
    }

    #[test]
    fn test_find_mut_allows_direct_edits() {
        let mut roster = sample();
        if let Some(employee) = roster.find_by_identifier_mut("789") {
            employee.last_name = "Ramírez Soto".to_string();
        }
        assert_eq!(
            roster.find_by_identifier("789").unwrap().last_name,
            "Ramírez Soto"
        );
    }

    #[test]
    fn test_from_iterator_preserves_order() {
        let roster: Roster = sample().iter().rev().cloned().collect();
        let ids: Vec<&str> = (&roster).into_iter().map(|e| e.nss.as_str()).collect();
        assert_eq!(ids, vec!["321", "789", "456", "123"]);
    }

    #[test]
    fn test_roster_serializes_as_list() {
        let roster = sample();
        let json = serde_json::to_value(&roster).unwrap();
        assert!(json.is_array());
        assert_eq!(json.as_array().unwrap().len(), 4);
    }
}
