//! The demonstration roster printed by the `payroll-engine` binary.

use rust_decimal::Decimal;

use crate::models::Employee;
use crate::roster::Roster;

/// Builds the four-employee demonstration roster, one per compensation rule.
///
/// | Employee | NSS | Rule |
/// |---|---|---|
/// | Ana Pérez | 123 | Salaried, 1000 per week |
/// | López | 456 | Hourly, 100 per hour, 45 hours |
/// | Carlos Ramírez | 789 | Commission, 5% of 20000 |
/// | Luis Fernández | 321 | Base 800 plus 4% of 15000 |
pub fn sample_roster() -> Roster {
    let mut roster = Roster::new();

    roster.add(Employee::salaried("Ana", "Pérez", "123", Decimal::from(1000)));
    roster.add(Employee::hourly(
        "",
        "López",
        "456",
        Decimal::from(100),
        Decimal::from(45),
    ));
    roster.add(Employee::commission(
        "Carlos",
        "Ramírez",
        "789",
        Decimal::from(20000),
        Decimal::new(5, 2),
    ));
    roster.add(Employee::base_plus_commission(
        "Luis",
        "Fernández",
        "321",
        Decimal::from(15000),
        Decimal::new(4, 2),
        Decimal::from(800),
    ));

    roster
}
