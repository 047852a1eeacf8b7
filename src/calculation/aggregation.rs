//! Net salary aggregation by department and by position.
//!
//! Grouping keys are the raw field values: case-sensitive and untrimmed, so
//! `"Sales"` and `"sales "` form different groups. Totals saturate at the
//! decimal bounds like the per-employee calculation.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{Employee, EmployeeRecord, PayComponents, PayrollSummary};

use super::net_salary::net_salary_with;

fn aggregate_by<I, F>(records: I, components: &PayComponents, key: F) -> HashMap<String, Decimal>
where
    I: IntoIterator,
    I::Item: AsRef<EmployeeRecord>,
    F: Fn(&EmployeeRecord) -> &str,
{
    let mut totals: HashMap<String, Decimal> = HashMap::new();
    for item in records {
        let record = item.as_ref();
        let net = net_salary_with(record, components);
        let total = totals.entry(key(record).to_string()).or_insert(Decimal::ZERO);
        *total = total.saturating_add(net);
    }
    totals
}

/// Sums net salary per distinct department.
///
/// An empty input yields an empty map. Entry order is unspecified.
///
/// # Examples
///
/// ```
/// use payroll_core::calculation::aggregate_by_department;
/// use payroll_core::models::{EmployeeRecord, PayComponents};
/// use rust_decimal::Decimal;
///
/// let records = vec![
///     EmployeeRecord::new("A", "Engineer", "Eng", Decimal::from(1000), "2024-01-01"),
///     EmployeeRecord::new("B", "Manager", "Eng", Decimal::from(2000), "2024-01-01"),
/// ];
/// let totals = aggregate_by_department(&records, &PayComponents::standard());
/// assert_eq!(totals["Eng"], Decimal::from(4600));
/// ```
pub fn aggregate_by_department<I>(records: I, components: &PayComponents) -> HashMap<String, Decimal>
where
    I: IntoIterator,
    I::Item: AsRef<EmployeeRecord>,
{
    aggregate_by(records, components, |r| r.department.as_str())
}

/// Sums net salary per distinct position.
///
/// An empty input yields an empty map. Entry order is unspecified.
pub fn aggregate_by_position<I>(records: I, components: &PayComponents) -> HashMap<String, Decimal>
where
    I: IntoIterator,
    I::Item: AsRef<EmployeeRecord>,
{
    aggregate_by(records, components, |r| r.position.as_str())
}

/// Runs payroll over a set of stored employees.
///
/// Computes each employee's net salary together with the department and
/// position totals that feed the salary distribution charts.
pub fn process_payroll(employees: &[Employee], components: &PayComponents) -> PayrollSummary {
    let net_by_employee: BTreeMap<_, _> = employees
        .iter()
        .map(|e| (e.emp_id, net_salary_with(&e.record, components)))
        .collect();
    let by_department = aggregate_by_department(employees, components);
    let by_position = aggregate_by_position(employees, components);

    debug!(
        employees = employees.len(),
        departments = by_department.len(),
        positions = by_position.len(),
        "Payroll processed"
    );

    PayrollSummary {
        net_by_employee,
        by_department,
        by_position,
    }
}
