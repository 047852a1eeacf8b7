//! Payroll run result models.
//!
//! This module contains the [`SalaryBreakdown`] produced for one employee and
//! the [`PayrollSummary`] produced for a whole record set. Both serialize to
//! JSON for the charting and document collaborators.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::EmployeeId;

/// The individual terms of one employee's net salary.
///
/// # Example
///
/// ```
/// use payroll_core::models::SalaryBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = SalaryBreakdown {
///     basic_salary: Decimal::from(17300),
///     overtime_pay: Decimal::from(1000),
///     total_allowances: Decimal::from(1500),
///     total_deductions: Decimal::from(700),
///     net_salary: Decimal::from(19100),
/// };
/// assert_eq!(breakdown.gross_pay(), Decimal::from(19800));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Monthly basic salary.
    pub basic_salary: Decimal,
    /// Overtime hours multiplied by the hourly rate.
    pub overtime_pay: Decimal,
    /// Sum of all allowances.
    pub total_allowances: Decimal,
    /// Sum of all deductions.
    pub total_deductions: Decimal,
    /// Basic salary plus overtime and allowances, minus deductions.
    pub net_salary: Decimal,
}

impl SalaryBreakdown {
    /// Earnings before deductions.
    pub fn gross_pay(&self) -> Decimal {
        self.basic_salary
            .saturating_add(self.overtime_pay)
            .saturating_add(self.total_allowances)
    }
}

/// The result of a payroll run over a set of employees.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PayrollSummary {
    /// Net salary per employee identity.
    pub net_by_employee: BTreeMap<EmployeeId, Decimal>,
    /// Total net salary per department.
    pub by_department: HashMap<String, Decimal>,
    /// Total net salary per position.
    pub by_position: HashMap<String, Decimal>,
}

impl PayrollSummary {
    /// Number of employees included in the run.
    pub fn employee_count(&self) -> usize {
        self.net_by_employee.len()
    }

    /// Sum of every employee's net salary, saturating at the decimal bounds.
    pub fn total_net_salary(&self) -> Decimal {
        self.net_by_employee
            .values()
            .fold(Decimal::ZERO, |total, net| total.saturating_add(*net))
    }

    /// Department totals sorted by department name, for stable chart axes.
    pub fn departments_sorted(&self) -> Vec<(&str, Decimal)> {
        sorted_entries(&self.by_department)
    }

    /// Position totals sorted by position name, for stable chart axes.
    pub fn positions_sorted(&self) -> Vec<(&str, Decimal)> {
        sorted_entries(&self.by_position)
    }

    /// Serializes the summary for the charting collaborator.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn sorted_entries(totals: &HashMap<String, Decimal>) -> Vec<(&str, Decimal)> {
    let mut entries: Vec<(&str, Decimal)> = totals
        .iter()
        .map(|(key, total)| (key.as_str(), *total))
        .collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_summary() -> PayrollSummary {
        let mut summary = PayrollSummary::default();
        summary.net_by_employee.insert(2, Decimal::from(900));
        summary.net_by_employee.insert(1, Decimal::from(1100));
        summary
            .by_department
            .insert("Sales".to_string(), Decimal::from(900));
        summary
            .by_department
            .insert("Eng".to_string(), Decimal::from(1100));
        summary
            .by_position
            .insert("Engineer".to_string(), Decimal::from(2000));
        summary
    }

    #[test]
    fn test_empty_summary() {
        let summary = PayrollSummary::default();
        assert_eq!(summary.employee_count(), 0);
        assert_eq!(summary.total_net_salary(), Decimal::ZERO);
        assert!(summary.departments_sorted().is_empty());
    }

    #[test]
    fn test_totals() {
        let summary = create_test_summary();
        assert_eq!(summary.employee_count(), 2);
        assert_eq!(summary.total_net_salary(), Decimal::from(2000));
    }

    #[test]
    fn test_sorted_entries() {
        let summary = create_test_summary();
        assert_eq!(
            summary.departments_sorted(),
            vec![("Eng", Decimal::from(1100)), ("Sales", Decimal::from(900))]
        );
        assert_eq!(
            summary.positions_sorted(),
            vec![("Engineer", Decimal::from(2000))]
        );
    }

    #[test]
    fn test_serialize_summary_for_chart() {
        let summary = create_test_summary();
        let value = serde_json::to_value(&summary).unwrap();

        assert_eq!(value["by_department"]["Eng"], "1100");
        assert_eq!(value["net_by_employee"]["1"], "1100");
    }

    #[test]
    fn test_to_json_round_trips() {
        let summary = create_test_summary();
        let json = summary.to_json().unwrap();
        let parsed: PayrollSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, summary);
    }

    #[test]
    fn test_breakdown_gross_pay_excludes_deductions() {
        let breakdown = SalaryBreakdown {
            basic_salary: Decimal::from(1000),
            overtime_pay: Decimal::ZERO,
            total_allowances: Decimal::from(1500),
            total_deductions: Decimal::from(700),
            net_salary: Decimal::from(1800),
        };
        assert_eq!(breakdown.gross_pay(), Decimal::from(2500));
    }
}
