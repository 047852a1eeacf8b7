//! Text blocks for employee details, listings and payslips.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::calculation::calculate_salary;
use crate::models::{Employee, PayComponent, PayComponents};

/// Date format used in payslip headers.
pub const PAYSLIP_DATE_FORMAT: &str = "%Y-%m-%d";

/// Line written after each employee in a listing.
pub const LISTING_SEPARATOR: &str = "=======================================";

/// Formats an amount for display, rounded half away from zero to two decimal places.
///
/// # Examples
///
/// ```
/// use payroll_core::report::format_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_amount(Decimal::from(19100)), "19100.00");
/// assert_eq!(format_amount(Decimal::new(578034, 4)), "57.80");
/// ```
pub fn format_amount(amount: Decimal) -> String {
    format!(
        "{:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

fn push_field_block(out: &mut String, employee: &Employee) {
    let record = &employee.record;
    let fields = [
        ("Employee ID", employee.emp_id.to_string()),
        ("Name", record.name.clone()),
        ("Position", record.position.clone()),
        ("Department", record.department.clone()),
        ("Basic Salary", format_amount(record.basic_salary)),
        ("Date of Joining", record.doj.clone()),
        ("Overtime Hours", record.overtime_hours.to_string()),
        ("Bank Name", record.bank_name.clone()),
        ("Bank Account Number", record.bank_account_number.clone()),
        ("IFSC Code", record.ifsc_code.clone()),
        ("Mobile Number", record.mobile_number.clone()),
        ("Email", record.email.clone()),
    ];
    for (label, value) in fields {
        out.push_str(&format!("{}: {}\n", label, value));
    }
}

fn push_components(out: &mut String, heading: &str, components: &[PayComponent]) {
    out.push_str(heading);
    out.push_str(":\n");
    for component in components {
        out.push_str(&format!(
            "  {}: {}\n",
            component.name,
            format_amount(component.amount)
        ));
    }
}

/// Formats one employee's fields followed by their allowances and deductions.
pub fn format_employee_details(employee: &Employee, components: &PayComponents) -> String {
    let mut out = String::new();
    push_field_block(&mut out, employee);
    push_components(&mut out, "Allowances", &components.allowances);
    push_components(&mut out, "Deductions", &components.deductions);
    out
}

/// Formats every employee's fields, each followed by a separator line.
///
/// An empty slice yields an empty string.
pub fn format_employee_listing(employees: &[Employee]) -> String {
    let mut out = String::new();
    for employee in employees {
        push_field_block(&mut out, employee);
        out.push_str(LISTING_SEPARATOR);
        out.push('\n');
    }
    out
}

/// Formats a payslip for one employee as of `date`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use payroll_core::models::{Employee, EmployeeRecord, PayComponents};
/// use payroll_core::report::format_payslip;
/// use rust_decimal::Decimal;
///
/// let mut record = EmployeeRecord::new("Asha", "Engineer", "Eng", Decimal::from(17300), "2023-06-01");
/// record.overtime_hours = 10;
/// let employee = Employee::new(1, record);
///
/// let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
/// let payslip = format_payslip(&employee, &PayComponents::standard(), date);
///
/// assert!(payslip.starts_with("Pay Slip - 2026-10-19\n"));
/// assert!(payslip.ends_with("\nNet Salary: 19100.00"));
/// ```
pub fn format_payslip(employee: &Employee, components: &PayComponents, date: NaiveDate) -> String {
    let breakdown = calculate_salary(&employee.record, components);

    let mut out = format!("Pay Slip - {}\n", date.format(PAYSLIP_DATE_FORMAT));
    out.push_str(&format_employee_details(employee, components));
    out.push_str(&format!(
        "\nNet Salary: {}",
        format_amount(breakdown.net_salary)
    ));
    out
}
