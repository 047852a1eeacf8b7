//! Net salary calculation.
//!
//! Net salary is the basic salary plus overtime pay plus allowances, minus
//! deductions. Overtime is paid at an hourly rate of basic salary divided by
//! [`STANDARD_MONTHLY_HOURS`]. No rounding is applied here; callers round
//! only when presenting amounts.
//!
//! Arithmetic saturates at [`Decimal::MAX`] and [`Decimal::MIN`], so any
//! stored salary produces a result instead of a panic.

use rust_decimal::Decimal;

use crate::models::{EmployeeRecord, PayComponents, SalaryBreakdown};

/// Standard monthly hour base used to derive the overtime hourly rate.
pub const STANDARD_MONTHLY_HOURS: u32 = 173;

/// Returns the hourly rate for overtime: basic salary divided by 173.
pub fn hourly_rate(basic_salary: Decimal) -> Decimal {
    basic_salary / Decimal::from(STANDARD_MONTHLY_HOURS)
}

/// Returns overtime hours multiplied by the hourly rate.
///
/// # Examples
///
/// ```
/// use payroll_core::calculation::overtime_pay;
/// use payroll_core::models::EmployeeRecord;
/// use rust_decimal::Decimal;
///
/// let mut record = EmployeeRecord::new("Asha", "Engineer", "Eng", Decimal::from(17300), "2023-06-01");
/// record.overtime_hours = 10;
/// assert_eq!(overtime_pay(&record), Decimal::from(1000));
/// ```
pub fn overtime_pay(record: &EmployeeRecord) -> Decimal {
    Decimal::from(record.overtime_hours).saturating_mul(hourly_rate(record.basic_salary))
}

/// Calculates every term of an employee's net salary.
///
/// # Arguments
///
/// * `record` - The employee to calculate for
/// * `components` - The allowances and deductions to apply
///
/// # Returns
///
/// The breakdown of basic salary, overtime pay, allowance and deduction
/// totals, and the resulting net salary. The net salary may be negative
/// when deductions exceed earnings; it is not clamped. Terms that exceed the
/// decimal range saturate at the bound before the next term is applied.
pub fn calculate_salary(record: &EmployeeRecord, components: &PayComponents) -> SalaryBreakdown {
    let overtime_pay = overtime_pay(record);
    let total_allowances = components.total_allowances();
    let total_deductions = components.total_deductions();
    let net_salary = record
        .basic_salary
        .saturating_add(overtime_pay)
        .saturating_add(total_allowances)
        .saturating_sub(total_deductions);

    SalaryBreakdown {
        basic_salary: record.basic_salary,
        overtime_pay,
        total_allowances,
        total_deductions,
        net_salary,
    }
}

/// Calculates net salary with the given allowances and deductions.
pub fn net_salary_with(record: &EmployeeRecord, components: &PayComponents) -> Decimal {
    calculate_salary(record, components).net_salary
}

/// Calculates net salary with the standard allowances and deductions.
///
/// # Examples
///
/// ```
/// use payroll_core::calculation::net_salary;
/// use payroll_core::models::EmployeeRecord;
/// use rust_decimal::Decimal;
///
/// let mut record = EmployeeRecord::new("Asha", "Engineer", "Eng", Decimal::from(17300), "2023-06-01");
/// record.overtime_hours = 10;
///
/// // 17300 + 10 x (17300 / 173) + 1500 - 700
/// assert_eq!(net_salary(&record), Decimal::from(19100));
/// ```
pub fn net_salary(record: &EmployeeRecord) -> Decimal {
    net_salary_with(record, &PayComponents::standard())
}
