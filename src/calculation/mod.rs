//! Calculation logic for the payroll core.
//!
//! This module contains the net salary formula, the overtime rate derived from
//! the standard monthly hour base, and the department and position
//! aggregations used for payroll charts. Every function here is pure.

mod aggregation;
mod net_salary;

pub use aggregation::{aggregate_by_department, aggregate_by_position, process_payroll};
pub use net_salary::{
    STANDARD_MONTHLY_HOURS, calculate_salary, hourly_rate, net_salary, net_salary_with,
    overtime_pay,
};
