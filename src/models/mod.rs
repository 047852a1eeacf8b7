//! Core data models for the payroll core.
//!
//! This module contains the employee record, the pay components applied to
//! every employee, and the results of salary calculations.

mod employee;
mod pay_components;
mod payroll_summary;

pub use employee::{Employee, EmployeeId, EmployeeRecord};
pub use pay_components::{
    PayComponent, PayComponents, STANDARD_ALLOWANCES, STANDARD_DEDUCTIONS, standard_allowances,
    standard_deductions,
};
pub use payroll_summary::{PayrollSummary, SalaryBreakdown};
