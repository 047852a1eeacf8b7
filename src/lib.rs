//! Employee payroll core.
//!
//! This crate provides a SQLite-backed store for employee records, the
//! fixed-formula net salary calculation, department and position aggregation
//! of payroll totals, and the text blocks used for payslips and listings.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod store;
