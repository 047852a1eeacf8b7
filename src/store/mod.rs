//! Durable employee record storage.
//!
//! Records live in a single SQLite table. The store is an owned object
//! constructed once and passed by reference to its callers.
//!
//! # Example
//!
//! ```no_run
//! use payroll_core::store::{EmployeeStore, StoreOptions};
//!
//! let store = EmployeeStore::open("employee_payroll.db", StoreOptions::default())?;
//! for employee in store.fetch_all()? {
//!     println!("{}: {}", employee.emp_id, employee.record.name);
//! }
//! # Ok::<(), payroll_core::error::PayrollError>(())
//! ```

mod employee_store;
mod schema;
mod sql_decimal;

pub use employee_store::{EmployeeStore, StoreOptions, StoreOutcome};
pub use schema::{EMPLOYEES_TABLE, create_schema};
