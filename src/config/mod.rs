//! Configuration loading and management for the payroll core.
//!
//! This module loads the payroll configuration from a YAML file: where the
//! database lives, whether updates are validated, and which allowances and
//! deductions apply to every employee.
//!
//! # Example
//!
//! ```no_run
//! use payroll_core::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/payroll.yaml").unwrap();
//! println!("Database: {}", loader.config().database.path.display());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_DATABASE_PATH, DatabaseConfig, PayrollConfig};
