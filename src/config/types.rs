//! Configuration types for the payroll core.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file.

use std::path::PathBuf;

use serde::Deserialize;

use crate::models::{PayComponent, PayComponents, standard_allowances, standard_deductions};
use crate::store::StoreOptions;

/// Default database file name, relative to the working directory.
pub const DEFAULT_DATABASE_PATH: &str = "employee_payroll.db";

/// Database settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
        }
    }
}

fn default_database_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATABASE_PATH)
}

/// The complete payroll configuration.
///
/// Every section is optional. Missing allowances and deductions fall back to
/// the standard set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PayrollConfig {
    /// Database settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Apply the creation invariants to updates too.
    #[serde(default)]
    pub validate_on_update: bool,
    /// Allowances added to every employee's pay.
    #[serde(default = "standard_allowances")]
    pub allowances: Vec<PayComponent>,
    /// Deductions subtracted from every employee's pay.
    #[serde(default = "standard_deductions")]
    pub deductions: Vec<PayComponent>,
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            validate_on_update: false,
            allowances: standard_allowances(),
            deductions: standard_deductions(),
        }
    }
}

impl PayrollConfig {
    /// Returns the configured allowances and deductions.
    pub fn pay_components(&self) -> PayComponents {
        PayComponents {
            allowances: self.allowances.clone(),
            deductions: self.deductions.clone(),
        }
    }

    /// Returns the store options described by this configuration.
    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            validate_on_update: self.validate_on_update,
            components: self.pay_components(),
        }
    }
}
