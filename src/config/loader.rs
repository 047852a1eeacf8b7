//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the payroll
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{PayrollError, PayrollResult};
use crate::models::PayComponents;
use crate::store::EmployeeStore;

use super::types::PayrollConfig;

/// Loads and provides access to the payroll configuration.
///
/// # File Format
///
/// ```text
/// database:
///   path: employee_payroll.db
/// validate_on_update: false
/// allowances:
///   - { name: Travel Allowance, amount: "1000" }
///   - { name: Medical Allowance, amount: "500" }
/// deductions:
///   - { name: Tax, amount: "500" }
///   - { name: Insurance, amount: "200" }
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_core::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll.yaml")?;
/// let store = loader.open_store()?;
/// println!("{} employees", store.count()?);
/// # Ok::<(), payroll_core::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or unknown value types (`ConfigParseError`)
    /// - An allowance or deduction amount is negative (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::parse(&content, &path_str)?;
        info!(
            path = %path_str,
            database = %loader.config.database.path.display(),
            allowances = loader.config.allowances.len(),
            deductions = loader.config.deductions.len(),
            "Loaded payroll configuration"
        );
        Ok(loader)
    }

    /// Parses configuration from YAML text. `origin` names the source in errors.
    pub fn parse(content: &str, origin: &str) -> PayrollResult<Self> {
        let config: PayrollConfig =
            serde_yaml::from_str(content).map_err(|e| PayrollError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;
        Self::from_config(config)
    }

    /// Wraps an already-built configuration after checking it.
    pub fn from_config(config: PayrollConfig) -> PayrollResult<Self> {
        config
            .pay_components()
            .validate()
            .map_err(|e| PayrollError::InvalidConfig {
                message: match e {
                    PayrollError::Validation { message, .. } => message,
                    other => other.to_string(),
                },
            })?;
        Ok(Self { config })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the configured allowances and deductions.
    pub fn pay_components(&self) -> PayComponents {
        self.config.pay_components()
    }

    /// Opens the configured database with the configured store options.
    pub fn open_store(&self) -> PayrollResult<EmployeeStore> {
        EmployeeStore::open(&self.config.database.path, self.config.store_options())
    }
}
