//! Allowance and deduction components applied to every employee.
//!
//! Allowances and deductions are not stored per employee. Every employee
//! receives the same set, which defaults to [`PayComponents::standard`] and
//! can be replaced from configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// The allowances every employee receives unless configured otherwise.
pub const STANDARD_ALLOWANCES: [(&str, i64); 2] =
    [("Travel Allowance", 1000), ("Medical Allowance", 500)];

/// The deductions every employee pays unless configured otherwise.
pub const STANDARD_DEDUCTIONS: [(&str, i64); 2] = [("Tax", 500), ("Insurance", 200)];

/// A single named allowance or deduction amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayComponent {
    /// Display name (e.g., "Travel Allowance").
    pub name: String,
    /// The fixed amount per pay run.
    pub amount: Decimal,
}

impl PayComponent {
    /// Creates a named component.
    pub fn new(name: impl Into<String>, amount: Decimal) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

/// The allowances and deductions applied in the net salary calculation.
///
/// Entries keep their declaration order, which is the order they are printed
/// on payslips.
///
/// # Example
///
/// ```
/// use payroll_core::models::PayComponents;
/// use rust_decimal::Decimal;
///
/// let components = PayComponents::standard();
/// assert_eq!(components.total_allowances(), Decimal::from(1500));
/// assert_eq!(components.total_deductions(), Decimal::from(700));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayComponents {
    /// Amounts added to every employee's pay.
    pub allowances: Vec<PayComponent>,
    /// Amounts subtracted from every employee's pay.
    pub deductions: Vec<PayComponent>,
}

impl PayComponents {
    /// Returns the fixed allowance and deduction set.
    pub fn standard() -> Self {
        Self {
            allowances: standard_allowances(),
            deductions: standard_deductions(),
        }
    }

    /// Sum of all allowance amounts.
    pub fn total_allowances(&self) -> Decimal {
        saturating_total(&self.allowances)
    }

    /// Sum of all deduction amounts.
    pub fn total_deductions(&self) -> Decimal {
        saturating_total(&self.deductions)
    }

    /// Checks that no allowance or deduction is negative.
    ///
    /// The error names the first offending component.
    pub fn validate(&self) -> PayrollResult<()> {
        if let Some(allowance) = self.allowances.iter().find(|a| a.amount < Decimal::ZERO) {
            return Err(PayrollError::validation(
                "allowances",
                format!("Allowance '{}' cannot be negative", allowance.name),
            ));
        }
        if let Some(deduction) = self.deductions.iter().find(|d| d.amount < Decimal::ZERO) {
            return Err(PayrollError::validation(
                "deductions",
                format!("Deduction '{}' cannot be negative", deduction.name),
            ));
        }
        Ok(())
    }
}

impl Default for PayComponents {
    fn default() -> Self {
        Self::standard()
    }
}

fn saturating_total(components: &[PayComponent]) -> Decimal {
    components
        .iter()
        .fold(Decimal::ZERO, |total, c| total.saturating_add(c.amount))
}

/// The standard allowances as owned components.
pub fn standard_allowances() -> Vec<PayComponent> {
    STANDARD_ALLOWANCES
        .iter()
        .map(|(name, amount)| PayComponent::new(*name, Decimal::from(*amount)))
        .collect()
}

/// The standard deductions as owned components.
pub fn standard_deductions() -> Vec<PayComponent> {
    STANDARD_DEDUCTIONS
        .iter()
        .map(|(name, amount)| PayComponent::new(*name, Decimal::from(*amount)))
        .collect()
}
