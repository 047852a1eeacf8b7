//! Employee model and related types.
//!
//! This module defines the [`EmployeeRecord`] field set and the persisted
//! [`Employee`] that pairs those fields with a store-assigned identity.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

use super::PayComponents;

/// Identity assigned to an employee by the record store.
pub type EmployeeId = i64;

/// The mutable fields of an employee record.
///
/// Everything except identity lives here. `doj` is kept as entered and is
/// never used in any calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Full name.
    pub name: String,
    /// Job position (grouping key for position totals).
    pub position: String,
    /// Department (grouping key for department totals).
    pub department: String,
    /// Monthly basic salary.
    pub basic_salary: Decimal,
    /// Date of joining, `YYYY-MM-DD`, not checked for calendar correctness.
    pub doj: String,
    /// Overtime hours worked this month.
    #[serde(default)]
    pub overtime_hours: u32,
    /// Bank name.
    #[serde(default)]
    pub bank_name: String,
    /// Bank account number.
    #[serde(default)]
    pub bank_account_number: String,
    /// IFSC code of the bank branch.
    #[serde(default)]
    pub ifsc_code: String,
    /// Mobile number.
    #[serde(default)]
    pub mobile_number: String,
    /// Email address.
    #[serde(default)]
    pub email: String,
}

impl EmployeeRecord {
    /// Creates a record with no overtime and empty contact and bank details.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_core::models::EmployeeRecord;
    /// use rust_decimal::Decimal;
    ///
    /// let record = EmployeeRecord::new("Asha", "Engineer", "Eng", Decimal::from(17300), "2023-06-01");
    /// assert_eq!(record.overtime_hours, 0);
    /// assert!(record.email.is_empty());
    /// ```
    pub fn new(
        name: impl Into<String>,
        position: impl Into<String>,
        department: impl Into<String>,
        basic_salary: Decimal,
        doj: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            department: department.into(),
            basic_salary,
            doj: doj.into(),
            overtime_hours: 0,
            bank_name: String::new(),
            bank_account_number: String::new(),
            ifsc_code: String::new(),
            mobile_number: String::new(),
            email: String::new(),
        }
    }

    /// Checks the creation invariants.
    ///
    /// Name, position and department must be non-empty, the basic salary must
    /// not be negative, and no allowance or deduction in `components` may be
    /// negative. Contact and bank fields are free text and are not checked.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_core::models::{EmployeeRecord, PayComponents};
    /// use rust_decimal::Decimal;
    ///
    /// let record = EmployeeRecord::new("", "Engineer", "Eng", Decimal::ZERO, "2023-06-01");
    /// let err = record.validate(&PayComponents::standard()).unwrap_err();
    /// assert!(err.is_validation());
    /// ```
    pub fn validate(&self, components: &PayComponents) -> PayrollResult<()> {
        if self.name.is_empty() {
            return Err(PayrollError::validation("name", "Name cannot be empty"));
        }
        if self.position.is_empty() {
            return Err(PayrollError::validation(
                "position",
                "Position cannot be empty",
            ));
        }
        if self.department.is_empty() {
            return Err(PayrollError::validation(
                "department",
                "Department cannot be empty",
            ));
        }
        if self.basic_salary < Decimal::ZERO {
            return Err(PayrollError::validation(
                "basic_salary",
                "Basic salary cannot be negative",
            ));
        }
        components.validate()
    }
}

impl AsRef<EmployeeRecord> for EmployeeRecord {
    fn as_ref(&self) -> &EmployeeRecord {
        self
    }
}

/// An employee record as held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Store-assigned identity.
    pub emp_id: EmployeeId,
    /// The employee's fields.
    #[serde(flatten)]
    pub record: EmployeeRecord,
}

impl Employee {
    /// Pairs a record with its identity.
    pub fn new(emp_id: EmployeeId, record: EmployeeRecord) -> Self {
        Self { emp_id, record }
    }
}

impl AsRef<EmployeeRecord> for Employee {
    fn as_ref(&self) -> &EmployeeRecord {
        &self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record() -> EmployeeRecord {
        EmployeeRecord {
            name: "Asha Rao".to_string(),
            position: "Engineer".to_string(),
            department: "Eng".to_string(),
            basic_salary: Decimal::from(17300),
            doj: "2023-06-01".to_string(),
            overtime_hours: 10,
            bank_name: "State Bank".to_string(),
            bank_account_number: "001122334455".to_string(),
            ifsc_code: "SBIN0000123".to_string(),
            mobile_number: "+91 98765 43210".to_string(),
            email: "asha@example.com".to_string(),
        }
    }

    #[test]
    fn test_valid_record_passes() {
        let record = create_test_record();
        assert!(record.validate(&PayComponents::standard()).is_ok());
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let mut record = create_test_record();
        record.name.clear();

        match record.validate(&PayComponents::standard()) {
            Err(PayrollError::Validation { field, .. }) => assert_eq!(field, "name"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_position_is_rejected() {
        let mut record = create_test_record();
        record.position.clear();

        match record.validate(&PayComponents::standard()) {
            Err(PayrollError::Validation { field, .. }) => assert_eq!(field, "position"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_department_is_rejected() {
        let mut record = create_test_record();
        record.department.clear();

        match record.validate(&PayComponents::standard()) {
            Err(PayrollError::Validation { field, .. }) => assert_eq!(field, "department"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_whitespace_name_is_not_empty() {
        let mut record = create_test_record();
        record.name = " ".to_string();
        assert!(record.validate(&PayComponents::standard()).is_ok());
    }

    #[test]
    fn test_negative_salary_is_rejected() {
        let mut record = create_test_record();
        record.basic_salary = Decimal::from(-1);

        let err = record.validate(&PayComponents::standard()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid employee field 'basic_salary': Basic salary cannot be negative"
        );
    }

    #[test]
    fn test_zero_salary_is_accepted() {
        let mut record = create_test_record();
        record.basic_salary = Decimal::ZERO;
        assert!(record.validate(&PayComponents::standard()).is_ok());
    }

    #[test]
    fn test_negative_component_is_rejected() {
        let record = create_test_record();
        let mut components = PayComponents::standard();
        components.allowances[0].amount = Decimal::from(-1000);

        let err = record.validate(&components).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_free_text_fields_are_not_validated() {
        let mut record = create_test_record();
        record.doj = "2023-02-31".to_string();
        record.email = "not an email".to_string();
        record.mobile_number.clear();
        assert!(record.validate(&PayComponents::standard()).is_ok());
    }

    #[test]
    fn test_new_uses_defaults() {
        let record = EmployeeRecord::new("A", "B", "C", Decimal::from(100), "2024-01-01");
        assert_eq!(record.overtime_hours, 0);
        assert!(record.bank_name.is_empty());
        assert!(record.ifsc_code.is_empty());
    }

    #[test]
    fn test_deserialize_employee_with_flattened_record() {
        let json = r#"{
            "emp_id": 7,
            "name": "Asha Rao",
            "position": "Engineer",
            "department": "Eng",
            "basic_salary": "17300.50",
            "doj": "2023-06-01",
            "overtime_hours": 4
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.emp_id, 7);
        assert_eq!(employee.record.basic_salary, Decimal::new(1730050, 2));
        assert_eq!(employee.record.overtime_hours, 4);
        assert!(employee.record.bank_name.is_empty());
    }

    #[test]
    fn test_serialize_employee_is_flat() {
        let employee = Employee::new(3, create_test_record());
        let value = serde_json::to_value(&employee).unwrap();

        assert_eq!(value["emp_id"], 3);
        assert_eq!(value["name"], "Asha Rao");
        assert_eq!(value["basic_salary"], "17300");
        assert!(value.get("record").is_none());
    }

    #[test]
    fn test_as_ref_reaches_record() {
        let employee = Employee::new(1, create_test_record());
        let record: &EmployeeRecord = employee.as_ref();
        assert_eq!(record.department, "Eng");
    }
}
