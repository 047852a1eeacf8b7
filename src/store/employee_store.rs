//! SQLite-backed employee record store.
//!
//! This module provides the [`EmployeeStore`] type, which owns one SQLite
//! connection for its whole lifetime and exposes create, fetch, update and
//! delete over the `employees` table.

use std::path::Path;

use rusqlite::{Connection, OptionalExtension, Row, params};
use tracing::{debug, info, warn};

use crate::error::PayrollResult;
use crate::models::{Employee, EmployeeId, EmployeeRecord, PayComponents};

use super::schema::{EMPLOYEE_COLUMNS, EMPLOYEES_TABLE, create_schema};
use super::sql_decimal::SqlDecimal;

/// Behaviour switches for an [`EmployeeStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreOptions {
    /// Run the creation invariants on update as well. Off by default, in
    /// which case update overwrites fields without checking them.
    pub validate_on_update: bool,
    /// Allowances and deductions checked by the non-negativity invariant.
    pub components: PayComponents,
}

/// Outcome of an update or delete against a single identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOutcome {
    /// A row matched and was changed.
    Applied,
    /// No row has the given identity; nothing changed.
    NotFound,
}

impl StoreOutcome {
    fn from_rows_affected(rows: usize) -> Self {
        if rows == 0 {
            Self::NotFound
        } else {
            Self::Applied
        }
    }

    /// Returns true if a row was changed.
    pub fn is_applied(self) -> bool {
        self == Self::Applied
    }
}

/// Durable store of employee records.
///
/// The store exclusively owns its connection; it is closed when the store is
/// dropped. Each mutating call is a single auto-committed statement.
///
/// # Example
///
/// ```
/// use payroll_core::models::EmployeeRecord;
/// use payroll_core::store::{EmployeeStore, StoreOptions};
/// use rust_decimal::Decimal;
///
/// let store = EmployeeStore::open_in_memory(StoreOptions::default())?;
/// let record = EmployeeRecord::new("Asha", "Engineer", "Eng", Decimal::from(17300), "2023-06-01");
///
/// let id = store.create(&record)?;
/// let employee = store.fetch_by_id(id)?.expect("just created");
/// assert_eq!(employee.record, record);
/// # Ok::<(), payroll_core::error::PayrollError>(())
/// ```
#[derive(Debug)]
pub struct EmployeeStore {
    conn: Connection,
    options: StoreOptions,
}

impl EmployeeStore {
    /// Opens (or creates) the database file at `path`.
    ///
    /// The employees table is created if it does not exist.
    pub fn open<P: AsRef<Path>>(path: P, options: StoreOptions) -> PayrollResult<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        info!(path = %path.display(), "Opened employee store");
        Self::with_connection(conn, options)
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory(options: StoreOptions) -> PayrollResult<Self> {
        Self::with_connection(Connection::open_in_memory()?, options)
    }

    fn with_connection(conn: Connection, options: StoreOptions) -> PayrollResult<Self> {
        create_schema(&conn)?;
        Ok(Self { conn, options })
    }

    /// Returns the options this store was opened with.
    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// Validates and inserts a new record, returning its generated identity.
    ///
    /// # Errors
    ///
    /// * `Validation` if name, position or department is empty, the basic
    ///   salary is negative, or a configured allowance or deduction is
    ///   negative. Nothing is written in that case.
    /// * `Storage` if the insert fails.
    pub fn create(&self, record: &EmployeeRecord) -> PayrollResult<EmployeeId> {
        if let Err(err) = record.validate(&self.options.components) {
            warn!(error = %err, "Rejected new employee");
            return Err(err);
        }

        self.conn.execute(
            &format!(
                "INSERT INTO {EMPLOYEES_TABLE} (name, position, department, basic_salary, doj,
                     overtime_hours, bank_name, bank_account_number, ifsc_code, mobile_number, email)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)"
            ),
            params![
                record.name,
                record.position,
                record.department,
                SqlDecimal(record.basic_salary),
                record.doj,
                record.overtime_hours,
                record.bank_name,
                record.bank_account_number,
                record.ifsc_code,
                record.mobile_number,
                record.email,
            ],
        )?;

        let emp_id = self.conn.last_insert_rowid();
        info!(emp_id, department = %record.department, "Employee created");
        Ok(emp_id)
    }

    /// Looks up one employee. A missing identity returns `Ok(None)`.
    pub fn fetch_by_id(&self, emp_id: EmployeeId) -> PayrollResult<Option<Employee>> {
        let employee = self
            .conn
            .query_row(
                &format!("SELECT {EMPLOYEE_COLUMNS} FROM {EMPLOYEES_TABLE} WHERE emp_id = ?1"),
                [emp_id],
                employee_from_row,
            )
            .optional()?;

        debug!(emp_id, found = employee.is_some(), "Fetched employee");
        Ok(employee)
    }

    /// Returns every employee in identity order. Empty when the store is empty.
    pub fn fetch_all(&self) -> PayrollResult<Vec<Employee>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM {EMPLOYEES_TABLE} ORDER BY emp_id"
        ))?;
        let employees = stmt
            .query_map([], employee_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = employees.len(), "Fetched all employees");
        Ok(employees)
    }

    /// Overwrites every field of an existing employee except its identity.
    ///
    /// Field contents are not validated unless the store was opened with
    /// [`StoreOptions::validate_on_update`].
    ///
    /// # Errors
    ///
    /// * `Validation` only when `validate_on_update` is set.
    /// * `Storage` if the update statement fails.
    pub fn update(
        &self,
        emp_id: EmployeeId,
        record: &EmployeeRecord,
    ) -> PayrollResult<StoreOutcome> {
        if self.options.validate_on_update {
            if let Err(err) = record.validate(&self.options.components) {
                warn!(emp_id, error = %err, "Rejected employee update");
                return Err(err);
            }
        }

        let rows = self.conn.execute(
            &format!(
                "UPDATE {EMPLOYEES_TABLE}
                 SET name = ?1, position = ?2, department = ?3, basic_salary = ?4, doj = ?5,
                     overtime_hours = ?6, bank_name = ?7, bank_account_number = ?8,
                     ifsc_code = ?9, mobile_number = ?10, email = ?11
                 WHERE emp_id = ?12"
            ),
            params![
                record.name,
                record.position,
                record.department,
                SqlDecimal(record.basic_salary),
                record.doj,
                record.overtime_hours,
                record.bank_name,
                record.bank_account_number,
                record.ifsc_code,
                record.mobile_number,
                record.email,
                emp_id,
            ],
        )?;

        let outcome = StoreOutcome::from_rows_affected(rows);
        match outcome {
            StoreOutcome::Applied => info!(emp_id, "Employee updated"),
            StoreOutcome::NotFound => warn!(emp_id, "Update matched no employee"),
        }
        Ok(outcome)
    }

    /// Removes an employee.
    pub fn delete_by_id(&self, emp_id: EmployeeId) -> PayrollResult<StoreOutcome> {
        let rows = self.conn.execute(
            &format!("DELETE FROM {EMPLOYEES_TABLE} WHERE emp_id = ?1"),
            [emp_id],
        )?;

        let outcome = StoreOutcome::from_rows_affected(rows);
        match outcome {
            StoreOutcome::Applied => info!(emp_id, "Employee deleted"),
            StoreOutcome::NotFound => warn!(emp_id, "Delete matched no employee"),
        }
        Ok(outcome)
    }

    /// Number of stored employees.
    pub fn count(&self) -> PayrollResult<usize> {
        let count: i64 = self.conn.query_row(
            &format!("SELECT COUNT(*) FROM {EMPLOYEES_TABLE}"),
            [],
            |row| row.get(0),
        )?;
        let count = usize::try_from(count)
            .map_err(|_| rusqlite::Error::IntegralValueOutOfRange(0, count))?;
        Ok(count)
    }
}

fn employee_from_row(row: &Row<'_>) -> rusqlite::Result<Employee> {
    let SqlDecimal(basic_salary) = row.get("basic_salary")?;
    Ok(Employee {
        emp_id: row.get("emp_id")?,
        record: EmployeeRecord {
            name: row.get("name")?,
            position: row.get("position")?,
            department: row.get("department")?,
            basic_salary,
            doj: row.get("doj")?,
            overtime_hours: row.get("overtime_hours")?,
            bank_name: row.get("bank_name")?,
            bank_account_number: row.get("bank_account_number")?,
            ifsc_code: row.get("ifsc_code")?,
            mobile_number: row.get("mobile_number")?,
            email: row.get("email")?,
        },
    })
}

impl From<PayComponents> for StoreOptions {
    fn from(components: PayComponents) -> Self {
        Self {
            validate_on_update: false,
            components,
        }
    }
}
