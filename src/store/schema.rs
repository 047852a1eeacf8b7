//! Table definition for the employee record store.

use rusqlite::Connection;

/// Name of the employees table.
pub const EMPLOYEES_TABLE: &str = "employees";

/// Column list shared by every SELECT, in table order.
pub(crate) const EMPLOYEE_COLUMNS: &str = "emp_id, name, position, department, basic_salary, doj, \
     overtime_hours, bank_name, bank_account_number, ifsc_code, mobile_number, email";

/// Creates the employees table if it does not already exist.
///
/// `basic_salary` holds the decimal's canonical text so amounts survive
/// storage without binary floating-point loss. Tables created by older
/// tools with a REAL column are still readable.
pub fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(&format!(
        "CREATE TABLE IF NOT EXISTS {EMPLOYEES_TABLE} (
            emp_id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            position TEXT NOT NULL,
            department TEXT NOT NULL,
            basic_salary TEXT NOT NULL,
            doj TEXT NOT NULL,
            overtime_hours INTEGER NOT NULL,
            bank_name TEXT NOT NULL,
            bank_account_number TEXT NOT NULL,
            ifsc_code TEXT NOT NULL,
            mobile_number TEXT NOT NULL,
            email TEXT NOT NULL
        );"
    ))
}
