//! SQLite conversion for decimal amounts.

use std::str::FromStr;

use rusqlite::ToSql;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};
use rust_decimal::Decimal;

/// A [`Decimal`] bound to or read from a SQLite column.
///
/// Written as canonical text. Read from text, integer or real storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SqlDecimal(pub Decimal);

impl ToSql for SqlDecimal {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.0.to_string()))
    }
}

impl FromSql for SqlDecimal {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Text(bytes) => {
                let text = std::str::from_utf8(bytes).map_err(|e| FromSqlError::Other(Box::new(e)))?;
                Decimal::from_str(text.trim())
                    .map(SqlDecimal)
                    .map_err(|e| FromSqlError::Other(Box::new(e)))
            }
            ValueRef::Integer(i) => Ok(SqlDecimal(Decimal::from(i))),
            ValueRef::Real(f) => Decimal::try_from(f)
                .map(SqlDecimal)
                .map_err(|e| FromSqlError::Other(Box::new(e))),
            _ => Err(FromSqlError::InvalidType),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    fn read(conn: &Connection, sql: &str) -> rusqlite::Result<SqlDecimal> {
        conn.query_row(sql, [], |row| row.get(0))
    }

    #[test]
    fn test_reads_text() {
        let conn = Connection::open_in_memory().unwrap();
        let value = read(&conn, "SELECT '17300.50'").unwrap();
        assert_eq!(value.0, Decimal::new(1730050, 2));
    }

    #[test]
    fn test_reads_integer_and_real() {
        let conn = Connection::open_in_memory().unwrap();
        assert_eq!(read(&conn, "SELECT 42").unwrap().0, Decimal::from(42));
        assert_eq!(read(&conn, "SELECT 2500.5").unwrap().0, Decimal::new(25005, 1));
    }

    #[test]
    fn test_rejects_null_and_garbage() {
        let conn = Connection::open_in_memory().unwrap();
        assert!(read(&conn, "SELECT NULL").is_err());
        assert!(read(&conn, "SELECT 'twelve'").is_err());
    }

    #[test]
    fn test_writes_canonical_text() {
        let conn = Connection::open_in_memory().unwrap();
        let text: String = conn
            .query_row("SELECT ?1", [SqlDecimal(Decimal::new(1234500, 2))], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(text, "12345.00");
    }
}
