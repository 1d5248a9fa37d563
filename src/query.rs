//! SQL query fixture
//!
//! Runs a query against a SQLite connection and materializes every row as a
//! vector of column strings. Column values use SQLite's own text conversion,
//! so `NULL` becomes an empty string and reals keep 15 significant digits.

use rusqlite::types::ValueRef;
use std::path::Path;

use rusqlite::{Connection, OpenFlags, Row};
use tracing::{debug, warn};

use crate::Result;

/// Rows of a result set, one string per column
pub type Rows = Vec<Vec<String>>;

/// Open an existing database file for reading and writing
///
/// Unlike [`Connection::open`], a missing file is an error rather than a
/// freshly created empty database.
///
/// # Errors
///
/// Returns [`crate::Error::Sqlite`] if the file does not exist or cannot be
/// opened.
pub fn open_database(path: impl AsRef<Path>) -> Result<Connection> {
    let path = path.as_ref();
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    debug!(path = %path.display(), "opened database");
    Ok(conn)
}

/// Execute `query` on `conn` and return all rows as strings
///
/// # Errors
///
/// Returns [`crate::Error::Sqlite`] if the statement cannot be prepared or a
/// step fails.
pub fn sqlite(conn: &Connection, query: &str) -> Result<Rows> {
    let mut stmt = conn.prepare(query)?;
    let col_count = stmt.column_count();
    let mut rows = stmt.query([])?;

    let mut results = Vec::new();
    while let Some(row) = rows.next()? {
        results.push(row_to_strings(row, col_count)?);
    }

    debug!(rows = results.len(), columns = col_count, "query complete");
    Ok(results)
}

/// Execute `query`, swallowing failures
///
/// A statement that fails to prepare yields no rows. A step failure stops
/// iteration and keeps the rows read so far.
pub fn sqlite_lenient(conn: &Connection, query: &str) -> Rows {
    let mut stmt = match conn.prepare(query) {
        Ok(stmt) => stmt,
        Err(e) => {
            warn!(error = %e, "prepare failed, returning no rows");
            return Vec::new();
        }
    };
    let col_count = stmt.column_count();

    let mut results = Vec::new();
    let mut rows = match stmt.query([]) {
        Ok(rows) => rows,
        Err(e) => {
            warn!(error = %e, "query failed, returning no rows");
            return results;
        }
    };
    loop {
        match rows.next() {
            Ok(Some(row)) => match row_to_strings(row, col_count) {
                Ok(values) => results.push(values),
                Err(e) => {
                    warn!(error = %e, "column read failed, stopping");
                    break;
                }
            },
            Ok(None) => break,
            Err(e) => {
                warn!(error = %e, "step failed, stopping");
                break;
            }
        }
    }
    results
}

fn row_to_strings(row: &Row<'_>, col_count: usize) -> Result<Vec<String>> {
    let mut values = Vec::with_capacity(col_count);
    for i in 0..col_count {
        values.push(value_text(row.get_ref(i)?));
    }
    Ok(values)
}

/// Text form of a column value, as SQLite's text conversion renders it
#[must_use]
pub fn value_text(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => String::new(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => format_real(f),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            String::from_utf8_lossy(bytes).into_owned()
        }
    }
}

/// Render a real with 15 significant digits, always keeping a decimal point
#[must_use]
pub fn format_real(value: f64) -> String {
    if value.is_nan() {
        return String::new();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Inf" } else { "-Inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    let sci = format!("{value:.14e}");
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if (-4..15).contains(&exp) {
        let precision = usize::try_from(14 - exp).unwrap_or(0);
        keep_point(trim_zeros(&format!("{value:.precision$}")))
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            keep_point(trim_zeros(mantissa)),
            exp.unsigned_abs()
        )
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0')
    } else {
        s
    }
}

fn keep_point(s: &str) -> String {
    if s.ends_with('.') {
        format!("{s}0")
    } else if s.contains('.') {
        s.to_string()
    } else {
        format!("{s}.0")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE pets (name TEXT, legs INTEGER, weight REAL, tag BLOB);
             INSERT INTO pets VALUES ('cat', 4, 4.5, NULL);
             INSERT INTO pets VALUES ('bird', 2, NULL, x'6869');",
        )
        .unwrap();
        conn
    }

    #[test]
    fn test_mixed_literals() {
        let conn = Connection::open_in_memory().unwrap();
        let rows = sqlite(&conn, "SELECT 1, NULL, 'x', 1.5").unwrap();
        assert_eq!(rows, vec![vec!["1", "", "x", "1.5"]]);
    }

    #[test]
    fn test_table_rows_in_order() {
        let rows = sqlite(&conn(), "SELECT name, legs, weight, tag FROM pets ORDER BY rowid").unwrap();
        assert_eq!(
            rows,
            vec![
                vec!["cat", "4", "4.5", ""],
                vec!["bird", "2", "", "hi"],
            ]
        );
    }

    #[test]
    fn test_empty_result() {
        let rows = sqlite(&conn(), "SELECT name FROM pets WHERE legs > 100").unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_prepare_error() {
        let result = sqlite(&conn(), "SELEC nonsense");
        assert!(matches!(result, Err(crate::Error::Sqlite(_))));
    }

    #[test]
    fn test_lenient_prepare_error_is_empty() {
        assert!(sqlite_lenient(&conn(), "SELEC nonsense").is_empty());
    }

    #[test]
    fn test_lenient_success() {
        let rows = sqlite_lenient(&conn(), "SELECT name FROM pets ORDER BY name");
        assert_eq!(rows, vec![vec!["bird"], vec!["cat"]]);
    }

    const OVERFLOW_ON_SECOND_ROW: &str =
        "SELECT 1 UNION ALL SELECT abs(-9223372036854775808)";

    #[test]
    fn test_step_error() {
        let result = sqlite(&conn(), OVERFLOW_ON_SECOND_ROW);
        match result {
            Err(crate::Error::Sqlite(e)) => assert!(e.to_string().contains("integer overflow")),
            other => panic!("expected sqlite error, got {other:?}"),
        }
    }

    #[test]
    fn test_lenient_step_error_keeps_earlier_rows() {
        assert_eq!(sqlite_lenient(&conn(), OVERFLOW_ON_SECOND_ROW), vec![vec!["1"]]);
    }

    #[test]
    fn test_open_database_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.db");
        assert!(matches!(open_database(&path), Err(crate::Error::Sqlite(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_open_database_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pets.db");
        Connection::open(&path)
            .unwrap()
            .execute_batch("CREATE TABLE pets (name TEXT); INSERT INTO pets VALUES ('cat');")
            .unwrap();
        let conn = open_database(&path).unwrap();
        assert_eq!(sqlite(&conn, "SELECT name FROM pets").unwrap(), vec![vec!["cat"]]);
    }

    #[test]
    fn test_format_real() {
        assert_eq!(format_real(1.5), "1.5");
        assert_eq!(format_real(3.0), "3.0");
        assert_eq!(format_real(-2.25), "-2.25");
        assert_eq!(format_real(0.1 + 0.2), "0.3");
        assert_eq!(format_real(1e20), "1.0e+20");
        assert_eq!(format_real(1.25e-7), "1.25e-07");
        assert_eq!(format_real(0.0), "0.0");
        assert_eq!(format_real(f64::INFINITY), "Inf");
    }

    #[test]
    fn test_real_column_matches_sqlite_cast() {
        let conn = Connection::open_in_memory().unwrap();
        for literal in ["123456.789", "-0.5", "10.0", "2.5 * 3"] {
            let sql = format!("SELECT {literal}, CAST({literal} AS TEXT)");
            let rows = sqlite(&conn, &sql).unwrap();
            assert_eq!(rows[0][0], rows[0][1], "literal {literal}");
        }
    }

    #[test]
    fn test_value_text_integer() {
        assert_eq!(value_text(ValueRef::Integer(-42)), "-42");
        assert_eq!(value_text(ValueRef::Null), "");
    }
}
