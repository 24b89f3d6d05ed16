//! Database initialization for the application's SQLite schema.

use rusqlite::{Connection, Transaction as SqlTransaction};

use crate::{Error, transaction::create_transaction_table};

/// Create the application's tables if they do not already exist.
///
/// The tables are created inside an exclusive transaction so that two
/// processes pointed at the same database file cannot interleave the schema
/// statements.
///
/// # Errors
/// Returns an [Error::SqlError] if a table could not be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction =
        SqlTransaction::new_unchecked(connection, rusqlite::TransactionBehavior::Exclusive)?;

    create_transaction_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use super::initialize;

    #[test]
    fn initialize_creates_transaction_table() {
        let conn = Connection::open_in_memory().unwrap();

        initialize(&conn).unwrap();

        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'transaction'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn initialize_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();

        initialize(&conn).unwrap();
        initialize(&conn).unwrap();
    }
}
