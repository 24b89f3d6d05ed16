//! Defines the core data model and database queries for transactions.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use crate::{Error, database_id::TransactionId};

/// The maximum number of characters allowed in a transaction description.
pub const MAX_DESCRIPTION_LENGTH: usize = 255;

// ============================================================================
// MODELS
// ============================================================================

/// A single expense record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction, assigned by the database on insert.
    pub id: TransactionId,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money spent in this transaction.
    pub amount: f64,
    /// The spending category the transaction belongs to, e.g. "Food".
    pub category: String,
    /// When the transaction happened, as the raw date text the client sent.
    ///
    /// Dates are stored verbatim and only parsed when aggregating for charts;
    /// rows whose date text cannot be parsed are skipped by the aggregation.
    pub date: String,
}

/// The fields needed to create a [Transaction].
///
/// This is the request payload for the create endpoint: deserialization fails
/// if any field is missing or the amount is not numeric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money spent in this transaction.
    pub amount: f64,
    /// The spending category the transaction belongs to.
    pub category: String,
    /// When the transaction happened.
    pub date: String,
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create a new transaction in the database.
///
/// # Errors
/// This function will return a:
/// - [Error::DescriptionTooLong] if the description is longer than
///   [MAX_DESCRIPTION_LENGTH] characters,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn create_transaction(
    new_transaction: NewTransaction,
    connection: &Connection,
) -> Result<Transaction, Error> {
    if new_transaction.description.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(Error::DescriptionTooLong);
    }

    let transaction = connection
        .prepare(
            "INSERT INTO \"transaction\" (description, amount, category, date)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING id, description, amount, category, date",
        )?
        .query_row(
            (
                new_transaction.description,
                new_transaction.amount,
                new_transaction.category,
                new_transaction.date,
            ),
            map_transaction_row,
        )?;

    Ok(transaction)
}

/// Retrieve every transaction in the database, in store order.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is a SQL error.
pub fn list_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare("SELECT id, description, amount, category, date FROM \"transaction\"")?
        .query_map([], map_transaction_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(Error::SqlError))
        .collect()
}

/// The number of rows removed by a delete statement.
pub type RowsAffected = usize;

/// Delete a transaction from the database by its `id`.
///
/// Returns the number of rows removed, which is zero when `id` does not refer
/// to a transaction.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is a SQL error.
pub fn delete_transaction(
    id: TransactionId,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    connection
        .execute(
            "DELETE FROM \"transaction\" WHERE id = :id",
            &[(":id", &id)],
        )
        .map_err(|error| error.into())
}

/// Get the total number of transactions in the database.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is some SQL error.
pub fn count_transactions(connection: &Connection) -> Result<u32, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM \"transaction\";", [], |row| {
            row.get(0)
        })
        .map_err(|error| error.into())
}

/// Create the transaction table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                description TEXT NOT NULL,
                amount REAL NOT NULL,
                category TEXT NOT NULL,
                date TEXT NOT NULL
                )",
        (),
    )?;

    // Ensure the sequence starts at 1
    connection.execute(
        "INSERT OR IGNORE INTO sqlite_sequence (name, seq) VALUES ('transaction', 0)",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let description = row.get(1)?;
    let amount = row.get(2)?;
    let category = row.get(3)?;
    let date = row.get(4)?;

    Ok(Transaction {
        id,
        description,
        amount,
        category,
        date,
    })
}

// ============================================================================
// TESTS
// ============================================================================
