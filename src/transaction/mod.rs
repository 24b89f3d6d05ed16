//! Transaction management for the spending tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the `NewTransaction` request payload
//! - Database functions for storing, listing, and deleting transactions
//! - The HTTP endpoints for the transaction resource

mod core;
mod create_transaction_endpoint;
mod delete_transaction_endpoint;
mod list_transactions_endpoint;

pub use core::{
    MAX_DESCRIPTION_LENGTH, NewTransaction, Transaction, create_transaction,
    create_transaction_table, delete_transaction, list_transactions, map_transaction_row,
};
pub use create_transaction_endpoint::create_transaction_endpoint;
pub use delete_transaction_endpoint::{delete_transaction_endpoint, preflight_endpoint};
pub use list_transactions_endpoint::list_transactions_endpoint;

#[cfg(test)]
pub use core::count_transactions;
