//! Implements a struct that holds the state of the REST server.

use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
};

use rusqlite::Connection;

use crate::{Error, db::initialize};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The database connection.
    pub db_connection: Arc<Mutex<Connection>>,

    /// The directory that chart artifacts are written to and served from.
    pub plot_dir: PathBuf,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the table for the
    /// transaction model. The connection is owned by the state for the
    /// lifetime of the process and shared between request handlers.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(db_connection: Connection, plot_dir: PathBuf) -> Result<Self, Error> {
        initialize(&db_connection)?;

        Ok(Self {
            db_connection: Arc::new(Mutex::new(db_connection)),
            plot_dir,
        })
    }
}
