//! Database schema setup.

use rusqlite::Connection;

use crate::store::create_store_table;

/// Create the tables used by the app if they do not already exist.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), rusqlite::Error> {
    let transaction = connection.unchecked_transaction()?;

    create_store_table(&transaction)?;

    transaction.commit()
}
