//! A key-value store that keeps each collection of records as one JSON array.
//!
//! The store mirrors the browser storage the dashboard was first written
//! against: one key per collection, each holding the whole collection as a
//! JSON document. Reads never fail because of bad data. A missing or
//! malformed collection is treated as empty, and a record that cannot be
//! read is skipped without dropping the rest of its collection.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{Connection, OptionalExtension};
use serde::{Serialize, de::DeserializeOwned};
use time::OffsetDateTime;

use crate::Error;

/// The named collections kept in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    /// Income and expense records.
    Transactions,
    /// Savings goals.
    Goals,
    /// Fixed-income positions.
    Cdbs,
}

impl Collection {
    /// Every collection, in the order they are exported.
    pub const ALL: [Collection; 3] = [Collection::Transactions, Collection::Goals, Collection::Cdbs];

    /// The key the collection is stored under.
    pub fn key(self) -> &'static str {
        match self {
            Collection::Transactions => "transactions",
            Collection::Goals => "goals",
            Collection::Cdbs => "cdbs",
        }
    }

    /// The key used by data exported from the browser version of the app.
    pub fn legacy_key(self) -> &'static str {
        match self {
            Collection::Transactions => "transacoes",
            Collection::Goals => "metas",
            Collection::Cdbs => "cdbs",
        }
    }
}

/// A record that lives in exactly one [Collection].
pub trait Record: Serialize + DeserializeOwned {
    /// The collection this record type is stored in.
    const COLLECTION: Collection;

    /// The unique ID of the record within its collection.
    fn id(&self) -> i64;
}

/// Create the table that holds one JSON document per collection.
pub fn create_store_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS key_value_store (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        (),
    )?;

    Ok(())
}

/// A handle to the store that can be cloned cheaply and shared between requests.
#[derive(Debug, Clone)]
pub struct Store {
    connection: Arc<Mutex<Connection>>,
}

impl Store {
    /// Create a store over a connection whose schema is already initialized.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection.lock().map_err(|error| {
            tracing::error!("could not acquire database lock: {error}");
            Error::DatabaseLockError
        })
    }

    /// Load every record of a collection.
    ///
    /// # Errors
    /// Returns an error if the database lock is poisoned or the query fails.
    /// Absent or malformed data is not an error and yields an empty vector.
    /// Records that cannot be read are left out.
    pub fn load<R: Record>(&self) -> Result<Vec<R>, Error> {
        let connection = self.lock()?;
        load_collection(&connection)
    }

    /// Overwrite a collection with `records`.
    pub fn save<R: Record>(&self, records: &[R]) -> Result<(), Error> {
        let connection = self.lock()?;
        save_collection(&connection, records)
    }

    /// Put `record` at the front of its collection and save it.
    ///
    /// The lock is held for the whole read-modify-write, so concurrent
    /// requests cannot interleave. Returns the new contents of the collection.
    pub fn prepend<R: Record>(&self, record: R) -> Result<Vec<R>, Error> {
        self.update(|records: &mut Vec<R>| {
            records.insert(0, record);
            Ok(())
        })
    }

    /// Apply `modify` to a fresh copy of a collection and save the result.
    ///
    /// Nothing is written if `modify` returns an error.
    pub fn update<R, F>(&self, modify: F) -> Result<Vec<R>, Error>
    where
        R: Record,
        F: FnOnce(&mut Vec<R>) -> Result<(), Error>,
    {
        let connection = self.lock()?;
        let mut records = load_collection(&connection)?;
        modify(&mut records)?;
        save_collection(&connection, &records)?;

        Ok(records)
    }

    /// Write several collections in a single SQLite transaction.
    ///
    /// Either every collection saved through the [Batch] is written, or none is.
    pub fn save_all<F>(&self, write: F) -> Result<(), Error>
    where
        F: FnOnce(&Batch<'_>) -> Result<(), Error>,
    {
        let mut connection = self.lock()?;
        let transaction = connection.transaction()?;
        write(&Batch {
            connection: &transaction,
        })?;
        transaction.commit()?;

        Ok(())
    }

    /// Read every collection as raw JSON, keyed by collection key.
    ///
    /// Missing or malformed collections are exported as empty arrays.
    pub fn export_json(&self) -> Result<serde_json::Value, Error> {
        let connection = self.lock()?;
        let mut document = serde_json::Map::new();

        for collection in Collection::ALL {
            let value = read_raw(&connection, collection)?
                .and_then(|text| serde_json::from_str::<serde_json::Value>(&text).ok())
                .filter(serde_json::Value::is_array)
                .unwrap_or_else(|| serde_json::Value::Array(Vec::new()));

            document.insert(collection.key().to_owned(), value);
        }

        Ok(serde_json::Value::Object(document))
    }
}

/// Writes collections inside an open SQLite transaction, see [Store::save_all].
pub struct Batch<'a> {
    connection: &'a Connection,
}

impl Batch<'_> {
    /// Overwrite a collection with `records` as part of the batch.
    pub fn save<R: Record>(&self, records: &[R]) -> Result<(), Error> {
        save_collection(self.connection, records)
    }
}

fn read_raw(connection: &Connection, collection: Collection) -> Result<Option<String>, Error> {
    let mut statement = connection.prepare("SELECT value FROM key_value_store WHERE key = ?1")?;

    let value = statement
        .query_row([collection.key()], |row| row.get(0))
        .optional()?;

    match value {
        Some(value) => Ok(Some(value)),
        None => Ok(statement
            .query_row([collection.legacy_key()], |row| row.get(0))
            .optional()?),
    }
}

fn load_collection<R: Record>(connection: &Connection) -> Result<Vec<R>, Error> {
    let collection = R::COLLECTION;

    let Some(text) = read_raw(connection, collection)? else {
        return Ok(Vec::new());
    };

    let values: Vec<serde_json::Value> = match serde_json::from_str(&text) {
        Ok(values) => values,
        Err(error) => {
            tracing::warn!(
                "Ignoring malformed data stored under \"{}\": {error}",
                collection.key()
            );
            return Ok(Vec::new());
        }
    };

    let records = values
        .into_iter()
        .filter_map(|value| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(error) => {
                tracing::warn!(
                    "Skipping malformed record stored under \"{}\": {error}",
                    collection.key()
                );
                None
            }
        })
        .collect();

    Ok(records)
}

fn save_collection<R: Record>(connection: &Connection, records: &[R]) -> Result<(), Error> {
    let text = serde_json::to_string(records)?;

    connection.execute(
        "INSERT INTO key_value_store (key, value) VALUES (?1, ?2)
        ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        (R::COLLECTION.key(), text),
    )?;

    Ok(())
}

/// Create an ID for a new record from the current time in milliseconds.
///
/// If the time-derived ID is not greater than every existing ID, the largest
/// existing ID plus one is used instead, so IDs stay unique and increasing.
pub fn next_record_id(now: OffsetDateTime, existing_ids: impl IntoIterator<Item = i64>) -> i64 {
    let candidate = (now.unix_timestamp_nanos() / 1_000_000) as i64;

    match existing_ids.into_iter().max() {
        Some(max_id) if max_id >= candidate => max_id + 1,
        _ => candidate,
    }
}

/// Serde helpers for dates written as `YYYY-MM-DD`.
pub mod iso_date {
    use serde::{Deserialize, Deserializer, Serializer, de, ser};
    use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

    /// The `YYYY-MM-DD` format description.
    pub const FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

    /// Write a date as `YYYY-MM-DD`.
    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        let text = date.format(FORMAT).map_err(ser::Error::custom)?;
        serializer.serialize_str(&text)
    }

    /// Read a date written as `YYYY-MM-DD`.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let text = String::deserialize(deserializer)?;
        Date::parse(&text, FORMAT).map_err(de::Error::custom)
    }
}

/// Serde helpers for optional text stored as a possibly empty string.
pub mod optional_text {
    use serde::{Deserialize, Deserializer, Serializer};

    /// Write missing text as an empty string.
    pub fn serialize<S: Serializer>(text: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(text.as_deref().unwrap_or_default())
    }

    /// Read blank or null text as `None`.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        let text = Option::<String>::deserialize(deserializer)?;
        Ok(text.filter(|text| !text.trim().is_empty()))
    }
}
