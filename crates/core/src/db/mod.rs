use diesel::{prelude::*, sqlite::SqliteConnection};
use formdesk_types::{CustomerRecord, NewCustomer};
use tracing::{debug, error, info};

mod models;
pub mod schema;

const CREATE_CUSTOMERS_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS customers (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        birthday TEXT,
        email TEXT,
        phone TEXT,
        address TEXT,
        contact_method TEXT
    )
";

pub type DbResult<T> = Result<T, DbError>;
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("Database connection error: {0}")]
    ConnectionError(String),
    #[error("Failed to create customers table: {0}")]
    SchemaError(diesel::result::Error),
    #[error("Failed to insert customer: {0}")]
    InsertCustomerError(diesel::result::Error),
    #[error("Failed to list customers: {0}")]
    ListCustomersError(diesel::result::Error),
}

/// Append-only store of customer records backed by a single SQLite file.
///
/// The store owns its connection for as long as it lives. Open it once at
/// startup, lend it to whoever needs to write, and [`close`](Self::close) it
/// on shutdown.
pub struct RecordStore {
    database_url: String,
    pub(crate) conn: SqliteConnection,
    last_error: Option<String>,
}

impl std::fmt::Debug for RecordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStore")
            .field("database_url", &self.database_url)
            .field("last_error", &self.last_error)
            .finish_non_exhaustive()
    }
}

impl RecordStore {
    /// Open (or create) the database at `database_url` and make sure the
    /// `customers` table exists.
    pub fn open(database_url: &str) -> DbResult<Self> {
        debug!("Establishing connection to database at {}", database_url);
        let conn = SqliteConnection::establish(database_url)
            .map_err(|e| DbError::ConnectionError(e.to_string()))?;

        let mut store = Self {
            database_url: database_url.to_string(),
            conn,
            last_error: None,
        };
        store.ensure_schema()?;
        debug!("Database connected: {}", database_url);
        Ok(store)
    }

    /// In-memory store, gone once dropped
    pub fn in_memory() -> DbResult<Self> {
        Self::open(":memory:")
    }

    pub fn path(&self) -> &str {
        &self.database_url
    }

    pub fn ensure_schema(&mut self) -> DbResult<()> {
        diesel::sql_query(CREATE_CUSTOMERS_TABLE)
            .execute(&mut self.conn)
            .map_err(DbError::SchemaError)?;
        Ok(())
    }

    /// Append one customer and return the stored row with its new id.
    pub fn try_insert(&mut self, customer: &NewCustomer) -> DbResult<CustomerRecord> {
        let id = models::NewCustomerRow::new(customer)
            .insert(&mut self.conn)
            .map_err(DbError::InsertCustomerError)?;
        info!("Data saved for: {} (id {})", customer.name, id);
        Ok(CustomerRecord::from_new(id, customer.clone()))
    }

    /// Append one customer, reporting failure as `false`.
    ///
    /// The cause of the last failure stays available through
    /// [`last_error`](Self::last_error).
    pub fn insert(&mut self, customer: &NewCustomer) -> bool {
        match self.try_insert(customer) {
            Ok(_) => true,
            Err(e) => {
                self.record_failure(&e);
                false
            }
        }
    }

    pub(crate) fn record_failure(&mut self, e: &DbError) {
        error!("Database error during insertion: {}", e);
        self.last_error = Some(e.to_string());
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// All customers in insertion order
    pub fn list(&mut self) -> DbResult<Vec<CustomerRecord>> {
        models::customer::list_customers(&mut self.conn)
            .map_err(DbError::ListCustomersError)
            .map(|rows| rows.into_iter().map(Into::into).collect())
    }

    pub fn count(&mut self) -> DbResult<i64> {
        models::customer::count_customers(&mut self.conn).map_err(DbError::ListCustomersError)
    }

    pub fn close(self) {
        let Self { database_url, conn, .. } = self;
        drop(conn);
        debug!("Database connection closed: {}", database_url);
    }
}
