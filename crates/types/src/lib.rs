pub mod customers;

pub use customers::{ContactMethod, CustomerRecord, NewCustomer, ParseContactMethodError};

/// Storage file used when no path is configured
pub const DEFAULT_DB_FILE_NAME: &str = "customers.db";

/// Name of the only table FormDesk writes to
pub const CUSTOMERS_TABLE: &str = "customers";
