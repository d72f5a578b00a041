pub mod customer;

pub use customer::NewCustomerRow;
