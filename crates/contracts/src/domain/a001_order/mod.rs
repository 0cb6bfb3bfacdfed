pub mod aggregate;
pub mod error;
pub mod price_table;
pub mod summary;
