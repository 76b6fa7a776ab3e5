//! Explicit type mapping between Rust values and PostgreSQL parameters
//! Every bound parameter carries its SQL type, so NULLs are typed too and the
//! driver never has to guess.

pub mod convert;
pub mod sql;
pub mod types;

pub use convert::ToSqlValue;
pub use sql::SqlType;
pub use types::SqlValue;
