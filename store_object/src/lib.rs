//! Store Object - generic query, filter-composition and paging engine
//!
//! This crate provides the entity and query traits, the SQL query builder
//! (ordering, paging, WHERE composition, typed parameters) and the generic
//! repository that runs them against PostgreSQL.

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod clock;
pub mod errors;
pub mod generic_store;
pub mod prelude;
pub mod query_builder;
pub mod traits;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_support;

pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::StoreError;
pub use generic_store::{GenericRepository, RepositoryTransaction};
pub use query_builder::{
    LogicalOperator, OrderBy, PageInfo, PagedResult, QueryBuilder, SortOrder, SqlParameterBuilder,
    WhereClause, WhereClauseBuilder,
};
pub use traits::*;
pub use validation::{IdentifierError, ValidatedColumnName, ValidatedTableName};

// Used by code generated in table-derive
pub use type_mapping;

use sqlx::PgPool;

pub type DbPool = PgPool;
