//! Convenience re-exports for common store-object usage

// Core traits
pub use crate::traits::{AuditFields, Entity, QueryObject, Repository};

// Error types
pub use crate::errors::StoreError;

// Core repository functionality
pub use crate::generic_store::GenericRepository;
pub use crate::clock::{Clock, FixedClock, SystemClock};

// Query building
pub use crate::query_builder::{
    LogicalOperator, OrderBy, PageInfo, PagedResult, SortOrder, SqlParameterBuilder,
    WhereClauseBuilder,
};

// Common external dependencies that are frequently used
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use sqlx::{FromRow, PgPool};
