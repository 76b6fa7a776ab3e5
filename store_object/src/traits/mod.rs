//! Traits for database operations
//!
//! `Entity` and `QueryObject` describe a row type and its search criteria,
//! `Repository` is the set of operations offered over them.

pub mod entity;
pub mod query_object;
pub mod repository;

pub use entity::{AuditFields, Entity};
pub use query_object::QueryObject;
pub use repository::Repository;
