//! Query builder utilities
//!
//! Sort directives, paging, filter composition, statement parameters and
//! SQL text generation.

pub mod builder;
pub mod filter;
pub mod ordering;
pub mod pagination;
pub mod parameters;
pub mod sql_generation;


pub use builder::{QueryBuilder, Statement};
pub use filter::{LogicalOperator, WhereClause, WhereClauseBuilder};
pub use ordering::{OrderBy, SortOrder};
pub use pagination::{PageInfo, PagedResult};
pub use parameters::{SqlParameter, SqlParameterBuilder, SqlParameters};
pub use sql_generation::SqlGenerator;
