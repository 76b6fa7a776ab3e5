use crate::errors::StoreError;
use crate::query_builder::filter::{LogicalOperator, WhereClause, WhereClauseBuilder};
use std::fmt::Debug;

/// Structured search criteria for one entity.
///
/// Each set field contributes one equality condition; unset fields are left
/// out. Derive it with `#[derive(QueryObject)]`.
pub trait QueryObject: Send + Sync + Debug {
    fn logical_operator(&self) -> LogicalOperator;

    /// Offer every field to the builder in declaration order
    fn add_conditions(&self, filter: &mut WhereClauseBuilder);

    fn to_where_clause(&self) -> Result<WhereClause, StoreError> {
        let mut filter = WhereClauseBuilder::new(self.logical_operator());
        self.add_conditions(&mut filter);
        filter.build()
    }
}
