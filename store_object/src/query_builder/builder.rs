//! Statement assembly for one entity
//!
//! The filter is rendered once; the count, select and paged select
//! statements all reuse its SQL text and parameters verbatim.

use crate::errors::StoreError;
use crate::query_builder::filter::{LogicalOperator, WhereClause, WhereClauseBuilder};
use crate::query_builder::pagination::PageInfo;
use crate::query_builder::parameters::SqlParameters;
use crate::query_builder::sql_generation::SqlGenerator;
use crate::traits::entity::{Entity, ID_COLUMN};
use crate::traits::query_object::QueryObject;
use type_mapping::ToSqlValue;

const OFFSET_PARAMETER: &str = "@Paging.Offset";
const FETCH_PARAMETER: &str = "@Paging.Fetch";

/// SQL text plus the parameters to bind, in placeholder order
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub parameters: SqlParameters,
}

#[derive(Debug, Clone)]
pub struct QueryBuilder {
    table: &'static str,
    columns: &'static [&'static str],
    filter: WhereClause,
}

impl QueryBuilder {
    /// Every filter column must appear in `columns`
    pub fn new(
        table: &'static str,
        columns: &'static [&'static str],
        filter: WhereClause,
    ) -> Result<Self, StoreError> {
        if let Some(unknown) = filter
            .columns
            .iter()
            .find(|column| !columns.contains(&column.as_str()))
        {
            return Err(StoreError::validation(format!(
                "'{}' is an unrecognized column.",
                unknown
            )));
        }

        Ok(Self {
            table,
            columns,
            filter,
        })
    }

    /// Filter from a query object; `None` selects every row
    pub fn for_entity<T: Entity>(query: Option<&T::Query>) -> Result<Self, StoreError> {
        let filter = match query {
            Some(query) => query.to_where_clause()?,
            None => WhereClause::empty(),
        };
        Self::new(T::table_name(), T::columns(), filter)
    }

    /// `"Id" IN (...)` filter
    pub fn for_ids<T: Entity>(ids: &[i64]) -> Result<Self, StoreError> {
        let mut filter = WhereClauseBuilder::new(LogicalOperator::And);
        filter.add_in(ID_COLUMN, ids);
        Self::new(T::table_name(), T::columns(), filter.build()?)
    }

    /// `"Id" = $1` filter
    pub fn for_id<T: Entity>(id: i64) -> Result<Self, StoreError> {
        let mut filter = WhereClauseBuilder::new(LogicalOperator::And);
        filter.add_exact(&id, ID_COLUMN);
        Self::new(T::table_name(), T::columns(), filter.build()?)
    }

    pub fn filter(&self) -> &WhereClause {
        &self.filter
    }

    pub fn count_statement(&self) -> Result<Statement, StoreError> {
        Ok(Statement {
            sql: SqlGenerator::count(self.table, &self.filter)?,
            parameters: self.filter.parameters.clone(),
        })
    }

    pub fn select_statement(&self) -> Result<Statement, StoreError> {
        Ok(Statement {
            sql: SqlGenerator::select(self.table, self.columns, &self.filter)?,
            parameters: self.filter.parameters.clone(),
        })
    }

    /// Ordered select of one page. Ties on the sort column are broken by `Id`.
    pub fn paged_select_statement(&self, page_info: &PageInfo) -> Result<Statement, StoreError> {
        let order_by = page_info.order_by();
        if !order_by.is_valid_for(self.columns) {
            return Err(StoreError::validation(format!(
                "'{}' is an unrecognized column.",
                order_by.name()
            )));
        }

        let mut parameters = self.filter.parameters.clone();
        let offset = parameters.push(
            OFFSET_PARAMETER,
            ID_COLUMN,
            page_info.offset().to_sql_value(),
        )?;
        let fetch = parameters.push(
            FETCH_PARAMETER,
            ID_COLUMN,
            page_info.limit().to_sql_value(),
        )?;

        let tie_breaker = self.columns.contains(&ID_COLUMN).then_some(ID_COLUMN);
        let sql = format!(
            "{} {} {}",
            SqlGenerator::select(self.table, self.columns, &self.filter)?,
            SqlGenerator::order_clause(order_by, tie_breaker)?,
            SqlGenerator::paging_clause(&offset, &fetch)
        );

        Ok(Statement { sql, parameters })
    }
}
