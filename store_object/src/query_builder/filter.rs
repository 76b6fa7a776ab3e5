//! WHERE clause composition
//!
//! Conditions are flat: every present condition is joined with the one
//! logical operator of the query. Conditions whose value is absent are left
//! out entirely, and a builder with no present condition renders no WHERE
//! clause at all.

use crate::errors::StoreError;
use crate::query_builder::parameters::{parameter_name, SqlParameters};
use crate::validation::ValidatedColumnName;
use serde::{Deserialize, Serialize};
use type_mapping::{SqlValue, ToSqlValue};

/// Logical operators for combining conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LogicalOperator {
    #[default]
    And,
    Or,
}

impl LogicalOperator {
    pub fn to_sql(&self) -> &'static str {
        match self {
            LogicalOperator::And => "AND",
            LogicalOperator::Or => "OR",
        }
    }
}

/// Rendered filter: SQL text, the parameters it references and the columns it touches
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WhereClause {
    pub sql: String,
    pub parameters: SqlParameters,
    pub columns: Vec<String>,
}

impl WhereClause {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }
}

#[derive(Debug)]
pub struct WhereClauseBuilder {
    operator: LogicalOperator,
    conditions: Vec<String>,
    parameters: SqlParameters,
    columns: Vec<String>,
    error: Option<StoreError>,
}

impl WhereClauseBuilder {
    pub fn new(operator: LogicalOperator) -> Self {
        Self {
            operator,
            conditions: Vec::new(),
            parameters: SqlParameters::new(),
            columns: Vec::new(),
            error: None,
        }
    }

    pub fn operator(&self) -> LogicalOperator {
        self.operator
    }

    /// `"Column" = @Column`, skipped when the value is NULL or blank text
    pub fn add<V: ToSqlValue + ?Sized>(&mut self, value: &V, column: &str) -> &mut Self {
        let value = value.to_sql_value();
        if value.is_blank() {
            return self;
        }
        self.push_equals(value, column);
        self
    }

    /// `"Column" = @Column`, skipped only when the value is NULL
    pub fn add_exact<V: ToSqlValue + ?Sized>(&mut self, value: &V, column: &str) -> &mut Self {
        let value = value.to_sql_value();
        if value.is_null() {
            return self;
        }
        self.push_equals(value, column);
        self
    }

    /// `"Column" IN (@Column0, @Column1, ...)`. An empty list matches nothing.
    pub fn add_in(&mut self, column: &str, ids: &[i64]) -> &mut Self {
        let Some(quoted) = self.claim_column(column) else {
            return self;
        };

        if ids.is_empty() {
            self.conditions.push("1 = 0".to_string());
            return self;
        }

        let mut placeholders = Vec::with_capacity(ids.len());
        for (index, id) in ids.iter().enumerate() {
            let name = format!("{}{}", parameter_name(column), index);
            match self.parameters.push(name, column, id.to_sql_value()) {
                Ok(placeholder) => placeholders.push(placeholder),
                Err(e) => {
                    self.fail(e);
                    return self;
                }
            }
        }

        self.conditions
            .push(format!("{} IN ({})", quoted, placeholders.join(", ")));
        self
    }

    pub fn build(self) -> Result<WhereClause, StoreError> {
        if let Some(error) = self.error {
            return Err(error);
        }

        let sql = if self.conditions.is_empty() {
            String::new()
        } else {
            let separator = format!(" {} ", self.operator.to_sql());
            format!("WHERE {}", self.conditions.join(&separator))
        };

        Ok(WhereClause {
            sql,
            parameters: self.parameters,
            columns: self.columns,
        })
    }

    fn push_equals(&mut self, value: SqlValue, column: &str) {
        let Some(quoted) = self.claim_column(column) else {
            return;
        };

        match self.parameters.push(parameter_name(column), column, value) {
            Ok(placeholder) => self.conditions.push(format!("{} = {}", quoted, placeholder)),
            Err(e) => self.fail(e),
        }
    }

    /// Validate the column and record it; `None` once the builder has failed
    fn claim_column(&mut self, column: &str) -> Option<String> {
        if self.error.is_some() {
            return None;
        }

        let validated = match ValidatedColumnName::new(column) {
            Ok(validated) => validated,
            Err(e) => {
                self.fail(e.into());
                return None;
            }
        };

        if self.columns.iter().any(|existing| existing == column) {
            self.fail(StoreError::validation(format!(
                "Column '{}' is filtered more than once.",
                column
            )));
            return None;
        }

        self.columns.push(column.to_string());
        Some(validated.quoted())
    }

    fn fail(&mut self, error: StoreError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }
}
