//! SQL text generation
//!
//! Every identifier goes through validation and is double-quoted. Values are
//! never written into the text, only `$n` placeholders.

use crate::errors::StoreError;
use crate::query_builder::filter::WhereClause;
use crate::query_builder::ordering::{OrderBy, SortOrder};
use crate::query_builder::parameters::SqlParameters;
use crate::validation::{ValidatedColumnName, ValidatedTableName};

pub struct SqlGenerator;

impl SqlGenerator {
    /// `"A", "B", "C"`
    pub fn column_list<S: AsRef<str>>(columns: &[S]) -> Result<String, StoreError> {
        if columns.is_empty() {
            return Err(StoreError::validation("At least one column is required."));
        }

        let quoted = columns
            .iter()
            .map(|column| ValidatedColumnName::new(column.as_ref()).map(|c| c.quoted()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(quoted.join(", "))
    }

    /// `SELECT "A", "B" FROM "T" WHERE ...`
    pub fn select(
        table: &str,
        columns: &[&str],
        where_clause: &WhereClause,
    ) -> Result<String, StoreError> {
        let table = ValidatedTableName::new(table)?;
        let sql = format!(
            "SELECT {} FROM {}",
            Self::column_list(columns)?,
            table.quoted()
        );
        Ok(Self::append(sql, &where_clause.sql))
    }

    /// `SELECT COUNT(*) FROM "T" WHERE ...`
    pub fn count(table: &str, where_clause: &WhereClause) -> Result<String, StoreError> {
        let table = ValidatedTableName::new(table)?;
        let sql = format!("SELECT COUNT(*) FROM {}", table.quoted());
        Ok(Self::append(sql, &where_clause.sql))
    }

    /// `ORDER BY "Name" DESC, "Id" ASC`; the tie-breaker is dropped when it is the sort column
    pub fn order_clause(order_by: &OrderBy, tie_breaker: Option<&str>) -> Result<String, StoreError> {
        let column = ValidatedColumnName::new(order_by.name())?;
        let mut sql = format!(
            "ORDER BY {} {}",
            column.quoted(),
            order_by.direction().to_sql()
        );

        if let Some(tie_breaker) = tie_breaker.filter(|t| *t != order_by.name()) {
            let tie_breaker = ValidatedColumnName::new(tie_breaker)?;
            sql.push_str(&format!(
                ", {} {}",
                tie_breaker.quoted(),
                SortOrder::Asc.to_sql()
            ));
        }

        Ok(sql)
    }

    /// `OFFSET $n ROWS FETCH NEXT $m ROWS ONLY`
    pub fn paging_clause(offset_placeholder: &str, fetch_placeholder: &str) -> String {
        format!(
            "OFFSET {} ROWS FETCH NEXT {} ROWS ONLY",
            offset_placeholder, fetch_placeholder
        )
    }

    /// `INSERT INTO "T" ("A", "B") VALUES ($1, $2) RETURNING "Id"`
    pub fn insert(
        table: &str,
        parameters: &SqlParameters,
        returning: &str,
    ) -> Result<String, StoreError> {
        let table = ValidatedTableName::new(table)?;
        let returning = ValidatedColumnName::new(returning)?;
        let columns: Vec<&str> = parameters.iter().map(|p| p.column()).collect();
        let placeholders: Vec<String> = (1..=parameters.len())
            .map(SqlParameters::placeholder)
            .collect();

        Ok(format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
            table.quoted(),
            Self::column_list(&columns)?,
            placeholders.join(", "),
            returning.quoted()
        ))
    }

    /// `UPDATE "T" SET "A" = $1, "B" = $2 WHERE "Id" = $3`
    ///
    /// The parameter targeting `key_column` becomes the WHERE condition,
    /// every other parameter is assigned.
    pub fn update(
        table: &str,
        parameters: &SqlParameters,
        key_column: &str,
    ) -> Result<String, StoreError> {
        let table = ValidatedTableName::new(table)?;
        let mut assignments = Vec::with_capacity(parameters.len());
        let mut key = None;

        for (index, parameter) in parameters.iter().enumerate() {
            let column = ValidatedColumnName::new(parameter.column())?;
            let placeholder = SqlParameters::placeholder(index + 1);
            if parameter.column() == key_column {
                key = Some(format!("{} = {}", column.quoted(), placeholder));
            } else {
                assignments.push(format!("{} = {}", column.quoted(), placeholder));
            }
        }

        let key = key.ok_or_else(|| {
            StoreError::validation(format!("'{}' is required to update a row.", key_column))
        })?;
        if assignments.is_empty() {
            return Err(StoreError::validation("At least one column must be updated."));
        }

        Ok(format!(
            "UPDATE {} SET {} WHERE {}",
            table.quoted(),
            assignments.join(", "),
            key
        ))
    }

    /// `SELECT EXISTS(SELECT 1 FROM "T" WHERE "Id" = $1)`
    pub fn exists(table: &str, key_column: &str) -> Result<String, StoreError> {
        let table = ValidatedTableName::new(table)?;
        let key = ValidatedColumnName::new(key_column)?;
        Ok(format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE {} = $1)",
            table.quoted(),
            key.quoted()
        ))
    }

    /// `DELETE FROM "T" WHERE "Id" = $1`
    pub fn delete(table: &str, key_column: &str) -> Result<String, StoreError> {
        let table = ValidatedTableName::new(table)?;
        let key = ValidatedColumnName::new(key_column)?;
        Ok(format!(
            "DELETE FROM {} WHERE {} = $1",
            table.quoted(),
            key.quoted()
        ))
    }

    fn append(mut sql: String, clause: &str) -> String {
        if !clause.is_empty() {
            sql.push(' ');
            sql.push_str(clause);
        }
        sql
    }
}
