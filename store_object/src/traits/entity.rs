//! Entity description
//!
//! Everything the generic repository needs to know about a row type: its
//! table, its column allow-list, its identity, its audit fields and how its
//! data columns bind into INSERT and UPDATE statements.

use crate::errors::StoreError;
use crate::query_builder::parameters::SqlParameterBuilder;
use crate::traits::query_object::QueryObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use std::fmt::Debug;

pub const ID_COLUMN: &str = "Id";
pub const CREATION_DATE_COLUMN: &str = "CreationDate";
pub const CREATED_BY_COLUMN: &str = "CreatedBy";
pub const MODIFICATION_DATE_COLUMN: &str = "ModificationDate";
pub const MODIFIED_BY_COLUMN: &str = "ModifiedBy";

/// Audit columns, in select order
pub const AUDIT_COLUMNS: [&str; 4] = [
    CREATION_DATE_COLUMN,
    CREATED_BY_COLUMN,
    MODIFICATION_DATE_COLUMN,
    MODIFIED_BY_COLUMN,
];

/// Row type managed by `GenericRepository`.
///
/// Normally derived:
/// ```ignore
/// #[derive(Debug, Clone, sqlx::FromRow, Entity)]
/// #[sqlx(rename_all = "PascalCase")]
/// #[table(name = "Device", query = "DeviceQuery")]
/// pub struct Device {
///     #[primary_key]
///     pub id: Option<i64>,
///     #[field(required)]
///     pub tag: String,
///     pub owner: Option<String>,
/// }
/// ```
pub trait Entity:
    Clone + Send + Sync + Debug + Unpin + for<'r> sqlx::FromRow<'r, PgRow> + 'static
{
    type Query: QueryObject;

    fn table_name() -> &'static str;

    /// Every column in select order: `Id`, audit columns, data columns.
    /// Filter and sort columns must come from this list.
    fn columns() -> &'static [&'static str];

    /// Columns written by `bind_data`
    fn data_columns() -> &'static [&'static str];

    fn id(&self) -> Option<i64>;

    fn set_id(&mut self, id: i64);

    fn audit(&self) -> Option<&AuditFields> {
        None
    }

    fn audit_mut(&mut self) -> Option<&mut AuditFields> {
        None
    }

    /// Bind every data column; NULLs included, required columns checked
    fn bind_data(&self, parameters: &mut SqlParameterBuilder) -> Result<(), StoreError>;
}

/// Creation and modification stamps shared by audited entities
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[sqlx(rename_all = "PascalCase")]
pub struct AuditFields {
    pub creation_date: Option<DateTime<Utc>>,
    pub created_by: Option<String>,
    pub modification_date: Option<DateTime<Utc>>,
    pub modified_by: Option<String>,
}

impl AuditFields {
    /// Fields for a record about to be inserted by `user`
    pub fn created_by(user: impl Into<String>) -> Self {
        Self {
            created_by: Some(user.into()),
            ..Self::default()
        }
    }

    /// Fields for an update performed by `user`, keeping the creation stamps
    pub fn modified_by(mut self, user: impl Into<String>) -> Self {
        self.modified_by = Some(user.into());
        self
    }

    pub fn validate_for_insert(&self) -> Result<(), StoreError> {
        if is_blank(&self.created_by) {
            return Err(StoreError::validation("CreatedBy is required."));
        }
        Ok(())
    }

    pub fn validate_for_update(&self) -> Result<(), StoreError> {
        if is_blank(&self.modified_by) {
            return Err(StoreError::validation("ModifiedBy is required."));
        }
        Ok(())
    }

    /// Insert stamps: both dates set to `now`, `modified_by` copied from `created_by`
    pub fn stamp_created(&mut self, now: DateTime<Utc>) -> Result<(), StoreError> {
        self.validate_for_insert()?;
        self.creation_date = Some(now);
        self.modification_date = Some(now);
        self.modified_by = self.created_by.clone();
        Ok(())
    }

    pub fn stamp_modified(&mut self, now: DateTime<Utc>) -> Result<(), StoreError> {
        self.validate_for_update()?;
        self.modification_date = Some(now);
        Ok(())
    }

    /// All four audit columns, for INSERT
    pub fn bind_created(&self, parameters: &mut SqlParameterBuilder) -> Result<(), StoreError> {
        parameters
            .add(&self.creation_date, CREATION_DATE_COLUMN)?
            .add(&self.created_by, CREATED_BY_COLUMN)?;
        self.bind_modified(parameters)
    }

    /// Modification columns only, for UPDATE
    pub fn bind_modified(&self, parameters: &mut SqlParameterBuilder) -> Result<(), StoreError> {
        parameters
            .add(&self.modification_date, MODIFICATION_DATE_COLUMN)?
            .add(&self.modified_by, MODIFIED_BY_COLUMN)?;
        Ok(())
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}
