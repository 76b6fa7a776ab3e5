use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use store_object::{AuditFields, LogicalOperator};
use table_derive::{Entity, QueryObject};

/// An owner that is not a person, e.g. a stock room or a project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow, Entity)]
#[sqlx(rename_all = "PascalCase")]
#[table(name = "SpecialOwner")]
pub struct SpecialOwner {
    #[primary_key]
    pub id: Option<i64>,
    #[audit]
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub audit: AuditFields,
    #[field(required)]
    pub name: String,
    pub remark: Option<String>,
}

impl SpecialOwner {
    pub fn new(name: &str, created_by: &str) -> Self {
        Self {
            id: None,
            audit: AuditFields::created_by(created_by),
            name: name.to_string(),
            remark: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, QueryObject)]
pub struct SpecialOwnerQuery {
    pub id: Option<i64>,
    #[serde(default)]
    pub logical_operator: LogicalOperator,
    pub creation_date: Option<DateTime<Utc>>,
    pub created_by: Option<String>,
    pub modification_date: Option<DateTime<Utc>>,
    pub modified_by: Option<String>,
    pub name: Option<String>,
    pub remark: Option<String>,
}
