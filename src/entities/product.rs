use serde::{Deserialize, Serialize};
use store_object::{AuditFields, LogicalOperator};
use table_derive::{Entity, QueryObject};

/// Brand and type of an asset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow, Entity)]
#[sqlx(rename_all = "PascalCase")]
#[table(name = "Product")]
pub struct Product {
    #[primary_key]
    pub id: Option<i64>,
    #[audit]
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub audit: AuditFields,
    #[field(required)]
    pub brand: String,
    #[field(column = "Type", required)]
    #[sqlx(rename = "Type")]
    #[serde(rename = "type")]
    pub product_type: String,
}

impl Product {
    pub fn new(brand: &str, product_type: &str, created_by: &str) -> Self {
        Self {
            id: None,
            audit: AuditFields::created_by(created_by),
            brand: brand.to_string(),
            product_type: product_type.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, QueryObject)]
pub struct ProductQuery {
    pub id: Option<i64>,
    #[serde(default)]
    pub logical_operator: LogicalOperator,
    pub created_by: Option<String>,
    pub modified_by: Option<String>,
    pub brand: Option<String>,
    #[filter(column = "Type")]
    #[serde(rename = "type")]
    pub product_type: Option<String>,
}
