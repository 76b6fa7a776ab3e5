use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use store_object::{AuditFields, LogicalOperator};
use table_derive::{Entity, QueryObject};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow, Entity)]
#[sqlx(rename_all = "PascalCase")]
#[table(name = "Asset")]
pub struct Asset {
    #[primary_key]
    pub id: Option<i64>,
    #[audit]
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub audit: AuditFields,
    #[field(required)]
    pub tag: String,
    pub serial: Option<String>,
    pub product_id: Option<i64>,
    pub description: Option<String>,
    pub invoice_date: Option<DateTime<Utc>>,
    pub invoice_number: Option<String>,
    pub price: Option<Decimal>,
    pub paid_by: Option<String>,
    pub owner: Option<String>,
    pub install_date: Option<DateTime<Utc>>,
    pub installed_by: Option<String>,
    pub remark: Option<String>,
    pub team_asset: Option<bool>,
}

impl Asset {
    pub fn new(tag: &str, created_by: &str) -> Self {
        Self {
            tag: tag.to_string(),
            audit: AuditFields::created_by(created_by),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, QueryObject)]
pub struct AssetQuery {
    pub id: Option<i64>,
    #[serde(default)]
    pub logical_operator: LogicalOperator,
    pub creation_date: Option<DateTime<Utc>>,
    pub created_by: Option<String>,
    pub modification_date: Option<DateTime<Utc>>,
    pub modified_by: Option<String>,
    pub tag: Option<String>,
    pub serial: Option<String>,
    pub product_id: Option<i64>,
    pub description: Option<String>,
    pub invoice_date: Option<DateTime<Utc>>,
    pub invoice_number: Option<String>,
    pub price: Option<Decimal>,
    pub paid_by: Option<String>,
    pub owner: Option<String>,
    pub install_date: Option<DateTime<Utc>>,
    pub installed_by: Option<String>,
    pub remark: Option<String>,
    pub team_asset: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use store_object::{Entity, QueryObject, SqlParameterBuilder};

    #[test]
    fn test_asset_columns() {
        assert_eq!(Asset::table_name(), "Asset");
        assert_eq!(
            Asset::columns(),
            &[
                "Id",
                "CreationDate",
                "CreatedBy",
                "ModificationDate",
                "ModifiedBy",
                "Tag",
                "Serial",
                "ProductId",
                "Description",
                "InvoiceDate",
                "InvoiceNumber",
                "Price",
                "PaidBy",
                "Owner",
                "InstallDate",
                "InstalledBy",
                "Remark",
                "TeamAsset",
            ]
        );
        assert_eq!(Asset::data_columns().len(), 13);
    }

    #[test]
    fn test_asset_binds_every_data_column() {
        let asset = Asset::new("LAP-001", "alice");
        let mut parameters = SqlParameterBuilder::new();
        asset.bind_data(&mut parameters).unwrap();

        assert_eq!(parameters.columns(), Asset::data_columns().to_vec());
    }

    #[test]
    fn test_asset_requires_tag() {
        let asset = Asset::new(" ", "alice");
        let mut parameters = SqlParameterBuilder::new();
        let err = asset.bind_data(&mut parameters).unwrap_err();

        assert_eq!(err.to_string(), "Validation error: 'Tag' is a required field.");
    }

    #[test]
    fn test_asset_identity_and_audit() {
        let mut asset = Asset::new("LAP-001", "alice");
        assert_eq!(asset.id(), None);
        asset.set_id(12);
        assert_eq!(asset.id(), Some(12));
        assert_eq!(
            asset.audit().and_then(|a| a.created_by.as_deref()),
            Some("alice")
        );
    }

    #[test]
    fn test_asset_query_conditions() {
        let query = AssetQuery {
            owner: Some("user1".to_string()),
            team_asset: Some(true),
            price: Some(Decimal::new(49999, 2)),
            ..AssetQuery::default()
        };
        let clause = query.to_where_clause().unwrap();

        assert_eq!(
            clause.sql,
            r#"WHERE "Price" = $1 AND "Owner" = $2 AND "TeamAsset" = $3"#
        );
    }

    #[test]
    fn test_asset_query_ignores_blank_remark() {
        let query = AssetQuery {
            remark: Some("  ".to_string()),
            ..AssetQuery::default()
        };
        assert!(query.to_where_clause().unwrap().is_empty());
    }

    #[test]
    fn test_asset_query_operator_from_json() {
        let query: AssetQuery =
            serde_json::from_str(r#"{"logical_operator": "Or", "tag": "A", "serial": "B"}"#)
                .unwrap();
        assert_eq!(query.logical_operator(), LogicalOperator::Or);
        assert_eq!(
            query.to_where_clause().unwrap().sql,
            r#"WHERE "Tag" = $1 OR "Serial" = $2"#
        );
    }
}
