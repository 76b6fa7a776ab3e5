use serde::{Deserialize, Serialize};
use store_object::LogicalOperator;
use table_derive::{Entity, QueryObject};

/// A device handed out to an owner. Devices carry no audit columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow, Entity)]
#[sqlx(rename_all = "PascalCase")]
#[table(name = "Device")]
pub struct Device {
    #[primary_key]
    pub id: Option<i64>,
    pub tag: Option<String>,
    pub owner: Option<String>,
    pub brand: Option<String>,
    #[field(column = "Type")]
    #[sqlx(rename = "Type")]
    #[serde(rename = "type")]
    pub device_type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, QueryObject)]
pub struct DeviceQuery {
    pub id: Option<i64>,
    #[serde(default)]
    pub logical_operator: LogicalOperator,
    pub tag: Option<String>,
    pub owner: Option<String>,
    pub brand: Option<String>,
    #[filter(column = "Type")]
    #[serde(rename = "type")]
    pub device_type: Option<String>,
}
