//! Typed parameter values
//!
//! A `SqlValue` is a nullable datum tagged with its SQL type.

use crate::sql::SqlType;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SqlValue {
    BigInt(Option<i64>),
    Text(Option<String>),
    Boolean(Option<bool>),
    Timestamp(Option<DateTime<Utc>>),
    Decimal(Option<Decimal>),
}

impl SqlValue {
    /// A NULL of the given type
    pub fn null(sql_type: SqlType) -> Self {
        match sql_type {
            SqlType::BigInt => SqlValue::BigInt(None),
            SqlType::Text => SqlValue::Text(None),
            SqlType::Boolean => SqlValue::Boolean(None),
            SqlType::Timestamp => SqlValue::Timestamp(None),
            SqlType::Decimal => SqlValue::Decimal(None),
        }
    }

    pub fn sql_type(&self) -> SqlType {
        match self {
            SqlValue::BigInt(_) => SqlType::BigInt,
            SqlValue::Text(_) => SqlType::Text,
            SqlValue::Boolean(_) => SqlType::Boolean,
            SqlValue::Timestamp(_) => SqlType::Timestamp,
            SqlValue::Decimal(_) => SqlType::Decimal,
        }
    }

    pub fn is_null(&self) -> bool {
        match self {
            SqlValue::BigInt(v) => v.is_none(),
            SqlValue::Text(v) => v.is_none(),
            SqlValue::Boolean(v) => v.is_none(),
            SqlValue::Timestamp(v) => v.is_none(),
            SqlValue::Decimal(v) => v.is_none(),
        }
    }

    /// NULL, or text made of whitespace only
    pub fn is_blank(&self) -> bool {
        match self {
            SqlValue::Text(Some(s)) => s.trim().is_empty(),
            other => other.is_null(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_keeps_its_type() {
        let value = SqlValue::null(SqlType::Timestamp);
        assert!(value.is_null());
        assert_eq!(value.sql_type(), SqlType::Timestamp);
    }

    #[test]
    fn test_blank_text() {
        assert!(SqlValue::Text(Some("   ".to_string())).is_blank());
        assert!(SqlValue::Text(None).is_blank());
        assert!(!SqlValue::Text(Some("user1".to_string())).is_blank());
        assert!(!SqlValue::Text(Some("".to_string())).is_null());
    }

    #[test]
    fn test_non_text_blank_means_null() {
        assert!(!SqlValue::Boolean(Some(false)).is_blank());
        assert!(!SqlValue::BigInt(Some(0)).is_blank());
        assert!(SqlValue::Decimal(None).is_blank());
    }

    #[test]
    fn test_serializes_with_type_tag() {
        let json = serde_json::to_string(&SqlValue::BigInt(Some(42))).unwrap();
        assert_eq!(json, r#"{"BigInt":42}"#);
    }
}
