//! Conversions from Rust field types to `SqlValue`

use crate::sql::SqlType;
use crate::types::SqlValue;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Implemented by every type an entity or query field may have.
///
/// The SQL type is fixed per Rust type, so `None` still binds as a typed NULL.
pub trait ToSqlValue {
    fn sql_type() -> SqlType
    where
        Self: Sized;

    fn to_sql_value(&self) -> SqlValue;
}

impl ToSqlValue for i64 {
    fn sql_type() -> SqlType {
        SqlType::BigInt
    }

    fn to_sql_value(&self) -> SqlValue {
        SqlValue::BigInt(Some(*self))
    }
}

impl ToSqlValue for String {
    fn sql_type() -> SqlType {
        SqlType::Text
    }

    fn to_sql_value(&self) -> SqlValue {
        SqlValue::Text(Some(self.clone()))
    }
}

impl ToSqlValue for &str {
    fn sql_type() -> SqlType {
        SqlType::Text
    }

    fn to_sql_value(&self) -> SqlValue {
        SqlValue::Text(Some((*self).to_string()))
    }
}

impl ToSqlValue for bool {
    fn sql_type() -> SqlType {
        SqlType::Boolean
    }

    fn to_sql_value(&self) -> SqlValue {
        SqlValue::Boolean(Some(*self))
    }
}

impl ToSqlValue for DateTime<Utc> {
    fn sql_type() -> SqlType {
        SqlType::Timestamp
    }

    fn to_sql_value(&self) -> SqlValue {
        SqlValue::Timestamp(Some(*self))
    }
}

impl ToSqlValue for Decimal {
    fn sql_type() -> SqlType {
        SqlType::Decimal
    }

    fn to_sql_value(&self) -> SqlValue {
        SqlValue::Decimal(Some(*self))
    }
}

impl<T: ToSqlValue> ToSqlValue for Option<T> {
    fn sql_type() -> SqlType {
        T::sql_type()
    }

    fn to_sql_value(&self) -> SqlValue {
        match self {
            Some(value) => value.to_sql_value(),
            None => SqlValue::null(T::sql_type()),
        }
    }
}
