//! SQL type definitions
//!
//! This module names the PostgreSQL column types the inventory tables use.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Column types a parameter can be bound as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SqlType {
    BigInt,
    Text,
    Boolean,
    Timestamp,
    Decimal,
}

impl SqlType {
    /// PostgreSQL column type of the inventory tables
    pub fn pg_type(&self) -> &'static str {
        match self {
            SqlType::BigInt => "BIGINT",
            SqlType::Text => "TEXT",
            SqlType::Boolean => "BOOLEAN",
            SqlType::Timestamp => "TIMESTAMPTZ",
            SqlType::Decimal => "NUMERIC(18, 2)",
        }
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pg_type())
    }
}
