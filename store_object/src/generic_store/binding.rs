//! Binding typed parameters onto sqlx queries

use crate::query_builder::parameters::SqlParameters;
use sqlx::postgres::PgArguments;
use sqlx::query::{Query, QueryAs, QueryScalar};
use sqlx::Postgres;
use type_mapping::SqlValue;

/// Bind one `SqlValue`; NULLs keep their SQL type
macro_rules! bind_sql_value {
    ($query:expr, $value:expr) => {
        match $value {
            SqlValue::BigInt(v) => $query.bind(v),
            SqlValue::Text(v) => $query.bind(v),
            SqlValue::Boolean(v) => $query.bind(v),
            SqlValue::Timestamp(v) => $query.bind(v),
            SqlValue::Decimal(v) => $query.bind(v),
        }
    };
}

pub(crate) fn bind_query<'q>(
    mut query: Query<'q, Postgres, PgArguments>,
    parameters: &SqlParameters,
) -> Query<'q, Postgres, PgArguments> {
    for parameter in parameters {
        query = bind_sql_value!(query, parameter.value().clone());
    }
    query
}

pub(crate) fn bind_query_as<'q, T>(
    mut query: QueryAs<'q, Postgres, T, PgArguments>,
    parameters: &SqlParameters,
) -> QueryAs<'q, Postgres, T, PgArguments> {
    for parameter in parameters {
        query = bind_sql_value!(query, parameter.value().clone());
    }
    query
}

pub(crate) fn bind_query_scalar<'q, O>(
    mut query: QueryScalar<'q, Postgres, O, PgArguments>,
    parameters: &SqlParameters,
) -> QueryScalar<'q, Postgres, O, PgArguments> {
    for parameter in parameters {
        query = bind_sql_value!(query, parameter.value().clone());
    }
    query
}
