//! Shared setup for the database integration tests
//!
//! Every test gets its own schema, selected through `search_path` on each
//! pooled connection, so tests can run in parallel against one database.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use inventory_store::prelude::*;
use inventory_store::type_mapping::SqlType;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

/// Inventory tables, with column types taken from the parameter type mapping
fn table_definitions() -> Vec<String> {
    let id = format!(
        r#""Id" {} GENERATED ALWAYS AS IDENTITY PRIMARY KEY"#,
        SqlType::BigInt.pg_type()
    );
    let audit = format!(
        r#""CreationDate" {ts} NOT NULL,
        "CreatedBy" {text} NOT NULL,
        "ModificationDate" {ts} NOT NULL,
        "ModifiedBy" {text} NOT NULL"#,
        ts = SqlType::Timestamp,
        text = SqlType::Text,
    );
    let (bigint, text, boolean, ts, decimal) = (
        SqlType::BigInt,
        SqlType::Text,
        SqlType::Boolean,
        SqlType::Timestamp,
        SqlType::Decimal,
    );

    vec![
        format!(
            r#"CREATE TABLE "Product" (
                {id},
                {audit},
                "Brand" {text} NOT NULL,
                "Type" {text} NOT NULL
            )"#
        ),
        format!(
            r#"CREATE TABLE "Asset" (
                {id},
                {audit},
                "Tag" {text} NOT NULL,
                "Serial" {text},
                "ProductId" {bigint} REFERENCES "Product" ("Id"),
                "Description" {text},
                "InvoiceDate" {ts},
                "InvoiceNumber" {text},
                "Price" {decimal},
                "PaidBy" {text},
                "Owner" {text},
                "InstallDate" {ts},
                "InstalledBy" {text},
                "Remark" {text},
                "TeamAsset" {boolean}
            )"#
        ),
        format!(
            r#"CREATE TABLE "Device" (
                {id},
                "Tag" {text},
                "Owner" {text},
                "Brand" {text},
                "Type" {text}
            )"#
        ),
        format!(
            r#"CREATE TABLE "SpecialOwner" (
                {id},
                {audit},
                "Name" {text} NOT NULL,
                "Remark" {text}
            )"#
        ),
        format!(
            r#"CREATE TABLE "UserRole" (
                {id},
                "UserName" {text} NOT NULL,
                "Roles" {text}
            )"#
        ),
    ]
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 2, 29, 10, 15, 30).unwrap()
}

/// Fresh schema named `schema` holding every inventory table
pub async fn setup_pool(schema: &str) -> PgPool {
    let database_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for integration tests");

    let admin = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database");
    sqlx::query(&format!(r#"DROP SCHEMA IF EXISTS "{}" CASCADE"#, schema))
        .execute(&admin)
        .await
        .expect("Failed to drop schema");
    sqlx::query(&format!(r#"CREATE SCHEMA "{}""#, schema))
        .execute(&admin)
        .await
        .expect("Failed to create schema");
    admin.close().await;

    let search_path = format!(r#"SET search_path TO "{}""#, schema);
    let pool = PgPoolOptions::new()
        .max_connections(4)
        .after_connect(move |conn, _meta| {
            let search_path = search_path.clone();
            Box::pin(async move {
                sqlx::query(&search_path).execute(conn).await?;
                Ok(())
            })
        })
        .connect(&database_url)
        .await
        .expect("Failed to connect to database");

    for ddl in table_definitions() {
        sqlx::query(&ddl)
            .execute(&pool)
            .await
            .expect("Failed to create table");
    }

    pool
}

pub async fn cleanup_schema(pool: &PgPool, schema: &str) {
    let _ = sqlx::query(&format!(r#"DROP SCHEMA IF EXISTS "{}" CASCADE"#, schema))
        .execute(pool)
        .await;
    pool.close().await;
}

/// Inventory over `pool` whose audit clock always reads `fixed_now()`
pub fn inventory(pool: &PgPool) -> Inventory {
    Inventory::from_pool(pool.clone()).with_clock(Arc::new(FixedClock::new(fixed_now())))
}
