//! Procedural macros for describing entities and their query objects
//!
//! `#[derive(Entity)]` generates the table name, column allow-list, identity,
//! audit access and parameter binding that `GenericRepository` needs.
//! `#[derive(QueryObject)]` turns a struct of optional fields into WHERE
//! clause conditions. Generated code refers to the `store_object` crate.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod generation;
mod parsing;

use generation::{generate_entity_impl, generate_query_object_impl};
use parsing::{parse_entity_fields, parse_query_fields, parse_table_attributes};

/// Derive macro for the `Entity` trait
///
/// ```rust,ignore
/// #[derive(Debug, Clone, sqlx::FromRow, Entity)]
/// #[sqlx(rename_all = "PascalCase")]
/// #[table(name = "Asset", query = "AssetQuery")]
/// pub struct Asset {
///     #[primary_key]
///     pub id: Option<i64>,
///
///     #[audit]
///     #[sqlx(flatten)]
///     pub audit: AuditFields,
///
///     #[field(required)]
///     pub tag: String,
///
///     #[field(column = "ProductId")]
///     pub product: Option<i64>,
/// }
/// ```
///
/// Columns default to the PascalCase field name, matching the sqlx row mapping.
#[proc_macro_derive(Entity, attributes(table, primary_key, audit, field))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let table_info = match parse_table_attributes(&input) {
        Ok(info) => info,
        Err(e) => return e.to_compile_error().into(),
    };

    let fields = match parse_entity_fields(&input) {
        Ok(fields) => fields,
        Err(e) => return e.to_compile_error().into(),
    };

    TokenStream::from(generate_entity_impl(&input.ident, &table_info, &fields))
}

/// Derive macro for the `QueryObject` trait
///
/// ```rust,ignore
/// #[derive(Debug, Clone, Default, QueryObject)]
/// pub struct AssetQuery {
///     pub id: Option<i64>,
///     pub logical_operator: LogicalOperator,
///     pub tag: Option<String>,
///     #[filter(exact)]
///     pub remark: Option<String>,
/// }
/// ```
///
/// Plain fields skip NULL and blank values; `exact` fields skip only NULL.
#[proc_macro_derive(QueryObject, attributes(filter))]
pub fn derive_query_object(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let fields = match parse_query_fields(&input) {
        Ok(fields) => fields,
        Err(e) => return e.to_compile_error().into(),
    };

    TokenStream::from(generate_query_object_impl(&input.ident, &fields))
}
