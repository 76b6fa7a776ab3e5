//! Parsing utilities for entity and query attributes
//!
//! This module handles the parsing of `#[table]`, `#[primary_key]`,
//! `#[audit]`, `#[field]` and `#[filter]` attributes and the validation of
//! table and column names.

use syn::{Attribute, Data, DeriveInput, Error, Fields, Ident, LitStr, Result};

/// Validate table name and return syn::Error for better proc macro error handling
pub fn validate_table_name_syn(name: &str, span: proc_macro2::Span) -> Result<()> {
    validate_identifier(name)
        .map_err(|e| Error::new(span, format!("Invalid table name '{}': {}", name, e)))
}

/// Validate column name and return syn::Error for better proc macro error handling
pub fn validate_column_name_syn(name: &str, span: proc_macro2::Span) -> Result<()> {
    validate_identifier(name)
        .map_err(|e| Error::new(span, format!("Invalid column name '{}': {}", name, e)))
}

/// Compile-time copy of store_object::validation, so bad names fail the build
fn validate_identifier(name: &str) -> std::result::Result<(), String> {
    if name.is_empty() {
        return Err("Name cannot be empty".to_string());
    }

    if name.len() > 63 {
        return Err(format!(
            "Name '{}' is too long: {} characters (max 63)",
            name,
            name.len()
        ));
    }

    let first_char = name
        .chars()
        .next()
        .ok_or_else(|| "Name cannot be empty".to_string())?;
    if !first_char.is_ascii_alphabetic() && first_char != '_' {
        return Err(format!(
            "Name '{}' must start with a letter or underscore",
            name
        ));
    }

    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(format!("Name '{}' contains invalid characters: only alphanumeric characters and underscores are allowed", name));
    }

    Ok(())
}

/// `product_id` -> `ProductId`, the same mapping as sqlx `rename_all = "PascalCase"`
pub fn to_pascal_case(name: &str) -> String {
    name.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

#[derive(Debug)]
pub struct TableInfo {
    pub name: String,
    pub query: Ident,
}

#[derive(Debug)]
pub struct ColumnField {
    pub ident: Ident,
    pub column: String,
    pub required: bool,
}

#[derive(Debug)]
pub struct EntityFields {
    pub primary_key: Ident,
    pub audit: Option<Ident>,
    pub data: Vec<ColumnField>,
}

#[derive(Debug)]
pub struct FilterField {
    pub ident: Ident,
    pub column: String,
    pub exact: bool,
}

#[derive(Debug)]
pub struct QueryFields {
    pub operator: Option<Ident>,
    pub filters: Vec<FilterField>,
}

/// `#[table(name = "Asset", query = "AssetQuery")]`; `query` defaults to `<Struct>Query`
pub fn parse_table_attributes(input: &DeriveInput) -> Result<TableInfo> {
    let mut name = None;
    let mut query = None;

    for attr in input.attrs.iter().filter(|a| a.path().is_ident("table")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let value: LitStr = meta.value()?.parse()?;
                validate_table_name_syn(&value.value(), value.span())?;
                name = Some(value.value());
                Ok(())
            } else if meta.path.is_ident("query") {
                let value: LitStr = meta.value()?.parse()?;
                query = Some(value.parse::<Ident>()?);
                Ok(())
            } else {
                Err(meta.error("unsupported table attribute, expected `name` or `query`"))
            }
        })?;
    }

    let name = name.ok_or_else(|| {
        Error::new_spanned(
            &input.ident,
            "table attribute is required: add #[table(name = \"TableName\")] to your struct",
        )
    })?;
    let query =
        query.unwrap_or_else(|| Ident::new(&format!("{}Query", input.ident), input.ident.span()));

    Ok(TableInfo { name, query })
}

pub fn parse_entity_fields(input: &DeriveInput) -> Result<EntityFields> {
    let mut primary_key = None;
    let mut audit = None;
    let mut data = Vec::new();

    for field in named_fields(input, "Entity")? {
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| Error::new_spanned(field, "Field must have a name"))?;

        if has_attribute(&field.attrs, "primary_key") {
            if primary_key.is_some() {
                return Err(Error::new_spanned(field, "only one #[primary_key] is allowed"));
            }
            if to_pascal_case(&ident.to_string()) != "Id" {
                return Err(Error::new_spanned(
                    field,
                    "the primary key must map to the `Id` column (name the field `id`)",
                ));
            }
            primary_key = Some(ident);
            continue;
        }

        if has_attribute(&field.attrs, "audit") {
            if audit.is_some() {
                return Err(Error::new_spanned(field, "only one #[audit] field is allowed"));
            }
            audit = Some(ident);
            continue;
        }

        let mut column = None;
        let mut required = false;
        let mut skip = false;
        for attr in field.attrs.iter().filter(|a| a.path().is_ident("field")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("column") {
                    let value: LitStr = meta.value()?.parse()?;
                    column = Some(value.value());
                    Ok(())
                } else if meta.path.is_ident("required") {
                    required = true;
                    Ok(())
                } else if meta.path.is_ident("skip") {
                    skip = true;
                    Ok(())
                } else {
                    Err(meta.error(
                        "unsupported field attribute, expected `column`, `required` or `skip`",
                    ))
                }
            })?;
        }

        if skip {
            continue;
        }

        let column = column.unwrap_or_else(|| to_pascal_case(&ident.to_string()));
        validate_column_name_syn(&column, ident.span())?;
        data.push(ColumnField {
            ident,
            column,
            required,
        });
    }

    let primary_key = primary_key.ok_or_else(|| {
        Error::new_spanned(&input.ident, "an Entity needs a #[primary_key] field `id: Option<i64>`")
    })?;
    if data.is_empty() {
        return Err(Error::new_spanned(
            &input.ident,
            "an Entity needs at least one data column",
        ));
    }

    Ok(EntityFields {
        primary_key,
        audit,
        data,
    })
}

/// Every field is a filter except the one named `logical_operator` (or marked
/// `#[filter(operator)]`) and fields marked `#[filter(skip)]`
pub fn parse_query_fields(input: &DeriveInput) -> Result<QueryFields> {
    let mut operator = None;
    let mut filters = Vec::new();

    for field in named_fields(input, "QueryObject")? {
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| Error::new_spanned(field, "Field must have a name"))?;

        let mut column = None;
        let mut exact = false;
        let mut skip = false;
        let mut is_operator = ident == "logical_operator";
        for attr in field.attrs.iter().filter(|a| a.path().is_ident("filter")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("column") {
                    let value: LitStr = meta.value()?.parse()?;
                    column = Some(value.value());
                    Ok(())
                } else if meta.path.is_ident("exact") {
                    exact = true;
                    Ok(())
                } else if meta.path.is_ident("skip") {
                    skip = true;
                    Ok(())
                } else if meta.path.is_ident("operator") {
                    is_operator = true;
                    Ok(())
                } else {
                    Err(meta.error(
                        "unsupported filter attribute, expected `column`, `exact`, `operator` or `skip`",
                    ))
                }
            })?;
        }

        if is_operator {
            if operator.is_some() {
                return Err(Error::new_spanned(field, "only one logical operator field is allowed"));
            }
            operator = Some(ident);
            continue;
        }
        if skip {
            continue;
        }

        let column = column.unwrap_or_else(|| to_pascal_case(&ident.to_string()));
        validate_column_name_syn(&column, ident.span())?;
        if filters.iter().any(|f: &FilterField| f.column == column) {
            return Err(Error::new_spanned(
                field,
                format!("column '{}' is filtered more than once", column),
            ));
        }
        filters.push(FilterField {
            ident,
            column,
            exact,
        });
    }

    Ok(QueryFields { operator, filters })
}

fn named_fields<'a>(
    input: &'a DeriveInput,
    derive: &str,
) -> Result<impl Iterator<Item = &'a syn::Field>> {
    if let Data::Struct(data_struct) = &input.data {
        if let Fields::Named(fields_named) = &data_struct.fields {
            return Ok(fields_named.named.iter());
        }
    }

    Err(Error::new_spanned(
        &input.ident,
        format!("{} can only be derived for structs with named fields", derive),
    ))
}

pub fn has_attribute(attrs: &[Attribute], name: &str) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_pascal_case() {
        assert_eq!(to_pascal_case("id"), "Id");
        assert_eq!(to_pascal_case("product_id"), "ProductId");
        assert_eq!(to_pascal_case("team_asset"), "TeamAsset");
        assert_eq!(to_pascal_case("Serial"), "Serial");
    }

    #[test]
    fn test_valid_table_names() {
        for name in ["Asset", "SpecialOwner", "_private", "Table123", "Order"] {
            assert!(validate_table_name_syn(name, proc_macro2::Span::call_site()).is_ok());
        }
    }

    #[test]
    fn test_invalid_names() {
        let malicious_names = [
            "",
            "123table",
            "user-table",
            "Asset; DROP TABLE Asset; --",
            "Asset\"; DELETE FROM Asset; --",
        ];

        for name in malicious_names {
            assert!(
                validate_column_name_syn(name, proc_macro2::Span::call_site()).is_err(),
                "Should reject: {}",
                name
            );
        }
    }

    #[test]
    fn test_parse_entity() {
        let input: DeriveInput = parse_quote! {
            #[table(name = "Device", query = "DeviceFilter")]
            struct Device {
                #[primary_key]
                id: Option<i64>,
                #[field(required)]
                tag: String,
                #[field(column = "OwnerName")]
                owner: Option<String>,
                #[field(skip)]
                cached: Option<String>,
            }
        };

        let table = parse_table_attributes(&input).unwrap();
        assert_eq!(table.name, "Device");
        assert_eq!(table.query, "DeviceFilter");

        let fields = parse_entity_fields(&input).unwrap();
        assert_eq!(fields.primary_key, "id");
        assert!(fields.audit.is_none());
        let columns: Vec<_> = fields.data.iter().map(|f| f.column.as_str()).collect();
        assert_eq!(columns, vec!["Tag", "OwnerName"]);
        assert!(fields.data[0].required);
        assert!(!fields.data[1].required);
    }

    #[test]
    fn test_parse_entity_defaults_query_name() {
        let input: DeriveInput = parse_quote! {
            #[table(name = "Asset")]
            struct Asset {
                #[primary_key]
                id: Option<i64>,
                #[audit]
                audit: AuditFields,
                tag: String,
            }
        };

        assert_eq!(parse_table_attributes(&input).unwrap().query, "AssetQuery");
        assert_eq!(parse_entity_fields(&input).unwrap().audit.unwrap(), "audit");
    }

    #[test]
    fn test_entity_errors() {
        let missing_table: DeriveInput = parse_quote! {
            struct Asset { #[primary_key] id: Option<i64>, tag: String }
        };
        assert!(parse_table_attributes(&missing_table).is_err());

        let missing_key: DeriveInput = parse_quote! {
            #[table(name = "Asset")]
            struct Asset { tag: String }
        };
        assert!(parse_entity_fields(&missing_key).is_err());

        let wrong_key: DeriveInput = parse_quote! {
            #[table(name = "Asset")]
            struct Asset { #[primary_key] asset_id: Option<i64>, tag: String }
        };
        assert!(parse_entity_fields(&wrong_key).is_err());

        let bad_table: DeriveInput = parse_quote! {
            #[table(name = "Asset Table")]
            struct Asset { #[primary_key] id: Option<i64>, tag: String }
        };
        assert!(parse_table_attributes(&bad_table).is_err());
    }

    #[test]
    fn test_parse_query() {
        let input: DeriveInput = parse_quote! {
            struct AssetQuery {
                id: Option<i64>,
                logical_operator: LogicalOperator,
                tag: Option<String>,
                #[filter(exact)]
                remark: Option<String>,
                #[filter(column = "ProductId")]
                product: Option<i64>,
                #[filter(skip)]
                note: Option<String>,
            }
        };

        let fields = parse_query_fields(&input).unwrap();
        assert_eq!(fields.operator.unwrap(), "logical_operator");
        let columns: Vec<_> = fields.filters.iter().map(|f| f.column.as_str()).collect();
        assert_eq!(columns, vec!["Id", "Tag", "Remark", "ProductId"]);
        assert!(fields.filters[2].exact);
    }

    #[test]
    fn test_query_duplicate_column() {
        let input: DeriveInput = parse_quote! {
            struct AssetQuery {
                owner: Option<String>,
                #[filter(column = "Owner")]
                owner_name: Option<String>,
            }
        };
        assert!(parse_query_fields(&input).is_err());
    }
}
