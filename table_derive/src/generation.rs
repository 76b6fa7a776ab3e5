//! Code generation for the `Entity` and `QueryObject` implementations

use proc_macro2::TokenStream;
use quote::quote;
use syn::Ident;

use crate::parsing::{EntityFields, QueryFields, TableInfo};

pub fn generate_entity_impl(name: &Ident, table_info: &TableInfo, fields: &EntityFields) -> TokenStream {
    let table_name = &table_info.name;
    let query = &table_info.query;
    let primary_key = &fields.primary_key;

    let data_columns: Vec<&str> = fields.data.iter().map(|f| f.column.as_str()).collect();

    let audit_columns = if fields.audit.is_some() {
        quote! {
            ::store_object::traits::entity::CREATION_DATE_COLUMN,
            ::store_object::traits::entity::CREATED_BY_COLUMN,
            ::store_object::traits::entity::MODIFICATION_DATE_COLUMN,
            ::store_object::traits::entity::MODIFIED_BY_COLUMN,
        }
    } else {
        quote! {}
    };

    let audit_impl = match &fields.audit {
        Some(audit) => quote! {
            fn audit(&self) -> Option<&::store_object::AuditFields> {
                Some(&self.#audit)
            }

            fn audit_mut(&mut self) -> Option<&mut ::store_object::AuditFields> {
                Some(&mut self.#audit)
            }
        },
        None => quote! {},
    };

    let binds = fields.data.iter().map(|field| {
        let ident = &field.ident;
        let column = &field.column;
        if field.required {
            quote! { parameters.add_required(&self.#ident, #column)?; }
        } else {
            quote! { parameters.add(&self.#ident, #column)?; }
        }
    });

    quote! {
        impl ::store_object::Entity for #name {
            type Query = #query;

            fn table_name() -> &'static str {
                #table_name
            }

            fn columns() -> &'static [&'static str] {
                &[
                    ::store_object::traits::entity::ID_COLUMN,
                    #audit_columns
                    #(#data_columns),*
                ]
            }

            fn data_columns() -> &'static [&'static str] {
                &[#(#data_columns),*]
            }

            fn id(&self) -> Option<i64> {
                self.#primary_key
            }

            fn set_id(&mut self, id: i64) {
                self.#primary_key = Some(id);
            }

            #audit_impl

            fn bind_data(
                &self,
                parameters: &mut ::store_object::SqlParameterBuilder,
            ) -> Result<(), ::store_object::StoreError> {
                #(#binds)*
                Ok(())
            }
        }
    }
}

pub fn generate_query_object_impl(name: &Ident, fields: &QueryFields) -> TokenStream {
    let operator = match &fields.operator {
        Some(operator) => quote! { self.#operator },
        None => quote! { ::store_object::LogicalOperator::And },
    };

    let conditions = fields.filters.iter().map(|field| {
        let ident = &field.ident;
        let column = &field.column;
        if field.exact {
            quote! { filter.add_exact(&self.#ident, #column); }
        } else {
            quote! { filter.add(&self.#ident, #column); }
        }
    });

    quote! {
        impl ::store_object::QueryObject for #name {
            fn logical_operator(&self) -> ::store_object::LogicalOperator {
                #operator
            }

            fn add_conditions(&self, filter: &mut ::store_object::WhereClauseBuilder) {
                #(#conditions)*
            }
        }
    }
}
