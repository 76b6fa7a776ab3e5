//! Hand-written entity used by the unit tests

use crate::errors::StoreError;
use crate::query_builder::filter::{LogicalOperator, WhereClauseBuilder};
use crate::query_builder::parameters::SqlParameterBuilder;
use crate::traits::entity::{AuditFields, Entity};
use crate::traits::query_object::QueryObject;

#[derive(Debug, Clone, Default, PartialEq, sqlx::FromRow)]
#[sqlx(rename_all = "PascalCase")]
pub struct Widget {
    pub id: Option<i64>,
    #[sqlx(flatten)]
    pub audit: AuditFields,
    pub name: String,
    pub owner: Option<String>,
    pub active: Option<bool>,
}

impl Widget {
    pub fn new(name: &str, created_by: &str) -> Self {
        Self {
            name: name.to_string(),
            audit: AuditFields::created_by(created_by),
            ..Self::default()
        }
    }
}

impl Entity for Widget {
    type Query = WidgetQuery;

    fn table_name() -> &'static str {
        "Widget"
    }

    fn columns() -> &'static [&'static str] {
        &[
            "Id",
            "CreationDate",
            "CreatedBy",
            "ModificationDate",
            "ModifiedBy",
            "Name",
            "Owner",
            "Active",
        ]
    }

    fn data_columns() -> &'static [&'static str] {
        &["Name", "Owner", "Active"]
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn audit(&self) -> Option<&AuditFields> {
        Some(&self.audit)
    }

    fn audit_mut(&mut self) -> Option<&mut AuditFields> {
        Some(&mut self.audit)
    }

    fn bind_data(&self, parameters: &mut SqlParameterBuilder) -> Result<(), StoreError> {
        parameters
            .add_required(&self.name, "Name")?
            .add(&self.owner, "Owner")?
            .add(&self.active, "Active")?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct WidgetQuery {
    pub id: Option<i64>,
    pub logical_operator: LogicalOperator,
    pub name: Option<String>,
    pub owner: Option<String>,
    pub active: Option<bool>,
}

impl QueryObject for WidgetQuery {
    fn logical_operator(&self) -> LogicalOperator {
        self.logical_operator
    }

    fn add_conditions(&self, filter: &mut WhereClauseBuilder) {
        filter
            .add(&self.id, "Id")
            .add(&self.name, "Name")
            .add(&self.owner, "Owner")
            .add(&self.active, "Active");
    }
}
