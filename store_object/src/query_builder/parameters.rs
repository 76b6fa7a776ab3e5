//! Named statement parameters
//!
//! Every value bound into a statement carries a name (`@Column`) and the
//! column it targets. Names are unique within one statement; the position
//! in the list is the `$n` placeholder the value binds to.

use crate::errors::StoreError;
use crate::validation::ValidatedColumnName;
use type_mapping::{SqlValue, ToSqlValue};

#[derive(Debug, Clone, PartialEq)]
pub struct SqlParameter {
    name: String,
    column: String,
    value: SqlValue,
}

impl SqlParameter {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn value(&self) -> &SqlValue {
        &self.value
    }
}

/// Ordered, uniquely named parameter list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SqlParameters(Vec<SqlParameter>);

impl SqlParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter and return its `$n` placeholder
    pub fn push(
        &mut self,
        name: impl Into<String>,
        column: impl Into<String>,
        value: SqlValue,
    ) -> Result<String, StoreError> {
        let name = name.into();
        if self.get(&name).is_some() {
            return Err(StoreError::validation(format!(
                "Parameter '{}' is bound more than once.",
                name
            )));
        }

        self.0.push(SqlParameter {
            name,
            column: column.into(),
            value,
        });
        Ok(Self::placeholder(self.0.len()))
    }

    /// `$n` for a 1-based position
    pub fn placeholder(position: usize) -> String {
        format!("${}", position)
    }

    pub fn get(&self, name: &str) -> Option<&SqlParameter> {
        self.0.iter().find(|parameter| parameter.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SqlParameter> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a SqlParameters {
    type Item = &'a SqlParameter;
    type IntoIter = std::slice::Iter<'a, SqlParameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Parameter name for a column
pub fn parameter_name(column: &str) -> String {
    format!("@{}", column)
}

/// Collects the column values written by INSERT and UPDATE.
///
/// Unlike filter conditions, NULLs are kept here: a `None` field writes a
/// typed NULL into its column.
#[derive(Debug, Default)]
pub struct SqlParameterBuilder {
    parameters: SqlParameters,
}

impl SqlParameterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<V: ToSqlValue + ?Sized>(
        &mut self,
        value: &V,
        column: &str,
    ) -> Result<&mut Self, StoreError> {
        let column = ValidatedColumnName::new(column)?;
        self.parameters.push(
            parameter_name(column.as_str()),
            column.as_str(),
            value.to_sql_value(),
        )?;
        Ok(self)
    }

    /// Like `add`, but NULL and blank text are rejected
    pub fn add_required<V: ToSqlValue + ?Sized>(
        &mut self,
        value: &V,
        column: &str,
    ) -> Result<&mut Self, StoreError> {
        if value.to_sql_value().is_blank() {
            return Err(StoreError::validation(format!(
                "'{}' is a required field.",
                column
            )));
        }
        self.add(value, column)
    }

    pub fn columns(&self) -> Vec<&str> {
        self.parameters.iter().map(SqlParameter::column).collect()
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    pub fn finish(self) -> SqlParameters {
        self.parameters
    }
}
