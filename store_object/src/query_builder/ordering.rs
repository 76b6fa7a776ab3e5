//! Sort directives
//!
//! A sort directive is a column name with an optional sign: `+Name` sorts
//! ascending, `-Name` descending, and a bare `Name` defaults to ascending.

use crate::errors::StoreError;
use config::DIRECTIVE_PATTERN;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

const ASCENDING_CHARACTER: char = '+';
const DESCENDING_CHARACTER: char = '-';

static DIRECTIVE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DIRECTIVE_PATTERN).expect("sort directive pattern is valid"));

static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w+$").expect("column name pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn to_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    fn sign(&self) -> char {
        match self {
            SortOrder::Asc => ASCENDING_CHARACTER,
            SortOrder::Desc => DESCENDING_CHARACTER,
        }
    }
}

/// Column + direction pair. Equality is by both.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderBy {
    name: String,
    direction: SortOrder,
}

impl OrderBy {
    pub fn new(name: &str, direction: SortOrder) -> Result<Self, StoreError> {
        if name.trim().is_empty() {
            return Err(StoreError::validation("OrderBy name cannot be empty."));
        }
        if !NAME_REGEX.is_match(name) {
            return Err(StoreError::validation(format!(
                "'{}' is not a valid OrderBy name.",
                name
            )));
        }

        Ok(Self {
            name: name.to_string(),
            direction,
        })
    }

    pub fn ascending(name: &str) -> Result<Self, StoreError> {
        Self::new(name, SortOrder::Asc)
    }

    pub fn descending(name: &str) -> Result<Self, StoreError> {
        Self::new(name, SortOrder::Desc)
    }

    /// Parse a `+Name` / `-Name` / `Name` directive
    pub fn parse(input: &str) -> Result<Self, StoreError> {
        if input.trim().is_empty() || !DIRECTIVE_REGEX.is_match(input) {
            return Err(StoreError::validation(format!(
                "'{}' is an invalid format.",
                input
            )));
        }

        if let Some(name) = input.strip_prefix(DESCENDING_CHARACTER) {
            Self::new(name, SortOrder::Desc)
        } else if let Some(name) = input.strip_prefix(ASCENDING_CHARACTER) {
            Self::new(name, SortOrder::Asc)
        } else {
            Self::new(input, SortOrder::Asc)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn direction(&self) -> SortOrder {
        self.direction
    }

    /// Case-sensitive check against a column allow-list
    pub fn is_valid_for<S: AsRef<str>>(&self, columns: &[S]) -> bool {
        columns.iter().any(|column| column.as_ref() == self.name)
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.direction.sign(), self.name)
    }
}

impl FromStr for OrderBy {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for OrderBy {
    type Error = StoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<OrderBy> for String {
    fn from(value: OrderBy) -> Self {
        value.to_string()
    }
}
