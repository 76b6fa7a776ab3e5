//! User role lookup
//!
//! The `UserRole` table holds one row per user with a comma separated
//! `Roles` column. It is read as a whole and never written here.

use crate::strings::split_comma_separated;
use sqlx::PgPool;
use std::collections::{BTreeSet, HashMap};
use store_object::StoreError;

pub const USER_ROLE_TABLE: &str = "UserRole";

/// One row of the `UserRole` table
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
#[sqlx(rename_all = "PascalCase")]
pub struct UserRoleRecord {
    pub id: i64,
    pub user_name: String,
    pub roles: Option<String>,
}

/// User name to role set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserRoles(HashMap<String, BTreeSet<String>>);

impl UserRoles {
    /// Fails on the first record without roles
    pub fn from_records<I>(records: I) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = UserRoleRecord>,
    {
        let mut roles_by_user = HashMap::new();
        for record in records {
            let roles = record
                .roles
                .as_deref()
                .filter(|roles| !roles.trim().is_empty())
                .ok_or_else(|| {
                    StoreError::consistency(format!(
                        "Roles not specified for record with id : '{}'.",
                        record.id
                    ))
                })?;

            let roles = split_comma_separated(roles)?.into_iter().collect();
            roles_by_user.insert(record.user_name, roles);
        }

        Ok(Self(roles_by_user))
    }

    pub fn roles_for(&self, user: &str) -> Option<&BTreeSet<String>> {
        self.0.get(user)
    }

    pub fn has_role(&self, user: &str, role: &str) -> bool {
        self.roles_for(user).is_some_and(|roles| roles.contains(role))
    }

    pub fn users(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct UserRoleRepository {
    db_pool: PgPool,
}

impl UserRoleRepository {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }

    pub async fn get_all(&self) -> Result<UserRoles, StoreError> {
        let sql = format!(
            r#"SELECT "Id", "UserName", "Roles" FROM "{}""#,
            USER_ROLE_TABLE
        );
        let records = sqlx::query_as::<_, UserRoleRecord>(&sql)
            .fetch_all(&self.db_pool)
            .await
            .map_err(|e| StoreError::database_operation(USER_ROLE_TABLE, "get_all", e))?;

        tracing::debug!(count = records.len(), "Loaded user roles");
        UserRoles::from_records(records)
    }
}
