//! Core Inventory functionality
//!
//! `Inventory` owns the connection pool, the audit clock and the paging
//! defaults, and hands out a repository per entity.

use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use store_object::{Clock, GenericRepository, PageInfo, SystemClock};

use crate::entities::{Asset, Device, Product, SpecialOwner};
use crate::errors::InventoryError;
use crate::user_roles::UserRoleRepository;
use config::{AppConfig, DatabaseConfig, PagingConfig};

/// Main Inventory coordinator that manages the database connection and repositories
#[derive(Debug, Clone)]
pub struct Inventory {
    pool: PgPool,
    clock: Arc<dyn Clock>,
    paging: PagingConfig,
}

impl Inventory {
    /// Create new Inventory with database connection
    pub async fn new(config: DatabaseConfig) -> Result<Self, InventoryError> {
        let connection_string = config.connection_string();

        let mut pool_options = sqlx::postgres::PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds));

        // Set max lifetime if specified
        if config.max_lifetime_seconds > 0 {
            pool_options =
                pool_options.max_lifetime(Duration::from_secs(config.max_lifetime_seconds));
        }

        let pool = pool_options.connect(&connection_string).await?;
        tracing::info!(
            host = %config.host,
            database = %config.database,
            max_connections = config.max_connections,
            "Connected inventory store"
        );

        Ok(Self::from_pool(pool))
    }

    /// Validate the configuration, connect and apply its paging defaults
    pub async fn from_config(config: AppConfig) -> Result<Self, InventoryError> {
        config.validate()?;
        let AppConfig { database, paging } = config;
        Ok(Self::new(database).await?.with_paging(paging))
    }

    /// Wrap an existing pool, with the system clock and default paging
    pub fn from_pool(pool: PgPool) -> Self {
        Self {
            pool,
            clock: Arc::new(SystemClock),
            paging: PagingConfig::default(),
        }
    }

    /// Clock used to stamp audit fields
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_paging(mut self, paging: PagingConfig) -> Self {
        self.paging = paging;
        self
    }

    /// Get database pool reference
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn paging(&self) -> &PagingConfig {
        &self.paging
    }

    pub fn assets(&self) -> GenericRepository<Asset> {
        self.repository()
    }

    pub fn products(&self) -> GenericRepository<Product> {
        self.repository()
    }

    pub fn devices(&self) -> GenericRepository<Device> {
        self.repository()
    }

    pub fn special_owners(&self) -> GenericRepository<SpecialOwner> {
        self.repository()
    }

    pub fn user_roles(&self) -> UserRoleRepository {
        UserRoleRepository::new(self.pool.clone())
    }

    /// Repository for any entity, sharing this pool and clock
    pub fn repository<T: store_object::Entity>(&self) -> GenericRepository<T> {
        GenericRepository::with_clock(self.pool.clone(), self.clock.clone())
    }

    /// Build a `PageInfo` from optional request parameters, filling gaps from the paging defaults
    pub fn page_request(
        &self,
        page_number: Option<u32>,
        page_size: Option<u32>,
        order_by: Option<&str>,
    ) -> Result<PageInfo, InventoryError> {
        Ok(PageInfo::from_request(
            page_number,
            page_size,
            order_by,
            &self.paging,
        )?)
    }

    /// Check database connection health
    pub async fn health_check(&self) -> Result<(), InventoryError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}
