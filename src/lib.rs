//! # Inventory Store
//!
//! Data access for an asset, device and owner inventory on PostgreSQL:
//! generic CRUD, structured queries and paging over derived entities.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use inventory_store::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::load()?;
//!     let inventory = Inventory::from_config(config).await?;
//!
//!     let mut asset = Asset::new("LAP-0042", "alice");
//!     asset.owner = Some("user1".to_string());
//!     inventory.assets().insert(&mut asset).await?;
//!
//!     let query = AssetQuery {
//!         owner: Some("user1".to_string()),
//!         team_asset: Some(true),
//!         ..AssetQuery::default()
//!     };
//!     let page = inventory.page_request(Some(1), Some(20), Some("-CreatedBy"))?;
//!     let result = inventory.assets().paged_query(&page, Some(&query)).await?;
//!     println!("{} of {} assets", result.len(), result.total_count());
//!
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod entities;
pub mod errors;
pub mod prelude;
pub mod strings;
pub mod user_roles;

// Re-export the main public types for convenience
pub use core::Inventory;
pub use errors::InventoryError;
pub use user_roles::{UserRoleRepository, UserRoles};

// Re-export centralized config
pub use config::{AppConfig, DatabaseConfig, PagingConfig};

// Re-export internal crates used by macros and public API
// These MUST be public for the generated macro code to work correctly
pub use store_object;
pub use table_derive;
pub use type_mapping;

// Logging macros, compiled in with the `debug-logging` feature
pub use store_object::{debug_log, trace_log};

// Re-export external dependencies used in public API
pub use sqlx;
pub use async_trait;
