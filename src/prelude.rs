//! Convenience re-exports for common inventory-store usage
//!
//! # Example
//!
//! ```rust
//! use inventory_store::prelude::*;
//! ```

// Core Inventory components
pub use crate::core::Inventory;
pub use crate::entities::*;
pub use crate::errors::InventoryError;
pub use crate::user_roles::{UserRoleRepository, UserRoles};

// Re-export centralized config
pub use config::{AppConfig, DatabaseConfig, PagingConfig};

// Re-export commonly used store-object types for convenience
pub use store_object::prelude::*;

// Re-export store_object module for macro-generated code
pub use store_object;

// Derives for entities and query objects
pub use table_derive::{Entity, QueryObject};

// Common external dependencies
pub use sqlx;
pub use tokio;
