//! Inventory entities and their query objects

pub mod asset;
pub mod device;
pub mod product;
pub mod special_owner;

pub use asset::{Asset, AssetQuery};
pub use device::{Device, DeviceQuery};
pub use product::{Product, ProductQuery};
pub use special_owner::{SpecialOwner, SpecialOwnerQuery};
