pub mod binding;
pub mod core;
pub mod repository;
pub mod transaction;

pub use core::GenericRepository;
pub use transaction::RepositoryTransaction;
