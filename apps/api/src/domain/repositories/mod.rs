// Repository interfaces (ports)
// Implemented by adapters in the infrastructure layer

pub mod contact_repository;

pub use contact_repository::{ContactRepository, RepositoryError, RepositoryResult};
