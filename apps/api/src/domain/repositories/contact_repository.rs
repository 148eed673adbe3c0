use async_trait::async_trait;
use thiserror::Error;

use crate::domain::contact::Contact;

/// Errors raised by contact storage
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Storage connection failed: {0}")]
    Connection(String),

    #[error("Storage query failed: {0}")]
    Query(String),

    #[error("Invalid contact id: {0}")]
    InvalidId(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository trait for Contact documents
///
/// Defines the contract for persisting and retrieving contacts.
/// Implementations handle the storage-specific details.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Find every stored contact, in the storage engine's natural order
    async fn find_all(&self) -> RepositoryResult<Vec<Contact>>;

    /// Find contacts whose name equals `name` exactly (case-sensitive)
    async fn find_by_name(&self, name: &str) -> RepositoryResult<Vec<Contact>>;

    /// Save a contact (insert or replace by id)
    ///
    /// A contact without an id is inserted and receives a fresh one.
    /// Returns the stored contact with its id set.
    async fn save(&self, contact: Contact) -> RepositoryResult<Contact>;
}
