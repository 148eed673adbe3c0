use std::sync::Arc;

use axum::http::StatusCode;

use crate::domain::contact::Contact;
use crate::domain::repositories::{ContactRepository, RepositoryResult};

/// Contact service
///
/// Delegates each call to the repository and tags the result with the HTTP
/// status the caller should answer with. Reads are 200, the create is 202
/// whether or not the write changed anything.
#[derive(Clone)]
pub struct ContactService {
    repository: Arc<dyn ContactRepository>,
}

impl ContactService {
    pub fn new(repository: Arc<dyn ContactRepository>) -> Self {
        Self { repository }
    }

    /// All stored contacts
    pub async fn get_all_contacts(&self) -> RepositoryResult<(StatusCode, Vec<Contact>)> {
        let contacts = self.repository.find_all().await?;
        tracing::debug!(count = contacts.len(), "Listed contacts");

        Ok((StatusCode::OK, contacts))
    }

    /// Persists a contact; the generated id is not handed back
    pub async fn add_contact(&self, contact: Contact) -> RepositoryResult<StatusCode> {
        let saved = self.repository.save(contact).await?;
        tracing::info!(id = ?saved.id, "Contact saved");

        Ok(StatusCode::ACCEPTED)
    }

    /// Contacts whose name equals `name` exactly
    pub async fn get_contacts_by_name(
        &self,
        name: &str,
    ) -> RepositoryResult<(StatusCode, Vec<Contact>)> {
        let contacts = self.repository.find_by_name(name).await?;
        tracing::debug!(name, count = contacts.len(), "Searched contacts by name");

        Ok((StatusCode::OK, contacts))
    }
}
