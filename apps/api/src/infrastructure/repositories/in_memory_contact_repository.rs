use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use crate::domain::contact::Contact;
use crate::domain::repositories::{ContactRepository, RepositoryResult};

/// Process-local implementation of ContactRepository
///
/// Keeps contacts in insertion order. Identifiers use the same ObjectId hex
/// format as the MongoDB adapter. Contents are lost when the process exits.
#[derive(Default)]
pub struct InMemoryContactRepository {
    contacts: RwLock<Vec<Contact>>,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<Contact>> {
        Ok(self.contacts.read().await.clone())
    }

    async fn find_by_name(&self, name: &str) -> RepositoryResult<Vec<Contact>> {
        let contacts = self.contacts.read().await;

        Ok(contacts.iter().filter(|c| c.name == name).cloned().collect())
    }

    async fn save(&self, contact: Contact) -> RepositoryResult<Contact> {
        let contact = if contact.is_persisted() {
            contact
        } else {
            contact.with_id(ObjectId::new().to_hex())
        };

        let mut contacts = self.contacts.write().await;
        match contacts.iter_mut().find(|c| c.id == contact.id) {
            Some(existing) => *existing = contact.clone(),
            None => contacts.push(contact.clone()),
        }

        Ok(contact)
    }
}
