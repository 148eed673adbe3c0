use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::options::{ClientOptions, ReplaceOptions};
use mongodb::{Client, Collection, Database};
use serde::{Deserialize, Serialize};

use crate::domain::contact::Contact;
use crate::domain::repositories::{ContactRepository, RepositoryError, RepositoryResult};

/// Collection holding one document per contact
pub const CONTACT_COLLECTION: &str = "contact";

/// Connects to MongoDB and returns a handle to `database`
///
/// Pings the server once so an unreachable database fails at startup
/// rather than on the first request.
pub async fn connect(uri: &str, database: &str) -> RepositoryResult<Database> {
    let options = ClientOptions::parse(uri)
        .await
        .map_err(|e| RepositoryError::Connection(format!("Invalid MongoDB URI: {}", e)))?;

    let client = Client::with_options(options)
        .map_err(|e| RepositoryError::Connection(format!("Failed to build client: {}", e)))?;

    let db = client.database(database);
    db.run_command(doc! { "ping": 1 }, None)
        .await
        .map_err(|e| RepositoryError::Connection(format!("Failed to reach MongoDB: {}", e)))?;

    Ok(db)
}

/// Stored shape of a contact
#[derive(Debug, Serialize, Deserialize)]
struct ContactDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
}

impl ContactDocument {
    fn from_contact(contact: &Contact) -> RepositoryResult<Self> {
        let id = contact
            .id
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(|id| ObjectId::parse_str(id).map_err(|_| RepositoryError::InvalidId(id.to_string())))
            .transpose()?;

        Ok(Self {
            id,
            name: contact.name.clone(),
            email: contact.email.clone(),
        })
    }

    fn into_contact(self) -> Contact {
        Contact {
            id: self.id.map(|oid| oid.to_hex()),
            name: self.name,
            email: self.email,
        }
    }
}

/// MongoDB implementation of ContactRepository
///
/// Maps contacts onto the `contact` collection. Identifiers are ObjectIds
/// rendered as 24-character hex strings.
pub struct MongoContactRepository {
    collection: Collection<ContactDocument>,
}

impl MongoContactRepository {
    /// Creates a new MongoContactRepository
    ///
    /// # Arguments
    /// * `db` - Database handle obtained from [`connect`]
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(CONTACT_COLLECTION),
        }
    }

    async fn find_matching(&self, filter: Option<Document>) -> RepositoryResult<Vec<Contact>> {
        let cursor = self
            .collection
            .find(filter, None)
            .await
            .map_err(|e| RepositoryError::Query(format!("Failed to query contacts: {}", e)))?;

        let documents: Vec<ContactDocument> = cursor
            .try_collect()
            .await
            .map_err(|e| RepositoryError::Query(format!("Failed to read contacts: {}", e)))?;

        Ok(documents.into_iter().map(ContactDocument::into_contact).collect())
    }
}

#[async_trait]
impl ContactRepository for MongoContactRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<Contact>> {
        self.find_matching(None).await
    }

    async fn find_by_name(&self, name: &str) -> RepositoryResult<Vec<Contact>> {
        self.find_matching(Some(doc! { "name": name })).await
    }

    async fn save(&self, contact: Contact) -> RepositoryResult<Contact> {
        let document = ContactDocument::from_contact(&contact)?;

        match document.id {
            Some(id) => {
                let options = ReplaceOptions::builder().upsert(true).build();
                self.collection
                    .replace_one(doc! { "_id": id }, &document, options)
                    .await
                    .map_err(|e| RepositoryError::Query(format!("Failed to save contact: {}", e)))?;

                Ok(document.into_contact())
            }
            None => {
                let result = self
                    .collection
                    .insert_one(&document, None)
                    .await
                    .map_err(|e| RepositoryError::Query(format!("Failed to insert contact: {}", e)))?;

                let id = result.inserted_id.as_object_id().ok_or_else(|| {
                    RepositoryError::Query(format!(
                        "Unexpected inserted id: {}",
                        result.inserted_id
                    ))
                })?;

                Ok(contact.with_id(id.to_hex()))
            }
        }
    }
}
