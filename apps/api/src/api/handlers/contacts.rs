use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::AppState;
use crate::domain::contact::Contact;

/// Request body for creating a contact
///
/// Any `id` in the payload is ignored; creates always insert.
/// Missing fields are stored as empty strings.
#[derive(Debug, Deserialize)]
pub struct CreateContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Query parameters for the name search
#[derive(Debug, Deserialize)]
pub struct ContactsByNameQuery {
    pub name: String,
}

/// Contact as returned to clients
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
}

impl From<Contact> for ContactResponse {
    fn from(contact: Contact) -> Self {
        Self {
            id: contact.id,
            name: contact.name,
            email: contact.email,
        }
    }
}

fn to_responses(contacts: Vec<Contact>) -> Vec<ContactResponse> {
    contacts.into_iter().map(ContactResponse::from).collect()
}

/// List every contact
///
/// GET /getAllContacts
pub async fn get_all_contacts(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<ContactResponse>>), ApiError> {
    let (status, contacts) = state
        .contacts
        .get_all_contacts()
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

    Ok((status, Json(to_responses(contacts))))
}

/// Create a contact
///
/// POST /addContact
///
/// Answers 202 with an empty body. The generated id is not returned.
pub async fn add_contact(
    State(state): State<AppState>,
    Json(req): Json<CreateContactRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .contacts
        .add_contact(Contact::new(req.name, req.email))
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to save contact: {}", e)))
}

/// Search contacts by exact name
///
/// GET /getContactsByName?name=...
pub async fn get_contacts_by_name(
    State(state): State<AppState>,
    Query(query): Query<ContactsByNameQuery>,
) -> Result<(StatusCode, Json<Vec<ContactResponse>>), ApiError> {
    let (status, contacts) = state
        .contacts
        .get_contacts_by_name(&query.name)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

    Ok((status, Json(to_responses(contacts))))
}
