//! Integration tests for the MongoDB repository
//!
//! These tests run against a live MongoDB named by `MONGODB_URI`. Each test
//! uses its own throwaway database. When `MONGODB_URI` is not set the tests
//! return early without asserting anything.

use contacts_api::domain::contact::Contact;
use contacts_api::domain::repositories::{ContactRepository, RepositoryError};
use contacts_api::infrastructure::repositories::{connect, MongoContactRepository};
use mongodb::bson::oid::ObjectId;
use mongodb::Database;

/// Connect to a fresh test database, or `None` when no server is configured
async fn setup_test_db() -> Option<Database> {
    let uri = match std::env::var("MONGODB_URI") {
        Ok(uri) => uri,
        Err(_) => {
            eprintln!("MONGODB_URI not set, skipping MongoDB repository test");
            return None;
        }
    };

    let name = format!("contacts_test_{}", ObjectId::new().to_hex());
    Some(
        connect(&uri, &name)
            .await
            .expect("Failed to connect to test database"),
    )
}

/// Drop the per-test database
async fn cleanup_test_db(db: Database) {
    db.drop(None).await.expect("Failed to drop test database");
}

#[tokio::test]
async fn test_find_all_on_empty_collection() {
    let Some(db) = setup_test_db().await else {
        return;
    };
    let repo = MongoContactRepository::new(&db);

    let contacts = repo.find_all().await.expect("find all");
    assert!(contacts.is_empty());

    cleanup_test_db(db).await;
}

#[tokio::test]
async fn test_save_assigns_id_and_lists_contact() {
    let Some(db) = setup_test_db().await else {
        return;
    };
    let repo = MongoContactRepository::new(&db);

    let saved = repo
        .save(Contact::new("Ada", "ada@x.com"))
        .await
        .expect("save contact");

    assert!(saved.is_persisted());
    assert!(ObjectId::parse_str(saved.id.as_deref().unwrap()).is_ok());

    let contacts = repo.find_all().await.expect("find all");
    assert_eq!(contacts, vec![saved]);

    cleanup_test_db(db).await;
}

#[tokio::test]
async fn test_identical_contacts_get_distinct_ids() {
    let Some(db) = setup_test_db().await else {
        return;
    };
    let repo = MongoContactRepository::new(&db);

    let first = repo.save(Contact::new("Ada", "ada@x.com")).await.unwrap();
    let second = repo.save(Contact::new("Ada", "ada@x.com")).await.unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(repo.find_all().await.unwrap().len(), 2);

    cleanup_test_db(db).await;
}

#[tokio::test]
async fn test_save_with_id_replaces_document() {
    let Some(db) = setup_test_db().await else {
        return;
    };
    let repo = MongoContactRepository::new(&db);

    let saved = repo.save(Contact::new("Ada", "ada@x.com")).await.unwrap();
    let updated = Contact {
        email: "ada@lovelace.org".to_string(),
        ..saved.clone()
    };
    repo.save(updated.clone()).await.unwrap();

    assert_eq!(repo.find_all().await.unwrap(), vec![updated]);

    cleanup_test_db(db).await;
}

#[tokio::test]
async fn test_save_with_unknown_id_upserts() {
    let Some(db) = setup_test_db().await else {
        return;
    };
    let repo = MongoContactRepository::new(&db);

    let id = ObjectId::new().to_hex();
    let saved = repo
        .save(Contact::new("Grace", "grace@navy.mil").with_id(id.clone()))
        .await
        .unwrap();

    assert_eq!(saved.id.as_deref(), Some(id.as_str()));
    assert_eq!(repo.find_all().await.unwrap(), vec![saved]);

    cleanup_test_db(db).await;
}

#[tokio::test]
async fn test_save_with_malformed_id_fails() {
    let Some(db) = setup_test_db().await else {
        return;
    };
    let repo = MongoContactRepository::new(&db);

    let result = repo
        .save(Contact::new("Ada", "ada@x.com").with_id("not-hex"))
        .await;

    assert!(matches!(result, Err(RepositoryError::InvalidId(_))));

    cleanup_test_db(db).await;
}

#[tokio::test]
async fn test_find_by_name_is_exact_and_case_sensitive() {
    let Some(db) = setup_test_db().await else {
        return;
    };
    let repo = MongoContactRepository::new(&db);

    repo.save(Contact::new("Ann", "ann@x.com")).await.unwrap();
    repo.save(Contact::new("ann", "lower@x.com")).await.unwrap();
    repo.save(Contact::new("Anne", "anne@x.com")).await.unwrap();

    let found = repo.find_by_name("Ann").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].email, "ann@x.com");

    assert!(repo.find_by_name("An").await.unwrap().is_empty());
    assert!(repo.find_by_name("Grace").await.unwrap().is_empty());

    cleanup_test_db(db).await;
}
