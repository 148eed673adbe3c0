// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory_contact_repository;
pub mod mongo_contact_repository;

pub use in_memory_contact_repository::InMemoryContactRepository;
pub use mongo_contact_repository::{connect, MongoContactRepository, CONTACT_COLLECTION};
