// Application service layer
// Sits between the HTTP handlers and the repositories

pub mod contact_service;

pub use contact_service::ContactService;
