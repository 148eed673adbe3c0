//! Contacts API Library
//!
//! A small HTTP service for listing, creating and searching contacts,
//! backed by a MongoDB collection.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod service;
