// Contact domain module

#![allow(clippy::module_inception)]

pub mod contact;

pub use contact::Contact;
