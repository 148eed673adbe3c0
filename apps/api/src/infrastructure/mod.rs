// Infrastructure layer module
// Contains storage adapters for the domain repository interfaces

pub mod repositories;
