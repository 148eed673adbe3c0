// Domain layer module exports
// Domain is independent of infrastructure concerns

pub mod contact;
pub mod repositories;
