//! Content fetch contracts and lightweight test adapters.

pub mod path;
pub mod service;
