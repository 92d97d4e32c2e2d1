//! Domains module containing business logic organized by bounded contexts.
//!
//! The server currently exposes a single domain: the collaboration tools.

pub mod tools;
