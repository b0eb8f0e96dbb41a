//! HTTP route handlers.

pub mod health;
pub mod nlp;
pub mod tasks;
