//! Task records, validation, and repository services.
//!
//! This module owns the sole persisted entity of the system: the `Task`.
//! It covers direct structured creation, partial updates, deletion, and the
//! canonical read ordering every client depends on. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Pure validation rules in [`validation`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
