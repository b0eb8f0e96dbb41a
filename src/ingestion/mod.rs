//! Free-text to persisted-task ingestion pipeline.
//!
//! One free-text submission is translated into zero or more task candidates
//! by an external natural-language parser, then each candidate is validated
//! and persisted independently. Translation failures abort the whole batch
//! before any write; per-candidate failures are recorded and reported
//! alongside the successes. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
