//! Taskdeck: task manager backend with natural-language ingestion.
//!
//! This crate provides the core of a task management service: a validated
//! task repository with a canonical read ordering, and an ingestion pipeline
//! that turns free-text submissions into persisted task records via an
//! external natural-language parser.
//!
//! # Architecture
//!
//! Taskdeck follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, APIs, etc.)
//!
//! # Modules
//!
//! - [`task`]: Task records, validation, and repository services
//! - [`ingestion`]: Free-text to persisted-task pipeline
//! - [`api`]: HTTP surface exposing both

pub mod api;
pub mod config;
pub mod ingestion;
pub mod task;
