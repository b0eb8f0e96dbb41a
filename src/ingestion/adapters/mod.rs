//! Adapter implementations of the translator port.

mod http;

pub use http::{HttpTaskTranslator, DEFAULT_TIMEOUT};
