//! Chat backend HTTP adapter
//!
//! Implements ChatBackend and HealthProbe for the JSON chat service.

pub mod http;
pub mod protocol;
