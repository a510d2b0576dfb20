//! Observability setup for the workforce catalog service.

pub mod tracing_setup;
