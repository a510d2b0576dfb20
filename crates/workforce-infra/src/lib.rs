//! Infrastructure layer for the workforce catalog.
//!
//! Loads skill, industry and check definitions from directory trees on disk
//! and reads the optional `workforce.toml` service configuration.

pub mod config;
pub mod loader;
