//! Shared domain types for the workforce catalog.
//!
//! Skills, industries and verification checks, the error enums shared by
//! the loader and lookup layers, and the service configuration.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod check;
pub mod config;
pub mod error;
pub mod industry;
mod repr;
pub mod skill;
