//! Catalog store and lookup for the workforce catalog.
//!
//! This crate holds the immutable in-memory catalog and the read-only lookup
//! operations over it. It depends only on `workforce-types` -- never on
//! `workforce-infra` or any IO crate.

pub mod catalog;
pub mod selector;
