//! Breadbox Core - Shared types library.
//!
//! This crate provides common types used across all Breadbox components:
//! - `sync` - GitHub-backed synchronization client for the bakery's data
//! - `integration-tests` - End-to-end tests against a fake contents API
//!
//! # Architecture
//!
//! The core crate contains only types and constants - no I/O, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Domain records (products, categories, orders, contacts,
//!   site settings) and their type-safe IDs
//! - [`paths`] - Fixed path keys of the remote JSON documents
//! - [`defaults`] - Built-in default documents served when a path has
//!   never been written

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod defaults;
pub mod paths;
pub mod types;

pub use types::*;
