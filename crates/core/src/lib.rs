//! Core types for the Cubby key-value store.
//!
//! This crate defines the vocabulary shared by the store engine and the HTTP
//! adapter:
//! - [`Entry`]: a single key/value record
//! - [`Error`]: the canonical error taxonomy
//! - [`Result`]: the result alias used throughout the workspace
//!
//! It deliberately carries no storage or transport logic, so both sides of
//! the service can depend on it without pulling in each other's stack.

#![warn(missing_docs)]

mod entry;
mod error;

pub use entry::Entry;
pub use error::{Error, Result};
