//! Core types for the school activities signup service.
//!
//! Defines the `Activity` record, the seeded catalog, and the
//! thread-safe in-memory directory that the HTTP layer mutates.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod activity;
pub mod catalog;
pub mod directory;
pub mod error;

pub use activity::Activity;
pub use catalog::seed_catalog;
pub use directory::ActivityDirectory;
pub use error::DirectoryError;
