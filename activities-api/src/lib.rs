//! HTTP API for the school activities signup service.
//!
//! Exposes the activity listing and signup/unregister endpoints over
//! an in-memory [`activities_core::ActivityDirectory`], plus the
//! static landing page the root path redirects to.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod routes;
