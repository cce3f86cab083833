//! Marquee Core - Shared types library.
//!
//! This crate provides common types used across Marquee components:
//! - `server` - Catalog proxy and client-local persistence layer
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids, emails, and ratings, plus the
//!   movie snapshot types shared between the catalog client and the
//!   favorites store

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
