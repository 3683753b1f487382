//! Organi.Live Core - Shared types library.
//!
//! This crate provides common types used across all Organi.Live components:
//! - `storefront` - Public-facing catalog, cart, and account site
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no HTTP clients.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and products

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
