//! Domain models for the storefront.

pub mod contact;
pub mod user;
