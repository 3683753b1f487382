//! Organi.Live Storefront library.
//!
//! This crate provides the storefront functionality as a library,
//! allowing it to be tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod sheets;
pub mod state;
pub mod users;
