//! Shopgate Gateway library.
//!
//! This crate provides the gateway functionality as a library,
//! allowing it to be tested and reused.
//!
//! # Security
//!
//! This crate holds the Shopify Admin API access token and the webhook
//! shared secret. Both are loaded once at startup, held in
//! `secrecy::SecretString`, and redacted from all `Debug` output.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod routes;
pub mod shopify;
pub mod state;
pub mod webhook;
