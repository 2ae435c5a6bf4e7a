//! ViaCEP adapter
//!
//! Postal code lookups against a ViaCEP-compatible HTTP API.

pub mod client;

pub use client::ViaCepClient;
