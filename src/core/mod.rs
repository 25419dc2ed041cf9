//! Core business logic for token operations.
//!
//! This module contains the domain logic separated from CLI concerns.
//! All types and functions here are testable without the CLI layer.

pub mod decoder;
pub mod encoder;
pub mod key;
pub mod secret;
pub mod verifier;
