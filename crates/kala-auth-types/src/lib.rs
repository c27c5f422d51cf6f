//! Auth types shared across Kala crates.
//!
//! Provides access-token signing and validation plus the `Identity` bearer
//! extractor.

pub mod identity;
pub mod token;
