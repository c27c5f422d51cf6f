//! Web plumbing shared by Kala services: request ids, tracing bootstrap
//! and serde helpers.

pub mod middleware;
pub mod serde;
pub mod tracing;
