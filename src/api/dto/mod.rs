//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Every response body carries a `success` flag.

pub mod health;
pub mod link;
