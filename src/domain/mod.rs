//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])
//!
//! # Ownership
//!
//! Every link operation carries the caller's user id down to the repository.
//! There is no "fetch then check owner" step above the store: a query for
//! someone else's link simply finds nothing.

pub mod entities;
pub mod repositories;
