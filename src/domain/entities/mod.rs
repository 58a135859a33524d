//! Core domain entities representing the bookmark data model.
//!
//! Entities are plain data structures without persistence concerns.
//!
//! # Entity Types
//!
//! - [`Link`] - A stored bookmark owned by one user
//! - [`User`] - An account that owns links
//! - [`LinkFilter`] - Search, category and sort criteria for listings
//!
//! Creation and update inputs use separate structs: [`LinkDraft`] for links
//! (shared by create and full-replace update) and [`NewUser`] for accounts.

pub mod filter;
pub mod link;
pub mod user;

pub use filter::{LinkFilter, SortOrder};
pub use link::{Link, LinkDraft};
pub use user::{NewUser, User, UserSummary};
