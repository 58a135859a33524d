//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the `admin` CLI.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Owner-scoped link operations
//! - [`services::auth_service::AuthService`] - Bearer token issue and verify
//! - [`services::user_service::UserService`] - Account management and password checks

pub mod services;
