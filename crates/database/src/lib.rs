//! # Rate Calculator Database Crate
//!
//! This crate is the read-only gateway to the PostgreSQL tables the service
//! answers from: `ports`, `regions` and `prices`.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Adapter:** All SQL lives here. The rest of the workspace talks to
//!   the `RateRepository` trait and never sees a query string.
//! - **Bound Parameters Only:** Every user-derived value (identifiers, code lists,
//!   dates) is passed as a bind parameter, never spliced into query text.
//! - **Asynchronous & Pooled:** Queries run on a shared `PgPool`.
//!
//! ## Public API
//!
//! - `connect`: builds the connection pool from `DatabaseOptions`.
//! - `RateRepository`: the data-access interface used by the web server.
//! - `DbRepository`: the PostgreSQL implementation.
//! - `InMemoryRepository`: a fixture-backed implementation for tests and demos.
//! - `DbError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod memory;
pub mod repository;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, DatabaseOptions};
pub use error::DbError;
pub use memory::InMemoryRepository;
pub use repository::{DbRepository, RateRepository};
