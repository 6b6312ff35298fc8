//! # Database Crate
//!
//! This crate acts as a high-level, application-specific interface to the
//! document store holding learner profiles. It is the persistence layer of
//! the platform.
//!
//! ## Architectural Principles
//!
//! - **Adapter:** This crate encapsulates all store-specific logic. It
//!   exposes a clean API to the rest of the application and hides the wire
//!   protocol and driver details.
//! - **Explicit handles:** The connection is an explicitly constructed
//!   [`StoreClient`] injected into the repository; there is no process-global
//!   connection state.
//! - **Closed partial updates:** Nested fields are mutated through
//!   [`ProfileUpdate`], a validated mapping of known dotted paths — unknown
//!   paths are rejected instead of silently drifting the stored schema.
//!
//! ## Public API
//!
//! - `connect` / `connect_from_env`: async functions establishing the store
//!   connection.
//! - `ProfileRepository`: the main struct providing the data-access methods
//!   (`create`, `get`, `update`).
//! - `ProfileUpdate`: the builder for partial profile updates.
//! - `DbError`: the specific error types that can be returned from this
//!   crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod repository;
pub mod update;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{StoreClient, connect, connect_from_env};
pub use error::DbError;
pub use repository::ProfileRepository;
pub use update::ProfileUpdate;
