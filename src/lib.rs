//! # Edge Shortener
//!
//! A minimal URL shortener: short codes map to long URLs held in a remote
//! key-value store, visitors are redirected, and each visit is logged
//! best-effort to an external event sink.
//!
//! ## Architecture
//!
//! - **Domain** ([`domain`]) - The transient visit event record
//! - **Infrastructure** ([`infrastructure`]) - Store and publisher
//!   collaborators behind traits
//! - **Handlers** ([`handlers`]) - The five HTTP handlers
//! - **Routes** ([`routes`]) - Router table with a catch-all 404
//!
//! ## Features
//!
//! - Redis-backed short-code to long-URL mappings (in-memory fallback for
//!   local development)
//! - 302 redirects with best-effort, time-bounded visit publishing
//! - Bare admin UI to add mappings and list existing ones
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: Redis-backed store and an HTTP event sink
//! export REDIS_URL="redis://localhost:6379"
//! export EVENT_SINK_URL="https://sink.example.com/events"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod domain;
pub mod error;
pub mod handlers;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::domain::VisitEvent;
    pub use crate::error::AppError;
    pub use crate::infrastructure::publisher::{
        NullPublisher, PublishError, PublishOutcome, VisitPublisher, publish_best_effort,
    };
    pub use crate::infrastructure::store::{MemoryStore, StoreError, UrlStore};
    pub use crate::routes::app_router;
    pub use crate::state::AppState;
}
