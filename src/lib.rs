//! Star Wars Characters Admin Service
//!
//! A small administrative web service for managing a "Characters" dataset,
//! backed by SQLite.
//!
//! ## Features
//!
//! - **Bulk CSV Import**: Upload header-mapped row-sets; all rows land in a
//!   single transaction or none do
//! - **Paginated Export**: Page through a cached projection of the dataset
//!   with slice-style offset/limit
//! - **SQL Console**: Run ad-hoc queries gated to SELECT statements only,
//!   with errors recovered into the response body
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use starwars_admin::{server::AppState, storage::CharacterDatabase};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let db = CharacterDatabase::new_in_memory()?;
//! let app = starwars_admin::server::router(AppState::new(db));
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod error;
pub mod handlers;
pub mod mapper;
pub mod server;
pub mod storage;

// Re-export commonly used types
pub use error::{AdminError, Result};
pub use storage::CharacterDatabase;
