//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Token keys for bearer authentication
//! - Randomness source for the selection lottery

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::{middleware::auth::TokenKeys, service::selection::shuffle::Shuffler};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TokenKeys` holds the derived HMAC keys
/// - `Arc<dyn Shuffler>` is a reference-counted pointer
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// Every request re-reads registration state through this pool; nothing is
    /// cached in memory.
    pub db: DatabaseConnection,

    /// Keys used to verify bearer tokens.
    pub token_keys: TokenKeys,

    /// Permutation source used by selection runs triggered over HTTP.
    pub shuffler: Arc<dyn Shuffler>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `token_keys` - Bearer token keys derived from the JWT secret
    /// - `shuffler` - Randomness source for the selection lottery
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, token_keys: TokenKeys, shuffler: Arc<dyn Shuffler>) -> Self {
        Self {
            db,
            token_keys,
            shuffler,
        }
    }
}
