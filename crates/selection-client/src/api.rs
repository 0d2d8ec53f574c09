//! The seam between pages and the services they read from

use crate::error::FetchResult;
use crate::models::User;
use async_trait::async_trait;
use selection_core::Tile;

/// Data sources behind the selection pages
///
/// [`HttpClient`](crate::http::HttpClient) talks to the real services; tests
/// substitute an in-memory implementation.
#[async_trait]
pub trait SelectionApi: Send + Sync {
    /// One batch of random uppercase strings
    async fn random_strings(&self) -> FetchResult<Vec<String>>;

    /// The placeholder user list
    async fn users(&self) -> FetchResult<Vec<User>>;

    /// Reference paragraph for the retyping page
    async fn paragraph(&self) -> FetchResult<String>;

    /// Domino tiles in service order
    async fn domino_tiles(&self) -> FetchResult<Vec<Tile>>;
}
