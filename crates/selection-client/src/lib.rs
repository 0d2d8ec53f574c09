//! Selection Client
//!
//! Fetches page data from the selection services and settles it into
//! [`LoadState`](selection_core::LoadState) values:
//! - Random uppercase strings (plain text, one per line)
//! - Placeholder user list (JSON)
//! - Reference paragraph (JSON envelope)
//! - Domino tiles (JSON envelope, `", "`-joined tiles)
//!
//! # Example
//!
//! ```rust,ignore
//! use selection_client::{ClientConfig, HttpClient, pages};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpClient::new(ClientConfig::new())?;
//! let state = pages::load_alphabets(&client).await;
//! if let Some(view) = state.data() {
//!     println!("{}", view.counts);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod pages;

// Re-exports for convenience
pub use api::SelectionApi;
pub use config::{ClientConfig, Endpoint, RandomStringsConfig};
pub use error::{ConfigError, ErrorKind, FetchError, FetchResult};
pub use http::HttpClient;
pub use models::User;
pub use pages::{AlphabetsView, DominoesPage, ParagraphPage};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
