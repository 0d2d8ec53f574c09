//! Selection CLI
//!
//! Terminal front end for the selection pages. Each subcommand loads one
//! page through [`SelectionApi`](selection_client::SelectionApi) and prints
//! the result as text or JSON.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod render;

pub use cli::{Command, Invocation};
pub use commands::{execute, Status};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
