//! Testing utilities for the selection workspace
//!
//! Shared fixtures, an in-memory [`SelectionApi`], and a local warp server
//! that mimics the four services.

#![allow(missing_docs)]

use async_trait::async_trait;
use selection_client::{ClientConfig, FetchError, FetchResult, SelectionApi, User};
use selection_core::domino::parse_tiles;
use selection_core::Tile;
use serde_json::json;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::oneshot;
use warp::http::StatusCode;
use warp::Filter;

pub const SAMPLE_PARAGRAPH: &str = "The quick brown fox jumps over the lazy dog.";
pub const SAMPLE_TILES: &str = "6-6, 1-2, 3-1, 4-5, 5-4, 4-5, 2-2";
pub const DOMINO_AUTH: &str = "JCwd";

pub fn sample_strings() -> Vec<String> {
    vec!["ABCDEFG".to_string(), "ZZZYYY".to_string()]
}

pub fn sample_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "Leanne Graham".into(),
            email: "Sincere@april.biz".into(),
            website: "hildegard.org".into(),
        },
        User {
            id: 2,
            name: "Ervin Howell".into(),
            email: "Shanna@melissa.tv".into(),
            website: "anastasia.net".into(),
        },
    ]
}

pub fn sample_tiles() -> Vec<Tile> {
    parse_tiles(SAMPLE_TILES).unwrap()
}

/// `num` strings of `len` letters, cycling through the alphabet
pub fn generate_strings(num: usize, len: usize) -> Vec<String> {
    (0..num)
        .map(|i| {
            (0..len)
                .map(|j| char::from(b'A' + ((i + j) % 26) as u8))
                .collect()
        })
        .collect()
}

/// In-memory [`SelectionApi`]; a `None` field answers with a 500
#[derive(Debug)]
pub struct FixtureApi {
    pub strings: Option<Vec<String>>,
    pub users: Option<Vec<User>>,
    pub paragraph: Option<String>,
    pub tiles: Option<Vec<Tile>>,
    calls: AtomicUsize,
}

impl FixtureApi {
    /// Every source answers with the sample data
    pub fn new() -> Self {
        Self {
            strings: Some(sample_strings()),
            users: Some(sample_users()),
            paragraph: Some(SAMPLE_PARAGRAPH.to_string()),
            tiles: Some(sample_tiles()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Every source fails
    pub fn failing() -> Self {
        Self {
            strings: None,
            users: None,
            paragraph: None,
            tiles: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_paragraph(mut self, text: &str) -> Self {
        self.paragraph = Some(text.to_string());
        self
    }

    /// Total fetches served
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn answer<T: Clone>(&self, source: &str, value: &Option<T>) -> FetchResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        value.clone().ok_or_else(|| FetchError::NotOk {
            url: format!("fixture://{source}"),
            status: 500,
        })
    }
}

impl Default for FixtureApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SelectionApi for FixtureApi {
    async fn random_strings(&self) -> FetchResult<Vec<String>> {
        self.answer("strings", &self.strings)
    }

    async fn users(&self) -> FetchResult<Vec<User>> {
        self.answer("users", &self.users)
    }

    async fn paragraph(&self) -> FetchResult<String> {
        self.answer("paragraph", &self.paragraph)
    }

    async fn domino_tiles(&self) -> FetchResult<Vec<Tile>> {
        self.answer("dominoes", &self.tiles)
    }
}

/// Local HTTP server speaking the services' wire formats
///
/// Routes:
/// - `/strings/?num=N&len=L` plain text from [`generate_strings`]
/// - `/users` [`sample_users`]
/// - `/alphabets/paragraph` [`SAMPLE_PARAGRAPH`] in its envelope
/// - `/domino/array-type-two` [`SAMPLE_TILES`], 401 without `auth: JCwd`
/// - `/domino/rejected` envelope with `error: true`
/// - `/status/<code>` empty body with that status
/// - `/malformed` a body that is not JSON
#[derive(Debug)]
pub struct FixtureServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
}

impl FixtureServer {
    /// Bind to an ephemeral port and serve in the background
    pub fn start() -> Self {
        let (tx, rx) = oneshot::channel::<()>();
        let (addr, server) = warp::serve(routes()).bind_with_graceful_shutdown(
            ([127, 0, 0, 1], 0),
            async move {
                let _ = rx.await;
            },
        );
        tokio::spawn(server);
        Self {
            addr,
            shutdown: Some(tx),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Default config with every endpoint rebased onto this server
    pub fn config(&self) -> ClientConfig {
        ClientConfig::new()
            .with_base_url(&self.url("/"))
            .unwrap()
            .with_timeout(5)
    }
}

impl Drop for FixtureServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

fn routes(
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone + Send + Sync + 'static {
    let strings = warp::path("strings")
        .and(warp::query::<HashMap<String, String>>())
        .map(|query: HashMap<String, String>| {
            let param = |name: &str| {
                query
                    .get(name)
                    .and_then(|v| v.parse::<usize>().ok())
                    .unwrap_or(0)
            };
            let mut body = generate_strings(param("num"), param("len")).join("\n");
            body.push('\n');
            body
        });

    let users = warp::path!("users").map(|| warp::reply::json(&sample_users()));

    let paragraph = warp::path!("alphabets" / "paragraph").map(|| {
        warp::reply::json(&json!({
            "error": false,
            "data": { "paragraph": { "text": SAMPLE_PARAGRAPH } }
        }))
    });

    let dominoes = warp::path!("domino" / "array-type-two")
        .and(warp::header::optional::<String>("auth"))
        .map(|auth: Option<String>| {
            if auth.as_deref() == Some(DOMINO_AUTH) {
                warp::reply::with_status(
                    warp::reply::json(&json!({
                        "error": false,
                        "message": "Success",
                        "data": { "number": { "typeTwo": SAMPLE_TILES } }
                    })),
                    StatusCode::OK,
                )
            } else {
                warp::reply::with_status(
                    warp::reply::json(&json!({ "error": true, "message": "Unauthorized" })),
                    StatusCode::UNAUTHORIZED,
                )
            }
        });

    let rejected = warp::path!("domino" / "rejected").map(|| {
        warp::reply::json(&json!({
            "error": true,
            "message": "quota exceeded",
            "data": { "number": { "typeTwo": "" } }
        }))
    });

    let status = warp::path!("status" / u16).map(|code: u16| {
        let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        warp::reply::with_status(String::new(), status)
    });

    let malformed = warp::path!("malformed").map(|| "<html>not json</html>");

    strings
        .or(users)
        .or(paragraph)
        .or(dominoes)
        .or(rejected)
        .or(status)
        .or(malformed)
}
