//! Fake static file server for HTTP source tests.
//!
//! Spins up a minimal `axum` server on a random TCP port bound to 127.0.0.1
//! and answers every request from a fixed table of paths. Unknown paths get
//! `404`. A route can be given a delay to exercise client timeouts.
//!
//! ```rust,ignore
//! let server = FakeStaticServer::builder()
//!     .file("/dict.txt", SCENARIO)
//!     .start()
//!     .await
//!     .unwrap();
//! let url = server.url("/dict.txt");
//! ```

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

#[derive(Clone)]
struct Route {
    status: StatusCode,
    body: Vec<u8>,
    delay: Duration,
}

#[derive(Default)]
pub struct FakeStaticServerBuilder {
    routes: HashMap<String, Route>,
}

impl FakeStaticServerBuilder {
    /// Serve `body` with `200 OK`.
    pub fn file(self, path: &str, body: impl Into<Vec<u8>>) -> Self {
        self.route(path, StatusCode::OK, body, Duration::ZERO)
    }

    /// Answer `path` with an arbitrary status.
    pub fn status(self, path: &str, status: StatusCode) -> Self {
        self.route(path, status, Vec::new(), Duration::ZERO)
    }

    /// Serve `body` only after sleeping for `delay`.
    pub fn slow(self, path: &str, body: impl Into<Vec<u8>>, delay: Duration) -> Self {
        self.route(path, StatusCode::OK, body, delay)
    }

    fn route(mut self, path: &str, status: StatusCode, body: impl Into<Vec<u8>>, delay: Duration) -> Self {
        self.routes.insert(
            path.to_string(),
            Route { status, body: body.into(), delay },
        );
        self
    }

    /// Bind and start serving. Returns once the listener is bound.
    pub async fn start(self) -> std::io::Result<FakeStaticServer> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let app = Router::new()
            .fallback(serve)
            .with_state(Arc::new(self.routes));

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(FakeStaticServer { addr })
    }
}

/// Handle to the running fake server.
pub struct FakeStaticServer {
    addr: SocketAddr,
}

impl FakeStaticServer {
    pub fn builder() -> FakeStaticServerBuilder {
        FakeStaticServerBuilder::default()
    }

    /// Absolute URL for `path` on this server.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

async fn serve(State(routes): State<Arc<HashMap<String, Route>>>, uri: Uri) -> Response {
    match routes.get(uri.path()).cloned() {
        Some(route) => {
            if !route.delay.is_zero() {
                tokio::time::sleep(route.delay).await;
            }
            (route.status, route.body).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
