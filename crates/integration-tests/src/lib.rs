//! Integration tests for Black Cable.
//!
//! Each test starts its own storefront on an ephemeral port and talks to it
//! over real HTTP, with a cookie-keeping client standing in for a browser.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p black-cable-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::SocketAddr;

use black_cable_storefront::config::StorefrontConfig;
use black_cable_storefront::state::AppState;
use reqwest::Client;

/// A storefront running in the background for one test.
pub struct TestServer {
    base_url: String,
    client: Client,
}

impl TestServer {
    /// Start a storefront with default configuration.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot bind or the client cannot be built.
    pub async fn start() -> Self {
        Self::start_with(AppState::new(StorefrontConfig::default())).await
    }

    /// Start a storefront with the given state.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot bind or the client cannot be built.
    #[allow(clippy::expect_used)]
    pub async fn start_with(state: AppState) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");

        let app = black_cable_storefront::app(state);
        tokio::spawn(async move {
            axum::serve(
                listener,
                app.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await
            .expect("Test server error");
        });

        Self {
            base_url: format!("http://{addr}"),
            client: Self::browser(),
        }
    }

    /// A fresh client with its own cookie jar, i.e. a second visitor.
    ///
    /// # Panics
    ///
    /// Panics if the client cannot be built.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn browser() -> Client {
        Client::builder()
            .cookie_store(true)
            .build()
            .expect("Failed to create HTTP client")
    }

    /// The default visitor's client.
    #[must_use]
    pub const fn client(&self) -> &Client {
        &self.client
    }

    /// Absolute URL for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
