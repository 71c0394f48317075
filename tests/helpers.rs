// Shared test helpers for mock reputation servers and clients.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use phishing_checker::config::Config;
use phishing_checker::initialization::init_client;
use phishing_checker::SafeBrowsingClient;
use wiremock::MockServer;

/// Path the mock server serves lookups on, mirroring the real endpoint.
pub const LOOKUP_PATH: &str = "/v4/threatMatches:find";

/// Key sent by every test client.
pub const TEST_API_KEY: &str = "test-key";

/// Builds a lookup client pointed at `server` with the given timeout.
#[allow(dead_code)] // Used by other test files
pub fn client_for(server: &MockServer, timeout_seconds: u64) -> SafeBrowsingClient {
    let config = Config {
        timeout_seconds,
        user_agent: "phishing_checker_test/1.0".to_string(),
        ..Default::default()
    };
    let http = init_client(&config).expect("Failed to build HTTP client");
    SafeBrowsingClient::new(http, format!("{}{}", server.uri(), LOOKUP_PATH))
}

/// Builds a lookup client for an address where nothing is listening.
#[allow(dead_code)] // Used by other test files
pub fn client_for_closed_port() -> SafeBrowsingClient {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().expect("Failed to read address").port();
    drop(listener);

    let http = init_client(&Config::default()).expect("Failed to build HTTP client");
    SafeBrowsingClient::new(http, format!("http://127.0.0.1:{}{}", port, LOOKUP_PATH))
}
