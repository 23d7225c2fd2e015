use jobboard::client::{api::ApiClient, config::ClientConfig};
use jobboard_test_utils::TestContext;

/// API client pointed at the test's mock server.
pub fn client(test: &TestContext) -> ApiClient {
    client_for(&test.api_url())
}

pub fn client_for(api_url: &str) -> ApiClient {
    ApiClient::new(&ClientConfig::default().with_api_url(api_url)).unwrap()
}

/// Base URL on a port nothing listens on
pub fn unreachable_api_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    format!("http://127.0.0.1:{}/api", port)
}
