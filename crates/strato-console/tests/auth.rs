use httpmock::prelude::HttpMockRequest;
use httpmock::Method::GET;
use httpmock::MockServer;

use strato_common::{Credentials, NO_AUTH};
use strato_console::ApiClient;

fn has_auth_header(req: &HttpMockRequest) -> bool {
    req.headers
        .as_ref()
        .map(|headers| {
            headers
                .iter()
                .any(|(name, _)| name.eq_ignore_ascii_case("authorization"))
        })
        .unwrap_or(false)
}

#[tokio::test]
async fn stored_token_becomes_a_bearer_header() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/models/")
            .header("authorization", "Bearer s3cret");
        then.status(200).body("{}");
    });

    let api = ApiClient::new(server.base_url(), Credentials::new(Some("s3cret".into())));
    api.get("/v1/models/").send().await.unwrap();
    mock.assert();
}

#[tokio::test]
async fn no_auth_sentinel_sends_no_header() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/models/")
            .matches(|req| !has_auth_header(req));
        then.status(200).body("{}");
    });

    let api = ApiClient::new(server.base_url(), Credentials::new(Some(NO_AUTH.into())));
    api.get("/v1/models/").send().await.unwrap();
    mock.assert();
}
