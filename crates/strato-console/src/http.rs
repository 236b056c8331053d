use std::time::Duration;

use strato_common::Credentials;

/// Attach bearer auth to a request when a usable token is present,
/// otherwise pass the builder through unchanged.
pub fn auth(builder: reqwest::RequestBuilder, token: Option<&str>) -> reqwest::RequestBuilder {
    match token {
        Some(t) => builder.bearer_auth(t),
        None => builder,
    }
}

/// Thin wrapper over `reqwest::Client` bound to one supervisor.
///
/// Builds URLs from the base and applies credentials. It does not interpret
/// status codes; that is the orchestrators' job.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    credentials: Credentials,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Self {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(3))
            .timeout(Duration::from_secs(60))
            .build()
            .expect("reqwest client");

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
            http,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        auth(self.http.get(self.url(path)), self.credentials.bearer())
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        auth(self.http.post(self.url(path)), self.credentials.bearer())
    }

    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        auth(self.http.delete(self.url(path)), self.credentials.bearer())
    }

    pub fn head(&self, path: &str) -> reqwest::RequestBuilder {
        auth(self.http.head(self.url(path)), self.credentials.bearer())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slash() {
        let api = ApiClient::new("http://127.0.0.1:9997/", Credentials::default());
        assert_eq!(api.url("/v1/models"), "http://127.0.0.1:9997/v1/models");
    }
}
