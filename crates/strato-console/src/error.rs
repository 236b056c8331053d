use reqwest::StatusCode;

/// Errors an orchestration step can produce.
///
/// The only status code with its own meaning anywhere in the console is 404
/// in the UI-open probe, and that branch is handled inline. Every other
/// non-2xx response collapses into `UnexpectedStatus`.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// Network unreachable, timeout, TLS failure: anything below HTTP.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response outside the differentiated 404 probe branch.
    #[error("unexpected status {0}")]
    UnexpectedStatus(StatusCode),

    /// 2xx response whose body did not decode as expected.
    #[error("malformed response body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    /// Another mutating call or a refresh is in flight; nothing was sent.
    #[error("another operation is in flight")]
    Busy,
}

impl ConsoleError {
    /// Consume a response, turning non-success statuses into errors.
    pub fn check(resp: reqwest::Response) -> Result<reqwest::Response, ConsoleError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            Err(ConsoleError::UnexpectedStatus(resp.status()))
        }
    }
}
