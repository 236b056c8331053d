use std::path::Path;

/// Sentinel token value meaning "the supervisor runs without auth". The
/// Authorization header is suppressed entirely when the store holds it.
pub const NO_AUTH: &str = "no_auth";

/// Bearer credentials for the supervisor, read from a persisted store.
///
/// Resolution order: `STRATO_TOKEN` env var, then the token file written at
/// login time. The store is only ever read here; login/logout flows own the
/// writes.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    token: Option<String>,
}

impl Credentials {
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }

    /// Load from the environment, falling back to `token_file` if given.
    pub fn load(token_file: Option<&Path>) -> Self {
        if let Ok(token) = std::env::var("STRATO_TOKEN") {
            if !token.is_empty() {
                return Self::new(Some(token));
            }
        }
        if let Some(path) = token_file {
            match std::fs::read_to_string(path) {
                Ok(raw) => {
                    let token = raw.trim().to_string();
                    if !token.is_empty() {
                        return Self::new(Some(token));
                    }
                }
                Err(e) if e.kind() != std::io::ErrorKind::NotFound => {
                    tracing::warn!(path=%path.display(), error=%e, "token store unreadable, proceeding unauthenticated");
                }
                Err(_) => {}
            }
        }
        Self::new(None)
    }

    /// The token to put on the wire, or `None` when no header should be sent
    /// (no token stored, or the `no_auth` sentinel).
    pub fn bearer(&self) -> Option<&str> {
        match self.token.as_deref() {
            Some(NO_AUTH) | None => None,
            Some(t) => Some(t),
        }
    }
}
