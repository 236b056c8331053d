/// Resolve the supervisor base URL.
///
/// An explicit endpoint (flag or `STRATO_ENDPOINT`) wins. Otherwise the base
/// is derived from the console's own URL by stripping the trailing `/ui`
/// path segment, since the console is served by the supervisor it talks to.
pub fn resolve_endpoint(explicit: Option<&str>, console_url: &str) -> String {
    if let Some(ep) = explicit {
        if !ep.is_empty() {
            return ep.trim_end_matches('/').to_string();
        }
    }
    let trimmed = console_url.trim_end_matches('/');
    match trimmed.strip_suffix("/ui") {
        Some(base) => base.to_string(),
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_endpoint_wins() {
        assert_eq!(
            resolve_endpoint(Some("http://10.0.0.5:9997/"), "http://ignored/ui"),
            "http://10.0.0.5:9997"
        );
    }

    #[test]
    fn derives_from_console_url() {
        assert_eq!(
            resolve_endpoint(None, "http://127.0.0.1:9997/ui/"),
            "http://127.0.0.1:9997"
        );
        assert_eq!(
            resolve_endpoint(None, "http://127.0.0.1:9997"),
            "http://127.0.0.1:9997"
        );
    }
}
