use serde::Deserialize;

/// Key of the persisted session written by the login surface.
#[cfg(target_arch = "wasm32")]
pub const SESSION_KEY: &str = "user";

/// Desktop builds receive the persisted session through the environment.
#[cfg(not(target_arch = "wasm32"))]
pub const SESSION_ENV: &str = "CAMPANIAS_SESSION";

#[derive(Debug, Clone, Deserialize)]
struct StoredSession {
    token: SessionToken,
}

#[derive(Debug, Clone, Deserialize)]
struct SessionToken {
    access_token: String,
}

/// Resolve the bearer token from the persisted session, read at call time.
/// A missing or malformed session silently yields no token.
pub fn auth_token() -> Option<String> {
    raw_session().and_then(|raw| token_from_session(&raw))
}

fn token_from_session(raw: &str) -> Option<String> {
    serde_json::from_str::<StoredSession>(raw)
        .ok()
        .map(|session| session.token.access_token)
}

#[cfg(target_arch = "wasm32")]
fn raw_session() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(SESSION_KEY).ok()?
}

#[cfg(not(target_arch = "wasm32"))]
fn raw_session() -> Option<String> {
    std::env::var(SESSION_ENV).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_from_valid_session() {
        let raw = r#"{"token": {"access_token": "abc123"}}"#;
        assert_eq!(token_from_session(raw).as_deref(), Some("abc123"));
    }

    #[test]
    fn test_malformed_session_yields_no_token() {
        assert!(token_from_session("not json").is_none());
        assert!(token_from_session("{}").is_none());
        assert!(token_from_session(r#"{"token": {}}"#).is_none());
    }

    #[test]
    fn test_extra_session_fields_are_ignored() {
        let raw = r#"{"username": "ana", "token": {"access_token": "t", "expires_in": 3600}}"#;
        assert_eq!(token_from_session(raw).as_deref(), Some("t"));
    }
}
