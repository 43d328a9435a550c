//! Session identity: a stable per-installation opaque token.
//!
//! The token is resolved exactly once at bootstrap and threaded
//! explicitly through the app context into the backend worker; no code
//! reads it from ambient state afterwards.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;

const SESSION_ID_PREFIX: &str = "session_";
const SESSION_ID_SUFFIX_DIGITS: usize = 6;

/// Persistence for the opaque session token.
pub trait SessionTokenStore {
    fn load(&self) -> Result<Option<String>>;
    fn save(&mut self, token: &str) -> Result<()>;
}

/// Returns the stored session id, or generates one from a time-based
/// suffix, persists it, and returns it.
pub fn resolve_session_id(store: &mut dyn SessionTokenStore, now_unix_ms: u128) -> Result<String> {
    if let Some(existing) = store.load()? {
        let trimmed = existing.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_owned());
        }
    }

    let token = generate_session_id(now_unix_ms);
    store.save(&token)?;
    Ok(token)
}

pub fn now_unix_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

/// `session_` plus the last six decimal digits of the epoch millis.
fn generate_session_id(now_unix_ms: u128) -> String {
    let digits = now_unix_ms.to_string();
    let tail_start = digits.len().saturating_sub(SESSION_ID_SUFFIX_DIGITS);
    format!("{SESSION_ID_PREFIX}{}", &digits[tail_start..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MemoryStore {
        token: Option<String>,
        saves: usize,
    }

    impl SessionTokenStore for MemoryStore {
        fn load(&self) -> Result<Option<String>> {
            Ok(self.token.clone())
        }

        fn save(&mut self, token: &str) -> Result<()> {
            self.token = Some(token.to_owned());
            self.saves += 1;
            Ok(())
        }
    }

    #[test]
    fn reuses_a_stored_token_without_saving() {
        let mut store = MemoryStore {
            token: Some("session_424242".to_owned()),
            saves: 0,
        };

        let id = resolve_session_id(&mut store, 1_700_000_123_456).expect("resolve must succeed");

        assert_eq!(id, "session_424242");
        assert_eq!(store.saves, 0);
    }

    #[test]
    fn trims_whitespace_from_a_stored_token() {
        let mut store = MemoryStore {
            token: Some("  session_9\n".to_owned()),
            saves: 0,
        };

        let id = resolve_session_id(&mut store, 0).expect("resolve must succeed");

        assert_eq!(id, "session_9");
    }

    #[test]
    fn generates_and_persists_when_absent() {
        let mut store = MemoryStore::default();

        let id = resolve_session_id(&mut store, 1_700_000_123_456).expect("resolve must succeed");

        assert_eq!(id, "session_123456");
        assert_eq!(store.token.as_deref(), Some("session_123456"));
        assert_eq!(store.saves, 1);
    }

    #[test]
    fn blank_stored_token_is_treated_as_absent() {
        let mut store = MemoryStore {
            token: Some("   ".to_owned()),
            saves: 0,
        };

        let id = resolve_session_id(&mut store, 1_700_000_999_999).expect("resolve must succeed");

        assert_eq!(id, "session_999999");
        assert_eq!(store.saves, 1);
    }

    #[test]
    fn short_timestamps_keep_every_digit() {
        let mut store = MemoryStore::default();

        let id = resolve_session_id(&mut store, 42).expect("resolve must succeed");

        assert_eq!(id, "session_42");
    }
}
