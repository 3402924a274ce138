//! # Admin Session Gate
//!
//! A single persisted boolean protecting admin-only views. Two states,
//! LOGGED_OUT and LOGGED_IN; [`login`] is the only way in, [`logout`] the
//! only way out. There is no expiry and no token.
//!
//! This is explicitly **not a security boundary**: anyone with access to the
//! store can set the flag directly. It exists so the admin UI has one place
//! to ask "may I render?" — real credential verification would live behind a
//! server, which this system does not have.

use crate::error::Result;
use crate::store::{keys, KeyValueStore};
use serde::{Deserialize, Serialize};

/// Stored flag value when the operator is logged in.
const LOGGED_IN_FLAG: &str = "true";

/// The operator credential pair.
///
/// Defaults preserve the deployed contract; [`crate::config::CmsConfig`]
/// can override them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "admin123".to_string(),
        }
    }
}

/// Check the pair against `expected`; on an exact match persist the session
/// flag and return `true`. A mismatch returns `false` without touching the
/// store and without revealing which field was wrong.
pub fn login<S: KeyValueStore>(
    store: &mut S,
    expected: &Credentials,
    username: &str,
    password: &str,
) -> Result<bool> {
    if username == expected.username && password == expected.password {
        store.set(keys::ADMIN_AUTH, LOGGED_IN_FLAG)?;
        return Ok(true);
    }
    Ok(false)
}

pub fn is_logged_in<S: KeyValueStore>(store: &S) -> Result<bool> {
    Ok(store.get(keys::ADMIN_AUTH)?.as_deref() == Some(LOGGED_IN_FLAG))
}

pub fn logout<S: KeyValueStore>(store: &mut S) -> Result<()> {
    store.remove(keys::ADMIN_AUTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn test_login_success_sets_flag() {
        let mut store = InMemoryStore::new();
        let creds = Credentials::default();

        assert!(!is_logged_in(&store).unwrap());
        assert!(login(&mut store, &creds, "admin", "admin123").unwrap());
        assert!(is_logged_in(&store).unwrap());
    }

    #[test]
    fn test_login_failure_leaves_state_unchanged() {
        let mut store = InMemoryStore::new();
        let creds = Credentials::default();

        assert!(!login(&mut store, &creds, "admin", "wrong").unwrap());
        assert!(!login(&mut store, &creds, "wrong", "admin123").unwrap());
        assert!(!is_logged_in(&store).unwrap());

        // A failed attempt while logged in does not log the operator out
        login(&mut store, &creds, "admin", "admin123").unwrap();
        assert!(!login(&mut store, &creds, "admin", "wrong").unwrap());
        assert!(is_logged_in(&store).unwrap());
    }

    #[test]
    fn test_logout_clears_flag() {
        let mut store = InMemoryStore::new();
        let creds = Credentials::default();

        login(&mut store, &creds, "admin", "admin123").unwrap();
        logout(&mut store).unwrap();
        assert!(!is_logged_in(&store).unwrap());

        // Logging out while already out is fine
        logout(&mut store).unwrap();
        assert!(!is_logged_in(&store).unwrap());
    }

    #[test]
    fn test_custom_credentials() {
        let mut store = InMemoryStore::new();
        let creds = Credentials {
            username: "operator".to_string(),
            password: "s3cret".to_string(),
        };

        assert!(!login(&mut store, &creds, "admin", "admin123").unwrap());
        assert!(login(&mut store, &creds, "operator", "s3cret").unwrap());
    }

    #[test]
    fn test_flag_must_be_exact() {
        let mut store = InMemoryStore::new();
        store.set(keys::ADMIN_AUTH, "yes").unwrap();
        assert!(!is_logged_in(&store).unwrap());
    }
}
