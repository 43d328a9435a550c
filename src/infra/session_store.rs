use std::{fs, path::PathBuf};

use anyhow::Result;

use crate::{infra::error::AppError, usecases::session::SessionTokenStore};

/// Session token persistence backed by a single file under the app
/// storage directory.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SessionTokenStore for FileSessionStore {
    fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&self.path).map_err(|source| AppError::SessionRead {
            path: self.path.clone(),
            source,
        })?;
        Ok(Some(raw))
    }

    fn save(&mut self, token: &str) -> Result<()> {
        fs::write(&self.path, token).map_err(|source| AppError::SessionWrite {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_returns_none_when_the_file_is_absent() {
        let dir = tempfile::tempdir().expect("temp dir must be creatable");
        let store = FileSessionStore::new(dir.path().join("session_id"));

        let token = store.load().expect("load should succeed");

        assert_eq!(token, None);
    }

    #[test]
    fn save_then_load_round_trips_the_token() {
        let dir = tempfile::tempdir().expect("temp dir must be creatable");
        let mut store = FileSessionStore::new(dir.path().join("session_id"));

        store.save("session_123456").expect("save should succeed");
        let token = store.load().expect("load should succeed");

        assert_eq!(token.as_deref(), Some("session_123456"));
    }

    #[test]
    fn save_overwrites_an_existing_token() {
        let dir = tempfile::tempdir().expect("temp dir must be creatable");
        let mut store = FileSessionStore::new(dir.path().join("session_id"));

        store.save("first").expect("save should succeed");
        store.save("second").expect("save should succeed");

        assert_eq!(
            store.load().expect("load should succeed").as_deref(),
            Some("second")
        );
    }
}
