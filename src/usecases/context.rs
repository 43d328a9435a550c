use crate::infra::config::AppConfig;

/// Values resolved once at bootstrap and threaded explicitly through
/// the app; the session id in particular is never re-read from storage
/// after this point.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub session_id: String,
}

impl AppContext {
    pub fn new(config: AppConfig, session_id: String) -> Self {
        Self { config, session_id }
    }
}
