use std::path::Path;

use anyhow::Result;

use crate::{
    infra::{self, session_store::FileSessionStore, storage_layout::StorageLayout},
    usecases::{
        context::AppContext,
        session::{now_unix_ms, resolve_session_id},
    },
};

pub fn bootstrap(config_path: Option<&Path>) -> Result<AppContext> {
    let context = build_context(config_path)?;
    infra::logging::init(&context.config.logging)?;

    Ok(context)
}

fn build_context(config_path: Option<&Path>) -> Result<AppContext> {
    let config = infra::config::load(config_path)?;

    let layout = StorageLayout::resolve()?;
    layout.ensure_dirs()?;

    let mut store = FileSessionStore::new(layout.session_token_file());
    let session_id = resolve_session_id(&mut store, now_unix_ms())?;

    Ok(AppContext::new(config, session_id))
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::*;
    use crate::{infra::config::AppConfig, test_support::env_lock};

    #[test]
    fn builds_context_with_defaults_and_a_fresh_session_id() {
        let _guard = env_lock();

        let dir = tempfile::tempdir().expect("temp dir must be creatable");
        let old_xdg = env::var_os("XDG_CONFIG_HOME");
        // SAFETY: env is guarded by process-wide test mutex.
        unsafe { env::set_var("XDG_CONFIG_HOME", dir.path()) };

        let context = build_context(Some(Path::new("./missing-config.toml")))
            .expect("context should build from defaults");
        let second = build_context(Some(Path::new("./missing-config.toml")))
            .expect("second resolve should reuse the token");

        match old_xdg {
            // SAFETY: restoring env while guard is held.
            Some(value) => unsafe { env::set_var("XDG_CONFIG_HOME", value) },
            None => unsafe { env::remove_var("XDG_CONFIG_HOME") },
        }

        assert_eq!(context.config, AppConfig::default());
        assert!(context.session_id.starts_with("session_"));
        assert_eq!(second.session_id, context.session_id);
    }
}
