mod app_config;
mod file_config;
mod loader;

pub use app_config::{AppConfig, BackendConfig, LogConfig, SpeechConfig};
pub use loader::load;
