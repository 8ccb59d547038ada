use common::config::ApiConfig;
use log::Level;
use std::str::FromStr;

// both are read when the wasm bundle is built, e.g.
// `API_BASE_URL=https://api.example.org LOG_LEVEL=debug trunk build`

/// The api the app talks to, from `API_BASE_URL`.

pub fn api() -> ApiConfig {
    ApiConfig::new(option_env!("API_BASE_URL"))
}

/// The console log level, from `LOG_LEVEL`. Defaults to info.

pub fn log_level() -> Level {
    option_env!("LOG_LEVEL")
        .and_then(|level| Level::from_str(level).ok())
        .unwrap_or(Level::Info)
}
