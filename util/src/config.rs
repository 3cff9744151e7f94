//! Global application configuration manager.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton
//! containing runtime configuration values loaded from environment
//! variables. It provides thread-safe access and mutation for testing or
//! overrides in runtime environments.

use std::env;
use std::sync::{OnceLock, RwLock};

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub lesson_storage_root: String,
}

/// Lazily-initialized, thread-safe singleton instance of `AppConfig`.
static CONFIG_INSTANCE: OnceLock<RwLock<AppConfig>> = OnceLock::new();

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            env: env::var("APP_ENV").unwrap_or_else(|_| "development".into()),
            lesson_storage_root: env::var("LESSON_STORAGE_ROOT")
                .unwrap_or_else(|_| "./data".into()),
        }
    }

    fn instance() -> &'static RwLock<AppConfig> {
        CONFIG_INSTANCE.get_or_init(|| RwLock::new(Self::from_env()))
    }

    /// Returns a snapshot of the current configuration.
    pub fn get() -> AppConfig {
        Self::instance().read().expect("config lock poisoned").clone()
    }

    /// Replaces the lesson storage root, primarily for tests that point the
    /// storage layer at a scratch directory.
    pub fn override_lesson_storage_root(root: &str) {
        Self::instance()
            .write()
            .expect("config lock poisoned")
            .lesson_storage_root = root.to_string();
    }
}

/// The configured lesson storage root, as stored (possibly relative).
pub fn storage_root() -> String {
    AppConfig::get().lesson_storage_root
}
