//! Configuration file management and option resolution.

/// Config file loading and layered resolution.
pub mod manager;

pub use manager::{
    API_URL_ENV, AUTH_KEY_ENV, ConfigFile, ConfigManager, DEFAULT_API_URL, ResolveOptions,
    resolve_config,
};
