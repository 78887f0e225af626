//! Centralized application directory paths.
//!
//! Uses the [`dirs`] crate for platform-appropriate directory resolution.
//!
//! # Environment Overrides
//!
//! Paths can be overridden for testing or custom deployments:
//! - `NUDGE_CONFIG_DIR` — overrides [`config_dir`]
//! - `NUDGE_DATA_DIR` — overrides [`data_dir`]

use std::path::PathBuf;

/// Application config directory.
///
/// Holds `state.json` (notification collection + settings). Resolves to
/// `dirs::config_dir()/nudge/` by default; override with `NUDGE_CONFIG_DIR`.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Some(override_dir) = std::env::var_os("NUDGE_CONFIG_DIR") {
        return PathBuf::from(override_dir);
    }
    dirs::config_dir()
        .map(|d| d.join("nudge"))
        .unwrap_or_else(|| PathBuf::from("/tmp/nudge-config"))
}

/// Application data directory.
///
/// Holds translation catalogs and other shell assets. Resolves to
/// `dirs::data_dir()/nudge/` by default; override with `NUDGE_DATA_DIR`.
#[must_use]
pub fn data_dir() -> PathBuf {
    if let Some(override_dir) = std::env::var_os("NUDGE_DATA_DIR") {
        return PathBuf::from(override_dir);
    }
    dirs::data_dir()
        .map(|d| d.join("nudge"))
        .unwrap_or_else(|| PathBuf::from("/tmp/nudge-data"))
}

/// Directory containing `<locale>.json` translation catalogs.
#[must_use]
pub fn i18n_dir() -> PathBuf {
    data_dir().join("i18n")
}
