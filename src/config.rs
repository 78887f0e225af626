//! Settings block persisted alongside the notification collection.

use serde::{Deserialize, Serialize};

/// UI theme selection. Consumed by the shell; the core only stores it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Standard light theme.
    #[default]
    Default,
    /// Pink accent theme.
    Pink,
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::Pink => write!(f, "pink"),
        }
    }
}

/// Interface language, stored as a locale code on disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    /// Vietnamese (`vi_VN`).
    #[default]
    #[serde(rename = "vi_VN")]
    Vietnamese,
    /// English (`en_US`).
    #[serde(rename = "en_US")]
    English,
    /// Simplified Chinese (`zh_CN`).
    #[serde(rename = "zh_CN")]
    Chinese,
}

impl Language {
    /// Locale code used on disk and for catalog file names.
    pub fn code(self) -> &'static str {
        match self {
            Self::Vietnamese => "vi_VN",
            Self::English => "en_US",
            Self::Chinese => "zh_CN",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// User settings persisted in the state document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// UI theme.
    pub theme: Theme,
    /// Interface language.
    pub language: Language,
    /// Whether the host should register itself to launch at login.
    pub autostart: bool,
    /// Keyboard shortcut for the shell's "add notification" action.
    pub shortcut: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Default,
            language: Language::Vietnamese,
            autostart: false,
            shortcut: "Ctrl+Shift+A".to_owned(),
        }
    }
}
