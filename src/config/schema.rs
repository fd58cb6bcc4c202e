use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/tunebox/config.toml` or `~/.config/tunebox/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `TUNEBOX__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub player: PlayerSettings,
    pub controls: ControlsSettings,
    pub shell: ShellSettings,
    pub library: LibrarySettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Volume on startup and the level restored when unmuting, in `[0, 1]`.
    pub default_volume: f32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            default_volume: 0.7,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// Number of seconds to scrub when pressing `H` / `L`.
    pub scrub_seconds: u64,
    /// Volume change per `-` / `+` press.
    pub volume_step: f32,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self {
            scrub_seconds: 5,
            volume_step: 0.05,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShellSettings {
    /// Title drawn on the outer frame.
    pub title: String,
    /// Language tag shown next to the title.
    pub lang: String,
    /// Typeface used for headings (track title).
    pub heading: TypefaceSettings,
    /// Typeface used for body text.
    pub body: TypefaceSettings,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            title: "tunebox".to_string(),
            lang: "en".to_string(),
            heading: TypefaceSettings {
                variable: "--font-poppins".to_string(),
                family: "Poppins".to_string(),
                weights: vec![100, 200, 300, 400, 500, 600, 700, 800, 900],
                subsets: vec!["latin".to_string()],
                display: FontDisplay::Swap,
            },
            body: TypefaceSettings {
                variable: "--font-montserrat".to_string(),
                family: "Montserrat".to_string(),
                weights: Vec::new(),
                subsets: vec!["cyrillic".to_string()],
                display: FontDisplay::Swap,
            },
        }
    }
}

/// A font declaration exposed to the rendered tree under `variable`.
#[derive(Debug, Clone, Deserialize)]
pub struct TypefaceSettings {
    pub variable: String,
    pub family: String,
    /// Available weights; empty means any weight (variable font).
    #[serde(default)]
    pub weights: Vec<u16>,
    #[serde(default)]
    pub subsets: Vec<String>,
    #[serde(default)]
    pub display: FontDisplay,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontDisplay {
    Auto,
    Block,
    #[default]
    Swap,
    Fallback,
    Optional,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
    /// File names looked up next to each track for its cover image.
    pub cover_names: Vec<String>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec!["mp3".into(), "flac".into(), "wav".into(), "ogg".into()],
            follow_links: true,
            include_hidden: true,
            recursive: true,
            max_depth: None,
            cover_names: vec![
                "cover.jpg".into(),
                "cover.png".into(),
                "folder.jpg".into(),
                "folder.png".into(),
            ],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    pub level: String,
    /// Log file; defaults to `$XDG_STATE_HOME/tunebox/tunebox.log`.
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
