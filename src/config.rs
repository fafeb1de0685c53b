//! Configuration file loading and management.

use crate::session::RepeatMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const DEFAULT_SEEK_STEP: u32 = 10;
const DEFAULT_VOLUME: f32 = 1.0;

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub playback: PlaybackConfig,
    pub keys: KeyConfig,
}

/// Playback configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Seek step in seconds.
    pub seek_step: u32,
    /// Output volume, 0.0 to 1.0.
    pub volume: f32,
    /// Repeat mode at startup.
    pub repeat: RepeatMode,
    /// Whether to start shuffled.
    pub shuffle: bool,
}

/// Keybinding configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyConfig {
    pub play_pause: KeyBinding,
    pub next: KeyBinding,
    pub prev: KeyBinding,
    pub seek_forward: KeyBinding,
    pub seek_back: KeyBinding,
    pub shuffle: KeyBinding,
    pub repeat: KeyBinding,
    pub cursor_up: KeyBinding,
    pub cursor_down: KeyBinding,
    pub play_selected: KeyBinding,
    pub remove_selected: KeyBinding,
    pub help: KeyBinding,
    pub quit: KeyBinding,
}

/// A keybinding can be a single key or multiple keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyBinding {
    Single(String),
    Multiple(Vec<String>),
}

impl KeyBinding {
    fn multiple(keys: &[&str]) -> Self {
        KeyBinding::Multiple(keys.iter().map(|key| key.to_string()).collect())
    }

    /// Returns all key strings for this binding.
    pub fn keys(&self) -> Vec<&str> {
        match self {
            KeyBinding::Single(key) => vec![key.as_str()],
            KeyBinding::Multiple(keys) => keys.iter().map(|s| s.as_str()).collect(),
        }
    }

    /// Checks if the binding contains the given key.
    pub fn contains(&self, key: &str) -> bool {
        self.keys().contains(&key)
    }

    /// The first key, for on-screen hints.
    pub fn label(&self) -> &str {
        self.keys().first().copied().unwrap_or("")
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            seek_step: DEFAULT_SEEK_STEP,
            volume: DEFAULT_VOLUME,
            repeat: RepeatMode::Off,
            shuffle: false,
        }
    }
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            play_pause: KeyBinding::Single("Space".to_string()),
            next: KeyBinding::multiple(&["n", "Right"]),
            prev: KeyBinding::multiple(&["p", "Left"]),
            seek_forward: KeyBinding::Single("Shift+Right".to_string()),
            seek_back: KeyBinding::Single("Shift+Left".to_string()),
            shuffle: KeyBinding::Single("s".to_string()),
            repeat: KeyBinding::Single("r".to_string()),
            cursor_up: KeyBinding::multiple(&["Up", "k"]),
            cursor_down: KeyBinding::multiple(&["Down", "j"]),
            play_selected: KeyBinding::Single("Enter".to_string()),
            remove_selected: KeyBinding::multiple(&["d", "Delete"]),
            help: KeyBinding::multiple(&["?", "h"]),
            quit: KeyBinding::multiple(&["q", "Esc"]),
        }
    }
}

impl Config {
    /// Returns the path to the config file based on XDG Base Directory spec.
    ///
    /// - Linux: `~/.config/tapedeck/config.toml`
    /// - macOS: `~/Library/Application Support/tapedeck/config.toml`
    /// - Windows: `%APPDATA%\tapedeck\config.toml`
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("tapedeck");
            path.push("config.toml");
            path
        })
    }

    /// Loads the configuration from the default location.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                log::warn!("Could not determine config directory, using defaults");
                Self::default()
            }
        }
    }

    /// Loads the configuration from `path`.
    ///
    /// If the file doesn't exist, creates it with default values.
    /// If the file is invalid, returns the default config and logs a warning.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            let config = Self::default();
            match config.save(path) {
                Ok(()) => log::info!("Wrote default config to {}", path.display()),
                Err(e) => log::warn!("Could not create default config file: {}", e),
            }
            return config;
        }

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                log::warn!("Could not read config file at {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match toml::from_str::<Config>(&contents) {
            Ok(mut config) => {
                config.validate();
                log::debug!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Could not parse config file at {}: {}", path.display(), e);
                log::warn!("Using default configuration");
                Self::default()
            }
        }
    }

    /// Saves the configuration to the specified path.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, toml_string)
    }

    /// Validates configuration values and applies constraints.
    fn validate(&mut self) {
        if self.playback.seek_step == 0 {
            log::warn!(
                "seek_step must be at least 1, using default value of {}",
                DEFAULT_SEEK_STEP
            );
            self.playback.seek_step = DEFAULT_SEEK_STEP;
        }

        if !(0.0..=1.0).contains(&self.playback.volume) {
            log::warn!(
                "volume {} is outside 0.0..=1.0, using {}",
                self.playback.volume,
                DEFAULT_VOLUME
            );
            self.playback.volume = DEFAULT_VOLUME;
        }
    }
}
