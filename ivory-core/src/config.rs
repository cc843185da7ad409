use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use ivory_types::{normalize_volume, DEFAULT_VOLUME};

use crate::state::Defaults;

const DEFAULT_CONFIG: &str = include_str!("../config.toml");

/// Press state duration when nothing is configured.
pub const DEFAULT_PRESS_MS: u64 = 150;

#[derive(Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    defaults: DefaultsConfig,
    #[serde(default)]
    keyboard: KeyboardConfig,
    #[serde(default)]
    audio: AudioConfig,
}

#[derive(Deserialize, Default)]
struct DefaultsConfig {
    volume: Option<f32>,
}

#[derive(Deserialize, Default)]
struct KeyboardConfig {
    press_ms: Option<u64>,
}

#[derive(Deserialize, Default)]
struct AudioConfig {
    sounds_dir: Option<PathBuf>,
}

pub struct Config {
    defaults: DefaultsConfig,
    keyboard: KeyboardConfig,
    audio: AudioConfig,
}

impl Config {
    pub fn load() -> Self {
        let mut base: ConfigFile =
            toml::from_str(DEFAULT_CONFIG).expect("Failed to parse embedded config.toml");

        if let Some(path) = user_config_path() {
            if path.exists() {
                match std::fs::read_to_string(&path) {
                    Ok(contents) => match toml::from_str::<ConfigFile>(&contents) {
                        Ok(user) => merge(&mut base, user),
                        Err(e) => {
                            log::warn!(target: "config", "ignoring malformed config {}: {}", path.display(), e)
                        }
                    },
                    Err(e) => {
                        log::warn!(target: "config", "could not read config {}: {}", path.display(), e)
                    }
                }
            }
        }

        Self::from_file(base)
    }

    /// Parse a config document on its own, without the embedded defaults.
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<ConfigFile>(contents).map(Self::from_file)
    }

    fn from_file(file: ConfigFile) -> Self {
        Config {
            defaults: file.defaults,
            keyboard: file.keyboard,
            audio: file.audio,
        }
    }

    pub fn defaults(&self) -> Defaults {
        Defaults {
            volume: self.volume(),
            press_duration: self.press_duration(),
        }
    }

    /// Initial playback volume, clamped to 0..=1.
    pub fn volume(&self) -> f32 {
        self.defaults
            .volume
            .and_then(normalize_volume)
            .unwrap_or(DEFAULT_VOLUME)
    }

    /// How long a clicked key stays pressed (clamped to 10..=2000 ms).
    pub fn press_duration(&self) -> Duration {
        let ms = self
            .keyboard
            .press_ms
            .unwrap_or(DEFAULT_PRESS_MS)
            .clamp(10, 2_000);
        Duration::from_millis(ms)
    }

    /// Configured samples directory, if any. See `ivory_audio::paths::sounds_dir`.
    pub fn sounds_dir(&self) -> Option<PathBuf> {
        self.audio.sounds_dir.clone()
    }
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("ivory").join("config.toml"))
}

fn merge(base: &mut ConfigFile, user: ConfigFile) {
    if user.defaults.volume.is_some() {
        base.defaults.volume = user.defaults.volume;
    }
    if user.keyboard.press_ms.is_some() {
        base.keyboard.press_ms = user.keyboard.press_ms;
    }
    if user.audio.sounds_dir.is_some() {
        base.audio.sounds_dir = user.audio.sounds_dir;
    }
}
