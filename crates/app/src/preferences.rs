use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Format, Json, Serialized},
};
use serde::{Deserialize, Serialize};
use snafu::{ResultExt, Snafu};

pub const PREFERENCES_DIRECTORY_NAME: &str = "mica";
pub const PREFERENCES_FILE_NAME: &str = "preferences.json";

/// Durable UI preferences.
///
/// The on-disk field name for the feed flag is load-bearing: earlier builds
/// wrote it in camel case, and existing preference files must keep working.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellPreferences {
    #[serde(rename = "notificationFeedCollapsed", default)]
    pub notification_feed_collapsed: bool,
}

/// Loads preferences at startup and writes them back synchronously on every
/// change. A toggle that only lived in memory would silently revert on the
/// next launch, so persistence happens before the in-memory flip.
pub struct PreferenceStore {
    preferences: ShellPreferences,
    config_path: PathBuf,
}

impl PreferenceStore {
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .map(|path| path.join(PREFERENCES_DIRECTORY_NAME))
            .unwrap_or_else(|| PathBuf::from(".mica"))
    }

    pub fn default_config_path() -> PathBuf {
        Self::default_config_dir().join(PREFERENCES_FILE_NAME)
    }

    pub fn new(config_path: PathBuf) -> Self {
        let preferences = Self::load_from_disk(&config_path);
        Self {
            preferences,
            config_path,
        }
    }

    pub fn load() -> Self {
        Self::new(Self::default_config_path())
    }

    pub fn preferences(&self) -> ShellPreferences {
        self.preferences
    }

    /// Persists the collapsed flag, then applies it in memory.
    pub fn set_notification_feed_collapsed(
        &mut self,
        collapsed: bool,
    ) -> Result<(), PreferenceError> {
        let mut next = self.preferences;
        next.notification_feed_collapsed = collapsed;
        self.persist(&next)?;
        self.preferences = next;
        Ok(())
    }

    fn load_from_disk(path: &PathBuf) -> ShellPreferences {
        if !path.exists() {
            tracing::info!("preferences file not found at {:?}, using defaults", path);
            return ShellPreferences::default();
        }

        let figment = Figment::from(Serialized::defaults(ShellPreferences::default()))
            .merge(Json::file(path));

        match figment.extract::<ShellPreferences>() {
            Ok(preferences) => preferences,
            Err(error) => {
                tracing::warn!(
                    "failed to parse preferences from {:?}: {}. using defaults",
                    path,
                    error
                );
                ShellPreferences::default()
            }
        }
    }

    fn persist(&self, preferences: &ShellPreferences) -> Result<(), PreferenceError> {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent).context(CreateDirSnafu {
                stage: "create-preferences-directory",
                path: parent.to_path_buf(),
            })?;
        }

        let content = serde_json::to_string_pretty(preferences).context(SerializeConfigSnafu {
            stage: "serialize-preferences-json",
        })?;

        // Write-then-rename keeps a crash from truncating the live file.
        let temp_path = self.config_path.with_extension("json.tmp");
        std::fs::write(&temp_path, content).context(WriteFileSnafu {
            stage: "write-temporary-preferences-file",
            path: temp_path.clone(),
        })?;

        std::fs::rename(&temp_path, &self.config_path).context(RenameTempFileSnafu {
            stage: "rename-temporary-preferences-file",
            from: temp_path,
            to: self.config_path.clone(),
        })?;

        tracing::info!("saved preferences to {:?}", self.config_path);
        Ok(())
    }
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum PreferenceError {
    #[snafu(display("failed to create preferences directory at {path:?} on `{stage}`: {source}"))]
    CreateDir {
        stage: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("failed to serialize preferences on `{stage}`: {source}"))]
    SerializeConfig {
        stage: &'static str,
        source: serde_json::Error,
    },
    #[snafu(display("failed to write preferences file at {path:?} on `{stage}`: {source}"))]
    WriteFile {
        stage: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display(
        "failed to replace preferences file from {from:?} to {to:?} on `{stage}`: {source}"
    ))]
    RenameTempFile {
        stage: &'static str,
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "mica-preferences-test-{}-{name}.json",
            std::process::id()
        ))
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let store = PreferenceStore::new(scratch_path("missing"));
        assert!(!store.preferences().notification_feed_collapsed);
    }

    #[test]
    fn collapsed_flag_round_trips_through_disk() {
        let path = scratch_path("round-trip");
        let _ = std::fs::remove_file(&path);

        let mut store = PreferenceStore::new(path.clone());
        store
            .set_notification_feed_collapsed(true)
            .expect("persist should succeed in the temp directory");

        let reloaded = PreferenceStore::new(path.clone());
        assert!(reloaded.preferences().notification_feed_collapsed);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn on_disk_key_stays_camel_case() {
        let serialized = serde_json::to_string(&ShellPreferences {
            notification_feed_collapsed: true,
        })
        .expect("preferences always serialize");

        assert!(serialized.contains("\"notificationFeedCollapsed\":true"));
    }

    #[test]
    fn legacy_files_with_the_camel_case_key_still_parse() {
        let parsed: ShellPreferences =
            serde_json::from_str(r#"{"notificationFeedCollapsed": true}"#)
                .expect("legacy key must stay readable");

        assert!(parsed.notification_feed_collapsed);
    }
}
