//! Dubbing configuration: defaults, partial-update merge and TOML persistence.
//!
//! [`DubbingConfig`] is created once with fixed defaults at session start and
//! mutated only through [`DubbingConfig::apply`], which merges a
//! [`ConfigUpdate`] field-by-field and returns a new value.  UI controls are
//! bounded (selects and range sliders), so no validation is performed on the
//! merged result.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;

// ---------------------------------------------------------------------------
// VolumeBalance
// ---------------------------------------------------------------------------

/// Relative mix levels among the three separated audio tracks.
///
/// Each field is in `[0.0, 1.0]`.  The three levels are independently
/// adjustable; no sum/normalisation invariant is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeBalance {
    /// Dubbed voice track level.
    pub voice: f32,
    /// Background music track level.
    pub background: f32,
    /// Sound effects track level.
    pub effects: f32,
}

impl Default for VolumeBalance {
    fn default() -> Self {
        Self {
            voice: 1.0,
            background: 0.8,
            effects: 0.9,
        }
    }
}

// ---------------------------------------------------------------------------
// DubbingConfig
// ---------------------------------------------------------------------------

/// User-editable dubbing settings, serialised as `settings.toml`.
///
/// # Persistence
///
/// ```rust,no_run
/// use dubstudio::config::DubbingConfig;
///
/// // Load (returns Default when file is missing)
/// let config = DubbingConfig::load().unwrap();
///
/// // Modify and save
/// // config.save().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DubbingConfig {
    /// Source language code from the supported catalog (e.g. `"en"`).
    pub source_language: String,
    /// Target language code from the supported catalog (e.g. `"hi"`).
    ///
    /// May equal `source_language`; no uniqueness constraint between them.
    pub target_language: String,
    /// Keep background music and sound effects in the final mix.
    pub preserve_background: bool,
    /// Match the original speaker's voice characteristics.
    pub voice_cloning: bool,
    /// Overlay translated subtitles during preview.
    pub subtitles: bool,
    /// Additionally show the original-language line above the translation.
    ///
    /// Dependent on `subtitles`: cleared automatically when a merge turns
    /// `subtitles` off, and greyed out in the UI while `subtitles` is off.
    pub show_original_subtitles: bool,
    /// Synthesised voice playback speed, `0.5` – `2.0` in `0.1` steps.
    pub voice_speed: f32,
    /// Track mix levels.
    pub volume_balance: VolumeBalance,
}

impl Default for DubbingConfig {
    fn default() -> Self {
        Self {
            source_language: "en".into(),
            target_language: "hi".into(),
            preserve_background: true,
            voice_cloning: true,
            subtitles: true,
            show_original_subtitles: true,
            voice_speed: 1.0,
            volume_balance: VolumeBalance::default(),
        }
    }
}

impl DubbingConfig {
    /// Merge a partial update into this config, returning the new value.
    ///
    /// Top-level scalars are merged field-by-field; `volume_balance` is
    /// replaced whole, so a caller changing one mix level must supply the
    /// full nested record.
    ///
    /// Turning `subtitles` off clears `show_original_subtitles` so the
    /// dependent flag is never meaningfully set while its parent is off.
    pub fn apply(&self, update: ConfigUpdate) -> Self {
        let mut next = self.clone();

        if let Some(code) = update.source_language {
            next.source_language = code;
        }
        if let Some(code) = update.target_language {
            next.target_language = code;
        }
        if let Some(v) = update.preserve_background {
            next.preserve_background = v;
        }
        if let Some(v) = update.voice_cloning {
            next.voice_cloning = v;
        }
        if let Some(v) = update.subtitles {
            next.subtitles = v;
        }
        if let Some(v) = update.show_original_subtitles {
            next.show_original_subtitles = v;
        }
        if let Some(v) = update.voice_speed {
            next.voice_speed = v;
        }
        if let Some(v) = update.volume_balance {
            next.volume_balance = v;
        }

        if !next.subtitles {
            next.show_original_subtitles = false;
        }

        next
    }

    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(DubbingConfig::default())` when the file does not exist
    /// yet (first-run scenario) so callers never need to special-case a
    /// missing file.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path (useful for tests).
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the platform-appropriate `settings.toml`,
    /// creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::new().settings_file)
    }

    /// Save to an explicit path (useful for tests).
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// ConfigUpdate
// ---------------------------------------------------------------------------

/// Partial [`DubbingConfig`] — every field optional.
///
/// Built by UI controls and folded into the current config via
/// [`DubbingConfig::apply`].
#[derive(Debug, Clone, Default)]
pub struct ConfigUpdate {
    pub source_language: Option<String>,
    pub target_language: Option<String>,
    pub preserve_background: Option<bool>,
    pub voice_cloning: Option<bool>,
    pub subtitles: Option<bool>,
    pub show_original_subtitles: Option<bool>,
    pub voice_speed: Option<f32>,
    pub volume_balance: Option<VolumeBalance>,
}

impl ConfigUpdate {
    /// An update that changes a single volume-balance field, supplying the
    /// full nested record as the merge contract requires.
    pub fn voice_volume(current: VolumeBalance, voice: f32) -> Self {
        Self {
            volume_balance: Some(VolumeBalance { voice, ..current }),
            ..Self::default()
        }
    }

    /// See [`ConfigUpdate::voice_volume`].
    pub fn background_volume(current: VolumeBalance, background: f32) -> Self {
        Self {
            volume_balance: Some(VolumeBalance {
                background,
                ..current
            }),
            ..Self::default()
        }
    }

    /// See [`ConfigUpdate::voice_volume`].
    pub fn effects_volume(current: VolumeBalance, effects: f32) -> Self {
        Self {
            volume_balance: Some(VolumeBalance { effects, ..current }),
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Verify default values match the demo's session-start state.
    #[test]
    fn default_values_match_demo() {
        let cfg = DubbingConfig::default();

        assert_eq!(cfg.source_language, "en");
        assert_eq!(cfg.target_language, "hi");
        assert!(cfg.preserve_background);
        assert!(cfg.voice_cloning);
        assert!(cfg.subtitles);
        assert!(cfg.show_original_subtitles);
        assert_eq!(cfg.voice_speed, 1.0);
        assert_eq!(cfg.volume_balance.voice, 1.0);
        assert_eq!(cfg.volume_balance.background, 0.8);
        assert_eq!(cfg.volume_balance.effects, 0.9);
    }

    #[test]
    fn apply_merges_scalars_field_by_field() {
        let cfg = DubbingConfig::default();

        let next = cfg.apply(ConfigUpdate {
            target_language: Some("bn".into()),
            voice_speed: Some(1.5),
            ..ConfigUpdate::default()
        });

        assert_eq!(next.target_language, "bn");
        assert_eq!(next.voice_speed, 1.5);
        // Untouched fields carry over.
        assert_eq!(next.source_language, "en");
        assert!(next.preserve_background);
        assert_eq!(next.volume_balance, VolumeBalance::default());
    }

    #[test]
    fn apply_does_not_mutate_the_original() {
        let cfg = DubbingConfig::default();
        let _ = cfg.apply(ConfigUpdate {
            voice_cloning: Some(false),
            ..ConfigUpdate::default()
        });
        assert!(cfg.voice_cloning);
    }

    #[test]
    fn volume_balance_is_replaced_whole() {
        let cfg = DubbingConfig::default();
        let next = cfg.apply(ConfigUpdate::background_volume(cfg.volume_balance, 0.25));

        assert_eq!(next.volume_balance.background, 0.25);
        // The helper supplied the full record, so the other levels survive.
        assert_eq!(next.volume_balance.voice, 1.0);
        assert_eq!(next.volume_balance.effects, 0.9);
    }

    #[test]
    fn disabling_subtitles_clears_dependent_flag() {
        let cfg = DubbingConfig::default();
        assert!(cfg.show_original_subtitles);

        let next = cfg.apply(ConfigUpdate {
            subtitles: Some(false),
            ..ConfigUpdate::default()
        });

        assert!(!next.subtitles);
        assert!(!next.show_original_subtitles);
    }

    #[test]
    fn dependent_flag_cannot_be_set_while_parent_is_off() {
        let cfg = DubbingConfig::default().apply(ConfigUpdate {
            subtitles: Some(false),
            ..ConfigUpdate::default()
        });

        let next = cfg.apply(ConfigUpdate {
            show_original_subtitles: Some(true),
            ..ConfigUpdate::default()
        });

        assert!(!next.show_original_subtitles);
    }

    /// Verify that a default `DubbingConfig` survives a TOML round trip.
    #[test]
    fn round_trip_toml() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");

        let original = DubbingConfig::default();
        original.save_to(&path).expect("save");

        let loaded = DubbingConfig::load_from(&path).expect("load");
        assert_eq!(original, loaded);
    }

    /// `load_from` on a non-existent path must return `Default` without error.
    #[test]
    fn load_missing_returns_default() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nonexistent.toml");

        let config = DubbingConfig::load_from(&path).expect("should not error");
        assert_eq!(config, DubbingConfig::default());
    }

    /// Verify that modified non-default values survive a round trip.
    #[test]
    fn round_trip_modified_values() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("modified.toml");

        let mut cfg = DubbingConfig::default();
        cfg.source_language = "ja".into();
        cfg.target_language = "ko".into();
        cfg.subtitles = false;
        cfg.show_original_subtitles = false;
        cfg.voice_speed = 0.5;
        cfg.volume_balance.effects = 0.0;

        cfg.save_to(&path).expect("save");
        let loaded = DubbingConfig::load_from(&path).expect("load");

        assert_eq!(loaded, cfg);
    }
}
