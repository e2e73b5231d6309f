//! User settings for fintrack
//!
//! Remembers the last month, year and view the user looked at, along with
//! display preferences.

use serde::{Deserialize, Serialize};

use super::paths::FintrackPaths;
use crate::error::FintrackError;
use crate::models::{PeriodKind, Selection};

/// User settings for fintrack
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Last view mode used (monthly or yearly)
    #[serde(default)]
    pub view_mode: PeriodKind,

    /// Last month selected (1-12)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_month: Option<u32>,

    /// Last year selected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_year: Option<i32>,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            view_mode: PeriodKind::default(),
            last_month: None,
            last_year: None,
            currency_symbol: default_currency(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &FintrackPaths) -> Result<Self, FintrackError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                FintrackError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FintrackError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FintrackPaths) -> Result<(), FintrackError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            FintrackError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            FintrackError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// The remembered selection, if a complete one was stored
    pub fn last_selection(&self) -> Option<Selection> {
        let year = self.last_year?;
        Selection::of_kind(self.view_mode, year, self.last_month).ok()
    }

    /// Record a selection as the last one used
    ///
    /// A yearly selection keeps the previously remembered month so that
    /// switching back to the monthly view lands where the user left off.
    pub fn remember(&mut self, selection: &Selection) {
        self.view_mode = selection.kind();
        self.last_year = Some(selection.year());
        if let Some(month) = selection.month() {
            self.last_month = Some(month);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.view_mode, PeriodKind::Monthly);
        assert_eq!(settings.currency_symbol, "$");
        assert!(settings.last_selection().is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.remember(&Selection::monthly(2025, 4).unwrap());
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(
            loaded.last_selection(),
            Some(Selection::Monthly { year: 2025, month: 4 })
        );
    }

    #[test]
    fn test_remember_yearly_keeps_month() {
        let mut settings = Settings::default();
        settings.remember(&Selection::monthly(2024, 9).unwrap());
        settings.remember(&Selection::yearly(2025).unwrap());

        assert_eq!(settings.view_mode, PeriodKind::Yearly);
        assert_eq!(settings.last_month, Some(9));
        assert_eq!(settings.last_selection(), Some(Selection::Yearly { year: 2025 }));
    }

    #[test]
    fn test_corrupt_settings_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, FintrackError::Config(_)));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"view_mode":"yearly"}"#).unwrap();
        assert_eq!(settings.view_mode, PeriodKind::Yearly);
        assert_eq!(settings.date_format, "%Y-%m-%d");
    }
}
