//! User settings, persisted as JSON in `localStorage`.

use serde::{Deserialize, Serialize};

use crate::state::surface::DEFAULT_GRID_SPACING;

pub const STORAGE_KEY: &str = "cc_settings";

pub const DEFAULT_MARKER_RADIUS: f64 = 5.0;
const GRID_SPACING_RANGE: (f64, f64) = (10.0, 400.0);
const MARKER_RADIUS_RANGE: (f64, f64) = (1.0, 20.0);

/// How a rejected click is surfaced to the user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotifyStyle {
    /// Inline banner that stays until dismissed.
    #[default]
    Toast,
    /// Blocking `window.alert`.
    Modal,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("no global window")]
    NoWindow,
    #[error("localStorage unavailable")]
    StorageUnavailable,
    #[error("failed to read settings: {0}")]
    Read(String),
    #[error("failed to write settings: {0}")]
    Write(String),
    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub show_grid: bool,
    pub grid_spacing: f64,
    pub marker_radius: f64,
    pub notify_style: NotifyStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_grid: true,
            grid_spacing: DEFAULT_GRID_SPACING,
            marker_radius: DEFAULT_MARKER_RADIUS,
            notify_style: NotifyStyle::default(),
        }
    }
}

fn clamp_or(value: f64, (lo, hi): (f64, f64), fallback: f64) -> f64 {
    if value.is_finite() {
        value.clamp(lo, hi)
    } else {
        fallback
    }
}

impl Settings {
    /// Copy with numeric fields forced into usable ranges.
    pub fn sanitized(self) -> Self {
        Self {
            grid_spacing: clamp_or(self.grid_spacing, GRID_SPACING_RANGE, DEFAULT_GRID_SPACING),
            marker_radius: clamp_or(
                self.marker_radius,
                MARKER_RADIUS_RANGE,
                DEFAULT_MARKER_RADIUS,
            ),
            ..self
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, SettingsError> {
        let parsed: Settings = serde_json::from_str(raw)?;
        Ok(parsed.sanitized())
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Reads stored settings; `Ok(None)` when nothing was saved yet.
    pub fn load() -> Result<Option<Self>, SettingsError> {
        let store = local_storage()?;
        match store
            .get_item(STORAGE_KEY)
            .map_err(|e| SettingsError::Read(format!("{e:?}")))?
        {
            Some(raw) => Ok(Some(Self::from_json(&raw)?)),
            None => Ok(None),
        }
    }

    /// Stored settings, or defaults when absent or unreadable.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(Some(s)) => {
                log::info!("settings loaded from localStorage");
                s
            }
            Ok(None) => {
                log::info!("no stored settings, using defaults");
                Self::default()
            }
            Err(e) => {
                log::warn!("settings unavailable, using defaults: {e}");
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<(), SettingsError> {
        let raw = self.to_json()?;
        local_storage()?
            .set_item(STORAGE_KEY, &raw)
            .map_err(|e| SettingsError::Write(format!("{e:?}")))?;
        log::debug!("settings saved");
        Ok(())
    }
}

fn local_storage() -> Result<web_sys::Storage, SettingsError> {
    let window = web_sys::window().ok_or(SettingsError::NoWindow)?;
    match window.local_storage() {
        Ok(Some(store)) => Ok(store),
        _ => Err(SettingsError::StorageUnavailable),
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;
