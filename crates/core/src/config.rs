//! Interface configuration
//!
//! Every field has a default, so a config file only needs the values it
//! changes.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};
use crate::presenter::ColorRole;

/// Environment variable naming a JSON config file
pub const CONFIG_ENV: &str = "CLICKCHESS_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterfaceConfig {
    /// Starting position; the standard one when unset
    pub start_fen: Option<String>,
    pub notification_seconds: f32,
    pub palette: Palette,
    pub white_marker: String,
    pub black_marker: String,
    pub empty_history_label: String,
}

impl Default for InterfaceConfig {
    fn default() -> Self {
        Self {
            start_fen: None,
            notification_seconds: 1.5,
            palette: Palette::default(),
            white_marker: "⏹".to_string(),
            black_marker: "□".to_string(),
            empty_history_label: "No moves yet".to_string(),
        }
    }
}

impl InterfaceConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        info!(path = %path.display(), "loaded interface config");
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads the file named by `CLICKCHESS_CONFIG`, or returns the defaults
    /// when the variable is unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        if !(self.notification_seconds > 0.0) {
            return Err(Error::Config(format!(
                "notification_seconds must be positive, got {}",
                self.notification_seconds
            )));
        }
        if self.white_marker == self.black_marker {
            return Err(Error::Config(
                "white_marker and black_marker must differ".to_string(),
            ));
        }
        Ok(())
    }
}

/// Hex colors for each [`ColorRole`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub light: String,
    pub dark: String,
    pub selected: String,
    pub reachable: String,
    pub alert: String,
    pub victory: String,
    pub draw: String,
    pub promotion: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            light: "#F99850".to_string(),
            dark: "#774212".to_string(),
            selected: "#86A666".to_string(),
            reachable: "#4D7E42".to_string(),
            alert: "#FF0000".to_string(),
            victory: "#FFD700".to_string(),
            draw: "#808080".to_string(),
            promotion: "#007FFF".to_string(),
        }
    }
}

impl Palette {
    pub fn color(&self, role: ColorRole) -> &str {
        match role {
            ColorRole::Light => &self.light,
            ColorRole::Dark => &self.dark,
            ColorRole::Selected => &self.selected,
            ColorRole::Reachable => &self.reachable,
            ColorRole::Alert => &self.alert,
            ColorRole::Victory => &self.victory,
            ColorRole::Draw => &self.draw,
            ColorRole::Promotion => &self.promotion,
        }
    }
}
