use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::i18n::Lang;

const DEFAULT_STATE_PATH: &str = "config/hishab_state.json";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// UI preferences that survive across runs, independent of transaction data.
///
/// The session identity is deliberately NOT stored here; it resets with the
/// process.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalState {
    pub language: Lang,
    pub theme: ThemeMode,
    pub sidebar_collapsed: bool,
}

impl LocalState {
    pub fn load(path: &str) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> Result<()> {
        let parent = Path::new(path).parent();
        if let Some(parent) = parent {
            fs::create_dir_all(parent)?;
        }
        let payload = serde_json::to_string_pretty(self)?;
        fs::write(path, payload)?;
        Ok(())
    }
}

pub fn default_state_path() -> &'static str {
    DEFAULT_STATE_PATH
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path() -> String {
        std::env::temp_dir()
            .join(format!("hishab_state_{}.json", uuid::Uuid::new_v4()))
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn missing_file_loads_defaults() {
        let state = LocalState::load(&scratch_path()).unwrap();
        assert_eq!(state.language, Lang::En);
        assert_eq!(state.theme, ThemeMode::Light);
        assert!(!state.sidebar_collapsed);
    }

    #[test]
    fn save_then_load_roundtrips() {
        let path = scratch_path();
        let state = LocalState {
            language: Lang::Bn,
            theme: ThemeMode::Dark,
            sidebar_collapsed: true,
        };
        state.save(&path).unwrap();

        let loaded = LocalState::load(&path).unwrap();
        assert_eq!(loaded.language, Lang::Bn);
        assert_eq!(loaded.theme, ThemeMode::Dark);
        assert!(loaded.sidebar_collapsed);

        let _ = fs::remove_file(&path);
    }
}
