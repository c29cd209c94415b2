use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;
use taskboard_core::{CategorySet, DEFAULT_CATEGORIES, StoreOptions};

const CONFIG_DIR: &str = ".taskboard";
const CONFIG_FILE: &str = "config.toml";
const USER_CONFIG_DIR: &str = "taskboard";

/// Top-level board configuration loaded from `.taskboard/config.toml`.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BoardConfig {
    /// Selectable categories.
    #[serde(default)]
    pub categories: CategoriesConfig,
    /// Edit overlay behaviour.
    #[serde(default)]
    pub editing: EditingConfig,
}

impl BoardConfig {
    /// Resolve configuration for `workdir`.
    ///
    /// Looks at `<workdir>/.taskboard/config.toml`, then the user config
    /// directory. Missing files yield the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed,
    /// or validated.
    pub fn load(workdir: impl AsRef<Path>) -> Result<Self> {
        let local = workdir.as_ref().join(CONFIG_DIR).join(CONFIG_FILE);
        if local.exists() {
            return Self::from_path(&local);
        }
        match user_config_path() {
            Some(path) if path.exists() => Self::from_path(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails [`Self::from_toml`].
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml(&contents).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Parse and validate TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed TOML, unknown keys, or an invalid
    /// category list.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.category_set()?;
        Ok(config)
    }

    /// Build the validated category set.
    ///
    /// # Errors
    ///
    /// Returns an error if the category list is empty, has a blank label, or
    /// repeats a label.
    pub fn category_set(&self) -> Result<CategorySet> {
        CategorySet::new(&self.categories.values).context("invalid [categories] values")
    }

    /// Store options derived from the `[editing]` block.
    #[must_use]
    pub const fn store_options(&self) -> StoreOptions {
        StoreOptions {
            cancel_edit_on_delete: self.editing.cancel_on_delete,
        }
    }
}

/// Location of the per-user fallback file.
#[must_use]
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(USER_CONFIG_DIR).join(CONFIG_FILE))
}

/// `[categories]` block.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CategoriesConfig {
    /// Labels in display order.
    #[serde(default = "default_category_values")]
    pub values: Vec<String>,
}

impl Default for CategoriesConfig {
    fn default() -> Self {
        Self {
            values: default_category_values(),
        }
    }
}

fn default_category_values() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|label| (*label).to_owned()).collect()
}

/// `[editing]` block.
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct EditingConfig {
    /// Close the edit overlay when its task is deleted.
    #[serde(default)]
    pub cancel_on_delete: bool,
}
