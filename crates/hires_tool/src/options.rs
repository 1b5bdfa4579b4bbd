use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use hires_engine::ColorPattern;
use serde::{Deserialize, Serialize};

const OPTIONS_FILE: &str = "options.toml";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Options {
    /// Render monochrome when the file carries no preference.
    pub mono: bool,
    /// Index into the standard patterns used when a command names none.
    pub pattern: usize,
    /// Output pixels per screen pixel when exporting.
    pub png_scale: u32,
    /// Store the render mode and signature in the first screen hole.
    pub write_signature: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            mono: false,
            pattern: 3,
            png_scale: 2,
            write_signature: true,
        }
    }
}

impl Options {
    pub fn get_config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "GitHub", "hires_tool").map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
    }

    /// Reads the options from `path` or the platform config directory.
    ///
    /// A missing file gives the defaults; an unreadable one is logged and
    /// gives the defaults as well.
    pub fn load_options(path: Option<&Path>) -> Self {
        let Some(options_file) = path.map(Path::to_path_buf).or_else(|| Self::get_config_dir().map(|dir| dir.join(OPTIONS_FILE))) else {
            return Self::default();
        };
        if !options_file.exists() {
            return Self::default();
        }
        match fs::read_to_string(&options_file) {
            Ok(txt) => match Self::from_toml(&txt) {
                Ok(result) => return result,
                Err(err) => log::error!("Error parsing options file {}: {err:#}", options_file.display()),
            },
            Err(err) => log::error!("Error reading options file {}: {err}", options_file.display()),
        }
        Self::default()
    }

    pub fn from_toml(txt: &str) -> Result<Self> {
        Ok(toml::from_str(txt)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Writes the options to `path` or the platform config directory.
    pub fn store_options(&self, path: Option<&Path>) -> Result<PathBuf> {
        let file_name = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let dir = Self::get_config_dir().context("no configuration directory available")?;
                fs::create_dir_all(&dir).with_context(|| format!("can't create configuration directory {}", dir.display()))?;
                dir.join(OPTIONS_FILE)
            }
        };
        fs::write(&file_name, self.to_toml()?).with_context(|| format!("error writing options file {}", file_name.display()))?;
        Ok(file_name)
    }

    /// The standard pattern at `index`, or the configured default.
    pub fn pattern(&self, index: Option<usize>) -> Result<ColorPattern> {
        let index = index.unwrap_or(self.pattern);
        let patterns = ColorPattern::standard_patterns();
        patterns
            .get(index)
            .copied()
            .with_context(|| format!("pattern index {index} out of range 0..{}", patterns.len()))
    }
}
