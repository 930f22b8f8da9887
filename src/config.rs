// SPDX-License-Identifier: PMPL-1.0-or-later

//! Site configuration (`portfolio.yaml`).

use crate::i18n::Lang;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Looked up in order at the site root when no explicit path is given.
pub const DEFAULT_CONFIG_NAMES: &[&str] = &["portfolio.yaml", "portfolio.yml", "portfolio.json"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Person part of the CV download name; defaults to the profile name.
    pub owner: Option<String>,
    pub default_language: Lang,
    pub data_dir: PathBuf,
    /// Scanned for image files at startup.
    pub assets_dir: Option<PathBuf>,
    /// Explicit name → path map, applied after the directory scan.
    pub assets_manifest: Option<PathBuf>,
    /// CV document per language code.
    pub cv: BTreeMap<String, PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: None,
            default_language: Lang::En,
            data_dir: PathBuf::from("data"),
            assets_dir: Some(PathBuf::from("assets")),
            assets_manifest: None,
            cv: BTreeMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load the first default config file found under `root`, or defaults
    /// when there is none.
    pub fn load_default(root: &Path) -> Result<Self> {
        match DEFAULT_CONFIG_NAMES
            .iter()
            .map(|name| root.join(name))
            .find(|path| path.is_file())
        {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        load_json_or_yaml(path)
    }

    pub fn cv_path(&self, lang: Lang) -> Option<&Path> {
        self.cv.get(lang.code()).map(PathBuf::as_path)
    }
}

/// Read `path` as YAML when the extension says so, JSON otherwise.
pub fn load_json_or_yaml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str::<T>(&raw).with_context(|| format!("parsing {}", path.display()))
        }
        _ => serde_json::from_str::<T>(&raw).with_context(|| format!("parsing {}", path.display())),
    }
}
