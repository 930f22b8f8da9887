// SPDX-License-Identifier: PMPL-1.0-or-later

//! Image asset registry.
//!
//! Fixtures refer to images by bare filename (`gateway.png`), sometimes with
//! a leftover path prefix (`../assets/projects/gateway.png`), sometimes by
//! absolute URL. The registry maps logical filenames to files on disk and
//! lets URLs and `data:` references through untouched.

use crate::diagnostics;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const PASS_THROUGH_PREFIXES: &[&str] = &["http://", "https://", "data:"];

/// A usable image reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetRef {
    /// Absolute URL or data reference, used as-is.
    Remote(String),
    /// File registered under a logical name.
    Local(PathBuf),
}

impl AssetRef {
    pub fn local_path(&self) -> Option<&Path> {
        match self {
            AssetRef::Local(path) => Some(path),
            AssetRef::Remote(_) => None,
        }
    }

    /// URI form, suitable for a GUI image source or a terminal hyperlink.
    pub fn uri(&self) -> String {
        match self {
            AssetRef::Remote(url) => url.clone(),
            AssetRef::Local(path) => format!("file://{}", path.display()),
        }
    }
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetRef::Remote(url) if url.starts_with("data:") => write!(f, "<inline data>"),
            AssetRef::Remote(url) => write!(f, "{}", url),
            AssetRef::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AssetRegistry {
    entries: BTreeMap<String, PathBuf>,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `path` under `name`. A later registration of the same name
    /// replaces the earlier one.
    pub fn register(&mut self, name: impl Into<String>, path: impl Into<PathBuf>) {
        self.entries.insert(name.into(), path.into());
    }

    /// Load a manifest mapping logical names to paths relative to the
    /// manifest's own directory. JSON or YAML by extension.
    pub fn load_manifest(&mut self, manifest: &Path) -> Result<usize> {
        let raw = fs::read_to_string(manifest)
            .with_context(|| format!("reading asset manifest {}", manifest.display()))?;
        let entries: BTreeMap<String, PathBuf> = match manifest.extension().and_then(|e| e.to_str())
        {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&raw)
                .with_context(|| format!("parsing asset manifest {}", manifest.display()))?,
            _ => serde_json::from_str(&raw)
                .with_context(|| format!("parsing asset manifest {}", manifest.display()))?,
        };
        let base = manifest.parent().unwrap_or_else(|| Path::new("."));
        let count = entries.len();
        for (name, relative) in entries {
            self.register(name, base.join(relative));
        }
        Ok(count)
    }

    /// Register every file below `dir` under its file name.
    pub fn scan_dir(&mut self, dir: &Path) -> Result<usize> {
        if !dir.is_dir() {
            return Err(anyhow!("asset directory not found: {}", dir.display()));
        }
        let mut count = 0;
        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry.with_context(|| format!("walking {}", dir.display()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                self.register(name, entry.path());
                count += 1;
            }
        }
        Ok(count)
    }

    /// Resolve a fixture image reference.
    ///
    /// Returns `None` for an empty reference or an unknown filename; the
    /// latter is logged.
    pub fn resolve(&self, reference: &str) -> Option<AssetRef> {
        let found = self.lookup(reference);
        if found.is_none() && !reference.is_empty() {
            diagnostics::warn(format!(
                "image \"{}\" not found in asset registry ({} registered)",
                logical_name(reference),
                self.entries.len()
            ));
        }
        found
    }

    /// [`resolve`](Self::resolve) without logging misses.
    pub fn lookup(&self, reference: &str) -> Option<AssetRef> {
        if reference.is_empty() {
            return None;
        }
        if PASS_THROUGH_PREFIXES
            .iter()
            .any(|prefix| reference.starts_with(prefix))
        {
            return Some(AssetRef::Remote(reference.to_string()));
        }
        self.entries
            .get(logical_name(reference))
            .map(|path| AssetRef::Local(path.clone()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn logical_name(reference: &str) -> &str {
    reference.rsplit('/').next().unwrap_or(reference)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn registry() -> AssetRegistry {
        let mut assets = AssetRegistry::new();
        assets.register("gateway.png", "/site/assets/projects/gateway.png");
        assets
    }

    #[test]
    fn urls_and_data_pass_through() {
        let assets = registry();
        assert_eq!(
            assets.resolve("https://example.org/a.png"),
            Some(AssetRef::Remote("https://example.org/a.png".into()))
        );
        assert_eq!(
            assets.resolve("data:image/png;base64,AAAA"),
            Some(AssetRef::Remote("data:image/png;base64,AAAA".into()))
        );
    }

    #[test]
    fn path_prefix_is_stripped() {
        let assets = registry();
        let expected = Some(AssetRef::Local("/site/assets/projects/gateway.png".into()));
        assert_eq!(assets.resolve("gateway.png"), expected);
        assert_eq!(assets.resolve("../assets/projects/gateway.png"), expected);
    }

    #[test]
    fn unknown_and_empty_are_absent() {
        crate::diagnostics::set_quiet(true);
        let assets = registry();
        assert_eq!(assets.resolve(""), None);
        assert_eq!(assets.resolve("missing.png"), None);
    }

    #[test]
    fn manifest_paths_are_relative_to_manifest() {
        let dir = TempDir::new().unwrap();
        let manifest = dir.path().join("manifest.yaml");
        fs::write(&manifest, "portfolio.png: projects/portfolio.png\n").unwrap();

        let mut assets = AssetRegistry::new();
        assert_eq!(assets.load_manifest(&manifest).unwrap(), 1);
        assert_eq!(
            assets.resolve("portfolio.png"),
            Some(AssetRef::Local(dir.path().join("projects/portfolio.png")))
        );
    }

    #[test]
    fn scan_registers_nested_files() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("projects/gallery")).unwrap();
        fs::write(dir.path().join("projects/gateway.png"), b"png").unwrap();
        fs::write(dir.path().join("projects/gallery/gateway-ui-en.png"), b"png").unwrap();

        let mut assets = AssetRegistry::new();
        assert_eq!(assets.scan_dir(dir.path()).unwrap(), 2);
        assert!(assets.contains("gateway-ui-en.png"));
        assert!(assets.scan_dir(&dir.path().join("nope")).is_err());
    }
}
