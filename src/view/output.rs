// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization of rendered pages for the `render` command.

use crate::i18n::Lang;
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const EXPORT_SCHEMA: &str = "portfolio-site/page@1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Yaml,
}

impl ExportFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Some(ExportFormat::Json),
            "yaml" | "yml" => Some(ExportFormat::Yaml),
            _ => None,
        }
    }

    /// Format implied by an output file name, if any.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::parse)
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Yaml => "yaml",
        }
    }

    pub fn serialize<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            ExportFormat::Json => Ok(serde_json::to_string_pretty(value)?),
            ExportFormat::Yaml => Ok(serde_yaml::to_string(value)?),
        }
    }
}

/// Envelope around an exported page.
#[derive(Debug, Clone, Serialize)]
pub struct PageBundle<T> {
    pub schema: String,
    pub version: String,
    pub exported_at: String,
    pub lang: Lang,
    pub path: String,
    pub page: T,
}

impl<T: Serialize> PageBundle<T> {
    pub fn new(lang: Lang, path: impl Into<String>, page: T) -> Self {
        Self {
            schema: EXPORT_SCHEMA.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            exported_at: chrono::Utc::now().to_rfc3339(),
            lang,
            path: path.into(),
            page,
        }
    }

    /// Write the bundle to `output`, adding the format's extension when the
    /// name has none. Returns the path written.
    pub fn write(&self, format: ExportFormat, output: &Path) -> Result<PathBuf> {
        let output = match output.extension() {
            Some(_) => output.to_path_buf(),
            None => output.with_extension(format.extension()),
        };
        let rendered = format.serialize(self)?;
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        fs::write(&output, rendered).with_context(|| format!("writing {}", output.display()))?;
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::TempDir;

    #[test]
    fn parse_and_extension() {
        assert_eq!(ExportFormat::parse("YML"), Some(ExportFormat::Yaml));
        assert_eq!(ExportFormat::parse("xml"), None);
        assert_eq!(
            ExportFormat::from_path(Path::new("out/page.json")),
            Some(ExportFormat::Json)
        );
        assert_eq!(ExportFormat::Yaml.extension(), "yaml");
    }

    #[test]
    fn bundle_envelope_fields() {
        let bundle = PageBundle::new(Lang::Es, "/projects/gw", vec!["a", "b"]);
        let json: Value =
            serde_json::from_str(&ExportFormat::Json.serialize(&bundle).unwrap()).unwrap();
        assert_eq!(json["schema"], EXPORT_SCHEMA);
        assert_eq!(json["lang"], "es");
        assert_eq!(json["page"][1], "b");
        assert!(chrono::DateTime::parse_from_rfc3339(json["exported_at"].as_str().unwrap()).is_ok());
    }

    #[test]
    fn write_adds_missing_extension() {
        let dir = TempDir::new().unwrap();
        let bundle = PageBundle::new(Lang::En, "/projects/gw", "page");

        let written = bundle
            .write(ExportFormat::Yaml, &dir.path().join("pages/gw"))
            .unwrap();
        assert_eq!(written, dir.path().join("pages/gw.yaml"));
        assert!(written.is_file());

        let kept = bundle
            .write(ExportFormat::Json, &dir.path().join("gw.txt"))
            .unwrap();
        assert_eq!(kept, dir.path().join("gw.txt"));
    }
}
