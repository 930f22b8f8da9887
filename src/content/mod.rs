// SPDX-License-Identifier: PMPL-1.0-or-later

//! Site content: fixtures, assets and the project lookup/render pipeline.
//!
//! Everything here is loaded once by [`Site::open`] and read-only afterwards.

pub mod locate;
pub mod render;

pub use locate::{derive_slug, find_index, find_index_any_language, find_project, project_slug};
pub use render::{render, ContentBlock, GalleryImage, LinkIcon, RenderInstruction, RenderPlan};

use crate::assets::AssetRegistry;
use crate::config::{load_json_or_yaml, SiteConfig};
use crate::diagnostics;
use crate::i18n::Lang;
use crate::types::*;
use anyhow::Result;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

const FIXTURE_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

/// All fixture categories of one site.
#[derive(Debug, Clone, Default)]
pub struct Portfolio {
    pub profile: Profile,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillCategory>,
    pub languages: Vec<SpokenLanguage>,
    pub contact: Contact,
}

impl Portfolio {
    /// Load every category from `data_dir`. A missing category is empty
    /// (and logged); a malformed one is an error.
    pub fn load(data_dir: &Path) -> Result<Self> {
        Ok(Self {
            profile: load_category(data_dir, "profile")?,
            education: load_category(data_dir, "education")?,
            experience: load_category(data_dir, "experience")?,
            projects: load_category(data_dir, "projects")?,
            skills: load_category(data_dir, "skills")?,
            languages: load_category(data_dir, "languages")?,
            contact: load_category(data_dir, "contact")?,
        })
    }
}

fn load_category<T: DeserializeOwned + Default>(dir: &Path, stem: &str) -> Result<T> {
    let found = FIXTURE_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{}.{}", stem, ext)))
        .find(|path| path.is_file());
    match found {
        Some(path) => load_json_or_yaml(&path),
        None => {
            diagnostics::warn(format!(
                "no {} fixture in {}; section will be empty",
                stem,
                dir.display()
            ));
            Ok(T::default())
        }
    }
}

/// A loaded site: configuration, content and image assets.
#[derive(Debug, Clone)]
pub struct Site {
    pub root: PathBuf,
    pub config: SiteConfig,
    pub portfolio: Portfolio,
    pub assets: AssetRegistry,
}

impl Site {
    /// Load the site rooted at `root`, with `config_path` overriding the
    /// default `portfolio.yaml` lookup.
    pub fn open(root: &Path, config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => SiteConfig::load(path)?,
            None => SiteConfig::load_default(root)?,
        };
        let portfolio = Portfolio::load(&root.join(&config.data_dir))?;

        let mut assets = AssetRegistry::new();
        if let Some(dir) = &config.assets_dir {
            let dir = root.join(dir);
            if dir.is_dir() {
                assets.scan_dir(&dir)?;
            } else {
                diagnostics::warn(format!("asset directory {} not found", dir.display()));
            }
        }
        if let Some(manifest) = &config.assets_manifest {
            assets.load_manifest(&root.join(manifest))?;
        }

        Ok(Self {
            root: root.to_path_buf(),
            config,
            portfolio,
            assets,
        })
    }

    /// Assemble a site from already-loaded parts.
    pub fn from_parts(
        root: impl Into<PathBuf>,
        config: SiteConfig,
        portfolio: Portfolio,
        assets: AssetRegistry,
    ) -> Self {
        Self {
            root: root.into(),
            config,
            portfolio,
            assets,
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.portfolio.projects
    }

    /// Resolve a path from the configuration against the site root.
    pub fn path(&self, relative: &Path) -> PathBuf {
        if relative.is_absolute() {
            relative.to_path_buf()
        } else {
            self.root.join(relative)
        }
    }

    pub fn find_project(&self, segment: &str, lang: Lang) -> Option<&Project> {
        find_project(self.projects(), segment, lang)
    }

    /// Render plan of `project`'s expanded description under `lang`.
    pub fn render_project(&self, project: &Project, lang: Lang) -> RenderPlan {
        match project.localized_content(lang) {
            Some(content) => render(content, &self.assets),
            None => RenderPlan::default(),
        }
    }

    /// Person part of the CV file name.
    pub fn cv_owner(&self) -> String {
        match self.config.owner.as_deref().filter(|o| !o.is_empty()) {
            Some(owner) => owner.to_string(),
            None => self
                .portfolio
                .profile
                .name
                .chars()
                .filter(|c| c.is_alphanumeric())
                .collect(),
        }
    }
}
