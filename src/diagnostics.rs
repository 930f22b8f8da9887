// SPDX-License-Identifier: PMPL-1.0-or-later

//! Warnings and site self-diagnostics.
//!
//! [`warn`] is how the library reports recoverable problems (a missing
//! image, an absent fixture). The interactive views switch it off while they
//! own the terminal. [`run_site_diagnostics`] is the `check` command.

use crate::content::{project_slug, ContentBlock, Site};
use crate::cv;
use crate::i18n::{Lang, LocalizedText};
use anyhow::{anyhow, Result};
use colored::*;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Print a warning line on stderr unless silenced.
pub fn warn(message: impl AsRef<str>) {
    if !is_quiet() {
        eprintln!("{} {}", "warning:".yellow().bold(), message.as_ref());
    }
}

pub fn run_site_diagnostics(site: &Site) -> Result<()> {
    println!("portfolio self-diagnostics ({})", site.root.display());

    let checks = collect_site_diagnostics(site);
    println!();
    for entry in &checks {
        entry.print();
    }

    if checks.iter().any(|entry| entry.level == Level::Error) {
        Err(anyhow!("self-diagnostics reported issues"))
    } else {
        Ok(())
    }
}

pub fn collect_site_diagnostics(site: &Site) -> Vec<Diagnostic> {
    let portfolio = &site.portfolio;
    let mut checks = vec![Diagnostic::ok(
        "version",
        format!("portfolio {}", env!("CARGO_PKG_VERSION")),
    )];

    checks.push(check_directory(
        "data directory",
        &site.path(&site.config.data_dir),
        Level::Error,
    ));
    if let Some(dir) = &site.config.assets_dir {
        checks.push(check_directory("asset directory", &site.path(dir), Level::Warn));
    }
    checks.push(if site.assets.is_empty() {
        Diagnostic::warning("asset registry", "no images registered".to_string())
    } else {
        Diagnostic::ok(
            "asset registry",
            format!("{} images registered", site.assets.len()),
        )
    });

    checks.push(if portfolio.projects.is_empty() {
        Diagnostic::warning("projects", "no projects defined".to_string())
    } else {
        Diagnostic::ok(
            "projects",
            format!("{} projects defined", portfolio.projects.len()),
        )
    });

    checks.push(check_translations(site));
    checks.push(check_project_images(site));
    checks.extend(check_slugs(site));

    for lang in Lang::all() {
        checks.push(match cv::locate(site, *lang) {
            Ok(document) => Diagnostic::ok(
                "CV",
                format!("{} → {}", document.path.display(), document.download_name),
            ),
            Err(err) => Diagnostic::warning("CV", err.to_string()),
        });
    }

    checks.push(if portfolio.contact.phone.trim().is_empty() {
        Diagnostic::warning("contact", "no phone number".to_string())
    } else {
        Diagnostic::ok(
            "contact",
            format!("{} social links", portfolio.contact.social_links.len()),
        )
    });

    checks
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Ok,
    Warn,
    Error,
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub label: &'static str,
    pub level: Level,
    pub detail: String,
}

impl Diagnostic {
    fn new(label: &'static str, level: Level, detail: String) -> Self {
        Self {
            label,
            level,
            detail,
        }
    }

    fn ok(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    fn print(&self) {
        println!("  [{}] {:20} {}", self.level.tag(), self.label, self.detail);
    }
}

impl Level {
    fn tag(&self) -> ColoredString {
        match self {
            Level::Ok => "OK".green(),
            Level::Warn => "WARN".yellow(),
            Level::Error => "ERR".red().bold(),
        }
    }
}

fn check_directory(label: &'static str, path: &Path, missing_level: Level) -> Diagnostic {
    if path.is_dir() {
        Diagnostic::ok(label, format!("{} exists", path.display()))
    } else if path.exists() {
        Diagnostic::warning(
            label,
            format!("{} exists but is not a directory", path.display()),
        )
    } else if missing_level == Level::Error {
        Diagnostic::error(label, format!("{} missing", path.display()))
    } else {
        Diagnostic::warning(label, format!("{} missing", path.display()))
    }
}

/// Localized fields that lack an entry for some language (they will show
/// the English text there).
fn check_translations(site: &Site) -> Diagnostic {
    let portfolio = &site.portfolio;
    let mut fields: Vec<(String, &LocalizedText)> = Vec::new();
    for (idx, project) in portfolio.projects.iter().enumerate() {
        let id = project_slug(project, Lang::En);
        let id = if id.is_empty() { format!("#{}", idx) } else { id };
        fields.push((format!("project {} name", id), &project.name));
        fields.push((format!("project {} description", id), &project.description));
    }
    for (idx, entry) in portfolio.experience.iter().enumerate() {
        fields.push((format!("experience #{} role", idx), &entry.role));
        fields.push((format!("experience #{} description", idx), &entry.description));
    }
    for (idx, entry) in portfolio.education.iter().enumerate() {
        fields.push((format!("education #{} title", idx), &entry.title));
    }

    let missing: Vec<String> = fields
        .into_iter()
        .filter(|(_, text)| text.is_present())
        .flat_map(|(label, text)| {
            Lang::all()
                .iter()
                .filter(|lang| !text.has_entry(**lang))
                .map(|lang| format!("{} [{}]", label, lang))
                .collect::<Vec<_>>()
        })
        .collect();

    if missing.is_empty() {
        Diagnostic::ok("translations", "all checked fields translated".to_string())
    } else {
        Diagnostic::warning(
            "translations",
            format!("{} untranslated: {}", missing.len(), missing.join(", ")),
        )
    }
}

/// Card images and content image blocks that do not resolve.
fn check_project_images(site: &Site) -> Diagnostic {
    let mut missing = Vec::new();
    let mut checked = 0usize;
    for project in site.projects() {
        let mut references: Vec<String> = project.img.iter().cloned().collect();
        for lang in Lang::all() {
            if let Some(Value::Array(entries)) = project.localized_content(*lang) {
                references.extend(entries.iter().filter_map(|entry| {
                    match ContentBlock::parse(entry) {
                        Some(ContentBlock::Image { src, .. }) => Some(src.unwrap_or_default()),
                        _ => None,
                    }
                }));
            }
        }
        references.sort();
        references.dedup();
        for reference in references {
            checked += 1;
            if site.assets.lookup(&reference).is_none() {
                missing.push(if reference.is_empty() {
                    "<empty src>".to_string()
                } else {
                    reference
                });
            }
        }
    }

    if missing.is_empty() {
        Diagnostic::ok("project images", format!("{} references resolve", checked))
    } else {
        Diagnostic::warning(
            "project images",
            format!("{} unresolved: {}", missing.len(), missing.join(", ")),
        )
    }
}

/// Slugs shared by several projects; only the first is reachable.
fn check_slugs(site: &Site) -> Vec<Diagnostic> {
    let mut checks = Vec::new();
    for lang in Lang::all() {
        let mut seen: BTreeMap<String, usize> = BTreeMap::new();
        let mut empty = 0usize;
        for project in site.projects() {
            let slug = project_slug(project, *lang);
            if slug.is_empty() {
                empty += 1;
            } else {
                *seen.entry(slug).or_insert(0) += 1;
            }
        }
        let collisions: Vec<&str> = seen
            .iter()
            .filter(|(_, count)| **count > 1)
            .map(|(slug, _)| slug.as_str())
            .collect();
        if empty > 0 {
            checks.push(Diagnostic::error(
                "project slugs",
                format!("{} project(s) have no usable slug in {}", empty, lang),
            ));
        }
        checks.push(if collisions.is_empty() {
            Diagnostic::ok("project slugs", format!("unique in {}", lang))
        } else {
            Diagnostic::warning(
                "project slugs",
                format!(
                    "collide in {} (first project wins): {}",
                    lang,
                    collisions.join(", ")
                ),
            )
        });
    }
    checks
}
