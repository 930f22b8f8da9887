// SPDX-License-Identifier: PMPL-1.0-or-later

//! Project lookup by URL path segment.

use crate::i18n::Lang;
use crate::types::Project;
use regex::Regex;
use std::sync::LazyLock;

static SLUG_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("slug separator pattern is valid"));

/// Lowercase, collapse every run outside `[a-z0-9]` into one hyphen, trim
/// hyphens from both ends.
///
/// ```
/// use portfolio_site::content::derive_slug;
/// assert_eq!(derive_slug("Payment Gateway!!"), "payment-gateway");
/// assert_eq!(derive_slug("  A/B  Test "), "a-b-test");
/// ```
pub fn derive_slug(name: &str) -> String {
    let lowered = name.to_lowercase();
    SLUG_SEPARATORS
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// The slug a link to `project` should use under `lang`.
pub fn project_slug(project: &Project, lang: Lang) -> String {
    match project.explicit_slug() {
        Some(slug) => slug.to_string(),
        None => derive_slug(&project.name.resolve(lang)),
    }
}

/// Find the project addressed by `segment`.
///
/// A project with an explicit slug matches only on that slug (exact, case
/// sensitive). Otherwise its name under `lang` (falling back to English) is
/// turned into a slug and compared. Explicit slugs are tried before derived
/// ones; within each group the first project in order wins.
pub fn find_project<'a>(projects: &'a [Project], segment: &str, lang: Lang) -> Option<&'a Project> {
    find_index(projects, segment, lang).map(|idx| &projects[idx])
}

/// Position of the project [`find_project`] would return.
pub fn find_index(projects: &[Project], segment: &str, lang: Lang) -> Option<usize> {
    projects
        .iter()
        .position(|project| project.explicit_slug() == Some(segment))
        .or_else(|| {
            projects.iter().position(|project| {
                project.explicit_slug().is_none()
                    && derive_slug(&project.name.resolve(lang)) == segment
            })
        })
}

/// Like [`find_index`], trying `preferred` first and then every other
/// supported language for name-derived slugs.
///
/// Keeps a URL built under one language pointing at the same project after
/// the language changes.
pub fn find_index_any_language(
    projects: &[Project],
    segment: &str,
    preferred: Lang,
) -> Option<usize> {
    find_index(projects, segment, preferred).or_else(|| {
        Lang::all()
            .iter()
            .filter(|lang| **lang != preferred)
            .find_map(|lang| find_index(projects, segment, *lang))
    })
}
