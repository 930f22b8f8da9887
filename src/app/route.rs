// SPDX-License-Identifier: PMPL-1.0-or-later

//! Client-side routes and home-page sections.

use std::fmt;

const PROJECTS_PREFIX: &str = "/projects/";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// `/`
    #[default]
    Home,
    /// `/projects/<segment>`; the segment may not name any project.
    Project(String),
    /// Any other path. Rendered like a missing project.
    Unmatched(String),
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        if trimmed.is_empty() || trimmed == "/" {
            return Route::Home;
        }
        match trimmed.strip_prefix(PROJECTS_PREFIX) {
            Some(segment) => {
                let segment = segment.strip_suffix('/').unwrap_or(segment);
                if segment.is_empty() || segment.contains('/') {
                    Route::Unmatched(trimmed.to_string())
                } else {
                    Route::Project(segment.to_string())
                }
            }
            None => Route::Unmatched(trimmed.to_string()),
        }
    }

    pub fn project(segment: impl Into<String>) -> Self {
        Route::Project(segment.into())
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Project(segment) => format!("{}{}", PROJECTS_PREFIX, segment),
            Route::Unmatched(path) => path.clone(),
        }
    }

    pub fn segment(&self) -> Option<&str> {
        match self {
            Route::Project(segment) => Some(segment),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Home page sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    About,
    Experience,
    Projects,
    Cv,
    Contact,
}

impl Section {
    pub fn all() -> &'static [Section] {
        &[
            Section::About,
            Section::Experience,
            Section::Projects,
            Section::Cv,
            Section::Contact,
        ]
    }

    /// Catalog key of the navigation label.
    pub fn nav_key(&self) -> &'static str {
        match self {
            Section::About => "nav.about",
            Section::Experience => "nav.experience",
            Section::Projects => "nav.projects",
            Section::Cv => "nav.cv",
            Section::Contact => "nav.contact",
        }
    }

    /// Anchor id on the page.
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Cv => "cv",
            Section::Contact => "contact",
        }
    }

    pub fn next(&self) -> Section {
        let all = Self::all();
        let idx = all.iter().position(|s| s == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    pub fn prev(&self) -> Section {
        let all = Self::all();
        let idx = all.iter().position(|s| s == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_paths() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(
            Route::parse("/projects/payment-gateway"),
            Route::project("payment-gateway")
        );
        assert_eq!(Route::parse("/projects/gw/"), Route::project("gw"));
    }

    #[test]
    fn anything_else_is_unmatched() {
        assert_eq!(
            Route::parse("/projects/"),
            Route::Unmatched("/projects/".into())
        );
        assert_eq!(
            Route::parse("/projects/a/b"),
            Route::Unmatched("/projects/a/b".into())
        );
        assert_eq!(Route::parse("/blog"), Route::Unmatched("/blog".into()));
    }

    #[test]
    fn path_round_trips_for_projects() {
        let route = Route::project("data-lab");
        assert_eq!(route.path(), "/projects/data-lab");
        assert_eq!(Route::parse(&route.path()), route);
    }

    #[test]
    fn sections_cycle() {
        assert_eq!(Section::Contact.next(), Section::About);
        assert_eq!(Section::About.prev(), Section::Contact);
        assert_eq!(Section::Cv.nav_key(), "nav.cv");
    }
}
