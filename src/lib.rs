// SPDX-License-Identifier: PMPL-1.0-or-later

//! Portfolio site: a bilingual personal portfolio.
//!
//! Static fixtures (profile, education, experience, projects, skills,
//! languages, contact) are loaded once into a [`content::Site`]. Everything
//! user-facing is localized between English and Spanish with English as the
//! fallback.
//!
//! LAYERS:
//! 1. **i18n**: interface catalog, localized field resolution, the active
//!    language.
//! 2. **content**: fixture loading, project lookup by slug, and rendering of
//!    expanded descriptions into flat instructions plus an image gallery.
//! 3. **gallery**: the lightbox state machine.
//! 4. **app**: routes, navigation history and the message loop the views
//!    drive.
//! 5. **view**: console pages, terminal UI, desktop window and export.

pub mod app;
pub mod assets;
pub mod config;
pub mod content;
pub mod cv;
pub mod diagnostics;
pub mod gallery;
pub mod i18n;
pub mod types;
pub mod view;
