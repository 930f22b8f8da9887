// SPDX-License-Identifier: PMPL-1.0-or-later

//! Application state.
//!
//! [`App`] owns the loaded [`Site`] and the little that changes at runtime:
//! the active language, the route and navigation history, the selected home
//! section, the lightbox and the scroll position. Views feed it
//! [`Message`]s and draw from its accessors; every transition happens inside
//! one [`App::update`] call.

pub mod model;
pub mod route;

pub use model::{dial_form, ProjectCard, ProjectView};
pub use route::{Route, Section};

use crate::content::{find_index, find_index_any_language, RenderPlan, Site};
use crate::gallery::{GalleryEffect, GalleryKey, Lightbox};
use crate::i18n::{ActiveLanguage, Lang};
use crate::types::Project;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    SelectSection(Section),
    SetLanguage(Lang),
    ToggleLanguage,
    /// Follow a project card link.
    OpenProject(String),
    /// Go to an arbitrary path.
    Navigate(String),
    Back,
    GoHome,
    /// Scroll the page by a number of lines. Ignored while the lightbox
    /// holds the scroll lock.
    Scroll(i32),
    /// Click on the inline image with this gallery index.
    OpenGallery(usize),
    GalleryKey(GalleryKey),
    GalleryThumbnail(usize),
    GalleryNext,
    GalleryPrev,
    CloseGallery,
    ToggleFullscreen,
    /// The host's fullscreen state changed.
    FullscreenChanged(bool),
    ImageLoaded,
    ImageFailed,
}

/// Something only the host can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    EnterFullscreen,
    ExitFullscreen,
}

#[derive(Debug)]
struct Detail {
    index: usize,
    content: RenderPlan,
}

#[derive(Debug)]
pub struct App {
    site: Site,
    language: ActiveLanguage,
    route: Route,
    history: Vec<Route>,
    section: Section,
    detail: Option<Detail>,
    lightbox: Lightbox,
    input_captured: bool,
    scroll: usize,
}

impl App {
    pub fn new(site: Site) -> Self {
        let lang = site.config.default_language;
        Self::with_language(site, lang)
    }

    pub fn with_language(site: Site, lang: Lang) -> Self {
        Self {
            site,
            language: ActiveLanguage::new(lang),
            route: Route::Home,
            history: Vec::new(),
            section: Section::default(),
            detail: None,
            lightbox: Lightbox::default(),
            input_captured: false,
            scroll: 0,
        }
    }

    pub fn site(&self) -> &Site {
        &self.site
    }

    pub fn lang(&self) -> Lang {
        self.language.get()
    }

    pub fn language_revision(&self) -> u64 {
        self.language.revision()
    }

    /// Run `listener` after every language change.
    pub fn on_language_change(&mut self, listener: impl FnMut(Lang) + 'static) {
        self.language.subscribe(listener);
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn path(&self) -> String {
        self.route.path()
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    /// Whether the lightbox owns the keyboard and the page scroll is locked.
    pub fn input_captured(&self) -> bool {
        self.input_captured
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// The project the route points at, if it exists.
    pub fn current_project(&self) -> Option<&Project> {
        self.detail
            .as_ref()
            .and_then(|detail| self.site.projects().get(detail.index))
    }

    /// Render plan of the current project under the active language.
    pub fn content(&self) -> Option<&RenderPlan> {
        self.detail.as_ref().map(|detail| &detail.content)
    }

    pub fn project_view(&self) -> Option<ProjectView> {
        let detail = self.detail.as_ref()?;
        let project = self.site.projects().get(detail.index)?;
        Some(ProjectView::new(
            &self.site,
            project,
            detail.content.clone(),
            self.lang(),
        ))
    }

    /// A project route naming no project, or an unknown path.
    pub fn is_not_found(&self) -> bool {
        match self.route {
            Route::Home => false,
            Route::Project(_) => self.detail.is_none(),
            Route::Unmatched(_) => true,
        }
    }

    pub fn update(&mut self, message: Message) -> Option<HostCommand> {
        match message {
            Message::SelectSection(section) => {
                let host = if self.route == Route::Home {
                    None
                } else {
                    self.navigate(Route::Home)
                };
                self.section = section;
                self.scroll = 0;
                host
            }
            Message::SetLanguage(lang) => self.set_language(lang),
            Message::ToggleLanguage => {
                let next = self.lang().toggled();
                self.set_language(next)
            }
            Message::OpenProject(segment) => self.navigate(Route::project(segment)),
            Message::Navigate(path) => self.navigate(Route::parse(&path)),
            Message::GoHome => self.navigate(Route::Home),
            Message::Back => {
                let previous = self.history.pop().unwrap_or_default();
                self.enter(previous)
            }
            Message::Scroll(delta) => {
                if !self.input_captured {
                    self.scroll = self.scroll.saturating_add_signed(delta as isize);
                }
                None
            }
            Message::OpenGallery(index) => {
                let effect = self.lightbox.open(index);
                self.apply(effect)
            }
            Message::GalleryKey(key) => {
                let effect = self.lightbox.handle_key(key);
                self.apply(effect)
            }
            Message::GalleryThumbnail(index) => {
                self.lightbox.jump_to(index);
                None
            }
            Message::GalleryNext => {
                self.lightbox.next();
                None
            }
            Message::GalleryPrev => {
                self.lightbox.prev();
                None
            }
            Message::CloseGallery => {
                let effect = self.lightbox.close();
                self.apply(effect)
            }
            Message::ToggleFullscreen => {
                let effect = self.lightbox.toggle_fullscreen();
                self.apply(effect)
            }
            Message::FullscreenChanged(fullscreen) => {
                self.lightbox.sync_fullscreen(fullscreen);
                None
            }
            Message::ImageLoaded => {
                self.lightbox.image_ready();
                None
            }
            Message::ImageFailed => {
                self.lightbox.image_failed();
                None
            }
        }
    }

    fn set_language(&mut self, lang: Lang) -> Option<HostCommand> {
        if !self.language.set(lang) {
            return None;
        }
        // Same route, same project; only the localized content is redone.
        // A segment derived under the previous language still resolves.
        self.detail = match self.detail.take() {
            Some(detail) => self.detail_for(detail.index),
            None => self.resolve_detail(find_index_any_language),
        };
        let len = self.gallery_len();
        let effect = self.lightbox.set_len(len);
        self.apply(effect)
    }

    fn navigate(&mut self, route: Route) -> Option<HostCommand> {
        let previous = std::mem::replace(&mut self.route, Route::Home);
        self.history.push(previous);
        self.enter(route)
    }

    fn enter(&mut self, route: Route) -> Option<HostCommand> {
        let closed = self.lightbox.close();
        let host = self.apply(closed);
        self.route = route;
        self.scroll = 0;
        self.detail = self.resolve_detail(find_index);
        self.lightbox = Lightbox::new(self.gallery_len());
        host
    }

    fn resolve_detail(
        &self,
        locate: fn(&[Project], &str, Lang) -> Option<usize>,
    ) -> Option<Detail> {
        let segment = self.route.segment()?;
        let index = locate(self.site.projects(), segment, self.lang())?;
        self.detail_for(index)
    }

    fn detail_for(&self, index: usize) -> Option<Detail> {
        let project = self.site.projects().get(index)?;
        Some(Detail {
            index,
            content: self.site.render_project(project, self.lang()),
        })
    }

    fn gallery_len(&self) -> usize {
        self.detail
            .as_ref()
            .map_or(0, |detail| detail.content.gallery.len())
    }

    /// Carry out lightbox effects that belong to the app; pass the rest on.
    fn apply(&mut self, effect: Option<GalleryEffect>) -> Option<HostCommand> {
        match effect? {
            GalleryEffect::CaptureInput => {
                self.input_captured = true;
                None
            }
            GalleryEffect::ReleaseInput => {
                self.input_captured = false;
                // A closed lightbox does not stay fullscreen.
                self.lightbox
                    .is_fullscreen()
                    .then_some(HostCommand::ExitFullscreen)
            }
            GalleryEffect::RequestFullscreen => Some(HostCommand::EnterFullscreen),
            GalleryEffect::ExitFullscreen => Some(HostCommand::ExitFullscreen),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetRegistry;
    use crate::config::SiteConfig;
    use crate::content::Portfolio;
    use serde_json::json;

    fn app() -> App {
        let mut assets = AssetRegistry::new();
        assets.register("a.png", "/assets/a.png");
        assets.register("b.png", "/assets/b.png");
        let portfolio = Portfolio {
            projects: serde_json::from_value(json!([{
                "slug": "gw",
                "name": { "en": "Gateway" },
                "expanded-description": {
                    "en": [{ "type": "image", "src": "a.png" }, { "type": "image", "src": "b.png" }],
                    "es": [{ "type": "image", "src": "a.png" }]
                }
            }]))
            .unwrap(),
            ..Portfolio::default()
        };
        App::with_language(
            Site::from_parts(".", SiteConfig::default(), portfolio, assets),
            Lang::En,
        )
    }

    #[test]
    fn scroll_is_locked_while_lightbox_open() {
        let mut app = app();
        app.update(Message::OpenProject("gw".into()));
        app.update(Message::Scroll(5));
        assert_eq!(app.scroll(), 5);

        app.update(Message::OpenGallery(1));
        assert!(app.input_captured());
        app.update(Message::Scroll(3));
        assert_eq!(app.scroll(), 5);

        app.update(Message::GalleryKey(GalleryKey::Escape));
        assert!(!app.input_captured());
        app.update(Message::Scroll(-10));
        assert_eq!(app.scroll(), 0);
    }

    #[test]
    fn fullscreen_is_requested_then_synced() {
        let mut app = app();
        app.update(Message::OpenProject("gw".into()));
        app.update(Message::OpenGallery(0));
        assert_eq!(
            app.update(Message::GalleryKey(GalleryKey::Char('f'))),
            Some(HostCommand::EnterFullscreen)
        );
        assert!(!app.lightbox().is_fullscreen());
        app.update(Message::FullscreenChanged(true));
        assert!(app.lightbox().is_fullscreen());
        assert_eq!(
            app.update(Message::CloseGallery),
            Some(HostCommand::ExitFullscreen)
        );
    }

    #[test]
    fn language_switch_shrinks_open_gallery() {
        let mut app = app();
        app.update(Message::OpenProject("gw".into()));
        app.update(Message::OpenGallery(1));
        app.update(Message::SetLanguage(Lang::Es));
        assert_eq!(app.lightbox().len(), 1);
        assert_eq!(app.lightbox().current(), Some(0));
        assert_eq!(app.path(), "/projects/gw");
    }

    #[test]
    fn section_change_leaves_project_page() {
        let mut app = app();
        app.update(Message::OpenProject("gw".into()));
        app.update(Message::SelectSection(Section::Contact));
        assert_eq!(app.route(), &Route::Home);
        assert_eq!(app.section(), Section::Contact);
        app.update(Message::Back);
        assert_eq!(app.route(), &Route::project("gw"));
    }
}
