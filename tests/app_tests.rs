// SPDX-License-Identifier: PMPL-1.0-or-later

//! Routing, language switching and lightbox behaviour through the app loop

use portfolio_site::app::{App, HostCommand, Message, Route, Section};
use portfolio_site::assets::AssetRef;
use portfolio_site::content::Site;
use portfolio_site::diagnostics;
use portfolio_site::gallery::GalleryKey;
use portfolio_site::i18n::Lang;
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

fn app(lang: Lang) -> App {
    diagnostics::set_quiet(true);
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("site");
    App::with_language(Site::open(&root, None).expect("sample site"), lang)
}

fn gallery_sources(app: &App) -> Vec<AssetRef> {
    app.content()
        .map(|plan| plan.gallery.iter().map(|image| image.src.clone()).collect())
        .unwrap_or_default()
}

#[test]
fn test_language_round_trip_keeps_identity() {
    let mut app = app(Lang::En);
    app.update(Message::OpenProject("gateway".into()));

    let path = app.path();
    let card_image = app.project_view().unwrap().card.image;
    let en_gallery = gallery_sources(&app);
    assert_eq!(app.project_view().unwrap().card.name, "Payment Gateway");

    app.update(Message::SetLanguage(Lang::Es));
    assert_eq!(app.path(), path);
    assert_eq!(app.project_view().unwrap().card.name, "Pasarela de Pagos");
    assert_eq!(app.project_view().unwrap().card.image, card_image);

    app.update(Message::SetLanguage(Lang::En));
    assert_eq!(app.path(), path);
    assert_eq!(app.project_view().unwrap().card.slug, "gateway");
    assert_eq!(gallery_sources(&app), en_gallery);
    assert_eq!(app.language_revision(), 2);
}

#[test]
fn test_derived_slug_url_survives_language_switch() {
    let mut app = app(Lang::En);
    app.update(Message::OpenProject("sensor-data-lab".into()));
    assert!(!app.is_not_found());

    app.update(Message::ToggleLanguage);
    assert_eq!(app.lang(), Lang::Es);
    assert_eq!(app.path(), "/projects/sensor-data-lab");
    assert_eq!(
        app.project_view().unwrap().card.name,
        "Laboratorio de Sensores"
    );
}

#[test]
fn test_segment_derived_in_other_language_is_not_found() {
    let mut app = app(Lang::Es);
    app.update(Message::OpenProject("sensor-data-lab".into()));
    assert!(app.is_not_found());
    assert!(app.project_view().is_none());

    app.update(Message::OpenProject("laboratorio-de-sensores".into()));
    assert!(!app.is_not_found());
}

#[test]
fn test_unknown_project_offers_back() {
    let mut app = app(Lang::En);
    app.update(Message::SelectSection(Section::Projects));
    app.update(Message::OpenProject("does-not-exist".into()));
    assert!(app.is_not_found());
    assert!(app.project_view().is_none());

    app.update(Message::Back);
    assert_eq!(app.route(), &Route::Home);
    assert_eq!(app.section(), Section::Projects);
    assert!(!app.is_not_found());
}

#[test]
fn test_back_from_empty_history_goes_home() {
    let mut app = app(Lang::En);
    app.update(Message::Navigate("/blog/post".into()));
    assert!(app.is_not_found());
    app.update(Message::Back);
    app.update(Message::Back);
    assert_eq!(app.route(), &Route::Home);
    assert_eq!(app.history_len(), 0);
}

#[test]
fn test_language_listeners_fire_on_change_only() {
    let mut app = app(Lang::En);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    app.on_language_change(move |lang| sink.borrow_mut().push(lang));

    app.update(Message::SetLanguage(Lang::En));
    app.update(Message::SetLanguage(Lang::Es));
    app.update(Message::SetLanguage(Lang::Es));
    app.update(Message::ToggleLanguage);

    assert_eq!(*seen.borrow(), vec![Lang::Es, Lang::En]);
}

#[test]
fn test_lightbox_keyboard_session() {
    let mut app = app(Lang::En);
    app.update(Message::OpenProject("gateway".into()));
    assert_eq!(app.lightbox().len(), 2);

    app.update(Message::OpenGallery(1));
    assert!(app.input_captured());
    assert_eq!(app.lightbox().current(), Some(1));
    assert!(!app.lightbox().image_loaded());
    app.update(Message::ImageLoaded);
    assert!(app.lightbox().image_loaded());

    app.update(Message::GalleryKey(GalleryKey::ArrowRight));
    assert_eq!(app.lightbox().current(), Some(0));
    assert!(!app.lightbox().image_loaded());
    app.update(Message::GalleryKey(GalleryKey::ArrowLeft));
    assert_eq!(app.lightbox().current(), Some(1));
    app.update(Message::GalleryThumbnail(0));
    assert_eq!(app.lightbox().current(), Some(0));

    assert_eq!(
        app.update(Message::GalleryKey(GalleryKey::Char('F'))),
        Some(HostCommand::EnterFullscreen)
    );
    app.update(Message::FullscreenChanged(true));
    assert_eq!(
        app.update(Message::GalleryKey(GalleryKey::Escape)),
        Some(HostCommand::ExitFullscreen)
    );
    assert!(!app.lightbox().is_open());
    assert!(!app.input_captured());
}

#[test]
fn test_navigation_closes_lightbox() {
    let mut app = app(Lang::En);
    app.update(Message::OpenProject("gateway".into()));
    app.update(Message::OpenGallery(0));
    app.update(Message::GoHome);
    assert!(!app.lightbox().is_open());
    assert!(!app.input_captured());
    assert_eq!(app.lightbox().len(), 0);
    // No gallery on the home page.
    app.update(Message::OpenGallery(0));
    assert!(!app.input_captured());
}
