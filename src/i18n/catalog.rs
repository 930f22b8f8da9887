// SPDX-License-Identifier: PMPL-1.0-or-later

//! Interface string catalog.
//!
//! Headings, button labels and fixed messages of the site live here as a
//! compile-time table per language. Personal content (biography, projects,
//! experience) does not: it comes from the data fixtures and goes through
//! [`super::localize`].
//!
//! ## Adding a new key
//!
//! 1. Add the English entry to `EN`
//! 2. Add the Spanish entry to `ES` (a missing key falls back to English)

use serde::{Deserialize, Serialize};

/// Languages the site can be displayed in.
///
/// Each variant maps to the ISO 639-1 code used as a key inside localized
/// fixture fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    En,
    Es,
}

impl Lang {
    /// ISO 639-1 two-letter code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Es => "es",
        }
    }

    /// Parse an ISO 639-1 code into a supported language.
    ///
    /// Accepts upper case too, so `ES` from a language switcher label works.
    pub fn from_code(code: &str) -> Option<Lang> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Lang::En),
            "es" => Some(Lang::Es),
            _ => None,
        }
    }

    /// All supported languages, in switcher order.
    pub fn all() -> &'static [Lang] {
        &[Lang::En, Lang::Es]
    }

    /// Name of the language in that language, for the switcher.
    pub fn native_name(&self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Es => "Español",
        }
    }

    /// The other language of the pair; used by the one-key switcher.
    pub fn toggled(&self) -> Lang {
        match self {
            Lang::En => Lang::Es,
            Lang::Es => Lang::En,
        }
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::En
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ─── Translation Lookup ─────────────────────────────────────────────

/// Look up an interface string in the specified language.
///
/// Falls back to English when the key is missing in the requested language,
/// and to `""` when it is missing everywhere.
///
/// # Examples
///
/// ```
/// use portfolio_site::i18n::{t, Lang};
/// assert_eq!(t(Lang::En, "nav.projects"), "Projects");
/// assert_eq!(t(Lang::Es, "nav.projects"), "Proyectos");
/// ```
pub fn t(lang: Lang, key: &str) -> &'static str {
    if let Some(value) = lookup(catalog_for(lang), key) {
        return value;
    }
    if lang != Lang::En {
        if let Some(value) = lookup(EN, key) {
            return value;
        }
    }
    ""
}

/// Returns the translation, or the key itself when no catalog has it.
pub fn t_or_key<'a>(lang: Lang, key: &'a str) -> &'a str {
    let result = t(lang, key);
    if result.is_empty() {
        key
    } else {
        result
    }
}

fn lookup(catalog: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    catalog.iter().find(|(k, _)| *k == key).map(|&(_, v)| v)
}

fn catalog_for(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::En => EN,
        Lang::Es => ES,
    }
}

// ─── English (source language, every key defined here) ─────────────

const EN: &[(&str, &str)] = &[
    // Navigation
    ("nav.about", "About"),
    ("nav.experience", "Experience"),
    ("nav.projects", "Projects"),
    ("nav.cv", "View CV"),
    ("nav.contact", "Contact"),
    ("nav.language", "Language"),
    // Header
    ("header.hello", "Hi, I'm"),
    ("header.download_cv", "Download CV"),
    // About
    ("about.title", "About me"),
    ("about.education", "Education"),
    ("about.languages", "Languages"),
    ("about.skills", "Skills"),
    ("about.gpa", "GPA"),
    // Experience
    ("experience.title", "Experience"),
    // Projects
    ("projects.title", "Projects"),
    ("projects.empty", "No projects available yet."),
    ("projects.collaboration", "Collaboration with"),
    ("projects.view_code", "View Code"),
    ("projects.live_demo", "Live Demo"),
    ("projects.view_details", "View Details"),
    // Project details
    ("project.not_found", "Project not found"),
    ("project.not_found_desc", "The project you're looking for doesn't exist or has been moved."),
    ("project.back_home", "Go back"),
    ("project.go_back", "Go Back"),
    ("project.details", "Project Details"),
    ("project.info", "Project Info"),
    ("project.year", "Year"),
    ("project.category", "Category"),
    ("project.status", "Status"),
    ("project.quick_links", "Quick Links"),
    ("project.key_features", "Key Features"),
    ("project.technologies", "Technologies"),
    ("project.gallery", "Gallery"),
    ("project.click_to_expand", "Click on images to view full size"),
    ("project.more", "more"),
    ("project.image_not_found", "Image not found"),
    ("project.copy", "Copy"),
    // Gallery
    ("gallery.image", "Image"),
    ("gallery.close", "Close gallery"),
    ("gallery.previous", "Previous image"),
    ("gallery.next", "Next image"),
    ("gallery.fullscreen", "Fullscreen"),
    ("gallery.loading", "Loading..."),
    // CV
    ("cv.title", "Curriculum Vitae"),
    ("cv.missing", "The CV document is not available in this language."),
    ("cv.saved", "CV saved to"),
    // Contact
    ("contact.title", "Contact"),
    ("contact.text", "Feel free to reach out through any of these channels."),
    ("contact.connect", "Connect with me"),
    ("contact.details", "Contact details"),
    ("contact.phone", "Phone"),
    ("contact.email", "Email"),
    ("contact.location", "Location"),
];

// ─── Spanish ────────────────────────────────────────────────────────

const ES: &[(&str, &str)] = &[
    ("nav.about", "Sobre mí"),
    ("nav.experience", "Experiencia"),
    ("nav.projects", "Proyectos"),
    ("nav.cv", "Ver CV"),
    ("nav.contact", "Contacto"),
    ("nav.language", "Idioma"),
    ("header.hello", "Hola, soy"),
    ("header.download_cv", "Descargar CV"),
    ("about.title", "Sobre mí"),
    ("about.education", "Educación"),
    ("about.languages", "Idiomas"),
    ("about.skills", "Habilidades"),
    ("about.gpa", "Nota media"),
    ("experience.title", "Experiencia"),
    ("projects.title", "Proyectos"),
    ("projects.empty", "Todavía no hay proyectos disponibles."),
    ("projects.collaboration", "En colaboración con"),
    ("projects.view_code", "Ver código"),
    ("projects.live_demo", "Demo en vivo"),
    ("projects.view_details", "Ver detalles"),
    ("project.not_found", "Proyecto no encontrado"),
    ("project.not_found_desc", "El proyecto que buscas no existe o ha sido movido."),
    ("project.back_home", "Volver"),
    ("project.go_back", "Volver"),
    ("project.details", "Detalles del proyecto"),
    ("project.info", "Información del proyecto"),
    ("project.year", "Año"),
    ("project.category", "Categoría"),
    ("project.status", "Estado"),
    ("project.quick_links", "Enlaces rápidos"),
    ("project.key_features", "Características principales"),
    ("project.technologies", "Tecnologías"),
    ("project.gallery", "Galería"),
    ("project.click_to_expand", "Haz clic en las imágenes para verlas a tamaño completo"),
    ("project.more", "más"),
    ("project.image_not_found", "Imagen no encontrada"),
    ("project.copy", "Copiar"),
    ("gallery.image", "Imagen"),
    ("gallery.close", "Cerrar galería"),
    ("gallery.previous", "Imagen anterior"),
    ("gallery.next", "Imagen siguiente"),
    ("gallery.fullscreen", "Pantalla completa"),
    ("gallery.loading", "Cargando..."),
    ("cv.title", "Currículum"),
    ("cv.missing", "El CV no está disponible en este idioma."),
    ("cv.saved", "CV guardado en"),
    ("contact.title", "Contacto"),
    ("contact.text", "No dudes en contactarme por cualquiera de estos medios."),
    ("contact.connect", "Conecta conmigo"),
    ("contact.details", "Datos de contacto"),
    ("contact.phone", "Teléfono"),
    ("contact.email", "Correo"),
    ("contact.location", "Ubicación"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_keys_all_resolve() {
        for &(key, _) in EN {
            let result = t(Lang::En, key);
            assert!(!result.is_empty(), "EN key '{}' should resolve", key);
        }
    }

    #[test]
    fn spanish_translations_used() {
        assert_eq!(t(Lang::Es, "project.not_found"), "Proyecto no encontrado");
        assert_eq!(t(Lang::Es, "contact.phone"), "Teléfono");
    }

    #[test]
    fn unknown_key_returns_empty() {
        assert_eq!(t(Lang::Es, "nonexistent.key"), "");
    }

    #[test]
    fn t_or_key_returns_key_for_missing() {
        assert_eq!(t_or_key(Lang::En, "nonexistent.key"), "nonexistent.key");
    }

    #[test]
    fn lang_roundtrip() {
        for lang in Lang::all() {
            let parsed = Lang::from_code(lang.code()).expect("should parse");
            assert_eq!(*lang, parsed);
        }
        assert_eq!(Lang::from_code("ES"), Some(Lang::Es));
        assert_eq!(Lang::from_code("gl"), None);
    }

    #[test]
    fn catalogs_have_same_keys() {
        assert_eq!(ES.len(), EN.len(), "ES catalog key count mismatch");
        for &(key, _) in EN {
            assert!(lookup(ES, key).is_some(), "ES is missing '{}'", key);
        }
    }
}
