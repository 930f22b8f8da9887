// SPDX-License-Identifier: PMPL-1.0-or-later

//! Localized view models.
//!
//! Plain owned snapshots of fixture records under one language. They are
//! cheap to rebuild, so views rebuild them on every draw instead of caching
//! across language changes.

use crate::assets::AssetRef;
use crate::content::{project_slug, GalleryImage, RenderPlan, Site};
use crate::i18n::Lang;
use crate::types::{Collaboration, Project};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Phone number in `tel:` form: all whitespace removed.
pub fn dial_form(phone: &str) -> String {
    WHITESPACE.replace_all(phone, "").into_owned()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectCard {
    pub slug: String,
    pub path: String,
    pub name: String,
    pub description: String,
    pub date: String,
    pub category: String,
    pub status: String,
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<AssetRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_link: Option<String>,
    pub collaborations: Vec<CollaborationView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollaborationView {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<AssetRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl CollaborationView {
    fn new(site: &Site, collaboration: &Collaboration, lang: Lang) -> Self {
        Self {
            name: collaboration.name(lang),
            logo: collaboration.logo().and_then(|img| site.assets.resolve(img)),
            link: collaboration.link().map(str::to_string),
        }
    }
}

pub fn project_cards(site: &Site, lang: Lang) -> Vec<ProjectCard> {
    site.projects()
        .iter()
        .map(|project| project_card(site, project, lang))
        .collect()
}

pub fn project_card(site: &Site, project: &Project, lang: Lang) -> ProjectCard {
    let slug = project_slug(project, lang);
    ProjectCard {
        path: format!("/projects/{}", slug),
        slug,
        name: project.name.resolve(lang).into_owned(),
        description: project.description.resolve(lang).into_owned(),
        date: project.date.resolve(lang).into_owned(),
        category: project.category.resolve(lang).into_owned(),
        status: project.status.resolve(lang).into_owned(),
        technologies: project.technologies.clone(),
        image: project.img.as_deref().and_then(|img| site.assets.resolve(img)),
        source_link: project.source_link().map(str::to_string),
        demo_link: project.demo_link().map(str::to_string),
        collaborations: project
            .collaborations
            .iter()
            .map(|c| CollaborationView::new(site, c, lang))
            .collect(),
    }
}

/// Everything the project detail page shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectView {
    #[serde(flatten)]
    pub card: ProjectCard,
    pub achievements: String,
    pub features: Vec<String>,
    pub content: RenderPlan,
    /// Number of gallery images beyond the sidebar preview.
    pub more_images: usize,
}

impl ProjectView {
    pub fn new(site: &Site, project: &Project, content: RenderPlan, lang: Lang) -> Self {
        let more_images = content.gallery_preview().1;
        Self {
            card: project_card(site, project, lang),
            achievements: project.achievements.resolve(lang).into_owned(),
            features: project
                .features(lang)
                .into_iter()
                .map(str::to_string)
                .collect(),
            content,
            more_images,
        }
    }

    pub fn preview(&self) -> &[GalleryImage] {
        self.content.gallery_preview().0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EducationView {
    pub place: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<AssetRef>,
    pub title: String,
    pub dates: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageView {
    pub name: String,
    pub level: String,
    pub proficiency: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillView {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AboutView {
    pub name: String,
    pub greeting: String,
    pub headline: String,
    pub summary: String,
    pub paragraphs: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<AssetRef>,
    pub education: Vec<EducationView>,
    pub languages: Vec<LanguageView>,
    pub skills: Vec<SkillView>,
}

pub fn about(site: &Site, lang: Lang) -> AboutView {
    let portfolio = &site.portfolio;
    let profile = &portfolio.profile;
    AboutView {
        name: profile.name.clone(),
        greeting: profile.greeting.resolve(lang).into_owned(),
        headline: profile.headline.resolve(lang).into_owned(),
        summary: profile.summary.resolve(lang).into_owned(),
        paragraphs: profile
            .about
            .iter()
            .map(|p| p.resolve(lang).into_owned())
            .filter(|p| !p.is_empty())
            .collect(),
        photo: profile.photo.as_deref().and_then(|p| site.assets.resolve(p)),
        education: portfolio
            .education
            .iter()
            .map(|entry| EducationView {
                place: entry.place.resolve(lang).into_owned(),
                logo: entry.place.attr("img").and_then(|img| site.assets.resolve(img)),
                title: entry.title.resolve(lang).into_owned(),
                dates: entry.dates.resolve(lang).into_owned(),
                description: entry.description.resolve(lang).into_owned(),
                gpa: entry.gpa.clone().filter(|g| !g.is_empty()),
            })
            .collect(),
        languages: portfolio
            .languages
            .iter()
            .map(|entry| LanguageView {
                name: entry.name.resolve(lang).into_owned(),
                level: entry.level.resolve(lang).into_owned(),
                proficiency: entry.proficiency(lang),
                flag: entry.flag.clone(),
            })
            .collect(),
        skills: portfolio
            .skills
            .iter()
            .map(|category| SkillView {
                title: category.title.resolve(lang).into_owned(),
                items: category.items.clone(),
            })
            .collect(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceView {
    pub place: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<AssetRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub role: String,
    pub date: String,
    pub description: String,
    pub technologies: Vec<String>,
}

pub fn experience(site: &Site, lang: Lang) -> Vec<ExperienceView> {
    site.portfolio
        .experience
        .iter()
        .map(|entry| ExperienceView {
            place: entry.place.resolve(lang).into_owned(),
            logo: entry.place.attr("img").and_then(|img| site.assets.resolve(img)),
            link: entry.place.attr("link").map(str::to_string),
            role: entry.role.resolve(lang).into_owned(),
            date: entry.date.resolve(lang).into_owned(),
            description: entry.description.resolve(lang).into_owned(),
            technologies: entry.technologies.clone(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SocialView {
    pub name: String,
    pub url: String,
    pub badge: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactView {
    pub phone: String,
    /// `tel:` link target.
    pub dial: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub location: String,
    pub social: Vec<SocialView>,
}

pub fn contact(site: &Site, lang: Lang) -> ContactView {
    let contact = &site.portfolio.contact;
    ContactView {
        phone: contact.phone.clone(),
        dial: format!("tel:{}", dial_form(&contact.phone)),
        email: contact.email.clone().filter(|e| !e.is_empty()),
        location: contact.location.resolve(lang).into_owned(),
        social: contact
            .social_links
            .iter()
            .map(|link| SocialView {
                name: link.name.clone(),
                url: link.url.clone(),
                badge: link.initial(),
            })
            .collect(),
    }
}
