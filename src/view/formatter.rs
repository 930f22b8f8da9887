// SPDX-License-Identifier: PMPL-1.0-or-later

//! Console rendering of pages.
//!
//! Pages are built as coloured lines so the terminal UI can scroll the same
//! text the `show` and `project` commands print.

use crate::app::model::{self, ProjectView};
use crate::app::Section;
use crate::content::{RenderInstruction, Site};
use crate::cv;
use crate::i18n::{t, Lang};
use colored::*;

const BAR_WIDTH: usize = 20;

pub struct PageFormatter;

impl PageFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn print_section(&self, site: &Site, section: Section, lang: Lang) {
        for line in self.section_lines(site, section, lang) {
            println!("{}", line);
        }
    }

    pub fn print_project(&self, view: &ProjectView, lang: Lang) {
        for line in self.project_lines(view, lang) {
            println!("{}", line);
        }
    }

    pub fn print_not_found(&self, path: &str, lang: Lang) {
        for line in self.not_found_lines(path, lang) {
            println!("{}", line);
        }
    }

    pub fn section_lines(&self, site: &Site, section: Section, lang: Lang) -> Vec<String> {
        let heading = t(lang, section.nav_key()).bold().cyan();
        let anchor = format!("#{}", section.anchor()).dimmed();
        let mut lines = vec![format!("{} {}", heading, anchor), String::new()];
        match section {
            Section::About => self.about_lines(site, lang, &mut lines),
            Section::Experience => self.experience_lines(site, lang, &mut lines),
            Section::Projects => self.project_list_lines(site, lang, &mut lines),
            Section::Cv => self.cv_lines(site, lang, &mut lines),
            Section::Contact => self.contact_lines(site, lang, &mut lines),
        }
        lines
    }

    fn about_lines(&self, site: &Site, lang: Lang, lines: &mut Vec<String>) {
        let about = model::about(site, lang);
        let greeting = if about.greeting.is_empty() {
            t(lang, "header.hello").to_string()
        } else {
            about.greeting.clone()
        };
        lines.push(format!("{} {}", greeting, about.name.bold()));
        if !about.headline.is_empty() {
            lines.push(about.headline.italic().to_string());
        }
        if !about.summary.is_empty() {
            lines.push(about.summary.clone());
        }
        lines.push(String::new());

        lines.push(t(lang, "about.title").bold().yellow().to_string());
        for paragraph in &about.paragraphs {
            lines.push(format!("  {}", paragraph));
        }
        lines.push(String::new());

        if !about.education.is_empty() {
            lines.push(t(lang, "about.education").bold().yellow().to_string());
            for entry in &about.education {
                lines.push(format!("  {} {}", entry.title.bold(), entry.dates.dimmed()));
                lines.push(format!("    {}", entry.place));
                if !entry.description.is_empty() {
                    lines.push(format!("    {}", entry.description));
                }
                if let Some(gpa) = &entry.gpa {
                    lines.push(format!("    {}: {}", t(lang, "about.gpa"), gpa));
                }
            }
            lines.push(String::new());
        }

        if !about.languages.is_empty() {
            lines.push(t(lang, "about.languages").bold().yellow().to_string());
            for entry in &about.languages {
                lines.push(format!(
                    "  {:12} {} {}",
                    entry.name,
                    proficiency_bar(entry.proficiency),
                    entry.level.dimmed()
                ));
            }
            lines.push(String::new());
        }

        if !about.skills.is_empty() {
            lines.push(t(lang, "about.skills").bold().yellow().to_string());
            for category in &about.skills {
                lines.push(format!("  {}: {}", category.title.bold(), category.items.join(", ")));
            }
        }
    }

    fn experience_lines(&self, site: &Site, lang: Lang, lines: &mut Vec<String>) {
        for entry in model::experience(site, lang) {
            lines.push(format!("{} {}", entry.role.bold(), entry.date.dimmed()));
            match &entry.link {
                Some(link) => lines.push(format!("  {} ({})", entry.place, link.underline())),
                None => lines.push(format!("  {}", entry.place)),
            }
            if !entry.description.is_empty() {
                lines.push(format!("  {}", entry.description));
            }
            if !entry.technologies.is_empty() {
                lines.push(format!("  {}", entry.technologies.join(" · ").dimmed()));
            }
            lines.push(String::new());
        }
    }

    fn project_list_lines(&self, site: &Site, lang: Lang, lines: &mut Vec<String>) {
        let cards = model::project_cards(site, lang);
        if cards.is_empty() {
            lines.push(t(lang, "projects.empty").dimmed().to_string());
            return;
        }
        for (idx, card) in cards.iter().enumerate() {
            lines.push(format!(
                "{}. {} {} {}",
                idx + 1,
                card.name.bold(),
                card.date.dimmed(),
                card.status.green()
            ));
            if !card.description.is_empty() {
                lines.push(format!("   {}", card.description));
            }
            if !card.technologies.is_empty() {
                lines.push(format!("   {}", card.technologies.join(" · ").dimmed()));
            }
            if !card.collaborations.is_empty() {
                let names: Vec<&str> = card.collaborations.iter().map(|c| c.name.as_str()).collect();
                lines.push(format!("   {}: {}", t(lang, "projects.collaboration"), names.join(", ")));
            }
            lines.push(format!("   {} {}", t(lang, "projects.view_details"), card.path.cyan()));
            lines.push(String::new());
        }
    }

    fn cv_lines(&self, site: &Site, lang: Lang, lines: &mut Vec<String>) {
        match cv::locate(site, lang) {
            Ok(document) => {
                lines.push(document.path.display().to_string());
                lines.push(format!(
                    "{} → {}",
                    t(lang, "header.download_cv"),
                    document.download_name.bold()
                ));
            }
            Err(_) => lines.push(t(lang, "cv.missing").dimmed().to_string()),
        }
    }

    fn contact_lines(&self, site: &Site, lang: Lang, lines: &mut Vec<String>) {
        let contact = model::contact(site, lang);
        lines.push(t(lang, "contact.text").to_string());
        lines.push(String::new());
        lines.push(t(lang, "contact.details").bold().yellow().to_string());
        if !contact.phone.is_empty() {
            lines.push(format!(
                "  {}: {} ({})",
                t(lang, "contact.phone"),
                contact.phone,
                contact.dial.dimmed()
            ));
        }
        if let Some(email) = &contact.email {
            lines.push(format!("  {}: {}", t(lang, "contact.email"), email));
        }
        if !contact.location.is_empty() {
            lines.push(format!("  {}: {}", t(lang, "contact.location"), contact.location));
        }
        if !contact.social.is_empty() {
            lines.push(String::new());
            lines.push(t(lang, "contact.connect").bold().yellow().to_string());
            for link in &contact.social {
                lines.push(format!("  [{}] {} {}", link.badge, link.name, link.url.underline()));
            }
        }
    }

    /// Project detail page. Inline images are numbered by gallery position,
    /// starting at 1.
    pub fn project_lines(&self, view: &ProjectView, lang: Lang) -> Vec<String> {
        let card = &view.card;
        let mut lines = vec![card.name.bold().cyan().to_string()];
        if !card.description.is_empty() {
            lines.push(card.description.clone());
        }
        lines.push(String::new());

        lines.push(t(lang, "project.info").bold().yellow().to_string());
        for (key, value) in [
            ("project.year", &card.date),
            ("project.category", &card.category),
            ("project.status", &card.status),
        ] {
            if !value.is_empty() {
                lines.push(format!("  {}: {}", t(lang, key), value));
            }
        }
        if !view.achievements.is_empty() {
            lines.push(format!("  {}", view.achievements.green()));
        }
        lines.push(String::new());

        if card.source_link.is_some() || card.demo_link.is_some() {
            lines.push(t(lang, "project.quick_links").bold().yellow().to_string());
            if let Some(link) = &card.source_link {
                lines.push(format!("  {}: {}", t(lang, "projects.view_code"), link.underline()));
            }
            if let Some(link) = &card.demo_link {
                lines.push(format!("  {}: {}", t(lang, "projects.live_demo"), link.underline()));
            }
            lines.push(String::new());
        }

        if !view.features.is_empty() {
            lines.push(t(lang, "project.key_features").bold().yellow().to_string());
            for feature in &view.features {
                lines.push(format!("  ✓ {}", feature));
            }
            lines.push(String::new());
        }

        if !card.technologies.is_empty() {
            lines.push(t(lang, "project.technologies").bold().yellow().to_string());
            lines.push(format!("  {}", card.technologies.join(" · ")));
            lines.push(String::new());
        }

        if !card.collaborations.is_empty() {
            lines.push(t(lang, "projects.collaboration").bold().yellow().to_string());
            for collaboration in &card.collaborations {
                match &collaboration.link {
                    Some(link) => lines.push(format!("  {} {}", collaboration.name, link.underline())),
                    None => lines.push(format!("  {}", collaboration.name)),
                }
            }
            lines.push(String::new());
        }

        if !view.content.is_empty() {
            lines.push(t(lang, "project.details").bold().yellow().to_string());
            for instruction in &view.content.instructions {
                self.instruction_lines(instruction, lang, &mut lines);
            }
            lines.push(String::new());
        }

        if !view.content.gallery.is_empty() {
            lines.push(format!(
                "{} ({})",
                t(lang, "project.gallery").bold().yellow(),
                view.content.gallery.len()
            ));
            for (idx, image) in view.preview().iter().enumerate() {
                lines.push(format!("  [{}] {}", idx + 1, image.alt));
            }
            if view.more_images > 0 {
                lines.push(format!("  +{} {}", view.more_images, t(lang, "project.more")));
            }
            lines.push(format!("  {}", t(lang, "project.click_to_expand").dimmed()));
        }
        lines
    }

    fn instruction_lines(&self, instruction: &RenderInstruction, lang: Lang, lines: &mut Vec<String>) {
        match instruction {
            RenderInstruction::Paragraph { text } => {
                lines.extend(text.lines().map(|line| format!("  {}", line)));
                lines.push(String::new());
            }
            RenderInstruction::Image {
                gallery_index,
                src,
                alt,
                caption,
            } => {
                lines.push(format!(
                    "  {} {} {}",
                    format!("[{} {}]", t(lang, "gallery.image"), gallery_index + 1).magenta(),
                    alt,
                    src.to_string().dimmed()
                ));
                if let Some(caption) = caption {
                    lines.push(format!("    {}", caption.italic()));
                }
            }
            RenderInstruction::ImagePlaceholder { src, caption } => {
                lines.push(format!(
                    "  {} {}",
                    format!("[{}]", t(lang, "project.image_not_found")).red(),
                    src.dimmed()
                ));
                if let Some(caption) = caption {
                    lines.push(format!("    {}", caption.italic()));
                }
            }
            RenderInstruction::Link {
                url, text, icon, ..
            } => {
                lines.push(format!("  {} {} {}", icon.glyph(), text.bold(), url.underline()));
            }
            RenderInstruction::Code { language, code } => {
                lines.push(format!("  ┌ {}", language.dimmed()));
                lines.extend(code.lines().map(|line| format!("  │ {}", line.cyan())));
                lines.push("  └".to_string());
            }
            RenderInstruction::Quote { text, author } => {
                lines.push(format!("  ▌ {}", text.italic()));
                if let Some(author) = author {
                    lines.push(format!("  ▌ — {}", author.dimmed()));
                }
            }
            RenderInstruction::List { title, items } => {
                if let Some(title) = title {
                    lines.push(format!("  {}", title.bold()));
                }
                lines.extend(items.iter().map(|item| format!("   • {}", item)));
            }
            RenderInstruction::Divider => lines.push(format!("  {}", "─".repeat(40).dimmed())),
        }
    }

    pub fn not_found_lines(&self, path: &str, lang: Lang) -> Vec<String> {
        vec![
            t(lang, "project.not_found").bold().red().to_string(),
            t(lang, "project.not_found_desc").to_string(),
            path.dimmed().to_string(),
            String::new(),
            format!("← {}", t(lang, "project.go_back")),
        ]
    }
}

impl Default for PageFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn proficiency_bar(percent: u8) -> String {
    let filled = usize::from(percent.min(100)) * BAR_WIDTH / 100;
    format!(
        "{}{} {:>3}%",
        "█".repeat(filled).green(),
        "░".repeat(BAR_WIDTH - filled).dimmed(),
        percent
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetRef;

    #[test]
    fn proficiency_bar_scales() {
        colored::control::set_override(false);
        assert_eq!(proficiency_bar(100), format!("{} 100%", "█".repeat(BAR_WIDTH)));
        assert!(proficiency_bar(25).starts_with(&"█".repeat(5)));
    }

    #[test]
    fn not_found_offers_go_back() {
        colored::control::set_override(false);
        let text = PageFormatter::new()
            .not_found_lines("/projects/nope", Lang::Es)
            .join("\n");
        assert!(text.contains("/projects/nope"));
        assert!(text.contains("Volver"));
    }

    #[test]
    fn inline_images_are_numbered_from_one() {
        colored::control::set_override(false);
        let mut lines = Vec::new();
        PageFormatter::new().instruction_lines(
            &RenderInstruction::Image {
                gallery_index: 0,
                src: AssetRef::Remote("https://example.org/a.png".into()),
                alt: "Arch".into(),
                caption: None,
            },
            Lang::En,
            &mut lines,
        );
        assert!(lines[0].contains("[Image 1] Arch"));
    }
}
