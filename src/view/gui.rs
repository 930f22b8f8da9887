// SPDX-License-Identifier: PMPL-1.0-or-later

//! Desktop window for browsing the site.

use crate::app::model::{self, ProjectView};
use crate::app::{App, HostCommand, Message, Route, Section};
use crate::content::RenderInstruction;
use crate::cv;
use crate::diagnostics;
use crate::gallery::GalleryKey;
use crate::i18n::{t, Lang};
use anyhow::{anyhow, Result};
use eframe::{egui, Frame, NativeOptions};
use std::path::Path;

pub struct SiteGui {
    app: App,
    /// Last title sent to the window.
    title: String,
    status: Option<String>,
    load_failed: bool,
}

impl SiteGui {
    pub fn run(app: App) -> Result<()> {
        diagnostics::set_quiet(true);
        let options = NativeOptions::default();
        let gui = Self {
            app,
            title: String::new(),
            status: None,
            load_failed: false,
        };
        eframe::run_native("portfolio", options, Box::new(|_cc| Box::new(gui)))
            .map_err(|err| anyhow!("failed to launch portfolio window: {err}"))?;
        Ok(())
    }

    fn dispatch(&mut self, ctx: &egui::Context, message: Message) {
        if let Some(command) = self.app.update(message) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(
                command == HostCommand::EnterFullscreen,
            ));
        }
    }

    fn title(&self) -> String {
        let name = &self.app.site().portfolio.profile.name;
        match self.app.project_view() {
            Some(view) => format!("{} · {}", view.card.name, name),
            None => name.clone(),
        }
    }
}

impl eframe::App for SiteGui {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let fullscreen = ctx.input(|i| i.viewport().fullscreen).unwrap_or(false);
        if fullscreen != self.app.lightbox().is_fullscreen() {
            self.app.update(Message::FullscreenChanged(fullscreen));
        }
        if self.app.lightbox().is_visible() && !self.app.lightbox().image_loaded() {
            self.load_current_image();
        }

        let mut messages = Vec::new();
        if self.app.input_captured() {
            ctx.input(|input| {
                for (key, gallery_key) in [
                    (egui::Key::Escape, GalleryKey::Escape),
                    (egui::Key::ArrowLeft, GalleryKey::ArrowLeft),
                    (egui::Key::ArrowRight, GalleryKey::ArrowRight),
                    (egui::Key::F, GalleryKey::Char('f')),
                ] {
                    if input.key_pressed(key) {
                        messages.push(Message::GalleryKey(gallery_key));
                    }
                }
            });
        }

        let lang = self.app.lang();
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(&self.app.site().portfolio.profile.name);
                ui.separator();
                for section in Section::all() {
                    let active = *self.app.route() == Route::Home && *section == self.app.section();
                    if ui.selectable_label(active, t(lang, section.nav_key())).clicked() {
                        messages.push(Message::SelectSection(*section));
                    }
                }
                ui.separator();
                for option in Lang::all() {
                    if ui.selectable_label(*option == lang, option.native_name()).clicked() {
                        messages.push(Message::SetLanguage(*option));
                    }
                }
            });
        });

        if let Some(status) = &self.status {
            egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
                ui.label(status);
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .enable_scrolling(!self.app.input_captured())
                .show(ui, |ui| {
                    if let Some(view) = self.app.project_view() {
                        render_project(ui, &view, lang, &mut messages);
                    } else if self.app.is_not_found() {
                        render_not_found(ui, &self.app.path(), lang, &mut messages);
                    } else {
                        self.render_section(ui, lang, &mut messages);
                    }
                });
        });

        if self.app.lightbox().is_visible() {
            self.render_lightbox(ctx, lang, &mut messages);
        }

        for message in messages {
            self.dispatch(ctx, message);
        }
        let title = self.title();
        if title != self.title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.title = title;
        }
    }
}

impl SiteGui {
    fn load_current_image(&mut self) {
        let readable = self
            .app
            .lightbox()
            .current()
            .and_then(|idx| self.app.content().and_then(|plan| plan.gallery.get(idx)))
            .map(|image| image.src.local_path().map_or(true, Path::is_file))
            .unwrap_or(false);
        self.load_failed = !readable;
        self.app.update(if readable {
            Message::ImageLoaded
        } else {
            Message::ImageFailed
        });
    }

    fn render_section(&mut self, ui: &mut egui::Ui, lang: Lang, messages: &mut Vec<Message>) {
        let site = self.app.site();
        match self.app.section() {
            Section::About => {
                let about = model::about(site, lang);
                ui.heading(format!("{} {}", t(lang, "header.hello"), about.name));
                if !about.headline.is_empty() {
                    ui.label(egui::RichText::new(&about.headline).italics());
                }
                if !about.summary.is_empty() {
                    ui.label(&about.summary);
                }
                ui.separator();
                ui.heading(t(lang, "about.title"));
                for paragraph in &about.paragraphs {
                    ui.label(paragraph);
                }
                ui.separator();
                ui.heading(t(lang, "about.education"));
                for entry in &about.education {
                    ui.label(egui::RichText::new(&entry.title).strong());
                    ui.label(format!("{} · {}", entry.place, entry.dates));
                    if !entry.description.is_empty() {
                        ui.label(&entry.description);
                    }
                    if let Some(gpa) = &entry.gpa {
                        ui.label(format!("{}: {}", t(lang, "about.gpa"), gpa));
                    }
                }
                ui.separator();
                ui.heading(t(lang, "about.languages"));
                for entry in &about.languages {
                    ui.horizontal(|ui| {
                        ui.label(&entry.name);
                        ui.add(
                            egui::ProgressBar::new(f32::from(entry.proficiency) / 100.0)
                                .desired_width(160.0)
                                .text(&entry.level),
                        );
                    });
                }
                ui.separator();
                ui.heading(t(lang, "about.skills"));
                for category in &about.skills {
                    ui.label(format!("{}: {}", category.title, category.items.join(", ")));
                }
            }
            Section::Experience => {
                ui.heading(t(lang, "experience.title"));
                for entry in model::experience(site, lang) {
                    ui.separator();
                    ui.label(egui::RichText::new(&entry.role).strong());
                    match &entry.link {
                        Some(link) => {
                            ui.hyperlink_to(&entry.place, link);
                        }
                        None => {
                            ui.label(&entry.place);
                        }
                    }
                    ui.label(egui::RichText::new(&entry.date).weak());
                    ui.label(&entry.description);
                    if !entry.technologies.is_empty() {
                        ui.label(egui::RichText::new(entry.technologies.join(" · ")).weak());
                    }
                }
            }
            Section::Projects => {
                ui.heading(t(lang, "projects.title"));
                let cards = model::project_cards(site, lang);
                if cards.is_empty() {
                    ui.label(t(lang, "projects.empty"));
                }
                for card in cards {
                    ui.separator();
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(&card.name).strong());
                        ui.label(egui::RichText::new(&card.date).weak());
                        ui.label(&card.status);
                    });
                    ui.label(&card.description);
                    if !card.technologies.is_empty() {
                        ui.label(egui::RichText::new(card.technologies.join(" · ")).weak());
                    }
                    ui.horizontal(|ui| {
                        if ui.button(t(lang, "projects.view_details")).clicked() {
                            messages.push(Message::OpenProject(card.slug.clone()));
                        }
                        if let Some(link) = &card.source_link {
                            ui.hyperlink_to(t(lang, "projects.view_code"), link);
                        }
                        if let Some(link) = &card.demo_link {
                            ui.hyperlink_to(t(lang, "projects.live_demo"), link);
                        }
                    });
                }
            }
            Section::Cv => {
                ui.heading(t(lang, "cv.title"));
                match cv::locate(site, lang) {
                    Ok(document) => {
                        ui.label(document.path.display().to_string());
                        if ui.button(t(lang, "header.download_cv")).clicked() {
                            self.status = Some(match cv::save(site, lang, Path::new(".")) {
                                Ok(saved) => format!("{} {}", t(lang, "cv.saved"), saved.display()),
                                Err(err) => err.to_string(),
                            });
                        }
                    }
                    Err(_) => {
                        ui.label(t(lang, "cv.missing"));
                    }
                }
            }
            Section::Contact => {
                let contact = model::contact(site, lang);
                ui.heading(t(lang, "contact.title"));
                ui.label(t(lang, "contact.text"));
                ui.separator();
                if !contact.phone.is_empty() {
                    ui.horizontal(|ui| {
                        ui.label(format!("{}:", t(lang, "contact.phone")));
                        ui.hyperlink_to(&contact.phone, &contact.dial);
                    });
                }
                if let Some(email) = &contact.email {
                    ui.horizontal(|ui| {
                        ui.label(format!("{}:", t(lang, "contact.email")));
                        ui.hyperlink_to(email, format!("mailto:{}", email));
                    });
                }
                if !contact.location.is_empty() {
                    ui.label(format!("{}: {}", t(lang, "contact.location"), contact.location));
                }
                ui.separator();
                ui.label(t(lang, "contact.connect"));
                for link in &contact.social {
                    ui.hyperlink_to(format!("[{}] {}", link.badge, link.name), &link.url);
                }
            }
        }
    }

    fn render_lightbox(&self, ctx: &egui::Context, lang: Lang, messages: &mut Vec<Message>) {
        let lightbox = self.app.lightbox();
        let (Some(current), Some(plan)) = (lightbox.current(), self.app.content()) else {
            return;
        };
        let Some(image) = plan.gallery.get(current) else {
            return;
        };
        let counter = lightbox
            .counter()
            .map(|c| c.to_string())
            .unwrap_or_default();

        egui::Window::new(counter)
            .id(egui::Id::new("lightbox"))
            .collapsible(false)
            .resizable(true)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                if !lightbox.image_loaded() {
                    ui.spinner();
                    ui.label(t(lang, "gallery.loading"));
                } else if self.load_failed {
                    ui.colored_label(egui::Color32::RED, t(lang, "project.image_not_found"));
                }
                ui.label(egui::RichText::new(&image.alt).strong());
                ui.hyperlink_to(
                    egui::RichText::new(image.src.to_string()).weak(),
                    image.src.uri(),
                );
                if !image.caption.is_empty() {
                    ui.label(egui::RichText::new(&image.caption).italics());
                }
                ui.separator();
                ui.horizontal(|ui| {
                    for idx in 0..plan.gallery.len() {
                        if ui
                            .selectable_label(idx == current, (idx + 1).to_string())
                            .clicked()
                        {
                            messages.push(Message::GalleryThumbnail(idx));
                        }
                    }
                });
                ui.horizontal(|ui| {
                    if ui.button(format!("← {}", t(lang, "gallery.previous"))).clicked() {
                        messages.push(Message::GalleryPrev);
                    }
                    if ui.button(format!("{} →", t(lang, "gallery.next"))).clicked() {
                        messages.push(Message::GalleryNext);
                    }
                    if ui.button(t(lang, "gallery.fullscreen")).clicked() {
                        messages.push(Message::ToggleFullscreen);
                    }
                    if ui.button(t(lang, "gallery.close")).clicked() {
                        messages.push(Message::CloseGallery);
                    }
                });
            });
    }
}

fn render_project(ui: &mut egui::Ui, view: &ProjectView, lang: Lang, messages: &mut Vec<Message>) {
    let card = &view.card;
    ui.horizontal(|ui| {
        if ui.button(format!("← {}", t(lang, "project.back_home"))).clicked() {
            messages.push(Message::GoHome);
        }
    });
    ui.heading(&card.name);
    ui.label(&card.description);
    ui.separator();

    egui::Grid::new("project-info").striped(true).show(ui, |ui| {
        for (key, value) in [
            ("project.year", &card.date),
            ("project.category", &card.category),
            ("project.status", &card.status),
        ] {
            if !value.is_empty() {
                ui.label(t(lang, key));
                ui.label(value);
                ui.end_row();
            }
        }
    });
    if !view.achievements.is_empty() {
        ui.label(egui::RichText::new(&view.achievements).color(egui::Color32::LIGHT_GREEN));
    }

    ui.horizontal(|ui| {
        if let Some(link) = &card.source_link {
            ui.hyperlink_to(t(lang, "projects.view_code"), link);
        }
        if let Some(link) = &card.demo_link {
            ui.hyperlink_to(t(lang, "projects.live_demo"), link);
        }
    });

    if !view.features.is_empty() {
        ui.separator();
        ui.heading(t(lang, "project.key_features"));
        for feature in &view.features {
            ui.label(format!("✓ {}", feature));
        }
    }
    if !card.technologies.is_empty() {
        ui.separator();
        ui.heading(t(lang, "project.technologies"));
        ui.label(card.technologies.join(" · "));
    }
    if !card.collaborations.is_empty() {
        ui.separator();
        ui.heading(t(lang, "projects.collaboration"));
        for collaboration in &card.collaborations {
            match &collaboration.link {
                Some(link) => {
                    ui.hyperlink_to(&collaboration.name, link);
                }
                None => {
                    ui.label(&collaboration.name);
                }
            }
        }
    }

    if !view.content.is_empty() {
        ui.separator();
        ui.heading(t(lang, "project.details"));
        for instruction in &view.content.instructions {
            render_instruction(ui, instruction, lang, messages);
        }
    }

    let (preview, more) = view.content.gallery_preview();
    if !preview.is_empty() {
        ui.separator();
        ui.heading(t(lang, "project.gallery"));
        ui.horizontal(|ui| {
            for (idx, image) in preview.iter().enumerate() {
                if ui.button(format!("{}. {}", idx + 1, image.alt)).clicked() {
                    messages.push(Message::OpenGallery(idx));
                }
            }
            if more > 0 && ui.button(format!("+{} {}", more, t(lang, "project.more"))).clicked() {
                messages.push(Message::OpenGallery(preview.len()));
            }
        });
    }
}

fn render_instruction(
    ui: &mut egui::Ui,
    instruction: &RenderInstruction,
    lang: Lang,
    messages: &mut Vec<Message>,
) {
    match instruction {
        RenderInstruction::Paragraph { text } => {
            ui.label(text);
        }
        RenderInstruction::Image {
            gallery_index,
            alt,
            caption,
            ..
        } => {
            let label = format!("🖼 {} {} · {}", t(lang, "gallery.image"), gallery_index + 1, alt);
            if ui
                .button(label)
                .on_hover_text(t(lang, "project.click_to_expand"))
                .clicked()
            {
                messages.push(Message::OpenGallery(*gallery_index));
            }
            if let Some(caption) = caption {
                ui.label(egui::RichText::new(caption).italics());
            }
        }
        RenderInstruction::ImagePlaceholder { src, caption } => {
            ui.colored_label(
                egui::Color32::GRAY,
                format!("{} ({})", t(lang, "project.image_not_found"), src),
            );
            if let Some(caption) = caption {
                ui.label(egui::RichText::new(caption).italics());
            }
        }
        RenderInstruction::Link {
            url, text, icon, ..
        } => {
            ui.hyperlink_to(format!("{} {}", icon.glyph(), text), url);
        }
        RenderInstruction::Code { language, code } => {
            ui.label(egui::RichText::new(language).weak());
            ui.horizontal(|ui| {
                ui.code(code);
                if ui.small_button(t(lang, "project.copy")).clicked() {
                    ui.output_mut(|o| o.copied_text = code.clone());
                }
            });
        }
        RenderInstruction::Quote { text, author } => {
            ui.label(egui::RichText::new(text).italics());
            if let Some(author) = author {
                ui.label(egui::RichText::new(format!("— {}", author)).weak());
            }
        }
        RenderInstruction::List { title, items } => {
            if let Some(title) = title {
                ui.label(egui::RichText::new(title).strong());
            }
            for item in items {
                ui.label(format!("• {}", item));
            }
        }
        RenderInstruction::Divider => {
            ui.separator();
        }
    }
}

fn render_not_found(ui: &mut egui::Ui, path: &str, lang: Lang, messages: &mut Vec<Message>) {
    ui.heading(t(lang, "project.not_found"));
    ui.label(t(lang, "project.not_found_desc"));
    ui.label(egui::RichText::new(path).weak());
    if ui.button(t(lang, "project.go_back")).clicked() {
        messages.push(Message::Back);
    }
}
