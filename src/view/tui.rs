// SPDX-License-Identifier: PMPL-1.0-or-later

//! Terminal rendition of the site.
//!
//! Home sections are tabs, project pages open from the projects tab, and the
//! lightbox takes over the screen while open. Lightbox fullscreen maps to
//! the terminal's alternate screen.

use crate::app::{App, HostCommand, Message, Route, Section};
use crate::content::project_slug;
use crate::diagnostics;
use crate::gallery::GalleryKey;
use crate::i18n::t;
use crate::view::formatter::PageFormatter;
use anyhow::Result;
use colored::*;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{self, ClearType},
};
use std::io::{self, stdout, Write};
use std::path::Path;
use std::time::Duration;

const CHROME_LINES: usize = 5;
const PAGE_STEP: i32 = 10;

pub struct SiteTui {
    formatter: PageFormatter,
    /// Set when the image under the lightbox could not be read.
    load_failed: bool,
    alternate_screen: bool,
}

impl SiteTui {
    pub fn run(app: &mut App) -> Result<()> {
        let was_quiet = diagnostics::is_quiet();
        diagnostics::set_quiet(true);
        terminal::enable_raw_mode()?;

        let mut tui = Self {
            formatter: PageFormatter::new(),
            load_failed: false,
            alternate_screen: false,
        };
        let result = tui.run_inner(app);
        let restored = restore_terminal(
            &mut stdout(),
            tui.alternate_screen,
            terminal::disable_raw_mode,
        );
        diagnostics::set_quiet(was_quiet);
        result.and(restored.map_err(Into::into))
    }

    fn run_inner(&mut self, app: &mut App) -> Result<()> {
        let mut stdout = stdout();
        execute!(stdout, cursor::Hide)?;

        loop {
            let (_, rows) = terminal::size()?;
            self.render(&mut stdout, app, usize::from(rows))?;

            // The lightbox image "loads" on the frame after it is shown.
            if app.lightbox().is_visible() && !app.lightbox().image_loaded() {
                self.load_current_image(app);
                continue;
            }

            if !event::poll(Duration::from_millis(200))? {
                continue;
            }
            let Event::Key(KeyEvent {
                code,
                modifiers,
                kind,
                ..
            }) = event::read()?
            else {
                continue;
            };
            if kind == KeyEventKind::Release {
                continue;
            }
            if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
                break;
            }

            let message = if app.input_captured() {
                Self::lightbox_message(code)
            } else {
                match code {
                    KeyCode::Char('q') => break,
                    KeyCode::Esc if *app.route() == Route::Home => break,
                    other => Self::page_message(app, other),
                }
            };
            if let Some(message) = message {
                if let Some(command) = app.update(message) {
                    self.carry_out(&mut stdout, app, command)?;
                }
            }
        }

        Ok(())
    }

    fn lightbox_message(code: KeyCode) -> Option<Message> {
        let key = match code {
            KeyCode::Esc => GalleryKey::Escape,
            KeyCode::Left => GalleryKey::ArrowLeft,
            KeyCode::Right => GalleryKey::ArrowRight,
            KeyCode::Char(digit @ '1'..='9') => {
                return Some(Message::GalleryThumbnail(digit_index(digit)));
            }
            KeyCode::Char(c) => GalleryKey::Char(c),
            _ => return None,
        };
        Some(Message::GalleryKey(key))
    }

    fn page_message(app: &App, code: KeyCode) -> Option<Message> {
        let on_home = *app.route() == Route::Home;
        match code {
            KeyCode::Tab => Some(Message::SelectSection(app.section().next())),
            KeyCode::BackTab => Some(Message::SelectSection(app.section().prev())),
            KeyCode::Char('l') => Some(Message::ToggleLanguage),
            KeyCode::Char('j') | KeyCode::Down => Some(Message::Scroll(1)),
            KeyCode::Char('k') | KeyCode::Up => Some(Message::Scroll(-1)),
            KeyCode::PageDown => Some(Message::Scroll(PAGE_STEP)),
            KeyCode::PageUp => Some(Message::Scroll(-PAGE_STEP)),
            KeyCode::Char('h') => Some(Message::GoHome),
            KeyCode::Char('b') | KeyCode::Backspace | KeyCode::Esc => Some(Message::Back),
            KeyCode::Char(digit @ '1'..='9') if on_home && app.section() == Section::Projects => {
                let lang = app.lang();
                app.site()
                    .projects()
                    .get(digit_index(digit))
                    .map(|project| Message::OpenProject(project_slug(project, lang)))
            }
            KeyCode::Char(digit @ '1'..='9') if !on_home => {
                Some(Message::OpenGallery(digit_index(digit)))
            }
            _ => None,
        }
    }

    fn carry_out(&mut self, stdout: &mut impl Write, app: &mut App, command: HostCommand) -> Result<()> {
        match command {
            HostCommand::EnterFullscreen if !self.alternate_screen => {
                execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;
                self.alternate_screen = true;
            }
            HostCommand::ExitFullscreen if self.alternate_screen => {
                execute!(stdout, terminal::LeaveAlternateScreen, cursor::Hide)?;
                self.alternate_screen = false;
            }
            _ => {}
        }
        app.update(Message::FullscreenChanged(self.alternate_screen));
        Ok(())
    }

    fn load_current_image(&mut self, app: &mut App) {
        let readable = app
            .lightbox()
            .current()
            .and_then(|idx| app.content().and_then(|plan| plan.gallery.get(idx)))
            .map(|image| image.src.local_path().map_or(true, Path::is_file))
            .unwrap_or(false);
        self.load_failed = !readable;
        app.update(if readable {
            Message::ImageLoaded
        } else {
            Message::ImageFailed
        });
    }

    fn render(&self, stdout: &mut impl Write, app: &App, rows: usize) -> Result<()> {
        execute!(stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        let lang = app.lang();

        let tabs: Vec<String> = Section::all()
            .iter()
            .map(|section| {
                let label = t(lang, section.nav_key());
                if *app.route() == Route::Home && *section == app.section() {
                    format!("[{}]", label).bold().green().to_string()
                } else {
                    format!(" {} ", label)
                }
            })
            .collect();
        write!(
            stdout,
            "{}  {}  {} {}\r\n",
            app.site().portfolio.profile.name.bold().cyan(),
            tabs.join(" "),
            lang.native_name().yellow(),
            app.path().dimmed()
        )?;
        write!(stdout, "\r\n")?;

        let body_rows = rows.saturating_sub(CHROME_LINES).max(1);
        if app.lightbox().is_visible() {
            for line in self.lightbox_lines(app).into_iter().take(body_rows) {
                write!(stdout, "{}\r\n", line)?;
            }
        } else {
            let lines = self.page_lines(app);
            let start = app.scroll().min(lines.len().saturating_sub(1));
            for line in lines.iter().skip(start).take(body_rows) {
                write!(stdout, "{}\r\n", line)?;
            }
        }

        write!(stdout, "\r\n{}\r\n", self.controls(app).dimmed())?;
        stdout.flush()?;
        Ok(())
    }

    fn page_lines(&self, app: &App) -> Vec<String> {
        let lang = app.lang();
        match app.project_view() {
            Some(view) => self.formatter.project_lines(&view, lang),
            None if app.is_not_found() => self.formatter.not_found_lines(&app.path(), lang),
            None => self.formatter.section_lines(app.site(), app.section(), lang),
        }
    }

    fn lightbox_lines(&self, app: &App) -> Vec<String> {
        let lang = app.lang();
        let lightbox = app.lightbox();
        let (Some(current), Some(plan)) = (lightbox.current(), app.content()) else {
            return Vec::new();
        };
        let Some(image) = plan.gallery.get(current) else {
            return Vec::new();
        };

        let mut lines = Vec::new();
        if let Some(counter) = lightbox.counter() {
            let mode = if lightbox.is_fullscreen() {
                format!(" {}", t(lang, "gallery.fullscreen"))
            } else {
                String::new()
            };
            lines.push(format!("{}{}", counter.to_string().bold(), mode.yellow()));
        }
        lines.push(String::new());
        if !lightbox.image_loaded() {
            lines.push(t(lang, "gallery.loading").dimmed().to_string());
        } else if self.load_failed {
            lines.push(t(lang, "project.image_not_found").red().to_string());
        }
        lines.push(image.alt.bold().to_string());
        lines.push(image.src.to_string().underline().to_string());
        if !image.caption.is_empty() {
            lines.push(image.caption.italic().to_string());
        }
        lines.push(String::new());

        let thumbnails: Vec<String> = plan
            .gallery
            .iter()
            .enumerate()
            .map(|(idx, _)| {
                if idx == current {
                    format!("[{}]", idx + 1).green().bold().to_string()
                } else {
                    format!(" {} ", idx + 1)
                }
            })
            .collect();
        lines.push(thumbnails.join(""));
        lines
    }

    fn controls(&self, app: &App) -> String {
        let lang = app.lang();
        if app.lightbox().is_visible() {
            format!(
                "[←] {}  [→] {}  [1-9]  [f] {}  [Esc] {}",
                t(lang, "gallery.previous"),
                t(lang, "gallery.next"),
                t(lang, "gallery.fullscreen"),
                t(lang, "gallery.close")
            )
        } else if *app.route() == Route::Home {
            format!(
                "[Tab] section  [j/k] scroll  [1-9] {}  [l] {}  [q] quit",
                t(lang, "projects.view_details"),
                lang.toggled().native_name()
            )
        } else {
            format!(
                "[b] {}  [h] {}  [1-9] {}  [j/k] scroll  [l] {}  [q] quit",
                t(lang, "project.go_back"),
                t(lang, "project.back_home"),
                t(lang, "gallery.image"),
                lang.toggled().native_name()
            )
        }
    }
}

/// Put the terminal back. Raw mode is always left, even when an earlier
/// step fails; the first failure is returned.
fn restore_terminal(
    out: &mut impl Write,
    alternate_screen: bool,
    disable_raw_mode: impl FnOnce() -> io::Result<()>,
) -> io::Result<()> {
    let left = if alternate_screen {
        execute!(out, terminal::LeaveAlternateScreen)
    } else {
        Ok(())
    };
    let shown = execute!(out, cursor::Show);
    let raw = disable_raw_mode();
    left.and(shown).and(raw)
}

/// `'1'` → 0.
fn digit_index(digit: char) -> usize {
    digit.to_digit(10).map_or(0, |d| d.saturating_sub(1) as usize)
}
