// SPDX-License-Identifier: PMPL-1.0-or-later

//! Presentation: console pages, terminal UI, desktop window and export.

pub mod formatter;
pub mod gui;
pub mod output;
pub mod tui;

pub use formatter::PageFormatter;
pub use gui::SiteGui;
pub use output::{ExportFormat, PageBundle};
pub use tui::SiteTui;
