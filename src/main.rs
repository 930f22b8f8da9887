// SPDX-License-Identifier: PMPL-1.0-or-later

//! portfolio: a bilingual personal portfolio for the terminal and desktop
//!
//! Reads a site directory of JSON/YAML fixtures and presents the about,
//! experience, projects, CV and contact sections, each project's detail page
//! with its image gallery, in English or Spanish.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use colored::*;
use portfolio_site::app::{App, Message, Section};
use portfolio_site::content::Site;
use portfolio_site::cv;
use portfolio_site::diagnostics;
use portfolio_site::i18n::{t, Lang};
use portfolio_site::view::{ExportFormat, PageBundle, PageFormatter, SiteGui, SiteTui};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(version)]
#[command(about = "Bilingual personal portfolio: about, experience, projects, CV and contact")]
#[command(long_about = None)]
struct Cli {
    /// Site directory holding portfolio.yaml and data/
    #[arg(long, global = true, default_value = ".")]
    site: PathBuf,

    /// Configuration file (defaults to portfolio.yaml in the site directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Display language (defaults to the configured language)
    #[arg(long, global = true, value_enum)]
    lang: Option<LangArg>,

    /// Suppress warnings
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one home page section, or all of them
    Show {
        #[arg(value_enum)]
        section: Option<SectionArg>,
    },

    /// Print a project detail page
    Project {
        /// Project slug as it appears in /projects/<slug>
        #[arg(value_name = "SEGMENT")]
        segment: String,
    },

    /// Export a project page as structured data
    Render {
        #[arg(value_name = "SEGMENT")]
        segment: String,

        /// Output format (defaults to the output file extension, then JSON)
        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the CV document, or save it under its download name
    Cv {
        #[arg(long, value_name = "DIR")]
        save: Option<PathBuf>,
    },

    /// Browse the site in the terminal
    Browse {
        /// Start at this path, e.g. /projects/gateway
        #[arg(long, default_value = "/")]
        path: String,
    },

    /// Browse the site in a desktop window
    Gui,

    /// Check the site for missing translations, images and files
    Check,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum LangArg {
    En,
    Es,
}

impl From<LangArg> for Lang {
    fn from(arg: LangArg) -> Self {
        match arg {
            LangArg::En => Lang::En,
            LangArg::Es => Lang::Es,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum SectionArg {
    About,
    Experience,
    Projects,
    Cv,
    Contact,
}

impl From<SectionArg> for Section {
    fn from(arg: SectionArg) -> Self {
        match arg {
            SectionArg::About => Section::About,
            SectionArg::Experience => Section::Experience,
            SectionArg::Projects => Section::Projects,
            SectionArg::Cv => Section::Cv,
            SectionArg::Contact => Section::Contact,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    diagnostics::set_quiet(cli.quiet);

    let site = Site::open(&cli.site, cli.config.as_deref())?;
    let lang = cli
        .lang
        .map(Lang::from)
        .unwrap_or(site.config.default_language);
    let formatter = PageFormatter::new();

    match cli.command {
        Commands::Show { section } => {
            let sections: Vec<Section> = match section {
                Some(section) => vec![section.into()],
                None => Section::all().to_vec(),
            };
            for section in sections {
                formatter.print_section(&site, section, lang);
                println!();
            }
        }

        Commands::Project { segment } => {
            let mut app = App::with_language(site, lang);
            app.update(Message::OpenProject(segment));
            match app.project_view() {
                Some(view) => formatter.print_project(&view, lang),
                None => {
                    formatter.print_not_found(&app.path(), lang);
                    return Err(anyhow!("no project matches \"{}\"", app.path()));
                }
            }
        }

        Commands::Render {
            segment,
            format,
            output,
        } => {
            let mut app = App::with_language(site, lang);
            app.update(Message::OpenProject(segment));
            let view = app
                .project_view()
                .ok_or_else(|| anyhow!("no project matches \"{}\"", app.path()))?;
            let format = format
                .or_else(|| output.as_deref().and_then(ExportFormat::from_path))
                .unwrap_or(ExportFormat::Json);
            let bundle = PageBundle::new(lang, app.path(), view);
            match output {
                Some(path) => {
                    let written = bundle.write(format, &path)?;
                    println!("Page saved to: {}", written.display());
                }
                None => println!("{}", format.serialize(&bundle)?),
            }
        }

        Commands::Cv { save } => match save {
            Some(dir) => {
                let saved = cv::save(&site, lang, &dir)?;
                println!("{} {}", t(lang, "cv.saved"), saved.display().to_string().bold());
            }
            None => formatter.print_section(&site, Section::Cv, lang),
        },

        Commands::Browse { path } => {
            let mut app = App::with_language(site, lang);
            if path != "/" {
                app.update(Message::Navigate(path));
            }
            SiteTui::run(&mut app)?;
        }

        Commands::Gui => {
            SiteGui::run(App::with_language(site, lang))?;
        }

        Commands::Check => {
            diagnostics::run_site_diagnostics(&site)?;
        }
    }

    Ok(())
}
