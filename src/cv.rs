// SPDX-License-Identifier: PMPL-1.0-or-later

//! CV document delivery: one static document per language, shown in place
//! or saved under a deterministic download name.

use crate::content::Site;
use crate::i18n::Lang;
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_EXTENSION: &str = "pdf";

/// `<owner>_CV_<LANG>.<ext>`, e.g. `SoteloPenedoSabrina_CV_ES.pdf`.
pub fn file_name(owner: &str, lang: Lang, extension: &str) -> String {
    format!(
        "{}_CV_{}.{}",
        owner,
        lang.code().to_ascii_uppercase(),
        extension
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CvDocument {
    pub lang: Lang,
    pub path: PathBuf,
    pub download_name: String,
}

/// The configured CV for `lang`. Fails when none is configured or the file
/// is missing.
pub fn locate(site: &Site, lang: Lang) -> Result<CvDocument> {
    let configured = site
        .config
        .cv_path(lang)
        .ok_or_else(|| anyhow!("no CV configured for language {}", lang))?;
    let path = site.path(configured);
    if !path.is_file() {
        return Err(anyhow!("CV document not found: {}", path.display()));
    }
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or(DEFAULT_EXTENSION);
    let download_name = file_name(&site.cv_owner(), lang, extension);
    Ok(CvDocument {
        lang,
        path,
        download_name,
    })
}

/// Copy the CV for `lang` into `directory` under its download name.
pub fn save(site: &Site, lang: Lang, directory: &Path) -> Result<PathBuf> {
    let document = locate(site, lang)?;
    fs::create_dir_all(directory)
        .with_context(|| format!("creating download directory {}", directory.display()))?;
    let target = directory.join(&document.download_name);
    fs::copy(&document.path, &target).with_context(|| {
        format!(
            "copying {} to {}",
            document.path.display(),
            target.display()
        )
    })?;
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn download_name_is_deterministic() {
        assert_eq!(
            file_name("SoteloPenedoSabrina", Lang::Es, "pdf"),
            "SoteloPenedoSabrina_CV_ES.pdf"
        );
        assert_eq!(file_name("Ada", Lang::En, "docx"), "Ada_CV_EN.docx");
    }
}
