// SPDX-License-Identifier: PMPL-1.0-or-later

//! Expanded-description rendering.
//!
//! Turns a project's localized content (one string, or a sequence of
//! strings and tagged blocks) into a flat list of instructions for the view
//! layer, extracting resolved images into the gallery on the way. Every
//! `Image` instruction's `gallery_index` is its position in
//! [`RenderPlan::gallery`].

use crate::assets::{AssetRef, AssetRegistry};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_LINK_VARIANT: &str = "btn-outline-secondary";
pub const DEFAULT_CODE_LANGUAGE: &str = "code";
/// Gallery thumbnails shown in the project sidebar before "+N more".
pub const GALLERY_PREVIEW_LEN: usize = 4;

/// A content block as written in the fixtures, dispatched on `type`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Image {
        src: Option<String>,
        alt: Option<String>,
        caption: Option<String>,
    },
    Link {
        #[serde(default)]
        url: String,
        #[serde(default)]
        text: String,
        icon: Option<String>,
        variant: Option<String>,
    },
    Code {
        language: Option<String>,
        #[serde(default)]
        code: String,
    },
    Quote {
        #[serde(default)]
        text: String,
        author: Option<String>,
    },
    List {
        title: Option<String>,
        #[serde(default)]
        items: Vec<String>,
    },
    Divider,
}

impl ContentBlock {
    /// Parse one sequence entry. Unknown tags and malformed payloads give
    /// `None`.
    pub fn parse(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        Self::deserialize(value).ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkIcon {
    Github,
    External,
    Globe,
    Code,
    Link,
}

impl LinkIcon {
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("github") => LinkIcon::Github,
            Some("external") => LinkIcon::External,
            Some("globe") => LinkIcon::Globe,
            Some("code") => LinkIcon::Code,
            _ => LinkIcon::Link,
        }
    }

    /// Single glyph used by the terminal and desktop views.
    pub fn glyph(&self) -> &'static str {
        match self {
            LinkIcon::Github => "GH",
            LinkIcon::External => "↗",
            LinkIcon::Globe => "🌐",
            LinkIcon::Code => "</>",
            LinkIcon::Link => "🔗",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryImage {
    pub src: AssetRef,
    pub alt: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderInstruction {
    Paragraph {
        text: String,
    },
    Image {
        gallery_index: usize,
        src: AssetRef,
        alt: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
    /// An image whose source did not resolve.
    ImagePlaceholder {
        src: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
    Link {
        url: String,
        text: String,
        icon: LinkIcon,
        variant: String,
    },
    Code {
        language: String,
        code: String,
    },
    Quote {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        author: Option<String>,
    },
    List {
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        items: Vec<String>,
    },
    Divider,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenderPlan {
    pub instructions: Vec<RenderInstruction>,
    pub gallery: Vec<GalleryImage>,
}

impl RenderPlan {
    /// Leading thumbnails for the sidebar, and how many are left over.
    pub fn gallery_preview(&self) -> (&[GalleryImage], usize) {
        let shown = self.gallery.len().min(GALLERY_PREVIEW_LEN);
        (&self.gallery[..shown], self.gallery.len() - shown)
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

/// Render localized content into instructions plus gallery.
///
/// Anything other than a non-empty string or a sequence renders nothing.
pub fn render(content: &Value, assets: &AssetRegistry) -> RenderPlan {
    match content {
        Value::String(text) if !text.is_empty() => RenderPlan {
            instructions: text
                .split("\n\n")
                .map(|paragraph| RenderInstruction::Paragraph {
                    text: paragraph.to_string(),
                })
                .collect(),
            gallery: Vec::new(),
        },
        Value::Array(entries) => render_entries(entries, assets),
        _ => RenderPlan::default(),
    }
}

fn render_entries(entries: &[Value], assets: &AssetRegistry) -> RenderPlan {
    let mut plan = RenderPlan::default();
    for entry in entries {
        let instruction = match entry {
            Value::String(text) => Some(RenderInstruction::Paragraph { text: text.clone() }),
            other => ContentBlock::parse(other)
                .map(|block| render_block(block, assets, &mut plan.gallery)),
        };
        plan.instructions.extend(instruction);
    }
    plan
}

fn render_block(
    block: ContentBlock,
    assets: &AssetRegistry,
    gallery: &mut Vec<GalleryImage>,
) -> RenderInstruction {
    match block {
        ContentBlock::Image { src, alt, caption } => {
            let source = src.unwrap_or_default();
            match assets.resolve(&source) {
                Some(asset) => {
                    let alt = alt.unwrap_or_default();
                    let caption = caption.filter(|c| !c.is_empty());
                    let gallery_index = gallery.len();
                    gallery.push(GalleryImage {
                        src: asset.clone(),
                        alt: alt.clone(),
                        caption: caption.clone().unwrap_or_default(),
                    });
                    RenderInstruction::Image {
                        gallery_index,
                        src: asset,
                        alt,
                        caption,
                    }
                }
                None => RenderInstruction::ImagePlaceholder {
                    src: source,
                    caption: caption.filter(|c| !c.is_empty()),
                },
            }
        }
        ContentBlock::Link {
            url,
            text,
            icon,
            variant,
        } => RenderInstruction::Link {
            url,
            text,
            icon: LinkIcon::from_name(icon.as_deref()),
            variant: variant
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_LINK_VARIANT.to_string()),
        },
        ContentBlock::Code { language, code } => RenderInstruction::Code {
            language: language
                .filter(|l| !l.is_empty())
                .unwrap_or_else(|| DEFAULT_CODE_LANGUAGE.to_string()),
            code,
        },
        ContentBlock::Quote { text, author } => RenderInstruction::Quote {
            text,
            author: author.filter(|a| !a.is_empty()),
        },
        ContentBlock::List { title, items } => RenderInstruction::List {
            title: title.filter(|t| !t.is_empty()),
            items,
        },
        ContentBlock::Divider => RenderInstruction::Divider,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn assets() -> AssetRegistry {
        let mut assets = AssetRegistry::new();
        assets.register("gateway.png", "/assets/gateway.png");
        assets.register("gateway-ui-en.png", "/assets/gallery/gateway-ui-en.png");
        assets
    }

    #[test]
    fn string_content_splits_on_blank_lines() {
        let plan = render(&json!("First.\n\nSecond\nline.\n\nThird."), &assets());
        assert_eq!(
            plan.instructions,
            vec![
                RenderInstruction::Paragraph { text: "First.".into() },
                RenderInstruction::Paragraph { text: "Second\nline.".into() },
                RenderInstruction::Paragraph { text: "Third.".into() },
            ]
        );
        assert!(plan.gallery.is_empty());
    }

    #[test]
    fn intro_image_divider_sequence() {
        let content = json!([
            "Intro text",
            { "type": "image", "src": "gateway.png", "alt": "Arch" },
            { "type": "divider" }
        ]);
        let plan = render(&content, &assets());

        assert_eq!(plan.instructions.len(), 3);
        assert_eq!(
            plan.instructions[0],
            RenderInstruction::Paragraph { text: "Intro text".into() }
        );
        assert_eq!(
            plan.instructions[1],
            RenderInstruction::Image {
                gallery_index: 0,
                src: AssetRef::Local("/assets/gateway.png".into()),
                alt: "Arch".into(),
                caption: None,
            }
        );
        assert_eq!(plan.instructions[2], RenderInstruction::Divider);
        assert_eq!(plan.gallery.len(), 1);
    }

    #[test]
    fn unresolved_image_is_placeholder_without_gallery_slot() {
        crate::diagnostics::set_quiet(true);
        let content = json!([
            "Intro text",
            { "type": "image", "src": "unknown.png", "alt": "Arch", "caption": "Overview" },
            { "type": "divider" }
        ]);
        let plan = render(&content, &assets());

        assert_eq!(plan.instructions.len(), 3);
        assert_eq!(
            plan.instructions[1],
            RenderInstruction::ImagePlaceholder {
                src: "unknown.png".into(),
                caption: Some("Overview".into()),
            }
        );
        assert!(plan.gallery.is_empty());
    }

    #[test]
    fn gallery_indexes_skip_placeholders() {
        crate::diagnostics::set_quiet(true);
        let content = json!([
            { "type": "image", "src": "missing.png" },
            { "type": "image", "src": "gateway.png", "alt": "A" },
            { "type": "image", "src": "gallery/gateway-ui-en.png", "alt": "B", "caption": "UI" }
        ]);
        let plan = render(&content, &assets());

        let indexes: Vec<usize> = plan
            .instructions
            .iter()
            .filter_map(|i| match i {
                RenderInstruction::Image { gallery_index, .. } => Some(*gallery_index),
                _ => None,
            })
            .collect();
        assert_eq!(indexes, vec![0, 1]);
        assert_eq!(plan.gallery[1].alt, "B");
        assert_eq!(plan.gallery[1].caption, "UI");
    }

    #[test]
    fn unknown_and_malformed_blocks_are_dropped() {
        let content = json!([
            { "type": "video", "src": "clip.mp4" },
            { "src": "no-type.png" },
            { "type": "list", "items": 5 },
            42,
            null,
            { "type": "quote", "text": "Ship it", "author": "" }
        ]);
        let plan = render(&content, &assets());
        assert_eq!(
            plan.instructions,
            vec![RenderInstruction::Quote { text: "Ship it".into(), author: None }]
        );
    }

    #[test]
    fn link_and_code_defaults() {
        let content = json!([
            { "type": "link", "url": "https://github.com/x", "text": "Repo", "icon": "github" },
            { "type": "link", "url": "https://x.dev", "text": "Site", "icon": "rocket", "variant": "btn-primary" },
            { "type": "code", "code": "cargo run" },
            { "type": "list", "title": "Steps", "items": ["one", "two"] }
        ]);
        let plan = render(&content, &assets());
        assert_eq!(
            plan.instructions,
            vec![
                RenderInstruction::Link {
                    url: "https://github.com/x".into(),
                    text: "Repo".into(),
                    icon: LinkIcon::Github,
                    variant: DEFAULT_LINK_VARIANT.into(),
                },
                RenderInstruction::Link {
                    url: "https://x.dev".into(),
                    text: "Site".into(),
                    icon: LinkIcon::Link,
                    variant: "btn-primary".into(),
                },
                RenderInstruction::Code {
                    language: DEFAULT_CODE_LANGUAGE.into(),
                    code: "cargo run".into(),
                },
                RenderInstruction::List {
                    title: Some("Steps".into()),
                    items: vec!["one".into(), "two".into()],
                },
            ]
        );
    }

    #[test]
    fn non_content_values_render_nothing() {
        assert!(render(&json!(null), &assets()).is_empty());
        assert!(render(&json!(""), &assets()).is_empty());
        assert!(render(&json!({ "en": "text" }), &assets()).is_empty());
    }

    #[test]
    fn preview_caps_at_four() {
        let content = json!([
            { "type": "image", "src": "gateway.png" },
            { "type": "image", "src": "gateway.png" },
            { "type": "image", "src": "gateway.png" },
            { "type": "image", "src": "gateway.png" },
            { "type": "image", "src": "gateway.png" },
            { "type": "image", "src": "gateway.png" }
        ]);
        let plan = render(&content, &assets());
        let (shown, more) = plan.gallery_preview();
        assert_eq!(shown.len(), 4);
        assert_eq!(more, 2);
    }
}
