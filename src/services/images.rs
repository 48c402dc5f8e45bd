// src/services/images.rs

//! Project image resolution.
//!
//! Probes conventional screenshot locations in the project repository and
//! falls back to a synthesized placeholder graphic when none exist. The
//! resolution step never fails: every project ends up with some image.

use base64::{Engine as _, engine::general_purpose};

use crate::models::{ImageConfig, ImageRef};
use crate::utils::text;

/// Styling record for a placeholder graphic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageStyle {
    /// Accent color
    pub primary: &'static str,
    /// Secondary accent color
    pub secondary: &'static str,
    /// Background color
    pub background: &'static str,
    /// Short badge label
    pub label: &'static str,
}

const DEFAULT_STYLE: LanguageStyle = LanguageStyle {
    primary: "#00d4ff",
    secondary: "#8a2be2",
    background: "#0a0a0a",
    label: "CODE",
};

/// Fixed language to style table for placeholder graphics.
static LANGUAGE_STYLES: &[(&str, LanguageStyle)] = &[
    (
        "JavaScript",
        LanguageStyle {
            primary: "#f7df1e",
            secondary: "#323330",
            background: "#2d2d2d",
            label: "JS",
        },
    ),
    (
        "Java",
        LanguageStyle {
            primary: "#ed8b00",
            secondary: "#5382a1",
            background: "#1e3a8a",
            label: "JAVA",
        },
    ),
    (
        "C++",
        LanguageStyle {
            primary: "#00599c",
            secondary: "#004482",
            background: "#1e293b",
            label: "C++",
        },
    ),
    (
        "C#",
        LanguageStyle {
            primary: "#239120",
            secondary: "#68217a",
            background: "#1e293b",
            label: "C#",
        },
    ),
    (
        "HTML",
        LanguageStyle {
            primary: "#e34c26",
            secondary: "#1572b6",
            background: "#0f172a",
            label: "HTML",
        },
    ),
    (
        "CSS",
        LanguageStyle {
            primary: "#1572b6",
            secondary: "#ff6b35",
            background: "#0f172a",
            label: "CSS",
        },
    ),
    (
        "Python",
        LanguageStyle {
            primary: "#3776ab",
            secondary: "#ffd43b",
            background: "#0f4c75",
            label: "PY",
        },
    ),
    (
        "TypeScript",
        LanguageStyle {
            primary: "#3178c6",
            secondary: "#ffffff",
            background: "#0f172a",
            label: "TS",
        },
    ),
    (
        "Go",
        LanguageStyle {
            primary: "#00add8",
            secondary: "#ffffff",
            background: "#0f4c75",
            label: "GO",
        },
    ),
    (
        "Rust",
        LanguageStyle {
            primary: "#ce422b",
            secondary: "#000000",
            background: "#1e293b",
            label: "RS",
        },
    ),
    (
        "PHP",
        LanguageStyle {
            primary: "#777bb4",
            secondary: "#ffffff",
            background: "#1e293b",
            label: "PHP",
        },
    ),
    (
        "Ruby",
        LanguageStyle {
            primary: "#cc342d",
            secondary: "#ffffff",
            background: "#1e293b",
            label: "RB",
        },
    ),
    (
        "Swift",
        LanguageStyle {
            primary: "#fa7343",
            secondary: "#ffffff",
            background: "#1e293b",
            label: "SWIFT",
        },
    ),
    (
        "Kotlin",
        LanguageStyle {
            primary: "#7f52ff",
            secondary: "#ffffff",
            background: "#1e293b",
            label: "KT",
        },
    ),
    (
        "C",
        LanguageStyle {
            primary: "#a8b9cc",
            secondary: "#283593",
            background: "#1e293b",
            label: "C",
        },
    ),
];

/// Look up the placeholder style for a language, falling back to the
/// default style for unrecognized or absent languages.
pub fn style_for(language: Option<&str>) -> &'static LanguageStyle {
    language
        .and_then(|lang| {
            LANGUAGE_STYLES
                .iter()
                .find(|(name, _)| *name == lang)
                .map(|(_, style)| style)
        })
        .unwrap_or(&DEFAULT_STYLE)
}

/// Resolves a card image for each project.
pub struct ImageResolver {
    client: reqwest::Client,
    config: ImageConfig,
    name_limit: usize,
}

impl ImageResolver {
    /// Create a new resolver sharing the application HTTP client.
    pub fn new(client: reqwest::Client, config: ImageConfig, name_limit: usize) -> Self {
        Self {
            client,
            config,
            name_limit,
        }
    }

    /// Resolve an image for the named project.
    ///
    /// Candidate URLs are probed in configuration order; the first existing
    /// one wins. When every probe fails or errors, a placeholder is
    /// synthesized. This method always produces an image reference.
    pub async fn resolve(&self, name: &str, language: Option<&str>) -> ImageRef {
        for url in self.candidate_urls(name) {
            if self.probe(&url).await {
                log::debug!("Found project image for {name}: {url}");
                return ImageRef::Remote(url);
            }
        }

        log::debug!("No hosted image for {name}, synthesizing placeholder");
        ImageRef::Placeholder(self.synthesize_placeholder(name, language))
    }

    /// Candidate image URLs under the conventional subpaths, probe order.
    fn candidate_urls(&self, name: &str) -> Vec<String> {
        let ImageConfig {
            hosting_root,
            username,
            branch,
            subpaths,
            ..
        } = &self.config;

        subpaths
            .iter()
            .map(|subpath| format!("{hosting_root}/{username}/{name}/{branch}/{subpath}/{name}.png"))
            .collect()
    }

    /// HEAD-probe a candidate URL; any error counts as absent.
    async fn probe(&self, url: &str) -> bool {
        match self.client.head(url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                log::debug!("Image probe failed for {url}: {e}");
                false
            }
        }
    }

    /// Synthesize a placeholder graphic as a base64 SVG data URI.
    ///
    /// The style is chosen deterministically from the language table, so the
    /// same name and language always produce the same payload.
    pub fn synthesize_placeholder(&self, name: &str, language: Option<&str>) -> String {
        let style = style_for(language);
        let display_name = text::clean_display_name(name, self.name_limit);
        let badge = text::abbreviate(style.label, 4);

        let svg = placeholder_svg(&display_name, style, &badge);
        format!(
            "data:image/svg+xml;base64,{}",
            general_purpose::STANDARD.encode(svg)
        )
    }
}

/// Render the placeholder SVG document.
fn placeholder_svg(display_name: &str, style: &LanguageStyle, badge: &str) -> String {
    let LanguageStyle {
        primary,
        secondary,
        background,
        label,
    } = *style;
    let display_name = text::escape_html(display_name);
    let label = text::escape_html(label);
    let badge = text::escape_html(badge);

    format!(
        r##"<svg width="100%" height="100%" viewBox="0 0 320 180" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <linearGradient id="bg" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:{background};stop-opacity:1"/>
      <stop offset="50%" style="stop-color:{primary}20;stop-opacity:1"/>
      <stop offset="100%" style="stop-color:{background};stop-opacity:1"/>
    </linearGradient>
    <linearGradient id="icon" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:{primary};stop-opacity:1"/>
      <stop offset="100%" style="stop-color:{secondary};stop-opacity:1"/>
    </linearGradient>
  </defs>
  <rect width="100%" height="100%" fill="url(#bg)" rx="12"/>
  <rect x="0" y="0" width="100%" height="40" fill="{primary}15" rx="12"/>
  <circle cx="20" cy="20" r="5" fill="#ff5f57"/>
  <circle cx="40" cy="20" r="5" fill="#ffbd2e"/>
  <circle cx="60" cy="20" r="5" fill="#28ca42"/>
  <rect x="240" y="10" width="70" height="20" fill="{primary}30" rx="10" stroke="{primary}" stroke-width="1"/>
  <text x="275" y="23" text-anchor="middle" fill="{primary}" font-family="monospace" font-size="10" font-weight="600">{label}</text>
  <circle cx="160" cy="90" r="25" fill="url(#icon)" opacity="0.9"/>
  <text x="160" y="96" text-anchor="middle" fill="white" font-family="sans-serif" font-size="14" font-weight="900">{badge}</text>
  <text x="160" y="135" text-anchor="middle" fill="{primary}" font-family="sans-serif" font-size="14" font-weight="600">{display_name}</text>
  <rect x="0" y="155" width="100%" height="2" fill="url(#icon)" opacity="0.6"/>
</svg>"##
    )
}
