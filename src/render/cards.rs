// src/render/cards.rs

//! Project card views.

use crate::models::ProjectEntity;
use crate::utils::text;

/// Expandable description state for one card.
///
/// Both forms are kept on the card so the expand/collapse toggle is a pure
/// swap between them; collapsing always reproduces the original short text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionView {
    /// Full description text
    pub full: String,

    /// Truncated form shown by default
    pub short: String,

    /// Whether the full text exceeded the limit
    pub truncated: bool,
}

impl DescriptionView {
    /// Build from an optional description, truncating at `limit` graphemes.
    pub fn new(description: Option<&str>, limit: usize) -> Self {
        let full = description.unwrap_or_default().to_string();
        match text::truncate(&full, limit) {
            Some(short) => Self {
                full,
                short,
                truncated: true,
            },
            None => Self {
                short: full.clone(),
                full,
                truncated: false,
            },
        }
    }
}

/// Display-ready projection of one project entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: u64,
    pub title: String,
    pub repo_url: String,
    pub image_src: String,
    pub description: DescriptionView,
    /// Breakdown keys sorted by usage weight descending
    pub tags: Vec<String>,
    pub stars: u64,
    pub forks: u64,
    /// Short `Mon D` last-updated date
    pub updated: String,
    pub demo_url: Option<String>,
}

impl CardView {
    /// Project an entity into its card view.
    pub fn from_entity(entity: &ProjectEntity, description_limit: usize) -> Self {
        Self {
            id: entity.id,
            title: entity.name.clone(),
            repo_url: entity.html_url.clone(),
            image_src: entity.image.src().to_string(),
            description: DescriptionView::new(entity.description.as_deref(), description_limit),
            tags: entity
                .languages_by_weight()
                .into_iter()
                .map(str::to_string)
                .collect(),
            stars: entity.stargazers_count,
            forks: entity.forks_count,
            updated: text::month_day(&entity.updated_at),
            demo_url: entity.demo_url().map(str::to_string),
        }
    }

    /// Render this card as HTML.
    pub fn to_html(&self) -> String {
        let title = text::escape_html(&self.title);
        let repo_url = text::escape_html(&self.repo_url);
        let image_src = text::escape_html(&self.image_src);
        let full = text::escape_html(&self.description.full);
        let short = text::escape_html(&self.description.short);
        let desc_id = format!("desc-{}", self.id);

        let tags = if self.tags.is_empty() {
            r#"<span class="pli-lang">No languages detected</span>"#.to_string()
        } else {
            self.tags
                .iter()
                .map(|tag| format!(r#"<span class="pli-lang">{}</span>"#, text::escape_html(tag)))
                .collect::<Vec<_>>()
                .join("")
        };

        let see_more = if self.description.truncated {
            format!(
                r#"<button class="see-more-btn" data-target="{desc_id}" aria-expanded="false">see more</button>"#
            )
        } else {
            String::new()
        };

        let demo_button = match &self.demo_url {
            Some(url) => format!(
                r#"<a href="{}" target="_blank" class="pli-button pli-button-demo">Live Demo</a>"#,
                text::escape_html(url)
            ),
            None => String::new(),
        };

        format!(
            r#"<div class="project-list-item">
  <div class="pli-thumb-wrap">
    <a href="{image_src}" target="_blank"><img class="pli-thumb" src="{image_src}" alt="{title} thumbnail" loading="lazy"/></a>
  </div>
  <div class="pli-content">
    <a class="pli-title" href="{repo_url}" target="_blank">{title}</a>
    <div class="pli-desc" id="{desc_id}" data-full="{full}" data-short="{short}"><span class="pli-desc-text">{short}</span>{see_more}</div>
    <div class="pli-langs">{tags}</div>
    <div class="pli-meta">
      <span class="pli-meta-item">&#9733; {stars}</span>
      <span class="pli-meta-item">&#10551; {forks}</span>
      <span class="pli-meta-item">{updated}</span>
    </div>
    <div class="pli-buttons">
      <a href="{repo_url}" target="_blank" class="pli-button pli-button-github">GitHub</a>{demo_button}
    </div>
  </div>
</div>"#,
            stars = self.stars,
            forks = self.forks,
            updated = text::escape_html(&self.updated),
        )
    }
}

/// Render an ordered entity subset as card markup, one card per entity in
/// input order.
pub fn render_cards(entities: &[&ProjectEntity], description_limit: usize) -> String {
    entities
        .iter()
        .map(|entity| CardView::from_entity(entity, description_limit).to_html())
        .collect::<Vec<_>>()
        .join("\n")
}
