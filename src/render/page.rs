// src/render/page.rs

//! Full page assembly.

use crate::models::{FilterState, ProjectEntity};
use crate::pipeline::{CatalogStats, FilterIndex};
use crate::utils::text;

use super::cards::render_cards;

/// Render the complete catalog page for the given visible subset.
///
/// The whole document is regenerated on every call: stats header, filter
/// bar with exactly one active option, and one card per visible entity in
/// input order.
pub fn render_page(
    title: &str,
    stats: &CatalogStats,
    index: &FilterIndex,
    filter: &FilterState,
    visible: &[&ProjectEntity],
    description_limit: usize,
) -> String {
    let title = text::escape_html(title);
    let filters = render_filter_bar(index, filter);
    let cards = render_cards(visible, description_limit);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8"/>
  <meta name="viewport" content="width=device-width, initial-scale=1"/>
  <title>{title}</title>
</head>
<body>
  <section class="github-stats">
    <div class="stat"><span class="stat-number" id="github-repos">{repos}</span><span class="stat-label">Repositories</span></div>
    <div class="stat"><span class="stat-number" id="github-stars">{stars}</span><span class="stat-label">Stars</span></div>
    <div class="stat"><span class="stat-number" id="github-forks">{forks}</span><span class="stat-label">Forks</span></div>
    <div class="stat"><span class="stat-number" id="github-languages">{languages}</span><span class="stat-label">Languages</span></div>
  </section>
  <section class="projects">
    <div class="language-filters" id="language-filters">
{filters}
    </div>
    <div class="projects-grid" id="projects-grid">
{cards}
    </div>
  </section>
  <script>
    // Delegated see-more / see-less toggle; swaps between the stored
    // data-full and data-short forms and flips the expanded class flag.
    document.addEventListener('click', (e) => {{
      const btn = e.target.closest('.see-more-btn');
      if (!btn) return;
      const desc = document.getElementById(btn.dataset.target);
      if (!desc) return;
      const expanded = desc.classList.toggle('expanded');
      desc.querySelector('.pli-desc-text').textContent =
        expanded ? desc.dataset.full : desc.dataset.short;
      btn.textContent = expanded ? 'see less' : 'see more';
      btn.setAttribute('aria-expanded', String(expanded));
    }});
  </script>
</body>
</html>
"#,
        repos = stats.repositories,
        stars = stats.stars,
        forks = stats.forks,
        languages = stats.languages,
    )
}

/// Render the filter option buttons, marking the active selection.
fn render_filter_bar(index: &FilterIndex, filter: &FilterState) -> String {
    index
        .options
        .iter()
        .map(|option| {
            let class = if FilterIndex::is_active(option, filter) {
                "filter-btn active"
            } else {
                "filter-btn"
            };
            format!(
                r#"      <button class="{class}" data-language="{key}">{label}</button>"#,
                key = text::escape_html(&option.key),
                label = text::escape_html(&option.label),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use crate::models::{ImageRef, RawProjectRecord};
    use crate::pipeline::build_filter_index;

    use super::*;

    fn entity(name: &str, language: &str) -> ProjectEntity {
        let raw = RawProjectRecord {
            id: name.len() as u64,
            name: name.to_string(),
            description: None,
            language: Some(language.to_string()),
            stargazers_count: 0,
            forks_count: 0,
            fork: false,
            size: 1,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            homepage: None,
            html_url: format!("https://github.com/user/{name}"),
            topics: Vec::new(),
        };
        ProjectEntity::from_raw(raw, ImageRef::Placeholder("data:image/svg".to_string()))
    }

    #[test]
    fn exactly_one_filter_button_active() {
        let entities = vec![entity("a", "Rust"), entity("b", "Go")];
        let index = build_filter_index(&entities);
        let refs: Vec<&ProjectEntity> = entities.iter().collect();

        let page = render_page(
            "Projects",
            &CatalogStats::default(),
            &index,
            &FilterState::Language("Go".to_string()),
            &refs,
            100,
        );

        assert_eq!(page.matches("filter-btn active").count(), 1);
        assert!(page.contains(r#"class="filter-btn active" data-language="Go""#));
    }

    #[test]
    fn page_contains_stats_and_cards() {
        let entities = vec![entity("proj-one", "Rust")];
        let index = build_filter_index(&entities);
        let refs: Vec<&ProjectEntity> = entities.iter().collect();
        let stats = CatalogStats {
            repositories: 12,
            stars: 34,
            forks: 5,
            languages: 6,
        };

        let page = render_page("My Projects", &stats, &index, &FilterState::All, &refs, 100);
        assert!(page.contains("<title>My Projects</title>"));
        assert!(page.contains(r#"id="github-repos">12<"#));
        assert!(page.contains(r#"id="github-languages">6<"#));
        assert!(page.contains("proj-one"));
    }

    #[test]
    fn empty_subset_renders_empty_grid() {
        let index = build_filter_index(&[]);
        let page = render_page(
            "Projects",
            &CatalogStats::default(),
            &index,
            &FilterState::All,
            &[],
            100,
        );
        assert!(page.contains(r#"id="projects-grid""#));
        assert!(!page.contains("project-list-item"));
    }
}
