//! HTML fragment for the cohorts section
//!
//! The fragment is a `<dt>` wrapping one `<dd>` per cohort. Hidden cohorts
//! (visible only to site admins) carry the `dimmed_text` class and a
//! tooltip. When the list was truncated a final `<dd class="viewmore">`
//! links to the full list. Markup lives in `templates/cohort_listing.html`;
//! askama escapes every interpolated value.

use crate::config::{ProfileStrings, ProfileUrls};
use askama::Template;
use cohort_domain::{CohortEntry, CohortListing};

/// Class marking de-emphasized entries.
pub const DIMMED_CLASS: &str = "dimmed_text";

#[derive(Template)]
#[template(path = "cohort_listing.html")]
struct CohortListingTemplate<'a> {
    entries: &'a [CohortEntry],
    dimmed_class: &'a str,
    hidden: &'a str,
    viewmore: &'a str,
    view_more_href: Option<String>,
}

/// Renders a [`CohortListing`] as the profile node content.
#[derive(Debug, Clone, Default)]
pub struct CohortListingHtml {
    strings: ProfileStrings,
    urls: ProfileUrls,
}

impl CohortListingHtml {
    pub fn new(strings: ProfileStrings, urls: ProfileUrls) -> Self {
        Self { strings, urls }
    }

    pub fn strings(&self) -> &ProfileStrings {
        &self.strings
    }

    pub fn render(&self, listing: &CohortListing) -> Result<String, askama::Error> {
        let template = CohortListingTemplate {
            entries: &listing.entries,
            dimmed_class: DIMMED_CLASS,
            hidden: &self.strings.hidden,
            viewmore: &self.strings.viewmore,
            view_more_href: listing
                .has_more
                .then(|| self.urls.show_all_cohorts(listing.subject)),
        };
        template.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cohort_domain::UserId;

    fn listing(entries: Vec<CohortEntry>, has_more: bool) -> CohortListing {
        let total = entries.len() + usize::from(has_more);
        CohortListing {
            subject: UserId::new(42),
            entries,
            total,
            has_more,
        }
    }

    fn render(entries: Vec<CohortEntry>, has_more: bool) -> String {
        CohortListingHtml::default()
            .render(&listing(entries, has_more))
            .unwrap()
    }

    #[test]
    fn test_render_visible_and_dimmed_entries() {
        let html = render(
            vec![CohortEntry::new("A", false), CohortEntry::new("B", true)],
            false,
        );
        assert_eq!(
            html,
            "<dt><dd>A</dd><dd class=\"dimmed_text\" title=\"Hidden\">B</dd></dt>"
        );
    }

    #[test]
    fn test_render_view_more_link() {
        let renderer = CohortListingHtml::new(
            ProfileStrings::default(),
            ProfileUrls::new("https://lms.example.org"),
        );
        let html = renderer
            .render(&listing(vec![CohortEntry::new("A", false)], true))
            .unwrap();
        assert_eq!(
            html,
            "<dt><dd>A</dd><dd class=\"viewmore\"><a href=\"https://lms.example.org/user/profile.php?id=42&amp;showallcohorts=1\" title=\"View more\">View more</a></dd></dt>"
        );
    }

    #[test]
    fn test_render_uses_localized_labels() {
        let strings = ProfileStrings {
            cohorts: "Глобальные группы".to_string(),
            hidden: "Скрыто".to_string(),
            viewmore: "Показать все".to_string(),
        };
        let html = CohortListingHtml::new(strings, ProfileUrls::default())
            .render(&listing(vec![CohortEntry::new("B", true)], true))
            .unwrap();
        assert!(html.contains("title=\"Скрыто\""));
        assert!(html.contains(">Показать все</a>"));
    }

    #[test]
    fn test_render_escapes_cohort_names() {
        let html = render(
            vec![CohortEntry::new("<script>alert(1)</script>", false)],
            false,
        );
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_render_escapes_quotes_and_ampersands() {
        let html = render(vec![CohortEntry::new(r#""R&D" 'team'"#, true)], false);
        assert!(html.contains("R&amp;D"));
        assert!(!html.contains("\"R&"));
        assert!(!html.contains("'team'"));
    }

    #[test]
    fn test_render_escapes_labels_in_attributes() {
        let strings = ProfileStrings {
            hidden: "Hidden \"for now\"".to_string(),
            ..ProfileStrings::default()
        };
        let html = CohortListingHtml::new(strings, ProfileUrls::default())
            .render(&listing(vec![CohortEntry::new("B", true)], false))
            .unwrap();
        assert!(!html.contains("\"for now\""));
        assert!(html.starts_with("<dt><dd class=\"dimmed_text\" title=\"Hidden "));
    }

    #[test]
    fn test_render_empty_listing_is_bare_wrapper() {
        assert_eq!(render(vec![], false), "<dt></dt>");
    }
}
