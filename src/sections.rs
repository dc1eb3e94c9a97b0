/// Sections start counting as current this many pixels before their top edge.
const ACTIVATION_MARGIN: f64 = 100.0;

#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub offset_top: f64,
    pub offset_height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, offset_top: f64, offset_height: f64) -> Self {
        Self {
            id: id.into(),
            offset_top,
            offset_height,
        }
    }

    fn contains(&self, scroll_y: f64) -> bool {
        let top = self.offset_top - ACTIVATION_MARGIN;
        let bottom = top + self.offset_height;
        scroll_y >= top && scroll_y < bottom
    }
}

/// The last section in document order whose activation range holds
/// `scroll_y`. Overlapping ranges resolve to the later section.
pub fn current_section(sections: &[SectionBounds], scroll_y: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| section.contains(scroll_y))
        .map(|section| section.id.as_str())
}

pub fn is_active_link(href: &str, current: Option<&str>) -> bool {
    match (href.strip_prefix('#'), current) {
        (Some(target), Some(current)) => target == current,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINKS: [&str; 3] = ["#home", "#about", "#contact"];

    fn page() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("home", 0.0, 800.0),
            SectionBounds::new("about", 800.0, 600.0),
            SectionBounds::new("contact", 1400.0, 500.0),
        ]
    }

    fn active_links(scroll_y: f64) -> Vec<&'static str> {
        let sections = page();
        let current = current_section(&sections, scroll_y);
        LINKS
            .iter()
            .copied()
            .filter(|href| is_active_link(href, current))
            .collect()
    }

    #[test]
    fn section_activates_one_margin_early() {
        let sections = page();
        assert_eq!(current_section(&sections, 699.0), Some("home"));
        assert_eq!(current_section(&sections, 700.0), Some("about"));
        assert_eq!(current_section(&sections, 1300.0), Some("contact"));
    }

    #[test]
    fn nothing_is_current_past_the_last_section() {
        let sections = page();
        assert_eq!(current_section(&sections, 1800.0), None);
        assert!(active_links(5_000.0).is_empty());
    }

    #[test]
    fn nothing_is_current_above_the_first_section() {
        let sections = vec![SectionBounds::new("about", 400.0, 300.0)];
        assert_eq!(current_section(&sections, 100.0), None);
        assert_eq!(current_section(&sections, 300.0), Some("about"));
    }

    #[test]
    fn exactly_one_link_is_active_inside_a_section() {
        assert_eq!(active_links(900.0), vec!["#about"]);
        assert_eq!(active_links(900.0), active_links(900.0));
    }

    #[test]
    fn overlapping_sections_resolve_to_the_later_one() {
        let sections = vec![
            SectionBounds::new("first", 0.0, 1_000.0),
            SectionBounds::new("second", 200.0, 1_000.0),
        ];
        assert_eq!(current_section(&sections, 500.0), Some("second"));
    }

    #[test]
    fn link_matching_requires_a_same_page_anchor() {
        assert!(is_active_link("#about", Some("about")));
        assert!(!is_active_link("about", Some("about")));
        assert!(!is_active_link("#about", None));
    }
}
