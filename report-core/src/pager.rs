//! Current-page tracking for the scrolling report viewer.

use crate::config::SiteConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Loading {
    Eager,
    Lazy,
}

impl Loading {
    pub fn as_str(self) -> &'static str {
        match self {
            Loading::Eager => "eager",
            Loading::Lazy => "lazy",
        }
    }
}

/// One report page as it appears in the scroller before its image loads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placeholder {
    pub number: u32,
    pub id: String,
    pub image: String,
    pub alt: String,
    pub loading: Loading,
}

pub fn placeholder_id(page: u32) -> String {
    format!("page-{page}")
}

pub fn page_from_id(id: &str) -> Option<u32> {
    id.strip_prefix("page-")?.parse().ok()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pager {
    total: u32,
    current: u32,
}

impl Pager {
    pub fn new(total: u32) -> Self {
        Self {
            total: total.max(1),
            current: 1,
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn placeholders(&self, config: &SiteConfig) -> Vec<Placeholder> {
        (1..=self.total)
            .map(|number| Placeholder {
                number,
                id: placeholder_id(number),
                image: config.page_image_path(number),
                alt: format!("{} {number}", config.page_alt_prefix),
                loading: if number <= 2 {
                    Loading::Eager
                } else {
                    Loading::Lazy
                },
            })
            .collect()
    }

    pub fn has_page(&self, page: u32) -> bool {
        (1..=self.total).contains(&page)
    }

    /// A placeholder crossed the visibility threshold.
    pub fn observe(&mut self, page: u32) -> u32 {
        self.current = page.clamp(1, self.total);
        self.current
    }

    /// Explicit navigation. Pages without a placeholder are ignored.
    pub fn jump_to(&mut self, page: u32) -> Option<u32> {
        if !self.has_page(page) {
            log::debug!("ignoring jump to missing page {page}");
            return None;
        }
        self.current = page;
        Some(page)
    }

    pub fn prev_target(&self) -> u32 {
        self.current.saturating_sub(1).max(1)
    }

    pub fn next_target(&self) -> u32 {
        (self.current + 1).min(self.total)
    }

    pub fn indicator(&self) -> String {
        format!("Page {}", self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jump_sets_every_valid_page() {
        let mut pager = Pager::new(52);
        for page in 1..=52 {
            assert_eq!(pager.jump_to(page), Some(page));
            assert_eq!(pager.current(), page);
        }
    }

    #[test]
    fn jump_outside_range_is_a_no_op() {
        let mut pager = Pager::new(52);
        pager.jump_to(7);
        assert_eq!(pager.jump_to(0), None);
        assert_eq!(pager.jump_to(53), None);
        assert_eq!(pager.current(), 7);
    }

    #[test]
    fn observe_clamps() {
        let mut pager = Pager::new(10);
        assert_eq!(pager.observe(0), 1);
        assert_eq!(pager.observe(99), 10);
        assert_eq!(pager.indicator(), "Page 10");
    }

    #[test]
    fn prev_and_next_stay_in_bounds() {
        let mut pager = Pager::new(3);
        assert_eq!(pager.prev_target(), 1);
        assert_eq!(pager.next_target(), 2);
        pager.jump_to(3);
        assert_eq!(pager.next_target(), 3);
        assert_eq!(pager.prev_target(), 2);
    }

    #[test]
    fn placeholders_load_first_two_eagerly() {
        let config = SiteConfig {
            total_pages: 4,
            ..SiteConfig::default()
        };
        let pager = Pager::new(config.total_pages);
        let placeholders = pager.placeholders(&config);
        assert_eq!(placeholders.len(), 4);
        assert_eq!(placeholders[0].id, "page-1");
        assert_eq!(placeholders[0].image, "assets/page-01.png");
        assert_eq!(placeholders[0].alt, "Mounty Yarns report page 1");
        let loading: Vec<_> = placeholders.iter().map(|p| p.loading).collect();
        assert_eq!(
            loading,
            [Loading::Eager, Loading::Eager, Loading::Lazy, Loading::Lazy]
        );
    }

    #[test]
    fn ids_round_trip_to_page_numbers() {
        assert_eq!(page_from_id(&placeholder_id(17)), Some(17));
        assert_eq!(page_from_id("page-x"), None);
        assert_eq!(page_from_id("story-3"), None);
    }
}
