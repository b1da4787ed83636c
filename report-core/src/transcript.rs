use regex::Regex;

pub const PAGE_BREAK: char = '\u{0C}';

/// Plain text of one report page, numbered from 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageText {
    pub number: u32,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transcript {
    pages: Vec<PageText>,
}

impl Transcript {
    /// Splits the export on form feeds and strips the running header.
    pub fn parse(raw: &str, header: &Regex) -> Self {
        let pages = raw
            .split(PAGE_BREAK)
            .enumerate()
            .map(|(index, page)| PageText {
                number: index as u32 + 1,
                text: header.replace_all(page, "").trim().to_string(),
            })
            .collect();
        Self { pages }
    }

    pub fn pages(&self) -> &[PageText] {
        &self.pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    #[test]
    fn splits_pages_and_strips_headers() {
        let header = SiteConfig::default().header_regex().expect("regex");
        let raw = "MOUNTY YARNS 1\nCover\u{0C}MOUNTY YARNS   2\n  Foreword text \u{0C}\u{0C}";
        let transcript = Transcript::parse(raw, &header);
        let pages = transcript.pages();
        assert_eq!(pages.len(), 4);
        assert_eq!(pages[0], PageText { number: 1, text: "Cover".into() });
        assert_eq!(pages[1].text, "Foreword text");
        assert_eq!(pages[2].text, "");
        assert_eq!(pages[3].number, 4);
    }

    #[test]
    fn header_is_removed_mid_page_too() {
        let header = SiteConfig::default().header_regex().expect("regex");
        let transcript = Transcript::parse("before MOUNTY YARNS\n12 after", &header);
        assert_eq!(transcript.pages()[0].text, "before  after");
    }
}
