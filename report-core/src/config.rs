use crate::error::{Result, SiteError};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Static layout of the report site: where the data files live and how the
/// page images are named.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub total_pages: u32,
    pub page_prefix: String,
    pub page_extension: String,
    pub page_alt_prefix: String,
    pub stories_path: String,
    pub sections_path: String,
    pub updates_path: String,
    pub text_path: String,
    /// Running header repeated at the top of every transcript page.
    pub header_pattern: String,
    pub search_debounce_ms: u32,
    pub snippet_before: usize,
    pub snippet_after: usize,
    pub max_results: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            total_pages: 52,
            page_prefix: "assets/page-".into(),
            page_extension: ".png".into(),
            page_alt_prefix: "Mounty Yarns report page".into(),
            stories_path: "data/stories.json".into(),
            sections_path: "data/sections.json".into(),
            updates_path: "data/updates.json".into(),
            text_path: "data/mounty-yarns.txt".into(),
            header_pattern: r"MOUNTY YARNS\s+\d+".into(),
            search_debounce_ms: 180,
            snippet_before: 80,
            snippet_after: 120,
            max_results: 10,
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: SiteConfig =
            serde_json::from_str(raw).map_err(|e| SiteError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.total_pages == 0 {
            return Err(SiteError::Config("total_pages must be at least 1".into()));
        }
        if self.max_results == 0 {
            return Err(SiteError::Config("max_results must be at least 1".into()));
        }
        self.header_regex()?;
        Ok(())
    }

    pub fn header_regex(&self) -> Result<Regex> {
        Ok(Regex::new(&self.header_pattern)?)
    }

    pub fn page_image_path(&self, page: u32) -> String {
        format!("{}{:02}{}", self.page_prefix, page, self.page_extension)
    }
}
