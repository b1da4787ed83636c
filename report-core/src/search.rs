//! Case-insensitive substring search over the per-page transcript.

use crate::config::SiteConfig;
use crate::fold::{fold, Folded};
use crate::html;
use crate::transcript::{PageText, Transcript};

pub const SEARCH_PROMPT: &str = "Search the report to jump to specific yarns or solutions.";
pub const SEARCH_UNAVAILABLE: &str = "Search is unavailable right now.";
pub const SEARCH_NO_MATCHES: &str =
    "No matches yet. Try another word like “bail”, “education”, or “Elder”.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchHit {
    pub page: u32,
    pub snippet: String,
    pub query: String,
}

impl SearchHit {
    pub fn highlighted(&self) -> String {
        html::highlight(&self.snippet, &self.query)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    Prompt,
    Unavailable,
    NoMatches,
    Hits(Vec<SearchHit>),
}

impl SearchOutcome {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            SearchOutcome::Prompt => Some(SEARCH_PROMPT),
            SearchOutcome::Unavailable => Some(SEARCH_UNAVAILABLE),
            SearchOutcome::NoMatches => Some(SEARCH_NO_MATCHES),
            SearchOutcome::Hits(_) => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchIndex {
    pages: Vec<PageText>,
    before: usize,
    after: usize,
    max_results: usize,
}

impl SearchIndex {
    pub fn new(transcript: Transcript, config: &SiteConfig) -> Self {
        Self {
            pages: transcript.pages().to_vec(),
            before: config.snippet_before,
            after: config.snippet_after,
            max_results: config.max_results,
        }
    }

    pub fn empty(config: &SiteConfig) -> Self {
        Self::new(Transcript::default(), config)
    }

    pub fn search(&self, query: &str) -> SearchOutcome {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return SearchOutcome::Prompt;
        }
        if self.pages.is_empty() {
            return SearchOutcome::Unavailable;
        }
        let needle = fold(trimmed);
        let query_len = trimmed.chars().count();
        let hits: Vec<SearchHit> = self
            .pages
            .iter()
            .filter(|page| !page.text.is_empty())
            .filter_map(|page| {
                let found = Folded::new(&page.text).find(&needle)?;
                let at = page.text[..found.start].chars().count();
                let total = page.text.chars().count();
                let start = at.saturating_sub(self.before);
                let end = at
                    .saturating_add(query_len)
                    .saturating_add(self.after)
                    .min(total);
                let window = &page.text[char_offset(&page.text, start)..char_offset(&page.text, end)];
                Some(SearchHit {
                    page: page.number,
                    snippet: collapse_whitespace(window),
                    query: trimmed.to_string(),
                })
            })
            .take(self.max_results)
            .collect();

        log::debug!("search '{trimmed}' matched {} page(s)", hits.len());
        if hits.is_empty() {
            SearchOutcome::NoMatches
        } else {
            SearchOutcome::Hits(hits)
        }
    }
}

fn char_offset(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map_or(text.len(), |(byte, _)| byte)
}

fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_run {
                out.push(' ');
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}
