use crate::error::{Result, SiteError};
use serde::{Deserialize, Serialize};

pub const UPDATES_FALLBACK: &str = "Updates will appear here soon.";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Update {
    pub title: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UpdateAction {
    OpenPage(u32),
    ExternalLink(String),
    None,
}

impl Update {
    /// A page reference wins over a link; page 0 counts as absent.
    pub fn action(&self) -> UpdateAction {
        match (self.page, self.link.as_deref()) {
            (Some(page), _) if page > 0 => UpdateAction::OpenPage(page),
            (_, Some(link)) if !link.is_empty() => UpdateAction::ExternalLink(link.to_string()),
            _ => UpdateAction::None,
        }
    }
}

/// Raw values read from the update form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateDraft {
    pub title: String,
    pub summary: String,
    pub link: String,
}

impl UpdateDraft {
    pub fn into_update(self) -> Result<Update> {
        let title = self.title.trim();
        let summary = self.summary.trim();
        let link = self.link.trim();
        if title.is_empty() {
            return Err(SiteError::Validation("title"));
        }
        if summary.is_empty() {
            return Err(SiteError::Validation("summary"));
        }
        Ok(Update {
            title: title.to_string(),
            summary: summary.to_string(),
            page: None,
            link: (!link.is_empty()).then(|| link.to_string()),
        })
    }
}

/// In-memory update list. Additions live only as long as the page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdatesFeed {
    entries: Vec<Update>,
}

impl UpdatesFeed {
    pub fn new(entries: Vec<Update>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[Update] {
        &self.entries
    }

    pub fn prepend(&mut self, draft: UpdateDraft) -> Result<&Update> {
        let update = draft.into_update()?;
        log::info!("adding local update '{}'", update.title);
        self.entries.insert(0, update);
        Ok(&self.entries[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn existing() -> UpdatesFeed {
        UpdatesFeed::new(vec![Update {
            title: "Report launched".into(),
            summary: "Read it online".into(),
            page: Some(1),
            link: None,
        }])
    }

    #[test]
    fn form_submission_prepends_trimmed_values() {
        let mut feed = existing();
        let added = feed
            .prepend(UpdateDraft {
                title: "  Policy change ".into(),
                summary: "New bail guidance\n".into(),
                link: "".into(),
            })
            .expect("valid draft")
            .clone();
        assert_eq!(added.title, "Policy change");
        assert_eq!(added.summary, "New bail guidance");
        assert_eq!(added.link, None);
        assert_eq!(feed.entries().len(), 2);
        assert_eq!(feed.entries()[0], added);
        assert_eq!(feed.entries()[1].title, "Report launched");
    }

    #[test]
    fn blank_required_fields_leave_feed_untouched() {
        let mut feed = existing();
        let err = feed
            .prepend(UpdateDraft {
                title: "   ".into(),
                summary: "x".into(),
                link: "".into(),
            })
            .expect_err("blank title");
        assert!(matches!(err, SiteError::Validation("title")));
        assert!(feed
            .prepend(UpdateDraft {
                title: "t".into(),
                ..UpdateDraft::default()
            })
            .is_err());
        assert_eq!(feed.entries().len(), 1);
    }

    #[test]
    fn page_takes_precedence_over_link() {
        let mut update = Update {
            title: "t".into(),
            summary: "s".into(),
            page: Some(9),
            link: Some("https://example.org".into()),
        };
        assert_eq!(update.action(), UpdateAction::OpenPage(9));
        update.page = Some(0);
        assert_eq!(
            update.action(),
            UpdateAction::ExternalLink("https://example.org".into())
        );
        update.link = Some(String::new());
        assert_eq!(update.action(), UpdateAction::None);
    }
}
