use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const STORIES_FALLBACK: &str = "Unable to load story highlights right now.";
pub const STORY_BUTTON: &str = "Read this yarn";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub page: u32,
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub quote: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Story {
    pub fn tag_line(&self) -> String {
        self.tags.join(" • ")
    }

    pub fn data_page(&self) -> String {
        format!("p.{}", self.page)
    }

    pub fn image_alt(&self) -> String {
        format!("{} artwork preview", self.title)
    }
}

/// Stories in display order plus the order they were fetched in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StoryDeck {
    live: Vec<Story>,
    original: Vec<Story>,
}

impl StoryDeck {
    pub fn new(stories: Vec<Story>) -> Self {
        Self {
            original: stories.clone(),
            live: stories,
        }
    }

    pub fn live(&self) -> &[Story] {
        &self.live
    }

    pub fn original(&self) -> &[Story] {
        &self.original
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.live.shuffle(rng);
    }

    pub fn reset(&mut self) {
        self.live.clone_from(&self.original);
    }
}
