use serde::{Deserialize, Serialize};

pub const TOC_FALLBACK: &str = "Contents unavailable";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub page: u32,
}
