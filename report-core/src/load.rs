use crate::error::{Result, SiteError};
use serde::de::DeserializeOwned;

/// Lifecycle of one independently fetched data source.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState<T> {
    #[default]
    Pending,
    Ready(T),
    Failed,
}

impl<T> LoadState<T> {
    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(v) => Some(v),
            _ => None,
        }
    }

    pub fn ready_mut(&mut self) -> Option<&mut T> {
        match self {
            LoadState::Ready(v) => Some(v),
            _ => None,
        }
    }
}

impl<T> From<Result<T>> for LoadState<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(v) => LoadState::Ready(v),
            Err(_) => LoadState::Failed,
        }
    }
}

pub fn decode_json<T: DeserializeOwned>(path: &str, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| SiteError::decode(path, e.to_string()))
}
