//! Client-side logic for the report viewing site: paging, story and update
//! cards, and transcript search. Nothing here touches the browser; the
//! `report-ui` crate binds these types to the DOM.

pub mod config;
pub mod debounce;
pub mod error;
mod fold;
pub mod html;
pub mod load;
pub mod nav;
pub mod pager;
pub mod search;
pub mod sections;
pub mod stories;
pub mod transcript;
pub mod updates;

pub use config::SiteConfig;
pub use error::{Result, SiteError};
pub use load::LoadState;
