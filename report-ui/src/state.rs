use crate::dom;
use leptos::*;
use leptos::leptos_dom::helpers::TimeoutHandle;
use report_core::debounce::Debouncer;
use report_core::nav::NavToggle;
use report_core::pager::{placeholder_id, Pager};
use report_core::search::SearchIndex;
use report_core::sections::Section;
use report_core::stories::StoryDeck;
use report_core::updates::UpdatesFeed;
use report_core::{LoadState, SiteConfig};
use std::time::Duration;
use web_sys::Element;

/// Everything the page components share. Each data source has its own
/// signal so a load only ever touches its own slot.
#[derive(Clone, Copy)]
pub struct SiteState {
    pub config: StoredValue<SiteConfig>,
    pub nav: RwSignal<NavToggle>,
    pub pager: RwSignal<Pager>,
    pub stories: RwSignal<LoadState<StoryDeck>>,
    pub sections: RwSignal<LoadState<Vec<Section>>>,
    pub updates: RwSignal<LoadState<UpdatesFeed>>,
    pub search_index: RwSignal<SearchIndex>,
    pub query: RwSignal<String>,
    pub debouncer: StoredValue<Debouncer>,
    pub pending_search: StoredValue<Option<TimeoutHandle>>,
}

impl SiteState {
    pub fn new(config: SiteConfig) -> Self {
        let delay = Duration::from_millis(u64::from(config.search_debounce_ms));
        Self {
            nav: create_rw_signal(NavToggle::default()),
            pager: create_rw_signal(Pager::new(config.total_pages)),
            stories: create_rw_signal(LoadState::Pending),
            sections: create_rw_signal(LoadState::Pending),
            updates: create_rw_signal(LoadState::Pending),
            search_index: create_rw_signal(SearchIndex::empty(&config)),
            query: create_rw_signal(String::new()),
            debouncer: store_value(Debouncer::new(delay)),
            pending_search: store_value(None),
            config: store_value(config),
        }
    }

    /// Scrolls to page `page` and makes it current without waiting for the
    /// visibility observer. Pages without a placeholder are ignored.
    pub fn jump_to_page(&self, page: u32) {
        let Some(target) = dom::by_id::<Element>(&placeholder_id(page)) else {
            log::debug!("no placeholder for page {page}");
            return;
        };
        dom::scroll_into_view(&target);
        self.pager.update(|pager| {
            pager.jump_to(page);
        });
    }

    /// Runs `query` after the quiet period, superseding any pending run.
    pub fn search_debounced(&self, query: String) {
        if let Some(handle) = self.pending_search.get_value() {
            handle.clear();
        }
        let Some(ticket) = self.debouncer.try_update_value(|d| d.schedule()) else {
            return;
        };
        let delay = self.debouncer.with_value(|d| d.delay());
        let state = *self;
        let pending = query.clone();
        let handle = set_timeout_with_handle(
            move || {
                if state.debouncer.try_update_value(|d| d.fire(ticket)) == Some(true) {
                    state.pending_search.set_value(None);
                    state.query.set(pending);
                }
            },
            delay,
        );
        match handle {
            Ok(handle) => self.pending_search.set_value(Some(handle)),
            Err(e) => {
                log::warn!("debounce timer unavailable, searching now: {e:?}");
                self.search_now(query);
            }
        }
    }

    pub fn search_now(&self, query: String) {
        if let Some(handle) = self.pending_search.get_value() {
            handle.clear();
        }
        self.pending_search.set_value(None);
        self.debouncer.update_value(|d| d.cancel());
        self.query.set(query);
    }
}
