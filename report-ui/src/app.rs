use crate::bridge;
use crate::dom;
use crate::state::SiteState;
use leptos::*;
use report_core::pager::Placeholder;
use report_core::search::{SearchOutcome, SearchIndex};
use report_core::sections::{Section, TOC_FALLBACK};
use report_core::stories::{Story, StoryDeck, STORIES_FALLBACK, STORY_BUTTON};
use report_core::transcript::Transcript;
use report_core::updates::{Update, UpdateAction, UpdateDraft, UpdatesFeed, UPDATES_FALLBACK};
use report_core::{LoadState, Result};
use serde::de::DeserializeOwned;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, FormData, HtmlElement, HtmlFormElement, HtmlInputElement};

const PAGE_SCROLLER: &str = "page-scroller";
const PAGE_INDICATOR: &str = "page-indicator";
const PREV_PAGE: &str = "prev-page";
const NEXT_PAGE: &str = "next-page";
const SITE_NAV: &str = "site-nav";
const NAV_TOGGLE: &str = ".nav-toggle";
const STORY_GRID: &str = "story-grid";
const SHUFFLE_STORIES: &str = "shuffle-quotes";
const RESET_STORIES: &str = "reset-quotes";
const TOC_LIST: &str = "toc-list";
const REPORT_SEARCH: &str = "report-search";
const CLEAR_SEARCH: &str = "clear-search";
const SEARCH_RESULTS: &str = "search-results";
const UPDATES_LIST: &str = "updates-list";
const UPDATE_FORM: &str = "update-form";

const PLACEHOLDER_CLASS: &str = ".page-illustration";
const VISIBLE_THRESHOLD: f64 = 0.6;

#[component]
fn PagePlaceholder(placeholder: Placeholder) -> impl IntoView {
    view! {
      <figure class="page-illustration" id=placeholder.id>
        <img src=placeholder.image alt=placeholder.alt loading=placeholder.loading.as_str()/>
      </figure>
    }
}

#[component]
fn StoryCard(story: Story, state: SiteState) -> impl IntoView {
    let page = story.page;
    let data_page = story.data_page();
    let tags = story.tag_line();
    let alt = story.image_alt();
    let image = story
        .image
        .map(|src| view! { <img src=src alt=alt loading="lazy"/> });
    view! {
      <article class="story-card" data-page=data_page>
        {image}
        <div class="story-meta">{tags}</div>
        <blockquote>{story.quote}</blockquote>
        <p>{story.summary}</p>
        <button class="btn tertiary" type="button" on:click=move |_| state.jump_to_page(page)>
          {STORY_BUTTON}
        </button>
      </article>
    }
}

#[component]
fn StoryGrid(state: SiteState) -> impl IntoView {
    move || {
        state.stories.with(|stories| match stories {
            LoadState::Pending => ().into_view(),
            LoadState::Failed => view! { <p>{STORIES_FALLBACK}</p> }.into_view(),
            LoadState::Ready(deck) => deck
                .live()
                .iter()
                .cloned()
                .map(|story| view! { <StoryCard story=story state=state/> })
                .collect_view(),
        })
    }
}

#[component]
fn TocEntry(section: Section, state: SiteState) -> impl IntoView {
    let page = section.page;
    view! {
      <li>
        <button type="button" on:click=move |_| state.jump_to_page(page)>{section.title}</button>
      </li>
    }
}

#[component]
fn TocList(state: SiteState) -> impl IntoView {
    move || {
        state.sections.with(|sections| match sections {
            LoadState::Pending => ().into_view(),
            LoadState::Failed => view! { <li>{TOC_FALLBACK}</li> }.into_view(),
            LoadState::Ready(list) => list
                .iter()
                .cloned()
                .map(|section| view! { <TocEntry section=section state=state/> })
                .collect_view(),
        })
    }
}

#[component]
fn UpdateCard(update: Update, state: SiteState) -> impl IntoView {
    let action = match update.action() {
        UpdateAction::OpenPage(page) => view! {
          <button class="btn tertiary" type="button" on:click=move |_| state.jump_to_page(page)>
            {format!("Open page {page}")}
          </button>
        }
        .into_view(),
        UpdateAction::ExternalLink(href) => view! {
          <a href=href target="_blank" rel="noopener">"Learn more"</a>
        }
        .into_view(),
        UpdateAction::None => ().into_view(),
    };
    view! {
      <article class="update-card">
        <h4>{update.title}</h4>
        <p>{update.summary}</p>
        {action}
      </article>
    }
}

#[component]
fn UpdatesList(state: SiteState) -> impl IntoView {
    move || {
        state.updates.with(|updates| match updates {
            LoadState::Pending => ().into_view(),
            LoadState::Failed => view! { <p>{UPDATES_FALLBACK}</p> }.into_view(),
            LoadState::Ready(feed) => feed
                .entries()
                .iter()
                .cloned()
                .map(|update| view! { <UpdateCard update=update state=state/> })
                .collect_view(),
        })
    }
}

#[component]
fn SearchResults(state: SiteState) -> impl IntoView {
    move || {
        let query = state.query.get();
        let outcome = state.search_index.with(|index| index.search(&query));
        match outcome {
            SearchOutcome::Hits(hits) => hits
                .into_iter()
                .map(|hit| {
                    let page = hit.page;
                    view! {
                      <div class="search-hit">
                        <div inner_html=hit.highlighted()></div>
                        <button class="btn tertiary" type="button" on:click=move |_| state.jump_to_page(page)>
                          {format!("Open page {page}")}
                        </button>
                      </div>
                    }
                })
                .collect_view(),
            other => {
                let class = (other != SearchOutcome::Unavailable).then_some("search-empty");
                view! { <p class=class>{other.message()}</p> }.into_view()
            }
        }
    }
}

fn init_nav(state: SiteState) {
    let (Some(toggle), Some(site_nav)) = (dom::query::<Element>(NAV_TOGGLE), dom::by_id::<Element>(SITE_NAV))
    else {
        return;
    };

    {
        let toggle = toggle.clone();
        let site_nav = site_nav.clone();
        create_effect(move |_| {
            let nav = state.nav.get();
            let _ = site_nav.class_list().toggle_with_force("open", nav.is_open());
            let _ = toggle.set_attribute("aria-expanded", nav.aria_expanded());
        });
    }

    dom::on(&toggle, "click", move |_| {
        state.nav.update(|nav| {
            nav.toggle();
        });
    });
    dom::on_each(&site_nav, "a", "click", move || state.nav.update(|nav| nav.close()));
}

fn init_pages(state: SiteState) {
    let Some(scroller) = dom::by_id::<HtmlElement>(PAGE_SCROLLER) else {
        return;
    };
    let placeholders = state
        .config
        .with_value(|config| state.pager.with_untracked(|pager| pager.placeholders(config)));
    mount_to(scroller.clone(), move || {
        placeholders
            .into_iter()
            .map(|placeholder| view! { <PagePlaceholder placeholder=placeholder/> })
            .collect_view()
    });

    let observed = dom::observe_pages(&scroller, PLACEHOLDER_CLASS, VISIBLE_THRESHOLD, move |page| {
        state.pager.update(|pager| {
            pager.observe(page);
        });
    });
    if let Err(e) = observed {
        log::warn!("page visibility tracking unavailable: {e:?}");
    }

    if let Some(indicator) = dom::by_id::<Element>(PAGE_INDICATOR) {
        create_effect(move |_| {
            let text = state.pager.with(|pager| pager.indicator());
            indicator.set_text_content(Some(&text));
        });
    }
}

fn bind_paging_controls(state: SiteState) {
    if let Some(prev) = dom::by_id::<Element>(PREV_PAGE) {
        dom::on(&prev, "click", move |_| {
            state.jump_to_page(state.pager.with_untracked(|pager| pager.prev_target()));
        });
    }
    if let Some(next) = dom::by_id::<Element>(NEXT_PAGE) {
        dom::on(&next, "click", move |_| {
            state.jump_to_page(state.pager.with_untracked(|pager| pager.next_target()));
        });
    }
}

fn init_story_controls(state: SiteState) {
    if let Some(shuffle) = dom::by_id::<Element>(SHUFFLE_STORIES) {
        dom::on(&shuffle, "click", move |_| {
            state.stories.update(|stories| {
                if let Some(deck) = stories.ready_mut() {
                    deck.shuffle(&mut rand::thread_rng());
                }
            });
        });
    }
    if let Some(reset) = dom::by_id::<Element>(RESET_STORIES) {
        dom::on(&reset, "click", move |_| {
            state.stories.update(|stories| {
                if let Some(deck) = stories.ready_mut() {
                    deck.reset();
                }
            });
        });
    }
}

fn init_search(state: SiteState) {
    let Some(input) = dom::by_id::<HtmlInputElement>(REPORT_SEARCH) else {
        return;
    };
    if let Some(results) = dom::by_id::<HtmlElement>(SEARCH_RESULTS) {
        dom::mount_replacing(results, move || view! { <SearchResults state=state/> });
    }

    {
        let input = input.clone();
        dom::on(&input.clone(), "input", move |_| state.search_debounced(input.value()));
    }
    {
        let input = input.clone();
        dom::on(&input.clone(), "search", move |_| state.search_now(input.value()));
    }
    if let Some(clear) = dom::by_id::<Element>(CLEAR_SEARCH) {
        dom::on(&clear, "click", move |_| {
            input.set_value("");
            state.search_now(String::new());
            let _ = input.focus();
        });
    }
}

fn init_update_form(state: SiteState) {
    let Some(form) = dom::by_id::<HtmlFormElement>(UPDATE_FORM) else {
        return;
    };
    dom::on(&form.clone(), "submit", move |event| {
        event.prevent_default();
        if !form.report_validity() {
            return;
        }
        let Ok(data) = FormData::new_with_form(&form) else {
            return;
        };
        let field = |name: &str| data.get(name).as_string().unwrap_or_default();
        let draft = UpdateDraft {
            title: field("title"),
            summary: field("summary"),
            link: field("link"),
        };

        let mut added = false;
        state.updates.update(|updates| {
            if !matches!(updates, LoadState::Ready(_)) {
                *updates = LoadState::Ready(UpdatesFeed::default());
            }
            if let Some(feed) = updates.ready_mut() {
                match feed.prepend(draft) {
                    Ok(_) => added = true,
                    Err(e) => log::warn!("update not added: {e}"),
                }
            }
        });
        if added {
            form.reset();
        }
    });
}

fn spawn_load<T, S>(
    what: &'static str,
    path: String,
    target: RwSignal<LoadState<S>>,
    build: impl FnOnce(T) -> S + 'static,
) where
    T: DeserializeOwned + 'static,
    S: 'static,
{
    spawn_local(async move {
        let result: Result<S> = bridge::fetch_json::<T>(&path).await.map(build);
        if let Err(e) = &result {
            log::error!("Failed to load {what}: {e}");
        }
        target.set(result.into());
    });
}

fn load_report_text(state: SiteState) {
    let (path, header) = state
        .config
        .with_value(|config| (config.text_path.clone(), config.header_regex()));
    spawn_local(async move {
        let parsed = match header {
            Ok(header) => bridge::fetch_text(&path)
                .await
                .map(|raw| Transcript::parse(&raw, &header)),
            Err(e) => Err(e),
        };
        match parsed {
            Ok(transcript) => {
                log::info!("report text loaded: {} pages", transcript.pages().len());
                let index = state
                    .config
                    .with_value(|config| SearchIndex::new(transcript, config));
                state.search_index.set(index);
            }
            Err(e) => log::error!("Failed to load report text: {e}"),
        }
    });
}

pub fn bootstrap(state: SiteState) {
    init_nav(state);
    init_pages(state);
    bind_paging_controls(state);
    init_story_controls(state);

    let (stories_path, sections_path, updates_path) = state.config.with_value(|config| {
        (
            config.stories_path.clone(),
            config.sections_path.clone(),
            config.updates_path.clone(),
        )
    });

    if let Some(grid) = dom::by_id::<HtmlElement>(STORY_GRID) {
        dom::mount_replacing(grid, move || view! { <StoryGrid state=state/> });
        spawn_load("stories", stories_path, state.stories, StoryDeck::new);
    }
    if let Some(toc) = dom::by_id::<HtmlElement>(TOC_LIST) {
        mount_to(toc, move || view! { <TocList state=state/> });
        spawn_load("table of contents", sections_path, state.sections, |list: Vec<Section>| list);
    }
    if let Some(list) = dom::by_id::<HtmlElement>(UPDATES_LIST) {
        dom::mount_replacing(list, move || view! { <UpdatesList state=state/> });
        spawn_load("updates", updates_path, state.updates, UpdatesFeed::new);
    }
    if dom::by_id::<HtmlInputElement>(REPORT_SEARCH).is_some() {
        load_report_text(state);
    }

    init_search(state);
    init_update_form(state);
}
