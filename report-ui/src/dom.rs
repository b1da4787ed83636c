//! Thin helpers over `web_sys` for markup that exists before the app runs.

use js_sys::{Array, Object, Reflect};
use report_core::pager::page_from_id;
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

pub fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

pub fn by_id<T: JsCast>(id: &str) -> Option<T> {
    document()?.get_element_by_id(id)?.dyn_into::<T>().ok()
}

pub fn query<T: JsCast>(selector: &str) -> Option<T> {
    document()?
        .query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into::<T>()
        .ok()
}

pub fn ready_state() -> String {
    document()
        .and_then(|doc| Reflect::get(&doc, &JsValue::from_str("readyState")).ok())
        .and_then(|v| v.as_string())
        .unwrap_or_default()
}

/// Registers `handler` for the lifetime of the page.
pub fn on(target: &EventTarget, event: &str, handler: impl FnMut(web_sys::Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("could not listen for {event}: {e:?}");
    }
    closure.forget();
}

pub fn on_each(parent: &Element, selector: &str, event: &str, handler: impl Fn() + Clone + 'static) {
    let Ok(nodes) = parent.query_selector_all(selector) else {
        return;
    };
    for i in 0..nodes.length() {
        if let Some(node) = nodes.item(i) {
            let handler = handler.clone();
            on(&node, event, move |_| handler());
        }
    }
}

/// Mounts `view` as the only content of `host`, dropping any static markup
/// the page shipped in it.
pub fn mount_replacing<F, N>(host: HtmlElement, view: F)
where
    F: FnOnce() -> N + 'static,
    N: leptos::IntoView,
{
    host.set_inner_html("");
    leptos::mount_to(host, view);
}

pub fn scroll_into_view(target: &Element) {
    let options = Object::new();
    let _ = Reflect::set(&options, &"block".into(), &"start".into());
    let _ = Reflect::set(&options, &"behavior".into(), &"smooth".into());
    target.scroll_into_view_with_scroll_into_view_options(options.unchecked_ref());
}

/// Reports the page number of every placeholder that crosses `threshold`
/// visibility inside `scroller`.
pub fn observe_pages(
    scroller: &HtmlElement,
    selector: &str,
    threshold: f64,
    on_visible: impl Fn(u32) + 'static,
) -> Result<(), JsValue> {
    let callback = Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if !entry.is_intersecting() {
                continue;
            }
            if let Some(page) = page_from_id(&entry.target().id()) {
                on_visible(page);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    Reflect::set(&init, &"root".into(), scroller)?;
    Reflect::set(&init, &"threshold".into(), &JsValue::from_f64(threshold))?;
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

    let placeholders = scroller.query_selector_all(selector)?;
    for i in 0..placeholders.length() {
        if let Some(node) = placeholders.item(i) {
            observer.observe(node.unchecked_ref());
        }
    }
    callback.forget();
    Ok(())
}
