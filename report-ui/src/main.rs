mod app;
mod bridge;
mod dom;
mod logger;
mod state;

use report_core::SiteConfig;
use state::SiteState;

const SITE_CONFIG: &str = "site-config";

/// Optional `<script id="site-config" type="application/json">` overrides.
fn load_config() -> SiteConfig {
    let Some(raw) = dom::by_id::<web_sys::Element>(SITE_CONFIG).and_then(|el| el.text_content()) else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring inline site config: {e}");
            SiteConfig::default()
        }
    }
}

fn start() {
    let state = SiteState::new(load_config());
    app::bootstrap(state);
}

fn main() {
    console_error_panic_hook::set_once();
    logger::init();

    if dom::ready_state() == "loading" {
        if let Some(document) = dom::document() {
            let mut pending = Some(start);
            dom::on(&document, "DOMContentLoaded", move |_| {
                if let Some(start) = pending.take() {
                    start();
                }
            });
        }
    } else {
        start();
    }
}
