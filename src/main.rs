mod editor;
mod gallery;
mod gallery_view;
mod local_store;
mod nav;
mod page;
mod profile;
mod reveal;
mod scroll_effects;
mod site_config;
mod typewriter;

use std::rc::Rc;

use gloo::console;
use gloo::timers::callback::Timeout;

use crate::local_store::BrowserStore;
use crate::page::{on_dom_ready, on_window_load, PageElements};

const INITIAL_SKILL_PASS_MS: u32 = 500;

fn main() {
    console_error_panic_hook::set_once();
    let Some(page) = PageElements::collect() else {
        console::warn!("document unavailable; page behaviors disabled");
        return;
    };
    let config = site_config::load();

    nav::install(
        &page.window,
        &page.document,
        page.hamburger.as_ref(),
        page.nav_menu.as_ref(),
        &page.nav_links,
    );
    let skill_bars = scroll_effects::install(
        &page.window,
        page.skill_bars.clone(),
        page.header.clone(),
        page.hero.clone(),
    );
    reveal::observe_sections(&page.sections);
    reveal::observe_staggered(&page.reveal_targets);
    editor::install(&page.editable, Rc::new(BrowserStore::local()));
    profile::install(page.profile_img.as_ref(), &config.profile_placeholder);

    if let Some(title) = page.hero_title.clone() {
        on_window_load(&page.window, &page.document, move || typewriter::start(title));
    }

    let grid = page.projects_grid.clone();
    on_dom_ready(&page.document, move || {
        if let Some(grid) = grid {
            gallery::load(grid, config);
        }
        Timeout::new(INITIAL_SKILL_PASS_MS, move || skill_bars.animate_visible()).forget();
    });
}
