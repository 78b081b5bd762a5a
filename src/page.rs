use gloo::console;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, Window};

use folio_core::reveal::REVEAL_SELECTORS;

/// Fixed page elements the behaviors attach to, looked up once at start.
pub(crate) struct PageElements {
    pub(crate) window: Window,
    pub(crate) document: Document,
    pub(crate) hamburger: Option<Element>,
    pub(crate) nav_menu: Option<Element>,
    pub(crate) nav_links: Vec<HtmlElement>,
    pub(crate) skill_bars: Vec<HtmlElement>,
    pub(crate) editable: Vec<HtmlElement>,
    pub(crate) projects_grid: Option<Element>,
    pub(crate) profile_img: Option<HtmlImageElement>,
    pub(crate) header: Option<HtmlElement>,
    pub(crate) hero: Option<HtmlElement>,
    pub(crate) hero_title: Option<HtmlElement>,
    pub(crate) sections: Vec<Element>,
    pub(crate) reveal_targets: Vec<HtmlElement>,
}

impl PageElements {
    pub(crate) fn collect() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self {
            hamburger: expect_one(&document, ".hamburger"),
            nav_menu: expect_one(&document, ".nav-menu"),
            nav_links: query_all(&document, ".nav-link"),
            skill_bars: query_all(&document, ".skill-progress"),
            editable: query_all(&document, ".editable-content"),
            projects_grid: expect_id(&document, "projects-grid"),
            profile_img: expect_id(&document, "profile-img")
                .and_then(|element| element.dyn_into::<HtmlImageElement>().ok()),
            header: expect_one(&document, ".header")
                .and_then(|element| element.dyn_into::<HtmlElement>().ok()),
            hero: query_one(&document, ".hero")
                .and_then(|element| element.dyn_into::<HtmlElement>().ok()),
            hero_title: query_one(&document, ".hero-title")
                .and_then(|element| element.dyn_into::<HtmlElement>().ok()),
            sections: query_all(&document, "section"),
            reveal_targets: query_all(&document, REVEAL_SELECTORS),
            window,
            document,
        })
    }
}

pub(crate) fn query_one(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

pub(crate) fn query_all<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|idx| list.item(idx))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

fn expect_one(document: &Document, selector: &str) -> Option<Element> {
    let element = query_one(document, selector);
    if element.is_none() {
        console::warn!("page element missing", selector);
    }
    element
}

fn expect_id(document: &Document, id: &str) -> Option<Element> {
    let element = document.get_element_by_id(id);
    if element.is_none() {
        console::warn!("page element missing", format!("#{id}"));
    }
    element
}

/// Runs `action` once the document is parsed, immediately if it already is.
pub(crate) fn on_dom_ready<F>(document: &Document, action: F)
where
    F: FnOnce() + 'static,
{
    if document.ready_state() != "loading" {
        action();
        return;
    }
    EventListener::once(document, "DOMContentLoaded", move |_| action()).forget();
}

/// Runs `action` once the window has finished loading, immediately if it has.
pub(crate) fn on_window_load<F>(window: &Window, document: &Document, action: F)
where
    F: FnOnce() + 'static,
{
    if document.ready_state() == "complete" {
        action();
        return;
    }
    EventListener::once(window, "load", move |_| action()).forget();
}
