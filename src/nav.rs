use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use folio_core::effects::{anchor_selector, scroll_target};

const ACTIVE_CLASS: &str = "active";

pub(crate) fn install(
    window: &Window,
    document: &Document,
    hamburger: Option<&Element>,
    menu: Option<&Element>,
    links: &[HtmlElement],
) {
    if let Some(hamburger) = hamburger {
        let toggle_target = hamburger.clone();
        let menu = menu.cloned();
        EventListener::new(hamburger, "click", move |_| {
            let _ = toggle_target.class_list().toggle(ACTIVE_CLASS);
            if let Some(menu) = menu.as_ref() {
                let _ = menu.class_list().toggle(ACTIVE_CLASS);
            }
        })
        .forget();
    }

    for link in links {
        let hamburger = hamburger.cloned();
        let menu = menu.cloned();
        let window = window.clone();
        let document = document.clone();
        let href = link.get_attribute("href").unwrap_or_default();
        EventListener::new_with_options(
            link,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                close_menu(hamburger.as_ref(), menu.as_ref());
                let Some(selector) = anchor_selector(&href) else {
                    return;
                };
                event.prevent_default();
                scroll_to_section(&window, &document, selector);
            },
        )
        .forget();
    }
}

fn close_menu(hamburger: Option<&Element>, menu: Option<&Element>) {
    for element in [hamburger, menu].into_iter().flatten() {
        let _ = element.class_list().remove_1(ACTIVE_CLASS);
    }
}

fn scroll_to_section(window: &Window, document: &Document, selector: &str) {
    let Ok(Some(target)) = document.query_selector(selector) else {
        return;
    };
    let Some(target) = target.dyn_ref::<HtmlElement>() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(scroll_target(f64::from(target.offset_top())));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
