use gloo::console;
use gloo::timers::callback::Timeout;
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use folio_core::reveal::{
    stagger_delays, HIDDEN_OPACITY, HIDDEN_TRANSFORM, REVEAL_THRESHOLD, REVEAL_TRANSITION,
    SECTION_ROOT_MARGIN, SECTION_THRESHOLD, SECTION_VISIBLE_CLASS, SHOWN_OPACITY, SHOWN_TRANSFORM,
};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Adds the fade-in class to each section the first time it scrolls into view.
pub(crate) fn observe_sections(sections: &[Element]) {
    if sections.is_empty() {
        return;
    }
    let callback: ObserverCallback =
        Closure::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in batch_entries(&entries) {
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let _ = target.class_list().add_1(SECTION_VISIBLE_CLASS);
                observer.unobserve(&target);
            }
        });
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(SECTION_THRESHOLD));
    options.set_root_margin(SECTION_ROOT_MARGIN);
    let Some(observer) = create_observer(&callback, &options) else {
        return;
    };
    for section in sections {
        observer.observe(section);
    }
    callback.forget();
}

/// Hides the targets and fades them in, staggered per intersecting batch.
pub(crate) fn observe_staggered(targets: &[HtmlElement]) {
    if targets.is_empty() {
        return;
    }
    let callback: ObserverCallback =
        Closure::new(move |entries: Array, observer: IntersectionObserver| {
            let entries = batch_entries(&entries);
            let flags: Vec<bool> = entries.iter().map(|entry| entry.is_intersecting()).collect();
            for (entry, delay) in entries.iter().zip(stagger_delays(&flags)) {
                let Some(delay) = delay else {
                    continue;
                };
                let target = entry.target();
                observer.unobserve(&target);
                let Ok(target) = target.dyn_into::<HtmlElement>() else {
                    continue;
                };
                Timeout::new(delay, move || show(&target)).forget();
            }
        });
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let Some(observer) = create_observer(&callback, &options) else {
        return;
    };
    for target in targets {
        hide(target);
        observer.observe(target);
    }
    callback.forget();
}

fn create_observer(
    callback: &ObserverCallback,
    options: &IntersectionObserverInit,
) -> Option<IntersectionObserver> {
    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), options) {
        Ok(observer) => Some(observer),
        Err(err) => {
            console::warn!("intersection observer unavailable", err);
            None
        }
    }
}

fn batch_entries(entries: &Array) -> Vec<IntersectionObserverEntry> {
    entries
        .iter()
        .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
        .collect()
}

fn hide(element: &HtmlElement) {
    let style = element.style();
    let _ = style.set_property("opacity", HIDDEN_OPACITY);
    let _ = style.set_property("transform", HIDDEN_TRANSFORM);
    let _ = style.set_property("transition", REVEAL_TRANSITION);
}

fn show(element: &HtmlElement) {
    let style = element.style();
    let _ = style.set_property("opacity", SHOWN_OPACITY);
    let _ = style.set_property("transform", SHOWN_TRANSFORM);
}
