use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Interval;
use web_sys::HtmlElement;

use folio_core::typewriter::TYPE_INTERVAL_MS;
use folio_core::Typewriter;

/// Clears the element and types its original text back one character per tick.
pub(crate) fn start(element: HtmlElement) {
    let text = element.text_content().unwrap_or_default();
    let mut writer = Typewriter::new(&text);
    element.set_inner_html("");
    if writer.is_done() {
        return;
    }
    let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let interval = Interval::new(TYPE_INTERVAL_MS, {
        let handle = handle.clone();
        move || match writer.next_frame() {
            Some(frame) => element.set_text_content(Some(&frame)),
            None => drop(handle.borrow_mut().take()),
        }
    });
    *handle.borrow_mut() = Some(interval);
}
