use std::cell::RefCell;
use std::rc::Rc;

use gloo::console;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, KeyboardEvent};

use folio_core::{saved_text, EditOutcome, EditSession, KeyValueStore};

const FIELD_ATTR: &str = "data-field";
const EDITING_CLASS: &str = "editing";
const INPUT_CLASS: &str = "edit-input";
const INPUT_CSS: &str = "width: 100%; padding: 0.5rem; border: 2px solid #3182ce; \
border-radius: 4px; font-family: inherit; font-size: inherit; background: white;";

struct Region {
    element: HtmlElement,
    field: String,
    store: Rc<dyn KeyValueStore>,
    session: RefCell<Option<EditSession>>,
    input_listeners: RefCell<Vec<EventListener>>,
}

/// Restores saved text into each editable region and makes it editable on click.
pub(crate) fn install(elements: &[HtmlElement], store: Rc<dyn KeyValueStore>) {
    for element in elements {
        let Some(field) = element
            .get_attribute(FIELD_ATTR)
            .filter(|field| !field.is_empty())
        else {
            console::warn!("editable region without data-field skipped");
            continue;
        };
        if let Some(text) = saved_text(store.as_ref(), &field) {
            element.set_text_content(Some(&text));
        }
        let region = Rc::new(Region {
            element: element.clone(),
            field,
            store: store.clone(),
            session: RefCell::new(None),
            input_listeners: RefCell::new(Vec::new()),
        });
        EventListener::new(element, "click", move |_| begin_edit(&region)).forget();
    }
}

fn begin_edit(region: &Rc<Region>) {
    let element = &region.element;
    if element.class_list().contains(EDITING_CLASS) {
        return;
    }
    let session = EditSession::begin(
        region.field.clone(),
        element.text_content().unwrap_or_default(),
    );
    let Some(input) = create_input(session.initial_input()) else {
        console::warn!("failed to create edit input", region.field.clone());
        return;
    };
    let _ = element.class_list().add_1(EDITING_CLASS);
    element.set_inner_html("");
    if element.append_child(&input).is_err() {
        let _ = element.class_list().remove_1(EDITING_CLASS);
        element.set_text_content(Some(session.original()));
        return;
    }
    *region.session.borrow_mut() = Some(session);

    let on_blur = EventListener::new(&input, "blur", {
        let region = region.clone();
        let input = input.clone();
        move |_| commit_edit(&region, &input)
    });
    let on_key = EventListener::new(&input, "keypress", {
        let region = region.clone();
        let input = input.clone();
        move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if event.key() == "Enter" {
                commit_edit(&region, &input);
            }
        }
    });
    *region.input_listeners.borrow_mut() = vec![on_blur, on_key];
    let _ = input.focus();
}

fn commit_edit(region: &Region, input: &HtmlInputElement) {
    // Replacing the input can fire blur again; the session is taken once.
    let Some(session) = region.session.borrow_mut().take() else {
        return;
    };
    let outcome = session.commit(&input.value(), region.store.as_ref());
    if let EditOutcome::Saved {
        store_error: Some(err),
        ..
    } = &outcome
    {
        console::warn!("failed to save field", region.field.clone(), err.to_string());
    }
    let _ = region.element.class_list().remove_1(EDITING_CLASS);
    region.element.set_text_content(Some(outcome.text()));
}

fn create_input(value: &str) -> Option<HtmlInputElement> {
    let document = web_sys::window()?.document()?;
    let input = document
        .create_element("input")
        .ok()?
        .dyn_into::<HtmlInputElement>()
        .ok()?;
    input.set_type("text");
    input.set_value(value);
    input.set_class_name(INPUT_CLASS);
    input.style().set_css_text(INPUT_CSS);
    Some(input)
}
