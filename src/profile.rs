use gloo::events::EventListener;
use web_sys::HtmlImageElement;

/// Swaps the profile photo for a placeholder if it fails to load. The swap
/// happens at most once so a broken placeholder cannot loop.
pub(crate) fn install(image: Option<&HtmlImageElement>, placeholder: &str) {
    let Some(image) = image else {
        return;
    };
    let target = image.clone();
    let placeholder = placeholder.to_string();
    EventListener::new(image, "error", move |_| {
        if target.src() == placeholder {
            return;
        }
        gloo::console::warn!("profile image failed to load", target.src());
        target.set_src(&placeholder);
    })
    .forget();
}
