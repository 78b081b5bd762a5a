use gloo::console;
use gloo::net::http::Request;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use folio_core::{resolve_gallery, GalleryError, SiteConfig};

use crate::gallery_view;

pub(crate) async fn fetch_listing(url: &str) -> Result<String, GalleryError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|err| GalleryError::Network(err.to_string()))?;
    if !response.ok() {
        console::warn!("project listing returned status", response.status());
    }
    response
        .text()
        .await
        .map_err(|err| GalleryError::Body(err.to_string()))
}

/// Fetches the repository listing in the background and renders the cards,
/// falling back to the fixed project list on any failure.
pub(crate) fn load(grid: Element, config: SiteConfig) {
    spawn_local(async move {
        let url = config.listing_url();
        let fetched = fetch_listing(&url).await;
        let gallery = resolve_gallery(fetched, config.page_size);
        if let Some(err) = gallery.error.as_ref() {
            console::error!("error loading projects", err.to_string());
        } else {
            console::log!("projects loaded", gallery.records.len());
        }
        gallery_view::mount(grid, gallery.cards());
    });
}
