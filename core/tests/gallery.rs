use folio_core::config::DEFAULT_PAGE_SIZE;
use folio_core::project::DEFAULT_DESCRIPTION;
use folio_core::{
    fallback_projects, parse_listing, resolve_gallery, GalleryError, GallerySource,
    NEUTRAL_LANGUAGE_COLOR,
};
use serde_json::json;

fn repo(name: &str) -> serde_json::Value {
    json!({
        "id": 1,
        "name": name,
        "description": format!("{name} description"),
        "language": "Python",
        "html_url": format!("https://github.com/grazisou00/{name}"),
        "homepage": null,
        "stargazers_count": 3
    })
}

#[test]
fn live_listing_renders_one_card_per_repo() {
    let body = json!([repo("alpha"), repo("beta"), repo("gamma")]).to_string();
    let gallery = resolve_gallery(Ok(body), DEFAULT_PAGE_SIZE);
    assert_eq!(gallery.source, GallerySource::Live);
    assert!(gallery.error.is_none());
    let cards = gallery.cards();
    assert_eq!(cards.len(), 3);
    assert_eq!(cards[1].title, "beta");
    assert_eq!(cards[1].source_url, "https://github.com/grazisou00/beta");
    assert_eq!(cards[1].tag.as_ref().map(|tag| tag.color), Some("#3776ab"));
}

#[test]
fn listing_is_capped_at_page_size() {
    let repos: Vec<_> = (0..9).map(|idx| repo(&format!("repo-{idx}"))).collect();
    let body = serde_json::Value::Array(repos).to_string();
    let gallery = resolve_gallery(Ok(body), DEFAULT_PAGE_SIZE);
    assert_eq!(gallery.source, GallerySource::Live);
    assert_eq!(gallery.records.len(), DEFAULT_PAGE_SIZE);
    assert_eq!(gallery.records[5].name, "repo-5");
}

#[test]
fn empty_listing_is_live_with_zero_cards() {
    let gallery = resolve_gallery(Ok("[]".to_string()), DEFAULT_PAGE_SIZE);
    assert_eq!(gallery.source, GallerySource::Live);
    assert!(gallery.records.is_empty());
    assert!(gallery.cards().is_empty());
}

#[test]
fn network_failure_uses_fallback_in_order() {
    let gallery = resolve_gallery(
        Err(GalleryError::Network("connection refused".to_string())),
        DEFAULT_PAGE_SIZE,
    );
    assert_eq!(gallery.source, GallerySource::Fallback);
    assert_eq!(gallery.records, fallback_projects());
    let titles: Vec<_> = gallery.cards().into_iter().map(|card| card.title).collect();
    assert_eq!(
        titles,
        vec![
            "Formato de intercambio de dados",
            "Biblioteca digital",
            "Analise de sequencias de DNA",
            "API Nasa",
        ]
    );
}

#[test]
fn rate_limit_object_is_not_a_list() {
    let body = json!({
        "message": "API rate limit exceeded",
        "documentation_url": "https://docs.github.com/rest"
    })
    .to_string();
    assert_eq!(parse_listing(&body, DEFAULT_PAGE_SIZE), Err(GalleryError::NotAList));
    let gallery = resolve_gallery(Ok(body), DEFAULT_PAGE_SIZE);
    assert_eq!(gallery.source, GallerySource::Fallback);
    assert_eq!(gallery.error, Some(GalleryError::NotAList));
}

#[test]
fn invalid_json_falls_back() {
    let gallery = resolve_gallery(Ok("<html>oops</html>".to_string()), DEFAULT_PAGE_SIZE);
    assert_eq!(gallery.source, GallerySource::Fallback);
    assert!(matches!(gallery.error, Some(GalleryError::InvalidJson(_))));
}

#[test]
fn entry_without_name_falls_back() {
    let body = json!([repo("ok"), {"html_url": "https://github.com/x/y"}]).to_string();
    let err = parse_listing(&body, DEFAULT_PAGE_SIZE).expect_err("malformed entry");
    assert!(matches!(err, GalleryError::MalformedRecord { index: 1, .. }));
    let gallery = resolve_gallery(Ok(body), DEFAULT_PAGE_SIZE);
    assert_eq!(gallery.records, fallback_projects());
}

#[test]
fn missing_description_and_language_get_defaults() {
    let body = json!([{
        "name": "notes_app",
        "description": null,
        "language": null,
        "html_url": "https://github.com/grazisou00/notes_app",
        "homepage": "https://notes.example.com"
    }])
    .to_string();
    let gallery = resolve_gallery(Ok(body), DEFAULT_PAGE_SIZE);
    let cards = gallery.cards();
    assert_eq!(cards[0].title, "notes_app");
    assert_eq!(cards[0].description, DEFAULT_DESCRIPTION);
    assert!(cards[0].tag.is_none());
    assert_eq!(cards[0].demo_url.as_deref(), Some("https://notes.example.com"));
}

#[test]
fn unknown_language_uses_neutral_color() {
    let body = json!([{
        "name": "kernel",
        "language": "Rust",
        "html_url": "https://github.com/grazisou00/kernel"
    }])
    .to_string();
    let cards = resolve_gallery(Ok(body), DEFAULT_PAGE_SIZE).cards();
    let tag = cards[0].tag.as_ref().expect("language tag");
    assert_eq!(tag.label, "Rust");
    assert_eq!(tag.color, NEUTRAL_LANGUAGE_COLOR);
}
