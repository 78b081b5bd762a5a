pub mod config;
pub mod editor;
pub mod effects;
pub mod gallery;
pub mod language;
pub mod project;
pub mod reveal;
pub mod store;
pub mod typewriter;
pub mod viewport;

pub use config::SiteConfig;
pub use editor::{is_placeholder, saved_text, EditOutcome, EditSession};
pub use gallery::{parse_listing, resolve_gallery, Gallery, GalleryError, GallerySource};
pub use language::{language_color, LanguageTag, NEUTRAL_LANGUAGE_COLOR};
pub use project::{fallback_projects, ProjectCard, ProjectRecord, RemoteRepo};
pub use store::{KeyValueStore, MemoryStore, StoreError};
pub use typewriter::Typewriter;
pub use viewport::{progress_width, ProgressBar, Viewport};
