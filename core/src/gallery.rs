use serde_json::Value;
use thiserror::Error;

use crate::project::{fallback_projects, ProjectCard, ProjectRecord, RemoteRepo};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("failed to read response body: {0}")]
    Body(String),
    #[error("response is not valid json: {0}")]
    InvalidJson(String),
    #[error("response is not a list")]
    NotAList,
    #[error("listing entry {index} is malformed: {reason}")]
    MalformedRecord { index: usize, reason: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GallerySource {
    Live,
    Fallback,
}

/// Records chosen for display, with the reason the live data was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gallery {
    pub source: GallerySource,
    pub records: Vec<ProjectRecord>,
    pub error: Option<GalleryError>,
}

impl Gallery {
    pub fn cards(&self) -> Vec<ProjectCard> {
        self.records.iter().map(ProjectCard::from_record).collect()
    }

    fn fallback(error: GalleryError) -> Self {
        Self {
            source: GallerySource::Fallback,
            records: fallback_projects(),
            error: Some(error),
        }
    }
}

/// Parses a listing body. An empty list is valid; anything that is not a
/// list of well-formed entries is an error.
pub fn parse_listing(body: &str, page_size: usize) -> Result<Vec<ProjectRecord>, GalleryError> {
    let value: Value =
        serde_json::from_str(body).map_err(|err| GalleryError::InvalidJson(err.to_string()))?;
    let Value::Array(entries) = value else {
        return Err(GalleryError::NotAList);
    };
    entries
        .into_iter()
        .take(page_size)
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value::<RemoteRepo>(entry)
                .map(ProjectRecord::from)
                .map_err(|err| GalleryError::MalformedRecord {
                    index,
                    reason: err.to_string(),
                })
        })
        .collect()
}

/// Picks live records when the fetch and parse succeed, fallback otherwise.
pub fn resolve_gallery(fetched: Result<String, GalleryError>, page_size: usize) -> Gallery {
    match fetched.and_then(|body| parse_listing(&body, page_size)) {
        Ok(records) => Gallery {
            source: GallerySource::Live,
            records,
            error: None,
        },
        Err(err) => Gallery::fallback(err),
    }
}
