use serde::Deserialize;

use crate::language::LanguageTag;

pub const DEFAULT_DESCRIPTION: &str =
    "Projeto desenvolvido como parte dos estudos em programação.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectRecord {
    pub name: String,
    pub description: String,
    pub language: Option<String>,
    pub source_url: String,
    pub demo_url: Option<String>,
}

/// One element of the repository listing. Unknown fields are ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct RemoteRepo {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub homepage: Option<String>,
}

impl From<RemoteRepo> for ProjectRecord {
    fn from(repo: RemoteRepo) -> Self {
        let description = non_empty(repo.description)
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());
        Self {
            name: repo.name,
            description,
            language: non_empty(repo.language),
            source_url: repo.html_url,
            demo_url: non_empty(repo.homepage),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

struct FallbackEntry {
    name: &'static str,
    description: &'static str,
    language: &'static str,
}

const FALLBACK_OWNER_URL: &str = "https://github.com/grazisou00";

const FALLBACK_PROJECTS: &[FallbackEntry] = &[
    FallbackEntry {
        name: "Formato-de-intercambio-de-dados",
        description: "Projeto focado em formatos de intercâmbio de dados e suas aplicações.",
        language: "Dart",
    },
    FallbackEntry {
        name: "Biblioteca-digital",
        description: "Sistema de biblioteca digital desenvolvido para gerenciamento de livros.",
        language: "Dart",
    },
    FallbackEntry {
        name: "Analise-de-sequencias-de-DNA",
        description: "Ferramenta para análise de sequências de DNA com algoritmos especializados.",
        language: "Dart",
    },
    FallbackEntry {
        name: "API-Nasa",
        description: "Integração com a API da NASA para exibição de dados espaciais.",
        language: "JavaScript",
    },
];

/// The fixed project list shown when the live listing is unavailable.
pub fn fallback_projects() -> Vec<ProjectRecord> {
    FALLBACK_PROJECTS
        .iter()
        .map(|entry| ProjectRecord {
            name: entry.name.to_string(),
            description: entry.description.to_string(),
            language: Some(entry.language.to_string()),
            source_url: format!("{FALLBACK_OWNER_URL}/{}", entry.name),
            demo_url: None,
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectCard {
    pub title: String,
    pub description: String,
    pub tag: Option<LanguageTag>,
    pub source_url: String,
    pub demo_url: Option<String>,
}

impl ProjectCard {
    pub fn from_record(record: &ProjectRecord) -> Self {
        Self {
            title: display_title(&record.name),
            description: record.description.clone(),
            tag: LanguageTag::for_language(record.language.as_deref()),
            source_url: record.source_url.clone(),
            demo_url: record.demo_url.clone(),
        }
    }
}

pub fn display_title(name: &str) -> String {
    name.replace('-', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_replaces_separators() {
        assert_eq!(display_title("API-Nasa"), "API Nasa");
        assert_eq!(display_title("notes_app-v2"), "notes_app v2");
    }

    #[test]
    fn empty_remote_fields_are_dropped() {
        let repo = RemoteRepo {
            name: "site".to_string(),
            description: Some(String::new()),
            language: Some(String::new()),
            html_url: "https://github.com/grazisou00/site".to_string(),
            homepage: Some(String::new()),
        };
        let record = ProjectRecord::from(repo);
        assert_eq!(record.description, DEFAULT_DESCRIPTION);
        assert_eq!(record.language, None);
        assert_eq!(record.demo_url, None);
    }

    #[test]
    fn whitespace_remote_fields_are_kept() {
        let repo = RemoteRepo {
            name: "site".to_string(),
            description: Some("  ".to_string()),
            language: Some(" ".to_string()),
            html_url: "https://github.com/grazisou00/site".to_string(),
            homepage: None,
        };
        let record = ProjectRecord::from(repo);
        assert_eq!(record.description, "  ");
        assert_eq!(record.language.as_deref(), Some(" "));
    }

    #[test]
    fn fallback_links_point_at_owner_repos() {
        let projects = fallback_projects();
        assert_eq!(projects.len(), 4);
        assert_eq!(
            projects[3].source_url,
            "https://github.com/grazisou00/API-Nasa"
        );
        assert!(projects.iter().all(|project| project.demo_url.is_none()));
    }
}
