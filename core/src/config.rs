pub const DEFAULT_ACCOUNT: &str = "grazisou00";
pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_PAGE_SIZE: usize = 6;
pub const DEFAULT_SORT: &str = "updated";
pub const PROFILE_PLACEHOLDER_URL: &str =
    "https://via.placeholder.com/200x200/3182ce/ffffff?text=GS";

/// Static settings for one deployment of the site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub account: String,
    pub api_base: String,
    pub page_size: usize,
    pub sort: String,
    pub profile_placeholder: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            account: DEFAULT_ACCOUNT.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            sort: DEFAULT_SORT.to_string(),
            profile_placeholder: PROFILE_PLACEHOLDER_URL.to_string(),
        }
    }
}

impl SiteConfig {
    /// Overrides the account and API base when the values are non-blank.
    pub fn with_overrides(mut self, account: Option<&str>, api_base: Option<&str>) -> Self {
        if let Some(account) = account.map(str::trim).filter(|value| !value.is_empty()) {
            self.account = account.to_string();
        }
        if let Some(base) = api_base.map(str::trim).filter(|value| !value.is_empty()) {
            self.api_base = normalize_api_base(base);
        }
        self
    }

    pub fn listing_url(&self) -> String {
        format!(
            "{}/users/{}/repos?sort={}&per_page={}",
            self.api_base, self.account, self.sort, self.page_size
        )
    }
}

fn normalize_api_base(raw: &str) -> String {
    raw.trim_end_matches('/').to_string()
}
