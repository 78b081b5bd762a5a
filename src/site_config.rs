use folio_core::SiteConfig;

pub(crate) fn load() -> SiteConfig {
    SiteConfig::default().with_overrides(
        option_env!("FOLIO_GITHUB_ACCOUNT").or(option_env!("TRUNK_PUBLIC_FOLIO_GITHUB_ACCOUNT")),
        option_env!("FOLIO_API_BASE").or(option_env!("TRUNK_PUBLIC_FOLIO_API_BASE")),
    )
}
