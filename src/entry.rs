use crate::media::MediaItem;
use serde::Serialize;

/// One search shortcut shown in the trailer menu.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchEntry<'a> {
    pub label: String,
    pub sublabel: String,
    /// `site:<name>|search:<query>|return:Locked`, parsed by the host.
    pub url: String,
    pub is_search_item: bool,
    pub media: &'a MediaItem,
}

impl<'a> SearchEntry<'a> {
    pub fn search(
        label: impl Into<String>,
        sublabel: impl Into<String>,
        url: String,
        media: &'a MediaItem,
    ) -> Self {
        Self {
            label: label.into(),
            sublabel: sublabel.into(),
            url,
            is_search_item: true,
            media,
        }
    }
}

/// Build the directive string the host uses to run a site search.
pub fn search_url(site: &str, query: &str) -> String {
    format!("site:{site}|search:{query}|return:Locked")
}

pub fn entries_to_json(entries: &[SearchEntry<'_>]) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}
