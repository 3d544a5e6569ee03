use crate::entry::{search_url, SearchEntry};
use crate::media::{MediaItem, MediaType};
use crate::provider::Provider;
use crate::providers::youtube::resolve_youtube_query;
use serde::{Deserialize, Serialize};

const YOUTUBE_SITE: &str = "YouTube";
const ITUNES_SITE: &str = "iTunes Movie Trailers";
const IMDB_SITE: &str = "IMDb Movie Trailers";

/// Display strings for the entries. Defaults are English.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub search: String,
    pub youtube_trailers: String,
    pub itunes_trailers: String,
    pub imdb_trailers: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            search: "Search".into(),
            youtube_trailers: "YouTube Trailers".into(),
            itunes_trailers: "iTunes Trailers".into(),
            imdb_trailers: "IMDb Trailers".into(),
        }
    }
}

/// Which trailer sites to offer and how to phrase the YouTube query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub youtube_enabled: bool,
    pub itunes_enabled: bool,
    pub imdb_enabled: bool,
    /// Extra site names separated by `|`.
    pub extra_sites: String,
    pub youtube_movie_template: String,
    pub youtube_show_template: String,
    pub youtube_season_template: String,
    pub youtube_episode_template: String,
    pub youtube_episode_special_template: String,
    pub labels: Labels,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            youtube_enabled: true,
            itunes_enabled: true,
            imdb_enabled: true,
            extra_sites: String::new(),
            youtube_movie_template: "%title% %year% trailer".into(),
            youtube_show_template: "%title% trailer".into(),
            youtube_season_template: "%title% season %season% trailer".into(),
            youtube_episode_template: "%title% season %season% episode %episode% trailer".into(),
            youtube_episode_special_template: "%title% %episodename% trailer".into(),
            labels: Labels::default(),
        }
    }
}

impl SearchConfig {
    /// Site names from `extra_sites`, trimmed, blanks dropped, in order.
    pub fn extra_site_names(&self) -> impl Iterator<Item = &str> {
        self.extra_sites
            .split('|')
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Build the ordered search shortcuts for `item`: YouTube, iTunes, IMDb,
/// then each extra site. Entries whose conditions are not met are left out.
pub fn build<'a>(item: &'a MediaItem, config: &SearchConfig) -> Vec<SearchEntry<'a>> {
    let mut entries = Vec::new();
    if item.title.is_empty() {
        tracing::debug!(media_type = %item.media_type, "no title; skipping online search");
        return entries;
    }
    let labels = &config.labels;

    if config.youtube_enabled {
        let query = resolve_youtube_query(item, config);
        entries.push(SearchEntry::search(
            &labels.youtube_trailers,
            &labels.search,
            search_url(YOUTUBE_SITE, &query),
            item,
        ));
    }

    // iTunes only has movies
    if config.itunes_enabled && item.media_type == MediaType::Movie {
        entries.push(SearchEntry::search(
            &labels.itunes_trailers,
            &labels.search,
            search_url(ITUNES_SITE, &item.title),
            item,
        ));
    }

    if config.imdb_enabled && item.media_type.is_title_level() {
        let query = item.imdb().unwrap_or(&item.title);
        entries.push(SearchEntry::search(
            &labels.imdb_trailers,
            &labels.search,
            search_url(IMDB_SITE, query),
            item,
        ));
    }

    if item.media_type.is_title_level() {
        for site in config.extra_site_names() {
            entries.push(SearchEntry::search(
                site,
                &labels.search,
                search_url(site, &item.title),
                item,
            ));
        }
    }

    tracing::debug!(
        title = %item.title,
        media_type = %item.media_type,
        count = entries.len(),
        "built online search entries"
    );
    entries
}

/// Offers trailer searches on the video sites the host application knows.
#[derive(Debug, Default)]
pub struct OnlineSearchProvider {
    config: SearchConfig,
}

impl OnlineSearchProvider {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl Provider for OnlineSearchProvider {
    fn search<'a>(&self, item: &'a MediaItem) -> Vec<SearchEntry<'a>> {
        build(item, &self.config)
    }

    fn name(&self) -> &str {
        "online_search"
    }

    fn description(&self) -> &str {
        "OnlineVideos Trailer Search Provider"
    }

    fn default_settings(&self) -> Option<serde_json::Value> {
        serde_json::to_value(&self.config).ok()
    }

    fn apply_settings(&mut self, value: &serde_json::Value) {
        match serde_json::from_value::<SearchConfig>(value.clone()) {
            Ok(cfg) => self.config = cfg,
            Err(e) => tracing::warn!("invalid online_search settings; keeping previous: {e}"),
        }
    }
}
