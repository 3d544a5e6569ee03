use trailer_search::media::{MediaItem, MediaType};
use trailer_search::provider::Provider;
use trailer_search::providers::online_search::{build, OnlineSearchProvider, SearchConfig};

fn all_sites(extra: &str) -> SearchConfig {
    SearchConfig {
        youtube_movie_template: "%title% (%year%)".into(),
        extra_sites: extra.into(),
        ..SearchConfig::default()
    }
}

fn labels(entries: &[trailer_search::entry::SearchEntry<'_>]) -> Vec<String> {
    entries.iter().map(|e| e.label.clone()).collect()
}

#[test]
fn movie_gets_every_site_in_order() {
    let item = MediaItem::movie("Foo", 2000);
    let entries = build(&item, &all_sites("Trailer Addict|Vimeo"));
    assert_eq!(
        labels(&entries),
        vec![
            "YouTube Trailers",
            "iTunes Trailers",
            "IMDb Trailers",
            "Trailer Addict",
            "Vimeo"
        ]
    );
    assert_eq!(entries[0].url, "site:YouTube|search:Foo (2000)|return:Locked");
    assert_eq!(entries[1].url, "site:iTunes Movie Trailers|search:Foo|return:Locked");
    assert_eq!(entries[2].url, "site:IMDb Movie Trailers|search:Foo|return:Locked");
    assert_eq!(entries[3].url, "site:Trailer Addict|search:Foo|return:Locked");
    assert!(entries.iter().all(|e| e.is_search_item && e.sublabel == "Search"));
    assert!(entries.iter().all(|e| std::ptr::eq(e.media, &item)));
}

#[test]
fn empty_title_yields_nothing() {
    for media_type in [
        MediaType::Movie,
        MediaType::Show,
        MediaType::Season,
        MediaType::Episode,
    ] {
        let item = MediaItem::new(media_type, "");
        assert!(build(&item, &all_sites("A|B")).is_empty());
    }
}

#[test]
fn show_skips_itunes() {
    let item = MediaItem::show("Lost", 2004);
    let entries = build(&item, &all_sites("A"));
    assert_eq!(labels(&entries), vec!["YouTube Trailers", "IMDb Trailers", "A"]);
}

#[test]
fn season_and_episode_only_get_youtube() {
    let season = MediaItem::season("Lost", 2);
    let episode = MediaItem::episode("Lost", 2, 3);
    assert_eq!(labels(&build(&season, &all_sites("A"))), vec!["YouTube Trailers"]);
    assert_eq!(labels(&build(&episode, &all_sites("A"))), vec!["YouTube Trailers"]);
}

#[test]
fn unknown_type_gets_empty_youtube_query() {
    let item = MediaItem::new(MediaType::Unknown, "Foo");
    let entries = build(&item, &all_sites("A"));
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].url, "site:YouTube|search:|return:Locked");
}

#[test]
fn imdb_prefers_id_over_title() {
    let mut item = MediaItem::movie("Foo", 2000);
    item.imdb_id = Some("tt0123456".into());
    let entries = build(&item, &all_sites(""));
    assert_eq!(entries[2].url, "site:IMDb Movie Trailers|search:tt0123456|return:Locked");

    item.imdb_id = Some(String::new());
    let entries = build(&item, &all_sites(""));
    assert_eq!(entries[2].url, "site:IMDb Movie Trailers|search:Foo|return:Locked");
}

#[test]
fn custom_sites_are_trimmed_and_blanks_skipped() {
    let config = SearchConfig {
        youtube_enabled: false,
        itunes_enabled: false,
        imdb_enabled: false,
        extra_sites: "  A | |B|C  ".into(),
        ..SearchConfig::default()
    };
    let item = MediaItem::movie("X", 1999);
    let entries = build(&item, &config);
    assert_eq!(labels(&entries), vec!["A", "B", "C"]);
    assert_eq!(entries[0].url, "site:A|search:X|return:Locked");
    assert_eq!(entries[1].url, "site:B|search:X|return:Locked");
    assert_eq!(entries[2].url, "site:C|search:X|return:Locked");
}

#[test]
fn disabled_sites_are_left_out() {
    let config = SearchConfig {
        youtube_enabled: false,
        imdb_enabled: false,
        ..SearchConfig::default()
    };
    let item = MediaItem::movie("Foo", 2000);
    assert_eq!(labels(&build(&item, &config)), vec!["iTunes Trailers"]);
}

#[test]
fn labels_come_from_config() {
    let mut config = SearchConfig::default();
    config.labels.search = "Suchen".into();
    config.labels.youtube_trailers = "YouTube-Trailer".into();
    let item = MediaItem::movie("Foo", 2000);
    let entries = build(&item, &config);
    assert_eq!(entries[0].label, "YouTube-Trailer");
    assert!(entries.iter().all(|e| e.sublabel == "Suchen"));
}

#[test]
fn provider_applies_settings_value() {
    let mut provider = OnlineSearchProvider::default();
    provider.apply_settings(&serde_json::json!({
        "itunes_enabled": false,
        "imdb_enabled": false,
        "youtube_movie_template": "%title% trailer"
    }));
    let item = MediaItem::movie("Foo", 2000);
    let results = provider.search(&item);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].url, "site:YouTube|search:Foo trailer|return:Locked");
}

#[test]
fn provider_uses_given_config() {
    let provider = OnlineSearchProvider::new(SearchConfig {
        youtube_enabled: false,
        ..SearchConfig::default()
    });
    let item = MediaItem::movie("Foo", 2000);
    let results = provider.search(&item);
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].label, "iTunes Trailers");
}

#[test]
fn provider_keeps_config_on_invalid_settings() {
    let mut provider = OnlineSearchProvider::default();
    provider.apply_settings(&serde_json::json!({ "youtube_enabled": "yes" }));
    assert_eq!(provider.config(), &SearchConfig::default());
}

#[test]
fn provider_metadata() {
    let provider = OnlineSearchProvider::default();
    assert_eq!(provider.name(), "online_search");
    assert_eq!(provider.description(), "OnlineVideos Trailer Search Provider");
    assert!(!provider.is_local());
    let defaults = provider.default_settings().unwrap();
    assert_eq!(defaults["youtube_enabled"], serde_json::json!(true));
}
