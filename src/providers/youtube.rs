use crate::media::{MediaItem, MediaType};
use crate::providers::online_search::SearchConfig;

/// Pick the YouTube query template configured for the item's media type.
///
/// Episodes from season 0 are specials and get their own template. Unknown
/// media types have no template and resolve to an empty query.
pub fn youtube_template<'c>(item: &MediaItem, config: &'c SearchConfig) -> &'c str {
    match item.media_type {
        MediaType::Movie => &config.youtube_movie_template,
        MediaType::Show => &config.youtube_show_template,
        MediaType::Season => &config.youtube_season_template,
        MediaType::Episode if item.season == 0 => &config.youtube_episode_special_template,
        MediaType::Episode => &config.youtube_episode_template,
        MediaType::Unknown => "",
    }
}

/// Resolve the YouTube search query for `item`.
///
/// Placeholders are replaced literally and in a fixed order, so text
/// substituted early (a title containing `%year%`, say) is seen by the later
/// replacements. Placeholders that do not apply to the media type are left
/// as they are.
pub fn resolve_youtube_query(item: &MediaItem, config: &SearchConfig) -> String {
    let mut query = youtube_template(item, config)
        .replace("%title%", &item.title)
        .replace("%year%", &item.year.to_string())
        .replace("%airdate%", item.air_date.as_deref().unwrap_or_default());

    if matches!(item.media_type, MediaType::Season | MediaType::Episode) {
        query = query.replace("%season%", &item.season.to_string());
        // must run after %season% so a season of 0 shows up here
        query = query.replace("season 0", "Specials");
    }
    if item.media_type == MediaType::Episode {
        query = query
            .replace("%episode%", &item.episode.to_string())
            .replace("%episodename%", item.episode_name.as_deref().unwrap_or_default());
    }
    query
}
