use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Show,
    Season,
    Episode,
    /// Any type tag the host sends that we do not know about.
    #[serde(other)]
    Unknown,
}

impl MediaType {
    /// Movies and shows are the only types the trailer sites index directly.
    pub fn is_title_level(self) -> bool {
        matches!(self, MediaType::Movie | MediaType::Show)
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaType::Movie => write!(f, "movie"),
            MediaType::Show => write!(f, "show"),
            MediaType::Season => write!(f, "season"),
            MediaType::Episode => write!(f, "episode"),
            MediaType::Unknown => write!(f, "unknown"),
        }
    }
}

/// A piece of media the user wants trailers for.
///
/// `season`, `episode`, `episode_name` and `air_date` only mean something
/// for seasons and episodes; they are ignored for other types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub media_type: MediaType,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub season: i32,
    #[serde(default)]
    pub episode: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub air_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imdb_id: Option<String>,
}

impl MediaItem {
    pub fn new(media_type: MediaType, title: impl Into<String>) -> Self {
        Self {
            media_type,
            title: title.into(),
            year: 0,
            season: 0,
            episode: 0,
            episode_name: None,
            air_date: None,
            imdb_id: None,
        }
    }

    pub fn movie(title: impl Into<String>, year: i32) -> Self {
        Self {
            year,
            ..Self::new(MediaType::Movie, title)
        }
    }

    pub fn show(title: impl Into<String>, year: i32) -> Self {
        Self {
            year,
            ..Self::new(MediaType::Show, title)
        }
    }

    pub fn season(title: impl Into<String>, season: i32) -> Self {
        Self {
            season,
            ..Self::new(MediaType::Season, title)
        }
    }

    pub fn episode(title: impl Into<String>, season: i32, episode: i32) -> Self {
        Self {
            season,
            episode,
            ..Self::new(MediaType::Episode, title)
        }
    }

    /// IMDb id when one is set and not blank.
    pub fn imdb(&self) -> Option<&str> {
        self.imdb_id.as_deref().filter(|id| !id.is_empty())
    }
}

pub fn load_media_item(path: &str) -> anyhow::Result<MediaItem> {
    let content = std::fs::read_to_string(path)?;
    let item: MediaItem = serde_json::from_str(&content)?;
    Ok(item)
}
