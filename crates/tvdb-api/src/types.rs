//! Response types for TheTVDB API v2.
//!
//! Field optionality mirrors the live service rather than the published
//! schema: the API omits or nulls most fields freely, so nearly everything
//! is an `Option`.

use serde::Deserialize;

/// A language supported by the API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    /// Language ID.
    pub id: Option<u32>,
    /// ISO 639-1 abbreviation (`"en"`, `"ja"`, ...), as accepted by the
    /// `Accept-Language` header.
    pub abbreviation: Option<String>,
    /// Name in the language itself.
    pub name: Option<String>,
    /// English name.
    pub english_name: Option<String>,
}

/// A TV series record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    /// TheTVDB series ID.
    pub id: Option<u32>,
    /// Series name in the request language.
    pub series_name: Option<String>,
    /// URL slug.
    pub slug: Option<String>,
    /// Airing status (`"Continuing"` or `"Ended"`).
    pub status: Option<String>,
    /// First-aired date, `YYYY-MM-DD`.
    pub first_aired: Option<String>,
    /// Network the series airs on.
    pub network: Option<String>,
    /// TheTVDB network ID.
    pub network_id: Option<String>,
    /// Episode runtime in minutes.
    pub runtime: Option<String>,
    /// Genre labels.
    pub genre: Option<Vec<String>>,
    /// Synopsis in the request language.
    pub overview: Option<String>,
    /// Unix time of the last record update.
    pub last_updated: Option<u64>,
    /// Weekday the series airs (`"Monday"`, ...).
    pub airs_day_of_week: Option<String>,
    /// Local air time (`"9:00 PM"`, ...).
    pub airs_time: Option<String>,
    /// Content rating (`"TV-14"`, ...).
    pub rating: Option<String>,
    /// IMDb ID (`"tt..."`).
    pub imdb_id: Option<String>,
    /// Zap2it ID (`"EP..."`).
    pub zap2it_id: Option<String>,
    /// Date the record was added to TheTVDB.
    pub added: Option<String>,
    /// Alternative names.
    pub aliases: Option<Vec<String>>,
    /// Banner image path, relative to the image host.
    pub banner: Option<String>,
    /// Legacy series ID.
    pub series_id: Option<String>,
    /// Community rating, 0 to 10.
    pub site_rating: Option<f64>,
    /// Number of community votes.
    pub site_rating_count: Option<u64>,
}

/// A single episode record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    /// TheTVDB episode ID.
    pub id: Option<u32>,
    /// Episode number across all seasons.
    pub absolute_number: Option<u32>,
    /// Episode number within its aired season.
    pub aired_episode_number: Option<u32>,
    /// Aired season number.
    pub aired_season: Option<u32>,
    /// Season this special airs after.
    pub airs_after_season: Option<u32>,
    /// Episode this special airs before.
    pub airs_before_episode: Option<u32>,
    /// Season this special airs before.
    pub airs_before_season: Option<u32>,
    /// Director names.
    pub directors: Option<Vec<String>>,
    /// DVD chapter number.
    pub dvd_chapter: Option<u32>,
    /// DVD disc ID.
    pub dvd_discid: Option<String>,
    /// Episode number in DVD order; fractional for some specials.
    pub dvd_episode_number: Option<f64>,
    /// Season number in DVD order.
    pub dvd_season: Option<u32>,
    /// Episode name in the request language.
    pub episode_name: Option<String>,
    /// Still-frame image path.
    pub filename: Option<String>,
    /// First-aired date, `YYYY-MM-DD`.
    pub first_aired: Option<String>,
    /// Guest star names.
    pub guest_stars: Option<Vec<String>>,
    /// IMDb ID of the episode.
    pub imdb_id: Option<String>,
    /// Unix time of the last record update.
    pub last_updated: Option<u64>,
    /// User ID of the last editor.
    pub last_updated_by: Option<u32>,
    /// Synopsis in the request language.
    pub overview: Option<String>,
    /// Production code.
    pub production_code: Option<String>,
    /// ID of the series the episode belongs to.
    pub series_id: Option<u32>,
    /// External site URL, if any.
    pub show_url: Option<String>,
    /// Author of the still frame.
    pub thumb_author: Option<u32>,
    /// Date the still frame was added.
    pub thumb_added: Option<String>,
    /// Still frame height in pixels.
    pub thumb_height: Option<String>,
    /// Still frame width in pixels.
    pub thumb_width: Option<String>,
    /// Writer names.
    pub writers: Option<Vec<String>>,
}

/// Aired and DVD episode counts for a series.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesEpisodesSummary {
    /// Number of aired episodes.
    pub aired_episodes: Option<String>,
    /// Aired season numbers.
    pub aired_seasons: Option<Vec<String>>,
    /// Number of episodes in DVD order.
    pub dvd_episodes: Option<String>,
    /// Season numbers in DVD order.
    pub dvd_seasons: Option<Vec<String>>,
}

/// An actor attached to a series.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    /// TheTVDB actor ID.
    pub id: Option<u32>,
    /// Photo path, empty when none exists.
    pub image: Option<String>,
    /// Date the photo was added.
    pub image_added: Option<String>,
    /// User ID of the photo's uploader.
    pub image_author: Option<u32>,
    /// Date of the last record update.
    pub last_updated: Option<String>,
    /// Actor name.
    pub name: Option<String>,
    /// Role played in the series.
    pub role: Option<String>,
    /// ID of the series the credit belongs to.
    pub series_id: Option<u32>,
    /// Display ordering among the series' actors.
    pub sort_order: Option<u32>,
}

/// Community rating block of an image record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesImageRatings {
    /// Average rating, 0 to 10.
    pub average: Option<f64>,
    /// Number of votes.
    pub count: Option<u32>,
}

/// An artwork record for a series.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesImage {
    /// TheTVDB image ID.
    pub id: Option<u32>,
    /// Image kind (`"poster"`, `"season"`, `"fanart"`, ...).
    pub key_type: Option<String>,
    /// Kind-specific subkey, e.g. the season number for season posters.
    pub sub_key: Option<String>,
    /// Image path, relative to the image host.
    pub file_name: Option<String>,
    /// Language the artwork is tagged with.
    pub language_id: Option<u32>,
    /// Image resolution (`"680x1000"`, ...).
    pub resolution: Option<String>,
    /// Community rating of the artwork.
    pub ratings_info: Option<SeriesImageRatings>,
    /// Thumbnail path.
    pub thumbnail: Option<String>,
}

/// A series touched during an update window.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Update {
    /// TheTVDB series ID.
    pub id: Option<u32>,
    /// Unix time the series was last updated.
    pub last_updated: Option<u64>,
}

/// A series joined with its full episode list.
#[derive(Debug, Clone)]
pub struct SeriesAll {
    /// The series record.
    pub series: Series,
    /// Every episode of the series, across all pages.
    pub episodes: Vec<Episode>,
}

/// `filter` endpoint payload when only the banner key is requested.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SeriesFilter {
    /// Banner image path.
    #[serde(default)]
    pub(crate) banner: Option<String>,
}
