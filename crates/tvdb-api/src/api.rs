//! `TvdbApi` trait definition.
#![allow(clippy::future_not_send)]

use crate::error::Result;
use crate::options::RequestOptions;
use crate::types::{
    Actor, Episode, Language, Series, SeriesAll, SeriesEpisodesSummary, SeriesImage, Update,
};

/// TheTVDB API trait.
///
/// Abstracts API operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
///
/// Every method runs the full request pipeline: lazy token login,
/// transparent pagination (unless disabled through
/// [`RequestOptions::get_all_pages`]), and error classification.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(TvdbApi: Send)]
pub trait LocalTvdbApi {
    /// Fetches all languages the API supports.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or the login exchange fails.
    async fn get_languages(&self, options: Option<&RequestOptions>) -> Result<Vec<Language>>;

    /// Fetches a single episode by its episode ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the episode does not
    /// exist.
    async fn get_episode_by_id(
        &self,
        episode_id: u32,
        options: Option<&RequestOptions>,
    ) -> Result<Episode>;

    /// Fetches all episodes of a series, following pagination.
    ///
    /// With query parameters in `options` the filtered
    /// `series/{id}/episodes/query` endpoint is used instead of the plain
    /// listing.
    ///
    /// # Errors
    ///
    /// Returns an error if any page request fails.
    async fn get_episodes_by_series_id(
        &self,
        series_id: u32,
        options: Option<&RequestOptions>,
    ) -> Result<Vec<Episode>>;

    /// Fetches the aired/DVD episode and season counts of a series.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the series does not
    /// exist.
    async fn get_episodes_summary_by_series_id(
        &self,
        series_id: u32,
    ) -> Result<SeriesEpisodesSummary>;

    /// Fetches a series record by its TheTVDB ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the series does not
    /// exist.
    async fn get_series_by_id(
        &self,
        series_id: u32,
        options: Option<&RequestOptions>,
    ) -> Result<Series>;

    /// Fetches the episodes of a series that first aired on a given date
    /// (`YYYY-MM-DD`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or no episode aired on the
    /// date.
    async fn get_episodes_by_air_date(
        &self,
        series_id: u32,
        air_date: &str,
        options: Option<&RequestOptions>,
    ) -> Result<Vec<Episode>>;

    /// Searches series by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or nothing matches.
    async fn get_series_by_name(
        &self,
        name: &str,
        options: Option<&RequestOptions>,
    ) -> Result<Vec<Series>>;

    /// Fetches the actors of a series.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the series does not
    /// exist.
    async fn get_actors(
        &self,
        series_id: u32,
        options: Option<&RequestOptions>,
    ) -> Result<Vec<Actor>>;

    /// Searches series by IMDb ID (`"tt..."`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or nothing matches.
    async fn get_series_by_imdb_id(
        &self,
        imdb_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<Vec<Series>>;

    /// Searches series by Zap2it ID (`"EP..."`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or nothing matches.
    async fn get_series_by_zap2it_id(
        &self,
        zap2it_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<Vec<Series>>;

    /// Fetches the banner image path of a series, if it has one.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the series does not
    /// exist.
    async fn get_series_banner(
        &self,
        series_id: u32,
        options: Option<&RequestOptions>,
    ) -> Result<Option<String>>;

    /// Fetches artwork records of a series, optionally restricted to one
    /// image kind (`"poster"`, `"season"`, `"fanart"`, ...).
    ///
    /// With `key_type` set to `None` the filter is taken from the query
    /// parameters in `options` instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or no artwork matches.
    async fn get_series_images(
        &self,
        series_id: u32,
        key_type: Option<&str>,
        options: Option<&RequestOptions>,
    ) -> Result<Vec<SeriesImage>>;

    /// Fetches the poster artwork of a series.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or no posters exist.
    async fn get_series_posters(
        &self,
        series_id: u32,
        options: Option<&RequestOptions>,
    ) -> Result<Vec<SeriesImage>>;

    /// Fetches the poster artwork of one season of a series.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or no posters exist.
    async fn get_season_posters(
        &self,
        series_id: u32,
        season: u32,
        options: Option<&RequestOptions>,
    ) -> Result<Vec<SeriesImage>>;

    /// Fetches the series updated between `from_time` and `to_time`
    /// (Unix seconds). Without `to_time` the service scans one week
    /// forward from `from_time`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or nothing changed in the
    /// window.
    async fn get_updates(
        &self,
        from_time: u64,
        to_time: Option<u64>,
        options: Option<&RequestOptions>,
    ) -> Result<Vec<Update>>;

    /// Fetches a series and all of its episodes in one call.
    ///
    /// The series record and the episode listing are requested
    /// concurrently.
    ///
    /// # Errors
    ///
    /// Returns an error if either request fails.
    async fn get_series_all_by_id(
        &self,
        series_id: u32,
        options: Option<&RequestOptions>,
    ) -> Result<SeriesAll>;
}
