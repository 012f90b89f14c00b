//! Async client library for TheTVDB JSON API v2.
//!
//! The client exchanges an API key for a bearer token on the first
//! request, reuses that token for every later request, follows `links.next`
//! pagination transparently, and turns the service's in-band `Error`
//! field and non-JSON gateway pages into typed errors.
//!
//! ```no_run
//! use tvdb_api::{LocalTvdbApi, TvdbClient};
//!
//! # async fn run() -> tvdb_api::Result<()> {
//! let client = TvdbClient::new("YOUR-API-KEY")?;
//!
//! let results = client.get_series_by_name("Breaking Bad", None).await?;
//! if let Some(id) = results.first().and_then(|series| series.id) {
//!     let episodes = client.get_episodes_by_series_id(id, None).await?;
//!     println!("{} episodes", episodes.len());
//! }
//! # Ok(())
//! # }
//! ```

mod api;
mod auth;
mod client;
mod error;
mod options;
mod page;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalTvdbApi, TvdbApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{TvdbClient, TvdbClientBuilder};
#[allow(clippy::module_name_repetitions)]
pub use error::{ResponseMeta, Result, TvdbError};
pub use options::RequestOptions;
pub use types::{
    Actor, Episode, Language, Series, SeriesAll, SeriesEpisodesSummary, SeriesImage,
    SeriesImageRatings, Update,
};
