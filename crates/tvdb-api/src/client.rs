//! `TvdbClient` - TheTVDB API client implementation.

use reqwest::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::instrument;
use url::Url;

use crate::api::LocalTvdbApi;
use crate::auth::{LoginRequest, LoginResponse, TokenCell};
use crate::error::{Result, TvdbError, classify};
use crate::options::RequestOptions;
use crate::page::{Envelope, append_page};
use crate::types::{
    Actor, Episode, Language, Series, SeriesAll, SeriesEpisodesSummary, SeriesFilter, SeriesImage,
    Update,
};

/// Default base URL for TheTVDB API v2.
const DEFAULT_BASE_URL: &str = "https://api.thetvdb.com/";

/// `Accept` header value pinning the API version.
const AV_HEADER: &str = "application/vnd.thetvdb.v2.1.1";

/// Default `Accept-Language` when the builder does not set one.
const DEFAULT_LANGUAGE: &str = "en";

/// Default User-Agent.
const DEFAULT_USER_AGENT: &str = concat!(
    "tvdb-api/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/tvdb-rs/tvdb-api)"
);

/// TheTVDB API client.
///
/// One client holds one API key, one default language, and one lazily
/// acquired bearer token. All request methods take `&self`, so a client
/// can be shared behind an `Arc` and drive concurrent requests that reuse
/// the same token.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TvdbClient {
    /// HTTP client.
    http_client: Client,
    /// Base URL for API requests.
    base_url: Url,
    /// Account API key, exchanged for a token on first use.
    api_key: String,
    /// Default `Accept-Language` for requests without an override.
    language: String,
    /// Memoized bearer token.
    token: TokenCell,
}

/// Builder for `TvdbClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TvdbClientBuilder {
    api_key: Option<String>,
    language: Option<String>,
    base_url: Option<Url>,
    user_agent: Option<String>,
}

impl TvdbClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            api_key: None,
            language: None,
            base_url: None,
            user_agent: None,
        }
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the default `Accept-Language` (default: `"en"`).
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Overrides the User-Agent (default: crate name and version).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Builds the client. No network I/O happens here; the token is
    /// acquired on the first request.
    ///
    /// # Errors
    ///
    /// - `api_key` is not set or empty.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<TvdbClient> {
        let api_key = match self.api_key {
            Some(key) if !key.is_empty() => key,
            _ => return Err(TvdbError::MissingApiKey),
        };

        let base_url = if let Some(url) = self.base_url {
            url
        } else {
            Url::parse(DEFAULT_BASE_URL)?
        };

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| String::from(DEFAULT_USER_AGENT));

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .build()?;

        Ok(TvdbClient {
            http_client,
            base_url,
            api_key,
            language: self
                .language
                .unwrap_or_else(|| String::from(DEFAULT_LANGUAGE)),
            token: TokenCell::default(),
        })
    }
}

impl TvdbClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> TvdbClientBuilder {
        TvdbClientBuilder::new()
    }

    /// Creates a client with the default language and base URL.
    ///
    /// # Errors
    ///
    /// - `api_key` is empty.
    /// - `reqwest::Client` build fails.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// Default `Accept-Language` of this client.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Replaces the default `Accept-Language`.
    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    /// Exchanges the current token for a fresh one.
    ///
    /// Sends `GET refresh_token` with the cached token and caches the
    /// replacement. Without a cached token this performs the initial
    /// login instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the exchange fails; the cached token is left
    /// unchanged in that case.
    #[instrument(skip_all)]
    pub async fn refresh_token(&self) -> Result<String> {
        let Some(current) = self.token.get().await else {
            return self.token().await;
        };

        let url = self.base_url.join("refresh_token")?;
        tracing::debug!(url = %url, "token refresh request");

        let response = self
            .http_client
            .get(url.clone())
            .header(ACCEPT, AV_HEADER)
            .bearer_auth(current)
            .send()
            .await?;

        let token = Self::token_from_body(classify(response).await?, &url)?;
        self.token.set(token.clone()).await;
        Ok(token)
    }

    /// Sends a GET request through the full pipeline: token, error
    /// classification, pagination, and deserialization of the combined
    /// `data` payload.
    ///
    /// Endpoints without a dedicated [`LocalTvdbApi`] method can be
    /// reached directly through this.
    ///
    /// # Errors
    ///
    /// - The login exchange or the transport fails.
    /// - The service reports an error for any page.
    /// - The payload does not deserialize into `T`.
    #[instrument(skip_all)]
    pub async fn send_request<T: DeserializeOwned>(
        &self,
        path: &str,
        options: Option<&RequestOptions>,
    ) -> Result<T> {
        let options = options.cloned().unwrap_or_default();
        let url = self.base_url.join(path)?;

        let first = self.request_page(&url, &options).await?;
        let data = if options.get_all_pages {
            self.follow_pages(&url, &options, first).await?
        } else {
            first.data
        };

        serde_json::from_value(data).map_err(|source| TvdbError::Decode { url, source })
    }

    /// Returns the bearer token, running the login exchange on first use.
    ///
    /// Concurrent callers share a single in-flight exchange; a failed
    /// exchange is not cached.
    async fn token(&self) -> Result<String> {
        self.token.get_or_try_init(|| self.login()).await
    }

    /// Performs the login exchange: POST the API key, receive a token.
    async fn login(&self) -> Result<String> {
        let url = self.base_url.join("login")?;
        tracing::debug!(url = %url, "login request");

        let response = self
            .http_client
            .post(url.clone())
            .header(ACCEPT, AV_HEADER)
            .json(&LoginRequest {
                apikey: &self.api_key,
            })
            .send()
            .await?;

        Self::token_from_body(classify(response).await?, &url)
    }

    /// Extracts the token from a login or refresh response body.
    fn token_from_body(body: Value, url: &Url) -> Result<String> {
        let response: LoginResponse =
            serde_json::from_value(body).map_err(|source| TvdbError::Decode {
                url: url.clone(),
                source,
            })?;
        Ok(response.token)
    }

    /// Issues one authenticated GET and classifies the response.
    ///
    /// Every page of a paginated request runs through here, token and
    /// classifier included.
    async fn request_page(&self, url: &Url, options: &RequestOptions) -> Result<Envelope> {
        let mut headers = self.request_headers(options)?;

        let token = self.token().await?;
        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| TvdbError::InvalidHeader(String::from("Authorization")))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let request = self
            .http_client
            .get(url.clone())
            .query(&options.query)
            .headers(headers)
            .build()?;

        tracing::debug!(url = %request.url(), "TheTVDB API request");

        let response = self.http_client.execute(request).await?;
        tracing::trace!(status = %response.status(), "TheTVDB API response");

        let body = classify(response).await?;
        serde_json::from_value(body).map_err(|source| TvdbError::Decode {
            url: url.clone(),
            source,
        })
    }

    /// Builds the outgoing headers: fixed `Accept`, effective
    /// `Accept-Language`, then caller headers, which win on collisions.
    fn request_headers(&self, options: &RequestOptions) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(AV_HEADER));

        let language = options.effective_language(&self.language);
        let value = HeaderValue::from_str(language)
            .map_err(|_| TvdbError::InvalidHeader(String::from("Accept-Language")))?;
        headers.insert(ACCEPT_LANGUAGE, value);

        for (name, value) in &options.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| TvdbError::InvalidHeader(name.clone()))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|_| TvdbError::InvalidHeader(name.clone()))?;
            headers.insert(header_name, header_value);
        }

        Ok(headers)
    }

    /// Follows `links.next` until exhausted, concatenating page payloads
    /// in page order.
    async fn follow_pages(
        &self,
        url: &Url,
        options: &RequestOptions,
        first: Envelope,
    ) -> Result<Value> {
        let Some(mut next) = first.next_page() else {
            return Ok(first.data);
        };

        let mut items = Vec::new();
        append_page(&mut items, first.data);

        loop {
            tracing::debug!(page = next, "following next page");
            let envelope = self.request_page(url, &options.with_page(next)).await?;
            let further = envelope.next_page();
            append_page(&mut items, envelope.data);

            match further {
                Some(page) if page > next => next = page,
                Some(page) => {
                    tracing::warn!(page, "next page did not advance, stopping");
                    break;
                }
                None => break,
            }
        }

        Ok(Value::Array(items))
    }
}

impl LocalTvdbApi for TvdbClient {
    #[instrument(skip_all)]
    async fn get_languages(&self, options: Option<&RequestOptions>) -> Result<Vec<Language>> {
        self.send_request("languages", options).await
    }

    #[instrument(skip_all)]
    async fn get_episode_by_id(
        &self,
        episode_id: u32,
        options: Option<&RequestOptions>,
    ) -> Result<Episode> {
        self.send_request(&format!("episodes/{episode_id}"), options)
            .await
    }

    #[instrument(skip_all)]
    async fn get_episodes_by_series_id(
        &self,
        series_id: u32,
        options: Option<&RequestOptions>,
    ) -> Result<Vec<Episode>> {
        let path = if options.is_some_and(|options| !options.query.is_empty()) {
            format!("series/{series_id}/episodes/query")
        } else {
            format!("series/{series_id}/episodes")
        };
        self.send_request(&path, options).await
    }

    #[instrument(skip_all)]
    async fn get_episodes_summary_by_series_id(
        &self,
        series_id: u32,
    ) -> Result<SeriesEpisodesSummary> {
        self.send_request(&format!("series/{series_id}/episodes/summary"), None)
            .await
    }

    #[instrument(skip_all)]
    async fn get_series_by_id(
        &self,
        series_id: u32,
        options: Option<&RequestOptions>,
    ) -> Result<Series> {
        self.send_request(&format!("series/{series_id}"), options)
            .await
    }

    #[instrument(skip_all)]
    async fn get_episodes_by_air_date(
        &self,
        series_id: u32,
        air_date: &str,
        options: Option<&RequestOptions>,
    ) -> Result<Vec<Episode>> {
        let mut options = options.cloned().unwrap_or_default();
        options
            .query
            .insert(String::from("firstAired"), String::from(air_date));
        self.get_episodes_by_series_id(series_id, Some(&options))
            .await
    }

    #[instrument(skip_all)]
    async fn get_series_by_name(
        &self,
        name: &str,
        options: Option<&RequestOptions>,
    ) -> Result<Vec<Series>> {
        let mut options = options.cloned().unwrap_or_default();
        options
            .query
            .insert(String::from("name"), String::from(name));
        self.send_request("search/series", Some(&options)).await
    }

    #[instrument(skip_all)]
    async fn get_actors(
        &self,
        series_id: u32,
        options: Option<&RequestOptions>,
    ) -> Result<Vec<Actor>> {
        self.send_request(&format!("series/{series_id}/actors"), options)
            .await
    }

    #[instrument(skip_all)]
    async fn get_series_by_imdb_id(
        &self,
        imdb_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<Vec<Series>> {
        let mut options = options.cloned().unwrap_or_default();
        options
            .query
            .insert(String::from("imdbId"), String::from(imdb_id));
        self.send_request("search/series", Some(&options)).await
    }

    #[instrument(skip_all)]
    async fn get_series_by_zap2it_id(
        &self,
        zap2it_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<Vec<Series>> {
        let mut options = options.cloned().unwrap_or_default();
        options
            .query
            .insert(String::from("zap2itId"), String::from(zap2it_id));
        self.send_request("search/series", Some(&options)).await
    }

    #[instrument(skip_all)]
    async fn get_series_banner(
        &self,
        series_id: u32,
        options: Option<&RequestOptions>,
    ) -> Result<Option<String>> {
        let mut options = options.cloned().unwrap_or_default();
        options
            .query
            .insert(String::from("keys"), String::from("banner"));
        let filter: SeriesFilter = self
            .send_request(&format!("series/{series_id}/filter"), Some(&options))
            .await?;
        Ok(filter.banner)
    }

    #[instrument(skip_all)]
    async fn get_series_images(
        &self,
        series_id: u32,
        key_type: Option<&str>,
        options: Option<&RequestOptions>,
    ) -> Result<Vec<SeriesImage>> {
        let mut options = options.cloned().unwrap_or_default();
        if let Some(key_type) = key_type {
            options
                .query
                .insert(String::from("keyType"), String::from(key_type));
        }
        self.send_request(&format!("series/{series_id}/images/query"), Some(&options))
            .await
    }

    #[instrument(skip_all)]
    async fn get_series_posters(
        &self,
        series_id: u32,
        options: Option<&RequestOptions>,
    ) -> Result<Vec<SeriesImage>> {
        self.get_series_images(series_id, Some("poster"), options)
            .await
    }

    #[instrument(skip_all)]
    async fn get_season_posters(
        &self,
        series_id: u32,
        season: u32,
        options: Option<&RequestOptions>,
    ) -> Result<Vec<SeriesImage>> {
        let mut options = options.cloned().unwrap_or_default();
        options
            .query
            .insert(String::from("keyType"), String::from("season"));
        options
            .query
            .insert(String::from("subKey"), season.to_string());
        self.get_series_images(series_id, None, Some(&options)).await
    }

    #[instrument(skip_all)]
    async fn get_updates(
        &self,
        from_time: u64,
        to_time: Option<u64>,
        options: Option<&RequestOptions>,
    ) -> Result<Vec<Update>> {
        let mut options = options.cloned().unwrap_or_default();
        options
            .query
            .insert(String::from("fromTime"), from_time.to_string());
        if let Some(to_time) = to_time {
            options
                .query
                .insert(String::from("toTime"), to_time.to_string());
        }
        self.send_request("updated/query", Some(&options)).await
    }

    #[instrument(skip_all)]
    async fn get_series_all_by_id(
        &self,
        series_id: u32,
        options: Option<&RequestOptions>,
    ) -> Result<SeriesAll> {
        let (series, episodes) = tokio::try_join!(
            self.get_series_by_id(series_id, options),
            self.get_episodes_by_series_id(series_id, options),
        )?;
        Ok(SeriesAll { series, episodes })
    }
}
