//! Per-request options for the request pipeline.

use std::collections::BTreeMap;

/// Per-request configuration, layered over the client defaults.
///
/// Callers hand these in by reference; the pipeline clones and never
/// mutates the caller's value. Build with struct update syntax:
///
/// ```
/// use tvdb_api::RequestOptions;
///
/// let options = RequestOptions {
///     get_all_pages: false,
///     ..RequestOptions::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct RequestOptions {
    /// Query string parameters, merged into the request URL.
    pub query: BTreeMap<String, String>,
    /// Extra request headers; on a name collision these win over the
    /// defaults the client would send.
    pub headers: BTreeMap<String, String>,
    /// Follow `links.next` until exhausted and flatten the pages.
    pub get_all_pages: bool,
    /// `Accept-Language` override for this request only.
    pub language: Option<String>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            query: BTreeMap::new(),
            headers: BTreeMap::new(),
            get_all_pages: true,
            language: None,
        }
    }
}

impl RequestOptions {
    /// Effective `Accept-Language`: the per-request override, or the
    /// client default.
    pub(crate) fn effective_language<'a>(&'a self, default: &'a str) -> &'a str {
        self.language.as_deref().unwrap_or(default)
    }

    /// Options for a follow-up page: same query with `page` set to `next`.
    pub(crate) fn with_page(&self, next: u64) -> Self {
        let mut options = self.clone();
        options.query.insert(String::from("page"), next.to_string());
        options
    }
}
