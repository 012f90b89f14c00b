//! Paged response envelope and flattening helpers.

use serde::Deserialize;
use serde_json::Value;

/// `links` block of a paged response.
///
/// `first`, `last`, and `prev` also exist on the wire but nothing in the
/// pipeline reads them.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PageLinks {
    /// Next page number; absent or `null` on the last page.
    #[serde(default)]
    pub(crate) next: Option<u64>,
}

/// The `{ data, links }` wrapper around every response body.
///
/// `data` is an array for collection endpoints and a plain object for
/// single-record endpoints; `links` only appears on paged endpoints.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Envelope {
    /// Response payload.
    #[serde(default)]
    pub(crate) data: Value,
    /// Pagination links, when the endpoint pages.
    #[serde(default)]
    pub(crate) links: Option<PageLinks>,
}

impl Envelope {
    /// Next page number, if the response declares one.
    ///
    /// A `next` of `0` counts as no next page.
    pub(crate) fn next_page(&self) -> Option<u64> {
        self.links
            .as_ref()
            .and_then(|links| links.next)
            .filter(|&next| next != 0)
    }
}

/// Appends one page's `data` payload to the accumulated items.
///
/// Collection pages carry arrays; a non-array, non-null payload is
/// appended as a single element.
pub(crate) fn append_page(items: &mut Vec<Value>, data: Value) {
    match data {
        Value::Array(page) => items.extend(page),
        Value::Null => {}
        other => items.push(other),
    }
}
