//! Client for the remote content API (WordPress REST v2). One outstanding
//! request per call, no retries, no caching; callers that issue overlapping
//! requests must discard stale responses themselves.

use std::fmt;

use reqwest::StatusCode;
use url::Url;

use crate::model::view::{ContentRecord, MediaItem, PostPage, TaxonomyTerm};
use crate::model::wire;

pub const DEFAULT_PER_PAGE: u32 = 10;

// Taxonomies are assumed small enough to fetch in one call.
const TAXONOMY_PER_PAGE: u32 = 100;

#[derive(Debug, thiserror::Error)]
pub enum WpError {
    #[error("content API request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("content API answered {0}")]
    Status(StatusCode),
    #[error(transparent)]
    Normalize(#[from] wire::NormalizeError),
    #[error("content API base URL cannot carry path segments")]
    BadBaseUrl,
}

/// Filters for one posts-page fetch. `embed` asks the remote API to inline
/// featured-media and taxonomy data in the same round trip.
#[derive(Clone, Debug)]
pub struct PostQuery {
    pub page: u32,
    pub per_page: u32,
    pub search: Option<String>,
    pub categories: Vec<u64>,
    pub tags: Vec<u64>,
    pub embed: bool,
}

impl Default for PostQuery {
    fn default() -> Self {
        PostQuery {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            search: None,
            categories: Vec::new(),
            tags: Vec::new(),
            embed: true,
        }
    }
}

#[derive(Clone, Debug)]
pub enum PostRef {
    Id(u64),
    Slug(String),
}

impl fmt::Display for PostRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostRef::Id(id) => write!(f, "{id}"),
            PostRef::Slug(slug) => write!(f, "{slug}"),
        }
    }
}

pub struct WpClient {
    http: reqwest::Client,
    base: Url,
}

impl WpClient {
    /// `base` is the API root, e.g. `https://example.com/wp-json/wp/v2`.
    pub fn new(base: Url) -> Result<Self, WpError> {
        if base.cannot_be_a_base() {
            return Err(WpError::BadBaseUrl);
        }
        Ok(WpClient {
            http: reqwest::Client::new(),
            base,
        })
    }

    fn collection_url(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Fetch one page of posts. Collection-wide counts come from the
    /// `X-WP-TotalPages` / `X-WP-Total` response headers and degrade to 1 / 0
    /// when the headers are missing or unreadable.
    pub async fn fetch_posts(&self, query: &PostQuery) -> Result<PostPage, WpError> {
        let mut params: Vec<(&str, String)> = vec![
            ("page", query.page.to_string()),
            ("per_page", query.per_page.to_string()),
        ];
        if let Some(search) = &query.search {
            params.push(("search", search.clone()));
        }
        if !query.categories.is_empty() {
            params.push(("categories", join_ids(&query.categories)));
        }
        if !query.tags.is_empty() {
            params.push(("tags", join_ids(&query.tags)));
        }
        if query.embed {
            params.push(("_embed", "true".to_string()));
        }

        let response = self
            .http
            .get(self.collection_url(&["posts"]))
            .query(&params)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(WpError::Status(status));
        }

        let total_pages = count_header(&response, "x-wp-totalpages").unwrap_or(1);
        let total = count_header(&response, "x-wp-total").unwrap_or(0);

        let raw: Vec<wire::Post> = response.json().await?;
        tracing::debug!(page = query.page, returned = raw.len(), total, "fetched posts page");

        let posts = raw
            .into_iter()
            .map(wire::Post::normalize)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(PostPage {
            posts,
            total_pages,
            total,
        })
    }

    /// Fetch one post by id or slug, with embedded media and taxonomy data.
    /// A missing record is `Ok(None)`; only transport failures and unexpected
    /// response shapes are errors.
    pub async fn fetch_post(&self, post: &PostRef) -> Result<Option<ContentRecord>, WpError> {
        let reference = post.to_string();
        let response = self
            .http
            .get(self.collection_url(&["posts", &reference]))
            .query(&[("_embed", "true")])
            .send()
            .await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(WpError::Status(status));
        }
        let raw: wire::Post = response.json().await?;
        Ok(Some(raw.normalize()?))
    }

    /// Best effort: any failure comes back as an empty list, because the UI
    /// treats a missing taxonomy as "filters unavailable" rather than an
    /// error state.
    pub async fn fetch_categories(&self) -> Vec<TaxonomyTerm> {
        self.fetch_terms("categories").await
    }

    pub async fn fetch_tags(&self) -> Vec<TaxonomyTerm> {
        self.fetch_terms("tags").await
    }

    async fn fetch_terms(&self, collection: &str) -> Vec<TaxonomyTerm> {
        match self.try_fetch_terms(collection).await {
            Ok(terms) => terms,
            Err(err) => {
                tracing::warn!(collection, %err, "taxonomy fetch failed, treating as empty");
                Vec::new()
            }
        }
    }

    async fn try_fetch_terms(&self, collection: &str) -> Result<Vec<TaxonomyTerm>, WpError> {
        let response = self
            .http
            .get(self.collection_url(&[collection]))
            .query(&[("per_page", TAXONOMY_PER_PAGE.to_string())])
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(WpError::Status(status));
        }
        let raw: Vec<wire::Term> = response.json().await?;
        Ok(raw.into_iter().map(wire::Term::normalize).collect())
    }

    /// Fetch one media item by id. Same not-found contract as `fetch_post`.
    pub async fn fetch_media(&self, id: u64) -> Result<Option<MediaItem>, WpError> {
        let id_segment = id.to_string();
        let response = self
            .http
            .get(self.collection_url(&["media", &id_segment]))
            .send()
            .await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(WpError::Status(status));
        }
        let raw: wire::Media = response.json().await?;
        Ok(Some(raw.normalize()))
    }
}

fn count_header(response: &reqwest::Response, name: &str) -> Option<u32> {
    response.headers().get(name)?.to_str().ok()?.parse().ok()
}

fn join_ids(ids: &[u64]) -> String {
    ids.iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
