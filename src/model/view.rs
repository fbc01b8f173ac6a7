use indexmap::IndexMap;
use serde::Serialize;
use time::OffsetDateTime;

use crate::text;

/// Rendered rich text straight from the remote API. Kept opaque so templates
/// and cards decide how to present it; use [`text::strip_markup`] when plain
/// text is needed.
#[derive(Serialize, Clone, Debug)]
#[serde(transparent)]
pub struct Html(pub String);

/// Featured-image descriptor with named size variants. Lookup is by name
/// only; the map keeps the remote order but nothing depends on it.
#[derive(Serialize, Clone, Debug)]
pub struct MediaReference {
    pub source_url: String,
    pub sizes: IndexMap<String, String>,
}

/// A media item fetched on its own rather than embedded in a post.
#[derive(Serialize, Clone, Debug)]
pub struct MediaItem {
    pub id: u64,
    pub source_url: String,
    pub sizes: IndexMap<String, String>,
}

/// One category or tag. `count` is only reported for categories.
#[derive(Serialize, Clone, Debug)]
pub struct TaxonomyTerm {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub count: Option<u64>,
}

/// One normalized article, read-only from the adapter's point of view.
#[derive(Serialize, Clone, Debug)]
pub struct ContentRecord {
    pub id: u64,
    #[serde(with = "time::serde::iso8601")]
    pub published: OffsetDateTime,
    pub title: Html,
    pub body: Html,
    pub summary: Option<Html>,
    pub slug: String,
    pub link: String,
    /// Raw media id, for a follow-up `fetch_media` when the fetch did not
    /// embed the image.
    pub featured_media_id: Option<u64>,
    pub category_ids: Vec<u64>,
    pub tag_ids: Vec<u64>,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub featured_image: Option<MediaReference>,
}

/// One page of posts plus the collection-wide counts reported by the remote
/// API. When the counts were absent they default to 1 page / 0 total, which
/// callers must read as "unknown", not "empty".
#[derive(Serialize, Clone, Debug)]
pub struct PostPage {
    pub posts: Vec<ContentRecord>,
    pub total_pages: u32,
    pub total: u32,
}

impl ContentRecord {
    /// URL of the featured image in the requested size, falling back to
    /// `medium_large` and then the original upload. `None` only when the
    /// record has no featured image at all.
    pub fn featured_image_url(&self, size: &str) -> Option<&str> {
        let media = self.featured_image.as_ref()?;
        if let Some(url) = media.sizes.get(size) {
            return Some(url);
        }
        if let Some(url) = media.sizes.get("medium_large") {
            return Some(url);
        }
        Some(&media.source_url)
    }

    /// Empty when the fetch did not embed taxonomy data; indistinguishable
    /// from "post has no categories" on purpose.
    pub fn category_names(&self) -> &[String] {
        &self.categories
    }

    pub fn tag_names(&self) -> &[String] {
        &self.tags
    }

    /// Plain-text summary for card display, from the excerpt when present and
    /// the body otherwise.
    pub fn plain_summary(&self, max_chars: usize) -> String {
        let source = self.summary.as_ref().unwrap_or(&self.body);
        text::excerpt(&text::strip_markup(&source.0), max_chars)
    }

    pub fn year(&self) -> i32 {
        self.published.year()
    }

    /// Placeholder heuristic: the live API has no "featured" signal, so cards
    /// look for a handful of category names instead.
    pub fn is_highlighted(&self) -> bool {
        const MARKERS: [&str; 4] = ["featured", "breaking", "headline", "important"];
        self.categories
            .iter()
            .any(|name| MARKERS.contains(&name.to_ascii_lowercase().as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn record(featured_image: Option<MediaReference>) -> ContentRecord {
        ContentRecord {
            id: 1,
            published: datetime!(2023-06-01 12:00 UTC),
            title: Html("Title".into()),
            body: Html("<p>Body</p>".into()),
            summary: None,
            slug: "title".into(),
            link: "https://example.com/title".into(),
            featured_media_id: None,
            category_ids: Vec::new(),
            tag_ids: Vec::new(),
            categories: Vec::new(),
            tags: Vec::new(),
            featured_image,
        }
    }

    fn media(sizes: &[(&str, &str)]) -> MediaReference {
        MediaReference {
            source_url: "https://cdn.example.com/full.jpg".into(),
            sizes: sizes
                .iter()
                .map(|(name, url)| (name.to_string(), url.to_string()))
                .collect(),
        }
    }

    #[test]
    fn no_media_means_no_url() {
        assert_eq!(record(None).featured_image_url("large"), None);
    }

    #[test]
    fn requested_size_wins() {
        let rec = record(Some(media(&[
            ("large", "https://cdn.example.com/large.jpg"),
            ("medium_large", "https://cdn.example.com/ml.jpg"),
        ])));
        assert_eq!(
            rec.featured_image_url("large"),
            Some("https://cdn.example.com/large.jpg")
        );
    }

    #[test]
    fn missing_size_falls_back_to_medium_large() {
        let rec = record(Some(media(&[(
            "medium_large",
            "https://cdn.example.com/ml.jpg",
        )])));
        assert_eq!(
            rec.featured_image_url("large"),
            Some("https://cdn.example.com/ml.jpg")
        );
    }

    #[test]
    fn empty_size_map_falls_back_to_source() {
        let rec = record(Some(media(&[])));
        assert_eq!(
            rec.featured_image_url("large"),
            Some("https://cdn.example.com/full.jpg")
        );
    }

    #[test]
    fn highlight_heuristic_is_case_insensitive() {
        let mut rec = record(None);
        assert!(!rec.is_highlighted());
        rec.categories = vec!["Sports".into(), "Breaking".into()];
        assert!(rec.is_highlighted());
    }

    #[test]
    fn plain_summary_uses_body_when_excerpt_missing() {
        let rec = record(None);
        assert_eq!(rec.plain_summary(100), "Body");
    }
}
