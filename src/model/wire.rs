use indexmap::IndexMap;
use serde::Deserialize;
use time::{format_description::BorrowedFormatItem, macros::format_description, PrimitiveDateTime};

use crate::model::view;

// WordPress sends site-local timestamps with no UTC offset attached.
const WP_TIMESTAMP: &'static [BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("unparseable publication timestamp {0:?}")]
    BadTimestamp(String),
}

#[derive(Deserialize, Debug)]
pub struct Rendered {
    pub rendered: String,
}

/// One post as the remote API returns it, `_embedded` data and all.
#[derive(Deserialize, Debug)]
pub struct Post {
    pub id: u64,
    pub date: String,
    pub slug: String,
    pub link: String,
    pub title: Rendered,
    pub content: Rendered,
    #[serde(default)]
    pub excerpt: Option<Rendered>,
    #[serde(default)]
    pub featured_media: u64,
    #[serde(default)]
    pub categories: Vec<u64>,
    #[serde(default)]
    pub tags: Vec<u64>,
    #[serde(rename = "_embedded", default)]
    pub embedded: Option<Embedded>,
}

#[derive(Deserialize, Debug, Default)]
pub struct Embedded {
    #[serde(rename = "wp:featuredmedia", default)]
    pub featured_media: Option<Vec<EmbeddedMedia>>,
    // Outer index 0 is categories, index 1 is tags.
    #[serde(rename = "wp:term", default)]
    pub terms: Option<Vec<Vec<EmbeddedTerm>>>,
}

#[derive(Deserialize, Debug)]
pub struct EmbeddedMedia {
    pub source_url: String,
    #[serde(default)]
    pub media_details: Option<MediaDetails>,
}

#[derive(Deserialize, Debug, Default)]
pub struct MediaDetails {
    #[serde(default)]
    pub sizes: Option<IndexMap<String, SizeVariant>>,
}

#[derive(Deserialize, Debug)]
pub struct SizeVariant {
    pub source_url: String,
}

#[derive(Deserialize, Debug)]
pub struct EmbeddedTerm {
    pub id: u64,
    pub name: String,
    pub slug: String,
}

#[derive(Deserialize, Debug)]
pub struct Term {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub count: Option<u64>,
}

#[derive(Deserialize, Debug)]
pub struct Media {
    pub id: u64,
    pub source_url: String,
    #[serde(default)]
    pub media_details: Option<MediaDetails>,
}

impl Post {
    /// The one mapping from the remote shape to the view model, run once per
    /// fetch. Everything nested and optional is flattened here so view code
    /// never touches `_embedded`.
    pub fn normalize(self) -> Result<view::ContentRecord, NormalizeError> {
        let published = PrimitiveDateTime::parse(&self.date, WP_TIMESTAMP)
            .map_err(|_| NormalizeError::BadTimestamp(self.date.clone()))?
            .assume_utc();

        let mut category_names = Vec::new();
        let mut tag_names = Vec::new();
        let mut featured_image = None;

        if let Some(embedded) = self.embedded {
            if let Some(groups) = embedded.terms {
                let mut groups = groups.into_iter();
                if let Some(categories) = groups.next() {
                    category_names = categories.into_iter().map(|term| term.name).collect();
                }
                if let Some(tags) = groups.next() {
                    tag_names = tags.into_iter().map(|term| term.name).collect();
                }
            }

            featured_image = embedded
                .featured_media
                .and_then(|mut media| {
                    if media.is_empty() {
                        None
                    } else {
                        Some(media.remove(0))
                    }
                })
                .map(|media| view::MediaReference {
                    sizes: size_urls(media.media_details),
                    source_url: media.source_url,
                });
        }

        Ok(view::ContentRecord {
            id: self.id,
            published,
            title: view::Html(self.title.rendered),
            body: view::Html(self.content.rendered),
            summary: self.excerpt.map(|excerpt| view::Html(excerpt.rendered)),
            slug: self.slug,
            link: self.link,
            // The remote API reports "no featured media" as id 0.
            featured_media_id: (self.featured_media != 0).then_some(self.featured_media),
            category_ids: self.categories,
            tag_ids: self.tags,
            categories: category_names,
            tags: tag_names,
            featured_image,
        })
    }
}

impl Term {
    pub fn normalize(self) -> view::TaxonomyTerm {
        view::TaxonomyTerm {
            id: self.id,
            name: self.name,
            slug: self.slug,
            count: self.count,
        }
    }
}

impl Media {
    pub fn normalize(self) -> view::MediaItem {
        view::MediaItem {
            id: self.id,
            sizes: size_urls(self.media_details),
            source_url: self.source_url,
        }
    }
}

fn size_urls(details: Option<MediaDetails>) -> IndexMap<String, String> {
    details
        .and_then(|details| details.sizes)
        .unwrap_or_default()
        .into_iter()
        .map(|(name, variant)| (name, variant.source_url))
        .collect()
}
