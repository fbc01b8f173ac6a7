//! Adapter tests against a local stand-in for the remote content API.

use std::collections::HashMap;

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use microsite::wordpress::{PostQuery, PostRef, WpClient, WpError};
use serde_json::{json, Value};
use url::Url;

const COLLECTION_SIZE: u64 = 10;

fn sample_post(id: u64, embed: bool) -> Value {
    let mut post = json!({
        "id": id,
        "date": format!("2023-03-{:02}T10:00:00", id),
        "slug": format!("story-{id}"),
        "link": format!("https://example.com/story-{id}"),
        "title": { "rendered": format!("Story {id}") },
        "content": { "rendered": "<p>Body text</p>" },
        "excerpt": { "rendered": "<p>The paper&#8217;s big day</p>" },
        "featured_media": 7,
        "categories": [1],
        "tags": []
    });
    if embed {
        post["_embedded"] = json!({
            "wp:featuredmedia": [{
                "source_url": "https://cdn.example.com/full.jpg",
                "media_details": {
                    "sizes": {
                        "medium_large": { "source_url": "https://cdn.example.com/ml.jpg" }
                    }
                }
            }],
            "wp:term": [[{ "id": 1, "name": "News", "slug": "news" }], []]
        });
    }
    post
}

async fn posts(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    let page: u64 = params.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
    let per_page: u64 = params
        .get("per_page")
        .and_then(|p| p.parse().ok())
        .unwrap_or(10);
    let embed = params.contains_key("_embed");

    let slice: Vec<Value> = (1..=COLLECTION_SIZE)
        .skip(((page - 1) * per_page) as usize)
        .take(per_page as usize)
        .map(|id| sample_post(id, embed))
        .collect();
    let total_pages = (COLLECTION_SIZE + per_page - 1) / per_page;

    (
        [
            ("X-WP-Total", COLLECTION_SIZE.to_string()),
            ("X-WP-TotalPages", total_pages.to_string()),
        ],
        Json(Value::Array(slice)),
    )
}

async fn post_by_reference(Path(reference): Path<String>) -> impl IntoResponse {
    match reference.parse::<u64>() {
        Ok(id) if (1..=COLLECTION_SIZE).contains(&id) => {
            Json(sample_post(id, true)).into_response()
        }
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({ "code": "rest_post_invalid_id" })),
        )
            .into_response(),
    }
}

async fn categories() -> Json<Value> {
    Json(json!([
        { "id": 1, "name": "News", "slug": "news", "count": 7 },
        { "id": 3, "name": "Anniversary", "slug": "anniversary", "count": 2 }
    ]))
}

async fn tags() -> Json<Value> {
    Json(json!([
        { "id": 9, "name": "Print", "slug": "print" }
    ]))
}

async fn media_by_id(Path(id): Path<u64>) -> impl IntoResponse {
    if id == 7 {
        Json(json!({
            "id": 7,
            "source_url": "https://cdn.example.com/full.jpg",
            "media_details": {
                "sizes": {
                    "thumbnail": { "source_url": "https://cdn.example.com/thumb.jpg" }
                }
            }
        }))
        .into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "code": "rest_post_invalid_id" })),
        )
            .into_response()
    }
}

async fn serve(router: Router) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Url::parse(&format!("http://{addr}/wp-json/wp/v2")).unwrap()
}

async fn client() -> WpClient {
    let api = Router::new()
        .route("/posts", get(posts))
        .route("/posts/:reference", get(post_by_reference))
        .route("/categories", get(categories))
        .route("/tags", get(tags))
        .route("/media/:id", get(media_by_id));
    let base = serve(Router::new().nest("/wp-json/wp/v2", api)).await;
    WpClient::new(base).unwrap()
}

#[tokio::test]
async fn second_page_reports_collection_wide_counts() {
    let client = client().await;
    let page = client
        .fetch_posts(&PostQuery {
            page: 2,
            per_page: 4,
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(page.total_pages, 3);
    assert_eq!(page.total, 10);
    assert_eq!(page.posts.len(), 4);
    let ids: Vec<u64> = page.posts.iter().map(|post| post.id).collect();
    assert_eq!(ids, vec![5, 6, 7, 8]);
}

#[tokio::test]
async fn short_last_page_stays_within_page_size() {
    let client = client().await;
    let page = client
        .fetch_posts(&PostQuery {
            page: 3,
            per_page: 4,
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(page.posts.len() <= 4);
    assert_eq!(page.posts.len(), 2);
}

#[tokio::test]
async fn embedded_data_is_normalized() {
    let client = client().await;
    let page = client.fetch_posts(&PostQuery::default()).await.unwrap();
    let first = &page.posts[0];

    assert_eq!(first.category_names(), ["News"]);
    assert_eq!(
        first.featured_image_url("large"),
        Some("https://cdn.example.com/ml.jpg")
    );
    assert_eq!(first.plain_summary(100), "The paper\u{2019}s big day");
}

#[tokio::test]
async fn disabling_embed_skips_related_data() {
    let client = client().await;
    let page = client
        .fetch_posts(&PostQuery {
            embed: false,
            ..Default::default()
        })
        .await
        .unwrap();
    let first = &page.posts[0];

    assert!(first.category_names().is_empty());
    assert_eq!(first.featured_image_url("large"), None);
    // The raw taxonomy references still come through.
    assert_eq!(first.category_ids, vec![1]);
}

#[tokio::test]
async fn missing_count_headers_degrade_to_defaults() {
    async fn headerless_posts() -> Json<Value> {
        Json(json!([sample_post(1, false)]))
    }
    let api = Router::new().route("/posts", get(headerless_posts));
    let base = serve(Router::new().nest("/wp-json/wp/v2", api)).await;
    let client = WpClient::new(base).unwrap();

    let page = client.fetch_posts(&PostQuery::default()).await.unwrap();
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.total, 0);
    assert_eq!(page.posts.len(), 1);
}

#[tokio::test]
async fn server_error_propagates_for_content() {
    async fn broken() -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
    let api = Router::new().route("/posts", get(broken));
    let base = serve(Router::new().nest("/wp-json/wp/v2", api)).await;
    let client = WpClient::new(base).unwrap();

    match client.fetch_posts(&PostQuery::default()).await {
        Err(WpError::Status(status)) => assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn single_post_by_id_and_slug() {
    let client = client().await;

    let found = client.fetch_post(&PostRef::Id(4)).await.unwrap().unwrap();
    assert_eq!(found.title.0, "Story 4");
    assert_eq!(found.slug, "story-4");

    // The mock, like the real API, 404s on the slug-in-path form.
    let by_slug = client
        .fetch_post(&PostRef::Slug("story-4".into()))
        .await
        .unwrap();
    assert!(by_slug.is_none());
}

#[tokio::test]
async fn missing_post_is_none_not_error() {
    let client = client().await;
    let missing = client.fetch_post(&PostRef::Id(99)).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn media_follow_up_fetch() {
    let client = client().await;

    let media = client.fetch_media(7).await.unwrap().unwrap();
    assert_eq!(media.id, 7);
    assert_eq!(
        media.sizes.get("thumbnail").map(String::as_str),
        Some("https://cdn.example.com/thumb.jpg")
    );

    assert!(client.fetch_media(99).await.unwrap().is_none());
}

#[tokio::test]
async fn taxonomies_come_back_in_remote_order() {
    let client = client().await;

    let categories = client.fetch_categories().await;
    let names: Vec<&str> = categories.iter().map(|term| term.name.as_str()).collect();
    assert_eq!(names, vec!["News", "Anniversary"]);
    assert_eq!(categories[0].count, Some(7));

    let tags = client.fetch_tags().await;
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].count, None);
}

#[tokio::test]
async fn taxonomy_failure_swallows_to_empty() {
    async fn broken() -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
    let api = Router::new().route("/categories", get(broken));
    let base = serve(Router::new().nest("/wp-json/wp/v2", api)).await;
    let client = WpClient::new(base).unwrap();

    assert!(client.fetch_categories().await.is_empty());
    // No tags route at all behaves the same way.
    assert!(client.fetch_tags().await.is_empty());
}
