//! End-to-end pipeline tests
//!
//! Each test serves a feed from a wiremock server, runs the pipeline against a
//! page in a temporary directory and inspects the rewritten file.

use feedsplice::pipeline::Prerenderer;
use feedsplice::render::{ItemListSchema, Splicer};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::fixtures::{BLOG_PAGE, EMPTY_FEED, ESCAPED_ITEM, PAGE_WITH_HEAD_AFTER_MARKERS};
use crate::common;

const LD_JSON_OPEN: &str = r#"<script type="application/ld+json">"#;

async fn serve_feed(body: String) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/feed"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "application/rss+xml; charset=utf-8"),
        )
        .mount(&mock_server)
        .await;

    mock_server
}

fn prerenderer(server: &MockServer, page: &std::path::Path) -> Prerenderer<'static> {
    let config = common::test_config(&format!("{}/feed", server.uri()), page);
    Prerenderer::new(config).expect("valid test config")
}

fn extract_schema(page: &str) -> ItemListSchema {
    let start = page.find(LD_JSON_OPEN).expect("schema tag present") + LD_JSON_OPEN.len();
    let end = start + page[start..].find("</script>").expect("schema tag closed");
    serde_json::from_str(&page[start..end]).expect("schema is valid JSON")
}

#[tokio::test]
async fn test_full_run_caps_posts_at_eight() {
    let server = serve_feed(common::feed_with_posts(10)).await;
    let dir = TempDir::new().unwrap();
    let page_path = common::write_page(dir.path(), BLOG_PAGE);

    let report = prerenderer(&server, &page_path).run().await.unwrap();
    let written = std::fs::read_to_string(&page_path).unwrap();

    assert_eq!(report.posts_rendered, 8);
    assert_eq!(report.page_path, page_path);
    assert_eq!(report.bytes_written, written.len());
    assert_eq!(written.matches(r#"class="blog-post""#).count(), 8);
    assert!(written.contains("<h3>Post 8</h3>"));
    assert!(!written.contains("Post 9"));
    assert!(!written.contains("Loading posts..."));
    assert!(written.contains("<!-- BLOG_STATIC_START -->"));
    assert!(written.contains("<!-- BLOG_STATIC_END -->"));
    assert!(written.starts_with("<!DOCTYPE html>"));
    assert!(written.ends_with("</html>\n"));
}

#[tokio::test]
async fn test_schema_skipped_when_head_precedes_markers() {
    let server = serve_feed(common::feed_with_posts(3)).await;
    let dir = TempDir::new().unwrap();
    let page_path = common::write_page(dir.path(), BLOG_PAGE);

    let report = prerenderer(&server, &page_path).run().await.unwrap();
    let written = std::fs::read_to_string(&page_path).unwrap();

    assert!(!report.schema_inserted);
    assert!(!written.contains(LD_JSON_OPEN));
}

#[tokio::test]
async fn test_schema_inserted_before_head_close() {
    let server = serve_feed(common::feed_with_posts(7)).await;
    let dir = TempDir::new().unwrap();
    let page_path = common::write_page(dir.path(), PAGE_WITH_HEAD_AFTER_MARKERS);

    let report = prerenderer(&server, &page_path).run().await.unwrap();
    let written = std::fs::read_to_string(&page_path).unwrap();

    assert!(report.schema_inserted);
    assert_eq!(report.schema_entries, 5);
    assert!(written.contains("</script>\n</head>"));

    let schema = extract_schema(&written);
    let positions: Vec<usize> = schema.item_list_element.iter().map(|e| e.position).collect();
    assert_eq!(positions, vec![1, 2, 3, 4, 5]);
    assert_eq!(schema.item_list_element[0].name, "Post 1");
    assert_eq!(schema.item_list_element[4].url, "https://x.test/p5");
}

#[tokio::test]
async fn test_escaped_item_rendered() {
    let server = serve_feed(common::feed_with_items(&[ESCAPED_ITEM.to_string()])).await;
    let dir = TempDir::new().unwrap();
    let page_path = common::write_page(dir.path(), BLOG_PAGE);

    let report = prerenderer(&server, &page_path).run().await.unwrap();
    let written = std::fs::read_to_string(&page_path).unwrap();

    assert_eq!(report.posts_rendered, 1);
    assert!(written.contains("<h3>Hello <b>World</b></h3>"));
    assert!(written.contains("<p>Some text...</p>"));
    assert!(written.contains(r#"<span class="blog-date">January 1, 2024</span>"#));
    assert!(written.contains(r#"<a href="https://x.test/p1" class="read-more""#));
}

#[tokio::test]
async fn test_zero_items_still_rewrites_page() {
    let server = serve_feed(EMPTY_FEED.to_string()).await;
    let dir = TempDir::new().unwrap();
    let page_path = common::write_page(dir.path(), PAGE_WITH_HEAD_AFTER_MARKERS);

    let report = prerenderer(&server, &page_path).run().await.unwrap();
    let written = std::fs::read_to_string(&page_path).unwrap();

    assert_eq!(report.posts_rendered, 0);
    assert_eq!(report.schema_entries, 0);
    assert_ne!(written, PAGE_WITH_HEAD_AFTER_MARKERS);
    assert!(written.contains(r#"<div class="blog-grid">"#));
    assert!(!written.contains("blog-post"));
    assert!(extract_schema(&written).is_empty());
}

#[tokio::test]
async fn test_second_run_replaces_rather_than_appends() {
    let server = serve_feed(common::feed_with_posts(4)).await;
    let dir = TempDir::new().unwrap();
    let page_path = common::write_page(dir.path(), BLOG_PAGE);
    let prerenderer = prerenderer(&server, &page_path);
    let splicer = Splicer::default();

    prerenderer.run().await.unwrap();
    let first = std::fs::read_to_string(&page_path).unwrap();

    prerenderer.run().await.unwrap();
    let second = std::fs::read_to_string(&page_path).unwrap();

    assert_eq!(splicer.body(&first), splicer.body(&second));
    assert_eq!(second.matches(r#"class="blog-post""#).count(), 4);
}

#[tokio::test]
async fn test_dry_run_does_not_write() {
    let server = serve_feed(common::feed_with_posts(2)).await;
    let dir = TempDir::new().unwrap();
    let page_path = common::write_page(dir.path(), BLOG_PAGE);

    let (report, content) = prerenderer(&server, &page_path).dry_run().await.unwrap();

    assert!(report.dry_run);
    assert_eq!(report.bytes_written, 0);
    assert_eq!(report.posts_rendered, 2);
    assert!(content.contains("<h3>Post 2</h3>"));
    assert_eq!(std::fs::read_to_string(&page_path).unwrap(), BLOG_PAGE);
}
