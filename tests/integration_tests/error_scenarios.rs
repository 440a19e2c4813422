//! Error scenario integration tests
//!
//! Every fatal error must leave the page untouched:
//! 1. Missing markers (no request is sent at all)
//! 2. HTTP error responses (404, 500)
//! 3. Connection failures
//! 4. Missing page document

use feedsplice::error::{Error, ErrorCategory};
use feedsplice::pipeline::Prerenderer;
use feedsplice::utils::error::{FetchError, TemplateError};
use tempfile::TempDir;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::fixtures::{BLOG_PAGE, PAGE_WITHOUT_END_MARKER};
use crate::common;

// ============================================================================
// Template Errors
// ============================================================================

#[tokio::test]
async fn test_missing_marker_aborts_before_fetch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(common::feed_with_posts(3)))
        .expect(0)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let page_path = common::write_page(dir.path(), PAGE_WITHOUT_END_MARKER);
    let config = common::test_config(&format!("{}/feed", mock_server.uri()), &page_path);

    let err = Prerenderer::new(config).unwrap().run().await.unwrap_err();

    assert!(matches!(
        err,
        Error::Template(TemplateError::MarkerNotFound { ref marker }) if marker == "<!-- BLOG_STATIC_END -->"
    ));
    assert_eq!(err.category(), ErrorCategory::Template);
    assert_eq!(
        std::fs::read_to_string(&page_path).unwrap(),
        PAGE_WITHOUT_END_MARKER
    );
}

#[tokio::test]
async fn test_page_without_any_marker() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let page = "<html><head></head><body></body></html>";
    let page_path = common::write_page(dir.path(), page);
    let config = common::test_config(&format!("{}/feed", mock_server.uri()), &page_path);

    let err = Prerenderer::new(config).unwrap().run().await.unwrap_err();

    assert!(matches!(err, Error::Template(TemplateError::MarkerNotFound { .. })));
    assert_eq!(std::fs::read_to_string(&page_path).unwrap(), page);
}

// ============================================================================
// Network Error Tests
// ============================================================================

async fn assert_status_leaves_page_untouched(status: u16) {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(status))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let page_path = common::write_page(dir.path(), BLOG_PAGE);
    let config = common::test_config(&format!("{}/feed", mock_server.uri()), &page_path);

    let err = Prerenderer::new(config).unwrap().run().await.unwrap_err();

    match err {
        Error::Fetch(FetchError::Status(code)) => assert_eq!(code, status),
        other => panic!("Expected status error, got: {other:?}"),
    }
    assert_eq!(std::fs::read_to_string(&page_path).unwrap(), BLOG_PAGE);
}

#[tokio::test]
async fn test_404_leaves_page_untouched() {
    assert_status_leaves_page_untouched(404).await;
}

#[tokio::test]
async fn test_500_leaves_page_untouched() {
    assert_status_leaves_page_untouched(500).await;
}

#[tokio::test]
async fn test_connection_refused_leaves_page_untouched() {
    let dir = TempDir::new().unwrap();
    let page_path = common::write_page(dir.path(), BLOG_PAGE);
    let config = common::test_config("http://127.0.0.1:9/feed", &page_path);

    let err = Prerenderer::new(config).unwrap().run().await.unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Network);
    assert!(matches!(err, Error::Fetch(FetchError::Http(_))));
    assert_eq!(std::fs::read_to_string(&page_path).unwrap(), BLOG_PAGE);
}

#[tokio::test]
async fn test_insecure_feed_url_rejected() {
    let dir = TempDir::new().unwrap();
    let page_path = common::write_page(dir.path(), BLOG_PAGE);
    let mut config = common::test_config("http://127.0.0.1:9/feed", &page_path);
    config.feed.allow_insecure = false;

    let err = Prerenderer::new(config).unwrap().run().await.unwrap_err();

    assert!(matches!(err, Error::Fetch(FetchError::InsecureScheme(_))));
    assert_eq!(std::fs::read_to_string(&page_path).unwrap(), BLOG_PAGE);
}

// ============================================================================
// Storage Errors
// ============================================================================

#[tokio::test]
async fn test_missing_page_document() {
    let dir = TempDir::new().unwrap();
    let page_path = dir.path().join("does-not-exist.html");
    let config = common::test_config("https://x.test/feed", &page_path);

    let err = Prerenderer::new(config).unwrap().run().await.unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Storage);
    assert!(!page_path.exists());
}
