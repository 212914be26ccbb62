mod common;

use pagegrab::fetch;

#[tokio::test]
async fn fetch_returns_exact_body_on_success() {
    let body = "<html>\n<body>¡hola!</body>\n</html>";
    let url = common::serve("200 OK", body);
    let fetched = fetch::fetch_page(&url).await.expect("fetch should succeed");
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn fetch_reports_http_status_failures() {
    let url = common::serve("404 Not Found", "missing");
    let err = fetch::fetch_page(&url).await.expect_err("fetch should fail");
    assert!(err.to_string().contains("404"), "got: {err}");
}

#[tokio::test]
async fn fetch_reports_connection_failures() {
    let url = common::unused_endpoint();
    assert!(fetch::fetch_page(&url).await.is_err());
}

#[tokio::test]
async fn fetch_rejects_malformed_urls() {
    assert!(fetch::fetch_page("not a url").await.is_err());
}
