//! End-to-end inlining of pages served over HTTP

mod common;

use base64::Engine;
use common::PNG_BYTES;
use kodegen_tools_inliner::inliner::dom::parse_document;
use kodegen_tools_inliner::{Fetcher, FetchError, InlineConfig, ResourceType, inline_document};
use mockito::Server;

fn png_data_uri() -> String {
    format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(PNG_BYTES)
    )
}

#[tokio::test]
async fn test_remote_page_is_fully_inlined() {
    let mut server = Server::new_async().await;
    let host = server.host_with_port();

    let page = format!(
        r#"<!DOCTYPE html>
<html>
<head>
<script src="/js/app.js"></script>
<link rel="stylesheet" href="../css/site.css">
</head>
<body>
<img src="logo.png">
<img src="missing.png">
<div style="background-image: url(//{host}/hero.png); color: red">hero</div>
</body>
</html>"#
    );

    let _page = server
        .mock("GET", "/blog/index.html")
        .with_header("content-type", "text/html")
        .with_body(page)
        .create_async()
        .await;
    let _js = server
        .mock("GET", "/js/app.js")
        .with_body("console.log('hi');")
        .create_async()
        .await;
    let _css = server
        .mock("GET", "/css/site.css")
        .with_body("body{background:url(img/bg.png)}")
        .create_async()
        .await;
    let _bg = server
        .mock("GET", "/css/img/bg.png")
        .with_body(PNG_BYTES)
        .create_async()
        .await;
    let _logo = server
        .mock("GET", "/blog/logo.png")
        .with_body(PNG_BYTES)
        .create_async()
        .await;
    let _missing = server
        .mock("GET", "/blog/missing.png")
        .with_status(404)
        .create_async()
        .await;
    let _hero = server
        .mock("GET", "/hero.png")
        .with_body(PNG_BYTES)
        .create_async()
        .await;

    let source = format!("{}/blog/index.html", server.url());
    let result = inline_document(&source, &InlineConfig::default())
        .await
        .unwrap();

    // script, stylesheet, bg.png, logo.png, hero background
    assert_eq!(result.successes, 5);
    assert_eq!(result.failures.len(), 1);
    assert_eq!(result.failures[0].address, "missing.png");
    assert_eq!(result.failures[0].resource_type, ResourceType::Image);
    assert!(result.failures[0].error.contains("404"));

    let html = &result.html;
    assert!(html.contains("<script>console.log('hi');</script>"));
    assert!(!html.contains("/js/app.js"));
    assert!(!html.contains("<link"));
    assert!(html.contains(&format!("<style>body{{background:url({})}}</style>", png_data_uri())));
    assert!(html.contains(&format!(r#"<img src="{}">"#, png_data_uri())));
    assert!(html.contains(r#"<img src="missing.png">"#));
    assert!(html.contains(&format!(
        r#"style="background-image: url({}); color: red""#,
        png_data_uri()
    )));

    // the output parses back to a document with nothing left to fetch
    let reparsed = parse_document(html);
    assert!(reparsed.select("script[src]").unwrap().next().is_none());
}

#[tokio::test]
async fn test_blacklisted_resources_become_empty() {
    let mut server = Server::new_async().await;
    let _page = server
        .mock("GET", "/")
        .with_body(
            r#"<html><head>
<script src="https://www.google-analytics.com/ga.js"></script>
<link rel="stylesheet" href="https://getsatisfaction.com/widget.css">
</head><body></body></html>"#,
        )
        .create_async()
        .await;

    let result = inline_document(&format!("{}/", server.url()), &InlineConfig::default())
        .await
        .unwrap();

    assert_eq!(result.successes, 2);
    assert!(!result.has_failures());
    assert!(result.html.contains("<script></script>"));
    assert!(result.html.contains("<style></style>"));
    assert!(!result.html.contains("google-analytics.com"));
}

#[tokio::test]
async fn test_root_document_failure_is_fatal() {
    let mut server = Server::new_async().await;
    let _page = server
        .mock("GET", "/gone.html")
        .with_status(500)
        .create_async()
        .await;

    let err = inline_document(
        &format!("{}/gone.html", server.url()),
        &InlineConfig::default(),
    )
    .await
    .unwrap_err();

    assert!(format!("{err:#}").contains("Failed to load document"));
}

#[tokio::test]
async fn test_size_cap_rejects_large_bodies() {
    let mut server = Server::new_async().await;
    let _big = server
        .mock("GET", "/big.png")
        .with_body(PNG_BYTES)
        .create_async()
        .await;

    let url = format!("{}/big.png", server.url());

    let capped = Fetcher::new(InlineConfig::default().with_max_resource_size(16)).unwrap();
    assert!(matches!(
        capped.get_bytes(&url).await,
        Err(FetchError::TooLarge { limit: 16, .. })
    ));

    let uncapped = Fetcher::new(InlineConfig::default()).unwrap();
    assert_eq!(uncapped.get_bytes(&url).await.unwrap(), PNG_BYTES.to_vec());
}

#[tokio::test]
async fn test_user_agent_is_sent() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/ua.js")
        .match_header("user-agent", "inliner-test/1.0")
        .with_body("ok")
        .create_async()
        .await;

    let fetcher = Fetcher::new(InlineConfig::default().with_user_agent("inliner-test/1.0")).unwrap();
    assert_eq!(
        fetcher.get_text(&format!("{}/ua.js", server.url())).await.unwrap(),
        "ok"
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_custom_blacklist_replaces_default() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/tracker/pixel.gif")
        .with_body("GIF89a")
        .expect(0)
        .create_async()
        .await;

    let fetcher =
        Fetcher::new(InlineConfig::default().with_blacklist(["/tracker/"])).unwrap();
    let bytes = fetcher
        .get_bytes(&format!("{}/tracker/pixel.gif", server.url()))
        .await
        .unwrap();

    assert!(bytes.is_empty());
    mock.assert_async().await;
}
