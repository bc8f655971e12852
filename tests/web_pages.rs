mod common;

#[tokio::test]
async fn test_dashboard_empty() {
    let server = common::create_test_server();

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Create a short link"));
    assert!(html.contains("No links yet"));
}

#[tokio::test]
async fn test_dashboard_lists_links() {
    let server = common::create_test_server();
    common::create_link(&server, "https://example.com", Some("MyCode1")).await;
    server.get("/MyCode1").await;

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("MyCode1"));
    assert!(!html.contains("No links yet"));
}

#[tokio::test]
async fn test_stats_page() {
    let server = common::create_test_server();
    common::create_link(&server, "https://example.com", Some("MyCode1")).await;

    let response = server.get("/code/MyCode1").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("MyCode1"));
    assert!(html.contains("Never"));
}

#[tokio::test]
async fn test_stats_page_not_found() {
    let server = common::create_test_server();

    let response = server.get("/code/nope123").await;

    response.assert_status_not_found();
    let html = response.text();
    assert!(html.contains("Link not found"));
    assert!(html.contains("nope123"));
}

#[tokio::test]
async fn test_stats_page_undecodable_code() {
    let server = common::create_test_server();

    let response = server.get("/code/%FF%FF%FF%FF%FF%FF").await;

    response.assert_status_not_found();
    assert!(response.text().contains("Link not found"));
}

async fn seed_links(server: &axum_test::TestServer) {
    common::create_link(server, "https://one.example.com", Some("alpha1")).await;
    common::create_link(server, "https://two.example.com", Some("beta22")).await;
    common::create_link(server, "https://three.example.com", Some("gamma3")).await;

    server.get("/beta22").await;
    server.get("/beta22").await;
    server.get("/gamma3").await;
}

fn position(html: &str, code: &str) -> usize {
    html.find(code)
        .unwrap_or_else(|| panic!("'{}' missing from page", code))
}

#[tokio::test]
async fn test_dashboard_default_order_is_newest_first() {
    let server = common::create_test_server();
    seed_links(&server).await;

    let html = server.get("/").await.text();

    assert!(position(&html, "gamma3") < position(&html, "beta22"));
    assert!(position(&html, "beta22") < position(&html, "alpha1"));
}

#[tokio::test]
async fn test_dashboard_sort_by_clicks() {
    let server = common::create_test_server();
    seed_links(&server).await;

    let desc = server.get("/?sort=clicks&order=desc").await.text();
    assert!(position(&desc, "beta22") < position(&desc, "gamma3"));
    assert!(position(&desc, "gamma3") < position(&desc, "alpha1"));

    let asc = server.get("/?sort=clicks&order=asc").await.text();
    assert!(position(&asc, "alpha1") < position(&asc, "gamma3"));
    assert!(position(&asc, "gamma3") < position(&asc, "beta22"));
}

#[tokio::test]
async fn test_dashboard_sort_by_code() {
    let server = common::create_test_server();
    seed_links(&server).await;

    let html = server.get("/?sort=code&order=asc").await.text();

    assert!(position(&html, "alpha1") < position(&html, "beta22"));
    assert!(position(&html, "beta22") < position(&html, "gamma3"));
}

#[tokio::test]
async fn test_dashboard_search_by_target_or_code() {
    let server = common::create_test_server();
    seed_links(&server).await;

    let by_target = server.get("/?q=TWO.example").await;
    by_target.assert_status_ok();
    let html = by_target.text();
    assert!(html.contains("beta22"));
    assert!(!html.contains("alpha1"));
    assert!(!html.contains("gamma3"));

    let by_code = server.get("/?q=gam").await.text();
    assert!(by_code.contains("gamma3"));
    assert!(!by_code.contains("beta22"));
}

#[tokio::test]
async fn test_dashboard_search_without_matches() {
    let server = common::create_test_server();
    seed_links(&server).await;

    let html = server.get("/?q=nothing-here").await.text();

    assert!(html.contains("No links match your search"));
    assert!(!html.contains("alpha1"));
}

#[tokio::test]
async fn test_dashboard_unknown_sort_falls_back() {
    let server = common::create_test_server();
    seed_links(&server).await;

    let response = server.get("/?sort=bogus&order=sideways").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(position(&html, "gamma3") < position(&html, "alpha1"));
}
