mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn create_link(server: &axum_test::TestServer, package_id: &str) -> Value {
    let response = server
        .post("/api/pricing/share")
        .add_header("Host", common::TEST_HOST)
        .json(&json!({ "packageId": package_id }))
        .await;

    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()
}

#[tokio::test]
async fn test_list_packages() {
    let server = common::create_default_server().await;

    let response = server.get("/api/pricing/packages").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    let packages = json.as_array().unwrap();
    assert_eq!(packages.len(), 6);
    assert_eq!(packages[0]["id"], "free-consultation");
    assert_eq!(packages[0]["price"], "Free");

    let featured: Vec<&Value> = packages.iter().filter(|p| p["featured"] == true).collect();
    assert_eq!(featured.len(), 1);
    assert_eq!(featured[0]["id"], "professional-website");
}

#[tokio::test]
async fn test_get_package() {
    let server = common::create_default_server().await;

    let response = server.get("/api/pricing/packages/basic-website").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["price"], "$2,500");
    assert_eq!(json["category"], "website");
    assert!(!json["features"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_get_package_not_found() {
    let server = common::create_default_server().await;

    let response = server.get("/api/pricing/packages/yacht-design").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_create_share_link_for_every_package() {
    let server = common::create_default_server().await;

    let packages = server.get("/api/pricing/packages").await.json::<Value>();

    for package in packages.as_array().unwrap() {
        let package_id = package["id"].as_str().unwrap();
        let json = create_link(&server, package_id).await;

        assert_eq!(json["success"], true);
        assert_eq!(json["link"]["packageId"], package_id);

        let id = json["link"]["id"].as_str().unwrap();
        assert_eq!(id.len(), 8);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(json["link"]["createdAt"].is_string());
    }
}

#[tokio::test]
async fn test_share_url_uses_host_header() {
    let server = common::create_default_server().await;

    let json = create_link(&server, "basic-website").await;

    let id = json["link"]["id"].as_str().unwrap();
    assert_eq!(
        json["link"]["url"],
        format!("http://{}/pricing/share/{}", common::TEST_HOST, id)
    );
}

#[tokio::test]
async fn test_share_url_honors_forwarded_proto() {
    let server = common::create_default_server().await;

    let response = server
        .post("/api/pricing/share")
        .add_header("Host", common::TEST_HOST)
        .add_header("X-Forwarded-Proto", "https")
        .json(&json!({ "packageId": "basic-website" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let url = response.json::<Value>()["link"]["url"].clone();
    assert!(
        url.as_str()
            .unwrap()
            .starts_with("https://agency.test:8080/pricing/share/")
    );
}

#[tokio::test]
async fn test_share_url_uses_public_base_url() {
    let state = common::create_test_state_with_base("https://agency.example").await;
    let server = common::create_test_server(state);

    let json = create_link(&server, "custom-software").await;

    let id = json["link"]["id"].as_str().unwrap();
    assert_eq!(
        json["link"]["url"],
        format!("https://agency.example/pricing/share/{}", id)
    );
}

#[tokio::test]
async fn test_resolve_counts_views() {
    let server = common::create_default_server().await;

    let created = create_link(&server, "professional-website").await;
    let id = created["link"]["id"].as_str().unwrap();

    for expected in 1..=3 {
        let response = server.get(&format!("/api/pricing/share/{}", id)).await;
        response.assert_status_ok();

        let json = response.json::<Value>();
        assert_eq!(json["id"], id);
        assert_eq!(json["packageId"], "professional-website");
        assert_eq!(json["viewCount"], expected);
        assert_eq!(json["createdAt"], created["link"]["createdAt"]);
    }
}

#[tokio::test]
async fn test_links_count_views_independently() {
    let server = common::create_default_server().await;

    let first = create_link(&server, "basic-website").await;
    let second = create_link(&server, "basic-website").await;
    let first_id = first["link"]["id"].as_str().unwrap();
    let second_id = second["link"]["id"].as_str().unwrap();
    assert_ne!(first_id, second_id);

    server.get(&format!("/api/pricing/share/{}", first_id)).await;
    server.get(&format!("/api/pricing/share/{}", first_id)).await;

    let json = server
        .get(&format!("/api/pricing/share/{}", second_id))
        .await
        .json::<Value>();
    assert_eq!(json["viewCount"], 1);
}

#[tokio::test]
async fn test_resolve_unknown_link() {
    let server = common::create_default_server().await;

    let response = server.get("/api/pricing/share/deadbeef").await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<Value>()["error"],
        "Shareable link not found"
    );
}

#[tokio::test]
async fn test_create_share_link_unknown_package() {
    let server = common::create_default_server().await;

    let response = server
        .post("/api/pricing/share")
        .add_header("Host", common::TEST_HOST)
        .json(&json!({ "packageId": "yacht-design" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(json["error"], "Unknown pricing package");
    assert_eq!(json["details"]["packageId"], "yacht-design");
}

#[tokio::test]
async fn test_create_share_link_missing_package_id() {
    let server = common::create_default_server().await;

    let response = server
        .post("/api/pricing/share")
        .add_header("Host", common::TEST_HOST)
        .json(&json!({}))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"], "Validation failed");
}

#[tokio::test]
async fn test_create_share_link_empty_package_id() {
    let server = common::create_default_server().await;

    let response = server
        .post("/api/pricing/share")
        .add_header("Host", common::TEST_HOST)
        .json(&json!({ "packageId": "" }))
        .await;

    response.assert_status_bad_request();
    let details = response.json::<Value>()["details"].clone();
    assert_eq!(details["packageId"][0]["message"], "Package id is required");
    assert!(details.get("package_id").is_none());
}

#[tokio::test]
async fn test_health_reports_issued_links() {
    let server = common::create_default_server().await;

    create_link(&server, "basic-website").await;
    create_link(&server, "ecommerce-website").await;

    let json = server.get("/health").await.json::<Value>();
    assert_eq!(json["checks"]["share_links"]["message"], "2 links issued");
}

#[tokio::test]
async fn test_share_url_from_uri_authority_without_host_header() {
    let state = common::create_test_state().await;
    let app = agency_api::routes::router(state.clone());

    // HTTP/2 clients send `:authority` instead of a Host header.
    let request = Request::post("http://agency.test:8080/api/pricing/share")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"packageId":"basic-website"}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = common::body_json(response).await;
    let id = json["link"]["id"].as_str().unwrap();
    assert_eq!(
        json["link"]["url"],
        format!("http://agency.test:8080/pricing/share/{}", id)
    );
    assert_eq!(state.share_link_service.link_count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_create_share_link_without_host_creates_nothing() {
    let state = common::create_test_state().await;
    let app = agency_api::routes::router(state.clone());

    let request = Request::post("/api/pricing/share")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"packageId":"basic-website"}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = common::body_json(response).await;
    assert_eq!(json["error"], "Missing Host header");
    assert_eq!(state.share_link_service.link_count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_share_link_malformed_json() {
    let server = common::create_default_server().await;

    let response = server
        .post("/api/pricing/share")
        .add_header("Host", common::TEST_HOST)
        .text(r#"{"packageId": "#)
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(json["error"], "Validation failed");
    assert!(json["details"]["body"].is_string());
}
