mod common;

use serde_json::{Value, json};

#[tokio::test]
async fn test_submit_contact_success() {
    let server = common::create_default_server().await;

    let response = server.post("/api/contact").json(&common::valid_contact()).await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let json = response.json::<Value>();
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Contact form submitted successfully");
    assert!(json["submissionId"].is_string());
}

#[tokio::test]
async fn test_submit_contact_without_phone() {
    let server = common::create_default_server().await;

    let mut body = common::valid_contact();
    body.as_object_mut().unwrap().remove("phone");

    let response = server.post("/api/contact").json(&body).await;

    response.assert_status(axum::http::StatusCode::CREATED);
}

#[tokio::test]
async fn test_submit_contact_short_message() {
    let server = common::create_default_server().await;

    let mut body = common::valid_contact();
    body["message"] = json!("Hi there");

    let response = server.post("/api/contact").json(&body).await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(json["error"], "Validation failed");
    assert_eq!(
        json["details"]["message"][0]["message"],
        "Message must be at least 10 characters"
    );
}

#[tokio::test]
async fn test_submit_contact_invalid_email() {
    let server = common::create_default_server().await;

    let mut body = common::valid_contact();
    body["email"] = json!("not-an-email");

    let response = server.post("/api/contact").json(&body).await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(
        json["details"]["email"][0]["message"],
        "Please enter a valid email address"
    );
}

#[tokio::test]
async fn test_submit_contact_reports_every_invalid_field() {
    let server = common::create_default_server().await;

    let response = server
        .post("/api/contact")
        .json(&json!({
            "name": "A",
            "email": "nope",
            "serviceInterest": "other",
            "message": "short"
        }))
        .await;

    response.assert_status_bad_request();

    let details = response.json::<Value>()["details"].clone();
    assert!(details.get("name").is_some());
    assert!(details.get("email").is_some());
    assert!(details.get("message").is_some());
}

#[tokio::test]
async fn test_submit_contact_unknown_service_interest() {
    let server = common::create_default_server().await;

    let mut body = common::valid_contact();
    body["serviceInterest"] = json!("gardening");

    let response = server.post("/api/contact").json(&body).await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(json["error"], "Validation failed");
    assert!(json["details"]["body"].is_string());
}

#[tokio::test]
async fn test_submit_contact_missing_field() {
    let server = common::create_default_server().await;

    let response = server
        .post("/api/contact")
        .json(&json!({ "name": "Ada Lovelace" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_list_submissions() {
    let server = common::create_default_server().await;

    let empty = server.get("/api/contact/submissions").await;
    empty.assert_status_ok();
    assert!(empty.json::<Value>().as_array().unwrap().is_empty());

    let created = server
        .post("/api/contact")
        .json(&common::valid_contact())
        .await
        .json::<Value>();

    let mut second = common::valid_contact();
    second["name"] = json!("Grace Hopper");
    second["serviceInterest"] = json!("web-engineering");
    server.post("/api/contact").json(&second).await;

    let response = server.get("/api/contact/submissions").await;
    response.assert_status_ok();

    let json = response.json::<Value>();
    let submissions = json.as_array().unwrap();
    assert_eq!(submissions.len(), 2);
    assert_eq!(submissions[0]["id"], created["submissionId"]);
    assert_eq!(submissions[0]["name"], "Ada Lovelace");
    assert_eq!(submissions[1]["serviceInterest"], "web-engineering");
    assert!(submissions[0]["submittedAt"].is_string());
}

#[tokio::test]
async fn test_submit_contact_without_json_content_type() {
    let server = common::create_default_server().await;

    let response = server
        .post("/api/contact")
        .text(common::valid_contact().to_string())
        .await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(json["error"], "Validation failed");
    assert!(json["details"]["body"].is_string());
}

#[tokio::test]
async fn test_submit_contact_malformed_json() {
    let server = common::create_default_server().await;

    let response = server
        .post("/api/contact")
        .text(r#"{"name": "Ada", "email": "#)
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(json["error"], "Validation failed");
    assert!(json["details"]["body"].is_string());

    let submissions = server.get("/api/contact/submissions").await.json::<Value>();
    assert!(submissions.as_array().unwrap().is_empty());
}
