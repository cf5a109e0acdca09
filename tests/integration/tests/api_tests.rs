//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use std::time::Duration;

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use memorial_core::UserId;
use reqwest::StatusCode;
use serde_json::json;

async fn create_memorial(
    server: &TestServer,
    token: &str,
    request: &CreateMemorialRequest,
) -> MemorialResponse {
    let response = server
        .post_auth("/api/v1/memorials", token, request)
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn memorial_page(server: &TestServer, slug: &str) -> MemorialDetailResponse {
    let response = server
        .get(&format!("/api/v1/memorials/{slug}"))
        .await
        .unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

async fn submit_message(server: &TestServer, memorial_id: &str, message: &str) -> TributeResponse {
    let body = json!({
        "memorial_id": memorial_id,
        "message": message,
        "author_name": "Neighbor",
    });
    let response = server.post("/api/v1/tributes/message", &body).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn approved_tributes(server: &TestServer, memorial_id: &str) -> TributePage {
    let response = server
        .get(&format!("/api/v1/memorials/{memorial_id}/tributes"))
        .await
        .unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Memorial Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_view_memorial() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.token_for(UserId::generate(), Some("Owner")).unwrap();

    let memorial = create_memorial(&server, &token, &CreateMemorialRequest::new("Buddy")).await;
    assert_eq!(memorial.pet_name, "Buddy");
    assert_eq!(memorial.privacy, "public");
    assert!(memorial.slug.starts_with("buddy-"));
    assert_eq!(memorial.candle_count, 0);

    let page = memorial_page(&server, &memorial.slug).await;
    assert_eq!(page.memorial.id, memorial.id);
    assert!(page.photos.is_empty());

    // View counting runs after the response; poll until it lands
    let mut views = 0;
    for _ in 0..50 {
        views = memorial_page(&server, &memorial.slug).await.memorial.view_count;
        if views >= 1 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    assert!(views >= 1);
}

#[tokio::test]
async fn test_duplicate_slug_conflicts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.token_for(UserId::generate(), None).unwrap();
    let slug = format!("rex-{}", unique_suffix());

    create_memorial(&server, &token, &CreateMemorialRequest::new("Rex").with_slug(&slug)).await;

    let response = server
        .post_auth(
            "/api/v1/memorials",
            &token,
            &CreateMemorialRequest::new("Rex").with_slug(&slug),
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(error.error.code, "SLUG_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_private_memorial_hidden_from_others() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner_token = server.token_for(UserId::generate(), None).unwrap();
    let stranger_token = server.token_for(UserId::generate(), None).unwrap();

    let memorial = create_memorial(
        &server,
        &owner_token,
        &CreateMemorialRequest::new("Shadow").private(),
    )
    .await;
    let path = format!("/api/v1/memorials/{}", memorial.slug);

    let response = server.get(&path).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.get_auth(&path, &stranger_token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.get_auth(&path, &owner_token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_auth("/api/v1/memorials", &owner_token)
        .await
        .unwrap();
    let mine: Vec<MemorialResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(mine.iter().any(|m| m.id == memorial.id));
}

#[tokio::test]
async fn test_photos_owner_only() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner_token = server.token_for(UserId::generate(), None).unwrap();
    let stranger_token = server.token_for(UserId::generate(), None).unwrap();
    let memorial = create_memorial(&server, &owner_token, &CreateMemorialRequest::new("Luna")).await;
    let path = format!("/api/v1/memorials/{}/photos", memorial.id);
    let photo = json!({ "url": "https://photos.example.com/luna.jpg", "display_order": 1 });

    let response = server.post_auth(&path, &stranger_token, &photo).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.post_auth(&path, &owner_token, &photo).await.unwrap();
    let created: PhotoResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.display_order, 1);

    let page = memorial_page(&server, &memorial.slug).await;
    assert_eq!(page.photos.len(), 1);
    assert_eq!(page.photos[0].id, created.id);
}

// ============================================================================
// Tribute Tests
// ============================================================================

#[tokio::test]
async fn test_concurrent_candles_all_counted() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.token_for(UserId::generate(), None).unwrap();
    let memorial = create_memorial(&server, &token, &CreateMemorialRequest::new("Max")).await;

    let body = json!({ "memorial_id": memorial.id });
    let requests = (0..20).map(|_| server.post("/api/v1/tributes/candle", &body));
    let responses = futures::future::join_all(requests).await;

    let mut counts = Vec::new();
    for response in responses {
        let lit: CandleLitResponse = assert_json(response.unwrap(), StatusCode::OK)
            .await
            .unwrap();
        counts.push(lit.candle_count);
    }
    counts.sort_unstable();
    assert_eq!(counts, (1..=20).collect::<Vec<i64>>());

    let page = memorial_page(&server, &memorial.slug).await;
    assert_eq!(page.memorial.candle_count, 20);
}

#[tokio::test]
async fn test_offer_flower() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.token_for(UserId::generate(), None).unwrap();
    let memorial = create_memorial(&server, &token, &CreateMemorialRequest::new("Coco")).await;

    let body = json!({ "memorial_id": memorial.id, "flower_type": "lily" });
    let response = server.post("/api/v1/tributes/flower", &body).await.unwrap();
    let offered: FlowerOfferedResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(offered.flower_type, "lily");
    assert_eq!(offered.flower_count, 1);

    let body = json!({ "memorial_id": memorial.id, "flower_type": "daisy" });
    let response = server.post("/api/v1/tributes/flower", &body).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "INVALID_FLOWER_TYPE");

    let page = memorial_page(&server, &memorial.slug).await;
    assert_eq!(page.memorial.flower_count, 1);
}

#[tokio::test]
async fn test_candle_unknown_memorial() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let body = json!({ "memorial_id": uuid::Uuid::new_v4().to_string() });
    let response = server.post("/api/v1/tributes/candle", &body).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Moderation Tests
// ============================================================================

#[tokio::test]
async fn test_message_moderation_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner_token = server.token_for(UserId::generate(), None).unwrap();
    let moderator_token = server.moderator_token().unwrap();
    let memorial = create_memorial(&server, &owner_token, &CreateMemorialRequest::new("Bella")).await;

    let tribute = submit_message(&server, &memorial.id, "Run free, Bella").await;
    assert!(!tribute.approved);
    assert_eq!(tribute.kind, "message");
    assert_eq!(tribute.author_name.as_deref(), Some("Neighbor"));

    // Pending messages stay off the public list
    assert!(approved_tributes(&server, &memorial.id).await.data.is_empty());

    let response = server
        .get_auth("/api/v1/admin/tributes", &moderator_token)
        .await
        .unwrap();
    let queue: ModerationQueueResponse = assert_json(response, StatusCode::OK).await.unwrap();
    let pending = queue
        .pending
        .iter()
        .find(|t| t.id == tribute.id)
        .expect("tribute should be pending");
    assert_eq!(pending.slug.as_deref(), Some(memorial.slug.as_str()));

    let body = json!({ "tribute_id": tribute.id });
    for _ in 0..2 {
        let response = server
            .post_auth("/api/v1/admin/tributes/approve", &moderator_token, &body)
            .await
            .unwrap();
        let result: ModerationResponse = assert_json(response, StatusCode::OK).await.unwrap();
        assert_eq!(result.action, "approved");
        assert_eq!(result.tribute_id, tribute.id);
    }

    let listed = approved_tributes(&server, &memorial.id).await;
    assert_eq!(listed.data.len(), 1);
    assert_eq!(listed.data[0].message, "Run free, Bella");
    assert!(!listed.pagination.has_more);

    let response = server
        .post_auth("/api/v1/admin/tributes/reject", &moderator_token, &body)
        .await
        .unwrap();
    let result: ModerationResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(result.action, "rejected");

    assert!(approved_tributes(&server, &memorial.id).await.data.is_empty());

    // Rejecting again still succeeds
    let response = server
        .post_auth("/api/v1/admin/tributes/reject", &moderator_token, &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Approving a deleted tribute does not
    let response = server
        .post_auth("/api/v1/admin/tributes/approve", &moderator_token, &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_moderation_requires_moderator() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner_token = server.token_for(UserId::generate(), None).unwrap();
    let memorial = create_memorial(&server, &owner_token, &CreateMemorialRequest::new("Milo")).await;
    let tribute = submit_message(&server, &memorial.id, "Good boy").await;
    let body = json!({ "tribute_id": tribute.id });

    // Owning the memorial does not grant moderation
    let response = server
        .post_auth("/api/v1/admin/tributes/approve", &owner_token, &body)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(error.error.code, "MISSING_PERMISSIONS");

    let response = server
        .get_auth("/api/v1/admin/tributes", &owner_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.post("/api/v1/admin/tributes/reject", &body).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    // Still pending, so still hidden
    assert!(approved_tributes(&server, &memorial.id).await.data.is_empty());
}

#[tokio::test]
async fn test_message_validation() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.token_for(UserId::generate(), None).unwrap();
    let memorial = create_memorial(&server, &token, &CreateMemorialRequest::new("Nala")).await;

    let body = json!({ "memorial_id": memorial.id, "message": "x".repeat(501) });
    let response = server.post("/api/v1/tributes/message", &body).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "MESSAGE_TOO_LONG");

    let body = json!({ "memorial_id": memorial.id, "message": "x".repeat(500) });
    let response = server.post("/api/v1/tributes/message", &body).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
}
