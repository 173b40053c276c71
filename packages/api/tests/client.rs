//! REST client behaviour against a mock SplitPro server.

#![cfg(not(target_arch = "wasm32"))]

use api::{
    ApiClient, ApiError, ClientConfig, CreateGroupRequest, LoginRequest, SignupRequest,
    SupportRequest,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&ClientConfig::default().with_base_url(server.uri())).unwrap()
}

fn user_json() -> serde_json::Value {
    json!({
        "id": "u1",
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "emailVerified": true,
        "phoneVerified": false,
        "accountLocked": false
    })
}

fn no_csrf_header(req: &Request) -> bool {
    !req.headers.contains_key("x-xsrf-token")
}

#[tokio::test]
async fn test_current_user_when_signed_in() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .expect(1)
        .mount(&server)
        .await;

    let user = client_for(&server).current_user().await.unwrap().unwrap();
    assert_eq!(user.name, "Ada Lovelace");
    assert_eq!(user.initials(), "AL");
}

#[tokio::test]
async fn test_current_user_unauthorized_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    assert!(client_for(&server).current_user().await.unwrap().is_none());
}

#[tokio::test]
async fn test_current_user_server_error_is_err() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server).current_user().await.unwrap_err();
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_login_posts_json_and_returns_user() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"identifier": "ada@example.com", "password": "Secret1!"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": user_json(),
            "message": "Login successful!",
            "expiresIn": 86400000
        })))
        .expect(1)
        .mount(&server)
        .await;

    let user = client_for(&server)
        .login(&LoginRequest {
            identifier: "ada@example.com".to_string(),
            password: "Secret1!".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(user.id, "u1");
}

#[tokio::test]
async fn test_login_rejection_carries_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid credentials"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .login(&LoginRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Rejected { status: 401, .. }));
    assert_eq!(err.server_message(), Some("Invalid credentials"));
}

#[tokio::test]
async fn test_signup_created_returns_user() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/signup"))
        .and(body_json(json!({
            "name": "Ada",
            "phone": "+15551234567",
            "password": "Secret1!",
            "passwordConfirm": "Secret1!"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "user": user_json(),
            "message": "Account created successfully!"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = SignupRequest::from_form("Ada", "", "+15551234567", "Secret1!", "Secret1!");
    let user = client_for(&server).signup(&request).await.unwrap();
    assert_eq!(user.email.as_deref(), Some("ada@example.com"));
}

#[tokio::test]
async fn test_csrf_cookie_is_mirrored_on_state_changing_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "XSRF-TOKEN=tok%2Bab%3D%3D; Path=/")
                .set_body_json(user_json()),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/friends"))
        .and(no_csrf_header)
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/friends"))
        .and(header("x-xsrf-token", "tok+ab=="))
        .and(body_json(json!({"identifier": "bob@example.com"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "f1",
            "friendId": "u2",
            "friendName": "Bob",
            "friendEmail": "bob@example.com",
            "balance": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.current_user().await.unwrap();
    assert!(client.friends().await.unwrap().is_empty());
    let friend = client.add_friend("  bob@example.com ").await.unwrap();
    assert_eq!(friend.friend_name, "Bob");
}

#[tokio::test]
async fn test_no_csrf_header_without_cookie() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .and(no_csrf_header)
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).logout().await.unwrap();
}

#[tokio::test]
async fn test_remove_friend_encodes_id() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/friends/abc-123%2Fx"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).remove_friend("abc-123/x").await.unwrap();
}

#[tokio::test]
async fn test_remove_missing_friend_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/friends/nope"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server).remove_friend("nope").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.server_message(), None);
}

#[tokio::test]
async fn test_expenses_page_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/expenses"))
        .and(query_param("page", "0"))
        .and(query_param("size", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [{
                "id": "e1",
                "description": "Dinner",
                "totalAmount": 60.0,
                "currency": "USD",
                "payerId": "u1",
                "payerName": "Ada",
                "createdAt": "2024-02-29T20:00:00",
                "category": "FOOD"
            }],
            "totalElements": 1,
            "totalPages": 1,
            "number": 0,
            "size": 20
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client_for(&server).expenses(0, 20).await.unwrap();
    assert_eq!(page.content.len(), 1);
    assert_eq!(page.content[0].payer_name, "Ada");
    assert_eq!(page.total_elements, 1);
}

#[tokio::test]
async fn test_create_group_and_list() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/groups"))
        .and(body_json(json!({"name": "Trip", "memberIds": ["u2", "u3"]})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "g1",
            "name": "Trip",
            "createdBy": "u1",
            "createdByName": "Ada",
            "members": [],
            "totalExpenses": 0,
            "totalAmount": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let group = client_for(&server)
        .create_group(&CreateGroupRequest {
            name: "Trip".to_string(),
            description: None,
            member_ids: vec!["u2".to_string(), "u3".to_string()],
        })
        .await
        .unwrap();
    assert_eq!(group.id, "g1");
}

#[tokio::test]
async fn test_forgot_password_plain_text_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/forgot-password"))
        .and(body_json(json!({"email": "ada@example.com"})))
        .respond_with(ResponseTemplate::new(500).set_body_string("Failed to process request"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .forgot_password(" ada@example.com ")
        .await
        .unwrap_err();
    assert_eq!(err.server_message(), Some("Failed to process request"));
}

#[tokio::test]
async fn test_support_returns_ticket() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/support"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Thanks!",
            "ticketId": "SP-123456-007",
            "estimatedResponseTime": "24 hours"
        })))
        .mount(&server)
        .await;

    let response = client_for(&server)
        .send_support(&SupportRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: None,
            message: "The export button does nothing".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(response.ticket_id.as_deref(), Some("SP-123456-007"));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let client = ApiClient::new(&ClientConfig::default().with_base_url("http://127.0.0.1:1")).unwrap();
    let err = client.friends().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
    assert_eq!(err.server_message(), None);
}
