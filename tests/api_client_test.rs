//! `ApiClient` and the commands against a loopback HTTP server.

mod common;

use std::time::Duration;

use common::GavelTest;
use common::http_server::{Canned, TestServer};
use gavel::commands::find_record;
use gavel::{
    ApiClient, ApiError, GavelError, ListController, ListQuery, ProfileUpdate, Resource,
    ResourceClient, Role, Session,
};
use reqwest::StatusCode;
use serde_json::{Value, json};

const TIMEOUT: Duration = Duration::from_secs(5);

fn admin() -> Session {
    Session::new(
        Some("admin-token".to_string()),
        Some("ops@example.com".to_string()),
        Role::Admin,
    )
}

fn withdrawal_json(i: usize, status: &str) -> Value {
    json!({
        "_id": format!("w{i}"),
        "name": format!("User {i}"),
        "userEmail": format!("user{i}@example.com"),
        "amount": 100 * i,
        "status": status,
    })
}

fn api_error(err: GavelError) -> ApiError {
    match err {
        GavelError::Api(err) => err,
        other => panic!("expected an API error, got {other:?}"),
    }
}

// ============================================================================
// Requests
// ============================================================================

#[tokio::test]
async fn test_list_sends_bearer_token_and_accept() {
    let server = TestServer::start(vec![Canned::json(
        200,
        json!([withdrawal_json(1, "pending"), withdrawal_json(2, "completed")]),
    )])
    .await;
    let client = ApiClient::new(&server.url(), TIMEOUT).unwrap();

    let payload = client
        .fetch_list(Resource::Withdrawals.spec(), ListQuery::all(), &admin())
        .await
        .unwrap();

    assert_eq!(payload.items.len(), 2);
    assert_eq!(payload.items[1].status(), Some("completed"));
    let request = &server.received()[0];
    assert_eq!(request.method, "GET");
    assert_eq!(request.target, "/api/transactions/type/withdrawal");
    assert_eq!(request.authorization.as_deref(), Some("Bearer admin-token"));
    assert_eq!(request.accept.as_deref(), Some("application/json"));
}

#[tokio::test]
async fn test_anonymous_session_sends_no_authorization() {
    let server = TestServer::start(vec![Canned::json(200, json!({ "contacts": [] }))]).await;
    let client = ApiClient::new(&server.url(), TIMEOUT).unwrap();
    let session = Session::new(None, None, Role::Admin);

    client
        .fetch_list(Resource::Contacts.spec(), ListQuery::all(), &session)
        .await
        .unwrap();
    assert_eq!(server.received()[0].authorization, None);
}

#[tokio::test]
async fn test_server_paged_list_sends_page_and_limit() {
    let server = TestServer::start(vec![Canned::json(
        200,
        json!({ "orders": [{ "_id": "o6", "itemName": "Lamp" }], "totalPages": 3 }),
    )])
    .await;
    let client = ApiClient::new(&server.url(), TIMEOUT).unwrap();

    let payload = client
        .fetch_list(Resource::Orders.spec(), ListQuery::page(2, 5), &admin())
        .await
        .unwrap();

    assert_eq!(payload.total_pages, Some(3));
    assert_eq!(server.targets(), ["/api/orders?page=2&limit=5"]);
}

#[tokio::test]
async fn test_email_scoped_path() {
    let server = TestServer::start(vec![Canned::json(200, json!({ "feedbacks": [] }))]).await;
    let client = ApiClient::new(&server.url(), TIMEOUT).unwrap();
    let session = Session::new(None, Some("seller@example.com".to_string()), Role::Seller);

    client
        .fetch_list(Resource::ProductFeedback.spec(), ListQuery::all(), &session)
        .await
        .unwrap();
    assert_eq!(
        server.targets(),
        ["/api/product-feedback/seller/seller@example.com"]
    );
}

// ============================================================================
// Error mapping
// ============================================================================

#[tokio::test]
async fn test_error_status_carries_server_message() {
    let server = TestServer::start(vec![Canned::json(
        500,
        json!({ "success": false, "message": "Database unavailable" }),
    )])
    .await;
    let client = ApiClient::new(&server.url(), TIMEOUT).unwrap();

    let err = client
        .fetch_list(Resource::Reports.spec(), ListQuery::all(), &admin())
        .await
        .unwrap_err();
    assert_eq!(
        api_error(err),
        ApiError::status(
            StatusCode::INTERNAL_SERVER_ERROR,
            Some("Database unavailable".to_string())
        )
    );
}

#[tokio::test]
async fn test_error_status_without_json_body() {
    let server = TestServer::start(vec![Canned::text(404, "Cannot GET /api/contact")]).await;
    let client = ApiClient::new(&server.url(), TIMEOUT).unwrap();

    let err = api_error(
        client
            .fetch_list(Resource::Contacts.spec(), ListQuery::all(), &admin())
            .await
            .unwrap_err(),
    );
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "server responded with 404 Not Found");
}

#[tokio::test]
async fn test_non_json_body_is_malformed() {
    let server = TestServer::start(vec![Canned::text(200, "<html>maintenance</html>")]).await;
    let client = ApiClient::new(&server.url(), TIMEOUT).unwrap();

    let err = api_error(
        client
            .fetch_list(Resource::Customers.spec(), ListQuery::all(), &admin())
            .await
            .unwrap_err(),
    );
    assert!(
        matches!(&err, ApiError::Malformed(detail) if detail.starts_with("invalid JSON")),
        "{err:?}"
    );
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let server = TestServer::start(vec![]).await;
    let url = server.url();
    drop(server);
    // Give the aborted accept loop a moment to release the port
    tokio::time::sleep(Duration::from_millis(50)).await;
    let client = ApiClient::new(&url, TIMEOUT).unwrap();

    let err = api_error(
        client
            .fetch_list(Resource::Contacts.spec(), ListQuery::all(), &admin())
            .await
            .unwrap_err(),
    );
    assert!(matches!(err, ApiError::Transport { .. }), "{err:?}");
}

// ============================================================================
// Writes
// ============================================================================

#[tokio::test]
async fn test_withdrawal_status_is_put_with_status_body() {
    let server = TestServer::start(vec![Canned::json(
        200,
        json!({ "success": true, "transaction": withdrawal_json(7, "completed") }),
    )])
    .await;
    let client = ApiClient::new(&server.url(), TIMEOUT).unwrap();

    let record = client
        .update_status(Resource::Withdrawals.spec(), "w7", "completed", &admin())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(record.status(), Some("completed"));
    let request = &server.received()[0];
    assert_eq!(request.method, "PUT");
    assert_eq!(request.target, "/api/transactions/w7");
    assert_eq!(request.json(), json!({ "status": "completed" }));
    assert_eq!(request.authorization.as_deref(), Some("Bearer admin-token"));
}

#[tokio::test]
async fn test_seller_status_is_patch_on_status_segment() {
    let server = TestServer::start(vec![Canned::json(200, json!({ "message": "updated" }))]).await;
    let client = ApiClient::new(&server.url(), TIMEOUT).unwrap();

    let record = client
        .update_status(Resource::Sellers.spec(), "s1", "suspended", &admin())
        .await
        .unwrap();

    assert!(record.is_none());
    let request = &server.received()[0];
    assert_eq!(request.method, "PATCH");
    assert_eq!(request.target, "/api/sellers/s1/status");
    assert_eq!(request.json(), json!({ "status": "suspended" }));
}

#[tokio::test]
async fn test_write_rejected_with_success_false() {
    let server = TestServer::start(vec![Canned::json(
        200,
        json!({ "success": false, "message": "Report already closed" }),
    )])
    .await;
    let client = ApiClient::new(&server.url(), TIMEOUT).unwrap();

    let err = client
        .update_status(Resource::Reports.spec(), "r1", "resolved", &admin())
        .await
        .unwrap_err();
    assert_eq!(
        api_error(err).to_string(),
        "server reported failure: Report already closed"
    );
}

#[tokio::test]
async fn test_read_receipt_is_patch_with_read_flag() {
    let server = TestServer::start(vec![Canned::text(200, "")]).await;
    let client = ApiClient::new(&server.url(), TIMEOUT).unwrap();

    let record = client
        .mark_read(Resource::Notifications.spec(), "n4", &admin())
        .await
        .unwrap();

    assert!(record.is_none());
    let request = &server.received()[0];
    assert_eq!(request.method, "PATCH");
    assert_eq!(request.target, "/api/notifications/n4");
    assert_eq!(request.json(), json!({ "read": true }));
}

#[tokio::test]
async fn test_read_receipt_on_other_resource_makes_no_request() {
    let server = TestServer::start(vec![]).await;
    let client = ApiClient::new(&server.url(), TIMEOUT).unwrap();

    let err = client
        .mark_read(Resource::Contacts.spec(), "c1", &admin())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        GavelError::ReadReceiptNotSupported {
            resource: "contacts"
        }
    ));
    assert!(server.received().is_empty());
}

#[tokio::test]
async fn test_profile_update_patches_changed_fields() {
    let server = TestServer::start(vec![Canned::json(
        200,
        json!({ "user": { "_id": "u1", "email": "ops@example.com", "city": "Lagos" } }),
    )])
    .await;
    let client = ApiClient::new(&server.url(), TIMEOUT).unwrap();
    let changes = ProfileUpdate {
        city: Some("Lagos".to_string()),
        pin_code: Some("100001".to_string()),
        ..Default::default()
    };

    let user = client
        .update_profile("ops@example.com", &changes, &admin())
        .await
        .unwrap();

    assert_eq!(user.get("city"), Some(&json!("Lagos")));
    let request = &server.received()[0];
    assert_eq!(request.method, "PATCH");
    assert_eq!(
        request.target,
        "/api/auth/user/updateUserProfile/ops@example.com"
    );
    assert_eq!(request.json(), json!({ "city": "Lagos", "pinCode": "100001" }));
}

// ============================================================================
// Commands
// ============================================================================

#[tokio::test]
async fn test_find_record_walks_server_pages() {
    let page = |first: usize| {
        let orders: Vec<Value> = (first..first + 5)
            .map(|i| json!({ "_id": format!("o{i}"), "itemName": "Lamp" }))
            .collect();
        Canned::json(200, json!({ "orders": orders, "totalPages": 3 }))
    };
    let server = TestServer::start(vec![page(1), page(6)]).await;
    let client = ApiClient::new(&server.url(), TIMEOUT).unwrap();
    let session = admin();
    let mut controller =
        ListController::new(&client, &session, Resource::Orders.spec(), 5, TIMEOUT);

    find_record(&mut controller, "o8").await.unwrap();

    assert_eq!(controller.state().selected_id(), Some("o8"));
    assert_eq!(controller.state().page(), 2);
    assert_eq!(
        server.targets(),
        ["/api/orders?page=1&limit=5", "/api/orders?page=2&limit=5"]
    );
}

#[tokio::test]
async fn test_find_record_stops_at_last_page() {
    let server = TestServer::start(vec![Canned::json(
        200,
        json!({ "orders": [{ "_id": "o1" }], "totalPages": 1 }),
    )])
    .await;
    let client = ApiClient::new(&server.url(), TIMEOUT).unwrap();
    let session = admin();
    let mut controller =
        ListController::new(&client, &session, Resource::Orders.spec(), 5, TIMEOUT);

    let err = find_record(&mut controller, "o99").await.unwrap_err();
    assert!(matches!(err, GavelError::RecordNotFound(ref id) if id == "o99"));
    assert_eq!(server.received().len(), 1);
}

/// Run the binary on a blocking thread so the server keeps answering.
async fn run_gavel(gavel: GavelTest, args: Vec<String>) -> (GavelTest, std::process::Output) {
    tokio::task::spawn_blocking(move || {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        let output = gavel.run(&args);
        (gavel, output)
    })
    .await
    .unwrap()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_ls_prints_first_page_as_json() {
    let withdrawals: Vec<Value> = (1..=12).map(|i| withdrawal_json(i, "pending")).collect();
    let server = TestServer::start(vec![Canned::json(
        200,
        json!({ "success": true, "transactions": withdrawals }),
    )])
    .await;
    let gavel = GavelTest::new();
    gavel.write_config("session:\n  token: cli-token\n");

    let args = ["ls", "withdrawals", "--json", "--api-url", &server.url()]
        .map(String::from)
        .to_vec();
    let (_gavel, output) = run_gavel(gavel, args).await;

    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );
    let listing: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(listing["resource"], "withdrawals");
    assert_eq!(listing["page"], 1);
    assert_eq!(listing["page_count"], 3);
    assert_eq!(listing["items"].as_array().unwrap().len(), 5);
    assert_eq!(listing["items"][0]["_id"], "w1");

    let request = &server.received()[0];
    assert_eq!(request.authorization.as_deref(), Some("Bearer cli-token"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_show_marks_notification_read() {
    let server = TestServer::start(vec![
        Canned::json(
            200,
            json!({ "notifications": [
                { "_id": "n1", "title": "You were outbid", "read": false },
            ]}),
        ),
        Canned::json(200, json!({ "success": true })),
    ])
    .await;
    let gavel = GavelTest::new();

    let args = ["show", "notifications", "n1", "--json", "--api-url", &server.url()]
        .map(String::from)
        .to_vec();
    let (_gavel, output) = run_gavel(gavel, args).await;

    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );
    let shown: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(shown["record"]["read"], true);

    let received = server.received();
    assert_eq!(received.len(), 2);
    assert_eq!(received[1].method, "PATCH");
    assert_eq!(received[1].target, "/api/notifications/n1");
}
