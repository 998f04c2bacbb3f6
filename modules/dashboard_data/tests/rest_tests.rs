//! REST routes driven through `tower::ServiceExt::oneshot`

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

mod common;
use common::*;

async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_seed_endpoint_reports_success() {
    print_test_header(
        "test_seed_endpoint_reports_success",
        &["Verify that GET /seed writes the data and returns the success message."],
    );
    let module = migrated_module().await;
    let router = module.router();

    let (status, body) = get(&router, "/seed").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "message": "Database seeded successfully" }));

    let (_, cards) = get(&router, "/dashboard/cards").await;
    assert_eq!(cards["numberOfInvoices"], FIXTURE_INVOICES);
}

#[tokio::test]
async fn test_seed_endpoint_failure_is_500() {
    print_test_header(
        "test_seed_endpoint_failure_is_500",
        &["Verify that a seeding failure returns 500 with the fixed error body."],
    );
    let module = unmigrated_module().await;

    let (status, body) = get(&module.router(), "/seed").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, serde_json::json!({ "error": "Failed to seed the database" }));
}

#[tokio::test]
async fn test_revenue_failure_is_500() {
    let module = unmigrated_module().await;

    let (status, body) = get(&module.router(), "/dashboard/revenue").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to fetch revenue data.");
}

#[tokio::test]
async fn test_revenue_and_latest_invoices() {
    let module = seeded_module().await;
    let router = module.router();

    let (status, revenue) = get(&router, "/dashboard/revenue").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(revenue.as_array().map(Vec::len), Some(FIXTURE_MONTHS));

    let (status, latest) = get(&router, "/dashboard/latest-invoices").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(latest[0]["name"], "Michael Novotny");
    assert_eq!(latest[0]["amount"], "$448.00");
    assert_eq!(latest[0]["image_url"], "/customers/michael-novotny.png");
}

#[tokio::test]
async fn test_card_data_uses_camel_case() {
    let module = seeded_module().await;

    let (status, body) = get(&module.router(), "/dashboard/cards").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!({
            "numberOfCustomers": 6,
            "numberOfInvoices": 13,
            "totalPaidInvoices": "$1,006.26",
            "totalPendingInvoices": "$1,256.32",
        })
    );
}

#[tokio::test]
async fn test_invoice_list_and_pages() {
    print_test_header(
        "test_invoice_list_and_pages",
        &["Verify query-string handling of the invoices table routes."],
    );
    let module = seeded_module().await;
    let router = module.router();

    let (status, body) = get(&router, "/invoices/pages?query=paid").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "total_pages": 2 }));

    let (_, body) = get(&router, "/invoices/pages").await;
    assert_eq!(body["total_pages"], 3);

    let (status, rows) = get(&router, "/invoices?query=evil&page=1").await;
    assert_eq!(status, StatusCode::OK);
    let rows = rows.as_array().cloned().unwrap_or_default();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["customer_id"], EVIL_RABBIT_ID);
    assert_eq!(rows[0]["status"], "pending");
    assert_eq!(rows[0]["date"], "2023-06-27");

    // Missing page defaults to the first one
    let (_, rows) = get(&router, "/invoices").await;
    assert_eq!(rows.as_array().map(Vec::len), Some(6));
}

#[tokio::test]
async fn test_invoice_form_round_trip() {
    let module = seeded_module().await;
    let router = module.router();
    let (_, rows) = get(&router, "/invoices?query=15795").await;
    let id = rows[0]["id"].as_str().unwrap().to_string();

    let (status, form) = get(&router, &format!("/invoices/{}", id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(form["id"], id);
    assert_eq!(form["customer_id"], EVIL_RABBIT_ID);
    assert_eq!(form["amount"], 157.95);
    assert_eq!(form["status"], "pending");
}

#[tokio::test]
async fn test_unknown_invoice_is_404() {
    let module = seeded_module().await;

    let (status, body) = get(&module.router(), "/invoices/unknown").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Invoice not found.");
}

#[tokio::test]
async fn test_customer_routes() {
    let module = seeded_module().await;
    let router = module.router();

    let (status, customers) = get(&router, "/customers").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(customers[0]["name"], "Amy Burns");

    let (status, table) = get(&router, "/customers/table?query=rabbit").await;
    assert_eq!(status, StatusCode::OK);
    let table = table.as_array().cloned().unwrap_or_default();
    assert_eq!(table.len(), 1);
    assert_eq!(table[0]["total_invoices"], 2);
    assert_eq!(table[0]["total_pending"], "$164.61");
    assert_eq!(table[0]["total_paid"], "$0.00");
    assert_eq!(table[0]["invoices"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let module = migrated_module().await;

    let (status, body) = get(&module.router(), "/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not found.");
}

#[tokio::test]
async fn test_huge_page_returns_empty_list() {
    let module = seeded_module().await;

    let (status, rows) = get(&module.router(), "/invoices?page=18446744073709551615").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(rows, serde_json::json!([]));
}

#[tokio::test]
async fn test_percent_query_matches_nothing() {
    let module = seeded_module().await;

    let (status, body) = get(&module.router(), "/invoices/pages?query=%25").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_pages"], 0);
}
