//! Integration tests for the dashboard aggregation endpoint.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, build_test_app, request};
use serde_json::json;

fn stock_responses(backend: &common::TestBackend) {
    backend.respond(
        "GET",
        "/transactions",
        200,
        json!([
            {"id": "t1", "type": "EXPENSE", "category": "FOOD_DINING", "amount": "12.50", "transactionDate": "2025-03-01T08:00:00.000Z"}
        ]),
    );
    backend.respond(
        "GET",
        "/transactions/statistics",
        200,
        json!({
            "totalIncome": 1800,
            "totalExpense": 12.5,
            "categoryBreakdown": [{"category": "FOOD_DINING", "_sum": {"amount": "12.50"}}],
            "monthlyTrend": [{"month": "03", "income": 1800, "expenses": 12.5}]
        }),
    );
    backend.respond("GET", "/accounts/summary", 200, json!({"totalBalance": "2500.75"}));
    backend.respond("GET", "/budgets/summary", 200, json!({"remainingBudget": 487.5}));
}

// ---------------------------------------------------------------------------
// Test: four reads compose into one payload
// ---------------------------------------------------------------------------

#[tokio::test]
async fn dashboard_composes_four_backend_reads() {
    let (app, backend) = build_test_app().await;
    stock_responses(&backend);

    let response = request(
        app,
        Method::GET,
        "/api/dashboard",
        None,
        &[("cookie", "access_token=tok-1")],
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);

    let data = &body["data"];
    assert_eq!(data["balances"]["total"].as_f64(), Some(2500.75));
    assert_eq!(data["balances"]["income"].as_f64(), Some(1800.0));
    assert_eq!(data["balances"]["expenses"].as_f64(), Some(12.5));
    assert_eq!(data["balances"]["budgetRemaining"].as_f64(), Some(487.5));
    assert_eq!(data["spendingByCategory"][0]["name"], "FOOD_DINING");
    assert_eq!(data["cashflowTrend"][0]["month"], "03");
    assert_eq!(data["recentTransactions"][0]["id"], "t1");
    assert_eq!(data["recentTransactions"][0]["amount"].as_f64(), Some(12.5));

    // All four reads went out, each carrying the resolved credential.
    let hits = backend.hits();
    assert_eq!(hits.len(), 4);
    for hit in &hits {
        assert_eq!(hit.authorization.as_deref(), Some("Bearer tok-1"));
    }
}

// ---------------------------------------------------------------------------
// Test: one failing read fails the aggregate with no partial result
// ---------------------------------------------------------------------------

#[tokio::test]
async fn one_failing_read_fails_the_aggregate() {
    let (app, backend) = build_test_app().await;
    stock_responses(&backend);
    backend.respond(
        "GET",
        "/budgets/summary",
        500,
        json!({"message": "summary unavailable"}),
    );

    let response = request(app, Method::GET, "/api/dashboard", None, &[]).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "summary unavailable");
    // No partial dashboard payload accompanies the failure.
    assert!(body.get("data").is_none());
}

// ---------------------------------------------------------------------------
// Test: verb gating applies to the aggregation endpoint too
// ---------------------------------------------------------------------------

#[tokio::test]
async fn dashboard_rejects_other_verbs_locally() {
    let (app, backend) = build_test_app().await;

    let response = request(app, Method::POST, "/api/dashboard", None, &[]).await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(backend.hit_count(), 0);
}
