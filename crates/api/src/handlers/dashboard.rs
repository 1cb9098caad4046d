//! Dashboard aggregation: the only fan-out caller in the tier.
//!
//! Composes four backend reads into one payload for the dashboard page.
//! The reads run concurrently and fail as a unit: a rejection in any one
//! surfaces a single aggregate error with no partial result.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;
use serde_json::Value;

use expense_gateway::{bearer, paths};

use crate::response::{failure_response, Envelope};
use crate::session::resolver::resolve_token;
use crate::state::AppState;

/// Aggregated dashboard payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub balances: Balances,
    pub spending_by_category: Vec<CategorySlice>,
    pub cashflow_trend: Vec<CashflowPoint>,
    pub recent_transactions: Vec<RecentTransaction>,
}

/// Headline balance figures.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Balances {
    pub total: f64,
    pub income: f64,
    pub expenses: f64,
    pub budget_remaining: f64,
}

/// One slice of the spending-by-category breakdown.
#[derive(Debug, Serialize)]
pub struct CategorySlice {
    pub name: String,
    pub value: f64,
}

/// One month of the cash-flow trend.
#[derive(Debug, Serialize)]
pub struct CashflowPoint {
    pub month: String,
    pub income: f64,
    pub expenses: f64,
}

/// A row of the recent-transactions list.
#[derive(Debug, Serialize)]
pub struct RecentTransaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub category: String,
    pub amount: f64,
    pub date: String,
}

/// How many recent transactions the dashboard shows.
const RECENT_TRANSACTION_COUNT: usize = 4;

/// GET /api/dashboard
///
/// This endpoint originates its own backend calls, so the credential comes
/// from the Token Resolver (cookie first, session fallback) rather than a
/// forwarded header.
pub async fn overview(State(state): State<AppState>, jar: CookieJar) -> Response {
    let authorization =
        resolve_token(&jar, &state.config.session).map(|token| bearer(&token));
    let auth = authorization.as_deref();

    let result = tokio::try_join!(
        state.backend.get(paths::TRANSACTIONS, auth),
        state.backend.get(paths::TRANSACTIONS_STATISTICS, auth),
        state.backend.get(paths::ACCOUNTS_SUMMARY, auth),
        state.backend.get(paths::BUDGETS_SUMMARY, auth),
    );

    match result {
        Ok((transactions, statistics, accounts_summary, budgets_summary)) => {
            let data = compose(
                &transactions,
                &statistics,
                &accounts_summary,
                &budgets_summary,
            );
            Json(Envelope::ok(data)).into_response()
        }
        Err(err) => failure_response(&err, "An error occurred while fetching dashboard data."),
    }
}

/// Map the four backend payloads onto the dashboard shape.
///
/// All extraction is defensive: a field the backend omits becomes zero or
/// an empty list, never an error.
fn compose(
    transactions: &Value,
    statistics: &Value,
    accounts_summary: &Value,
    budgets_summary: &Value,
) -> DashboardData {
    let balances = Balances {
        total: field_number(accounts_summary, "totalBalance"),
        income: field_number(statistics, "totalIncome"),
        expenses: field_number(statistics, "totalExpense"),
        budget_remaining: field_number(budgets_summary, "remainingBudget"),
    };

    let spending_by_category = statistics
        .get("categoryBreakdown")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .map(|item| CategorySlice {
                    name: field_string(item, "category"),
                    value: item
                        .get("_sum")
                        .map(|sum| field_number(sum, "amount"))
                        .unwrap_or(0.0),
                })
                .collect()
        })
        .unwrap_or_default();

    let cashflow_trend = statistics
        .get("monthlyTrend")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .map(|item| CashflowPoint {
                    month: field_string(item, "month"),
                    income: field_number(item, "income"),
                    expenses: field_number(item, "expenses"),
                })
                .collect()
        })
        .unwrap_or_default();

    let recent_transactions = transaction_rows(transactions)
        .iter()
        .take(RECENT_TRANSACTION_COUNT)
        .map(|tx| RecentTransaction {
            id: field_string(tx, "id"),
            kind: field_string(tx, "type"),
            category: field_string(tx, "category"),
            amount: field_number(tx, "amount"),
            date: field_string(tx, "transactionDate"),
        })
        .collect();

    DashboardData {
        balances,
        spending_by_category,
        cashflow_trend,
        recent_transactions,
    }
}

/// The transactions payload is either a bare array or wrapped in `data`.
fn transaction_rows(payload: &Value) -> &[Value] {
    payload
        .as_array()
        .or_else(|| payload.get("data").and_then(Value::as_array))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Numeric field that may arrive as a number or a numeric string.
fn field_number(value: &Value, key: &str) -> f64 {
    match value.get(key) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn field_string(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
