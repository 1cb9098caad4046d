//! Route tree for the edge tier.

pub mod accounts;
pub mod auth;
pub mod budgets;
pub mod dashboard;
pub mod health;
pub mod pages;
pub mod transactions;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /accounts                      list, create
/// /accounts/summary              summary
/// /accounts/{id}                 get, update (PATCH), delete
///
/// /budgets                       list, create
/// /budgets/summary               summary
/// /budgets/alerts                alerts
/// /budgets/{id}                  get, update (PATCH), delete
///
/// /transactions                  list, create
/// /transactions/statistics       statistics
/// /transactions/transfer         transfer (POST)
/// /transactions/{id}             get, update (PUT), delete
///
/// /auth/register                 register (POST)
/// /auth/confirm-email            confirm email (POST, ?token=)
/// /auth/callback/credentials     credential sign-in (POST)
/// /auth/callback/google          Google sign-in completion (POST)
/// /auth/session                  session read (GET)
/// /auth/signout                  sign-out (POST)
///
/// /dashboard                     aggregated dashboard payload (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/accounts", accounts::router())
        .nest("/budgets", budgets::router())
        .nest("/transactions", transactions::router())
        .nest("/auth", auth::router())
        .nest("/dashboard", dashboard::router())
}
