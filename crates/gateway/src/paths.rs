//! Fixed backend resource paths.
//!
//! The outbound surface of the tier, in one place. Routes with a resource
//! id append `/{id}` to the collection path.

pub const ACCOUNTS: &str = "/accounts";
pub const ACCOUNTS_SUMMARY: &str = "/accounts/summary";

pub const BUDGETS: &str = "/budgets";
pub const BUDGETS_SUMMARY: &str = "/budgets/summary";
pub const BUDGETS_ALERTS: &str = "/budgets/alerts";

pub const TRANSACTIONS: &str = "/transactions";
pub const TRANSACTIONS_STATISTICS: &str = "/transactions/statistics";
pub const TRANSACTIONS_TRANSFER: &str = "/transactions/transfer";

pub const AUTH_LOGIN: &str = "/auth/login";
pub const AUTH_REGISTER: &str = "/auth/register";
pub const AUTH_GOOGLE: &str = "/auth/google";
pub const AUTH_CONFIRM_EMAIL: &str = "/auth/confirm-email";
pub const AUTH_LOGOUT: &str = "/auth/logout";
