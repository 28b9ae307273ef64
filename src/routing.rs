//! Application router configuration.

use axum::{Router, routing::get};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    budget::{
        add_budget_endpoint, delete_budget_endpoint, edit_budget_endpoint, get_add_budget_page,
        get_edit_budget_page, get_reports_page,
    },
    chart::get_charts_page,
    dashboard::get_dashboard_page,
    endpoints,
    expense::{
        add_expense_endpoint, delete_expense_endpoint, edit_expense_endpoint,
        get_add_expense_page, get_edit_expense_page, get_expenses_page,
    },
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
///
/// Deleting is done with a GET request so that a plain link can delete a row.
/// Such links must not be prefetched or followed by crawlers.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_dashboard_page))
        .route(endpoints::CHARTS, get(get_charts_page))
        .route(
            endpoints::ADD_EXPENSE,
            get(get_add_expense_page).post(add_expense_endpoint),
        )
        .route(endpoints::VIEW_EXPENSES, get(get_expenses_page))
        .route(
            endpoints::EDIT_EXPENSE,
            get(get_edit_expense_page).post(edit_expense_endpoint),
        )
        .route(endpoints::DELETE_EXPENSE, get(delete_expense_endpoint))
        .route(
            endpoints::ADD_BUDGET,
            get(get_add_budget_page).post(add_budget_endpoint),
        )
        .route(endpoints::REPORTS, get(get_reports_page))
        .route(
            endpoints::EDIT_BUDGET,
            get(get_edit_budget_page).post(edit_budget_endpoint),
        )
        .route(endpoints::DELETE_BUDGET, get(delete_budget_endpoint))
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}
