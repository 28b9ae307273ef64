//! The endpoint URIs.
//!
//! For endpoints that take a parameter, e.g., '/edit-expense/{expense_id}', use [format_endpoint].

/// The dashboard with totals for expenses and budgets.
pub const ROOT: &str = "/";
/// The page with bar charts of expenses and budgets by category.
pub const CHARTS: &str = "/charts";
/// The page and form target for adding an expense.
pub const ADD_EXPENSE: &str = "/add-expense";
/// The page listing every expense.
pub const VIEW_EXPENSES: &str = "/view-expenses";
/// The page and form target for editing an expense.
pub const EDIT_EXPENSE: &str = "/edit-expense/{expense_id}";
/// The route for deleting an expense.
pub const DELETE_EXPENSE: &str = "/delete-expense/{expense_id}";
/// The page and form target for adding a budget.
pub const ADD_BUDGET: &str = "/add-budget";
/// The page listing every budget.
pub const REPORTS: &str = "/reports";
/// The page and form target for editing a budget.
pub const EDIT_BUDGET: &str = "/edit-budget/{budget_id}";
/// The route for deleting a budget.
pub const DELETE_BUDGET: &str = "/delete-budget/{budget_id}";
/// The route for static files.
pub const STATIC: &str = "/static";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/edit-expense/{expense_id}', '{expense_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: usize) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|offset| param_start + offset + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
