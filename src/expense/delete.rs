//! Expense deletion endpoint.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};

use crate::{
    Error, endpoints,
    expense::{ExpenseRecord, core::ExpenseState},
    table::delete_row,
};

/// Delete the expense at row `expense_id` and redirect to the expenses page.
///
/// Every expense after the deleted one moves up by one row ID.
pub async fn delete_expense_endpoint(
    Path(expense_id): Path<usize>,
    State(state): State<ExpenseState>,
) -> Result<Response, Error> {
    let removed = delete_row::<ExpenseRecord>(&state.expenses_path, expense_id)
        .map_err(Error::into_not_found)
        .inspect_err(|error| tracing::error!("Could not delete expense {expense_id}: {error}"))?;

    tracing::debug!("Deleted expense {expense_id}: {removed:?}");

    Ok(Redirect::to(endpoints::VIEW_EXPENSES).into_response())
}
