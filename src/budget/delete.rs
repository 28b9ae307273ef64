//! Budget deletion endpoint.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};

use crate::{
    Error,
    budget::{BudgetRecord, core::BudgetState},
    endpoints,
    table::delete_row,
};

/// Delete the budget at row `budget_id` and redirect to the reports page.
pub async fn delete_budget_endpoint(
    Path(budget_id): Path<usize>,
    State(state): State<BudgetState>,
) -> Result<Response, Error> {
    let removed = delete_row::<BudgetRecord>(&state.budgets_path, budget_id)
        .map_err(Error::into_not_found)
        .inspect_err(|error| tracing::error!("Could not delete budget {budget_id}: {error}"))?;

    tracing::debug!("Deleted budget {budget_id}: {removed:?}");

    Ok(Redirect::to(endpoints::REPORTS).into_response())
}
