//! Budget editing page and endpoint.

use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    budget::{
        BudgetRecord,
        core::{BudgetForm, BudgetState},
        create::budget_form_view,
    },
    endpoints,
    form::invalid_input_message,
    html::{FORM_CONTAINER_STYLE, base},
    navigation::NavBar,
    table::{get_row, replace_row},
};

/// Render the form for editing the budget at row `budget_id`.
pub async fn get_edit_budget_page(
    Path(budget_id): Path<usize>,
    State(state): State<BudgetState>,
) -> Result<Response, Error> {
    let budget = get_row::<BudgetRecord>(&state.budgets_path, budget_id)
        .map_err(Error::into_not_found)
        .inspect_err(|error| tracing::error!("Could not get budget {budget_id}: {error}"))?;

    Ok(edit_budget_view(budget_id, &BudgetForm::from(&budget), "").into_response())
}

/// Replace the budget at row `budget_id` with the form data, redirects to the
/// reports page on success.
pub async fn edit_budget_endpoint(
    Path(budget_id): Path<usize>,
    State(state): State<BudgetState>,
    Form(form): Form<BudgetForm>,
) -> Result<Response, Error> {
    let budget = match form.parse() {
        Ok(budget) => budget,
        Err(error) => {
            return Ok((
                StatusCode::BAD_REQUEST,
                edit_budget_view(budget_id, &form, &invalid_input_message(&error)),
            )
                .into_response());
        }
    };

    replace_row(&state.budgets_path, budget_id, budget)
        .map_err(Error::into_not_found)
        .inspect_err(|error| tracing::error!("Could not update budget {budget_id}: {error}"))?;

    Ok(Redirect::to(endpoints::REPORTS).into_response())
}

fn edit_budget_view(budget_id: usize, form: &BudgetForm, error_message: &str) -> Markup {
    let edit_url = endpoints::format_endpoint(endpoints::EDIT_BUDGET, budget_id);
    let nav_bar = NavBar::new(&edit_url).into_html();
    let form = budget_form_view(&edit_url, form, "Update Budget", error_message);

    let content = html! {
        (nav_bar)
        div class=(FORM_CONTAINER_STYLE)
        {
            h1 { "Edit Budget " (budget_id) }
            (form)
        }
    };

    base("Edit Budget", &content)
}
