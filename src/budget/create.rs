//! Page and endpoint for adding a budget.

use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    budget::core::{BudgetForm, BudgetState},
    endpoints,
    form::{amount_input, error_message_view, invalid_input_message, text_input},
    html::{BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, FORM_STYLE, base},
    navigation::NavBar,
    table::append_row,
};

/// Render the page for adding a budget.
pub async fn get_add_budget_page() -> Response {
    add_budget_view(&BudgetForm::default(), "").into_response()
}

/// Handle the form for adding a budget, redirects to the dashboard on success.
pub async fn add_budget_endpoint(
    State(state): State<BudgetState>,
    Form(form): Form<BudgetForm>,
) -> Result<Response, Error> {
    let budget = match form.parse() {
        Ok(budget) => budget,
        Err(error) => {
            return Ok((
                StatusCode::BAD_REQUEST,
                add_budget_view(&form, &invalid_input_message(&error)),
            )
                .into_response());
        }
    };

    append_row(&state.budgets_path, budget)
        .inspect_err(|error| tracing::error!("Could not add budget {form:?}: {error}"))?;

    Ok(Redirect::to(endpoints::ROOT).into_response())
}

fn add_budget_view(form: &BudgetForm, error_message: &str) -> Markup {
    let nav_bar = NavBar::new(endpoints::ADD_BUDGET).into_html();
    let form = budget_form_view(endpoints::ADD_BUDGET, form, "Add Budget", error_message);

    let content = html! {
        (nav_bar)
        div class=(FORM_CONTAINER_STYLE)
        {
            h1 { "Add Budget" }
            (form)
        }
    };

    base("Add Budget", &content)
}

/// The form for adding or editing a budget, which posts to `action`.
pub(super) fn budget_form_view(
    action: &str,
    form: &BudgetForm,
    submit_text: &str,
    error_message: &str,
) -> Markup {
    html! {
        form method="post" action=(action) class=(FORM_STYLE)
        {
            (text_input("month", "Month", &form.month))
            (text_input("category", "Category", &form.category))
            (amount_input("budget", "Budget", &form.budget))

            (error_message_view(error_message))

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { (submit_text) }
        }
    }
}
