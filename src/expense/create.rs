//! Page and endpoint for adding an expense.

use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use maud::{Markup, html};

use crate::{
    Error, endpoints,
    expense::core::{ExpenseForm, ExpenseState},
    form::{amount_input, error_message_view, invalid_input_message, text_input},
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, FORM_LABEL_STYLE, FORM_STYLE,
        FORM_TEXT_INPUT_STYLE, base,
    },
    navigation::NavBar,
    table::append_row,
};

/// Render the page for adding an expense, with the date set to today.
pub async fn get_add_expense_page() -> Response {
    add_expense_view(&ExpenseForm::new_for_today(), "").into_response()
}

/// Handle the form for adding an expense, redirects to the dashboard on success.
///
/// An invalid amount re-renders the form with an error message.
pub async fn add_expense_endpoint(
    State(state): State<ExpenseState>,
    Form(form): Form<ExpenseForm>,
) -> Result<Response, Error> {
    let expense = match form.parse() {
        Ok(expense) => expense,
        Err(error) => {
            return Ok((
                StatusCode::BAD_REQUEST,
                add_expense_view(&form, &invalid_input_message(&error)),
            )
                .into_response());
        }
    };

    append_row(&state.expenses_path, expense)
        .inspect_err(|error| tracing::error!("Could not add expense {form:?}: {error}"))?;

    Ok(Redirect::to(endpoints::ROOT).into_response())
}

fn add_expense_view(form: &ExpenseForm, error_message: &str) -> Markup {
    let nav_bar = NavBar::new(endpoints::ADD_EXPENSE).into_html();
    let form = expense_form_view(endpoints::ADD_EXPENSE, form, "Add Expense", error_message);

    let content = html! {
        (nav_bar)
        div class=(FORM_CONTAINER_STYLE)
        {
            h1 { "Add Expense" }
            (form)
        }
    };

    base("Add Expense", &content)
}

/// The form for adding or editing an expense, which posts to `action`.
pub(super) fn expense_form_view(
    action: &str,
    form: &ExpenseForm,
    submit_text: &str,
    error_message: &str,
) -> Markup {
    html! {
        form method="post" action=(action) class=(FORM_STYLE)
        {
            div
            {
                label for="date" class=(FORM_LABEL_STYLE) { "Date" }

                input
                    id="date"
                    type="date"
                    name="date"
                    value=(form.date)
                    required
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            (text_input("category", "Category", &form.category))
            (amount_input("amount", "Amount", &form.amount))

            div
            {
                label for="description" class=(FORM_LABEL_STYLE) { "Description" }

                input
                    id="description"
                    type="text"
                    name="description"
                    placeholder="Description"
                    value=(form.description)
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            (error_message_view(error_message))

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { (submit_text) }
        }
    }
}
