//! Expense editing page and endpoint.

use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use maud::{Markup, html};

use crate::{
    Error, endpoints,
    expense::{
        ExpenseRecord,
        core::{ExpenseForm, ExpenseState},
        create::expense_form_view,
    },
    form::invalid_input_message,
    html::{FORM_CONTAINER_STYLE, base},
    navigation::NavBar,
    table::{get_row, replace_row},
};

/// Render the form for editing the expense at row `expense_id`.
pub async fn get_edit_expense_page(
    Path(expense_id): Path<usize>,
    State(state): State<ExpenseState>,
) -> Result<Response, Error> {
    let expense = get_row::<ExpenseRecord>(&state.expenses_path, expense_id)
        .map_err(Error::into_not_found)
        .inspect_err(|error| tracing::error!("Could not get expense {expense_id}: {error}"))?;

    Ok(edit_expense_view(expense_id, &ExpenseForm::from(&expense), "").into_response())
}

/// Replace the expense at row `expense_id` with the form data, redirects to
/// the expenses page on success.
pub async fn edit_expense_endpoint(
    Path(expense_id): Path<usize>,
    State(state): State<ExpenseState>,
    Form(form): Form<ExpenseForm>,
) -> Result<Response, Error> {
    let expense = match form.parse() {
        Ok(expense) => expense,
        Err(error) => {
            return Ok((
                StatusCode::BAD_REQUEST,
                edit_expense_view(expense_id, &form, &invalid_input_message(&error)),
            )
                .into_response());
        }
    };

    replace_row(&state.expenses_path, expense_id, expense)
        .map_err(Error::into_not_found)
        .inspect_err(|error| tracing::error!("Could not update expense {expense_id}: {error}"))?;

    Ok(Redirect::to(endpoints::VIEW_EXPENSES).into_response())
}

fn edit_expense_view(expense_id: usize, form: &ExpenseForm, error_message: &str) -> Markup {
    let edit_url = endpoints::format_endpoint(endpoints::EDIT_EXPENSE, expense_id);
    let nav_bar = NavBar::new(&edit_url).into_html();
    let form = expense_form_view(&edit_url, form, "Update Expense", error_message);

    let content = html! {
        (nav_bar)
        div class=(FORM_CONTAINER_STYLE)
        {
            h1 { "Edit Expense " (expense_id) }
            (form)
        }
    };

    base("Edit Expense", &content)
}

#[cfg(test)]
mod edit_expense_tests {
    use axum::{
        Form,
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use tempfile::TempDir;

    use crate::{
        Error, endpoints,
        expense::{
            ExpenseRecord,
            core::{ExpenseForm, ExpenseState},
            edit_expense_endpoint, get_edit_expense_page,
        },
        table::{load_table, save_table},
        test_utils::{
            assert_content_type, assert_form_action, assert_form_error_message,
            assert_form_input_with_value, assert_form_submit_button_with_text, assert_redirect,
            assert_valid_html, must_get_form, parse_html_document,
        },
    };

    fn expense(category: &str, amount: f64) -> ExpenseRecord {
        ExpenseRecord {
            date: "2024-01-01".to_owned(),
            category: category.to_owned(),
            amount,
            description: format!("{category} expense"),
        }
    }

    fn get_state_with_three_expenses(dir: &TempDir) -> ExpenseState {
        let state = ExpenseState {
            expenses_path: dir.path().join("expenses.csv"),
        };
        save_table(
            &state.expenses_path,
            &[
                expense("Food", 10.0),
                expense("Rent", 100.0),
                expense("Fuel", 60.0),
            ],
        )
        .unwrap();

        state
    }

    #[tokio::test]
    async fn get_edit_expense_page_prefills_form() {
        let dir = TempDir::new().unwrap();
        let state = get_state_with_three_expenses(&dir);

        let response = get_edit_expense_page(Path(1), State(state)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_content_type(&response, "text/html; charset=utf-8");
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        let form = must_get_form(&html);
        assert_form_action(&form, &endpoints::format_endpoint(endpoints::EDIT_EXPENSE, 1));
        assert_form_input_with_value(&form, "date", "date", "2024-01-01");
        assert_form_input_with_value(&form, "category", "text", "Rent");
        assert_form_input_with_value(&form, "amount", "number", "100");
        assert_form_submit_button_with_text(&form, "Update Expense");
    }

    #[tokio::test]
    async fn get_edit_expense_page_out_of_range_is_not_found() {
        let dir = TempDir::new().unwrap();
        let state = get_state_with_three_expenses(&dir);

        let result = get_edit_expense_page(Path(5), State(state)).await;

        let error = result.unwrap_err();
        assert_eq!(error, Error::NotFound);
        assert_eq!(error.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn edit_expense_replaces_only_that_row() {
        let dir = TempDir::new().unwrap();
        let state = get_state_with_three_expenses(&dir);
        let form = ExpenseForm {
            date: "2024-02-02".to_owned(),
            category: "Groceries".to_owned(),
            amount: "42.10".to_owned(),
            description: "weekly shop".to_owned(),
        };

        let response = edit_expense_endpoint(Path(0), State(state.clone()), Form(form))
            .await
            .unwrap();

        assert_redirect(&response, endpoints::VIEW_EXPENSES);
        let expenses = load_table::<ExpenseRecord>(&state.expenses_path).unwrap();
        assert_eq!(
            expenses,
            vec![
                ExpenseRecord {
                    date: "2024-02-02".to_owned(),
                    category: "Groceries".to_owned(),
                    amount: 42.1,
                    description: "weekly shop".to_owned(),
                },
                expense("Rent", 100.0),
                expense("Fuel", 60.0),
            ]
        );
    }

    #[tokio::test]
    async fn edit_expense_out_of_range_is_not_found() {
        let dir = TempDir::new().unwrap();
        let state = get_state_with_three_expenses(&dir);
        let form = ExpenseForm {
            amount: "1".to_owned(),
            ..Default::default()
        };

        let result = edit_expense_endpoint(Path(3), State(state.clone()), Form(form)).await;

        assert_eq!(result.unwrap_err(), Error::NotFound);
        assert_eq!(
            load_table::<ExpenseRecord>(&state.expenses_path)
                .unwrap()
                .len(),
            3
        );
    }

    #[tokio::test]
    async fn edit_expense_with_invalid_amount_shows_error() {
        let dir = TempDir::new().unwrap();
        let state = get_state_with_three_expenses(&dir);
        let form = ExpenseForm {
            date: "2024-01-01".to_owned(),
            category: "Food".to_owned(),
            amount: "ten".to_owned(),
            description: String::new(),
        };

        let response = edit_expense_endpoint(Path(0), State(state.clone()), Form(form))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        let form = must_get_form(&html);
        assert_form_error_message(&form, "Error: \"ten\" is not a valid number for amount");
        assert_eq!(
            load_table::<ExpenseRecord>(&state.expenses_path).unwrap()[0],
            expense("Food", 10.0)
        );
    }
}
