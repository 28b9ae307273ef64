//! Expense listing page.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error, endpoints,
    expense::{ExpenseRecord, core::ExpenseState},
    html::{
        PAGE_CONTAINER_STYLE, TABLE_AMOUNT_CELL_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE,
        TABLE_ROW_STYLE, TABLE_STYLE, base, edit_delete_action_links, empty_table_row,
        format_amount, page_header,
    },
    navigation::NavBar,
    table::load_table,
};

/// Render every expense along with its row ID and links to edit or delete it.
pub async fn get_expenses_page(State(state): State<ExpenseState>) -> Result<Response, Error> {
    let expenses = load_table::<ExpenseRecord>(&state.expenses_path)
        .inspect_err(|error| tracing::error!("Failed to load expenses: {error}"))?;

    Ok(expenses_view(&expenses).into_response())
}

fn expenses_view(expenses: &[ExpenseRecord]) -> Markup {
    let nav_bar = NavBar::new(endpoints::VIEW_EXPENSES).into_html();

    let table_row = |id: usize, expense: &ExpenseRecord| {
        let edit_url = endpoints::format_endpoint(endpoints::EDIT_EXPENSE, id);
        let delete_url = endpoints::format_endpoint(endpoints::DELETE_EXPENSE, id);
        let confirm_message = format!(
            "Are you sure you want to delete the expense '{}' from {}?",
            expense.description, expense.date
        );

        html!(
            tr class=(TABLE_ROW_STYLE)
            {
                td class=(TABLE_CELL_STYLE) { (id) }
                td class=(TABLE_CELL_STYLE) { (expense.date) }
                td class=(TABLE_CELL_STYLE) { (expense.category) }
                td class=(TABLE_AMOUNT_CELL_STYLE) { (format_amount(expense.amount)) }
                td class=(TABLE_CELL_STYLE) { (expense.description) }
                td class=(TABLE_CELL_STYLE)
                {
                    (edit_delete_action_links(&edit_url, &delete_url, &confirm_message))
                }
            }
        )
    };

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            (page_header("Expenses", endpoints::ADD_EXPENSE, "Add Expense"))

            table class=(TABLE_STYLE)
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" { "ID" }
                        th scope="col" { "Date" }
                        th scope="col" { "Category" }
                        th scope="col" { "Amount" }
                        th scope="col" { "Description" }
                        th scope="col" { "Actions" }
                    }
                }

                tbody
                {
                    @for (id, expense) in expenses.iter().enumerate() {
                        (table_row(id, expense))
                    }

                    @if expenses.is_empty() {
                        (empty_table_row(6, endpoints::ADD_EXPENSE, "Add your first expense"))
                    }
                }
            }
        }
    );

    base("Expenses", &content)
}
