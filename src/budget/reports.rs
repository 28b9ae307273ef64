//! The reports page listing every budget.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    budget::{BudgetRecord, core::BudgetState},
    endpoints,
    html::{
        PAGE_CONTAINER_STYLE, TABLE_AMOUNT_CELL_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE,
        TABLE_ROW_STYLE, TABLE_STYLE, base, edit_delete_action_links, empty_table_row,
        format_amount, page_header,
    },
    navigation::NavBar,
    table::load_table,
};

/// Render every budget along with its row ID and links to edit or delete it.
pub async fn get_reports_page(State(state): State<BudgetState>) -> Result<Response, Error> {
    let budgets = load_table::<BudgetRecord>(&state.budgets_path)
        .inspect_err(|error| tracing::error!("Failed to load budgets: {error}"))?;

    Ok(reports_view(&budgets).into_response())
}

fn reports_view(budgets: &[BudgetRecord]) -> Markup {
    let nav_bar = NavBar::new(endpoints::REPORTS).into_html();

    let table_row = |id: usize, budget: &BudgetRecord| {
        let edit_url = endpoints::format_endpoint(endpoints::EDIT_BUDGET, id);
        let delete_url = endpoints::format_endpoint(endpoints::DELETE_BUDGET, id);
        let confirm_message = format!(
            "Are you sure you want to delete the {} budget for {}?",
            budget.category, budget.month
        );

        html!(
            tr class=(TABLE_ROW_STYLE)
            {
                td class=(TABLE_CELL_STYLE) { (id) }
                td class=(TABLE_CELL_STYLE) { (budget.month) }
                td class=(TABLE_CELL_STYLE) { (budget.category) }
                td class=(TABLE_AMOUNT_CELL_STYLE) { (format_amount(budget.budget)) }
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
            (page_header("Budgets", endpoints::ADD_BUDGET, "Add Budget"))

            table class=(TABLE_STYLE)
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" { "ID" }
                        th scope="col" { "Month" }
                        th scope="col" { "BudgetCategory" }
                        th scope="col" { "BudgetAmount" }
                        th scope="col" { "Actions" }
                    }
                }

                tbody
                {
                    @for (id, budget) in budgets.iter().enumerate() {
                        (table_row(id, budget))
                    }

                    @if budgets.is_empty() {
                        (empty_table_row(5, endpoints::ADD_BUDGET, "Add your first budget"))
                    }
                }
            }
        }
    );

    base("Budgets", &content)
}
