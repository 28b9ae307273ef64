//! The dashboard: totals and per-category sums for expenses and budgets.

use std::path::PathBuf;

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, CategoryTotals, Error,
    budget::BudgetRecord,
    endpoints,
    expense::ExpenseRecord,
    html::{
        PAGE_CONTAINER_STYLE, TABLE_AMOUNT_CELL_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE,
        TABLE_ROW_STYLE, TABLE_STYLE, base, empty_table_row, format_amount,
    },
    navigation::NavBar,
    sum_by_category,
    table::load_table,
    total,
};

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The path to the expenses table.
    pub expenses_path: PathBuf,
    /// The path to the budgets table.
    pub budgets_path: PathBuf,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            expenses_path: state.expenses_path.clone(),
            budgets_path: state.budgets_path.clone(),
        }
    }
}

/// The totals shown on the dashboard.
#[derive(Debug, PartialEq)]
struct Summary {
    total_expenses: f64,
    total_budget: f64,
    expenses_by_category: CategoryTotals,
    budgets_by_category: CategoryTotals,
}

impl Summary {
    fn new(expenses: &[ExpenseRecord], budgets: &[BudgetRecord]) -> Result<Self, Error> {
        Ok(Self {
            total_expenses: total(expenses, |expense| expense.amount)?,
            total_budget: total(budgets, |budget| budget.budget)?,
            expenses_by_category: sum_by_category(expenses, |expense| expense.amount)?,
            budgets_by_category: sum_by_category(budgets, |budget| budget.budget)?,
        })
    }
}

/// Display a page with the total expenses and budget, and the sums for each category.
pub async fn get_dashboard_page(State(state): State<DashboardState>) -> Result<Response, Error> {
    let expenses = load_table::<ExpenseRecord>(&state.expenses_path)
        .inspect_err(|error| tracing::error!("Failed to load expenses: {error}"))?;
    let budgets = load_table::<BudgetRecord>(&state.budgets_path)
        .inspect_err(|error| tracing::error!("Failed to load budgets: {error}"))?;

    let summary = Summary::new(&expenses, &budgets)
        .inspect_err(|error| tracing::error!("Could not sum the tables: {error}"))?;

    Ok(dashboard_view(&summary).into_response())
}

fn dashboard_view(summary: &Summary) -> Markup {
    let nav_bar = NavBar::new(endpoints::ROOT).into_html();

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            h1 { "Dashboard" }

            section class="cards"
            {
                (summary_card("Total Expenses", summary.total_expenses))
                (summary_card("Total Budget", summary.total_budget))
            }

            section class="tables"
            {
                (category_table(
                    "Expenses by Category",
                    &summary.expenses_by_category,
                    endpoints::ADD_EXPENSE,
                    "Add an expense",
                ))
                (category_table(
                    "Budgets by Category",
                    &summary.budgets_by_category,
                    endpoints::ADD_BUDGET,
                    "Add a budget",
                ))
            }
        }
    };

    base("Dashboard", &content)
}

fn summary_card(title: &str, amount: f64) -> Markup {
    html! {
        div class="card" data-summary-card=(title)
        {
            h2 class="card-title" { (title) }
            p class="card-amount" { (format_amount(amount)) }
        }
    }
}

fn category_table(title: &str, totals: &CategoryTotals, add_url: &str, add_text: &str) -> Markup {
    html! {
        div
        {
            h2 { (title) }

            table class=(TABLE_STYLE)
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" { "Category" }
                        th scope="col" { "Total" }
                    }
                }

                tbody
                {
                    @for (category, amount) in totals {
                        tr class=(TABLE_ROW_STYLE)
                        {
                            td class=(TABLE_CELL_STYLE) { (category) }
                            td class=(TABLE_AMOUNT_CELL_STYLE) { (format_amount(*amount)) }
                        }
                    }

                    @if totals.is_empty() {
                        (empty_table_row(2, add_url, add_text))
                    }
                }
            }
        }
    }
}
