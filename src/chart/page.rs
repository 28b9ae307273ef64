//! The charts page with bar charts of expenses and budgets by category.

use std::path::PathBuf;

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    budget::BudgetRecord,
    chart::render::{CHART_HEIGHT, CHART_WIDTH, render_bar_chart},
    endpoints,
    expense::ExpenseRecord,
    html::{PAGE_CONTAINER_STYLE, base},
    navigation::NavBar,
    sum_by_category,
    table::load_table,
};

const EXPENSES_CHART_TITLE: &str = "Expenses by Category";
const BUDGETS_CHART_TITLE: &str = "Budgets by Category";

/// The state needed for the charts page.
#[derive(Debug, Clone)]
pub struct ChartsPageState {
    /// The path to the expenses table.
    pub expenses_path: PathBuf,
    /// The path to the budgets table.
    pub budgets_path: PathBuf,
}

impl FromRef<AppState> for ChartsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            expenses_path: state.expenses_path.clone(),
            budgets_path: state.budgets_path.clone(),
        }
    }
}

/// Render the expenses and budgets bar charts as PNG images embedded in the page.
pub async fn get_charts_page(State(state): State<ChartsPageState>) -> Result<Response, Error> {
    let expenses = load_table::<ExpenseRecord>(&state.expenses_path)
        .inspect_err(|error| tracing::error!("Failed to load expenses: {error}"))?;
    let budgets = load_table::<BudgetRecord>(&state.budgets_path)
        .inspect_err(|error| tracing::error!("Failed to load budgets: {error}"))?;

    let expenses_by_category = sum_by_category(&expenses, |expense| expense.amount)
        .inspect_err(|error| tracing::error!("Could not sum expenses: {error}"))?;
    let budgets_by_category = sum_by_category(&budgets, |budget| budget.budget)
        .inspect_err(|error| tracing::error!("Could not sum budgets: {error}"))?;

    let (expenses_chart, budgets_chart) = tokio::task::spawn_blocking(move || {
        let expenses_chart = render_bar_chart(&expenses_by_category, EXPENSES_CHART_TITLE)
            .inspect_err(|error| tracing::error!("Could not render expenses chart: {error}"))?;
        let budgets_chart = render_bar_chart(&budgets_by_category, BUDGETS_CHART_TITLE)
            .inspect_err(|error| tracing::error!("Could not render budgets chart: {error}"))?;

        Ok::<_, Error>((expenses_chart, budgets_chart))
    })
    .await
    .map_err(|error| Error::ChartRender(format!("the chart rendering task failed: {error}")))
    .inspect_err(|error| tracing::error!("{error}"))??;

    Ok(charts_view(&expenses_chart, &budgets_chart).into_response())
}

fn charts_view(expenses_chart: &[u8], budgets_chart: &[u8]) -> Markup {
    let nav_bar = NavBar::new(endpoints::CHARTS).into_html();

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            h1 { "Charts" }

            (chart_figure(EXPENSES_CHART_TITLE, expenses_chart))
            (chart_figure(BUDGETS_CHART_TITLE, budgets_chart))
        }
    };

    base("Charts", &content)
}

fn chart_figure(title: &str, png: &[u8]) -> Markup {
    html! {
        figure class="chart"
        {
            img
                src=(png_data_uri(png))
                alt=(title)
                width=(CHART_WIDTH)
                height=(CHART_HEIGHT);
        }
    }
}

fn png_data_uri(png: &[u8]) -> String {
    format!("data:image/png;base64,{}", BASE64.encode(png))
}
