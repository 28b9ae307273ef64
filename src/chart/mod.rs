//! Bar charts of category totals.

mod page;
mod render;

pub use page::get_charts_page;
pub use render::render_bar_chart;
