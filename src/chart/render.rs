//! Rasterizes category totals as a PNG bar chart.

use std::sync::OnceLock;

use image::{ExtendedColorType, ImageEncoder, codecs::png::PngEncoder};
use plotters::{coord::Shift, prelude::*, style::register_font};

use crate::{CategoryTotals, Error};

/// The width of a rendered chart in pixels.
pub const CHART_WIDTH: u32 = 800;
/// The height of a rendered chart in pixels.
pub const CHART_HEIGHT: u32 = 500;

const FONT_FAMILY: &str = "sans-serif";
const FONT_BYTES: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");

/// Sky blue.
const BAR_COLOR: RGBColor = RGBColor(135, 206, 235);

/// The largest magnitude either end of the y axis may take. Plotters needs
/// the span between the ends to be finite when it places the tick marks.
const Y_AXIS_LIMIT: f64 = f64::MAX / 4.0;

/// Draw a bar chart of `totals` with `title` as the caption and return it as PNG bytes.
///
/// There is one bar per category, in the iteration order of `totals`. The
/// y axis always includes zero, so negative totals are drawn below the axis.
/// An empty `totals` gives a chart with empty axes.
///
/// Bars taller than the axis allows are cut off at the edge of the chart.
///
/// # Errors
/// Returns [Error::ChartRender] if a total is not a finite number, the font
/// cannot be loaded, drawing fails or the image cannot be encoded.
pub fn render_bar_chart(totals: &CategoryTotals, title: &str) -> Result<Vec<u8>, Error> {
    if let Some((category, amount)) = totals.iter().find(|(_, amount)| !amount.is_finite()) {
        return Err(Error::ChartRender(format!(
            "the total for \"{category}\" is {amount}, which cannot be drawn"
        )));
    }

    register_chart_font()?;

    let mut pixels = vec![0; CHART_WIDTH as usize * CHART_HEIGHT as usize * 3];

    {
        let root = BitMapBackend::with_buffer(&mut pixels, (CHART_WIDTH, CHART_HEIGHT))
            .into_drawing_area();

        draw_bar_chart(&root, totals, title).map_err(chart_error)?;
        root.present().map_err(chart_error)?;
    }

    encode_png(&pixels)
}

/// Plotters looks fonts up by family name, so the embedded font is registered
/// as the generic sans-serif family before anything is drawn.
fn register_chart_font() -> Result<(), Error> {
    static REGISTERED: OnceLock<bool> = OnceLock::new();

    let registered = *REGISTERED.get_or_init(|| {
        register_font(FONT_FAMILY, FontStyle::Normal, FONT_BYTES)
            .inspect_err(|_| tracing::error!("Could not load the embedded chart font"))
            .is_ok()
    });

    if registered {
        Ok(())
    } else {
        Err(Error::ChartRender(
            "could not load the embedded chart font".to_owned(),
        ))
    }
}

fn draw_bar_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    totals: &CategoryTotals,
    title: &str,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let categories = totals.keys().map(String::as_str).collect::<Vec<_>>();
    let (y_min, y_max) = y_axis_range(totals.values().copied());

    // Integer ranges include their end, so n categories need `0..n - 1`.
    let last_index = categories.len().saturating_sub(1);

    let mut chart = ChartBuilder::on(root)
        .caption(title, (FONT_FAMILY, 24))
        .margin(20)
        .x_label_area_size(120)
        .y_label_area_size(70)
        .build_cartesian_2d((0..last_index).into_segmented(), y_min..y_max)?;

    let format_category = |value: &SegmentValue<usize>| match value {
        SegmentValue::CenterOf(index) => categories
            .get(*index)
            .map(|category| category.to_string())
            .unwrap_or_default(),
        _ => String::new(),
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(categories.len().max(1))
        .x_label_formatter(&format_category)
        .x_label_style(
            (FONT_FAMILY, 14)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .y_label_style((FONT_FAMILY, 14))
        .x_desc("Category")
        .y_desc("Amount")
        .axis_desc_style((FONT_FAMILY, 16))
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(BAR_COLOR.filled())
            .margin(10)
            .data(totals.values().copied().enumerate()),
    )?;

    Ok(())
}

/// The y axis spans every amount and zero, with some headroom above the
/// tallest bar and below the lowest, clamped to [Y_AXIS_LIMIT].
fn y_axis_range(amounts: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = amounts.fold((0.0_f64, 0.0_f64), |(min, max), amount| {
        (min.min(amount), max.max(amount))
    });

    if min == 0.0 && max == 0.0 {
        return (0.0, 1.0);
    }

    // Amounts near f64::MAX overflow to infinity once scaled.
    (
        (min * 1.1).clamp(-Y_AXIS_LIMIT, 0.0),
        (max * 1.1).clamp(0.0, Y_AXIS_LIMIT),
    )
}

fn encode_png(pixels: &[u8]) -> Result<Vec<u8>, Error> {
    let mut png = Vec::new();

    PngEncoder::new(&mut png)
        .write_image(pixels, CHART_WIDTH, CHART_HEIGHT, ExtendedColorType::Rgb8)
        .map_err(chart_error)?;

    Ok(png)
}

fn chart_error(error: impl std::fmt::Display) -> Error {
    Error::ChartRender(error.to_string())
}
