//! Static Chart Renderer
//! Writes bar and pie charts to PNG files using plotters.
//!
//! Rendering only consumes already aggregated `(label, count)` pairs; every
//! call opens one bitmap, draws, presents it and releases it before returning.

use plotters::prelude::*;
use std::fmt::Display;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("No categories to plot")]
    Empty,
    #[error("Failed to draw chart: {0}")]
    Drawing(String),
}

fn drawing<E: Display>(err: E) -> ChartError {
    ChartError::Drawing(err.to_string())
}

/// Color palette for slices and bars
const PALETTE: [RGBColor; 10] = [
    RGBColor(52, 152, 219),  // Blue
    RGBColor(231, 76, 60),   // Red
    RGBColor(46, 204, 113),  // Green
    RGBColor(155, 89, 182),  // Purple
    RGBColor(243, 156, 18),  // Orange
    RGBColor(26, 188, 156),  // Teal
    RGBColor(233, 30, 99),   // Pink
    RGBColor(0, 188, 212),   // Cyan
    RGBColor(255, 87, 34),   // Deep Orange
    RGBColor(96, 125, 139),  // Blue Grey
];

/// One palette color per slice, cycling when slices outnumber colors.
fn slice_colors(count: usize) -> Vec<RGBColor> {
    PALETTE.iter().copied().cycle().take(count).collect()
}

const FONT: &str = "sans-serif";
const TITLE_SIZE: f64 = 30.0;
const LABEL_SIZE: f64 = 16.0;
const MARGIN: u32 = 20;
const Y_LABEL_AREA: u32 = 70;
const X_LABEL_AREA: u32 = 50;
// Rotated labels need room for the longest category name.
const X_LABEL_AREA_ROTATED: u32 = 200;

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Draw a vertical count bar chart, one bar per entry, in the given order.
    pub fn render_bar_chart(
        path: &Path,
        title: &str,
        entries: &[(String, usize)],
        size: (u32, u32),
        rotate_labels: bool,
    ) -> Result<(), ChartError> {
        if entries.is_empty() {
            return Err(ChartError::Empty);
        }

        let root = BitMapBackend::new(path, size).into_drawing_area();
        root.fill(&WHITE).map_err(drawing)?;

        let top = entries.iter().map(|(_, count)| *count).max().unwrap_or(0);
        let y_max = top + top / 10 + 1;
        let label_area = if rotate_labels {
            X_LABEL_AREA_ROTATED
        } else {
            X_LABEL_AREA
        };

        let mut chart = ChartBuilder::on(&root)
            .caption(title, (FONT, TITLE_SIZE))
            .margin(MARGIN)
            .x_label_area_size(label_area)
            .y_label_area_size(Y_LABEL_AREA)
            .build_cartesian_2d((0..entries.len()).into_segmented(), 0..y_max)
            .map_err(drawing)?;

        let label_font = if rotate_labels {
            (FONT, LABEL_SIZE).into_font().transform(FontTransform::Rotate90)
        } else {
            (FONT, LABEL_SIZE).into_font()
        };

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(entries.len())
            .x_label_style(TextStyle::from(label_font))
            .x_label_formatter(&|value| Self::segment_label(entries, value))
            .y_desc("Quantidade")
            .draw()
            .map_err(drawing)?;

        chart
            .draw_series(
                Histogram::vertical(&chart)
                    .style(PALETTE[0].filled())
                    .margin(10)
                    .data(entries.iter().enumerate().map(|(i, (_, count))| (i, *count))),
            )
            .map_err(drawing)?;

        root.present().map_err(drawing)?;
        Ok(())
    }

    /// Draw a pie chart with percentage labels on each slice.
    pub fn render_pie_chart(
        path: &Path,
        title: &str,
        entries: &[(String, usize)],
        size: (u32, u32),
    ) -> Result<(), ChartError> {
        let sizes: Vec<f64> = entries.iter().map(|(_, count)| *count as f64).collect();
        if sizes.iter().sum::<f64>() <= 0.0 {
            return Err(ChartError::Empty);
        }

        let root = BitMapBackend::new(path, size).into_drawing_area();
        root.fill(&WHITE).map_err(drawing)?;
        let root = root
            .titled(title, TextStyle::from((FONT, TITLE_SIZE).into_font()))
            .map_err(drawing)?;

        let (width, height) = root.dim_in_pixel();
        let center = ((width / 2) as i32, (height / 2) as i32);
        let radius = f64::from(width.min(height)) * 0.35;
        let colors = slice_colors(entries.len());
        let labels: Vec<&str> = entries.iter().map(|(label, _)| label.as_str()).collect();

        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.start_angle(90.0);
        pie.label_style((FONT, LABEL_SIZE + 4.0).into_font().color(&BLACK));
        pie.percentages((FONT, LABEL_SIZE).into_font().color(&WHITE));
        root.draw(&pie).map_err(drawing)?;

        root.present().map_err(drawing)?;
        Ok(())
    }

    fn segment_label(entries: &[(String, usize)], value: &SegmentValue<usize>) -> String {
        match value {
            SegmentValue::CenterOf(i) => entries
                .get(*i)
                .map(|(label, _)| label.clone())
                .unwrap_or_default(),
            _ => String::new(),
        }
    }
}
