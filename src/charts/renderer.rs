//! Chart Renderer Module
//! Draws the per-series error curves as a static log-scale PNG chart.

use crate::data::ChartVariant;
use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during chart generation.
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

type Result<T> = core::result::Result<T, PlotError>;

/// Chart canvas size in pixels.
const CHART_SIZE: (u32, u32) = (1400, 800);

/// Smallest error magnitude shown on the log axis. Exact matches produce an
/// error of 0.0, which a log scale cannot place, so displayed values are
/// clamped to this floor. Statistics always use the unclamped values.
const LOG_FLOOR: f64 = 0.01;

/// Per-series line colors.
const SERIES_COLORS: [RGBColor; 3] = [
    RGBColor(31, 119, 180),  // Blue
    RGBColor(255, 127, 14),  // Orange
    RGBColor(44, 160, 44),   // Green
];

/// Renders error-series charts to PNG files.
pub struct ChartRenderer;

impl ChartRenderer {
    /// Draw one log-scale line chart with every error series of `variant`
    /// and write it to `output_path`.
    ///
    /// The x axis is fixed to the sweep domain 0..=100 with ticks every 10;
    /// the y axis spans the visibility floor up to just above the largest
    /// error.
    pub fn render_error_chart(
        variant: ChartVariant,
        x_values: &[u32],
        error_series: &[Vec<f64>],
        output_path: &Path,
    ) -> Result<()> {
        if x_values.is_empty() || error_series.is_empty() {
            return Err(PlotError::InvalidData(
                "No error series to plot".to_string(),
            ));
        }
        if error_series.len() != variant.series_count() {
            return Err(PlotError::InvalidData(format!(
                "Expected {} error series, got {}",
                variant.series_count(),
                error_series.len()
            )));
        }
        for series in error_series {
            if series.len() != x_values.len() {
                return Err(PlotError::InvalidData(format!(
                    "Series length {} does not match {} x values",
                    series.len(),
                    x_values.len()
                )));
            }
        }

        let y_top = Self::y_axis_top(error_series);

        let root = BitMapBackend::new(output_path, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

        let mut chart = ChartBuilder::on(&root)
            .caption(variant.title(), ("sans-serif", 30))
            .margin(15)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(0u32..100u32, (LOG_FLOOR..y_top).log_scale())
            .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

        chart
            .configure_mesh()
            .x_desc("Input Value (x)")
            .y_desc("Absolute Error (Q1.16 Units)")
            .x_labels(11)
            .label_style(("sans-serif", 18))
            .axis_desc_style(("sans-serif", 22))
            .draw()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        for (index, series) in error_series.iter().enumerate() {
            let color = SERIES_COLORS[index % SERIES_COLORS.len()];
            let label = variant.legend_labels()[index];
            let points = Self::clamped_points(x_values, series);

            chart
                .draw_series(LineSeries::new(
                    points.iter().copied(),
                    color.stroke_width(2),
                ))
                .map_err(|e| PlotError::Drawing(e.to_string()))?
                .label(label)
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });

            // Distinct marker shape per series.
            match index {
                0 => chart
                    .draw_series(
                        points
                            .iter()
                            .map(|&point| Circle::new(point, 3, color.filled())),
                    )
                    .map_err(|e| PlotError::Drawing(e.to_string()))?,
                1 => chart
                    .draw_series(
                        points
                            .iter()
                            .map(|&point| Cross::new(point, 4, color.stroke_width(2))),
                    )
                    .map_err(|e| PlotError::Drawing(e.to_string()))?,
                _ => chart
                    .draw_series(
                        points
                            .iter()
                            .map(|&point| TriangleMarker::new(point, 4, color.filled())),
                    )
                    .map_err(|e| PlotError::Drawing(e.to_string()))?,
            };
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", 18))
            .draw()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        root.present()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        Ok(())
    }

    /// Pair x values with display-clamped error values.
    fn clamped_points(x_values: &[u32], series: &[f64]) -> Vec<(u32, f64)> {
        x_values
            .iter()
            .zip(series)
            .map(|(&x, &error)| (x, error.max(LOG_FLOOR)))
            .collect()
    }

    /// Upper bound for the log axis: headroom above the largest error, and
    /// never less than one decade above the floor.
    fn y_axis_top(error_series: &[Vec<f64>]) -> f64 {
        let max_error = error_series
            .iter()
            .flatten()
            .copied()
            .fold(0.0f64, f64::max);
        (max_error * 1.2).max(LOG_FLOOR * 10.0)
    }
}
