//! Plotters-powered panel widgets for Ratatui.
//!
//! Why Plotters instead of Ratatui's built-in `Chart` widget?
//! - nicer axis + mesh rendering
//! - less manual work for ticks/labels
//! - easy to extend later (legend, annotations, exportable PNG/SVG backends, etc.)
//!
//! We render Plotters output into the Ratatui buffer using
//! `plotters-ratatui-backend`. All widgets here are render-only: series and
//! bounds are computed outside the render call, which keeps `render()`
//! focused on drawing and makes the data prep testable separately.

use plotters::prelude::*;
use plotters::style::Color as _;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// Scatter panel: observed points plus the fitted line segment.
pub struct ScatterChart<'a> {
    pub points: &'a [(f64, f64)],
    /// Two endpoints of the best-fit line.
    pub fit: [(f64, f64); 2],
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
}

/// Single-line panel (PDF or CDF curve).
pub struct CurveChart<'a> {
    pub line: &'a [(f64, f64)],
    pub color: RGBColor,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
}

/// Histogram panel: one filled bar per bin.
pub struct HistogramChart<'a> {
    /// `(left_edge, density)` per bin.
    pub bins: &'a [(f64, f64)],
    pub bin_width: f64,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
}

/// When the available area is too small, Plotters may fail to build a chart.
/// In that case we render a small hint rather than panicking.
fn area_too_small(area: Rect, buf: &mut Buffer) -> bool {
    if area.width < 16 || area.height < 6 {
        buf.set_string(
            area.x,
            area.y,
            "Panel too small (resize terminal).",
            Style::default().fg(Color::Yellow),
        );
        return true;
    }
    false
}

fn bounds_usable(x: [f64; 2], y: [f64; 2]) -> bool {
    x.iter().chain(y.iter()).all(|v| v.is_finite()) && x[1] > x[0] && y[1] > y[0]
}

impl Widget for ScatterChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area_too_small(area, buf) || !bounds_usable(self.x_bounds, self.y_bounds) {
            return;
        }

        let [x0, x1] = self.x_bounds;
        let [y0, y1] = self.y_bounds;

        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                .margin(1)
                .set_label_area_size(LabelAreaPosition::Left, 7)
                .set_label_area_size(LabelAreaPosition::Bottom, 2)
                .build_cartesian_2d(x0..x1, y0..y1)?;

            // Terminal cells are low-res: no mesh lines, sparse tick labels.
            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .x_labels(5)
                .y_labels(4)
                .x_label_formatter(&|v| format!("{v:.0}"))
                .y_label_formatter(&|v| format!("{v:.0}"))
                .label_style(("sans-serif", 10).into_font().color(&WHITE))
                .axis_style(&WHITE)
                .bold_line_style(&WHITE)
                .draw()?;

            // Fit line below, points on top.
            let fit_color = RGBColor(0, 128, 255); // blue
            let point_color = RGBColor(255, 0, 0); // red

            chart.draw_series(LineSeries::new(self.fit.iter().copied(), &fit_color))?;

            // `Pixel` rather than `Circle`: the backend maps circle radii into
            // normalized canvas units, producing huge circles in a terminal.
            chart.draw_series(
                self.points
                    .iter()
                    .map(|&(x, y)| Pixel::new((x, y), point_color)),
            )?;

            Ok(())
        });

        widget.render(area, buf);
    }
}

impl Widget for CurveChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area_too_small(area, buf) || !bounds_usable(self.x_bounds, self.y_bounds) {
            return;
        }

        let [x0, x1] = self.x_bounds;
        let [y0, y1] = self.y_bounds;

        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                .margin(1)
                .set_label_area_size(LabelAreaPosition::Left, 7)
                .set_label_area_size(LabelAreaPosition::Bottom, 2)
                .build_cartesian_2d(x0..x1, y0..y1)?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .x_labels(5)
                .y_labels(4)
                .x_label_formatter(&|v| format!("{v:.1}"))
                .y_label_formatter(&|v| format!("{v:.2}"))
                .label_style(("sans-serif", 10).into_font().color(&WHITE))
                .axis_style(&WHITE)
                .bold_line_style(&WHITE)
                .draw()?;

            chart.draw_series(LineSeries::new(self.line.iter().copied(), &self.color))?;

            Ok(())
        });

        widget.render(area, buf);
    }
}

impl Widget for HistogramChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area_too_small(area, buf) || !bounds_usable(self.x_bounds, self.y_bounds) {
            return;
        }

        let [x0, x1] = self.x_bounds;
        let [y0, y1] = self.y_bounds;

        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                .margin(1)
                .set_label_area_size(LabelAreaPosition::Left, 7)
                .set_label_area_size(LabelAreaPosition::Bottom, 2)
                .build_cartesian_2d(x0..x1, y0..y1)?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .x_labels(5)
                .y_labels(4)
                .x_label_formatter(&|v| format!("{v:.0}"))
                .y_label_formatter(&|v| format!("{v:.4}"))
                .label_style(("sans-serif", 10).into_font().color(&WHITE))
                .axis_style(&WHITE)
                .bold_line_style(&WHITE)
                .draw()?;

            let bar_color = RGBColor(0, 128, 255); // blue

            chart.draw_series(self.bins.iter().map(|&(left, density)| {
                Rectangle::new(
                    [(left, 0.0), (left + self.bin_width, density)],
                    bar_color.filled(),
                )
            }))?;

            Ok(())
        });

        widget.render(area, buf);
    }
}
