//! Chart Plotter Module
//! Draws prepared figures using egui_plot.

use crate::charts::Figure;
use crate::data::SeriesSummary;
use egui::RichText;
use egui_plot::{Line, Plot, PlotPoints};

/// Draws figures and their summary rows.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw the line chart of a figure.
    /// Points are joined in file order, with no sorting or smoothing.
    pub fn draw_line_chart(ui: &mut egui::Ui, figure: &Figure, index: usize, height: f32) {
        let style = figure.style;

        Plot::new(("figure", index))
            .height(height)
            .show_grid(style.show_grid)
            .show_background(true)
            .x_axis_label(style.x_label)
            .y_axis_label(style.y_label)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(PlotPoints::from_iter(figure.series.points()))
                        .color(style.line_color)
                        .width(style.line_width)
                        .name(&figure.title),
                );
            });
    }

    /// Format an optional value for the summary table.
    pub fn format_value(value: Option<f64>) -> String {
        value
            .map(|v| format!("{:.4}", v))
            .unwrap_or_else(|| "-".to_string())
    }

    fn format_range(range: Option<(f64, f64)>) -> String {
        range
            .map(|(lo, hi)| format!("{:.4} .. {:.4}", lo, hi))
            .unwrap_or_else(|| "-".to_string())
    }

    /// Draw the one-row summary table under a chart
    pub fn draw_summary_table(ui: &mut egui::Ui, summary: &SeriesSummary, index: usize) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::Grid::new(ui.make_persistent_id(("summary_table", index)))
                    .striped(true)
                    .min_col_width(55.0)
                    .spacing([8.0, 4.0])
                    .show(ui, |ui| {
                        for header in ["N", "X range", "Y range", "Y mean", "Y std"] {
                            ui.label(RichText::new(header).strong().size(11.0));
                        }
                        ui.end_row();

                        ui.label(RichText::new(summary.count.to_string()).size(11.0));
                        ui.label(RichText::new(Self::format_range(summary.x_range)).size(11.0));
                        ui.label(RichText::new(Self::format_range(summary.y_range)).size(11.0));
                        ui.label(RichText::new(Self::format_value(summary.y_mean)).size(11.0));
                        ui.label(RichText::new(Self::format_value(summary.y_std)).size(11.0));
                        ui.end_row();
                    });
            });
    }
}
