//! Chart Viewer Widget
//! Scrollable panel showing every prepared figure as a card.
//! Cards wrap into as many columns as the available width allows.

use crate::charts::{ChartPlotter, Figure};
use crate::config::ViewerConfig;
use egui::{RichText, ScrollArea};

/// Card layout, taken from the viewer configuration
#[derive(Debug, Clone, Copy)]
struct CardLayout {
    width: f32,
    plot_height: f32,
    spacing: f32,
}

/// Space taken by the title, summary table and margins of a card
const CARD_CHROME_HEIGHT: f32 = 110.0;

/// Responsive grid of chart cards.
pub struct ChartViewer {
    pub figures: Vec<Figure>,
    layout: CardLayout,
}

impl ChartViewer {
    pub fn new(figures: Vec<Figure>, config: &ViewerConfig) -> Self {
        Self {
            figures,
            layout: CardLayout {
                width: config.card_width,
                plot_height: config.plot_height,
                spacing: config.card_spacing,
            },
        }
    }

    /// Number of card columns that fit in `avail_width`, at least one.
    pub fn column_count(&self, avail_width: f32) -> usize {
        let card_total_width = self.layout.width + self.layout.spacing;
        ((avail_width / card_total_width).floor() as usize).max(1)
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        if self.figures.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Charts").size(20.0));
            });
            return;
        }

        let num_columns = self.column_count(ui.available_width());
        let total_items = self.figures.len();
        let total_rows = total_items.div_ceil(num_columns);
        let row_height = self.layout.plot_height + CARD_CHROME_HEIGHT + self.layout.spacing;

        let figures = &self.figures;
        let layout = self.layout;

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show_rows(ui, row_height, total_rows, |ui, row_range| {
                for row in row_range {
                    ui.horizontal(|ui| {
                        for col in 0..num_columns {
                            let idx = row * num_columns + col;
                            if let Some(figure) = figures.get(idx) {
                                Self::draw_chart_card(ui, figure, idx, layout);
                                ui.add_space(layout.spacing);
                            }
                        }
                    });
                    ui.add_space(layout.spacing);
                }
            });
    }

    /// Draw a single chart card: title, line chart, summary table.
    fn draw_chart_card(ui: &mut egui::Ui, figure: &Figure, idx: usize, layout: CardLayout) {
        let card_width = layout.width - 20.0;

        egui::Frame::none()
            .rounding(8.0)
            .stroke(egui::Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color))
            .fill(figure.style.background)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(card_width);

                ui.vertical(|ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new(&figure.title)
                                .size(18.0)
                                .strong()
                                .color(figure.style.title_color),
                        );
                    });

                    ui.add_space(8.0);
                    ChartPlotter::draw_line_chart(ui, figure, idx, layout.plot_height);
                    ui.add_space(8.0);
                    ChartPlotter::draw_summary_table(ui, &figure.summary, idx);
                });
            });
    }
}
