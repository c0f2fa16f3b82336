//! XY Chart Viewer Main Application
//! Main window with report panel and chart grid, plus the session that opens it.

use crate::charts::{ChartStyle, Figure, RenderError, RenderSession};
use crate::config::ViewerConfig;
use crate::data::Series;
use crate::gui::{ChartViewer, ReportPanel};
use crate::report::RunReport;
use egui::SidePanel;

/// Main application window.
pub struct ViewerApp {
    report_panel: ReportPanel,
    chart_viewer: ChartViewer,
}

impl ViewerApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        figures: Vec<Figure>,
        report: RunReport,
        config: &ViewerConfig,
    ) -> Self {
        cc.egui_ctx.set_visuals(ChartStyle::classic().visuals());

        Self {
            report_panel: ReportPanel::new(report),
            chart_viewer: ChartViewer::new(figures, config),
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - Run Report
        SidePanel::left("report_panel")
            .min_width(260.0)
            .max_width(350.0)
            .show(ctx, |ui| {
                self.report_panel.show(ui);
            });

        // Central panel - Chart Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}

/// Session that shows its figures in a native eframe window.
pub struct EguiSession {
    config: ViewerConfig,
    figures: Vec<Figure>,
}

impl EguiSession {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            figures: Vec::new(),
        }
    }
}

impl RenderSession for EguiSession {
    fn prepare_figure(&mut self, title: &str, series: &Series) {
        self.figures.push(Figure::new(title, series));
    }

    fn figure_count(&self) -> usize {
        self.figures.len()
    }

    /// Blocks until the window is closed.
    fn show(&mut self, report: &RunReport) -> Result<(), RenderError> {
        let figures = std::mem::take(&mut self.figures);
        let report = report.clone();
        let config = self.config.clone();

        eframe::run_native(
            &self.config.window_title,
            self.config.native_options(),
            Box::new(move |cc| Ok(Box::new(ViewerApp::new(cc, figures, report, &config)))),
        )
        .map_err(|e| RenderError::Window(e.to_string()))?;

        Ok(())
    }
}
