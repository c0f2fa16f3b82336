//! GUI module - Chart window and its widgets

mod app;
mod chart_viewer;
mod report_panel;

pub use app::EguiSession;
pub use chart_viewer::ChartViewer;
pub use report_panel::ReportPanel;
