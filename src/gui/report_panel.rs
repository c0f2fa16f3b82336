//! Report Panel Widget
//! Left side panel listing every input file and what happened to it.

use crate::report::{FileStatus, RunReport};
use egui::{Color32, RichText, ScrollArea};

const OK_COLOR: Color32 = Color32::from_rgb(40, 167, 69);
const FAIL_COLOR: Color32 = Color32::from_rgb(220, 53, 69);

/// Read-only view of the run report.
pub struct ReportPanel {
    pub report: RunReport,
    pub status: String,
}

impl ReportPanel {
    pub fn new(report: RunReport) -> Self {
        let status = Self::status_line(&report);
        Self { report, status }
    }

    /// Short summary shown at the top of the panel.
    pub fn status_line(report: &RunReport) -> String {
        let failed = report.failures().count();
        if failed == 0 {
            format!("{} charts ready", report.plotted_count())
        } else {
            format!(
                "{} charts ready, {} files failed",
                report.plotted_count(),
                failed
            )
        }
    }

    /// Draw the report panel
    pub fn show(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("📈 XY Chart Viewer")
                    .size(20.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Input Section =====
        ui.label(RichText::new("📁 Input Directory").size(14.0).strong());
        ui.add_space(5.0);
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.label(
                    RichText::new(self.report.input_dir.display().to_string())
                        .size(12.0)
                        .monospace(),
                );
            });

        ui.add_space(10.0);
        ui.label(RichText::new(&self.status).size(12.0));
        ui.add_space(5.0);
        ui.separator();

        // ===== Files Section =====
        ui.label(RichText::new("📄 Files").size(14.0).strong());
        ui.add_space(5.0);

        if self.report.outcomes.is_empty() {
            ui.label(RichText::new("No files found").size(12.0).color(Color32::GRAY));
            return;
        }

        ScrollArea::vertical().show(ui, |ui| {
            for outcome in &self.report.outcomes {
                match &outcome.status {
                    FileStatus::Plotted { points } => {
                        ui.label(
                            RichText::new(format!(
                                "✓ {}  → {} ({} points)",
                                outcome.file_name, outcome.title, points
                            ))
                            .size(12.0)
                            .color(OK_COLOR),
                        );
                    }
                    FileStatus::Failed { kind, message } => {
                        ui.label(
                            RichText::new(format!("⚠ {}  ({} error)", outcome.file_name, kind))
                                .size(12.0)
                                .color(FAIL_COLOR),
                        );
                        ui.label(RichText::new(message).size(11.0).color(Color32::GRAY));
                    }
                }
                ui.add_space(3.0);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::LoaderError;
    use crate::report::FileOutcome;

    #[test]
    fn status_line_mentions_failures_only_when_present() {
        let mut report = RunReport::new("out");
        report.push(FileOutcome::plotted("a.csv", "a", 2));
        assert_eq!(ReportPanel::status_line(&report), "1 charts ready");

        report.push(FileOutcome::failed(
            "b.csv",
            "b",
            &LoaderError::MissingField { line: 2, column: 1 },
        ));
        assert_eq!(
            ReportPanel::new(report).status,
            "1 charts ready, 1 files failed"
        );
    }
}
