//! Render Session Module
//! Collects figures until they are shown together.

use crate::charts::ChartStyle;
use crate::data::{Series, SeriesSummary};
use crate::report::RunReport;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to open chart window: {0}")]
    Window(String),
}

/// One titled line chart waiting to be displayed.
#[derive(Debug, Clone)]
pub struct Figure {
    pub title: String,
    pub series: Series,
    pub summary: SeriesSummary,
    pub style: ChartStyle,
}

impl Figure {
    pub fn new(title: &str, series: &Series) -> Self {
        Self {
            title: title.to_string(),
            series: series.clone(),
            summary: series.summary(),
            style: ChartStyle::classic(),
        }
    }
}

/// Destination for prepared figures.
///
/// The orchestrator owns the session and is its only writer: figures are
/// added one by one, then `show` is called exactly once.
pub trait RenderSession {
    /// Add one styled, gridded line chart of `series`.
    fn prepare_figure(&mut self, title: &str, series: &Series);

    /// Number of figures prepared so far.
    fn figure_count(&self) -> usize;

    /// Display every prepared figure and block until the display is closed.
    fn show(&mut self, report: &RunReport) -> Result<(), RenderError>;
}

/// Session call recorded by [`RecordingSession`].
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Figure { title: String, points: usize },
    Show { figures: usize },
}

/// Session that records calls instead of opening a window.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSession {
    pub figures: Vec<Figure>,
    pub events: Vec<SessionEvent>,
}

#[cfg(test)]
impl RenderSession for RecordingSession {
    fn prepare_figure(&mut self, title: &str, series: &Series) {
        self.events.push(SessionEvent::Figure {
            title: title.to_string(),
            points: series.len(),
        });
        self.figures.push(Figure::new(title, series));
    }

    fn figure_count(&self) -> usize {
        self.figures.len()
    }

    fn show(&mut self, _report: &RunReport) -> Result<(), RenderError> {
        self.events.push(SessionEvent::Show {
            figures: self.figures.len(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn figure_gets_classic_style_and_summary() {
        let series = Series::from_pairs([(1.0, 4.0), (2.0, 8.0)]);
        let figure = Figure::new("trial", &series);

        assert_eq!(figure.title, "trial");
        assert_eq!(figure.style, ChartStyle::classic());
        assert_eq!(figure.summary.count, 2);
    }

    #[test]
    fn render_error_can_cross_threads() {
        fn assert_send_sync<T: Send + Sync + std::error::Error + 'static>() {}
        assert_send_sync::<RenderError>();

        let err = RenderError::Window("no display".to_string());
        assert_eq!(err.to_string(), "Failed to open chart window: no display");
    }

    #[test]
    fn empty_series_can_be_prepared() {
        let mut session = RecordingSession::default();
        session.prepare_figure("empty", &Series::default());

        assert_eq!(session.figure_count(), 1);
        assert!(session.figures[0].series.is_empty());
    }
}
