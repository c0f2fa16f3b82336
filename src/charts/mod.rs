//! Charts module - Figure preparation and drawing

mod plotter;
mod session;
mod style;

pub use plotter::ChartPlotter;
pub use session::{Figure, RenderError, RenderSession};
#[cfg(test)]
pub use session::{RecordingSession, SessionEvent};
pub use style::ChartStyle;
