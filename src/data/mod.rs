//! Data module - CSV loading and series model

mod loader;
mod series;

pub use loader::{LoaderError, SeriesReader};
pub use series::{Series, SeriesSummary};
