//! Series Module
//! Paired x/y values read from one CSV file.

use statrs::statistics::Statistics;

/// Ordered x/y pairs, plotted in the order they were read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Series {
    /// Build a series from (x, y) pairs in row order.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let (x, y) = pairs.into_iter().unzip();
        Self { x, y }
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Points in row order, ready for a line plot.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.x()
            .iter()
            .zip(self.y())
            .map(|(&x, &y)| [x, y])
            .collect()
    }

    /// Descriptive statistics shown under the chart.
    pub fn summary(&self) -> SeriesSummary {
        if self.is_empty() {
            return SeriesSummary::default();
        }

        let finite = |v: f64| (!v.is_nan()).then_some(v);

        SeriesSummary {
            count: self.len(),
            x_range: Some((
                Statistics::min(self.x.iter()),
                Statistics::max(self.x.iter()),
            )),
            y_range: Some((
                Statistics::min(self.y.iter()),
                Statistics::max(self.y.iter()),
            )),
            y_mean: finite(self.y.iter().mean()),
            // Sample standard deviation is undefined for a single point
            y_std: finite(self.y.iter().std_dev()),
        }
    }
}

/// Point count and ranges of a series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesSummary {
    pub count: usize,
    pub x_range: Option<(f64, f64)>,
    pub y_range: Option<(f64, f64)>,
    pub y_mean: Option<f64>,
    pub y_std: Option<f64>,
}
