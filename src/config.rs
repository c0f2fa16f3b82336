//! Viewer Configuration
//! Hardcoded input location and window/card geometry.

use std::path::PathBuf;

/// Directory the integration test suite writes its xy output into.
pub const INPUT_DIR: &str = "src/jvmTest/kotlin/com/kstabilty/IntegrationTestOutput/";

/// Fixed settings for one viewer run.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub input_dir: PathBuf,
    pub window_title: String,
    pub window_size: [f32; 2],
    pub window_min_size: [f32; 2],
    /// Width of one chart card
    pub card_width: f32,
    /// Height of the plot area inside a card
    pub plot_height: f32,
    pub card_spacing: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(INPUT_DIR),
            window_title: "XY Chart Viewer".to_string(),
            window_size: [1400.0, 800.0],
            window_min_size: [800.0, 500.0],
            card_width: 640.0,
            plot_height: 320.0,
            card_spacing: 15.0,
        }
    }
}

impl ViewerConfig {
    /// Same settings, reading from another directory.
    #[cfg(test)]
    pub fn with_input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.input_dir = dir.into();
        self
    }

    /// Native window options for the display call.
    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(self.window_size)
                .with_min_inner_size(self.window_min_size)
                .with_title(self.window_title.clone()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_reads_the_integration_output_dir() {
        let config = ViewerConfig::default();
        assert_eq!(config.input_dir, PathBuf::from(INPUT_DIR));
        assert!(config.card_width > 0.0 && config.plot_height > 0.0);
    }

    #[test]
    fn with_input_dir_keeps_geometry() {
        let config = ViewerConfig::default().with_input_dir("/tmp/out");
        assert_eq!(config.input_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.window_size, ViewerConfig::default().window_size);
    }
}
