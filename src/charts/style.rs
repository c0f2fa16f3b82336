//! Chart Style Module
//! Fixed look shared by every figure.

use egui::Color32;

/// Visual preset applied to each figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartStyle {
    pub background: Color32,
    pub line_color: Color32,
    pub line_width: f32,
    pub show_grid: bool,
    pub title_color: Color32,
    pub x_label: &'static str,
    pub y_label: &'static str,
}

impl ChartStyle {
    /// White canvas, solid blue line, grid on.
    pub const fn classic() -> Self {
        Self {
            background: Color32::WHITE,
            line_color: Color32::from_rgb(0, 0, 255),
            line_width: 1.5,
            show_grid: true,
            title_color: Color32::BLACK,
            x_label: "x",
            y_label: "y",
        }
    }

    /// Light visuals with the plot background set to this style's canvas.
    pub fn visuals(&self) -> egui::Visuals {
        let mut visuals = egui::Visuals::light();
        visuals.extreme_bg_color = self.background;
        visuals
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_has_grid_and_white_canvas() {
        let style = ChartStyle::classic();
        assert!(style.show_grid);
        assert_eq!(style.visuals().extreme_bg_color, Color32::WHITE);
        assert!(!style.visuals().dark_mode);
    }
}
