use eframe::egui::Color32;

use crate::data::model::ScoreSeries;

// ---------------------------------------------------------------------------
// Chart description
// ---------------------------------------------------------------------------

/// Figure size in figure units (width, height).
pub const FIGURE_SIZE: [f32; 2] = [10.0, 6.0];

/// Pixels per figure unit when the chart is shown in a window.
pub const PIXELS_PER_UNIT: f32 = 100.0;

/// One plotted line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub name: String,
    pub color: Color32,
    pub width: f32,
    pub points: Vec<[f64; 2]>,
}

/// Everything needed to draw the figure, independent of any window.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub size: [f32; 2],
    pub legend: bool,
    pub grid: bool,
    pub series: LineSeries,
}

impl Chart {
    /// The score-over-time figure for a loaded run.
    pub fn score_vs_time(series: &ScoreSeries) -> Self {
        Chart {
            title: "Score vs. Time Step".to_string(),
            x_label: "Time Step".to_string(),
            y_label: "Score".to_string(),
            size: FIGURE_SIZE,
            legend: true,
            grid: true,
            series: LineSeries {
                name: "Score over Time".to_string(),
                color: Color32::BLUE,
                width: 1.5,
                points: series.points().collect(),
            },
        }
    }

    /// Window inner size in pixels.
    pub fn viewport_size(&self) -> [f32; 2] {
        [self.size[0] * PIXELS_PER_UNIT, self.size[1] * PIXELS_PER_UNIT]
    }
}
