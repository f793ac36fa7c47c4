use anyhow::Result;
use eframe::egui;

use crate::chart::Chart;
use crate::ui::plot;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ScorePlotApp {
    pub chart: Chart,
}

impl ScorePlotApp {
    pub fn new(chart: Chart) -> Self {
        Self { chart }
    }
}

impl eframe::App for ScorePlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        draw(ctx, &self.chart);
    }
}

/// One frame of the chart window.
pub fn draw(ctx: &egui::Context, chart: &Chart) {
    egui::CentralPanel::default().show(ctx, |ui| {
        plot::score_plot(ui, chart);
    });
}

// ---------------------------------------------------------------------------
// Native window
// ---------------------------------------------------------------------------

/// Open a window showing `chart` and block until it is closed.
pub fn render(chart: Chart) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(chart.title.clone())
            .with_inner_size(chart.viewport_size()),
        ..Default::default()
    };

    log::debug!(
        "Opening chart window with {} points",
        chart.series.points.len()
    );

    let title = chart.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(ScorePlotApp::new(chart)))),
    )
    .map_err(|e| anyhow::anyhow!("showing chart window: {e}"))
}
