use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::chart::Chart;

// ---------------------------------------------------------------------------
// Score plot (central panel)
// ---------------------------------------------------------------------------

/// Render the chart title and the score line.
pub fn score_plot(ui: &mut Ui, chart: &Chart) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(&chart.title);
    });

    let mut plot = Plot::new("score_plot")
        .x_axis_label(chart.x_label.as_str())
        .y_axis_label(chart.y_label.as_str())
        .show_grid(chart.grid);
    if chart.legend {
        plot = plot.legend(Legend::default());
    }

    let series = &chart.series;
    let points: PlotPoints = series.points.iter().copied().collect();
    let line = Line::new(points)
        .name(&series.name)
        .color(series.color)
        .width(series.width);

    plot.show(ui, |plot_ui| {
        plot_ui.line(line);
    });
}
