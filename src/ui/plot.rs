use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::state::AppState;

/// Opacity applied to the bars so overlapping distributions stay visible.
const BAR_ALPHA: f32 = 0.55;

// ---------------------------------------------------------------------------
// Histogram plot (central panel)
// ---------------------------------------------------------------------------

/// Render the grouped histogram in the central panel.
pub fn histogram_plot(ui: &mut Ui, state: &AppState) {
    let chart = match &state.chart {
        Some(c) => c,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a dataset to view histograms  (File → Open…)");
            });
            return;
        }
    };

    Plot::new("histogram_plot")
        .legend(Legend::default())
        .x_axis_label(&chart.value_column)
        .y_axis_label("Count")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for series in &chart.series {
                let color = state
                    .color_map
                    .as_ref()
                    .map(|cm| cm.color_for(&series.label))
                    .unwrap_or(eframe::egui::Color32::LIGHT_BLUE);

                let bars: Vec<Bar> = series
                    .counts
                    .iter()
                    .enumerate()
                    .map(|(i, &count)| {
                        Bar::new(chart.bin_center(i), count as f64).width(chart.bin_width())
                    })
                    .collect();

                let bar_chart = BarChart::new(bars)
                    .name(&series.label)
                    .color(color.gamma_multiply(BAR_ALPHA));

                plot_ui.bar_chart(bar_chart);
            }
        });
}
