use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – chart controls and per-group summary
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Chart");
    ui.separator();

    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    // Clone what we need so we can mutate state inside the closures.
    let numeric_cols = dataset.numeric_column_names();
    let categorical_cols = dataset.categorical_column_names();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Value column selector ----
            ui.strong("Value column");
            let current_value = state.value_column.clone().unwrap_or_default();
            egui::ComboBox::from_id_salt("value_column")
                .selected_text(&current_value)
                .show_ui(ui, |ui: &mut Ui| {
                    for col in &numeric_cols {
                        if ui.selectable_label(current_value == *col, col).clicked() {
                            state.set_value_column(col.clone());
                        }
                    }
                });
            ui.add_space(4.0);

            // ---- Group column selector ----
            ui.strong("Group by");
            let current_group = state.group_column.clone().unwrap_or_default();
            egui::ComboBox::from_id_salt("group_column")
                .selected_text(&current_group)
                .show_ui(ui, |ui: &mut Ui| {
                    for col in &categorical_cols {
                        if ui.selectable_label(current_group == *col, col).clicked() {
                            state.set_group_column(col.clone());
                        }
                    }
                });
            ui.add_space(4.0);

            // ---- Bin count ----
            ui.strong("Bins");
            let mut bins = state.bins;
            if ui
                .add(egui::Slider::new(&mut bins, 5..=100))
                .changed()
            {
                state.set_bins(bins);
            }
            ui.separator();

            // ---- Per-group summary ----
            if let (Some(chart), Some(cm)) = (&state.chart, &state.color_map) {
                ui.strong("Groups");
                for series in &chart.series {
                    let color = cm.color_for(&series.label);
                    ui.horizontal(|ui: &mut Ui| {
                        let (rect, _) = ui
                            .allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
                        ui.painter().rect_filled(rect, 2, color);
                        let mean = if series.mean.is_finite() {
                            format!("{:.2}", series.mean)
                        } else {
                            "–".to_string()
                        };
                        ui.label(format!(
                            "{}  (n={}, mean={})",
                            series.label, series.n_values, mean
                        ));
                    });
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} rows, {} columns",
                ds.n_rows(),
                ds.column_names().len()
            ));
        }

        ui.separator();

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open dataset")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.loading = true;
        match crate::data::loader::load_file(&path) {
            Ok(table) => {
                log::info!(
                    "Loaded {} rows with columns {:?}",
                    table.n_rows(),
                    table.column_names()
                );
                state.set_dataset(table);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
                state.loading = false;
            }
        }
    }
}
