use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::filter::FilterColumn;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };

    // Collect the clicks first, apply them after the dataset borrow ends.
    let mut toggled: Vec<(FilterColumn, String)> = Vec::new();
    let mut cleared: Vec<FilterColumn> = Vec::new();
    let mut reset = false;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for column in FilterColumn::ALL {
                let options = column.options(dataset);
                let selected = state.selection.values(column);

                let header_text = if selected.is_empty() {
                    format!("Select {}  (all)", column.label())
                } else {
                    format!(
                        "Select {}  ({}/{})",
                        column.label(),
                        selected.len(),
                        options.len()
                    )
                };

                egui::CollapsingHeader::new(RichText::new(header_text).strong())
                    .id_salt(column.label())
                    .default_open(true)
                    .show(ui, |ui: &mut Ui| {
                        if ui.small_button("All").clicked() {
                            cleared.push(column);
                        }

                        for value in options {
                            let mut checked = selected.contains(value);
                            let mut text = RichText::new(value);
                            if column == FilterColumn::Department {
                                text = text.color(state.department_colors.color_for(value));
                            }
                            if ui.checkbox(&mut checked, text).changed() {
                                toggled.push((column, value.clone()));
                            }
                        }
                    });
                ui.add_space(6.0);
            }

            ui.separator();
            if ui.button("Reset filters").clicked() {
                reset = true;
            }
        });

    for (column, value) in toggled {
        state.toggle_filter_value(column, &value);
    }
    for column in cleared {
        state.select_all(column);
    }
    if reset {
        state.reset_filters();
    }
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
                "{} employees loaded, {} matching",
                ds.len(),
                state.summary.record_count()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

/// Title and subtitle above the charts.
pub fn header(ui: &mut Ui) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(RichText::new("HR Analytics Dashboard").size(26.0));
        ui.label(
            RichText::new(
                "Explore employee distribution and salary patterns by department, job title, and county.",
            )
            .color(Color32::from_gray(0x55)),
        );
    });
    ui.add_space(8.0);
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open employee data")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => state.set_dataset(dataset),
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
