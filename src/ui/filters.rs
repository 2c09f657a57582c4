//! Filter bar: search, year and checkbox filters

use eframe::egui::{self, CornerRadius, Margin, RichText, Stroke};

use crate::app::ExplorerApp;

/// Render the filter bar
pub fn render_filter_bar(app: &mut ExplorerApp, ui: &mut egui::Ui) {
    let theme = app.ui.current_theme.clone();
    let years = app.years();

    egui::Frame::new()
        .fill(theme.bg_medium)
        .corner_radius(CornerRadius::same(12))
        .inner_margin(Margin::same(16))
        .stroke(Stroke::new(1.0, theme.border))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing.x = 16.0;

                let search = ui.add(
                    egui::TextEdit::singleline(&mut app.ui.search_input)
                        .hint_text("Search missions")
                        .desired_width(220.0),
                );
                search.widget_info(|| {
                    egui::WidgetInfo::labeled(egui::WidgetType::TextEdit, true, "Search missions")
                });
                if !app.ui.search_input.is_empty()
                    && ui.small_button("✕").on_hover_text("Clear search").clicked()
                {
                    app.ui.clear_search();
                }

                let selected_text = app
                    .ui
                    .year
                    .map(|y| y.to_string())
                    .unwrap_or_else(|| "All Years".to_string());
                egui::ComboBox::from_id_salt("year_select")
                    .selected_text(selected_text)
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut app.ui.year, None, "All Years");
                        for year in &years {
                            ui.selectable_value(&mut app.ui.year, Some(*year), year.to_string());
                        }
                    })
                    .response
                    .on_hover_text("Filter by launch year");

                ui.checkbox(&mut app.ui.only_successful, "Show only successful launches");
                ui.checkbox(&mut app.ui.only_favorites, "Show only favorite launches");

                if app.ui.search.is_pending() {
                    ui.label(RichText::new("...").color(theme.text_muted));
                }
            });
        });
}
