//! Home screen: header, filters, launch grid and pagination

use eframe::egui::{self, RichText};

use crate::app::ExplorerApp;
use crate::ui::components::render_theme_switch;
use crate::ui::filters::render_filter_bar;
use crate::ui::launch_list::{render_launch_list, render_loading_skeleton};
use crate::ui::pagination::render_pagination;

/// Render the home screen
pub fn render_home(app: &mut ExplorerApp, ui: &mut egui::Ui) {
    let theme = app.ui.current_theme.clone();

    // Header row
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.label(
            RichText::new("SpaceX Mission Explorer")
                .size(28.0)
                .strong()
                .color(theme.accent),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            render_theme_switch(app, ui);
            ui.label(RichText::new("Dark mode").color(theme.text_muted));
        });
    });
    ui.add_space(12.0);

    render_filter_bar(app, ui);
    ui.add_space(16.0);

    // Computed every frame so the grid always matches the current filters
    let page = app.visible_page();

    egui::ScrollArea::vertical()
        .id_salt("launch_scroll")
        .auto_shrink([false, true])
        .max_height((ui.available_height() - 48.0).max(120.0))
        .show(ui, |ui| {
            if app.launches.loading {
                render_loading_skeleton(ui, &theme);
            } else if let Some(ref err) = app.launches.error {
                ui.label(RichText::new(format!("Error: {}", err)).color(theme.error));
            } else {
                render_launch_list(app, ui, &page.items);
            }
        });

    ui.add_space(12.0);
    render_pagination(app, ui, &page);
}
