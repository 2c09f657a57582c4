//! Shared UI components for Mission Explorer

use eframe::egui::{self, CornerRadius, RichText, Stroke};

use crate::app::ExplorerApp;

/// Accessible label of the theme switch
pub const THEME_SWITCH_LABEL: &str = "Toggle dark mode";

/// Render the dark mode switch
pub fn render_theme_switch(app: &mut ExplorerApp, ui: &mut egui::Ui) {
    let size = ui.spacing().interact_size.y * egui::vec2(2.0, 1.0);
    let (rect, mut response) = ui.allocate_exact_size(size, egui::Sense::click());

    if response.clicked() {
        app.toggle_theme();
        response.mark_changed();
    }

    let on = app.theme.is_dark();
    let enabled = ui.is_enabled();
    response.widget_info(|| {
        egui::WidgetInfo::selected(egui::WidgetType::Checkbox, enabled, on, THEME_SWITCH_LABEL)
    });
    let response = response.on_hover_text(THEME_SWITCH_LABEL);

    if ui.is_rect_visible(rect) {
        let theme = &app.ui.current_theme;
        let how_on = ui.ctx().animate_bool_responsive(response.id, on);
        let radius = 0.5 * rect.height();

        let track = if on { theme.accent } else { theme.bg_light };
        let stroke = if response.hovered() { theme.accent_hover } else { theme.border };
        ui.painter().rect(
            rect,
            CornerRadius::same(radius as u8),
            track,
            Stroke::new(1.0, stroke),
            egui::StrokeKind::Inside,
        );

        let knob_x = egui::lerp((rect.left() + radius)..=(rect.right() - radius), how_on);
        ui.painter()
            .circle_filled(egui::pos2(knob_x, rect.center().y), 0.75 * radius, theme.bg_darkest);
    }
}

/// Render the About dialog
pub fn render_about_dialog(app: &mut ExplorerApp, ctx: &egui::Context) {
    if !app.ui.show_about_dialog {
        return;
    }

    let theme = app.ui.current_theme.clone();

    egui::Window::new("About Mission Explorer")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([300.0, 240.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);

                ui.label(
                    RichText::new("Mission Explorer")
                        .size(24.0)
                        .strong()
                        .color(theme.accent),
                );

                ui.add_space(12.0);

                ui.label(
                    RichText::new(format!("Version {}", env!("CARGO_PKG_VERSION")))
                        .color(theme.text_muted),
                );

                ui.add_space(12.0);

                ui.label(
                    RichText::new("Browse, filter and bookmark SpaceX launches")
                        .color(theme.text_secondary),
                );

                ui.add_space(12.0);

                if ui.link("Data: r/SpaceX API").clicked() {
                    let _ = open::that("https://github.com/r-spacex/SpaceX-API");
                }

                ui.add_space(12.0);

                ui.label(
                    RichText::new("Built with Rust + egui")
                        .size(11.0)
                        .color(theme.text_muted),
                );

                ui.add_space(12.0);

                if ui.button("Close").clicked() {
                    app.ui.show_about_dialog = false;
                }

                ui.add_space(8.0);
            });
        });
}
