//! Prev / numbered / Next page controls

use eframe::egui::{self, RichText};

use crate::app::ExplorerApp;
use crate::filter::Page;

/// Render pagination controls for `page`
pub fn render_pagination<T>(app: &mut ExplorerApp, ui: &mut egui::Ui, page: &Page<T>) {
    let theme = app.ui.current_theme.clone();

    ui.horizontal_wrapped(|ui| {
        if ui.add_enabled(page.has_prev(), egui::Button::new("Prev")).clicked() {
            app.ui.page = page.number - 1;
        }

        for number in page.page_numbers() {
            let current = number == page.number;
            let (fill, text) = if current {
                (theme.accent, theme.bg_darkest)
            } else {
                (theme.bg_light, theme.text_primary)
            };

            let button = egui::Button::new(RichText::new(number.to_string()).color(text)).fill(fill);
            if ui.add(button).clicked() {
                app.ui.page = number;
            }
        }

        if ui.add_enabled(page.has_next(), egui::Button::new("Next")).clicked() {
            app.ui.page = page.number + 1;
        }

        if page.total_items > 0 {
            ui.add_space(12.0);
            ui.label(
                RichText::new(format!("{} launches", page.total_items)).color(theme.text_muted),
            );
        }
    });
}
