//! Launch details modal

use eframe::egui::{self, RichText};
use egui_commonmark::CommonMarkViewer;

use crate::app::ExplorerApp;
use crate::ui::launch_list::{format_date_time, status_color};

/// Accessible label of the modal's close control
pub const CLOSE_LABEL: &str = "Close launch details";

/// Render the details modal for the selected launch.
///
/// The modal only closes through its close control; clicking the backdrop
/// or pressing Escape leaves it open.
pub fn render_details_modal(app: &mut ExplorerApp, ctx: &egui::Context) {
    let Some(launch) = app.ui.selected.clone() else {
        return;
    };
    let theme = app.ui.current_theme.clone();
    let mut close_requested = false;

    egui::Modal::new(egui::Id::new("launch_details")).show(ctx, |ui| {
        ui.set_width(480.0);

        ui.horizontal(|ui| {
            ui.label(
                RichText::new(&launch.name)
                    .size(22.0)
                    .strong()
                    .color(theme.text_primary),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                let (rect, _) = ui.allocate_exact_size(egui::vec2(24.0, 24.0), egui::Sense::hover());
                let close = ui
                    .interact(rect, close_button_id(), egui::Sense::click())
                    .on_hover_cursor(egui::CursorIcon::PointingHand)
                    .on_hover_text(CLOSE_LABEL);
                let color = if close.hovered() { theme.accent } else { theme.text_muted };
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "✕",
                    egui::FontId::proportional(16.0),
                    color,
                );
                close.widget_info(|| {
                    egui::WidgetInfo::labeled(egui::WidgetType::Button, true, CLOSE_LABEL)
                });
                if close.clicked() {
                    close_requested = true;
                }
            });
        });

        ui.add_space(12.0);

        ui.horizontal(|ui| {
            ui.label(RichText::new("Date:").strong().color(theme.text_muted));
            ui.label(RichText::new(format_date_time(&launch)).color(theme.text_primary));
        });
        ui.horizontal(|ui| {
            ui.label(RichText::new("Rocket:").strong().color(theme.text_muted));
            ui.label(RichText::new(launch.rocket_display()).color(theme.text_primary));
        });
        ui.horizontal(|ui| {
            let status = launch.status();
            ui.label(RichText::new("Status:").strong().color(theme.text_muted));
            ui.label(RichText::new(status.label()).color(status_color(status, &theme)));
        });

        ui.add_space(12.0);

        egui::ScrollArea::vertical()
            .id_salt("details_scroll")
            .max_height(240.0)
            .show(ui, |ui| match launch.details.as_deref() {
                Some(text) if !text.trim().is_empty() => {
                    let processed = convert_urls_to_links(text);
                    CommonMarkViewer::new().show(ui, &mut app.ui.markdown_cache, &processed);
                }
                _ => {
                    ui.label(RichText::new("No details available.").color(theme.text_muted));
                }
            });

        ui.add_space(12.0);

        ui.horizontal(|ui| {
            if let Some(ref url) = launch.links.wikipedia {
                if ui.link("Wikipedia").clicked() {
                    open_link(url);
                }
            }
            if let Some(ref url) = launch.links.webcast {
                if ui.link("Watch webcast").clicked() {
                    open_link(url);
                }
            }
        });
    });

    if close_requested {
        app.close_details();
    }
}

/// Stable id of the close control
pub fn close_button_id() -> egui::Id {
    egui::Id::new("launch_details_close")
}

fn open_link(url: &str) {
    if let Err(e) = open::that(url) {
        tracing::error!("Failed to open {}: {}", url, e);
    }
}

/// Convert raw URLs in text to markdown autolinks
/// This makes URLs clickable in the markdown renderer
pub fn convert_urls_to_links(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 16);
    let mut rest = text;

    while let Some(start) = rest.find("http") {
        let (before, candidate) = rest.split_at(start);
        result.push_str(before);

        // Leave existing markdown links and autolinks alone
        let already_linked = result.ends_with("](") || result.ends_with('<');
        let is_url = candidate.starts_with("https://") || candidate.starts_with("http://");

        let end = candidate
            .find(|c: char| c.is_whitespace() || c == '>')
            .unwrap_or(candidate.len());
        let url = trim_url_end(&candidate[..end]);

        if is_url && !already_linked && url.len() > "https://".len() {
            result.push('<');
            result.push_str(url);
            result.push('>');
            rest = &candidate[url.len()..];
        } else {
            result.push_str("http");
            rest = &candidate["http".len()..];
        }
    }

    result.push_str(rest);
    result
}

/// Strip trailing sentence punctuation from a URL candidate.
///
/// A closing paren is kept while it balances one opened inside the URL.
fn trim_url_end(url: &str) -> &str {
    let mut url = url;
    loop {
        let Some(last) = url.chars().last() else {
            return url;
        };
        let strip = match last {
            '.' | ',' | ';' | ':' | '!' | '?' => true,
            ')' => url.matches(')').count() > url.matches('(').count(),
            _ => false,
        };
        if !strip {
            return url;
        }
        url = &url[..url.len() - 1];
    }
}
