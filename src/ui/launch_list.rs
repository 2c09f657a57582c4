//! Launch grid and launch cards

use chrono::Local;
use eframe::egui::{self, Color32, CornerRadius, RichText, Stroke, Vec2};

use crate::api::{Launch, LaunchStatus};
use crate::app::ExplorerApp;
use crate::prefs::favorite_label;
use crate::ui::theme::Theme;

const CARD_MIN_WIDTH: f32 = 300.0;
const CARD_HEIGHT: f32 = 124.0;
const CARD_SPACING: f32 = 12.0;
const PATCH_SIZE: f32 = 80.0;
const MAX_COLUMNS: usize = 3;

/// What a click on a card asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Select,
    ToggleFavorite,
}

/// Decide the card action for one frame of input.
///
/// The favorite control takes precedence and never also selects the card.
pub fn resolve_card_action(
    card_clicked: bool,
    enter_pressed: bool,
    favorite_clicked: bool,
) -> Option<CardAction> {
    if favorite_clicked {
        Some(CardAction::ToggleFavorite)
    } else if card_clicked || enter_pressed {
        Some(CardAction::Select)
    } else {
        None
    }
}

/// Local calendar date of a launch
pub fn format_date(launch: &Launch) -> String {
    launch.date_utc.with_timezone(&Local).format("%Y-%m-%d").to_string()
}

/// Local date and time of a launch
pub fn format_date_time(launch: &Launch) -> String {
    launch
        .date_utc
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

pub fn status_color(status: LaunchStatus, theme: &Theme) -> Color32 {
    match status {
        LaunchStatus::Success => theme.success,
        LaunchStatus::Failure => theme.error,
        LaunchStatus::Unknown => theme.text_muted,
    }
}

/// Render the visible launches as a grid of cards
pub fn render_launch_list(app: &mut ExplorerApp, ui: &mut egui::Ui, launches: &[Launch]) {
    let theme = app.ui.current_theme.clone();

    if launches.is_empty() {
        ui.label(RichText::new("No launches available.").color(theme.text_muted));
        return;
    }

    let width = ui.available_width();
    let columns = (((width + CARD_SPACING) / (CARD_MIN_WIDTH + CARD_SPACING)).floor() as usize)
        .clamp(1, MAX_COLUMNS);
    let card_width = (width - CARD_SPACING * (columns - 1) as f32) / columns as f32;

    let mut actions = Vec::new();

    for row in launches.chunks(columns) {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = CARD_SPACING;
            for launch in row {
                let is_favorite = app.favorites.is_favorite(&launch.id);
                let patch = launch.patch_url().and_then(|url| app.patches.texture(url));
                let size = Vec2::new(card_width, CARD_HEIGHT);

                if let Some(action) =
                    render_launch_card(ui, launch, is_favorite, patch.as_ref(), &theme, size)
                {
                    actions.push((action, launch));
                }
            }
        });
        ui.add_space(CARD_SPACING);
    }

    for (action, launch) in actions {
        match action {
            CardAction::Select => app.select_launch(launch.clone()),
            CardAction::ToggleFavorite => {
                app.toggle_favorite(&launch.id);
            }
        }
    }
}

/// Render one card, returning the action the user took on it
fn render_launch_card(
    ui: &mut egui::Ui,
    launch: &Launch,
    is_favorite: bool,
    patch: Option<&egui::TextureHandle>,
    theme: &Theme,
    size: Vec2,
) -> Option<CardAction> {
    let (rect, card) = ui.allocate_exact_size(size, egui::Sense::click());
    let card = card.on_hover_cursor(egui::CursorIcon::PointingHand);
    card.widget_info(|| egui::WidgetInfo::labeled(egui::WidgetType::Button, true, &launch.name));

    let highlighted = card.hovered() || card.has_focus();
    ui.painter().rect(
        rect,
        CornerRadius::same(14),
        theme.bg_darkest,
        Stroke::new(2.0, if highlighted { theme.accent_muted } else { theme.border }),
        egui::StrokeKind::Inside,
    );

    // Card contents (not interactive, the whole card is the click target).
    // Selectable labels would sense clicks and swallow them.
    let mut content = ui.new_child(
        egui::UiBuilder::new()
            .max_rect(rect.shrink(14.0))
            .layout(egui::Layout::left_to_right(egui::Align::Center)),
    );
    content.style_mut().interaction.selectable_labels = false;
    render_patch(&mut content, launch, patch, theme);
    content.add_space(14.0);
    content.vertical(|ui| {
        ui.add(
            egui::Label::new(
                RichText::new(&launch.name)
                    .size(17.0)
                    .strong()
                    .color(theme.text_secondary),
            )
            .truncate(),
        );
        ui.label(RichText::new(format!("Date: {}", format_date(launch))).color(theme.accent));
        ui.label(RichText::new(format!("Rocket: {}", launch.rocket_display())).color(theme.accent));
        let status = launch.status();
        ui.label(
            RichText::new(format!("Status: {}", status.label()))
                .strong()
                .color(status_color(status, theme)),
        );
    });

    // Favorite star, added last so it sits on top of the card for clicks
    let label = favorite_label(is_favorite);
    let star_rect = egui::Rect::from_min_size(
        rect.right_top() + egui::vec2(-36.0, 8.0),
        Vec2::splat(28.0),
    );
    let star_color = if is_favorite { theme.favorite } else { theme.text_muted };
    let star = ui
        .put(
            star_rect,
            egui::Button::new(RichText::new("★").size(20.0).color(star_color)).frame(false),
        )
        .on_hover_text(label);
    star.widget_info(|| egui::WidgetInfo::labeled(egui::WidgetType::Button, true, label));

    let enter_pressed = card.has_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
    resolve_card_action(card.clicked(), enter_pressed, star.clicked())
}

fn render_patch(ui: &mut egui::Ui, launch: &Launch, patch: Option<&egui::TextureHandle>, theme: &Theme) {
    let size = Vec2::splat(PATCH_SIZE);

    if let Some(texture) = patch {
        ui.add(
            egui::Image::new(texture)
                .fit_to_exact_size(size)
                .corner_radius(CornerRadius::same(8)),
        )
        .on_hover_text(format!("{} patch", launch.name));
        return;
    }

    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    ui.painter().rect_filled(rect, CornerRadius::same(8), theme.bg_light);
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "No Image",
        egui::FontId::proportional(12.0),
        theme.accent,
    );
}

/// Placeholder cards shown while launches load
pub fn render_loading_skeleton(ui: &mut egui::Ui, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.spinner();
        ui.label(RichText::new("Loading launches...").color(theme.text_muted));
    });
    ui.add_space(8.0);

    let t = ui.input(|i| i.time);
    let pulse = 0.6 + 0.3 * (t * 3.0).sin() as f32;

    for _ in 0..6 {
        let (rect, _) =
            ui.allocate_exact_size(Vec2::new(ui.available_width(), 96.0), egui::Sense::hover());
        ui.painter()
            .rect_filled(rect, CornerRadius::same(10), theme.bg_light.gamma_multiply(pulse));
        ui.add_space(CARD_SPACING);
    }

    ui.ctx().request_repaint();
}
