//! Headless egui frames with synthetic pointer input

use eframe::egui;
use std::sync::Arc;

use crate::app::ExplorerApp;
use crate::config::Config;
use crate::prefs::MemoryStorage;

pub const SCREEN: egui::Vec2 = egui::vec2(800.0, 600.0);

/// App over in-memory preferences, with launches already loaded
pub fn test_app() -> ExplorerApp {
    let mut app =
        ExplorerApp::with_storage(Config::default(), Arc::new(MemoryStorage::new())).unwrap();
    app.launches.finish(Ok(Vec::new()));
    app
}

/// Run one frame with `events` as its input
pub fn run_frame(ctx: &egui::Context, events: Vec<egui::Event>, mut show: impl FnMut(&egui::Context)) {
    let input = egui::RawInput {
        screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, SCREEN)),
        events,
        ..Default::default()
    };
    let _ = ctx.run(input, |ctx| show(ctx));
}

fn button(pos: egui::Pos2, pressed: bool) -> egui::Event {
    egui::Event::PointerButton {
        pos,
        button: egui::PointerButton::Primary,
        pressed,
        modifiers: egui::Modifiers::NONE,
    }
}

/// Move to `pos`, press and release the primary button over three frames
pub fn click_at(ctx: &egui::Context, pos: egui::Pos2, mut show: impl FnMut(&egui::Context)) {
    run_frame(ctx, vec![egui::Event::PointerMoved(pos)], &mut show);
    run_frame(ctx, vec![button(pos, true)], &mut show);
    run_frame(ctx, vec![button(pos, false)], &mut show);
    run_frame(ctx, Vec::new(), &mut show);
}
