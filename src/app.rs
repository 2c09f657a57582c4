use eframe::egui;
use std::sync::Arc;
use std::time::Instant;

use crate::api::{Launch, SpaceXClient};
use crate::config::Config;
use crate::filter::{self, PAGE_SIZE, Page};
use crate::prefs::{self, FavoritesStore, Storage, ThemeStore};
use crate::state::{LaunchesState, PatchImages, StateEvent, UiState};
use crate::ui;
use crate::ui::theme::Theme;

/// Main application state
pub struct ExplorerApp {
    /// Status message for the status bar
    pub status_message: String,
    /// SpaceX API client
    pub client: SpaceXClient,

    /// Fetched launch catalogue
    pub launches: LaunchesState,
    /// Mission patch textures
    pub patches: PatchImages,
    /// Persisted favorite launches
    pub favorites: FavoritesStore,
    /// Persisted dark mode flag
    pub theme: ThemeStore,
    /// UI state (filters, selection, theme palette)
    pub ui: UiState,
}

impl ExplorerApp {
    /// Create a new application instance and start loading launches
    pub fn new(_cc: &eframe::CreationContext<'_>) -> anyhow::Result<Self> {
        let config = Config::load().unwrap_or_else(|e| {
            tracing::error!("Failed to load config, using defaults: {}", e);
            Config::default()
        });

        let mut app = Self::with_storage(config, prefs::open_storage())?;
        if let Some(event) = app.launches.start(&app.client) {
            app.handle_event(event);
        }
        Ok(app)
    }

    /// Build the application over an explicit preference backend
    pub fn with_storage(config: Config, storage: Arc<dyn Storage>) -> anyhow::Result<Self> {
        let client = SpaceXClient::new(&config.api.base_url)?;
        tracing::debug!("Using launch API at {}", client.base_url());
        let favorites = FavoritesStore::load(storage.clone());
        let theme = ThemeStore::load(storage);
        let ui = UiState::new(Theme::for_mode(theme.is_dark()), config.search.debounce());

        Ok(Self {
            status_message: "Ready".to_string(),
            patches: PatchImages::new(client.clone()),
            client,
            launches: LaunchesState::default(),
            favorites,
            theme,
            ui,
        })
    }

    /// Process a single state event
    fn handle_event(&mut self, event: StateEvent) {
        match event {
            StateEvent::StatusMessage(msg) => self.status_message = msg,
            StateEvent::LogError(msg) => tracing::error!("{}", msg),
            StateEvent::LogInfo(msg) => tracing::info!("{}", msg),
        }
    }

    /// Process multiple state events
    fn handle_events(&mut self, events: Vec<StateEvent>) {
        for event in events {
            self.handle_event(event);
        }
    }

    /// Distinct launch years for the year selector
    pub fn years(&self) -> Vec<i32> {
        filter::available_years(&self.launches.launches)
    }

    /// The page of launches currently visible.
    ///
    /// Also stores the clamped page number back into the UI state.
    pub fn visible_page(&mut self) -> Page<Launch> {
        let filter_state = self.ui.filter_state();
        let filtered =
            filter::filter_launches(&self.launches.launches, &filter_state, self.favorites.set());
        let page = filter::paginate(filtered, self.ui.page, PAGE_SIZE).map(Launch::clone);

        self.ui.page = page.number;
        page
    }

    /// Open the details modal for `launch`
    pub fn select_launch(&mut self, launch: Launch) {
        tracing::debug!("Selected launch {}", launch.id);
        self.ui.selected = Some(launch);
    }

    pub fn close_details(&mut self) {
        self.ui.selected = None;
    }

    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        let now_favorite = self.favorites.toggle(id);
        self.status_message = if now_favorite {
            "Added to favorites".to_string()
        } else {
            "Removed from favorites".to_string()
        };
        now_favorite
    }

    /// Flip dark mode; the palette is applied on the next frame
    pub fn toggle_theme(&mut self) {
        let dark = self.theme.toggle();
        self.ui.current_theme = Theme::for_mode(dark);
        self.ui.theme_dirty = true;
    }
}

impl eframe::App for ExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.ui.theme_dirty {
            self.ui.current_theme.apply(ctx);
            self.ui.theme_dirty = false;
        }

        // Poll async tasks
        let events = self.launches.poll(ctx);
        self.handle_events(events);
        let events = self.patches.poll(ctx);
        self.handle_events(events);

        if let Some(remaining) = self.ui.tick_search(Instant::now()) {
            ctx.request_repaint_after(remaining);
        }

        let theme = self.ui.current_theme.clone();

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.ui.show_about_dialog = true;
                        ui.close();
                    }
                });
            });
        });

        // Status bar at bottom
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&self.status_message).color(theme.text_muted));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let favorites = self.favorites.set();
                    let text = if favorites.is_empty() {
                        "No favorites".to_string()
                    } else {
                        format!("{} favorites", favorites.len())
                    };
                    ui.label(egui::RichText::new(text).color(theme.text_muted));
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui::render_home(self, ui);
        });

        ui::render_details_modal(self, ctx);
        ui::render_about_dialog(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests::launch;
    use crate::prefs::{MemoryStorage, favorite_label};

    fn app_with(launches: Vec<Launch>) -> ExplorerApp {
        let mut app = ExplorerApp::with_storage(Config::default(), Arc::new(MemoryStorage::new())).unwrap();
        app.launches.finish(Ok(launches));
        app
    }

    fn mission_launches() -> Vec<Launch> {
        let mut alpha = launch("1", "Mission Alpha", "2020-01-01T00:00:00Z", Some(true));
        alpha.rocket_name = Some("Falcon 9".to_string());
        alpha.details = Some("Details of Mission Alpha".to_string());

        let mut beta = launch("2", "Mission Beta", "2021-01-01T00:00:00Z", Some(false));
        beta.rocket_name = Some("Falcon Heavy".to_string());
        beta.details = Some("Details of Mission Beta".to_string());

        vec![alpha, beta]
    }

    fn visible_names(app: &mut ExplorerApp) -> Vec<String> {
        app.visible_page().items.into_iter().map(|l| l.name).collect()
    }

    #[test]
    fn test_only_successful_hides_failed_mission() {
        let mut app = app_with(mission_launches());
        assert_eq!(visible_names(&mut app), vec!["Mission Alpha", "Mission Beta"]);

        app.ui.only_successful = true;
        assert_eq!(visible_names(&mut app), vec!["Mission Alpha"]);
    }

    #[test]
    fn test_favorite_toggle_switches_label() {
        let mut app = app_with(mission_launches());
        assert_eq!(favorite_label(app.favorites.is_favorite("1")), "Add to favorites");

        assert!(app.toggle_favorite("1"));
        assert_eq!(favorite_label(app.favorites.is_favorite("1")), "Remove favorite");

        assert!(!app.toggle_favorite("1"));
        assert_eq!(favorite_label(app.favorites.is_favorite("1")), "Add to favorites");
    }

    #[test]
    fn test_favorites_only_view() {
        let mut app = app_with(mission_launches());
        app.toggle_favorite("2");
        app.ui.only_favorites = true;

        assert_eq!(visible_names(&mut app), vec!["Mission Beta"]);
    }

    #[test]
    fn test_details_modal_open_and_close() {
        let mut app = app_with(mission_launches());
        let alpha = app.visible_page().items[0].clone();

        app.select_launch(alpha);
        let selected = app.ui.selected.as_ref().unwrap();
        assert_eq!(selected.details.as_deref(), Some("Details of Mission Alpha"));

        app.close_details();
        assert!(app.ui.selected.is_none());
    }

    #[test]
    fn test_page_is_clamped_after_filter_change() {
        let launches: Vec<Launch> = (0..10)
            .map(|i| {
                let success = if i < 9 { Some(false) } else { Some(true) };
                launch(&i.to_string(), &format!("Flight {}", i), "2022-05-01T00:00:00Z", success)
            })
            .collect();
        let mut app = app_with(launches);

        app.ui.page = 2;
        assert_eq!(visible_names(&mut app), vec!["Flight 8", "Flight 9"]);

        app.ui.only_successful = true;
        let page = app.visible_page();
        assert_eq!(page.number, 1);
        assert_eq!(page.items.len(), 1);
        assert_eq!(app.ui.page, 1);
    }

    #[test]
    fn test_year_options_follow_data() {
        let app = app_with(mission_launches());
        assert_eq!(app.years(), vec![2021, 2020]);
    }

    #[test]
    fn test_theme_toggle_marks_dirty() {
        let mut app = app_with(Vec::new());
        app.ui.theme_dirty = false;

        app.toggle_theme();
        assert!(app.theme.is_dark());
        assert!(app.ui.current_theme.dark);
        assert!(app.ui.theme_dirty);
    }
}
