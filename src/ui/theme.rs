use eframe::egui::{self, Color32, Stroke, Visuals};

/// Theme color definitions
#[derive(Debug, Clone)]
pub struct Theme {
    /// Whether this is the dark palette
    pub dark: bool,

    // Base colors
    pub bg_darkest: Color32,
    pub bg_dark: Color32,
    pub bg_medium: Color32,
    pub bg_light: Color32,

    // Text colors
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,

    // Accent colors
    pub accent: Color32,
    pub accent_hover: Color32,
    pub accent_muted: Color32,

    // Semantic colors
    pub success: Color32,
    pub error: Color32,
    pub favorite: Color32,

    // UI element colors
    pub border: Color32,
    pub selection: Color32,
}

impl Theme {
    /// Palette for the persisted dark mode flag
    pub fn for_mode(dark: bool) -> Self {
        if dark { Self::dark() } else { Self::light() }
    }

    /// Light theme - indigo on white
    pub fn light() -> Self {
        Self {
            dark: false,

            bg_darkest: Color32::from_rgb(255, 255, 255),
            bg_dark: Color32::from_rgb(248, 250, 252),
            bg_medium: Color32::from_rgb(238, 242, 255),   // Indigo-50
            bg_light: Color32::from_rgb(224, 231, 255),    // Indigo-100

            text_primary: Color32::from_rgb(17, 24, 39),
            text_secondary: Color32::from_rgb(49, 46, 129), // Indigo-900
            text_muted: Color32::from_rgb(107, 114, 128),

            accent: Color32::from_rgb(79, 70, 229),        // Indigo-600
            accent_hover: Color32::from_rgb(67, 56, 202),  // Indigo-700
            accent_muted: Color32::from_rgb(165, 180, 252), // Indigo-300

            success: Color32::from_rgb(22, 163, 74),  // Green-600
            error: Color32::from_rgb(220, 38, 38),    // Red-600
            favorite: Color32::from_rgb(250, 204, 21), // Yellow-400

            border: Color32::from_rgb(199, 210, 254),
            selection: Color32::from_rgb(79, 70, 229).gamma_multiply(0.3),
        }
    }

    /// Dark theme - indigo on slate
    pub fn dark() -> Self {
        Self {
            dark: true,

            bg_darkest: Color32::from_rgb(17, 24, 39),     // Gray-900
            bg_dark: Color32::from_rgb(24, 30, 46),
            bg_medium: Color32::from_rgb(31, 41, 55),      // Gray-800
            bg_light: Color32::from_rgb(49, 46, 129),      // Indigo-900

            text_primary: Color32::from_rgb(243, 244, 246),
            text_secondary: Color32::from_rgb(199, 210, 254), // Indigo-200
            text_muted: Color32::from_rgb(156, 163, 175),

            accent: Color32::from_rgb(129, 140, 248),        // Indigo-400
            accent_hover: Color32::from_rgb(165, 180, 252),  // Indigo-300
            accent_muted: Color32::from_rgb(67, 56, 202),    // Indigo-700

            success: Color32::from_rgb(74, 222, 128),  // Green-400
            error: Color32::from_rgb(248, 113, 113),   // Red-400
            favorite: Color32::from_rgb(250, 204, 21), // Yellow-400

            border: Color32::from_rgb(67, 56, 202),
            selection: Color32::from_rgb(129, 140, 248).gamma_multiply(0.3),
        }
    }

    /// Apply this theme to egui's visuals
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = if self.dark { Visuals::dark() } else { Visuals::light() };

        // Window and panel backgrounds
        visuals.window_fill = self.bg_darkest;
        visuals.panel_fill = self.bg_dark;
        visuals.faint_bg_color = self.bg_medium;
        visuals.extreme_bg_color = self.bg_darkest;

        // Widget backgrounds
        visuals.widgets.noninteractive.bg_fill = self.bg_medium;
        visuals.widgets.noninteractive.weak_bg_fill = self.bg_light;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_secondary);

        // Inactive widgets
        visuals.widgets.inactive.bg_fill = self.bg_medium;
        visuals.widgets.inactive.weak_bg_fill = self.bg_light;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_primary);

        // Hovered widgets
        visuals.widgets.hovered.bg_fill = self.bg_light;
        visuals.widgets.hovered.weak_bg_fill = self.bg_light;
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, self.accent);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, self.text_primary);

        // Active/pressed widgets
        visuals.widgets.active.bg_fill = self.accent_muted;
        visuals.widgets.active.weak_bg_fill = self.accent_muted;
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, self.accent_hover);
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, self.text_primary);

        // Open widgets (dropdowns, etc)
        visuals.widgets.open.bg_fill = self.bg_light;
        visuals.widgets.open.weak_bg_fill = self.bg_light;
        visuals.widgets.open.bg_stroke = Stroke::new(1.0, self.accent);
        visuals.widgets.open.fg_stroke = Stroke::new(1.0, self.text_primary);

        // Selection
        visuals.selection.bg_fill = self.selection;
        visuals.selection.stroke = Stroke::new(1.0, self.accent);

        // Hyperlinks
        visuals.hyperlink_color = self.accent;

        // Window styling
        visuals.window_stroke = Stroke::new(2.0, self.border);

        ctx.set_visuals(visuals);
    }
}
