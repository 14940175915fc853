//! App module - contains the main application state and logic

mod health;
mod submit;

use crate::schema::FarmForm;
use crate::settings::Settings;
use crate::theme;
use crate::types::{ResultsView, ServerStatus, SubmitState};
use eframe::egui;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::info;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    // Form
    pub(crate) form: FarmForm,
    // Request lifecycle, shared with the runtime task
    pub(crate) submit_state: Arc<Mutex<SubmitState>>,
    pub(crate) runtime: tokio::runtime::Runtime,
    // Results display
    pub(crate) results: Option<ResultsView>,
    pub(crate) scroll_to_results: bool,
    // Blocking error dialog
    pub(crate) error_message: Option<String>,
    // Server connection
    pub(crate) server_url: String,
    pub(crate) server_status: ServerStatus,
    pub(crate) health_probe_started: bool,
    // Settings modal
    pub(crate) show_settings: bool,
    // Chrome
    pub(crate) logo_texture: Option<egui::TextureHandle>,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, data_dir: PathBuf) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Apply theme from theme.rs
        theme::apply_visuals(&cc.egui_ctx);

        Self {
            form: FarmForm::default(),
            submit_state: Arc::new(Mutex::new(SubmitState::default())),
            runtime: tokio::runtime::Runtime::new().unwrap(),
            results: None,
            scroll_to_results: false,
            error_message: None,
            server_url: settings.server_url,
            server_status: ServerStatus::Checking,
            health_probe_started: false,
            show_settings: false,
            logo_texture: None,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            server_url: self.server_url.clone(),
        };
        settings.save(&self.data_dir);
    }

    /// Restore the form to its reference defaults and clear everything the
    /// previous request produced. A request still in flight keeps running,
    /// its answer is discarded on arrival.
    pub fn reset_form(&mut self) {
        info!("Form reset to defaults");
        self.form.reset();
        self.results = None;
        self.scroll_to_results = false;
        self.error_message = None;
        self.submit_state.lock().unwrap().invalidate();
    }

    pub fn is_submitting(&self) -> bool {
        self.submit_state.lock().unwrap().is_in_flight()
    }
}
