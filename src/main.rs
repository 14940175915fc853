#![windows_subsystem = "windows"]
//! Farm Advisor - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod api;
mod app;
mod constants;
mod schema;
mod settings;
mod theme;
mod types;
mod ui;
mod utils;

use app::App;
use constants::*;
use eframe::egui;
use schema::{FieldKind, FIELD_SCHEMA};
use std::path::PathBuf;
use tracing::info;
use types::ServerStatus;
use ui::components;

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, EnvFilter, prelude::*};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "farm-advisor.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,farm_advisor=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Farm Advisor");

    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "Farm Advisor starting");

    // Load saved window position/size
    let settings = settings::Settings::load(&data_dir);
    let win_pos = match (settings.window_x, settings.window_y) {
        (Some(x), Some(y)) => Some(egui::pos2(x, y)),
        _ => None,
    };
    let win_size = match (settings.window_w, settings.window_h) {
        (Some(w), Some(h)) => Some(egui::vec2(w, h)),
        _ => None,
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(win_size.unwrap_or(egui::vec2(1080.0, 720.0)))
        .with_min_inner_size([940.0, 620.0])
        .with_title("Farm Advisor");

    // Window/taskbar icon rasterized from the bundled SVG
    {
        let (pixels, w, h) = utils::rasterize_logo(64);
        let icon = egui::IconData {
            rgba: pixels,
            width: w,
            height: h,
        };
        viewport = viewport.with_icon(std::sync::Arc::new(icon));
    }

    let needs_center = win_pos.is_none();

    if let Some(pos) = win_pos {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Farm Advisor",
        options,
        Box::new(move |cc| {
            let mut app = App::new(cc, settings, data_dir);
            app.needs_center = needs_center;
            Ok(Box::new(app))
        }),
    )
}

// ============================================================================
// MAIN UPDATE LOOP & UI RENDERING
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // First frame: probe the advisory server
        if !self.health_probe_started {
            self.health_probe_started = true;
            self.check_server_health(ctx);
            info!(fields = FIELD_SCHEMA.len(), "Form initialized and ready");
        }

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        // Fold finished background work into UI state
        self.poll_health(ctx);
        self.poll_submission();

        // Enter submits from anywhere outside a text edit (when no dialog open)
        if self.error_message.is_none()
            && !self.show_settings
            && !ctx.wants_keyboard_input()
            && ctx.input(|i| i.key_pressed(egui::Key::Enter))
        {
            self.submit(ctx);
        }

        // Dialogs
        self.render_error_modal(ctx);
        self.render_settings_modal(ctx);

        // Left sidebar - input form (must be added BEFORE CentralPanel)
        egui::SidePanel::left("form_panel")
            .exact_width(theme::SIDEBAR_WIDTH)
            .resizable(false)
            .show_separator_line(false)
            .frame(theme::sidebar_frame())
            .show(ctx, |ui| {
                self.render_form_panel(ui, ctx);
            });

        // Central panel - results (MUST be added LAST after all side panels)
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ctx, |ui| {
                self.render_header_strip(ui);
                ui.add_space(8.0);
                self.render_results_area(ui);
            });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application shutting down");
        self.save_settings();
    }
}

// ============================================================================
// FORM PANEL
// ============================================================================

fn section_header(ui: &mut egui::Ui, label: &str) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(label)
                .size(theme::FONT_SMALL)
                .color(theme::TEXT_DIM)
                .strong(),
        )
        .selectable(false),
    );
    ui.add_space(2.0);
}

impl App {
    fn render_form_panel(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        // Header with logo, centered
        ui.add_space(18.0);
        ui.with_layout(egui::Layout::top_down(egui::Align::Center), |ui| {
            let texture = self.logo_texture.get_or_insert_with(|| {
                let (pixels, w, h) = utils::rasterize_logo(theme::LOGO_SIZE as u32 * 2);
                ctx.load_texture(
                    "logo",
                    egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], &pixels),
                    egui::TextureOptions::LINEAR,
                )
            });
            ui.image(egui::load::SizedTexture::new(
                texture.id(),
                egui::vec2(theme::LOGO_SIZE, theme::LOGO_SIZE),
            ));
            ui.add_space(4.0);
            ui.add(
                egui::Label::new(
                    egui::RichText::new("FARM ADVISOR")
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_DIM),
                )
                .selectable(false),
            );
        });
        ui.add_space(10.0);

        // Action buttons pinned to the bottom, form body scrolls above them
        ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
            // Version at the very bottom
            let (rect, _) = ui.allocate_exact_size(
                egui::vec2(ui.available_width(), 14.0),
                egui::Sense::hover(),
            );
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                format!("v{}", APP_VERSION),
                egui::FontId::proportional(theme::FONT_CAPTION),
                egui::Color32::from_rgb(0x45, 0x45, 0x4c),
            );
            ui.add_space(2.0);

            self.render_submit_button(ui, ctx);
            ui.add_space(6.0);
            self.render_reset_button(ui);
            ui.add_space(8.0);

            ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        self.render_field_sections(ui);
                    });
            });
        });
    }

    fn render_field_sections(&mut self, ui: &mut egui::Ui) {
        section_header(ui, "FIELD CONDITIONS");
        theme::section_frame().show(ui, |ui| {
            ui.spacing_mut().item_spacing.y = 6.0;
            for field in FIELD_SCHEMA.iter().filter(|f| f.kind == FieldKind::Number) {
                components::numeric_field_row(
                    ui,
                    field.label,
                    field.unit,
                    self.form.value_mut(field.name),
                );
            }
        });

        ui.add_space(10.0);

        section_header(ui, "CROP PROFILE");
        theme::section_frame().show(ui, |ui| {
            ui.spacing_mut().item_spacing.y = 6.0;
            for field in FIELD_SCHEMA.iter().filter(|f| f.kind == FieldKind::Text) {
                components::combo_field_row(
                    ui,
                    field.label,
                    schema::options(field.name),
                    self.form.value_mut(field.name),
                );
            }
        });
    }

    fn render_submit_button(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let submitting = self.is_submitting();
        let enabled = !submitting;

        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), theme::BUTTON_HEIGHT_LARGE),
            egui::Sense::click(),
        );

        let fill = if enabled {
            theme::BTN_ACCENT
        } else {
            theme::BTN_DISABLED
        };
        let (fill, draw_rect) = if enabled {
            theme::button_visual(&response, fill, rect)
        } else {
            (fill, rect)
        };
        ui.painter().rect_filled(draw_rect, 4.0, fill);

        let (text, text_color) = if submitting {
            (
                format!(
                    "{}  Contacting server...",
                    egui_phosphor::regular::HOURGLASS
                ),
                theme::BTN_DISABLED_TEXT,
            )
        } else {
            (
                format!(
                    "{}  Get Recommendations",
                    egui_phosphor::regular::PAPER_PLANE_TILT
                ),
                theme::BTN_ACCENT_TEXT,
            )
        };
        ui.painter().text(
            draw_rect.center(),
            egui::Align2::CENTER_CENTER,
            text,
            egui::FontId::proportional(theme::FONT_BODY),
            text_color,
        );

        if response.hovered() {
            if enabled {
                ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
            } else {
                ui.ctx().set_cursor_icon(egui::CursorIcon::NotAllowed);
            }
        }
        if enabled && response.clicked() {
            self.submit(ctx);
        }
    }

    fn render_reset_button(&mut self, ui: &mut egui::Ui) {
        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), theme::BUTTON_HEIGHT),
            egui::Sense::click(),
        );
        if response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }
        let (fill, draw_rect) = theme::button_visual(&response, theme::BORDER_SUBTLE, rect);
        ui.painter().rect_filled(draw_rect, 4.0, fill);
        ui.painter().text(
            draw_rect.center(),
            egui::Align2::CENTER_CENTER,
            format!(
                "{}  Reset Form",
                egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE
            ),
            egui::FontId::proportional(theme::FONT_LABEL),
            egui::Color32::WHITE,
        );
        if response.clicked() {
            self.reset_form();
        }
    }
}

// ============================================================================
// RESULTS PANEL
// ============================================================================

impl App {
    fn render_header_strip(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let (dot_color, status_text) = match &self.server_status {
                ServerStatus::Checking => {
                    (theme::TEXT_DIM, "Checking advisory server...".to_string())
                }
                ServerStatus::Connected { service, version } => {
                    (theme::STATUS_SUCCESS, format!("{} v{}", service, version))
                }
                ServerStatus::Unreachable(_) => {
                    (theme::STATUS_ERROR, "Server unreachable".to_string())
                }
            };
            components::status_dot(ui, dot_color);
            let status_label = ui.add(
                egui::Label::new(
                    egui::RichText::new(status_text)
                        .size(theme::FONT_SECTION)
                        .color(theme::TEXT_DIM),
                )
                .selectable(false),
            );
            if let ServerStatus::Unreachable(detail) = &self.server_status {
                status_label.on_hover_text(detail);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add(egui::Button::new(egui_phosphor::regular::GEAR).frame(false))
                    .on_hover_text("Settings")
                    .clicked()
                {
                    self.show_settings = !self.show_settings;
                }
                if ui
                    .add(egui::Button::new(egui_phosphor::regular::ARROWS_CLOCKWISE).frame(false))
                    .on_hover_text("Re-check server")
                    .clicked()
                {
                    let ctx = ui.ctx().clone();
                    self.check_server_health(&ctx);
                }
            });
        });
    }

    fn render_results_area(&mut self, ui: &mut egui::Ui) {
        if let Some(results) = self.results.clone() {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let header = ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(egui_phosphor::regular::CHECK_CIRCLE)
                                .size(18.0)
                                .color(theme::ACCENT),
                        );
                        ui.label(
                            egui::RichText::new("Recommendations")
                                .size(theme::FONT_HEADING)
                                .strong(),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(
                                egui::RichText::new(format!("received {}", results.received_at))
                                    .size(theme::FONT_CAPTION)
                                    .color(theme::TEXT_DIM),
                            );
                        });
                    });
                    // Fresh results slide into view even if the user scrolled away
                    if self.scroll_to_results {
                        self.scroll_to_results = false;
                        header.response.scroll_to_me(Some(egui::Align::Min));
                    }
                    ui.add_space(theme::SPACING_MD);

                    ui.columns(3, |cols| {
                        components::stat_card(
                            &mut cols[0],
                            egui_phosphor::regular::DROP,
                            "WATER REQUIREMENT",
                            &results.water,
                            "mm/day",
                        );
                        components::stat_card(
                            &mut cols[1],
                            egui_phosphor::regular::FLASK,
                            "FERTILIZER",
                            &results.fertilizer,
                            "kg/ha/week",
                        );
                        components::stat_card(
                            &mut cols[2],
                            egui_phosphor::regular::CHART_LINE_UP,
                            "EXPECTED YIELD",
                            &results.expected_yield,
                            "kg/ha",
                        );
                    });

                    ui.add_space(12.0);

                    theme::section_frame().show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(egui_phosphor::regular::DROP_HALF)
                                    .size(14.0)
                                    .color(theme::ACCENT),
                            );
                            ui.label(
                                egui::RichText::new("Irrigation Plan")
                                    .size(theme::FONT_LABEL)
                                    .strong(),
                            );
                        });
                        ui.add_space(2.0);
                        ui.label(
                            egui::RichText::new(&results.irrigation_recommendation)
                                .size(theme::FONT_LABEL)
                                .color(theme::TEXT_SECONDARY),
                        );
                    });

                    ui.add_space(theme::SPACING_MD);

                    theme::section_frame().show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(egui_phosphor::regular::PLANT)
                                    .size(14.0)
                                    .color(theme::ACCENT),
                            );
                            ui.label(
                                egui::RichText::new("Fertilizer Plan")
                                    .size(theme::FONT_LABEL)
                                    .strong(),
                            );
                        });
                        ui.add_space(2.0);
                        ui.label(
                            egui::RichText::new(&results.fertilizer_recommendation)
                                .size(theme::FONT_LABEL)
                                .color(theme::TEXT_SECONDARY),
                        );
                    });

                    if !results.tips.is_empty() {
                        ui.add_space(12.0);
                        section_header(ui, "YIELD OPTIMIZATION TIPS");
                        for tip in &results.tips {
                            components::tip_row(ui, tip);
                        }
                    }
                });
        } else if self.is_submitting() {
            ui.add_space(ui.available_height() * 0.35);
            ui.vertical_centered(|ui| {
                ui.spinner();
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new("Requesting recommendations...")
                        .color(theme::TEXT_MUTED),
                );
            });
        } else {
            ui.add_space(ui.available_height() * 0.3);
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(egui_phosphor::regular::PLANT)
                        .size(44.0)
                        .color(theme::TEXT_DIM),
                );
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new("No recommendations yet")
                        .size(theme::FONT_HEADING)
                        .color(theme::TEXT_MUTED),
                );
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new(
                        "Fill in the field conditions and press Get Recommendations.",
                    )
                    .size(theme::FONT_SECTION)
                    .color(theme::TEXT_DIM),
                );
            });
        }
    }
}

// ============================================================================
// DIALOGS
// ============================================================================

impl App {
    fn render_error_modal(&mut self, ctx: &egui::Context) {
        let Some(message) = self.error_message.clone() else {
            return;
        };

        // Built-in Modal with backdrop, escape-to-close, click-outside handling
        let modal_area = egui::Modal::default_area(egui::Id::new("error_modal"))
            .default_width(360.0 + theme::SPACING_XL * 2.0);
        let modal = egui::Modal::new(egui::Id::new("error_modal"))
            .area(modal_area)
            .backdrop_color(egui::Color32::from_black_alpha(180))
            .frame(theme::modal_frame());
        let modal_response = modal.show(ctx, |ui| {
            ui.set_min_width(360.0);
            ui.set_max_width(360.0);

            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(egui_phosphor::regular::WARNING)
                        .size(36.0)
                        .color(theme::STATUS_ERROR),
                );
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new("Prediction failed")
                        .size(theme::FONT_TITLE)
                        .strong(),
                );
            });

            ui.add_space(10.0);
            ui.scope(|ui| {
                ui.style_mut().spacing.item_spacing.x = 0.0;
                egui::Frame::new()
                    .fill(egui::Color32::from_rgb(0x2d, 0x0a, 0x0a))
                    .corner_radius(theme::RADIUS_DEFAULT)
                    .inner_margin(egui::Margin::same(10))
                    .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(0x7f, 0x1d, 0x1d)))
                    .show(ui, |ui| {
                        ui.set_min_width(ui.available_width());
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(&message)
                                    .color(egui::Color32::from_rgb(0xfc, 0xa5, 0xa5)),
                            )
                            .wrap(),
                        );
                    });
            });

            ui.add_space(16.0);
            ui.vertical_centered(|ui| {
                let ok_btn =
                    ui.add(theme::button_accent(format!("{}  OK", egui_phosphor::regular::CHECK)));
                if ok_btn.clicked() {
                    self.error_message = None;
                }
            });
        });
        if modal_response.should_close() {
            self.error_message = None;
        }
    }

    fn render_settings_modal(&mut self, ctx: &egui::Context) {
        if !self.show_settings {
            return;
        }

        let modal_response = egui::Modal::new(egui::Id::new("settings_modal"))
            .backdrop_color(egui::Color32::from_black_alpha(120))
            .frame(
                egui::Frame::new()
                    .fill(egui::Color32::from_rgb(0x18, 0x1b, 0x19))
                    .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(0x2a, 0x2e, 0x2b)))
                    .corner_radius(8.0)
                    .inner_margin(egui::Margin::same(20)),
            )
            .show(ctx, |ui| {
                ui.set_width(320.0);

                // Title bar with close button
                ui.horizontal(|ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new("Settings")
                                .size(theme::FONT_TITLE)
                                .strong(),
                        )
                        .selectable(false),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let close_size = 24.0;
                        let (rect, response) = ui.allocate_exact_size(
                            egui::vec2(close_size, close_size),
                            egui::Sense::click(),
                        );
                        let close_color = if response.hovered() {
                            ui.painter().rect_filled(rect, 4.0, theme::BG_SURFACE);
                            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                            theme::STATUS_ERROR
                        } else {
                            theme::TEXT_DIM
                        };
                        ui.painter().text(
                            rect.center(),
                            egui::Align2::CENTER_CENTER,
                            egui_phosphor::regular::X,
                            egui::FontId::proportional(16.0),
                            close_color,
                        );
                        if response.clicked() {
                            self.show_settings = false;
                        }
                    });
                });
                ui.add_space(4.0);
                ui.separator();
                ui.add_space(theme::SPACING_SM);

                // — Advisory Server —
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Advisory Server")
                            .size(13.0)
                            .color(theme::ACCENT),
                    )
                    .selectable(false),
                );
                ui.add_space(2.0);

                let url_committed = ui
                    .horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = 4.0;
                        let frame_padding = 16.0 + 2.0; // inner_margin (8*2) + stroke (1*2)
                        let text_width = (ui.available_width() - frame_padding).max(40.0);
                        let te = theme::input_frame()
                            .show(ui, |ui| {
                                ui.add(
                                    egui::TextEdit::singleline(&mut self.server_url)
                                        .frame(false)
                                        .desired_width(text_width)
                                        .font(egui::FontId::proportional(13.0)),
                                )
                            })
                            .inner;
                        te.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
                    })
                    .inner;

                if url_committed {
                    self.server_url = self.server_url.trim().trim_end_matches('/').to_string();
                    if self.server_url.is_empty() {
                        self.server_url = DEFAULT_SERVER_URL.to_string();
                    }
                    info!(url = %self.server_url, "Server URL changed");
                    self.save_settings();
                    let ctx = ui.ctx().clone();
                    self.check_server_health(&ctx);
                }

                ui.add_space(6.0);

                // Connection state + manual re-probe
                ui.horizontal(|ui| {
                    let (dot_color, text) = match &self.server_status {
                        ServerStatus::Checking => (theme::TEXT_DIM, "Checking...".to_string()),
                        ServerStatus::Connected { service, version } => (
                            theme::STATUS_SUCCESS,
                            format!("Connected - {} v{}", service, version),
                        ),
                        ServerStatus::Unreachable(_) => {
                            (theme::STATUS_ERROR, "Unreachable".to_string())
                        }
                    };
                    components::status_dot(ui, dot_color);
                    let label = ui.add(
                        egui::Label::new(
                            egui::RichText::new(text)
                                .size(theme::FONT_SECTION)
                                .color(theme::TEXT_MUTED),
                        )
                        .selectable(false),
                    );
                    if let ServerStatus::Unreachable(detail) = &self.server_status {
                        label.on_hover_text(detail);
                    }
                });
                ui.add_space(4.0);

                let (rect, response) =
                    ui.allocate_exact_size(egui::vec2(136.0, 26.0), egui::Sense::click());
                if response.hovered() {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                }
                let (fill, draw_rect) = theme::button_visual(&response, theme::BTN_DEFAULT, rect);
                ui.painter().rect_filled(draw_rect, 4.0, fill);
                ui.painter().text(
                    draw_rect.center(),
                    egui::Align2::CENTER_CENTER,
                    format!(
                        "{}  Test Connection",
                        egui_phosphor::regular::PLUGS_CONNECTED
                    ),
                    egui::FontId::proportional(12.0),
                    egui::Color32::WHITE,
                );
                if response.clicked() {
                    let ctx = ui.ctx().clone();
                    self.check_server_health(&ctx);
                }
            });

        if modal_response.should_close() {
            self.show_settings = false;
        }
    }
}
