//! Climates Dashboard.
//!
//! Rollenbasiertes Klima-Dashboard mit Hexagon-Karte, Trend-Graphen und
//! Chat-Assistent (egui + glow).

use climates_dashboard::app::state::ActivePage;
use climates_dashboard::app::use_cases::regeneration;
use climates_dashboard::{
    ui, AppController, AppIntent, AppState, Collaborators, DashboardOptions, RegenerationMode,
    RegenerationWorker, SyntheticMetrics,
};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .init();

        log::info!("Climates Dashboard v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 800.0])
                .with_title("Climates"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Climates",
            options,
            Box::new(|_cc| Ok(Box::new(DashboardApp::new()?))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct DashboardApp {
    state: AppState,
    controller: AppController,
    worker: RegenerationWorker,
    input: ui::InputState,
}

impl DashboardApp {
    fn new() -> anyhow::Result<Self> {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = DashboardOptions::config_path();
        let options = DashboardOptions::load_from_file(&config_path);

        let collaborators = Collaborators::offline(&options);
        let worker = RegenerationWorker::spawn(Box::new(SyntheticMetrics::from_seed_option(
            options.metrics_seed,
        )))?;

        Ok(Self {
            state: AppState::with_options(options),
            controller: AppController::with_collaborators(
                collaborators,
                RegenerationMode::Deferred,
            ),
            worker,
            input: ui::InputState::new(),
        })
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        // Fertige Regenerationen vor dem Zeichnen übernehmen
        let mut events = self.worker.poll();
        events.extend(self.collect_ui_events(ctx));

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);
        self.dispatch_regenerations();

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl DashboardApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        if !self.state.is_logged_in() {
            events.extend(ui::render_login_screen(ctx, &mut self.state.ui));
            return events;
        }

        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_status_bar(ctx, &self.state));
        let selected = self.state.selection.selected();
        events.extend(ui::handle_export_dialog(&mut self.state.ui, selected));

        match self.state.session.active_page {
            ActivePage::Profile => {
                events.extend(ui::render_profile_page(ctx, &self.state));
                return events;
            }
            ActivePage::Chatbot => {
                events.extend(ui::render_sidebar(ctx, &self.state));
                events.extend(ui::render_chat_panel(ctx, &mut self.state));
            }
            ActivePage::Dashboard | ActivePage::Login => {
                events.extend(ui::render_sidebar(ctx, &self.state));
                events.extend(ui::render_detail_panel(ctx, &mut self.state));
            }
        }
        events.extend(ui::render_overlays(ctx, &mut self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                events.extend(self.input.collect_viewport_events(
                    ui,
                    &response,
                    &self.state.view.camera,
                    self.state.options.camera_scroll_zoom_step,
                ));

                let scene = self.controller.build_map_scene(&self.state);
                ui::paint_map_scene(&ui.painter_at(rect), rect, &scene);
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
                self.state.ui.status_message = Some(format!("{e:#}"));
            }
        }
    }

    /// Reicht neue Regenerationsaufträge an den Worker weiter.
    fn dispatch_regenerations(&mut self) {
        for request in regeneration::take_pending(&mut self.state) {
            if let Err(e) = self.worker.submit(request) {
                log::error!("Regeneration konnte nicht gestartet werden: {:#}", e);
                regeneration::fail(&mut self.state, request.token, &e.to_string());
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if self.state.cells.is_loading() {
            ctx.request_repaint_after(std::time::Duration::from_millis(30));
        }
        if has_meaningful_events || ctx.input(|i| i.pointer.is_moving()) {
            ctx.request_repaint();
        }
    }
}
