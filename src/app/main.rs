/**
 * Native Desktop App - Main Entry Point
 *
 * Sets up logging, the window, and the theme, then runs the egui event loop.
 */
use eframe::egui;
use tracing_subscriber::EnvFilter;

use anteroom::app::{theme, views, AppState};

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Anteroom",
        options,
        Box::new(|cc| {
            theme::styles::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(AnteroomApp::default()))
        }),
    )
}

/// Main application
struct AnteroomApp {
    state: AppState,
}

impl Default for AnteroomApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
        }
    }
}

impl eframe::App for AnteroomApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll_session_result();

        views::render_top_bar(ctx, &mut self.state);

        views::render_main_panel(ctx, &mut self.state);

        // Keep polling while a request is in flight.
        if self.state.loading {
            ctx.request_repaint();
        }
    }
}
