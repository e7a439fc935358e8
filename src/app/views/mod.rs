use eframe::egui;

use crate::app::state::AppState;
use crate::app::theme::{colors, styles};
use crate::app::types::ViewState;

pub mod forms_view;
pub mod profile_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    let frame_style = egui::Frame::default()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8));

    egui::TopBottomPanel::top("top_panel")
        .frame(frame_style)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new("Anteroom").size(18.0).strong(),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(16.0);

                    if let ViewState::Authenticated(user) = state.view.clone() {
                        if ui.button("Log Out").clicked() {
                            state.logout();
                        }
                        ui.colored_label(colors::TEXT_LIGHT, format!("@{}", user.username));
                    }
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let frame = egui::Frame::default()
        .fill(colors::BG_DARK)
        .inner_margin(egui::Margin::same(0));

    egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
        // The error banner is shown above whichever view is active.
        if let Some(error) = state.error.clone() {
            render_error_banner(ui, &error);
        }

        match state.view.clone() {
            ViewState::Forms => forms_view::render(ui, state),
            ViewState::Authenticated(user) => profile_view::render(ui, state, &user),
        }
    });
}

fn render_error_banner(ui: &mut egui::Ui, error: &str) {
    styles::error_banner_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.colored_label(colors::ERROR, error);
        });
    });
}
