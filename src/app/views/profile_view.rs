use eframe::egui;

use crate::app::state::AppState;
use crate::app::theme::colors;
use crate::app::types::User;

pub fn render(ui: &mut egui::Ui, state: &mut AppState, user: &User) {
    ui.vertical_centered(|ui| {
        ui.add_space(80.0);

        ui.colored_label(
            colors::TEXT_LIGHT,
            egui::RichText::new(welcome_line(user)).size(32.0).strong(),
        );
        ui.add_space(10.0);
        ui.colored_label(
            colors::TEXT_SECONDARY,
            egui::RichText::new(email_line(user)).size(18.0),
        );
        ui.add_space(40.0);

        let logout_btn = egui::Button::new(egui::RichText::new("Log Out").size(18.0))
            .min_size(egui::vec2(160.0, 44.0))
            .fill(colors::BUTTON_PRIMARY);

        if ui.add(logout_btn).clicked() {
            state.logout();
        }
    });
}

/// Greeting line shown on the profile panel
pub fn welcome_line(user: &User) -> String {
    format!("Welcome, {}", user.username)
}

/// Email line shown on the profile panel
pub fn email_line(user: &User) -> String {
    format!("Your email is {}", user.email)
}
