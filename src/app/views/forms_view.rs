use eframe::egui;

use crate::app::forms::{LoginForm, SignupForm};
use crate::app::state::AppState;
use crate::app::theme::{colors, styles};

const LABEL_WIDTH: f32 = 90.0;
const INPUT_WIDTH: f32 = 220.0;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let mut submit_login = false;
    let mut submit_signup = false;

    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new("Anteroom")
                .size(32.0)
                .strong()
                .color(colors::TEXT_LIGHT),
        );
        ui.add_space(4.0);
        ui.label(
            egui::RichText::new("Sign in to your account or create a new one")
                .color(colors::TEXT_SECONDARY),
        );
    });
    ui.add_space(24.0);

    ui.columns(2, |columns| {
        login_panel(&mut columns[0], &mut state.login_form, state.loading, &mut submit_login);
        signup_panel(
            &mut columns[1],
            &mut state.signup_form,
            state.loading,
            &mut submit_signup,
        );
    });

    if state.loading {
        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            ui.spinner();
            ui.label(egui::RichText::new("Contacting server...").color(colors::TEXT_SECONDARY));
        });
    }

    if submit_login {
        state.submit_login();
    }
    if submit_signup {
        state.submit_signup();
    }
}

fn login_panel(ui: &mut egui::Ui, form: &mut LoginForm, loading: bool, submit: &mut bool) {
    styles::form_panel_frame().show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new("Login")
                    .size(24.0)
                    .color(colors::TEXT_LIGHT),
            );
        });
        ui.add_space(12.0);

        labeled_input(ui, "Username:", &mut form.username, false);
        labeled_input(ui, "Password:", &mut form.password, true);

        if let Some(ref validation) = form.validation {
            ui.add_space(4.0);
            ui.colored_label(colors::ERROR, validation);
        }
        ui.add_space(12.0);

        let button = egui::Button::new(egui::RichText::new("Login").color(colors::TEXT_LIGHT))
            .min_size(egui::vec2(120.0, 32.0))
            .fill(colors::ACCENT);
        if ui.add_enabled(!loading, button).clicked() {
            *submit = true;
        }
    });
}

fn signup_panel(ui: &mut egui::Ui, form: &mut SignupForm, loading: bool, submit: &mut bool) {
    styles::form_panel_frame().show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new("Sign Up")
                    .size(24.0)
                    .color(colors::TEXT_LIGHT),
            );
        });
        ui.add_space(12.0);

        labeled_input(ui, "Username:", &mut form.username, false);
        labeled_input(ui, "Email:", &mut form.email, false);
        labeled_input(ui, "Password:", &mut form.password, true);
        labeled_input(ui, "Confirm:", &mut form.confirm_password, true);

        if let Some(ref validation) = form.validation {
            ui.add_space(4.0);
            ui.colored_label(colors::ERROR, validation);
        }
        ui.add_space(12.0);

        let button = egui::Button::new(egui::RichText::new("Sign Up").color(colors::TEXT_LIGHT))
            .min_size(egui::vec2(120.0, 32.0))
            .fill(colors::ACCENT);
        if ui.add_enabled(!loading, button).clicked() {
            *submit = true;
        }
    });
}

fn labeled_input(ui: &mut egui::Ui, label: &str, value: &mut String, masked: bool) {
    ui.horizontal(|ui| {
        ui.add_sized(
            [LABEL_WIDTH, 24.0],
            egui::Label::new(egui::RichText::new(label).color(colors::TEXT_SECONDARY)),
        );
        ui.add_sized(
            [INPUT_WIDTH, 28.0],
            egui::TextEdit::singleline(value)
                .password(masked)
                .text_color(colors::TEXT_LIGHT),
        );
    });
    ui.add_space(8.0);
}
