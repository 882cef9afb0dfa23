// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Registration form with a live password strength meter and a
//! per-keystroke confirmation match check.

use std::collections::BTreeMap;

use eframe::egui;

use crate::logic::submit::RegistrationPayload;
use crate::models::field::{
    Field, FieldKind, MSG_PASSWORD_MISMATCH, passwords_match, validate_field,
};
use crate::models::form::{FormId, validate_form};
use crate::models::password::{PasswordStrength, StrengthLevel, password_strength};
use crate::ui::components::{Feedback, error_label, toggle_switch};

/// Registration form state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterModel {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub agree_terms: bool,
    show_password: bool,
    strength: Option<PasswordStrength>,
    errors: BTreeMap<&'static str, String>,
}

impl RegisterModel {
    pub fn error_for(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    /// Strength of the current password, `None` while it is empty.
    pub fn strength(&self) -> Option<&PasswordStrength> {
        self.strength.as_ref()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn fields(&self) -> Vec<Field> {
        vec![
            Field::text("firstName", FieldKind::Text, &self.first_name, true),
            Field::text("lastName", FieldKind::Text, &self.last_name, true),
            Field::text("email", FieldKind::Email, &self.email, true),
            Field::text("password", FieldKind::Password, &self.password, true),
            Field::text(
                "confirmPassword",
                FieldKind::Password,
                &self.confirm_password,
                true,
            ),
            Field::checkbox("agreeTerms", self.agree_terms, true),
        ]
    }

    fn field_named(&self, name: &str) -> Option<Field> {
        self.fields().into_iter().find(|field| field.name == name)
    }

    fn payload(&self) -> RegistrationPayload {
        RegistrationPayload {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }
}

/// Messages produced by the registration view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegisterMsg {
    FirstNameChanged(String),
    LastNameChanged(String),
    EmailChanged(String),
    PasswordChanged(String),
    ConfirmPasswordChanged(String),
    AgreeTermsToggled(bool),
    ShowPasswordToggled,
    FieldBlurred(&'static str),
    SubmitRequested,
}

/// Side effects raised by the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegisterCommand {
    Submit(RegistrationPayload),
}

/// Apply a message to the registration model.
pub fn update(
    model: &mut RegisterModel,
    msg: RegisterMsg,
    cmds: &mut Vec<RegisterCommand>,
) -> Option<Feedback> {
    match msg {
        RegisterMsg::FirstNameChanged(value) => {
            model.first_name = value;
            model.errors.remove("firstName");
            None
        }
        RegisterMsg::LastNameChanged(value) => {
            model.last_name = value;
            model.errors.remove("lastName");
            None
        }
        RegisterMsg::EmailChanged(value) => {
            model.email = value;
            model.errors.remove("email");
            None
        }
        RegisterMsg::PasswordChanged(value) => {
            model.password = value;
            model.errors.remove("password");
            // The meter tracks every keystroke.
            model.strength = (!model.password.is_empty())
                .then(|| password_strength(&model.password));
            None
        }
        RegisterMsg::ConfirmPasswordChanged(value) => {
            model.confirm_password = value;
            model.errors.remove("confirmPassword");
            if !passwords_match(&model.password, &model.confirm_password) {
                model
                    .errors
                    .insert("confirmPassword", MSG_PASSWORD_MISMATCH.to_string());
            }
            None
        }
        RegisterMsg::AgreeTermsToggled(value) => {
            model.agree_terms = value;
            model.errors.remove("agreeTerms");
            None
        }
        RegisterMsg::ShowPasswordToggled => {
            model.show_password = !model.show_password;
            None
        }
        RegisterMsg::FieldBlurred(name) => {
            if let Some(field) = model.field_named(name) {
                let result = validate_field(&field);
                if result.valid {
                    model.errors.remove(name);
                } else {
                    model.errors.insert(name, result.message);
                }
            }
            None
        }
        RegisterMsg::SubmitRequested => {
            let report = validate_form(FormId::Registration, &model.fields());
            for entry in report.entries() {
                if entry.result.valid {
                    model.errors.remove(entry.name);
                } else {
                    model.errors.insert(entry.name, entry.result.message.clone());
                }
            }

            let matches = passwords_match(&model.password, &model.confirm_password);
            if !matches {
                model
                    .errors
                    .insert("confirmPassword", MSG_PASSWORD_MISMATCH.to_string());
            }

            if report.is_valid() && matches {
                cmds.push(RegisterCommand::Submit(model.payload()));
                None
            } else {
                Some(Feedback::error("Please correct the errors in the form."))
            }
        }
    }
}

/// Render the form and return triggered messages.
pub fn view(ui: &mut egui::Ui, model: &RegisterModel) -> Vec<RegisterMsg> {
    let mut msgs = Vec::new();

    ui.heading("Create an account");
    ui.add_space(8.0);

    text_row(
        ui,
        model,
        "First name",
        "firstName",
        &model.first_name,
        &mut msgs,
        RegisterMsg::FirstNameChanged,
    );
    text_row(
        ui,
        model,
        "Last name",
        "lastName",
        &model.last_name,
        &mut msgs,
        RegisterMsg::LastNameChanged,
    );
    text_row(
        ui,
        model,
        "Email",
        "email",
        &model.email,
        &mut msgs,
        RegisterMsg::EmailChanged,
    );

    ui.label("Password");
    ui.horizontal(|ui| {
        let mut password = model.password.clone();
        let response = ui.add(
            egui::TextEdit::singleline(&mut password).password(!model.show_password),
        );
        if response.changed() {
            msgs.push(RegisterMsg::PasswordChanged(password));
        }
        if response.lost_focus() {
            msgs.push(RegisterMsg::FieldBlurred("password"));
        }

        let eye = if model.show_password {
            egui_phosphor::regular::EYE_SLASH
        } else {
            egui_phosphor::regular::EYE
        };
        if ui.button(eye).on_hover_text("Show/hide password").clicked() {
            msgs.push(RegisterMsg::ShowPasswordToggled);
        }
    });
    if let Some(strength) = model.strength() {
        strength_meter(ui, strength);
    }
    if let Some(error) = model.error_for("password") {
        error_label(ui, error);
    }
    ui.add_space(6.0);

    ui.label("Confirm password");
    let mut confirm = model.confirm_password.clone();
    let response = ui.add(egui::TextEdit::singleline(&mut confirm).password(!model.show_password));
    if response.changed() {
        msgs.push(RegisterMsg::ConfirmPasswordChanged(confirm));
    }
    if response.lost_focus() {
        msgs.push(RegisterMsg::FieldBlurred("confirmPassword"));
    }
    if let Some(error) = model.error_for("confirmPassword") {
        error_label(ui, error);
    }
    ui.add_space(6.0);

    ui.horizontal(|ui| {
        let mut agree = model.agree_terms;
        if toggle_switch(ui, &mut agree).changed() {
            msgs.push(RegisterMsg::AgreeTermsToggled(agree));
        }
        ui.label("I agree to the terms of service");
    });
    if let Some(error) = model.error_for("agreeTerms") {
        error_label(ui, error);
    }
    ui.add_space(10.0);

    if ui
        .button(format!(
            "{} Create account",
            egui_phosphor::regular::USER_PLUS
        ))
        .clicked()
    {
        msgs.push(RegisterMsg::SubmitRequested);
    }

    msgs
}

fn text_row(
    ui: &mut egui::Ui,
    model: &RegisterModel,
    label: &str,
    name: &'static str,
    value: &str,
    msgs: &mut Vec<RegisterMsg>,
    make_msg: fn(String) -> RegisterMsg,
) {
    ui.label(label);
    let mut buffer = value.to_string();
    let response = ui.add(egui::TextEdit::singleline(&mut buffer));
    if response.changed() {
        msgs.push(make_msg(buffer));
    }
    if response.lost_focus() {
        msgs.push(RegisterMsg::FieldBlurred(name));
    }
    if let Some(error) = model.error_for(name) {
        error_label(ui, error);
    }
    ui.add_space(6.0);
}

/// Horizontal bar filled a quarter per satisfied rule, with the level
/// label and hints for whatever is still missing.
fn strength_meter(ui: &mut egui::Ui, strength: &PasswordStrength) {
    let width = ui.available_width().min(260.0);
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 6.0), egui::Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, 3.0, ui.visuals().extreme_bg_color);
    let fill_width = rect.width() * strength.meter_fraction();
    if fill_width > 0.0 {
        let fill_rect =
            egui::Rect::from_min_size(rect.min, egui::vec2(fill_width, rect.height()));
        painter.rect_filled(fill_rect, 3.0, level_color(strength.level));
    }

    let mut caption = format!("Password strength: {}", strength.level.label());
    if !strength.missing.is_empty() {
        caption.push_str(&format!(" (missing: {})", strength.missing.join(", ")));
    }
    ui.label(
        egui::RichText::new(caption)
            .small()
            .color(level_color(strength.level)),
    );
}

fn level_color(level: StrengthLevel) -> egui::Color32 {
    match level {
        StrengthLevel::VeryWeak => egui::Color32::from_rgb(220, 38, 38),
        StrengthLevel::Weak => egui::Color32::from_rgb(249, 115, 22),
        StrengthLevel::Medium => egui::Color32::from_rgb(234, 179, 8),
        StrengthLevel::Strong => egui::Color32::from_rgb(132, 204, 22),
        StrengthLevel::VeryStrong => egui::Color32::from_rgb(16, 185, 129),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::field::{MSG_REQUIRED, MSG_WEAK_PASSWORD};

    fn filled_model() -> RegisterModel {
        let mut model = RegisterModel {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            agree_terms: true,
            ..Default::default()
        };
        let mut cmds = Vec::new();
        update(
            &mut model,
            RegisterMsg::PasswordChanged("Abcdef12".into()),
            &mut cmds,
        );
        update(
            &mut model,
            RegisterMsg::ConfirmPasswordChanged("Abcdef12".into()),
            &mut cmds,
        );
        model
    }

    #[test]
    fn complete_registration_submits() {
        let mut model = filled_model();
        let mut cmds = Vec::new();

        let feedback = update(&mut model, RegisterMsg::SubmitRequested, &mut cmds);

        assert!(feedback.is_none());
        match cmds.as_slice() {
            [RegisterCommand::Submit(payload)] => {
                assert_eq!(payload.first_name, "Ada");
                assert_eq!(payload.email, "ada@example.com");
            }
            other => panic!("unexpected commands: {other:?}"),
        }
    }

    #[test]
    fn missing_first_name_blocks_with_one_message() {
        let mut model = filled_model();
        model.first_name.clear();
        let mut cmds = Vec::new();

        let feedback = update(&mut model, RegisterMsg::SubmitRequested, &mut cmds);

        assert!(cmds.is_empty());
        assert!(feedback.unwrap().is_error);
        assert_eq!(model.error_for("firstName"), Some(MSG_REQUIRED));
        assert_eq!(model.error_for("lastName"), None);
        assert_eq!(model.error_for("confirmPassword"), None);
    }

    #[test]
    fn strength_meter_follows_password_keystrokes() {
        let mut model = RegisterModel::default();
        let mut cmds = Vec::new();

        assert!(model.strength().is_none());

        update(
            &mut model,
            RegisterMsg::PasswordChanged("abc".into()),
            &mut cmds,
        );
        assert_eq!(model.strength().unwrap().score, 1);

        update(
            &mut model,
            RegisterMsg::PasswordChanged("Abcdef12".into()),
            &mut cmds,
        );
        assert_eq!(model.strength().unwrap().score, 4);

        update(&mut model, RegisterMsg::PasswordChanged(String::new()), &mut cmds);
        assert!(model.strength().is_none());
    }

    #[test]
    fn confirmation_mismatch_appears_per_keystroke() {
        let mut model = RegisterModel::default();
        let mut cmds = Vec::new();
        update(
            &mut model,
            RegisterMsg::PasswordChanged("Abcdef12".into()),
            &mut cmds,
        );

        update(
            &mut model,
            RegisterMsg::ConfirmPasswordChanged("Abcdef13".into()),
            &mut cmds,
        );
        assert_eq!(
            model.error_for("confirmPassword"),
            Some(MSG_PASSWORD_MISMATCH)
        );

        update(
            &mut model,
            RegisterMsg::ConfirmPasswordChanged("Abcdef12".into()),
            &mut cmds,
        );
        assert_eq!(model.error_for("confirmPassword"), None);
    }

    // An emptied confirmation is not compared yet, so the mismatch error
    // must disappear.
    #[test]
    fn empty_confirmation_is_not_compared() {
        let mut model = RegisterModel::default();
        let mut cmds = Vec::new();
        update(
            &mut model,
            RegisterMsg::PasswordChanged("Abcdef12".into()),
            &mut cmds,
        );
        update(
            &mut model,
            RegisterMsg::ConfirmPasswordChanged("x".into()),
            &mut cmds,
        );
        assert!(model.error_for("confirmPassword").is_some());

        update(
            &mut model,
            RegisterMsg::ConfirmPasswordChanged(String::new()),
            &mut cmds,
        );

        assert_eq!(model.error_for("confirmPassword"), None);
    }

    #[test]
    fn mismatched_passwords_block_submission() {
        let mut model = filled_model();
        let mut cmds = Vec::new();
        update(
            &mut model,
            RegisterMsg::ConfirmPasswordChanged("Abcdef13".into()),
            &mut cmds,
        );

        let feedback = update(&mut model, RegisterMsg::SubmitRequested, &mut cmds);

        assert!(cmds.is_empty());
        assert!(feedback.unwrap().is_error);
        assert_eq!(
            model.error_for("confirmPassword"),
            Some(MSG_PASSWORD_MISMATCH)
        );
    }

    #[test]
    fn weak_password_blocks_submission() {
        let mut model = filled_model();
        let mut cmds = Vec::new();
        update(
            &mut model,
            RegisterMsg::PasswordChanged("abc".into()),
            &mut cmds,
        );
        update(
            &mut model,
            RegisterMsg::ConfirmPasswordChanged("abc".into()),
            &mut cmds,
        );

        update(&mut model, RegisterMsg::SubmitRequested, &mut cmds);

        assert!(cmds.is_empty());
        assert_eq!(model.error_for("password"), Some(MSG_WEAK_PASSWORD));
    }
}
