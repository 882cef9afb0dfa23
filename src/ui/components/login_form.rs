// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Login form with inline validation and a password visibility toggle.

use std::collections::BTreeMap;

use eframe::egui;

use crate::logic::submit::LoginPayload;
use crate::models::field::{Field, FieldKind, validate_field};
use crate::models::form::{FormId, validate_form};
use crate::ui::components::{Feedback, error_label};

/// Login form state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginModel {
    pub email: String,
    pub password: String,
    show_password: bool,
    errors: BTreeMap<&'static str, String>,
}

impl LoginModel {
    pub fn error_for(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn fields(&self) -> Vec<Field> {
        vec![
            Field::text("email", FieldKind::Email, &self.email, true),
            Field::text("password", FieldKind::Password, &self.password, true),
        ]
    }

    fn field_named(&self, name: &str) -> Option<Field> {
        self.fields().into_iter().find(|field| field.name == name)
    }

    fn payload(&self) -> LoginPayload {
        LoginPayload {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }
}

/// Messages produced by the login view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginMsg {
    EmailChanged(String),
    PasswordChanged(String),
    ShowPasswordToggled,
    FieldBlurred(&'static str),
    SubmitRequested,
}

/// Side effects raised by the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginCommand {
    Submit(LoginPayload),
}

/// Apply a message to the login model.
pub fn update(
    model: &mut LoginModel,
    msg: LoginMsg,
    cmds: &mut Vec<LoginCommand>,
) -> Option<Feedback> {
    match msg {
        LoginMsg::EmailChanged(value) => {
            model.email = value;
            model.errors.remove("email");
            None
        }
        LoginMsg::PasswordChanged(value) => {
            model.password = value;
            model.errors.remove("password");
            None
        }
        LoginMsg::ShowPasswordToggled => {
            model.show_password = !model.show_password;
            None
        }
        LoginMsg::FieldBlurred(name) => {
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
        LoginMsg::SubmitRequested => {
            let report = validate_form(FormId::Login, &model.fields());
            for entry in report.entries() {
                if entry.result.valid {
                    model.errors.remove(entry.name);
                } else {
                    model.errors.insert(entry.name, entry.result.message.clone());
                }
            }

            if report.is_valid() {
                cmds.push(LoginCommand::Submit(model.payload()));
                None
            } else {
                Some(Feedback::error("Please fill in all required fields."))
            }
        }
    }
}

/// Render the form and return triggered messages.
pub fn view(ui: &mut egui::Ui, model: &LoginModel) -> Vec<LoginMsg> {
    let mut msgs = Vec::new();

    ui.heading("Welcome back");
    ui.add_space(8.0);

    ui.label("Email");
    let mut email = model.email.clone();
    let response = ui.add(egui::TextEdit::singleline(&mut email).hint_text("name@example.com"));
    if response.changed() {
        msgs.push(LoginMsg::EmailChanged(email));
    }
    if response.lost_focus() {
        msgs.push(LoginMsg::FieldBlurred("email"));
    }
    if let Some(error) = model.error_for("email") {
        error_label(ui, error);
    }
    ui.add_space(6.0);

    ui.label("Password");
    ui.horizontal(|ui| {
        let mut password = model.password.clone();
        let response = ui.add(
            egui::TextEdit::singleline(&mut password).password(!model.show_password),
        );
        if response.changed() {
            msgs.push(LoginMsg::PasswordChanged(password));
        }
        if response.lost_focus() {
            msgs.push(LoginMsg::FieldBlurred("password"));
        }

        let eye = if model.show_password {
            egui_phosphor::regular::EYE_SLASH
        } else {
            egui_phosphor::regular::EYE
        };
        if ui.button(eye).on_hover_text("Show/hide password").clicked() {
            msgs.push(LoginMsg::ShowPasswordToggled);
        }
    });
    if let Some(error) = model.error_for("password") {
        error_label(ui, error);
    }
    ui.add_space(10.0);

    if ui
        .button(format!("{} Log in", egui_phosphor::regular::SIGN_IN))
        .clicked()
    {
        msgs.push(LoginMsg::SubmitRequested);
    }

    msgs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::field::{MSG_INVALID_EMAIL, MSG_REQUIRED, MSG_WEAK_PASSWORD};

    #[test]
    fn empty_form_reports_both_fields() {
        let mut model = LoginModel::default();
        let mut cmds = Vec::new();

        let feedback = update(&mut model, LoginMsg::SubmitRequested, &mut cmds);

        assert!(cmds.is_empty());
        assert!(feedback.unwrap().is_error);
        assert_eq!(model.error_for("email"), Some(MSG_REQUIRED));
        assert_eq!(model.error_for("password"), Some(MSG_REQUIRED));
    }

    #[test]
    fn invalid_email_reported_inline() {
        let mut model = LoginModel {
            email: "nope".into(),
            password: "Abcdef12".into(),
            ..Default::default()
        };
        let mut cmds = Vec::new();

        update(&mut model, LoginMsg::SubmitRequested, &mut cmds);

        assert!(cmds.is_empty());
        assert_eq!(model.error_for("email"), Some(MSG_INVALID_EMAIL));
        assert_eq!(model.error_for("password"), None);
    }

    // The login password field is named `password`, so the strength floor
    // applies to it as well.
    #[test]
    fn weak_password_blocks_login() {
        let mut model = LoginModel {
            email: "ada@example.com".into(),
            password: "abc".into(),
            ..Default::default()
        };
        let mut cmds = Vec::new();

        update(&mut model, LoginMsg::SubmitRequested, &mut cmds);

        assert!(cmds.is_empty());
        assert_eq!(model.error_for("password"), Some(MSG_WEAK_PASSWORD));
    }

    #[test]
    fn valid_credentials_submit() {
        let mut model = LoginModel {
            email: "ada@example.com".into(),
            password: "Abcdef12".into(),
            ..Default::default()
        };
        let mut cmds = Vec::new();

        let feedback = update(&mut model, LoginMsg::SubmitRequested, &mut cmds);

        assert!(feedback.is_none());
        match cmds.as_slice() {
            [LoginCommand::Submit(payload)] => {
                assert_eq!(payload.email, "ada@example.com");
                assert_eq!(payload.password, "Abcdef12");
            }
            other => panic!("unexpected commands: {other:?}"),
        }
    }
}
