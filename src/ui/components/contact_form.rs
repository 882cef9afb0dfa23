// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Contact form: field state, inline validation, and payload capture.

use std::collections::BTreeMap;

use eframe::egui;

use crate::logic::submit::ContactPayload;
use crate::models::field::{Field, FieldKind, validate_field};
use crate::models::form::{FormId, validate_form};
use crate::ui::components::{Feedback, error_label, toggle_switch};

/// Subjects offered by the select field.
pub const SUBJECTS: [&str; 4] = [
    "General inquiry",
    "Project proposal",
    "Collaboration",
    "Feedback",
];

/// Contact form state. Inline errors are keyed by field name and cleared
/// while the user types in that field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactModel {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub privacy: bool,
    errors: BTreeMap<&'static str, String>,
}

impl ContactModel {
    pub fn error_for(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Capture current widget state as validator fields. The phone field
    /// is optional and therefore absent from the required list.
    fn fields(&self) -> Vec<Field> {
        vec![
            Field::text("name", FieldKind::Text, &self.name, true),
            Field::text("email", FieldKind::Email, &self.email, true),
            Field::text("subject", FieldKind::Select, &self.subject, true),
            Field::text("message", FieldKind::Text, &self.message, true),
            Field::checkbox("privacy", self.privacy, true),
            Field::text("phone", FieldKind::Tel, &self.phone, false),
        ]
    }

    fn field_named(&self, name: &str) -> Option<Field> {
        self.fields().into_iter().find(|field| field.name == name)
    }

    fn payload(&self) -> ContactPayload {
        let phone = self.phone.trim();
        ContactPayload {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.clone(),
            message: self.message.trim().to_string(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
        }
    }
}

/// Messages produced by the contact view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactMsg {
    NameChanged(String),
    EmailChanged(String),
    PhoneChanged(String),
    SubjectPicked(String),
    MessageChanged(String),
    PrivacyToggled(bool),
    FieldBlurred(&'static str),
    SubmitRequested,
}

/// Side effects raised by the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactCommand {
    Submit(ContactPayload),
}

/// Apply a message to the contact model.
pub fn update(
    model: &mut ContactModel,
    msg: ContactMsg,
    cmds: &mut Vec<ContactCommand>,
) -> Option<Feedback> {
    match msg {
        ContactMsg::NameChanged(value) => {
            model.name = value;
            model.errors.remove("name");
            None
        }
        ContactMsg::EmailChanged(value) => {
            model.email = value;
            model.errors.remove("email");
            None
        }
        ContactMsg::PhoneChanged(value) => {
            model.phone = value;
            model.errors.remove("phone");
            None
        }
        ContactMsg::SubjectPicked(value) => {
            model.subject = value;
            model.errors.remove("subject");
            None
        }
        ContactMsg::MessageChanged(value) => {
            model.message = value;
            model.errors.remove("message");
            None
        }
        ContactMsg::PrivacyToggled(value) => {
            model.privacy = value;
            model.errors.remove("privacy");
            None
        }
        ContactMsg::FieldBlurred(name) => {
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
        ContactMsg::SubmitRequested => {
            let report = validate_form(FormId::Contact, &model.fields());
            for entry in report.entries() {
                if entry.result.valid {
                    model.errors.remove(entry.name);
                } else {
                    model.errors.insert(entry.name, entry.result.message.clone());
                }
            }

            if report.is_valid() {
                cmds.push(ContactCommand::Submit(model.payload()));
                None
            } else {
                Some(Feedback::error("Please correct the errors in the form."))
            }
        }
    }
}

/// Render the form and return triggered messages.
pub fn view(ui: &mut egui::Ui, model: &ContactModel) -> Vec<ContactMsg> {
    let mut msgs = Vec::new();

    ui.heading("Get in touch");
    ui.add_space(8.0);

    text_row(ui, model, "Name", "name", &model.name, &mut msgs, |v| {
        ContactMsg::NameChanged(v)
    });
    text_row(ui, model, "Email", "email", &model.email, &mut msgs, |v| {
        ContactMsg::EmailChanged(v)
    });
    text_row(
        ui,
        model,
        "Phone (optional)",
        "phone",
        &model.phone,
        &mut msgs,
        |v| ContactMsg::PhoneChanged(v),
    );

    ui.label("Subject");
    let selected = if model.subject.is_empty() {
        "Choose a subject"
    } else {
        model.subject.as_str()
    };
    egui::ComboBox::from_id_salt("contact_subject")
        .selected_text(selected)
        .show_ui(ui, |ui| {
            for subject in SUBJECTS {
                if ui
                    .selectable_label(model.subject == subject, subject)
                    .clicked()
                {
                    msgs.push(ContactMsg::SubjectPicked(subject.to_string()));
                }
            }
        });
    if let Some(error) = model.error_for("subject") {
        error_label(ui, error);
    }
    ui.add_space(6.0);

    ui.label("Message");
    let mut message = model.message.clone();
    let response = ui.add(
        egui::TextEdit::multiline(&mut message)
            .desired_rows(5)
            .hint_text("What would you like to talk about?"),
    );
    if response.changed() {
        msgs.push(ContactMsg::MessageChanged(message));
    }
    if response.lost_focus() {
        msgs.push(ContactMsg::FieldBlurred("message"));
    }
    if let Some(error) = model.error_for("message") {
        error_label(ui, error);
    }
    ui.add_space(6.0);

    ui.horizontal(|ui| {
        let mut privacy = model.privacy;
        if toggle_switch(ui, &mut privacy).changed() {
            msgs.push(ContactMsg::PrivacyToggled(privacy));
        }
        ui.label("I agree to the privacy policy");
    });
    if let Some(error) = model.error_for("privacy") {
        error_label(ui, error);
    }
    ui.add_space(10.0);

    if ui
        .button(format!(
            "{} Send message",
            egui_phosphor::regular::PAPER_PLANE_TILT
        ))
        .clicked()
    {
        msgs.push(ContactMsg::SubmitRequested);
    }

    msgs
}

fn text_row(
    ui: &mut egui::Ui,
    model: &ContactModel,
    label: &str,
    name: &'static str,
    value: &str,
    msgs: &mut Vec<ContactMsg>,
    make_msg: impl Fn(String) -> ContactMsg,
) {
    ui.label(label);
    let mut buffer = value.to_string();
    let response = ui.add(egui::TextEdit::singleline(&mut buffer));
    if response.changed() {
        msgs.push(make_msg(buffer));
    }
    if response.lost_focus() {
        msgs.push(ContactMsg::FieldBlurred(name));
    }
    if let Some(error) = model.error_for(name) {
        error_label(ui, error);
    }
    ui.add_space(6.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::field::{MSG_INVALID_EMAIL, MSG_INVALID_PHONE, MSG_REQUIRED};

    fn filled_model() -> ContactModel {
        ContactModel {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            phone: String::new(),
            subject: "General inquiry".into(),
            message: "Hello!".into(),
            privacy: true,
            ..Default::default()
        }
    }

    #[test]
    fn valid_submit_captures_payload() {
        let mut model = filled_model();
        let mut cmds = Vec::new();

        let feedback = update(&mut model, ContactMsg::SubmitRequested, &mut cmds);

        assert!(feedback.is_none());
        match cmds.as_slice() {
            [ContactCommand::Submit(payload)] => {
                assert_eq!(payload.name, "Ada Lovelace");
                assert_eq!(payload.phone, None);
            }
            other => panic!("unexpected commands: {other:?}"),
        }
    }

    #[test]
    fn submit_reports_every_missing_required_field() {
        let mut model = ContactModel::default();
        let mut cmds = Vec::new();

        let feedback = update(&mut model, ContactMsg::SubmitRequested, &mut cmds);

        assert!(cmds.is_empty());
        assert!(feedback.unwrap().is_error);
        for name in ["name", "email", "subject", "message", "privacy"] {
            assert_eq!(model.error_for(name), Some(MSG_REQUIRED), "{name}");
        }
    }

    #[test]
    fn blur_validates_single_field() {
        let mut model = ContactModel {
            email: "not-an-email".into(),
            ..Default::default()
        };

        update(&mut model, ContactMsg::FieldBlurred("email"), &mut Vec::new());

        assert_eq!(model.error_for("email"), Some(MSG_INVALID_EMAIL));
        assert_eq!(model.error_for("name"), None, "other fields untouched");
    }

    #[test]
    fn typing_clears_the_inline_error() {
        let mut model = ContactModel::default();
        update(&mut model, ContactMsg::FieldBlurred("name"), &mut Vec::new());
        assert_eq!(model.error_for("name"), Some(MSG_REQUIRED));

        update(
            &mut model,
            ContactMsg::NameChanged("A".into()),
            &mut Vec::new(),
        );

        assert_eq!(model.error_for("name"), None);
    }

    // The phone field is optional: it gets a blur error when malformed but
    // never blocks submission, which checks the required list only.
    #[test]
    fn malformed_phone_does_not_block_submission() {
        let mut model = filled_model();
        model.phone = "abc".into();
        update(&mut model, ContactMsg::FieldBlurred("phone"), &mut Vec::new());
        assert_eq!(model.error_for("phone"), Some(MSG_INVALID_PHONE));

        let mut cmds = Vec::new();
        let feedback = update(&mut model, ContactMsg::SubmitRequested, &mut cmds);

        assert!(feedback.is_none());
        assert_eq!(cmds.len(), 1);
    }

    #[test]
    fn filled_phone_is_part_of_the_payload() {
        let mut model = filled_model();
        model.phone = "+1 (555) 123-4567".into();
        let mut cmds = Vec::new();

        update(&mut model, ContactMsg::SubmitRequested, &mut cmds);

        match cmds.as_slice() {
            [ContactCommand::Submit(payload)] => {
                assert_eq!(payload.phone.as_deref(), Some("+1 (555) 123-4567"));
            }
            other => panic!("unexpected commands: {other:?}"),
        }
    }

    #[test]
    fn reset_clears_values_and_errors() {
        let mut model = filled_model();
        update(&mut model, ContactMsg::SubmitRequested, &mut Vec::new());
        model.reset();

        assert_eq!(model, ContactModel::default());
    }
}
