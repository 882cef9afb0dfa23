// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Whole-form validation over declared required-field lists.

use crate::models::field::{Field, ValidationResult, validate_field};

/// The three forms the application exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormId {
    Contact,
    Login,
    Registration,
}

impl FormId {
    /// Required-field names in checking order.
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            FormId::Contact => &["name", "email", "subject", "message", "privacy"],
            FormId::Login => &["email", "password"],
            FormId::Registration => &[
                "firstName",
                "lastName",
                "email",
                "password",
                "confirmPassword",
                "agreeTerms",
            ],
        }
    }
}

/// Validation outcome for one named field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldReport {
    pub name: &'static str,
    pub result: ValidationResult,
}

/// Aggregated per-field results. Fields are checked in declaration order
/// and never short-circuited, so every invalid field carries its own
/// message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormReport {
    entries: Vec<FieldReport>,
}

impl FormReport {
    pub fn is_valid(&self) -> bool {
        self.entries.iter().all(|entry| entry.result.valid)
    }

    pub fn entries(&self) -> &[FieldReport] {
        &self.entries
    }

    /// Message for a named field, when that field failed.
    pub fn message_for(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.name == name && !entry.result.valid)
            .map(|entry| entry.result.message.as_str())
    }

    /// Names of all failing fields, in checking order.
    pub fn invalid_fields(&self) -> Vec<&'static str> {
        self.entries
            .iter()
            .filter(|entry| !entry.result.valid)
            .map(|entry| entry.name)
            .collect()
    }
}

/// Validate every declared required field of `form` that is present in
/// `fields`. A declared name with no matching field is skipped entirely,
/// so validation of an absent field is a no-op.
pub fn validate_form(form: FormId, fields: &[Field]) -> FormReport {
    let mut entries = Vec::with_capacity(form.required_fields().len());
    for name in form.required_fields() {
        if let Some(field) = fields.iter().find(|f| f.name == *name) {
            entries.push(FieldReport {
                name,
                result: validate_field(field),
            });
        }
    }
    FormReport { entries }
}
