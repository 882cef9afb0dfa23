// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Single-field validation: pure functions from captured field data to a
//! result, free of any UI dependency so the rules are unit-testable.

use crate::models::password::password_strength;

/// Message shown for an empty required field or unchecked required box.
pub const MSG_REQUIRED: &str = "This field is required.";
/// Message shown for a structurally invalid email address.
pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email address.";
/// Message shown when the password does not meet the strength floor.
pub const MSG_WEAK_PASSWORD: &str = "Password is weak. It must be at least 8 characters and include uppercase and lowercase letters and digits.";
/// Message shown for an invalid phone number.
pub const MSG_INVALID_PHONE: &str = "Please enter a valid phone number.";
/// Message shown when the confirmation does not match the password.
pub const MSG_PASSWORD_MISMATCH: &str = "Passwords do not match.";

/// Input kinds a form field can declare. Kind selects which rule applies
/// beyond the required check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
    Tel,
    Checkbox,
    Select,
}

/// Current value of a field: free text, or the checked state of a box.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

impl FieldValue {
    /// Empty after trimming, or an unchecked box.
    fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::Checked(checked) => !checked,
        }
    }
}

/// A form input captured for the duration of one validation call.
/// Owned by the form; rebuilt from current widget state per call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,
    pub value: FieldValue,
    pub required: bool,
}

impl Field {
    /// Text-valued field of the given kind.
    pub fn text(name: &str, kind: FieldKind, value: &str, required: bool) -> Self {
        Self {
            name: name.to_string(),
            kind,
            value: FieldValue::Text(value.to_string()),
            required,
        }
    }

    /// Checkbox field.
    pub fn checkbox(name: &str, checked: bool, required: bool) -> Self {
        Self {
            name: name.to_string(),
            kind: FieldKind::Checkbox,
            value: FieldValue::Checked(checked),
            required,
        }
    }
}

/// Outcome of validating a single field. The message is empty when valid;
/// rendering it (inline text, error styling) is the view's job.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: String,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    pub fn fail(message: &str) -> Self {
        Self {
            valid: false,
            message: message.to_string(),
        }
    }
}

/// Validate one field against its declared constraints.
///
/// Rule order: required check first, then the kind-specific rule when the
/// trimmed value is non-empty. The strength rule applies only to the field
/// literally named `password`, never to a confirmation field. A field with
/// no applicable rule and a satisfied required check is valid.
pub fn validate_field(field: &Field) -> ValidationResult {
    if field.required && field.value.is_blank() {
        return ValidationResult::fail(MSG_REQUIRED);
    }

    let value = match &field.value {
        FieldValue::Text(text) => text.trim(),
        // Checkboxes carry no text to run kind rules against.
        FieldValue::Checked(_) => return ValidationResult::ok(),
    };
    if value.is_empty() {
        return ValidationResult::ok();
    }

    match field.kind {
        FieldKind::Email if !is_valid_email(value) => ValidationResult::fail(MSG_INVALID_EMAIL),
        FieldKind::Password if field.name == "password" => {
            if password_strength(value).is_acceptable() {
                ValidationResult::ok()
            } else {
                ValidationResult::fail(MSG_WEAK_PASSWORD)
            }
        }
        FieldKind::Tel if !is_valid_phone(value) => ValidationResult::fail(MSG_INVALID_PHONE),
        _ => ValidationResult::ok(),
    }
}

/// Password-match check for registration: an empty confirmation passes
/// (nothing typed yet); otherwise the strings must be identical,
/// case-sensitive and without normalization.
pub fn passwords_match(password: &str, confirmation: &str) -> bool {
    confirmation.is_empty() || password == confirmation
}

/// Minimal structural email check: one `@` with non-blank text on both
/// sides, and a dot strictly inside the domain part. Deliberately not RFC
/// validation.
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Loose phone sanity check: optional leading `+`, then at least ten
/// characters drawn from digits, whitespace, `-`, `(`, `)`. Digit count is
/// intentionally not enforced beyond that.
fn is_valid_phone(value: &str) -> bool {
    let rest = value.strip_prefix('+').unwrap_or(value);
    rest.chars().count() >= 10
        && rest
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '-' | '(' | ')'))
}
