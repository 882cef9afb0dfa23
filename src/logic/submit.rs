// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Submission outcomes supplied by a pluggable backend.
//!
//! Forms never talk to a service directly: a validated form is captured
//! into a payload and handed to a [`SubmitBackend`], whose result drives
//! the toast and navigation that follow. The backend shipped here is a
//! placeholder that acknowledges everything; a real service client would
//! implement the same trait.

use anyhow::Result;
use serde::Serialize;

/// Data captured from a valid contact form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Optional, only validated when present.
    pub phone: Option<String>,
}

/// Credentials captured from a valid login form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginPayload {
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

/// Data captured from a valid registration form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegistrationPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

/// Supplies the outcome of each submission. The Ok string is the
/// acknowledgment shown to the user.
pub trait SubmitBackend: Send + Sync {
    fn contact(&self, payload: &ContactPayload) -> Result<String>;
    fn login(&self, payload: &LoginPayload) -> Result<String>;
    fn register(&self, payload: &RegistrationPayload) -> Result<String>;
}

/// Placeholder backend: records the payload in the log and acknowledges.
pub struct LocalBackend;

impl SubmitBackend for LocalBackend {
    fn contact(&self, payload: &ContactPayload) -> Result<String> {
        log::info!("contact submission: {}", serde_json::to_string(payload)?);
        Ok("Your message has been sent! I will reply as soon as possible.".to_string())
    }

    fn login(&self, payload: &LoginPayload) -> Result<String> {
        log::info!("login for {}", payload.email);
        Ok("Logged in successfully!".to_string())
    }

    fn register(&self, payload: &RegistrationPayload) -> Result<String> {
        log::info!(
            "registration submission: {}",
            serde_json::to_string(payload)?
        );
        Ok("Your account has been created! Please activate it via the confirmation email.".to_string())
    }
}
