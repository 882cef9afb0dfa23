// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Reusable egui components structured for MVU-style updates.

pub mod contact_form;
pub mod countdown;
pub mod gallery;
pub mod login_form;
pub mod nav;
pub mod notifications;
pub mod register_form;
pub mod toggle;

pub use toggle::toggle_switch;

use eframe::egui;

/// User-facing feedback surfaced by a component update to the status bar
/// and toast layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub message: String,
    pub is_error: bool,
}

impl Feedback {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
        }
    }
}

/// Inline error line rendered under an invalid field.
pub(crate) fn error_label(ui: &mut egui::Ui, message: &str) {
    ui.label(
        egui::RichText::new(message)
            .small()
            .color(egui::Color32::from_rgb(220, 38, 38)),
    );
}
