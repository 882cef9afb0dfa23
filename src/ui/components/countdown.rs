// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Launch countdown display for the home page.

use eframe::egui;
use time::OffsetDateTime;

use crate::logic::countdown::Countdown;

/// Countdown state fixed at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountdownModel {
    countdown: Countdown,
}

impl Default for CountdownModel {
    fn default() -> Self {
        Self {
            countdown: Countdown::starting_at(OffsetDateTime::now_utc()),
        }
    }
}

/// Render the countdown as four labeled cells, or the closing message once
/// the target has passed. Schedules a repaint so the seconds keep moving.
pub fn view(ui: &mut egui::Ui, model: &CountdownModel) {
    match model.countdown.remaining(OffsetDateTime::now_utc()) {
        Some(parts) => {
            ui.horizontal(|ui| {
                for (value, unit) in [
                    (parts.days, "days"),
                    (parts.hours, "hours"),
                    (parts.minutes, "minutes"),
                    (parts.seconds, "seconds"),
                ] {
                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.label(egui::RichText::new(format!("{value:02}")).heading());
                            ui.label(egui::RichText::new(unit).small());
                        });
                    });
                }
            });
            ui.ctx()
                .request_repaint_after(std::time::Duration::from_secs(1));
        }
        None => {
            ui.label(egui::RichText::new("The wait is over!").heading());
        }
    }
}
