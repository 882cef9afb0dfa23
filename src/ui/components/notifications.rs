// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Toast notifications: one visible at a time, auto-dismissed after a
//! fixed lifetime. A newly raised toast replaces the current one.

use std::time::{Duration, Instant};

use eframe::egui;

/// How long a toast stays up without interaction.
const TOAST_TTL: Duration = Duration::from_secs(5);

/// Visual category of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    fn fill(&self) -> egui::Color32 {
        match self {
            ToastKind::Info => egui::Color32::from_rgb(37, 99, 235),
            ToastKind::Success => egui::Color32::from_rgb(5, 150, 105),
            ToastKind::Warning => egui::Color32::from_rgb(217, 119, 6),
            ToastKind::Error => egui::Color32::from_rgb(220, 38, 38),
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastKind::Info => egui_phosphor::regular::INFO,
            ToastKind::Success => egui_phosphor::regular::CHECK_CIRCLE,
            ToastKind::Warning => egui_phosphor::regular::WARNING,
            ToastKind::Error => egui_phosphor::regular::X_CIRCLE,
        }
    }
}

/// A single on-screen notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    raised_at: Instant,
}

/// Toast state; at most one toast exists at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastModel {
    current: Option<Toast>,
}

impl ToastModel {
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}

/// Messages controlling the toast layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToastMsg {
    Show { message: String, kind: ToastKind },
    Dismiss,
}

/// Apply a toast message.
pub fn update(model: &mut ToastModel, msg: ToastMsg) {
    match msg {
        ToastMsg::Show { message, kind } => {
            model.current = Some(Toast {
                message,
                kind,
                raised_at: Instant::now(),
            });
        }
        ToastMsg::Dismiss => model.current = None,
    }
}

/// Drop the toast once its lifetime has elapsed.
pub fn expire(model: &mut ToastModel, now: Instant) {
    if let Some(toast) = &model.current
        && now.duration_since(toast.raised_at) >= TOAST_TTL
    {
        model.current = None;
    }
}

/// Render the toast in the top-right corner of the viewport.
pub fn view(ctx: &egui::Context, model: &ToastModel) -> Vec<ToastMsg> {
    let mut msgs = Vec::new();
    let Some(toast) = &model.current else {
        return msgs;
    };

    egui::Area::new(egui::Id::new("toast"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 12.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(toast.kind.fill())
                .corner_radius(6.0)
                .inner_margin(10.0)
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(toast.kind.icon()).color(egui::Color32::WHITE),
                        );
                        ui.label(
                            egui::RichText::new(&toast.message).color(egui::Color32::WHITE),
                        );
                        if ui
                            .button(
                                egui::RichText::new(egui_phosphor::regular::X)
                                    .color(egui::Color32::WHITE),
                            )
                            .clicked()
                        {
                            msgs.push(ToastMsg::Dismiss);
                        }
                    });
                });
        });

    // Keep repainting so expiry fires without further input.
    ctx.request_repaint_after(Duration::from_millis(250));

    msgs
}
