// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui application shell for the portfolio.
//! Handles layout, page routing, and wiring to the command workers.

pub mod components;

use std::sync::Arc;
use std::time::Instant;

use eframe::egui;

use crate::logic::submit::SubmitBackend;
use crate::models::theme::{ColorTheme, ThemeMode, ThemeSettings};
use crate::mvu::{self, AppModel, Command, CommandRunner, Msg};
use crate::prefs::PrefStore;
use crate::ui::components::nav::{self, NavMsg, Page};
use crate::ui::components::{
    contact_form, countdown, gallery, login_form, notifications, register_form,
};

/// Skill bars shown on the home page, with their target fill.
const SKILLS: [(&str, f32); 4] = [
    ("HTML & CSS", 0.9),
    ("JavaScript", 0.85),
    ("UI design", 0.7),
    ("Photography", 0.6),
];

/// External profiles opened via the system handler.
const PROFILES: [(&str, &str, &str); 3] = [
    (
        egui_phosphor::regular::GITHUB_LOGO,
        "GitHub",
        "https://github.com/athemis",
    ),
    (
        egui_phosphor::regular::LINKEDIN_LOGO,
        "LinkedIn",
        "https://www.linkedin.com/in/athemis",
    ),
    (
        egui_phosphor::regular::CAMERA,
        "Photo feed",
        "https://unsplash.com/@athemis",
    ),
];

/// Stateful egui application for the portfolio pages.
pub struct FolioApp {
    model: AppModel,
    inbox: Vec<Msg>,
    cmd_tx: crossbeam_channel::Sender<Command>,
    msg_rx: crossbeam_channel::Receiver<Msg>,
    skills_seeded: bool,
}

impl FolioApp {
    /// Wire the app to its collaborators: the submit backend supplying
    /// submission outcomes and the preference store read at startup.
    pub fn new(backend: Arc<dyn SubmitBackend>, prefs: Arc<dyn PrefStore>) -> Self {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded::<Command>();
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Msg>();
        let runner = Arc::new(CommandRunner::new(backend, prefs.clone()));

        let threads = std::thread::available_parallelism()
            .map(|n| n.get().max(2))
            .unwrap_or(2);
        for _ in 0..threads {
            let cmd_rx = cmd_rx.clone();
            let msg_tx = msg_tx.clone();
            let runner = runner.clone();
            std::thread::spawn(move || {
                for cmd in cmd_rx.iter() {
                    let _ = msg_tx.send(runner.run(cmd));
                }
            });
        }

        let theme = ThemeSettings::load(prefs.as_ref());
        log::info!(
            "starting with theme {} / {}",
            theme.mode.as_str(),
            theme.color.as_str()
        );

        Self {
            model: AppModel {
                theme,
                ..Default::default()
            },
            inbox: Vec::new(),
            cmd_tx,
            msg_rx,
            skills_seeded: false,
        }
    }
}

impl eframe::App for FolioApp {
    fn ui(&mut self, ui: &mut egui::Ui, frame: &mut eframe::Frame) {
        #[allow(deprecated)]
        self.update(ui.ctx(), frame);
    }

    #[allow(deprecated)]
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.model.theme.apply(ctx);
        self.ensure_spacing(ctx);

        // Pull messages produced by the command workers.
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.model.pending_commands = self.model.pending_commands.saturating_sub(1);
            self.inbox.push(msg);
        }

        // Process pending messages until exhausted.
        let mut msgs = std::mem::take(&mut self.inbox);
        while let Some(msg) = msgs.pop() {
            match msg {
                Msg::ImageDecoded { path, image } => {
                    let texture = ctx.load_texture(
                        format!("gallery-{}", path.display()),
                        image,
                        egui::TextureOptions::default(),
                    );
                    msgs.push(Msg::Gallery(gallery::GalleryMsg::ImageReady {
                        path,
                        texture,
                    }));
                }
                other => {
                    let mut commands = Vec::new();
                    mvu::update(&mut self.model, other, &mut commands);
                    for cmd in commands {
                        if self.cmd_tx.send(cmd).is_ok() {
                            self.model.pending_commands += 1;
                        }
                    }
                }
            }
        }
        self.inbox = msgs;

        notifications::expire(&mut self.model.toasts, Instant::now());

        let top = egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                let accent = self.model.theme.color.palette().primary;
                ui.label(egui::RichText::new("Folio").heading().color(accent));
                ui.add_space(12.0);
                let nav_msgs = nav::view(ui, &self.model.nav, self.model.page);
                self.inbox.extend(nav_msgs.into_iter().map(Msg::Nav));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    self.render_theme_controls(ui);
                });
            });
            ui.add_space(4.0);
        });

        let mut menu_rect = None;
        if self.model.nav.menu_open {
            let response = egui::TopBottomPanel::top("nav_menu").show(ctx, |ui| {
                ui.add_space(4.0);
                let menu_msgs = nav::view_menu(ui, self.model.page);
                self.inbox.extend(menu_msgs.into_iter().map(Msg::Nav));
                ui.add_space(4.0);
            });
            menu_rect = Some(response.response.rect);
        }

        // A click anywhere outside the bar and the open menu closes it.
        if self.model.nav.menu_open && ctx.input(|input| input.pointer.any_pressed()) {
            let inside = ctx
                .input(|input| input.pointer.interact_pos())
                .is_some_and(|pos| {
                    top.response.rect.contains(pos)
                        || menu_rect.is_some_and(|rect| rect.contains(pos))
                });
            if !inside {
                self.inbox.push(Msg::Nav(NavMsg::ClickedOutside));
            }
        }

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            egui::ScrollArea::vertical().show(ui, |ui| match self.model.page {
                Page::Home => self.render_home(ui),
                Page::Gallery => {
                    let gallery_msgs = gallery::view(ui, &self.model.gallery);
                    self.inbox.extend(gallery_msgs.into_iter().map(Msg::Gallery));
                }
                Page::Contact => {
                    ui.set_max_width(460.0);
                    let form_msgs = contact_form::view(ui, &self.model.contact);
                    self.inbox.extend(form_msgs.into_iter().map(Msg::Contact));
                }
                Page::Login => {
                    ui.set_max_width(380.0);
                    let form_msgs = login_form::view(ui, &self.model.login);
                    self.inbox.extend(form_msgs.into_iter().map(Msg::Login));
                }
                Page::Register => {
                    ui.set_max_width(460.0);
                    let form_msgs = register_form::view(ui, &self.model.register);
                    self.inbox.extend(form_msgs.into_iter().map(Msg::Register));
                }
            });
        });

        let toast_msgs = notifications::view(ctx, &self.model.toasts);
        self.inbox.extend(toast_msgs.into_iter().map(Msg::Toast));

        let lightbox_msgs = gallery::view_lightbox(ctx, &self.model.gallery);
        self.inbox.extend(lightbox_msgs.into_iter().map(Msg::Gallery));
    }
}

impl FolioApp {
    fn ensure_spacing(&self, ctx: &egui::Context) {
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        });
    }

    /// Mode toggle plus the accent palette picker.
    fn render_theme_controls(&mut self, ui: &mut egui::Ui) {
        let icon = match self.model.theme.mode {
            ThemeMode::Light => egui_phosphor::regular::MOON,
            ThemeMode::Dark => egui_phosphor::regular::SUN,
        };
        if ui
            .button(icon)
            .on_hover_text("Switch between light and dark mode")
            .clicked()
        {
            self.inbox.push(Msg::ThemeModeToggled);
        }

        egui::ComboBox::from_id_salt("color_theme")
            .selected_text(self.model.theme.color.as_str())
            .width(90.0)
            .show_ui(ui, |ui| {
                for color in ColorTheme::ALL {
                    let label = egui::RichText::new(format!(
                        "{} {}",
                        egui_phosphor::regular::CIRCLE,
                        color.as_str()
                    ))
                    .color(color.palette().primary);
                    if ui
                        .selectable_label(self.model.theme.color == color, label)
                        .clicked()
                    {
                        self.inbox.push(Msg::ColorThemePicked(color));
                    }
                }
            });
    }

    fn render_home(&mut self, ui: &mut egui::Ui) {
        let palette = self.model.theme.color.palette();

        ui.add_space(12.0);
        ui.label(
            egui::RichText::new("Hi, I'm Alexander.")
                .heading()
                .size(28.0)
                .color(palette.primary),
        );
        ui.label("Photographer and front-end tinkerer. I build small, friendly things for the web.");
        ui.add_space(18.0);

        ui.heading("Skills");
        ui.add_space(4.0);
        self.render_skills(ui);
        ui.add_space(18.0);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label(
                egui::RichText::new("New portfolio launching in")
                    .strong()
                    .color(palette.secondary),
            );
            ui.add_space(4.0);
            countdown::view(ui, &self.model.countdown);
        });
        ui.add_space(18.0);

        ui.heading("Elsewhere");
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            for (icon, label, url) in PROFILES {
                if ui
                    .button(format!("{icon} {label}"))
                    .on_hover_text(url)
                    .clicked()
                {
                    self.inbox.push(Msg::ProfileLinkClicked(url));
                }
            }
        });
    }

    /// Skill bars sweep up from zero the first time the home page shows.
    fn render_skills(&mut self, ui: &mut egui::Ui) {
        if !self.skills_seeded {
            for (name, _) in SKILLS {
                ui.ctx()
                    .animate_value_with_time(egui::Id::new(("skill", name)), 0.0, 0.0);
            }
            self.skills_seeded = true;
        }

        for (name, target) in SKILLS {
            ui.label(name);
            let fill = ui
                .ctx()
                .animate_value_with_time(egui::Id::new(("skill", name)), target, 1.2);
            ui.add(
                egui::ProgressBar::new(fill)
                    .desired_width(280.0)
                    .show_percentage(),
            );
            ui.add_space(4.0);
        }
    }

    /// Render latest status/error message when present.
    fn render_status(&self, ui: &mut egui::Ui) {
        if let Some(text) = &self.model.status {
            let display = if self.model.pending_commands > 0 {
                format!("{}  ({} working…)", text, self.model.pending_commands)
            } else {
                text.to_string()
            };
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(display).color(egui::Color32::from_gray(68)));
                if self.model.pending_commands > 0 {
                    ui.add(egui::Spinner::new().size(14.0)).on_hover_text(format!(
                        "{} task(s) running in background",
                        self.model.pending_commands
                    ));
                }
            });
        }
    }
}
