// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel wiring component state, messages, and
//! commands.

use std::path::PathBuf;
use std::sync::Arc;

use crate::logic::submit::{ContactPayload, LoginPayload, RegistrationPayload, SubmitBackend};
use crate::models::form::FormId;
use crate::models::theme::{COLOR_THEME_KEY, ColorTheme, THEME_KEY, ThemeSettings};
use crate::prefs::PrefStore;
use crate::ui::components::Feedback;
use crate::ui::components::contact_form::{self, ContactCommand, ContactModel, ContactMsg};
use crate::ui::components::countdown::CountdownModel;
use crate::ui::components::gallery::{self, GalleryCommand, GalleryModel, GalleryMsg};
use crate::ui::components::login_form::{self, LoginCommand, LoginModel, LoginMsg};
use crate::ui::components::nav::{self, NavModel, NavMsg, Page};
use crate::ui::components::notifications::{self, ToastKind, ToastModel, ToastMsg};
use crate::ui::components::register_form::{self, RegisterCommand, RegisterModel, RegisterMsg};

/// Top-level application state.
#[derive(Default)]
pub struct AppModel {
    /// Currently shown page.
    pub page: Page,
    /// Navigation bar state.
    pub nav: NavModel,
    /// Contact form state.
    pub contact: ContactModel,
    /// Login form state.
    pub login: LoginModel,
    /// Registration form state.
    pub register: RegisterModel,
    /// Gallery and lightbox state.
    pub gallery: GalleryModel,
    /// Launch countdown state.
    pub countdown: CountdownModel,
    /// Toast layer state.
    pub toasts: ToastModel,
    /// Active theme selection.
    pub theme: ThemeSettings,
    /// Latest status message to display.
    pub status: Option<String>,
    /// Count of queued background commands.
    pub pending_commands: usize,
}

/// Application messages routed through the update function.
pub enum Msg {
    Nav(NavMsg),
    Contact(ContactMsg),
    Login(LoginMsg),
    Register(RegisterMsg),
    Gallery(GalleryMsg),
    Toast(ToastMsg),
    ThemeModeToggled,
    ColorThemePicked(ColorTheme),
    ProfileLinkClicked(&'static str),
    ImageDecoded {
        path: PathBuf,
        image: eframe::egui::ColorImage,
    },
    SubmitFinished {
        form: FormId,
        result: Result<String, String>,
    },
    PreferenceSaved(Result<(), String>),
    LinkOpened(Result<(), String>),
}

/// Commands represent side effects executed between frames.
pub enum Command {
    SubmitContact(ContactPayload),
    SubmitLogin(LoginPayload),
    SubmitRegistration(RegistrationPayload),
    PickImages,
    LoadImage { path: PathBuf },
    SavePreference { key: &'static str, value: &'static str },
    OpenLink(String),
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::Nav(m) => {
            if let Some(page) = nav::update(&mut model.nav, m) {
                model.page = page;
            }
        }
        Msg::Contact(m) => {
            let mut form_cmds = Vec::new();
            if let Some(event) = contact_form::update(&mut model.contact, m, &mut form_cmds) {
                surface_feedback(model, event);
            }
            for c in form_cmds {
                match c {
                    ContactCommand::Submit(payload) => cmds.push(Command::SubmitContact(payload)),
                }
            }
        }
        Msg::Login(m) => {
            let mut form_cmds = Vec::new();
            if let Some(event) = login_form::update(&mut model.login, m, &mut form_cmds) {
                surface_feedback(model, event);
            }
            for c in form_cmds {
                match c {
                    LoginCommand::Submit(payload) => cmds.push(Command::SubmitLogin(payload)),
                }
            }
        }
        Msg::Register(m) => {
            let mut form_cmds = Vec::new();
            if let Some(event) = register_form::update(&mut model.register, m, &mut form_cmds) {
                surface_feedback(model, event);
            }
            for c in form_cmds {
                match c {
                    RegisterCommand::Submit(payload) => {
                        cmds.push(Command::SubmitRegistration(payload))
                    }
                }
            }
        }
        Msg::Gallery(m) => {
            let mut gallery_cmds = Vec::new();
            if let Some(event) = gallery::update(&mut model.gallery, m, &mut gallery_cmds) {
                surface_feedback(model, event);
            }
            for c in gallery_cmds {
                match c {
                    GalleryCommand::PickImages => cmds.push(Command::PickImages),
                    GalleryCommand::LoadImage { path } => cmds.push(Command::LoadImage { path }),
                }
            }
        }
        Msg::Toast(m) => notifications::update(&mut model.toasts, m),
        Msg::ThemeModeToggled => {
            model.theme.mode = model.theme.mode.toggled();
            cmds.push(Command::SavePreference {
                key: THEME_KEY,
                value: model.theme.mode.as_str(),
            });
        }
        Msg::ColorThemePicked(color) => {
            model.theme.color = color;
            cmds.push(Command::SavePreference {
                key: COLOR_THEME_KEY,
                value: color.as_str(),
            });
        }
        Msg::ProfileLinkClicked(url) => cmds.push(Command::OpenLink(url.to_string())),
        Msg::ImageDecoded { path, image } => {
            // Texture creation must happen in the shell where the egui
            // context is available; this variant is transformed there.
            let _ = (path, image);
        }
        Msg::SubmitFinished { form, result } => match result {
            Ok(ack) => {
                match form {
                    FormId::Contact => model.contact.reset(),
                    FormId::Login => {
                        model.login.reset();
                        model.page = Page::Home;
                    }
                    FormId::Registration => {
                        model.register.reset();
                        model.page = Page::Login;
                    }
                }
                surface(model, ack, ToastKind::Success);
            }
            Err(err) => surface(model, err, ToastKind::Error),
        },
        Msg::PreferenceSaved(result) => {
            if let Err(err) = result {
                log::warn!("failed to persist preference: {err}");
                surface(
                    model,
                    format!("Could not save your preferences: {err}"),
                    ToastKind::Warning,
                );
            }
        }
        Msg::LinkOpened(result) => {
            if let Err(err) = result {
                surface(
                    model,
                    format!("Could not open the link: {err}"),
                    ToastKind::Warning,
                );
            }
        }
    }
}

/// Executes commands on worker threads and reports back as messages.
pub struct CommandRunner {
    backend: Arc<dyn SubmitBackend>,
    prefs: Arc<dyn PrefStore>,
}

impl CommandRunner {
    pub fn new(backend: Arc<dyn SubmitBackend>, prefs: Arc<dyn PrefStore>) -> Self {
        Self { backend, prefs }
    }

    /// Execute a command synchronously and return the resulting message.
    pub fn run(&self, cmd: Command) -> Msg {
        match cmd {
            Command::SubmitContact(payload) => Msg::SubmitFinished {
                form: FormId::Contact,
                result: self.backend.contact(&payload).map_err(|e| e.to_string()),
            },
            Command::SubmitLogin(payload) => Msg::SubmitFinished {
                form: FormId::Login,
                result: self.backend.login(&payload).map_err(|e| e.to_string()),
            },
            Command::SubmitRegistration(payload) => Msg::SubmitFinished {
                form: FormId::Registration,
                result: self.backend.register(&payload).map_err(|e| e.to_string()),
            },
            Command::PickImages => {
                let files = rfd::FileDialog::new()
                    .set_title("Select images")
                    .add_filter(
                        "Images",
                        &["png", "jpg", "jpeg", "bmp", "tiff", "tif", "gif", "webp"],
                    )
                    .pick_files()
                    .unwrap_or_default();
                Msg::Gallery(GalleryMsg::ImagesPicked(files))
            }
            Command::LoadImage { path } => match gallery::load_image(&path) {
                Ok(image) => Msg::ImageDecoded { path, image },
                Err(err) => {
                    log::warn!("failed to decode {}: {err}", path.display());
                    Msg::Gallery(GalleryMsg::ImageFailed { path })
                }
            },
            Command::SavePreference { key, value } => {
                log::debug!("persisting preference {key}={value}");
                Msg::PreferenceSaved(self.prefs.set(key, value).map_err(|e| e.to_string()))
            }
            Command::OpenLink(url) => {
                Msg::LinkOpened(open::that(&url).map_err(|e| e.to_string()))
            }
        }
    }
}

/// Update status/toast fields consistently for user feedback.
fn surface(model: &mut AppModel, message: String, kind: ToastKind) {
    model.status = Some(message.clone());
    notifications::update(&mut model.toasts, ToastMsg::Show { message, kind });
}

fn surface_feedback(model: &mut AppModel, feedback: Feedback) {
    let kind = if feedback.is_error {
        ToastKind::Error
    } else {
        ToastKind::Info
    };
    surface(model, feedback.message, kind);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::submit::LocalBackend;
    use crate::models::theme::ThemeMode;
    use crate::prefs::MemoryStore;
    use anyhow::anyhow;

    fn filled_contact(model: &mut AppModel) {
        model.contact.name = "Ada Lovelace".into();
        model.contact.email = "ada@example.com".into();
        model.contact.subject = "General inquiry".into();
        model.contact.message = "Hello!".into();
        model.contact.privacy = true;
    }

    #[test]
    fn valid_contact_submit_enqueues_command() {
        let mut model = AppModel::default();
        filled_contact(&mut model);
        let mut cmds = Vec::new();

        update(
            &mut model,
            Msg::Contact(ContactMsg::SubmitRequested),
            &mut cmds,
        );

        assert!(matches!(cmds.as_slice(), [Command::SubmitContact(_)]));
        assert!(model.toasts.current().is_none());
    }

    #[test]
    fn invalid_contact_submit_raises_error_toast() {
        let mut model = AppModel::default();
        let mut cmds = Vec::new();

        update(
            &mut model,
            Msg::Contact(ContactMsg::SubmitRequested),
            &mut cmds,
        );

        assert!(cmds.is_empty());
        let toast = model.toasts.current().expect("toast raised");
        assert_eq!(toast.kind, ToastKind::Error);
        assert!(model.status.is_some());
    }

    #[test]
    fn contact_success_resets_form_and_toasts() {
        let mut model = AppModel::default();
        filled_contact(&mut model);
        let mut cmds = Vec::new();

        update(
            &mut model,
            Msg::SubmitFinished {
                form: FormId::Contact,
                result: Ok("Sent!".into()),
            },
            &mut cmds,
        );

        assert!(model.contact.name.is_empty());
        assert_eq!(model.toasts.current().unwrap().kind, ToastKind::Success);
    }

    #[test]
    fn login_success_navigates_home() {
        let mut model = AppModel {
            page: Page::Login,
            ..Default::default()
        };

        update(
            &mut model,
            Msg::SubmitFinished {
                form: FormId::Login,
                result: Ok("Welcome".into()),
            },
            &mut Vec::new(),
        );

        assert_eq!(model.page, Page::Home);
    }

    #[test]
    fn registration_success_navigates_to_login() {
        let mut model = AppModel {
            page: Page::Register,
            ..Default::default()
        };
        model.register.first_name = "Ada".into();

        update(
            &mut model,
            Msg::SubmitFinished {
                form: FormId::Registration,
                result: Ok("Created".into()),
            },
            &mut Vec::new(),
        );

        assert_eq!(model.page, Page::Login);
        assert!(model.register.first_name.is_empty());
    }

    #[test]
    fn submit_failure_keeps_form_state() {
        let mut model = AppModel::default();
        filled_contact(&mut model);

        update(
            &mut model,
            Msg::SubmitFinished {
                form: FormId::Contact,
                result: Err("service unavailable".into()),
            },
            &mut Vec::new(),
        );

        assert_eq!(model.contact.name, "Ada Lovelace");
        assert_eq!(model.toasts.current().unwrap().kind, ToastKind::Error);
    }

    #[test]
    fn theme_toggle_flips_mode_and_persists() {
        let mut model = AppModel::default();
        let mut cmds = Vec::new();

        update(&mut model, Msg::ThemeModeToggled, &mut cmds);

        assert_eq!(model.theme.mode, ThemeMode::Dark);
        assert!(matches!(
            cmds.as_slice(),
            [Command::SavePreference {
                key: THEME_KEY,
                value: "dark"
            }]
        ));
    }

    #[test]
    fn color_pick_persists_palette_name() {
        let mut model = AppModel::default();
        let mut cmds = Vec::new();

        update(&mut model, Msg::ColorThemePicked(ColorTheme::Purple), &mut cmds);

        assert_eq!(model.theme.color, ColorTheme::Purple);
        assert!(matches!(
            cmds.as_slice(),
            [Command::SavePreference {
                key: COLOR_THEME_KEY,
                value: "purple"
            }]
        ));
    }

    #[test]
    fn navigation_switches_page() {
        let mut model = AppModel::default();

        update(
            &mut model,
            Msg::Nav(NavMsg::Navigate(Page::Contact)),
            &mut Vec::new(),
        );

        assert_eq!(model.page, Page::Contact);
    }

    #[test]
    fn gallery_pick_request_becomes_command() {
        let mut model = AppModel::default();
        let mut cmds = Vec::new();

        update(
            &mut model,
            Msg::Gallery(GalleryMsg::RequestPickImages),
            &mut cmds,
        );

        assert!(matches!(cmds.as_slice(), [Command::PickImages]));
    }

    #[test]
    fn runner_reports_submit_outcomes() {
        let runner = CommandRunner::new(Arc::new(LocalBackend), Arc::new(MemoryStore::default()));
        let payload = LoginPayload {
            email: "ada@example.com".into(),
            password: "Abcdef12".into(),
        };

        let msg = runner.run(Command::SubmitLogin(payload));

        match msg {
            Msg::SubmitFinished {
                form: FormId::Login,
                result,
            } => assert!(result.is_ok()),
            _ => panic!("unexpected message"),
        }
    }

    #[test]
    fn runner_persists_preferences() {
        let prefs = Arc::new(MemoryStore::default());
        let runner = CommandRunner::new(Arc::new(LocalBackend), prefs.clone());

        let msg = runner.run(Command::SavePreference {
            key: THEME_KEY,
            value: "dark",
        });

        assert!(matches!(msg, Msg::PreferenceSaved(Ok(()))));
        assert_eq!(prefs.get(THEME_KEY).as_deref(), Some("dark"));
    }

    // A backend refusal must surface as an error toast, not a panic.
    struct RefusingBackend;

    impl SubmitBackend for RefusingBackend {
        fn contact(&self, _payload: &ContactPayload) -> anyhow::Result<String> {
            Err(anyhow!("contact rejected"))
        }

        fn login(&self, _payload: &LoginPayload) -> anyhow::Result<String> {
            Err(anyhow!("bad credentials"))
        }

        fn register(&self, _payload: &RegistrationPayload) -> anyhow::Result<String> {
            Err(anyhow!("registration closed"))
        }
    }

    #[test]
    fn backend_refusal_flows_through_runner_and_update() {
        let runner =
            CommandRunner::new(Arc::new(RefusingBackend), Arc::new(MemoryStore::default()));
        let payload = ContactPayload {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "General".into(),
            message: "Hello".into(),
            phone: None,
        };

        let msg = runner.run(Command::SubmitContact(payload));
        let mut model = AppModel::default();
        update(&mut model, msg, &mut Vec::new());

        let toast = model.toasts.current().expect("toast raised");
        assert_eq!(toast.kind, ToastKind::Error);
        assert!(toast.message.contains("contact rejected"));
    }
}
