// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Image gallery with a lightbox overlay. Images are decoded off the UI
//! thread; the resulting textures are cached per path.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use eframe::egui;

use crate::ui::components::Feedback;

/// One showcased image.
pub struct GalleryItem {
    /// Filesystem path, also the cache key.
    pub path: PathBuf,
    /// Display title derived from the file name.
    pub title: String,
}

/// MVU state for the gallery grid and lightbox.
#[derive(Default)]
pub struct GalleryModel {
    items: Vec<GalleryItem>,
    textures: HashMap<PathBuf, egui::TextureHandle>,
    failures: HashSet<PathBuf>,
    lightbox: Option<usize>,
}

impl GalleryModel {
    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    /// Index of the image shown in the lightbox, when open.
    pub fn lightbox(&self) -> Option<usize> {
        self.lightbox
    }
}

/// Messages emitted by the gallery views.
// Debug omitted because TextureHandle is not Debug.
pub enum GalleryMsg {
    RequestPickImages,
    ImagesPicked(Vec<PathBuf>),
    ImageReady {
        path: PathBuf,
        texture: egui::TextureHandle,
    },
    ImageFailed {
        path: PathBuf,
    },
    Remove(usize),
    LightboxOpened(usize),
    LightboxClosed,
}

/// Side-effectful commands that run off the UI path.
pub enum GalleryCommand {
    PickImages,
    LoadImage { path: PathBuf },
}

/// Apply a message to the gallery model.
pub fn update(
    model: &mut GalleryModel,
    msg: GalleryMsg,
    cmds: &mut Vec<GalleryCommand>,
) -> Option<Feedback> {
    match msg {
        GalleryMsg::RequestPickImages => {
            cmds.push(GalleryCommand::PickImages);
            None
        }
        GalleryMsg::ImagesPicked(paths) => {
            let mut added = 0;
            for path in paths {
                // The same file never appears twice in the grid.
                if model.items.iter().any(|item| item.path == path) {
                    continue;
                }
                let title = path
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_else(|| format!("image-{}", model.items.len() + 1));
                cmds.push(GalleryCommand::LoadImage { path: path.clone() });
                model.items.push(GalleryItem { path, title });
                added += 1;
            }
            (added > 0).then(|| Feedback::info(format!("Added {added} image(s) to the gallery")))
        }
        GalleryMsg::ImageReady { path, texture } => {
            model.failures.remove(&path);
            model.textures.insert(path, texture);
            None
        }
        GalleryMsg::ImageFailed { path } => {
            model.failures.insert(path.clone());
            Some(Feedback::error(format!(
                "Could not load image {}",
                path.display()
            )))
        }
        GalleryMsg::Remove(index) => {
            if index < model.items.len() {
                let removed = model.items.remove(index);
                model.textures.remove(&removed.path);
                model.failures.remove(&removed.path);
                // Keep the lightbox pointing at the same image.
                model.lightbox = match model.lightbox {
                    Some(open) if open == index => None,
                    Some(open) if open > index => Some(open - 1),
                    other => other,
                };
            }
            None
        }
        GalleryMsg::LightboxOpened(index) => {
            if index < model.items.len() {
                model.lightbox = Some(index);
            }
            None
        }
        GalleryMsg::LightboxClosed => {
            model.lightbox = None;
            None
        }
    }
}

/// Render the gallery grid and return triggered messages.
pub fn view(ui: &mut egui::Ui, model: &GalleryModel) -> Vec<GalleryMsg> {
    let mut msgs = Vec::new();

    ui.heading("Gallery");
    ui.add_space(4.0);
    if ui
        .button(format!("{} Add images", egui_phosphor::regular::IMAGES))
        .clicked()
    {
        msgs.push(GalleryMsg::RequestPickImages);
    }
    ui.add_space(8.0);

    if model.items.is_empty() {
        ui.label(
            egui::RichText::new("No images yet. Add a few to build your showcase.")
                .italics()
                .color(egui::Color32::from_gray(130)),
        );
        return msgs;
    }

    egui::Grid::new("gallery_grid")
        .num_columns(3)
        .spacing(egui::vec2(10.0, 10.0))
        .show(ui, |ui| {
            for (index, item) in model.items.iter().enumerate() {
                ui.vertical(|ui| {
                    if let Some(texture) = model.textures.get(&item.path) {
                        let size = texture.size_vec2();
                        let max = 180.0;
                        let scale = (max / size.x).min(max / size.y).min(1.0);
                        let response = ui
                            .add(
                                egui::Image::new((texture.id(), size * scale))
                                    .sense(egui::Sense::click()),
                            )
                            .on_hover_cursor(egui::CursorIcon::PointingHand);
                        if response.clicked() {
                            msgs.push(GalleryMsg::LightboxOpened(index));
                        }
                    } else if model.failures.contains(&item.path) {
                        ui.label(
                            egui::RichText::new(egui_phosphor::regular::IMAGE_BROKEN)
                                .size(32.0)
                                .color(egui::Color32::from_gray(120)),
                        );
                    } else {
                        ui.add(egui::Spinner::new().size(24.0));
                    }
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(&item.title).small());
                        if ui
                            .button(
                                egui::RichText::new(egui_phosphor::regular::TRASH_SIMPLE).small(),
                            )
                            .on_hover_text("Remove image")
                            .clicked()
                        {
                            msgs.push(GalleryMsg::Remove(index));
                        }
                    });
                });
                if (index + 1) % 3 == 0 {
                    ui.end_row();
                }
            }
        });

    msgs
}

/// Render the lightbox overlay when open. Escape, the close button, or a
/// click outside the image closes it.
pub fn view_lightbox(ctx: &egui::Context, model: &GalleryModel) -> Vec<GalleryMsg> {
    let mut msgs = Vec::new();
    let Some(index) = model.lightbox else {
        return msgs;
    };
    let Some(item) = model.items.get(index) else {
        return msgs;
    };

    if ctx.input(|input| input.key_pressed(egui::Key::Escape)) {
        msgs.push(GalleryMsg::LightboxClosed);
        return msgs;
    }

    egui::Area::new(egui::Id::new("lightbox"))
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            let screen = ctx.screen_rect();
            // Dim the page behind the overlay.
            ui.painter()
                .rect_filled(screen, 0.0, egui::Color32::from_black_alpha(180));

            let backdrop = ui.interact(
                screen,
                egui::Id::new("lightbox_backdrop"),
                egui::Sense::click(),
            );

            let mut clicked_image = false;
            ui.vertical_centered(|ui| {
                if let Some(texture) = model.textures.get(&item.path) {
                    let size = texture.size_vec2();
                    let max = screen.size() * 0.85;
                    let scale = (max.x / size.x).min(max.y / size.y).min(1.0);
                    let response = ui.add(
                        egui::Image::new((texture.id(), size * scale))
                            .sense(egui::Sense::click()),
                    );
                    clicked_image = response.clicked();
                } else {
                    ui.add(egui::Spinner::new().size(48.0));
                }
                ui.add_space(6.0);
                ui.label(egui::RichText::new(&item.title).color(egui::Color32::WHITE));
                if ui
                    .button(format!("{} Close", egui_phosphor::regular::X))
                    .clicked()
                {
                    msgs.push(GalleryMsg::LightboxClosed);
                }
            });

            if backdrop.clicked() && !clicked_image {
                msgs.push(GalleryMsg::LightboxClosed);
            }
        });

    msgs
}

/// Decode an image and scale it down for display.
pub(crate) fn load_image(path: &Path) -> Result<egui::ColorImage, String> {
    const MAX: u32 = 1280;

    let decoded = image::open(path).map_err(|err| err.to_string())?;
    let resized = decoded.thumbnail(MAX, MAX).to_rgba8();
    let size = [resized.width() as usize, resized.height() as usize];
    let pixels = resized.into_raw();
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, &pixels))
}
