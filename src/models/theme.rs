// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Theme mode and accent palettes, including their persisted string forms.

use eframe::egui;

use crate::prefs::PrefStore;

/// Preference key for the light/dark mode.
pub const THEME_KEY: &str = "theme";
/// Preference key for the accent palette name.
pub const COLOR_THEME_KEY: &str = "colorTheme";

/// Light or dark rendering mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Parse a persisted value; unknown strings yield `None`.
    pub fn from_str(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Named accent palette.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorTheme {
    #[default]
    Blue,
    Green,
    Purple,
    Red,
}

/// Primary/secondary/accent colors for one palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub primary: egui::Color32,
    pub secondary: egui::Color32,
    pub accent: egui::Color32,
}

impl ColorTheme {
    pub const ALL: [ColorTheme; 4] = [
        ColorTheme::Blue,
        ColorTheme::Green,
        ColorTheme::Purple,
        ColorTheme::Red,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorTheme::Blue => "blue",
            ColorTheme::Green => "green",
            ColorTheme::Purple => "purple",
            ColorTheme::Red => "red",
        }
    }

    /// Parse a persisted palette name; unknown strings yield `None`.
    pub fn from_str(raw: &str) -> Option<Self> {
        match raw {
            "blue" => Some(ColorTheme::Blue),
            "green" => Some(ColorTheme::Green),
            "purple" => Some(ColorTheme::Purple),
            "red" => Some(ColorTheme::Red),
            _ => None,
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            ColorTheme::Blue => Palette {
                primary: egui::Color32::from_rgb(0x25, 0x63, 0xeb),
                secondary: egui::Color32::from_rgb(0x1e, 0x40, 0xaf),
                accent: egui::Color32::from_rgb(0x3b, 0x82, 0xf6),
            },
            ColorTheme::Green => Palette {
                primary: egui::Color32::from_rgb(0x05, 0x96, 0x69),
                secondary: egui::Color32::from_rgb(0x04, 0x78, 0x57),
                accent: egui::Color32::from_rgb(0x10, 0xb9, 0x81),
            },
            ColorTheme::Purple => Palette {
                primary: egui::Color32::from_rgb(0x7c, 0x3a, 0xed),
                secondary: egui::Color32::from_rgb(0x6d, 0x28, 0xd9),
                accent: egui::Color32::from_rgb(0x8b, 0x5c, 0xf6),
            },
            ColorTheme::Red => Palette {
                primary: egui::Color32::from_rgb(0xdc, 0x26, 0x26),
                secondary: egui::Color32::from_rgb(0xb9, 0x1c, 0x1c),
                accent: egui::Color32::from_rgb(0xef, 0x44, 0x44),
            },
        }
    }
}

/// Current theme selection, loaded once at startup and written through the
/// preference store on every toggle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeSettings {
    pub mode: ThemeMode,
    pub color: ColorTheme,
}

impl ThemeSettings {
    /// Read both keys from the store; missing or unknown values fall back
    /// to the defaults (light, blue).
    pub fn load(store: &dyn PrefStore) -> Self {
        let mode = store
            .get(THEME_KEY)
            .as_deref()
            .and_then(ThemeMode::from_str)
            .unwrap_or_default();
        let color = store
            .get(COLOR_THEME_KEY)
            .as_deref()
            .and_then(ColorTheme::from_str)
            .unwrap_or_default();
        Self { mode, color }
    }

    /// Apply mode and palette to the egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = match self.mode {
            ThemeMode::Light => egui::Visuals::light(),
            ThemeMode::Dark => egui::Visuals::dark(),
        };
        let palette = self.color.palette();
        visuals.hyperlink_color = palette.accent;
        visuals.selection.bg_fill = palette.primary.gamma_multiply(0.35);
        visuals.widgets.hovered.fg_stroke.color = palette.accent;
        visuals.widgets.active.fg_stroke.color = palette.secondary;
        ctx.set_visuals(visuals);
    }
}
