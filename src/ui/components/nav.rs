// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Navigation bar with a collapsible menu for narrow windows.

use eframe::egui;

/// Destinations reachable from the navigation bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    Gallery,
    Contact,
    Login,
    Register,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Gallery,
        Page::Contact,
        Page::Login,
        Page::Register,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Gallery => "Gallery",
            Page::Contact => "Contact",
            Page::Login => "Log in",
            Page::Register => "Register",
        }
    }
}

/// Collapsed-menu state. The menu only exists visually when the window is
/// narrow; the open flag is harmless otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavModel {
    pub menu_open: bool,
}

/// Messages produced by the navigation views.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavMsg {
    MenuToggled,
    Navigate(Page),
    ClickedOutside,
}

/// Apply a navigation message. Returns the newly selected page, if any.
/// Choosing a destination always closes the menu, as does a click outside
/// the open menu.
pub fn update(model: &mut NavModel, msg: NavMsg) -> Option<Page> {
    match msg {
        NavMsg::MenuToggled => {
            model.menu_open = !model.menu_open;
            None
        }
        NavMsg::Navigate(page) => {
            model.menu_open = false;
            Some(page)
        }
        NavMsg::ClickedOutside => {
            model.menu_open = false;
            None
        }
    }
}

/// Window widths below this collapse the links behind a hamburger button.
pub const COLLAPSE_WIDTH: f32 = 640.0;

/// Render the bar itself: inline links when wide, a hamburger when narrow.
pub fn view(ui: &mut egui::Ui, model: &NavModel, current: Page) -> Vec<NavMsg> {
    let mut msgs = Vec::new();

    if ui.available_width() < COLLAPSE_WIDTH {
        let icon = if model.menu_open {
            egui_phosphor::regular::X
        } else {
            egui_phosphor::regular::LIST
        };
        if ui.button(icon).on_hover_text("Menu").clicked() {
            msgs.push(NavMsg::MenuToggled);
        }
    } else {
        for page in Page::ALL {
            if ui.selectable_label(current == page, page.title()).clicked() {
                msgs.push(NavMsg::Navigate(page));
            }
        }
    }

    msgs
}

/// Render the expanded menu rows shown under the bar while open.
pub fn view_menu(ui: &mut egui::Ui, current: Page) -> Vec<NavMsg> {
    let mut msgs = Vec::new();
    ui.vertical(|ui| {
        for page in Page::ALL {
            if ui.selectable_label(current == page, page.title()).clicked() {
                msgs.push(NavMsg::Navigate(page));
            }
        }
    });
    msgs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_opens_and_closes() {
        let mut model = NavModel::default();

        assert_eq!(update(&mut model, NavMsg::MenuToggled), None);
        assert!(model.menu_open);
        assert_eq!(update(&mut model, NavMsg::MenuToggled), None);
        assert!(!model.menu_open);
    }

    #[test]
    fn navigating_selects_page_and_closes_menu() {
        let mut model = NavModel { menu_open: true };

        let selected = update(&mut model, NavMsg::Navigate(Page::Contact));

        assert_eq!(selected, Some(Page::Contact));
        assert!(!model.menu_open);
    }

    #[test]
    fn outside_click_closes_without_navigating() {
        let mut model = NavModel { menu_open: true };

        let selected = update(&mut model, NavMsg::ClickedOutside);

        assert_eq!(selected, None);
        assert!(!model.menu_open);
    }
}
