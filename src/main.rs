// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

mod app;
mod logic;
mod models;
mod mvu;
mod prefs;
mod ui;

fn main() -> eframe::Result<()> {
    app::run()
}
