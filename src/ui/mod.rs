// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the portfolio viewer.

pub mod contact;
pub mod gallery;
pub mod modal;
pub mod sections;
pub mod textures;

pub(crate) const ACCENT: egui::Color32 = egui::Color32::from_rgb(59, 130, 246);

/// Small rounded label, used for categories and tools.
pub(crate) fn chip(ui: &mut egui::Ui, text: &str, fill: egui::Color32) {
    egui::Frame::none()
        .fill(fill)
        .rounding(8.0)
        .inner_margin(egui::Margin::symmetric(6.0, 2.0))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).small().color(egui::Color32::from_gray(220)));
        });
}
