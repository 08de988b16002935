// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project grid with category filter chips.
//!
//! Drawing only reads the gallery state; user input is reported back as a
//! [`GalleryAction`] and applied by the application.

use super::textures::TextureCache;
use super::{chip, ACCENT};
use crate::gallery::GalleryController;
use crate::models::category::Category;
use crate::models::project::{MediaKind, Project};

const CARD_WIDTH: f32 = 300.0;
const CARD_TOOLS_SHOWN: usize = 3;
const CARD_DESCRIPTION_CHARS: usize = 110;

/// Result of gallery interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryAction {
    None,
    ToggleFilter(Category),
    ClearFilters,
    OpenProject(String),
}

/// Display the filter chips, result summary and project cards.
pub fn show(ui: &mut egui::Ui, gallery: &GalleryController, textures: &mut TextureCache) -> GalleryAction {
    let mut action = GalleryAction::None;

    ui.vertical_centered(|ui| {
        ui.heading(egui::RichText::new("Featured Projects").size(32.0));
        ui.label(
            egui::RichText::new(
                "Explore a collection of engineering projects showcasing precision design, \
                 technical innovation, and creative problem-solving.",
            )
            .color(egui::Color32::from_gray(180)),
        );
    });
    ui.add_space(16.0);

    // Filter chips
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;
        for category in gallery.unique_categories() {
            if ui
                .selectable_label(gallery.is_filter_active(&category), category.as_str())
                .clicked()
            {
                action = GalleryAction::ToggleFilter(category);
            }
        }

        let active = gallery.active_filters().len();
        if active > 0 && ui.button(format!("✖ Clear ({active})")).clicked() {
            action = GalleryAction::ClearFilters;
        }
    });

    ui.add_space(8.0);
    ui.label(egui::RichText::new(gallery.summary()).weak());
    if gallery.catalog().is_empty() {
        ui.label("This catalog has no projects yet.");
    }
    ui.add_space(8.0);

    // Project cards
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(16.0, 16.0);
        for project in gallery.visible_projects() {
            if project_card(ui, project, textures).clicked() {
                action = GalleryAction::OpenProject(project.id.clone());
            }
        }
    });

    if gallery.is_empty_state() {
        ui.vertical_centered(|ui| {
            ui.add_space(32.0);
            ui.label(egui::RichText::new("🔍").size(48.0));
            ui.heading("No projects found");
            ui.label(
                egui::RichText::new("Try adjusting your filters to see more projects.").weak(),
            );
            ui.add_space(8.0);
            if ui.button("Clear Filters").clicked() {
                action = GalleryAction::ClearFilters;
            }
        });
    }

    action
}

/// Draw one project card; the whole card is clickable.
fn project_card(ui: &mut egui::Ui, project: &Project, textures: &mut TextureCache) -> egui::Response {
    let response = egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(8.0))
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.vertical(|ui| {
                let (cover_rect, _) = ui.allocate_exact_size(
                    egui::vec2(CARD_WIDTH, CARD_WIDTH * 9.0 / 16.0),
                    egui::Sense::hover(),
                );
                paint_cover(ui, cover_rect, project, textures);

                ui.label(egui::RichText::new(&project.title).strong().size(17.0));
                if let Some(description) = &project.description {
                    ui.label(
                        egui::RichText::new(excerpt(description, CARD_DESCRIPTION_CHARS))
                            .small()
                            .color(egui::Color32::from_gray(160)),
                    );
                }

                ui.horizontal_wrapped(|ui| {
                    for category in &project.categories {
                        chip(ui, category.as_str(), ACCENT.gamma_multiply(0.4));
                    }
                });

                let (tools, hidden) = project.tool_preview(CARD_TOOLS_SHOWN);
                ui.horizontal_wrapped(|ui| {
                    for tool in tools {
                        chip(ui, tool, egui::Color32::from_gray(60));
                    }
                    if hidden > 0 {
                        chip(ui, &format!("+{hidden} more"), egui::Color32::from_gray(50));
                    }
                });
            });
        })
        .response;

    response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
}

/// Paint the card thumbnail and its year badge.
fn paint_cover(ui: &egui::Ui, rect: egui::Rect, project: &Project, textures: &mut TextureCache) {
    let painter = ui.painter();
    painter.rect_filled(rect, 4.0, egui::Color32::from_gray(45));

    match project.cover_kind() {
        MediaKind::Image => {
            if let Some(texture) = textures.get(ui.ctx(), &project.cover) {
                painter.image(
                    texture.id(),
                    rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );
            } else {
                let text = if textures.has_failed(&project.cover) {
                    "Image unavailable"
                } else {
                    "Loading..."
                };
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    text,
                    egui::FontId::proportional(14.0),
                    egui::Color32::from_gray(150),
                );
            }
        }
        MediaKind::Video => {
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "▶ Video preview",
                egui::FontId::proportional(16.0),
                egui::Color32::from_gray(200),
            );
        }
    }

    painter.text(
        rect.right_top() + egui::vec2(-10.0, 10.0),
        egui::Align2::RIGHT_TOP,
        format!("📅 {}", project.year),
        egui::FontId::proportional(13.0),
        egui::Color32::WHITE,
    );
}

/// Shorten `text` to at most `max_chars` characters, ending with an ellipsis.
fn excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}
