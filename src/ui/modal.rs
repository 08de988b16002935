// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project detail modal with the image carousel.
//!
//! The modal floats above a dimmed backdrop. Clicking the backdrop or the
//! close button closes it; arrows, thumbnails and the keyboard move the
//! carousel.

use super::textures::TextureCache;
use super::{chip, ACCENT};
use crate::gallery::{Carousel, GalleryController};
use crate::models::project::Project;

const DETAILS_WIDTH: f32 = 280.0;
const THUMB_SIZE: egui::Vec2 = egui::vec2(80.0, 48.0);

/// Result of modal interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    None,
    Close,
    Previous,
    Next,
    JumpTo(usize),
    ShowModel,
}

/// Display the modal for the selected project, if one is open.
pub fn show(ctx: &egui::Context, gallery: &GalleryController, textures: &mut TextureCache) -> ModalAction {
    let (Some(project), Some(carousel)) = (gallery.selected_project(), gallery.carousel()) else {
        return ModalAction::None;
    };
    let mut action = ModalAction::None;
    let screen = ctx.screen_rect();

    // Backdrop
    let backdrop = egui::Area::new(egui::Id::new("project_modal_backdrop"))
        .order(egui::Order::Middle)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            let response = ui.allocate_rect(screen, egui::Sense::click());
            ui.painter()
                .rect_filled(screen, 0.0, egui::Color32::from_black_alpha(200));
            response
        })
        .inner;
    if backdrop.clicked() {
        action = ModalAction::Close;
    }

    let width = (screen.width() * 0.85).min(1100.0);
    let media_width = (width - DETAILS_WIDTH - 48.0).max(240.0);

    egui::Area::new(egui::Id::new("project_modal"))
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            egui::Frame::window(ui.style())
                .inner_margin(egui::Margin::same(16.0))
                .show(ui, |ui| {
                    ui.set_width(width);

                    if header(ui, project) {
                        action = ModalAction::Close;
                    }
                    ui.separator();

                    ui.horizontal_top(|ui| {
                        ui.vertical(|ui| {
                            ui.set_width(media_width);
                            if let Some(a) = media_pane(ui, gallery, project, carousel, textures, media_width) {
                                action = a;
                            }
                        });
                        ui.separator();
                        ui.vertical(|ui| {
                            ui.set_width(DETAILS_WIDTH);
                            if details_pane(ui, project) {
                                action = ModalAction::ShowModel;
                            }
                        });
                    });
                });
        });

    action
}

/// Title row. Returns `true` when the close button was clicked.
fn header(ui: &mut egui::Ui, project: &Project) -> bool {
    let mut close = false;
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.heading(egui::RichText::new(&project.title).size(24.0).strong());
            let categories: Vec<&str> = project.categories.iter().map(|c| c.as_str()).collect();
            ui.label(
                egui::RichText::new(format!("📅 {}    🏷 {}", project.year, categories.join(", ")))
                    .color(egui::Color32::from_gray(160)),
            );
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
            close = ui.button(egui::RichText::new("✖").size(18.0)).clicked();
        });
    });
    close
}

fn media_pane(
    ui: &mut egui::Ui,
    gallery: &GalleryController,
    project: &Project,
    carousel: &Carousel,
    textures: &mut TextureCache,
    width: f32,
) -> Option<ModalAction> {
    let mut action = None;
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, width * 9.0 / 16.0), egui::Sense::hover());
    let painter = ui.painter().clone();
    painter.rect_filled(rect, 6.0, egui::Color32::from_gray(35));

    if gallery.shows_model_slot() {
        let subtitle = if gallery.model_viewer_loaded() {
            project.model_url.as_deref().unwrap_or_default()
        } else {
            "Click to load interactive model"
        };
        painter.text(
            rect.center() - egui::vec2(0.0, 30.0),
            egui::Align2::CENTER_CENTER,
            "▶",
            egui::FontId::proportional(32.0),
            ACCENT,
        );
        painter.text(
            rect.center() + egui::vec2(0.0, 10.0),
            egui::Align2::CENTER_CENTER,
            "3D Model Viewer",
            egui::FontId::proportional(16.0),
            egui::Color32::from_gray(170),
        );
        painter.text(
            rect.center() + egui::vec2(0.0, 32.0),
            egui::Align2::CENTER_CENTER,
            subtitle,
            egui::FontId::proportional(12.0),
            egui::Color32::from_gray(120),
        );
    } else {
        let reference = &project.images[carousel.index()];
        match textures.get(ui.ctx(), reference) {
            Some(texture) => {
                painter.image(
                    texture.id(),
                    rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );
            }
            None => {
                let text = if textures.has_failed(reference) {
                    format!("{} - Image {} unavailable", project.title, carousel.index() + 1)
                } else {
                    "Loading...".to_string()
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
    }

    if carousel.has_multiple() {
        // Navigation arrows
        let arrow = egui::vec2(36.0, 36.0);
        let prev_rect = egui::Rect::from_center_size(rect.left_center() + egui::vec2(28.0, 0.0), arrow);
        let next_rect = egui::Rect::from_center_size(rect.right_center() - egui::vec2(28.0, 0.0), arrow);
        if ui.put(prev_rect, egui::Button::new("◀")).clicked() {
            action = Some(ModalAction::Previous);
        }
        if ui.put(next_rect, egui::Button::new("▶")).clicked() {
            action = Some(ModalAction::Next);
        }

        // Image counter
        painter.text(
            rect.right_bottom() - egui::vec2(12.0, 12.0),
            egui::Align2::RIGHT_BOTTOM,
            format!("{} / {}", carousel.index() + 1, carousel.len()),
            egui::FontId::proportional(13.0),
            egui::Color32::WHITE,
        );

        // Thumbnail strip
        ui.add_space(8.0);
        egui::ScrollArea::horizontal()
            .id_source("modal_thumbnails")
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    for (index, image) in project.images.iter().enumerate() {
                        let (thumb, response) = ui.allocate_exact_size(THUMB_SIZE, egui::Sense::click());
                        match textures.get(ui.ctx(), image) {
                            Some(texture) => {
                                ui.painter().image(
                                    texture.id(),
                                    thumb,
                                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                                    egui::Color32::WHITE,
                                );
                            }
                            None => {
                                ui.painter().rect_filled(thumb, 4.0, egui::Color32::from_gray(50));
                            }
                        }
                        let stroke = if index == carousel.index() {
                            egui::Stroke::new(2.0, ACCENT)
                        } else {
                            egui::Stroke::new(1.0, egui::Color32::from_gray(90))
                        };
                        ui.painter().rect_stroke(thumb, 4.0, stroke);

                        if response.on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
                            action = Some(ModalAction::JumpTo(index));
                        }
                    }
                });
            });
    }

    action
}

/// Description, tools, categories and the model button.
/// Returns `true` when "View 3D Model" was clicked.
fn details_pane(ui: &mut egui::Ui, project: &Project) -> bool {
    let mut show_model = false;

    if let Some(description) = &project.description {
        ui.label(egui::RichText::new("Description").strong().size(16.0));
        ui.label(egui::RichText::new(description).color(egui::Color32::from_gray(200)));
        ui.add_space(12.0);
    }

    ui.label(egui::RichText::new("Tools Used").strong().size(16.0));
    ui.horizontal_wrapped(|ui| {
        for tool in &project.tools {
            chip(ui, tool, egui::Color32::from_gray(60));
        }
    });
    ui.add_space(12.0);

    ui.label(egui::RichText::new("Categories").strong().size(16.0));
    ui.horizontal_wrapped(|ui| {
        for category in &project.categories {
            chip(ui, category.as_str(), ACCENT.gamma_multiply(0.4));
        }
    });

    if let Some(video) = &project.video_url {
        ui.add_space(12.0);
        ui.label(egui::RichText::new(format!("🎞 Walkthrough: {video}")).weak());
    }

    if project.model_url.is_some() {
        ui.add_space(16.0);
        let button = egui::Button::new("▶ View 3D Model").min_size(egui::vec2(DETAILS_WIDTH, 32.0));
        show_model = ui.add(button).clicked();
    }

    show_model
}
