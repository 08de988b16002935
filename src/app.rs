// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the main application structure that implements
//! the egui::App trait. It owns the gallery and contact controllers and
//! applies the actions reported by the UI components.

use crate::contact::{ContactController, FormRelay};
use crate::gallery::{GalleryController, ModalKey};
use crate::models::catalog::Catalog;
use crate::ui::gallery::GalleryAction;
use crate::ui::modal::ModalAction;
use crate::ui::sections::{self, Section};
use crate::ui::textures::TextureCache;
use crate::ui::{contact, gallery, modal};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;
use std::time::Duration;

const KEY_BINDINGS: [(egui::Key, ModalKey); 3] = [
    (egui::Key::ArrowLeft, ModalKey::Previous),
    (egui::Key::ArrowRight, ModalKey::Next),
    (egui::Key::Escape, ModalKey::Escape),
];

/// Main application state.
pub struct PortfolioApp {
    /// Filters, selection and carousel
    gallery: GalleryController,

    /// Contact form and its in-flight submission
    contact: ContactController,

    /// Decoded covers and carousel images
    textures: TextureCache,

    /// Section a navigation button asked to scroll to
    pending_section: Option<Section>,

    /// Receiver for background catalog loading
    catalog_loader: Option<Receiver<Result<Catalog, String>>>,

    /// Loading state message
    loading_message: Option<String>,

    /// Last catalog error, shown in the status bar
    error_message: Option<String>,
}

impl PortfolioApp {
    /// Create the application around an already validated catalog.
    pub fn new(catalog: Catalog, assets: PathBuf, relay: Arc<dyn FormRelay>) -> Self {
        Self {
            gallery: GalleryController::new(catalog),
            contact: ContactController::new(relay),
            textures: TextureCache::new(assets),
            pending_section: None,
            catalog_loader: None,
            loading_message: None,
            error_message: None,
        }
    }

    /// Load another catalog file in the background.
    fn open_catalog(&mut self, path: PathBuf, ctx: &egui::Context) {
        let (sender, receiver) = channel();
        self.catalog_loader = Some(receiver);
        self.loading_message = Some("Loading catalog...".to_string());
        let ctx = ctx.clone();

        std::thread::spawn(move || {
            let result = crate::io::serialization::load_catalog(&path).map_err(|e| format!("{:#}", e));
            let _ = sender.send(result);
            ctx.request_repaint();
        });
    }

    /// Swap in a freshly loaded catalog. Dropping the old controller closes
    /// any open modal.
    fn replace_catalog(&mut self, catalog: Catalog) {
        self.gallery = GalleryController::new(catalog);
        self.textures.clear();
        self.error_message = None;
    }

    fn apply_gallery_action(&mut self, action: GalleryAction) {
        match action {
            GalleryAction::ToggleFilter(category) => self.gallery.toggle_filter(category),
            GalleryAction::ClearFilters => self.gallery.clear_filters(),
            GalleryAction::OpenProject(id) => {
                if let Err(e) = self.gallery.select_project(&id) {
                    log::warn!("{}", e);
                }
            }
            GalleryAction::None => {}
        }
    }

    fn apply_modal_action(&mut self, action: ModalAction) {
        match action {
            ModalAction::Close => {
                self.gallery.close_modal();
            }
            ModalAction::Previous => self.gallery.prev_image(),
            ModalAction::Next => self.gallery.next_image(),
            ModalAction::JumpTo(index) => {
                self.gallery.jump_to(index);
            }
            ModalAction::ShowModel => self.gallery.show_model_viewer(),
            ModalAction::None => {}
        }
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for a completed catalog load
        if let Some(ref receiver) = self.catalog_loader {
            if let Ok(result) = receiver.try_recv() {
                self.catalog_loader = None;
                self.loading_message = None;

                match result {
                    Ok(catalog) => {
                        log::info!("Catalog loaded, {} projects", catalog.len());
                        self.replace_catalog(catalog);
                    }
                    Err(e) => {
                        log::error!("Failed to load catalog: {}", e);
                        self.error_message = Some(e);
                    }
                }
            }
        }

        // Pick up the contact relay answer
        self.contact.poll();
        if self.contact.is_submitting() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Catalog...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Catalog", &["yaml", "yml", "json"])
                            .pick_file()
                        {
                            self.open_catalog(path, ctx);
                        }
                        ui.close_menu();
                    }
                    if ui.button("Built-in Catalog").clicked() {
                        match crate::io::serialization::builtin_catalog() {
                            Ok(catalog) => self.replace_catalog(catalog),
                            Err(e) => self.error_message = Some(format!("{:#}", e)),
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Go", |ui| {
                    for (name, section) in [
                        ("Top", Section::Top),
                        ("About", Section::About),
                        ("Projects", Section::Projects),
                        ("Contact", Section::Contact),
                    ] {
                        if ui.button(name).clicked() {
                            self.pending_section = Some(section);
                            ui.close_menu();
                        }
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let catalog = self.gallery.catalog();
                ui.label(format!(
                    "{} projects, {} categories",
                    catalog.len(),
                    catalog.categories().len()
                ));
                if self.textures.is_loading() {
                    ui.separator();
                    ui.spinner();
                    ui.label("Loading images...");
                }
                if let Some(ref error) = self.error_message {
                    ui.separator();
                    ui.colored_label(egui::Color32::from_rgb(248, 113, 113), error.as_str());
                }
            });
        });

        // Modal keyboard navigation; text fields keep their arrow keys
        if !ctx.wants_keyboard_input() {
            for (key, modal_key) in KEY_BINDINGS {
                if ctx.input(|i| i.key_pressed(key)) {
                    self.gallery.handle_key(modal_key);
                }
            }
        }

        // Page content
        let mut gallery_action = GalleryAction::None;
        let mut submit = false;
        let mut nav = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(ref message) = self.loading_message {
                ui.centered_and_justified(|ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(20.0);
                        ui.spinner();
                        ui.add_space(10.0);
                        ui.label(
                            egui::RichText::new(message)
                                .size(16.0)
                                .color(egui::Color32::from_gray(200)),
                        );
                    });
                });
                return;
            }

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .enable_scrolling(!self.gallery.is_scroll_locked())
                .show(ui, |ui| {
                    let pending = &mut self.pending_section;

                    sections::anchor(ui, Section::Top, pending);
                    if let Some(target) = sections::hero(ui) {
                        nav = Some(target);
                    }

                    sections::anchor(ui, Section::About, pending);
                    sections::about(ui);
                    ui.add_space(48.0);

                    sections::anchor(ui, Section::Projects, pending);
                    gallery_action = gallery::show(ui, &self.gallery, &mut self.textures);
                    ui.add_space(48.0);

                    sections::anchor(ui, Section::Contact, pending);
                    submit = contact::show(ui, &mut self.contact);
                    ui.add_space(48.0);

                    if let Some(target) = sections::footer(ui) {
                        nav = Some(target);
                    }
                });
        });

        // Project modal on top of everything else
        let modal_action = modal::show(ctx, &self.gallery, &mut self.textures);

        self.apply_gallery_action(gallery_action);
        self.apply_modal_action(modal_action);
        if submit {
            self.contact.submit();
        }
        if nav.is_some() {
            self.pending_section = nav;
        }
    }
}
