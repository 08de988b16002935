// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Gallery state: active filters, the selected project and its carousel.
//!
//! The controller is a plain state container. Everything the UI shows is
//! derived on read from the catalog and the current state, so there is no
//! cached view to invalidate.

use super::carousel::{Carousel, CarouselState, ModalKey};
use super::filter;
use super::scroll_lock::{ScrollLock, ScrollLockGuard};
use crate::models::{catalog::Catalog, category::Category, project::Project};
use std::num::NonZeroUsize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GalleryError {
    #[error("no project with id '{0}' in the catalog")]
    UnknownProject(String),

    #[error("project '{0}' has no images to show")]
    NoImages(String),
}

/// Everything tied to one open modal. Dropping it closes the modal and
/// releases the scroll lock.
#[derive(Debug)]
struct ModalSession {
    project_id: String,
    carousel: Carousel,
    model_viewer_loaded: bool,
    _scroll_guard: ScrollLockGuard,
}

/// Filter and selection state for the project gallery.
#[derive(Debug)]
pub struct GalleryController {
    catalog: Catalog,
    /// Active labels in the order they were switched on.
    active_filters: Vec<Category>,
    modal: Option<ModalSession>,
    scroll_lock: ScrollLock,
}

impl GalleryController {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            active_filters: Vec::new(),
            modal: None,
            scroll_lock: ScrollLock::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn active_filters(&self) -> &[Category] {
        &self.active_filters
    }

    pub fn is_filter_active(&self, category: &Category) -> bool {
        self.active_filters.contains(category)
    }

    /// Add `category` to the active filters, or remove it if already there.
    pub fn toggle_filter(&mut self, category: Category) {
        match self.active_filters.iter().position(|c| *c == category) {
            Some(at) => {
                self.active_filters.remove(at);
            }
            None => {
                log::debug!("Filter on: {}", category);
                self.active_filters.push(category);
            }
        }
    }

    pub fn clear_filters(&mut self) {
        self.active_filters.clear();
    }

    /// Chip labels, sorted.
    pub fn unique_categories(&self) -> Vec<Category> {
        filter::unique_categories(self.catalog.projects())
    }

    pub fn visible_projects(&self) -> Vec<&Project> {
        filter::filter_projects(self.catalog.projects(), &self.active_filters)
    }

    pub fn result_count(&self) -> usize {
        self.visible_projects().len()
    }

    /// True only when filters are set and none of them match.
    pub fn is_empty_state(&self) -> bool {
        !self.active_filters.is_empty() && self.result_count() == 0
    }

    /// "Showing X of Y projects", with the active filters appended in the
    /// order they were switched on.
    pub fn summary(&self) -> String {
        let mut text = format!(
            "Showing {} of {} projects",
            self.result_count(),
            self.catalog.len()
        );
        if !self.active_filters.is_empty() {
            let labels: Vec<&str> = self.active_filters.iter().map(Category::as_str).collect();
            text.push_str(&format!(" in {}", labels.join(", ")));
        }
        text
    }

    /// Open the modal on project `id`, always at the first image.
    ///
    /// Replaces any session already open, including one on the same project.
    pub fn select_project(&mut self, id: &str) -> Result<(), GalleryError> {
        let project = self
            .catalog
            .get(id)
            .ok_or_else(|| GalleryError::UnknownProject(id.to_string()))?;
        let len = NonZeroUsize::new(project.images.len())
            .ok_or_else(|| GalleryError::NoImages(id.to_string()))?;

        self.modal = Some(ModalSession {
            project_id: project.id.clone(),
            carousel: Carousel::new(len),
            model_viewer_loaded: false,
            _scroll_guard: self.scroll_lock.acquire(),
        });
        log::info!("Opened project '{}'", id);
        Ok(())
    }

    /// Close the modal. Returns the id of the project that was open.
    pub fn close_modal(&mut self) -> Option<String> {
        let session = self.modal.take()?;
        log::info!("Closed project '{}'", session.project_id);
        Some(session.project_id)
    }

    pub fn is_open(&self) -> bool {
        self.modal.is_some()
    }

    pub fn state(&self) -> CarouselState {
        match &self.modal {
            Some(session) => CarouselState::Open {
                project_id: session.project_id.clone(),
                image_index: session.carousel.index(),
            },
            None => CarouselState::Closed,
        }
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.modal
            .as_ref()
            .and_then(|session| self.catalog.get(&session.project_id))
    }

    pub fn carousel(&self) -> Option<&Carousel> {
        self.modal.as_ref().map(|session| &session.carousel)
    }

    pub fn next_image(&mut self) {
        if let Some(session) = self.modal.as_mut() {
            session.carousel.next();
        }
    }

    pub fn prev_image(&mut self) {
        if let Some(session) = self.modal.as_mut() {
            session.carousel.prev();
        }
    }

    /// Jump to image `index` of the open project. See [`Carousel::jump_to`].
    pub fn jump_to(&mut self, index: usize) -> bool {
        self.modal
            .as_mut()
            .is_some_and(|session| session.carousel.jump_to(index))
    }

    /// Route a keyboard signal. Ignored while the modal is closed.
    pub fn handle_key(&mut self, key: ModalKey) {
        if self.modal.is_none() {
            return;
        }
        match key {
            ModalKey::Previous => self.prev_image(),
            ModalKey::Next => self.next_image(),
            ModalKey::Escape => {
                self.close_modal();
            }
        }
    }

    /// Switch the media pane to the 3D model viewer.
    pub fn show_model_viewer(&mut self) {
        if let Some(session) = self.modal.as_mut() {
            session.carousel.jump_to(0);
            session.model_viewer_loaded = true;
        }
    }

    pub fn model_viewer_loaded(&self) -> bool {
        self.modal
            .as_ref()
            .is_some_and(|session| session.model_viewer_loaded)
    }

    /// Whether the media pane shows the 3D model slot instead of an image.
    pub fn shows_model_slot(&self) -> bool {
        match (self.selected_project(), self.carousel()) {
            (Some(project), Some(carousel)) => project.model_url.is_some() && carousel.index() == 0,
            _ => false,
        }
    }

    /// Background scrolling is suspended exactly while the modal is open.
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_lock.is_locked()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::tests::project;
    use crate::models::category::default_categories;

    fn controller() -> GalleryController {
        let mut with_model = project("p3", &["Renders"], 2);
        with_model.model_url = Some("/models/p3.glb".into());
        let catalog = Catalog::new(
            default_categories(),
            vec![
                project("p1", &["Renders", "Schematics"], 3),
                project("p2", &["Simulation"], 1),
                with_model,
            ],
        )
        .unwrap();
        GalleryController::new(catalog)
    }

    fn visible_ids(gallery: &GalleryController) -> Vec<String> {
        gallery.visible_projects().iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_toggle_filter_is_idempotent_pair() {
        let mut gallery = controller();
        gallery.toggle_filter("Simulation".into());
        let before = gallery.active_filters().to_vec();

        gallery.toggle_filter("Renders".into());
        assert!(gallery.is_filter_active(&"Renders".into()));
        gallery.toggle_filter("Renders".into());
        assert_eq!(gallery.active_filters(), before.as_slice());
    }

    #[test]
    fn test_filters_drive_visible_projects() {
        let mut gallery = controller();
        assert_eq!(visible_ids(&gallery), ["p1", "p2", "p3"]);
        assert_eq!(gallery.summary(), "Showing 3 of 3 projects");

        gallery.toggle_filter("Renders".into());
        assert_eq!(visible_ids(&gallery), ["p1", "p3"]);
        assert_eq!(gallery.result_count(), 2);
        assert_eq!(gallery.summary(), "Showing 2 of 3 projects in Renders");

        gallery.clear_filters();
        assert!(gallery.active_filters().is_empty());
        assert_eq!(gallery.result_count(), 3);
    }

    #[test]
    fn test_summary_lists_filters_in_click_order() {
        let mut gallery = controller();
        gallery.toggle_filter("Simulation".into());
        gallery.toggle_filter("Renders".into());
        assert_eq!(gallery.summary(), "Showing 3 of 3 projects in Simulation, Renders");

        gallery.toggle_filter("Simulation".into());
        gallery.toggle_filter("Simulation".into());
        assert_eq!(gallery.summary(), "Showing 3 of 3 projects in Renders, Simulation");
    }

    #[test]
    fn test_empty_state_needs_active_filters() {
        let mut gallery = controller();
        assert!(!gallery.is_empty_state());

        gallery.toggle_filter("Prototyping".into());
        assert_eq!(gallery.result_count(), 0);
        assert!(gallery.is_empty_state());

        let empty = GalleryController::new(Catalog::default());
        assert_eq!(empty.result_count(), 0);
        assert!(!empty.is_empty_state());
    }

    #[test]
    fn test_arbitrary_filter_label_is_tolerated() {
        let mut gallery = controller();
        gallery.toggle_filter("Not A Category".into());
        assert!(gallery.is_empty_state());
        assert!(gallery.unique_categories().iter().all(|c| c.as_str() != "Not A Category"));
    }

    #[test]
    fn test_select_and_close() {
        let mut gallery = controller();
        assert_eq!(gallery.state(), CarouselState::Closed);
        assert!(!gallery.is_scroll_locked());

        gallery.select_project("p1").unwrap();
        assert_eq!(
            gallery.state(),
            CarouselState::Open {
                project_id: "p1".into(),
                image_index: 0
            }
        );
        assert_eq!(gallery.selected_project().map(|p| p.id.as_str()), Some("p1"));
        assert!(gallery.is_scroll_locked());

        assert_eq!(gallery.close_modal().as_deref(), Some("p1"));
        assert_eq!(gallery.state(), CarouselState::Closed);
        assert!(gallery.selected_project().is_none());
        assert!(!gallery.is_scroll_locked());
        assert!(gallery.close_modal().is_none());
    }

    #[test]
    fn test_reopen_resets_index() {
        let mut gallery = controller();
        gallery.select_project("p1").unwrap();
        gallery.next_image();
        gallery.next_image();
        assert_eq!(gallery.carousel().map(Carousel::index), Some(2));

        gallery.close_modal();
        gallery.select_project("p1").unwrap();
        assert_eq!(gallery.carousel().map(Carousel::index), Some(0));
    }

    #[test]
    fn test_select_while_open_resets_index() {
        let mut gallery = controller();
        gallery.select_project("p1").unwrap();
        gallery.jump_to(2);

        gallery.select_project("p1").unwrap();
        assert_eq!(gallery.carousel().map(Carousel::index), Some(0));

        gallery.next_image();
        gallery.select_project("p3").unwrap();
        assert_eq!(
            gallery.state(),
            CarouselState::Open {
                project_id: "p3".into(),
                image_index: 0
            }
        );
        assert!(gallery.is_scroll_locked());

        gallery.close_modal();
        assert!(!gallery.is_scroll_locked());
    }

    #[test]
    fn test_select_unknown_project_keeps_state() {
        let mut gallery = controller();
        gallery.select_project("p1").unwrap();
        gallery.next_image();

        let err = gallery.select_project("nope").unwrap_err();
        assert_eq!(err, GalleryError::UnknownProject("nope".into()));
        assert_eq!(
            gallery.state(),
            CarouselState::Open {
                project_id: "p1".into(),
                image_index: 1
            }
        );
    }

    #[test]
    fn test_keys_ignored_while_closed() {
        let mut gallery = controller();
        gallery.handle_key(ModalKey::Next);
        gallery.handle_key(ModalKey::Escape);
        assert_eq!(gallery.state(), CarouselState::Closed);
        assert!(!gallery.jump_to(0));
    }

    #[test]
    fn test_keys_navigate_and_close() {
        let mut gallery = controller();
        gallery.select_project("p1").unwrap();

        gallery.handle_key(ModalKey::Previous);
        assert_eq!(gallery.carousel().map(Carousel::index), Some(2));
        gallery.handle_key(ModalKey::Next);
        assert_eq!(gallery.carousel().map(Carousel::index), Some(0));

        gallery.handle_key(ModalKey::Escape);
        assert!(!gallery.is_open());
        assert!(!gallery.is_scroll_locked());
    }

    #[test]
    fn test_single_image_project_navigation() {
        let mut gallery = controller();
        gallery.select_project("p2").unwrap();
        gallery.handle_key(ModalKey::Next);
        gallery.handle_key(ModalKey::Previous);
        assert_eq!(gallery.carousel().map(Carousel::index), Some(0));
    }

    #[test]
    fn test_model_slot() {
        let mut gallery = controller();
        gallery.select_project("p3").unwrap();
        assert!(gallery.shows_model_slot());
        assert!(!gallery.model_viewer_loaded());

        gallery.next_image();
        assert!(!gallery.shows_model_slot());

        gallery.show_model_viewer();
        assert!(gallery.shows_model_slot());
        assert!(gallery.model_viewer_loaded());

        gallery.select_project("p3").unwrap();
        assert!(!gallery.model_viewer_loaded());

        gallery.select_project("p1").unwrap();
        assert!(!gallery.shows_model_slot());
    }

    #[test]
    fn test_dropping_controller_releases_scroll_lock() {
        let mut gallery = controller();
        let lock = gallery.scroll_lock.clone();
        gallery.select_project("p1").unwrap();
        assert!(lock.is_locked());
        drop(gallery);
        assert!(!lock.is_locked());
    }
}
