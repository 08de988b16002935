// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Image carousel navigation for an open project.
//!
//! A [`Carousel`] only exists while the modal is open, and it always starts
//! at the first image. Navigation wraps in both directions.

use std::num::NonZeroUsize;

/// Snapshot of the modal state as seen by the rendering surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselState {
    Closed,
    Open { project_id: String, image_index: usize },
}

impl CarouselState {
    pub fn is_open(&self) -> bool {
        matches!(self, CarouselState::Open { .. })
    }
}

/// Keyboard signals the modal reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKey {
    Previous,
    Next,
    Escape,
}

/// Position within one project's image list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: NonZeroUsize,
}

impl Carousel {
    /// Start at the first of `len` images.
    pub fn new(len: NonZeroUsize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len.get()
    }

    /// Always `false`: a carousel holds at least one image.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether prev/next can move at all.
    pub fn has_multiple(&self) -> bool {
        self.len.get() > 1
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len.get();
    }

    pub fn prev(&mut self) {
        let len = self.len.get();
        self.index = (self.index + len - 1) % len;
    }

    /// Jump straight to image `index`.
    ///
    /// Callers only build indices from the image list itself, so an
    /// out-of-range index is a bug on their side. It is rejected: the
    /// position stays where it was and `false` is returned.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.len.get() {
            log::warn!("Ignoring carousel jump to {} of {}", index, self.len);
            return false;
        }
        self.index = index;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(len: usize) -> Carousel {
        Carousel::new(NonZeroUsize::new(len).unwrap())
    }

    #[test]
    fn test_next_and_prev_wrap() {
        // images = [A, B, C]
        let mut c = carousel(3);
        assert_eq!(c.index(), 0);
        c.next();
        assert_eq!(c.index(), 1);
        c.next();
        assert_eq!(c.index(), 2);
        c.next();
        assert_eq!(c.index(), 0);
        c.prev();
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_wrap_law() {
        for len in 1..=7 {
            let mut c = carousel(len);
            for _ in 0..len {
                c.next();
            }
            assert_eq!(c.index(), 0, "len {len}");

            c.prev();
            assert_eq!(c.index(), len - 1, "len {len}");
        }
    }

    #[test]
    fn test_single_image_navigation_is_noop() {
        let mut c = carousel(1);
        assert!(!c.has_multiple());
        assert_eq!(c.len(), 1);
        assert!(!c.is_empty());
        c.next();
        assert_eq!(c.index(), 0);
        c.prev();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_jump_to_bounds() {
        let mut c = carousel(3);
        assert!(c.jump_to(2));
        assert_eq!(c.index(), 2);
        assert!(!c.jump_to(3));
        assert_eq!(c.index(), 2);
        assert!(c.jump_to(0));
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_state_is_open() {
        assert!(!CarouselState::Closed.is_open());
        let open = CarouselState::Open {
            project_id: "p".into(),
            image_index: 0,
        };
        assert!(open.is_open());
    }
}
