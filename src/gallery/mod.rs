// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project gallery: category filters and the modal image carousel.

pub mod carousel;
pub mod controller;
pub mod filter;
pub mod scroll_lock;

pub use carousel::{Carousel, CarouselState, ModalKey};
pub use controller::{GalleryController, GalleryError};
