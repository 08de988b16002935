// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Lazily loaded textures for covers, carousel images and thumbnails.
//!
//! Each media reference is decoded once on a background thread; the result
//! comes back over a channel and is uploaded on the UI thread.

use crate::io::media::{self, LoadedImage, MediaError};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, TryRecvError};

enum Slot {
    Loading(Receiver<Result<LoadedImage, MediaError>>),
    Ready(egui::TextureHandle),
    Failed,
}

pub struct TextureCache {
    root: PathBuf,
    slots: HashMap<String, Slot>,
}

impl TextureCache {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            slots: HashMap::new(),
        }
    }

    /// Texture for `reference`, or `None` while it is loading or if it failed.
    pub fn get(&mut self, ctx: &egui::Context, reference: &str) -> Option<egui::TextureHandle> {
        if !self.slots.contains_key(reference) {
            self.start_load(ctx, reference);
            return None;
        }

        let slot = self.slots.get_mut(reference)?;
        let next = match &mut *slot {
            Slot::Loading(receiver) => match receiver.try_recv() {
                Ok(Ok(loaded)) => Some(Slot::Ready(upload(ctx, reference, loaded))),
                Ok(Err(e)) => {
                    log::warn!("Failed to load {}: {}", reference, e);
                    Some(Slot::Failed)
                }
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => Some(Slot::Failed),
            },
            _ => None,
        };
        if let Some(next) = next {
            *slot = next;
        }

        match &*slot {
            Slot::Ready(texture) => Some(texture.clone()),
            _ => None,
        }
    }

    /// Whether `reference` has been tried and could not be loaded.
    pub fn has_failed(&self, reference: &str) -> bool {
        matches!(self.slots.get(reference), Some(Slot::Failed))
    }

    pub fn is_loading(&self) -> bool {
        self.slots.values().any(|slot| matches!(slot, Slot::Loading(_)))
    }

    /// Forget everything, e.g. after switching catalogs.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    fn start_load(&mut self, ctx: &egui::Context, reference: &str) {
        let (sender, receiver) = channel();
        let path = media::resolve_asset(&self.root, reference);
        let ctx = ctx.clone();

        std::thread::spawn(move || {
            let result = media::load_image(&path);
            if let Ok(ref img) = result {
                log::info!("Loaded image: {} ({}x{})", path.display(), img.width, img.height);
            }
            let _ = sender.send(result);
            ctx.request_repaint();
        });

        self.slots.insert(reference.to_string(), Slot::Loading(receiver));
    }
}

fn upload(ctx: &egui::Context, name: &str, loaded: LoadedImage) -> egui::TextureHandle {
    let size = [loaded.width as usize, loaded.height as usize];
    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &loaded.pixels);
    ctx.load_texture(name, color_image, egui::TextureOptions::LINEAR)
}
