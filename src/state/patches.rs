//! Mission patch images for launch cards
//!
//! Patches are downloaded lazily the first time a card asks for them, decoded
//! off the UI thread and uploaded as egui textures when polled. A failed
//! patch is remembered so the card falls back to its placeholder instead of
//! retrying every frame.

use anyhow::Result;
use eframe::egui;
use std::collections::HashMap;

use crate::api::SpaceXClient;
use crate::state::StateEvent;
use crate::task::{BackgroundTask, PollResult};

enum PatchSlot {
    Loading(BackgroundTask<Result<egui::ColorImage>>),
    Ready(egui::TextureHandle),
    Failed,
}

/// Cache of patch textures keyed by image URL
pub struct PatchImages {
    client: SpaceXClient,
    slots: HashMap<String, PatchSlot>,
}

impl PatchImages {
    pub fn new(client: SpaceXClient) -> Self {
        Self {
            client,
            slots: HashMap::new(),
        }
    }

    /// Texture for `url`, starting a download on first request
    pub fn texture(&mut self, url: &str) -> Option<egui::TextureHandle> {
        match self.slots.get(url) {
            Some(PatchSlot::Ready(texture)) => Some(texture.clone()),
            Some(PatchSlot::Loading(_)) | Some(PatchSlot::Failed) => None,
            None => {
                let client = self.client.clone();
                let owned_url = url.to_string();
                let mut task = BackgroundTask::default();
                task.spawn(async move {
                    let bytes = client.fetch_bytes(&owned_url).await?;
                    tokio::task::spawn_blocking(move || decode_patch(&bytes)).await?
                });
                self.slots.insert(url.to_string(), PatchSlot::Loading(task));
                None
            }
        }
    }

    /// Upload finished downloads as textures
    pub fn poll(&mut self, ctx: &egui::Context) -> Vec<StateEvent> {
        let mut events = Vec::new();
        let mut pending = false;

        for (url, slot) in self.slots.iter_mut() {
            let PatchSlot::Loading(task) = slot else {
                continue;
            };

            match task.poll() {
                PollResult::Complete(Ok(Ok(image))) => {
                    let texture = ctx.load_texture(url.clone(), image, egui::TextureOptions::LINEAR);
                    *slot = PatchSlot::Ready(texture);
                }
                PollResult::Complete(Ok(Err(e))) => {
                    events.push(StateEvent::LogError(format!("Failed to load patch {}: {}", url, e)));
                    *slot = PatchSlot::Failed;
                }
                PollResult::Complete(Err(e)) => {
                    events.push(StateEvent::LogError(format!("Patch task failed for {}: {}", url, e)));
                    *slot = PatchSlot::Failed;
                }
                PollResult::Pending => pending = true,
                PollResult::NoTask => *slot = PatchSlot::Failed,
            }
        }

        if pending {
            ctx.request_repaint();
        }
        events
    }
}

/// Decode PNG bytes into an egui image
pub fn decode_patch(bytes: &[u8]) -> Result<egui::ColorImage> {
    let image = image::load_from_memory(bytes)?.into_rgba8();
    let (width, height) = image.dimensions();
    Ok(egui::ColorImage::from_rgba_unmultiplied(
        [width as usize, height as usize],
        image.as_raw(),
    ))
}
