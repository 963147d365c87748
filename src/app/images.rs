//! Image loading status per catalog card.
//!
//! Downloads are performed by the host. This module only tracks where each card
//! stands so the renderer can choose between the placeholder and the loaded
//! image. A failed download is never retried; the card keeps its placeholder.

use crate::domain::CatalogItem;
use std::collections::HashMap;
use uuid::Uuid;

/// Loading state of one card image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageStatus {
    /// No request issued yet.
    #[default]
    NotRequested,
    /// Request issued, waiting for the host.
    Pending,
    /// Host returned the image.
    Loaded {
        /// Size of the downloaded body.
        bytes: usize,
    },
    /// Host reported a failure; `status` is the HTTP status when one was received.
    Failed { status: Option<u16> },
}

impl ImageStatus {
    /// Whether the placeholder is shown instead of the image.
    #[must_use]
    pub const fn shows_placeholder(self) -> bool {
        self.loaded_bytes().is_none()
    }

    /// Body size once the image is loaded.
    #[must_use]
    pub const fn loaded_bytes(self) -> Option<usize> {
        match self {
            Self::Loaded { bytes } => Some(bytes),
            _ => None,
        }
    }
}

/// Image status for every card that has an image reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageBoard {
    statuses: HashMap<Uuid, ImageStatus>,
}

impl ImageBoard {
    /// Starts tracking every item that has an image reference.
    #[must_use]
    pub fn for_items(items: &[CatalogItem]) -> Self {
        let statuses = items
            .iter()
            .filter(|item| item.image_reference.is_some())
            .map(|item| (item.id, ImageStatus::NotRequested))
            .collect();
        Self { statuses }
    }

    /// Status of a card; cards without a reference report `None`.
    #[must_use]
    pub fn status(&self, id: &Uuid) -> Option<ImageStatus> {
        self.statuses.get(id).copied()
    }

    /// Marks the card pending if nothing was requested yet.
    ///
    /// Returns `true` when a request should be issued.
    pub fn begin(&mut self, id: &Uuid) -> bool {
        match self.statuses.get_mut(id) {
            Some(status @ ImageStatus::NotRequested) => {
                *status = ImageStatus::Pending;
                true
            }
            _ => false,
        }
    }

    /// Records the outcome of a request. Unknown cards are ignored.
    ///
    /// Returns `true` when the status changed.
    pub fn resolve(&mut self, id: &Uuid, outcome: ImageStatus) -> bool {
        match self.statuses.get_mut(id) {
            Some(status) if *status != outcome => {
                *status = outcome;
                true
            }
            _ => false,
        }
    }
}

/// Formats a byte count the way the image badge shows it.
#[must_use]
pub fn format_size(bytes: usize) -> String {
    const KIB: usize = 1024;
    if bytes < KIB {
        format!("{bytes} B")
    } else if bytes < KIB * KIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / (KIB * KIB) as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::build_catalog;

    #[test]
    fn tracks_only_items_with_references() {
        let mut items = build_catalog(&["Apple", "Kiwi"], "https://img.example/?");
        items[1].image_reference = None;
        let board = ImageBoard::for_items(&items);
        assert_eq!(board.status(&items[0].id), Some(ImageStatus::NotRequested));
        assert_eq!(board.status(&items[1].id), None);
    }

    #[test]
    fn begin_only_once() {
        let items = build_catalog(&["Apple"], "https://img.example/?");
        let mut board = ImageBoard::for_items(&items);
        assert!(board.begin(&items[0].id));
        assert!(!board.begin(&items[0].id));
        assert_eq!(board.status(&items[0].id), Some(ImageStatus::Pending));
    }

    #[test]
    fn failure_keeps_placeholder() {
        let items = build_catalog(&["Apple"], "https://img.example/?");
        let mut board = ImageBoard::for_items(&items);
        board.begin(&items[0].id);
        assert!(board.resolve(&items[0].id, ImageStatus::Failed { status: Some(404) }));
        assert!(board.status(&items[0].id).unwrap().shows_placeholder());
        assert!(!board.begin(&items[0].id));
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut board = ImageBoard::default();
        assert!(!board.resolve(&Uuid::new_v4(), ImageStatus::Loaded { bytes: 1 }));
    }

    #[test]
    fn sizes_are_human_readable() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }
}
