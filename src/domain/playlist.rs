// SPDX-License-Identifier: MPL-2.0
//! Ordered playback queue with a current-item cursor.
//!
//! Insertion order is playback order. The cursor satisfies
//! `0 <= current < len` whenever the playlist is non-empty and only ever
//! moves forward: `open_new` resets it, `advance` increments it, nothing
//! else touches it.

use crate::domain::media::MediaSource;
use crate::error::PlaylistError;

#[derive(Debug, Clone, Default)]
pub struct Playlist {
    items: Vec<MediaSource>,
    current: usize,
}

impl Playlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the playlist wholesale and resets the cursor to the first
    /// item, returning it.
    pub fn open_new(
        &mut self,
        sources: Vec<MediaSource>,
    ) -> Result<&MediaSource, PlaylistError> {
        if sources.is_empty() {
            return Err(PlaylistError::Empty);
        }
        self.items = sources;
        self.current = 0;
        Ok(&self.items[0])
    }

    /// Returns the item under the cursor.
    pub fn current(&self) -> Result<&MediaSource, PlaylistError> {
        self.items.get(self.current).ok_or(PlaylistError::NoCurrent)
    }

    /// Moves the cursor to the next item and returns it, or returns `None`
    /// and leaves the cursor untouched when already at the last item.
    /// There is no wrap-around.
    pub fn advance(&mut self) -> Option<&MediaSource> {
        if self.current + 1 < self.items.len() {
            self.current += 1;
            self.items.get(self.current)
        } else {
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Cursor position, absent while the playlist is empty.
    pub fn current_index(&self) -> Option<usize> {
        (!self.items.is_empty()).then_some(self.current)
    }
}
