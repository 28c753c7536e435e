//! Location history seam: the quiz only ever replaces the current entry.

use url::Url;

/// Browser-style history the quiz writes its position into.
pub trait LocationHistory {
    /// Replace the current entry in place; never pushes a new one.
    fn replace(&mut self, url: &Url);
}

/// In-memory history with push/back/forward, for tests and headless use.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<Url>,
    cursor: usize,
}

impl MemoryHistory {
    #[must_use]
    pub fn new(initial: Url) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    #[must_use]
    pub fn current(&self) -> &Url {
        &self.entries[self.cursor]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Navigate to a new entry, dropping any forward entries.
    pub fn push(&mut self, url: Url) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(url);
        self.cursor = self.entries.len() - 1;
    }

    /// Step back one entry. Returns the new current entry, if it moved.
    pub fn back(&mut self) -> Option<&Url> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }

    /// Step forward one entry. Returns the new current entry, if it moved.
    pub fn forward(&mut self) -> Option<&Url> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor])
    }
}

impl LocationHistory for MemoryHistory {
    fn replace(&mut self, url: &Url) {
        self.entries[self.cursor] = url.clone();
    }
}
