//! Legacy text-range model: a character span over one element's text.

/// Granularity for [`TextRange::move_start`] / [`TextRange::move_end`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextUnit {
    Character,
}

/// A span of an element's flattened text, in characters.
///
/// Created by a host spanning the whole text, then narrowed with
/// [`collapse`](Self::collapse) and the `move_*` calls. Ends never leave
/// `0..=len` and `start <= end` always holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextRange {
    start: usize,
    end: usize,
    len: usize,
}

impl TextRange {
    /// Range covering all `len` characters.
    pub fn spanning(len: usize) -> Self {
        Self {
            start: 0,
            end: len,
            len,
        }
    }

    /// Range over `len` characters with explicit ends, clamped and ordered.
    pub fn with_bounds(len: usize, start: usize, end: usize) -> Self {
        let start = start.min(len);
        let end = end.min(len).max(start);
        Self { start, end, len }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Character length of the underlying text.
    pub fn text_len(&self) -> usize {
        self.len
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// Collapse onto the start (`to_start`) or the end.
    pub fn collapse(&mut self, to_start: bool) {
        if to_start {
            self.end = self.start;
        } else {
            self.start = self.end;
        }
    }

    /// Move the start forward by `count` units. Returns how far it moved.
    ///
    /// Pushing the start past the end drags the end along.
    pub fn move_start(&mut self, unit: TextUnit, count: usize) -> usize {
        let TextUnit::Character = unit;
        let target = self.start.saturating_add(count).min(self.len);
        let moved = target - self.start;
        self.start = target;
        if self.end < self.start {
            self.end = self.start;
        }
        moved
    }

    /// Move the end forward by `count` units. Returns how far it moved.
    pub fn move_end(&mut self, unit: TextUnit, count: usize) -> usize {
        let TextUnit::Character = unit;
        let target = self.end.saturating_add(count).min(self.len);
        let moved = target - self.end;
        self.end = target;
        moved
    }
}
