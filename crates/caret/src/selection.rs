//! Selection inside a native text-entry control.

/// A selection in a text control, measured in characters.
///
/// The range is always normalized such that `start <= end`. A collapsed
/// range (`start == end`) is a plain caret.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionRange {
    /// Start character offset of the selection (inclusive).
    pub start: usize,
    /// End character offset of the selection (exclusive).
    pub end: usize,
}

impl SelectionRange {
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    #[inline]
    pub fn caret(at: usize) -> Self {
        Self { start: at, end: at }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Clamp both ends to a value of `char_len` characters.
    #[inline]
    pub fn clamped(self, char_len: usize) -> Self {
        Self::new(self.start.min(char_len), self.end.min(char_len))
    }
}
