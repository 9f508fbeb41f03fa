// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! UTF-16 indexed text storage.

use std::ops::Range;

/// Length of `text` in UTF-16 code units.
pub fn utf16_len(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}

/// Byte index of the UTF-16 `offset`, snapped down to a char boundary.
///
/// Offsets past the end map to `text.len()`.
pub fn byte_index(text: &str, offset: usize) -> usize {
    let mut units = 0;
    for (byte, ch) in text.char_indices() {
        let next = units + ch.len_utf16();
        if next > offset {
            return byte;
        }
        units = next;
    }
    text.len()
}

/// Snap a UTF-16 offset down to the nearest character boundary.
pub fn snap_offset(text: &str, offset: usize) -> usize {
    utf16_len(&text[..byte_index(text, offset)])
}

/// Every character boundary of `text` in UTF-16 units, from 0 to the end.
pub fn char_boundaries(text: &str) -> impl Iterator<Item = usize> + '_ {
    std::iter::once(0).chain(text.chars().scan(0, |units, ch| {
        *units += ch.len_utf16();
        Some(*units)
    }))
}

/// The text content of an editable field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in UTF-16 code units.
    pub fn len(&self) -> usize {
        utf16_len(&self.text)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn set(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }

    /// The text before `offset`.
    pub fn prefix(&self, offset: usize) -> &str {
        &self.text[..byte_index(&self.text, offset)]
    }

    /// Replace a UTF-16 range, returning the offset just after the
    /// inserted text.
    pub fn replace(&mut self, range: Range<usize>, with: &str) -> usize {
        let start = byte_index(&self.text, range.start);
        let end = byte_index(&self.text, range.end.max(range.start));
        self.text.replace_range(start..end, with);
        utf16_len(&self.text[..start]) + utf16_len(with)
    }

    /// Offset of the character boundary before `offset`.
    pub fn prev_boundary(&self, offset: usize) -> usize {
        let offset = snap_offset(&self.text, offset);
        char_boundaries(&self.text)
            .take_while(|&b| b < offset)
            .last()
            .unwrap_or(0)
    }

    /// Offset of the character boundary after `offset`.
    pub fn next_boundary(&self, offset: usize) -> usize {
        char_boundaries(&self.text)
            .find(|&b| b > offset)
            .unwrap_or_else(|| self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf16_lengths() {
        assert_eq!(utf16_len("abc"), 3);
        assert_eq!(utf16_len("é"), 1);
        assert_eq!(utf16_len("😀"), 2);
    }

    #[test]
    fn byte_index_snaps_inside_surrogate_pair() {
        let text = "a😀b";
        assert_eq!(byte_index(text, 0), 0);
        assert_eq!(byte_index(text, 1), 1);
        assert_eq!(byte_index(text, 2), 1);
        assert_eq!(byte_index(text, 3), 5);
        assert_eq!(byte_index(text, 4), 6);
        assert_eq!(byte_index(text, 99), 6);
        assert_eq!(snap_offset(text, 2), 1);
    }

    #[test]
    fn boundaries_skip_pair_middles() {
        let b: Vec<usize> = char_boundaries("a😀b").collect();
        assert_eq!(b, vec![0, 1, 3, 4]);
        let empty: Vec<usize> = char_boundaries("").collect();
        assert_eq!(empty, vec![0]);
    }

    #[test]
    fn replace_returns_caret_after_insert() {
        let mut buf = TextBuffer::new();
        buf.set("hello");
        let caret = buf.replace(1..4, "EY");
        assert_eq!(buf.as_str(), "hEYo");
        assert_eq!(caret, 3);
    }

    #[test]
    fn boundary_steps() {
        let mut buf = TextBuffer::new();
        buf.set("a😀b");
        assert_eq!(buf.next_boundary(1), 3);
        assert_eq!(buf.prev_boundary(3), 1);
        assert_eq!(buf.prev_boundary(0), 0);
        assert_eq!(buf.next_boundary(4), 4);
        assert_eq!(buf.prefix(3), "a😀");
    }
}
