//! Eager segment cursors
//!
//! A cursor decodes its whole string up front and then walks segment by
//! segment, running the same transitions as the resumable scanners with the
//! decoded code points as lookahead. Both ways of scanning therefore produce
//! identical segments.

use std::marker::PhantomData;

use crate::config::WidthConfig;
use crate::rules::{
    BreakClass, GraphemeRules, LineRules, Segmentation, SentenceRules, WordRules,
};
use crate::width::width_of;

/// Cursor over the segments of one family
#[derive(Debug, Clone)]
pub struct Segments<'a, R: Segmentation> {
    text: &'a str,
    code_points: Vec<char>,
    /// Byte offset of every code point, plus the text length
    offsets: Vec<usize>,
    start: usize,
    end: usize,
    pos: usize,
    state: R::State,
    /// Decision at `end`, the close of the current segment
    action: BreakClass,
    _rules: PhantomData<R>,
}

/// Cursor over extended grapheme clusters
pub type Graphemes<'a> = Segments<'a, GraphemeRules>;
/// Cursor over word-boundary segments
pub type Words<'a> = Segments<'a, WordRules>;
/// Cursor over sentences
pub type Sentences<'a> = Segments<'a, SentenceRules>;
/// Cursor over the spans between line break opportunities
pub type LineSegments<'a> = Segments<'a, LineRules>;

impl<'a, R: Segmentation> Segments<'a, R> {
    pub fn new(text: &'a str) -> Self {
        let (mut offsets, code_points): (Vec<usize>, Vec<char>) = text.char_indices().unzip();
        offsets.push(text.len());

        let mut cursor = Self {
            text,
            code_points,
            offsets,
            start: 0,
            end: 0,
            pos: 0,
            state: R::State::default(),
            action: BreakClass::Prohibited,
            _rules: PhantomData,
        };
        cursor.seek_boundary();
        cursor
    }

    /// Move `pos` past the next boundary and record it as `end`
    fn seek_boundary(&mut self) {
        loop {
            let Some(&cp) = self.code_points.get(self.pos) else {
                if self.pos == self.code_points.len() {
                    self.end = self.pos;
                    self.action = BreakClass::Mandatory;
                    self.pos += 1;
                }
                return;
            };

            let after = &self.code_points[self.pos + 1..];
            let (state, action) = R::transition(self.state, cp, after);
            self.state = state;
            self.pos += 1;

            // sot is always a boundary
            if self.pos == 1 || action.is_break() {
                self.end = self.pos - 1;
                self.action = action;
                return;
            }
        }
    }

    /// Move to the next segment; `false` once the text is exhausted
    pub fn advance(&mut self) -> bool {
        self.start = self.end;
        self.seek_boundary();
        self.start != self.end
    }

    /// Code points of the current segment
    pub fn code_points(&self) -> &[char] {
        &self.code_points[self.start..self.end]
    }

    pub fn as_str(&self) -> &'a str {
        let (start, end) = self.positions();
        &self.text[start..end]
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.as_str().as_bytes()
    }

    /// Byte offsets of the current segment
    ///
    /// `(0, 0)` before the first [`advance`](Self::advance), `(len, len)`
    /// once the text is exhausted.
    pub fn positions(&self) -> (usize, usize) {
        (self.offsets[self.start], self.offsets[self.end])
    }

    /// Rewind to before the first segment
    pub fn reset(&mut self) {
        self.start = 0;
        self.end = 0;
        self.pos = 0;
        self.state = R::State::default();
        self.action = BreakClass::Prohibited;
        self.seek_boundary();
    }
}

impl<'a> Segments<'a, GraphemeRules> {
    /// Monospace width of the current cluster
    pub fn width(&self) -> usize {
        width_of(self.code_points().iter().copied(), &WidthConfig::default())
    }
}

impl<'a> Segments<'a, LineRules> {
    /// Whether the break after the current segment is mandatory
    pub fn must_break(&self) -> bool {
        self.start != self.end && self.action == BreakClass::Mandatory
    }
}

impl<'a, R: Segmentation> Iterator for Segments<'a, R> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.advance() {
            Some(self.as_str())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_grapheme_cursor_accessors() {
        let mut graphemes = Graphemes::new("e\u{301}\u{4E2D}");
        assert_eq!(graphemes.positions(), (0, 0));
        assert!(graphemes.code_points().is_empty());

        assert!(graphemes.advance());
        assert_eq!(graphemes.as_str(), "e\u{301}");
        assert_eq!(graphemes.code_points(), &['e', '\u{301}']);
        assert_eq!(graphemes.positions(), (0, 3));
        assert_eq!(graphemes.width(), 1);

        assert!(graphemes.advance());
        assert_eq!(graphemes.as_bytes(), "\u{4E2D}".as_bytes());
        assert_eq!(graphemes.width(), 2);

        assert!(!graphemes.advance());
        assert_eq!(graphemes.positions(), (6, 6));
        assert!(!graphemes.advance());
    }

    #[test]
    fn test_reset_replays_segments() {
        let mut words = Words::new("one two");
        let first: Vec<&str> = words.by_ref().collect();
        words.reset();
        let second: Vec<&str> = words.collect();
        assert_eq!(first, vec!["one", " ", "two"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_line_cursor_must_break() {
        let mut lines = LineSegments::new("a b\nc");
        let mut found = Vec::new();
        while lines.advance() {
            found.push((lines.as_str(), lines.must_break()));
        }
        assert_eq!(found, vec![("a ", false), ("b\n", true), ("c", true)]);
        assert!(!lines.must_break());
    }

    #[test]
    fn test_empty_text() {
        let mut sentences = Sentences::new("");
        assert!(!sentences.advance());
        assert_eq!(sentences.positions(), (0, 0));
        assert_eq!(sentences.next(), None);
    }
}
