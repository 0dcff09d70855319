//! Width Iterator
//!
//! Walks a string one *display unit* at a time. A unit is usually a single
//! codepoint, but when color emoji support is on, a base emoji merges with
//! trailing variation selectors (U+FE0F), skin tone modifiers
//! (U+1F3FB..U+1F3FF), and known ZWJ presentation sequences into one unit
//! with one width. An unqualified half-width emoji that gains a qualifying
//! follow-up is promoted from width 1 to width 2.
//!
//! The iterator never reads past the end of the string, and it can be
//! rewound one unit with [`WidthIter::unnext`] for one-unit lookahead.
//! It is not shareable across concurrent advances.

use std::ops::Range;

use crate::mode::{current_mode, WidthMode};
use crate::resolve::resolve_width_with;
use crate::tables::emoji;
use crate::tables::sequences::sequences_for;

/// Per-unit width iterator over a UTF-8 string.
///
/// The capability mode is snapshotted at construction, so an iterator is a
/// pure function of its input string and that snapshot.
#[derive(Debug, Clone)]
pub struct WidthIter<'a> {
    s: &'a str,
    pos: usize,
    unit_start: usize,
    unit_end: usize,
    unit_width: i8,
    unit_emoji: bool,
    mode: WidthMode,
}

impl<'a> WidthIter<'a> {
    /// Iterate `s` under the current capability mode.
    pub fn new(s: &'a str) -> Self {
        Self::with_mode(s, current_mode())
    }

    /// Iterate `s` under an explicit capability mode.
    pub fn with_mode(s: &'a str, mode: WidthMode) -> Self {
        Self {
            s,
            pos: 0,
            unit_start: 0,
            unit_end: 0,
            unit_width: 0,
            unit_emoji: false,
            mode,
        }
    }

    /// Advance to the next display unit, returning its base codepoint.
    /// None once the input is exhausted.
    pub fn next(&mut self) -> Option<char> {
        self.unit_start = self.pos;
        self.unit_end = self.pos;
        self.unit_emoji = false;

        let c = self.s[self.pos..].chars().next()?;
        self.pos += c.len_utf8();
        self.unit_width = resolve_width_with(c, &self.mode);

        if self.mode.color_emoji()
            && (emoji::is_emoji(c) || emoji::is_possible_unqualified_half_width(c))
        {
            self.consume_emoji_sequence(c);
        }

        self.unit_end = self.pos;
        Some(c)
    }

    /// Un-consume the most recently produced unit so the next [`Self::next`]
    /// call returns it again. One level only.
    pub fn unnext(&mut self) {
        self.pos = self.unit_start;
        self.unit_end = self.unit_start;
        self.unit_width = 0;
        self.unit_emoji = false;
    }

    /// Byte range of the current unit (one or more codepoints).
    pub fn unit_span(&self) -> Range<usize> {
        self.unit_start..self.unit_end
    }

    /// The current unit as a string slice.
    pub fn unit_str(&self) -> &'a str {
        &self.s[self.unit_start..self.unit_end]
    }

    /// Resolved width of the current unit: -1, 0, 1, or 2.
    pub fn unit_width_signed(&self) -> i8 {
        self.unit_width
    }

    /// Width with control characters counted as zero cells.
    pub fn unit_width_zero_ctrl(&self) -> usize {
        if self.unit_width < 0 { 0 } else { self.unit_width as usize }
    }

    /// Width with control characters counted as one cell.
    pub fn unit_width_one_ctrl(&self) -> usize {
        if self.unit_width < 0 { 1 } else { self.unit_width as usize }
    }

    /// Width with control characters counted as two cells.
    pub fn unit_width_two_ctrl(&self) -> usize {
        if self.unit_width < 0 { 2 } else { self.unit_width as usize }
    }

    /// Whether the current unit is an emoji unit (an emoji base, or any
    /// unit extended by a qualifying continuation).
    pub fn unit_is_emoji(&self) -> bool {
        self.unit_emoji
    }

    /// Whether any input remains past the current unit.
    pub fn more(&self) -> bool {
        self.pos < self.s.len()
    }

    /// Byte position the next unit will start at.
    pub fn pointer(&self) -> usize {
        self.pos
    }

    /// Restart the iterator at a previously observed unit boundary.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not a character boundary in the underlying string.
    pub fn reset_pointer(&mut self, pos: usize) {
        assert!(self.s.is_char_boundary(pos), "not a unit boundary: {pos}");
        self.pos = pos;
        self.unit_start = pos;
        self.unit_end = pos;
        self.unit_width = 0;
        self.unit_emoji = false;
    }

    /// The mode snapshot this iterator resolves against.
    pub fn mode(&self) -> &WidthMode {
        &self.mode
    }

    /// Merge qualifying continuations into the current unit.
    fn consume_emoji_sequence(&mut self, base: char) {
        // Longest known presentation sequence starting at the base wins.
        let rest = &self.s[self.unit_start..];
        let mut longest = 0usize;
        for entry in sequences_for(base) {
            if entry.sequence.len() > longest && rest.starts_with(entry.sequence) {
                longest = entry.sequence.len();
            }
        }

        let mut qualified = false;
        if longest > base.len_utf8() {
            self.pos = self.unit_start + longest;
            qualified = true;
        }

        // Trailing variation selectors and skin tones extend the unit even
        // past a table match (sequences are measured verbatim).
        while let Some(c) = self.s[self.pos..].chars().next() {
            if emoji::is_variant_selector(c) {
                self.pos += c.len_utf8();
                qualified = true;
            } else {
                break;
            }
        }

        if qualified {
            // A fully qualified sequence renders as one wide glyph; this is
            // where unqualified half-width bases get promoted to 2.
            self.unit_emoji = true;
            self.unit_width = 2;
        } else if emoji::is_emoji(base) && !emoji::is_possible_unqualified_half_width(base) {
            self.unit_emoji = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::ModeFlags;

    fn emoji_mode() -> WidthMode {
        WidthMode {
            flags: ModeFlags::FULL_WIDTH | ModeFlags::COLOR_EMOJI,
            combining_mark_width: 0,
        }
    }

    fn no_emoji_mode() -> WidthMode {
        WidthMode {
            flags: ModeFlags::FULL_WIDTH,
            combining_mark_width: 0,
        }
    }

    // ── plain iteration ──

    #[test]
    fn ascii_units() {
        let mut it = WidthIter::with_mode("ab", no_emoji_mode());
        assert_eq!(it.next(), Some('a'));
        assert_eq!(it.unit_span(), 0..1);
        assert_eq!(it.unit_width_signed(), 1);
        assert!(!it.unit_is_emoji());
        assert!(it.more());
        assert_eq!(it.next(), Some('b'));
        assert!(!it.more());
        assert_eq!(it.next(), None);
    }

    #[test]
    fn cjk_unit_width() {
        let mut it = WidthIter::with_mode("中", no_emoji_mode());
        assert_eq!(it.next(), Some('中'));
        assert_eq!(it.unit_width_signed(), 2);
        assert_eq!(it.unit_span(), 0..3);
    }

    #[test]
    fn control_unit_policies() {
        let mut it = WidthIter::with_mode("\t", no_emoji_mode());
        it.next();
        assert_eq!(it.unit_width_signed(), -1);
        assert_eq!(it.unit_width_zero_ctrl(), 0);
        assert_eq!(it.unit_width_one_ctrl(), 1);
        assert_eq!(it.unit_width_two_ctrl(), 2);
    }

    // ── emoji sequences ──

    #[test]
    fn emoji_base_alone() {
        let mut it = WidthIter::with_mode("😀", emoji_mode());
        assert_eq!(it.next(), Some('😀'));
        assert_eq!(it.unit_width_signed(), 2);
        assert!(it.unit_is_emoji());
    }

    #[test]
    fn unqualified_base_alone_stays_narrow() {
        let mut it = WidthIter::with_mode("☀", emoji_mode());
        it.next();
        assert_eq!(it.unit_width_signed(), 1);
        assert!(!it.unit_is_emoji());
    }

    #[test]
    fn vs16_promotes_to_wide() {
        let s = "☀\u{FE0F}";
        let mut it = WidthIter::with_mode(s, emoji_mode());
        assert_eq!(it.next(), Some('☀'));
        assert_eq!(it.unit_span(), 0..s.len());
        assert_eq!(it.unit_width_signed(), 2);
        assert!(it.unit_is_emoji());
        assert_eq!(it.next(), None);
    }

    #[test]
    fn skin_tone_merges() {
        let s = "👍\u{1F3FD}";
        let mut it = WidthIter::with_mode(s, emoji_mode());
        assert_eq!(it.next(), Some('👍'));
        assert_eq!(it.unit_span(), 0..s.len());
        assert_eq!(it.unit_width_signed(), 2);
        assert!(it.unit_is_emoji());
    }

    #[test]
    fn zwj_sequence_is_one_unit() {
        // family: man, woman, girl, boy; a known presentation sequence
        let s = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}";
        let mut it = WidthIter::with_mode(s, emoji_mode());
        assert_eq!(it.next(), Some('\u{1F468}'));
        assert_eq!(it.unit_span(), 0..s.len());
        assert_eq!(it.unit_width_signed(), 2);
        assert!(it.unit_is_emoji());
        assert_eq!(it.next(), None);
    }

    #[test]
    fn longest_sequence_wins() {
        // "❤️" alone vs "❤️‍🔥": the longer table entry must be taken.
        let s = "\u{2764}\u{FE0F}\u{200D}\u{1F525}x";
        let mut it = WidthIter::with_mode(s, emoji_mode());
        assert_eq!(it.next(), Some('\u{2764}'));
        assert_eq!(it.unit_str(), "\u{2764}\u{FE0F}\u{200D}\u{1F525}");
        assert_eq!(it.unit_width_signed(), 2);
        assert_eq!(it.next(), Some('x'));
    }

    #[test]
    fn unknown_zwj_continuation_splits() {
        // ZWJ after a base with no matching table entry is not consumed.
        let s = "😀\u{200D}x";
        let mut it = WidthIter::with_mode(s, emoji_mode());
        assert_eq!(it.next(), Some('😀'));
        assert_eq!(it.unit_str(), "😀");
        assert_eq!(it.next(), Some('\u{200D}'));
        assert_eq!(it.unit_width_signed(), 0); // ZWJ is a format character
        assert_eq!(it.next(), Some('x'));
    }

    #[test]
    fn no_merging_without_color_emoji() {
        let s = "☀\u{FE0F}";
        let mut it = WidthIter::with_mode(s, no_emoji_mode());
        assert_eq!(it.next(), Some('☀'));
        assert_eq!(it.unit_str(), "☀");
        assert_eq!(it.next(), Some('\u{FE0F}'));
        assert_eq!(it.unit_width_signed(), 0); // variation selector combines
    }

    // ── rewind and restart ──

    #[test]
    fn unnext_replays_one_unit() {
        let mut it = WidthIter::with_mode("a中", no_emoji_mode());
        assert_eq!(it.next(), Some('a'));
        assert_eq!(it.next(), Some('中'));
        it.unnext();
        assert_eq!(it.next(), Some('中'));
        assert_eq!(it.unit_width_signed(), 2);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn reset_pointer_restarts() {
        let s = "a中b";
        let mut it = WidthIter::with_mode(s, no_emoji_mode());
        it.next();
        let boundary = it.pointer();
        it.next();
        it.next();
        assert_eq!(it.next(), None);
        it.reset_pointer(boundary);
        assert_eq!(it.next(), Some('中'));
    }

    #[test]
    #[should_panic(expected = "not a unit boundary")]
    fn reset_pointer_rejects_mid_char() {
        let mut it = WidthIter::with_mode("中", no_emoji_mode());
        it.reset_pointer(1);
    }
}
