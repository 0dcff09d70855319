//! Category Skip Filter
//!
//! Selects which semantic categories of codepoints a scan should skip.
//! Supports both directions: skip named categories, or skip everything and
//! re-include named categories.

use crate::tables::{self, assigned, emoji};

/// Which codepoint categories to skip while scanning ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkipFilter {
    /// Skip everything except categories explicitly un-skipped.
    pub skip_all: bool,
    pub skip_combining: bool,
    pub skip_emoji: bool,
    pub skip_east_asian_ambiguous: bool,
    pub skip_ideographs: bool,
    pub skip_kana: bool,
}

impl Default for SkipFilter {
    /// Ideograph and kana ranges are skipped by default; they are huge and
    /// uniform, so spot checks rarely want them.
    fn default() -> Self {
        Self {
            skip_all: false,
            skip_combining: false,
            skip_emoji: false,
            skip_east_asian_ambiguous: false,
            skip_ideographs: true,
            skip_kana: true,
        }
    }
}

impl SkipFilter {
    /// Set every category flag at once, keeping per-category flags in sync
    /// with the skip-all master switch.
    pub fn set_all(&mut self, skip: bool) {
        *self = Self {
            skip_all: skip,
            skip_combining: skip,
            skip_emoji: skip,
            skip_east_asian_ambiguous: skip,
            skip_ideographs: skip,
            skip_kana: skip,
        };
    }

    /// Decide whether a codepoint should be skipped.
    pub fn is_skip(&self, c: char) -> bool {
        if self.skip_all {
            // Un-skipped categories punch holes in skip-all.
            if !self.skip_combining && tables::is_combining(c) {
                return false;
            }
            if !self.skip_emoji && emoji::is_emoji(c) {
                return false;
            }
            if !self.skip_east_asian_ambiguous && tables::is_east_asian_ambiguous(c) {
                return false;
            }
            if !self.skip_ideographs && assigned::is_ideograph(c) {
                return false;
            }
            if !self.skip_kana && tables::is_kana(c) {
                return false;
            }
            true
        } else {
            (self.skip_combining && tables::is_combining(c))
                || (self.skip_emoji && emoji::is_emoji(c))
                || (self.skip_east_asian_ambiguous && tables::is_east_asian_ambiguous(c))
                || (self.skip_ideographs && assigned::is_ideograph(c))
                || (self.skip_kana && tables::is_kana(c))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_skips_ideographs_and_kana() {
        let f = SkipFilter::default();
        assert!(f.is_skip('中'));
        assert!(f.is_skip('\u{1100}')); // kana list
        assert!(!f.is_skip('a'));
        assert!(!f.is_skip('\u{0301}'));
        assert!(!f.is_skip('😀'));
    }

    #[test]
    fn explicit_category_skips() {
        let f = SkipFilter {
            skip_combining: true,
            skip_emoji: true,
            ..Default::default()
        };
        assert!(f.is_skip('\u{0301}'));
        assert!(f.is_skip('😀'));
        assert!(!f.is_skip('a'));
    }

    #[test]
    fn skip_all_with_reinclude() {
        let mut f = SkipFilter::default();
        f.set_all(true);
        f.skip_combining = false;
        assert!(!f.is_skip('\u{0301}'));
        assert!(f.is_skip('a'));
        assert!(f.is_skip('😀'));
        assert!(f.is_skip('中'));
    }

    #[test]
    fn set_all_false_clears_defaults() {
        let mut f = SkipFilter::default();
        f.set_all(false);
        assert!(!f.is_skip('中'));
    }
}
