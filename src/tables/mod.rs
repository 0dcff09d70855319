//! Codepoint Classification Tables
//!
//! Sorted, non-overlapping `[first, last]` interval tables, one per semantic
//! category, plus the binary interval search they all share. The table
//! contents encode *observed terminal rendering behavior*, not the pure
//! Unicode properties; several ranges deliberately diverge from the
//! East Asian Width report and must not be "corrected" toward it.
//!
//! # Categories
//!
//! - [`is_combining`] - Non-spacing and enclosing combining marks (Mn/Me/Cf)
//! - [`is_east_asian_ambiguous`] - East Asian Ambiguous (A) characters
//! - [`is_cjk_halfwidth_exception`] - CJK-block codepoints that render narrow
//! - [`is_kana`] - Kana, Hangul Jamo, and related syllabic ranges

pub mod assigned;
pub mod emoji;
pub mod sequences;

// =============================================================================
// Interval Search
// =============================================================================

/// An inclusive codepoint range belonging to one category table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub first: u32,
    pub last: u32,
}

/// Binary search over a sorted, non-overlapping interval table.
///
/// Returns true iff some interval contains `ucs`. The table being sorted
/// ascending by `first` and non-overlapping is a caller-enforced
/// precondition; it is not re-validated here.
pub fn intervals_contain(table: &[Interval], ucs: u32) -> bool {
    if table.is_empty() || ucs < table[0].first || ucs > table[table.len() - 1].last {
        return false;
    }

    let mut min = 0usize;
    let mut max = table.len() - 1;
    while min <= max {
        let mid = (min + max) / 2;
        if ucs > table[mid].last {
            min = mid + 1;
        } else if ucs < table[mid].first {
            if mid == 0 {
                return false;
            }
            max = mid - 1;
        } else {
            return true;
        }
    }

    false
}

const fn iv(first: u32, last: u32) -> Interval {
    Interval { first, last }
}

// =============================================================================
// Combining Marks
// =============================================================================

/// Sorted list of non-overlapping intervals of non-spacing characters.
/// Generated by "uniset +cat=Me +cat=Mn +cat=Cf -00AD +1160-11FF +200B c".
pub(crate) static COMBINING: &[Interval] = &[
    iv(0x0300, 0x036F), iv(0x0483, 0x0486), iv(0x0488, 0x0489),
    iv(0x0591, 0x05BD), iv(0x05BF, 0x05BF), iv(0x05C1, 0x05C2),
    iv(0x05C4, 0x05C5), iv(0x05C7, 0x05C7), iv(0x0600, 0x0603),
    iv(0x0610, 0x0615), iv(0x064B, 0x065E), iv(0x0670, 0x0670),
    iv(0x06D6, 0x06E4), iv(0x06E7, 0x06E8), iv(0x06EA, 0x06ED),
    iv(0x070F, 0x070F), iv(0x0711, 0x0711), iv(0x0730, 0x074A),
    iv(0x07A6, 0x07B0), iv(0x07EB, 0x07F3), iv(0x0901, 0x0902),
    iv(0x093C, 0x093C), iv(0x0941, 0x0948), iv(0x094D, 0x094D),
    iv(0x0951, 0x0954), iv(0x0962, 0x0963), iv(0x0981, 0x0981),
    iv(0x09BC, 0x09BC), iv(0x09C1, 0x09C4), iv(0x09CD, 0x09CD),
    iv(0x09E2, 0x09E3), iv(0x0A01, 0x0A02), iv(0x0A3C, 0x0A3C),
    iv(0x0A41, 0x0A42), iv(0x0A47, 0x0A48), iv(0x0A4B, 0x0A4D),
    iv(0x0A70, 0x0A71), iv(0x0A81, 0x0A82), iv(0x0ABC, 0x0ABC),
    iv(0x0AC1, 0x0AC5), iv(0x0AC7, 0x0AC8), iv(0x0ACD, 0x0ACD),
    iv(0x0AE2, 0x0AE3), iv(0x0B01, 0x0B01), iv(0x0B3C, 0x0B3C),
    iv(0x0B3F, 0x0B3F), iv(0x0B41, 0x0B43), iv(0x0B4D, 0x0B4D),
    iv(0x0B56, 0x0B56), iv(0x0B82, 0x0B82), iv(0x0BC0, 0x0BC0),
    iv(0x0BCD, 0x0BCD), iv(0x0C3E, 0x0C40), iv(0x0C46, 0x0C48),
    iv(0x0C4A, 0x0C4D), iv(0x0C55, 0x0C56), iv(0x0CBC, 0x0CBC),
    iv(0x0CBF, 0x0CBF), iv(0x0CC6, 0x0CC6), iv(0x0CCC, 0x0CCD),
    iv(0x0CE2, 0x0CE3), iv(0x0D41, 0x0D43), iv(0x0D4D, 0x0D4D),
    iv(0x0DCA, 0x0DCA), iv(0x0DD2, 0x0DD4), iv(0x0DD6, 0x0DD6),
    iv(0x0E31, 0x0E31), iv(0x0E34, 0x0E3A), iv(0x0E47, 0x0E4E),
    iv(0x0EB1, 0x0EB1), iv(0x0EB4, 0x0EB9), iv(0x0EBB, 0x0EBC),
    iv(0x0EC8, 0x0ECD), iv(0x0F18, 0x0F19), iv(0x0F35, 0x0F35),
    iv(0x0F37, 0x0F37), iv(0x0F39, 0x0F39), iv(0x0F71, 0x0F7E),
    iv(0x0F80, 0x0F84), iv(0x0F86, 0x0F87), iv(0x0F90, 0x0F97),
    iv(0x0F99, 0x0FBC), iv(0x0FC6, 0x0FC6), iv(0x102D, 0x1030),
    iv(0x1032, 0x1032), iv(0x1036, 0x1037), iv(0x1039, 0x1039),
    iv(0x1058, 0x1059), iv(0x1160, 0x11FF), iv(0x135F, 0x135F),
    iv(0x1712, 0x1714), iv(0x1732, 0x1734), iv(0x1752, 0x1753),
    iv(0x1772, 0x1773), iv(0x17B4, 0x17B5), iv(0x17B7, 0x17BD),
    iv(0x17C6, 0x17C6), iv(0x17C9, 0x17D3), iv(0x17DD, 0x17DD),
    iv(0x180B, 0x180D), iv(0x18A9, 0x18A9), iv(0x1920, 0x1922),
    iv(0x1927, 0x1928), iv(0x1932, 0x1932), iv(0x1939, 0x193B),
    iv(0x1A17, 0x1A18), iv(0x1B00, 0x1B03), iv(0x1B34, 0x1B34),
    iv(0x1B36, 0x1B3A), iv(0x1B3C, 0x1B3C), iv(0x1B42, 0x1B42),
    iv(0x1B6B, 0x1B73), iv(0x1DC0, 0x1DCA), iv(0x1DFE, 0x1DFF),
    iv(0x200B, 0x200F), iv(0x202A, 0x202E), iv(0x2060, 0x2063),
    iv(0x206A, 0x206F), iv(0x20D0, 0x20EF), iv(0x302A, 0x302F),
    iv(0x3099, 0x309A), iv(0xA806, 0xA806), iv(0xA80B, 0xA80B),
    iv(0xA825, 0xA826), iv(0xFB1E, 0xFB1E), iv(0xFE00, 0xFE0F),
    iv(0xFE20, 0xFE23), iv(0xFEFF, 0xFEFF), iv(0xFFF9, 0xFFFB),
    iv(0x10A01, 0x10A03), iv(0x10A05, 0x10A06), iv(0x10A0C, 0x10A0F),
    iv(0x10A38, 0x10A3A), iv(0x10A3F, 0x10A3F), iv(0x1D167, 0x1D169),
    iv(0x1D173, 0x1D182), iv(0x1D185, 0x1D18B), iv(0x1D1AA, 0x1D1AD),
    iv(0x1D242, 0x1D244), iv(0x1F3FB, 0x1F3FF), iv(0xE0001, 0xE0001),
    iv(0xE0020, 0xE007F), iv(0xE0100, 0xE01EF),
];

// =============================================================================
// East Asian Ambiguous
// =============================================================================

/// Sorted list of non-overlapping intervals of East Asian Ambiguous
/// characters. Generated by "uniset +WIDTH-A -cat=Me -cat=Mn -cat=Cf c".
pub(crate) static AMBIGUOUS: &[Interval] = &[
    iv(0x00A1, 0x00A1), iv(0x00A4, 0x00A4), iv(0x00A7, 0x00A8),
    iv(0x00AA, 0x00AA), iv(0x00AE, 0x00AE), iv(0x00B0, 0x00B4),
    iv(0x00B6, 0x00BA), iv(0x00BC, 0x00BF), iv(0x00C6, 0x00C6),
    iv(0x00D0, 0x00D0), iv(0x00D7, 0x00D8), iv(0x00DE, 0x00E1),
    iv(0x00E6, 0x00E6), iv(0x00E8, 0x00EA), iv(0x00EC, 0x00ED),
    iv(0x00F0, 0x00F0), iv(0x00F2, 0x00F3), iv(0x00F7, 0x00FA),
    iv(0x00FC, 0x00FC), iv(0x00FE, 0x00FE), iv(0x0101, 0x0101),
    iv(0x0111, 0x0111), iv(0x0113, 0x0113), iv(0x011B, 0x011B),
    iv(0x0126, 0x0127), iv(0x012B, 0x012B), iv(0x0131, 0x0133),
    iv(0x0138, 0x0138), iv(0x013F, 0x0142), iv(0x0144, 0x0144),
    iv(0x0148, 0x014B), iv(0x014D, 0x014D), iv(0x0152, 0x0153),
    iv(0x0166, 0x0167), iv(0x016B, 0x016B), iv(0x01CE, 0x01CE),
    iv(0x01D0, 0x01D0), iv(0x01D2, 0x01D2), iv(0x01D4, 0x01D4),
    iv(0x01D6, 0x01D6), iv(0x01D8, 0x01D8), iv(0x01DA, 0x01DA),
    iv(0x01DC, 0x01DC), iv(0x0251, 0x0251), iv(0x0261, 0x0261),
    iv(0x02C4, 0x02C4), iv(0x02C7, 0x02C7), iv(0x02C9, 0x02CB),
    iv(0x02CD, 0x02CD), iv(0x02D0, 0x02D0), iv(0x02D8, 0x02DB),
    iv(0x02DD, 0x02DD), iv(0x02DF, 0x02DF), iv(0x0391, 0x03A1),
    iv(0x03A3, 0x03A9), iv(0x03B1, 0x03C1), iv(0x03C3, 0x03C9),
    iv(0x0401, 0x0401), iv(0x0410, 0x044F), iv(0x0451, 0x0451),
    iv(0x2010, 0x2010), iv(0x2013, 0x2016), iv(0x2018, 0x2019),
    iv(0x201C, 0x201D), iv(0x2020, 0x2022), iv(0x2024, 0x2027),
    iv(0x2030, 0x2030), iv(0x2032, 0x2033), iv(0x2035, 0x2035),
    iv(0x203B, 0x203B), iv(0x203E, 0x203E), iv(0x2074, 0x2074),
    iv(0x207F, 0x207F), iv(0x2081, 0x2084), iv(0x20AC, 0x20AC),
    iv(0x2103, 0x2103), iv(0x2105, 0x2105), iv(0x2109, 0x2109),
    iv(0x2113, 0x2113), iv(0x2116, 0x2116), iv(0x2121, 0x2122),
    iv(0x2126, 0x2126), iv(0x212B, 0x212B), iv(0x2153, 0x2154),
    iv(0x215B, 0x215E), iv(0x2160, 0x216B), iv(0x2170, 0x2179),
    iv(0x2190, 0x2199), iv(0x21B8, 0x21B9), iv(0x21D2, 0x21D2),
    iv(0x21D4, 0x21D4), iv(0x21E7, 0x21E7), iv(0x2200, 0x2200),
    iv(0x2202, 0x2203), iv(0x2207, 0x2208), iv(0x220B, 0x220B),
    iv(0x220F, 0x220F), iv(0x2211, 0x2211), iv(0x2215, 0x2215),
    iv(0x221A, 0x221A), iv(0x221D, 0x2220), iv(0x2223, 0x2223),
    iv(0x2225, 0x2225), iv(0x2227, 0x222C), iv(0x222E, 0x222E),
    iv(0x2234, 0x2237), iv(0x223C, 0x223D), iv(0x2248, 0x2248),
    iv(0x224C, 0x224C), iv(0x2252, 0x2252), iv(0x2260, 0x2261),
    iv(0x2264, 0x2267), iv(0x226A, 0x226B), iv(0x226E, 0x226F),
    iv(0x2282, 0x2283), iv(0x2286, 0x2287), iv(0x2295, 0x2295),
    iv(0x2299, 0x2299), iv(0x22A5, 0x22A5), iv(0x22BF, 0x22BF),
    iv(0x2312, 0x2312), iv(0x2460, 0x24E9), iv(0x24EB, 0x254B),
    iv(0x2550, 0x2573), iv(0x2580, 0x258F), iv(0x2592, 0x2595),
    iv(0x25A0, 0x25A1), iv(0x25A3, 0x25A9), iv(0x25B2, 0x25B3),
    iv(0x25B6, 0x25B7), iv(0x25BC, 0x25BD), iv(0x25C0, 0x25C1),
    iv(0x25C6, 0x25C8), iv(0x25CB, 0x25CB), iv(0x25CE, 0x25D1),
    iv(0x25E2, 0x25E5), iv(0x25EF, 0x25EF), iv(0x2605, 0x2606),
    iv(0x2609, 0x2609), iv(0x260E, 0x260F), iv(0x2614, 0x2615),
    iv(0x261C, 0x261C), iv(0x261E, 0x261E), iv(0x2640, 0x2640),
    iv(0x2642, 0x2642), iv(0x2660, 0x2661), iv(0x2663, 0x2665),
    iv(0x2667, 0x266A), iv(0x266C, 0x266D), iv(0x266F, 0x266F),
    iv(0x273D, 0x273D), iv(0x2776, 0x277F), iv(0xE000, 0xF8FF),
    iv(0xFFFD, 0xFFFD), iv(0xF0000, 0xFFFFD), iv(0x100000, 0x10FFFD),
];

// =============================================================================
// CJK Halfwidth Exceptions
// =============================================================================

/// Codepoints inside the broad CJK wide ranges that terminals render as a
/// single cell. These carve-outs override the naive East-Asian-Wide
/// classification and are part of the engine's contract.
pub(crate) static CJK_HALFWIDTH_EXCEPTIONS: &[Interval] = &[
    iv(0x303F, 0x303F), // Ideographic Half Fill Space
    iv(0x3248, 0x324F), // Enclosed CJK Letters and Months (circled on black square)
    iv(0x4DC0, 0x4DFF), // Yijing Hexagram Symbols
];

// =============================================================================
// Kana and Related Ranges
// =============================================================================

/// Kana, Hangul Jamo, and related syllabic ranges. Used for skip-filtering
/// in the verifier, not in width arithmetic.
pub(crate) static KANA: &[Interval] = &[
    iv(0x1100, 0x115F),   // Hangul Jamo (various characters)
    iv(0x302E, 0x302F),   // CJK Symbols and Punctuation (Hangul tone marks)
    iv(0xA960, 0xA97C),   // Hangul Jamo Extended-A (various characters)
    iv(0x18800, 0x18AFF), // Tangut Components
    iv(0x18B00, 0x18CFF), // Khitan Small Script
    iv(0x1AFF0, 0x1AFF3), // Kana Extended-B (various tones)
    iv(0x1AFF5, 0x1AFFB), // Kana Extended-B (various tones)
    iv(0x1AFFD, 0x1AFFE), // Kana Extended-B (various tones)
    iv(0x1B000, 0x1B0FF), // Kana Supplement
    iv(0x1B100, 0x1B122), // Kana Extended-A
    iv(0x1B132, 0x1B132), // Small Kana Extension (various letters)
    iv(0x1B150, 0x1B152), // Small Kana Extension (various letters)
    iv(0x1B155, 0x1B155), // Small Kana Extension (various letters)
    iv(0x1B164, 0x1B167), // Small Kana Extension (various letters)
    iv(0x1B170, 0x1B2FF), // Nushu
];

// =============================================================================
// Classification
// =============================================================================

/// Check whether a codepoint is a non-spacing or enclosing combining mark
/// (or a zero-width format character).
pub fn is_combining(c: char) -> bool {
    intervals_contain(COMBINING, c as u32)
}

/// Check whether a codepoint is in the East Asian Ambiguous (A) category.
pub fn is_east_asian_ambiguous(c: char) -> bool {
    intervals_contain(AMBIGUOUS, c as u32)
}

/// Check whether a codepoint inside the CJK wide ranges renders as a single
/// cell on real terminals.
pub fn is_cjk_halfwidth_exception(c: char) -> bool {
    intervals_contain(CJK_HALFWIDTH_EXCEPTIONS, c as u32)
}

/// Check whether a codepoint falls in a kana, Hangul Jamo, or related range.
pub fn is_kana(c: char) -> bool {
    intervals_contain(KANA, c as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── intervals_contain ──

    #[test]
    fn contain_empty_table() {
        assert!(!intervals_contain(&[], 0x41));
    }

    #[test]
    fn contain_single_interval() {
        let t = [iv(0x10, 0x20)];
        assert!(!intervals_contain(&t, 0x0F));
        assert!(intervals_contain(&t, 0x10));
        assert!(intervals_contain(&t, 0x18));
        assert!(intervals_contain(&t, 0x20));
        assert!(!intervals_contain(&t, 0x21));
    }

    #[test]
    fn contain_gap_between_intervals() {
        let t = [iv(0x10, 0x20), iv(0x40, 0x50)];
        assert!(!intervals_contain(&t, 0x30));
        assert!(intervals_contain(&t, 0x40));
    }

    #[test]
    fn contain_below_first() {
        // Regression: probing below the first interval must not underflow.
        let t = [iv(0x100, 0x200), iv(0x300, 0x400)];
        assert!(!intervals_contain(&t, 0x0));
        assert!(!intervals_contain(&t, 0x250));
    }

    // ── table invariants ──

    fn assert_sorted_non_overlapping(table: &[Interval]) {
        let mut prev_last = None;
        for iv in table {
            assert!(iv.first <= iv.last, "inverted interval {:#x?}", iv);
            if let Some(last) = prev_last {
                assert!(iv.first > last, "overlap or disorder at {:#x?}", iv);
            }
            prev_last = Some(iv.last);
        }
    }

    #[test]
    fn tables_sorted_non_overlapping() {
        assert_sorted_non_overlapping(COMBINING);
        assert_sorted_non_overlapping(AMBIGUOUS);
        assert_sorted_non_overlapping(CJK_HALFWIDTH_EXCEPTIONS);
        assert_sorted_non_overlapping(KANA);
    }

    // ── categories ──

    #[test]
    fn combining_marks() {
        assert!(is_combining('\u{0300}')); // grave accent
        assert!(is_combining('\u{0301}')); // acute accent
        assert!(is_combining('\u{200B}')); // zero width space
        assert!(is_combining('\u{FE0F}')); // variation selector-16
        assert!(!is_combining('a'));
        assert!(!is_combining('中'));
    }

    #[test]
    fn ambiguous_characters() {
        assert!(is_east_asian_ambiguous('§'));
        assert!(is_east_asian_ambiguous('Ω')); // Greek
        assert!(is_east_asian_ambiguous('Я')); // Cyrillic
        assert!(is_east_asian_ambiguous('\u{E000}')); // private use
        assert!(!is_east_asian_ambiguous('A'));
    }

    #[test]
    fn halfwidth_exceptions() {
        assert!(is_cjk_halfwidth_exception('\u{303F}'));
        assert!(is_cjk_halfwidth_exception('\u{4DC0}'));
        assert!(is_cjk_halfwidth_exception('\u{4DFF}'));
        assert!(!is_cjk_halfwidth_exception('中'));
    }

    #[test]
    fn kana_ranges() {
        assert!(is_kana('\u{1100}'));
        assert!(is_kana('\u{1B000}'));
        assert!(!is_kana('あ')); // Hiragana proper is not in the skip list
    }
}
