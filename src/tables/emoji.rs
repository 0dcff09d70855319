//! Emoji Classification Tables
//!
//! Three tables drive emoji width decisions:
//!
//! - [`is_emoji`] - Everything terminals render as a color emoji glyph when
//!   color emoji support is on (width 2).
//! - [`is_possible_unqualified_half_width`] - Emoji whose bare codepoint
//!   defaults to *text* presentation and renders half width until a
//!   qualifying follow-up codepoint (VS16, skin tone) arrives. Windows
//!   Terminal keeps these at width 1 for consistency with the first
//!   terminals that supported color emoji.
//! - [`is_mono_emoji`] - The subset that Windows 11 conhost renders as
//!   full-width *monochrome* glyphs even without color emoji support.

use super::{intervals_contain, Interval};

const fn iv(first: u32, last: u32) -> Interval {
    Interval { first, last }
}

// =============================================================================
// Emoji (color presentation, width 2)
// =============================================================================

pub(crate) static EMOJI: &[Interval] = &[
    iv(0x203C, 0x203C), iv(0x2049, 0x2049), iv(0x2122, 0x2122),
    iv(0x2139, 0x2139), iv(0x2194, 0x2199), iv(0x21A9, 0x21AA),
    iv(0x231A, 0x231B), iv(0x2328, 0x2328), iv(0x23CF, 0x23CF),
    iv(0x23E9, 0x23F3), iv(0x23F8, 0x23FA), iv(0x24C2, 0x24C2),
    iv(0x25AA, 0x25AB), iv(0x25B6, 0x25B6), iv(0x25C0, 0x25C0),
    iv(0x25FB, 0x25FE), iv(0x2600, 0x2604), iv(0x260E, 0x260E),
    iv(0x2611, 0x2611), iv(0x2614, 0x2615), iv(0x2618, 0x2618),
    iv(0x261D, 0x261D), iv(0x2620, 0x2620), iv(0x2622, 0x2623),
    iv(0x2626, 0x2626), iv(0x262A, 0x262A), iv(0x262E, 0x262F),
    iv(0x2638, 0x263A), iv(0x2640, 0x2640), iv(0x2642, 0x2642),
    iv(0x2648, 0x2653), iv(0x265F, 0x2660), iv(0x2663, 0x2663),
    iv(0x2665, 0x2666), iv(0x2668, 0x2668), iv(0x267B, 0x267B),
    iv(0x267E, 0x267F), iv(0x2692, 0x2697), iv(0x2699, 0x2699),
    iv(0x269B, 0x269C), iv(0x26A0, 0x26A1), iv(0x26A7, 0x26A7),
    iv(0x26AA, 0x26AB), iv(0x26B0, 0x26B1), iv(0x26BD, 0x26BE),
    iv(0x26C4, 0x26C5), iv(0x26C8, 0x26C8), iv(0x26CE, 0x26CF),
    iv(0x26D1, 0x26D1), iv(0x26D3, 0x26D4), iv(0x26E9, 0x26EA),
    iv(0x26F0, 0x26F5), iv(0x26F7, 0x26FA), iv(0x26FD, 0x26FD),
    iv(0x2702, 0x2702), iv(0x2705, 0x2705), iv(0x2708, 0x270D),
    iv(0x270F, 0x270F), iv(0x2712, 0x2712), iv(0x2714, 0x2714),
    iv(0x2716, 0x2716), iv(0x271D, 0x271D), iv(0x2721, 0x2721),
    iv(0x2728, 0x2728), iv(0x2733, 0x2734), iv(0x2744, 0x2744),
    iv(0x2747, 0x2747), iv(0x274C, 0x274C), iv(0x274E, 0x274E),
    iv(0x2753, 0x2755), iv(0x2757, 0x2757), iv(0x2763, 0x2764),
    iv(0x2795, 0x2797), iv(0x27A1, 0x27A1), iv(0x27B0, 0x27B0),
    iv(0x27BF, 0x27BF), iv(0x2934, 0x2935), iv(0x2B05, 0x2B07),
    iv(0x2B1B, 0x2B1C), iv(0x2B50, 0x2B50), iv(0x2B55, 0x2B55),
    iv(0x3030, 0x3030), iv(0x303D, 0x303D), iv(0x3297, 0x3297),
    iv(0x3299, 0x3299), iv(0x1F004, 0x1F004), iv(0x1F0CF, 0x1F0CF),
    iv(0x1F170, 0x1F171), iv(0x1F17E, 0x1F17F), iv(0x1F18E, 0x1F18E),
    iv(0x1F191, 0x1F19A), iv(0x1F1E6, 0x1F1FF), iv(0x1F201, 0x1F202),
    iv(0x1F21A, 0x1F21A), iv(0x1F22F, 0x1F22F), iv(0x1F232, 0x1F23A),
    iv(0x1F250, 0x1F251), iv(0x1F300, 0x1F321), iv(0x1F324, 0x1F393),
    iv(0x1F396, 0x1F397), iv(0x1F399, 0x1F39B), iv(0x1F39E, 0x1F3F0),
    iv(0x1F3F3, 0x1F3F5), iv(0x1F3F7, 0x1F4FD), iv(0x1F4FF, 0x1F53D),
    iv(0x1F549, 0x1F54E), iv(0x1F550, 0x1F567), iv(0x1F56F, 0x1F570),
    iv(0x1F573, 0x1F57A), iv(0x1F587, 0x1F587), iv(0x1F58A, 0x1F58D),
    iv(0x1F590, 0x1F590), iv(0x1F595, 0x1F596), iv(0x1F5A4, 0x1F5A5),
    iv(0x1F5A8, 0x1F5A8), iv(0x1F5B1, 0x1F5B2), iv(0x1F5BC, 0x1F5BC),
    iv(0x1F5C2, 0x1F5C4), iv(0x1F5D1, 0x1F5D3), iv(0x1F5DC, 0x1F5DE),
    iv(0x1F5E1, 0x1F5E1), iv(0x1F5E3, 0x1F5E3), iv(0x1F5E8, 0x1F5E8),
    iv(0x1F5EF, 0x1F5EF), iv(0x1F5F3, 0x1F5F3), iv(0x1F5FA, 0x1F64F),
    iv(0x1F680, 0x1F6C5), iv(0x1F6CB, 0x1F6D2), iv(0x1F6D5, 0x1F6D7),
    iv(0x1F6DC, 0x1F6E5), iv(0x1F6E9, 0x1F6E9), iv(0x1F6EB, 0x1F6EC),
    iv(0x1F6F0, 0x1F6F0), iv(0x1F6F3, 0x1F6FC), iv(0x1F7E0, 0x1F7EB),
    iv(0x1F7F0, 0x1F7F0), iv(0x1F90C, 0x1F93A), iv(0x1F93C, 0x1F945),
    iv(0x1F947, 0x1F9FF), iv(0x1FA70, 0x1FA7C), iv(0x1FA80, 0x1FA88),
    iv(0x1FA90, 0x1FABD), iv(0x1FABF, 0x1FAC5), iv(0x1FACE, 0x1FADB),
    iv(0x1FAE0, 0x1FAE8), iv(0x1FAF0, 0x1FAF8),
];

// =============================================================================
// Unqualified Half Width
// =============================================================================

/// Emoji with text-default presentation. Width 1 unless a follow-up
/// codepoint (VS16, skin tone) makes the sequence fully qualified.
/// See https://github.com/microsoft/terminal/issues/17342.
pub(crate) static UNQUALIFIED_HALF_WIDTH: &[Interval] = &[
    iv(0x203C, 0x203C), iv(0x2049, 0x2049), iv(0x2122, 0x2122),
    iv(0x2139, 0x2139), iv(0x2194, 0x2199), iv(0x21A9, 0x21AA),
    iv(0x2328, 0x2328), iv(0x23CF, 0x23CF), iv(0x23ED, 0x23EF),
    iv(0x23F1, 0x23F2), iv(0x23F8, 0x23FA), iv(0x24C2, 0x24C2),
    iv(0x25AA, 0x25AB), iv(0x25B6, 0x25B6), iv(0x25C0, 0x25C0),
    iv(0x25FB, 0x25FC), iv(0x2600, 0x2604), iv(0x260E, 0x260E),
    iv(0x2611, 0x2611), iv(0x2618, 0x2618), iv(0x261D, 0x261D),
    iv(0x2620, 0x2620), iv(0x2622, 0x2623), iv(0x2626, 0x2626),
    iv(0x262A, 0x262A), iv(0x262E, 0x262F), iv(0x2638, 0x263A),
    iv(0x2640, 0x2640), iv(0x2642, 0x2642), iv(0x265F, 0x2660),
    iv(0x2663, 0x2663), iv(0x2665, 0x2666), iv(0x2668, 0x2668),
    iv(0x267B, 0x267B), iv(0x267E, 0x267E), iv(0x2692, 0x2692),
    iv(0x2694, 0x2697), iv(0x2699, 0x2699), iv(0x269B, 0x269C),
    iv(0x26A0, 0x26A0), iv(0x26A7, 0x26A7), iv(0x26B0, 0x26B1),
    iv(0x26C8, 0x26C8), iv(0x26CF, 0x26CF), iv(0x26D1, 0x26D1),
    iv(0x26D3, 0x26D3), iv(0x26E9, 0x26E9), iv(0x26F0, 0x26F1),
    iv(0x26F4, 0x26F4), iv(0x26F7, 0x26F9), iv(0x2702, 0x2702),
    iv(0x2708, 0x270D), iv(0x270F, 0x270F), iv(0x2712, 0x2712),
    iv(0x2714, 0x2714), iv(0x2716, 0x2716), iv(0x271D, 0x271D),
    iv(0x2721, 0x2721), iv(0x2733, 0x2734), iv(0x2744, 0x2744),
    iv(0x2747, 0x2747), iv(0x2763, 0x2763), iv(0x27A1, 0x27A1),
    iv(0x2934, 0x2935), iv(0x2B05, 0x2B07), iv(0x3030, 0x3030),
    iv(0x303D, 0x303D), iv(0x3297, 0x3297), iv(0x3299, 0x3299),
    iv(0x1F170, 0x1F171), iv(0x1F17E, 0x1F17F), iv(0x1F321, 0x1F321),
    iv(0x1F324, 0x1F32C), iv(0x1F336, 0x1F336), iv(0x1F37D, 0x1F37D),
    iv(0x1F396, 0x1F397), iv(0x1F399, 0x1F39B), iv(0x1F39E, 0x1F39F),
    iv(0x1F3CB, 0x1F3CE), iv(0x1F3D4, 0x1F3DF), iv(0x1F3F3, 0x1F3F3),
    iv(0x1F3F5, 0x1F3F5), iv(0x1F3F7, 0x1F3F7), iv(0x1F43F, 0x1F43F),
    iv(0x1F441, 0x1F441), iv(0x1F4FD, 0x1F4FD), iv(0x1F549, 0x1F54A),
    iv(0x1F56F, 0x1F570), iv(0x1F573, 0x1F579), iv(0x1F587, 0x1F587),
    iv(0x1F58A, 0x1F58D), iv(0x1F590, 0x1F590), iv(0x1F5A5, 0x1F5A5),
    iv(0x1F5A8, 0x1F5A8), iv(0x1F5B1, 0x1F5B2), iv(0x1F5BC, 0x1F5BC),
    iv(0x1F5C2, 0x1F5C4), iv(0x1F5D1, 0x1F5D3), iv(0x1F5DC, 0x1F5DE),
    iv(0x1F5E1, 0x1F5E1), iv(0x1F5E3, 0x1F5E3), iv(0x1F5E8, 0x1F5E8),
    iv(0x1F5EF, 0x1F5EF), iv(0x1F5F3, 0x1F5F3), iv(0x1F5FA, 0x1F5FA),
    iv(0x1F6CB, 0x1F6CB), iv(0x1F6CD, 0x1F6CF), iv(0x1F6E0, 0x1F6E5),
    iv(0x1F6E9, 0x1F6E9), iv(0x1F6F0, 0x1F6F0), iv(0x1F6F3, 0x1F6F3),
];

// =============================================================================
// Monochrome Emoji (Windows 11 conhost)
// =============================================================================

/// BMP emoji with emoji-default presentation that Windows 11 conhost renders
/// as full-width monochrome glyphs even without color emoji support.
pub(crate) static MONO_EMOJI: &[Interval] = &[
    iv(0x231A, 0x231B), iv(0x23E9, 0x23EC), iv(0x23F0, 0x23F0),
    iv(0x23F3, 0x23F3), iv(0x25FD, 0x25FE), iv(0x2614, 0x2615),
    iv(0x2648, 0x2653), iv(0x267F, 0x267F), iv(0x2693, 0x2693),
    iv(0x26A1, 0x26A1), iv(0x26AA, 0x26AB), iv(0x26BD, 0x26BE),
    iv(0x26C4, 0x26C5), iv(0x26CE, 0x26CE), iv(0x26D4, 0x26D4),
    iv(0x26EA, 0x26EA), iv(0x26F2, 0x26F3), iv(0x26F5, 0x26F5),
    iv(0x26FA, 0x26FA), iv(0x26FD, 0x26FD), iv(0x2705, 0x2705),
    iv(0x270A, 0x270B), iv(0x2728, 0x2728), iv(0x274C, 0x274C),
    iv(0x274E, 0x274E), iv(0x2753, 0x2755), iv(0x2757, 0x2757),
    iv(0x2795, 0x2797), iv(0x27B0, 0x27B0), iv(0x27BF, 0x27BF),
    iv(0x2B1B, 0x2B1C), iv(0x2B50, 0x2B50), iv(0x2B55, 0x2B55),
];

// =============================================================================
// Classification
// =============================================================================

/// Check whether a codepoint is recognized as an emoji (color presentation).
pub fn is_emoji(c: char) -> bool {
    intervals_contain(EMOJI, c as u32)
}

/// Check whether a bare codepoint renders half width until a qualifying
/// follow-up codepoint arrives.
pub fn is_possible_unqualified_half_width(c: char) -> bool {
    intervals_contain(UNQUALIFIED_HALF_WIDTH, c as u32)
}

/// Check whether Windows 11 conhost renders the codepoint as a full-width
/// monochrome emoji glyph.
pub fn is_mono_emoji(c: char) -> bool {
    intervals_contain(MONO_EMOJI, c as u32)
}

/// Check whether a codepoint qualifies a preceding emoji for color
/// presentation: VS16 (U+FE0F) or a skin tone modifier (U+1F3FB..U+1F3FF).
pub fn is_variant_selector(c: char) -> bool {
    let ucs = c as u32;
    ucs == 0xFE0F || (0x1F3FB..=0x1F3FF).contains(&ucs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emoji_membership() {
        assert!(is_emoji('😀')); // U+1F600
        assert!(is_emoji('🚀')); // U+1F680
        assert!(is_emoji('⌚')); // U+231A
        assert!(!is_emoji('A'));
        assert!(!is_emoji('中'));
    }

    #[test]
    fn unqualified_is_emoji_subset() {
        for iv in UNQUALIFIED_HALF_WIDTH {
            for ucs in [iv.first, iv.last] {
                assert!(
                    intervals_contain(EMOJI, ucs),
                    "{ucs:#x} unqualified but not emoji"
                );
            }
        }
    }

    #[test]
    fn unqualified_membership() {
        assert!(is_possible_unqualified_half_width('☀')); // U+2600
        assert!(is_possible_unqualified_half_width('✈')); // U+2708
        assert!(!is_possible_unqualified_half_width('😀')); // emoji-default
    }

    #[test]
    fn mono_emoji_membership() {
        assert!(is_mono_emoji('⚡')); // U+26A1
        assert!(is_mono_emoji('⌚')); // U+231A
        assert!(!is_mono_emoji('☀')); // text-default stays narrow
    }

    #[test]
    fn variant_selectors() {
        assert!(is_variant_selector('\u{FE0F}'));
        assert!(is_variant_selector('\u{1F3FB}'));
        assert!(is_variant_selector('\u{1F3FF}'));
        assert!(!is_variant_selector('\u{FE0E}')); // VS15 selects text presentation
        assert!(!is_variant_selector('\u{200D}'));
    }
}
