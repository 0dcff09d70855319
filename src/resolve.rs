//! Width Resolution
//!
//! Maps one codepoint plus a capability mode to a signed cell width:
//!
//! - `-1` - C0/C1 control character, must not be measured in a cell
//! - `0`  - zero-width combining or format character
//! - `1`  - single cell
//! - `2`  - double cell
//!
//! The family has four variants selected by [`WidthMode::resolver`]: plain,
//! CJK-ambiguous-wide, UCS-2-limited, and both combined. The ranges below
//! encode *observed terminal rendering*, deliberately diverging from the
//! POSIX wcwidth reference in documented places (Hangul Jamo initial
//! consonants are wide here; a few CJK-block ranges are narrow). Those
//! divergences are the contract; do not "fix" them toward the generic
//! Unicode East Asian Width algorithm.

use crate::mode::{current_mode, Resolver, WidthMode};
use crate::tables::{self, emoji};

/// Resolve the cell width of a codepoint under the current mode.
pub fn resolve_width(c: char) -> i8 {
    resolve_width_with(c, &current_mode())
}

/// Resolve the cell width of a codepoint under an explicit mode. Pure
/// function of its inputs.
pub fn resolve_width_with(c: char, mode: &WidthMode) -> i8 {
    match mode.resolver() {
        Resolver::Plain => width_plain(c, mode),
        Resolver::CjkAmbiguous => width_cjk(c, mode),
        Resolver::Ucs2Limited => width_ucs2(c, mode),
        Resolver::CjkAmbiguousUcs2 => width_cjk_ucs2(c, mode),
    }
}

/// Shared prefix of every variant: NUL, controls, printable ASCII, color
/// emoji handling, combining marks. Returns None when the codepoint falls
/// through to the range rules.
fn width_common(c: char, mode: &WidthMode, mono_emoji: bool) -> Option<i8> {
    let ucs = c as u32;

    if ucs == 0 {
        return Some(0);
    }
    if ucs < 0x20 {
        return Some(-1);
    }
    if ucs <= 0x7E {
        return Some(1);
    }
    if ucs < 0xA0 {
        return Some(-1);
    }

    if mode.color_emoji() {
        // Unqualified forms are width 1 without FE0F/etc. The iterator
        // promotes them to 2 when a qualifying codepoint follows.
        if emoji::is_possible_unqualified_half_width(c) {
            return Some(1);
        }
        if emoji::is_emoji(c) {
            return Some(2);
        }
    } else if mono_emoji && mode.win11_mono_emoji() && emoji::is_mono_emoji(c) {
        // Windows 11 conhost renders some emoji as full-width monochrome.
        return Some(2);
    }

    if tables::is_combining(c) {
        return Some(mode.combining_mark_width);
    }

    None
}

/// Width 2 for broad CJK ranges, minus the halfwidth exception carve-outs.
fn cjk_range_width(c: char) -> i8 {
    if tables::is_cjk_halfwidth_exception(c) { 1 } else { 2 }
}

fn width_plain(c: char, mode: &WidthMode) -> i8 {
    if let Some(w) = width_common(c, mode, false) {
        return w;
    }

    let ucs = c as u32;
    if ucs < 0x1100 || !mode.full_width_available() {
        return 1;
    }
    if ucs <= 0x115F {
        // Hangul Jamo initial consonants (wcwidth reference says narrow).
        return 2;
    }
    if ucs == 0x2329 || ucs == 0x232A {
        return 2;
    }
    if (0x2E80..=0xA4CF).contains(&ucs) {
        return cjk_range_width(c);
    }
    if (0xAC00..=0xD7A3).contains(&ucs) {
        // Hangul Syllables
        return cjk_range_width(c);
    }
    if (0xF900..=0xFAFF).contains(&ucs)       // CJK Compatibility Ideographs
        || (0xFE10..=0xFE19).contains(&ucs)   // Vertical Forms
        || (0xFE30..=0xFE6F).contains(&ucs)   // CJK Compatibility Forms
        || (0xFF00..=0xFF60).contains(&ucs)   // Fullwidth Forms
        || (0xFFE0..=0xFFE6).contains(&ucs)
        || (0x20000..=0x2FFFD).contains(&ucs)
        || (0x30000..=0x3FFFD).contains(&ucs)
    {
        return 2;
    }
    1
}

fn width_ucs2(c: char, mode: &WidthMode) -> i8 {
    if let Some(w) = width_common(c, mode, true) {
        return w;
    }

    let ucs = c as u32;
    if ucs < 0x1100 || !mode.full_width_available() {
        return 1;
    }
    if ucs <= 0x115F {
        // Hangul Jamo initial consonants (wcwidth reference says narrow).
        return 2;
    }
    if ucs == 0x2329 || ucs == 0x232A {
        return 2;
    }
    if (0x2E80..=0xA4CF).contains(&ucs) {
        return cjk_range_width(c);
    }
    if (0xAC00..=0xD7A3).contains(&ucs) {
        // Hangul Syllables
        return cjk_range_width(c);
    }
    if (0xF900..=0xFAFF).contains(&ucs)       // CJK Compatibility Ideographs
        || (0xFE10..=0xFE19).contains(&ucs)   // Vertical Forms
        || (0xFE30..=0xFE6F).contains(&ucs)   // CJK Compatibility Forms
    {
        return 2;
    }
    if mode.win11_mono_emoji()
        && ((0xFF00..=0xFF60).contains(&ucs)  // Fullwidth Forms
            || (0xFFE0..=0xFFE6).contains(&ucs))
    {
        return 2;
    }
    if ucs >= 0x10000 {
        // Surrogate-pair rendering on UCS-2-only consoles: always 2 cells,
        // regardless of category.
        return 2;
    }
    1
}

fn width_cjk(c: char, mode: &WidthMode) -> i8 {
    if tables::is_east_asian_ambiguous(c) {
        return 2;
    }
    width_plain(c, mode)
}

fn width_cjk_ucs2(c: char, mode: &WidthMode) -> i8 {
    if tables::is_east_asian_ambiguous(c) {
        return 2;
    }
    width_ucs2(c, mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::ModeFlags;

    fn mode(flags: ModeFlags) -> WidthMode {
        WidthMode {
            flags,
            combining_mark_width: 0,
        }
    }

    fn default_mode() -> WidthMode {
        mode(ModeFlags::FULL_WIDTH)
    }

    // ── controls and ASCII ──

    #[test]
    fn nul_is_zero() {
        assert_eq!(resolve_width_with('\0', &default_mode()), 0);
    }

    #[test]
    fn controls_are_negative() {
        let m = default_mode();
        assert_eq!(resolve_width_with('\x01', &m), -1);
        assert_eq!(resolve_width_with('\t', &m), -1);
        assert_eq!(resolve_width_with('\x1F', &m), -1);
        assert_eq!(resolve_width_with('\x7F', &m), -1); // DEL
        assert_eq!(resolve_width_with('\u{9F}', &m), -1); // C1
    }

    #[test]
    fn ascii_printable_is_one() {
        let m = default_mode();
        for ucs in 0x20..=0x7Eu32 {
            let c = char::from_u32(ucs).unwrap();
            assert_eq!(resolve_width_with(c, &m), 1, "{ucs:#x}");
        }
    }

    // ── combining marks ──

    #[test]
    fn combining_default_zero() {
        assert_eq!(resolve_width_with('\u{0301}', &default_mode()), 0);
    }

    #[test]
    fn combining_forced_one() {
        let m = WidthMode {
            flags: ModeFlags::FULL_WIDTH,
            combining_mark_width: 1,
        };
        assert_eq!(resolve_width_with('\u{0301}', &m), 1);
    }

    // ── CJK and Hangul ──

    #[test]
    fn cjk_ideograph_wide() {
        assert_eq!(resolve_width_with('中', &default_mode()), 2);
    }

    #[test]
    fn hangul_jamo_initial_consonants_wide() {
        // Deliberate divergence from the wcwidth reference table.
        let m = default_mode();
        for ucs in 0x1100..=0x115Fu32 {
            let c = char::from_u32(ucs).unwrap();
            assert_eq!(resolve_width_with(c, &m), 2, "{ucs:#x}");
        }
    }

    #[test]
    fn angle_brackets_wide() {
        let m = default_mode();
        assert_eq!(resolve_width_with('\u{2329}', &m), 2);
        assert_eq!(resolve_width_with('\u{232A}', &m), 2);
    }

    #[test]
    fn halfwidth_exceptions_narrow() {
        let m = default_mode();
        assert_eq!(resolve_width_with('\u{303F}', &m), 1);
        assert_eq!(resolve_width_with('\u{3248}', &m), 1);
        assert_eq!(resolve_width_with('\u{4DC0}', &m), 1);
        // Immediate neighbors stay wide.
        assert_eq!(resolve_width_with('\u{3247}', &m), 2);
        assert_eq!(resolve_width_with('\u{4E00}', &m), 2);
    }

    #[test]
    fn hangul_syllables_wide() {
        assert_eq!(resolve_width_with('\u{AC00}', &default_mode()), 2);
        assert_eq!(resolve_width_with('\u{D7A3}', &default_mode()), 2);
    }

    #[test]
    fn no_full_width_mode_narrows_everything() {
        let m = mode(ModeFlags::empty());
        assert_eq!(resolve_width_with('中', &m), 1);
        assert_eq!(resolve_width_with('\u{1100}', &m), 1);
        assert_eq!(resolve_width_with('\u{FF01}', &m), 1);
    }

    #[test]
    fn fullwidth_and_supplementary_wide() {
        let m = default_mode();
        assert_eq!(resolve_width_with('\u{FF01}', &m), 2); // fullwidth !
        assert_eq!(resolve_width_with('\u{FFE0}', &m), 2); // fullwidth cent
        assert_eq!(resolve_width_with('\u{20000}', &m), 2); // Extension B
        assert_eq!(resolve_width_with('\u{30000}', &m), 2); // Extension G
    }

    // ── emoji modes ──

    #[test]
    fn emoji_without_color_emoji_support() {
        // U+1F600 is not in any wide range without emoji handling.
        assert_eq!(resolve_width_with('😀', &default_mode()), 1);
    }

    #[test]
    fn emoji_with_color_emoji_support() {
        let m = mode(ModeFlags::FULL_WIDTH | ModeFlags::COLOR_EMOJI);
        assert_eq!(resolve_width_with('😀', &m), 2);
        // Unqualified text-presentation emoji stay narrow until qualified.
        assert_eq!(resolve_width_with('☀', &m), 1);
    }

    #[test]
    fn mono_emoji_only_in_ucs2_win11() {
        let m = mode(ModeFlags::FULL_WIDTH | ModeFlags::ONLY_UCS2 | ModeFlags::WIN11_MONO_EMOJI);
        assert_eq!(resolve_width_with('⚡', &m), 2);

        // Not without the win11 flag.
        let m = mode(ModeFlags::FULL_WIDTH | ModeFlags::ONLY_UCS2);
        assert_eq!(resolve_width_with('⚡', &m), 1);

        // Not in the full-range variant either.
        let m = mode(ModeFlags::FULL_WIDTH | ModeFlags::WIN11_MONO_EMOJI);
        assert_eq!(resolve_width_with('⚡', &m), 1);
    }

    // ── UCS-2 limitation ──

    #[test]
    fn ucs2_supplementary_always_wide() {
        let m = mode(ModeFlags::FULL_WIDTH | ModeFlags::ONLY_UCS2);
        assert_eq!(resolve_width_with('\u{10000}', &m), 2); // Linear B
        assert_eq!(resolve_width_with('😀', &m), 2);
        assert_eq!(resolve_width_with('\u{10300}', &m), 2); // Old Italic
        // Combining marks keep their width even above the BMP.
        assert_eq!(resolve_width_with('\u{E0001}', &m), 0);
    }

    #[test]
    fn ucs2_fullwidth_forms_gated_on_win11() {
        let m = mode(ModeFlags::FULL_WIDTH | ModeFlags::ONLY_UCS2);
        assert_eq!(resolve_width_with('\u{FF01}', &m), 1);

        let m = mode(ModeFlags::FULL_WIDTH | ModeFlags::ONLY_UCS2 | ModeFlags::WIN11_MONO_EMOJI);
        assert_eq!(resolve_width_with('\u{FF01}', &m), 2);
    }

    // ── CJK ambiguous ──

    #[test]
    fn ambiguous_wide_in_cjk_mode() {
        let plain = default_mode();
        let cjk = mode(ModeFlags::FULL_WIDTH | ModeFlags::CJK_AMBIGUOUS_WIDE);
        assert_eq!(resolve_width_with('§', &plain), 1);
        assert_eq!(resolve_width_with('§', &cjk), 2);
        assert_eq!(resolve_width_with('Ω', &cjk), 2);
        // Non-ambiguous characters are unaffected.
        assert_eq!(resolve_width_with('A', &cjk), 1);
    }

    #[test]
    fn ambiguous_wide_in_cjk_ucs2_mode() {
        let m = mode(ModeFlags::FULL_WIDTH | ModeFlags::CJK_AMBIGUOUS_WIDE | ModeFlags::ONLY_UCS2);
        assert_eq!(resolve_width_with('§', &m), 2);
        assert_eq!(resolve_width_with('\u{10300}', &m), 2); // supplementary
    }

    // ── purity ──

    #[test]
    fn resolution_is_idempotent() {
        let m = mode(ModeFlags::FULL_WIDTH | ModeFlags::COLOR_EMOJI);
        for c in ['a', '中', '😀', '\u{0301}', '\u{303F}'] {
            assert_eq!(resolve_width_with(c, &m), resolve_width_with(c, &m));
        }
    }
}
