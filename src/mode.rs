//! Capability Mode State
//!
//! Which width a terminal gives a codepoint depends on what the terminal can
//! do: color emoji, full-width glyphs, surrogate pairs, legacy CJK
//! codepages. Those capabilities are detected (or forced) by the caller and
//! consumed here as plain flags; this module never probes anything.
//!
//! A process-wide current mode lives in a `thread_local!` so the bare entry
//! points ([`crate::resolve_width`], [`crate::string_width`]) work the way a
//! classic wcwidth does. Every operation also has a `_with` form taking an
//! explicit [`WidthMode`], which is the preferred API: a `WidthMode` is
//! `Copy`, and resolution against it is a pure function.
//!
//! # API
//!
//! - [`current_mode`], [`set_mode`], [`configure`], [`reset_mode`] - Mode state
//! - [`ModeOverrides`] - Tri-state per-field overrides (no change / force)
//! - [`CombiningMarkWidthScope`] - Scoped combining-mark-width override
//! - [`is_cjk_codepage`] - Legacy CJK console codepage check

use std::cell::Cell;

use bitflags::bitflags;
use tracing::debug;

bitflags! {
    /// Terminal capability flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ModeFlags: u8 {
        /// Terminal renders color emoji glyphs.
        const COLOR_EMOJI = 1 << 0;
        /// Full-width glyphs actually occupy two cells.
        const FULL_WIDTH = 1 << 1;
        /// Terminal cannot render outside the BMP (UCS-2 limitation).
        const ONLY_UCS2 = 1 << 2;
        /// Windows-11-era conhost: some emoji render as full-width
        /// monochrome glyphs, and fullwidth forms work despite UCS-2 mode.
        const WIN11_MONO_EMOJI = 1 << 3;
        /// Legacy CJK codepage: East Asian Ambiguous characters are wide.
        const CJK_AMBIGUOUS_WIDE = 1 << 4;
    }
}

/// Which resolution function of the family is active for a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolver {
    /// Full Unicode range, ambiguous characters narrow.
    Plain,
    /// Full Unicode range, ambiguous characters wide.
    CjkAmbiguous,
    /// UCS-2-limited terminal, ambiguous characters narrow.
    Ucs2Limited,
    /// UCS-2-limited terminal, ambiguous characters wide.
    CjkAmbiguousUcs2,
}

/// A capability mode snapshot. Cheap to copy, trivial to compare; width
/// resolution is a pure function of (codepoint, mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidthMode {
    pub flags: ModeFlags,
    /// Cell width reported for combining marks. Normally 0; forced to 1 for
    /// diagnostic analysis of how a terminal advances over them.
    pub combining_mark_width: i8,
}

impl Default for WidthMode {
    fn default() -> Self {
        Self {
            flags: ModeFlags::FULL_WIDTH,
            combining_mark_width: 0,
        }
    }
}

impl WidthMode {
    pub fn color_emoji(&self) -> bool {
        self.flags.contains(ModeFlags::COLOR_EMOJI)
    }

    pub fn full_width_available(&self) -> bool {
        self.flags.contains(ModeFlags::FULL_WIDTH)
    }

    pub fn only_ucs2(&self) -> bool {
        self.flags.contains(ModeFlags::ONLY_UCS2)
    }

    pub fn win11_mono_emoji(&self) -> bool {
        self.flags.contains(ModeFlags::WIN11_MONO_EMOJI)
    }

    pub fn cjk_ambiguous_wide(&self) -> bool {
        self.flags.contains(ModeFlags::CJK_AMBIGUOUS_WIDE)
    }

    /// The resolution variant this mode selects. Explicit dispatch; there
    /// is no swappable function pointer.
    pub fn resolver(&self) -> Resolver {
        match (self.cjk_ambiguous_wide(), self.only_ucs2()) {
            (false, false) => Resolver::Plain,
            (true, false) => Resolver::CjkAmbiguous,
            (false, true) => Resolver::Ucs2Limited,
            (true, true) => Resolver::CjkAmbiguousUcs2,
        }
    }
}

/// Per-field mode overrides: `None` leaves the field unchanged, `Some`
/// forces it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModeOverrides {
    pub color_emoji: Option<bool>,
    pub full_width_available: Option<bool>,
    pub only_ucs2: Option<bool>,
    pub win11_mono_emoji: Option<bool>,
    pub cjk_ambiguous_wide: Option<bool>,
    pub combining_mark_width: Option<i8>,
}

impl ModeOverrides {
    /// Apply the overrides to a mode, returning the adjusted mode.
    pub fn apply(&self, mut mode: WidthMode) -> WidthMode {
        let mut set = |flag, value: Option<bool>| {
            if let Some(on) = value {
                mode.flags.set(flag, on);
            }
        };
        set(ModeFlags::COLOR_EMOJI, self.color_emoji);
        set(ModeFlags::FULL_WIDTH, self.full_width_available);
        set(ModeFlags::ONLY_UCS2, self.only_ucs2);
        set(ModeFlags::WIN11_MONO_EMOJI, self.win11_mono_emoji);
        set(ModeFlags::CJK_AMBIGUOUS_WIDE, self.cjk_ambiguous_wide);
        if let Some(w) = self.combining_mark_width {
            mode.combining_mark_width = w;
        }
        mode
    }
}

// =============================================================================
// Current Mode
// =============================================================================

thread_local! {
    static CURRENT_MODE: Cell<WidthMode> = Cell::new(WidthMode::default());
}

/// Snapshot of the current capability mode.
pub fn current_mode() -> WidthMode {
    CURRENT_MODE.with(Cell::get)
}

/// Replace the current capability mode wholesale.
pub fn set_mode(mode: WidthMode) {
    debug!(?mode, resolver = ?mode.resolver(), "set width mode");
    CURRENT_MODE.with(|m| m.set(mode));
}

/// Apply per-field overrides to the current mode. Fields left `None` keep
/// their current value.
pub fn configure(overrides: &ModeOverrides) {
    let mode = overrides.apply(current_mode());
    set_mode(mode);
}

/// Reset the current mode to the defaults (full-width available, no color
/// emoji, combining marks zero width).
pub fn reset_mode() {
    set_mode(WidthMode::default());
}

// =============================================================================
// Scoped Overrides
// =============================================================================

/// Temporarily forces the combining-mark width of the current mode,
/// restoring the previous value when dropped, on every exit path
/// including early returns and panics.
///
/// ```
/// use cellwidth::{current_mode, CombiningMarkWidthScope};
///
/// {
///     let _scope = CombiningMarkWidthScope::new(1);
///     assert_eq!(current_mode().combining_mark_width, 1);
/// }
/// assert_eq!(current_mode().combining_mark_width, 0);
/// ```
pub struct CombiningMarkWidthScope {
    old: i8,
}

impl CombiningMarkWidthScope {
    pub fn new(width: i8) -> Self {
        let mut mode = current_mode();
        let old = mode.combining_mark_width;
        mode.combining_mark_width = width;
        set_mode(mode);
        Self { old }
    }
}

impl Drop for CombiningMarkWidthScope {
    fn drop(&mut self) {
        let mut mode = current_mode();
        mode.combining_mark_width = self.old;
        set_mode(mode);
    }
}

// =============================================================================
// Codepage Classification
// =============================================================================

/// Check whether a console output codepage is a legacy CJK codepage
/// (Shift-JIS, GBK, EUC-KR, Big5). Terminals on these codepages render
/// East Asian Ambiguous characters as two cells.
pub fn is_cjk_codepage(cp: u32) -> bool {
    matches!(cp, 932 | 936 | 949 | 950)
}
