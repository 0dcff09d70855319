//! String Width Aggregation
//!
//! Sums display-unit widths over a whole string. A control character
//! anywhere in the input makes the total unmeasurable (None); the caller
//! decides whether that is fatal, or measures unit by unit with a clamping
//! policy from [`WidthIter`] instead.

use crate::iter::WidthIter;
use crate::mode::{current_mode, WidthMode};

/// Total cell width of a string under the current capability mode.
/// None if any unit resolves to a control character.
pub fn string_width(s: &str) -> Option<usize> {
    string_width_with(s, current_mode())
}

/// Total cell width of a string under an explicit capability mode.
pub fn string_width_with(s: &str, mode: WidthMode) -> Option<usize> {
    // Fast path: printable ASCII is always one cell per byte.
    if s.bytes().all(|b| (0x20..=0x7E).contains(&b)) {
        return Some(s.len());
    }

    let mut iter = WidthIter::with_mode(s, mode);
    let mut width = 0usize;
    while iter.next().is_some() {
        let w = iter.unit_width_signed();
        if w < 0 {
            return None;
        }
        width += w as usize;
    }
    Some(width)
}
