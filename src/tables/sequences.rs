//! Emoji Presentation Sequences
//!
//! Known multi-codepoint presentation sequences keyed by their base
//! codepoint. Sequences are literal UTF-8 strings measured verbatim, with no
//! normalization. Entries are sorted by base, and all entries for one base
//! are contiguous, so a lower-bound binary search plus a forward scan finds
//! the full group.

/// One presentation sequence for a base codepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmojiSequence {
    /// First codepoint of the sequence.
    pub base: u32,
    /// The full sequence, base included.
    pub sequence: &'static str,
    /// Short name from the emoji test data.
    pub description: &'static str,
}

const fn seq(base: u32, sequence: &'static str, description: &'static str) -> EmojiSequence {
    EmojiSequence { base, sequence, description }
}

/// Sorted by `base`; entries sharing a base are contiguous.
static SEQUENCES: &[EmojiSequence] = &[
    seq(0x0023, "\u{0023}\u{FE0F}\u{20E3}", "keycap: #"),
    seq(0x002A, "\u{002A}\u{FE0F}\u{20E3}", "keycap: *"),
    seq(0x0030, "\u{0030}\u{FE0F}\u{20E3}", "keycap: 0"),
    seq(0x0031, "\u{0031}\u{FE0F}\u{20E3}", "keycap: 1"),
    seq(0x0032, "\u{0032}\u{FE0F}\u{20E3}", "keycap: 2"),
    seq(0x0033, "\u{0033}\u{FE0F}\u{20E3}", "keycap: 3"),
    seq(0x0034, "\u{0034}\u{FE0F}\u{20E3}", "keycap: 4"),
    seq(0x0035, "\u{0035}\u{FE0F}\u{20E3}", "keycap: 5"),
    seq(0x0036, "\u{0036}\u{FE0F}\u{20E3}", "keycap: 6"),
    seq(0x0037, "\u{0037}\u{FE0F}\u{20E3}", "keycap: 7"),
    seq(0x0038, "\u{0038}\u{FE0F}\u{20E3}", "keycap: 8"),
    seq(0x0039, "\u{0039}\u{FE0F}\u{20E3}", "keycap: 9"),
    seq(0x00A9, "\u{00A9}\u{FE0F}", "copyright"),
    seq(0x00AE, "\u{00AE}\u{FE0F}", "registered"),
    seq(0x203C, "\u{203C}\u{FE0F}", "double exclamation mark"),
    seq(0x2049, "\u{2049}\u{FE0F}", "exclamation question mark"),
    seq(0x2122, "\u{2122}\u{FE0F}", "trade mark"),
    seq(0x2139, "\u{2139}\u{FE0F}", "information"),
    seq(0x2194, "\u{2194}\u{FE0F}", "left-right arrow"),
    seq(0x21A9, "\u{21A9}\u{FE0F}", "right arrow curving left"),
    seq(0x2328, "\u{2328}\u{FE0F}", "keyboard"),
    seq(0x2600, "\u{2600}\u{FE0F}", "sun"),
    seq(0x2601, "\u{2601}\u{FE0F}", "cloud"),
    seq(0x260E, "\u{260E}\u{FE0F}", "telephone"),
    seq(0x2618, "\u{2618}\u{FE0F}", "shamrock"),
    seq(0x261D, "\u{261D}\u{FE0F}", "index pointing up"),
    seq(0x261D, "\u{261D}\u{1F3FB}", "index pointing up: light skin tone"),
    seq(0x261D, "\u{261D}\u{1F3FF}", "index pointing up: dark skin tone"),
    seq(0x2620, "\u{2620}\u{FE0F}", "skull and crossbones"),
    seq(0x2639, "\u{2639}\u{FE0F}", "frowning face"),
    seq(0x263A, "\u{263A}\u{FE0F}", "smiling face"),
    seq(0x2640, "\u{2640}\u{FE0F}", "female sign"),
    seq(0x2642, "\u{2642}\u{FE0F}", "male sign"),
    seq(0x2695, "\u{2695}\u{FE0F}", "medical symbol"),
    seq(0x26A0, "\u{26A0}\u{FE0F}", "warning"),
    seq(0x2708, "\u{2708}\u{FE0F}", "airplane"),
    seq(0x270C, "\u{270C}\u{FE0F}", "victory hand"),
    seq(0x270C, "\u{270C}\u{1F3FD}", "victory hand: medium skin tone"),
    seq(0x270D, "\u{270D}\u{FE0F}", "writing hand"),
    seq(0x2744, "\u{2744}\u{FE0F}", "snowflake"),
    seq(0x2764, "\u{2764}\u{FE0F}", "red heart"),
    seq(0x2764, "\u{2764}\u{FE0F}\u{200D}\u{1F525}", "heart on fire"),
    seq(0x2764, "\u{2764}\u{FE0F}\u{200D}\u{1FA79}", "mending heart"),
    seq(0x1F385, "\u{1F385}\u{1F3FB}", "Santa Claus: light skin tone"),
    seq(0x1F385, "\u{1F385}\u{1F3FF}", "Santa Claus: dark skin tone"),
    seq(0x1F3F3, "\u{1F3F3}\u{FE0F}", "white flag"),
    seq(0x1F3F3, "\u{1F3F3}\u{FE0F}\u{200D}\u{1F308}", "rainbow flag"),
    seq(0x1F3F3, "\u{1F3F3}\u{FE0F}\u{200D}\u{26A7}\u{FE0F}", "transgender flag"),
    seq(0x1F408, "\u{1F408}\u{200D}\u{2B1B}", "black cat"),
    seq(0x1F415, "\u{1F415}\u{200D}\u{1F9BA}", "service dog"),
    seq(0x1F426, "\u{1F426}\u{200D}\u{2B1B}", "black bird"),
    seq(0x1F441, "\u{1F441}\u{FE0F}", "eye"),
    seq(0x1F441, "\u{1F441}\u{FE0F}\u{200D}\u{1F5E8}\u{FE0F}", "eye in speech bubble"),
    seq(0x1F44D, "\u{1F44D}\u{1F3FB}", "thumbs up: light skin tone"),
    seq(0x1F44D, "\u{1F44D}\u{1F3FD}", "thumbs up: medium skin tone"),
    seq(0x1F44D, "\u{1F44D}\u{1F3FF}", "thumbs up: dark skin tone"),
    seq(0x1F468, "\u{1F468}\u{200D}\u{2695}\u{FE0F}", "man health worker"),
    seq(0x1F468, "\u{1F468}\u{200D}\u{1F4BB}", "man technologist"),
    seq(0x1F468, "\u{1F468}\u{200D}\u{1F692}", "man firefighter"),
    seq(
        0x1F468,
        "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F466}",
        "family: man, woman, boy",
    ),
    seq(
        0x1F468,
        "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}",
        "family: man, woman, girl, boy",
    ),
    seq(0x1F469, "\u{1F469}\u{200D}\u{2695}\u{FE0F}", "woman health worker"),
    seq(0x1F469, "\u{1F469}\u{200D}\u{1F4BB}", "woman technologist"),
    seq(
        0x1F469,
        "\u{1F469}\u{200D}\u{1F469}\u{200D}\u{1F466}",
        "family: woman, woman, boy",
    ),
    seq(0x1F62E, "\u{1F62E}\u{200D}\u{1F4A8}", "face exhaling"),
    seq(0x1F635, "\u{1F635}\u{200D}\u{1F4AB}", "face with spiral eyes"),
    seq(0x1F636, "\u{1F636}\u{200D}\u{1F32B}\u{FE0F}", "face in clouds"),
    seq(0x1F642, "\u{1F642}\u{200D}\u{2194}\u{FE0F}", "head shaking horizontally"),
    seq(0x1F642, "\u{1F642}\u{200D}\u{2195}\u{FE0F}", "head shaking vertically"),
    seq(0x1F9D1, "\u{1F9D1}\u{200D}\u{2695}\u{FE0F}", "health worker"),
    seq(0x1F9D1, "\u{1F9D1}\u{200D}\u{1F4BB}", "technologist"),
    seq(0x1F9D1, "\u{1F9D1}\u{200D}\u{1F692}", "firefighter"),
];

/// All known presentation sequences for a base codepoint, in table order.
/// Empty when the codepoint has none.
pub fn sequences_for(base: char) -> &'static [EmojiSequence] {
    let ucs = base as u32;
    let start = SEQUENCES.partition_point(|s| s.base < ucs);
    let end = start + SEQUENCES[start..].partition_point(|s| s.base == ucs);
    &SEQUENCES[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sorted_by_base() {
        for pair in SEQUENCES.windows(2) {
            assert!(pair[0].base <= pair[1].base);
        }
    }

    #[test]
    fn sequences_start_with_base() {
        for s in SEQUENCES {
            assert_eq!(s.sequence.chars().next().map(|c| c as u32), Some(s.base));
        }
    }

    #[test]
    fn lookup_hits() {
        let group = sequences_for('\u{2764}');
        assert_eq!(group.len(), 3);
        assert_eq!(group[0].description, "red heart");

        let keycap = sequences_for('#');
        assert_eq!(keycap.len(), 1);
        assert_eq!(keycap[0].sequence, "#\u{FE0F}\u{20E3}");
    }

    #[test]
    fn lookup_misses() {
        assert!(sequences_for('a').is_empty());
        assert!(sequences_for('中').is_empty());
        assert!(sequences_for('\u{10FFFD}').is_empty());
    }
}
