//! Assigned Codepoint Descriptors
//!
//! Maps codepoints to human-readable names: an exact-point table for notable
//! format and legacy characters, and a range table naming Unicode blocks.
//! This data feeds diagnostics and skip-filtering (ideograph detection); it
//! never participates in width arithmetic.

/// A named block of codepoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub first: u32,
    pub last: u32,
    pub name: &'static str,
}

const fn blk(first: u32, last: u32, name: &'static str) -> Block {
    Block { first, last, name }
}

/// Exact points with names more specific than their block.
static CODEPOINTS: &[(u32, &str)] = &[
    (0x00AD, "SOFT HYPHEN"),
    (0x034F, "COMBINING GRAPHEME JOINER"),
    (0x061C, "ARABIC LETTER MARK"),
    (0x200B, "ZERO WIDTH SPACE"),
    (0x200C, "ZERO WIDTH NON-JOINER"),
    (0x200D, "ZERO WIDTH JOINER"),
    (0x2028, "LINE SEPARATOR"),
    (0x2029, "PARAGRAPH SEPARATOR"),
    (0x2060, "WORD JOINER"),
    (0x2329, "LEFT-POINTING ANGLE BRACKET"),
    (0x232A, "RIGHT-POINTING ANGLE BRACKET"),
    (0x3000, "IDEOGRAPHIC SPACE"),
    (0x303F, "IDEOGRAPHIC HALF FILL SPACE"),
    (0xFE0E, "VARIATION SELECTOR-15"),
    (0xFE0F, "VARIATION SELECTOR-16"),
    (0xFEFF, "ZERO WIDTH NO-BREAK SPACE"),
    (0xFFFD, "REPLACEMENT CHARACTER"),
];

/// Unicode blocks, sorted and non-overlapping. Gaps between blocks are
/// unassigned space.
static BLOCKS: &[Block] = &[
    blk(0x0000, 0x007F, "Basic Latin"),
    blk(0x0080, 0x00FF, "Latin-1 Supplement"),
    blk(0x0100, 0x017F, "Latin Extended-A"),
    blk(0x0180, 0x024F, "Latin Extended-B"),
    blk(0x0250, 0x02AF, "IPA Extensions"),
    blk(0x02B0, 0x02FF, "Spacing Modifier Letters"),
    blk(0x0300, 0x036F, "Combining Diacritical Marks"),
    blk(0x0370, 0x03FF, "Greek and Coptic"),
    blk(0x0400, 0x04FF, "Cyrillic"),
    blk(0x0500, 0x052F, "Cyrillic Supplement"),
    blk(0x0530, 0x058F, "Armenian"),
    blk(0x0590, 0x05FF, "Hebrew"),
    blk(0x0600, 0x06FF, "Arabic"),
    blk(0x0700, 0x074F, "Syriac"),
    blk(0x0750, 0x077F, "Arabic Supplement"),
    blk(0x0780, 0x07BF, "Thaana"),
    blk(0x07C0, 0x07FF, "NKo"),
    blk(0x0900, 0x097F, "Devanagari"),
    blk(0x0980, 0x09FF, "Bengali"),
    blk(0x0A00, 0x0A7F, "Gurmukhi"),
    blk(0x0A80, 0x0AFF, "Gujarati"),
    blk(0x0B00, 0x0B7F, "Oriya"),
    blk(0x0B80, 0x0BFF, "Tamil"),
    blk(0x0C00, 0x0C7F, "Telugu"),
    blk(0x0C80, 0x0CFF, "Kannada"),
    blk(0x0D00, 0x0D7F, "Malayalam"),
    blk(0x0D80, 0x0DFF, "Sinhala"),
    blk(0x0E00, 0x0E7F, "Thai"),
    blk(0x0E80, 0x0EFF, "Lao"),
    blk(0x0F00, 0x0FFF, "Tibetan"),
    blk(0x1000, 0x109F, "Myanmar"),
    blk(0x10A0, 0x10FF, "Georgian"),
    blk(0x1100, 0x11FF, "Hangul Jamo"),
    blk(0x1200, 0x137F, "Ethiopic"),
    blk(0x1380, 0x139F, "Ethiopic Supplement"),
    blk(0x13A0, 0x13FF, "Cherokee"),
    blk(0x1400, 0x167F, "Unified Canadian Aboriginal Syllabics"),
    blk(0x1680, 0x169F, "Ogham"),
    blk(0x16A0, 0x16FF, "Runic"),
    blk(0x1700, 0x171F, "Tagalog"),
    blk(0x1720, 0x173F, "Hanunoo"),
    blk(0x1740, 0x175F, "Buhid"),
    blk(0x1760, 0x177F, "Tagbanwa"),
    blk(0x1780, 0x17FF, "Khmer"),
    blk(0x1800, 0x18AF, "Mongolian"),
    blk(0x1900, 0x194F, "Limbu"),
    blk(0x1950, 0x197F, "Tai Le"),
    blk(0x1980, 0x19DF, "New Tai Lue"),
    blk(0x19E0, 0x19FF, "Khmer Symbols"),
    blk(0x1A00, 0x1A1F, "Buginese"),
    blk(0x1B00, 0x1B7F, "Balinese"),
    blk(0x1D00, 0x1D7F, "Phonetic Extensions"),
    blk(0x1D80, 0x1DBF, "Phonetic Extensions Supplement"),
    blk(0x1DC0, 0x1DFF, "Combining Diacritical Marks Supplement"),
    blk(0x1E00, 0x1EFF, "Latin Extended Additional"),
    blk(0x1F00, 0x1FFF, "Greek Extended"),
    blk(0x2000, 0x206F, "General Punctuation"),
    blk(0x2070, 0x209F, "Superscripts and Subscripts"),
    blk(0x20A0, 0x20CF, "Currency Symbols"),
    blk(0x20D0, 0x20FF, "Combining Diacritical Marks for Symbols"),
    blk(0x2100, 0x214F, "Letterlike Symbols"),
    blk(0x2150, 0x218F, "Number Forms"),
    blk(0x2190, 0x21FF, "Arrows"),
    blk(0x2200, 0x22FF, "Mathematical Operators"),
    blk(0x2300, 0x23FF, "Miscellaneous Technical"),
    blk(0x2400, 0x243F, "Control Pictures"),
    blk(0x2440, 0x245F, "Optical Character Recognition"),
    blk(0x2460, 0x24FF, "Enclosed Alphanumerics"),
    blk(0x2500, 0x257F, "Box Drawing"),
    blk(0x2580, 0x259F, "Block Elements"),
    blk(0x25A0, 0x25FF, "Geometric Shapes"),
    blk(0x2600, 0x26FF, "Miscellaneous Symbols"),
    blk(0x2700, 0x27BF, "Dingbats"),
    blk(0x27C0, 0x27EF, "Miscellaneous Mathematical Symbols-A"),
    blk(0x27F0, 0x27FF, "Supplemental Arrows-A"),
    blk(0x2800, 0x28FF, "Braille Patterns"),
    blk(0x2900, 0x297F, "Supplemental Arrows-B"),
    blk(0x2980, 0x29FF, "Miscellaneous Mathematical Symbols-B"),
    blk(0x2A00, 0x2AFF, "Supplemental Mathematical Operators"),
    blk(0x2B00, 0x2BFF, "Miscellaneous Symbols and Arrows"),
    blk(0x2C60, 0x2C7F, "Latin Extended-C"),
    blk(0x2C80, 0x2CFF, "Coptic"),
    blk(0x2D00, 0x2D2F, "Georgian Supplement"),
    blk(0x2D30, 0x2D7F, "Tifinagh"),
    blk(0x2D80, 0x2DDF, "Ethiopic Extended"),
    blk(0x2E00, 0x2E7F, "Supplemental Punctuation"),
    blk(0x2E80, 0x2EFF, "CJK Radicals Supplement"),
    blk(0x2F00, 0x2FDF, "Kangxi Radicals"),
    blk(0x2FF0, 0x2FFF, "Ideographic Description Characters"),
    blk(0x3000, 0x303F, "CJK Symbols and Punctuation"),
    blk(0x3040, 0x309F, "Hiragana"),
    blk(0x30A0, 0x30FF, "Katakana"),
    blk(0x3100, 0x312F, "Bopomofo"),
    blk(0x3130, 0x318F, "Hangul Compatibility Jamo"),
    blk(0x3190, 0x319F, "Kanbun"),
    blk(0x31A0, 0x31BF, "Bopomofo Extended"),
    blk(0x31C0, 0x31EF, "CJK Strokes"),
    blk(0x31F0, 0x31FF, "Katakana Phonetic Extensions"),
    blk(0x3200, 0x32FF, "Enclosed CJK Letters and Months"),
    blk(0x3300, 0x33FF, "CJK Compatibility"),
    blk(0x3400, 0x4DBF, "CJK Unified Ideographs Extension A"),
    blk(0x4DC0, 0x4DFF, "Yijing Hexagram Symbols"),
    blk(0x4E00, 0x9FFF, "CJK Unified Ideographs"),
    blk(0xA000, 0xA48F, "Yi Syllables"),
    blk(0xA490, 0xA4CF, "Yi Radicals"),
    blk(0xA700, 0xA71F, "Modifier Tone Letters"),
    blk(0xA720, 0xA7FF, "Latin Extended-D"),
    blk(0xA800, 0xA82F, "Syloti Nagri"),
    blk(0xA960, 0xA97F, "Hangul Jamo Extended-A"),
    blk(0xAC00, 0xD7A3, "Hangul Syllables"),
    blk(0xE000, 0xF8FF, "Private Use Area"),
    blk(0xF900, 0xFAFF, "CJK Compatibility Ideographs"),
    blk(0xFB00, 0xFB4F, "Alphabetic Presentation Forms"),
    blk(0xFB50, 0xFDFF, "Arabic Presentation Forms-A"),
    blk(0xFE00, 0xFE0F, "Variation Selectors"),
    blk(0xFE10, 0xFE1F, "Vertical Forms"),
    blk(0xFE20, 0xFE2F, "Combining Half Marks"),
    blk(0xFE30, 0xFE4F, "CJK Compatibility Forms"),
    blk(0xFE50, 0xFE6F, "Small Form Variants"),
    blk(0xFE70, 0xFEFF, "Arabic Presentation Forms-B"),
    blk(0xFF00, 0xFFEF, "Halfwidth and Fullwidth Forms"),
    blk(0xFFF9, 0xFFFD, "Specials"),
    blk(0x10000, 0x1007F, "Linear B Syllabary"),
    blk(0x10080, 0x100FF, "Linear B Ideograms"),
    blk(0x10100, 0x1013F, "Aegean Numbers"),
    blk(0x10300, 0x1032F, "Old Italic"),
    blk(0x10330, 0x1034F, "Gothic"),
    blk(0x10400, 0x1044F, "Deseret"),
    blk(0x10800, 0x1083F, "Cypriot Syllabary"),
    blk(0x10A00, 0x10A5F, "Kharoshthi"),
    blk(0x12000, 0x123FF, "Cuneiform"),
    blk(0x18800, 0x18AFF, "Tangut Components"),
    blk(0x18B00, 0x18CFF, "Khitan Small Script"),
    blk(0x1AFF0, 0x1AFFF, "Kana Extended-B"),
    blk(0x1B000, 0x1B0FF, "Kana Supplement"),
    blk(0x1B100, 0x1B12F, "Kana Extended-A"),
    blk(0x1B130, 0x1B16F, "Small Kana Extension"),
    blk(0x1B170, 0x1B2FF, "Nushu"),
    blk(0x1D100, 0x1D1FF, "Musical Symbols"),
    blk(0x1D200, 0x1D24F, "Ancient Greek Musical Notation"),
    blk(0x1D300, 0x1D35F, "Tai Xuan Jing Symbols"),
    blk(0x1D400, 0x1D7FF, "Mathematical Alphanumeric Symbols"),
    blk(0x1F000, 0x1F02F, "Mahjong Tiles"),
    blk(0x1F030, 0x1F09F, "Domino Tiles"),
    blk(0x1F0A0, 0x1F0FF, "Playing Cards"),
    blk(0x1F100, 0x1F1FF, "Enclosed Alphanumeric Supplement"),
    blk(0x1F200, 0x1F2FF, "Enclosed Ideographic Supplement"),
    blk(0x1F300, 0x1F5FF, "Miscellaneous Symbols and Pictographs"),
    blk(0x1F600, 0x1F64F, "Emoticons"),
    blk(0x1F650, 0x1F67F, "Ornamental Dingbats"),
    blk(0x1F680, 0x1F6FF, "Transport and Map Symbols"),
    blk(0x1F700, 0x1F77F, "Alchemical Symbols"),
    blk(0x1F780, 0x1F7FF, "Geometric Shapes Extended"),
    blk(0x1F800, 0x1F8FF, "Supplemental Arrows-C"),
    blk(0x1F900, 0x1F9FF, "Supplemental Symbols and Pictographs"),
    blk(0x1FA00, 0x1FA6F, "Chess Symbols"),
    blk(0x1FA70, 0x1FAFF, "Symbols and Pictographs Extended-A"),
    blk(0x20000, 0x2A6DF, "CJK Unified Ideographs Extension B"),
    blk(0x2A700, 0x2B73F, "CJK Unified Ideographs Extension C"),
    blk(0x2B740, 0x2B81F, "CJK Unified Ideographs Extension D"),
    blk(0x2B820, 0x2CEAF, "CJK Unified Ideographs Extension E"),
    blk(0x2CEB0, 0x2EBEF, "CJK Unified Ideographs Extension F"),
    blk(0x2F800, 0x2FA1F, "CJK Compatibility Ideographs Supplement"),
    blk(0x30000, 0x3134F, "CJK Unified Ideographs Extension G"),
    blk(0x31350, 0x323AF, "CJK Unified Ideographs Extension H"),
    blk(0xE0000, 0xE007F, "Tags"),
    blk(0xE0100, 0xE01EF, "Variation Selectors Supplement"),
    blk(0xF0000, 0xFFFFD, "Supplementary Private Use Area-A"),
    blk(0x100000, 0x10FFFD, "Supplementary Private Use Area-B"),
];

/// Descriptive name for a codepoint: exact-point name if one exists,
/// otherwise the containing block's name. None for unassigned space.
pub fn assigned_name(c: char) -> Option<&'static str> {
    let ucs = c as u32;

    if let Ok(i) = CODEPOINTS.binary_search_by_key(&ucs, |&(cp, _)| cp) {
        return Some(CODEPOINTS[i].1);
    }

    let i = BLOCKS.partition_point(|b| b.last < ucs);
    match BLOCKS.get(i) {
        Some(b) if b.first <= ucs => Some(b.name),
        _ => None,
    }
}

/// Check whether the codepoint belongs to a named ideograph block.
pub fn is_ideograph(c: char) -> bool {
    assigned_name(c).is_some_and(|name| name.contains("Ideograph"))
}

/// The full named block list, sorted by first codepoint. The verifier walks
/// this when no explicit ranges are given.
pub fn blocks() -> &'static [Block] {
    BLOCKS
}
