//! # cellwidth
//!
//! Terminal cell-width engine: how many fixed-width cells does a Unicode
//! character (or a multi-codepoint emoji sequence) occupy when rendered?
//!
//! Real terminals do not implement the Unicode East Asian Width report;
//! they implement an accumulation of historical behavior. This crate
//! encodes that observed behavior behind a capability mode: color emoji
//! support, full-width glyph availability, UCS-2-only rendering, legacy CJK
//! codepages. The `wcv` companion binary verifies the engine's predictions
//! against a live terminal by measuring actual cursor movement.
//!
//! ## Architecture
//!
//! ```text
//! interval tables → resolve_width(codepoint, mode) → WidthIter → string_width
//! ```
//!
//! ## Modules
//!
//! - [`tables`] - Interval tables per semantic category (combining,
//!   ambiguous, emoji, kana, assigned blocks) and their lookups
//! - [`mode`] - Capability mode state, overrides, scoped diagnostics
//! - [`resolve`] - The width resolution function family
//! - [`iter`] - Display-unit iterator with emoji sequence merging
//! - [`measure`] - Whole-string width aggregation
//! - [`parse`] - Codepoint and range argument parsing
//! - [`filter`] - Category skip filter for range scans

pub mod filter;
pub mod iter;
pub mod measure;
pub mod mode;
pub mod parse;
pub mod resolve;
pub mod tables;

// Re-export the boundary API.

pub use tables::{
    intervals_contain, is_cjk_halfwidth_exception, is_combining, is_east_asian_ambiguous,
    is_kana, Interval,
};

pub use tables::assigned::{assigned_name, blocks, is_ideograph, Block};

pub use tables::emoji::{
    is_emoji, is_mono_emoji, is_possible_unqualified_half_width, is_variant_selector,
};

pub use tables::sequences::{sequences_for, EmojiSequence};

pub use mode::{
    configure, current_mode, is_cjk_codepage, reset_mode, set_mode, CombiningMarkWidthScope,
    ModeFlags, ModeOverrides, Resolver, WidthMode,
};

pub use resolve::{resolve_width, resolve_width_with};

pub use iter::WidthIter;

pub use measure::{string_width, string_width_with};

pub use parse::{parse_codepoint, parse_codepoint_range, ParseCodepointError};

pub use filter::SkipFilter;
