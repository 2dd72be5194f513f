//! Emoji membership testing.
//!
//! Emoji counting works by classifying individual characters against a
//! membership table, one `char` at a time. Multi-codepoint sequences
//! (skin-tone modifiers, ZWJ families, flag pairs) are deliberately tested
//! per scalar value, so a compound emoji may count its base character only.
//!
//! The table is injected through the [`EmojiLookup`] trait so it can be
//! swapped or mocked without touching the parser:
//!
//! ```
//! use chatlens::emoji::{EmojiLookup, EmojiTable};
//!
//! let table = EmojiTable::new();
//! assert!(table.contains('🍀'));
//! assert!(!table.contains('a'));
//! ```

use std::collections::HashSet;

/// Membership test for emoji classification.
///
/// Implemented by the built-in [`EmojiTable`] and by `HashSet<char>` for
/// ad-hoc tables in tests.
pub trait EmojiLookup {
    /// Returns `true` if `ch` is classified as an emoji.
    fn contains(&self, ch: char) -> bool;
}

/// Inclusive code point ranges of the major Unicode emoji blocks, plus the
/// scattered singletons outside them. Must stay sorted by range start.
const EMOJI_RANGES: &[(char, char)] = &[
    ('\u{203C}', '\u{203C}'), // double exclamation
    ('\u{2049}', '\u{2049}'), // exclamation question
    ('\u{231A}', '\u{231B}'), // watch, hourglass
    ('\u{23E9}', '\u{23FA}'), // media controls
    ('\u{24C2}', '\u{24C2}'), // circled M
    ('\u{25AA}', '\u{25AB}'), // small squares
    ('\u{25B6}', '\u{25B6}'), // play
    ('\u{25C0}', '\u{25C0}'), // reverse
    ('\u{25FB}', '\u{25FE}'), // medium squares
    ('\u{2600}', '\u{26FF}'), // Miscellaneous Symbols
    ('\u{2700}', '\u{27BF}'), // Dingbats
    ('\u{2934}', '\u{2935}'), // curved arrows
    ('\u{2B05}', '\u{2B07}'), // heavy arrows
    ('\u{2B1B}', '\u{2B1C}'), // large squares
    ('\u{2B50}', '\u{2B50}'), // star
    ('\u{2B55}', '\u{2B55}'), // heavy circle
    ('\u{3030}', '\u{3030}'), // wavy dash
    ('\u{303D}', '\u{303D}'), // part alternation mark
    ('\u{3297}', '\u{3297}'), // circled congratulations
    ('\u{3299}', '\u{3299}'), // circled secret
    ('\u{1F004}', '\u{1F004}'), // mahjong red dragon
    ('\u{1F0CF}', '\u{1F0CF}'), // joker
    ('\u{1F170}', '\u{1F251}'), // enclosed alphanumerics, regional indicators
    ('\u{1F300}', '\u{1F5FF}'), // Miscellaneous Symbols and Pictographs
    ('\u{1F600}', '\u{1F64F}'), // Emoticons
    ('\u{1F680}', '\u{1F6FF}'), // Transport and Map Symbols
    ('\u{1F900}', '\u{1F9FF}'), // Supplemental Symbols and Pictographs
    ('\u{1FA70}', '\u{1FAFF}'), // Symbols and Pictographs Extended-A
];

/// The built-in emoji membership table.
///
/// Backed by a static sorted range list and a binary search, so lookups are
/// cheap and the table carries no per-instance state.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmojiTable;

impl EmojiTable {
    /// Creates the built-in table.
    pub fn new() -> Self {
        Self
    }
}

impl EmojiLookup for EmojiTable {
    fn contains(&self, ch: char) -> bool {
        EMOJI_RANGES
            .binary_search_by(|&(lo, hi)| {
                if ch < lo {
                    std::cmp::Ordering::Greater
                } else if ch > hi {
                    std::cmp::Ordering::Less
                } else {
                    std::cmp::Ordering::Equal
                }
            })
            .is_ok()
    }
}

impl EmojiLookup for HashSet<char> {
    fn contains(&self, ch: char) -> bool {
        HashSet::contains(self, &ch)
    }
}

impl<L: EmojiLookup + ?Sized> EmojiLookup for &L {
    fn contains(&self, ch: char) -> bool {
        (**self).contains(ch)
    }
}
