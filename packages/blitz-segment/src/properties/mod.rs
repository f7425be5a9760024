//! Unicode code point classification
//!
//! Each family classifies code points through its own sorted, disjoint range
//! table. Lookups for Latin-1 code points are answered from a dense table
//! populated on first use; everything else falls back to a binary search.
//! Classification is total: code points outside every range get the family's
//! default category.

mod grapheme_table;
mod ignorable_table;
mod line_table;
mod sentence_table;
pub mod types;
mod width_table;
mod word_table;

use std::cmp::Ordering;

use once_cell::sync::Lazy;

pub use types::{
    EastAsianWidth, GraphemeCategory, LineClass, LineProperty, SentenceCategory, WordCategory,
};

/// Number of code points served by the dense fast path
const LATIN1_LEN: usize = 0x100;

/// Range table with a dense Latin-1 fast path
pub(crate) struct PropertyTable<C: 'static> {
    ranges: &'static [(u32, u32, C)],
    latin1: [C; LATIN1_LEN],
    default: C,
}

impl<C: Copy + 'static> PropertyTable<C> {
    fn new(name: &str, ranges: &'static [(u32, u32, C)], default: C) -> Self {
        debug_assert!(
            ranges.windows(2).all(|pair| pair[0].1 < pair[1].0),
            "{name} ranges must be sorted and disjoint"
        );

        let mut latin1 = [default; LATIN1_LEN];
        for (cp, slot) in (0u32..).zip(latin1.iter_mut()) {
            if let Some(category) = search(ranges, cp) {
                *slot = category;
            }
        }

        log::debug!(
            "Built {} property table: {} ranges, Latin-1 fast path populated",
            name,
            ranges.len()
        );

        Self {
            ranges,
            latin1,
            default,
        }
    }

    #[inline]
    pub(crate) fn lookup(&self, cp: char) -> C {
        let cp = u32::from(cp);
        match self.latin1.get(cp as usize) {
            Some(&category) => category,
            None => search(self.ranges, cp).unwrap_or(self.default),
        }
    }
}

fn search<C: Copy>(ranges: &[(u32, u32, C)], cp: u32) -> Option<C> {
    ranges
        .binary_search_by(|&(low, high, _)| {
            if high < cp {
                Ordering::Less
            } else if low > cp {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .ok()
        .map(|index| ranges[index].2)
}

static GRAPHEME: Lazy<PropertyTable<GraphemeCategory>> = Lazy::new(|| {
    PropertyTable::new(
        "grapheme",
        grapheme_table::GRAPHEME_RANGES,
        GraphemeCategory::Any,
    )
});

static WORD: Lazy<PropertyTable<WordCategory>> =
    Lazy::new(|| PropertyTable::new("word", word_table::WORD_RANGES, WordCategory::Any));

static SENTENCE: Lazy<PropertyTable<SentenceCategory>> = Lazy::new(|| {
    PropertyTable::new(
        "sentence",
        sentence_table::SENTENCE_RANGES,
        SentenceCategory::Any,
    )
});

static LINE: Lazy<PropertyTable<LineProperty>> = Lazy::new(|| {
    PropertyTable::new("line", line_table::LINE_RANGES, LineProperty::default())
});

static EAST_ASIAN_WIDTH: Lazy<PropertyTable<EastAsianWidth>> = Lazy::new(|| {
    PropertyTable::new(
        "east asian width",
        width_table::EAST_ASIAN_WIDTH_RANGES,
        EastAsianWidth::Neutral,
    )
});

static DEFAULT_IGNORABLE: Lazy<PropertyTable<bool>> = Lazy::new(|| {
    PropertyTable::new(
        "default ignorable",
        ignorable_table::DEFAULT_IGNORABLE_RANGES,
        false,
    )
});

/// Grapheme cluster category of a code point
#[inline]
pub fn grapheme_category(cp: char) -> GraphemeCategory {
    GRAPHEME.lookup(cp)
}

/// Word boundary category of a code point
#[inline]
pub fn word_category(cp: char) -> WordCategory {
    WORD.lookup(cp)
}

/// Sentence boundary category of a code point
#[inline]
pub fn sentence_category(cp: char) -> SentenceCategory {
    SENTENCE.lookup(cp)
}

/// Line breaking class and side flags of a code point
#[inline]
pub fn line_property(cp: char) -> LineProperty {
    LINE.lookup(cp)
}

#[inline]
pub fn east_asian_width(cp: char) -> EastAsianWidth {
    EAST_ASIAN_WIDTH.lookup(cp)
}

/// Whether a code point is Default_Ignorable_Code_Point
#[inline]
pub fn is_default_ignorable(cp: char) -> bool {
    DEFAULT_IGNORABLE.lookup(cp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sorted<C>(ranges: &[(u32, u32, C)]) {
        for (low, high, _) in ranges {
            assert!(low <= high, "inverted range {low:#x}..={high:#x}");
            assert!(*high <= 0x10FFFF);
        }
        for pair in ranges.windows(2) {
            assert!(
                pair[0].1 < pair[1].0,
                "overlap at {:#x} / {:#x}",
                pair[0].1,
                pair[1].0
            );
        }
    }

    #[test]
    fn test_tables_sorted_and_disjoint() {
        assert_sorted(grapheme_table::GRAPHEME_RANGES);
        assert_sorted(word_table::WORD_RANGES);
        assert_sorted(sentence_table::SENTENCE_RANGES);
        assert_sorted(line_table::LINE_RANGES);
        assert_sorted(width_table::EAST_ASIAN_WIDTH_RANGES);
        assert_sorted(ignorable_table::DEFAULT_IGNORABLE_RANGES);
    }

    #[test]
    fn test_latin1_fast_path_matches_search() {
        for cp in 0u32..0x100 {
            let ch = char::from_u32(cp).unwrap();
            assert_eq!(
                grapheme_category(ch),
                search(grapheme_table::GRAPHEME_RANGES, cp).unwrap_or(GraphemeCategory::Any)
            );
            assert_eq!(
                word_category(ch),
                search(word_table::WORD_RANGES, cp).unwrap_or(WordCategory::Any)
            );
            assert_eq!(
                line_property(ch),
                search(line_table::LINE_RANGES, cp).unwrap_or_default()
            );
        }
    }

    #[test]
    fn test_grapheme_categories() {
        assert_eq!(grapheme_category('a'), GraphemeCategory::Any);
        assert_eq!(grapheme_category('\r'), GraphemeCategory::CR);
        assert_eq!(grapheme_category('\n'), GraphemeCategory::LF);
        assert_eq!(grapheme_category('\u{0301}'), GraphemeCategory::Extend);
        assert_eq!(grapheme_category('\u{200D}'), GraphemeCategory::ZWJ);
        assert_eq!(grapheme_category('\u{1100}'), GraphemeCategory::L);
        assert_eq!(grapheme_category('\u{AC00}'), GraphemeCategory::LV);
        assert_eq!(grapheme_category('\u{AC01}'), GraphemeCategory::LVT);
        assert_eq!(
            grapheme_category('\u{1F1F3}'),
            GraphemeCategory::RegionalIndicator
        );
        assert_eq!(
            grapheme_category('\u{1F600}'),
            GraphemeCategory::ExtendedPictographic
        );
        assert_eq!(
            grapheme_category('\u{00A9}'),
            GraphemeCategory::ExtendedPictographic
        );
    }

    #[test]
    fn test_word_and_sentence_categories() {
        assert_eq!(word_category('a'), WordCategory::ALetter);
        assert_eq!(word_category('7'), WordCategory::Numeric);
        assert_eq!(word_category(' '), WordCategory::WSegSpace);
        assert_eq!(word_category('\''), WordCategory::SingleQuote);
        assert_eq!(word_category('_'), WordCategory::ExtendNumLet);
        assert_eq!(word_category('\u{05D0}'), WordCategory::HebrewLetter);
        assert_eq!(word_category('\u{30A2}'), WordCategory::Katakana);
        assert_eq!(word_category('!'), WordCategory::Any);

        assert_eq!(sentence_category('a'), SentenceCategory::Lower);
        assert_eq!(sentence_category('A'), SentenceCategory::Upper);
        assert_eq!(sentence_category('.'), SentenceCategory::ATerm);
        assert_eq!(sentence_category('?'), SentenceCategory::STerm);
        assert_eq!(sentence_category(')'), SentenceCategory::Close);
        assert_eq!(sentence_category(' '), SentenceCategory::Sp);
        assert_eq!(sentence_category('\u{2029}'), SentenceCategory::Sep);
        assert_eq!(sentence_category('\u{4E00}'), SentenceCategory::OLetter);
    }

    #[test]
    fn test_line_properties() {
        assert_eq!(line_property('a').class(), LineClass::AL);
        assert_eq!(line_property(' ').class(), LineClass::SP);
        assert_eq!(line_property('(').class(), LineClass::OP);
        assert_eq!(line_property('\u{00A0}').class(), LineClass::GL);
        assert_eq!(line_property('\u{0301}').class(), LineClass::CM);

        let left = line_property('\u{00AB}');
        assert_eq!(left.class(), LineClass::QU);
        assert!(left.is_initial_quote());
        assert!(!left.is_final_quote());
        assert!(line_property('\u{00BB}').is_final_quote());

        assert_eq!(line_property('\u{4E00}').class(), LineClass::ID);
        assert_eq!(line_property('\u{1F3FB}').class(), LineClass::EM);
        assert!(!line_property('(').is_east_asian_wide());
        assert!(line_property('\u{FF08}').is_east_asian_wide());
    }

    #[test]
    fn test_default_ignorable_code_points() {
        assert!(is_default_ignorable('\u{00AD}'));
        assert!(is_default_ignorable('\u{115F}'));
        assert!(is_default_ignorable('\u{3164}'));
        assert!(is_default_ignorable('\u{FFA0}'));
        assert!(is_default_ignorable('\u{E0041}'));
        assert!(!is_default_ignorable('a'));
        assert!(!is_default_ignorable('\u{1100}'));
    }

    #[test]
    fn test_unlisted_code_points_get_defaults() {
        // Private use area
        assert_eq!(grapheme_category('\u{F0000}'), GraphemeCategory::Any);
        assert_eq!(word_category('\u{F0000}'), WordCategory::Any);
        assert_eq!(east_asian_width('\u{F0000}'), EastAsianWidth::Ambiguous);
        assert_eq!(east_asian_width('\u{0100}'), EastAsianWidth::Neutral);
        assert_eq!(east_asian_width('\u{4E00}'), EastAsianWidth::Wide);
        assert_eq!(east_asian_width('\u{00A1}'), EastAsianWidth::Ambiguous);
    }
}
