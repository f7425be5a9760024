//! Monospace display width of grapheme clusters
//!
//! A cluster's width is decided by its first code point only; combining
//! marks and joined pictographs never add columns. The one exception is a
//! variation selector after a pictographic base, which picks text (one
//! column) or emoji (two columns) presentation.

use crate::config::WidthConfig;
use crate::properties::{
    east_asian_width, grapheme_category, is_default_ignorable, EastAsianWidth, GraphemeCategory,
};
use crate::scanner::first_grapheme_cluster_in_str;

/// VARIATION SELECTOR-15, text presentation
const TEXT_PRESENTATION: char = '\u{FE0E}';
/// VARIATION SELECTOR-16, emoji presentation
const EMOJI_PRESENTATION: char = '\u{FE0F}';

/// Width contributed by a cluster's first code point
fn base_width(cp: char, config: &WidthConfig) -> usize {
    // Hangul fillers are default ignorable but classed as jamo
    if is_default_ignorable(cp) {
        return 0;
    }
    match grapheme_category(cp) {
        GraphemeCategory::Control
        | GraphemeCategory::CR
        | GraphemeCategory::LF
        | GraphemeCategory::Extend
        | GraphemeCategory::ZWJ
        | GraphemeCategory::SpacingMark => 0,
        GraphemeCategory::RegionalIndicator | GraphemeCategory::ExtendedPictographic => 2,
        _ => match east_asian_width(cp) {
            EastAsianWidth::Wide | EastAsianWidth::Fullwidth => 2,
            EastAsianWidth::Ambiguous => config.ambiguous_width.get(),
            _ => 1,
        },
    }
}

/// Width of the cluster formed by `code_points`
pub(crate) fn width_of<I>(code_points: I, config: &WidthConfig) -> usize
where
    I: IntoIterator<Item = char>,
{
    let mut code_points = code_points.into_iter();
    let Some(base) = code_points.next() else {
        return 0;
    };

    let width = base_width(base, config);
    if grapheme_category(base) != GraphemeCategory::ExtendedPictographic {
        return width;
    }

    for cp in code_points {
        match cp {
            TEXT_PRESENTATION => return 1,
            EMOJI_PRESENTATION => return 2,
            _ => {}
        }
    }
    width
}

/// Display width of a single grapheme cluster, in columns
pub fn cluster_width(cluster: &[char]) -> usize {
    cluster_width_with(cluster, &WidthConfig::default())
}

/// [`cluster_width`] with an explicit configuration
pub fn cluster_width_with(cluster: &[char], config: &WidthConfig) -> usize {
    width_of(cluster.iter().copied(), config)
}

/// Display width of a string: the sum of its cluster widths
///
/// ```
/// use blitz_segment::string_width;
///
/// assert_eq!(string_width("Hello"), 5);
/// assert_eq!(string_width("\u{4E2D}\u{56FD}"), 4);
/// assert_eq!(string_width("\u{1F1F3}\u{1F1F1}\u{1F1E7}\u{1F1F7}i"), 5);
/// ```
pub fn string_width(text: &str) -> usize {
    string_width_with(text, &WidthConfig::default())
}

/// [`string_width`] with an explicit configuration
pub fn string_width_with(text: &str, config: &WidthConfig) -> usize {
    let mut rest = text;
    let mut state = None;
    let mut total = 0;
    while !rest.is_empty() {
        let (cluster, next, next_state) = first_grapheme_cluster_in_str(rest, state);
        total += width_of(cluster.chars(), config);
        rest = next;
        state = Some(next_state);
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AmbiguousWidth;

    fn width(cluster: &str) -> usize {
        cluster_width(&cluster.chars().collect::<Vec<_>>())
    }

    #[test]
    fn test_narrow_and_wide_bases() {
        assert_eq!(width(""), 0);
        assert_eq!(width("a"), 1);
        assert_eq!(width("\u{4E2D}"), 2);
        assert_eq!(width("\u{FF21}"), 2);
        assert_eq!(width("\u{FF71}"), 1);
    }

    #[test]
    fn test_zero_width_bases() {
        assert_eq!(width("\u{0301}"), 0);
        assert_eq!(width("\u{200D}"), 0);
        assert_eq!(width("\u{0007}"), 0);
        assert_eq!(width("\r\n"), 0);
    }

    #[test]
    fn test_ignorable_and_spacing_mark_bases() {
        assert_eq!(width("\u{3164}"), 0);
        assert_eq!(width("\u{115F}"), 0);
        assert_eq!(width("\u{FFA0}"), 0);
        assert_eq!(width("\u{00AD}"), 0);
        assert_eq!(width("\u{0903}"), 0);
        assert_eq!(string_width("a\u{3164}b"), 2);
    }

    #[test]
    fn test_every_single_code_point_fits_two_columns() {
        let wide = WidthConfig {
            ambiguous_width: AmbiguousWidth::WIDE,
        };
        for cp in (0..=0x10FFFF).filter_map(char::from_u32) {
            assert!(width_of([cp], &WidthConfig::default()) <= 2, "{cp:?}");
            assert!(width_of([cp], &wide) <= 2, "{cp:?}");
            assert!(width_of([cp, '\u{FE0F}'], &wide) <= 2, "{cp:?}");
        }
    }

    #[test]
    fn test_marks_do_not_add_width() {
        assert_eq!(width("a\u{0308}\u{0308}"), 1);
        assert_eq!(string_width("shangha\u{0308}\u{0308}i"), 8);
    }

    #[test]
    fn test_pictographs_and_presentation_selectors() {
        assert_eq!(width("\u{1F600}"), 2);
        assert_eq!(width("\u{00A9}"), 2);
        assert_eq!(width("\u{00A9}\u{FE0E}"), 1);
        assert_eq!(width("\u{2764}\u{FE0F}"), 2);
        assert_eq!(width("\u{1F469}\u{200D}\u{1F4BB}"), 2);
        // Selectors only matter after a pictograph
        assert_eq!(width("a\u{FE0F}"), 1);
    }

    #[test]
    fn test_flags() {
        assert_eq!(width("\u{1F1F3}\u{1F1F1}"), 2);
        assert_eq!(string_width("\u{1F1F3}\u{1F1F1}\u{1F1E7}\u{1F1F7}i"), 5);
    }

    #[test]
    fn test_ambiguous_width_follows_config() {
        let wide = WidthConfig {
            ambiguous_width: AmbiguousWidth::WIDE,
        };
        // INVERTED EXCLAMATION MARK is East Asian Ambiguous
        assert_eq!(width("\u{00A1}"), 1);
        assert_eq!(cluster_width_with(&['\u{00A1}'], &wide), 2);
        assert_eq!(string_width_with("\u{00A1}a", &wide), 3);
    }
}
