//! Unicode text segmentation for Blitz
//!
//! Finds extended grapheme cluster, word and sentence boundaries (UAX #29)
//! and line break opportunities (UAX #14), and measures the monospace width
//! of grapheme clusters.
//!
//! Every family is available two ways:
//! - resumable scanners (`first_grapheme_cluster`, `first_word`,
//!   `first_sentence`, `first_line_segment`, and their `_in_str` forms) that
//!   split one segment off the remaining input and hand back an opaque state
//!   for the next call, without allocating;
//! - eager cursors ([`Graphemes`], [`Words`], [`Sentences`],
//!   [`LineSegments`]) that decode a string once and iterate over it.
//!
//! [`step`] walks grapheme clusters while reporting word, sentence and line
//! boundaries and the cluster width in a single pass.
//!
//! ```
//! use blitz_segment::{string_width, Words};
//!
//! let words: Vec<&str> = Words::new("Hello, world!").collect();
//! assert_eq!(words, ["Hello", ",", " ", "world", "!"]);
//! assert_eq!(string_width("\u{4E2D}\u{56FD}"), 4);
//! ```

#[macro_use]
mod macros;

pub mod config;
pub mod cursor;
pub mod error;
pub mod input;
pub mod properties;
pub mod rules;
pub mod scanner;
pub mod step;
pub mod width;

pub use config::{AmbiguousWidth, WidthConfig};
pub use cursor::{Graphemes, LineSegments, Segments, Sentences, Words};
pub use error::{SegmentError, SegmentResult};
pub use input::TextInput;
pub use properties::{
    east_asian_width, grapheme_category, is_default_ignorable, line_property, sentence_category,
    word_category, EastAsianWidth, GraphemeCategory, LineClass, LineProperty, SentenceCategory,
    WordCategory,
};
pub use rules::{
    BreakClass, GraphemeRules, GraphemeState, LineRules, LineState, Segmentation, SentenceRules,
    SentenceState, WordRules, WordState,
};
pub use scanner::{
    first_grapheme_cluster, first_grapheme_cluster_in_str, first_line_segment,
    first_line_segment_in_str, first_sentence, first_sentence_in_str, first_word,
    first_word_in_str, grapheme_cluster_count,
};
pub use step::{step, step_str, step_str_with, step_with, Boundaries, StepState};
pub use width::{cluster_width, cluster_width_with, string_width, string_width_with};
