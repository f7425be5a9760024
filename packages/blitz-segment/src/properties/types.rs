//! Code point categories for each segmentation family
//!
//! Every family classifies code points on its own axis. The first variant of
//! each category enum is the catch-all for code points the family has no
//! specific rule for, and it is also the wildcard column of the family's rule
//! table.

dense_enum! {
    /// Grapheme_Cluster_Break values (UAX #29) with Extended_Pictographic
    /// folded in as its own category
    pub enum GraphemeCategory {
        /// Other
        Any,
        Prepend,
        CR,
        LF,
        Control,
        Extend,
        RegionalIndicator,
        SpacingMark,
        L,
        V,
        T,
        LV,
        LVT,
        ZWJ,
        ExtendedPictographic,
    }
}

dense_enum! {
    /// Word_Break values (UAX #29) with Extended_Pictographic folded in
    pub enum WordCategory {
        /// Other
        Any,
        CR,
        LF,
        Newline,
        Extend,
        ZWJ,
        RegionalIndicator,
        Format,
        Katakana,
        HebrewLetter,
        ALetter,
        SingleQuote,
        DoubleQuote,
        MidNumLet,
        MidLetter,
        MidNum,
        Numeric,
        ExtendNumLet,
        WSegSpace,
        ExtendedPictographic,
    }
}

dense_enum! {
    /// Sentence_Break values (UAX #29)
    pub enum SentenceCategory {
        /// Other
        Any,
        CR,
        LF,
        Extend,
        Sep,
        Format,
        Sp,
        Lower,
        Upper,
        OLetter,
        Numeric,
        ATerm,
        SContinue,
        STerm,
        Close,
    }
}

dense_enum! {
    /// UAX #14 line breaking classes after LB1 resolution
    ///
    /// AI, SG, XX and the Aksara classes resolve to AL, SA resolves to CM or
    /// AL, CJ resolves to NS. `Any` is never produced by classification; it
    /// only serves as the wildcard in the line rule table.
    pub enum LineClass {
        Any,
        // Basic classes
        BK,  // Mandatory Break
        CR,  // Carriage Return
        LF,  // Line Feed
        CM,  // Combining Mark
        NL,  // Next Line
        WJ,  // Word Joiner
        ZW,  // Zero Width Space
        GL,  // Non-breaking Glue
        SP,  // Space
        ZWJ, // Zero Width Joiner

        // Letters and symbols
        B2, // Break Opportunity Before and After
        BA, // Break After
        BB, // Break Before
        HY, // Hyphen
        CB, // Contingent Break Opportunity
        CL, // Close Punctuation
        CP, // Close Parenthesis
        EX, // Exclamation/Interrogation
        IN, // Inseparable
        NS, // Nonstarter
        OP, // Open Punctuation
        QU, // Quotation
        IS, // Infix Numeric Separator
        NU, // Numeric
        PO, // Postfix Numeric
        PR, // Prefix Numeric
        SY, // Symbols Allowing Break After
        AL, // Alphabetic

        // Emoji
        EB, // Emoji Base
        EM, // Emoji Modifier

        // Complex scripts
        H2, // Hangul LV Syllable
        H3, // Hangul LVT Syllable
        HL, // Hebrew Letter
        ID, // Ideographic
        JL, // Hangul L Jamo
        JV, // Hangul V Jamo
        JT, // Hangul T Jamo
        RI, // Regional Indicator
    }
}

/// Line breaking class of a code point plus the side facts the pair rules
/// consult (quotation direction, East Asian width, unassigned pictographs)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineProperty {
    class: LineClass,
    flags: u8,
}

impl LineProperty {
    /// General category Pi (initial quotation mark)
    pub(crate) const PI_QUOTE: u8 = 1 << 0;
    /// General category Pf (final quotation mark)
    pub(crate) const PF_QUOTE: u8 = 1 << 1;
    /// East_Asian_Width is F, W or H (recorded on OP and CP only)
    pub(crate) const EAST_ASIAN_WIDE: u8 = 1 << 2;
    /// Extended_Pictographic and not yet assigned
    pub(crate) const UNASSIGNED_PICTOGRAPHIC: u8 = 1 << 3;

    pub(crate) const fn new(class: LineClass, flags: u8) -> Self {
        Self { class, flags }
    }

    #[inline]
    pub const fn class(self) -> LineClass {
        self.class
    }

    #[inline]
    pub const fn is_initial_quote(self) -> bool {
        self.flags & Self::PI_QUOTE != 0
    }

    #[inline]
    pub const fn is_final_quote(self) -> bool {
        self.flags & Self::PF_QUOTE != 0
    }

    #[inline]
    pub const fn is_east_asian_wide(self) -> bool {
        self.flags & Self::EAST_ASIAN_WIDE != 0
    }

    #[inline]
    pub const fn is_unassigned_pictographic(self) -> bool {
        self.flags & Self::UNASSIGNED_PICTOGRAPHIC != 0
    }
}

impl Default for LineProperty {
    fn default() -> Self {
        Self::new(LineClass::AL, 0)
    }
}

/// East_Asian_Width property (UAX #11)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EastAsianWidth {
    #[default]
    Neutral,
    Ambiguous,
    Fullwidth,
    Halfwidth,
    Narrow,
    Wide,
}
