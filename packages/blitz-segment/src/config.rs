//! Configuration for cluster width calculation

use serde::{Deserialize, Serialize};

use crate::error::{SegmentError, SegmentResult};

/// Column width assigned to East Asian Ambiguous code points
///
/// Terminals disagree on these (Greek, Cyrillic and box drawing in CJK
/// locales), so the choice is left to the caller. Only 1 and 2 are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct AmbiguousWidth(u8);

impl AmbiguousWidth {
    /// Ambiguous code points occupy one column (the Unicode default)
    pub const NARROW: Self = Self(1);
    /// Ambiguous code points occupy two columns (legacy CJK terminals)
    pub const WIDE: Self = Self(2);

    #[inline]
    pub const fn get(self) -> usize {
        self.0 as usize
    }
}

impl Default for AmbiguousWidth {
    fn default() -> Self {
        Self::NARROW
    }
}

impl TryFrom<u8> for AmbiguousWidth {
    type Error = SegmentError;

    fn try_from(width: u8) -> Result<Self, Self::Error> {
        match width {
            1 => Ok(Self::NARROW),
            2 => Ok(Self::WIDE),
            other => Err(SegmentError::InvalidAmbiguousWidth(other)),
        }
    }
}

impl From<AmbiguousWidth> for u8 {
    fn from(width: AmbiguousWidth) -> Self {
        width.0
    }
}

/// Configuration for the width overlay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct WidthConfig {
    /// Width of clusters whose base code point is East Asian Ambiguous
    pub ambiguous_width: AmbiguousWidth,
}

impl WidthConfig {
    /// Create a configuration, validating the ambiguous width
    pub fn new(ambiguous_width: u8) -> SegmentResult<Self> {
        Ok(Self {
            ambiguous_width: AmbiguousWidth::try_from(ambiguous_width)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_narrow() {
        assert_eq!(WidthConfig::default().ambiguous_width.get(), 1);
    }

    #[test]
    fn test_rejects_out_of_range_width() {
        assert_eq!(
            WidthConfig::new(3),
            Err(SegmentError::InvalidAmbiguousWidth(3))
        );
        assert_eq!(
            WidthConfig::new(0),
            Err(SegmentError::InvalidAmbiguousWidth(0))
        );
        assert_eq!(WidthConfig::new(2).map(|c| c.ambiguous_width), Ok(AmbiguousWidth::WIDE));
    }

    #[test]
    fn test_serde_validates_width() {
        let config: WidthConfig = serde_json::from_str(r#"{"ambiguous_width": 2}"#).unwrap();
        assert_eq!(config.ambiguous_width, AmbiguousWidth::WIDE);

        let defaulted: WidthConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(defaulted, WidthConfig::default());

        assert!(serde_json::from_str::<WidthConfig>(r#"{"ambiguous_width": 5}"#).is_err());

        let json = serde_json::to_string(&WidthConfig::new(2).unwrap()).unwrap();
        assert_eq!(json, r#"{"ambiguous_width":2}"#);
    }
}
