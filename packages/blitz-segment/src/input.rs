//! Input flavors the scanners accept
//!
//! The scanners only need to decode the first code point of a remaining
//! input and to split it. Byte slices may hold invalid UTF-8: each malformed
//! byte decodes as U+FFFD with a length of one so that scanning always makes
//! progress and segments always tile the input.

/// Maximum UTF-8 sequence length
const MAX_UTF8_LEN: usize = 4;

/// A borrowed text buffer that can be scanned one code point at a time
pub trait TextInput: Copy {
    /// Length in code units (bytes, or chars for decoded input)
    fn len(self) -> usize;

    /// The first code point and its length in code units, `None` when empty
    fn decode_first(self) -> Option<(char, usize)>;

    fn split_at(self, mid: usize) -> (Self, Self);

    #[inline]
    fn is_empty(self) -> bool {
        self.len() == 0
    }

    #[inline]
    fn tail(self, from: usize) -> Self {
        self.split_at(from).1
    }
}

impl<'a> TextInput for &'a str {
    #[inline]
    fn len(self) -> usize {
        <str>::len(self)
    }

    #[inline]
    fn decode_first(self) -> Option<(char, usize)> {
        self.chars().next().map(|cp| (cp, cp.len_utf8()))
    }

    #[inline]
    fn split_at(self, mid: usize) -> (Self, Self) {
        <str>::split_at(self, mid)
    }
}

impl<'a> TextInput for &'a [u8] {
    #[inline]
    fn len(self) -> usize {
        <[u8]>::len(self)
    }

    #[inline]
    fn decode_first(self) -> Option<(char, usize)> {
        let &lead = self.first()?;
        if lead.is_ascii() {
            return Some((char::from(lead), 1));
        }

        let window = &self[..self.len().min(MAX_UTF8_LEN)];
        let valid = match std::str::from_utf8(window) {
            Ok(text) => text,
            Err(err) => {
                // Keep the well-formed prefix; empty when the first
                // sequence is itself malformed or truncated.
                let (head, _) = window.split_at(err.valid_up_to());
                std::str::from_utf8(head).unwrap_or_default()
            }
        };

        Some(match valid.chars().next() {
            Some(cp) => (cp, cp.len_utf8()),
            None => (char::REPLACEMENT_CHARACTER, 1),
        })
    }

    #[inline]
    fn split_at(self, mid: usize) -> (Self, Self) {
        <[u8]>::split_at(self, mid)
    }
}

impl<'a> TextInput for &'a [char] {
    #[inline]
    fn len(self) -> usize {
        <[char]>::len(self)
    }

    #[inline]
    fn decode_first(self) -> Option<(char, usize)> {
        self.first().map(|&cp| (cp, 1))
    }

    #[inline]
    fn split_at(self, mid: usize) -> (Self, Self) {
        <[char]>::split_at(self, mid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid_utf8() {
        let bytes = "ä中🙂".as_bytes();
        assert_eq!(bytes.decode_first(), Some(('ä', 2)));
        assert_eq!(bytes.tail(2).decode_first(), Some(('中', 3)));
        assert_eq!(bytes.tail(5).decode_first(), Some(('🙂', 4)));
        assert_eq!(bytes.tail(9).decode_first(), None);
    }

    #[test]
    fn test_decode_invalid_bytes_as_replacement() {
        let stray: &[u8] = &[0x80, b'a'];
        assert_eq!(stray.decode_first(), Some(('\u{FFFD}', 1)));

        // Truncated three byte sequence
        let truncated: &[u8] = &[0xE4, 0xB8];
        assert_eq!(truncated.decode_first(), Some(('\u{FFFD}', 1)));
        assert_eq!(truncated.tail(1).decode_first(), Some(('\u{FFFD}', 1)));

        // Encoded surrogate
        let surrogate: &[u8] = &[0xED, 0xA0, 0x80];
        assert_eq!(surrogate.decode_first(), Some(('\u{FFFD}', 1)));
    }

    #[test]
    fn test_valid_prefix_followed_by_garbage() {
        let bytes: &[u8] = &[0xC3, 0xA4, 0xFF];
        assert_eq!(bytes.decode_first(), Some(('ä', 2)));
    }

    #[test]
    fn test_char_slices_count_code_points() {
        let chars = ['a', '🙂'];
        let input: &[char] = &chars;
        assert_eq!(input.len(), 2);
        assert_eq!(input.tail(1).decode_first(), Some(('🙂', 1)));
    }
}
