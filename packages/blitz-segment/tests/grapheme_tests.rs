use blitz_segment::{first_grapheme_cluster, first_grapheme_cluster_in_str, Graphemes};
use pretty_assertions::assert_eq;

/// Helper function to split a string into clusters of code points with the
/// resumable scanner
fn scan_clusters(text: &str) -> Vec<Vec<u32>> {
    let mut rest = text;
    let mut state = None;
    let mut clusters = Vec::new();
    while !rest.is_empty() {
        let (cluster, next, next_state) = first_grapheme_cluster_in_str(rest, state);
        clusters.push(cluster.chars().map(u32::from).collect());
        rest = next;
        state = Some(next_state);
    }
    clusters
}

/// Helper function to split a string into clusters with the eager cursor
fn cursor_clusters(text: &str) -> Vec<Vec<u32>> {
    let mut graphemes = Graphemes::new(text);
    let mut clusters = Vec::new();
    while graphemes.advance() {
        clusters.push(graphemes.code_points().iter().map(|&c| u32::from(c)).collect());
    }
    clusters
}

fn text_of(code_points: &[u32]) -> String {
    code_points
        .iter()
        .map(|&cp| char::from_u32(cp).unwrap())
        .collect()
}

fn cases() -> Vec<(String, Vec<Vec<u32>>)> {
    vec![
        (String::new(), vec![]),
        ("x".into(), vec![vec![0x78]]),
        (
            "basic".into(),
            vec![vec![0x62], vec![0x61], vec![0x73], vec![0x69], vec![0x63]],
        ),
        ("m\u{F6}p".into(), vec![vec![0x6D], vec![0xF6], vec![0x70]]),
        ("\r\n".into(), vec![vec![0x0D, 0x0A]]),
        ("\n\n".into(), vec![vec![0x0A], vec![0x0A]]),
        ("\t*".into(), vec![vec![0x09], vec![0x2A]]),
        // Conjoining jamo L V T
        (text_of(&[0x1105, 0x116C, 0x11AB]), vec![vec![0x1105, 0x116C, 0x11AB]]),
        // Syriac abbreviation mark is a prepended concatenation mark
        (
            text_of(&[0x710, 0x70F, 0x712, 0x713, 0x715]),
            vec![vec![0x710], vec![0x70F, 0x712], vec![0x713], vec![0x715]],
        ),
        // Thai SARA AM is a spacing mark
        (
            text_of(&[0xE01, 0xE33, 0xE01]),
            vec![vec![0xE01, 0xE33], vec![0xE01]],
        ),
        // Family: man, woman, girl, boy
        (
            text_of(&[0x1F468, 0x200D, 0x1F469, 0x200D, 0x1F467, 0x200D, 0x1F466]),
            vec![vec![0x1F468, 0x200D, 0x1F469, 0x200D, 0x1F467, 0x200D, 0x1F466]],
        ),
        // Woman lifting weights, medium skin tone
        (
            text_of(&[0x1F3CB, 0x1F3FD, 0x200D, 0x2640, 0xFE0F]),
            vec![vec![0x1F3CB, 0x1F3FD, 0x200D, 0x2640, 0xFE0F]],
        ),
        // Flags of Germany and the United States
        (
            text_of(&[0x1F1E9, 0x1F1EA, 0x1F1FA, 0x1F1F8]),
            vec![vec![0x1F1E9, 0x1F1EA], vec![0x1F1FA, 0x1F1F8]],
        ),
        // Rainbow flag
        (
            text_of(&[0x1F3F3, 0xFE0F, 0x200D, 0x1F308]),
            vec![vec![0x1F3F3, 0xFE0F, 0x200D, 0x1F308]],
        ),
        // Kiss: woman, heart with emoji presentation, kiss mark, woman
        (
            text_of(&[0x1F469, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F469]),
            vec![vec![0x1F469, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F469]],
        ),
    ]
}

#[cfg(test)]
mod grapheme_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_resumable_scanner_cases() {
        for (text, expected) in cases() {
            assert_eq!(scan_clusters(&text), expected, "clusters of {text:?}");
        }
    }

    #[test]
    fn test_cursor_cases() {
        for (text, expected) in cases() {
            assert_eq!(cursor_clusters(&text), expected, "clusters of {text:?}");
        }
    }

    #[test]
    fn test_byte_scanner_cases() {
        for (text, expected) in cases() {
            let mut rest = text.as_bytes();
            let mut state = None;
            let mut clusters = Vec::new();
            while !rest.is_empty() {
                let (cluster, next, next_state) = first_grapheme_cluster(rest, state);
                let cluster = std::str::from_utf8(cluster).unwrap();
                clusters.push(cluster.chars().map(u32::from).collect::<Vec<_>>());
                rest = next;
                state = Some(next_state);
            }
            assert_eq!(clusters, expected, "clusters of {text:?}");
        }
    }

    #[test]
    fn test_zwj_without_pictograph_breaks() {
        // GB11 needs a pictograph on both sides of the joiner
        assert_eq!(
            scan_clusters("a\u{200D}\u{1F308}"),
            vec![vec![0x61, 0x200D], vec![0x1F308]]
        );
    }

    #[test]
    fn test_odd_regional_indicator_run() {
        assert_eq!(
            scan_clusters("\u{1F1E6}\u{1F1E7}\u{1F1E8}"),
            vec![vec![0x1F1E6, 0x1F1E7], vec![0x1F1E8]]
        );
    }

    #[test]
    fn test_control_splits_extend_run() {
        assert_eq!(
            scan_clusters("\u{0301}\u{0007}\u{0301}"),
            vec![vec![0x301], vec![0x07], vec![0x301]]
        );
    }
}
