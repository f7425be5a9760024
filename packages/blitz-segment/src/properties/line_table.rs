//! Line_Break property ranges (Unicode 17.0.0) with the LB1 resolution applied:
//! AI, SG, XX and the Aksara classes fold into AL, SA splits into CM or AL by
//! general category, CJ folds into NS, VI and VF fold into CM, HH folds into BA.
//! Code points not listed here are AL.
//!
//! Generated from the Unicode Character Database. Do not edit by hand.

use super::types::LineClass::*;
use super::types::LineProperty;

const NONE: u8 = 0;
const PI: u8 = LineProperty::PI_QUOTE;
const PF: u8 = LineProperty::PF_QUOTE;
const WIDE: u8 = LineProperty::EAST_ASIAN_WIDE;
const UNASSIGNED_PICTOGRAPHIC: u8 = LineProperty::UNASSIGNED_PICTOGRAPHIC;

const fn p(class: super::types::LineClass, flags: u8) -> LineProperty {
    LineProperty::new(class, flags)
}

#[rustfmt::skip]
pub(crate) static LINE_RANGES: &[(u32, u32, LineProperty)] = &[
    (0x0000, 0x0008, p(CM, NONE)),
    (0x0009, 0x0009, p(BA, NONE)),
    (0x000A, 0x000A, p(LF, NONE)),
    (0x000B, 0x000C, p(BK, NONE)),
    (0x000D, 0x000D, p(CR, NONE)),
    (0x000E, 0x001F, p(CM, NONE)),
    (0x0020, 0x0020, p(SP, NONE)),
    (0x0021, 0x0021, p(EX, NONE)),
    (0x0022, 0x0022, p(QU, NONE)),
    (0x0024, 0x0024, p(PR, NONE)),
    (0x0025, 0x0025, p(PO, NONE)),
    (0x0027, 0x0027, p(QU, NONE)),
    (0x0028, 0x0028, p(OP, NONE)),
    (0x0029, 0x0029, p(CP, NONE)),
    (0x002B, 0x002B, p(PR, NONE)),
    (0x002C, 0x002C, p(IS, NONE)),
    (0x002D, 0x002D, p(HY, NONE)),
    (0x002E, 0x002E, p(IS, NONE)),
    (0x002F, 0x002F, p(SY, NONE)),
    (0x0030, 0x0039, p(NU, NONE)),
    (0x003A, 0x003B, p(IS, NONE)),
    (0x003F, 0x003F, p(EX, NONE)),
    (0x005B, 0x005B, p(OP, NONE)),
    (0x005C, 0x005C, p(PR, NONE)),
    (0x005D, 0x005D, p(CP, NONE)),
    (0x007B, 0x007B, p(OP, NONE)),
    (0x007C, 0x007C, p(BA, NONE)),
    (0x007D, 0x007D, p(CL, NONE)),
    (0x007F, 0x0084, p(CM, NONE)),
    (0x0085, 0x0085, p(NL, NONE)),
    (0x0086, 0x009F, p(CM, NONE)),
    (0x00A0, 0x00A0, p(GL, NONE)),
    (0x00A1, 0x00A1, p(OP, NONE)),
    (0x00A2, 0x00A2, p(PO, NONE)),
    (0x00A3, 0x00A5, p(PR, NONE)),
    (0x00AB, 0x00AB, p(QU, PI)),
    (0x00AD, 0x00AD, p(BA, NONE)),
    (0x00B0, 0x00B0, p(PO, NONE)),
    (0x00B1, 0x00B1, p(PR, NONE)),
    (0x00B4, 0x00B4, p(BB, NONE)),
    (0x00BB, 0x00BB, p(QU, PF)),
    (0x00BF, 0x00BF, p(OP, NONE)),
    (0x02C8, 0x02C8, p(BB, NONE)),
    (0x02CC, 0x02CC, p(BB, NONE)),
    (0x02DF, 0x02DF, p(BB, NONE)),
    (0x0300, 0x035B, p(CM, NONE)),
    (0x035C, 0x0362, p(GL, NONE)),
    (0x0363, 0x036F, p(CM, NONE)),
    (0x037E, 0x037E, p(IS, NONE)),
    (0x0483, 0x0489, p(CM, NONE)),
    (0x0589, 0x0589, p(IS, NONE)),
    (0x058A, 0x058A, p(BA, NONE)),
    (0x058F, 0x058F, p(PR, NONE)),
    (0x0591, 0x05BD, p(CM, NONE)),
    (0x05BE, 0x05BE, p(BA, NONE)),
    (0x05BF, 0x05BF, p(CM, NONE)),
    (0x05C1, 0x05C2, p(CM, NONE)),
    (0x05C4, 0x05C5, p(CM, NONE)),
    (0x05C6, 0x05C6, p(EX, NONE)),
    (0x05C7, 0x05C7, p(CM, NONE)),
    (0x05D0, 0x05EA, p(HL, NONE)),
    (0x05EF, 0x05F2, p(HL, NONE)),
    (0x0600, 0x0605, p(NU, NONE)),
    (0x0609, 0x060B, p(PO, NONE)),
    (0x060C, 0x060D, p(IS, NONE)),
    (0x0610, 0x061A, p(CM, NONE)),
    (0x061B, 0x061B, p(EX, NONE)),
    (0x061C, 0x061C, p(CM, NONE)),
    (0x061D, 0x061F, p(EX, NONE)),
    (0x064B, 0x065F, p(CM, NONE)),
    (0x0660, 0x0669, p(NU, NONE)),
    (0x066A, 0x066A, p(PO, NONE)),
    (0x066B, 0x066C, p(NU, NONE)),
    (0x0670, 0x0670, p(CM, NONE)),
    (0x06D4, 0x06D4, p(EX, NONE)),
    (0x06D6, 0x06DC, p(CM, NONE)),
    (0x06DD, 0x06DD, p(NU, NONE)),
    (0x06DF, 0x06E4, p(CM, NONE)),
    (0x06E7, 0x06E8, p(CM, NONE)),
    (0x06EA, 0x06ED, p(CM, NONE)),
    (0x06F0, 0x06F9, p(NU, NONE)),
    (0x0711, 0x0711, p(CM, NONE)),
    (0x0730, 0x074A, p(CM, NONE)),
    (0x07A6, 0x07B0, p(CM, NONE)),
    (0x07C0, 0x07C9, p(NU, NONE)),
    (0x07EB, 0x07F3, p(CM, NONE)),
    (0x07F8, 0x07F8, p(IS, NONE)),
    (0x07F9, 0x07F9, p(EX, NONE)),
    (0x07FD, 0x07FD, p(CM, NONE)),
    (0x07FE, 0x07FF, p(PR, NONE)),
    (0x0816, 0x0819, p(CM, NONE)),
    (0x081B, 0x0823, p(CM, NONE)),
    (0x0825, 0x0827, p(CM, NONE)),
    (0x0829, 0x082D, p(CM, NONE)),
    (0x0859, 0x085B, p(CM, NONE)),
    (0x0890, 0x0891, p(NU, NONE)),
    (0x0897, 0x089F, p(CM, NONE)),
    (0x08CA, 0x08E1, p(CM, NONE)),
    (0x08E2, 0x08E2, p(NU, NONE)),
    (0x08E3, 0x0903, p(CM, NONE)),
    (0x093A, 0x093C, p(CM, NONE)),
    (0x093E, 0x094F, p(CM, NONE)),
    (0x0951, 0x0957, p(CM, NONE)),
    (0x0962, 0x0963, p(CM, NONE)),
    (0x0964, 0x0965, p(BA, NONE)),
    (0x0966, 0x096F, p(NU, NONE)),
    (0x0981, 0x0983, p(CM, NONE)),
    (0x09BC, 0x09BC, p(CM, NONE)),
    (0x09BE, 0x09C4, p(CM, NONE)),
    (0x09C7, 0x09C8, p(CM, NONE)),
    (0x09CB, 0x09CD, p(CM, NONE)),
    (0x09D7, 0x09D7, p(CM, NONE)),
    (0x09E2, 0x09E3, p(CM, NONE)),
    (0x09E6, 0x09EF, p(NU, NONE)),
    (0x09F2, 0x09F3, p(PO, NONE)),
    (0x09F9, 0x09F9, p(PO, NONE)),
    (0x09FB, 0x09FB, p(PR, NONE)),
    (0x09FE, 0x09FE, p(CM, NONE)),
    (0x0A01, 0x0A03, p(CM, NONE)),
    (0x0A3C, 0x0A3C, p(CM, NONE)),
    (0x0A3E, 0x0A42, p(CM, NONE)),
    (0x0A47, 0x0A48, p(CM, NONE)),
    (0x0A4B, 0x0A4D, p(CM, NONE)),
    (0x0A51, 0x0A51, p(CM, NONE)),
    (0x0A66, 0x0A6F, p(NU, NONE)),
    (0x0A70, 0x0A71, p(CM, NONE)),
    (0x0A75, 0x0A75, p(CM, NONE)),
    (0x0A81, 0x0A83, p(CM, NONE)),
    (0x0ABC, 0x0ABC, p(CM, NONE)),
    (0x0ABE, 0x0AC5, p(CM, NONE)),
    (0x0AC7, 0x0AC9, p(CM, NONE)),
    (0x0ACB, 0x0ACD, p(CM, NONE)),
    (0x0AE2, 0x0AE3, p(CM, NONE)),
    (0x0AE6, 0x0AEF, p(NU, NONE)),
    (0x0AF1, 0x0AF1, p(PR, NONE)),
    (0x0AFA, 0x0AFF, p(CM, NONE)),
    (0x0B01, 0x0B03, p(CM, NONE)),
    (0x0B3C, 0x0B3C, p(CM, NONE)),
    (0x0B3E, 0x0B44, p(CM, NONE)),
    (0x0B47, 0x0B48, p(CM, NONE)),
    (0x0B4B, 0x0B4D, p(CM, NONE)),
    (0x0B55, 0x0B57, p(CM, NONE)),
    (0x0B62, 0x0B63, p(CM, NONE)),
    (0x0B66, 0x0B6F, p(NU, NONE)),
    (0x0B82, 0x0B82, p(CM, NONE)),
    (0x0BBE, 0x0BC2, p(CM, NONE)),
    (0x0BC6, 0x0BC8, p(CM, NONE)),
    (0x0BCA, 0x0BCD, p(CM, NONE)),
    (0x0BD7, 0x0BD7, p(CM, NONE)),
    (0x0BE6, 0x0BEF, p(NU, NONE)),
    (0x0BF9, 0x0BF9, p(PR, NONE)),
    (0x0C00, 0x0C04, p(CM, NONE)),
    (0x0C3C, 0x0C3C, p(CM, NONE)),
    (0x0C3E, 0x0C44, p(CM, NONE)),
    (0x0C46, 0x0C48, p(CM, NONE)),
    (0x0C4A, 0x0C4D, p(CM, NONE)),
    (0x0C55, 0x0C56, p(CM, NONE)),
    (0x0C62, 0x0C63, p(CM, NONE)),
    (0x0C66, 0x0C6F, p(NU, NONE)),
    (0x0C77, 0x0C77, p(BB, NONE)),
    (0x0C81, 0x0C83, p(CM, NONE)),
    (0x0C84, 0x0C84, p(BB, NONE)),
    (0x0CBC, 0x0CBC, p(CM, NONE)),
    (0x0CBE, 0x0CC4, p(CM, NONE)),
    (0x0CC6, 0x0CC8, p(CM, NONE)),
    (0x0CCA, 0x0CCD, p(CM, NONE)),
    (0x0CD5, 0x0CD6, p(CM, NONE)),
    (0x0CE2, 0x0CE3, p(CM, NONE)),
    (0x0CE6, 0x0CEF, p(NU, NONE)),
    (0x0CF3, 0x0CF3, p(CM, NONE)),
    (0x0D00, 0x0D03, p(CM, NONE)),
    (0x0D3B, 0x0D3C, p(CM, NONE)),
    (0x0D3E, 0x0D44, p(CM, NONE)),
    (0x0D46, 0x0D48, p(CM, NONE)),
    (0x0D4A, 0x0D4D, p(CM, NONE)),
    (0x0D57, 0x0D57, p(CM, NONE)),
    (0x0D62, 0x0D63, p(CM, NONE)),
    (0x0D66, 0x0D6F, p(NU, NONE)),
    (0x0D79, 0x0D79, p(PO, NONE)),
    (0x0D81, 0x0D83, p(CM, NONE)),
    (0x0DCA, 0x0DCA, p(CM, NONE)),
    (0x0DCF, 0x0DD4, p(CM, NONE)),
    (0x0DD6, 0x0DD6, p(CM, NONE)),
    (0x0DD8, 0x0DDF, p(CM, NONE)),
    (0x0DE6, 0x0DEF, p(NU, NONE)),
    (0x0DF2, 0x0DF3, p(CM, NONE)),
    (0x0E31, 0x0E31, p(CM, NONE)),
    (0x0E34, 0x0E3A, p(CM, NONE)),
    (0x0E3F, 0x0E3F, p(PR, NONE)),
    (0x0E47, 0x0E4E, p(CM, NONE)),
    (0x0E50, 0x0E59, p(NU, NONE)),
    (0x0E5A, 0x0E5B, p(BA, NONE)),
    (0x0EB1, 0x0EB1, p(CM, NONE)),
    (0x0EB4, 0x0EBC, p(CM, NONE)),
    (0x0EC8, 0x0ECE, p(CM, NONE)),
    (0x0ED0, 0x0ED9, p(NU, NONE)),
    (0x0F01, 0x0F04, p(BB, NONE)),
    (0x0F06, 0x0F07, p(BB, NONE)),
    (0x0F08, 0x0F08, p(GL, NONE)),
    (0x0F09, 0x0F0A, p(BB, NONE)),
    (0x0F0B, 0x0F0B, p(BA, NONE)),
    (0x0F0C, 0x0F0C, p(GL, NONE)),
    (0x0F0D, 0x0F11, p(EX, NONE)),
    (0x0F12, 0x0F12, p(GL, NONE)),
    (0x0F14, 0x0F14, p(EX, NONE)),
    (0x0F18, 0x0F19, p(CM, NONE)),
    (0x0F20, 0x0F29, p(NU, NONE)),
    (0x0F34, 0x0F34, p(BA, NONE)),
    (0x0F35, 0x0F35, p(CM, NONE)),
    (0x0F37, 0x0F37, p(CM, NONE)),
    (0x0F39, 0x0F39, p(CM, NONE)),
    (0x0F3A, 0x0F3A, p(OP, NONE)),
    (0x0F3B, 0x0F3B, p(CL, NONE)),
    (0x0F3C, 0x0F3C, p(OP, NONE)),
    (0x0F3D, 0x0F3D, p(CL, NONE)),
    (0x0F3E, 0x0F3F, p(CM, NONE)),
    (0x0F71, 0x0F7E, p(CM, NONE)),
    (0x0F7F, 0x0F7F, p(BA, NONE)),
    (0x0F80, 0x0F84, p(CM, NONE)),
    (0x0F85, 0x0F85, p(BA, NONE)),
    (0x0F86, 0x0F87, p(CM, NONE)),
    (0x0F8D, 0x0F97, p(CM, NONE)),
    (0x0F99, 0x0FBC, p(CM, NONE)),
    (0x0FBE, 0x0FBF, p(BA, NONE)),
    (0x0FC6, 0x0FC6, p(CM, NONE)),
    (0x0FD0, 0x0FD1, p(BB, NONE)),
    (0x0FD2, 0x0FD2, p(BA, NONE)),
    (0x0FD3, 0x0FD3, p(BB, NONE)),
    (0x0FD9, 0x0FDA, p(GL, NONE)),
    (0x102B, 0x103E, p(CM, NONE)),
    (0x1040, 0x1049, p(NU, NONE)),
    (0x104A, 0x104B, p(BA, NONE)),
    (0x1056, 0x1059, p(CM, NONE)),
    (0x105E, 0x1060, p(CM, NONE)),
    (0x1062, 0x1064, p(CM, NONE)),
    (0x1067, 0x106D, p(CM, NONE)),
    (0x1071, 0x1074, p(CM, NONE)),
    (0x1082, 0x108D, p(CM, NONE)),
    (0x108F, 0x108F, p(CM, NONE)),
    (0x1090, 0x1099, p(NU, NONE)),
    (0x109A, 0x109D, p(CM, NONE)),
    (0x1100, 0x115F, p(JL, NONE)),
    (0x1160, 0x11A7, p(JV, NONE)),
    (0x11A8, 0x11FF, p(JT, NONE)),
    (0x135D, 0x135F, p(CM, NONE)),
    (0x1361, 0x1361, p(BA, NONE)),
    (0x1400, 0x1400, p(BA, NONE)),
    (0x1680, 0x1680, p(BA, NONE)),
    (0x169B, 0x169B, p(OP, NONE)),
    (0x169C, 0x169C, p(CL, NONE)),
    (0x16EB, 0x16ED, p(BA, NONE)),
    (0x1712, 0x1715, p(CM, NONE)),
    (0x1732, 0x1734, p(CM, NONE)),
    (0x1735, 0x1736, p(BA, NONE)),
    (0x1752, 0x1753, p(CM, NONE)),
    (0x1772, 0x1773, p(CM, NONE)),
    (0x17B4, 0x17D3, p(CM, NONE)),
    (0x17D4, 0x17D5, p(BA, NONE)),
    (0x17D6, 0x17D6, p(NS, NONE)),
    (0x17D8, 0x17D8, p(BA, NONE)),
    (0x17DA, 0x17DA, p(BA, NONE)),
    (0x17DB, 0x17DB, p(PR, NONE)),
    (0x17DD, 0x17DD, p(CM, NONE)),
    (0x17E0, 0x17E9, p(NU, NONE)),
    (0x1802, 0x1803, p(EX, NONE)),
    (0x1804, 0x1805, p(BA, NONE)),
    (0x1806, 0x1806, p(BB, NONE)),
    (0x1808, 0x1809, p(EX, NONE)),
    (0x180B, 0x180D, p(CM, NONE)),
    (0x180E, 0x180E, p(GL, NONE)),
    (0x180F, 0x180F, p(CM, NONE)),
    (0x1810, 0x1819, p(NU, NONE)),
    (0x1885, 0x1886, p(CM, NONE)),
    (0x18A9, 0x18A9, p(CM, NONE)),
    (0x1920, 0x192B, p(CM, NONE)),
    (0x1930, 0x193B, p(CM, NONE)),
    (0x1944, 0x1945, p(EX, NONE)),
    (0x1946, 0x194F, p(NU, NONE)),
    (0x19D0, 0x19DA, p(NU, NONE)),
    (0x1A17, 0x1A1B, p(CM, NONE)),
    (0x1A55, 0x1A5E, p(CM, NONE)),
    (0x1A60, 0x1A7C, p(CM, NONE)),
    (0x1A7F, 0x1A7F, p(CM, NONE)),
    (0x1A80, 0x1A89, p(NU, NONE)),
    (0x1A90, 0x1A99, p(NU, NONE)),
    (0x1AB0, 0x1ADD, p(CM, NONE)),
    (0x1AE0, 0x1AEA, p(CM, NONE)),
    (0x1AEB, 0x1AEB, p(GL, NONE)),
    (0x1B00, 0x1B04, p(CM, NONE)),
    (0x1B34, 0x1B44, p(CM, NONE)),
    (0x1B4E, 0x1B4F, p(BA, NONE)),
    (0x1B5A, 0x1B5B, p(BA, NONE)),
    (0x1B5C, 0x1B5C, p(ID, NONE)),
    (0x1B5D, 0x1B60, p(BA, NONE)),
    (0x1B61, 0x1B6A, p(ID, NONE)),
    (0x1B6B, 0x1B73, p(CM, NONE)),
    (0x1B74, 0x1B7C, p(ID, NONE)),
    (0x1B7D, 0x1B7F, p(BA, NONE)),
    (0x1B80, 0x1B82, p(CM, NONE)),
    (0x1BA1, 0x1BAD, p(CM, NONE)),
    (0x1BB0, 0x1BB9, p(NU, NONE)),
    (0x1BE6, 0x1BF3, p(CM, NONE)),
    (0x1C24, 0x1C37, p(CM, NONE)),
    (0x1C3B, 0x1C3F, p(BA, NONE)),
    (0x1C40, 0x1C49, p(NU, NONE)),
    (0x1C50, 0x1C59, p(NU, NONE)),
    (0x1C7E, 0x1C7F, p(BA, NONE)),
    (0x1CD0, 0x1CD2, p(CM, NONE)),
    (0x1CD4, 0x1CE8, p(CM, NONE)),
    (0x1CED, 0x1CED, p(CM, NONE)),
    (0x1CF4, 0x1CF4, p(CM, NONE)),
    (0x1CF7, 0x1CF9, p(CM, NONE)),
    (0x1DC0, 0x1DCC, p(CM, NONE)),
    (0x1DCD, 0x1DCD, p(GL, NONE)),
    (0x1DCE, 0x1DFB, p(CM, NONE)),
    (0x1DFC, 0x1DFC, p(GL, NONE)),
    (0x1DFD, 0x1DFF, p(CM, NONE)),
    (0x1FFD, 0x1FFD, p(BB, NONE)),
    (0x2000, 0x2006, p(BA, NONE)),
    (0x2007, 0x2007, p(GL, NONE)),
    (0x2008, 0x200A, p(BA, NONE)),
    (0x200B, 0x200B, p(ZW, NONE)),
    (0x200C, 0x200C, p(CM, NONE)),
    (0x200D, 0x200D, p(ZWJ, NONE)),
    (0x200E, 0x200F, p(CM, NONE)),
    (0x2010, 0x2010, p(BA, NONE)),
    (0x2011, 0x2011, p(GL, NONE)),
    (0x2012, 0x2013, p(BA, NONE)),
    (0x2014, 0x2014, p(B2, NONE)),
    (0x2018, 0x2018, p(QU, PI)),
    (0x2019, 0x2019, p(QU, PF)),
    (0x201A, 0x201A, p(OP, NONE)),
    (0x201B, 0x201C, p(QU, PI)),
    (0x201D, 0x201D, p(QU, PF)),
    (0x201E, 0x201E, p(OP, NONE)),
    (0x201F, 0x201F, p(QU, PI)),
    (0x2024, 0x2026, p(IN, NONE)),
    (0x2027, 0x2027, p(BA, NONE)),
    (0x2028, 0x2029, p(BK, NONE)),
    (0x202A, 0x202E, p(CM, NONE)),
    (0x202F, 0x202F, p(GL, NONE)),
    (0x2030, 0x2037, p(PO, NONE)),
    (0x2039, 0x2039, p(QU, PI)),
    (0x203A, 0x203A, p(QU, PF)),
    (0x203C, 0x203D, p(NS, NONE)),
    (0x2044, 0x2044, p(IS, NONE)),
    (0x2045, 0x2045, p(OP, NONE)),
    (0x2046, 0x2046, p(CL, NONE)),
    (0x2047, 0x2049, p(NS, NONE)),
    (0x2056, 0x2056, p(BA, NONE)),
    (0x2057, 0x2057, p(PO, NONE)),
    (0x2058, 0x205B, p(BA, NONE)),
    (0x205D, 0x205F, p(BA, NONE)),
    (0x2060, 0x2060, p(WJ, NONE)),
    (0x2066, 0x206F, p(CM, NONE)),
    (0x207D, 0x207D, p(OP, NONE)),
    (0x207E, 0x207E, p(CL, NONE)),
    (0x208D, 0x208D, p(OP, NONE)),
    (0x208E, 0x208E, p(CL, NONE)),
    (0x20A0, 0x20A6, p(PR, NONE)),
    (0x20A7, 0x20A7, p(PO, NONE)),
    (0x20A8, 0x20B5, p(PR, NONE)),
    (0x20B6, 0x20B6, p(PO, NONE)),
    (0x20B7, 0x20BA, p(PR, NONE)),
    (0x20BB, 0x20BB, p(PO, NONE)),
    (0x20BC, 0x20BD, p(PR, NONE)),
    (0x20BE, 0x20BE, p(PO, NONE)),
    (0x20BF, 0x20BF, p(PR, NONE)),
    (0x20C0, 0x20C0, p(PO, NONE)),
    (0x20C1, 0x20CF, p(PR, NONE)),
    (0x20D0, 0x20F0, p(CM, NONE)),
    (0x2103, 0x2103, p(PO, NONE)),
    (0x2109, 0x2109, p(PO, NONE)),
    (0x2116, 0x2116, p(PR, NONE)),
    (0x2212, 0x2213, p(PR, NONE)),
    (0x22EF, 0x22EF, p(IN, NONE)),
    (0x2308, 0x2308, p(OP, NONE)),
    (0x2309, 0x2309, p(CL, NONE)),
    (0x230A, 0x230A, p(OP, NONE)),
    (0x230B, 0x230B, p(CL, NONE)),
    (0x231A, 0x231B, p(ID, NONE)),
    (0x2329, 0x2329, p(OP, WIDE)),
    (0x232A, 0x232A, p(CL, NONE)),
    (0x23F0, 0x23F3, p(ID, NONE)),
    (0x2600, 0x2603, p(ID, NONE)),
    (0x2614, 0x2615, p(ID, NONE)),
    (0x2618, 0x2618, p(ID, NONE)),
    (0x261A, 0x261C, p(ID, NONE)),
    (0x261D, 0x261D, p(EB, NONE)),
    (0x261E, 0x261F, p(ID, NONE)),
    (0x2639, 0x263B, p(ID, NONE)),
    (0x2668, 0x2668, p(ID, NONE)),
    (0x267F, 0x267F, p(ID, NONE)),
    (0x26BD, 0x26C8, p(ID, NONE)),
    (0x26CD, 0x26CD, p(ID, NONE)),
    (0x26CF, 0x26D1, p(ID, NONE)),
    (0x26D3, 0x26D4, p(ID, NONE)),
    (0x26D8, 0x26D9, p(ID, NONE)),
    (0x26DC, 0x26DC, p(ID, NONE)),
    (0x26DF, 0x26E1, p(ID, NONE)),
    (0x26EA, 0x26EA, p(ID, NONE)),
    (0x26F1, 0x26F5, p(ID, NONE)),
    (0x26F7, 0x26F8, p(ID, NONE)),
    (0x26F9, 0x26F9, p(EB, NONE)),
    (0x26FA, 0x26FA, p(ID, NONE)),
    (0x26FD, 0x2704, p(ID, NONE)),
    (0x2708, 0x2709, p(ID, NONE)),
    (0x270A, 0x270D, p(EB, NONE)),
    (0x275B, 0x2760, p(QU, NONE)),
    (0x2762, 0x2763, p(EX, NONE)),
    (0x2764, 0x2764, p(ID, NONE)),
    (0x2768, 0x2768, p(OP, NONE)),
    (0x2769, 0x2769, p(CL, NONE)),
    (0x276A, 0x276A, p(OP, NONE)),
    (0x276B, 0x276B, p(CL, NONE)),
    (0x276C, 0x276C, p(OP, NONE)),
    (0x276D, 0x276D, p(CL, NONE)),
    (0x276E, 0x276E, p(OP, NONE)),
    (0x276F, 0x276F, p(CL, NONE)),
    (0x2770, 0x2770, p(OP, NONE)),
    (0x2771, 0x2771, p(CL, NONE)),
    (0x2772, 0x2772, p(OP, NONE)),
    (0x2773, 0x2773, p(CL, NONE)),
    (0x2774, 0x2774, p(OP, NONE)),
    (0x2775, 0x2775, p(CL, NONE)),
    (0x27C5, 0x27C5, p(OP, NONE)),
    (0x27C6, 0x27C6, p(CL, NONE)),
    (0x27E6, 0x27E6, p(OP, NONE)),
    (0x27E7, 0x27E7, p(CL, NONE)),
    (0x27E8, 0x27E8, p(OP, NONE)),
    (0x27E9, 0x27E9, p(CL, NONE)),
    (0x27EA, 0x27EA, p(OP, NONE)),
    (0x27EB, 0x27EB, p(CL, NONE)),
    (0x27EC, 0x27EC, p(OP, NONE)),
    (0x27ED, 0x27ED, p(CL, NONE)),
    (0x27EE, 0x27EE, p(OP, NONE)),
    (0x27EF, 0x27EF, p(CL, NONE)),
    (0x2800, 0x2800, p(BA, NONE)),
    (0x2983, 0x2983, p(OP, NONE)),
    (0x2984, 0x2984, p(CL, NONE)),
    (0x2985, 0x2985, p(OP, NONE)),
    (0x2986, 0x2986, p(CL, NONE)),
    (0x2987, 0x2987, p(OP, NONE)),
    (0x2988, 0x2988, p(CL, NONE)),
    (0x2989, 0x2989, p(OP, NONE)),
    (0x298A, 0x298A, p(CL, NONE)),
    (0x298B, 0x298B, p(OP, NONE)),
    (0x298C, 0x298C, p(CL, NONE)),
    (0x298D, 0x298D, p(OP, NONE)),
    (0x298E, 0x298E, p(CL, NONE)),
    (0x298F, 0x298F, p(OP, NONE)),
    (0x2990, 0x2990, p(CL, NONE)),
    (0x2991, 0x2991, p(OP, NONE)),
    (0x2992, 0x2992, p(CL, NONE)),
    (0x2993, 0x2993, p(OP, NONE)),
    (0x2994, 0x2994, p(CL, NONE)),
    (0x2995, 0x2995, p(OP, NONE)),
    (0x2996, 0x2996, p(CL, NONE)),
    (0x2997, 0x2997, p(OP, NONE)),
    (0x2998, 0x2998, p(CL, NONE)),
    (0x29D8, 0x29D8, p(OP, NONE)),
    (0x29D9, 0x29D9, p(CL, NONE)),
    (0x29DA, 0x29DA, p(OP, NONE)),
    (0x29DB, 0x29DB, p(CL, NONE)),
    (0x29FC, 0x29FC, p(OP, NONE)),
    (0x29FD, 0x29FD, p(CL, NONE)),
    (0x2CEF, 0x2CF1, p(CM, NONE)),
    (0x2CF9, 0x2CF9, p(EX, NONE)),
    (0x2CFA, 0x2CFC, p(BA, NONE)),
    (0x2CFE, 0x2CFE, p(EX, NONE)),
    (0x2CFF, 0x2CFF, p(BA, NONE)),
    (0x2D70, 0x2D70, p(BA, NONE)),
    (0x2D7F, 0x2D7F, p(CM, NONE)),
    (0x2DE0, 0x2DFF, p(CM, NONE)),
    (0x2E00, 0x2E01, p(QU, NONE)),
    (0x2E02, 0x2E02, p(QU, PI)),
    (0x2E03, 0x2E03, p(QU, PF)),
    (0x2E04, 0x2E04, p(QU, PI)),
    (0x2E05, 0x2E05, p(QU, PF)),
    (0x2E06, 0x2E08, p(QU, NONE)),
    (0x2E09, 0x2E09, p(QU, PI)),
    (0x2E0A, 0x2E0A, p(QU, PF)),
    (0x2E0B, 0x2E0B, p(QU, NONE)),
    (0x2E0C, 0x2E0C, p(QU, PI)),
    (0x2E0D, 0x2E0D, p(QU, PF)),
    (0x2E0E, 0x2E15, p(BA, NONE)),
    (0x2E17, 0x2E17, p(BA, NONE)),
    (0x2E18, 0x2E18, p(OP, NONE)),
    (0x2E19, 0x2E19, p(BA, NONE)),
    (0x2E1C, 0x2E1C, p(QU, PI)),
    (0x2E1D, 0x2E1D, p(QU, PF)),
    (0x2E20, 0x2E20, p(QU, PI)),
    (0x2E21, 0x2E21, p(QU, PF)),
    (0x2E22, 0x2E22, p(OP, NONE)),
    (0x2E23, 0x2E23, p(CL, NONE)),
    (0x2E24, 0x2E24, p(OP, NONE)),
    (0x2E25, 0x2E25, p(CL, NONE)),
    (0x2E26, 0x2E26, p(OP, NONE)),
    (0x2E27, 0x2E27, p(CL, NONE)),
    (0x2E28, 0x2E28, p(OP, NONE)),
    (0x2E29, 0x2E29, p(CL, NONE)),
    (0x2E2A, 0x2E2D, p(BA, NONE)),
    (0x2E2E, 0x2E2E, p(EX, NONE)),
    (0x2E30, 0x2E31, p(BA, NONE)),
    (0x2E33, 0x2E34, p(BA, NONE)),
    (0x2E3A, 0x2E3B, p(B2, NONE)),
    (0x2E3C, 0x2E3E, p(BA, NONE)),
    (0x2E40, 0x2E41, p(BA, NONE)),
    (0x2E42, 0x2E42, p(OP, NONE)),
    (0x2E43, 0x2E4A, p(BA, NONE)),
    (0x2E4C, 0x2E4C, p(BA, NONE)),
    (0x2E4E, 0x2E4F, p(BA, NONE)),
    (0x2E53, 0x2E54, p(EX, NONE)),
    (0x2E55, 0x2E55, p(OP, NONE)),
    (0x2E56, 0x2E56, p(CP, NONE)),
    (0x2E57, 0x2E57, p(OP, NONE)),
    (0x2E58, 0x2E58, p(CP, NONE)),
    (0x2E59, 0x2E59, p(OP, NONE)),
    (0x2E5A, 0x2E5A, p(CP, NONE)),
    (0x2E5B, 0x2E5B, p(OP, NONE)),
    (0x2E5C, 0x2E5C, p(CP, NONE)),
    (0x2E5D, 0x2E5D, p(BA, NONE)),
    (0x2E80, 0x2E99, p(ID, NONE)),
    (0x2E9B, 0x2EF3, p(ID, NONE)),
    (0x2F00, 0x2FD5, p(ID, NONE)),
    (0x2FF0, 0x2FFF, p(ID, NONE)),
    (0x3000, 0x3000, p(BA, NONE)),
    (0x3001, 0x3002, p(CL, NONE)),
    (0x3003, 0x3004, p(ID, NONE)),
    (0x3005, 0x3005, p(NS, NONE)),
    (0x3006, 0x3007, p(ID, NONE)),
    (0x3008, 0x3008, p(OP, WIDE)),
    (0x3009, 0x3009, p(CL, NONE)),
    (0x300A, 0x300A, p(OP, WIDE)),
    (0x300B, 0x300B, p(CL, NONE)),
    (0x300C, 0x300C, p(OP, WIDE)),
    (0x300D, 0x300D, p(CL, NONE)),
    (0x300E, 0x300E, p(OP, WIDE)),
    (0x300F, 0x300F, p(CL, NONE)),
    (0x3010, 0x3010, p(OP, WIDE)),
    (0x3011, 0x3011, p(CL, NONE)),
    (0x3012, 0x3013, p(ID, NONE)),
    (0x3014, 0x3014, p(OP, WIDE)),
    (0x3015, 0x3015, p(CL, NONE)),
    (0x3016, 0x3016, p(OP, WIDE)),
    (0x3017, 0x3017, p(CL, NONE)),
    (0x3018, 0x3018, p(OP, WIDE)),
    (0x3019, 0x3019, p(CL, NONE)),
    (0x301A, 0x301A, p(OP, WIDE)),
    (0x301B, 0x301B, p(CL, NONE)),
    (0x301C, 0x301C, p(NS, NONE)),
    (0x301D, 0x301D, p(OP, WIDE)),
    (0x301E, 0x301F, p(CL, NONE)),
    (0x3020, 0x3029, p(ID, NONE)),
    (0x302A, 0x302F, p(CM, NONE)),
    (0x3030, 0x3034, p(ID, NONE)),
    (0x3035, 0x3035, p(CM, NONE)),
    (0x3036, 0x303A, p(ID, NONE)),
    (0x303B, 0x303C, p(NS, NONE)),
    (0x303D, 0x303F, p(ID, NONE)),
    (0x3041, 0x3041, p(NS, NONE)),
    (0x3042, 0x3042, p(ID, NONE)),
    (0x3043, 0x3043, p(NS, NONE)),
    (0x3044, 0x3044, p(ID, NONE)),
    (0x3045, 0x3045, p(NS, NONE)),
    (0x3046, 0x3046, p(ID, NONE)),
    (0x3047, 0x3047, p(NS, NONE)),
    (0x3048, 0x3048, p(ID, NONE)),
    (0x3049, 0x3049, p(NS, NONE)),
    (0x304A, 0x3062, p(ID, NONE)),
    (0x3063, 0x3063, p(NS, NONE)),
    (0x3064, 0x3082, p(ID, NONE)),
    (0x3083, 0x3083, p(NS, NONE)),
    (0x3084, 0x3084, p(ID, NONE)),
    (0x3085, 0x3085, p(NS, NONE)),
    (0x3086, 0x3086, p(ID, NONE)),
    (0x3087, 0x3087, p(NS, NONE)),
    (0x3088, 0x308D, p(ID, NONE)),
    (0x308E, 0x308E, p(NS, NONE)),
    (0x308F, 0x3094, p(ID, NONE)),
    (0x3095, 0x3096, p(NS, NONE)),
    (0x3099, 0x309A, p(CM, NONE)),
    (0x309B, 0x309E, p(NS, NONE)),
    (0x309F, 0x309F, p(ID, NONE)),
    (0x30A0, 0x30A1, p(NS, NONE)),
    (0x30A2, 0x30A2, p(ID, NONE)),
    (0x30A3, 0x30A3, p(NS, NONE)),
    (0x30A4, 0x30A4, p(ID, NONE)),
    (0x30A5, 0x30A5, p(NS, NONE)),
    (0x30A6, 0x30A6, p(ID, NONE)),
    (0x30A7, 0x30A7, p(NS, NONE)),
    (0x30A8, 0x30A8, p(ID, NONE)),
    (0x30A9, 0x30A9, p(NS, NONE)),
    (0x30AA, 0x30C2, p(ID, NONE)),
    (0x30C3, 0x30C3, p(NS, NONE)),
    (0x30C4, 0x30E2, p(ID, NONE)),
    (0x30E3, 0x30E3, p(NS, NONE)),
    (0x30E4, 0x30E4, p(ID, NONE)),
    (0x30E5, 0x30E5, p(NS, NONE)),
    (0x30E6, 0x30E6, p(ID, NONE)),
    (0x30E7, 0x30E7, p(NS, NONE)),
    (0x30E8, 0x30ED, p(ID, NONE)),
    (0x30EE, 0x30EE, p(NS, NONE)),
    (0x30EF, 0x30F4, p(ID, NONE)),
    (0x30F5, 0x30F6, p(NS, NONE)),
    (0x30F7, 0x30FA, p(ID, NONE)),
    (0x30FB, 0x30FE, p(NS, NONE)),
    (0x30FF, 0x30FF, p(ID, NONE)),
    (0x3105, 0x312F, p(ID, NONE)),
    (0x3131, 0x318E, p(ID, NONE)),
    (0x3190, 0x31E5, p(ID, NONE)),
    (0x31EF, 0x31EF, p(ID, NONE)),
    (0x31F0, 0x31FF, p(NS, NONE)),
    (0x3200, 0x321E, p(ID, NONE)),
    (0x3220, 0x3247, p(ID, NONE)),
    (0x3250, 0x4DBF, p(ID, NONE)),
    (0x4E00, 0xA014, p(ID, NONE)),
    (0xA015, 0xA015, p(NS, NONE)),
    (0xA016, 0xA48C, p(ID, NONE)),
    (0xA490, 0xA4C6, p(ID, NONE)),
    (0xA4FE, 0xA4FF, p(BA, NONE)),
    (0xA60D, 0xA60D, p(BA, NONE)),
    (0xA60E, 0xA60E, p(EX, NONE)),
    (0xA60F, 0xA60F, p(BA, NONE)),
    (0xA620, 0xA629, p(NU, NONE)),
    (0xA66F, 0xA672, p(CM, NONE)),
    (0xA674, 0xA67D, p(CM, NONE)),
    (0xA69E, 0xA69F, p(CM, NONE)),
    (0xA6F0, 0xA6F1, p(CM, NONE)),
    (0xA6F3, 0xA6F7, p(BA, NONE)),
    (0xA802, 0xA802, p(CM, NONE)),
    (0xA806, 0xA806, p(CM, NONE)),
    (0xA80B, 0xA80B, p(CM, NONE)),
    (0xA823, 0xA827, p(CM, NONE)),
    (0xA82C, 0xA82C, p(CM, NONE)),
    (0xA838, 0xA838, p(PO, NONE)),
    (0xA874, 0xA875, p(BB, NONE)),
    (0xA876, 0xA877, p(EX, NONE)),
    (0xA880, 0xA881, p(CM, NONE)),
    (0xA8B4, 0xA8C5, p(CM, NONE)),
    (0xA8CE, 0xA8CF, p(BA, NONE)),
    (0xA8D0, 0xA8D9, p(NU, NONE)),
    (0xA8E0, 0xA8F1, p(CM, NONE)),
    (0xA8FC, 0xA8FC, p(BB, NONE)),
    (0xA8FF, 0xA8FF, p(CM, NONE)),
    (0xA900, 0xA909, p(NU, NONE)),
    (0xA926, 0xA92D, p(CM, NONE)),
    (0xA92E, 0xA92F, p(BA, NONE)),
    (0xA947, 0xA953, p(CM, NONE)),
    (0xA960, 0xA97C, p(JL, NONE)),
    (0xA980, 0xA983, p(CM, NONE)),
    (0xA9B3, 0xA9C0, p(CM, NONE)),
    (0xA9C1, 0xA9C6, p(ID, NONE)),
    (0xA9C7, 0xA9C9, p(BA, NONE)),
    (0xA9CA, 0xA9CD, p(ID, NONE)),
    (0xA9CF, 0xA9CF, p(BA, NONE)),
    (0xA9DE, 0xA9DF, p(ID, NONE)),
    (0xA9E5, 0xA9E5, p(CM, NONE)),
    (0xA9F0, 0xA9F9, p(NU, NONE)),
    (0xAA29, 0xAA36, p(CM, NONE)),
    (0xAA40, 0xAA42, p(BA, NONE)),
    (0xAA43, 0xAA43, p(CM, NONE)),
    (0xAA44, 0xAA4B, p(BA, NONE)),
    (0xAA4C, 0xAA4D, p(CM, NONE)),
    (0xAA5C, 0xAA5C, p(ID, NONE)),
    (0xAA5D, 0xAA5F, p(BA, NONE)),
    (0xAA7B, 0xAA7D, p(CM, NONE)),
    (0xAAB0, 0xAAB0, p(CM, NONE)),
    (0xAAB2, 0xAAB4, p(CM, NONE)),
    (0xAAB7, 0xAAB8, p(CM, NONE)),
    (0xAABE, 0xAABF, p(CM, NONE)),
    (0xAAC1, 0xAAC1, p(CM, NONE)),
    (0xAAEB, 0xAAEF, p(CM, NONE)),
    (0xAAF0, 0xAAF1, p(BA, NONE)),
    (0xAAF5, 0xAAF6, p(CM, NONE)),
    (0xABE3, 0xABEA, p(CM, NONE)),
    (0xABEB, 0xABEB, p(BA, NONE)),
    (0xABEC, 0xABED, p(CM, NONE)),
    (0xABF0, 0xABF9, p(NU, NONE)),
    (0xAC00, 0xAC00, p(H2, NONE)),
    (0xAC01, 0xAC1B, p(H3, NONE)),
    (0xAC1C, 0xAC1C, p(H2, NONE)),
    (0xAC1D, 0xAC37, p(H3, NONE)),
    (0xAC38, 0xAC38, p(H2, NONE)),
    (0xAC39, 0xAC53, p(H3, NONE)),
    (0xAC54, 0xAC54, p(H2, NONE)),
    (0xAC55, 0xAC6F, p(H3, NONE)),
    (0xAC70, 0xAC70, p(H2, NONE)),
    (0xAC71, 0xAC8B, p(H3, NONE)),
    (0xAC8C, 0xAC8C, p(H2, NONE)),
    (0xAC8D, 0xACA7, p(H3, NONE)),
    (0xACA8, 0xACA8, p(H2, NONE)),
    (0xACA9, 0xACC3, p(H3, NONE)),
    (0xACC4, 0xACC4, p(H2, NONE)),
    (0xACC5, 0xACDF, p(H3, NONE)),
    (0xACE0, 0xACE0, p(H2, NONE)),
    (0xACE1, 0xACFB, p(H3, NONE)),
    (0xACFC, 0xACFC, p(H2, NONE)),
    (0xACFD, 0xAD17, p(H3, NONE)),
    (0xAD18, 0xAD18, p(H2, NONE)),
    (0xAD19, 0xAD33, p(H3, NONE)),
    (0xAD34, 0xAD34, p(H2, NONE)),
    (0xAD35, 0xAD4F, p(H3, NONE)),
    (0xAD50, 0xAD50, p(H2, NONE)),
    (0xAD51, 0xAD6B, p(H3, NONE)),
    (0xAD6C, 0xAD6C, p(H2, NONE)),
    (0xAD6D, 0xAD87, p(H3, NONE)),
    (0xAD88, 0xAD88, p(H2, NONE)),
    (0xAD89, 0xADA3, p(H3, NONE)),
    (0xADA4, 0xADA4, p(H2, NONE)),
    (0xADA5, 0xADBF, p(H3, NONE)),
    (0xADC0, 0xADC0, p(H2, NONE)),
    (0xADC1, 0xADDB, p(H3, NONE)),
    (0xADDC, 0xADDC, p(H2, NONE)),
    (0xADDD, 0xADF7, p(H3, NONE)),
    (0xADF8, 0xADF8, p(H2, NONE)),
    (0xADF9, 0xAE13, p(H3, NONE)),
    (0xAE14, 0xAE14, p(H2, NONE)),
    (0xAE15, 0xAE2F, p(H3, NONE)),
    (0xAE30, 0xAE30, p(H2, NONE)),
    (0xAE31, 0xAE4B, p(H3, NONE)),
    (0xAE4C, 0xAE4C, p(H2, NONE)),
    (0xAE4D, 0xAE67, p(H3, NONE)),
    (0xAE68, 0xAE68, p(H2, NONE)),
    (0xAE69, 0xAE83, p(H3, NONE)),
    (0xAE84, 0xAE84, p(H2, NONE)),
    (0xAE85, 0xAE9F, p(H3, NONE)),
    (0xAEA0, 0xAEA0, p(H2, NONE)),
    (0xAEA1, 0xAEBB, p(H3, NONE)),
    (0xAEBC, 0xAEBC, p(H2, NONE)),
    (0xAEBD, 0xAED7, p(H3, NONE)),
    (0xAED8, 0xAED8, p(H2, NONE)),
    (0xAED9, 0xAEF3, p(H3, NONE)),
    (0xAEF4, 0xAEF4, p(H2, NONE)),
    (0xAEF5, 0xAF0F, p(H3, NONE)),
    (0xAF10, 0xAF10, p(H2, NONE)),
    (0xAF11, 0xAF2B, p(H3, NONE)),
    (0xAF2C, 0xAF2C, p(H2, NONE)),
    (0xAF2D, 0xAF47, p(H3, NONE)),
    (0xAF48, 0xAF48, p(H2, NONE)),
    (0xAF49, 0xAF63, p(H3, NONE)),
    (0xAF64, 0xAF64, p(H2, NONE)),
    (0xAF65, 0xAF7F, p(H3, NONE)),
    (0xAF80, 0xAF80, p(H2, NONE)),
    (0xAF81, 0xAF9B, p(H3, NONE)),
    (0xAF9C, 0xAF9C, p(H2, NONE)),
    (0xAF9D, 0xAFB7, p(H3, NONE)),
    (0xAFB8, 0xAFB8, p(H2, NONE)),
    (0xAFB9, 0xAFD3, p(H3, NONE)),
    (0xAFD4, 0xAFD4, p(H2, NONE)),
    (0xAFD5, 0xAFEF, p(H3, NONE)),
    (0xAFF0, 0xAFF0, p(H2, NONE)),
    (0xAFF1, 0xB00B, p(H3, NONE)),
    (0xB00C, 0xB00C, p(H2, NONE)),
    (0xB00D, 0xB027, p(H3, NONE)),
    (0xB028, 0xB028, p(H2, NONE)),
    (0xB029, 0xB043, p(H3, NONE)),
    (0xB044, 0xB044, p(H2, NONE)),
    (0xB045, 0xB05F, p(H3, NONE)),
    (0xB060, 0xB060, p(H2, NONE)),
    (0xB061, 0xB07B, p(H3, NONE)),
    (0xB07C, 0xB07C, p(H2, NONE)),
    (0xB07D, 0xB097, p(H3, NONE)),
    (0xB098, 0xB098, p(H2, NONE)),
    (0xB099, 0xB0B3, p(H3, NONE)),
    (0xB0B4, 0xB0B4, p(H2, NONE)),
    (0xB0B5, 0xB0CF, p(H3, NONE)),
    (0xB0D0, 0xB0D0, p(H2, NONE)),
    (0xB0D1, 0xB0EB, p(H3, NONE)),
    (0xB0EC, 0xB0EC, p(H2, NONE)),
    (0xB0ED, 0xB107, p(H3, NONE)),
    (0xB108, 0xB108, p(H2, NONE)),
    (0xB109, 0xB123, p(H3, NONE)),
    (0xB124, 0xB124, p(H2, NONE)),
    (0xB125, 0xB13F, p(H3, NONE)),
    (0xB140, 0xB140, p(H2, NONE)),
    (0xB141, 0xB15B, p(H3, NONE)),
    (0xB15C, 0xB15C, p(H2, NONE)),
    (0xB15D, 0xB177, p(H3, NONE)),
    (0xB178, 0xB178, p(H2, NONE)),
    (0xB179, 0xB193, p(H3, NONE)),
    (0xB194, 0xB194, p(H2, NONE)),
    (0xB195, 0xB1AF, p(H3, NONE)),
    (0xB1B0, 0xB1B0, p(H2, NONE)),
    (0xB1B1, 0xB1CB, p(H3, NONE)),
    (0xB1CC, 0xB1CC, p(H2, NONE)),
    (0xB1CD, 0xB1E7, p(H3, NONE)),
    (0xB1E8, 0xB1E8, p(H2, NONE)),
    (0xB1E9, 0xB203, p(H3, NONE)),
    (0xB204, 0xB204, p(H2, NONE)),
    (0xB205, 0xB21F, p(H3, NONE)),
    (0xB220, 0xB220, p(H2, NONE)),
    (0xB221, 0xB23B, p(H3, NONE)),
    (0xB23C, 0xB23C, p(H2, NONE)),
    (0xB23D, 0xB257, p(H3, NONE)),
    (0xB258, 0xB258, p(H2, NONE)),
    (0xB259, 0xB273, p(H3, NONE)),
    (0xB274, 0xB274, p(H2, NONE)),
    (0xB275, 0xB28F, p(H3, NONE)),
    (0xB290, 0xB290, p(H2, NONE)),
    (0xB291, 0xB2AB, p(H3, NONE)),
    (0xB2AC, 0xB2AC, p(H2, NONE)),
    (0xB2AD, 0xB2C7, p(H3, NONE)),
    (0xB2C8, 0xB2C8, p(H2, NONE)),
    (0xB2C9, 0xB2E3, p(H3, NONE)),
    (0xB2E4, 0xB2E4, p(H2, NONE)),
    (0xB2E5, 0xB2FF, p(H3, NONE)),
    (0xB300, 0xB300, p(H2, NONE)),
    (0xB301, 0xB31B, p(H3, NONE)),
    (0xB31C, 0xB31C, p(H2, NONE)),
    (0xB31D, 0xB337, p(H3, NONE)),
    (0xB338, 0xB338, p(H2, NONE)),
    (0xB339, 0xB353, p(H3, NONE)),
    (0xB354, 0xB354, p(H2, NONE)),
    (0xB355, 0xB36F, p(H3, NONE)),
    (0xB370, 0xB370, p(H2, NONE)),
    (0xB371, 0xB38B, p(H3, NONE)),
    (0xB38C, 0xB38C, p(H2, NONE)),
    (0xB38D, 0xB3A7, p(H3, NONE)),
    (0xB3A8, 0xB3A8, p(H2, NONE)),
    (0xB3A9, 0xB3C3, p(H3, NONE)),
    (0xB3C4, 0xB3C4, p(H2, NONE)),
    (0xB3C5, 0xB3DF, p(H3, NONE)),
    (0xB3E0, 0xB3E0, p(H2, NONE)),
    (0xB3E1, 0xB3FB, p(H3, NONE)),
    (0xB3FC, 0xB3FC, p(H2, NONE)),
    (0xB3FD, 0xB417, p(H3, NONE)),
    (0xB418, 0xB418, p(H2, NONE)),
    (0xB419, 0xB433, p(H3, NONE)),
    (0xB434, 0xB434, p(H2, NONE)),
    (0xB435, 0xB44F, p(H3, NONE)),
    (0xB450, 0xB450, p(H2, NONE)),
    (0xB451, 0xB46B, p(H3, NONE)),
    (0xB46C, 0xB46C, p(H2, NONE)),
    (0xB46D, 0xB487, p(H3, NONE)),
    (0xB488, 0xB488, p(H2, NONE)),
    (0xB489, 0xB4A3, p(H3, NONE)),
    (0xB4A4, 0xB4A4, p(H2, NONE)),
    (0xB4A5, 0xB4BF, p(H3, NONE)),
    (0xB4C0, 0xB4C0, p(H2, NONE)),
    (0xB4C1, 0xB4DB, p(H3, NONE)),
    (0xB4DC, 0xB4DC, p(H2, NONE)),
    (0xB4DD, 0xB4F7, p(H3, NONE)),
    (0xB4F8, 0xB4F8, p(H2, NONE)),
    (0xB4F9, 0xB513, p(H3, NONE)),
    (0xB514, 0xB514, p(H2, NONE)),
    (0xB515, 0xB52F, p(H3, NONE)),
    (0xB530, 0xB530, p(H2, NONE)),
    (0xB531, 0xB54B, p(H3, NONE)),
    (0xB54C, 0xB54C, p(H2, NONE)),
    (0xB54D, 0xB567, p(H3, NONE)),
    (0xB568, 0xB568, p(H2, NONE)),
    (0xB569, 0xB583, p(H3, NONE)),
    (0xB584, 0xB584, p(H2, NONE)),
    (0xB585, 0xB59F, p(H3, NONE)),
    (0xB5A0, 0xB5A0, p(H2, NONE)),
    (0xB5A1, 0xB5BB, p(H3, NONE)),
    (0xB5BC, 0xB5BC, p(H2, NONE)),
    (0xB5BD, 0xB5D7, p(H3, NONE)),
    (0xB5D8, 0xB5D8, p(H2, NONE)),
    (0xB5D9, 0xB5F3, p(H3, NONE)),
    (0xB5F4, 0xB5F4, p(H2, NONE)),
    (0xB5F5, 0xB60F, p(H3, NONE)),
    (0xB610, 0xB610, p(H2, NONE)),
    (0xB611, 0xB62B, p(H3, NONE)),
    (0xB62C, 0xB62C, p(H2, NONE)),
    (0xB62D, 0xB647, p(H3, NONE)),
    (0xB648, 0xB648, p(H2, NONE)),
    (0xB649, 0xB663, p(H3, NONE)),
    (0xB664, 0xB664, p(H2, NONE)),
    (0xB665, 0xB67F, p(H3, NONE)),
    (0xB680, 0xB680, p(H2, NONE)),
    (0xB681, 0xB69B, p(H3, NONE)),
    (0xB69C, 0xB69C, p(H2, NONE)),
    (0xB69D, 0xB6B7, p(H3, NONE)),
    (0xB6B8, 0xB6B8, p(H2, NONE)),
    (0xB6B9, 0xB6D3, p(H3, NONE)),
    (0xB6D4, 0xB6D4, p(H2, NONE)),
    (0xB6D5, 0xB6EF, p(H3, NONE)),
    (0xB6F0, 0xB6F0, p(H2, NONE)),
    (0xB6F1, 0xB70B, p(H3, NONE)),
    (0xB70C, 0xB70C, p(H2, NONE)),
    (0xB70D, 0xB727, p(H3, NONE)),
    (0xB728, 0xB728, p(H2, NONE)),
    (0xB729, 0xB743, p(H3, NONE)),
    (0xB744, 0xB744, p(H2, NONE)),
    (0xB745, 0xB75F, p(H3, NONE)),
    (0xB760, 0xB760, p(H2, NONE)),
    (0xB761, 0xB77B, p(H3, NONE)),
    (0xB77C, 0xB77C, p(H2, NONE)),
    (0xB77D, 0xB797, p(H3, NONE)),
    (0xB798, 0xB798, p(H2, NONE)),
    (0xB799, 0xB7B3, p(H3, NONE)),
    (0xB7B4, 0xB7B4, p(H2, NONE)),
    (0xB7B5, 0xB7CF, p(H3, NONE)),
    (0xB7D0, 0xB7D0, p(H2, NONE)),
    (0xB7D1, 0xB7EB, p(H3, NONE)),
    (0xB7EC, 0xB7EC, p(H2, NONE)),
    (0xB7ED, 0xB807, p(H3, NONE)),
    (0xB808, 0xB808, p(H2, NONE)),
    (0xB809, 0xB823, p(H3, NONE)),
    (0xB824, 0xB824, p(H2, NONE)),
    (0xB825, 0xB83F, p(H3, NONE)),
    (0xB840, 0xB840, p(H2, NONE)),
    (0xB841, 0xB85B, p(H3, NONE)),
    (0xB85C, 0xB85C, p(H2, NONE)),
    (0xB85D, 0xB877, p(H3, NONE)),
    (0xB878, 0xB878, p(H2, NONE)),
    (0xB879, 0xB893, p(H3, NONE)),
    (0xB894, 0xB894, p(H2, NONE)),
    (0xB895, 0xB8AF, p(H3, NONE)),
    (0xB8B0, 0xB8B0, p(H2, NONE)),
    (0xB8B1, 0xB8CB, p(H3, NONE)),
    (0xB8CC, 0xB8CC, p(H2, NONE)),
    (0xB8CD, 0xB8E7, p(H3, NONE)),
    (0xB8E8, 0xB8E8, p(H2, NONE)),
    (0xB8E9, 0xB903, p(H3, NONE)),
    (0xB904, 0xB904, p(H2, NONE)),
    (0xB905, 0xB91F, p(H3, NONE)),
    (0xB920, 0xB920, p(H2, NONE)),
    (0xB921, 0xB93B, p(H3, NONE)),
    (0xB93C, 0xB93C, p(H2, NONE)),
    (0xB93D, 0xB957, p(H3, NONE)),
    (0xB958, 0xB958, p(H2, NONE)),
    (0xB959, 0xB973, p(H3, NONE)),
    (0xB974, 0xB974, p(H2, NONE)),
    (0xB975, 0xB98F, p(H3, NONE)),
    (0xB990, 0xB990, p(H2, NONE)),
    (0xB991, 0xB9AB, p(H3, NONE)),
    (0xB9AC, 0xB9AC, p(H2, NONE)),
    (0xB9AD, 0xB9C7, p(H3, NONE)),
    (0xB9C8, 0xB9C8, p(H2, NONE)),
    (0xB9C9, 0xB9E3, p(H3, NONE)),
    (0xB9E4, 0xB9E4, p(H2, NONE)),
    (0xB9E5, 0xB9FF, p(H3, NONE)),
    (0xBA00, 0xBA00, p(H2, NONE)),
    (0xBA01, 0xBA1B, p(H3, NONE)),
    (0xBA1C, 0xBA1C, p(H2, NONE)),
    (0xBA1D, 0xBA37, p(H3, NONE)),
    (0xBA38, 0xBA38, p(H2, NONE)),
    (0xBA39, 0xBA53, p(H3, NONE)),
    (0xBA54, 0xBA54, p(H2, NONE)),
    (0xBA55, 0xBA6F, p(H3, NONE)),
    (0xBA70, 0xBA70, p(H2, NONE)),
    (0xBA71, 0xBA8B, p(H3, NONE)),
    (0xBA8C, 0xBA8C, p(H2, NONE)),
    (0xBA8D, 0xBAA7, p(H3, NONE)),
    (0xBAA8, 0xBAA8, p(H2, NONE)),
    (0xBAA9, 0xBAC3, p(H3, NONE)),
    (0xBAC4, 0xBAC4, p(H2, NONE)),
    (0xBAC5, 0xBADF, p(H3, NONE)),
    (0xBAE0, 0xBAE0, p(H2, NONE)),
    (0xBAE1, 0xBAFB, p(H3, NONE)),
    (0xBAFC, 0xBAFC, p(H2, NONE)),
    (0xBAFD, 0xBB17, p(H3, NONE)),
    (0xBB18, 0xBB18, p(H2, NONE)),
    (0xBB19, 0xBB33, p(H3, NONE)),
    (0xBB34, 0xBB34, p(H2, NONE)),
    (0xBB35, 0xBB4F, p(H3, NONE)),
    (0xBB50, 0xBB50, p(H2, NONE)),
    (0xBB51, 0xBB6B, p(H3, NONE)),
    (0xBB6C, 0xBB6C, p(H2, NONE)),
    (0xBB6D, 0xBB87, p(H3, NONE)),
    (0xBB88, 0xBB88, p(H2, NONE)),
    (0xBB89, 0xBBA3, p(H3, NONE)),
    (0xBBA4, 0xBBA4, p(H2, NONE)),
    (0xBBA5, 0xBBBF, p(H3, NONE)),
    (0xBBC0, 0xBBC0, p(H2, NONE)),
    (0xBBC1, 0xBBDB, p(H3, NONE)),
    (0xBBDC, 0xBBDC, p(H2, NONE)),
    (0xBBDD, 0xBBF7, p(H3, NONE)),
    (0xBBF8, 0xBBF8, p(H2, NONE)),
    (0xBBF9, 0xBC13, p(H3, NONE)),
    (0xBC14, 0xBC14, p(H2, NONE)),
    (0xBC15, 0xBC2F, p(H3, NONE)),
    (0xBC30, 0xBC30, p(H2, NONE)),
    (0xBC31, 0xBC4B, p(H3, NONE)),
    (0xBC4C, 0xBC4C, p(H2, NONE)),
    (0xBC4D, 0xBC67, p(H3, NONE)),
    (0xBC68, 0xBC68, p(H2, NONE)),
    (0xBC69, 0xBC83, p(H3, NONE)),
    (0xBC84, 0xBC84, p(H2, NONE)),
    (0xBC85, 0xBC9F, p(H3, NONE)),
    (0xBCA0, 0xBCA0, p(H2, NONE)),
    (0xBCA1, 0xBCBB, p(H3, NONE)),
    (0xBCBC, 0xBCBC, p(H2, NONE)),
    (0xBCBD, 0xBCD7, p(H3, NONE)),
    (0xBCD8, 0xBCD8, p(H2, NONE)),
    (0xBCD9, 0xBCF3, p(H3, NONE)),
    (0xBCF4, 0xBCF4, p(H2, NONE)),
    (0xBCF5, 0xBD0F, p(H3, NONE)),
    (0xBD10, 0xBD10, p(H2, NONE)),
    (0xBD11, 0xBD2B, p(H3, NONE)),
    (0xBD2C, 0xBD2C, p(H2, NONE)),
    (0xBD2D, 0xBD47, p(H3, NONE)),
    (0xBD48, 0xBD48, p(H2, NONE)),
    (0xBD49, 0xBD63, p(H3, NONE)),
    (0xBD64, 0xBD64, p(H2, NONE)),
    (0xBD65, 0xBD7F, p(H3, NONE)),
    (0xBD80, 0xBD80, p(H2, NONE)),
    (0xBD81, 0xBD9B, p(H3, NONE)),
    (0xBD9C, 0xBD9C, p(H2, NONE)),
    (0xBD9D, 0xBDB7, p(H3, NONE)),
    (0xBDB8, 0xBDB8, p(H2, NONE)),
    (0xBDB9, 0xBDD3, p(H3, NONE)),
    (0xBDD4, 0xBDD4, p(H2, NONE)),
    (0xBDD5, 0xBDEF, p(H3, NONE)),
    (0xBDF0, 0xBDF0, p(H2, NONE)),
    (0xBDF1, 0xBE0B, p(H3, NONE)),
    (0xBE0C, 0xBE0C, p(H2, NONE)),
    (0xBE0D, 0xBE27, p(H3, NONE)),
    (0xBE28, 0xBE28, p(H2, NONE)),
    (0xBE29, 0xBE43, p(H3, NONE)),
    (0xBE44, 0xBE44, p(H2, NONE)),
    (0xBE45, 0xBE5F, p(H3, NONE)),
    (0xBE60, 0xBE60, p(H2, NONE)),
    (0xBE61, 0xBE7B, p(H3, NONE)),
    (0xBE7C, 0xBE7C, p(H2, NONE)),
    (0xBE7D, 0xBE97, p(H3, NONE)),
    (0xBE98, 0xBE98, p(H2, NONE)),
    (0xBE99, 0xBEB3, p(H3, NONE)),
    (0xBEB4, 0xBEB4, p(H2, NONE)),
    (0xBEB5, 0xBECF, p(H3, NONE)),
    (0xBED0, 0xBED0, p(H2, NONE)),
    (0xBED1, 0xBEEB, p(H3, NONE)),
    (0xBEEC, 0xBEEC, p(H2, NONE)),
    (0xBEED, 0xBF07, p(H3, NONE)),
    (0xBF08, 0xBF08, p(H2, NONE)),
    (0xBF09, 0xBF23, p(H3, NONE)),
    (0xBF24, 0xBF24, p(H2, NONE)),
    (0xBF25, 0xBF3F, p(H3, NONE)),
    (0xBF40, 0xBF40, p(H2, NONE)),
    (0xBF41, 0xBF5B, p(H3, NONE)),
    (0xBF5C, 0xBF5C, p(H2, NONE)),
    (0xBF5D, 0xBF77, p(H3, NONE)),
    (0xBF78, 0xBF78, p(H2, NONE)),
    (0xBF79, 0xBF93, p(H3, NONE)),
    (0xBF94, 0xBF94, p(H2, NONE)),
    (0xBF95, 0xBFAF, p(H3, NONE)),
    (0xBFB0, 0xBFB0, p(H2, NONE)),
    (0xBFB1, 0xBFCB, p(H3, NONE)),
    (0xBFCC, 0xBFCC, p(H2, NONE)),
    (0xBFCD, 0xBFE7, p(H3, NONE)),
    (0xBFE8, 0xBFE8, p(H2, NONE)),
    (0xBFE9, 0xC003, p(H3, NONE)),
    (0xC004, 0xC004, p(H2, NONE)),
    (0xC005, 0xC01F, p(H3, NONE)),
    (0xC020, 0xC020, p(H2, NONE)),
    (0xC021, 0xC03B, p(H3, NONE)),
    (0xC03C, 0xC03C, p(H2, NONE)),
    (0xC03D, 0xC057, p(H3, NONE)),
    (0xC058, 0xC058, p(H2, NONE)),
    (0xC059, 0xC073, p(H3, NONE)),
    (0xC074, 0xC074, p(H2, NONE)),
    (0xC075, 0xC08F, p(H3, NONE)),
    (0xC090, 0xC090, p(H2, NONE)),
    (0xC091, 0xC0AB, p(H3, NONE)),
    (0xC0AC, 0xC0AC, p(H2, NONE)),
    (0xC0AD, 0xC0C7, p(H3, NONE)),
    (0xC0C8, 0xC0C8, p(H2, NONE)),
    (0xC0C9, 0xC0E3, p(H3, NONE)),
    (0xC0E4, 0xC0E4, p(H2, NONE)),
    (0xC0E5, 0xC0FF, p(H3, NONE)),
    (0xC100, 0xC100, p(H2, NONE)),
    (0xC101, 0xC11B, p(H3, NONE)),
    (0xC11C, 0xC11C, p(H2, NONE)),
    (0xC11D, 0xC137, p(H3, NONE)),
    (0xC138, 0xC138, p(H2, NONE)),
    (0xC139, 0xC153, p(H3, NONE)),
    (0xC154, 0xC154, p(H2, NONE)),
    (0xC155, 0xC16F, p(H3, NONE)),
    (0xC170, 0xC170, p(H2, NONE)),
    (0xC171, 0xC18B, p(H3, NONE)),
    (0xC18C, 0xC18C, p(H2, NONE)),
    (0xC18D, 0xC1A7, p(H3, NONE)),
    (0xC1A8, 0xC1A8, p(H2, NONE)),
    (0xC1A9, 0xC1C3, p(H3, NONE)),
    (0xC1C4, 0xC1C4, p(H2, NONE)),
    (0xC1C5, 0xC1DF, p(H3, NONE)),
    (0xC1E0, 0xC1E0, p(H2, NONE)),
    (0xC1E1, 0xC1FB, p(H3, NONE)),
    (0xC1FC, 0xC1FC, p(H2, NONE)),
    (0xC1FD, 0xC217, p(H3, NONE)),
    (0xC218, 0xC218, p(H2, NONE)),
    (0xC219, 0xC233, p(H3, NONE)),
    (0xC234, 0xC234, p(H2, NONE)),
    (0xC235, 0xC24F, p(H3, NONE)),
    (0xC250, 0xC250, p(H2, NONE)),
    (0xC251, 0xC26B, p(H3, NONE)),
    (0xC26C, 0xC26C, p(H2, NONE)),
    (0xC26D, 0xC287, p(H3, NONE)),
    (0xC288, 0xC288, p(H2, NONE)),
    (0xC289, 0xC2A3, p(H3, NONE)),
    (0xC2A4, 0xC2A4, p(H2, NONE)),
    (0xC2A5, 0xC2BF, p(H3, NONE)),
    (0xC2C0, 0xC2C0, p(H2, NONE)),
    (0xC2C1, 0xC2DB, p(H3, NONE)),
    (0xC2DC, 0xC2DC, p(H2, NONE)),
    (0xC2DD, 0xC2F7, p(H3, NONE)),
    (0xC2F8, 0xC2F8, p(H2, NONE)),
    (0xC2F9, 0xC313, p(H3, NONE)),
    (0xC314, 0xC314, p(H2, NONE)),
    (0xC315, 0xC32F, p(H3, NONE)),
    (0xC330, 0xC330, p(H2, NONE)),
    (0xC331, 0xC34B, p(H3, NONE)),
    (0xC34C, 0xC34C, p(H2, NONE)),
    (0xC34D, 0xC367, p(H3, NONE)),
    (0xC368, 0xC368, p(H2, NONE)),
    (0xC369, 0xC383, p(H3, NONE)),
    (0xC384, 0xC384, p(H2, NONE)),
    (0xC385, 0xC39F, p(H3, NONE)),
    (0xC3A0, 0xC3A0, p(H2, NONE)),
    (0xC3A1, 0xC3BB, p(H3, NONE)),
    (0xC3BC, 0xC3BC, p(H2, NONE)),
    (0xC3BD, 0xC3D7, p(H3, NONE)),
    (0xC3D8, 0xC3D8, p(H2, NONE)),
    (0xC3D9, 0xC3F3, p(H3, NONE)),
    (0xC3F4, 0xC3F4, p(H2, NONE)),
    (0xC3F5, 0xC40F, p(H3, NONE)),
    (0xC410, 0xC410, p(H2, NONE)),
    (0xC411, 0xC42B, p(H3, NONE)),
    (0xC42C, 0xC42C, p(H2, NONE)),
    (0xC42D, 0xC447, p(H3, NONE)),
    (0xC448, 0xC448, p(H2, NONE)),
    (0xC449, 0xC463, p(H3, NONE)),
    (0xC464, 0xC464, p(H2, NONE)),
    (0xC465, 0xC47F, p(H3, NONE)),
    (0xC480, 0xC480, p(H2, NONE)),
    (0xC481, 0xC49B, p(H3, NONE)),
    (0xC49C, 0xC49C, p(H2, NONE)),
    (0xC49D, 0xC4B7, p(H3, NONE)),
    (0xC4B8, 0xC4B8, p(H2, NONE)),
    (0xC4B9, 0xC4D3, p(H3, NONE)),
    (0xC4D4, 0xC4D4, p(H2, NONE)),
    (0xC4D5, 0xC4EF, p(H3, NONE)),
    (0xC4F0, 0xC4F0, p(H2, NONE)),
    (0xC4F1, 0xC50B, p(H3, NONE)),
    (0xC50C, 0xC50C, p(H2, NONE)),
    (0xC50D, 0xC527, p(H3, NONE)),
    (0xC528, 0xC528, p(H2, NONE)),
    (0xC529, 0xC543, p(H3, NONE)),
    (0xC544, 0xC544, p(H2, NONE)),
    (0xC545, 0xC55F, p(H3, NONE)),
    (0xC560, 0xC560, p(H2, NONE)),
    (0xC561, 0xC57B, p(H3, NONE)),
    (0xC57C, 0xC57C, p(H2, NONE)),
    (0xC57D, 0xC597, p(H3, NONE)),
    (0xC598, 0xC598, p(H2, NONE)),
    (0xC599, 0xC5B3, p(H3, NONE)),
    (0xC5B4, 0xC5B4, p(H2, NONE)),
    (0xC5B5, 0xC5CF, p(H3, NONE)),
    (0xC5D0, 0xC5D0, p(H2, NONE)),
    (0xC5D1, 0xC5EB, p(H3, NONE)),
    (0xC5EC, 0xC5EC, p(H2, NONE)),
    (0xC5ED, 0xC607, p(H3, NONE)),
    (0xC608, 0xC608, p(H2, NONE)),
    (0xC609, 0xC623, p(H3, NONE)),
    (0xC624, 0xC624, p(H2, NONE)),
    (0xC625, 0xC63F, p(H3, NONE)),
    (0xC640, 0xC640, p(H2, NONE)),
    (0xC641, 0xC65B, p(H3, NONE)),
    (0xC65C, 0xC65C, p(H2, NONE)),
    (0xC65D, 0xC677, p(H3, NONE)),
    (0xC678, 0xC678, p(H2, NONE)),
    (0xC679, 0xC693, p(H3, NONE)),
    (0xC694, 0xC694, p(H2, NONE)),
    (0xC695, 0xC6AF, p(H3, NONE)),
    (0xC6B0, 0xC6B0, p(H2, NONE)),
    (0xC6B1, 0xC6CB, p(H3, NONE)),
    (0xC6CC, 0xC6CC, p(H2, NONE)),
    (0xC6CD, 0xC6E7, p(H3, NONE)),
    (0xC6E8, 0xC6E8, p(H2, NONE)),
    (0xC6E9, 0xC703, p(H3, NONE)),
    (0xC704, 0xC704, p(H2, NONE)),
    (0xC705, 0xC71F, p(H3, NONE)),
    (0xC720, 0xC720, p(H2, NONE)),
    (0xC721, 0xC73B, p(H3, NONE)),
    (0xC73C, 0xC73C, p(H2, NONE)),
    (0xC73D, 0xC757, p(H3, NONE)),
    (0xC758, 0xC758, p(H2, NONE)),
    (0xC759, 0xC773, p(H3, NONE)),
    (0xC774, 0xC774, p(H2, NONE)),
    (0xC775, 0xC78F, p(H3, NONE)),
    (0xC790, 0xC790, p(H2, NONE)),
    (0xC791, 0xC7AB, p(H3, NONE)),
    (0xC7AC, 0xC7AC, p(H2, NONE)),
    (0xC7AD, 0xC7C7, p(H3, NONE)),
    (0xC7C8, 0xC7C8, p(H2, NONE)),
    (0xC7C9, 0xC7E3, p(H3, NONE)),
    (0xC7E4, 0xC7E4, p(H2, NONE)),
    (0xC7E5, 0xC7FF, p(H3, NONE)),
    (0xC800, 0xC800, p(H2, NONE)),
    (0xC801, 0xC81B, p(H3, NONE)),
    (0xC81C, 0xC81C, p(H2, NONE)),
    (0xC81D, 0xC837, p(H3, NONE)),
    (0xC838, 0xC838, p(H2, NONE)),
    (0xC839, 0xC853, p(H3, NONE)),
    (0xC854, 0xC854, p(H2, NONE)),
    (0xC855, 0xC86F, p(H3, NONE)),
    (0xC870, 0xC870, p(H2, NONE)),
    (0xC871, 0xC88B, p(H3, NONE)),
    (0xC88C, 0xC88C, p(H2, NONE)),
    (0xC88D, 0xC8A7, p(H3, NONE)),
    (0xC8A8, 0xC8A8, p(H2, NONE)),
    (0xC8A9, 0xC8C3, p(H3, NONE)),
    (0xC8C4, 0xC8C4, p(H2, NONE)),
    (0xC8C5, 0xC8DF, p(H3, NONE)),
    (0xC8E0, 0xC8E0, p(H2, NONE)),
    (0xC8E1, 0xC8FB, p(H3, NONE)),
    (0xC8FC, 0xC8FC, p(H2, NONE)),
    (0xC8FD, 0xC917, p(H3, NONE)),
    (0xC918, 0xC918, p(H2, NONE)),
    (0xC919, 0xC933, p(H3, NONE)),
    (0xC934, 0xC934, p(H2, NONE)),
    (0xC935, 0xC94F, p(H3, NONE)),
    (0xC950, 0xC950, p(H2, NONE)),
    (0xC951, 0xC96B, p(H3, NONE)),
    (0xC96C, 0xC96C, p(H2, NONE)),
    (0xC96D, 0xC987, p(H3, NONE)),
    (0xC988, 0xC988, p(H2, NONE)),
    (0xC989, 0xC9A3, p(H3, NONE)),
    (0xC9A4, 0xC9A4, p(H2, NONE)),
    (0xC9A5, 0xC9BF, p(H3, NONE)),
    (0xC9C0, 0xC9C0, p(H2, NONE)),
    (0xC9C1, 0xC9DB, p(H3, NONE)),
    (0xC9DC, 0xC9DC, p(H2, NONE)),
    (0xC9DD, 0xC9F7, p(H3, NONE)),
    (0xC9F8, 0xC9F8, p(H2, NONE)),
    (0xC9F9, 0xCA13, p(H3, NONE)),
    (0xCA14, 0xCA14, p(H2, NONE)),
    (0xCA15, 0xCA2F, p(H3, NONE)),
    (0xCA30, 0xCA30, p(H2, NONE)),
    (0xCA31, 0xCA4B, p(H3, NONE)),
    (0xCA4C, 0xCA4C, p(H2, NONE)),
    (0xCA4D, 0xCA67, p(H3, NONE)),
    (0xCA68, 0xCA68, p(H2, NONE)),
    (0xCA69, 0xCA83, p(H3, NONE)),
    (0xCA84, 0xCA84, p(H2, NONE)),
    (0xCA85, 0xCA9F, p(H3, NONE)),
    (0xCAA0, 0xCAA0, p(H2, NONE)),
    (0xCAA1, 0xCABB, p(H3, NONE)),
    (0xCABC, 0xCABC, p(H2, NONE)),
    (0xCABD, 0xCAD7, p(H3, NONE)),
    (0xCAD8, 0xCAD8, p(H2, NONE)),
    (0xCAD9, 0xCAF3, p(H3, NONE)),
    (0xCAF4, 0xCAF4, p(H2, NONE)),
    (0xCAF5, 0xCB0F, p(H3, NONE)),
    (0xCB10, 0xCB10, p(H2, NONE)),
    (0xCB11, 0xCB2B, p(H3, NONE)),
    (0xCB2C, 0xCB2C, p(H2, NONE)),
    (0xCB2D, 0xCB47, p(H3, NONE)),
    (0xCB48, 0xCB48, p(H2, NONE)),
    (0xCB49, 0xCB63, p(H3, NONE)),
    (0xCB64, 0xCB64, p(H2, NONE)),
    (0xCB65, 0xCB7F, p(H3, NONE)),
    (0xCB80, 0xCB80, p(H2, NONE)),
    (0xCB81, 0xCB9B, p(H3, NONE)),
    (0xCB9C, 0xCB9C, p(H2, NONE)),
    (0xCB9D, 0xCBB7, p(H3, NONE)),
    (0xCBB8, 0xCBB8, p(H2, NONE)),
    (0xCBB9, 0xCBD3, p(H3, NONE)),
    (0xCBD4, 0xCBD4, p(H2, NONE)),
    (0xCBD5, 0xCBEF, p(H3, NONE)),
    (0xCBF0, 0xCBF0, p(H2, NONE)),
    (0xCBF1, 0xCC0B, p(H3, NONE)),
    (0xCC0C, 0xCC0C, p(H2, NONE)),
    (0xCC0D, 0xCC27, p(H3, NONE)),
    (0xCC28, 0xCC28, p(H2, NONE)),
    (0xCC29, 0xCC43, p(H3, NONE)),
    (0xCC44, 0xCC44, p(H2, NONE)),
    (0xCC45, 0xCC5F, p(H3, NONE)),
    (0xCC60, 0xCC60, p(H2, NONE)),
    (0xCC61, 0xCC7B, p(H3, NONE)),
    (0xCC7C, 0xCC7C, p(H2, NONE)),
    (0xCC7D, 0xCC97, p(H3, NONE)),
    (0xCC98, 0xCC98, p(H2, NONE)),
    (0xCC99, 0xCCB3, p(H3, NONE)),
    (0xCCB4, 0xCCB4, p(H2, NONE)),
    (0xCCB5, 0xCCCF, p(H3, NONE)),
    (0xCCD0, 0xCCD0, p(H2, NONE)),
    (0xCCD1, 0xCCEB, p(H3, NONE)),
    (0xCCEC, 0xCCEC, p(H2, NONE)),
    (0xCCED, 0xCD07, p(H3, NONE)),
    (0xCD08, 0xCD08, p(H2, NONE)),
    (0xCD09, 0xCD23, p(H3, NONE)),
    (0xCD24, 0xCD24, p(H2, NONE)),
    (0xCD25, 0xCD3F, p(H3, NONE)),
    (0xCD40, 0xCD40, p(H2, NONE)),
    (0xCD41, 0xCD5B, p(H3, NONE)),
    (0xCD5C, 0xCD5C, p(H2, NONE)),
    (0xCD5D, 0xCD77, p(H3, NONE)),
    (0xCD78, 0xCD78, p(H2, NONE)),
    (0xCD79, 0xCD93, p(H3, NONE)),
    (0xCD94, 0xCD94, p(H2, NONE)),
    (0xCD95, 0xCDAF, p(H3, NONE)),
    (0xCDB0, 0xCDB0, p(H2, NONE)),
    (0xCDB1, 0xCDCB, p(H3, NONE)),
    (0xCDCC, 0xCDCC, p(H2, NONE)),
    (0xCDCD, 0xCDE7, p(H3, NONE)),
    (0xCDE8, 0xCDE8, p(H2, NONE)),
    (0xCDE9, 0xCE03, p(H3, NONE)),
    (0xCE04, 0xCE04, p(H2, NONE)),
    (0xCE05, 0xCE1F, p(H3, NONE)),
    (0xCE20, 0xCE20, p(H2, NONE)),
    (0xCE21, 0xCE3B, p(H3, NONE)),
    (0xCE3C, 0xCE3C, p(H2, NONE)),
    (0xCE3D, 0xCE57, p(H3, NONE)),
    (0xCE58, 0xCE58, p(H2, NONE)),
    (0xCE59, 0xCE73, p(H3, NONE)),
    (0xCE74, 0xCE74, p(H2, NONE)),
    (0xCE75, 0xCE8F, p(H3, NONE)),
    (0xCE90, 0xCE90, p(H2, NONE)),
    (0xCE91, 0xCEAB, p(H3, NONE)),
    (0xCEAC, 0xCEAC, p(H2, NONE)),
    (0xCEAD, 0xCEC7, p(H3, NONE)),
    (0xCEC8, 0xCEC8, p(H2, NONE)),
    (0xCEC9, 0xCEE3, p(H3, NONE)),
    (0xCEE4, 0xCEE4, p(H2, NONE)),
    (0xCEE5, 0xCEFF, p(H3, NONE)),
    (0xCF00, 0xCF00, p(H2, NONE)),
    (0xCF01, 0xCF1B, p(H3, NONE)),
    (0xCF1C, 0xCF1C, p(H2, NONE)),
    (0xCF1D, 0xCF37, p(H3, NONE)),
    (0xCF38, 0xCF38, p(H2, NONE)),
    (0xCF39, 0xCF53, p(H3, NONE)),
    (0xCF54, 0xCF54, p(H2, NONE)),
    (0xCF55, 0xCF6F, p(H3, NONE)),
    (0xCF70, 0xCF70, p(H2, NONE)),
    (0xCF71, 0xCF8B, p(H3, NONE)),
    (0xCF8C, 0xCF8C, p(H2, NONE)),
    (0xCF8D, 0xCFA7, p(H3, NONE)),
    (0xCFA8, 0xCFA8, p(H2, NONE)),
    (0xCFA9, 0xCFC3, p(H3, NONE)),
    (0xCFC4, 0xCFC4, p(H2, NONE)),
    (0xCFC5, 0xCFDF, p(H3, NONE)),
    (0xCFE0, 0xCFE0, p(H2, NONE)),
    (0xCFE1, 0xCFFB, p(H3, NONE)),
    (0xCFFC, 0xCFFC, p(H2, NONE)),
    (0xCFFD, 0xD017, p(H3, NONE)),
    (0xD018, 0xD018, p(H2, NONE)),
    (0xD019, 0xD033, p(H3, NONE)),
    (0xD034, 0xD034, p(H2, NONE)),
    (0xD035, 0xD04F, p(H3, NONE)),
    (0xD050, 0xD050, p(H2, NONE)),
    (0xD051, 0xD06B, p(H3, NONE)),
    (0xD06C, 0xD06C, p(H2, NONE)),
    (0xD06D, 0xD087, p(H3, NONE)),
    (0xD088, 0xD088, p(H2, NONE)),
    (0xD089, 0xD0A3, p(H3, NONE)),
    (0xD0A4, 0xD0A4, p(H2, NONE)),
    (0xD0A5, 0xD0BF, p(H3, NONE)),
    (0xD0C0, 0xD0C0, p(H2, NONE)),
    (0xD0C1, 0xD0DB, p(H3, NONE)),
    (0xD0DC, 0xD0DC, p(H2, NONE)),
    (0xD0DD, 0xD0F7, p(H3, NONE)),
    (0xD0F8, 0xD0F8, p(H2, NONE)),
    (0xD0F9, 0xD113, p(H3, NONE)),
    (0xD114, 0xD114, p(H2, NONE)),
    (0xD115, 0xD12F, p(H3, NONE)),
    (0xD130, 0xD130, p(H2, NONE)),
    (0xD131, 0xD14B, p(H3, NONE)),
    (0xD14C, 0xD14C, p(H2, NONE)),
    (0xD14D, 0xD167, p(H3, NONE)),
    (0xD168, 0xD168, p(H2, NONE)),
    (0xD169, 0xD183, p(H3, NONE)),
    (0xD184, 0xD184, p(H2, NONE)),
    (0xD185, 0xD19F, p(H3, NONE)),
    (0xD1A0, 0xD1A0, p(H2, NONE)),
    (0xD1A1, 0xD1BB, p(H3, NONE)),
    (0xD1BC, 0xD1BC, p(H2, NONE)),
    (0xD1BD, 0xD1D7, p(H3, NONE)),
    (0xD1D8, 0xD1D8, p(H2, NONE)),
    (0xD1D9, 0xD1F3, p(H3, NONE)),
    (0xD1F4, 0xD1F4, p(H2, NONE)),
    (0xD1F5, 0xD20F, p(H3, NONE)),
    (0xD210, 0xD210, p(H2, NONE)),
    (0xD211, 0xD22B, p(H3, NONE)),
    (0xD22C, 0xD22C, p(H2, NONE)),
    (0xD22D, 0xD247, p(H3, NONE)),
    (0xD248, 0xD248, p(H2, NONE)),
    (0xD249, 0xD263, p(H3, NONE)),
    (0xD264, 0xD264, p(H2, NONE)),
    (0xD265, 0xD27F, p(H3, NONE)),
    (0xD280, 0xD280, p(H2, NONE)),
    (0xD281, 0xD29B, p(H3, NONE)),
    (0xD29C, 0xD29C, p(H2, NONE)),
    (0xD29D, 0xD2B7, p(H3, NONE)),
    (0xD2B8, 0xD2B8, p(H2, NONE)),
    (0xD2B9, 0xD2D3, p(H3, NONE)),
    (0xD2D4, 0xD2D4, p(H2, NONE)),
    (0xD2D5, 0xD2EF, p(H3, NONE)),
    (0xD2F0, 0xD2F0, p(H2, NONE)),
    (0xD2F1, 0xD30B, p(H3, NONE)),
    (0xD30C, 0xD30C, p(H2, NONE)),
    (0xD30D, 0xD327, p(H3, NONE)),
    (0xD328, 0xD328, p(H2, NONE)),
    (0xD329, 0xD343, p(H3, NONE)),
    (0xD344, 0xD344, p(H2, NONE)),
    (0xD345, 0xD35F, p(H3, NONE)),
    (0xD360, 0xD360, p(H2, NONE)),
    (0xD361, 0xD37B, p(H3, NONE)),
    (0xD37C, 0xD37C, p(H2, NONE)),
    (0xD37D, 0xD397, p(H3, NONE)),
    (0xD398, 0xD398, p(H2, NONE)),
    (0xD399, 0xD3B3, p(H3, NONE)),
    (0xD3B4, 0xD3B4, p(H2, NONE)),
    (0xD3B5, 0xD3CF, p(H3, NONE)),
    (0xD3D0, 0xD3D0, p(H2, NONE)),
    (0xD3D1, 0xD3EB, p(H3, NONE)),
    (0xD3EC, 0xD3EC, p(H2, NONE)),
    (0xD3ED, 0xD407, p(H3, NONE)),
    (0xD408, 0xD408, p(H2, NONE)),
    (0xD409, 0xD423, p(H3, NONE)),
    (0xD424, 0xD424, p(H2, NONE)),
    (0xD425, 0xD43F, p(H3, NONE)),
    (0xD440, 0xD440, p(H2, NONE)),
    (0xD441, 0xD45B, p(H3, NONE)),
    (0xD45C, 0xD45C, p(H2, NONE)),
    (0xD45D, 0xD477, p(H3, NONE)),
    (0xD478, 0xD478, p(H2, NONE)),
    (0xD479, 0xD493, p(H3, NONE)),
    (0xD494, 0xD494, p(H2, NONE)),
    (0xD495, 0xD4AF, p(H3, NONE)),
    (0xD4B0, 0xD4B0, p(H2, NONE)),
    (0xD4B1, 0xD4CB, p(H3, NONE)),
    (0xD4CC, 0xD4CC, p(H2, NONE)),
    (0xD4CD, 0xD4E7, p(H3, NONE)),
    (0xD4E8, 0xD4E8, p(H2, NONE)),
    (0xD4E9, 0xD503, p(H3, NONE)),
    (0xD504, 0xD504, p(H2, NONE)),
    (0xD505, 0xD51F, p(H3, NONE)),
    (0xD520, 0xD520, p(H2, NONE)),
    (0xD521, 0xD53B, p(H3, NONE)),
    (0xD53C, 0xD53C, p(H2, NONE)),
    (0xD53D, 0xD557, p(H3, NONE)),
    (0xD558, 0xD558, p(H2, NONE)),
    (0xD559, 0xD573, p(H3, NONE)),
    (0xD574, 0xD574, p(H2, NONE)),
    (0xD575, 0xD58F, p(H3, NONE)),
    (0xD590, 0xD590, p(H2, NONE)),
    (0xD591, 0xD5AB, p(H3, NONE)),
    (0xD5AC, 0xD5AC, p(H2, NONE)),
    (0xD5AD, 0xD5C7, p(H3, NONE)),
    (0xD5C8, 0xD5C8, p(H2, NONE)),
    (0xD5C9, 0xD5E3, p(H3, NONE)),
    (0xD5E4, 0xD5E4, p(H2, NONE)),
    (0xD5E5, 0xD5FF, p(H3, NONE)),
    (0xD600, 0xD600, p(H2, NONE)),
    (0xD601, 0xD61B, p(H3, NONE)),
    (0xD61C, 0xD61C, p(H2, NONE)),
    (0xD61D, 0xD637, p(H3, NONE)),
    (0xD638, 0xD638, p(H2, NONE)),
    (0xD639, 0xD653, p(H3, NONE)),
    (0xD654, 0xD654, p(H2, NONE)),
    (0xD655, 0xD66F, p(H3, NONE)),
    (0xD670, 0xD670, p(H2, NONE)),
    (0xD671, 0xD68B, p(H3, NONE)),
    (0xD68C, 0xD68C, p(H2, NONE)),
    (0xD68D, 0xD6A7, p(H3, NONE)),
    (0xD6A8, 0xD6A8, p(H2, NONE)),
    (0xD6A9, 0xD6C3, p(H3, NONE)),
    (0xD6C4, 0xD6C4, p(H2, NONE)),
    (0xD6C5, 0xD6DF, p(H3, NONE)),
    (0xD6E0, 0xD6E0, p(H2, NONE)),
    (0xD6E1, 0xD6FB, p(H3, NONE)),
    (0xD6FC, 0xD6FC, p(H2, NONE)),
    (0xD6FD, 0xD717, p(H3, NONE)),
    (0xD718, 0xD718, p(H2, NONE)),
    (0xD719, 0xD733, p(H3, NONE)),
    (0xD734, 0xD734, p(H2, NONE)),
    (0xD735, 0xD74F, p(H3, NONE)),
    (0xD750, 0xD750, p(H2, NONE)),
    (0xD751, 0xD76B, p(H3, NONE)),
    (0xD76C, 0xD76C, p(H2, NONE)),
    (0xD76D, 0xD787, p(H3, NONE)),
    (0xD788, 0xD788, p(H2, NONE)),
    (0xD789, 0xD7A3, p(H3, NONE)),
    (0xD7B0, 0xD7C6, p(JV, NONE)),
    (0xD7CB, 0xD7FB, p(JT, NONE)),
    (0xF900, 0xFAFF, p(ID, NONE)),
    (0xFB1D, 0xFB1D, p(HL, NONE)),
    (0xFB1E, 0xFB1E, p(CM, NONE)),
    (0xFB1F, 0xFB28, p(HL, NONE)),
    (0xFB2A, 0xFB36, p(HL, NONE)),
    (0xFB38, 0xFB3C, p(HL, NONE)),
    (0xFB3E, 0xFB3E, p(HL, NONE)),
    (0xFB40, 0xFB41, p(HL, NONE)),
    (0xFB43, 0xFB44, p(HL, NONE)),
    (0xFB46, 0xFB4F, p(HL, NONE)),
    (0xFD3E, 0xFD3E, p(CL, NONE)),
    (0xFD3F, 0xFD3F, p(OP, NONE)),
    (0xFDFC, 0xFDFC, p(PO, NONE)),
    (0xFE00, 0xFE0F, p(CM, NONE)),
    (0xFE10, 0xFE12, p(CL, NONE)),
    (0xFE13, 0xFE14, p(NS, NONE)),
    (0xFE15, 0xFE16, p(EX, NONE)),
    (0xFE17, 0xFE17, p(OP, WIDE)),
    (0xFE18, 0xFE18, p(CL, NONE)),
    (0xFE19, 0xFE19, p(IN, NONE)),
    (0xFE20, 0xFE20, p(GL, NONE)),
    (0xFE21, 0xFE21, p(CM, NONE)),
    (0xFE22, 0xFE22, p(GL, NONE)),
    (0xFE23, 0xFE23, p(CM, NONE)),
    (0xFE24, 0xFE24, p(GL, NONE)),
    (0xFE25, 0xFE25, p(CM, NONE)),
    (0xFE26, 0xFE27, p(GL, NONE)),
    (0xFE28, 0xFE28, p(CM, NONE)),
    (0xFE29, 0xFE29, p(GL, NONE)),
    (0xFE2A, 0xFE2A, p(CM, NONE)),
    (0xFE2B, 0xFE2B, p(GL, NONE)),
    (0xFE2C, 0xFE2C, p(CM, NONE)),
    (0xFE2D, 0xFE2E, p(GL, NONE)),
    (0xFE2F, 0xFE2F, p(CM, NONE)),
    (0xFE30, 0xFE34, p(ID, NONE)),
    (0xFE35, 0xFE35, p(OP, WIDE)),
    (0xFE36, 0xFE36, p(CL, NONE)),
    (0xFE37, 0xFE37, p(OP, WIDE)),
    (0xFE38, 0xFE38, p(CL, NONE)),
    (0xFE39, 0xFE39, p(OP, WIDE)),
    (0xFE3A, 0xFE3A, p(CL, NONE)),
    (0xFE3B, 0xFE3B, p(OP, WIDE)),
    (0xFE3C, 0xFE3C, p(CL, NONE)),
    (0xFE3D, 0xFE3D, p(OP, WIDE)),
    (0xFE3E, 0xFE3E, p(CL, NONE)),
    (0xFE3F, 0xFE3F, p(OP, WIDE)),
    (0xFE40, 0xFE40, p(CL, NONE)),
    (0xFE41, 0xFE41, p(OP, WIDE)),
    (0xFE42, 0xFE42, p(CL, NONE)),
    (0xFE43, 0xFE43, p(OP, WIDE)),
    (0xFE44, 0xFE44, p(CL, NONE)),
    (0xFE45, 0xFE46, p(ID, NONE)),
    (0xFE47, 0xFE47, p(OP, WIDE)),
    (0xFE48, 0xFE48, p(CL, NONE)),
    (0xFE49, 0xFE4F, p(ID, NONE)),
    (0xFE50, 0xFE50, p(CL, NONE)),
    (0xFE51, 0xFE51, p(ID, NONE)),
    (0xFE52, 0xFE52, p(CL, NONE)),
    (0xFE54, 0xFE55, p(NS, NONE)),
    (0xFE56, 0xFE57, p(EX, NONE)),
    (0xFE58, 0xFE58, p(ID, NONE)),
    (0xFE59, 0xFE59, p(OP, WIDE)),
    (0xFE5A, 0xFE5A, p(CL, NONE)),
    (0xFE5B, 0xFE5B, p(OP, WIDE)),
    (0xFE5C, 0xFE5C, p(CL, NONE)),
    (0xFE5D, 0xFE5D, p(OP, WIDE)),
    (0xFE5E, 0xFE5E, p(CL, NONE)),
    (0xFE5F, 0xFE66, p(ID, NONE)),
    (0xFE68, 0xFE68, p(ID, NONE)),
    (0xFE69, 0xFE69, p(PR, NONE)),
    (0xFE6A, 0xFE6A, p(PO, NONE)),
    (0xFE6B, 0xFE6B, p(ID, NONE)),
    (0xFEFF, 0xFEFF, p(WJ, NONE)),
    (0xFF01, 0xFF01, p(EX, NONE)),
    (0xFF02, 0xFF03, p(ID, NONE)),
    (0xFF04, 0xFF04, p(PR, NONE)),
    (0xFF05, 0xFF05, p(PO, NONE)),
    (0xFF06, 0xFF07, p(ID, NONE)),
    (0xFF08, 0xFF08, p(OP, WIDE)),
    (0xFF09, 0xFF09, p(CL, NONE)),
    (0xFF0A, 0xFF0B, p(ID, NONE)),
    (0xFF0C, 0xFF0C, p(CL, NONE)),
    (0xFF0D, 0xFF0D, p(ID, NONE)),
    (0xFF0E, 0xFF0E, p(CL, NONE)),
    (0xFF0F, 0xFF19, p(ID, NONE)),
    (0xFF1A, 0xFF1B, p(NS, NONE)),
    (0xFF1C, 0xFF1E, p(ID, NONE)),
    (0xFF1F, 0xFF1F, p(EX, NONE)),
    (0xFF20, 0xFF3A, p(ID, NONE)),
    (0xFF3B, 0xFF3B, p(OP, WIDE)),
    (0xFF3C, 0xFF3C, p(ID, NONE)),
    (0xFF3D, 0xFF3D, p(CL, NONE)),
    (0xFF3E, 0xFF5A, p(ID, NONE)),
    (0xFF5B, 0xFF5B, p(OP, WIDE)),
    (0xFF5C, 0xFF5C, p(ID, NONE)),
    (0xFF5D, 0xFF5D, p(CL, NONE)),
    (0xFF5E, 0xFF5E, p(ID, NONE)),
    (0xFF5F, 0xFF5F, p(OP, WIDE)),
    (0xFF60, 0xFF61, p(CL, NONE)),
    (0xFF62, 0xFF62, p(OP, WIDE)),
    (0xFF63, 0xFF64, p(CL, NONE)),
    (0xFF65, 0xFF65, p(NS, NONE)),
    (0xFF66, 0xFF66, p(ID, NONE)),
    (0xFF67, 0xFF70, p(NS, NONE)),
    (0xFF71, 0xFF9D, p(ID, NONE)),
    (0xFF9E, 0xFF9F, p(NS, NONE)),
    (0xFFA0, 0xFFBE, p(ID, NONE)),
    (0xFFC2, 0xFFC7, p(ID, NONE)),
    (0xFFCA, 0xFFCF, p(ID, NONE)),
    (0xFFD2, 0xFFD7, p(ID, NONE)),
    (0xFFDA, 0xFFDC, p(ID, NONE)),
    (0xFFE0, 0xFFE0, p(PO, NONE)),
    (0xFFE1, 0xFFE1, p(PR, NONE)),
    (0xFFE2, 0xFFE4, p(ID, NONE)),
    (0xFFE5, 0xFFE6, p(PR, NONE)),
    (0xFFF9, 0xFFFB, p(CM, NONE)),
    (0xFFFC, 0xFFFC, p(CB, NONE)),
    (0x10100, 0x10102, p(BA, NONE)),
    (0x101FD, 0x101FD, p(CM, NONE)),
    (0x102E0, 0x102E0, p(CM, NONE)),
    (0x10376, 0x1037A, p(CM, NONE)),
    (0x1039F, 0x1039F, p(BA, NONE)),
    (0x103D0, 0x103D0, p(BA, NONE)),
    (0x104A0, 0x104A9, p(NU, NONE)),
    (0x10857, 0x10857, p(BA, NONE)),
    (0x1091F, 0x1091F, p(BA, NONE)),
    (0x10A01, 0x10A03, p(CM, NONE)),
    (0x10A05, 0x10A06, p(CM, NONE)),
    (0x10A0C, 0x10A0F, p(CM, NONE)),
    (0x10A38, 0x10A3A, p(CM, NONE)),
    (0x10A3F, 0x10A3F, p(CM, NONE)),
    (0x10A50, 0x10A57, p(BA, NONE)),
    (0x10AE5, 0x10AE6, p(CM, NONE)),
    (0x10AF0, 0x10AF5, p(BA, NONE)),
    (0x10AF6, 0x10AF6, p(IN, NONE)),
    (0x10B39, 0x10B3F, p(BA, NONE)),
    (0x10D24, 0x10D27, p(CM, NONE)),
    (0x10D30, 0x10D39, p(NU, NONE)),
    (0x10D40, 0x10D49, p(NU, NONE)),
    (0x10D69, 0x10D6D, p(CM, NONE)),
    (0x10D6E, 0x10D6E, p(BA, NONE)),
    (0x10EAB, 0x10EAC, p(CM, NONE)),
    (0x10EAD, 0x10EAD, p(BA, NONE)),
    (0x10ED0, 0x10ED0, p(BA, NONE)),
    (0x10EFA, 0x10EFF, p(CM, NONE)),
    (0x10F46, 0x10F50, p(CM, NONE)),
    (0x10F82, 0x10F85, p(CM, NONE)),
    (0x11000, 0x11002, p(CM, NONE)),
    (0x11038, 0x11046, p(CM, NONE)),
    (0x11047, 0x11048, p(BA, NONE)),
    (0x11049, 0x1104D, p(ID, NONE)),
    (0x11052, 0x11065, p(ID, NONE)),
    (0x11070, 0x11070, p(CM, NONE)),
    (0x11073, 0x11074, p(CM, NONE)),
    (0x1107F, 0x1107F, p(GL, NONE)),
    (0x11080, 0x11082, p(CM, NONE)),
    (0x110B0, 0x110BA, p(CM, NONE)),
    (0x110BD, 0x110BD, p(NU, NONE)),
    (0x110BE, 0x110C1, p(BA, NONE)),
    (0x110C2, 0x110C2, p(CM, NONE)),
    (0x110CD, 0x110CD, p(NU, NONE)),
    (0x110F0, 0x110F9, p(NU, NONE)),
    (0x11100, 0x11102, p(CM, NONE)),
    (0x11127, 0x11134, p(CM, NONE)),
    (0x11136, 0x1113F, p(NU, NONE)),
    (0x11140, 0x11143, p(BA, NONE)),
    (0x11145, 0x11146, p(CM, NONE)),
    (0x11173, 0x11173, p(CM, NONE)),
    (0x11175, 0x11175, p(BB, NONE)),
    (0x11180, 0x11182, p(CM, NONE)),
    (0x111B3, 0x111C0, p(CM, NONE)),
    (0x111C5, 0x111C6, p(BA, NONE)),
    (0x111C8, 0x111C8, p(BA, NONE)),
    (0x111C9, 0x111CC, p(CM, NONE)),
    (0x111CE, 0x111CF, p(CM, NONE)),
    (0x111D0, 0x111D9, p(NU, NONE)),
    (0x111DB, 0x111DB, p(BB, NONE)),
    (0x111DD, 0x111DF, p(BA, NONE)),
    (0x1122C, 0x11237, p(CM, NONE)),
    (0x11238, 0x11239, p(BA, NONE)),
    (0x1123B, 0x1123C, p(BA, NONE)),
    (0x1123E, 0x1123E, p(CM, NONE)),
    (0x11241, 0x11241, p(CM, NONE)),
    (0x112A9, 0x112A9, p(BA, NONE)),
    (0x112DF, 0x112EA, p(CM, NONE)),
    (0x112F0, 0x112F9, p(NU, NONE)),
    (0x11300, 0x11303, p(CM, NONE)),
    (0x1133B, 0x1133C, p(CM, NONE)),
    (0x1133D, 0x1133D, p(BA, NONE)),
    (0x1133E, 0x11344, p(CM, NONE)),
    (0x11347, 0x11348, p(CM, NONE)),
    (0x1134B, 0x1134D, p(CM, NONE)),
    (0x11357, 0x11357, p(CM, NONE)),
    (0x1135D, 0x1135D, p(BA, NONE)),
    (0x11362, 0x11363, p(CM, NONE)),
    (0x11366, 0x1136C, p(CM, NONE)),
    (0x11370, 0x11374, p(CM, NONE)),
    (0x113B7, 0x113B7, p(ID, NONE)),
    (0x113B8, 0x113C0, p(CM, NONE)),
    (0x113C2, 0x113C2, p(CM, NONE)),
    (0x113C5, 0x113C5, p(CM, NONE)),
    (0x113C7, 0x113CA, p(CM, NONE)),
    (0x113CC, 0x113D0, p(CM, NONE)),
    (0x113D2, 0x113D2, p(CM, NONE)),
    (0x113D3, 0x113D5, p(ID, NONE)),
    (0x113D7, 0x113D8, p(ID, NONE)),
    (0x113E1, 0x113E2, p(CM, NONE)),
    (0x11435, 0x11446, p(CM, NONE)),
    (0x1144B, 0x1144E, p(BA, NONE)),
    (0x11450, 0x11459, p(NU, NONE)),
    (0x1145A, 0x1145B, p(BA, NONE)),
    (0x1145E, 0x1145E, p(CM, NONE)),
    (0x114B0, 0x114C3, p(CM, NONE)),
    (0x114D0, 0x114D9, p(NU, NONE)),
    (0x115AF, 0x115B5, p(CM, NONE)),
    (0x115B8, 0x115C0, p(CM, NONE)),
    (0x115C1, 0x115C1, p(BB, NONE)),
    (0x115C2, 0x115C3, p(BA, NONE)),
    (0x115C4, 0x115C5, p(EX, NONE)),
    (0x115C9, 0x115D7, p(BA, NONE)),
    (0x115DC, 0x115DD, p(CM, NONE)),
    (0x11630, 0x11640, p(CM, NONE)),
    (0x11641, 0x11642, p(BA, NONE)),
    (0x11650, 0x11659, p(NU, NONE)),
    (0x11660, 0x1166C, p(BB, NONE)),
    (0x116AB, 0x116B7, p(CM, NONE)),
    (0x116C0, 0x116C9, p(NU, NONE)),
    (0x116D0, 0x116E3, p(NU, NONE)),
    (0x1171D, 0x1172B, p(CM, NONE)),
    (0x11730, 0x11739, p(NU, NONE)),
    (0x1173C, 0x1173E, p(BA, NONE)),
    (0x1182C, 0x1183A, p(CM, NONE)),
    (0x118E0, 0x118E9, p(NU, NONE)),
    (0x11930, 0x11935, p(CM, NONE)),
    (0x11937, 0x11938, p(CM, NONE)),
    (0x1193B, 0x1193E, p(CM, NONE)),
    (0x11940, 0x11940, p(CM, NONE)),
    (0x11942, 0x11943, p(CM, NONE)),
    (0x11944, 0x11946, p(BA, NONE)),
    (0x119D1, 0x119D7, p(CM, NONE)),
    (0x119DA, 0x119E0, p(CM, NONE)),
    (0x119E2, 0x119E2, p(BB, NONE)),
    (0x119E4, 0x119E4, p(CM, NONE)),
    (0x11A01, 0x11A0A, p(CM, NONE)),
    (0x11A33, 0x11A39, p(CM, NONE)),
    (0x11A3B, 0x11A3E, p(CM, NONE)),
    (0x11A3F, 0x11A3F, p(BB, NONE)),
    (0x11A41, 0x11A44, p(BA, NONE)),
    (0x11A45, 0x11A45, p(BB, NONE)),
    (0x11A47, 0x11A47, p(CM, NONE)),
    (0x11A51, 0x11A5B, p(CM, NONE)),
    (0x11A8A, 0x11A99, p(CM, NONE)),
    (0x11A9A, 0x11A9C, p(BA, NONE)),
    (0x11A9E, 0x11AA0, p(BB, NONE)),
    (0x11AA1, 0x11AA2, p(BA, NONE)),
    (0x11B00, 0x11B09, p(BB, NONE)),
    (0x11B60, 0x11B67, p(CM, NONE)),
    (0x11BF0, 0x11BF9, p(NU, NONE)),
    (0x11C2F, 0x11C36, p(CM, NONE)),
    (0x11C38, 0x11C3F, p(CM, NONE)),
    (0x11C41, 0x11C45, p(BA, NONE)),
    (0x11C50, 0x11C59, p(NU, NONE)),
    (0x11C70, 0x11C70, p(BB, NONE)),
    (0x11C71, 0x11C71, p(EX, NONE)),
    (0x11C92, 0x11CA7, p(CM, NONE)),
    (0x11CA9, 0x11CB6, p(CM, NONE)),
    (0x11D31, 0x11D36, p(CM, NONE)),
    (0x11D3A, 0x11D3A, p(CM, NONE)),
    (0x11D3C, 0x11D3D, p(CM, NONE)),
    (0x11D3F, 0x11D45, p(CM, NONE)),
    (0x11D47, 0x11D47, p(CM, NONE)),
    (0x11D50, 0x11D59, p(NU, NONE)),
    (0x11D8A, 0x11D8E, p(CM, NONE)),
    (0x11D90, 0x11D91, p(CM, NONE)),
    (0x11D93, 0x11D97, p(CM, NONE)),
    (0x11DA0, 0x11DA9, p(NU, NONE)),
    (0x11DE0, 0x11DE9, p(NU, NONE)),
    (0x11EF2, 0x11EF2, p(BA, NONE)),
    (0x11EF3, 0x11EF6, p(CM, NONE)),
    (0x11EF7, 0x11EF8, p(BA, NONE)),
    (0x11F00, 0x11F01, p(CM, NONE)),
    (0x11F03, 0x11F03, p(CM, NONE)),
    (0x11F34, 0x11F3A, p(CM, NONE)),
    (0x11F3E, 0x11F42, p(CM, NONE)),
    (0x11F43, 0x11F44, p(BA, NONE)),
    (0x11F45, 0x11F4F, p(ID, NONE)),
    (0x11F5A, 0x11F5A, p(CM, NONE)),
    (0x11FDD, 0x11FE0, p(PO, NONE)),
    (0x11FFF, 0x11FFF, p(BA, NONE)),
    (0x12470, 0x12474, p(BA, NONE)),
    (0x13258, 0x1325A, p(OP, NONE)),
    (0x1325B, 0x1325D, p(CL, NONE)),
    (0x13282, 0x13282, p(CL, NONE)),
    (0x13286, 0x13286, p(OP, NONE)),
    (0x13287, 0x13287, p(CL, NONE)),
    (0x13288, 0x13288, p(OP, NONE)),
    (0x13289, 0x13289, p(CL, NONE)),
    (0x13379, 0x13379, p(OP, NONE)),
    (0x1337A, 0x1337B, p(CL, NONE)),
    (0x1342F, 0x1342F, p(OP, NONE)),
    (0x13430, 0x13436, p(GL, NONE)),
    (0x13437, 0x13437, p(OP, NONE)),
    (0x13438, 0x13438, p(CL, NONE)),
    (0x13439, 0x1343B, p(GL, NONE)),
    (0x1343C, 0x1343C, p(OP, NONE)),
    (0x1343D, 0x1343D, p(CL, NONE)),
    (0x1343E, 0x1343E, p(OP, NONE)),
    (0x1343F, 0x1343F, p(CL, NONE)),
    (0x13440, 0x13440, p(CM, NONE)),
    (0x13447, 0x13455, p(CM, NONE)),
    (0x145CE, 0x145CE, p(OP, NONE)),
    (0x145CF, 0x145CF, p(CL, NONE)),
    (0x1611E, 0x1612F, p(CM, NONE)),
    (0x16A60, 0x16A69, p(NU, NONE)),
    (0x16A6E, 0x16A6F, p(BA, NONE)),
    (0x16AC0, 0x16AC9, p(NU, NONE)),
    (0x16AF0, 0x16AF4, p(CM, NONE)),
    (0x16AF5, 0x16AF5, p(BA, NONE)),
    (0x16B30, 0x16B36, p(CM, NONE)),
    (0x16B37, 0x16B39, p(BA, NONE)),
    (0x16B44, 0x16B44, p(BA, NONE)),
    (0x16B50, 0x16B59, p(NU, NONE)),
    (0x16D6E, 0x16D6F, p(BA, NONE)),
    (0x16D70, 0x16D79, p(NU, NONE)),
    (0x16E97, 0x16E98, p(BA, NONE)),
    (0x16F4F, 0x16F4F, p(CM, NONE)),
    (0x16F51, 0x16F87, p(CM, NONE)),
    (0x16F8F, 0x16F92, p(CM, NONE)),
    (0x16FE0, 0x16FE3, p(NS, NONE)),
    (0x16FE4, 0x16FE4, p(GL, NONE)),
    (0x16FF0, 0x16FF1, p(CM, NONE)),
    (0x16FF2, 0x16FF3, p(NS, NONE)),
    (0x16FF4, 0x16FF6, p(ID, NONE)),
    (0x17000, 0x18AFF, p(ID, NONE)),
    (0x18D00, 0x18D1E, p(ID, NONE)),
    (0x18D80, 0x18DF2, p(ID, NONE)),
    (0x1B000, 0x1B122, p(ID, NONE)),
    (0x1B132, 0x1B132, p(NS, NONE)),
    (0x1B150, 0x1B152, p(NS, NONE)),
    (0x1B155, 0x1B155, p(NS, NONE)),
    (0x1B164, 0x1B167, p(NS, NONE)),
    (0x1B170, 0x1B2FB, p(ID, NONE)),
    (0x1BC9D, 0x1BC9E, p(CM, NONE)),
    (0x1BC9F, 0x1BC9F, p(BA, NONE)),
    (0x1BCA0, 0x1BCA3, p(CM, NONE)),
    (0x1CCF0, 0x1CCF9, p(NU, NONE)),
    (0x1CF00, 0x1CF2D, p(CM, NONE)),
    (0x1CF30, 0x1CF46, p(CM, NONE)),
    (0x1D165, 0x1D169, p(CM, NONE)),
    (0x1D16D, 0x1D182, p(CM, NONE)),
    (0x1D185, 0x1D18B, p(CM, NONE)),
    (0x1D1AA, 0x1D1AD, p(CM, NONE)),
    (0x1D242, 0x1D244, p(CM, NONE)),
    (0x1D7CE, 0x1D7FF, p(NU, NONE)),
    (0x1DA00, 0x1DA36, p(CM, NONE)),
    (0x1DA3B, 0x1DA6C, p(CM, NONE)),
    (0x1DA75, 0x1DA75, p(CM, NONE)),
    (0x1DA84, 0x1DA84, p(CM, NONE)),
    (0x1DA87, 0x1DA8A, p(BA, NONE)),
    (0x1DA9B, 0x1DA9F, p(CM, NONE)),
    (0x1DAA1, 0x1DAAF, p(CM, NONE)),
    (0x1E000, 0x1E006, p(CM, NONE)),
    (0x1E008, 0x1E018, p(CM, NONE)),
    (0x1E01B, 0x1E021, p(CM, NONE)),
    (0x1E023, 0x1E024, p(CM, NONE)),
    (0x1E026, 0x1E02A, p(CM, NONE)),
    (0x1E08F, 0x1E08F, p(CM, NONE)),
    (0x1E130, 0x1E136, p(CM, NONE)),
    (0x1E140, 0x1E149, p(NU, NONE)),
    (0x1E2AE, 0x1E2AE, p(CM, NONE)),
    (0x1E2EC, 0x1E2EF, p(CM, NONE)),
    (0x1E2F0, 0x1E2F9, p(NU, NONE)),
    (0x1E2FF, 0x1E2FF, p(PR, NONE)),
    (0x1E4EC, 0x1E4EF, p(CM, NONE)),
    (0x1E4F0, 0x1E4F9, p(NU, NONE)),
    (0x1E5EE, 0x1E5EF, p(CM, NONE)),
    (0x1E5F1, 0x1E5FA, p(NU, NONE)),
    (0x1E6E3, 0x1E6E3, p(CM, NONE)),
    (0x1E6E6, 0x1E6E6, p(CM, NONE)),
    (0x1E6EE, 0x1E6EF, p(CM, NONE)),
    (0x1E6F5, 0x1E6F5, p(CM, NONE)),
    (0x1E8D0, 0x1E8D6, p(CM, NONE)),
    (0x1E944, 0x1E94A, p(CM, NONE)),
    (0x1E950, 0x1E959, p(NU, NONE)),
    (0x1E95E, 0x1E95F, p(OP, NONE)),
    (0x1ECAC, 0x1ECAC, p(PO, NONE)),
    (0x1ECB0, 0x1ECB0, p(PO, NONE)),
    (0x1F000, 0x1F02B, p(ID, NONE)),
    (0x1F02C, 0x1F02F, p(ID, UNASSIGNED_PICTOGRAPHIC)),
    (0x1F030, 0x1F093, p(ID, NONE)),
    (0x1F094, 0x1F09F, p(ID, UNASSIGNED_PICTOGRAPHIC)),
    (0x1F0A0, 0x1F0AE, p(ID, NONE)),
    (0x1F0AF, 0x1F0B0, p(ID, UNASSIGNED_PICTOGRAPHIC)),
    (0x1F0B1, 0x1F0BF, p(ID, NONE)),
    (0x1F0C0, 0x1F0C0, p(ID, UNASSIGNED_PICTOGRAPHIC)),
    (0x1F0C1, 0x1F0CF, p(ID, NONE)),
    (0x1F0D0, 0x1F0D0, p(ID, UNASSIGNED_PICTOGRAPHIC)),
    (0x1F0D1, 0x1F0F5, p(ID, NONE)),
    (0x1F0F6, 0x1F0FF, p(ID, UNASSIGNED_PICTOGRAPHIC)),
    (0x1F1AE, 0x1F1E5, p(ID, UNASSIGNED_PICTOGRAPHIC)),
    (0x1F1E6, 0x1F1FF, p(RI, NONE)),
    (0x1F200, 0x1F202, p(ID, NONE)),
    (0x1F203, 0x1F20F, p(ID, UNASSIGNED_PICTOGRAPHIC)),
    (0x1F210, 0x1F23B, p(ID, NONE)),
    (0x1F23C, 0x1F23F, p(ID, UNASSIGNED_PICTOGRAPHIC)),
    (0x1F240, 0x1F248, p(ID, NONE)),
    (0x1F249, 0x1F24F, p(ID, UNASSIGNED_PICTOGRAPHIC)),
    (0x1F250, 0x1F251, p(ID, NONE)),
    (0x1F252, 0x1F25F, p(ID, UNASSIGNED_PICTOGRAPHIC)),
    (0x1F260, 0x1F265, p(ID, NONE)),
    (0x1F266, 0x1F2FF, p(ID, UNASSIGNED_PICTOGRAPHIC)),
    (0x1F300, 0x1F384, p(ID, NONE)),
    (0x1F385, 0x1F385, p(EB, NONE)),
    (0x1F386, 0x1F39B, p(ID, NONE)),
    (0x1F39E, 0x1F3B4, p(ID, NONE)),
    (0x1F3B7, 0x1F3BB, p(ID, NONE)),
    (0x1F3BD, 0x1F3C1, p(ID, NONE)),
    (0x1F3C2, 0x1F3C4, p(EB, NONE)),
    (0x1F3C5, 0x1F3C6, p(ID, NONE)),
    (0x1F3C7, 0x1F3C7, p(EB, NONE)),
    (0x1F3C8, 0x1F3C9, p(ID, NONE)),
    (0x1F3CA, 0x1F3CC, p(EB, NONE)),
    (0x1F3CD, 0x1F3FA, p(ID, NONE)),
    (0x1F3FB, 0x1F3FF, p(EM, NONE)),
    (0x1F400, 0x1F441, p(ID, NONE)),
    (0x1F442, 0x1F443, p(EB, NONE)),
    (0x1F444, 0x1F445, p(ID, NONE)),
    (0x1F446, 0x1F450, p(EB, NONE)),
    (0x1F451, 0x1F465, p(ID, NONE)),
    (0x1F466, 0x1F478, p(EB, NONE)),
    (0x1F479, 0x1F47B, p(ID, NONE)),
    (0x1F47C, 0x1F47C, p(EB, NONE)),
    (0x1F47D, 0x1F480, p(ID, NONE)),
    (0x1F481, 0x1F483, p(EB, NONE)),
    (0x1F484, 0x1F484, p(ID, NONE)),
    (0x1F485, 0x1F487, p(EB, NONE)),
    (0x1F488, 0x1F48E, p(ID, NONE)),
    (0x1F48F, 0x1F48F, p(EB, NONE)),
    (0x1F490, 0x1F490, p(ID, NONE)),
    (0x1F491, 0x1F491, p(EB, NONE)),
    (0x1F492, 0x1F49F, p(ID, NONE)),
    (0x1F4A1, 0x1F4A1, p(ID, NONE)),
    (0x1F4A3, 0x1F4A3, p(ID, NONE)),
    (0x1F4A5, 0x1F4A9, p(ID, NONE)),
    (0x1F4AA, 0x1F4AA, p(EB, NONE)),
    (0x1F4AB, 0x1F4AE, p(ID, NONE)),
    (0x1F4B0, 0x1F4B0, p(ID, NONE)),
    (0x1F4B3, 0x1F4FF, p(ID, NONE)),
    (0x1F507, 0x1F516, p(ID, NONE)),
    (0x1F525, 0x1F531, p(ID, NONE)),
    (0x1F54A, 0x1F573, p(ID, NONE)),
    (0x1F574, 0x1F575, p(EB, NONE)),
    (0x1F576, 0x1F579, p(ID, NONE)),
    (0x1F57A, 0x1F57A, p(EB, NONE)),
    (0x1F57B, 0x1F58F, p(ID, NONE)),
    (0x1F590, 0x1F590, p(EB, NONE)),
    (0x1F591, 0x1F594, p(ID, NONE)),
    (0x1F595, 0x1F596, p(EB, NONE)),
    (0x1F597, 0x1F5D3, p(ID, NONE)),
    (0x1F5DC, 0x1F5F3, p(ID, NONE)),
    (0x1F5FA, 0x1F644, p(ID, NONE)),
    (0x1F645, 0x1F647, p(EB, NONE)),
    (0x1F648, 0x1F64A, p(ID, NONE)),
    (0x1F64B, 0x1F64F, p(EB, NONE)),
    (0x1F676, 0x1F678, p(QU, NONE)),
    (0x1F679, 0x1F67B, p(NS, NONE)),
    (0x1F680, 0x1F6A2, p(ID, NONE)),
    (0x1F6A3, 0x1F6A3, p(EB, NONE)),
    (0x1F6A4, 0x1F6B3, p(ID, NONE)),
    (0x1F6B4, 0x1F6B6, p(EB, NONE)),
    (0x1F6B7, 0x1F6BF, p(ID, NONE)),
    (0x1F6C0, 0x1F6C0, p(EB, NONE)),
    (0x1F6C1, 0x1F6CB, p(ID, NONE)),
    (0x1F6CC, 0x1F6CC, p(EB, NONE)),
    (0x1F6CD, 0x1F6D8, p(ID, NONE)),
    (0x1F6D9, 0x1F6DB, p(ID, UNASSIGNED_PICTOGRAPHIC)),
    (0x1F6DC, 0x1F6EC, p(ID, NONE)),
    (0x1F6ED, 0x1F6EF, p(ID, UNASSIGNED_PICTOGRAPHIC)),
    (0x1F6F0, 0x1F6FC, p(ID, NONE)),
    (0x1F6FD, 0x1F6FF, p(ID, UNASSIGNED_PICTOGRAPHIC)),
    (0x1F774, 0x1F776, p(ID, NONE)),
    (0x1F77B, 0x1F77F, p(ID, NONE)),
    (0x1F7D5, 0x1F7D9, p(ID, NONE)),
    (0x1F7DA, 0x1F7DF, p(ID, UNASSIGNED_PICTOGRAPHIC)),
    (0x1F7E0, 0x1F7EB, p(ID, NONE)),
    (0x1F7EC, 0x1F7EF, p(ID, UNASSIGNED_PICTOGRAPHIC)),
    (0x1F7F0, 0x1F7F0, p(ID, NONE)),
    (0x1F7F1, 0x1F7FF, p(ID, UNASSIGNED_PICTOGRAPHIC)),
    (0x1F80C, 0x1F80F, p(AL, UNASSIGNED_PICTOGRAPHIC)),
    (0x1F848, 0x1F84F, p(AL, UNASSIGNED_PICTOGRAPHIC)),
    (0x1F85A, 0x1F85F, p(AL, UNASSIGNED_PICTOGRAPHIC)),
    (0x1F888, 0x1F88F, p(AL, UNASSIGNED_PICTOGRAPHIC)),
    (0x1F8AE, 0x1F8AF, p(AL, UNASSIGNED_PICTOGRAPHIC)),
    (0x1F8BC, 0x1F8BF, p(AL, UNASSIGNED_PICTOGRAPHIC)),
    (0x1F8C2, 0x1F8CF, p(AL, UNASSIGNED_PICTOGRAPHIC)),
    (0x1F8D9, 0x1F8FF, p(AL, UNASSIGNED_PICTOGRAPHIC)),
    (0x1F90C, 0x1F90C, p(EB, NONE)),
    (0x1F90D, 0x1F90E, p(ID, NONE)),
    (0x1F90F, 0x1F90F, p(EB, NONE)),
    (0x1F910, 0x1F917, p(ID, NONE)),
    (0x1F918, 0x1F91F, p(EB, NONE)),
    (0x1F920, 0x1F925, p(ID, NONE)),
    (0x1F926, 0x1F926, p(EB, NONE)),
    (0x1F927, 0x1F92F, p(ID, NONE)),
    (0x1F930, 0x1F939, p(EB, NONE)),
    (0x1F93A, 0x1F93B, p(ID, NONE)),
    (0x1F93C, 0x1F93E, p(EB, NONE)),
    (0x1F93F, 0x1F976, p(ID, NONE)),
    (0x1F977, 0x1F977, p(EB, NONE)),
    (0x1F978, 0x1F9B4, p(ID, NONE)),
    (0x1F9B5, 0x1F9B6, p(EB, NONE)),
    (0x1F9B7, 0x1F9B7, p(ID, NONE)),
    (0x1F9B8, 0x1F9B9, p(EB, NONE)),
    (0x1F9BA, 0x1F9BA, p(ID, NONE)),
    (0x1F9BB, 0x1F9BB, p(EB, NONE)),
    (0x1F9BC, 0x1F9CC, p(ID, NONE)),
    (0x1F9CD, 0x1F9CF, p(EB, NONE)),
    (0x1F9D0, 0x1F9D0, p(ID, NONE)),
    (0x1F9D1, 0x1F9DD, p(EB, NONE)),
    (0x1F9DE, 0x1F9FF, p(ID, NONE)),
    (0x1FA58, 0x1FA5F, p(ID, UNASSIGNED_PICTOGRAPHIC)),
    (0x1FA60, 0x1FA6D, p(ID, NONE)),
    (0x1FA6E, 0x1FA6F, p(ID, UNASSIGNED_PICTOGRAPHIC)),
    (0x1FA70, 0x1FA7C, p(ID, NONE)),
    (0x1FA7D, 0x1FA7F, p(ID, UNASSIGNED_PICTOGRAPHIC)),
    (0x1FA80, 0x1FA8A, p(ID, NONE)),
    (0x1FA8B, 0x1FA8D, p(ID, UNASSIGNED_PICTOGRAPHIC)),
    (0x1FA8E, 0x1FAC2, p(ID, NONE)),
    (0x1FAC3, 0x1FAC5, p(EB, NONE)),
    (0x1FAC6, 0x1FAC6, p(ID, NONE)),
    (0x1FAC7, 0x1FAC7, p(ID, UNASSIGNED_PICTOGRAPHIC)),
    (0x1FAC8, 0x1FAC8, p(ID, NONE)),
    (0x1FAC9, 0x1FACC, p(ID, UNASSIGNED_PICTOGRAPHIC)),
    (0x1FACD, 0x1FADC, p(ID, NONE)),
    (0x1FADD, 0x1FADE, p(ID, UNASSIGNED_PICTOGRAPHIC)),
    (0x1FADF, 0x1FAEA, p(ID, NONE)),
    (0x1FAEB, 0x1FAEE, p(ID, UNASSIGNED_PICTOGRAPHIC)),
    (0x1FAEF, 0x1FAEF, p(ID, NONE)),
    (0x1FAF0, 0x1FAF8, p(EB, NONE)),
    (0x1FAF9, 0x1FAFF, p(ID, UNASSIGNED_PICTOGRAPHIC)),
    (0x1FBF0, 0x1FBF9, p(NU, NONE)),
    (0x1FC00, 0x1FFFD, p(ID, UNASSIGNED_PICTOGRAPHIC)),
    (0x20000, 0x2FFFD, p(ID, NONE)),
    (0x30000, 0x3FFFD, p(ID, NONE)),
    (0xE0001, 0xE0001, p(CM, NONE)),
    (0xE0020, 0xE007F, p(CM, NONE)),
    (0xE0100, 0xE01EF, p(CM, NONE)),
];
