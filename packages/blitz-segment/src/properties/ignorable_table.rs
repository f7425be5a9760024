//! Default_Ignorable_Code_Point ranges (Unicode 17.0.0). Code points not
//! listed here are not default ignorable.
//!
//! Generated from the Unicode Character Database. Do not edit by hand.

#[rustfmt::skip]
pub(crate) static DEFAULT_IGNORABLE_RANGES: &[(u32, u32, bool)] = &[
    (0x00AD, 0x00AD, true),
    (0x034F, 0x034F, true),
    (0x061C, 0x061C, true),
    (0x115F, 0x1160, true),
    (0x17B4, 0x17B5, true),
    (0x180B, 0x180F, true),
    (0x200B, 0x200F, true),
    (0x202A, 0x202E, true),
    (0x2060, 0x206F, true),
    (0x3164, 0x3164, true),
    (0xFE00, 0xFE0F, true),
    (0xFEFF, 0xFEFF, true),
    (0xFFA0, 0xFFA0, true),
    (0xFFF0, 0xFFF8, true),
    (0x1BCA0, 0x1BCA3, true),
    (0x1D173, 0x1D17A, true),
    (0xE0000, 0xE0FFF, true),
];
