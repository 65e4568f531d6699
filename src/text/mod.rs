// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Text helpers for the MFD.
//!
//! The display does not speak UTF-8; it uses a single-byte vendor
//! character set with printable ASCII in the low half and accented Latin,
//! Greek, symbols and half-width katakana spread over the rest.
//! [`to_codepage`] converts a Rust string into display bytes,
//! [`Scroller`] animates text wider than the 16-character line.

mod scroll;

pub use scroll::{ScrollOptions, Scroller};

/// Display byte of the box glyph, the conventional substitute for
/// unsupported code points.
pub const REPLACE_MISSING: u8 = 0xdb;

/// Policy for characters the display character set cannot represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unmapped {
    /// Drop the character from the output.
    Drop,
    /// Emit this display byte in its place; [`REPLACE_MISSING`] is the
    /// conventional choice.
    Substitute(u8),
}

/// Converts a string into display character set bytes.
///
/// Printable ASCII maps through unchanged except `\` and `~`, which have
/// no glyph, and 0x7E/0x7F, which the display reuses for `→` and `←`.
/// Beyond ASCII the set carries accented Latin, the Greek alphabet used
/// in engineering notation, currency and math symbols, box-drawing
/// corners and the half-width katakana block (U+FF61 to U+FF9F).
/// Everything else follows the [`Unmapped`] policy.
///
/// # Examples
///
/// ```
/// use x52pro::text::{REPLACE_MISSING, Unmapped, to_codepage};
///
/// assert_eq!(to_codepage("A-10C", Unmapped::Drop), b"A-10C");
/// assert_eq!(to_codepage("¥100", Unmapped::Drop), vec![0xe6, b'1', b'0', b'0']);
/// assert_eq!(
///     to_codepage("中?", Unmapped::Substitute(REPLACE_MISSING)),
///     vec![REPLACE_MISSING, b'?'],
/// );
/// ```
#[must_use]
pub fn to_codepage(text: &str, unmapped: Unmapped) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for c in text.chars() {
        match map_char(c) {
            Some(b) => out.push(b),
            None => match unmapped {
                Unmapped::Drop => {}
                Unmapped::Substitute(b) => out.push(b),
            },
        }
    }
    out
}

/// Maps one character to its display byte, if the character set has it.
fn map_char(c: char) -> Option<u8> {
    #[allow(clippy::cast_possible_truncation)]
    match c {
        // Backslash has no glyph in the character set.
        '\\' => None,
        ' '..='}' => Some(c as u8),

        // Box drawing corners.
        '┌' => Some(0x09),
        '┐' => Some(0x0a),
        '└' => Some(0x0b),
        '┘' => Some(0x0c),

        // Miscellaneous symbols.
        '·' => Some(0x0d),
        '®' => Some(0x0e),
        '©' => Some(0x0f),
        '™' => Some(0x10),
        '†' => Some(0x11),
        '§' => Some(0x12),
        '¶' => Some(0x13),
        '→' => Some(0x7e),
        '←' => Some(0x7f),
        '\u{a0}' => Some(0xa0),
        '‾' => Some(0xff),

        // Greek letters.
        'Γ' => Some(0x14),
        'Δ' => Some(0x15),
        'Θ' => Some(0x16),
        'Λ' => Some(0x17),
        'Ξ' => Some(0x18),
        'Π' => Some(0x19),
        'Σ' => Some(0x1a),
        'ϒ' => Some(0x1b),
        'Φ' => Some(0x1c),
        'Ψ' => Some(0x1d),
        'Ω' => Some(0x1e),
        'α' => Some(0x1f),

        // Accented Latin, first block.
        'Ç' => Some(0x80),
        'ü' => Some(0x81),
        'é' => Some(0x82),
        'â' => Some(0x83),
        'ä' => Some(0x84),
        'à' => Some(0x85),
        'ȧ' => Some(0x86),
        'ç' => Some(0x87),
        'ê' => Some(0x88),
        'ë' => Some(0x89),
        'è' => Some(0x8a),
        'ï' => Some(0x8b),
        'î' => Some(0x8c),
        'ì' => Some(0x8d),
        'Ä' => Some(0x8e),
        'Â' => Some(0x8f),
        'É' => Some(0x90),
        'æ' => Some(0x91),
        'Æ' => Some(0x92),
        'ô' => Some(0x93),
        'ö' => Some(0x94),
        'ò' => Some(0x95),
        'û' => Some(0x96),
        'ù' => Some(0x97),
        'ÿ' => Some(0x98),
        'Ö' => Some(0x99),
        'Ü' => Some(0x9a),
        'ñ' => Some(0x9b),
        'Ñ' => Some(0x9c),
        'ª' => Some(0x9d),
        'º' => Some(0x9e),
        '¿' => Some(0x9f),

        // Half-width CJK punctuation and katakana, contiguous with the
        // JIS X 0201 high half.
        '\u{ff61}'..='\u{ff9f}' => Some((c as u32 - 0xff61 + 0xa1) as u8),

        // Accented Latin and currency, second block.
        'á' => Some(0xe0),
        'í' => Some(0xe1),
        'ó' => Some(0xe2),
        'ú' => Some(0xe3),
        '¢' => Some(0xe4),
        '£' => Some(0xe5),
        '¥' => Some(0xe6),
        '₧' => Some(0xe7),
        'ƒ' => Some(0xe8),
        '¡' => Some(0xe9),
        'Ã' => Some(0xea),
        'ã' => Some(0xeb),
        'Õ' => Some(0xec),
        'õ' => Some(0xed),
        'Ø' => Some(0xee),
        'ø' => Some(0xef),

        // Mathematical symbols.
        '½' => Some(0xf5),
        '¼' => Some(0xf6),
        '×' => Some(0xf7),
        '÷' => Some(0xf8),
        '≤' => Some(0xf9),
        '≥' => Some(0xfa),
        '≪' => Some(0xfb),
        '≫' => Some(0xfc),
        '≠' => Some(0xfd),
        '√' => Some(0xfe),

        _ => None,
    }
}
