// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scrolling of text wider than the 16-character MFD line.

use crate::error::{Error, Result};
use crate::protocol::MFD_LINE_SIZE;

/// How a [`Scroller`] moves its text through the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollOptions {
    /// Start the cycle with an empty window and slide the text in from the
    /// side, instead of starting with the maximum visible length.
    pub from_offscreen: bool,
    /// Slide the text all the way out of the window before wrapping,
    /// instead of stopping at the last fully filled window.
    pub to_offscreen: bool,
    /// Move the text left-to-right instead of the default right-to-left.
    pub left_to_right: bool,
}

/// Animates a long byte string through a fixed 16-byte window.
///
/// An optional prefix and suffix stay put on either side of the window;
/// only the text between them moves. Text, prefix and suffix must already
/// be in the display codepage (see [`to_codepage`](super::to_codepage)).
/// Text shorter than the window is padded with spaces and never moves.
///
/// # Examples
///
/// ```
/// use x52pro::text::{ScrollOptions, Scroller};
///
/// let mut scroller = Scroller::new(
///     b"HELLO WORLD",
///     b">>> ",
///     b" <<<",
///     ScrollOptions::default(),
/// ).unwrap();
/// assert_eq!(scroller.frame(), b">>> HELLO WO <<<");
/// assert_eq!(scroller.scroll(), b">>> ELLO WOR <<<");
/// ```
#[derive(Debug, Clone)]
pub struct Scroller {
    text: Vec<u8>,
    prefix: Vec<u8>,
    suffix: Vec<u8>,
    options: ScrollOptions,
    /// Lead blanks + padded text + trail blanks; the window slides over it.
    track: Vec<u8>,
    pos: usize,
}

impl Scroller {
    /// Creates a scroller over `text` with fixed surrounding decoration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if prefix and suffix combined
    /// exceed 8 bytes, which would leave no reasonable room to scroll in.
    pub fn new(
        text: &[u8],
        prefix: &[u8],
        suffix: &[u8],
        options: ScrollOptions,
    ) -> Result<Scroller> {
        if prefix.len() + suffix.len() > MFD_LINE_SIZE / 2 {
            return Err(Error::InvalidParameter(
                "prefix and suffix combined length too long",
            ));
        }

        let mut scroller = Scroller {
            text: text.to_vec(),
            prefix: prefix.to_vec(),
            suffix: suffix.to_vec(),
            options,
            track: Vec::new(),
            pos: 0,
        };
        scroller.rebuild();
        Ok(scroller)
    }

    /// Replaces the scroll behavior flags and restarts the cycle.
    pub fn set_options(&mut self, options: ScrollOptions) {
        self.options = options;
        self.rebuild();
    }

    /// Restarts the cycle at its first frame.
    pub fn reset(&mut self) {
        self.pos = if self.options.left_to_right {
            self.max_pos()
        } else {
            0
        };
    }

    /// Returns the current 16-byte frame.
    #[must_use]
    pub fn frame(&self) -> Vec<u8> {
        let width = self.width();
        let mut out = Vec::with_capacity(MFD_LINE_SIZE);
        out.extend_from_slice(&self.prefix);
        out.extend_from_slice(&self.track[self.pos..self.pos + width]);
        out.extend_from_slice(&self.suffix);
        out
    }

    /// Advances the cycle one step and returns the new frame.
    pub fn scroll(&mut self) -> Vec<u8> {
        let max = self.max_pos();
        if self.options.left_to_right {
            self.pos = if self.pos == 0 { max } else { self.pos - 1 };
        } else {
            self.pos = if self.pos == max { 0 } else { self.pos + 1 };
        }
        self.frame()
    }

    /// Window width left between prefix and suffix.
    fn width(&self) -> usize {
        MFD_LINE_SIZE - self.prefix.len() - self.suffix.len()
    }

    fn max_pos(&self) -> usize {
        self.track.len() - self.width()
    }

    /// Rebuilds the track the window slides over.
    ///
    /// Right-to-left motion enters on the right, so lead blanks model
    /// "from offscreen" and trail blanks model "to offscreen";
    /// left-to-right motion runs the same track backwards, so the roles of
    /// the two blank runs swap.
    fn rebuild(&mut self) {
        let width = self.width();
        let lead = if self.options.left_to_right {
            self.options.to_offscreen
        } else {
            self.options.from_offscreen
        };
        let trail = if self.options.left_to_right {
            self.options.from_offscreen
        } else {
            self.options.to_offscreen
        };

        self.track.clear();
        if lead {
            self.track.extend(std::iter::repeat_n(b' ', width));
        }
        self.track.extend_from_slice(&self.text);
        // Short text occupies a full static window.
        if self.text.len() < width {
            self.track
                .extend(std::iter::repeat_n(b' ', width - self.text.len()));
        }
        if trail {
            self.track.extend(std::iter::repeat_n(b' ', width));
        }
        self.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(from: bool, to: bool, ltr: bool) -> ScrollOptions {
        ScrollOptions {
            from_offscreen: from,
            to_offscreen: to,
            left_to_right: ltr,
        }
    }

    /// Runs at least three full cycles and checks every frame.
    fn check_cycle(scroller: &mut Scroller, expected: &[&[u8; 16]]) {
        for cycle in 0..3 {
            for (i, exp) in expected.iter().enumerate() {
                assert_eq!(
                    scroller.frame(),
                    exp.to_vec(),
                    "cycle {cycle} step {i}: got {:?}",
                    String::from_utf8_lossy(&scroller.frame()),
                );
                scroller.scroll();
            }
        }
    }

    #[test]
    fn rtl_from_and_to_offscreen() {
        let mut scroller = Scroller::new(
            b"ABCDEFGHIJ",
            b">>> ",
            b" <<<",
            options(true, true, false),
        )
        .unwrap();
        check_cycle(
            &mut scroller,
            &[
                b">>>          <<<",
                b">>>        A <<<",
                b">>>       AB <<<",
                b">>>      ABC <<<",
                b">>>     ABCD <<<",
                b">>>    ABCDE <<<",
                b">>>   ABCDEF <<<",
                b">>>  ABCDEFG <<<",
                b">>> ABCDEFGH <<<",
                b">>> BCDEFGHI <<<",
                b">>> CDEFGHIJ <<<",
                b">>> DEFGHIJ  <<<",
                b">>> EFGHIJ   <<<",
                b">>> FGHIJ    <<<",
                b">>> GHIJ     <<<",
                b">>> HIJ      <<<",
                b">>> IJ       <<<",
                b">>> J        <<<",
                b">>>          <<<",
            ],
        );
    }

    #[test]
    fn rtl_from_offscreen_only() {
        let mut scroller = Scroller::new(
            b"ABCDEFGHIJ",
            b">>> ",
            b" <<<",
            options(true, false, false),
        )
        .unwrap();
        check_cycle(
            &mut scroller,
            &[
                b">>>          <<<",
                b">>>        A <<<",
                b">>>       AB <<<",
                b">>>      ABC <<<",
                b">>>     ABCD <<<",
                b">>>    ABCDE <<<",
                b">>>   ABCDEF <<<",
                b">>>  ABCDEFG <<<",
                b">>> ABCDEFGH <<<",
                b">>> BCDEFGHI <<<",
                b">>> CDEFGHIJ <<<",
            ],
        );
    }

    #[test]
    fn rtl_to_offscreen_only() {
        let mut scroller = Scroller::new(
            b"ABCDEFGHIJ",
            b">>> ",
            b" <<<",
            options(false, true, false),
        )
        .unwrap();
        check_cycle(
            &mut scroller,
            &[
                b">>> ABCDEFGH <<<",
                b">>> BCDEFGHI <<<",
                b">>> CDEFGHIJ <<<",
                b">>> DEFGHIJ  <<<",
                b">>> EFGHIJ   <<<",
                b">>> FGHIJ    <<<",
                b">>> GHIJ     <<<",
                b">>> HIJ      <<<",
                b">>> IJ       <<<",
                b">>> J        <<<",
                b">>>          <<<",
            ],
        );
    }

    #[test]
    fn rtl_onscreen_only() {
        let mut scroller = Scroller::new(
            b"ABCDEFGHIJ",
            b">>> ",
            b" <<<",
            ScrollOptions::default(),
        )
        .unwrap();
        check_cycle(
            &mut scroller,
            &[
                b">>> ABCDEFGH <<<",
                b">>> BCDEFGHI <<<",
                b">>> CDEFGHIJ <<<",
            ],
        );
    }

    #[test]
    fn ltr_from_and_to_offscreen() {
        let mut scroller = Scroller::new(
            b"ABCDEFGHIJ",
            b">>> ",
            b" <<<",
            options(true, true, true),
        )
        .unwrap();
        check_cycle(
            &mut scroller,
            &[
                b">>>          <<<",
                b">>> J        <<<",
                b">>> IJ       <<<",
                b">>> HIJ      <<<",
                b">>> GHIJ     <<<",
                b">>> FGHIJ    <<<",
                b">>> EFGHIJ   <<<",
                b">>> DEFGHIJ  <<<",
                b">>> CDEFGHIJ <<<",
                b">>> BCDEFGHI <<<",
                b">>> ABCDEFGH <<<",
                b">>>  ABCDEFG <<<",
                b">>>   ABCDEF <<<",
                b">>>    ABCDE <<<",
                b">>>     ABCD <<<",
                b">>>      ABC <<<",
                b">>>       AB <<<",
                b">>>        A <<<",
                b">>>          <<<",
            ],
        );
    }

    #[test]
    fn ltr_from_offscreen_only() {
        let mut scroller = Scroller::new(
            b"ABCDEFGHIJ",
            b">>> ",
            b" <<<",
            options(true, false, true),
        )
        .unwrap();
        check_cycle(
            &mut scroller,
            &[
                b">>>          <<<",
                b">>> J        <<<",
                b">>> IJ       <<<",
                b">>> HIJ      <<<",
                b">>> GHIJ     <<<",
                b">>> FGHIJ    <<<",
                b">>> EFGHIJ   <<<",
                b">>> DEFGHIJ  <<<",
                b">>> CDEFGHIJ <<<",
                b">>> BCDEFGHI <<<",
                b">>> ABCDEFGH <<<",
            ],
        );
    }

    #[test]
    fn ltr_to_offscreen_only() {
        let mut scroller = Scroller::new(
            b"ABCDEFGHIJ",
            b">>> ",
            b" <<<",
            options(false, true, true),
        )
        .unwrap();
        check_cycle(
            &mut scroller,
            &[
                b">>> CDEFGHIJ <<<",
                b">>> BCDEFGHI <<<",
                b">>> ABCDEFGH <<<",
                b">>>  ABCDEFG <<<",
                b">>>   ABCDEF <<<",
                b">>>    ABCDE <<<",
                b">>>     ABCD <<<",
                b">>>      ABC <<<",
                b">>>       AB <<<",
                b">>>        A <<<",
                b">>>          <<<",
            ],
        );
    }

    #[test]
    fn ltr_onscreen_only() {
        let mut scroller = Scroller::new(
            b"ABCDEFGHIJ",
            b">>> ",
            b" <<<",
            options(false, false, true),
        )
        .unwrap();
        check_cycle(
            &mut scroller,
            &[
                b">>> CDEFGHIJ <<<",
                b">>> BCDEFGHI <<<",
                b">>> ABCDEFGH <<<",
            ],
        );
    }

    #[test]
    fn no_suffix_widens_the_window() {
        let mut scroller = Scroller::new(
            b"ABCDEFGHIJKLMNOP",
            b">>> ",
            b"",
            ScrollOptions::default(),
        )
        .unwrap();
        check_cycle(
            &mut scroller,
            &[
                b">>> ABCDEFGHIJKL",
                b">>> BCDEFGHIJKLM",
                b">>> CDEFGHIJKLMN",
                b">>> DEFGHIJKLMNO",
                b">>> EFGHIJKLMNOP",
            ],
        );
    }

    #[test]
    fn no_prefix_or_suffix_uses_full_line() {
        let mut scroller = Scroller::new(
            b"ABCDEFGHIJKLMNOPQ",
            b"",
            b"",
            ScrollOptions::default(),
        )
        .unwrap();
        check_cycle(
            &mut scroller,
            &[b"ABCDEFGHIJKLMNOP", b"BCDEFGHIJKLMNOPQ"],
        );
    }

    #[test]
    fn short_text_is_a_static_frame() {
        let cases: [(&[u8], &[u8], &[u8; 16]); 4] = [
            (b">>> ", b" <<<", b">>> foobar   <<<"),
            (b">>> ", b"", b">>> foobar      "),
            (b"", b" <<<", b"foobar       <<<"),
            (b"", b"", b"foobar          "),
        ];
        for (prefix, suffix, expected) in cases {
            let mut scroller =
                Scroller::new(b"foobar", prefix, suffix, ScrollOptions::default()).unwrap();
            check_cycle(&mut scroller, &[expected]);
        }
    }

    #[test]
    fn oversized_decoration_is_rejected() {
        let err = Scroller::new(b"text", b">>>>>", b"<<<<", ScrollOptions::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }

    #[test]
    fn reset_returns_to_first_frame() {
        let mut scroller = Scroller::new(
            b"ABCDEFGHIJ",
            b">>> ",
            b" <<<",
            options(true, true, false),
        )
        .unwrap();
        scroller.scroll();
        scroller.scroll();
        scroller.reset();
        assert_eq!(scroller.frame(), b">>>          <<<");
    }

    #[test]
    fn set_options_restarts_the_cycle() {
        let mut scroller = Scroller::new(
            b"ABCDEFGHIJ",
            b">>> ",
            b" <<<",
            ScrollOptions::default(),
        )
        .unwrap();
        scroller.scroll();
        scroller.set_options(options(false, false, true));
        assert_eq!(scroller.frame(), b">>> CDEFGHIJ <<<");
    }
}
