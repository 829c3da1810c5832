// frame.rs - Pre-formatted ANSI frame template and the per-generation encoder

use crate::{GridSize, Palette, Token};
use tracing::debug;

/// Bytes per display unit: `ESC [ d d m <tail>`.
pub const UNIT_LEN: usize = 6;
/// Offset of the two color-code digits inside a unit.
pub const CODE_OFFSET: usize = 2;

const ESC: u8 = 0x1b;
const CELL_TAIL: u8 = b' ';
const ROW_TAIL: u8 = b'\n';

/// Byte buffer holding one frame as terminal-ready text.
///
/// Laid out as `height` rows of `width` cell units followed by one row
/// terminator unit. Cell units read `ESC[<code>m ` and terminators read
/// `ESC[00m\n`. Everything except the cell code digits is written once, in
/// [`FrameBuffer::new`].
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    size: GridSize,
    bytes: Vec<u8>,
}

impl FrameBuffer {
    /// Allocate the buffer and write its constant scaffolding.
    pub fn new(size: GridSize) -> Self {
        let units = size.height() * (size.width() + 1);
        let mut bytes = Vec::with_capacity(units * UNIT_LEN);

        for _ in 0..size.height() {
            for _ in 0..size.width() {
                push_unit(&mut bytes, Token::RESET, CELL_TAIL);
            }
            push_unit(&mut bytes, Token::RESET, ROW_TAIL);
        }

        debug!(
            height = size.height(),
            width = size.width(),
            bytes = bytes.len(),
            "frame buffer initialised"
        );
        Self { size, bytes }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    /// The whole frame, ready for a single write.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Token currently stored for cell `(y, x)`.
    pub fn code_at(&self, y: usize, x: usize) -> Token {
        let at = code_position(self.size, y, x);
        Token([self.bytes[at], self.bytes[at + 1]])
    }

    /// Rewrite every cell's code for the `previous` -> `current` transition.
    pub fn encode(&mut self, current: &[u8], previous: &[u8], palette: &Palette) {
        encode(self, current, previous, palette);
    }
}

/// Write the color token of each cell's transition into `frame`.
///
/// Only the two code digits of each cell unit change. Row terminators and
/// all escape bytes stay as [`FrameBuffer::new`] wrote them.
///
/// # Panics
///
/// If `current` or `previous` is not `frame.size().area()` long.
pub fn encode(frame: &mut FrameBuffer, current: &[u8], previous: &[u8], palette: &Palette) {
    let size = frame.size;
    assert_eq!(current.len(), size.area(), "current grid has wrong length");
    assert_eq!(previous.len(), size.area(), "previous grid has wrong length");

    let row_len = (size.width() + 1) * UNIT_LEN;
    let rows = frame.bytes.chunks_exact_mut(row_len);
    let cells = current.chunks_exact(size.width()).zip(previous.chunks_exact(size.width()));

    for (row, (cur_row, prev_row)) in rows.zip(cells) {
        // Zipping with the row's cells stops before the terminator unit.
        let units = row.chunks_exact_mut(UNIT_LEN);
        for (unit, (&cur, &prev)) in units.zip(cur_row.iter().zip(prev_row)) {
            let Token(code) = palette.token(prev, cur);
            unit[CODE_OFFSET..CODE_OFFSET + 2].copy_from_slice(&code);
        }
    }
}

fn push_unit(bytes: &mut Vec<u8>, token: Token, tail: u8) {
    bytes.extend_from_slice(&[ESC, b'[', token.0[0], token.0[1], b'm', tail]);
}

fn code_position(size: GridSize, y: usize, x: usize) -> usize {
    assert!(y < size.height() && x < size.width(), "cell ({y}, {x}) out of range");
    (y * (size.width() + 1) + x) * UNIT_LEN + CODE_OFFSET
}
