//! UTF-8 decoding for the range builder
//!
//! Byte-at-a-time decoding that never produces a partial, overlong,
//! surrogate or out-of-range code point.

/// UTF-8 decoder state
#[derive(Debug, Clone, Default)]
pub struct Utf8Decoder {
    /// Bytes accumulated for current character
    buffer: [u8; 4],
    /// Number of bytes in buffer
    len: usize,
    /// Expected total bytes for current character
    expected: usize,
}

/// Result of feeding a byte to the decoder
#[derive(Debug, Clone, PartialEq)]
pub enum Utf8Result {
    /// Need more bytes
    Pending,
    /// Successfully decoded a character
    Char(char),
    /// Invalid sequence, the byte was consumed as part of it
    Invalid,
    /// A pending sequence was cut short by a byte that does not continue it.
    /// The sequence is invalid and the byte was NOT consumed; feed it again.
    Interrupted,
}

impl Utf8Decoder {
    /// Create a new decoder
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the decoder state
    pub fn reset(&mut self) {
        self.len = 0;
        self.expected = 0;
    }

    /// Check if decoder is in the middle of a sequence
    pub fn is_pending(&self) -> bool {
        self.len > 0
    }

    /// End of input. Returns true if a truncated sequence was discarded.
    pub fn finish(&mut self) -> bool {
        let truncated = self.is_pending();
        self.reset();
        truncated
    }

    /// Feed a byte to the decoder
    pub fn feed(&mut self, byte: u8) -> Utf8Result {
        // ASCII fast path
        if self.len == 0 && byte < 0x80 {
            return Utf8Result::Char(byte as char);
        }

        if self.len == 0 {
            self.expected = match byte {
                b if b & 0b1110_0000 == 0b1100_0000 => 2,
                b if b & 0b1111_0000 == 0b1110_0000 => 3,
                b if b & 0b1111_1000 == 0b1111_0000 => 4,
                // Stray continuation byte or 0xF8..=0xFF
                _ => return Utf8Result::Invalid,
            };
            self.buffer[0] = byte;
            self.len = 1;
            return Utf8Result::Pending;
        }

        if byte & 0b1100_0000 != 0b1000_0000 {
            self.reset();
            return Utf8Result::Interrupted;
        }

        self.buffer[self.len] = byte;
        self.len += 1;

        if self.len < self.expected {
            return Utf8Result::Pending;
        }

        let result = match self.decode_buffer() {
            Some(c) => Utf8Result::Char(c),
            None => Utf8Result::Invalid,
        };
        self.reset();
        result
    }

    /// Decode a complete buffer, rejecting overlong forms, surrogates and
    /// values above U+10FFFF.
    fn decode_buffer(&self) -> Option<char> {
        let b = &self.buffer;
        let (cp, min) = match self.expected {
            2 => (((b[0] & 0x1F) as u32) << 6 | (b[1] & 0x3F) as u32, 0x80),
            3 => (
                ((b[0] & 0x0F) as u32) << 12 | ((b[1] & 0x3F) as u32) << 6 | (b[2] & 0x3F) as u32,
                0x800,
            ),
            4 => (
                ((b[0] & 0x07) as u32) << 18
                    | ((b[1] & 0x3F) as u32) << 12
                    | ((b[2] & 0x3F) as u32) << 6
                    | (b[3] & 0x3F) as u32,
                0x10000,
            ),
            _ => return None,
        };
        if cp < min {
            return None;
        }
        // from_u32 rejects surrogates and anything above U+10FFFF
        char::from_u32(cp)
    }
}

/// One item produced by [`decode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded {
    Char(char),
    /// A malformed sequence starting at this byte offset was skipped
    Invalid { offset: usize },
}

/// Decode a complete buffer, reporting each malformed sequence once
pub fn decode(bytes: &[u8]) -> Decode<'_> {
    Decode {
        bytes,
        pos: 0,
        seq_start: 0,
        decoder: Utf8Decoder::new(),
        done: false,
    }
}

/// Iterator returned by [`decode`]
#[derive(Debug, Clone)]
pub struct Decode<'a> {
    bytes: &'a [u8],
    pos: usize,
    seq_start: usize,
    decoder: Utf8Decoder,
    done: bool,
}

impl Iterator for Decode<'_> {
    type Item = Decoded;

    fn next(&mut self) -> Option<Decoded> {
        while let Some(&byte) = self.bytes.get(self.pos) {
            if !self.decoder.is_pending() {
                self.seq_start = self.pos;
            }
            match self.decoder.feed(byte) {
                Utf8Result::Pending => self.pos += 1,
                Utf8Result::Char(c) => {
                    self.pos += 1;
                    return Some(Decoded::Char(c));
                },
                Utf8Result::Invalid => {
                    self.pos += 1;
                    return Some(Decoded::Invalid {
                        offset: self.seq_start,
                    });
                },
                // Leave pos on the interrupting byte so it starts a new sequence
                Utf8Result::Interrupted => {
                    return Some(Decoded::Invalid {
                        offset: self.seq_start,
                    });
                },
            }
        }
        if !self.done {
            self.done = true;
            if self.decoder.finish() {
                return Some(Decoded::Invalid {
                    offset: self.seq_start,
                });
            }
        }
        None
    }
}
