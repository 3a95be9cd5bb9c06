//! Forward-only read cursor over the input buffer.
//!
//! The cursor is a borrowed view plus an integer position. It only moves
//! forward - the scalar grammar needs no backtracking because first-byte
//! dispatch is unambiguous.

/// Read position within a borrowed input buffer.
///
/// The lifetime `'a` refers to the source buffer - the cursor never
/// copies input, it only walks it.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `input`.
    #[inline]
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    /// Next byte without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Consume one byte.
    #[inline]
    pub fn bump(&mut self) {
        self.pos = (self.pos + 1).min(self.input.len());
    }

    /// Consume `n` bytes, clamped to end of input.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.input.len());
    }

    /// Current position in bytes from the start of the input.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Check whether all input has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Unconsumed remainder of the input.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        &self.input[self.pos..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_and_bump() {
        let mut cur = Cursor::new(b"ab");
        assert_eq!(cur.peek(), Some(b'a'));
        cur.bump();
        assert_eq!(cur.peek(), Some(b'b'));
        cur.bump();
        assert_eq!(cur.peek(), None);
        assert!(cur.is_at_end());
    }

    #[test]
    fn test_advance_clamps_at_end() {
        let mut cur = Cursor::new(b"abc");
        cur.advance(100);
        assert!(cur.is_at_end());
        assert_eq!(cur.pos(), 3);
        assert_eq!(cur.rest(), b"");
    }

    #[test]
    fn test_rest() {
        let mut cur = Cursor::new(b"hello");
        cur.advance(2);
        assert_eq!(cur.rest(), b"llo");
    }

    #[test]
    fn test_empty_input() {
        let cur = Cursor::new(b"");
        assert!(cur.is_at_end());
        assert_eq!(cur.peek(), None);
        assert_eq!(cur.rest(), b"");
    }
}
