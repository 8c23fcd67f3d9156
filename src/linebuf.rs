use alloc::boxed::Box;

use crate::bk_assert;

/// Line buffer capacity in bytes.
/// One slot is reserved for terminator handling, so a payload holds at most
/// `LINE_BUF_LEN - 1` bytes.
pub const LINE_BUF_LEN: usize = 255;

/// Line terminator byte delimiting one message in the input stream.
pub const LINE_TERM: u8 = b'\n';

/// Producer-local bounded line accumulator
///
/// Collects input bytes until a terminator. Bytes past the capacity are
/// silently dropped (truncation, not an error) until the next terminator
/// resets the buffer. The terminator itself is never stored.
pub struct MSLineBuf
{
    buf: [u8; LINE_BUF_LEN],
    len: usize
}

impl MSLineBuf
{
    /// Creates an empty line buffer.
    pub const fn new() -> MSLineBuf
    {
        MSLineBuf {
            buf: [0; LINE_BUF_LEN],
            len: 0
        }
    }

    /// Feeds one input byte.
    /// * `c` - the input byte.
    /// * Returns `true` exactly when `c` is the line terminator, meaning a
    ///   complete line (possibly empty) is ready to `take_line` or `reset`.
    pub fn feed(&mut self, c: u8) -> bool
    {
        if c == LINE_TERM {
            return true;
        }

        if self.len < LINE_BUF_LEN - 1 {
            self.buf[self.len] = c;
            self.len += 1;
        }

        false
    }

    /// Gets the number of bytes accumulated so far.
    pub fn len(&self) -> usize
    {
        self.len
    }

    /// Takes the completed line as an exact-length heap allocation and
    /// resets the buffer.
    /// * Returns the owned payload, terminator excluded, zero-length for an
    ///   empty line.
    /// * Heap exhaustion here is fatal: the allocation error path halts
    ///   rather than delivering a partial message.
    pub fn take_line(&mut self) -> Box<[u8]>
    {
        bk_assert!(self.len < LINE_BUF_LEN);

        let line = Box::from(&self.buf[..self.len]);

        self.len = 0;

        line
    }

    /// Discards the accumulated bytes and resets the buffer.
    pub fn reset(&mut self)
    {
        self.len = 0;
    }
}

//

#[cfg(test)]
mod tests
{
    use super::*;

    fn feed_all(lb: &mut MSLineBuf, bytes: &[u8]) -> bool
    {
        let mut complete = false;
        for c in bytes {
            complete = lb.feed(*c);
        }
        complete
    }

    #[test]
    fn framing_round_trip()
    {
        let mut lb = MSLineBuf::new();

        assert!(feed_all(&mut lb, b"hello\n"));

        let line = lb.take_line();
        assert_eq!(&*line, b"hello");
        assert_eq!(line.len(), 5);
        assert_eq!(lb.len(), 0);
    }

    #[test]
    fn empty_line_is_a_line()
    {
        let mut lb = MSLineBuf::new();

        assert!(lb.feed(LINE_TERM));

        let line = lb.take_line();
        assert_eq!(line.len(), 0);
    }

    #[test]
    fn terminator_not_stored()
    {
        let mut lb = MSLineBuf::new();

        assert!(!lb.feed(b'a'));
        assert!(lb.feed(LINE_TERM));
        assert_eq!(lb.len(), 1);

        assert_eq!(&*lb.take_line(), b"a");
    }

    #[test]
    fn truncates_at_capacity()
    {
        let mut lb = MSLineBuf::new();

        // LINE_BUF_LEN + 5 payload bytes, then the terminator
        for _ in 0..(LINE_BUF_LEN + 5) {
            assert!(!lb.feed(b'x'));
        }
        assert!(lb.feed(LINE_TERM));

        let line = lb.take_line();
        assert_eq!(line.len(), LINE_BUF_LEN - 1);
        assert!(line.iter().all(|c| *c == b'x'));
    }

    #[test]
    fn reset_discards_partial_line()
    {
        let mut lb = MSLineBuf::new();

        feed_all(&mut lb, b"discarded\n");
        lb.reset();

        assert!(feed_all(&mut lb, b"kept\n"));
        assert_eq!(&*lb.take_line(), b"kept");
    }

    #[test]
    fn collects_again_after_take()
    {
        let mut lb = MSLineBuf::new();

        feed_all(&mut lb, b"one\n");
        assert_eq!(&*lb.take_line(), b"one");

        feed_all(&mut lb, b"two\n");
        assert_eq!(&*lb.take_line(), b"two");
    }
}
