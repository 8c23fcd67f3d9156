use alloc::boxed::Box;

use crate::linebuf::LINE_TERM;
use crate::mailslot::MSReceiver;
use crate::stream::MSByteTx;

/// Line printer (consumer) task
///
/// Polls the mailslot; when a line is in flight it takes ownership, writes
/// the payload followed by one line terminator to the output stream, and
/// releases the allocation by letting it drop. There is no error path in
/// steady state.
pub struct MSLinePrinter<'q, T>
{
    tx: T,
    rcv: MSReceiver<'q, Box<[u8]>>
}

impl<'q, T> MSLinePrinter<'q, T>
where T: MSByteTx
{
    /// Creates the printer task state.
    /// * `tx` - output byte stream.
    /// * `rcv` - taking half of the mailslot.
    pub fn new(tx: T, rcv: MSReceiver<'q, Box<[u8]>>) -> MSLinePrinter<'q, T>
    {
        MSLinePrinter {
            tx,
            rcv
        }
    }

    /// Performs one poll iteration: at most one line is printed.
    /// * Never blocks; does nothing if the slot is unoccupied.
    pub fn poll(&mut self)
    {
        if let Some(line) = self.rcv.try_take() {
            self.tx.write(&line);
            self.tx.write(&[LINE_TERM]);
        } // line dropped here, releasing the payload
    }

    /// Runs the task loop forever.
    /// * `relax` - scheduler cooperation point invoked every iteration.
    pub fn run<Y>(mut self, mut relax: Y) -> !
    where Y: FnMut()
    {
        loop {
            self.poll();
            relax();
        }
    }
}

//

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::mailslot::MSMailslot;
    use crate::stream::testing::CaptureTx;

    #[test]
    fn prints_and_clears()
    {
        let mut q = MSMailslot::new();
        let (mut snd, rcv) = q.ch();

        let mut prt = MSLinePrinter::new(CaptureTx::new(), rcv);

        snd.try_post(Box::from(&b"hello"[..])).unwrap();
        prt.poll();

        assert_eq!(&prt.tx.written, b"hello\n");

        // slot cleared, poster may immediately reuse it
        assert!(snd.vacant());
        snd.try_post(Box::from(&b"again"[..])).unwrap();
        prt.poll();

        assert_eq!(&prt.tx.written, b"hello\nagain\n");
    }

    #[test]
    fn idle_poll_writes_nothing()
    {
        let mut q = MSMailslot::<Box<[u8]>>::new();
        let (_snd, rcv) = q.ch();

        let mut prt = MSLinePrinter::new(CaptureTx::new(), rcv);
        prt.poll();
        prt.poll();

        assert!(prt.tx.written.is_empty());
    }

    #[test]
    fn empty_line_prints_empty()
    {
        let mut q = MSMailslot::new();
        let (mut snd, rcv) = q.ch();

        let mut prt = MSLinePrinter::new(CaptureTx::new(), rcv);

        snd.try_post(Box::from(&b""[..])).unwrap();
        prt.poll();

        assert_eq!(&prt.tx.written, b"\n");
    }
}
