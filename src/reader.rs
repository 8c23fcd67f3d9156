use alloc::boxed::Box;

use crate::linebuf::MSLineBuf;
use crate::mailslot::MSSender;
use crate::stream::{MSByteRx, MSByteTx};

/// Line reader (producer) task
///
/// Accumulates input bytes into a line buffer, echoing each byte, and on a
/// line terminator posts the completed line into the mailslot as an owned
/// exact-length allocation. A line completed while the slot is still
/// occupied is discarded whole; the consumer cadence decides throughput,
/// not backpressure.
pub struct MSLineReader<'q, R, E>
{
    rx: R,
    echo: E,
    lbuf: MSLineBuf,
    snd: MSSender<'q, Box<[u8]>>
}

impl<'q, R, E> MSLineReader<'q, R, E>
where R: MSByteRx, E: MSByteTx
{
    /// Creates the reader task state.
    /// * `rx` - input byte stream.
    /// * `echo` - output stream for the diagnostic echo.
    /// * `snd` - posting half of the mailslot.
    pub fn new(rx: R, echo: E, snd: MSSender<'q, Box<[u8]>>) -> MSLineReader<'q, R, E>
    {
        MSLineReader {
            rx,
            echo,
            lbuf: MSLineBuf::new(),
            snd
        }
    }

    /// Performs one poll iteration: at most one input byte is consumed.
    /// * Never blocks; does nothing if no byte is available.
    pub fn poll(&mut self)
    {
        if !self.rx.byte_available() {
            return;
        }

        let c = self.rx.read_byte();

        self.echo.write(&[c]);

        if self.lbuf.feed(c) {
            if self.snd.vacant() {
                // allocate only once the slot is known to be free,
                // exact length, terminator excluded
                let line = self.lbuf.take_line();
                let _ = self.snd.try_post(line);
            }
            else {
                // consumer still busy: the whole line is lost by design
                self.lbuf.reset();
            }
        }
    }

    /// Runs the task loop forever.
    /// * `relax` - scheduler cooperation point invoked every iteration
    ///   (a yield, a `nop`, or a minimal delay); the loop itself never
    ///   blocks or terminates.
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
