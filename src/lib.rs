/*!
This crate for Rust provides a minimal single-slot mailbox `MSMailslot` for lossy
line hand-off between two tasks on Cortex-M microcontrollers.

# Target

Systems of

* Cortex-M0 / M0+ / M1  (`thumbv6m-none-eabi`)
* Cortex-M3  (`thumbv7m-none-eabi`)
* Cortex-M4 / M7  (`thumbv7em-none-eabi`)
* Cortex-M4 / M7 with FPU  (`thumbv7em-none-eabihf`)
* Cortex-M23  (`thumbv8m.base-none-eabi`)
* Cortex-M33 / M35P  (`thumbv8m.main-none-eabi`)

The mailbox uses atomic load/store only (no compare-and-swap), so it also works
on `thumbv6m` and across cores of a multi-core part.

# Features

* Single-slot mailbox
  * `MSMailslot` holds at most one in-flight message and splits into an
    `MSSender`/`MSReceiver` pair, one half per task.
  * `try_post` and `try_take` are single-attempt polls. Nothing blocks and
    nothing is queued: a line completed while the slot is occupied is dropped,
    by design.
  * Ownership of the heap payload moves poster, to slot, to taker; the taker
    releases it by dropping. No copy happens at hand-off.
* Line accumulation
  * `MSLineBuf` collects input bytes up to a terminator into a bounded buffer,
    truncating overlong lines silently, and emits each finished line as an
    exact-length allocation.
* Tasks
  * `MSLineReader` (producer) echoes and accumulates serial input and posts
    finished lines.
  * `MSLinePrinter` (consumer) takes lines and writes them out.
  * Both expose `poll` for one iteration and `run` for the perpetual loop;
    `run` calls a caller-supplied `relax` hook every iteration as the
    scheduler cooperation point.
* External collaborators
  * Serial I/O enters through the `MSByteRx`/`MSByteTx` traits.
  * Scheduling is up to the host: run the two tasks preemptively at *equal*
    priority (neither side ever yields voluntarily, so a higher-priority
    spinner would starve the other and wedge the hand-off).

# Error policy

Two arms only, nothing in between:

* Silent loss - overlong input is truncated, and a line finished while the
  slot is occupied is discarded whole.
* Fatal halt - heap exhaustion while materializing a line, or a broken
  hand-off invariant, halts (panic in debug builds, breakpoint loop in
  release builds).

# Examples
## Usage Outline

```ignore
// Build-only example

#![no_main]
#![no_std]

use cortex_m_rt::entry;
use panic_semihosting as _;

use mailslot_cortex_m::*;

use alloc::boxed::Box;

// other codes... (global allocator, serial port bring-up)

static mut MAILSLOT: MSMailslot<Box<[u8]>> = MSMailslot::new();

#[entry]
fn main() -> ! {
    let (snd, rcv) = unsafe { MAILSLOT.ch() };

    let uart_rx = /* MSByteRx impl */;
    let uart_tx = /* MSByteTx impl */;

    // hand each task to the scheduler with the same priority
    scheduler_spawn(|| MSLineReader::new(uart_rx, uart_tx, snd).run(|| yield_now()));
    scheduler_spawn(|| MSLinePrinter::new(uart_tx, rcv).run(|| yield_now()));

    scheduler_run()
}
```

## Other Examples

A QEMU-runnable demo, with the printer driven from the `SysTick` exception so
the hand-off crosses a real preemption boundary, is at `demos/usage.rs`.
*/

#![no_std]

extern crate alloc;

#[cfg(test)]
#[macro_use]
extern crate std;

mod bkptpanic;
mod linebuf;
mod mailslot;
mod printer;
mod reader;
mod stream;

pub use crate::linebuf::{MSLineBuf, LINE_BUF_LEN, LINE_TERM};
pub use crate::mailslot::{MSMailslot, MSReceiver, MSSender};
pub use crate::printer::MSLinePrinter;
pub use crate::reader::MSLineReader;
pub use crate::stream::{MSByteRx, MSByteTx};
