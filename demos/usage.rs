// Runnable on QEMU ARM

#![cfg_attr(target_os = "none", no_main)]
#![cfg_attr(target_os = "none", no_std)]
#![allow(static_mut_refs)]

#[cfg(target_os = "none")]
mod demo
{
    extern crate alloc;

    use alloc::boxed::Box;

    use alloc_cortex_m::CortexMHeap;
    use cortex_m::Peripherals;
    use cortex_m_rt::{entry, exception, heap_start};
    use cortex_m_semihosting::{debug, hio, hprintln};
    use panic_semihosting as _;

    use mailslot_cortex_m::*;

    #[global_allocator]
    static ALLOCATOR: CortexMHeap = CortexMHeap::empty();

    const HEAP_LEN: usize = 1024;

    // The mailslot and the consumer half live in statics so the SysTick
    // exception, which preempts main at any instruction boundary, can drive
    // the printer. The producer stays in thread mode below.
    static mut MAILSLOT: MSMailslot<Box<[u8]>> = MSMailslot::new();
    static mut PRINTER: Option<MSLinePrinter<'static, SemiTx>> = None;

    // Canned input standing in for a serial terminal.
    static SCRIPT: &[u8] = b"hello\n\nthe quick brown fox jumps over the lazy dog\n";

    struct ScriptRx
    {
        pos: usize
    }

    impl MSByteRx for ScriptRx
    {
        fn byte_available(&self) -> bool
        {
            self.pos < SCRIPT.len()
        }

        fn read_byte(&mut self) -> u8
        {
            let c = SCRIPT[self.pos];
            self.pos += 1;
            c
        }
    }

    struct SemiTx
    {
        out: hio::HStdout
    }

    impl SemiTx
    {
        fn stdout() -> SemiTx
        {
            SemiTx {
                out: hio::hstdout().unwrap()
            }
        }
    }

    impl MSByteTx for SemiTx
    {
        fn write(&mut self, bytes: &[u8])
        {
            self.out.write_all(bytes).unwrap();
        }
    }

    #[entry]
    fn main() -> !
    {
        unsafe {
            ALLOCATOR.init(heap_start() as usize, HEAP_LEN);
        }

        let mut banner = SemiTx::stdout();
        banner.write(b"---Mailslot Heap Demo---\n");
        banner.write(b"Enter a string\n");

        let (snd, rcv) = unsafe { MAILSLOT.ch() };

        unsafe {
            PRINTER = Some(MSLinePrinter::new(SemiTx::stdout(), rcv));
        }

        // SysTick settings; the tick preempts the reader loop below
        let cmperi = Peripherals::take().unwrap();
        let mut syst = cmperi.SYST;
        syst.set_clock_source(cortex_m::peripheral::syst::SystClkSource::Core);
        syst.set_reload(100_000);
        syst.clear_current();
        syst.enable_counter();
        syst.enable_interrupt();

        let mut rdr = MSLineReader::new(ScriptRx { pos: 0 }, SemiTx::stdout(), snd);

        // a real deployment calls rdr.run(...), which never returns; the
        // demo polls a bounded number of times so QEMU can exit
        for _ in 0..1_000_000 {
            rdr.poll();
            cortex_m::asm::nop();
        }

        hprintln!("demo done").unwrap();
        debug::exit(debug::EXIT_SUCCESS);

        loop {}
    }

    #[exception]
    fn SysTick()
    {
        if let Some(prt) = unsafe { PRINTER.as_mut() } {
            prt.poll();
        }
    }
}

#[cfg(not(target_os = "none"))]
fn main()
{
    println!("this demo targets bare-metal; build with --target thumbv7m-none-eabi");
}
