use core::cell::UnsafeCell;
use core::marker::PhantomData;
use core::sync::atomic::{AtomicBool, Ordering};

use crate::bkptpanic::BKUnwrap;

/// Single-slot mailbox for task-to-task message hand-off
///
/// Holds at most one in-flight message. A second message posted while the
/// slot is occupied is refused, not queued; the poster keeps it. Both sides
/// poll, neither blocks.
pub struct MSMailslot<M>
{
    slot: UnsafeCell<Option<M>>,
    occupied: AtomicBool
}

// NOTE: safety correctness - the occupied flag serializes slot access:
//       the sender touches the slot only while it observes `false`,
//       the receiver only after it observes `true`, and each flag
//       transition is a release-store paired with the other side's
//       acquire-load.
unsafe impl<M: Send> Sync for MSMailslot<M> {}

impl<M> MSMailslot<M>
{
    /// Creates an empty mailslot.
    pub const fn new() -> MSMailslot<M>
    {
        MSMailslot {
            slot: UnsafeCell::new(None),
            occupied: AtomicBool::new(false)
        }
    }

    /// Gets posting and taking channels.
    /// * Returns a tuple of the sender and receiver pair.
    /// * The halves borrow the mailslot, so at most one sender and one
    ///   receiver exist at a time.
    pub fn ch<'q>(&'q mut self) -> (MSSender<'q, M>, MSReceiver<'q, M>)
    {
        let q = &*self;

        (
            MSSender {
                q,
                phantom: PhantomData
            },
            MSReceiver {
                q,
                phantom: PhantomData
            }
        )
    }
}

//

/// Message posting channel
pub struct MSSender<'q, M>
{
    q: &'q MSMailslot<M>,
    phantom: PhantomData<*mut M> // NOTE: not Sync - single posting side
}

unsafe impl<M: Send> Send for MSSender<'_, M> {}

impl<M> MSSender<'_, M>
{
    /// Gets if the slot can accept a message.
    /// * Returns `true` if the slot is unoccupied at this instant.
    pub fn vacant(&self) -> bool
    {
        !self.q.occupied.load(Ordering::Acquire)
    }

    /// Tries to post a message.
    /// * `msg` - the message to be posted.
    /// * Returns `Ok(())` and transfers ownership of `msg` into the slot
    ///   if it was unoccupied.
    /// * Returns `Err(msg)` if the slot is still occupied; the caller
    ///   keeps `msg` and is expected to discard it.
    /// * Never blocks; a refused message is lost by design, not retried.
    pub fn try_post(&mut self, msg: M) -> Result<(), M>
    {
        if self.q.occupied.load(Ordering::Acquire) {
            return Err(msg);
        }

        // Only this sender may write the slot while the flag is clear;
        // the receiver will not touch it until the release-store below.
        unsafe {
            *self.q.slot.get() = Some(msg);
        }

        self.q.occupied.store(true, Ordering::Release);

        Ok(())
    }
}

//

/// Message taking channel
pub struct MSReceiver<'q, M>
{
    q: &'q MSMailslot<M>,
    phantom: PhantomData<*mut M>
}

unsafe impl<M: Send> Send for MSReceiver<'_, M> {}

impl<M> MSReceiver<'_, M>
{
    /// Gets if there is a message awaiting consumption.
    /// * Returns `true` if the slot is occupied at this instant.
    pub fn available(&self) -> bool
    {
        self.q.occupied.load(Ordering::Acquire)
    }

    /// Tries to take the message.
    /// * Returns the message in `Option`, transferring ownership to the
    ///   caller and clearing the slot.
    /// * Gets `None` if the slot is unoccupied.
    /// * Never blocks.
    pub fn try_take(&mut self) -> Option<M>
    {
        if !self.q.occupied.load(Ordering::Acquire) {
            return None;
        }

        // The flag is still set, so the sender stays away from the slot
        // until the release-store below. occupied implies a payload is
        // present; anything else is a protocol bug.
        let msg = unsafe {
            (*self.q.slot.get()).take().bk_unwrap()
        };

        self.q.occupied.store(false, Ordering::Release);

        Some(msg)
    }
}

//
