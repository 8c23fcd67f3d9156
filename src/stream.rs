/// Byte input stream collaborator (a UART-like receive side)
///
/// The producer task polls both methods every loop iteration and never
/// blocks on either.
pub trait MSByteRx
{
    /// Gets if at least one byte can be read without blocking.
    fn byte_available(&self) -> bool;

    /// Reads one byte.
    /// * Only called after `byte_available` returned `true`.
    fn read_byte(&mut self) -> u8;
}

/// Byte output stream collaborator (a UART-like transmit side)
pub trait MSByteTx
{
    /// Writes the bytes out.
    fn write(&mut self, bytes: &[u8]);
}

//
