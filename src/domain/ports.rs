use crate::utils::error::Result;
use serialport::{ClearBuffer, SerialPort};
use std::io::{Read, Write};

/// A byte-stream link to the device.
///
/// `read` is expected to give up after the link's own per-read timeout,
/// reporting `TimedOut`/`WouldBlock` or `Ok(0)` when nothing arrived.
pub trait Port: Read + Write {
    /// Discard bytes already queued on the input side.
    fn clear_input(&mut self) -> Result<()>;
}

impl Port for Box<dyn SerialPort> {
    fn clear_input(&mut self) -> Result<()> {
        self.clear(ClearBuffer::Input)?;
        Ok(())
    }
}

impl<P: Port + ?Sized> Port for &mut P {
    fn clear_input(&mut self) -> Result<()> {
        (**self).clear_input()
    }
}
