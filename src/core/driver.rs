use crate::config::settings::LinkTimings;
use crate::core::reader::read_available;
use crate::utils::error::Result;
use std::io::{Read, Write};

/// Send one command line and collect whatever the device answers within the
/// response window. The command text is opaque here.
pub fn send<P: Read + Write + ?Sized>(
    port: &mut P,
    command: &str,
    timings: &LinkTimings,
) -> Result<Vec<String>> {
    tracing::debug!("-> {:?}", command);

    let mut frame = String::with_capacity(command.len() + 1);
    frame.push_str(command);
    frame.push('\n');

    port.write_all(frame.as_bytes())?;
    port.flush()?;

    read_available(port, timings.response_window, timings.poll_interval)
}
