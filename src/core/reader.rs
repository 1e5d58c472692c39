use crate::utils::error::Result;
use std::io::{ErrorKind, Read};
use std::time::{Duration, Instant};

/// Collect every line the device sends within `window`.
///
/// Keeps polling until the deadline even after data has arrived. A single
/// port read may overrun the deadline by at most the port's own read timeout.
/// Returns an empty vector when the device stays silent.
pub fn read_available<P: Read + ?Sized>(
    port: &mut P,
    window: Duration,
    poll_interval: Duration,
) -> Result<Vec<String>> {
    let deadline = Instant::now() + window;
    let mut lines = Vec::new();

    while Instant::now() < deadline {
        let raw = read_raw_line(port, deadline)?;
        if raw.is_empty() {
            std::thread::sleep(poll_interval);
            continue;
        }

        let line = String::from_utf8_lossy(&raw).trim_end().to_string();
        tracing::debug!("<- {:?}", line);
        lines.push(line);
    }

    Ok(lines)
}

/// Read bytes up to and including `\n`, until the port reports no data, or
/// until `deadline` passes. A partial line is returned as-is; nothing is
/// carried over to the next call.
fn read_raw_line<P: Read + ?Sized>(port: &mut P, deadline: Instant) -> std::io::Result<Vec<u8>> {
    let mut line = Vec::new();
    let mut byte = [0u8; 1];

    while Instant::now() < deadline {
        match port.read(&mut byte) {
            Ok(0) => break,
            Ok(_) => {
                line.push(byte[0]);
                if byte[0] == b'\n' {
                    break;
                }
            }
            Err(e) if matches!(e.kind(), ErrorKind::TimedOut | ErrorKind::WouldBlock) => break,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(line)
}
