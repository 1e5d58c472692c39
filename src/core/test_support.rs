use crate::domain::ports::Port;
use crate::utils::error::Result;
use std::collections::VecDeque;
use std::io::{self, ErrorKind, Read, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortEvent {
    Write,
    Flush,
    Read,
    Clear,
}

type Responder = Box<dyn FnMut(&str) -> Vec<String>>;

/// In-memory port that answers each written command line through a responder.
pub struct ScriptedPort {
    pub written: Vec<u8>,
    pub events: Vec<PortEvent>,
    inbound: VecDeque<u8>,
    after_clear: Vec<u8>,
    pending: Vec<u8>,
    responder: Responder,
    read_error: Option<ErrorKind>,
    write_error: Option<ErrorKind>,
}

impl ScriptedPort {
    pub fn silent() -> Self {
        Self::responding(|_| Vec::new())
    }

    pub fn responding(responder: impl FnMut(&str) -> Vec<String> + 'static) -> Self {
        Self {
            written: Vec::new(),
            events: Vec::new(),
            inbound: VecDeque::new(),
            after_clear: Vec::new(),
            pending: Vec::new(),
            responder: Box::new(responder),
            read_error: None,
            write_error: None,
        }
    }

    pub fn queue_inbound(&mut self, bytes: &[u8]) {
        self.inbound.extend(bytes);
    }

    /// Bytes the device emits once the host has flushed its input buffer.
    pub fn emit_after_clear(&mut self, bytes: &[u8]) {
        self.after_clear.extend_from_slice(bytes);
    }

    pub fn fail_reads(&mut self, kind: ErrorKind) {
        self.read_error = Some(kind);
    }

    pub fn fail_writes(&mut self, kind: ErrorKind) {
        self.write_error = Some(kind);
    }
}

impl Read for ScriptedPort {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.events.push(PortEvent::Read);
        if let Some(kind) = self.read_error {
            return Err(io::Error::new(kind, "scripted read failure"));
        }
        if self.inbound.is_empty() {
            return Err(io::Error::new(ErrorKind::TimedOut, "no data"));
        }
        let n = buf.len().min(self.inbound.len());
        for slot in buf.iter_mut().take(n) {
            *slot = self.inbound.pop_front().unwrap_or_default();
        }
        Ok(n)
    }
}

impl Write for ScriptedPort {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Some(kind) = self.write_error {
            return Err(io::Error::new(kind, "scripted write failure"));
        }
        self.events.push(PortEvent::Write);
        self.written.extend_from_slice(buf);

        for &byte in buf {
            if byte == b'\n' {
                let command = String::from_utf8_lossy(&self.pending).to_string();
                self.pending.clear();
                for line in (self.responder)(&command) {
                    self.inbound.extend(line.as_bytes());
                    self.inbound.extend(b"\r\n");
                }
            } else {
                self.pending.push(byte);
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.events.push(PortEvent::Flush);
        Ok(())
    }
}

impl Port for ScriptedPort {
    fn clear_input(&mut self) -> Result<()> {
        self.events.push(PortEvent::Clear);
        self.inbound.clear();
        let boot = std::mem::take(&mut self.after_clear);
        self.inbound.extend(boot);
        Ok(())
    }
}
