#![allow(dead_code)]

use std::collections::VecDeque;
use std::io::{self, ErrorKind, Read, Write};
use std::time::Duration;
use uart_push::{LinkTimings, Port};

/// Simulated firmware on the other end of the UART.
///
/// Emits `boot` once the host flushes its input, then answers each command
/// line with whatever `reply` returns.
pub struct SimulatedDevice {
    pub received: Vec<String>,
    boot: Vec<String>,
    reply: fn(&str) -> Vec<String>,
    rx: VecDeque<u8>,
    line: Vec<u8>,
}

impl SimulatedDevice {
    pub fn new(reply: fn(&str) -> Vec<String>) -> Self {
        Self {
            received: Vec::new(),
            boot: Vec::new(),
            reply,
            rx: VecDeque::new(),
            line: Vec::new(),
        }
    }

    pub fn with_boot(mut self, lines: &[&str]) -> Self {
        self.boot = lines.iter().map(|l| l.to_string()).collect();
        self
    }

    fn emit(&mut self, line: &str) {
        self.rx.extend(line.as_bytes());
        self.rx.extend(b"\r\n");
    }
}

impl Read for SimulatedDevice {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.rx.pop_front() {
            Some(byte) if !buf.is_empty() => {
                buf[0] = byte;
                Ok(1)
            }
            Some(byte) => {
                self.rx.push_front(byte);
                Ok(0)
            }
            None => Err(io::Error::new(ErrorKind::TimedOut, "operation timed out")),
        }
    }
}

impl Write for SimulatedDevice {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for &byte in buf {
            if byte != b'\n' {
                self.line.push(byte);
                continue;
            }
            let command = String::from_utf8_lossy(&self.line).to_string();
            self.line.clear();
            for reply in (self.reply)(&command) {
                self.emit(&reply);
            }
            self.received.push(command);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Port for SimulatedDevice {
    fn clear_input(&mut self) -> uart_push::Result<()> {
        self.rx.clear();
        for line in std::mem::take(&mut self.boot) {
            self.emit(&line);
        }
        Ok(())
    }
}

/// Short windows so a full session finishes in well under a second.
pub fn fast_timings() -> LinkTimings {
    LinkTimings {
        settle: Duration::from_millis(1),
        boot_window: Duration::from_millis(40),
        response_window: Duration::from_millis(30),
        poll_interval: Duration::from_millis(2),
        ..LinkTimings::default()
    }
}
