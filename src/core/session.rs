use crate::config::settings::LinkTimings;
use crate::core::console::Console;
use crate::core::driver;
use crate::core::reader::read_available;
use crate::domain::model::{Command, ConfigEntry, SessionTally};
use crate::domain::ports::Port;
use crate::utils::error::Result;
use std::io::Write;

/// One provisioning pass over an open port:
/// settle, drain boot output, `BEGIN`, `SET`*, `COMMIT`, close.
///
/// The session owns the port. Dropping the session, on success or on any
/// error, closes it.
pub struct PushSession<P: Port, W: Write> {
    port: P,
    timings: LinkTimings,
    console: Console<W>,
}

impl<P: Port, W: Write> PushSession<P, W> {
    /// Wait for the link to settle and discard whatever was queued before we
    /// started listening.
    pub fn start(mut port: P, timings: LinkTimings, console: Console<W>) -> Result<Self> {
        std::thread::sleep(timings.settle);
        port.clear_input()?;
        Ok(Self {
            port,
            timings,
            console,
        })
    }

    /// Capture unprompted boot/log output. Only the tail is shown.
    pub fn drain_boot(&mut self) -> Result<Vec<String>> {
        let boot = read_available(
            &mut self.port,
            self.timings.boot_window,
            self.timings.poll_interval,
        )?;

        if !boot.is_empty() {
            tracing::debug!("Captured {} boot lines", boot.len());
            self.console.esp("(boot/log)");
            let skip = boot.len().saturating_sub(self.timings.boot_tail_lines);
            for line in &boot[skip..] {
                self.console.detail(line);
            }
        }
        Ok(boot)
    }

    pub fn begin(&mut self) -> Result<Vec<String>> {
        self.console.info("BEGIN");
        self.exchange(&Command::Begin)
    }

    /// Push every entry in file order and return the acknowledgement tally.
    pub fn push_entries(&mut self, entries: &[ConfigEntry]) -> Result<SessionTally> {
        let mut tally = SessionTally::default();
        for entry in entries {
            tally += self.push_entry(entry)?;
        }
        tracing::info!("Pushed {} entries: {}", entries.len(), tally);
        Ok(tally)
    }

    /// Send one `SET`. A silent device is reported but not counted.
    pub fn push_entry(&mut self, entry: &ConfigEntry) -> Result<SessionTally> {
        let command = Command::set(entry);
        self.console.send(&command);

        let reply = driver::send(&mut self.port, &command.to_string(), &self.timings)?;
        if reply.is_empty() {
            tracing::warn!("No response to SET {}", entry.key);
            self.console.warn("no response");
            return Ok(SessionTally::default());
        }

        for line in &reply {
            self.console.esp(line);
        }
        Ok(SessionTally::from_reply(&reply))
    }

    pub fn commit(&mut self) -> Result<Vec<String>> {
        self.console.info("COMMIT");
        self.exchange(&Command::Commit)
    }

    /// Release the port, then report the final tally.
    pub fn close(self, tally: SessionTally) {
        let Self {
            port, mut console, ..
        } = self;
        drop(port);
        tracing::debug!("Port closed");
        console.done(tally);
    }

    fn exchange(&mut self, command: &Command) -> Result<Vec<String>> {
        let reply = driver::send(&mut self.port, &command.to_string(), &self.timings)?;
        for line in &reply {
            self.console.esp(line);
        }
        Ok(reply)
    }
}

/// Run a full session on an already opened port.
pub fn run_session<P: Port, W: Write>(
    port: P,
    entries: &[ConfigEntry],
    timings: LinkTimings,
    out: W,
) -> Result<SessionTally> {
    let mut session = PushSession::start(port, timings, Console::new(out))?;

    session.drain_boot()?;
    session.begin()?;
    let tally = session.push_entries(entries)?;
    session.commit()?;
    session.close(tally);

    Ok(tally)
}
