use std::fmt::Display;
use std::io::Write;

/// Tagged operator report (`[INFO]`, `[ESP]`, ...).
///
/// Write failures on the report stream are logged and otherwise ignored; they
/// never abort a session that is already talking to the device.
pub struct Console<W: Write> {
    out: W,
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn info(&mut self, message: impl Display) {
        self.tagged("INFO", message);
    }

    pub fn warn(&mut self, message: impl Display) {
        self.tagged("WARN", message);
    }

    pub fn esp(&mut self, message: impl Display) {
        self.tagged("ESP", message);
    }

    pub fn send(&mut self, message: impl Display) {
        self.tagged("SEND", message);
    }

    pub fn done(&mut self, message: impl Display) {
        self.tagged("DONE", message);
    }

    /// Untagged, indented continuation line.
    pub fn detail(&mut self, message: impl Display) {
        self.emit(format_args!("  {}", message));
    }

    fn tagged(&mut self, tag: &str, message: impl Display) {
        self.emit(format_args!("[{}] {}", tag, message));
    }

    fn emit(&mut self, line: std::fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{}", line).and_then(|_| self.out.flush()) {
            tracing::debug!("Report write failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_and_detail() {
        let mut out = Vec::new();
        {
            let mut console = Console::new(&mut out);
            console.info("BEGIN");
            console.esp("(boot/log)");
            console.detail("ets Jun  8 2016");
            console.warn("no response");
            console.done("OK=1 ERR=0");
        }
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "[INFO] BEGIN\n[ESP] (boot/log)\n  ets Jun  8 2016\n[WARN] no response\n[DONE] OK=1 ERR=0\n"
        );
    }
}
