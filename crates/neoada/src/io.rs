//! Output plumbing for the `print` addon procedure.
//!
//! A trait rather than a hardcoded `println!` so embedders can capture or suppress output,
//! and so tests can assert on exactly what a script printed.

use std::cell::RefCell;
use std::io::{self, Write as _};

/// Receives the text produced by `print`/`println`. Implementations only need to worry about
/// writing; argument separators and the trailing newline are the caller's job.
pub trait PrintWriter {
    fn write_str(&mut self, text: &str);
    fn write_newline(&mut self) {
        self.write_str("\n");
    }
}

/// Writes to process stdout through a small thread-local buffer, flushed on `Drop`. Buffering
/// keeps a run's stdout contiguous even when interleaved with `tracing` output on stderr.
#[derive(Debug, Default)]
pub struct StdPrint;

thread_local! {
    static STDOUT_BUFFER: RefCell<String> = const { RefCell::new(String::new()) };
}

impl PrintWriter for StdPrint {
    fn write_str(&mut self, text: &str) {
        STDOUT_BUFFER.with(|buffer| buffer.borrow_mut().push_str(text));
    }
}

impl Drop for StdPrint {
    fn drop(&mut self) {
        STDOUT_BUFFER.with(|buffer| {
            let mut buffer = buffer.borrow_mut();
            if buffer.is_empty() {
                return;
            }
            let _ = io::stdout().write_all(buffer.as_bytes());
            let _ = io::stdout().flush();
            buffer.clear();
        });
    }
}

/// Collects output into an owned `String`. Used by tests and by embedders who want the
/// script's output as a value rather than on a stream.
#[derive(Debug, Default)]
pub struct CollectStringPrint(String);

impl CollectStringPrint {
    #[must_use]
    pub fn new() -> Self {
        Self(String::new())
    }

    #[must_use]
    pub fn output(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_output(self) -> String {
        self.0
    }
}

impl PrintWriter for CollectStringPrint {
    fn write_str(&mut self, text: &str) {
        self.0.push_str(text);
    }
}

/// Discards everything written to it.
#[derive(Debug, Default)]
pub struct NoPrint;

impl PrintWriter for NoPrint {
    fn write_str(&mut self, _text: &str) {}
}

#[cfg(test)]
mod tests {
    use super::{CollectStringPrint, NoPrint, PrintWriter};

    #[test]
    fn collects_written_text() {
        let mut writer = CollectStringPrint::new();
        writer.write_str("hello");
        writer.write_newline();
        assert_eq!(writer.output(), "hello\n");
    }

    #[test]
    fn no_print_discards_everything() {
        let mut writer = NoPrint;
        writer.write_str("anything");
    }
}
