// Copyright (c) 2025 Sean McNamara <smcnam@gmail.com>
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The sink that owns the log file and the per-call writer it hands out.
//!
//! A [`Logger`] owns at most one append-mode file plus a [`PrintStream`]
//! mirror (stdout unless told otherwise). Every call writes
//!
//! ```text
//! 2024-05-01T12:34:56Z INFO (src/main.rs: 42) value=42
//! ```
//!
//! to the print stream and then, if one is open, to the file.
//!
//! # Concurrency
//!
//! Writes take `&mut self`, so sharing a logger between threads needs a lock
//! such as `Arc<Mutex<Logger>>`. Holding the lock for the call keeps each line
//! whole; nothing else orders writers.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::str::FromStr;

use crate::call_site::CallSite;
use crate::error::{LogError, Result};
use crate::severity::Severity;
use crate::timestamp;

/// Console mirror for log lines.
///
/// `Stdout` and `Stderr` are process handles and are never closed by the
/// logger. `Writer` holds any caller-supplied sink, e.g. a test buffer.
#[derive(Default)]
pub enum PrintStream {
    #[default]
    Stdout,
    Stderr,
    Null,
    Writer(Box<dyn Write + Send>),
}

impl PrintStream {
    pub fn writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self::Writer(Box::new(writer))
    }
}

impl Write for PrintStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout => io::stdout().write(buf),
            Self::Stderr => io::stderr().write(buf),
            Self::Null => Ok(buf.len()),
            Self::Writer(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout => io::stdout().flush(),
            Self::Stderr => io::stderr().flush(),
            Self::Null => Ok(()),
            Self::Writer(w) => w.flush(),
        }
    }
}

impl FromStr for PrintStream {
    type Err = LogError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stdout" => Ok(Self::Stdout),
            "stderr" => Ok(Self::Stderr),
            "null" => Ok(Self::Null),
            _ => Err(LogError::UnknownPrintStream(s.to_string())),
        }
    }
}

impl fmt::Debug for PrintStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("Stdout"),
            Self::Stderr => f.write_str("Stderr"),
            Self::Null => f.write_str("Null"),
            Self::Writer(_) => f.write_str("Writer(..)"),
        }
    }
}

/// Dual-sink logger: print stream plus optional append-mode file.
#[derive(Debug, Default)]
pub struct Logger {
    file_path: String,
    file: Option<File>,
    print: PrintStream,
}

impl Logger {
    /// Logger that only writes to stdout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Logger that also appends to `path`. An empty path disables the file.
    ///
    /// # Errors
    ///
    /// [`LogError::FileOpen`] if the file cannot be opened for append.
    pub fn with_file(path: impl Into<String>) -> Result<Self> {
        let mut logger = Self::new();
        logger.set_file(path)?;
        Ok(logger)
    }

    /// Retargets the log file.
    ///
    /// Any open file is closed first. An empty path leaves only the print
    /// stream active. On failure the new path is still recorded but no file
    /// is open, so [`has_file`](Self::has_file) reports `false`.
    ///
    /// # Errors
    ///
    /// [`LogError::FileOpen`] if the new file cannot be opened for append.
    pub fn set_file(&mut self, path: impl Into<String>) -> Result<()> {
        self.close_file();
        self.file_path = path.into();

        if !self.file_path.is_empty() {
            self.file = Some(open_append(&self.file_path)?);
        }
        Ok(())
    }

    /// The configured log file path, empty when file logging is disabled.
    pub fn file(&self) -> &str {
        &self.file_path
    }

    pub fn has_file(&self) -> bool {
        self.file.is_some()
    }

    /// Replaces the console mirror and returns the previous one.
    pub fn set_print_stream(&mut self, stream: PrintStream) -> PrintStream {
        std::mem::replace(&mut self.print, stream)
    }

    /// Writer tagged with the location of the caller.
    #[track_caller]
    pub fn writer(&mut self) -> LogWriter<'_> {
        self.writer_at(CallSite::caller())
    }

    pub fn writer_at(&mut self, site: CallSite) -> LogWriter<'_> {
        LogWriter { sink: self, site }
    }

    #[track_caller]
    pub fn debug(&mut self, args: fmt::Arguments<'_>) {
        self.log(Severity::Debug, CallSite::caller(), args);
    }

    #[track_caller]
    pub fn info(&mut self, args: fmt::Arguments<'_>) {
        self.log(Severity::Info, CallSite::caller(), args);
    }

    #[track_caller]
    pub fn error(&mut self, args: fmt::Arguments<'_>) {
        self.log(Severity::Error, CallSite::caller(), args);
    }

    /// Writes one line to the print stream, then to the file if open.
    ///
    /// Write failures are ignored; a failing print stream does not stop the
    /// file write.
    pub fn log(&mut self, severity: Severity, site: CallSite, args: fmt::Arguments<'_>) {
        let stamp = timestamp::now_utc();

        let _ = write_line(&mut self.print, &stamp, severity, site, args);
        if let Some(file) = self.file.as_mut() {
            let _ = write_line(file, &stamp, severity, site, args);
        }
    }

    fn close_file(&mut self) {
        // Dropping the handle closes it.
        if let Some(mut file) = self.file.take() {
            let _ = file.flush();
        }
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.close_file();
    }
}

/// One logging call bound to a call site.
///
/// Only [`Logger::writer`] and [`Logger::writer_at`] create these. The writer
/// borrows its logger mutably, so the logger cannot be retargeted while the
/// writer exists, and each severity method consumes the writer.
///
/// ```
/// use teelog::{Logger, PrintStream};
///
/// let mut logger = Logger::new();
/// logger.set_print_stream(PrintStream::Null);
/// logger.writer().info(format_args!("value={}", 42));
/// logger.set_file("").unwrap();
/// ```
///
/// Writers cannot be assembled by hand:
///
/// ```compile_fail
/// use teelog::{CallSite, LogWriter, Logger};
///
/// let mut logger = Logger::new();
/// let writer = LogWriter { sink: &mut logger, site: CallSite::new("main.rs", 1) };
/// writer.info(format_args!("forged"));
/// ```
///
/// Nor kept across a change of log file:
///
/// ```compile_fail
/// use teelog::Logger;
///
/// let mut logger = Logger::new();
/// let writer = logger.writer();
/// logger.set_file("").unwrap();
/// writer.info(format_args!("stale"));
/// ```
pub struct LogWriter<'a> {
    sink: &'a mut Logger,
    site: CallSite,
}

impl LogWriter<'_> {
    pub fn site(&self) -> CallSite {
        self.site
    }

    pub fn debug(self, args: fmt::Arguments<'_>) {
        self.sink.log(Severity::Debug, self.site, args);
    }

    pub fn info(self, args: fmt::Arguments<'_>) {
        self.sink.log(Severity::Info, self.site, args);
    }

    pub fn error(self, args: fmt::Arguments<'_>) {
        self.sink.log(Severity::Error, self.site, args);
    }
}

fn open_append(path: &str) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LogError::FileOpen {
            path: path.to_string(),
            source,
        })
}

fn write_line<W: Write + ?Sized>(
    out: &mut W,
    stamp: &str,
    severity: Severity,
    site: CallSite,
    args: fmt::Arguments<'_>,
) -> io::Result<()> {
    writeln!(out, "{} {} ({}) {}", stamp, severity, site, args)?;
    out.flush()
}
