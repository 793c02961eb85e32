use std::fs;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use tempfile::tempdir;
use teelog::{LogError, Logger, PrintStream, log_error, log_info};

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn info_reaches_file_and_print_stream() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("out.log");
    let buf = SharedBuf::default();

    let mut logger = Logger::with_file(path.to_string_lossy()).unwrap();
    logger.set_print_stream(PrintStream::writer(buf.clone()));
    let line_no = line!() + 1;
    log_info!(logger, "value={}", 42);
    drop(logger);

    let file = fs::read_to_string(&path).unwrap();
    assert_eq!(file.lines().count(), 1);
    assert!(file.ends_with(&format!(" INFO ({}: {}) value=42\n", file!(), line_no)));
    assert_eq!(buf.contents(), file);
}

#[test]
fn console_only_creates_no_file() {
    let temp = tempdir().unwrap();
    let buf = SharedBuf::default();

    let mut logger = Logger::new();
    logger.set_print_stream(PrintStream::writer(buf.clone()));
    log_error!(logger, "code={} msg={}", 500, "bad");

    assert_eq!(logger.file(), "");
    assert!(buf.contents().ends_with(") code=500 msg=bad\n"));
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn empty_path_is_console_only() {
    let logger = Logger::with_file("").unwrap();
    assert_eq!(logger.file(), "");
    assert!(!logger.has_file());
}

#[test]
fn unwritable_path_is_file_open_error() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("no-such-dir").join("out.log");

    match Logger::with_file(path.to_string_lossy()) {
        Err(LogError::FileOpen { path: failed, source }) => {
            assert_eq!(failed, path.to_string_lossy());
            assert_eq!(source.kind(), io::ErrorKind::NotFound);
        }
        other => panic!("expected FileOpen, got: {:?}", other.map(|_| ())),
    }
}

#[test]
fn timestamps_differ_one_second_apart() {
    let buf = SharedBuf::default();
    let mut logger = Logger::new();
    logger.set_print_stream(PrintStream::writer(buf.clone()));

    log_info!(logger, "first");
    thread::sleep(Duration::from_millis(1100));
    log_info!(logger, "second");

    let out = buf.contents();
    let stamps: Vec<&str> = out.lines().map(|line| &line[..20]).collect();
    assert_eq!(stamps.len(), 2);
    assert_ne!(stamps[0], stamps[1]);
}

#[test]
fn shared_logger_keeps_lines_whole() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("threads.log");
    let mut logger = Logger::with_file(path.to_string_lossy()).unwrap();
    logger.set_print_stream(PrintStream::Null);
    let logger = Arc::new(Mutex::new(logger));

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..50 {
                    let mut guard = logger.lock().unwrap();
                    log_info!(guard, "worker={} i={} end", worker, i);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    drop(logger);

    let file = fs::read_to_string(&path).unwrap();
    assert_eq!(file.lines().count(), 200);
    assert!(file.lines().all(|line| line.contains(" INFO (") && line.ends_with(" end")));
}
