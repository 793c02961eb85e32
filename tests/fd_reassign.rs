#![cfg(target_os = "linux")]

// Lives in its own test binary so no other test opens descriptors meanwhile.

use std::fs;
use std::path::Path;

use tempfile::tempdir;
use teelog::{Logger, PrintStream};

fn open_fds() -> usize {
    fs::read_dir("/proc/self/fd").unwrap().count()
}

#[test]
fn reassigning_file_does_not_leak_descriptors() {
    let temp = tempdir().unwrap();
    let path_for = |i: usize| temp.path().join(format!("log-{}.log", i % 3));
    let as_string = |p: &Path| p.to_string_lossy().into_owned();

    let baseline = open_fds();

    let mut logger = Logger::with_file(as_string(&path_for(0))).unwrap();
    logger.set_print_stream(PrintStream::Null);
    assert_eq!(open_fds(), baseline + 1);

    for i in 1..=200 {
        logger.set_file(as_string(&path_for(i))).unwrap();
        logger.info(format_args!("reassignment {}", i));
        assert_eq!(open_fds(), baseline + 1);
    }

    logger.set_file("").unwrap();
    assert_eq!(open_fds(), baseline);

    logger.set_file(as_string(&path_for(7))).unwrap();
    drop(logger);
    assert_eq!(open_fds(), baseline);
}
