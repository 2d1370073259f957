//! Shared helpers for CLI unit tests

use crate::cli::OutputFormat;
use crate::output::OutputWriter;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Export with one rule of each interesting shape
pub const SAMPLE_EXPORT: &str = r#"{
    "plugin": { "version": "5.3.10" },
    "redirects": [
        { "id": 1, "match_url": "/about-us", "action_code": 301, "action_data": { "url": "/about" } },
        { "id": 2, "match_url": "/sale", "action_code": 302, "action_data": { "url": "/shop" } },
        { "id": 3, "match_url": "", "action_code": 307, "action_data": {} }
    ]
}"#;

/// In-memory writer whose contents stay readable after it is boxed
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Uncolored writer capturing everything it prints
pub fn capture(format: OutputFormat) -> (OutputWriter, SharedBuffer) {
    let buffer = SharedBuffer::default();
    let writer = OutputWriter::with_writer(format, false, false, 0, Box::new(buffer.clone()));
    (writer, buffer)
}

/// Write `content` to `name` inside `dir`
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}
