//! TestSink for capturing handler output in tests
//!
//! Hand a clone to a handler as its resource and assert on the original.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use strip_ansi_escapes::strip;

/// A cloneable in-memory sink
///
/// All clones share one buffer. Output can be read raw (with ANSI codes) or
/// stripped.
#[derive(Clone, Default)]
pub struct TestSink {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl TestSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn bytes(&self) -> Vec<u8> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Get all captured lines (ANSI codes stripped)
    #[must_use]
    pub fn output(&self) -> Vec<String> {
        String::from_utf8_lossy(&strip(self.bytes()))
            .lines()
            .map(String::from)
            .collect()
    }

    /// Get all captured lines (with ANSI codes)
    #[must_use]
    pub fn raw_output(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.bytes())
            .lines()
            .map(String::from)
            .collect()
    }

    /// Get output as a single string (ANSI codes stripped)
    #[must_use]
    pub fn output_string(&self) -> String {
        self.output().join("\n")
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }

    /// Check if output contains a string (case-sensitive)
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.output_string().contains(needle)
    }

    /// Check if output matches a regex pattern
    #[must_use]
    pub fn matches(&self, pattern: &str) -> bool {
        match regex::Regex::new(pattern) {
            Ok(re) => re.is_match(&self.output_string()),
            Err(_) => false,
        }
    }

    /// Assert that output contains a string
    ///
    /// # Panics
    ///
    /// Panics if the output does not contain the needle string.
    pub fn assert_contains(&self, needle: &str) {
        assert!(
            self.contains(needle),
            "Output did not contain '{}'. Actual output:\n{}",
            needle,
            self.output_string()
        );
    }

    /// Assert that output does NOT contain a string
    ///
    /// # Panics
    ///
    /// Panics if the output contains the needle string.
    pub fn assert_not_contains(&self, needle: &str) {
        assert!(
            !self.contains(needle),
            "Output unexpectedly contained '{}'. Actual output:\n{}",
            needle,
            self.output_string()
        );
    }

    /// Assert output has specific number of lines
    ///
    /// # Panics
    ///
    /// Panics if the line count doesn't match expected.
    pub fn assert_line_count(&self, expected: usize) {
        let actual = self.output().len();
        assert_eq!(
            actual,
            expected,
            "Expected {} lines but got {}. Actual output:\n{}",
            expected,
            actual,
            self.output_string()
        );
    }

    /// Clear the buffer
    pub fn clear(&self) {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Write for TestSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl std::fmt::Debug for TestSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestSink")
            .field("line_count", &self.output().len())
            .finish()
    }
}
