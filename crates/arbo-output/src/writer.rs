//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, RunSummaryRow, SnapshotRow};

/// Sink for trajectory rows and run summaries.
///
/// Errors are returned to the caller; [`SnapshotObserver`] stores them
/// because observer callbacks have no return value.
///
/// [`SnapshotObserver`]: crate::SnapshotObserver
pub trait OutputWriter {
    fn write_snapshot(&mut self, row: &SnapshotRow) -> OutputResult<()>;

    fn write_run_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

impl<W: OutputWriter + ?Sized> OutputWriter for Box<W> {
    fn write_snapshot(&mut self, row: &SnapshotRow) -> OutputResult<()> {
        (**self).write_snapshot(row)
    }

    fn write_run_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        (**self).write_run_summary(row)
    }

    fn finish(&mut self) -> OutputResult<()> {
        (**self).finish()
    }
}

/// Forwards every row to each writer in turn.
///
/// All writers see every call even after one fails; the first error is
/// returned.
#[derive(Default)]
pub struct Tee {
    writers: Vec<Box<dyn OutputWriter>>,
}

impl Tee {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, writer: impl OutputWriter + 'static) -> Self {
        self.writers.push(Box::new(writer));
        self
    }

    pub fn push(&mut self, writer: impl OutputWriter + 'static) {
        self.writers.push(Box::new(writer));
    }

    pub fn len(&self) -> usize {
        self.writers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writers.is_empty()
    }

    fn each(&mut self, mut f: impl FnMut(&mut dyn OutputWriter) -> OutputResult<()>) -> OutputResult<()> {
        let mut first = Ok(());
        for w in &mut self.writers {
            let result = f(w.as_mut());
            if first.is_ok() {
                first = result;
            }
        }
        first
    }
}

impl OutputWriter for Tee {
    fn write_snapshot(&mut self, row: &SnapshotRow) -> OutputResult<()> {
        self.each(|w| w.write_snapshot(row))
    }

    fn write_run_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        self.each(|w| w.write_run_summary(row))
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.each(|w| w.finish())
    }
}
