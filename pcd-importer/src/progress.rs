/// Receiver for coarse progress of a long-running import.
pub trait ProgressReporter {
    fn begin(&mut self, total: u64);
    fn update(&mut self, current: u64);
    fn end(&mut self);
}

pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn begin(&mut self, _total: u64) {}
    fn update(&mut self, _current: u64) {}
    fn end(&mut self) {}
}

/// Calls `begin` on creation and `end` when dropped, whichever way the
/// enclosing scope is left.
pub struct ProgressScope<'a> {
    reporter: &'a mut dyn ProgressReporter,
    total: u64,
}

impl<'a> ProgressScope<'a> {
    pub fn begin(reporter: &'a mut dyn ProgressReporter, total: u64) -> Self {
        reporter.begin(total);
        Self { reporter, total }
    }

    pub fn update(&mut self, current: u64) {
        self.reporter.update(current.min(self.total));
    }

    /// Marks a pipeline stage as finished once every point has been read.
    pub fn stage_done(&mut self) {
        self.reporter.update(self.total);
    }

    pub fn total(&self) -> u64 {
        self.total
    }
}

impl Drop for ProgressScope<'_> {
    fn drop(&mut self) {
        self.reporter.end();
    }
}
