use pcd_importer::ProgressReporter;

/// Logs import progress in steps of ten percent.
#[derive(Debug, Default)]
pub struct LogProgress {
    total: u64,
    last_step: u64,
}

impl LogProgress {
    pub fn new() -> Self {
        Self::default()
    }

    fn step(&self, current: u64) -> u64 {
        if self.total == 0 {
            10
        } else {
            current.min(self.total) * 10 / self.total
        }
    }
}

impl ProgressReporter for LogProgress {
    fn begin(&mut self, total: u64) {
        self.total = total;
        self.last_step = 0;
        log::info!("reading {} points...", total);
    }

    fn update(&mut self, current: u64) {
        let step = self.step(current);
        if step > self.last_step {
            self.last_step = step;
            log::info!("progress: {}% ({}/{})", step * 10, current, self.total);
        }
    }

    fn end(&mut self) {
        log::debug!("progress finished");
    }
}
