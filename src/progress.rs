// src/progress.rs
/// Lightweight progress reporting used by long-running operations (fetch/report).
/// The CLI implements this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one member's record was obtained.
    fn item_done(&mut self, _key: &str) {}

    /// Called when one member's record could not be obtained.
    fn item_failed(&mut self, _key: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Prints a counter line per item to stdout.
#[derive(Default)]
pub struct ConsoleProgress {
    total: usize,
    done: usize,
    failed: usize,
}

impl ConsoleProgress {
    fn tick(&mut self, key: &str, ok: bool) {
        let mark = if ok { "ok" } else { "--" };
        println!("[{}/{}] {mark} {key}", self.done + self.failed, self.total);
    }
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
        self.failed = 0;
    }

    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn item_done(&mut self, key: &str) {
        self.done += 1;
        self.tick(key, true);
    }

    fn item_failed(&mut self, key: &str) {
        self.failed += 1;
        self.tick(key, false);
    }

    fn finish(&mut self) {
        if self.total > 0 {
            println!("Done: {} found, {} missing", self.done, self.failed);
        }
    }
}
