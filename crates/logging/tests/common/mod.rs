//! Shared outputter test doubles for the coordinator integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use logfan::{Level, Outputter};

/// Records every `(level, message)` it receives and keeps propagating.
pub struct CaptureOutputter {
    records: Arc<Mutex<Vec<(Level, String)>>>,
}

impl CaptureOutputter {
    pub fn new() -> (Box<Self>, Arc<Mutex<Vec<(Level, String)>>>) {
        let records = Arc::new(Mutex::new(Vec::new()));
        (
            Box::new(Self {
                records: Arc::clone(&records),
            }),
            records,
        )
    }
}

impl Outputter for CaptureOutputter {
    fn write(&mut self, level: Level, message: &str) -> bool {
        self.records.lock().unwrap().push((level, message.to_owned()));
        true
    }
}

/// Pushes its tag on every invocation so tests can assert walk order.
pub struct TaggedOutputter {
    tag: &'static str,
    seen: Arc<Mutex<Vec<&'static str>>>,
    proceed: bool,
}

impl TaggedOutputter {
    pub fn new(
        tag: &'static str,
        seen: &Arc<Mutex<Vec<&'static str>>>,
        proceed: bool,
    ) -> Box<Self> {
        Box::new(Self {
            tag,
            seen: Arc::clone(seen),
            proceed,
        })
    }
}

impl Outputter for TaggedOutputter {
    fn write(&mut self, _level: Level, _message: &str) -> bool {
        self.seen.lock().unwrap().push(self.tag);
        self.proceed
    }
}

/// Counts invocations; safe to observe from other threads.
pub struct CountingOutputter {
    count: Arc<AtomicUsize>,
}

impl CountingOutputter {
    pub fn new() -> (Box<Self>, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        (
            Box::new(Self {
                count: Arc::clone(&count),
            }),
            count,
        )
    }
}

impl Outputter for CountingOutputter {
    fn write(&mut self, _level: Level, _message: &str) -> bool {
        self.count.fetch_add(1, Ordering::SeqCst);
        true
    }
}

/// Panics on every invocation, while the coordinator lock is held.
pub struct PanickingOutputter;

impl Outputter for PanickingOutputter {
    fn write(&mut self, _level: Level, _message: &str) -> bool {
        panic!("destination failure");
    }
}

/// Bumps a shared counter when dropped, so tests can observe destruction.
pub struct DropCounterOutputter {
    drops: Arc<AtomicUsize>,
}

impl DropCounterOutputter {
    pub fn new(drops: &Arc<AtomicUsize>) -> Box<Self> {
        Box::new(Self {
            drops: Arc::clone(drops),
        })
    }
}

impl Outputter for DropCounterOutputter {
    fn write(&mut self, _level: Level, _message: &str) -> bool {
        true
    }
}

impl Drop for DropCounterOutputter {
    fn drop(&mut self) {
        self.drops.fetch_add(1, Ordering::SeqCst);
    }
}
