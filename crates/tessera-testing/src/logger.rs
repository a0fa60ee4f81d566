use std::cell::{Cell, RefCell};

use tessera_core::{ComponentsLogger, LogEvent, PerfEventMarker, PerfEventToken};

/// Logger that keeps every event for later inspection.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    events: RefCell<Vec<LogEvent>>,
    started: RefCell<Vec<PerfEventMarker>>,
    ended: RefCell<Vec<PerfEventMarker>>,
    next_token: Cell<u64>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<LogEvent> {
        self.events.borrow().clone()
    }

    pub fn started_markers(&self) -> Vec<PerfEventMarker> {
        self.started.borrow().clone()
    }

    pub fn ended_markers(&self) -> Vec<PerfEventMarker> {
        self.ended.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
        self.started.borrow_mut().clear();
        self.ended.borrow_mut().clear();
    }
}

impl ComponentsLogger for RecordingLogger {
    fn on_event(&self, event: &LogEvent) {
        self.events.borrow_mut().push(event.clone());
    }

    fn on_performance_event_started(&self, marker: PerfEventMarker) -> PerfEventToken {
        let id = self.next_token.get();
        self.next_token.set(id + 1);
        self.started.borrow_mut().push(marker);
        PerfEventToken { id, marker }
    }

    fn on_performance_event_ended(&self, token: PerfEventToken) {
        self.ended.borrow_mut().push(token.marker);
    }
}
