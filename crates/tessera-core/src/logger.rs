//! Injected event logging.
//!
//! The engine never talks to a global logger for structured events; a
//! [`ComponentsLogger`] is handed to it at construction. [`LogComponentsLogger`]
//! forwards to the `log` facade and is what contexts use unless told otherwise.

use std::cell::Cell;
use std::fmt;
use std::time::Instant;

/// Structured events emitted by the engine.
#[derive(Clone, Debug, PartialEq)]
pub enum LogEvent {
    /// A layout pass finished.
    LayoutCalculated {
        tree_id: u64,
        node_count: usize,
    },
    /// A mount pass finished.
    Mounted {
        tree_id: u64,
        mounted: usize,
        unmounted: usize,
        updated: usize,
    },
    /// Every item was unmounted.
    UnmountedAll { tree_id: u64, count: usize },
    /// The tree was released.
    Released { tree_id: u64 },
}

/// Marker naming a timed section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PerfEventMarker {
    LayoutCalculate,
    Mount,
}

impl fmt::Display for PerfEventMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerfEventMarker::LayoutCalculate => f.write_str("layout_calculate"),
            PerfEventMarker::Mount => f.write_str("mount"),
        }
    }
}

/// Token identifying an open performance event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PerfEventToken {
    pub id: u64,
    pub marker: PerfEventMarker,
}

pub trait ComponentsLogger {
    fn on_event(&self, event: &LogEvent);

    fn on_performance_event_started(&self, marker: PerfEventMarker) -> PerfEventToken;

    fn on_performance_event_ended(&self, token: PerfEventToken);
}

/// Forwards events to the `log` crate at debug level.
#[derive(Debug)]
pub struct LogComponentsLogger {
    next_id: Cell<u64>,
    open: Cell<Option<(u64, Instant)>>,
}

impl Default for LogComponentsLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl LogComponentsLogger {
    pub fn new() -> Self {
        Self {
            next_id: Cell::new(1),
            open: Cell::new(None),
        }
    }
}

impl ComponentsLogger for LogComponentsLogger {
    fn on_event(&self, event: &LogEvent) {
        log::debug!("{event:?}");
    }

    fn on_performance_event_started(&self, marker: PerfEventMarker) -> PerfEventToken {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        // only the innermost section is timed
        self.open.set(Some((id, Instant::now())));
        PerfEventToken { id, marker }
    }

    fn on_performance_event_ended(&self, token: PerfEventToken) {
        match self.open.get() {
            Some((id, started)) if id == token.id => {
                self.open.set(None);
                log::debug!("{} took {:?}", token.marker, started.elapsed());
            }
            _ => log::debug!("{} ended", token.marker),
        }
    }
}

/// Runs `block` between a start and end performance event.
pub fn with_perf_event<R>(
    logger: &dyn ComponentsLogger,
    marker: PerfEventMarker,
    block: impl FnOnce() -> R,
) -> R {
    let token = logger.on_performance_event_started(marker);
    let result = block();
    logger.on_performance_event_ended(token);
    result
}
