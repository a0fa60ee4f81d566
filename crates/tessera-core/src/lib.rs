#![doc = r"Core runtime pieces for the Tessera component engine."]

pub mod collections;
pub mod config;
pub mod dynamic;
pub mod hash;
pub mod logger;
pub mod pool;

pub use config::ComponentsConfiguration;
pub use dynamic::{DerivedDynamicValue, Dynamic, DynamicValue, DynamicValueError, ListenerHandle};
pub use logger::{
    with_perf_event, ComponentsLogger, LogComponentsLogger, LogEvent, PerfEventMarker,
    PerfEventToken,
};
pub use pool::{RecyclePool, DEFAULT_POOL_SIZE};

#[cfg(test)]
#[path = "tests/pool_properties.rs"]
mod pool_properties;
