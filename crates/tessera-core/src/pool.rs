//! Bounded recycle pools.
//!
//! A pool keeps released items around so the next acquire can skip
//! allocation. Capacity is fixed at construction; once full, further releases
//! drop the item.

/// Default number of items kept per pool.
/// Matches the RecyclerView-style cache size used for mount content.
pub const DEFAULT_POOL_SIZE: usize = 3;

/// Named, bounded LIFO pool of reusable items.
///
/// Not synchronised: callers serialise access through `&mut self`.
#[derive(Debug)]
pub struct RecyclePool<T> {
    name: String,
    max_size: usize,
    enabled: bool,
    items: Vec<T>,
}

impl<T> RecyclePool<T> {
    /// Creates an enabled pool holding at most `max_size` items.
    pub fn new(name: impl Into<String>, max_size: usize) -> Self {
        Self::with_enabled(name, max_size, true)
    }

    /// Creates a pool that only stores items when `enabled` is true.
    pub fn with_enabled(name: impl Into<String>, max_size: usize, enabled: bool) -> Self {
        Self {
            name: name.into(),
            max_size,
            enabled,
            items: Vec::with_capacity(if enabled { max_size } else { 0 }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Number of items currently held.
    pub fn current_size(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.max_size
    }

    /// Pops the most recently released item.
    pub fn acquire(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Offers an item back to the pool.
    ///
    /// Returns `false` when the item was dropped because the pool is full or
    /// disabled. Overflow is not an error.
    pub fn release(&mut self, item: T) -> bool {
        if !self.enabled || self.is_full() {
            log::trace!("pool {}: dropping released item", self.name);
            return false;
        }
        self.items.push(item);
        true
    }

    /// Fills the pool up to capacity using `create`. Returns how many items
    /// were added.
    pub fn preallocate(&mut self, mut create: impl FnMut() -> T) -> usize {
        if !self.enabled {
            return 0;
        }
        let mut added = 0;
        while !self.is_full() {
            self.items.push(create());
            added += 1;
        }
        added
    }

    /// Drops every pooled item.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
