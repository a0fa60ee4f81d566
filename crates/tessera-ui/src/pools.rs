//! Mount content pools keyed by content type.
//!
//! One [`RecyclePool`] per content type, created lazily with the capacity the
//! first component of that type asks for.

use tessera_core::collections::map::HashMap;
use tessera_core::RecyclePool;

use crate::component::Component;
use crate::content::MountContent;
use crate::context::ComponentContext;

#[derive(Debug)]
pub struct MountContentPools {
    pools: HashMap<&'static str, RecyclePool<MountContent>>,
    enabled: bool,
    default_size: usize,
}

impl MountContentPools {
    pub fn new(enabled: bool, default_size: usize) -> Self {
        Self {
            pools: HashMap::default(),
            enabled,
            default_size,
        }
    }

    fn pool_for(&mut self, component: &dyn Component) -> &mut RecyclePool<MountContent> {
        let size = component.pool_size().unwrap_or(self.default_size);
        let enabled = self.enabled;
        self.pools
            .entry(component.content_type())
            .or_insert_with(|| RecyclePool::with_enabled(component.content_type(), size, enabled))
    }

    /// Pooled content for `content_type`, most recently released first.
    pub fn acquire(&mut self, content_type: &str) -> Option<MountContent> {
        self.pools.get_mut(content_type).and_then(RecyclePool::acquire)
    }

    /// Offers unmounted content back. Returns whether it was kept.
    pub fn release(&mut self, component: &dyn Component, content: MountContent) -> bool {
        self.pool_for(component).release(content)
    }

    /// Fills the pool for `component`'s content type.
    pub fn preallocate(&mut self, ctx: &ComponentContext, component: &dyn Component) -> usize {
        self.pool_for(component)
            .preallocate(|| component.create_mount_content(ctx))
    }

    pub fn pool(&self, content_type: &str) -> Option<&RecyclePool<MountContent>> {
        self.pools.get(content_type)
    }

    /// Pooled items for `content_type`, zero when no pool exists yet.
    pub fn current_size(&self, content_type: &str) -> usize {
        self.pool(content_type).map_or(0, RecyclePool::current_size)
    }

    pub fn clear(&mut self) {
        for pool in self.pools.values_mut() {
            pool.clear();
        }
    }
}
