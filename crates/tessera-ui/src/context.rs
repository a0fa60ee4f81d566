use std::cell::{Cell, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use tessera_core::{ComponentsConfiguration, ComponentsLogger, LogComponentsLogger};

use crate::node::InternalNode;
use crate::pools::MountContentPools;

struct ContextInner {
    config: ComponentsConfiguration,
    logger: Rc<dyn ComponentsLogger>,
    null_layout: Rc<InternalNode>,
    pools: RefCell<MountContentPools>,
    next_tree_id: Cell<u64>,
}

/// Environment shared by every tree built from it.
///
/// Clones share the same configuration, logger, pools and null layout.
#[derive(Clone)]
pub struct ComponentContext {
    inner: Rc<ContextInner>,
}

impl Default for ComponentContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentContext {
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> ComponentContextBuilder {
        ComponentContextBuilder::default()
    }

    pub fn config(&self) -> &ComponentsConfiguration {
        &self.inner.config
    }

    pub fn logger(&self) -> &dyn ComponentsLogger {
        self.inner.logger.as_ref()
    }

    /// The null layout of this context. Every call returns the same node.
    pub fn null_layout(&self) -> Rc<InternalNode> {
        Rc::clone(&self.inner.null_layout)
    }

    pub fn is_null_layout(&self, node: &Rc<InternalNode>) -> bool {
        Rc::ptr_eq(node, &self.inner.null_layout)
    }

    pub fn pools(&self) -> RefMut<'_, MountContentPools> {
        self.inner.pools.borrow_mut()
    }

    pub(crate) fn next_tree_id(&self) -> u64 {
        let id = self.inner.next_tree_id.get();
        self.inner.next_tree_id.set(id + 1);
        id
    }

    pub fn ptr_eq(&self, other: &ComponentContext) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for ComponentContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentContext")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

#[derive(Default)]
pub struct ComponentContextBuilder {
    config: Option<ComponentsConfiguration>,
    logger: Option<Rc<dyn ComponentsLogger>>,
}

impl ComponentContextBuilder {
    pub fn config(mut self, config: ComponentsConfiguration) -> Self {
        self.config = Some(config);
        self
    }

    pub fn logger(mut self, logger: Rc<dyn ComponentsLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn build(self) -> ComponentContext {
        let config = self.config.unwrap_or_default();
        let logger = self
            .logger
            .unwrap_or_else(|| Rc::new(LogComponentsLogger::new()));
        let pools = MountContentPools::new(config.recycling_enabled, config.default_pool_size);
        ComponentContext {
            inner: Rc::new(ContextInner {
                config,
                logger,
                null_layout: Rc::new(InternalNode::null()),
                pools: RefCell::new(pools),
                next_tree_id: Cell::new(1),
            }),
        }
    }
}
