//! Headless mount content.
//!
//! `MountContent` stands in for a platform view: it records the bounds and
//! attributes the mount pass applies to it. Handles are cheap to clone and
//! all clones observe the same content.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use tessera_ui_graphics::Rect;

use crate::error::ComponentError;
use crate::tree::ComponentTree;

static NEXT_CONTENT_ID: AtomicU64 = AtomicU64::new(1);

fn next_content_id() -> u64 {
    NEXT_CONTENT_ID.fetch_add(1, Ordering::Relaxed)
}

struct ContentInner {
    id: u64,
    content_type: &'static str,
    bounds: Cell<Rect>,
    touch_bounds: Cell<Option<Rect>>,
    alpha: Cell<f32>,
    text: RefCell<Option<String>>,
    color: Cell<Option<u32>>,
    nested_tree: RefCell<Option<ComponentTree>>,
}

#[derive(Clone)]
pub struct MountContent {
    inner: Rc<ContentInner>,
}

impl MountContent {
    pub fn new(content_type: &'static str) -> Self {
        Self {
            inner: Rc::new(ContentInner {
                id: next_content_id(),
                content_type,
                bounds: Cell::new(Rect::ZERO),
                touch_bounds: Cell::new(None),
                alpha: Cell::new(1.0),
                text: RefCell::new(None),
                color: Cell::new(None),
                nested_tree: RefCell::new(None),
            }),
        }
    }

    /// Unique per created content; stable across recycling.
    pub fn id(&self) -> u64 {
        self.inner.id
    }

    pub fn content_type(&self) -> &'static str {
        self.inner.content_type
    }

    pub fn ptr_eq(&self, other: &MountContent) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn bounds(&self) -> Rect {
        self.inner.bounds.get()
    }

    pub fn set_bounds(&self, bounds: Rect) {
        self.inner.bounds.set(bounds);
    }

    pub fn touch_bounds(&self) -> Option<Rect> {
        self.inner.touch_bounds.get()
    }

    pub fn set_touch_bounds(&self, bounds: Option<Rect>) {
        self.inner.touch_bounds.set(bounds);
    }

    pub fn alpha(&self) -> f32 {
        self.inner.alpha.get()
    }

    pub fn set_alpha(&self, alpha: f32) {
        self.inner.alpha.set(alpha);
    }

    pub fn text(&self) -> Option<String> {
        self.inner.text.borrow().clone()
    }

    pub fn set_text(&self, text: Option<String>) {
        *self.inner.text.borrow_mut() = text;
    }

    pub fn color(&self) -> Option<u32> {
        self.inner.color.get()
    }

    pub fn set_color(&self, color: Option<u32>) {
        self.inner.color.set(color);
    }

    /// Hosts a tree inside this content, as scrolling containers do.
    pub fn set_nested_tree(&self, tree: ComponentTree) {
        *self.inner.nested_tree.borrow_mut() = Some(tree);
    }

    pub fn take_nested_tree(&self) -> Option<ComponentTree> {
        self.inner.nested_tree.borrow_mut().take()
    }

    pub fn has_nested_tree(&self) -> bool {
        self.inner.nested_tree.borrow().is_some()
    }

    /// Runs `f` against the hosted tree; `Ok(None)` when there is none.
    pub fn with_nested_tree<R>(
        &self,
        f: impl FnOnce(&mut ComponentTree) -> Result<R, ComponentError>,
    ) -> Result<Option<R>, ComponentError> {
        let mut nested = self.inner.nested_tree.borrow_mut();
        match nested.as_mut() {
            Some(tree) => f(tree).map(Some),
            None => Ok(None),
        }
    }
}

impl fmt::Debug for MountContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MountContent")
            .field("id", &self.inner.id)
            .field("content_type", &self.inner.content_type)
            .field("bounds", &self.inner.bounds.get())
            .field("alpha", &self.inner.alpha.get())
            .field("nested_tree", &self.has_nested_tree())
            .finish()
    }
}
