//! Observable values with push propagation.
//!
//! A [`DynamicValue`] owns a value and a list of listeners. Setting the value
//! notifies every listener synchronously before `set` returns. A
//! [`DerivedDynamicValue`] maps another dynamic value through a pure function
//! and forwards changes to its own listeners, so chains propagate in one pass.
//!
//! Derived values are read-only, so a derivation can never write back into its
//! source. Writes issued from inside a listener of the value being notified
//! are rejected with [`DynamicValueError::ReentrantUpdate`].

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DynamicValueError {
    #[error("dynamic value was set from inside one of its own listeners")]
    ReentrantUpdate,
}

/// Handle returned by `add_listener`, used to detach the listener again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerHandle(u64);

type Listener<T> = Rc<dyn Fn(&T)>;

struct Listeners<T> {
    next_id: Cell<u64>,
    entries: RefCell<Vec<(ListenerHandle, Listener<T>)>>,
    notifying: Cell<bool>,
}

impl<T> Listeners<T> {
    fn new() -> Self {
        Self {
            next_id: Cell::new(1),
            entries: RefCell::new(Vec::new()),
            notifying: Cell::new(false),
        }
    }

    fn add(&self, listener: Listener<T>) -> ListenerHandle {
        let handle = ListenerHandle(self.next_id.get());
        self.next_id.set(handle.0 + 1);
        self.entries.borrow_mut().push((handle, listener));
        handle
    }

    fn remove(&self, handle: ListenerHandle) -> bool {
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|(id, _)| *id != handle);
        entries.len() != before
    }

    fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    fn notify(&self, value: &T) {
        // Snapshot so listeners may add or remove listeners while running.
        let snapshot: Vec<Listener<T>> = self
            .entries
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        let _guard = NotifyGuard::enter(&self.notifying);
        for listener in snapshot {
            listener(value);
        }
    }
}

struct NotifyGuard<'a> {
    flag: &'a Cell<bool>,
    previous: bool,
}

impl<'a> NotifyGuard<'a> {
    fn enter(flag: &'a Cell<bool>) -> Self {
        let previous = flag.replace(true);
        Self { flag, previous }
    }
}

impl Drop for NotifyGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(self.previous);
    }
}

/// Read side shared by plain and derived dynamic values.
pub trait Dynamic<T> {
    /// Current value.
    fn get(&self) -> T;

    /// Registers a listener called with every new value.
    fn add_listener(&self, listener: Box<dyn Fn(&T)>) -> ListenerHandle;

    /// Detaches a listener. Returns `false` if it was not registered.
    fn remove_listener(&self, handle: ListenerHandle) -> bool;

    fn listener_count(&self) -> usize;
}

struct DynamicValueInner<T> {
    value: RefCell<T>,
    listeners: Listeners<T>,
}

/// Mutable observable cell. Clones share the same value.
pub struct DynamicValue<T> {
    inner: Rc<DynamicValueInner<T>>,
}

impl<T> Clone for DynamicValue<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicValue")
            .field("value", &*self.inner.value.borrow())
            .field("listeners", &self.inner.listeners.len())
            .finish()
    }
}

impl<T: Clone + 'static> DynamicValue<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(DynamicValueInner {
                value: RefCell::new(value),
                listeners: Listeners::new(),
            }),
        }
    }

    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Stores `value` and notifies every listener before returning.
    pub fn set(&self, value: T) -> Result<(), DynamicValueError> {
        if self.inner.listeners.notifying.get() {
            log::warn!("rejected reentrant DynamicValue::set");
            return Err(DynamicValueError::ReentrantUpdate);
        }
        *self.inner.value.borrow_mut() = value.clone();
        self.inner.listeners.notify(&value);
        Ok(())
    }

    /// True when both handles point at the same cell.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Convenience for building a derived value from this one.
    pub fn map<R: Clone + 'static>(
        &self,
        modifier: impl Fn(&T) -> R + 'static,
    ) -> DerivedDynamicValue<T, R> {
        DerivedDynamicValue::new(self.clone(), modifier)
    }
}

impl<T: Clone + 'static> Dynamic<T> for DynamicValue<T> {
    fn get(&self) -> T {
        DynamicValue::get(self)
    }

    fn add_listener(&self, listener: Box<dyn Fn(&T)>) -> ListenerHandle {
        self.inner.listeners.add(Rc::from(listener))
    }

    fn remove_listener(&self, handle: ListenerHandle) -> bool {
        self.inner.listeners.remove(handle)
    }

    fn listener_count(&self) -> usize {
        self.inner.listeners.len()
    }
}

struct DerivedInner<T, R> {
    source: Rc<dyn Dynamic<T>>,
    modifier: Rc<dyn Fn(&T) -> R>,
    listeners: Rc<Listeners<R>>,
    source_handle: ListenerHandle,
}

impl<T, R> Drop for DerivedInner<T, R> {
    fn drop(&mut self) {
        self.source.remove_listener(self.source_handle);
    }
}

/// Read-only value computed from a source through a pure modifier.
pub struct DerivedDynamicValue<T, R> {
    inner: Rc<DerivedInner<T, R>>,
}

impl<T, R> Clone for DerivedDynamicValue<T, R> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: 'static, R: Clone + 'static> DerivedDynamicValue<T, R> {
    pub fn new(source: impl Dynamic<T> + 'static, modifier: impl Fn(&T) -> R + 'static) -> Self {
        let source: Rc<dyn Dynamic<T>> = Rc::new(source);
        let modifier: Rc<dyn Fn(&T) -> R> = Rc::new(modifier);
        let listeners = Rc::new(Listeners::new());

        let forward_listeners = Rc::clone(&listeners);
        let forward_modifier = Rc::clone(&modifier);
        let source_handle = source.add_listener(Box::new(move |value: &T| {
            if forward_listeners.len() == 0 {
                return;
            }
            let mapped = forward_modifier(value);
            forward_listeners.notify(&mapped);
        }));

        Self {
            inner: Rc::new(DerivedInner {
                source,
                modifier,
                listeners,
                source_handle,
            }),
        }
    }

    pub fn get(&self) -> R {
        let value = self.inner.source.get();
        (self.inner.modifier)(&value)
    }

    pub fn map<S: Clone + 'static>(
        &self,
        modifier: impl Fn(&R) -> S + 'static,
    ) -> DerivedDynamicValue<R, S> {
        DerivedDynamicValue::new(self.clone(), modifier)
    }
}

impl<T: 'static, R: Clone + 'static> Dynamic<R> for DerivedDynamicValue<T, R> {
    fn get(&self) -> R {
        DerivedDynamicValue::get(self)
    }

    fn add_listener(&self, listener: Box<dyn Fn(&R)>) -> ListenerHandle {
        self.inner.listeners.add(Rc::from(listener))
    }

    fn remove_listener(&self, handle: ListenerHandle) -> bool {
        self.inner.listeners.remove(handle)
    }

    fn listener_count(&self) -> usize {
        self.inner.listeners.len()
    }
}

#[cfg(test)]
#[path = "tests/dynamic_tests.rs"]
mod tests;
