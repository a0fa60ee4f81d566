use std::cell::RefCell;
use std::rc::Rc;

/// A lifecycle callback observed by a tester component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LifecycleStep {
    OnCreateLayout,
    OnPrepare,
    OnMeasure,
    OnBoundsDefined,
    OnCreateMountContent,
    OnMount,
    OnBind,
    OnAttached,
    OnDetached,
    OnUnbind,
    OnUnmount,
    OnEnteredRange,
    OnExitedRange,
}

impl LifecycleStep {
    /// Name of the callback on the component trait.
    pub fn callback_name(self) -> &'static str {
        match self {
            LifecycleStep::OnCreateLayout => "on_create_layout",
            LifecycleStep::OnPrepare => "on_prepare",
            LifecycleStep::OnMeasure => "on_measure",
            LifecycleStep::OnBoundsDefined => "on_bounds_defined",
            LifecycleStep::OnCreateMountContent => "create_mount_content",
            LifecycleStep::OnMount => "on_mount",
            LifecycleStep::OnBind => "on_bind",
            LifecycleStep::OnAttached => "on_attached",
            LifecycleStep::OnDetached => "on_detached",
            LifecycleStep::OnUnbind => "on_unbind",
            LifecycleStep::OnUnmount => "on_unmount",
            LifecycleStep::OnEnteredRange => "on_entered_range",
            LifecycleStep::OnExitedRange => "on_exited_range",
        }
    }
}

/// Shared, ordered record of lifecycle steps.
///
/// Clones append to the same record, so one tracker can be handed to many
/// components.
#[derive(Clone, Debug, Default)]
pub struct LifecycleTracker {
    steps: Rc<RefCell<Vec<LifecycleStep>>>,
}

impl LifecycleTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_step(&self, step: LifecycleStep) {
        self.steps.borrow_mut().push(step);
    }

    /// Steps recorded so far, oldest first.
    pub fn steps(&self) -> Vec<LifecycleStep> {
        self.steps.borrow().clone()
    }

    pub fn reset(&self) {
        self.steps.borrow_mut().clear();
    }

    pub fn contains(&self, step: LifecycleStep) -> bool {
        self.steps.borrow().contains(&step)
    }

    pub fn count(&self, step: LifecycleStep) -> usize {
        self.steps.borrow().iter().filter(|s| **s == step).count()
    }

    /// Recorded steps restricted to `filter`, in order.
    pub fn steps_among(&self, filter: &[LifecycleStep]) -> Vec<LifecycleStep> {
        self.steps
            .borrow()
            .iter()
            .copied()
            .filter(|step| filter.contains(step))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_one_record() {
        let tracker = LifecycleTracker::new();
        let clone = tracker.clone();
        tracker.add_step(LifecycleStep::OnMount);
        clone.add_step(LifecycleStep::OnBind);
        assert_eq!(
            tracker.steps(),
            vec![LifecycleStep::OnMount, LifecycleStep::OnBind]
        );
        assert_eq!(clone.count(LifecycleStep::OnMount), 1);
        clone.reset();
        assert!(tracker.steps().is_empty());
    }
}
