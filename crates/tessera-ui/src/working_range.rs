//! Working range registration and enter/exit dispatch.

use std::rc::Rc;

use tessera_core::collections::map::HashSet;
use tessera_ui_layout::WorkingRange;

use crate::component::{ComponentRef, WorkingRangeSpec};
use crate::context::ComponentContext;
use crate::error::ComponentError;
use crate::layout_state::RenderUnitId;

/// Visible window of a scrolling list, in item positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibleWindow {
    pub first_visible: i32,
    pub last_visible: i32,
    pub first_fully_visible: i32,
    pub last_fully_visible: i32,
}

struct Registration {
    name: &'static str,
    range: Rc<dyn WorkingRange>,
    unit_id: RenderUnitId,
    component: ComponentRef,
}

/// Working ranges declared by the components of one layout.
#[derive(Default)]
pub struct WorkingRangeContainer {
    registrations: Vec<Registration>,
}

impl WorkingRangeContainer {
    pub(crate) fn register(
        &mut self,
        spec: WorkingRangeSpec,
        unit_id: RenderUnitId,
        component: ComponentRef,
    ) {
        self.registrations.push(Registration {
            name: spec.name,
            range: spec.range,
            unit_id,
            component,
        });
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    pub fn is_registered(&self, key: (&'static str, RenderUnitId)) -> bool {
        self.registrations
            .iter()
            .any(|registration| (registration.name, registration.unit_id) == key)
    }

    /// Evaluates every registration at `position` and notifies components
    /// whose status changed.
    pub fn dispatch(
        &self,
        ctx: &ComponentContext,
        status: &mut WorkingRangeStatusHandler,
        position: i32,
        window: VisibleWindow,
    ) -> Result<(), ComponentError> {
        let VisibleWindow {
            first_visible,
            last_visible,
            first_fully_visible,
            last_fully_visible,
        } = window;
        for registration in &self.registrations {
            let key = (registration.name, registration.unit_id);
            let range = registration.range.as_ref();
            if !status.is_in_range(key)
                && range.should_enter_range(
                    position,
                    first_visible,
                    last_visible,
                    first_fully_visible,
                    last_fully_visible,
                )
            {
                status.entered.insert(key);
                log::trace!("{:?} entered range {}", registration.unit_id, registration.name);
                registration
                    .component
                    .on_entered_range(ctx, registration.name)?;
            } else if status.is_in_range(key)
                && range.should_exit_range(
                    position,
                    first_visible,
                    last_visible,
                    first_fully_visible,
                    last_fully_visible,
                )
            {
                status.entered.remove(&key);
                log::trace!("{:?} exited range {}", registration.unit_id, registration.name);
                registration
                    .component
                    .on_exited_range(ctx, registration.name)?;
            }
        }
        Ok(())
    }
}

/// Remembers which (range, unit) pairs are currently inside their range.
#[derive(Debug, Default)]
pub struct WorkingRangeStatusHandler {
    entered: HashSet<(&'static str, RenderUnitId)>,
}

impl WorkingRangeStatusHandler {
    pub fn is_in_range(&self, key: (&'static str, RenderUnitId)) -> bool {
        self.entered.contains(&key)
    }

    pub fn entered_count(&self) -> usize {
        self.entered.len()
    }

    pub fn clear(&mut self) {
        self.entered.clear();
    }

    /// Forgets every pair that `ranges` no longer declares.
    pub fn retain_registered(&mut self, ranges: &WorkingRangeContainer) {
        self.entered.retain(|key| ranges.is_registered(*key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{entries, journal, Journal, Probe};
    use crate::ComponentTree;
    use tessera_ui_layout::BoundaryWorkingRange;

    #[test]
    fn enter_and_exit_fire_once_each() {
        let ctx = ComponentContext::new();
        let log = journal();
        let mut probe = Probe::new("a", &log);
        probe.ranges = vec![WorkingRangeSpec {
            name: "prefetch",
            range: Rc::new(BoundaryWorkingRange::default()),
        }];
        let mut tree = ComponentTree::create(&ctx, Some(probe.build()))
            .build()
            .expect("tree");
        log.borrow_mut().clear();

        tree.check_working_range_and_dispatch(0, 0, 2, 1, 3).expect("dispatch");
        tree.check_working_range_and_dispatch(1, 0, 2, 1, 3).expect("dispatch");
        tree.check_working_range_and_dispatch(4, 0, 2, 1, 3).expect("dispatch");
        tree.check_working_range_and_dispatch(5, 0, 2, 1, 3).expect("dispatch");

        assert_eq!(entries(&log), vec!["a:enter prefetch", "a:exit prefetch"]);
    }

    #[test]
    fn exit_without_enter_is_ignored() {
        let ctx = ComponentContext::new();
        let log = journal();
        let mut probe = Probe::new("a", &log);
        probe.ranges = vec![WorkingRangeSpec {
            name: "prefetch",
            range: Rc::new(BoundaryWorkingRange::default()),
        }];
        let mut tree = ComponentTree::create(&ctx, Some(probe.build()))
            .build()
            .expect("tree");
        log.borrow_mut().clear();

        tree.check_working_range_and_dispatch(9, 0, 2, 1, 3).expect("dispatch");

        assert!(entries(&log).is_empty());
    }

    fn ranged_probe(name: &'static str, key: &str, log: &Journal) -> ComponentRef {
        let mut probe = Probe::new(name, log).key(key);
        probe.ranges = vec![WorkingRangeSpec {
            name: "prefetch",
            range: Rc::new(BoundaryWorkingRange::default()),
        }];
        probe.build()
    }

    #[test]
    fn relayout_forgets_status_of_removed_units() {
        let ctx = ComponentContext::new();
        let log = journal();
        let mut tree = ComponentTree::create(&ctx, Some(ranged_probe("a", "a", &log)))
            .build()
            .expect("tree");
        tree.check_working_range_and_dispatch(0, 0, 2, 1, 3).expect("dispatch");
        assert_eq!(tree.working_range_status().entered_count(), 1);

        tree.set_root(Some(ranged_probe("b", "b", &log))).expect("set root");

        assert_eq!(tree.working_range_status().entered_count(), 0);
    }

    #[test]
    fn relayout_keeps_status_of_surviving_units() {
        let ctx = ComponentContext::new();
        let log = journal();
        let mut tree = ComponentTree::create(&ctx, Some(ranged_probe("a", "a", &log)))
            .build()
            .expect("tree");
        tree.check_working_range_and_dispatch(0, 0, 2, 1, 3).expect("dispatch");

        tree.set_root(Some(ranged_probe("a2", "a", &log))).expect("set root");
        log.borrow_mut().clear();
        tree.check_working_range_and_dispatch(1, 0, 2, 1, 3).expect("dispatch");

        assert_eq!(tree.working_range_status().entered_count(), 1);
        assert!(entries(&log).is_empty());
    }
}
