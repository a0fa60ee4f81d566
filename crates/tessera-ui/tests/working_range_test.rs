use std::rc::Rc;

use tessera_testing::{LifecycleStep, LifecycleTracker, WorkingRangeTester};
use tessera_ui::*;

#[test]
fn test_working_range_enters_and_exits_once() {
    let ctx = ComponentContext::new();
    let tracker = LifecycleTracker::new();
    let root = WorkingRangeTester::create(
        &tracker,
        "prefetch",
        Rc::new(BoundaryWorkingRange::default()),
    )
    .build();
    let mut tree = ComponentTree::create(&ctx, Some(root)).build().expect("tree");

    // visible window 0..=2, offset 1
    for position in [0, 1, 2, 3, 4, 5, 9] {
        tree.check_working_range_and_dispatch(position, 0, 2, 1, 3)
            .expect("dispatch");
    }

    assert_eq!(
        tracker.steps(),
        vec![LifecycleStep::OnEnteredRange, LifecycleStep::OnExitedRange]
    );
}

#[test]
fn test_working_range_reenters_after_exit() {
    let ctx = ComponentContext::new();
    let tracker = LifecycleTracker::new();
    let root = WorkingRangeTester::create(&tracker, "prefetch", Rc::new(BoundaryWorkingRange::new(0)))
        .build();
    let mut tree = ComponentTree::create(&ctx, Some(root)).build().expect("tree");

    for position in [1, 5, 2] {
        tree.check_working_range_and_dispatch(position, 0, 2, 0, 2)
            .expect("dispatch");
    }

    assert_eq!(tracker.count(LifecycleStep::OnEnteredRange), 2);
    assert_eq!(tracker.count(LifecycleStep::OnExitedRange), 1);
}
