//! Framework alpha overrides component values while mounted.

use tessera_testing::{mount_tree, ContentSlot, LifecycleTracker, MountSpecLifecycleTester};
use tessera_ui::widgets::Wrapper;
use tessera_ui::*;

#[test]
fn test_alpha_override_restores_component_default() {
    let ctx = ComponentContext::new();
    let tracker = LifecycleTracker::new();
    let slot = ContentSlot::new();
    let root = MountSpecLifecycleTester::create()
        .lifecycle_tracker(&tracker)
        .default_alpha(0.5)
        .content_slot(&slot)
        .alpha(0.2)
        .build()
        .expect("tester");

    let mut tree = mount_tree(&ctx, root, 10.0, 10.0).expect("tree");
    let content = slot.get().expect("mounted");
    assert_eq!(content.alpha(), 0.2);

    tree.set_root(None).expect("empty root");

    assert_eq!(content.alpha(), 0.5);
    assert_eq!(tree.mount_state().item_count(), 0);
}

#[test]
fn test_wrapper_alpha_applies_to_delegate_content() {
    let ctx = ComponentContext::new();
    let tracker = LifecycleTracker::new();
    let slot = ContentSlot::new();
    let inner = MountSpecLifecycleTester::create()
        .lifecycle_tracker(&tracker)
        .content_slot(&slot)
        .build()
        .expect("tester");
    let root = Wrapper::create(inner).alpha(0.3).build();

    let _tree = mount_tree(&ctx, root, 10.0, 10.0).expect("tree");

    assert_eq!(slot.get().expect("mounted").alpha(), 0.3);
}

#[test]
fn test_dynamic_alpha_binding_follows_derived_value() {
    let ctx = ComponentContext::new();
    let tracker = LifecycleTracker::new();
    let slot = ContentSlot::new();
    let progress = DynamicValue::new(0.0_f32);
    let alpha = DynamicValue::new(1.0_f32);
    let fade = DerivedDynamicValue::new(progress.clone(), |p: &f32| 1.0 - p);
    {
        let alpha = alpha.clone();
        fade.add_listener(Box::new(move |value: &f32| {
            let _ = alpha.set(*value);
        }));
    }
    let root = MountSpecLifecycleTester::create()
        .lifecycle_tracker(&tracker)
        .content_slot(&slot)
        .dynamic_alpha(alpha.clone())
        .build()
        .expect("tester");
    let mut tree = mount_tree(&ctx, root, 10.0, 10.0).expect("tree");
    let content = slot.get().expect("mounted");
    assert_eq!(content.alpha(), 1.0);

    progress.set(0.25).expect("set");
    assert_eq!(content.alpha(), 0.75);

    tree.release().expect("release");
    progress.set(1.0).expect("set");
    assert_eq!(content.alpha(), 1.0);
}
