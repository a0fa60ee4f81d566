use std::rc::Rc;

use tessera_ui_layout::SizeSpec;

use crate::test_support::{entries, journal, Probe};
use crate::widgets::{Column, Text};
use crate::{
    ComponentContext, ComponentRef, ComponentTree, ComponentsConfiguration, DynamicValue,
    MountItemState,
};
use crate::CommonProps;

fn tree(ctx: &ComponentContext, root: ComponentRef) -> ComponentTree {
    ComponentTree::create(ctx, Some(root))
        .size_spec(SizeSpec::exactly(100.0, 100.0))
        .build()
        .expect("tree")
}

#[test]
fn mount_then_attach_runs_callbacks_in_order() {
    let ctx = ComponentContext::new();
    let log = journal();
    let mut tree = tree(&ctx, Probe::new("a", &log).build());
    log.borrow_mut().clear();

    tree.mount().expect("mount");
    tree.attach().expect("attach");

    assert_eq!(entries(&log), vec!["a:mount", "a:bind", "a:attached"]);
    let item = tree.mount_state().items().next().expect("item");
    assert_eq!(item.state(), MountItemState::Attached);
}

#[test]
fn detach_runs_in_reverse_mount_order() {
    let ctx = ComponentContext::new();
    let log = journal();
    let root = Column::create()
        .child(Probe::new("a", &log).build())
        .child(Probe::new("b", &log).build())
        .build();
    let mut tree = tree(&ctx, root);
    tree.attach().expect("attach");
    log.borrow_mut().clear();

    tree.detach().expect("detach");

    assert_eq!(entries(&log), vec!["b:detached", "a:detached"]);
}

#[test]
fn removed_items_are_unmounted_and_new_ones_attached() {
    let ctx = ComponentContext::new();
    let log = journal();
    let root = Column::create()
        .child(Probe::new("a", &log).key("a").build())
        .child(Probe::new("b", &log).key("b").build())
        .build();
    let mut tree = tree(&ctx, root);
    tree.attach().expect("attach");
    log.borrow_mut().clear();

    let next = Column::create()
        .child(Probe::new("c", &log).key("c").build())
        .build();
    tree.set_root(Some(next)).expect("set root");

    assert_eq!(
        entries(&log),
        vec![
            "c:prepare",
            "b:detached",
            "b:unbind",
            "b:unmount",
            "a:detached",
            "a:unbind",
            "a:unmount",
            "c:mount",
            "c:bind",
            "c:attached",
        ]
    );
    assert_eq!(tree.mount_state().item_count(), 1);
}

#[test]
fn changed_component_is_remounted_in_place() {
    let ctx = ComponentContext::new();
    let log = journal();
    let mut tree = tree(&ctx, Probe::new("a", &log).build());
    tree.attach().expect("attach");
    let content = tree
        .mount_state()
        .items()
        .next()
        .map(|item| item.content().clone())
        .expect("content");
    log.borrow_mut().clear();

    tree.set_root(Some(Probe::new("a2", &log).build()))
        .expect("set root");

    assert_eq!(
        entries(&log),
        vec![
            "a2:prepare",
            "a:detached",
            "a:unbind",
            "a:unmount",
            "a2:mount",
            "a2:bind",
            "a2:attached"
        ]
    );
    let item = tree.mount_state().items().next().expect("item");
    assert!(item.content().ptr_eq(&content));
}

#[test]
fn equivalent_component_keeps_its_mount() {
    let ctx = ComponentContext::new();
    let first = Text::create().text("same").build().expect("text");
    let second = Text::create().text("same").build().expect("text");
    let mut tree = tree(&ctx, first);
    tree.attach().expect("attach");

    tree.set_root(Some(second)).expect("set root");

    let item = tree.mount_state().items().next().expect("item");
    assert_eq!(item.state(), MountItemState::Attached);
    assert_eq!(item.content().text().as_deref(), Some("same"));
}

#[test]
fn alpha_override_is_restored_on_unmount() {
    let ctx = ComponentContext::new();
    let log = journal();
    let mut probe = Probe::new("a", &log).props(CommonProps {
        alpha: Some(0.2),
        ..CommonProps::default()
    });
    probe.mount_alpha = Some(0.5);
    let mut tree = tree(&ctx, probe.build());
    tree.mount().expect("mount");
    let content = tree
        .mount_state()
        .items()
        .next()
        .map(|item| item.content().clone())
        .expect("content");
    assert_eq!(content.alpha(), 0.2);

    tree.set_root(None).expect("clear root");

    assert_eq!(content.alpha(), 0.5);
    assert_eq!(tree.mount_state().item_count(), 0);
}

#[test]
fn dynamic_alpha_follows_value_while_mounted() {
    let ctx = ComponentContext::new();
    let log = journal();
    let alpha = DynamicValue::new(0.4_f32);
    let probe = Probe::new("a", &log).props(CommonProps {
        dynamic_alpha: Some(alpha.clone()),
        ..CommonProps::default()
    });
    let mut tree = tree(&ctx, probe.build());
    tree.mount().expect("mount");
    let content = tree
        .mount_state()
        .items()
        .next()
        .map(|item| item.content().clone())
        .expect("content");
    assert_eq!(content.alpha(), 0.4);

    alpha.set(0.7).expect("set");
    assert_eq!(content.alpha(), 0.7);

    tree.unmount_all_items().expect("unmount");
    alpha.set(0.1).expect("set");
    assert_eq!(content.alpha(), 1.0);
}

#[test]
fn unmounted_content_is_recycled_by_type() {
    let ctx = ComponentContext::new();
    let log = journal();
    let mut tree = tree(&ctx, Probe::new("a", &log).build());
    tree.mount().expect("mount");
    let content = tree
        .mount_state()
        .items()
        .next()
        .map(|item| item.content().clone())
        .expect("content");

    tree.unmount_all_items().expect("unmount");
    assert_eq!(ctx.pools().current_size("Probe"), 1);

    tree.mount().expect("remount");
    assert_eq!(ctx.pools().current_size("Probe"), 0);
    let item = tree.mount_state().items().next().expect("item");
    assert!(item.content().ptr_eq(&content));
}

#[test]
fn disabled_recycling_drops_content() {
    let ctx = ComponentContext::builder()
        .config(ComponentsConfiguration::new().recycling_enabled(false))
        .build();
    let log = journal();
    let mut tree = tree(&ctx, Probe::new("a", &log).build());
    tree.mount().expect("mount");
    tree.unmount_all_items().expect("unmount");
    assert_eq!(ctx.pools().current_size("Probe"), 0);
}

#[test]
fn items_carry_layout_bounds() {
    let ctx = ComponentContext::new();
    let log = journal();
    let root: ComponentRef = Column::create()
        .child(Probe::new("a", &log).build())
        .child(Probe::new("b", &log).build())
        .build();
    let mut tree = ComponentTree::create(&ctx, Some(Rc::clone(&root)))
        .build()
        .expect("tree");
    tree.mount().expect("mount");

    let bottoms: Vec<f32> = tree.mount_state().items().map(|item| item.bottom()).collect();
    assert_eq!(bottoms, vec![10.0, 20.0]);
}
