use std::rc::Rc;

use crate::test_support::{entries, journal, Probe};
use crate::widgets::{Column, Text, Wrapper};
use crate::{resolve, CommonPropsBuilder, ComponentContext, NodeKind};

#[test]
fn absent_component_resolves_to_the_null_layout() {
    let ctx = ComponentContext::new();
    let node = resolve(&ctx, None).expect("resolve");
    assert!(Rc::ptr_eq(&node, &ctx.null_layout()));
    assert_eq!(node.kind(), NodeKind::Null);
    assert_eq!(node.simple_name(), "NullLayout");
}

#[test]
fn wrapper_without_delegate_is_null() {
    let ctx = ComponentContext::new();
    let wrapper = Wrapper::create(None).alpha(0.3).build();
    let node = resolve(&ctx, Some(&wrapper)).expect("resolve");
    assert!(ctx.is_null_layout(&node));
}

#[test]
fn null_layout_is_shared_by_context_clones_only() {
    let ctx = ComponentContext::new();
    let clone = ctx.clone();
    let other = ComponentContext::new();
    assert!(Rc::ptr_eq(&ctx.null_layout(), &clone.null_layout()));
    assert!(!Rc::ptr_eq(&ctx.null_layout(), &other.null_layout()));
}

#[test]
fn null_children_are_skipped() {
    let ctx = ComponentContext::new();
    let log = journal();
    let root = Column::create()
        .child(Wrapper::create(None).build())
        .child(Probe::new("a", &log).build())
        .child(None)
        .build();
    let node = resolve(&ctx, Some(&root)).expect("resolve");
    assert_eq!(node.child_count(), 1);
    assert_eq!(node.child_at(0).map(|child| child.simple_name()), Some("Probe"));
}

#[test]
fn wrapper_props_layer_over_the_delegate() {
    let ctx = ComponentContext::new();
    let text = Text::create().text("hi").alpha(0.9).width(40.0).build().expect("text");
    let wrapper = Wrapper::create(text).alpha(0.2).build();

    let node = resolve(&ctx, Some(&wrapper)).expect("resolve");

    assert_eq!(node.kind(), NodeKind::Leaf);
    assert_eq!(node.simple_name(), "Text");
    assert_eq!(node.props().alpha, Some(0.2));
    assert_eq!(node.props().width, Some(40.0));
}

#[test]
fn leaves_are_prepared_during_resolution() {
    let ctx = ComponentContext::new();
    let log = journal();
    let root = Column::create()
        .child(Probe::new("a", &log).build())
        .child(Probe::new("b", &log).build())
        .build();
    let node = resolve(&ctx, Some(&root)).expect("resolve");
    assert_eq!(node.subtree_size(), 3);
    assert_eq!(entries(&log), vec!["a:prepare", "b:prepare"]);
}

#[test]
fn missing_text_is_reported_by_build() {
    let err = Text::create().text_size(12.0).build().err().expect("missing text");
    assert_eq!(
        err.to_string(),
        "Text: The following props are not marked as optional and were not supplied: [text]"
    );
}
