use super::*;
use crate::props::CommonProps;
use crate::test_support::{entries, journal, Probe};
use crate::widgets::{Column, Row};
use crate::CommonPropsBuilder;
use tessera_ui_graphics::EdgeInsets;

fn layout(ctx: &ComponentContext, root: &ComponentRef, spec: SizeSpec) -> LayoutState {
    LayoutState::calculate(ctx, 1, Some(root), spec).expect("layout")
}

#[test]
fn column_stacks_children_inside_padding() {
    let ctx = ComponentContext::new();
    let log = journal();
    let root = Column::create()
        .padding(EdgeInsets::uniform(5.0))
        .child(Probe::new("a", &log).size(10.0, 20.0).build())
        .child(Probe::new("b", &log).size(30.0, 10.0).build())
        .build();

    let state = layout(&ctx, &root, SizeSpec::unspecified());

    assert_eq!(state.size(), Size::new(40.0, 40.0));
    let bounds: Vec<Rect> = state.render_units().iter().map(|unit| unit.bounds).collect();
    assert_eq!(
        bounds,
        vec![Rect::new(5.0, 5.0, 10.0, 20.0), Rect::new(5.0, 25.0, 30.0, 10.0)]
    );
    assert_eq!(entries(&log), vec!["a:prepare", "b:prepare"]);
}

#[test]
fn row_places_children_left_to_right() {
    let ctx = ComponentContext::new();
    let log = journal();
    let root = Row::create()
        .child(Probe::new("a", &log).size(10.0, 20.0).build())
        .child(Probe::new("b", &log).size(30.0, 10.0).build())
        .build();

    let state = layout(&ctx, &root, SizeSpec::exactly(100.0, 50.0));

    assert_eq!(state.size(), Size::new(100.0, 50.0));
    assert_eq!(state.render_units()[1].bounds, Rect::new(10.0, 0.0, 30.0, 10.0));
}

#[test]
fn empty_root_has_no_render_units() {
    let ctx = ComponentContext::new();
    let state = LayoutState::calculate(&ctx, 1, None, SizeSpec::unspecified()).expect("layout");
    assert!(state.render_units().is_empty());
    assert!(ctx.is_null_layout(state.root()));
    assert_eq!(state.size(), Size::ZERO);
}

#[test]
fn keyed_children_keep_ids_when_reordered() {
    let ctx = ComponentContext::new();
    let log = journal();
    let first = Column::create()
        .child(Probe::new("a", &log).key("a").build())
        .child(Probe::new("b", &log).key("b").build())
        .build();
    let second = Column::create()
        .child(Probe::new("b", &log).key("b").build())
        .child(Probe::new("a", &log).key("a").build())
        .build();

    let before = layout(&ctx, &first, SizeSpec::unspecified());
    let after = layout(&ctx, &second, SizeSpec::unspecified());

    assert_eq!(before.render_units()[0].id, after.render_units()[1].id);
    assert_eq!(before.render_units()[1].id, after.render_units()[0].id);
}

#[test]
fn unkeyed_siblings_of_one_type_get_distinct_ids() {
    let ctx = ComponentContext::new();
    let log = journal();
    let root = Column::create()
        .child(Probe::new("a", &log).build())
        .child(Probe::new("b", &log).build())
        .build();

    let state = layout(&ctx, &root, SizeSpec::unspecified());
    let ids: Vec<RenderUnitId> = state.render_units().iter().map(|unit| unit.id).collect();
    assert_ne!(ids[0], ids[1]);
    assert_eq!(state.position_of(ids[1]), Some(1));
}

#[test]
fn touch_expansion_outsets_absolute_bounds() {
    let ctx = ComponentContext::new();
    let log = journal();
    let probe = Probe::new("a", &log).props(CommonProps {
        touch_expansion: EdgeInsets::uniform(4.0),
        ..CommonProps::default()
    });
    let root = Column::create()
        .padding(EdgeInsets::uniform(2.0))
        .child(probe.build())
        .build();

    let state = layout(&ctx, &root, SizeSpec::unspecified());
    let unit = &state.render_units()[0];
    assert_eq!(unit.touch_bounds, Some(Rect::from_ltrb(-2.0, -2.0, 16.0, 16.0)));
}

#[test]
fn container_with_alpha_hosts_its_children() {
    let ctx = ComponentContext::new();
    let log = journal();
    let root = Column::create()
        .alpha(0.5)
        .child(Probe::new("a", &log).build())
        .build();

    let state = layout(&ctx, &root, SizeSpec::unspecified());
    let units = state.render_units();
    assert_eq!(units.len(), 2);
    assert!(units[0].is_host);
    assert_eq!(units[0].host, None);
    assert_eq!(units[1].host, Some(units[0].id));
}

#[test]
fn fixed_size_props_override_measurement() {
    let ctx = ComponentContext::new();
    let log = journal();
    let probe = Probe::new("a", &log).props(CommonProps {
        width: Some(25.0),
        ..CommonProps::default()
    });
    let root = Column::create().child(probe.build()).build();

    let state = layout(&ctx, &root, SizeSpec::unspecified());
    assert_eq!(state.render_units()[0].bounds.size(), Size::new(25.0, 10.0));
}

#[test]
fn negative_root_size_lays_out_as_empty() {
    let ctx = ComponentContext::new();
    let log = journal();
    let root = Column::create()
        .child(Probe::new("a", &log).size(10.0, 10.0).build())
        .build();

    let state = layout(&ctx, &root, SizeSpec::exactly(-1.0, 20.0));

    assert_eq!(state.size(), Size::new(0.0, 20.0));
    assert_eq!(state.render_units()[0].bounds.width, 0.0);
}
