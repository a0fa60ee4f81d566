use tessera_testing::GeometryFixture;
use tessera_ui::*;

#[test]
fn test_no_expansion_means_no_touch_bounds() {
    let fixture = GeometryFixture::new(5.0, 5.0, 20.0, 10.0);
    assert_eq!(LayoutState::touch_bounds(&fixture, 100.0, 100.0), None);
}

#[test]
fn test_expansion_is_applied_around_absolute_bounds() {
    let fixture = GeometryFixture::new(5.0, 5.0, 20.0, 10.0)
        .touch_expansion(EdgeInsets::from_components(2.0, 4.0, 6.0, 8.0));

    let bounds = LayoutState::touch_bounds(&fixture, 100.0, 50.0).expect("expanded");

    assert_eq!(bounds, Rect::from_ltrb(103.0, 51.0, 131.0, 73.0));
}
