use tessera_ui_graphics::EdgeInsets;
use tessera_ui_layout::LayoutGeometry;

/// Plain geometry for exercising touch bound helpers without a layout pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GeometryFixture {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub touch_expansion: EdgeInsets,
}

impl GeometryFixture {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            touch_expansion: EdgeInsets::default(),
        }
    }

    pub fn touch_expansion(mut self, insets: EdgeInsets) -> Self {
        self.touch_expansion = insets;
        self
    }
}

impl LayoutGeometry for GeometryFixture {
    fn x(&self) -> f32 {
        self.x
    }

    fn y(&self) -> f32 {
        self.y
    }

    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn touch_expansion_left(&self) -> f32 {
        self.touch_expansion.left
    }

    fn touch_expansion_top(&self) -> f32 {
        self.touch_expansion.top
    }

    fn touch_expansion_right(&self) -> f32 {
        self.touch_expansion.right
    }

    fn touch_expansion_bottom(&self) -> f32 {
        self.touch_expansion.bottom
    }
}
