//! Built-in components.

mod horizontal_scroll;
mod solid_color;
mod stack;
mod text;
mod wrapper;

pub use horizontal_scroll::{HorizontalScroll, HorizontalScrollBuilder};
pub use solid_color::{SolidColor, SolidColorBuilder};
pub use stack::{Column, Row, Stack, StackBuilder};
pub use text::{Text, TextBuilder, DEFAULT_TEXT_SIZE};
pub use wrapper::{Wrapper, WrapperBuilder};
