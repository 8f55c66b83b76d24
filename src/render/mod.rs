mod compositor;
mod style;
mod surface;
mod theme;

pub use compositor::paint_sticks;
pub use style::{Color, LabelState, Pen};
pub use surface::{ClipShape, PaintOp, PaintSurface, RecordingSurface};
pub use theme::Theme;
