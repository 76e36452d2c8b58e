pub mod frame;
pub mod span;
pub mod style;
pub mod view;

pub use frame::{CursorPos, Frame, Line};
pub use span::Span;
pub use style::{Color, Style};
