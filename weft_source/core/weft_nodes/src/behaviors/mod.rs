pub mod button;
pub mod canvas_group;
pub mod image;
pub mod layout_element;
pub mod rect_transform;
pub mod text;
pub mod ui_attributes;

pub use button::*;
pub use canvas_group::*;
pub use image::*;
pub use layout_element::*;
pub use rect_transform::*;
pub use text::*;
pub use ui_attributes::*;
