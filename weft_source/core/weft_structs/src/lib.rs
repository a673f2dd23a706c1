pub mod color;
pub mod sprite;
pub mod vector2;
pub mod vector3;

pub use color::*;
pub use sprite::*;
pub use vector2::*;
pub use vector3::*;
